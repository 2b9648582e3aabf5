use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error};

use cursorgen::classify;
use cursorgen::delivery::{DeliveryContext, Dispatcher};
use cursorgen::error::Error;
use cursorgen::prompt;
use cursorgen::sdk::SdkInfo;
use cursorgen::subprocess::SubprocessManager;

/// Generate Terraform provider code through Cursor without manual intervention
#[derive(Parser)]
#[command(name = "cursorgen")]
#[command(about = "Classifies SDK methods and sends a Terraform generation prompt to Cursor", long_about = None)]
struct Cli {
    /// Path to the sdk_info.json produced by the SDK extractor
    sdk_info: PathBuf,

    /// Workspace the generated code targets (defaults to the current directory)
    workspace: Option<PathBuf>,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    if let Err(e) = run(cli).await {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let workspace = match cli.workspace {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    println!("🚀 Automated Terraform code generation");
    println!("📋 SDK info: {}", cli.sdk_info.display());
    println!("📁 Workspace: {}", workspace.display());
    println!();

    let sdk_info = SdkInfo::load(&cli.sdk_info)?;
    let namespace = sdk_info.namespace();
    let methods = sdk_info.methods();
    let classification = classify::classify(&methods);

    println!("✅ Loaded SDK info for namespace: {namespace}");
    println!(
        "   Found {} API method(s), {} datasource(s), {} resource(s)",
        methods.len(),
        classification.datasources.len(),
        classification.resources.len()
    );
    debug!(
        "datasources: {:?}",
        classification
            .datasources
            .iter()
            .map(|ds| ds.name.as_str())
            .collect::<Vec<_>>()
    );
    debug!(
        "resources: {:?}",
        classification
            .resources
            .iter()
            .map(|r| r.name())
            .collect::<Vec<_>>()
    );

    let payload = prompt::render(&namespace, &classification, &cli.sdk_info);
    println!();
    println!("📝 Generated prompt:");
    println!("{}", "-".repeat(80));
    println!("{payload}");
    println!("{}", "-".repeat(80));
    println!();

    let subprocess = SubprocessManager::production();
    let dispatcher = Dispatcher::production(&subprocess);
    let ctx = DeliveryContext { workspace };

    let report = dispatcher.dispatch(&payload, &ctx).await;
    for failure in &report.failures {
        println!("❌ {failure}");
    }

    match report.delivered_via {
        Some(strategy) => {
            println!("✨ Prompt sent via {strategy}");
            if !report.detail.is_empty() {
                println!("   {}", report.detail);
            }
            Ok(())
        }
        None => {
            println!("⚠️  All delivery methods failed.");
            println!();
            println!("   Paste the prompt into the composer manually:");
            println!();
            println!("{payload}");
            Err(Error::AllDeliveryFailed {
                failures: report.failures,
            }
            .into())
        }
    }
}
