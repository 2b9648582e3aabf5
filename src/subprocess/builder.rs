use std::path::Path;
use std::time::Duration;

use crate::subprocess::ProcessCommand;

pub struct ProcessCommandBuilder {
    command: ProcessCommand,
}

impl ProcessCommandBuilder {
    pub fn new(program: &str) -> Self {
        Self {
            command: ProcessCommand {
                program: program.to_string(),
                args: Vec::new(),
                working_dir: None,
                timeout: None,
                stdin: None,
            },
        }
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.command.args.push(arg.to_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.command
            .args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.command.working_dir = Some(dir.to_path_buf());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.command.timeout = Some(timeout);
        self
    }

    pub fn stdin(mut self, input: String) -> Self {
        self.command.stdin = Some(input);
        self
    }

    pub fn build(self) -> ProcessCommand {
        self.command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_all_fields() {
        let command = ProcessCommandBuilder::new("osascript")
            .arg("-e")
            .arg("tell application \"Cursor\" to activate")
            .current_dir(Path::new("/tmp"))
            .timeout(Duration::from_secs(60))
            .stdin("payload".to_string())
            .build();

        assert_eq!(command.program, "osascript");
        assert_eq!(command.args.len(), 2);
        assert_eq!(command.working_dir.as_deref(), Some(Path::new("/tmp")));
        assert_eq!(command.timeout, Some(Duration::from_secs(60)));
        assert_eq!(command.stdin.as_deref(), Some("payload"));
    }
}
