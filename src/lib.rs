//! # Cursorgen
//!
//! A CLI tool that turns an extracted SDK description into a Terraform
//! generation prompt and hands it to Cursor through whichever channel works.
//!
//! ## Usage
//!
//! ```bash
//! cursorgen path/to/sdk_info.json [workspace]
//! ```
//!
//! ## Modules
//!
//! - `classify` - Pure classification of SDK methods into datasources and resources
//! - `delivery` - Ordered delivery strategies for handing the prompt to Cursor
//! - `error` - Crate-wide fatal error types
//! - `prompt` - Rendering of the generation instruction text
//! - `sdk` - Loading and interpretation of sdk_info.json
//! - `subprocess` - Unified subprocess abstraction layer for testing

pub mod classify;
pub mod delivery;
pub mod error;
pub mod prompt;
pub mod sdk;
pub mod subprocess;
