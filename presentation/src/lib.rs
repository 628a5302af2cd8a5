//! Presentation layer for claimcheck
//!
//! This crate contains CLI definitions and output formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, ReviewArgs, SourceArgs};
pub use output::{ConsoleFormatter, JsonFormatter, OutputFormatter, formatter_for, set_color_enabled};
