//! Configuration value objects shared by every layer.
//!
//! - [`OutputFormat`]: how read models are rendered
//! - [`validation`]: structured configuration issues

pub mod output_format;
pub mod validation;

pub use output_format::OutputFormat;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
