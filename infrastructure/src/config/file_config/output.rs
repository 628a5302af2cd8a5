//! Output configuration from TOML (`[output]` section)

use claimcheck_domain::{ConfigIssue, ConfigIssueCode, OutputFormat};
use serde::{Deserialize, Serialize};

/// How read commands print claims and evidence
///
/// `format` is only a default: `--output` on the command line wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `full` or `json`; unset means `full`
    pub format: Option<OutputFormat>,
    /// Color verdicts in `full` output; JSON is never colored
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Format to use when the command line does not pick one
    pub fn resolve_format(&self, cli: Option<OutputFormat>) -> OutputFormat {
        cli.or(self.format).unwrap_or_default()
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.color && self.format == Some(OutputFormat::Json) {
            return vec![ConfigIssue::warning(
                ConfigIssueCode::IgnoredSetting {
                    field: "output.color".to_string(),
                    because: "output.format = \"json\"".to_string(),
                },
                "output.color has no effect with output.format = \"json\"",
            )];
        }
        vec![]
    }
}
