//! Consensus configuration from TOML (`[consensus]` section)

use claimcheck_application::ConsensusParams;
use claimcheck_domain::{ConfigIssue, ConfigIssueCode, ConsensusThreshold};
use serde::{Deserialize, Serialize};

/// Consensus configuration from TOML.
///
/// # Example
///
/// ```toml
/// [consensus]
/// threshold_percent = 80
/// max_concurrent_renders = 8
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConsensusConfig {
    /// Share of a reviewer pool that must agree, in whole percent (1-100).
    pub threshold_percent: i64,
    /// Upper bound on evidence items rendered at once for a claim.
    pub max_concurrent_renders: i64,
}

impl Default for FileConsensusConfig {
    fn default() -> Self {
        let params = ConsensusParams::default();
        Self {
            threshold_percent: i64::from(params.threshold.percent()),
            max_concurrent_renders: params.max_concurrent_renders as i64,
        }
    }
}

impl FileConsensusConfig {
    /// Convert to application `ConsensusParams`, returning validation issues.
    ///
    /// An out-of-range threshold is an error, since silently changing what
    /// counts as consensus would misreport verdicts. A bad concurrency limit
    /// only warns and falls back to the default.
    pub fn to_params(&self) -> (ConsensusParams, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut params = ConsensusParams::default();

        match u8::try_from(self.threshold_percent)
            .ok()
            .and_then(|p| ConsensusThreshold::new(p).ok())
        {
            Some(threshold) => params = params.with_threshold(threshold),
            None => issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "consensus.threshold_percent".to_string(),
                    value: self.threshold_percent,
                    min: 1,
                    max: 100,
                },
                format!(
                    "consensus.threshold_percent must be between 1 and 100, got {}",
                    self.threshold_percent
                ),
            )),
        }

        match usize::try_from(self.max_concurrent_renders) {
            Ok(n) if n >= 1 => params = params.with_max_concurrent_renders(n),
            _ => issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "consensus.max_concurrent_renders".to_string(),
                    value: self.max_concurrent_renders,
                    min: 1,
                    max: i64::MAX,
                },
                format!(
                    "consensus.max_concurrent_renders must be at least 1, got {}; using {}",
                    self.max_concurrent_renders, params.max_concurrent_renders
                ),
            )),
        }

        (params, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consensus_config_default() {
        let config = FileConsensusConfig::default();
        assert_eq!(config.threshold_percent, 80);
        assert_eq!(config.max_concurrent_renders, 8);

        let (params, issues) = config.to_params();
        assert!(issues.is_empty());
        assert_eq!(params.threshold, ConsensusThreshold::default());
    }

    #[test]
    fn test_consensus_config_custom_threshold() {
        let config = FileConsensusConfig {
            threshold_percent: 66,
            max_concurrent_renders: 2,
        };
        let (params, issues) = config.to_params();
        assert!(issues.is_empty());
        assert_eq!(params.threshold.percent(), 66);
        assert_eq!(params.max_concurrent_renders, 2);
    }

    #[test]
    fn test_threshold_out_of_range_is_error() {
        for bad in [0, 101, -5, 1000] {
            let config = FileConsensusConfig {
                threshold_percent: bad,
                ..Default::default()
            };
            let (params, issues) = config.to_params();
            assert_eq!(issues.len(), 1, "threshold {}", bad);
            assert!(issues[0].is_error());
            assert!(matches!(
                &issues[0].code,
                ConfigIssueCode::OutOfRange { field, value, .. }
                    if field == "consensus.threshold_percent" && *value == bad
            ));
            assert_eq!(params.threshold, ConsensusThreshold::default());
        }
    }

    #[test]
    fn test_zero_concurrency_warns() {
        let config = FileConsensusConfig {
            max_concurrent_renders: 0,
            ..Default::default()
        };
        let (params, issues) = config.to_params();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert_eq!(params.max_concurrent_renders, 8);
    }
}
