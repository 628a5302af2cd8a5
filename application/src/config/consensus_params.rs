//! Consensus parameters: read-model rendering control.
//!
//! [`ConsensusParams`] groups the static parameters that control how
//! [`RenderEvidenceUseCase`](crate::use_cases::render_evidence::RenderEvidenceUseCase)
//! derives consensus fields. These are application-layer concerns, not
//! persisted data.

use claimcheck_domain::ConsensusThreshold;
use serde::{Deserialize, Serialize};

/// Consensus rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusParams {
    /// Share of a reviewer pool that must agree on a label.
    pub threshold: ConsensusThreshold,
    /// Maximum evidence items rendered concurrently for one claim.
    pub max_concurrent_renders: usize,
}

impl Default for ConsensusParams {
    fn default() -> Self {
        Self {
            threshold: ConsensusThreshold::default(),
            max_concurrent_renders: 8,
        }
    }
}

impl ConsensusParams {
    // ==================== Builder Methods ====================

    pub fn with_threshold(mut self, threshold: ConsensusThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Zero is treated as one.
    pub fn with_max_concurrent_renders(mut self, max: usize) -> Self {
        self.max_concurrent_renders = max.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = ConsensusParams::default();
        assert_eq!(params.threshold.percent(), 80);
        assert_eq!(params.max_concurrent_renders, 8);
    }

    #[test]
    fn test_builder() {
        let params = ConsensusParams::default()
            .with_threshold(ConsensusThreshold::new(90).unwrap())
            .with_max_concurrent_renders(0);

        assert_eq!(params.threshold.percent(), 90);
        assert_eq!(params.max_concurrent_renders, 1);
    }
}
