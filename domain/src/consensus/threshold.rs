//! Agreement threshold for consensus

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Share of a reviewer pool that must agree on one label, as a whole percentage
///
/// The number of agreeing reviews required out of `n` is `ceil(n * pct / 100)`,
/// computed in integer arithmetic so that e.g. 5 reviews at 80% need exactly 4.
///
/// # Example
///
/// ```
/// use claimcheck_domain::ConsensusThreshold;
///
/// let threshold = ConsensusThreshold::default(); // 80%
/// assert_eq!(threshold.required_for(5), 4);
/// assert_eq!(threshold.required_for(3), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ConsensusThreshold(u8);

impl ConsensusThreshold {
    pub const DEFAULT_PERCENT: u8 = 80;

    /// Create a threshold; `percent` must be in `1..=100`
    pub fn new(percent: u8) -> Result<Self, DomainError> {
        if (1..=100).contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(DomainError::InvalidThreshold(percent))
        }
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Minimum agreeing reviews out of `total` for a label to win
    pub fn required_for(&self, total: usize) -> usize {
        (total * self.0 as usize).div_ceil(100)
    }

    /// Whether `count` agreeing reviews out of `total` reach the threshold
    ///
    /// An empty pool never reaches consensus.
    pub fn is_reached(&self, count: usize, total: usize) -> bool {
        total > 0 && count >= self.required_for(total)
    }
}

impl Default for ConsensusThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT_PERCENT)
    }
}

impl TryFrom<u8> for ConsensusThreshold {
    type Error = DomainError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<ConsensusThreshold> for u8 {
    fn from(threshold: ConsensusThreshold) -> Self {
        threshold.0
    }
}

impl std::fmt::Display for ConsensusThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
