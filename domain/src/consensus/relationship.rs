//! Relationship labels
//!
//! A reviewer judges how a piece of evidence relates to its claim by picking
//! one of six labels. Consensus over those judgments is either one of the
//! same labels or the `SPLIT` sentinel.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How a piece of evidence relates to the claim it is attached to
///
/// The wire form is the upper-case label (`"PROVES"`, `"SUPPORTS"`, ...).
/// Stored data may contain labels this build does not know about; those
/// deserialize into [`EvidenceRelationship::Unrecognized`] and are carried
/// through untouched so aggregation never fails on them.
///
/// # Example
///
/// ```
/// use claimcheck_domain::EvidenceRelationship;
///
/// let rel: EvidenceRelationship = "supports".parse().unwrap();
/// assert_eq!(rel, EvidenceRelationship::Supports);
/// assert_eq!(rel.as_str(), "SUPPORTS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EvidenceRelationship {
    Proves,
    Supports,
    Unrelated,
    Inconclusive,
    Disputes,
    Disproves,
    /// A stored label outside the known set, kept verbatim
    Unrecognized(String),
}

impl EvidenceRelationship {
    /// The six labels a reviewer can choose from, strongest support first
    pub const KNOWN: [EvidenceRelationship; 6] = [
        EvidenceRelationship::Proves,
        EvidenceRelationship::Supports,
        EvidenceRelationship::Unrelated,
        EvidenceRelationship::Inconclusive,
        EvidenceRelationship::Disputes,
        EvidenceRelationship::Disproves,
    ];

    /// Wire label
    pub fn as_str(&self) -> &str {
        match self {
            EvidenceRelationship::Proves => "PROVES",
            EvidenceRelationship::Supports => "SUPPORTS",
            EvidenceRelationship::Unrelated => "UNRELATED",
            EvidenceRelationship::Inconclusive => "INCONCLUSIVE",
            EvidenceRelationship::Disputes => "DISPUTES",
            EvidenceRelationship::Disproves => "DISPROVES",
            EvidenceRelationship::Unrecognized(label) => label,
        }
    }

    /// Whether this is one of the six known labels
    pub fn is_known(&self) -> bool {
        !matches!(self, EvidenceRelationship::Unrecognized(_))
    }

    /// Whether the label argues in favour of the claim
    pub fn is_supportive(&self) -> bool {
        matches!(
            self,
            EvidenceRelationship::Proves | EvidenceRelationship::Supports
        )
    }

    /// Whether the label argues against the claim
    pub fn is_opposing(&self) -> bool {
        matches!(
            self,
            EvidenceRelationship::Disputes | EvidenceRelationship::Disproves
        )
    }

    fn lookup(label: &str) -> Option<Self> {
        Self::KNOWN
            .iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(label))
            .cloned()
    }
}

impl From<String> for EvidenceRelationship {
    fn from(label: String) -> Self {
        Self::lookup(&label).unwrap_or(EvidenceRelationship::Unrecognized(label))
    }
}

impl From<EvidenceRelationship> for String {
    fn from(rel: EvidenceRelationship) -> Self {
        match rel {
            EvidenceRelationship::Unrecognized(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for EvidenceRelationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strict parse for user input: unknown labels are rejected
impl std::str::FromStr for EvidenceRelationship {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s.trim()).ok_or_else(|| DomainError::UnknownRelationship(s.to_string()))
    }
}

/// Aggregate verdict for one reviewer pool
///
/// Serializes as the agreed label, or `"SPLIT"` when no label reached the
/// threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConsensusRelationship {
    Agreed(EvidenceRelationship),
    Split,
}

impl ConsensusRelationship {
    pub const SPLIT_LABEL: &'static str = "SPLIT";

    pub fn is_split(&self) -> bool {
        matches!(self, ConsensusRelationship::Split)
    }

    /// The agreed label, if any
    pub fn relationship(&self) -> Option<&EvidenceRelationship> {
        match self {
            ConsensusRelationship::Agreed(rel) => Some(rel),
            ConsensusRelationship::Split => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ConsensusRelationship::Agreed(rel) => rel.as_str(),
            ConsensusRelationship::Split => Self::SPLIT_LABEL,
        }
    }
}

impl From<String> for ConsensusRelationship {
    fn from(label: String) -> Self {
        if label.eq_ignore_ascii_case(Self::SPLIT_LABEL) {
            ConsensusRelationship::Split
        } else {
            ConsensusRelationship::Agreed(label.into())
        }
    }
}

impl From<ConsensusRelationship> for String {
    fn from(consensus: ConsensusRelationship) -> Self {
        match consensus {
            ConsensusRelationship::Agreed(rel) => rel.into(),
            ConsensusRelationship::Split => ConsensusRelationship::SPLIT_LABEL.to_string(),
        }
    }
}

impl From<EvidenceRelationship> for ConsensusRelationship {
    fn from(rel: EvidenceRelationship) -> Self {
        ConsensusRelationship::Agreed(rel)
    }
}

impl std::fmt::Display for ConsensusRelationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_upper_case_label() {
        let json = serde_json::to_string(&EvidenceRelationship::Disproves).unwrap();
        assert_eq!(json, "\"DISPROVES\"");
    }

    #[test]
    fn test_deserialize_unknown_label_is_kept() {
        let rel: EvidenceRelationship = serde_json::from_str("\"MISLEADING\"").unwrap();
        assert_eq!(
            rel,
            EvidenceRelationship::Unrecognized("MISLEADING".to_string())
        );
        assert!(!rel.is_known());
        assert_eq!(serde_json::to_string(&rel).unwrap(), "\"MISLEADING\"");
    }

    #[test]
    fn test_parse_is_case_insensitive_and_strict() {
        assert_eq!(
            "Inconclusive".parse::<EvidenceRelationship>().ok(),
            Some(EvidenceRelationship::Inconclusive)
        );
        assert_eq!(
            "misleading".parse::<EvidenceRelationship>(),
            Err(DomainError::UnknownRelationship("misleading".to_string()))
        );
    }

    #[test]
    fn test_known_labels_round_trip_through_string() {
        for rel in EvidenceRelationship::KNOWN {
            let label: String = rel.clone().into();
            assert_eq!(EvidenceRelationship::from(label), rel);
        }
    }

    #[test]
    fn test_supportive_and_opposing() {
        assert!(EvidenceRelationship::Proves.is_supportive());
        assert!(EvidenceRelationship::Disputes.is_opposing());
        assert!(!EvidenceRelationship::Unrelated.is_supportive());
        assert!(!EvidenceRelationship::Inconclusive.is_opposing());
    }

    #[test]
    fn test_consensus_split_wire_form() {
        assert_eq!(
            serde_json::to_string(&ConsensusRelationship::Split).unwrap(),
            "\"SPLIT\""
        );
        let agreed: ConsensusRelationship = serde_json::from_str("\"SUPPORTS\"").unwrap();
        assert_eq!(
            agreed,
            ConsensusRelationship::Agreed(EvidenceRelationship::Supports)
        );
        let split: ConsensusRelationship = serde_json::from_str("\"SPLIT\"").unwrap();
        assert!(split.is_split());
        assert!(split.relationship().is_none());
    }
}
