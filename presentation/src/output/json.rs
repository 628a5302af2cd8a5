//! JSON output, matching the read models served to API consumers

use crate::output::formatter::OutputFormatter;
use claimcheck_application::{ClaimView, ClaimWithEvidenceView, EvidenceView, ReviewEvidenceOutput};
use serde::Serialize;

/// Formats read models as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_claims(&self, claims: &[ClaimView]) -> String {
        Self::to_json(claims)
    }

    fn format_claim(&self, claim: &ClaimWithEvidenceView) -> String {
        Self::to_json(claim)
    }

    fn format_evidence(&self, evidence: &EvidenceView) -> String {
        Self::to_json(evidence)
    }

    fn format_review(&self, output: &ReviewEvidenceOutput) -> String {
        Self::to_json(output)
    }
}
