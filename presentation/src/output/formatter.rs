//! Output formatter trait

use super::{ConsoleFormatter, JsonFormatter};
use claimcheck_application::{ClaimView, ClaimWithEvidenceView, EvidenceView, ReviewEvidenceOutput};
use claimcheck_domain::OutputFormat;

/// Trait for formatting claims, evidence and review results
pub trait OutputFormatter {
    /// Format a list of claims without their evidence
    fn format_claims(&self, claims: &[ClaimView]) -> String;

    /// Format a claim together with its evidence
    fn format_claim(&self, claim: &ClaimWithEvidenceView) -> String;

    /// Format a single evidence item
    fn format_evidence(&self, evidence: &EvidenceView) -> String;

    /// Format the outcome of recording a review
    fn format_review(&self, output: &ReviewEvidenceOutput) -> String;
}

/// Formatter for the configured output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Full => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
