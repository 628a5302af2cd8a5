//! Console output formatter for claims and evidence

use crate::output::formatter::OutputFormatter;
use claimcheck_application::{
    ClaimView, ClaimWithEvidenceView, EvidenceView, ReviewEvidenceOutput, SourceView,
};
use claimcheck_domain::{ConsensusRelationship, EvidenceConsensus, EvidenceRelationship, ReviewerPool};
use colored::{ColoredString, Colorize};

/// Formats read models for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One line per claim
    pub fn format_claims(claims: &[ClaimView]) -> String {
        if claims.is_empty() {
            return format!("{}\n", "No claims yet.".dimmed());
        }

        let mut output = Self::header("Claims");
        output.push('\n');
        for claim in claims {
            let topic = claim
                .topic
                .as_ref()
                .map(|t| format!(" [{}]", t.name))
                .unwrap_or_default();
            output.push_str(&format!(
                "{} {}{}\n",
                format!("#{:<5}", claim.id.value()).cyan(),
                claim.claim_text,
                topic.dimmed()
            ));
        }
        output
    }

    /// Claim header followed by every evidence item
    pub fn format_claim(view: &ClaimWithEvidenceView) -> String {
        let claim = &view.claim;
        let mut output = Self::header(&format!("Claim #{}", claim.id));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Claim:".cyan().bold(), claim.claim_text));
        if !claim.description.is_empty() {
            output.push_str(&format!("{}\n", claim.description));
        }
        if let Some(topic) = &claim.topic {
            output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), topic.name));
        }
        output.push_str(&format!(
            "{} {}\n",
            "Quoted from:".cyan().bold(),
            Self::source_line(&claim.source_of_claim)
        ));

        output.push_str(&Self::section_header(&format!(
            "Evidence ({})",
            view.related_evidence.len()
        )));
        if view.related_evidence.is_empty() {
            output.push_str(&format!("\n{}\n", "No evidence submitted yet.".dimmed()));
        }
        for evidence in &view.related_evidence {
            output.push('\n');
            output.push_str(&Self::evidence_block(evidence));
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn format_evidence(evidence: &EvidenceView) -> String {
        let mut output = Self::header(&format!("Evidence #{}", evidence.id));
        output.push_str("\n\n");
        output.push_str(&Self::evidence_block(evidence));
        output.push_str(&Self::footer());
        output
    }

    pub fn format_review(result: &ReviewEvidenceOutput) -> String {
        let action = if result.replaced {
            "Review updated"
        } else {
            "Review recorded"
        };
        let mut output = format!(
            "{} {} {} {}\n",
            action.green().bold(),
            format!("#{}", result.review.id).cyan(),
            "for evidence".dimmed(),
            format!("#{}", result.review.evidence).cyan()
        );
        output.push_str(&format!(
            "  {} {}\n",
            "Your verdict:".bold(),
            Self::relationship_label(&result.review.deduced_evidence_relationship)
        ));
        output.push_str(&Self::consensus_lines(&result.consensus));
        output
    }

    fn evidence_block(evidence: &EvidenceView) -> String {
        let mut output = format!(
            "{} {}\n",
            format!("── Evidence #{} ──", evidence.id).yellow().bold(),
            Self::source_line(&evidence.source_of_evidence)
        );
        if !evidence.description.is_empty() {
            output.push_str(&Self::indent(&evidence.description, "  "));
            output.push('\n');
        }
        output.push_str(&Self::consensus_lines(&evidence.consensus));
        output
    }

    fn consensus_lines(consensus: &EvidenceConsensus) -> String {
        ReviewerPool::ALL
            .iter()
            .map(|&pool| {
                let label = match pool {
                    ReviewerPool::Expert => "Experts:  ",
                    ReviewerPool::Community => "Community:",
                };
                format!(
                    "  {} {} {}\n",
                    label.bold(),
                    Self::consensus_label(consensus.relationship_for(pool)),
                    format!("({} reviews)", consensus.reviews_for(pool)).dimmed()
                )
            })
            .collect()
    }

    fn source_line(source: &SourceView) -> String {
        let mut line = source.display_title().to_string();
        if !source.url.is_empty() && source.url != line {
            line.push_str(&format!(" <{}>", source.url));
        }
        if !source.authors.is_empty() {
            let names: Vec<&str> = source.authors.iter().map(|a| a.name.as_str()).collect();
            line.push_str(&format!(" by {}", names.join(", ")));
        }
        line
    }

    fn consensus_label(consensus: &ConsensusRelationship) -> ColoredString {
        match consensus.relationship() {
            Some(rel) => Self::relationship_label(rel),
            None => ConsensusRelationship::SPLIT_LABEL.dimmed(),
        }
    }

    fn relationship_label(rel: &EvidenceRelationship) -> ColoredString {
        let label = rel.as_str();
        if rel.is_supportive() {
            label.green().bold()
        } else if rel.is_opposing() {
            label.red().bold()
        } else {
            label.yellow()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_claims(&self, claims: &[ClaimView]) -> String {
        Self::format_claims(claims)
    }

    fn format_claim(&self, claim: &ClaimWithEvidenceView) -> String {
        Self::format_claim(claim)
    }

    fn format_evidence(&self, evidence: &EvidenceView) -> String {
        Self::format_evidence(evidence)
    }

    fn format_review(&self, output: &ReviewEvidenceOutput) -> String {
        Self::format_review(output)
    }
}
