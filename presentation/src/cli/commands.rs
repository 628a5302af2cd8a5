//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use claimcheck_domain::{
    ClaimId, DomainError, EntityId, EvidenceRelationship, NewClaim, NewEvidence, NewReview,
    NewSource, TopicId, UserId,
};
use std::path::PathBuf;

/// Output format for rendered claims and evidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary with colored verdicts
    Full,
    /// JSON read model, as served to API consumers
    Json,
}

impl From<OutputFormat> for claimcheck_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => claimcheck_domain::OutputFormat::Full,
            OutputFormat::Json => claimcheck_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for claimcheck
#[derive(Parser, Debug)]
#[command(name = "claimcheck")]
#[command(author, version, about = "Fact-checking catalog with expert and community consensus")]
#[command(long_about = r#"
claimcheck keeps a catalog of claims, the sources they were quoted from, and
evidence for or against them. Reviewers judge how each evidence item relates
to its claim; expert and community verdicts are derived on every read.

A pool reaches consensus when at least the threshold share of its reviewers
(80% by default) agree on one relationship. Otherwise it is SPLIT.

Configuration files are loaded from (in priority order):
1. CLAIMCHECK_* env     e.g. CLAIMCHECK_CONSENSUS__THRESHOLD_PERCENT=75
2. --config <path>      Explicit config file
3. ./claimcheck.toml    Project-level config
4. ~/.config/claimcheck/config.toml   Global config

Example:
  claimcheck claims
  claimcheck claim 12 --output json
  claimcheck --as-user 3 review 40 supports --comments "Large RCT"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON dataset to read from and write to
    #[arg(long, global = true, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Id of the user that writes are attributed to
    #[arg(long, global = true, value_name = "USER_ID")]
    pub as_user: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors; command output is still printed
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    pub fn user_id(&self) -> Option<UserId> {
        self.as_user.map(UserId)
    }

    /// Log level implied by `--quiet` and `-v`; quiet wins over verbose
    pub fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, 2) => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List claims, newest first
    Claims,

    /// Show a claim with all of its evidence
    Claim {
        id: u64,
    },

    /// Show one evidence item and its consensus
    Evidence {
        id: u64,
    },

    /// Record your review of an evidence item (replaces any earlier one)
    Review {
        evidence_id: u64,

        /// PROVES, SUPPORTS, UNRELATED, INCONCLUSIVE, DISPUTES or DISPROVES
        #[arg(value_parser = parse_relationship)]
        relationship: EvidenceRelationship,

        #[command(flatten)]
        details: ReviewArgs,
    },

    /// Submit a new claim together with the source it was quoted from
    SubmitClaim {
        /// The claim, verbatim (at most 200 characters)
        claim_text: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Topic id; defaults to the first topic
        #[arg(long)]
        topic: Option<u64>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Submit evidence for a claim, optionally with your own review
    SubmitEvidence {
        claim_id: u64,

        #[arg(long, default_value = "")]
        description: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Your review of the new evidence
        #[arg(long, value_name = "RELATIONSHIP", value_parser = parse_relationship)]
        relationship: Option<EvidenceRelationship>,

        #[command(flatten)]
        review: ReviewArgs,
    },
}

/// Strict label parser; unknown labels are only tolerated when reading stored data
fn parse_relationship(label: &str) -> Result<EvidenceRelationship, DomainError> {
    label.parse()
}

/// Optional review fields
#[derive(Args, Debug, Clone, Default)]
pub struct ReviewArgs {
    /// Free-text comments (at most 500 characters)
    #[arg(long, default_value = "")]
    pub comments: String,

    /// Whether the evidence source looks reliable
    #[arg(long)]
    pub reliable: Option<bool>,

    /// How far the source can be trusted, in your own words
    #[arg(long, value_name = "DEGREE")]
    pub source_degree: Option<String>,
}

impl ReviewArgs {
    pub fn to_review(&self, relationship: EvidenceRelationship) -> NewReview {
        let mut review = NewReview::new(relationship).with_comments(self.comments.clone());
        if let Some(reliable) = self.reliable {
            review = review.with_reliability(reliable);
        }
        if let Some(degree) = &self.source_degree {
            review = review.with_source_degree(degree.clone());
        }
        review
    }
}

/// Fields describing a newly cited source
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Where the source can be found
    #[arg(long, default_value = "")]
    pub url: String,

    #[arg(long, default_value = "")]
    pub title: String,

    /// Description of the source, required when there is no URL
    #[arg(long = "source-description", default_value = "")]
    pub source_description: String,

    /// Author entity id (can be specified multiple times)
    #[arg(long = "author", value_name = "ENTITY_ID")]
    pub authors: Vec<u64>,
}

impl SourceArgs {
    pub fn to_source(&self) -> NewSource {
        NewSource::new(self.url.clone())
            .with_title(self.title.clone())
            .with_description(self.source_description.clone())
            .with_authors(self.authors.iter().copied().map(EntityId))
    }
}

/// Build the claim draft for `submit-claim`
pub fn claim_draft(claim_text: &str, description: &str, topic: Option<u64>) -> NewClaim {
    let draft = NewClaim::new(claim_text).with_description(description);
    match topic {
        Some(id) => draft.with_topic(TopicId(id)),
        None => draft,
    }
}

/// Build the evidence draft for `submit-evidence`
pub fn evidence_draft(claim_id: u64, description: &str) -> NewEvidence {
    NewEvidence::new(ClaimId(claim_id)).with_description(description)
}
