//! Application layer for claimcheck
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ConsensusParams;
pub use ports::{
    activity_logger::{ActivityEvent, ActivityLogger, NoActivityLogger},
    fact_store::{FactStore, ReviewUpsert, StoreError},
    identity::{AnonymousIdentity, IdentityProvider},
};
pub use use_cases::read_model::{
    ClaimView, ClaimWithEvidenceView, EntityView, EvidenceView, SourceView, TopicView,
};
pub use use_cases::render_evidence::{RenderError, RenderEvidenceUseCase};
pub use use_cases::review_evidence::{
    ReviewEvidenceError, ReviewEvidenceInput, ReviewEvidenceOutput, ReviewEvidenceUseCase,
};
pub use use_cases::submit_claim::{SubmitClaimError, SubmitClaimInput, SubmitClaimUseCase};
pub use use_cases::submit_evidence::{
    SubmitEvidenceError, SubmitEvidenceInput, SubmitEvidenceOutput, SubmitEvidenceUseCase,
};
