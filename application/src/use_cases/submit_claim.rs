//! Submit claim use case
//!
//! Creates the source a claim is quoted from and the claim itself, on
//! behalf of the current user.

use crate::ports::activity_logger::{ActivityEvent, ActivityLogger, NoActivityLogger};
use crate::ports::fact_store::{FactStore, StoreError};
use crate::ports::identity::IdentityProvider;
use claimcheck_domain::{Claim, DomainError, NewClaim, NewSource, TopicId};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while submitting a claim
#[derive(Error, Debug)]
pub enum SubmitClaimError {
    #[error("Submitting a claim requires an authenticated user")]
    Unauthenticated,

    #[error("Invalid claim: {0}")]
    Invalid(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Input for the SubmitClaim use case
#[derive(Debug, Clone)]
pub struct SubmitClaimInput {
    pub claim: NewClaim,
    pub source: NewSource,
}

impl SubmitClaimInput {
    pub fn new(claim: NewClaim, source: NewSource) -> Self {
        Self { claim, source }
    }
}

/// Use case for submitting a new claim
pub struct SubmitClaimUseCase<S: FactStore + 'static> {
    store: Arc<S>,
    identity: Arc<dyn IdentityProvider>,
    logger: Arc<dyn ActivityLogger>,
}

impl<S: FactStore + 'static> SubmitClaimUseCase<S> {
    pub fn new(store: Arc<S>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            store,
            identity,
            logger: Arc::new(NoActivityLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ActivityLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub async fn execute(&self, input: SubmitClaimInput) -> Result<Claim, SubmitClaimError> {
        let user = self
            .identity
            .current_user()
            .ok_or(SubmitClaimError::Unauthenticated)?;

        input.claim.validate()?;
        input.source.validate()?;

        let topic = self.resolve_topic(input.claim.topic).await?;
        let source = self.store.insert_source(input.source).await?;
        let claim = self
            .store
            .insert_claim(input.claim, topic, source.id, Some(user.id))
            .await?;

        info!("User {} submitted claim {}", user.id, claim.id);
        self.logger.log(ActivityEvent::new(
            "claim_submitted",
            json!({
                "claim": claim.id,
                "source": source.id,
                "topic": claim.topic,
                "user": user.id,
            }),
        ));

        Ok(claim)
    }

    /// Explicit topic must exist; otherwise fall back to the first topic, if any.
    async fn resolve_topic(&self, requested: Option<TopicId>) -> Result<Option<TopicId>, StoreError> {
        match requested {
            Some(id) => Ok(Some(self.store.topic(id).await?.id)),
            None => {
                let fallback = self.store.first_topic().await?.map(|t| t.id);
                debug!("No topic given, defaulting to {:?}", fallback);
                Ok(fallback)
            }
        }
    }
}
