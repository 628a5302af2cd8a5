//! Identity adapter
//!
//! The CLI acts on behalf of one configured user for the whole run.

use crate::store::JsonFactStore;
use claimcheck_application::{IdentityProvider, StoreError};
use claimcheck_domain::{User, UserId};
use tracing::debug;

/// Identity fixed at startup
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user: Option<User>,
}

impl StaticIdentity {
    pub fn new(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Resolve `id` against the users in the dataset
    ///
    /// `None` gives an anonymous identity; an unknown id is an error.
    pub async fn resolve(store: &JsonFactStore, id: Option<UserId>) -> Result<Self, StoreError> {
        match id {
            Some(id) => {
                let user = store.user(id).await?;
                debug!("Acting as user {} ({})", user.id, user.username);
                Ok(Self::new(user))
            }
            None => Ok(Self::anonymous()),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}
