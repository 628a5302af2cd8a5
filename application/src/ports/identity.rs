//! Identity port
//!
//! Authentication happens upstream. The application only asks who the
//! current user is; `None` means the request is anonymous.

use claimcheck_domain::User;

/// Supplies the user on whose behalf a use case runs
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Option<User>;
}

/// Identity provider for read-only access
pub struct AnonymousIdentity;

impl IdentityProvider for AnonymousIdentity {
    fn current_user(&self) -> Option<User> {
        None
    }
}
