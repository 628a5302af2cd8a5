//! Users as supplied by the upstream identity provider

use crate::core::ids::UserId;
use serde::{Deserialize, Serialize};

/// An authenticated user
///
/// Expertise is not stored on the user; it is a per-topic property held in
/// each topic's [`ExpertRoster`](crate::consensus::ExpertRoster).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{})", self.username, self.id)
    }
}
