//! Expert rosters and reviewer pools

use crate::core::ids::UserId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which side of the expert split a consensus is computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewerPool {
    /// Reviewers on the topic's expert roster
    Expert,
    /// Everyone else
    Community,
}

impl ReviewerPool {
    pub const ALL: [ReviewerPool; 2] = [ReviewerPool::Expert, ReviewerPool::Community];

    /// Whether `reviewer` belongs to this pool under `roster`
    pub fn includes(&self, roster: &ExpertRoster, reviewer: UserId) -> bool {
        match self {
            ReviewerPool::Expert => roster.contains(reviewer),
            ReviewerPool::Community => !roster.contains(reviewer),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewerPool::Expert => "expert",
            ReviewerPool::Community => "community",
        }
    }
}

impl std::fmt::Display for ReviewerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reviewers considered authoritative for one topic
///
/// A topic without a roster behaves like an empty roster, which puts every
/// reviewer in the community pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpertRoster(BTreeSet<UserId>);

impl ExpertRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, user: UserId) -> bool {
        self.0.contains(&user)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reviews whose reviewer falls in `pool`, in their original order
    pub fn partition<'a, R, F>(&self, pool: ReviewerPool, reviews: &'a [R], reviewer: F) -> Vec<&'a R>
    where
        F: Fn(&R) -> UserId,
    {
        reviews
            .iter()
            .filter(|review| pool.includes(self, reviewer(review)))
            .collect()
    }
}

impl FromIterator<UserId> for ExpertRoster {
    fn from_iter<I: IntoIterator<Item = UserId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(ids: &[u64]) -> ExpertRoster {
        ids.iter().copied().map(UserId).collect()
    }

    #[test]
    fn test_pools_are_complementary() {
        let experts = roster(&[1, 2]);
        for user in [UserId(1), UserId(3)] {
            let in_expert = ReviewerPool::Expert.includes(&experts, user);
            let in_community = ReviewerPool::Community.includes(&experts, user);
            assert_ne!(in_expert, in_community);
        }
    }

    #[test]
    fn test_empty_roster_puts_everyone_in_community() {
        let experts = ExpertRoster::new();
        assert!(ReviewerPool::Community.includes(&experts, UserId(9)));
        assert!(!ReviewerPool::Expert.includes(&experts, UserId(9)));
    }

    #[test]
    fn test_partition_keeps_order() {
        let experts = roster(&[2]);
        let reviews = vec![(UserId(1), "a"), (UserId(2), "b"), (UserId(3), "c")];

        let community = experts.partition(ReviewerPool::Community, &reviews, |r| r.0);
        assert_eq!(community.iter().map(|r| r.1).collect::<Vec<_>>(), ["a", "c"]);

        let expert = experts.partition(ReviewerPool::Expert, &reviews, |r| r.0);
        assert_eq!(expert.len(), 1);
    }

    #[test]
    fn test_roster_serializes_as_list() {
        let json = serde_json::to_string(&roster(&[3, 1])).unwrap();
        assert_eq!(json, "[1,3]");
    }

    #[test]
    fn test_pool_display() {
        assert_eq!(ReviewerPool::Expert.to_string(), "expert");
        assert_eq!(ReviewerPool::Community.to_string(), "community");
    }
}
