//! Consensus computation
//!
//! Given every review attached to one evidence item, decide per reviewer pool
//! whether enough reviewers agree on a single relationship label.
//!
//! ```text
//!   reviews ──► partition by pool ──► tally (first-seen order) ──► threshold ──► label | SPLIT
//! ```
//!
//! Everything here is a pure function of its inputs. Results are derived on
//! read and never stored.

use super::relationship::{ConsensusRelationship, EvidenceRelationship};
use super::roster::{ExpertRoster, ReviewerPool};
use super::threshold::ConsensusThreshold;
use crate::core::ids::UserId;
use serde::{Deserialize, Serialize};

/// A single reviewer's judgment, as seen by the consensus engine
pub trait ReviewJudgment {
    fn reviewer(&self) -> UserId;
    fn relationship(&self) -> &EvidenceRelationship;
}

impl ReviewJudgment for (UserId, EvidenceRelationship) {
    fn reviewer(&self) -> UserId {
        self.0
    }

    fn relationship(&self) -> &EvidenceRelationship {
        &self.1
    }
}

impl<R: ReviewJudgment> ReviewJudgment for &R {
    fn reviewer(&self) -> UserId {
        (*self).reviewer()
    }

    fn relationship(&self) -> &EvidenceRelationship {
        (*self).relationship()
    }
}

/// Per-label counts, kept in the order each label was first seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipTally {
    counts: Vec<(EvidenceRelationship, usize)>,
    total: usize,
}

impl RelationshipTally {
    pub fn from_relationships<'a, I>(relationships: I) -> Self
    where
        I: IntoIterator<Item = &'a EvidenceRelationship>,
    {
        let mut tally = Self::default();
        for rel in relationships {
            tally.add(rel);
        }
        tally
    }

    pub fn add(&mut self, rel: &EvidenceRelationship) {
        self.total += 1;
        match self.counts.iter_mut().find(|(seen, _)| seen == rel) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((rel.clone(), 1)),
        }
    }

    /// Number of reviews tallied
    pub fn total(&self) -> usize {
        self.total
    }

    /// Labels with their counts in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&EvidenceRelationship, usize)> {
        self.counts.iter().map(|(rel, count)| (rel, *count))
    }

    /// First label, in first-seen order, whose count reaches `threshold`
    pub fn first_reaching(&self, threshold: ConsensusThreshold) -> Option<&EvidenceRelationship> {
        self.iter()
            .find(|(_, count)| threshold.is_reached(*count, self.total))
            .map(|(rel, _)| rel)
    }

    /// Resolve this tally into a consensus verdict
    pub fn verdict(&self, threshold: ConsensusThreshold) -> ConsensusRelationship {
        match self.first_reaching(threshold) {
            Some(rel) => ConsensusRelationship::Agreed(rel.clone()),
            None => ConsensusRelationship::Split,
        }
    }
}

/// Consensus among the reviews whose reviewer satisfies `is_member`, at the default 80%
///
/// # Example
///
/// ```
/// use claimcheck_domain::{compute_consensus, ConsensusRelationship, EvidenceRelationship, UserId};
///
/// let reviews = vec![
///     (UserId(1), EvidenceRelationship::Supports),
///     (UserId(2), EvidenceRelationship::Supports),
///     (UserId(3), EvidenceRelationship::Supports),
///     (UserId(4), EvidenceRelationship::Supports),
///     (UserId(5), EvidenceRelationship::Disputes),
/// ];
/// let verdict = compute_consensus(&reviews, |_| true);
/// assert_eq!(verdict, ConsensusRelationship::Agreed(EvidenceRelationship::Supports));
/// ```
pub fn compute_consensus<R, F>(reviews: &[R], is_member: F) -> ConsensusRelationship
where
    R: ReviewJudgment,
    F: Fn(UserId) -> bool,
{
    compute_consensus_with_threshold(reviews, is_member, ConsensusThreshold::default())
}

/// Consensus among the reviews whose reviewer satisfies `is_member`
///
/// An empty selection is `SPLIT`. Otherwise the first label (in the order
/// labels were first encountered) whose count reaches the threshold wins.
pub fn compute_consensus_with_threshold<R, F>(
    reviews: &[R],
    is_member: F,
    threshold: ConsensusThreshold,
) -> ConsensusRelationship
where
    R: ReviewJudgment,
    F: Fn(UserId) -> bool,
{
    let tally = RelationshipTally::from_relationships(
        reviews
            .iter()
            .filter(|review| is_member(review.reviewer()))
            .map(|review| review.relationship()),
    );
    tally.verdict(threshold)
}

/// The four consensus fields surfaced on an evidence read model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceConsensus {
    pub expert_consensus_relationship: ConsensusRelationship,
    pub num_expert_reviews: usize,
    pub community_consensus_relationship: ConsensusRelationship,
    pub num_community_reviews: usize,
}

impl EvidenceConsensus {
    /// Compute both pools for one evidence item
    pub fn compute<R: ReviewJudgment>(
        reviews: &[R],
        roster: &ExpertRoster,
        threshold: ConsensusThreshold,
    ) -> Self {
        let expert = Self::tally_pool(reviews, roster, ReviewerPool::Expert);
        let community = Self::tally_pool(reviews, roster, ReviewerPool::Community);

        Self {
            expert_consensus_relationship: expert.verdict(threshold),
            num_expert_reviews: expert.total(),
            community_consensus_relationship: community.verdict(threshold),
            num_community_reviews: community.total(),
        }
    }

    /// Verdict for one pool
    pub fn relationship_for(&self, pool: ReviewerPool) -> &ConsensusRelationship {
        match pool {
            ReviewerPool::Expert => &self.expert_consensus_relationship,
            ReviewerPool::Community => &self.community_consensus_relationship,
        }
    }

    /// Review count for one pool
    pub fn reviews_for(&self, pool: ReviewerPool) -> usize {
        match pool {
            ReviewerPool::Expert => self.num_expert_reviews,
            ReviewerPool::Community => self.num_community_reviews,
        }
    }

    pub fn total_reviews(&self) -> usize {
        self.num_expert_reviews + self.num_community_reviews
    }

    fn tally_pool<R: ReviewJudgment>(
        reviews: &[R],
        roster: &ExpertRoster,
        pool: ReviewerPool,
    ) -> RelationshipTally {
        RelationshipTally::from_relationships(
            roster
                .partition(pool, reviews, |r| r.reviewer())
                .into_iter()
                .map(|r| r.relationship()),
        )
    }
}

impl Default for EvidenceConsensus {
    fn default() -> Self {
        Self {
            expert_consensus_relationship: ConsensusRelationship::Split,
            num_expert_reviews: 0,
            community_consensus_relationship: ConsensusRelationship::Split,
            num_community_reviews: 0,
        }
    }
}
