//! Typed identifiers
//!
//! Every record kind gets its own id newtype so a claim id can never be
//! passed where an evidence id is expected. On the wire they are plain integers.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of an [`Entity`](crate::catalog::Entity) (author)
    EntityId
);
define_id!(
    /// Identifier of a [`Source`](crate::catalog::Source)
    SourceId
);
define_id!(
    /// Identifier of a [`Topic`](crate::catalog::Topic)
    TopicId
);
define_id!(
    /// Identifier of a [`Claim`](crate::catalog::Claim)
    ClaimId
);
define_id!(
    /// Identifier of an [`Evidence`](crate::catalog::Evidence) item
    EvidenceId
);
define_id!(
    /// Identifier of an [`EvidenceReview`](crate::catalog::EvidenceReview)
    ReviewId
);
define_id!(
    /// Identifier of a [`User`](crate::catalog::User), also used as reviewer identity
    UserId
);
