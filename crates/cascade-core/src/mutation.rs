//! Mutation requests applied to child records during a cascade.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of principal that can own a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerKind {
    /// An individual user.
    User,
    /// A team of users.
    Team,
}

impl OwnerKind {
    /// Logical type name of the owning record.
    #[inline]
    #[must_use]
    pub fn type_name(self) -> &'static str {
        match self {
            Self::User => "systemuser",
            Self::Team => "team",
        }
    }
}

/// A uniform mutation to apply to every child of a cascade.
///
/// The cascade engine never inspects the variant; it only hands the request
/// to the record service per target identity. Callers pick the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    /// Reassign ownership of the record.
    AssignOwner {
        /// Id of the new owner.
        owner_id: Uuid,
        /// Whether the owner is a user or a team.
        owner_kind: OwnerKind,
    },
    /// Transition the record's lifecycle state.
    SetLifecycleState {
        /// Target state code.
        state: i32,
        /// Target status code within that state.
        status: i32,
    },
}
