//! Cascade Core
//!
//! Shared vocabulary for the cascade toolkit:
//! - Record identities, references, and partial records
//! - Mutation requests (ownership reassignment, state transition)
//! - The `RecordService` capability trait the whole toolkit is injected with
//! - The error taxonomy shared across crates

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod mutation;
pub mod service;
pub mod types;

// Re-exports for convenience
pub use error::{IdentityError, ServiceError};
pub use mutation::{Mutation, OwnerKind};
pub use service::RecordService;
pub use types::{
    AttributeValue, EqualityCondition, Record, RecordIdentity, RelationshipDescriptor,
    RelationshipMetadata, SerializedIdentity,
};
