//! Error types for the cascade engine
//!
//! Covers:
//! - Reference parsing failures (malformed input, unresolvable identity)
//! - Child query faults, wrapped with filter context
//! - Per-child mutation faults, wrapped with the child's identity
//!
//! A relationship name that resolves to nothing is deliberately absent here:
//! that case is `Option::None` on the resolver, a skip signal, not an error.

use cascade_core::{IdentityError, ServiceError};
use uuid::Uuid;

/// Main engine error type
#[derive(Debug, thiserror::Error)]
pub enum CascadeError {
    /// The reference string is neither a valid absolute URL nor a valid
    /// serialized identity. Not retryable.
    #[error("malformed record reference '{reference}': {message}")]
    MalformedReference {
        /// The offending input.
        reference: String,
        /// Original parse/deserialization message.
        message: String,
    },

    /// A URL reference lacked the required query parameters, or its type
    /// code matched no metadata. Downstream steps need an identity, so this
    /// propagates as a failure rather than being silently ignored.
    #[error("no identity could be resolved from record reference '{reference}'")]
    IdentityNotResolved {
        /// The offending input.
        reference: String,
    },

    /// The filtered child query faulted.
    #[error("child query for {child_type}.{attribute} = {parent_id} failed: {source}")]
    ChildQueryFailed {
        /// Child record type being queried.
        child_type: String,
        /// Foreign-key attribute of the filter.
        attribute: String,
        /// Parent id the filter compared against.
        parent_id: Uuid,
        /// Remote fault.
        #[source]
        source: ServiceError,
    },

    /// Mutating one child faulted. Aborts the remaining cascade.
    #[error("mutation of {child} failed: {source}")]
    MutationFailed {
        /// Identity of the child that could not be mutated.
        child: cascade_core::RecordIdentity,
        /// Remote fault.
        #[source]
        source: ServiceError,
    },

    /// Any other remote fault (metadata lookups and the like).
    #[error("record service fault: {0}")]
    Service(#[from] ServiceError),

    /// An identity invariant was violated while assembling a result.
    #[error("invalid record identity: {0}")]
    Identity(#[from] IdentityError),
}
