//! Error types shared across the workspace.

use uuid::Uuid;

/// Violation of the record-identity invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// The type name was empty.
    #[error("record identity requires a non-empty type name")]
    EmptyTypeName,
    /// The id was the nil uuid.
    #[error("record identity requires a non-nil id")]
    NilId,
}

/// A fault reported by the remote record service.
///
/// Carries the remote message verbatim plus the name of the service
/// operation that raised it, so wrapped errors stay traceable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation}: {message}")]
pub struct ServiceError {
    /// Service operation that faulted.
    pub operation: String,
    /// Remote fault message, preserved verbatim.
    pub message: String,
}

impl ServiceError {
    /// Wrap a remote fault.
    pub fn new(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Convenience for "no record with this id" faults.
    #[must_use]
    pub fn not_found(operation: &str, type_name: &str, id: Uuid) -> Self {
        Self::new(operation, format!("{type_name} {id} does not exist"))
    }
}
