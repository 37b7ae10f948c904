//! Error type for the workflow activities.
//!
//! Every wrapped fault names the activity it escaped from, mirroring how
//! the entry points report failures upstream.

use cascade_core::{IdentityError, ServiceError};
use cascade_engine::CascadeError;
use uuid::Uuid;

/// Main activity error type
#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    /// The underlying engine call failed.
    #[error("{activity}: {source}")]
    Cascade {
        /// Activity the fault escaped from.
        activity: &'static str,
        /// Engine failure.
        #[source]
        source: CascadeError,
    },

    /// A direct record-service call failed.
    #[error("{activity}: {source}")]
    Service {
        /// Activity the fault escaped from.
        activity: &'static str,
        /// Remote fault.
        #[source]
        source: ServiceError,
    },

    /// Template instantiation produced no records to create.
    #[error("{activity}: template {template_id} produced no records")]
    EmptyTemplate {
        /// Activity the fault escaped from.
        activity: &'static str,
        /// Template that came back empty.
        template_id: Uuid,
    },

    /// An identity invariant was violated while assembling a result.
    #[error("{activity}: {source}")]
    Identity {
        /// Activity the fault escaped from.
        activity: &'static str,
        /// Invariant violation.
        #[source]
        source: IdentityError,
    },
}

impl ActivityError {
    pub(crate) fn cascade(activity: &'static str) -> impl FnOnce(CascadeError) -> Self {
        move |source| Self::Cascade { activity, source }
    }

    pub(crate) fn service(activity: &'static str) -> impl FnOnce(ServiceError) -> Self {
        move |source| Self::Service { activity, source }
    }

    pub(crate) fn identity(activity: &'static str) -> impl FnOnce(IdentityError) -> Self {
        move |source| Self::Identity { activity, source }
    }
}
