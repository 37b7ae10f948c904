//! Cascade execution
//!
//! Orchestrates the full cascade: split the relationship-name list, resolve
//! each name's metadata, locate the children, and apply the caller's
//! mutation to every child. Strictly sequential — each remote step gates
//! the next — and fail-fast on the first query or mutation fault.

use crate::error::CascadeError;
use crate::locator::find_children;
use crate::relationship::resolve_relationship;
use cascade_core::{Mutation, RecordIdentity, RecordService};
use std::sync::Arc;

/// Summary of one cascade invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeOutcome {
    /// Relationship names that resolved to metadata.
    pub relationships_resolved: usize,
    /// Relationship names that did not resolve and were skipped.
    pub relationships_skipped: usize,
    /// Children the mutation was applied to.
    pub children_mutated: usize,
}

/// Applies one mutation across every child of a parent record, per named
/// relationship.
///
/// Holds no state besides the injected record service; a single executor is
/// safe to share across concurrent cascades of independent parents when the
/// service itself tolerates concurrent use.
pub struct CascadeExecutor {
    service: Arc<dyn RecordService>,
}

impl CascadeExecutor {
    /// Create an executor over the given record service.
    #[must_use]
    pub fn new(service: Arc<dyn RecordService>) -> Self {
        Self { service }
    }

    /// Cascade `mutation` to all children of `parent` reachable through the
    /// `;`-separated relationship names in `relationship_names`.
    ///
    /// Each name is processed independently and in order. A name that
    /// resolves to no relationship is skipped, never an error; a list that
    /// resolves nothing at all completes as a no-op. A single name with no
    /// `;` takes exactly the same path as a multi-element list. Resolution
    /// always uses the current list element — earlier revisions of this
    /// tool resolved the whole unsplit string inside the loop, which
    /// collapsed every iteration onto the first relationship.
    ///
    /// # Errors
    ///
    /// Fails fast: the first child-query or per-child mutation fault aborts
    /// the remaining cascade and surfaces with full context.
    pub async fn cascade(
        &self,
        parent: &RecordIdentity,
        relationship_names: &str,
        mutation: &Mutation,
    ) -> Result<CascadeOutcome, CascadeError> {
        tracing::info!(%parent, relationship_names, "cascade started");
        let mut outcome = CascadeOutcome::default();

        for name in relationship_names.split(';') {
            let Some(descriptor) =
                resolve_relationship(self.service.as_ref(), parent.type_name(), name).await?
            else {
                tracing::warn!(
                    parent_type = parent.type_name(),
                    relationship = name,
                    "relationship not found, skipping"
                );
                outcome.relationships_skipped += 1;
                continue;
            };
            outcome.relationships_resolved += 1;

            let children = find_children(self.service.as_ref(), &descriptor, parent.id()).await?;
            for child in children {
                self.service
                    .apply_mutation(&child, mutation)
                    .await
                    .map_err(|source| CascadeError::MutationFailed {
                        child: child.clone(),
                        source,
                    })?;
                outcome.children_mutated += 1;
            }
        }

        tracing::info!(
            resolved = outcome.relationships_resolved,
            skipped = outcome.relationships_skipped,
            mutated = outcome.children_mutated,
            "cascade completed"
        );
        Ok(outcome)
    }
}
