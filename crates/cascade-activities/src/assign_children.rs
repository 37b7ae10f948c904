//! Reassign ownership of every child record reachable through named
//! relationships.

use crate::error::ActivityError;
use cascade_core::{Mutation, OwnerKind, RecordService};
use cascade_engine::{parse_reference, CascadeExecutor, CascadeOutcome};
use std::sync::Arc;
use uuid::Uuid;

const ACTIVITY: &str = "AssignChildRecords";

/// Inputs of the assign-children activity.
///
/// Either a user or a team may be supplied as the new owner; when both are
/// present the user wins. With no owner at all the activity is a no-op.
#[derive(Debug, Clone)]
pub struct AssignChildRecords {
    /// Record reference of the parent (URL or serialized identity).
    pub record_reference: String,
    /// `;`-separated relationship schema names to cascade through.
    pub relationship_names: String,
    /// New owning user, if any.
    pub user: Option<Uuid>,
    /// New owning team, if any.
    pub team: Option<Uuid>,
}

impl AssignChildRecords {
    /// Run the activity against the given record service.
    ///
    /// Returns `None` when no owner was supplied and nothing was done.
    pub async fn run(
        &self,
        service: Arc<dyn RecordService>,
    ) -> Result<Option<CascadeOutcome>, ActivityError> {
        let parent = parse_reference(service.as_ref(), &self.record_reference)
            .await
            .map_err(ActivityError::cascade(ACTIVITY))?;

        let Some((owner_id, owner_kind)) = self.owner() else {
            tracing::info!(%parent, "no owner supplied, nothing to assign");
            return Ok(None);
        };

        let mutation = Mutation::AssignOwner {
            owner_id,
            owner_kind,
        };
        let outcome = CascadeExecutor::new(service)
            .cascade(&parent, &self.relationship_names, &mutation)
            .await
            .map_err(ActivityError::cascade(ACTIVITY))?;
        Ok(Some(outcome))
    }

    fn owner(&self) -> Option<(Uuid, OwnerKind)> {
        // User takes precedence over team when both inputs are bound.
        self.user
            .map(|id| (id, OwnerKind::User))
            .or_else(|| self.team.map(|id| (id, OwnerKind::Team)))
    }
}
