//! Transition the lifecycle state of every child record reachable through
//! named relationships.

use crate::error::ActivityError;
use cascade_core::{Mutation, RecordService};
use cascade_engine::{parse_reference, CascadeExecutor, CascadeOutcome};
use std::sync::Arc;

const ACTIVITY: &str = "SetStateChildRecords";

/// Inputs of the set-state-children activity.
#[derive(Debug, Clone)]
pub struct SetStateChildRecords {
    /// Record reference of the parent (URL or serialized identity).
    pub record_reference: String,
    /// `;`-separated relationship schema names to cascade through.
    pub relationship_names: String,
    /// Target state code.
    pub state: i32,
    /// Target status code within that state.
    pub status: i32,
}

impl SetStateChildRecords {
    /// Run the activity against the given record service.
    pub async fn run(
        &self,
        service: Arc<dyn RecordService>,
    ) -> Result<CascadeOutcome, ActivityError> {
        let parent = parse_reference(service.as_ref(), &self.record_reference)
            .await
            .map_err(ActivityError::cascade(ACTIVITY))?;

        let mutation = Mutation::SetLifecycleState {
            state: self.state,
            status: self.status,
        };
        CascadeExecutor::new(service)
            .cascade(&parent, &self.relationship_names, &mutation)
            .await
            .map_err(ActivityError::cascade(ACTIVITY))
    }
}
