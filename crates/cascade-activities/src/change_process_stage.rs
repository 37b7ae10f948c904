//! Move a record to a named stage of a named business process.
//!
//! Both the process and the stage are looked up by display name; when either
//! lookup finds nothing the activity completes without touching the record.

use crate::error::ActivityError;
use cascade_core::{AttributeValue, EqualityCondition, Record, RecordService};
use cascade_engine::parse_reference;
use std::sync::Arc;
use uuid::Uuid;

const ACTIVITY: &str = "ChangeProcessStage";

/// Inputs of the change-process-stage activity.
#[derive(Debug, Clone)]
pub struct ChangeProcessStage {
    /// Record reference of the record to move (URL or serialized identity).
    pub record_reference: String,
    /// Display name of the business process.
    pub process_name: String,
    /// Display name of the target stage within that process.
    pub stage_name: String,
}

impl ChangeProcessStage {
    /// Run the activity against the given record service.
    ///
    /// Returns `true` when the record was moved, `false` when the process or
    /// stage name matched nothing.
    pub async fn run(&self, service: Arc<dyn RecordService>) -> Result<bool, ActivityError> {
        let record = parse_reference(service.as_ref(), &self.record_reference)
            .await
            .map_err(ActivityError::cascade(ACTIVITY))?;

        let Some(process_id) = self.find_process(service.as_ref()).await? else {
            tracing::warn!(process = %self.process_name, "process not found, record left as is");
            return Ok(false);
        };
        let Some(stage_id) = self.find_stage(service.as_ref(), process_id).await? else {
            tracing::warn!(
                process = %self.process_name,
                stage = %self.stage_name,
                "stage not found, record left as is"
            );
            return Ok(false);
        };

        let update = Record::new(record.type_name(), record.id())
            .with_attribute("processid", AttributeValue::Id(process_id))
            .with_attribute("stageid", AttributeValue::Id(stage_id));
        service
            .update(update)
            .await
            .map_err(ActivityError::service(ACTIVITY))?;
        tracing::info!(%record, %process_id, %stage_id, "process stage changed");
        Ok(true)
    }

    async fn find_process(
        &self,
        service: &dyn RecordService,
    ) -> Result<Option<Uuid>, ActivityError> {
        let conditions = [EqualityCondition::new(
            "name",
            AttributeValue::Text(self.process_name.clone()),
        )];
        let results = service
            .query_by_filter("workflow", &conditions, &["workflowid"])
            .await
            .map_err(ActivityError::service(ACTIVITY))?;
        Ok(results.first().map(|r| r.id))
    }

    async fn find_stage(
        &self,
        service: &dyn RecordService,
        process_id: Uuid,
    ) -> Result<Option<Uuid>, ActivityError> {
        let conditions = [
            EqualityCondition::new("stagename", AttributeValue::Text(self.stage_name.clone())),
            EqualityCondition::new("processid", AttributeValue::Id(process_id)),
        ];
        let results = service
            .query_by_filter("processstage", &conditions, &["processstageid"])
            .await
            .map_err(ActivityError::service(ACTIVITY))?;
        Ok(results.first().map(|r| r.id))
    }
}
