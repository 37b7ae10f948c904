//! Create an email from a document template against a record.
//!
//! Instantiates the template, persists the first produced email, then stamps
//! the sender and the regarding record onto it.

use crate::error::ActivityError;
use cascade_core::{AttributeValue, OwnerKind, Record, RecordIdentity, RecordService};
use cascade_engine::parse_reference;
use std::sync::Arc;
use uuid::Uuid;

const ACTIVITY: &str = "CreateEmailFromTemplate";

/// Inputs of the create-email-from-template activity.
#[derive(Debug, Clone)]
pub struct CreateEmailFromTemplate {
    /// Record reference the email is regarding (URL or serialized identity).
    pub record_reference: String,
    /// Template to instantiate.
    pub template_id: Uuid,
    /// User the email is sent from.
    pub sender_id: Uuid,
}

impl CreateEmailFromTemplate {
    /// Run the activity against the given record service.
    ///
    /// Returns the identity of the created email.
    pub async fn run(
        &self,
        service: Arc<dyn RecordService>,
    ) -> Result<RecordIdentity, ActivityError> {
        let regarding = parse_reference(service.as_ref(), &self.record_reference)
            .await
            .map_err(ActivityError::cascade(ACTIVITY))?;

        let produced = service
            .instantiate_template(self.template_id, &regarding)
            .await
            .map_err(ActivityError::service(ACTIVITY))?;
        let Some(email) = produced.into_iter().next() else {
            return Err(ActivityError::EmptyTemplate {
                activity: ACTIVITY,
                template_id: self.template_id,
            });
        };

        let email_id = service
            .create(email)
            .await
            .map_err(ActivityError::service(ACTIVITY))?;

        let sender = RecordIdentity::new(OwnerKind::User.type_name(), self.sender_id)
            .map_err(ActivityError::identity(ACTIVITY))?;
        let stamped = Record::new("email", email_id)
            .with_attribute("from", AttributeValue::Reference(sender))
            .with_attribute("regardingobjectid", AttributeValue::Reference(regarding.clone()));
        service
            .update(stamped)
            .await
            .map_err(ActivityError::service(ACTIVITY))?;

        tracing::info!(%regarding, %email_id, "templated email created");
        RecordIdentity::new("email", email_id).map_err(ActivityError::identity(ACTIVITY))
    }
}
