//! Child record location
//!
//! Finds every child record whose foreign-key attribute equals a parent id.

use crate::error::CascadeError;
use cascade_core::{
    AttributeValue, EqualityCondition, RecordIdentity, RecordService, RelationshipDescriptor,
};
use uuid::Uuid;

/// Locate the children of `parent_id` through a resolved relationship.
///
/// Issues one equality-filtered query (`fk = parent_id`) over the child
/// type, requesting only the child's own id column. Result order is
/// whatever the service returns; an empty vec (never an error) means no
/// children. One result page only — volumes beyond a page are a documented
/// limitation of this design.
pub async fn find_children(
    service: &dyn RecordService,
    descriptor: &RelationshipDescriptor,
    parent_id: Uuid,
) -> Result<Vec<RecordIdentity>, CascadeError> {
    let id_column = format!("{}id", descriptor.child_type_name);
    let conditions = [EqualityCondition::new(
        descriptor.child_foreign_key_attribute.clone(),
        AttributeValue::Id(parent_id),
    )];

    let records = service
        .query_by_filter(&descriptor.child_type_name, &conditions, &[&id_column])
        .await
        .map_err(|source| CascadeError::ChildQueryFailed {
            child_type: descriptor.child_type_name.clone(),
            attribute: descriptor.child_foreign_key_attribute.clone(),
            parent_id,
            source,
        })?;

    tracing::debug!(
        child_type = %descriptor.child_type_name,
        attribute = %descriptor.child_foreign_key_attribute,
        %parent_id,
        count = records.len(),
        "child records located"
    );

    records
        .into_iter()
        .map(|r| r.identity().map_err(CascadeError::from))
        .collect()
}
