//! Relationship metadata resolution
//!
//! Resolves a relationship schema name on a parent type into the
//! (child type, child foreign-key attribute) pair that drives the child
//! query. Metadata is re-queried on every call; nothing is cached.

use crate::error::CascadeError;
use cascade_core::{RecordService, RelationshipDescriptor};

/// Resolve a named one-to-many relationship on `parent_type`.
///
/// Requests the as-if-published metadata view so staged schema changes are
/// visible, then scans for the first relationship whose schema name equals
/// `relationship_name` (case-sensitive). `Ok(None)` means the relationship
/// does not exist on this type — a skip signal for the caller, not an error.
pub async fn resolve_relationship(
    service: &dyn RecordService,
    parent_type: &str,
    relationship_name: &str,
) -> Result<Option<RelationshipDescriptor>, CascadeError> {
    let relationships = service.one_to_many_relationships(parent_type, true).await?;

    let descriptor = relationships
        .into_iter()
        .find(|r| r.schema_name == relationship_name)
        .map(|r| RelationshipDescriptor {
            child_type_name: r.child_type_name,
            child_foreign_key_attribute: r.child_foreign_key_attribute,
        });

    match &descriptor {
        Some(d) => tracing::debug!(
            parent_type,
            relationship_name,
            child_type = %d.child_type_name,
            attribute = %d.child_foreign_key_attribute,
            "relationship resolved"
        ),
        None => tracing::debug!(parent_type, relationship_name, "relationship not found"),
    }

    Ok(descriptor)
}
