//! The record service capability.
//!
//! Everything the toolkit does goes through this trait: metadata lookups,
//! filtered queries, CRUD, and the two bulk mutations. Callers inject an
//! implementation per invocation; the toolkit holds no ambient client state.

use crate::error::ServiceError;
use crate::mutation::Mutation;
use crate::types::{EqualityCondition, Record, RecordIdentity, RelationshipMetadata};
use uuid::Uuid;

/// Abstract capability over the remote system of record.
///
/// Connection-level policy (timeouts, retries, pooling) belongs to the
/// implementation; the toolkit surfaces every fault synchronously and never
/// retries. Implementations must be safe for concurrent use or callers must
/// hand each concurrent invocation its own instance.
#[async_trait::async_trait]
pub trait RecordService: Send + Sync {
    /// Resolve a numeric type code to the record type's logical name.
    ///
    /// `None` when no type carries the code.
    async fn record_type_by_code(&self, code: i32) -> Result<Option<String>, ServiceError>;

    /// Relationship metadata for a record type's one-to-many associations.
    ///
    /// `include_unpublished` requests the as-if-published view, i.e. schema
    /// changes that are staged but not yet activated.
    async fn one_to_many_relationships(
        &self,
        record_type: &str,
        include_unpublished: bool,
    ) -> Result<Vec<RelationshipMetadata>, ServiceError>;

    /// Run an equality-filtered query, returning only the named columns.
    ///
    /// Conditions combine with AND. A single result page is returned; the
    /// toolkit does not paginate.
    async fn query_by_filter(
        &self,
        type_name: &str,
        conditions: &[EqualityCondition],
        columns: &[&str],
    ) -> Result<Vec<Record>, ServiceError>;

    /// Retrieve one record by identity, returning only the named columns.
    async fn retrieve(
        &self,
        identity: &RecordIdentity,
        columns: &[&str],
    ) -> Result<Record, ServiceError>;

    /// Create a record, returning its assigned id.
    async fn create(&self, record: Record) -> Result<Uuid, ServiceError>;

    /// Update the populated attributes of an existing record.
    async fn update(&self, record: Record) -> Result<(), ServiceError>;

    /// Apply a bulk mutation (ownership reassignment or state transition)
    /// to one target record.
    async fn apply_mutation(
        &self,
        target: &RecordIdentity,
        mutation: &Mutation,
    ) -> Result<(), ServiceError>;

    /// Instantiate a document template against a record, returning the
    /// produced (not yet persisted) records.
    async fn instantiate_template(
        &self,
        template_id: Uuid,
        target: &RecordIdentity,
    ) -> Result<Vec<Record>, ServiceError>;
}
