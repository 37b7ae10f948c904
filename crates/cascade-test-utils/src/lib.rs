//! Testing utilities for the cascade workspace
//!
//! Provides `InMemoryRecordService`, a scriptable in-memory record service:
//! seed type codes, relationship metadata, records, and templates through
//! the builder methods, script faults per operation, and inspect the
//! mutation log afterwards.

#![allow(missing_docs)]

use cascade_core::{
    AttributeValue, EqualityCondition, Mutation, Record, RecordIdentity, RecordService,
    RelationshipMetadata, ServiceError,
};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// In-memory stand-in for the remote record service.
#[derive(Debug, Default)]
pub struct InMemoryRecordService {
    type_codes: HashMap<i32, String>,
    relationships: HashMap<String, Vec<RelationshipMetadata>>,
    templates: HashMap<Uuid, Vec<Record>>,
    records: Mutex<Vec<Record>>,
    mutations: Mutex<Vec<(RecordIdentity, Mutation)>>,
    failures: HashMap<&'static str, String>,
}

impl InMemoryRecordService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a numeric type code to a logical type name.
    #[must_use]
    pub fn with_type_code(mut self, code: i32, type_name: &str) -> Self {
        self.type_codes.insert(code, type_name.to_string());
        self
    }

    /// Declare a one-to-many relationship on `parent_type`.
    #[must_use]
    pub fn with_relationship(
        mut self,
        parent_type: &str,
        schema_name: &str,
        child_type: &str,
        foreign_key: &str,
    ) -> Self {
        self.relationships
            .entry(parent_type.to_string())
            .or_default()
            .push(RelationshipMetadata {
                schema_name: schema_name.to_string(),
                child_type_name: child_type.to_string(),
                child_foreign_key_attribute: foreign_key.to_string(),
            });
        self
    }

    /// Seed a stored record.
    #[must_use]
    pub fn with_record(self, record: Record) -> Self {
        self.records.lock().unwrap().push(record);
        self
    }

    /// Seed the records a template instantiation produces.
    #[must_use]
    pub fn with_template(mut self, template_id: Uuid, produces: Vec<Record>) -> Self {
        self.templates.insert(template_id, produces);
        self
    }

    /// Script a fault for the named service operation.
    #[must_use]
    pub fn fail_on(mut self, operation: &'static str, message: &str) -> Self {
        self.failures.insert(operation, message.to_string());
        self
    }

    /// Mutations applied so far, in order.
    #[must_use]
    pub fn applied_mutations(&self) -> Vec<(RecordIdentity, Mutation)> {
        self.mutations.lock().unwrap().clone()
    }

    /// Snapshot of a stored record.
    #[must_use]
    pub fn stored_record(&self, type_name: &str, id: Uuid) -> Option<Record> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.type_name == type_name && r.id == id)
            .cloned()
    }

    fn check_fault(&self, operation: &'static str) -> Result<(), ServiceError> {
        match self.failures.get(operation) {
            Some(message) => Err(ServiceError::new(operation, message.clone())),
            None => Ok(()),
        }
    }
}

/// Equality used by the filter: identical values match, and a bare id
/// matches a reference carrying that id (the service compares foreign keys
/// by id, not by representation).
fn value_matches(stored: &AttributeValue, filter: &AttributeValue) -> bool {
    match (stored, filter) {
        (AttributeValue::Reference(r), AttributeValue::Id(id))
        | (AttributeValue::Id(id), AttributeValue::Reference(r)) => r.id() == *id,
        _ => stored == filter,
    }
}

fn project(record: &Record, columns: &[&str]) -> Record {
    let mut projected = Record::new(record.type_name.clone(), record.id);
    for column in columns {
        if let Some(value) = record.attribute(column) {
            projected.attributes.insert((*column).to_string(), value.clone());
        }
    }
    projected
}

#[async_trait::async_trait]
impl RecordService for InMemoryRecordService {
    async fn record_type_by_code(&self, code: i32) -> Result<Option<String>, ServiceError> {
        self.check_fault("record_type_by_code")?;
        Ok(self.type_codes.get(&code).cloned())
    }

    async fn one_to_many_relationships(
        &self,
        record_type: &str,
        _include_unpublished: bool,
    ) -> Result<Vec<RelationshipMetadata>, ServiceError> {
        self.check_fault("one_to_many_relationships")?;
        Ok(self
            .relationships
            .get(record_type)
            .cloned()
            .unwrap_or_default())
    }

    async fn query_by_filter(
        &self,
        type_name: &str,
        conditions: &[EqualityCondition],
        columns: &[&str],
    ) -> Result<Vec<Record>, ServiceError> {
        self.check_fault("query_by_filter")?;
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|r| r.type_name == type_name)
            .filter(|r| {
                conditions.iter().all(|c| {
                    r.attribute(&c.attribute)
                        .is_some_and(|v| value_matches(v, &c.value))
                })
            })
            .map(|r| project(r, columns))
            .collect())
    }

    async fn retrieve(
        &self,
        identity: &RecordIdentity,
        columns: &[&str],
    ) -> Result<Record, ServiceError> {
        self.check_fault("retrieve")?;
        let records = self.records.lock().unwrap();
        records
            .iter()
            .find(|r| r.type_name == identity.type_name() && r.id == identity.id())
            .map(|r| project(r, columns))
            .ok_or_else(|| ServiceError::not_found("retrieve", identity.type_name(), identity.id()))
    }

    async fn create(&self, mut record: Record) -> Result<Uuid, ServiceError> {
        self.check_fault("create")?;
        if record.id.is_nil() {
            record.id = Uuid::new_v4();
        }
        let id = record.id;
        self.records.lock().unwrap().push(record);
        Ok(id)
    }

    async fn update(&self, record: Record) -> Result<(), ServiceError> {
        self.check_fault("update")?;
        let mut records = self.records.lock().unwrap();
        let stored = records
            .iter_mut()
            .find(|r| r.type_name == record.type_name && r.id == record.id)
            .ok_or_else(|| ServiceError::not_found("update", &record.type_name, record.id))?;
        stored.attributes.extend(record.attributes);
        Ok(())
    }

    async fn apply_mutation(
        &self,
        target: &RecordIdentity,
        mutation: &Mutation,
    ) -> Result<(), ServiceError> {
        self.check_fault("apply_mutation")?;
        // Reflect the mutation onto the stored record when it is seeded,
        // so tests can assert on resulting attributes as well as the log.
        if let Some(stored) = self
            .records
            .lock()
            .unwrap()
            .iter_mut()
            .find(|r| r.type_name == target.type_name() && r.id == target.id())
        {
            match mutation {
                Mutation::AssignOwner {
                    owner_id,
                    owner_kind,
                } => {
                    let owner = RecordIdentity::new(owner_kind.type_name(), *owner_id)
                        .map_err(|e| ServiceError::new("apply_mutation", e.to_string()))?;
                    stored
                        .attributes
                        .insert("ownerid".to_string(), AttributeValue::Reference(owner));
                }
                Mutation::SetLifecycleState { state, status } => {
                    stored
                        .attributes
                        .insert("statecode".to_string(), AttributeValue::OptionSet(*state));
                    stored
                        .attributes
                        .insert("statuscode".to_string(), AttributeValue::OptionSet(*status));
                }
            }
        }
        self.mutations
            .lock()
            .unwrap()
            .push((target.clone(), mutation.clone()));
        Ok(())
    }

    async fn instantiate_template(
        &self,
        template_id: Uuid,
        _target: &RecordIdentity,
    ) -> Result<Vec<Record>, ServiceError> {
        self.check_fault("instantiate_template")?;
        self.templates.get(&template_id).cloned().ok_or_else(|| {
            ServiceError::new(
                "instantiate_template",
                format!("template {template_id} does not exist"),
            )
        })
    }
}

/// Identity helper for tests.
///
/// # Panics
///
/// Panics on invariant violations; tests construct valid identities.
#[must_use]
pub fn identity(type_name: &str, id: Uuid) -> RecordIdentity {
    RecordIdentity::new(type_name, id).unwrap()
}
