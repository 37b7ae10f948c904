//! Core types for the cascade toolkit
//!
//! Defines the vocabulary shared by the engine and the activities:
//! - Record identities and references
//! - Attribute values and partial records
//! - Relationship metadata

use crate::error::IdentityError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Canonical identity of one record: its logical type name plus unique id.
///
/// Immutable once constructed; `new` rejects an empty type name and the nil
/// id, so holders can rely on both invariants without re-checking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordIdentity {
    type_name: String,
    id: Uuid,
}

impl RecordIdentity {
    /// Create a validated identity.
    pub fn new(type_name: impl Into<String>, id: Uuid) -> Result<Self, IdentityError> {
        let type_name = type_name.into();
        if type_name.is_empty() {
            return Err(IdentityError::EmptyTypeName);
        }
        if id.is_nil() {
            return Err(IdentityError::NilId);
        }
        Ok(Self { type_name, id })
    }

    /// Logical type name of the record.
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Unique id of the record.
    #[inline]
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl std::fmt::Display for RecordIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.type_name, self.id)
    }
}

/// The serialized-object form of a record reference.
///
/// Field names follow the wire format emitted by the record service
/// (`LogicalName` / `Id`), not Rust conventions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedIdentity {
    /// Logical type name.
    #[serde(rename = "LogicalName")]
    pub logical_name: String,
    /// Unique id.
    #[serde(rename = "Id")]
    pub id: Uuid,
}

/// One resolved one-to-many relationship: where the children live and which
/// attribute on them points back at the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipDescriptor {
    /// Type name of the dependent (child) records.
    pub child_type_name: String,
    /// Foreign-key attribute on the child that references the parent.
    pub child_foreign_key_attribute: String,
}

/// Relationship metadata as reported by the record service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipMetadata {
    /// Stable schema name of the relationship.
    pub schema_name: String,
    /// Type name of the dependent (child) records.
    pub child_type_name: String,
    /// Foreign-key attribute on the child that references the parent.
    pub child_foreign_key_attribute: String,
}

/// A typed attribute value on a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Free text.
    Text(String),
    /// Whole number.
    Int(i64),
    /// Boolean flag.
    Bool(bool),
    /// Bare unique id.
    Id(Uuid),
    /// Reference to another record.
    Reference(RecordIdentity),
    /// Pick-list selection (state/status codes and friends).
    OptionSet(i32),
}

/// One equality condition of a filtered query. Multiple conditions combine
/// with AND semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualityCondition {
    /// Attribute the condition applies to.
    pub attribute: String,
    /// Value the attribute must equal.
    pub value: AttributeValue,
}

impl EqualityCondition {
    /// Build a condition.
    pub fn new(attribute: impl Into<String>, value: AttributeValue) -> Self {
        Self {
            attribute: attribute.into(),
            value,
        }
    }
}

/// A record as returned by retrieval or filtered query.
///
/// Only the requested columns come back populated, so attribute access is
/// always optional; a record holding nothing but its identity is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Logical type name.
    pub type_name: String,
    /// Unique id.
    pub id: Uuid,
    /// Populated attribute columns.
    pub attributes: HashMap<String, AttributeValue>,
}

impl Record {
    /// Create a record carrying only its identity.
    #[must_use]
    pub fn new(type_name: impl Into<String>, id: Uuid) -> Self {
        Self {
            type_name: type_name.into(),
            id,
            attributes: HashMap::new(),
        }
    }

    /// Attach an attribute (builder style).
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Read an attribute, `None` when the column was not populated.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Identity of this record.
    pub fn identity(&self) -> Result<RecordIdentity, IdentityError> {
        RecordIdentity::new(self.type_name.clone(), self.id)
    }
}
