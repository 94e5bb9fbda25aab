//! Model metadata and record types for JSON:API serialization.
//!
//! Defines the read-only contract between an ORM adapter and the serializer:
//! - [`ModelDescriptor`] — id field, plural resource type, properties, relations
//! - [`RelationSpec`] — one declared relationship (kind, cardinality, target, foreign key)
//! - [`RelationTarget`] — a statically known target model, or a polymorphic one
//! - [`Record`] / [`FieldValue`] — an already-fetched entity snapshot
//!
//! Nothing here touches a database. Descriptors and records can be built in
//! code or loaded from JSON.

mod descriptor;
mod record;
mod relation;

pub use descriptor::{ModelDescriptor, PropertySpec, PropertyType};
pub use record::{FieldValue, Record};
pub use relation::{Cardinality, RelationKind, RelationSpec, RelationTarget};

/// Result type for model operations.
pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while loading descriptors or records.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("expected a JSON object for a record, found {0}")]
    NotAnObject(String),
}
