//! Relationship declarations.
//!
//! A [`RelationSpec`] tells the serializer how a record points at other
//! resources: which kind of relation it is, whether it carries a foreign key
//! on the owning record, and which model the related records belong to.

use crate::ModelDescriptor;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A declared relationship on a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationSpec {
    /// Relation name; also the record field holding embedded related data.
    pub name: String,
    pub kind: RelationKind,
    pub cardinality: Cardinality,
    pub target: RelationTarget,
    /// Field on the owning record holding the related id. Only set for `belongsTo`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<String>,
}

impl RelationSpec {
    fn direct(name: &str, kind: RelationKind, target: Arc<ModelDescriptor>) -> Self {
        Self {
            name: name.into(),
            kind,
            cardinality: kind.cardinality(),
            target: RelationTarget::Direct(target),
            foreign_key: None,
        }
    }

    /// A `belongsTo` relation whose id is stored in `foreign_key` on the owning record.
    pub fn belongs_to(name: &str, target: Arc<ModelDescriptor>, foreign_key: &str) -> Self {
        Self {
            foreign_key: Some(foreign_key.into()),
            ..Self::direct(name, RelationKind::BelongsTo, target)
        }
    }

    /// A `belongsTo` relation whose target model is named by `discriminator`
    /// on the owning record.
    pub fn polymorphic_belongs_to(name: &str, foreign_key: &str, discriminator: &str) -> Self {
        Self {
            name: name.into(),
            kind: RelationKind::BelongsTo,
            cardinality: Cardinality::ToOne,
            target: RelationTarget::Polymorphic {
                discriminator: discriminator.into(),
            },
            foreign_key: Some(foreign_key.into()),
        }
    }

    pub fn has_one(name: &str, target: Arc<ModelDescriptor>) -> Self {
        Self::direct(name, RelationKind::HasOne, target)
    }

    pub fn has_many(name: &str, target: Arc<ModelDescriptor>) -> Self {
        Self::direct(name, RelationKind::HasMany, target)
    }

    pub fn references_many(name: &str, target: Arc<ModelDescriptor>) -> Self {
        Self::direct(name, RelationKind::ReferencesMany, target)
    }

    /// Returns true if the relation's target is resolved at runtime.
    pub fn is_polymorphic(&self) -> bool {
        matches!(self.target, RelationTarget::Polymorphic { .. })
    }

    /// The discriminator field of a polymorphic relation.
    pub fn discriminator(&self) -> Option<&str> {
        match &self.target {
            RelationTarget::Polymorphic { discriminator } => Some(discriminator.as_str()),
            RelationTarget::Direct(_) => None,
        }
    }
}

/// How a relation's target model is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationTarget {
    /// The target model is declared up front.
    Direct(Arc<ModelDescriptor>),
    /// The target model is named per record by the discriminator field.
    /// Resolving it needs a model lookup that the serializer does not perform.
    Polymorphic { discriminator: String },
}

/// The ORM relation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    BelongsTo,
    HasOne,
    HasMany,
    HasManyThrough,
    HasAndBelongsToMany,
    ReferencesMany,
    EmbedsOne,
    EmbedsMany,
}

impl RelationKind {
    /// The cardinality a relation of this kind normally has.
    pub fn cardinality(self) -> Cardinality {
        match self {
            Self::BelongsTo | Self::HasOne | Self::EmbedsOne => Cardinality::ToOne,
            Self::HasMany
            | Self::HasManyThrough
            | Self::HasAndBelongsToMany
            | Self::ReferencesMany
            | Self::EmbedsMany => Cardinality::ToMany,
        }
    }

    /// Only `belongsTo` keeps a foreign key on the owning record.
    pub fn owns_foreign_key(self) -> bool {
        self == Self::BelongsTo
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Cardinality {
    ToOne,
    ToMany,
}
