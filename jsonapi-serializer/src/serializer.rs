//! The serialization context.

use crate::SerializerOptions;
use jsonapi_model::{ModelDescriptor, RelationSpec, RelationTarget};

/// Turns records into JSON:API resource members.
///
/// A serializer holds nothing but its options, so one instance can be shared
/// freely across threads. Every method is a pure function of its arguments.
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    options: SerializerOptions,
}

impl Serializer {
    pub fn new(options: SerializerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SerializerOptions {
        &self.options
    }

    /// Name of the model's primary-key field.
    pub fn id_field_of<'m>(&self, model: &'m ModelDescriptor) -> &'m str {
        &model.id_field_name
    }

    /// The JSON:API `type` of the model's resources.
    pub fn type_of<'m>(&self, model: &'m ModelDescriptor) -> &'m str {
        &model.plural_type_name
    }

    /// The statically declared target model of a relation.
    ///
    /// Returns `None` for polymorphic relations: their target depends on the
    /// discriminator value of each record and is not looked up here.
    pub fn resolve_relation_target<'r>(
        &self,
        relation: &'r RelationSpec,
    ) -> Option<&'r ModelDescriptor> {
        match &relation.target {
            RelationTarget::Direct(model) => Some(model.as_ref()),
            RelationTarget::Polymorphic { .. } => None,
        }
    }

    /// Fields that exist only to carry a `belongsTo` relation: each foreign
    /// key, followed by the discriminator for polymorphic relations.
    /// Follows relation declaration order.
    pub fn foreign_keys_of(&self, model: &ModelDescriptor) -> Vec<String> {
        let mut keys = Vec::new();
        for relation in model.relations.iter().filter(|r| r.kind.owns_foreign_key()) {
            if let Some(fk) = &relation.foreign_key {
                keys.push(fk.clone());
            }
            if let Some(discriminator) = relation.discriminator() {
                keys.push(discriminator.to_string());
            }
        }
        keys
    }
}
