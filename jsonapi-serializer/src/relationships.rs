use crate::{SerializeResult, Serializer, deep_merge};
use jsonapi_model::{FieldValue, ModelDescriptor, Record};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::debug;

/// Resource linkage: the `{type, id}` pair naming a related resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: Value,
}

impl ResourceIdentifier {
    /// Identifies `record` as a resource of `model`. A record lacking its
    /// primary key yields a `null` id.
    pub fn for_record(record: &Record, model: &ModelDescriptor) -> Self {
        Self {
            resource_type: model.plural_type_name.clone(),
            id: record.field_json(&model.id_field_name),
        }
    }

    pub fn to_json(&self) -> Value {
        json!({ "type": self.resource_type, "id": self.id })
    }
}

impl Serializer {
    /// Builds `{ <name>: { data: linkage } }` from the related records
    /// embedded in `record`.
    ///
    /// A sequence yields an array of identifiers in input order. A single
    /// truthy value yields one identifier. Relations with nothing embedded
    /// get no entry, and polymorphic relations are always skipped since
    /// their target type is not known.
    pub fn build_relationship_data(
        &self,
        record: &Record,
        model: &ModelDescriptor,
    ) -> Map<String, Value> {
        let mut relationships = Map::new();

        for relation in &model.relations {
            let Some(target) = self.resolve_relation_target(relation) else {
                debug!(
                    "Skipping linkage for polymorphic relation {}.{}",
                    self.type_of(model),
                    relation.name
                );
                continue;
            };

            let data = match record.get(&relation.name) {
                Some(FieldValue::Records(related)) => Value::Array(
                    related
                        .iter()
                        .map(|r| ResourceIdentifier::for_record(r, target).to_json())
                        .collect(),
                ),
                Some(FieldValue::List(items)) => Value::Array(
                    items
                        .iter()
                        .map(|item| linkage_for_value(item, target))
                        .collect(),
                ),
                Some(value) if value.is_truthy() => linkage_for_value(value, target),
                _ => continue,
            };

            relationships.insert(relation.name.clone(), json!({ "data": data }));
        }

        relationships
    }

    /// Combines relationship links and linkage into one object per relation.
    pub fn build_relationships(
        &self,
        record: &Record,
        model: &ModelDescriptor,
    ) -> SerializeResult<Map<String, Value>> {
        let links = self.build_relationship_links(record, model)?;
        let data = self.build_relationship_data(record, model);
        Ok(deep_merge(links, data))
    }
}

/// Linkage for a single embedded value. Only a record can supply an id.
fn linkage_for_value(value: &FieldValue, target: &ModelDescriptor) -> Value {
    match value.as_record() {
        Some(related) => ResourceIdentifier::for_record(related, target).to_json(),
        None => ResourceIdentifier {
            resource_type: target.plural_type_name.clone(),
            id: Value::Null,
        }
        .to_json(),
    }
}
