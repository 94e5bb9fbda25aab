//! Full JSON:API documents.
//!
//! Assembles the per-member builders into resource objects and wraps them in
//! a top-level `{ "data": ... }` document.

use crate::links::related_links;
use crate::{AttributeOptions, ResourceLinks, SerializeResult, Serializer, deep_merge};
use jsonapi_model::{ModelDescriptor, ModelResult, Record};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Records to serialize as a document's primary data.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    One(Record),
    Many(Vec<Record>),
    Empty,
}

impl Payload {
    /// Reads primary data from JSON: an object is one record, an array is a
    /// collection of records, and `null` is empty.
    pub fn from_value(value: Value) -> ModelResult<Self> {
        match value {
            Value::Null => Ok(Self::Empty),
            Value::Array(items) => Ok(Self::Many(
                items
                    .into_iter()
                    .map(Record::from_value)
                    .collect::<ModelResult<_>>()?,
            )),
            other => Ok(Self::One(Record::from_value(other)?)),
        }
    }
}

impl From<Record> for Payload {
    fn from(record: Record) -> Self {
        Self::One(record)
    }
}

impl From<Vec<Record>> for Payload {
    fn from(records: Vec<Record>) -> Self {
        Self::Many(records)
    }
}

impl From<Option<Record>> for Payload {
    fn from(record: Option<Record>) -> Self {
        record.map_or(Self::Empty, Self::One)
    }
}

/// A JSON:API resource object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: Value,
    pub attributes: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub relationships: Map<String, Value>,
    pub links: ResourceLinks,
}

/// Primary data of a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PrimaryData {
    One(Box<Resource>),
    Many(Vec<Resource>),
    Null,
}

/// A top-level JSON:API document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub data: PrimaryData,
}

impl Document {
    pub fn to_value(&self) -> SerializeResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_string_pretty(&self) -> SerializeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serializer {
    /// Builds the resource object for one record.
    ///
    /// The primary key moves to `id` and foreign keys are represented by
    /// relationship linkage, so both are left out of `attributes`.
    pub fn serialize_resource(
        &self,
        record: &Record,
        model: &ModelDescriptor,
    ) -> SerializeResult<Resource> {
        let id = record.field_json(self.id_field_of(model));
        debug!("Serializing {} resource {}", self.type_of(model), id);

        // One URL feeds both the self link and the related links.
        let self_link = self.resource_url(record, model)?;
        let relationships = deep_merge(
            related_links(&self_link, model),
            self.build_relationship_data(record, model),
        );

        Ok(Resource {
            resource_type: self.type_of(model).to_string(),
            attributes: self.build_attributes(record, model, AttributeOptions::attributes_only()),
            relationships,
            links: ResourceLinks { self_link },
            id,
        })
    }

    /// Builds a complete document from one record, many records, or none.
    pub fn serialize(&self, data: &Payload, model: &ModelDescriptor) -> SerializeResult<Document> {
        let data = match data {
            Payload::One(record) => {
                PrimaryData::One(Box::new(self.serialize_resource(record, model)?))
            }
            Payload::Many(records) => {
                debug!("Serializing {} {} resources", records.len(), self.type_of(model));
                PrimaryData::Many(
                    records
                        .iter()
                        .map(|record| self.serialize_resource(record, model))
                        .collect::<SerializeResult<_>>()?,
                )
            }
            Payload::Empty => PrimaryData::Null,
        };
        Ok(Document { data })
    }
}
