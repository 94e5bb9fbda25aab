//! Self links and related links.

use crate::{SerializeResult, Serializer};
use jsonapi_model::{FieldValue, ModelDescriptor, Record};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value, json};
use tracing::warn;
use url::Url;

/// The `links` member of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLinks {
    #[serde(rename = "self")]
    pub self_link: String,
}

/// Parses `raw` as an absolute URL and returns its canonical form.
///
/// Canonicalization adds the root path to bare origins, so
/// `http://api.test` becomes `http://api.test/`.
pub fn normalize_url(raw: &str) -> SerializeResult<String> {
    Ok(Url::parse(raw)?.into())
}

impl Serializer {
    /// The configured base URL in canonical form.
    pub fn base_url(&self) -> SerializeResult<String> {
        normalize_url(&self.options().base_url)
    }

    /// Builds `{ self: <base><type>/<id> }` for a record.
    pub fn build_resource_links(
        &self,
        record: &Record,
        model: &ModelDescriptor,
    ) -> SerializeResult<ResourceLinks> {
        Ok(ResourceLinks {
            self_link: self.resource_url(record, model)?,
        })
    }

    /// Builds `{ <name>: { links: { related: <self>/<name> } } }` for every
    /// declared relation, polymorphic ones included.
    pub fn build_relationship_links(
        &self,
        record: &Record,
        model: &ModelDescriptor,
    ) -> SerializeResult<Map<String, Value>> {
        if model.relations.is_empty() {
            self.base_url()?;
            return Ok(Map::new());
        }
        let resource_url = self.resource_url(record, model)?;
        Ok(related_links(&resource_url, model))
    }

    /// `<base><type>/<id>` for a record. Warns when the id is missing.
    pub(crate) fn resource_url(
        &self,
        record: &Record,
        model: &ModelDescriptor,
    ) -> SerializeResult<String> {
        let base_url = self.base_url()?;
        let id_field = self.id_field_of(model);
        let id = id_segment(record.get(id_field));
        if id.is_empty() {
            warn!(
                "Record of type {} has no value for primary key {:?}; link has an empty id segment",
                self.type_of(model),
                id_field
            );
        }
        Ok(format!("{base_url}{}/{id}", self.type_of(model)))
    }
}

/// Related links for every relation of `model` under `resource_url`.
pub(crate) fn related_links(resource_url: &str, model: &ModelDescriptor) -> Map<String, Value> {
    model
        .relations
        .iter()
        .map(|relation| {
            let related = format!("{resource_url}/{}", relation.name);
            (relation.name.clone(), json!({ "links": { "related": related } }))
        })
        .collect()
}

/// Largest integer an `f64` holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Renders a primary-key value as a URL path segment. Missing and null ids
/// render as an empty segment.
fn id_segment(value: Option<&FieldValue>) -> String {
    match value {
        None | Some(FieldValue::Null) => String::new(),
        Some(FieldValue::String(s)) => s.clone(),
        Some(FieldValue::Number(n)) => number_segment(n),
        Some(FieldValue::Bool(b)) => b.to_string(),
        Some(other) => other.to_json().to_string(),
    }
}

/// Whole-number floats print without a fraction, so `5.0` renders as `5`.
fn number_segment(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
            format!("{f:.0}")
        }
        _ => n.to_string(),
    }
}
