use crate::{ModelResult, RelationSpec};
use serde::{Deserialize, Serialize};

/// Describes a model's shape: its id field, resource type, attributes and relations.
///
/// Descriptors are populated by an ORM adapter and consumed read-only by the
/// serializer. Properties and relations keep declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Singular model name (e.g., "Widget"). Informational only.
    #[serde(default)]
    pub name: String,
    /// Name of the property holding the primary key.
    pub id_field_name: String,
    /// The JSON:API `type` for resources of this model (e.g., "widgets").
    pub plural_type_name: String,
    #[serde(default)]
    pub properties: Vec<PropertySpec>,
    #[serde(default)]
    pub relations: Vec<RelationSpec>,
}

impl ModelDescriptor {
    /// Creates a descriptor with no properties or relations.
    pub fn new(name: &str, id_field_name: &str, plural_type_name: &str) -> Self {
        Self {
            name: name.into(),
            id_field_name: id_field_name.into(),
            plural_type_name: plural_type_name.into(),
            properties: Vec::new(),
            relations: Vec::new(),
        }
    }

    /// Parses a descriptor from its JSON form.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Appends a property declaration.
    #[must_use]
    pub fn with_property(mut self, property: PropertySpec) -> Self {
        self.properties.push(property);
        self
    }

    /// Appends a relation declaration.
    #[must_use]
    pub fn with_relation(mut self, relation: RelationSpec) -> Self {
        self.relations.push(relation);
        self
    }

    /// Looks up a declared property by name.
    pub fn property(&self, name: &str) -> Option<&PropertySpec> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Looks up a declared relation by name.
    pub fn relation(&self, name: &str) -> Option<&RelationSpec> {
        self.relations.iter().find(|r| r.name == name)
    }

    /// Property names in declaration order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.name.as_str())
    }
}

/// A declared scalar/attribute field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySpec {
    pub name: String,
    #[serde(default, rename = "type")]
    pub property_type: PropertyType,
    #[serde(default)]
    pub required: bool,
}

impl PropertySpec {
    fn simple(name: &str, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
            required: false,
        }
    }

    /// Shorthand for a primary-key property (required).
    pub fn id(name: &str, property_type: PropertyType) -> Self {
        Self {
            required: true,
            ..Self::simple(name, property_type)
        }
    }

    /// Shorthand for a string property.
    pub fn string(name: &str) -> Self {
        Self::simple(name, PropertyType::String)
    }

    /// Shorthand for a numeric property.
    pub fn number(name: &str) -> Self {
        Self::simple(name, PropertyType::Number)
    }

    /// Shorthand for a boolean property.
    pub fn boolean(name: &str) -> Self {
        Self::simple(name, PropertyType::Boolean)
    }

    /// Shorthand for a date property.
    pub fn date(name: &str) -> Self {
        Self::simple(name, PropertyType::Date)
    }

    /// Shorthand for a property of any type.
    pub fn any(name: &str) -> Self {
        Self::simple(name, PropertyType::Any)
    }

    /// Marks the property as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// The declared type of a property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    String,
    Number,
    Boolean,
    Date,
    Object,
    Array,
    #[default]
    Any,
}
