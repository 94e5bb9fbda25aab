use crate::SerializeResult;
use serde::{Deserialize, Serialize};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "/";

/// Configuration for one [`Serializer`](crate::Serializer). Immutable once the
/// serializer is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SerializerOptions {
    /// Prefix for every generated link. Must parse as an absolute URL for
    /// link building to succeed.
    pub base_url: String,
}

impl Default for SerializerOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl SerializerOptions {
    /// Loads options from a JSON document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> SerializeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }
}

/// Controls which declared properties appear in `attributes`.
///
/// Both flags default to `true`; exclusion is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttributeOptions {
    /// Include the primary-key property.
    pub primary_key: bool,
    /// Include `belongsTo` foreign keys and polymorphic discriminators.
    pub foreign_keys: bool,
}

impl Default for AttributeOptions {
    fn default() -> Self {
        Self::all()
    }
}

impl AttributeOptions {
    /// Every declared property.
    pub const fn all() -> Self {
        Self {
            primary_key: true,
            foreign_keys: true,
        }
    }

    /// Declared properties minus the primary key and foreign keys, as used
    /// for a resource's `attributes` member.
    pub const fn attributes_only() -> Self {
        Self {
            primary_key: false,
            foreign_keys: false,
        }
    }
}
