//! JSON:API serialization of ORM records.
//!
//! Converts a [`Record`] plus its [`ModelDescriptor`] into the members of a
//! JSON:API resource object:
//! - `attributes` — declared properties, optionally minus primary and foreign keys
//! - `relationships` — `links.related` for every relation, plus `data` linkage
//!   for relations whose related records are embedded in the record
//! - `links` — the resource's `self` link
//!
//! All work happens on already-fetched, in-memory data. The only fallible
//! step is parsing the configured base URL.
//!
//! # Polymorphic relations
//!
//! A polymorphic `belongsTo` names its target model per record through a
//! discriminator field. Target lookup is not performed, so such relations get
//! `links` but never `data`.

mod attributes;
mod document;
mod error;
mod links;
mod merge;
mod options;
mod relationships;
mod serializer;

pub use document::{Document, Payload, PrimaryData, Resource};
pub use error::{SerializeError, SerializeResult};
pub use links::{ResourceLinks, normalize_url};
pub use merge::deep_merge;
pub use options::{AttributeOptions, DEFAULT_BASE_URL, SerializerOptions};
pub use relationships::ResourceIdentifier;
pub use serializer::Serializer;

pub use jsonapi_model::{ModelDescriptor, Record};

/// Serializes `data` as a document of `model` resources using `options`.
pub fn serialize(
    data: &Payload,
    model: &ModelDescriptor,
    options: &SerializerOptions,
) -> SerializeResult<Document> {
    Serializer::new(options.clone()).serialize(data, model)
}
