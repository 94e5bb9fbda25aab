//! Shared fixtures for serializer tests.

#![allow(dead_code)]

use jsonapi_model::{ModelDescriptor, PropertySpec, PropertyType, Record, RelationSpec};
use jsonapi_serializer::{Serializer, SerializerOptions};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "http://api.test/";

pub fn serializer() -> Serializer {
    Serializer::new(SerializerOptions::default().with_base_url(BASE_URL))
}

pub fn person_model() -> Arc<ModelDescriptor> {
    Arc::new(
        ModelDescriptor::new("Person", "id", "people")
            .with_property(PropertySpec::id("id", PropertyType::Number))
            .with_property(PropertySpec::string("name")),
    )
}

pub fn part_model() -> Arc<ModelDescriptor> {
    Arc::new(
        ModelDescriptor::new("Part", "partId", "parts")
            .with_property(PropertySpec::id("partId", PropertyType::String))
            .with_property(PropertySpec::string("label")),
    )
}

/// Widget belongs to an owner (people) and has many parts.
pub fn widget_model() -> ModelDescriptor {
    ModelDescriptor::new("Widget", "id", "widgets")
        .with_property(PropertySpec::id("id", PropertyType::Number))
        .with_property(PropertySpec::string("name"))
        .with_property(PropertySpec::number("ownerId"))
        .with_relation(RelationSpec::belongs_to("owner", person_model(), "ownerId"))
        .with_relation(RelationSpec::has_many("parts", part_model()))
}

/// Comment with a polymorphic `commentable` parent and a plain author.
pub fn comment_model() -> ModelDescriptor {
    ModelDescriptor::new("Comment", "id", "comments")
        .with_property(PropertySpec::id("id", PropertyType::Number))
        .with_property(PropertySpec::string("body"))
        .with_property(PropertySpec::number("commentableId"))
        .with_property(PropertySpec::string("commentableType"))
        .with_property(PropertySpec::number("authorId"))
        .with_relation(RelationSpec::polymorphic_belongs_to(
            "commentable",
            "commentableId",
            "commentableType",
        ))
        .with_relation(RelationSpec::belongs_to("author", person_model(), "authorId"))
}

pub fn record(value: serde_json::Value) -> Record {
    Record::from_value(value).unwrap()
}

/// Runs `f` under a WARN-level subscriber and returns what it logged.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || LogBuffer(writer.clone()))
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buf.lock().unwrap()).into_owned();
    (out, logs)
}

struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
