use crate::{AttributeOptions, Serializer};
use jsonapi_model::{ModelDescriptor, Record};
use serde_json::{Map, Value};

impl Serializer {
    /// Declared property names to expose as attributes, in declaration order.
    pub fn build_attribute_field_names(
        &self,
        model: &ModelDescriptor,
        opts: AttributeOptions,
    ) -> Vec<String> {
        let id_field = self.id_field_of(model);
        let foreign_keys = if opts.foreign_keys {
            Vec::new()
        } else {
            self.foreign_keys_of(model)
        };

        model
            .property_names()
            .filter(|name| opts.primary_key || *name != id_field)
            .filter(|name| !foreign_keys.iter().any(|fk| fk == name))
            .map(str::to_string)
            .collect()
    }

    /// Projects the record onto the model's attribute names.
    ///
    /// Every selected name appears in the output. A field the record lacks
    /// is emitted as `null` rather than dropped.
    pub fn build_attributes(
        &self,
        record: &Record,
        model: &ModelDescriptor,
        opts: AttributeOptions,
    ) -> Map<String, Value> {
        self.build_attribute_field_names(model, opts)
            .into_iter()
            .map(|name| {
                let value = record.field_json(&name);
                (name, value)
            })
            .collect()
    }
}
