//! Schema inference over a whole sample document.
//!
//! Each top-level key of the document is classified on its own:
//!
//! - a non-empty array whose first element is an object yields a component schema
//!   named after the key (see [`item_type_name`]) and a `GET /<key>` listing path;
//! - an object yields a component schema named after the key, without a path;
//! - a truthy scalar becomes a typed property of the catch-all [`ROOT_SCHEMA_NAME`] schema.
//!
//! Empty arrays and falsy scalars produce nothing. Only the first element of an
//! array is inspected.

use crate::error::{Error, Result};
use crate::naming::item_type_name;
use crate::openapi_builder::{Info, OpenApiBuilder, OpenApiDocument};
use crate::schema_generator::{Property, Schema, SchemaGenerator};
use indexmap::IndexMap;
use log::{debug, info, warn};
use serde_json::Value;

/// Name of the schema collecting top-level scalar keys
///
/// It is registered after every other key, so an object or collection keyed
/// `root` or `roots` (which also derives `Root`) is replaced by the scalar schema
/// whenever the document has truthy top-level scalars.
pub const ROOT_SCHEMA_NAME: &str = "Root";

/// Knobs for a single inference pass
#[derive(Debug, Clone, Default)]
pub struct InferenceOptions {
    /// Infer array item types from the first element instead of reporting `string`
    pub infer_item_types: bool,
    /// Info block of the generated document
    pub info: Info,
}

/// Accumulator threaded through the per-key fold
struct Inference {
    builder: OpenApiBuilder,
    root_properties: IndexMap<String, Property>,
}

/// Infers an OpenAPI document from a sample JSON document with default options.
pub fn infer(document: &Value) -> Result<OpenApiDocument> {
    infer_with_options(document, &InferenceOptions::default())
}

/// Infers an OpenAPI document from a sample JSON document.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if the top-level value is not an object.
pub fn infer_with_options(document: &Value, options: &InferenceOptions) -> Result<OpenApiDocument> {
    let entries = document.as_object().ok_or_else(|| {
        Error::malformed(format!(
            "top-level value is {}, expected an object",
            kind_name(document)
        ))
    })?;

    let generator = SchemaGenerator::new(options.infer_item_types);
    let initial = Inference {
        builder: OpenApiBuilder::new().with_info(options.info.clone()),
        root_properties: IndexMap::new(),
    };

    let Inference {
        mut builder,
        root_properties,
    } = entries.iter().fold(initial, |acc, (key, value)| {
        infer_entry(acc, key, value, &generator)
    });

    if !root_properties.is_empty() {
        debug!("Collected {} top-level scalars", root_properties.len());
        register_schema(&mut builder, ROOT_SCHEMA_NAME.to_string(), Schema::object(root_properties));
    }

    let document = builder.build();
    info!(
        "Inferred {} paths and {} schemas from {} top-level keys",
        document.paths.len(),
        document.components.schemas.len(),
        entries.len()
    );
    Ok(document)
}

fn infer_entry(mut acc: Inference, key: &str, value: &Value, generator: &SchemaGenerator) -> Inference {
    match value {
        Value::Array(elements) => match elements.first() {
            None => debug!("Skipping `{}`: empty array", key),
            Some(Value::Object(sample)) => {
                let item_type = item_type_name(key);
                debug!("`{}` is a collection of {}", key, item_type);
                acc.builder.add_collection_path(key, &item_type);
                let schema = generator.generate_object_schema(sample);
                register_schema(&mut acc.builder, item_type, schema);
            }
            Some(other) => warn!(
                "Skipping `{}`: array of {} has no object schema",
                key,
                kind_name(other)
            ),
        },
        Value::Object(sample) => {
            let name = item_type_name(key);
            debug!("`{}` is a single {} object", key, name);
            let schema = generator.generate_object_schema(sample);
            register_schema(&mut acc.builder, name, schema);
        }
        scalar if is_truthy(scalar) => {
            debug!("`{}` is a top-level scalar", key);
            acc.root_properties
                .insert(key.to_string(), generator.generate_property(scalar));
        }
        _ => debug!("Skipping `{}`: falsy scalar", key),
    }
    acc
}

fn register_schema(builder: &mut OpenApiBuilder, name: String, schema: Schema) {
    if builder.has_schema(&name) {
        warn!("Schema {} is defined more than once; keeping the last definition", name);
    }
    builder.add_schema(name, schema);
}

/// Whether a top-level scalar carries sample information.
///
/// `null`, `false`, zero and `""` do not. Arrays and objects never reach this check.
fn is_truthy(scalar: &Value) -> bool {
    match scalar {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
