use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inferred type of a JSON value, as written in an OpenAPI `type` field.
///
/// Booleans are classified before numbers so that `true` never reads as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

/// OpenAPI Schema definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// The type of the schema (object, array, or a primitive)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<TypeTag>,
    /// Properties for object types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Property>>,
    /// Items schema for array types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Reference to another schema
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Property definition for object schemas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// The type of the property
    #[serde(rename = "type")]
    pub property_type: TypeTag,
    /// Items schema, present only for array properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    /// A bare `{type: <tag>}` schema
    pub fn primitive(tag: TypeTag) -> Self {
        Self {
            schema_type: Some(tag),
            properties: None,
            items: None,
            reference: None,
        }
    }

    /// An object schema with the given properties
    pub fn object(properties: IndexMap<String, Property>) -> Self {
        Self {
            schema_type: Some(TypeTag::Object),
            properties: Some(properties),
            items: None,
            reference: None,
        }
    }

    /// A `$ref` to a named component schema
    pub fn reference(name: &str) -> Self {
        Self {
            schema_type: None,
            properties: None,
            items: None,
            reference: Some(format!("#/components/schemas/{}", name)),
        }
    }

    /// An array whose items reference a named component schema
    pub fn array_of(name: &str) -> Self {
        Self {
            schema_type: Some(TypeTag::Array),
            properties: None,
            items: Some(Box::new(Self::reference(name))),
            reference: None,
        }
    }
}

/// Infers the type tag of a JSON value.
///
/// `null` has no OpenAPI 3.0 type and falls back to `string`.
pub fn infer_type(value: &Value) -> TypeTag {
    match value {
        Value::Bool(_) => TypeTag::Boolean,
        Value::Number(n) if n.is_i64() || n.is_u64() => TypeTag::Integer,
        Value::Number(_) => TypeTag::Number,
        Value::String(_) => TypeTag::String,
        Value::Array(_) => TypeTag::Array,
        Value::Object(_) => TypeTag::Object,
        Value::Null => TypeTag::String,
    }
}

/// Schema generator - converts sample JSON objects to OpenAPI schemas
///
/// Only the immediate properties of an object are described. Nested objects are
/// reported as `object` without properties and arrays as `array` with a flat
/// item type, so the generated schemas are never more than one level deep.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaGenerator {
    /// Report the first element's type as array item type instead of `string`
    infer_item_types: bool,
}

impl SchemaGenerator {
    pub fn new(infer_item_types: bool) -> Self {
        debug!("Initializing SchemaGenerator (infer_item_types: {})", infer_item_types);
        Self { infer_item_types }
    }

    /// Generate an object schema from the properties of a sample object
    pub fn generate_object_schema(&self, sample: &Map<String, Value>) -> Schema {
        let properties = sample
            .iter()
            .map(|(name, value)| {
                let property = self.generate_property(value);
                debug!("Property `{}` inferred as {:?}", name, property.property_type);
                (name.clone(), property)
            })
            .collect();

        Schema::object(properties)
    }

    /// Generate a property descriptor for a single sample value
    pub fn generate_property(&self, value: &Value) -> Property {
        let property_type = infer_type(value);
        let items = match value {
            Value::Array(elements) => Some(Box::new(Schema::primitive(self.item_type(elements)))),
            _ => None,
        };

        Property {
            property_type,
            items,
        }
    }

    fn item_type(&self, elements: &[Value]) -> TypeTag {
        if !self.infer_item_types {
            return TypeTag::String;
        }
        elements.first().map(infer_type).unwrap_or(TypeTag::String)
    }
}
