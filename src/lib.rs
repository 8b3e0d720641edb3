//! JSON to OpenAPI - starting-point API contracts from sample data.
//!
//! This library infers an OpenAPI 3.0 document from a single example JSON document.
//! It is meant as a quick first draft of an API contract, not as a complete or
//! validating schema generator.
//!
//! # Inference rules
//!
//! Every top-level key of the sample is looked at on its own:
//!
//! - **Arrays of objects** (`"users": [{...}]`) become a component schema named after
//!   the key (`User`) and a `GET /users` path returning an array of that schema.
//!   Only the first element is inspected, and empty arrays are skipped.
//! - **Objects** (`"config": {...}`) become a component schema (`Config`) without a path.
//! - **Truthy scalars** are gathered as typed properties of a catch-all `Root` schema.
//!
//! Schemas describe only the immediate properties of the sample object. Array
//! properties report `string` items unless [`inferencer::InferenceOptions::infer_item_types`]
//! is set.
//!
//! # Architecture
//!
//! 1. [`parser`] - Reads the sample JSON file
//! 2. [`naming`] - Derives schema names from keys
//! 3. [`schema_generator`] - Infers types and object schemas
//! 4. [`inferencer`] - Walks the top-level keys and feeds the builder
//! 5. [`openapi_builder`] - Constructs the complete OpenAPI document
//! 6. [`serializer`] - Serializes the document to YAML or JSON
//!
//! # Example Usage
//!
//! ```
//! use json_to_openapi::{inferencer::infer, serializer::serialize_yaml};
//! use serde_json::json;
//!
//! let sample = json!({"users": [{"id": 1, "name": "Al", "active": true}]});
//! let document = infer(&sample).unwrap();
//!
//! assert!(document.paths.contains_key("/users"));
//! assert!(document.components.schemas.contains_key("User"));
//!
//! let yaml = serialize_yaml(&document).unwrap();
//! println!("{}", yaml);
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module.

pub mod cli;
pub mod error;
pub mod inferencer;
pub mod naming;
pub mod openapi_builder;
pub mod parser;
pub mod schema_generator;
pub mod serializer;

pub use error::{Error, Result};
pub use inferencer::{infer, infer_with_options, InferenceOptions};
