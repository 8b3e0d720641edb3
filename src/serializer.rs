//! Serialization module for converting OpenAPI documents to YAML or JSON format.
//!
//! This module provides functions to serialize OpenAPI documents into standard formats
//! and write them to files or return them as strings.

use crate::error::{Error, Result};
use crate::openapi_builder::OpenApiDocument;
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes an OpenAPI document to block-style YAML.
///
/// The output is UTF-8 with no flow-style mappings or sequences, and keeps the
/// order of the document: `openapi`, `info`, `paths`, `components`.
///
/// # Arguments
///
/// * `doc` - The OpenAPI document to serialize
///
/// # Returns
///
/// Returns the YAML string representation of the document.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if serialization fails.
///
/// # Example
///
/// ```
/// use json_to_openapi::openapi_builder::OpenApiBuilder;
/// use json_to_openapi::serializer::serialize_yaml;
///
/// let doc = OpenApiBuilder::new().build();
/// let yaml = serialize_yaml(&doc).unwrap();
/// assert!(yaml.starts_with("openapi:"));
/// ```
pub fn serialize_yaml(doc: &OpenApiDocument) -> Result<String> {
    debug!("Serializing OpenAPI document to YAML");
    Ok(serde_yaml::to_string(doc)?)
}

/// Serializes an OpenAPI document to JSON format with pretty printing.
///
/// The output is indented for readability, making it suitable for human review
/// and version control.
///
/// # Arguments
///
/// * `doc` - The OpenAPI document to serialize
///
/// # Returns
///
/// Returns the JSON string representation of the document.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if serialization fails.
///
/// # Example
///
/// ```
/// use json_to_openapi::openapi_builder::OpenApiBuilder;
/// use json_to_openapi::serializer::serialize_json;
///
/// let doc = OpenApiBuilder::new().build();
/// let json = serialize_json(&doc).unwrap();
/// assert!(json.contains("\"openapi\": \"3.0.0\""));
/// ```
pub fn serialize_json(doc: &OpenApiDocument) -> Result<String> {
    debug!("Serializing OpenAPI document to JSON");
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Writes string content to a file.
///
/// Creates the file and any missing parent directories, or overwrites the file
/// if it exists. Callers write only once the whole document is serialized, so a
/// failed run never leaves a partial file.
///
/// # Arguments
///
/// * `content` - The string content to write
/// * `path` - The file path to write to
///
/// # Returns
///
/// Returns `Ok(())` on success.
///
/// # Errors
///
/// Returns [`Error::OutputWrite`] naming `path` if a parent directory cannot be
/// created or the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    let output_error = |source: std::io::Error| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(output_error)?;
    }

    fs::write(path, content).map_err(output_error)?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
