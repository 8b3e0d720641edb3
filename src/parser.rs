use crate::error::{Error, Result};
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Parser for sample JSON documents.
///
/// Reads the whole file into memory and parses it with `serde_json`, keeping the
/// key order of the input. The top-level value must be an object.
///
/// # Example
///
/// ```no_run
/// use json_to_openapi::parser::JsonParser;
/// use std::path::Path;
///
/// let parsed = JsonParser::parse_file(Path::new("sample.json")).unwrap();
/// println!("Parsed {}", parsed.path.display());
/// ```
pub struct JsonParser;

/// A successfully parsed JSON document.
#[derive(Debug)]
pub struct ParsedDocument {
    /// Path to the source file
    pub path: PathBuf,
    /// The parsed document, always a JSON object
    pub value: Value,
}

impl JsonParser {
    /// Parses a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or read ([`Error::InputNotFound`])
    /// - The content is not valid UTF-8 JSON or not a top-level object
    ///   ([`Error::MalformedInput`])
    pub fn parse_file(path: &Path) -> Result<ParsedDocument> {
        debug!("Parsing file: {}", path.display());

        // Raw bytes: decoding failures belong to the JSON parser, not to I/O
        let content = fs::read(path).map_err(|source| Error::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let value = Self::parse_slice(&content).map_err(|err| match err {
            Error::MalformedInput { message, .. } => Error::MalformedInput {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;

        debug!("Successfully parsed file: {}", path.display());

        Ok(ParsedDocument {
            path: path.to_path_buf(),
            value,
        })
    }

    /// Parses JSON text into a document.
    pub fn parse_str(content: &str) -> Result<Value> {
        Self::parse_slice(content.as_bytes())
    }

    /// Parses raw JSON bytes into a document.
    ///
    /// Invalid UTF-8 is reported by `serde_json` like any other syntax error.
    pub fn parse_slice(content: &[u8]) -> Result<Value> {
        let value: Value = serde_json::from_slice(content)
            .map_err(|err| Error::malformed(format!("invalid JSON: {}", err)))?;

        if !value.is_object() {
            return Err(Error::malformed("top-level value is not an object"));
        }

        Ok(value)
    }
}
