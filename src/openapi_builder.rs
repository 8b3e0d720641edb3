use crate::schema_generator::Schema;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// OpenAPI version written into every generated document
pub const OPENAPI_VERSION: &str = "3.0.0";

/// OpenAPI document builder
///
/// Accumulates paths and component schemas while the inferencer walks the input,
/// then turns into an [`OpenApiDocument`] with [`OpenApiBuilder::build`].
#[derive(Debug, Clone)]
pub struct OpenApiBuilder {
    /// OpenAPI info section
    info: Info,
    /// Paths collection (URL path -> PathItem)
    paths: IndexMap<String, PathItem>,
    /// Component schemas (schema name -> Schema)
    schemas: IndexMap<String, Schema>,
}

/// OpenAPI Info object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// API title
    pub title: String,
    /// API version
    pub version: String,
    /// API description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            title: "Generated API".to_string(),
            version: "1.0.0".to_string(),
            description: Some("API generated from a JSON file.".to_string()),
        }
    }
}

/// OpenAPI PathItem object
///
/// Generated documents only ever list collections, so GET is the only operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// GET operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
}

/// OpenAPI Operation object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Responses keyed by status code
    pub responses: IndexMap<String, Response>,
}

/// OpenAPI Response object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Response description
    pub description: String,
    /// Response content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
}

/// OpenAPI MediaType object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// Schema for this media type
    pub schema: Schema,
}

/// OpenAPI Components object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Schema definitions
    pub schemas: IndexMap<String, Schema>,
}

/// Complete OpenAPI document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version
    pub openapi: String,
    /// API info
    pub info: Info,
    /// API paths
    pub paths: IndexMap<String, PathItem>,
    /// Components (schemas)
    pub components: Components,
}

impl OpenApiBuilder {
    /// Creates a new `OpenApiBuilder` with the default info block.
    ///
    /// The default info is titled "Generated API", version `1.0.0`, with the
    /// description "API generated from a JSON file.". Paths and schemas start empty.
    pub fn new() -> Self {
        debug!("Initializing OpenApiBuilder");
        Self {
            info: Info::default(),
            paths: IndexMap::new(),
            schemas: IndexMap::new(),
        }
    }

    /// Replaces the info block of the document.
    ///
    /// # Arguments
    ///
    /// * `info` - Title, version and optional description of the API
    ///
    /// # Returns
    ///
    /// Returns the builder, for chaining.
    pub fn with_info(mut self, info: Info) -> Self {
        self.info = info;
        self
    }

    /// Registers a component schema under `#/components/schemas/<name>`.
    ///
    /// A schema registered twice under the same name keeps its first position
    /// and takes the latest definition.
    ///
    /// # Arguments
    ///
    /// * `name` - Schema name, usually derived with [`crate::naming::item_type_name`]
    /// * `schema` - The object schema to register
    pub fn add_schema(&mut self, name: String, schema: Schema) {
        debug!("Adding schema: {}", name);
        self.schemas.insert(name, schema);
    }

    /// Registers a `GET /<key>` listing path.
    ///
    /// The operation is summarized as `List <key>` and its `200` response returns
    /// an `application/json` array of `$ref: #/components/schemas/<item_type>`.
    /// The referenced schema is not checked; register it with [`Self::add_schema`].
    ///
    /// # Arguments
    ///
    /// * `key` - The top-level key of the sample document, used verbatim in the path
    /// * `item_type` - Name of the component schema describing one element
    pub fn add_collection_path(&mut self, key: &str, item_type: &str) {
        let path = format!("/{}", key);
        debug!("Adding path: GET {} -> {}[]", path, item_type);

        let mut content = IndexMap::new();
        content.insert(
            "application/json".to_string(),
            MediaType {
                schema: Schema::array_of(item_type),
            },
        );

        let mut responses = IndexMap::new();
        responses.insert(
            "200".to_string(),
            Response {
                description: format!("Array of {}", item_type),
                content: Some(content),
            },
        );

        let operation = Operation {
            summary: Some(format!("List {}", key)),
            responses,
        };

        self.paths.insert(path, PathItem { get: Some(operation) });
    }

    /// Checks whether a schema with this name has already been registered.
    ///
    /// # Arguments
    ///
    /// * `name` - Schema name to look up
    ///
    /// # Returns
    ///
    /// Returns `true` if [`Self::add_schema`] was called with this name.
    pub fn has_schema(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Builds the final OpenAPI document, consuming the builder.
    ///
    /// `paths` and `components.schemas` are always present, even when empty.
    ///
    /// # Returns
    ///
    /// Returns the complete [`OpenApiDocument`], ready for the [`crate::serializer`].
    pub fn build(self) -> OpenApiDocument {
        debug!(
            "Building final OpenAPI document ({} paths, {} schemas)",
            self.paths.len(),
            self.schemas.len()
        );

        OpenApiDocument {
            openapi: OPENAPI_VERSION.to_string(),
            info: self.info,
            paths: self.paths,
            components: Components {
                schemas: self.schemas,
            },
        }
    }
}

impl Default for OpenApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}
