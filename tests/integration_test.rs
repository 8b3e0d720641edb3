use json_to_openapi::{
    cli::{self, CliArgs},
    error::Error,
    inferencer::{infer, infer_with_options, InferenceOptions, ROOT_SCHEMA_NAME},
    openapi_builder::OpenApiDocument,
    parser::JsonParser,
    serializer::{serialize_json, serialize_yaml},
};
use clap::Parser;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn infer_fixture(name: &str) -> OpenApiDocument {
    let parsed = JsonParser::parse_file(&fixture(name)).expect("Failed to parse fixture");
    infer(&parsed.value).expect("Failed to infer document")
}

fn cli_args(input: &Path, extra: &[&str]) -> CliArgs {
    let mut argv = vec!["json-to-openapi".to_string(), input.display().to_string()];
    argv.extend(extra.iter().map(|s| s.to_string()));
    CliArgs::parse_from(argv)
}

#[test]
fn test_users_collection_end_to_end() {
    let doc = infer_fixture("users.json");

    let as_json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        as_json["components"]["schemas"]["User"],
        json!({
            "type": "object",
            "properties": {
                "id": {"type": "integer"},
                "name": {"type": "string"},
                "active": {"type": "boolean"}
            }
        })
    );
    assert_eq!(
        as_json["paths"]["/users"]["get"]["responses"]["200"]["content"]["application/json"]
            ["schema"]["items"]["$ref"],
        "#/components/schemas/User"
    );
    assert_eq!(as_json["paths"]["/users"]["get"]["summary"], "List users");
}

#[test]
fn test_config_object_has_no_path() {
    let doc = infer_fixture("config.json");

    assert!(doc.paths.is_empty());
    assert_eq!(
        serde_json::to_value(&doc.components.schemas["Config"]).unwrap(),
        json!({
            "type": "object",
            "properties": {
                "retries": {"type": "integer"},
                "tags": {"type": "array", "items": {"type": "string"}}
            }
        })
    );
}

#[test]
fn test_empty_array_produces_nothing() {
    let doc = infer_fixture("empty_items.json");

    assert!(doc.paths.is_empty());
    assert!(doc.components.schemas.is_empty());
    assert_eq!(doc.openapi, "3.0.0");
}

#[test]
fn test_top_level_array_is_malformed() {
    let err = JsonParser::parse_file(&fixture("top_level_array.json")).unwrap_err();
    assert!(matches!(err, Error::MalformedInput { .. }));
}

#[test]
fn test_mixed_document() {
    let doc = infer_fixture("shop.json");

    let paths: Vec<_> = doc.paths.keys().map(String::as_str).collect();
    assert_eq!(paths, vec!["/products", "/categories"]);

    let schemas: Vec<_> = doc.components.schemas.keys().map(String::as_str).collect();
    assert_eq!(schemas, vec!["Product", "Categorie", "Setting", ROOT_SCHEMA_NAME]);

    let schemas = serde_json::to_value(&doc.components.schemas).unwrap();
    assert_eq!(
        schemas["Product"]["properties"],
        json!({
            "sku": {"type": "string"},
            "price": {"type": "number"},
            "stock": {"type": "integer"},
            "featured": {"type": "boolean"},
            "tags": {"type": "array", "items": {"type": "string"}},
            "dimensions": {"type": "object"},
            "discontinued_at": {"type": "string"}
        })
    );
    assert_eq!(
        schemas[ROOT_SCHEMA_NAME]["properties"],
        json!({
            "store": {"type": "string"},
            "open": {"type": "boolean"},
            "rating": {"type": "number"}
        })
    );
}

#[test]
fn test_mixed_document_with_item_type_inference() {
    let parsed = JsonParser::parse_file(&fixture("shop.json")).unwrap();
    let options = InferenceOptions {
        infer_item_types: true,
        ..InferenceOptions::default()
    };

    let doc = infer_with_options(&parsed.value, &options).unwrap();

    let tags = serde_json::to_value(&doc.components.schemas["Product"]).unwrap()["properties"]
        ["tags"]
        .clone();
    assert_eq!(tags, json!({"type": "array", "items": {"type": "integer"}}));
}

#[test]
fn test_yaml_output_reparses_to_same_structure() {
    for name in ["users.json", "config.json", "empty_items.json", "shop.json"] {
        let doc = infer_fixture(name);
        let yaml = serialize_yaml(&doc).unwrap();

        let reparsed: Value = serde_yaml::from_str(&yaml)
            .unwrap_or_else(|e| panic!("{} produced invalid YAML: {}", name, e));
        assert_eq!(reparsed, serde_json::to_value(&doc).unwrap(), "fixture {}", name);
    }
}

#[test]
fn test_json_output_reparses_to_same_document() {
    let doc = infer_fixture("shop.json");
    let json = serialize_json(&doc).unwrap();

    let reparsed: OpenApiDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed, doc);
}

#[test]
fn test_cli_writes_yaml_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out").join("api_spec.yml");

    let args = cli_args(&fixture("users.json"), &["-o", output.to_str().unwrap()]);
    cli::run(cli::parse_args_from_parsed(args).unwrap()).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("openapi: 3.0.0") || content.contains("openapi: '3.0.0'"));
    assert!(content.contains("/users:"));
    assert!(content.contains("User:"));
}

#[test]
fn test_cli_writes_json_file_with_custom_info() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("api_spec.json");

    let args = cli_args(
        &fixture("config.json"),
        &[
            "-f",
            "json",
            "-o",
            output.to_str().unwrap(),
            "--title",
            "Settings API",
            "--api-version",
            "0.2.0",
        ],
    );
    cli::run(args).unwrap();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["info"]["title"], "Settings API");
    assert_eq!(written["info"]["version"], "0.2.0");
    assert_eq!(written["info"]["description"], "API generated from a JSON file.");
    assert!(written["components"]["schemas"]["Config"].is_object());
}

#[test]
fn test_cli_malformed_input_leaves_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("api_spec.yml");

    let args = cli_args(&fixture("top_level_array.json"), &["-o", output.to_str().unwrap()]);
    let err = cli::run(args).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::MalformedInput { .. })
    ));
    assert!(!output.exists(), "no output file should be written");
}

#[test]
fn test_cli_non_utf8_input_leaves_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("api_spec.yml");

    let args = cli_args(&fixture("latin1.json"), &["-o", output.to_str().unwrap()]);
    let args = cli::parse_args_from_parsed(args).unwrap();
    let err = cli::run(args).unwrap_err();

    match err.downcast_ref::<Error>() {
        Some(Error::MalformedInput { path, .. }) => assert_eq!(path, &fixture("latin1.json")),
        other => panic!("expected MalformedInput, got {:?}", other),
    }
    assert!(!output.exists(), "no output file should be written");
}

#[test]
fn test_cli_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let args = cli_args(&temp_dir.path().join("absent.json"), &[]);

    let err = cli::parse_args_from_parsed(args).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::InputNotFound { .. })
    ));
}
