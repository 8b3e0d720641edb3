use crate::error::Error;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::io;
use std::path::PathBuf;

/// JSON to OpenAPI - Generate a starting-point OpenAPI document from a sample JSON file
#[derive(Parser, Debug)]
#[command(name = "json-to-openapi")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the sample JSON file
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Output format (yaml or json)
    #[arg(short = 'f', long = "format", value_enum, default_value = "yaml")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Title of the generated API
    #[arg(long = "title", default_value = "Generated API")]
    pub title: String,

    /// Version of the generated API
    #[arg(long = "api-version", default_value = "1.0.0")]
    pub api_version: String,

    /// Description of the generated API
    #[arg(long = "description", default_value = "API generated from a JSON file.")]
    pub description: String,

    /// Infer array item types from the first element instead of always using string
    #[arg(long = "infer-item-types")]
    pub infer_item_types: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// YAML format
    Yaml,
    /// JSON format
    Json,
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.input_path.exists() {
        return Err(Error::InputNotFound {
            path: args.input_path.clone(),
            source: io::Error::new(io::ErrorKind::NotFound, "file does not exist"),
        }
        .into());
    }

    if !args.input_path.is_file() {
        return Err(Error::InputNotFound {
            path: args.input_path.clone(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        }
        .into());
    }

    info!("Input file: {}", args.input_path.display());
    info!("Output format: {:?}", args.output_format);
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }

    Ok(args)
}

/// Run the main workflow
///
/// Nothing is written until the whole document has been inferred and serialized,
/// so a failing run leaves no output file behind.
pub fn run(args: CliArgs) -> Result<()> {
    use crate::inferencer::{infer_with_options, InferenceOptions};
    use crate::openapi_builder::Info;
    use crate::parser::JsonParser;
    use crate::serializer::{serialize_json, serialize_yaml, write_to_file};

    info!("Starting OpenAPI document generation...");

    // Step 1: Read and parse the sample document
    info!("Parsing {}...", args.input_path.display());
    let parsed = JsonParser::parse_file(&args.input_path)?;

    // Step 2: Infer paths and schemas
    let options = InferenceOptions {
        infer_item_types: args.infer_item_types,
        info: Info {
            title: args.title,
            version: args.api_version,
            description: Some(args.description).filter(|d| !d.is_empty()),
        },
    };
    let document = infer_with_options(&parsed.value, &options)?;

    // Step 3: Serialize to requested format
    info!("Serializing to {:?} format...", args.output_format);
    let content = match args.output_format {
        OutputFormat::Yaml => serialize_yaml(&document)?,
        OutputFormat::Json => serialize_json(&document)?,
    };

    // Step 4: Output to file or stdout
    if let Some(output_path) = &args.output_path {
        info!("Writing output to: {}", output_path.display());
        write_to_file(&content, output_path)?;
        info!("Successfully wrote OpenAPI document to {}", output_path.display());
    } else {
        println!("{}", content);
    }

    info!("Generation complete!");
    info!("Summary:");
    info!("  - Paths: {}", document.paths.len());
    info!("  - Schemas: {}", document.components.schemas.len());

    Ok(())
}
