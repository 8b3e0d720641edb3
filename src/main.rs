//! JSON to OpenAPI - Command-line tool for generating OpenAPI documents from sample JSON.
//!
//! # Usage
//!
//! ```bash
//! json-to-openapi [OPTIONS] <INPUT>
//! ```
//!
//! # Examples
//!
//! Generate YAML documentation:
//! ```bash
//! json-to-openapi sample.json -o api_spec.yml
//! ```
//!
//! Generate JSON documentation:
//! ```bash
//! json-to-openapi sample.json -f json -o api_spec.json
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! json-to-openapi sample.json -v
//! ```

use anyhow::Result;
use clap::Parser;
use json_to_openapi::cli;
use log::info;

fn main() -> Result<()> {
    // Parse first so the verbose flag can pick the log level
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("JSON to OpenAPI starting...");

    let args = cli::parse_args_from_parsed(args)?;

    cli::run(args)?;

    info!("OpenAPI document generation completed successfully");

    Ok(())
}
