//! Validate a catalog file against the catalog schema and index rules.
//!
//! Usage:
//!   catalog-validate --file catalogs/knowledge_base_v1.json
//!   catalog-validate < catalog.json

use anyhow::{Context, Result};
use clap::Parser;
use kbview::catalog::{CatalogIndex, KnowledgeCatalog, allowed_schema_versions};
use kbview::{CatalogSchema, default_catalog_schema_path, find_site_root, logging};
use serde_json::Value;
use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "catalog-validate")]
#[command(about = "Validate a knowledge catalog file")]
struct Cli {
    /// Optional input file; reads stdin when omitted.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Optional schema path; defaults to schema/catalog.schema.json under the site root.
    #[arg(long)]
    schema: Option<PathBuf>,
    #[arg(long, env = "KBVIEW_LOG")]
    log: Option<String>,
}

fn read_input(file: Option<&PathBuf>) -> Result<Value> {
    let mut buf = String::new();
    if let Some(path) = file {
        File::open(path)
            .with_context(|| format!("opening input file {}", path.display()))?
            .read_to_string(&mut buf)
            .with_context(|| format!("reading input file {}", path.display()))?;
    } else {
        stdin()
            .read_to_string(&mut buf)
            .context("reading stdin for catalog JSON")?;
    }
    let value: Value = serde_json::from_str(&buf).context("parsing input JSON")?;
    Ok(value)
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log.as_deref());

    let schema_path = match cli.schema {
        Some(path) => path,
        None => default_catalog_schema_path(&find_site_root().context("locating site root")?),
    };
    let schema = CatalogSchema::load(&schema_path, &allowed_schema_versions())
        .with_context(|| format!("loading catalog schema {}", schema_path.display()))?;

    let input = read_input(cli.file.as_ref())?;
    schema.validate(&input)?;

    let catalog: KnowledgeCatalog =
        serde_json::from_value(input).context("decoding catalog document")?;
    let index = CatalogIndex::from_catalog(catalog)?;
    let summary = index.summary();
    info!(schema_version = schema.schema_version(), "catalog valid");
    println!(
        "{}: {} categories, {} subcategories, {} topics, {} threads",
        index.key(),
        summary.categories,
        summary.subcategories,
        summary.topics,
        summary.threads
    );
    Ok(())
}
