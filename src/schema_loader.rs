//! JSON Schema loading for catalog documents.
//!
//! The schema pins its accepted `schema_version` through a `const`; the loader
//! checks that value against the allowed set before compiling a validator.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

/// Default relative path to the catalog JSON Schema.
pub const DEFAULT_CATALOG_SCHEMA_PATH: &str = "schema/catalog.schema.json";

/// Compiled catalog schema plus the version it pins.
pub struct CatalogSchema {
    compiled: JSONSchema,
    schema_version: String,
}

impl CatalogSchema {
    /// Load and compile the schema, rejecting versions outside `allowed`.
    pub fn load(path: &Path, allowed: &BTreeSet<String>) -> Result<Self> {
        let schema: Value = serde_json::from_reader(
            File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
        )
        .with_context(|| format!("parsing schema {}", path.display()))?;

        let schema_version = extract_schema_version(&schema, "/properties/schema_version/const")
            .ok_or_else(|| anyhow!("schema {} missing schema_version const", path.display()))?;
        if !allowed.contains(&schema_version) {
            bail!(
                "schema_version '{}' not in allowed set {:?}",
                schema_version,
                allowed
            );
        }

        let compiled = JSONSchema::compile(&schema)
            .map_err(|err| anyhow!("compiling schema {}: {err}", path.display()))?;
        Ok(Self {
            compiled,
            schema_version,
        })
    }

    pub fn schema_version(&self) -> &str {
        &self.schema_version
    }

    /// Validate a document, folding every violation into one error.
    pub fn validate(&self, instance: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| format!("{} at {}", err, err.instance_path))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("catalog failed schema validation:\n{}", details);
        }
        Ok(())
    }
}

fn extract_schema_version(schema: &Value, pointer: &str) -> Option<String> {
    let version = schema.pointer(pointer).and_then(Value::as_str)?;
    if version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Some(version.to_string())
    } else {
        None
    }
}
