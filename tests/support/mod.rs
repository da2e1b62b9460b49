#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use kbview::{CatalogIndex, MemoryContentSource};
use std::path::PathBuf;
use std::process::{Command, Output};

/// Crate root; doubles as the site root in tests.
pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn bundled_index() -> CatalogIndex {
    CatalogIndex::bundled().expect("bundled catalog loads")
}

pub fn catalog_path() -> PathBuf {
    repo_root().join("catalogs/knowledge_base_v1.json")
}

/// In-memory source with one article per content path.
pub fn memory_source(entries: &[(&str, &str)]) -> MemoryContentSource {
    let mut source = MemoryContentSource::new();
    for (path, text) in entries {
        source.insert(path, *text);
    }
    source
}

pub fn kbview_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_kbview"))
}

pub fn catalog_validate_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_catalog-validate"))
}

/// Run a command, failing with its stderr when it exits non-zero.
pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))?;
    if !output.status.success() {
        bail!(
            "{:?} exited with {:?}\nstderr:\n{}",
            cmd.get_program(),
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}
