//! Runtime configuration.
//!
//! Values come from CLI flags (which clap also reads from `KBVIEW_*` env
//! vars) and fall back to site-root discovery.

use crate::catalog::CatalogIndex;
use crate::find_site_root;
use anyhow::{Context, Result, bail};
use std::env;
use std::path::PathBuf;
use tracing::debug;

pub const ENV_ROOT: &str = "KBVIEW_ROOT";
pub const ENV_CATALOG: &str = "KBVIEW_CATALOG";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    /// The catalog compiled into the binary.
    Bundled,
    File(PathBuf),
}

/// Explicit settings supplied by the caller; `None` means "discover".
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub root: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Directory that contains `assets/data/threads`.
    pub site_root: PathBuf,
    pub catalog: CatalogSource,
}

impl Config {
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let site_root = match overrides.root {
            Some(root) => {
                if !root.is_dir() {
                    bail!("site root {} is not a directory", root.display());
                }
                root.canonicalize()
                    .with_context(|| format!("resolving site root {}", root.display()))?
            }
            None => match find_site_root() {
                Ok(root) => root,
                Err(err) => {
                    debug!(error = %err, "site root not found; using current directory");
                    env::current_dir().context("reading current directory")?
                }
            },
        };

        let catalog = match overrides.catalog {
            Some(path) => CatalogSource::File(path),
            None => CatalogSource::Bundled,
        };

        Ok(Self { site_root, catalog })
    }

    pub fn load_index(&self) -> Result<CatalogIndex> {
        match &self.catalog {
            CatalogSource::Bundled => CatalogIndex::bundled(),
            CatalogSource::File(path) => CatalogIndex::load(path),
        }
    }
}
