//! Knowledge-base viewer.
//!
//! A static four-level catalog (category → subcategory → topic → thread)
//! rendered as navigable HTML pages with a collapsible sidebar, card grids and
//! a markdown article view. Article bodies are plain files found by
//! convention under the site root.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod browser;
pub mod catalog;
pub mod config;
pub mod content;
pub mod export;
pub mod logging;
pub mod navigation;
pub mod pages;
pub mod render;
pub mod routes;
pub mod schema_loader;

pub use browser::{Browser, FetchOutcome, FetchTicket, Navigation};
pub use catalog::{
    CatalogIndex, Category, CategoryId, ContentPath, Icon, NotFound, Subcategory, SubcategoryId,
    Thread, ThreadId, Topic, TopicId,
};
pub use config::{CatalogSource, Config, ConfigOverrides};
pub use content::{
    ContentError, ContentSource, FsContentSource, MemoryContentSource, content_locator,
    fetch_thread_content, process_markdown,
};
pub use export::{ExportReport, export_site, site_routes};
pub use navigation::{NavigationMode, NavigationStore, SidebarListing, SidebarState};
pub use pages::{ContentState, Page};
pub use routes::{NOT_FOUND_PATH, Route};
pub use schema_loader::{CatalogSchema, DEFAULT_CATALOG_SCHEMA_PATH};

fn is_site_root(candidate: &Path) -> bool {
    candidate.join(content::CONTENT_PREFIX).is_dir()
}

fn site_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_site_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_site_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the directory holding `assets/data/threads`.
///
/// Search order: `KBVIEW_ROOT`, the current directory and its ancestors, the
/// executable's directory and its ancestors, then the build-time hint.
pub fn find_site_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var(config::ENV_ROOT) {
        if let Some(root) = site_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(root) = search_upwards(&cwd) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("KBVIEW_ROOT_HINT") {
        if let Some(root) = site_root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!(
        "Unable to locate a site root containing {}. Set {} to the site directory.",
        content::CONTENT_PREFIX,
        config::ENV_ROOT
    );
}

/// Default catalog path under a site root.
pub fn default_catalog_path(site_root: &Path) -> PathBuf {
    site_root.join(catalog::DEFAULT_CATALOG_PATH)
}

/// Default catalog schema path under a site root.
pub fn default_catalog_schema_path(site_root: &Path) -> PathBuf {
    site_root.join(schema_loader::DEFAULT_CATALOG_SCHEMA_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn hint_requires_content_tree() {
        let temp = TempDir::new().unwrap();
        let hint = temp.path().to_string_lossy().into_owned();
        assert!(site_root_from_hint(&hint).is_none());

        fs::create_dir_all(temp.path().join(content::CONTENT_PREFIX)).unwrap();
        assert_eq!(
            site_root_from_hint(&hint),
            Some(fs::canonicalize(temp.path()).unwrap())
        );
    }

    #[test]
    fn upward_search_finds_ancestor_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(content::CONTENT_PREFIX)).unwrap();
        let nested = temp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(
            search_upwards(&nested),
            Some(fs::canonicalize(temp.path()).unwrap())
        );
    }
}
