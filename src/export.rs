//! Static-site export.
//!
//! Renders every route reachable from the catalog into `<out>/<path>/index.html`
//! so the site can be served by any static file host. Pages are written via a
//! temp file in the target directory and persisted into place.

use crate::browser::Browser;
use crate::catalog::CatalogIndex;
use crate::content::ContentSource;
use crate::navigation::SidebarState;
use crate::pages::{ContentState, Page};
use crate::render::{SITE_CSS, STYLESHEET_PATH};
use crate::routes::Route;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

#[derive(Debug, Default)]
pub struct ExportReport {
    pub pages_written: usize,
    /// Thread routes whose article could not be loaded.
    pub missing_content: Vec<String>,
}

/// Every route of the site in catalog order, ending with the not-found page.
pub fn site_routes(index: &CatalogIndex) -> Vec<Route> {
    let mut routes = vec![Route::Home];
    for subcategory in index.subcategories() {
        routes.push(Route::for_subcategory(subcategory));
        for topic in subcategory.subcategory.topics.iter() {
            routes.push(Route::Topic {
                category: subcategory.category.id.clone(),
                subcategory: subcategory.subcategory.id.clone(),
                topic: topic.id.clone(),
            });
            for thread in &topic.threads {
                routes.push(Route::Thread {
                    category: subcategory.category.id.clone(),
                    subcategory: subcategory.subcategory.id.clone(),
                    topic: topic.id.clone(),
                    thread: thread.id.clone(),
                });
            }
        }
    }
    routes.push(Route::NotFound);
    routes
}

pub fn export_site<S: ContentSource>(
    browser: &mut Browser<'_, S>,
    out_dir: &Path,
) -> Result<ExportReport> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    let mut report = ExportReport::default();

    for route in site_routes(browser.index()) {
        *browser.sidebar_mut() = SidebarState::default();
        let path = route.path();
        browser.open(&path);

        if let Page::Thread {
            content: ContentState::Missing(reason),
            ..
        } = browser.page()
        {
            warn!(route = %path, %reason, "exporting thread without content");
            report.missing_content.push(path.clone());
        }

        let target = page_file(out_dir, &route);
        write_atomic(&target, browser.render().as_bytes())?;
        if route == Route::NotFound {
            write_atomic(&out_dir.join("404.html"), browser.render().as_bytes())?;
        }
        report.pages_written += 1;
    }

    write_atomic(&out_dir.join(STYLESHEET_PATH), SITE_CSS.as_bytes())?;
    info!(
        pages = report.pages_written,
        missing = report.missing_content.len(),
        out = %out_dir.display(),
        "export finished"
    );
    Ok(report)
}

/// `index.html` inside the directory named by the route's path.
pub fn page_file(out_dir: &Path, route: &Route) -> PathBuf {
    route
        .path()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(out_dir.to_path_buf(), |acc, segment| acc.join(segment))
        .join("index.html")
}

fn write_atomic(target: &Path, bytes: &[u8]) -> Result<()> {
    let dir = target
        .parent()
        .with_context(|| format!("{} has no parent directory", target.display()))?;
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    temp.write_all(bytes)
        .with_context(|| format!("writing {}", target.display()))?;
    temp.persist(target)
        .with_context(|| format!("persisting {}", target.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_file_nests_by_segment() {
        let out = Path::new("/tmp/site");
        assert_eq!(page_file(out, &Route::Home), out.join("index.html"));
        assert_eq!(
            page_file(out, &Route::parse("/sql/efcore/tracking").unwrap()),
            out.join("sql").join("efcore").join("tracking").join("index.html")
        );
        assert_eq!(
            page_file(out, &Route::NotFound),
            out.join("not-found").join("index.html")
        );
    }

    #[test]
    fn site_routes_cover_every_node() {
        let index = CatalogIndex::bundled().unwrap();
        let summary = index.summary();
        let routes = site_routes(&index);
        assert_eq!(
            routes.len(),
            2 + summary.subcategories + summary.topics + summary.threads
        );
        assert_eq!(routes.first(), Some(&Route::Home));
        assert_eq!(routes.last(), Some(&Route::NotFound));
    }
}
