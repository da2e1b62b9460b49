// Static export of the full site.
mod support;

use anyhow::Result;
use kbview::export::page_file;
use kbview::{Browser, Route, export_site, site_routes};
use std::fs;
use tempfile::TempDir;

use support::{bundled_index, memory_source};

#[test]
fn export_writes_every_route() -> Result<()> {
    let index = bundled_index();
    let source = memory_source(&[
        ("angular/components/componentanatomy", "## Anatomy\n\nBody text."),
        ("csharpjunior/clr/overview", "## CLR"),
    ]);
    let out = TempDir::new()?;
    let mut browser = Browser::new(&index, source);

    let report = export_site(&mut browser, out.path())?;
    let routes = site_routes(&index);
    assert_eq!(report.pages_written, routes.len());
    assert_eq!(report.missing_content.len(), index.summary().threads - 2);

    for route in &routes {
        assert!(
            page_file(out.path(), route).is_file(),
            "missing page for {route}"
        );
    }
    assert!(out.path().join("404.html").is_file());
    assert!(out.path().join("assets/site.css").is_file());
    Ok(())
}

#[test]
fn exported_pages_carry_sidebar_and_content() -> Result<()> {
    let index = bundled_index();
    let source = memory_source(&[("angular/components/componentanatomy", "## Anatomy")]);
    let out = TempDir::new()?;
    let mut browser = Browser::new(&index, source);
    export_site(&mut browser, out.path())?;

    let thread_page = fs::read_to_string(page_file(
        out.path(),
        &Route::parse("/frontend/angular/components/componentanatomy").unwrap(),
    ))?;
    assert!(thread_page.contains("<h2>Anatomy</h2>"));
    assert!(thread_page.contains("data-mode=\"threads\""));
    assert!(thread_page.contains(
        "<a href=\"/frontend/angular/components/componentanatomy\" class=\"active\" aria-current=\"page\">"
    ));

    let home = fs::read_to_string(out.path().join("index.html"))?;
    assert!(home.contains("data-mode=\"categories\""));
    assert!(home.contains("href=\"/frontend/angular\""));
    assert!(!home.contains("<details open>"), "home starts collapsed");

    let not_found = fs::read_to_string(page_file(out.path(), &Route::NotFound))?;
    assert!(not_found.contains("Page not found"));
    Ok(())
}
