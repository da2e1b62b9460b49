//! HTML rendering of pages.
//!
//! Renderers are pure functions over a [`PageContext`]: the current page, the
//! navigation store and the sidebar presentation state. Links are plain
//! anchors to route paths, so the output works without a script runtime.

mod article;
mod grid;
mod layout;
mod sidebar;

pub use layout::{SITE_CSS, STYLESHEET_PATH};

use crate::navigation::{NavigationStore, SidebarState};
use crate::pages::Page;
use crate::routes;
use maud::{Markup, html};

pub struct PageContext<'p, 'a> {
    pub site_title: &'p str,
    pub current_path: String,
    pub page: &'p Page<'a>,
    pub store: &'p NavigationStore<'a>,
    pub sidebar: &'p SidebarState,
}

/// Full HTML document for the page in `ctx`.
pub fn render_document(ctx: &PageContext<'_, '_>) -> String {
    let body = render_body(ctx.page);
    let sidebar = sidebar::render_sidebar(ctx);
    layout::render_layout(ctx, sidebar, body).into_string()
}

fn render_body(page: &Page<'_>) -> Markup {
    match page {
        Page::Home { categories } => html! {
            h1 { "Categories" }
            (grid::category_grid(categories))
        },
        Page::Subcategory(chain) => {
            let trail = breadcrumbs(&[
                (chain.category.name.as_str(), Some("/".to_string())),
                (chain.subcategory.name.as_str(), None),
            ]);
            html! {
                (trail)
                h1 { (chain.subcategory.name) }
                @if !chain.subcategory.description.is_empty() {
                    p class="lead" { (chain.subcategory.description) }
                }
                (grid::topic_grid(*chain))
            }
        }
        Page::Topic(chain) => {
            let trail = breadcrumbs(&[
                (chain.category.name.as_str(), Some("/".to_string())),
                (
                    chain.subcategory.name.as_str(),
                    Some(routes::subcategory_path(
                        &chain.category.id,
                        &chain.subcategory.id,
                    )),
                ),
                (chain.topic.title.as_str(), None),
            ]);
            html! {
                (trail)
                h1 { (chain.topic.title) }
                @if !chain.topic.description.is_empty() {
                    p class="lead" { (chain.topic.description) }
                }
                (grid::thread_grid(*chain))
            }
        }
        Page::Thread { chain, content } => article::render_thread(*chain, content),
        Page::NotFound { .. } => not_found_body(),
    }
}

fn not_found_body() -> Markup {
    html! {
        section class="not-found" {
            h1 { "Page not found" }
            p { "Nothing lives at this address." }
            p { a href="/" { "Back to categories" } }
        }
    }
}

/// Breadcrumb trail; entries with a target render as links.
fn breadcrumbs(entries: &[(&str, Option<String>)]) -> Markup {
    html! {
        nav class="breadcrumbs" aria-label="Breadcrumb" {
            @for (idx, (label, target)) in entries.iter().enumerate() {
                @if idx > 0 {
                    span class="separator" { "/" }
                }
                @match target {
                    Some(href) => { a href=(href) { (label) } }
                    None => { span aria-current="page" { (label) } }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breadcrumbs_link_all_but_last() {
        let html = breadcrumbs(&[("Frontend", Some("/".to_string())), ("Angular", None)])
            .into_string();
        assert!(html.contains("<a href=\"/\">Frontend</a>"));
        assert!(html.contains("<span aria-current=\"page\">Angular</span>"));
    }

    #[test]
    fn breadcrumb_labels_are_escaped() {
        let html = breadcrumbs(&[("C# & .NET", None)]).into_string();
        assert!(html.contains("C# &amp; .NET"));
    }
}
