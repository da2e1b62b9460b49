//! Sidebar listings for the three navigation modes.

use crate::catalog::{Category, Thread, Topic};
use crate::navigation::SidebarListing;
use crate::render::PageContext;
use crate::routes;
use maud::{Markup, html};

/// Sidebar contents for whatever level the store currently lists.
pub(crate) fn render_sidebar(ctx: &PageContext<'_, '_>) -> Markup {
    html! {
        nav class="sidebar-nav" {
            @match ctx.store.listing() {
                SidebarListing::Categories(categories) => { (category_listing(ctx, categories)) }
                SidebarListing::Topics(topics) => { (topic_listing(ctx, topics)) }
                SidebarListing::Threads(threads) => { (thread_listing(ctx, threads)) }
            }
        }
    }
}

fn category_listing(ctx: &PageContext<'_, '_>, categories: &[Category]) -> Markup {
    html! {
        h2 { a href="/" { "Categories" } }
        ul class="categories" {
            @for category in categories {
                li {
                    details open[ctx.sidebar.is_expanded(&category.id)] {
                        summary {
                            span class="icon" data-icon=(category.icon.as_str()) { (category.icon.glyph()) }
                            " " (category.name)
                        }
                        ul {
                            @for subcategory in &category.subcategories {
                                (link_item(
                                    ctx,
                                    &routes::subcategory_path(&category.id, &subcategory.id),
                                    &subcategory.name
                                ))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn topic_listing(ctx: &PageContext<'_, '_>, topics: &[Topic]) -> Markup {
    html! {
        a class="sidebar-back" href="/" { "\u{2190} All categories" }
        @if let (Some(category), Some(subcategory)) = (ctx.store.category_id(), ctx.store.subcategory_id()) {
            ul class="topics" {
                @for topic in topics {
                    (link_item(ctx, &routes::topic_path(category, subcategory, &topic.id), &topic.title))
                }
            }
        }
    }
}

fn thread_listing(ctx: &PageContext<'_, '_>, threads: &[Thread]) -> Markup {
    let (Some(category), Some(subcategory), Some(topic)) = (
        ctx.store.category_id(),
        ctx.store.subcategory_id(),
        ctx.store.topic_id(),
    ) else {
        return html! { a class="sidebar-back" href="/" { "\u{2190} All categories" } };
    };
    html! {
        a class="sidebar-back" href=(routes::subcategory_path(category, subcategory)) { "\u{2190} All topics" }
        ul class="threads" {
            @for thread in threads {
                (link_item(
                    ctx,
                    &routes::thread_path(category, subcategory, topic, &thread.id),
                    &thread.title
                ))
            }
        }
    }
}

fn link_item(ctx: &PageContext<'_, '_>, href: &str, label: &str) -> Markup {
    let active = ctx.sidebar.is_active(href);
    html! {
        li {
            a href=(href) class=[active.then_some("active")] aria-current=[active.then_some("page")] {
                (label)
            }
        }
    }
}
