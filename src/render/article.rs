//! Thread article view.

use crate::catalog::ThreadRef;
use crate::pages::ContentState;
use crate::render::breadcrumbs;
use crate::routes;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Event, Options, Parser, html as cmark_html};

pub(crate) fn render_thread(chain: ThreadRef<'_>, content: &ContentState) -> Markup {
    let subcategory_href = routes::subcategory_path(&chain.category.id, &chain.subcategory.id);
    let topic_href = routes::topic_path(&chain.category.id, &chain.subcategory.id, &chain.topic.id);
    let trail = breadcrumbs(&[
        (chain.category.name.as_str(), Some("/".to_string())),
        (chain.subcategory.name.as_str(), Some(subcategory_href)),
        (chain.topic.title.as_str(), Some(topic_href.clone())),
        (chain.thread.title.as_str(), None),
    ]);

    html! {
        (trail)
        a class="back" href=(topic_href) aria-label=(format!("Back to {}", chain.topic.title)) {
            "\u{2190}"
        }
        h1 { (chain.thread.title) }
        @match content {
            ContentState::Loading => {
                div class="loading" aria-busy="true" { "Loading\u{2026}" }
            }
            ContentState::Loaded(markdown) => {
                article class="markdown" { (PreEscaped(markdown_to_html(markdown))) }
            }
            ContentState::Missing(reason) => {
                div class="content-missing" role="alert" {
                    p { "The article for this thread is not available." }
                    p class="meta" { (reason) }
                }
            }
        }
    }
}

/// Markdown to HTML. Raw HTML in the source is escaped and shown as text.
pub(crate) fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_HEADING_ATTRIBUTES
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    cmark_html::push_html(&mut out, parser);
    out
}
