//! Card grids for the listing pages.

use crate::catalog::{Category, SubcategoryRef, TopicRef};
use crate::routes;
use maud::{Markup, html};

pub(crate) fn category_grid(categories: &[Category]) -> Markup {
    html! {
        @for category in categories {
            section class="category" id=(category.id.as_str()) {
                h2 {
                    span class="icon" data-icon=(category.icon.as_str()) { (category.icon.glyph()) }
                    " " (category.name)
                }
                (card_grid(
                    category
                        .subcategories
                        .iter()
                        .map(|subcategory| {
                            card(
                                &routes::subcategory_path(&category.id, &subcategory.id),
                                &subcategory.name,
                                &subcategory.description,
                                Some(count_label(subcategory.topics.len(), "topic")),
                            )
                        })
                        .collect(),
                    "No subcategories yet."
                ))
            }
        }
    }
}

pub(crate) fn topic_grid(chain: SubcategoryRef<'_>) -> Markup {
    let cards = chain
        .subcategory
        .topics
        .iter()
        .map(|topic| {
            card(
                &routes::topic_path(&chain.category.id, &chain.subcategory.id, &topic.id),
                &topic.title,
                &topic.description,
                Some(count_label(topic.threads.len(), "thread")),
            )
        })
        .collect();
    card_grid(cards, "No topics yet.")
}

pub(crate) fn thread_grid(chain: TopicRef<'_>) -> Markup {
    let cards = chain
        .topic
        .threads
        .iter()
        .map(|thread| {
            card(
                &routes::thread_path(
                    &chain.category.id,
                    &chain.subcategory.id,
                    &chain.topic.id,
                    &thread.id,
                ),
                &thread.title,
                &thread.content_preview,
                None,
            )
        })
        .collect();
    card_grid(cards, "No threads yet.")
}

fn card_grid(cards: Vec<Markup>, empty: &str) -> Markup {
    html! {
        @if cards.is_empty() {
            p class="empty" { (empty) }
        } @else {
            div class="card-grid" {
                @for card in &cards { (card) }
            }
        }
    }
}

fn card(href: &str, title: &str, text: &str, meta: Option<String>) -> Markup {
    html! {
        a class="card" href=(href) {
            h3 { (title) }
            @if !text.is_empty() {
                p { (text) }
            }
            @if let Some(meta) = meta {
                span class="meta" { (meta) }
            }
        }
    }
}

fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogIndex;

    #[test]
    fn topic_grid_links_every_topic_in_order() {
        let index = CatalogIndex::bundled().unwrap();
        let chain = index.subcategory("frontend", "angular").unwrap();
        let html = topic_grid(chain).into_string();
        let mut last = 0;
        for topic in &chain.subcategory.topics {
            let href = format!("href=\"/frontend/angular/{}\"", topic.id);
            let pos = html.find(&href).expect("topic card present");
            assert!(pos >= last, "topic cards out of catalog order");
            last = pos;
        }
    }

    #[test]
    fn empty_subcategory_shows_placeholder() {
        let index = CatalogIndex::bundled().unwrap();
        let chain = index.subcategory("frontend", "generalfrontend").unwrap();
        assert!(topic_grid(chain).into_string().contains("No topics yet."));
    }

    #[test]
    fn catalog_text_is_escaped() {
        let html = card("/a/b", "Tom & <Jerry>", "", None).into_string();
        assert!(html.contains("<h3>Tom &amp; &lt;Jerry&gt;</h3>"));
    }

    #[test]
    fn count_label_pluralises() {
        assert_eq!(count_label(1, "topic"), "1 topic");
        assert_eq!(count_label(0, "thread"), "0 threads");
    }
}
