//! Page view models.
//!
//! Each route resolves to one page by walking the catalog with the route's
//! identifiers. A failed lookup at any level yields [`Page::NotFound`] carrying
//! the tagged reason instead of a half-populated page.

use crate::catalog::{
    CatalogIndex, Category, NotFound, SubcategoryRef, Thread, ThreadRef, Topic, TopicRef,
};
use crate::navigation::NavigationStore;
use crate::routes::Route;

/// Article body state on the thread page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentState {
    Loading,
    Loaded(String),
    /// Fetch failed; holds the reason shown to the reader.
    Missing(String),
}

#[derive(Clone, Debug)]
pub enum Page<'a> {
    Home {
        categories: &'a [Category],
    },
    Subcategory(SubcategoryRef<'a>),
    Topic(TopicRef<'a>),
    Thread {
        chain: ThreadRef<'a>,
        content: ContentState,
    },
    NotFound {
        reason: Option<NotFound>,
    },
}

impl<'a> Page<'a> {
    /// Resolve `route` against the catalog.
    pub fn resolve(index: &'a CatalogIndex, route: &Route) -> Page<'a> {
        let resolved = match route {
            Route::Home => Ok(Page::Home {
                categories: index.categories(),
            }),
            Route::Subcategory {
                category,
                subcategory,
            } => index
                .subcategory(category.as_str(), subcategory.as_str())
                .map(Page::Subcategory),
            Route::Topic {
                category,
                subcategory,
                topic,
            } => index
                .topic(category.as_str(), subcategory.as_str(), topic.as_str())
                .map(Page::Topic),
            Route::Thread {
                category,
                subcategory,
                topic,
                thread,
            } => index
                .thread(
                    category.as_str(),
                    subcategory.as_str(),
                    topic.as_str(),
                    thread.as_str(),
                )
                .map(|chain| Page::Thread {
                    chain,
                    content: ContentState::Loading,
                }),
            Route::NotFound => return Page::NotFound { reason: None },
        };
        resolved.unwrap_or_else(|reason| Page::NotFound {
            reason: Some(reason),
        })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Page::NotFound { .. })
    }

    /// Topics listed on a subcategory page, in catalog order.
    pub fn topics(&self) -> &'a [Topic] {
        match self {
            Page::Subcategory(chain) => &chain.subcategory.topics,
            _ => &[],
        }
    }

    /// Threads listed on a topic page, in catalog order.
    pub fn threads(&self) -> &'a [Thread] {
        match self {
            Page::Topic(chain) => &chain.topic.threads,
            _ => &[],
        }
    }

    pub fn title(&self) -> String {
        match self {
            Page::Home { .. } => "Categories".to_string(),
            Page::Subcategory(chain) => chain.subcategory.name.clone(),
            Page::Topic(chain) => chain.topic.title.clone(),
            Page::Thread { chain, .. } => chain.thread.title.clone(),
            Page::NotFound { .. } => "Page not found".to_string(),
        }
    }

    /// Write this page's selection into the sidebar store.
    ///
    /// The not-found page leaves the store untouched.
    pub fn sync_store(&self, index: &'a CatalogIndex, store: &mut NavigationStore<'a>) {
        match self {
            Page::Home { .. } => store.switch_to_category_mode(index.categories()),
            Page::Subcategory(chain) => store.switch_to_topic_mode(
                chain.category.id.clone(),
                chain.subcategory.id.clone(),
                &chain.subcategory.topics,
            ),
            Page::Topic(chain) => sync_thread_mode(*chain, store),
            Page::Thread { chain, .. } => sync_thread_mode(chain.parent(), store),
            Page::NotFound { .. } => {}
        }
    }
}

fn sync_thread_mode<'a>(chain: TopicRef<'a>, store: &mut NavigationStore<'a>) {
    store.switch_to_thread_mode(
        chain.category.id.clone(),
        chain.subcategory.id.clone(),
        chain.topic.id.clone(),
        &chain.topic.threads,
    );
}
