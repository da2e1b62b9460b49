//! URL shapes served by the viewer.
//!
//! Four catalog-driven shapes plus the explicit not-found page. Anything else
//! is unmatched and callers redirect to [`NOT_FOUND_PATH`].

use crate::catalog::{
    CategoryId, SubcategoryId, SubcategoryRef, ThreadId, ThreadRef, TopicId, TopicRef,
};
use serde::Serialize;
use std::fmt;

pub const NOT_FOUND_PATH: &str = "/not-found";
const NOT_FOUND_SEGMENT: &str = "not-found";

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Route {
    /// `/` — category list.
    Home,
    /// `/:categoryId/:subcategoryId` — topic list.
    Subcategory {
        category: CategoryId,
        subcategory: SubcategoryId,
    },
    /// `/:categoryId/:subcategoryId/:topicId` — thread list.
    Topic {
        category: CategoryId,
        subcategory: SubcategoryId,
        topic: TopicId,
    },
    /// `/:categoryId/:subcategoryId/:topicId/:threadId` — article view.
    Thread {
        category: CategoryId,
        subcategory: SubcategoryId,
        topic: TopicId,
        thread: ThreadId,
    },
    NotFound,
}

impl Route {
    /// Match a URL path against the route table.
    ///
    /// Returns `None` for the catch-all case; the query string and fragment are
    /// ignored.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Some(Route::Home);
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return None;
        }

        match segments.as_slice() {
            [NOT_FOUND_SEGMENT] => Some(Route::NotFound),
            [category, subcategory] => Some(Route::Subcategory {
                category: (*category).into(),
                subcategory: (*subcategory).into(),
            }),
            [category, subcategory, topic] => Some(Route::Topic {
                category: (*category).into(),
                subcategory: (*subcategory).into(),
                topic: (*topic).into(),
            }),
            [category, subcategory, topic, thread] => Some(Route::Thread {
                category: (*category).into(),
                subcategory: (*subcategory).into(),
                topic: (*topic).into(),
                thread: (*thread).into(),
            }),
            _ => None,
        }
    }

    /// Like [`Route::parse`], applying the catch-all redirect.
    pub fn parse_or_not_found(path: &str) -> Route {
        Route::parse(path).unwrap_or(Route::NotFound)
    }

    /// Canonical URL path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Subcategory {
                category,
                subcategory,
            } => format!("/{category}/{subcategory}"),
            Route::Topic {
                category,
                subcategory,
                topic,
            } => format!("/{category}/{subcategory}/{topic}"),
            Route::Thread {
                category,
                subcategory,
                topic,
                thread,
            } => format!("/{category}/{subcategory}/{topic}/{thread}"),
            Route::NotFound => NOT_FOUND_PATH.to_string(),
        }
    }

    pub fn for_subcategory(chain: SubcategoryRef<'_>) -> Route {
        Route::Subcategory {
            category: chain.category.id.clone(),
            subcategory: chain.subcategory.id.clone(),
        }
    }

    pub fn for_topic(chain: TopicRef<'_>) -> Route {
        Route::Topic {
            category: chain.category.id.clone(),
            subcategory: chain.subcategory.id.clone(),
            topic: chain.topic.id.clone(),
        }
    }

    pub fn for_thread(chain: ThreadRef<'_>) -> Route {
        Route::Thread {
            category: chain.category.id.clone(),
            subcategory: chain.subcategory.id.clone(),
            topic: chain.topic.id.clone(),
            thread: chain.thread.id.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Path of the subcategory page; used by home cards and the sidebar.
pub fn subcategory_path(category: &CategoryId, subcategory: &SubcategoryId) -> String {
    format!("/{category}/{subcategory}")
}

pub fn topic_path(category: &CategoryId, subcategory: &SubcategoryId, topic: &TopicId) -> String {
    format!("/{category}/{subcategory}/{topic}")
}

pub fn thread_path(
    category: &CategoryId,
    subcategory: &SubcategoryId,
    topic: &TopicId,
    thread: &ThreadId,
) -> String {
    format!("/{category}/{subcategory}/{topic}/{thread}")
}
