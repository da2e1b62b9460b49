//! Tagged lookup results over the catalog hierarchy.

use crate::catalog::{
    Category, CategoryId, Subcategory, SubcategoryId, Thread, ThreadId, Topic, TopicId,
};
use thiserror::Error;

/// Identifies the first level of an identifier chain that did not match.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("unknown category '{0}'")]
    Category(CategoryId),
    #[error("unknown subcategory '{subcategory}' in category '{category}'")]
    Subcategory {
        category: CategoryId,
        subcategory: SubcategoryId,
    },
    #[error("unknown topic '{topic}' in {category}/{subcategory}")]
    Topic {
        category: CategoryId,
        subcategory: SubcategoryId,
        topic: TopicId,
    },
    #[error("unknown thread '{thread}' in {category}/{subcategory}/{topic}")]
    Thread {
        category: CategoryId,
        subcategory: SubcategoryId,
        topic: TopicId,
        thread: ThreadId,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct SubcategoryRef<'a> {
    pub category: &'a Category,
    pub subcategory: &'a Subcategory,
}

#[derive(Clone, Copy, Debug)]
pub struct TopicRef<'a> {
    pub category: &'a Category,
    pub subcategory: &'a Subcategory,
    pub topic: &'a Topic,
}

#[derive(Clone, Copy, Debug)]
pub struct ThreadRef<'a> {
    pub category: &'a Category,
    pub subcategory: &'a Subcategory,
    pub topic: &'a Topic,
    pub thread: &'a Thread,
}

impl<'a> SubcategoryRef<'a> {
    pub(crate) fn find_topic(self, topic: &str) -> Result<TopicRef<'a>, NotFound> {
        self.subcategory
            .topics
            .iter()
            .find(|candidate| candidate.id.as_str() == topic)
            .map(|found| TopicRef {
                category: self.category,
                subcategory: self.subcategory,
                topic: found,
            })
            .ok_or_else(|| NotFound::Topic {
                category: self.category.id.clone(),
                subcategory: self.subcategory.id.clone(),
                topic: TopicId::from(topic),
            })
    }
}

impl<'a> TopicRef<'a> {
    pub fn parent(self) -> SubcategoryRef<'a> {
        SubcategoryRef {
            category: self.category,
            subcategory: self.subcategory,
        }
    }

    pub(crate) fn find_thread(self, thread: &str) -> Result<ThreadRef<'a>, NotFound> {
        self.topic
            .threads
            .iter()
            .find(|candidate| candidate.id.as_str() == thread)
            .map(|found| ThreadRef {
                category: self.category,
                subcategory: self.subcategory,
                topic: self.topic,
                thread: found,
            })
            .ok_or_else(|| NotFound::Thread {
                category: self.category.id.clone(),
                subcategory: self.subcategory.id.clone(),
                topic: self.topic.id.clone(),
                thread: ThreadId::from(thread),
            })
    }
}

impl<'a> ThreadRef<'a> {
    pub fn parent(self) -> TopicRef<'a> {
        TopicRef {
            category: self.category,
            subcategory: self.subcategory,
            topic: self.topic,
        }
    }
}
