//! Sidebar navigation state.
//!
//! `NavigationStore` records which level of the catalog the sidebar lists and
//! which nodes are selected. Pages write it on navigation; renderers only read
//! it. Every switch overwrites the previous state wholesale (last write wins)
//! and performs no validation that the ids match the listing.

use crate::catalog::{Category, CategoryId, SubcategoryId, Thread, Topic, TopicId};
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavigationMode {
    #[default]
    Categories,
    Topics,
    Threads,
}

impl NavigationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationMode::Categories => "categories",
            NavigationMode::Topics => "topics",
            NavigationMode::Threads => "threads",
        }
    }
}

/// The slice of the catalog the sidebar currently displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarListing<'a> {
    Categories(&'a [Category]),
    Topics(&'a [Topic]),
    Threads(&'a [Thread]),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationStore<'a> {
    mode: NavigationMode,
    category_id: Option<CategoryId>,
    subcategory_id: Option<SubcategoryId>,
    topic_id: Option<TopicId>,
    listing: SidebarListing<'a>,
}

impl<'a> NavigationStore<'a> {
    /// Start in category mode over `categories`.
    pub fn new(categories: &'a [Category]) -> Self {
        Self {
            mode: NavigationMode::Categories,
            category_id: None,
            subcategory_id: None,
            topic_id: None,
            listing: SidebarListing::Categories(categories),
        }
    }

    pub fn switch_to_category_mode(&mut self, categories: &'a [Category]) {
        self.mode = NavigationMode::Categories;
        self.listing = SidebarListing::Categories(categories);
    }

    pub fn switch_to_topic_mode(
        &mut self,
        category_id: CategoryId,
        subcategory_id: SubcategoryId,
        topics: &'a [Topic],
    ) {
        self.mode = NavigationMode::Topics;
        self.listing = SidebarListing::Topics(topics);
        self.category_id = Some(category_id);
        self.subcategory_id = Some(subcategory_id);
    }

    pub fn switch_to_thread_mode(
        &mut self,
        category_id: CategoryId,
        subcategory_id: SubcategoryId,
        topic_id: TopicId,
        threads: &'a [Thread],
    ) {
        self.mode = NavigationMode::Threads;
        self.category_id = Some(category_id);
        self.subcategory_id = Some(subcategory_id);
        self.topic_id = Some(topic_id);
        self.listing = SidebarListing::Threads(threads);
    }

    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    pub fn category_id(&self) -> Option<&CategoryId> {
        self.category_id.as_ref()
    }

    pub fn subcategory_id(&self) -> Option<&SubcategoryId> {
        self.subcategory_id.as_ref()
    }

    pub fn topic_id(&self) -> Option<&TopicId> {
        self.topic_id.as_ref()
    }

    pub fn listing(&self) -> SidebarListing<'a> {
        self.listing
    }
}

/// Presentation state of the sidebar itself: open/closed, which categories
/// are expanded in category mode, and the path whose link is highlighted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
    expanded: BTreeSet<CategoryId>,
    active_path: String,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            open: true,
            expanded: BTreeSet::new(),
            active_path: "/".to_string(),
        }
    }
}

impl SidebarState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn toggle_category(&mut self, category: &CategoryId) {
        if !self.expanded.remove(category) {
            self.expanded.insert(category.clone());
        }
    }

    pub fn expand(&mut self, category: &CategoryId) {
        self.expanded.insert(category.clone());
    }

    pub fn is_expanded(&self, category: &CategoryId) -> bool {
        self.expanded.contains(category)
    }

    /// Record the URL path currently displayed.
    pub fn set_active_path(&mut self, path: impl Into<String>) {
        self.active_path = path.into();
    }

    /// True when `path` is the URL currently displayed.
    pub fn is_active(&self, path: &str) -> bool {
        self.active_path == path
    }
}
