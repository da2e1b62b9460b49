//! Navigation session.
//!
//! A `Browser` owns the navigation store and the current page. Every
//! navigation bumps a generation counter; content fetches are issued as
//! [`FetchTicket`]s stamped with the generation that requested them, and a
//! result arriving for an older generation is dropped instead of overwriting
//! the page the reader has moved on to.

use crate::catalog::{CatalogIndex, ContentPath};
use crate::content::{ContentError, ContentSource, fetch_thread_content};
use crate::navigation::{NavigationStore, SidebarState};
use crate::pages::{ContentState, Page};
use crate::render;
use crate::routes::Route;
use tracing::{debug, info, warn};

/// Pending content fetch for the thread page of one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    content_path: ContentPath,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn content_path(&self) -> &ContentPath {
        &self.content_path
    }
}

/// Result of a route change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    /// Route actually displayed (after any redirect).
    pub route: Route,
    /// The requested path did not resolve and the not-found page is shown.
    pub redirected: bool,
    pub fetch: Option<FetchTicket>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// The ticket belongs to an earlier navigation.
    Stale,
}

pub struct Browser<'a, S> {
    index: &'a CatalogIndex,
    source: S,
    store: NavigationStore<'a>,
    sidebar: SidebarState,
    generation: u64,
    route: Route,
    page: Page<'a>,
}

impl<'a, S: ContentSource> Browser<'a, S> {
    /// Start on the home page.
    pub fn new(index: &'a CatalogIndex, source: S) -> Self {
        Self {
            index,
            source,
            store: NavigationStore::new(index.categories()),
            sidebar: SidebarState::default(),
            generation: 0,
            route: Route::Home,
            page: Page::Home {
                categories: index.categories(),
            },
        }
    }

    /// Navigate to a URL path, redirecting unmatched shapes to not-found.
    pub fn navigate_to(&mut self, path: &str) -> Navigation {
        match Route::parse(path) {
            Some(route) => self.navigate(route),
            None => {
                debug!(path, "no route matched; redirecting");
                let mut navigation = self.navigate(Route::NotFound);
                navigation.redirected = true;
                navigation
            }
        }
    }

    pub fn navigate(&mut self, route: Route) -> Navigation {
        self.generation += 1;
        let page = Page::resolve(self.index, &route);

        let redirected = page.is_not_found() && route != Route::NotFound;
        if let Page::NotFound {
            reason: Some(reason),
        } = &page
        {
            info!(%route, %reason, "catalog lookup failed");
        }

        page.sync_store(self.index, &mut self.store);
        if !matches!(page, Page::Home { .. } | Page::NotFound { .. }) {
            if let Some(category) = self.store.category_id() {
                self.sidebar.expand(category);
            }
        }

        let fetch = match &page {
            Page::Thread { chain, .. } => Some(FetchTicket {
                generation: self.generation,
                content_path: chain.thread.content_path.clone(),
            }),
            _ => None,
        };

        self.route = if page.is_not_found() {
            Route::NotFound
        } else {
            route
        };
        self.page = page;
        self.sidebar.set_active_path(self.route.path());
        debug!(route = %self.route, generation = self.generation, "navigated");

        Navigation {
            route: self.route.clone(),
            redirected,
            fetch,
        }
    }

    /// Perform the read for `ticket`. Does not touch the page.
    pub fn fetch(&self, ticket: &FetchTicket) -> Result<String, ContentError> {
        fetch_thread_content(&self.source, &ticket.content_path)
    }

    /// Apply a fetch result if it still belongs to the current navigation.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<String, ContentError>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                path = %ticket.content_path,
                "discarding stale content"
            );
            return FetchOutcome::Stale;
        }

        let Page::Thread { chain, content } = &mut self.page else {
            return FetchOutcome::Stale;
        };
        *content = match result {
            Ok(markdown) => ContentState::Loaded(markdown),
            Err(err) => {
                warn!(thread = %chain.thread.id, error = %err, "content not found for thread");
                ContentState::Missing(err.to_string())
            }
        };
        FetchOutcome::Applied
    }

    /// Navigate and, for thread pages, load the article before returning.
    pub fn open(&mut self, path: &str) -> Navigation {
        let navigation = self.navigate_to(path);
        if let Some(ticket) = &navigation.fetch {
            let result = self.fetch(ticket);
            self.complete(ticket, result);
        }
        navigation
    }

    /// Render the current page as a full HTML document.
    pub fn render(&self) -> String {
        render::render_document(&render::PageContext {
            site_title: self.index.title(),
            current_path: self.route.path(),
            page: &self.page,
            store: &self.store,
            sidebar: &self.sidebar,
        })
    }

    pub fn index(&self) -> &'a CatalogIndex {
        self.index
    }

    pub fn page(&self) -> &Page<'a> {
        &self.page
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn store(&self) -> &NavigationStore<'a> {
        &self.store
    }

    pub fn sidebar(&self) -> &SidebarState {
        &self.sidebar
    }

    pub fn sidebar_mut(&mut self) -> &mut SidebarState {
        &mut self.sidebar
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
