// Route → page → navigation store behaviour across the whole catalog.
mod support;

use kbview::{
    Browser, ContentState, FetchOutcome, MemoryContentSource, NavigationMode, Page, Route,
    SidebarListing,
};
use pretty_assertions::assert_eq;

use support::{bundled_index, memory_source};

#[test]
fn subcategory_routes_list_exact_topics_in_order() {
    let index = bundled_index();
    let mut browser = Browser::new(&index, MemoryContentSource::new());

    for chain in index.subcategories() {
        let path = format!("/{}/{}", chain.category.id, chain.subcategory.id);
        let navigation = browser.navigate_to(&path);
        assert!(!navigation.redirected, "{path} should resolve");
        assert!(navigation.fetch.is_none());

        match browser.page() {
            Page::Subcategory(found) => {
                assert_eq!(found.subcategory.id, chain.subcategory.id);
                assert_eq!(browser.page().topics(), chain.subcategory.topics.as_slice());
            }
            other => panic!("{path} resolved to {other:?}"),
        }

        let store = browser.store();
        assert_eq!(store.mode(), NavigationMode::Topics);
        assert_eq!(store.category_id(), Some(&chain.category.id));
        assert_eq!(store.subcategory_id(), Some(&chain.subcategory.id));
        assert_eq!(
            store.listing(),
            SidebarListing::Topics(&chain.subcategory.topics)
        );
    }
}

#[test]
fn thread_routes_match_catalog_entities() {
    let index = bundled_index();
    let mut browser = Browser::new(&index, MemoryContentSource::new());

    for chain in index.threads() {
        let route = Route::for_thread(chain);
        let navigation = browser.navigate(route.clone());
        assert_eq!(navigation.route, route);

        let ticket = navigation.fetch.expect("thread pages request content");
        assert_eq!(ticket.content_path(), &chain.thread.content_path);

        let Page::Thread { chain: shown, .. } = browser.page() else {
            panic!("{route} did not render a thread page");
        };
        assert_eq!(shown.category.id, chain.category.id);
        assert_eq!(shown.subcategory.id, chain.subcategory.id);
        assert_eq!(shown.topic.id, chain.topic.id);
        assert_eq!(shown.thread, chain.thread);

        assert_eq!(browser.store().mode(), NavigationMode::Threads);
        assert_eq!(browser.store().topic_id(), Some(&chain.topic.id));
    }
}

#[test]
fn thread_links_round_trip_through_the_router() {
    let index = bundled_index();
    for chain in index.threads() {
        let path = Route::for_thread(chain).path();
        let Some(Route::Thread {
            category,
            subcategory,
            topic,
            thread,
        }) = Route::parse(&path)
        else {
            panic!("{path} did not parse as a thread route");
        };
        let found = index
            .thread(
                category.as_str(),
                subcategory.as_str(),
                topic.as_str(),
                thread.as_str(),
            )
            .unwrap();
        assert_eq!(found.thread, chain.thread);
    }
}

#[test]
fn topic_page_switches_sidebar_to_threads() {
    let index = bundled_index();
    let mut browser = Browser::new(&index, MemoryContentSource::new());
    browser.navigate_to("/frontend/angular/components");

    let topic = index.topic("frontend", "angular", "components").unwrap();
    assert_eq!(browser.page().threads(), topic.topic.threads.as_slice());
    assert_eq!(
        browser.store().listing(),
        SidebarListing::Threads(&topic.topic.threads)
    );
}

#[test]
fn home_returns_sidebar_to_categories() {
    let index = bundled_index();
    let mut browser = Browser::new(&index, MemoryContentSource::new());
    browser.navigate_to("/sql/efcore");
    browser.navigate_to("/");

    assert_eq!(browser.store().mode(), NavigationMode::Categories);
    assert_eq!(
        browser.store().listing(),
        SidebarListing::Categories(index.categories())
    );
}

#[test]
fn missing_final_segment_shows_not_found_without_panicking() {
    let index = bundled_index();
    let mut browser = Browser::new(&index, MemoryContentSource::new());
    browser.navigate_to("/frontend/angular");
    let before = browser.store().clone();

    let navigation = browser.navigate_to("/frontend/angular/doesnotexist");
    assert!(navigation.redirected);
    assert_eq!(navigation.route, Route::NotFound);
    assert!(navigation.fetch.is_none());
    assert!(browser.page().is_not_found());
    assert_eq!(browser.store(), &before, "not-found leaves the store alone");
}

#[test]
fn unmatched_shapes_redirect_to_not_found() {
    let index = bundled_index();
    let mut browser = Browser::new(&index, MemoryContentSource::new());
    for path in ["/frontend", "/a/b/c/d/e", "/a//b"] {
        let navigation = browser.navigate_to(path);
        assert_eq!(navigation.route, Route::NotFound, "{path}");
    }
    let direct = browser.navigate_to("/not-found");
    assert!(!direct.redirected);
}

#[test]
fn stale_fetch_is_discarded() {
    let index = bundled_index();
    let source = memory_source(&[
        ("angular/components/componentanatomy", "# Anatomy"),
        ("angular/components/componentselectors", "# Selectors"),
    ]);
    let mut browser = Browser::new(&index, source);

    let first = browser
        .navigate_to("/frontend/angular/components/componentanatomy")
        .fetch
        .unwrap();
    let second = browser
        .navigate_to("/frontend/angular/components/componentselectors")
        .fetch
        .unwrap();
    assert!(second.generation() > first.generation());

    let late = browser.fetch(&first);
    assert_eq!(browser.complete(&first, late), FetchOutcome::Stale);
    assert!(matches!(
        browser.page(),
        Page::Thread {
            content: ContentState::Loading,
            ..
        }
    ));

    let current = browser.fetch(&second);
    assert_eq!(browser.complete(&second, current), FetchOutcome::Applied);
    assert!(matches!(
        browser.page(),
        Page::Thread { content: ContentState::Loaded(text), .. } if text == "# Selectors"
    ));
}

#[test]
fn fetch_for_thread_abandoned_for_listing_is_stale() {
    let index = bundled_index();
    let source = memory_source(&[("angular/components/componentanatomy", "# Anatomy")]);
    let mut browser = Browser::new(&index, source);

    let ticket = browser
        .navigate_to("/frontend/angular/components/componentanatomy")
        .fetch
        .unwrap();
    browser.navigate_to("/frontend/angular");
    let result = browser.fetch(&ticket);
    assert_eq!(browser.complete(&ticket, result), FetchOutcome::Stale);
    assert!(matches!(browser.page(), Page::Subcategory(_)));
}

#[test]
fn sidebar_expands_current_category() {
    let index = bundled_index();
    let mut browser = Browser::new(&index, MemoryContentSource::new());
    browser.navigate_to("/devops/docker");
    assert!(browser.sidebar().is_expanded(&"devops".into()));
    assert!(!browser.sidebar().is_expanded(&"sql".into()));
}

#[test]
fn collapsed_sidebar_renders_unchecked_toggle() {
    let index = bundled_index();
    let mut browser = Browser::new(&index, MemoryContentSource::new());
    browser.navigate_to("/frontend/angular");
    assert!(browser.render().contains("class=\"sidebar-toggle\" checked>"));

    browser.sidebar_mut().toggle();
    let html = browser.render();
    assert!(!browser.sidebar().is_open());
    assert!(html.contains("class=\"sidebar-toggle\">"));
    assert!(!html.contains(" checked"));
}

#[test]
fn sidebar_highlights_current_path_only() {
    let index = bundled_index();
    let mut browser = Browser::new(&index, MemoryContentSource::new());
    let path = "/frontend/angular/components/componentanatomy";
    browser.navigate_to(path);
    assert!(browser.sidebar().is_active(path));
    assert!(!browser.sidebar().is_active("/frontend/angular/components"));

    // One highlighted sidebar link plus the breadcrumb's current entry.
    let html = browser.render();
    assert_eq!(html.matches("aria-current=\"page\">").count(), 2);
    assert!(html.contains(&format!(
        "<a href=\"{path}\" class=\"active\" aria-current=\"page\">"
    )));
}
