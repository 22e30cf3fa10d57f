use std::rc::Rc;

use folio_document::MemoryDocument;
use folio_history::{History, MemoryHistory, ScrollPosition};
use folio_site::*;
use pretty_assertions::assert_eq;

fn site_router(
    initial: &str,
    document: MemoryDocument,
) -> (folio_router::Router<Page>, Rc<MemoryDocument>) {
    let document = Rc::new(document);
    let history = Rc::new(MemoryHistory::with_initial_path(initial));
    let router = build_router(history, document.clone()).unwrap();
    (router, document)
}

#[test]
fn literal_paths_resolve_to_their_pages() {
    let table = route_table().unwrap();
    assert_eq!(table.resolve("/").name(), "Home");
    assert_eq!(*table.resolve("/").view(), Page::Home);
    assert_eq!(table.resolve("/project/lawcrative").name(), "Lawcrative");
    assert_eq!(*table.resolve("/project/lawcrative").view(), Page::Lawcrative);
}

#[test]
fn unknown_paths_resolve_to_not_found() {
    let table = route_table().unwrap();
    for path in ["/foo/bar", "/project", "/projects/lawcrative", "/lawcrative"] {
        assert_eq!(*table.resolve(path).view(), Page::NotFound, "{path}");
    }
}

#[test]
fn home_sets_the_default_title() {
    let (router, document) = site_router("/", MemoryDocument::with_head_tags());
    router.start().unwrap();

    assert_eq!(document.title(), "Stefan Edelman | Software Engineer");
    assert_eq!(document.description().as_deref(), Some(HOME_DESCRIPTION));
    assert_eq!(
        document.canonical().as_deref(),
        Some("https://www.stefanedelman.dev/")
    );
}

#[test]
fn lawcrative_sets_title_and_canonical() {
    let (router, document) = site_router("/", MemoryDocument::with_head_tags());
    router.start().unwrap();
    router.push("/project/lawcrative").unwrap();

    assert_eq!(document.title(), "Lawcrative | Stefan Edelman");
    assert_eq!(
        document.canonical().as_deref(),
        Some("https://www.stefanedelman.dev/project/lawcrative")
    );
}

#[test]
fn unmatched_paths_get_the_not_found_meta() {
    let (router, document) = site_router("/does/not/exist", MemoryDocument::with_head_tags());
    let navigation = router.start().unwrap();

    assert_eq!(*navigation.to().view(), Page::NotFound);
    assert_eq!(document.title(), NOT_FOUND_TITLE);
    assert_eq!(document.description().as_deref(), Some(NOT_FOUND_DESCRIPTION));
    assert_eq!(
        document.canonical().as_deref(),
        Some("https://www.stefanedelman.dev/does/not/exist")
    );
}

#[test]
fn navigation_proceeds_without_a_description_tag() {
    let document = MemoryDocument::default().with_canonical_tag("");
    let (router, document) = site_router("/", document);

    router.start().unwrap();
    let navigation = router.push("/project/lawcrative").unwrap();

    assert_eq!(*navigation.to().view(), Page::Lawcrative);
    assert_eq!(router.history().current_route(), "/project/lawcrative");
    assert_eq!(document.title(), LAWCRATIVE_TITLE);
    assert_eq!(document.description(), None);
}

#[test]
fn every_navigation_scrolls_to_the_top() {
    let (router, _) = site_router("/", MemoryDocument::with_head_tags());

    assert_eq!(router.start().unwrap().scroll, Some(ScrollPosition::TOP));
    router.save_scroll(ScrollPosition::new(0.0, 640.0));
    assert_eq!(
        router.push("/project/lawcrative").unwrap().scroll,
        Some(ScrollPosition::TOP)
    );
    assert_eq!(
        router.go_back().unwrap().unwrap().scroll,
        Some(ScrollPosition::TOP)
    );
}

#[test]
fn scroll_can_be_left_alone() {
    let config = SiteConfig::from_toml_str("scroll-to-top = false").unwrap();
    let site = Site::new(config).unwrap();
    let router = site.router(
        Rc::new(MemoryHistory::default()),
        MemoryDocument::with_head_tags(),
    );

    assert_eq!(router.start().unwrap().scroll, None);
}

#[test]
fn routers_share_one_table() {
    let site = Site::new(SiteConfig::default()).unwrap();
    let a = site.router(Rc::new(MemoryHistory::default()), MemoryDocument::default());
    let b = site.router(Rc::new(MemoryHistory::default()), MemoryDocument::default());
    assert!(std::sync::Arc::ptr_eq(a.table(), b.table()));
}
