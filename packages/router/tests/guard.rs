use std::{cell::RefCell, rc::Rc};

use folio_document::{DocumentError, HeadElement, MemoryDocument, MetadataSink};
use folio_router::prelude::*;
use pretty_assertions::assert_eq;

const ORIGIN: &str = "https://example.com";

fn table() -> RouteTable<()> {
    RouteTable::new(vec![
        RouteRecord::new("/", "Home", ()).with_meta("Home | Example", "The landing page"),
        RouteRecord::new("/about", "About", ()),
        RouteRecord::new("/:pathMatch(.*)*", "NotFound", ())
            .with_meta("Not Found | Example", "Nothing lives here"),
    ])
    .unwrap()
}

fn defaults() -> MetadataDefaults {
    MetadataDefaults::new(format!("{ORIGIN}/"), "Example", "An example site")
}

fn event(to: &str) -> NavigationEvent<()> {
    NavigationEvent {
        to: table().resolve(to),
        from: None,
        kind: NavigationKind::Initial,
    }
}

#[test]
fn syncs_all_three_values() {
    let guard = MetadataGuard::new(MemoryDocument::with_head_tags(), defaults());

    assert_eq!(guard.before_each(&event("/")), GuardOutcome::Proceed);
    assert_eq!(guard.sink().title(), "Home | Example");
    assert_eq!(guard.sink().description().as_deref(), Some("The landing page"));
    assert_eq!(guard.sink().canonical().as_deref(), Some("https://example.com/"));
}

#[test]
fn routes_without_meta_use_the_fallbacks() {
    let guard = MetadataGuard::new(MemoryDocument::with_head_tags(), defaults());

    guard.before_each(&event("/about"));
    assert_eq!(guard.sink().title(), "Example");
    assert_eq!(guard.sink().description().as_deref(), Some("An example site"));
    assert_eq!(
        guard.sink().canonical().as_deref(),
        Some("https://example.com/about")
    );
}

#[test]
fn unmatched_paths_get_the_not_found_meta() {
    let guard = MetadataGuard::new(MemoryDocument::with_head_tags(), defaults());

    guard.before_each(&event("/foo/bar?x=1#y"));
    assert_eq!(guard.sink().title(), "Not Found | Example");
    assert_eq!(guard.sink().description().as_deref(), Some("Nothing lives here"));
    // query and fragment never end up in the canonical link
    assert_eq!(
        guard.sink().canonical().as_deref(),
        Some("https://example.com/foo/bar")
    );
}

#[test]
fn missing_elements_are_skipped() {
    let guard = MetadataGuard::new(MemoryDocument::default(), defaults());

    assert_eq!(guard.before_each(&event("/")), GuardOutcome::Proceed);
    assert_eq!(guard.sink().title(), "Home | Example");
    assert_eq!(guard.sink().description(), None);
    assert_eq!(guard.sink().canonical(), None);
}

/// A sink whose description always fails, recording every call that reached it.
#[derive(Default)]
struct BrokenSink {
    calls: RefCell<Vec<String>>,
}

impl MetadataSink for BrokenSink {
    fn set_title(&self, title: &str) {
        self.calls.borrow_mut().push(format!("title:{title}"));
    }

    fn set_description(&self, _description: &str) -> Result<(), DocumentError> {
        self.calls.borrow_mut().push("description".into());
        Err(DocumentError::Dom("detached node".into()))
    }

    fn set_canonical(&self, href: &str) -> Result<(), DocumentError> {
        self.calls.borrow_mut().push(format!("canonical:{href}"));
        Err(DocumentError::MissingElement(HeadElement::Canonical))
    }
}

#[test]
fn a_failing_step_does_not_block_the_others() {
    let sink = Rc::new(BrokenSink::default());
    let guard = MetadataGuard::new(sink.clone(), defaults());

    assert_eq!(guard.before_each(&event("/")), GuardOutcome::Proceed);
    assert_eq!(
        *sink.calls.borrow(),
        vec![
            "title:Home | Example".to_string(),
            "description".to_string(),
            "canonical:https://example.com/".to_string(),
        ]
    );
}

#[test]
fn scroll_to_top_ignores_every_input() {
    let table = table();
    let to = table.resolve("/about");
    let from = table.resolve("/");

    let saved = Some(ScrollPosition::new(12.0, 800.0));
    for (from, saved) in [(None, None), (Some(&from), None), (Some(&from), saved), (None, saved)] {
        assert_eq!(
            ScrollToTop.scroll_position(&to, from, saved),
            Some(ScrollPosition::TOP)
        );
    }
}
