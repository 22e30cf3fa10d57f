use folio_router::prelude::*;
use pretty_assertions::assert_eq;

#[derive(Clone, Copy, Debug, PartialEq)]
enum View {
    Home,
    Project,
    NotFound,
}

fn table() -> RouteTable<View> {
    RouteTable::new(vec![
        RouteRecord::new("/", "Home", View::Home),
        RouteRecord::new("/project/lawcrative", "Lawcrative", View::Project),
        RouteRecord::new("/:pathMatch(.*)*", "NotFound", View::NotFound),
    ])
    .unwrap()
}

#[test]
fn literal_paths_win() {
    let table = table();
    assert_eq!(*table.resolve("/").view(), View::Home);
    assert_eq!(table.resolve("/project/lawcrative").name(), "Lawcrative");
    assert!(!table.resolve("/").is_fallback());
}

// Make sure trailing '/'s work correctly
#[test]
fn trailing_slashes_parse() {
    let table = table();
    assert_eq!(table.resolve("/project/lawcrative/").name(), "Lawcrative");
    assert_eq!(table.resolve("project/lawcrative").name(), "Lawcrative");
    assert_eq!(table.resolve("//").name(), "NotFound");
}

#[test]
fn everything_else_falls_back() {
    let table = table();
    for path in ["/foo/bar", "/project", "/project/lawcrative/extra", "/Project/Lawcrative"] {
        let resolved = table.resolve(path);
        assert_eq!(resolved.name(), "NotFound", "{path}");
        assert!(resolved.is_fallback());
    }
}

#[test]
fn catch_all_captures_the_remaining_segments() {
    let resolved = table().resolve("/foo/bar%20baz/");
    assert_eq!(resolved.params(), ["foo".to_string(), "bar baz".to_string()]);
    assert_eq!(resolved.path(), "/foo/bar%20baz/");
}

#[test]
fn query_and_hash_are_split_off() {
    let resolved = table().resolve("/project/lawcrative?tab=stack#team");
    assert_eq!(resolved.name(), "Lawcrative");
    assert_eq!(resolved.path(), "/project/lawcrative");
    assert_eq!(resolved.query(), Some("tab=stack"));
    assert_eq!(resolved.hash(), Some("team"));
    assert_eq!(resolved.full_path(), "/project/lawcrative?tab=stack#team");
}

#[test]
fn encoded_segments_match_their_literal() {
    let table = RouteTable::new(vec![
        RouteRecord::new("/café", "Cafe", View::Home),
        RouteRecord::new("/:rest(.*)*", "NotFound", View::NotFound),
    ])
    .unwrap();

    assert_eq!(table.resolve("/caf%C3%A9").name(), "Cafe");
    assert_eq!(table.resolve("/café").name(), "Cafe");
}

#[test]
fn href_builds_literal_paths() {
    let table = table();
    assert_eq!(table.href("Home").as_deref(), Some("/"));
    assert_eq!(
        table.href("Lawcrative").as_deref(),
        Some("/project/lawcrative")
    );
    assert_eq!(table.href("NotFound"), None);
    assert_eq!(table.href("Missing"), None);
    assert_eq!(table.fallback().name(), "NotFound");
    assert_eq!(table.by_name("Home").map(|r| r.path()), Some("/"));
}

#[test]
fn table_invariants_are_checked() {
    let not_found = || RouteRecord::new("/:pathMatch(.*)*", "NotFound", View::NotFound);

    assert_eq!(
        RouteTable::new(vec![
            RouteRecord::new("/", "Home", View::Home),
            RouteRecord::new("/other", "Home", View::Project),
            not_found(),
        ])
        .err(),
        Some(RouteTableError::DuplicateName("Home".into()))
    );

    assert_eq!(
        RouteTable::new(vec![
            RouteRecord::new("/project", "A", View::Home),
            RouteRecord::new("/project/", "B", View::Project),
            not_found(),
        ])
        .err(),
        Some(RouteTableError::DuplicatePath("/project/".into()))
    );

    assert_eq!(
        RouteTable::new(vec![not_found(), RouteRecord::new("/", "Home", View::Home)]).err(),
        Some(RouteTableError::CatchAllNotLast("Home".into()))
    );

    assert_eq!(
        RouteTable::new(vec![
            not_found(),
            RouteRecord::new("/:other(.*)*", "Other", View::NotFound)
        ])
        .err(),
        Some(RouteTableError::MultipleCatchAll("Other".into()))
    );

    assert_eq!(
        RouteTable::new(vec![RouteRecord::new("/", "Home", View::Home)]).err(),
        Some(RouteTableError::MissingCatchAll)
    );

    assert!(matches!(
        RouteTable::new(vec![RouteRecord::new("/:id", "Dynamic", View::Home), not_found()]),
        Err(RouteTableError::InvalidPattern { .. })
    ));

    // a catch-all always covers the whole path
    assert!(matches!(
        RouteTable::new(vec![
            RouteRecord::new("/docs/:rest(.*)*", "Docs", View::Home),
            not_found()
        ]),
        Err(RouteTableError::InvalidPattern { .. })
    ));
}
