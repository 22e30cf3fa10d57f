use folio_router::prelude::*;

/// The pages of the site. Rendering them is up to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    /// The landing page.
    Home,
    /// The Lawcrative project write-up.
    Lawcrative,
    /// Shown for every path no other route claims.
    NotFound,
}

/// The origin canonical links are built from.
pub const SITE_ORIGIN: &str = "https://www.stefanedelman.dev";

/// The title used when a route has no metadata.
pub const FALLBACK_TITLE: &str = "Stefan Edelman | Software Engineer";

/// The description used when a route has no metadata.
pub const FALLBACK_DESCRIPTION: &str =
    "Stefan Edelman is a software engineer who builds full-stack products for the web.";

/// Title of the landing page.
pub const HOME_TITLE: &str = "Stefan Edelman | Software Engineer";
/// Description of the landing page.
pub const HOME_DESCRIPTION: &str =
    "Portfolio of Stefan Edelman, a software engineer who builds full-stack products for the web.";

/// Title of the Lawcrative project page.
pub const LAWCRATIVE_TITLE: &str = "Lawcrative | Stefan Edelman";
/// Description of the Lawcrative project page.
pub const LAWCRATIVE_DESCRIPTION: &str =
    "Lawcrative, a legal tech platform designed and built by Stefan Edelman.";

/// Title shown for unknown paths.
pub const NOT_FOUND_TITLE: &str = "Page Not Found | Stefan Edelman";
/// Description shown for unknown paths.
pub const NOT_FOUND_DESCRIPTION: &str = "The page you are looking for does not exist.";

/// The routes of the site, in priority order. The catch-all comes last.
pub fn routes() -> Vec<RouteRecord<Page>> {
    vec![
        RouteRecord::new("/", "Home", Page::Home).with_meta(HOME_TITLE, HOME_DESCRIPTION),
        RouteRecord::new("/project/lawcrative", "Lawcrative", Page::Lawcrative)
            .with_meta(LAWCRATIVE_TITLE, LAWCRATIVE_DESCRIPTION),
        RouteRecord::new("/:pathMatch(.*)*", "NotFound", Page::NotFound)
            .with_meta(NOT_FOUND_TITLE, NOT_FOUND_DESCRIPTION),
    ]
}

/// Build the route table of the site.
pub fn route_table() -> Result<RouteTable<Page>, RouteTableError> {
    RouteTable::new(routes())
}
