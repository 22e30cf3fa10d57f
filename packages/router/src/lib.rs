#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

pub mod guard;
pub mod navigation;
pub mod route_definition;

mod router_cfg;
mod scroll;
mod service;
mod table;

pub use guard::{MetadataDefaults, MetadataGuard, NavigationGuard};
pub use navigation::{GuardOutcome, Navigation, NavigationEvent, NavigationKind};
pub use route_definition::{RouteMeta, RoutePattern, RouteRecord};
pub use router_cfg::RouterConfig;
pub use scroll::{ScrollBehavior, ScrollToTop};
pub use service::{NavigationError, Router, MAX_REDIRECTS};
pub use table::{RouteMatch, RouteTable, RouteTableError};

/// A collection of useful items most applications might need.
pub mod prelude {
    pub use crate::guard::*;
    pub use crate::navigation::*;
    pub use crate::route_definition::*;
    pub use crate::router_cfg::RouterConfig;
    pub use crate::scroll::*;
    pub use crate::service::*;
    pub use crate::table::*;
    pub use folio_history::{History, MemoryHistory, ScrollPosition};
}
