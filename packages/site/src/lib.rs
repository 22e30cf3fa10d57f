//! Routes and page metadata for stefanedelman.dev.
//!
//! [`Site`] owns the immutable route table and the site config. It hands out routers that keep
//! the document head in sync with the active page.

#![deny(missing_docs)]

use std::{rc::Rc, sync::Arc};

use folio_document::MetadataSink;
use folio_history::History;
use folio_router::prelude::*;

mod config;
pub use config::*;

mod routes;
pub use routes::*;

#[cfg(feature = "web")]
mod web;
#[cfg(feature = "web")]
pub use web::*;

/// Errors raised while setting the site up.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The TOML config could not be read.
    #[error("invalid site config: {0}")]
    Config(#[from] toml::de::Error),

    /// The origin is not a bare `http(s)` origin.
    #[error("invalid site origin: {0}")]
    InvalidOrigin(String),

    /// The route list breaks an invariant of the route table.
    #[error(transparent)]
    Routes(#[from] RouteTableError),

    /// The first navigation failed.
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// The browser history is not available.
    #[cfg(feature = "web")]
    #[error(transparent)]
    History(#[from] folio_history::HistoryError),

    /// The code is not running inside a browser document.
    #[cfg(feature = "web")]
    #[error("no browser document to write page metadata into")]
    NoDocument,
}

/// The site: its config and its route table, built once at startup.
pub struct Site {
    config: SiteConfig,
    table: Arc<RouteTable<Page>>,
}

impl Site {
    /// Build the site with `config`.
    pub fn new(config: SiteConfig) -> Result<Self, SiteError> {
        config.validate()?;
        let table = Arc::new(route_table()?);
        Ok(Self { config, table })
    }

    /// The site config.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The route table every router of this site shares.
    pub fn table(&self) -> &Arc<RouteTable<Page>> {
        &self.table
    }

    /// Create a router that writes page metadata into `sink`.
    ///
    /// The router is not started yet.
    pub fn router(
        &self,
        history: Rc<dyn History>,
        sink: impl MetadataSink + 'static,
    ) -> Router<Page> {
        let guard = MetadataGuard::new(sink, self.config.metadata_defaults());
        let mut cfg = RouterConfig::default().guard(guard);
        if self.config.scroll_to_top {
            cfg = cfg.scroll_behavior(ScrollToTop);
        }
        Router::new(self.table.clone(), history, cfg)
    }
}

/// Build a router with the default site config, writing page metadata into `sink`.
pub fn build_router(
    history: Rc<dyn History>,
    sink: impl MetadataSink + 'static,
) -> Result<Router<Page>, SiteError> {
    Ok(Site::new(SiteConfig::default())?.router(history, sink))
}
