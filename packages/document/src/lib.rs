//! Page metadata sinks.
//!
//! The router never touches the DOM directly. Instead, the metadata guard writes the page title,
//! the description meta tag and the canonical link through a [`MetadataSink`]. This crate ships
//! an in-memory sink for tests and non-browser hosts and, behind the `web` feature, a sink backed
//! by the browser's `document`.
#![deny(missing_docs)]

mod document;
pub use document::*;

mod memory;
pub use memory::*;

#[cfg(feature = "web")]
mod web;
#[cfg(feature = "web")]
pub use web::*;
