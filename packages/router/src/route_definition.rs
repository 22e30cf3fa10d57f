//! Types for declaring which view to show for which path.

mod pattern;
pub use pattern::*;

/// Metadata the router keeps in sync with the document head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    /// The document title.
    pub title: String,
    /// The content of the description meta tag.
    pub description: String,
}

impl RouteMeta {
    /// Create a new [`RouteMeta`].
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A single entry of a [`RouteTable`](crate::RouteTable).
///
/// ```rust
/// # use folio_router::prelude::*;
/// let record = RouteRecord::new("/project/lawcrative", "Lawcrative", "lawcrative-view")
///     .with_meta("Lawcrative | Stefan Edelman", "A legal tech platform");
///
/// assert_eq!(record.name(), "Lawcrative");
/// assert_eq!(record.meta().map(|m| m.title.as_str()), Some("Lawcrative | Stefan Edelman"));
/// ```
#[derive(Clone, Debug)]
pub struct RouteRecord<V> {
    pub(crate) path: String,
    pub(crate) name: String,
    pub(crate) view: V,
    pub(crate) meta: Option<RouteMeta>,
}

impl<V> RouteRecord<V> {
    /// Create a record without metadata.
    ///
    /// The `path` is only checked when the record is added to a [`RouteTable`](crate::RouteTable).
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
            meta: None,
        }
    }

    /// Attach a title and a description.
    pub fn with_meta(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.meta = Some(RouteMeta::new(title, description));
        self
    }

    /// The path pattern as it was declared.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The unique name of the route.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The view shown for this route.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The metadata of this route, if any.
    pub fn meta(&self) -> Option<&RouteMeta> {
        self.meta.as_ref()
    }
}
