use crate::prelude::*;

/// Global configuration options for the router.
///
/// This implements [`Default`] and follows the builder pattern, so you can use it like this:
/// ```rust
/// # use folio_router::prelude::*;
/// # use folio_document::MemoryDocument;
/// let defaults = MetadataDefaults::new("https://example.com", "Example", "An example site");
///
/// let cfg = RouterConfig::<&str>::default()
///     .guard(MetadataGuard::new(MemoryDocument::with_head_tags(), defaults))
///     .scroll_behavior(ScrollToTop);
/// ```
pub struct RouterConfig<V> {
    pub(crate) guards: Vec<Box<dyn NavigationGuard<V>>>,
    pub(crate) scroll_behavior: Option<Box<dyn ScrollBehavior<V>>>,
}

impl<V> Default for RouterConfig<V> {
    fn default() -> Self {
        Self {
            guards: Vec::new(),
            scroll_behavior: None,
        }
    }
}

impl<V> RouterConfig<V> {
    /// Add a guard that runs before every navigation.
    ///
    /// Guards run in the order they were added. If a guard redirects, the remaining guards do
    /// not see the original navigation; all guards run again for the redirect target.
    pub fn guard(mut self, guard: impl NavigationGuard<V> + 'static) -> Self {
        self.guards.push(Box::new(guard));
        self
    }

    /// Decide where the page lands after each navigation.
    ///
    /// Defaults to [`None`], which never scrolls.
    pub fn scroll_behavior(self, behavior: impl ScrollBehavior<V> + 'static) -> Self {
        Self {
            scroll_behavior: Some(Box::new(behavior)),
            ..self
        }
    }
}
