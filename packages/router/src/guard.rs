//! Navigation guards.

use folio_document::{DocumentError, MetadataSink};

use crate::{GuardOutcome, NavigationError, NavigationEvent, RouteMatch};

/// A hook invoked on every route transition, before it is committed.
///
/// Guards run synchronously, in the order they were registered. Any closure taking a
/// [`NavigationEvent`] and returning a [`GuardOutcome`] is a guard.
pub trait NavigationGuard<V> {
    /// Inspect the pending navigation.
    fn before_each(&self, event: &NavigationEvent<V>) -> GuardOutcome;

    /// Called when a navigation failed after the guards ran. `current` is the route that stays
    /// active, [`None`] if the router never started.
    fn after_failure(&self, _error: &NavigationError, _current: Option<&RouteMatch<V>>) {}
}

impl<V, F> NavigationGuard<V> for F
where
    F: Fn(&NavigationEvent<V>) -> GuardOutcome,
{
    fn before_each(&self, event: &NavigationEvent<V>) -> GuardOutcome {
        self(event)
    }
}

/// Values used when a route has no metadata of its own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetadataDefaults {
    pub(crate) origin: String,
    pub(crate) fallback_title: String,
    pub(crate) fallback_description: String,
}

impl MetadataDefaults {
    /// Create new defaults. A trailing `/` on `origin` is dropped.
    pub fn new(
        origin: impl Into<String>,
        fallback_title: impl Into<String>,
        fallback_description: impl Into<String>,
    ) -> Self {
        let mut origin = origin.into();
        while origin.ends_with('/') {
            origin.pop();
        }

        Self {
            origin,
            fallback_title: fallback_title.into(),
            fallback_description: fallback_description.into(),
        }
    }

    /// The origin canonical links are built from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The canonical URL for a resolved path.
    pub fn canonical_url(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }
}

/// Keeps the document title, the description meta tag and the canonical link in sync with the
/// active route.
///
/// Every step is best-effort: a missing element or a failing sink is logged and never stops the
/// other steps or the navigation. This guard always proceeds.
pub struct MetadataGuard<S> {
    sink: S,
    defaults: MetadataDefaults,
}

impl<S: MetadataSink> MetadataGuard<S> {
    /// Create a guard writing into `sink`.
    pub fn new(sink: S, defaults: MetadataDefaults) -> Self {
        Self { sink, defaults }
    }

    /// The sink this guard writes into.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn sync<V>(&self, to: &RouteMatch<V>) {
        let meta = to.meta();

        let title = meta.map_or(self.defaults.fallback_title.as_str(), |m| m.title.as_str());
        self.sink.set_title(title);

        let description = meta.map_or(self.defaults.fallback_description.as_str(), |m| {
            m.description.as_str()
        });
        report("description", self.sink.set_description(description));

        let canonical = self.defaults.canonical_url(to.path());
        report("canonical link", self.sink.set_canonical(&canonical));
    }
}

fn report(step: &str, result: Result<(), DocumentError>) {
    match result {
        Ok(()) => {}
        Err(err @ DocumentError::MissingElement(_)) => {
            tracing::debug!("skipped {step}: {err}")
        }
        Err(err) => tracing::warn!("failed to update {step}: {err}"),
    }
}

impl<V, S: MetadataSink> NavigationGuard<V> for MetadataGuard<S> {
    fn before_each(&self, event: &NavigationEvent<V>) -> GuardOutcome {
        self.sync(&event.to);
        GuardOutcome::Proceed
    }

    // the head may describe a route that never became active
    fn after_failure(&self, error: &NavigationError, current: Option<&RouteMatch<V>>) {
        if let Some(current) = current {
            tracing::debug!("restoring metadata of {} after: {error}", current.name());
            self.sync(current);
        }
    }
}
