//! Types relating to navigation.

use folio_history::ScrollPosition;

use crate::RouteMatch;

/// What caused a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationKind {
    /// The first routing after the router started.
    Initial,
    /// A new history entry was added.
    Push,
    /// The current history entry was overwritten.
    Replace,
    /// The history moved back or forward, or changed outside the router.
    Traverse,
}

/// A single route transition, handed to every guard and then discarded.
pub struct NavigationEvent<V> {
    /// Where the navigation goes.
    pub to: RouteMatch<V>,
    /// Where the navigation comes from. [`None`] on the initial load.
    pub from: Option<RouteMatch<V>>,
    /// What caused the navigation.
    pub kind: NavigationKind,
}

/// What a guard wants the router to do with a pending navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Let the navigation happen.
    Proceed,
    /// Go to the given location instead. The redirect replaces the pending navigation.
    Redirect(String),
}

/// A completed navigation.
pub struct Navigation<V> {
    /// The event every guard saw.
    pub event: NavigationEvent<V>,
    /// Where the page should be scrolled to. [`None`] means leave it alone.
    pub scroll: Option<ScrollPosition>,
}

impl<V> Navigation<V> {
    /// The route that is active now.
    pub fn to(&self) -> &RouteMatch<V> {
        &self.event.to
    }
}
