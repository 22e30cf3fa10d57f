use folio_history::ScrollPosition;

use crate::RouteMatch;

/// Decides where the page lands after a navigation.
pub trait ScrollBehavior<V> {
    /// `saved` is the position recorded for the target entry, only present when the history was
    /// traversed. Returning [`None`] leaves the scroll position alone.
    fn scroll_position(
        &self,
        to: &RouteMatch<V>,
        from: Option<&RouteMatch<V>>,
        saved: Option<ScrollPosition>,
    ) -> Option<ScrollPosition>;
}

/// Always scroll to the top of the page.
///
/// Saved positions are ignored, so going back or forward does not restore where the user was.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollToTop;

impl<V> ScrollBehavior<V> for ScrollToTop {
    fn scroll_position(
        &self,
        _to: &RouteMatch<V>,
        _from: Option<&RouteMatch<V>>,
        _saved: Option<ScrollPosition>,
    ) -> Option<ScrollPosition> {
        Some(ScrollPosition::TOP)
    }
}
