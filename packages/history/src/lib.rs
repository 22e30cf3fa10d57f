//! History Integration
//!
//! The folio router relies on [`History`] providers to store the current location, and possibly
//! a history (i.e. a browsers back button) and future (i.e. a browsers forward button).
//!
//! To integrate the router with any kind of history, implement the [`History`] trait. This crate
//! comes with an in-memory provider and, behind the `web` feature, one backed by the browser.
#![deny(missing_docs)]

use std::rc::Rc;

mod memory;
pub use memory::*;

mod scroll;
pub use scroll::*;

#[cfg(feature = "web")]
mod web;
#[cfg(feature = "web")]
pub use web::*;

/// An integration with some kind of navigation history.
///
/// Depending on your use case, your implementation may deviate from the described procedure. This
/// is fine, as long as `current_route` keeps the described format.
///
/// The described behaviors are designed to mimic a web browser, which most users should already
/// know. Deviations might confuse them.
///
/// All methods take `&self`: providers live in a single-threaded host and use interior
/// mutability.
pub trait History {
    /// Get the location that is currently active, including query and fragment.
    ///
    /// **Must start** with `/`.
    ///
    /// ```rust
    /// # use folio_history::{History, MemoryHistory};
    /// let history = MemoryHistory::default();
    /// assert_eq!(history.current_route(), "/");
    ///
    /// history.push(String::from("/project/lawcrative"));
    /// assert_eq!(history.current_route(), "/project/lawcrative");
    /// ```
    #[must_use]
    fn current_route(&self) -> String;

    /// Check whether there is a previous page to navigate back to.
    ///
    /// If a [`History`] cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_back(&self) -> bool {
        true
    }

    /// Go back to a previous page.
    ///
    /// If a [`History`] cannot go to a previous page, it should do nothing. This method might be
    /// called, even if `can_go_back` returns [`false`].
    fn go_back(&self);

    /// Check whether there is a future page to navigate forward to.
    ///
    /// If a [`History`] cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_forward(&self) -> bool {
        true
    }

    /// Go forward to a future page.
    ///
    /// If a [`History`] cannot go to a future page, it should do nothing. This method might be
    /// called, even if `can_go_forward` returns [`false`].
    fn go_forward(&self);

    /// Go to another page.
    ///
    /// This should do three things:
    /// 1. Make `route` the current location.
    /// 2. Add the previous location to the navigation history.
    /// 3. Clear the navigation future.
    ///
    /// ```rust
    /// # use folio_history::{History, MemoryHistory};
    /// let history = MemoryHistory::default();
    /// history.push(String::from("/project/lawcrative"));
    /// assert!(history.can_go_back());
    /// ```
    fn push(&self, route: String);

    /// Replace the current page with another one.
    ///
    /// In contrast to [`History::push`], the navigation history and future stay untouched.
    ///
    /// ```rust
    /// # use folio_history::{History, MemoryHistory};
    /// let history = MemoryHistory::default();
    /// history.replace(String::from("/project/lawcrative"));
    /// assert_eq!(history.current_route(), "/project/lawcrative");
    /// assert!(!history.can_go_back());
    /// ```
    fn replace(&self, route: String);

    /// The scroll position that was saved for the current entry, if any.
    ///
    /// Only meaningful right after a back/forward traversal.
    fn current_scroll(&self) -> Option<ScrollPosition> {
        None
    }

    /// Remember `position` for the current entry so a later traversal can report it.
    #[allow(unused_variables)]
    fn save_scroll(&self, position: ScrollPosition) {}

    /// Provide the [`History`] with an update callback.
    ///
    /// Some providers receive location updates from outside the router. When such updates are
    /// received, they should call `callback`, which will cause the router to re-sync.
    #[allow(unused_variables)]
    fn updater(&self, callback: Rc<dyn Fn()>) {}
}
