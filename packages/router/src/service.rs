use std::{
    borrow::Cow,
    cell::RefCell,
    rc::{Rc, Weak},
    sync::Arc,
};

use folio_history::{History, ScrollPosition};

use crate::prelude::*;

/// How many redirects in a row a single navigation may go through.
pub const MAX_REDIRECTS: usize = 16;

/// Errors that stop a navigation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavigationError {
    /// The guards kept redirecting.
    #[error("navigation redirected more than {MAX_REDIRECTS} times, last target: {location}")]
    RedirectLoop {
        /// The last location a guard redirected to.
        location: String,
    },

    /// No literal route has this name.
    #[error(r#"no route for name "{0}""#)]
    UnknownName(String),

    /// The history provider did not move to the new location.
    #[error("the history refused to move to {location}")]
    HistoryRejected {
        /// The location the history was asked to move to.
        location: String,
    },
}

/// The core of the router.
///
/// This combines a [`RouteTable`] and a [`History`] provider. Every change of the active location
/// becomes a [`NavigationEvent`] that runs through the guards before it is committed to the
/// history.
pub struct Router<V> {
    table: Arc<RouteTable<V>>,
    history: Rc<dyn History>,
    guards: Vec<Box<dyn NavigationGuard<V>>>,
    scroll_behavior: Option<Box<dyn ScrollBehavior<V>>>,
    current: RefCell<Option<RouteMatch<V>>>,
}

impl<V> Router<V> {
    /// Create a new router. Nothing is resolved until [`Router::start`] is called.
    pub fn new(table: Arc<RouteTable<V>>, history: Rc<dyn History>, cfg: RouterConfig<V>) -> Self {
        Self {
            table,
            history,
            guards: cfg.guards,
            scroll_behavior: cfg.scroll_behavior,
            current: RefCell::new(None),
        }
    }

    /// The route table this router resolves against.
    pub fn table(&self) -> &Arc<RouteTable<V>> {
        &self.table
    }

    /// The history provider.
    pub fn history(&self) -> &Rc<dyn History> {
        &self.history
    }

    /// The active route, [`None`] before [`Router::start`].
    pub fn current(&self) -> Option<RouteMatch<V>> {
        self.current.borrow().clone()
    }

    /// Trigger the initial routing for the location the history starts at.
    pub fn start(&self) -> Result<Navigation<V>, NavigationError> {
        let location = self.history.current_route();
        self.navigate(NavigationKind::Initial, &location)
    }

    /// Go to `location`, adding a history entry.
    pub fn push(&self, location: &str) -> Result<Navigation<V>, NavigationError> {
        self.navigate(NavigationKind::Push, location)
    }

    /// Go to `location`, overwriting the current history entry.
    pub fn replace(&self, location: &str) -> Result<Navigation<V>, NavigationError> {
        self.navigate(NavigationKind::Replace, location)
    }

    /// Go to the literal route called `name`, adding a history entry.
    pub fn push_named(&self, name: &str) -> Result<Navigation<V>, NavigationError> {
        let location = self
            .table
            .href(name)
            .ok_or_else(|| NavigationError::UnknownName(name.to_string()))?;
        self.push(&location)
    }

    /// Go back a step in the history.
    ///
    /// Returns [`None`] if the location did not change yet. Browser histories move
    /// asynchronously and report the change through [`Router::listen`] instead.
    pub fn go_back(&self) -> Result<Option<Navigation<V>>, NavigationError> {
        self.history.go_back();
        self.sync_if_moved()
    }

    /// Go forward a step in the history. See [`Router::go_back`].
    pub fn go_forward(&self) -> Result<Option<Navigation<V>>, NavigationError> {
        self.history.go_forward();
        self.sync_if_moved()
    }

    /// Re-resolve the history's location after it changed outside the router.
    pub fn sync(&self) -> Result<Navigation<V>, NavigationError> {
        let location = self.history.current_route();
        self.navigate(NavigationKind::Traverse, &location)
    }

    /// Remember where the current page is scrolled to, for the scroll behavior to see when the
    /// user comes back to it.
    pub fn save_scroll(&self, position: ScrollPosition) {
        self.history.save_scroll(position);
    }

    fn sync_if_moved(&self) -> Result<Option<Navigation<V>>, NavigationError> {
        let location = self.history_location();
        let moved = self
            .current
            .borrow()
            .as_ref()
            .map_or(true, |current| current.full_path() != location);

        if !moved {
            return Ok(None);
        }
        self.sync().map(Some)
    }

    fn navigate(
        &self,
        kind: NavigationKind,
        location: &str,
    ) -> Result<Navigation<V>, NavigationError> {
        let result = self.try_navigate(kind, location);
        if let Err(err) = &result {
            let current = self.current();
            for guard in &self.guards {
                guard.after_failure(err, current.as_ref());
            }
        }
        result
    }

    fn try_navigate(
        &self,
        kind: NavigationKind,
        location: &str,
    ) -> Result<Navigation<V>, NavigationError> {
        let from = self.current();
        let mut to = self.table.resolve(&normalize_location(location));
        let mut redirects = 0;

        let event = loop {
            let event = NavigationEvent {
                to,
                from: from.clone(),
                kind,
            };

            let redirect = self
                .guards
                .iter()
                .find_map(|guard| match guard.before_each(&event) {
                    GuardOutcome::Proceed => None,
                    GuardOutcome::Redirect(target) => Some(target),
                });

            let Some(target) = redirect else {
                break event;
            };

            redirects += 1;
            if redirects > MAX_REDIRECTS {
                tracing::error!("navigation to {location} redirected too often, giving up");
                return Err(NavigationError::RedirectLoop { location: target });
            }
            tracing::debug!(from = %event.to.path(), to = %target, "guard redirected navigation");
            to = self.table.resolve(&normalize_location(&target));
        };

        let full_path = event.to.full_path();
        match kind {
            NavigationKind::Push => self.history.push(full_path.clone()),
            NavigationKind::Replace => self.history.replace(full_path.clone()),
            // the history already points somewhere, only fix it up after a redirect or
            // normalization
            NavigationKind::Initial | NavigationKind::Traverse => {
                if self.history_location() != full_path {
                    self.history.replace(full_path.clone());
                }
            }
        }

        if self.history_location() != full_path {
            tracing::warn!(
                history = %self.history.current_route(),
                "history did not move to {full_path}"
            );
            return Err(NavigationError::HistoryRejected {
                location: full_path,
            });
        }

        let saved = match kind {
            NavigationKind::Traverse => self.history.current_scroll(),
            _ => None,
        };
        let scroll = self.scroll_behavior.as_ref().and_then(|behavior| {
            behavior.scroll_position(&event.to, event.from.as_ref(), saved)
        });

        tracing::debug!(
            ?kind,
            from = ?event.from.as_ref().map(|from| from.name()),
            to = %event.to.name(),
            path = %event.to.path(),
            "navigated"
        );

        *self.current.borrow_mut() = Some(event.to.clone());

        Ok(Navigation { event, scroll })
    }

    /// The history's location, normalized the same way resolved locations are.
    fn history_location(&self) -> String {
        self.table.resolve(&self.history.current_route()).full_path()
    }
}

/// Collapse repeated leading slashes. Histories read `//host/path` as a protocol-relative URL.
fn normalize_location(location: &str) -> Cow<'_, str> {
    if location.starts_with("//") {
        Cow::Owned(format!("/{}", location.trim_start_matches('/')))
    } else {
        Cow::Borrowed(location)
    }
}

impl<V: 'static> Router<V> {
    /// Re-sync whenever the history changes outside the router, e.g. on browser back/forward.
    ///
    /// `on_navigate` receives the outcome of every such navigation. The listener holds a weak
    /// reference, so it stops once the router is dropped.
    pub fn listen(
        self: &Rc<Self>,
        on_navigate: impl Fn(Result<Navigation<V>, NavigationError>) + 'static,
    ) {
        let router: Weak<Self> = Rc::downgrade(self);
        self.history.updater(Rc::new(move || {
            if let Some(router) = router.upgrade() {
                on_navigate(router.sync());
            }
        }));
    }
}
