use std::cell::RefCell;

use crate::{History, ScrollPosition};

struct Entry {
    route: String,
    scroll: Option<ScrollPosition>,
}

impl Entry {
    fn new(route: String) -> Self {
        Self {
            route,
            scroll: None,
        }
    }
}

struct MemoryHistoryState {
    current: Entry,
    history: Vec<Entry>,
    future: Vec<Entry>,
}

/// A [`History`] provider that stores all navigation information in memory.
pub struct MemoryHistory {
    state: RefCell<MemoryHistoryState>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::with_initial_path("/")
    }
}

impl MemoryHistory {
    /// Create a [`MemoryHistory`] starting at `path`.
    ///
    /// ```rust
    /// # use folio_history::{History, MemoryHistory};
    /// let history = MemoryHistory::with_initial_path("/project/lawcrative");
    /// assert_eq!(history.current_route(), "/project/lawcrative");
    /// assert_eq!(history.can_go_back(), false);
    /// ```
    pub fn with_initial_path(path: impl ToString) -> Self {
        Self {
            state: MemoryHistoryState {
                current: Entry::new(path.to_string()),
                history: Vec::new(),
                future: Vec::new(),
            }
            .into(),
        }
    }
}

fn is_rejected(route: &str) -> bool {
    if route.starts_with("//") {
        tracing::warn!(r#"cannot navigate to paths starting with "//", path: {route}"#);
        return true;
    }
    false
}

impl History for MemoryHistory {
    fn current_route(&self) -> String {
        self.state.borrow().current.route.clone()
    }

    fn can_go_back(&self) -> bool {
        !self.state.borrow().history.is_empty()
    }

    fn go_back(&self) {
        let mut write = self.state.borrow_mut();
        if let Some(last) = write.history.pop() {
            let old = std::mem::replace(&mut write.current, last);
            write.future.push(old);
        }
    }

    fn can_go_forward(&self) -> bool {
        !self.state.borrow().future.is_empty()
    }

    fn go_forward(&self) {
        let mut write = self.state.borrow_mut();
        if let Some(next) = write.future.pop() {
            let old = std::mem::replace(&mut write.current, next);
            write.history.push(old);
        }
    }

    fn push(&self, new: String) {
        if is_rejected(&new) {
            return;
        }

        let mut write = self.state.borrow_mut();
        // don't push the same route twice
        if write.current.route == new {
            return;
        }
        let old = std::mem::replace(&mut write.current, Entry::new(new));
        write.history.push(old);
        write.future.clear();
    }

    fn replace(&self, route: String) {
        if is_rejected(&route) {
            return;
        }

        self.state.borrow_mut().current = Entry::new(route);
    }

    fn current_scroll(&self) -> Option<ScrollPosition> {
        self.state.borrow().current.scroll
    }

    fn save_scroll(&self, position: ScrollPosition) {
        self.state.borrow_mut().current.scroll = Some(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_and_forward_walk_the_stacks() {
        let history = MemoryHistory::default();
        history.push("/a".into());
        history.push("/b".into());

        history.go_back();
        assert_eq!(history.current_route(), "/a");
        assert!(history.can_go_forward());

        history.go_back();
        assert_eq!(history.current_route(), "/");
        assert!(!history.can_go_back());

        // nothing left, stays put
        history.go_back();
        assert_eq!(history.current_route(), "/");

        history.go_forward();
        history.go_forward();
        assert_eq!(history.current_route(), "/b");
        assert!(!history.can_go_forward());
    }

    #[test]
    fn push_clears_the_future() {
        let history = MemoryHistory::default();
        history.push("/a".into());
        history.go_back();
        history.push("/b".into());
        assert!(!history.can_go_forward());
        assert_eq!(history.current_route(), "/b");
    }

    #[test]
    fn duplicate_push_is_ignored() {
        let history = MemoryHistory::default();
        history.push("/".into());
        assert!(!history.can_go_back());
    }

    #[test]
    fn double_slash_paths_are_rejected() {
        let history = MemoryHistory::default();
        history.push("//evil.example".into());
        history.replace("//evil.example".into());
        assert_eq!(history.current_route(), "/");
        assert!(!history.can_go_back());
    }

    #[test]
    fn scroll_positions_follow_their_entry() {
        let history = MemoryHistory::default();
        history.save_scroll(ScrollPosition::new(0.0, 420.0));
        history.push("/a".into());
        assert_eq!(history.current_scroll(), None);

        history.go_back();
        assert_eq!(history.current_scroll(), Some(ScrollPosition::new(0.0, 420.0)));
    }
}
