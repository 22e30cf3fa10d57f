use std::{cell::RefCell, rc::Rc};

use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ScrollRestoration, Window};

use crate::{History, ScrollPosition};

/// Errors raised while attaching to the browser environment.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// The code is not running inside a browser window.
    #[error("no global `window` exists")]
    NoWindow,

    /// The browser call failed.
    #[error("browser history call failed: {0}")]
    Js(String),
}

impl From<JsValue> for HistoryError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

fn scroll_state(position: ScrollPosition) -> JsValue {
    let state = js_sys::Array::new();
    state.push(&JsValue::from(position.x));
    state.push(&JsValue::from(position.y));
    state.into()
}

/// A [`History`] provider that integrates with a browser via the
/// [History API](https://developer.mozilla.org/en-US/docs/Web/API/History_API).
///
/// The history state of every entry holds its saved scroll position. Scroll restoration is set
/// to `manual` so the router's scroll behavior decides where the page lands.
pub struct WebHistory {
    window: Window,
    history: web_sys::History,
    listener_navigation: RefCell<Option<EventListener>>,
}

impl WebHistory {
    /// Attach to the browser's history.
    pub fn new() -> Result<Self, HistoryError> {
        let window = web_sys::window().ok_or(HistoryError::NoWindow)?;
        let history = window.history()?;
        history.set_scroll_restoration(ScrollRestoration::Manual)?;

        Ok(Self {
            window,
            history,
            listener_navigation: RefCell::new(None),
        })
    }

    fn position(&self) -> ScrollPosition {
        ScrollPosition::new(
            self.window.scroll_x().unwrap_or_default(),
            self.window.scroll_y().unwrap_or_default(),
        )
    }
}

/// Scroll the browser window to `position`.
pub fn scroll_window_to(position: ScrollPosition) {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(position.x, position.y);
    }
}

impl History for WebHistory {
    fn current_route(&self) -> String {
        let location = self.window.location();
        let path = location.pathname().unwrap_or_else(|_| String::from("/"));
        let search = location.search().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        format!("{path}{search}{hash}")
    }

    fn go_back(&self) {
        if let Err(err) = self.history.back() {
            tracing::error!("failed to go back: {err:?}");
        }
    }

    fn go_forward(&self) {
        if let Err(err) = self.history.forward() {
            tracing::error!("failed to go forward: {err:?}");
        }
    }

    fn push(&self, route: String) {
        // remember where the page we are leaving was scrolled to
        self.save_scroll(self.position());

        let state = scroll_state(ScrollPosition::TOP);
        if let Err(err) = self.history.push_state_with_url(&state, "", Some(route.as_str())) {
            tracing::error!("failed to push state: {err:?}");
        }
    }

    fn replace(&self, route: String) {
        let state = scroll_state(ScrollPosition::TOP);
        if let Err(err) = self.history.replace_state_with_url(&state, "", Some(route.as_str())) {
            tracing::error!("failed to replace state: {err:?}");
        }
    }

    fn current_scroll(&self) -> Option<ScrollPosition> {
        let state = self.history.state().ok()?;
        let state = state.dyn_into::<js_sys::Array>().ok()?;
        Some(ScrollPosition::new(
            state.get(0).as_f64()?,
            state.get(1).as_f64()?,
        ))
    }

    fn save_scroll(&self, position: ScrollPosition) {
        if let Err(err) = self
            .history
            .replace_state_with_url(&scroll_state(position), "", None)
        {
            tracing::error!("failed to save scroll position: {err:?}");
        }
    }

    fn updater(&self, callback: Rc<dyn Fn()>) {
        let listener = EventListener::new(&self.window, "popstate", move |_| callback());
        *self.listener_navigation.borrow_mut() = Some(listener);
    }
}
