//! Router Context
//!
//! Reactive glue around the pure navigation state, provided via the
//! Leptos Context API. All components navigate through this single
//! entry point; it keeps the address bar in sync via the History API
//! without a full page reload.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::router::{NavState, Route, RouteError};

/// App-wide router state provided via context
#[derive(Clone, Copy)]
pub struct RouterContext {
    nav: RwSignal<NavState>,
}

impl RouterContext {
    /// Build the context from the browser's current location.
    pub fn new() -> Self {
        Self {
            nav: RwSignal::new(NavState::new(&current_pathname())),
        }
    }

    /// Currently active route, `None` when the path matched nothing
    pub fn active(&self) -> Option<Route> {
        self.nav.with(|nav| nav.active())
    }

    /// Routes visited this session, in order
    pub fn history(&self) -> Vec<Route> {
        self.nav.with(|nav| nav.history().to_vec())
    }

    /// Navigate to a path. On a match this updates the active view and
    /// pushes a browser history entry; an unmatched path changes nothing.
    pub fn navigate(&self, path: &str) -> Result<Route, RouteError> {
        let route = self.nav.try_update(|nav| nav.navigate(path));
        match route.unwrap_or_else(|| Err(RouteError::NotFound(path.to_string()))) {
            Ok(route) => {
                push_history_entry(route.path());
                web_sys::console::log_1(
                    &format!("[ROUTER] navigated to {} ({})", route.path(), route.name()).into(),
                );
                Ok(route)
            }
            Err(err) => {
                web_sys::console::warn_1(&format!("[ROUTER] {}", err).into());
                Err(err)
            }
        }
    }

    /// Convenience wrapper for the common case of a known route.
    pub fn navigate_to(&self, route: Route) {
        let _ = self.navigate(route.path());
    }

    /// Re-resolve the location after browser back/forward. Wired to the
    /// window's `popstate` event by `listen_popstate`.
    pub fn restore_from_location(&self) {
        let path = current_pathname();
        self.nav.update(|nav| nav.restore(&path));
    }

    /// Install the `popstate` listener. Call once at app startup.
    pub fn listen_popstate(&self) {
        let ctx = *self;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            ctx.restore_from_location();
        });
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }
        // Listener lives for the whole session
        closure.forget();
    }
}

/// Get the router context
pub fn use_router() -> RouterContext {
    expect_context::<RouterContext>()
}

fn current_pathname() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_entry(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}
