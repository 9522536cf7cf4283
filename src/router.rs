//! Route Table
//!
//! Exact-match routing over the two registered paths, plus the pure
//! navigation state the reactive layer wraps. Nothing here touches the
//! browser; `context` owns the history side effects.

use thiserror::Error;

/// Registered application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    CreateTask,
}

impl Route {
    /// URL path this route is registered under
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::CreateTask => "/create-task",
        }
    }

    /// Logical route name
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::CreateTask => "create-task",
        }
    }
}

/// The route table, fixed at startup
pub const ROUTES: &[Route] = &[Route::Home, Route::CreateTask];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("no route matches path: {0}")]
    NotFound(String),
}

/// Exact-match lookup against the route table. No wildcard or
/// parameterized segments exist, so matching is string equality.
pub fn resolve(path: &str) -> Option<Route> {
    ROUTES.iter().copied().find(|route| route.path() == path)
}

/// Navigation state: the active route and the ordered log of visits.
///
/// `active` is `None` when the current path matches no table entry;
/// the app renders its not-found view for that case.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    active: Option<Route>,
    history: Vec<Route>,
}

impl NavState {
    pub fn new(initial_path: &str) -> Self {
        let active = resolve(initial_path);
        Self {
            active,
            history: active.into_iter().collect(),
        }
    }

    pub fn active(&self) -> Option<Route> {
        self.active
    }

    /// Routes visited this session, in order
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    /// Single mutation entry point: match the path and record the visit.
    pub fn navigate(&mut self, path: &str) -> Result<Route, RouteError> {
        let route = resolve(path).ok_or_else(|| RouteError::NotFound(path.to_string()))?;
        self.active = Some(route);
        self.history.push(route);
        Ok(route)
    }

    /// Adopt a path restored by browser back/forward. Does not grow the
    /// visit log; an unmatched path clears the active route.
    pub fn restore(&mut self, path: &str) {
        self.active = resolve(path);
    }
}
