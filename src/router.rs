//! Path-based request router.
//!
//! One radix tree keyed by path. A route answers every method; restricting
//! methods is the job of [`method_guard`](crate::middleware::method_guard).

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::route`] call returns `self` so registrations chain naturally.
pub struct Router {
    routes: MatchitRouter<BoxedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: MatchitRouter::new() }
    }

    /// Register a handler for `path`, whatever the request method.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or is already registered.
    pub fn route(mut self, path: &str, handler: impl Handler) -> Self {
        self.routes
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(&self, path: &str) -> Option<BoxedHandler> {
        let matched = self.routes.at(path).ok()?;
        Some(matched.value.clone())
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
