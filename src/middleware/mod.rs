//! Middleware layer.
//!
//! A middleware is a transform from one handler to another: it takes the
//! [`BoxedHandler`] it wraps (conventionally `next`) and returns a new one
//! that runs its own logic before, after or instead of `next`. Any
//! `Fn(BoxedHandler) -> BoxedHandler` qualifies.
//!
//! Built-in middleware:
//! - [`logging`] — one log line per request with path and elapsed time
//! - [`method_guard`] — rejects requests whose method is not the expected one
//!
//! # Ordering
//!
//! [`chain`] and [`Chain`] treat the **first** middleware as the
//! **outermost** wrapper:
//!
//! ```text
//! chain(h, [m1, m2])  ==  m1(m2(h))
//!
//! request  ──► m1 ──► m2 ──► h
//! response ◄── m1 ◄── m2 ◄── h
//! ```
//!
//! Composition only builds the wrapped value. No handler runs until the
//! server dispatches a request to the result.

pub mod logging;
pub mod method_guard;

use crate::handler::{BoxedHandler, Handler};

/// A handler-to-handler transform.
///
/// Implemented for every `Fn(BoxedHandler) -> BoxedHandler`, so plain
/// functions such as [`logging::logging`] and closures can be used directly:
///
/// ```rust
/// use hello_chain::middleware::{Chain, logging::logging, method_guard::method};
/// use hello_chain::{BoxedHandler, Method, Request};
///
/// async fn hello(_req: Request) -> &'static str { "hello world\n" }
///
/// let handler = Chain::new()
///     .with(|next: BoxedHandler| method(Method::Get, next))
///     .with(logging)
///     .wrap(hello);
/// ```
pub trait Middleware: Send + Sync + 'static {
    fn wrap(&self, next: BoxedHandler) -> BoxedHandler;
}

impl<F> Middleware for F
where
    F: Fn(BoxedHandler) -> BoxedHandler + Send + Sync + 'static,
{
    fn wrap(&self, next: BoxedHandler) -> BoxedHandler {
        self(next)
    }
}

/// Applies `middlewares` to `handler`, first entry outermost.
///
/// An empty list returns `handler` unchanged.
pub fn chain(handler: impl Handler, middlewares: Vec<Box<dyn Middleware>>) -> BoxedHandler {
    Chain { middlewares }.wrap(handler)
}

/// Ordered middleware list, built up with [`Chain::with`] and applied with
/// [`Chain::wrap`].
#[derive(Default)]
pub struct Chain {
    middlewares: Vec<Box<dyn Middleware>>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a middleware. Each one added sits inside the previous ones.
    pub fn with(mut self, middleware: impl Middleware) -> Self {
        self.middlewares.push(Box::new(middleware));
        self
    }

    /// Wraps `handler` in every middleware of the chain.
    pub fn wrap(self, handler: impl Handler) -> BoxedHandler {
        // Innermost first, so the head of the list ends up outermost.
        self.middlewares
            .iter()
            .rev()
            .fold(handler.into_boxed_handler(), |next, m| m.wrap(next))
    }
}
