//! Single-method restriction.
//!
//! Requests whose method is not exactly the expected one get
//! `400 Bad Request` and never reach the wrapped handler.

use crate::handler::{BoxFuture, BoxedHandler, ErasedHandler};
use crate::method::Method;
use crate::middleware::Middleware;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// Wraps `next` so only `expected` requests reach it.
pub fn method(expected: Method, next: BoxedHandler) -> BoxedHandler {
    BoxedHandler::new(MethodGuard { expected, next })
}

/// [`method`] as a [`Middleware`], for use with [`Chain`](super::Chain).
pub fn allow(expected: Method) -> impl Middleware {
    move |next: BoxedHandler| method(expected, next)
}

struct MethodGuard {
    expected: Method,
    next: BoxedHandler,
}

impl ErasedHandler for MethodGuard {
    fn call(&self, req: Request) -> BoxFuture {
        if !self.expected.matches(req.method()) {
            return Box::pin(async { Response::error(Status::BadRequest) });
        }
        self.next.call(req)
    }
}
