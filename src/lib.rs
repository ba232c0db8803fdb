//! # hello-chain
//!
//! Handler middleware for hyper, and the smallest server that shows it off.
//!
//! A **handler** turns a [`Request`] into a [`Response`]. A **middleware**
//! turns one handler into another. [`middleware::chain`] applies a list of
//! middlewares to a handler, first entry outermost:
//!
//! ```text
//! request ──► method guard ──► logging ──► hello
//! ```
//!
//! Two middlewares ship with the crate:
//!
//! - [`middleware::logging`] — one log line per request, `<path> <elapsed>`
//! - [`middleware::method_guard`] — `400 Bad Request` for any other method
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use hello_chain::middleware::{Chain, logging::logging, method_guard::allow};
//! use hello_chain::{Method, Request, Response, Router, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let root = Chain::new()
//!         .with(allow(Method::Get))
//!         .with(logging)
//!         .wrap(hello);
//!
//!     Server::bind("0.0.0.0:8080")
//!         .serve(Router::new().route("/", root))
//!         .await
//!         .unwrap();
//! }
//!
//! async fn hello(_req: Request) -> Response {
//!     Response::text("hello world\n")
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod hello;
pub mod middleware;

#[cfg(test)]
mod testing;

pub use error::Error;
pub use handler::{BoxFuture, BoxedHandler, Handler};
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use router::Router;
pub use server::Server;
pub use status::Status;

/// Where the demo binary listens.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
