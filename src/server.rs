//! HTTP server.
//!
//! One tokio task per accepted connection. hyper-util's `auto::Builder`
//! speaks HTTP/1.1 and HTTP/2, and calls the service once per request on the
//! connection. The loop runs until the process exits.

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::error::Error;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::status::Status;

/// The HTTP server.
pub struct Server {
    addr: String,
}

impl Server {
    /// Configures the server to bind to `addr` when [`serve`](Server::serve)
    /// is called.
    ///
    /// ```rust,no_run
    /// use hello_chain::Server;
    /// let server = Server::bind("0.0.0.0:8080");
    /// ```
    pub fn bind(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }

    /// Binds the listener and dispatches every request through `router`.
    ///
    /// Fails if the address does not parse or cannot be bound. Otherwise
    /// never returns.
    pub async fn serve(self, router: Router) -> Result<(), Error> {
        let addr: SocketAddr = self.addr.parse()?;
        let listener = TcpListener::bind(addr).await?;
        Self::serve_on(listener, router).await
    }

    /// Serves `router` on an already-bound listener.
    pub async fn serve_on(listener: TcpListener, router: Router) -> Result<(), Error> {
        // Shared across connection tasks without copying the routing table.
        let router = Arc::new(router);

        let addr = listener.local_addr()?;
        info!(addr = %addr, "listening");

        loop {
            let (stream, remote_addr) = match listener.accept().await {
                Ok(v) => v,
                Err(e) => {
                    error!("accept error: {e}");
                    continue;
                }
            };

            let router = Arc::clone(&router);
            // TokioIo adapts tokio's AsyncRead/AsyncWrite to the hyper IO traits.
            let io = TokioIo::new(stream);

            tokio::spawn(async move {
                let svc = service_fn(move |req| {
                    let router = Arc::clone(&router);
                    async move { dispatch(&router, req).await }
                });

                if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                    .serve_connection(io, svc)
                    .await
                {
                    error!(peer = %remote_addr, "connection error: {e}");
                }
            });
        }
    }
}

// ── Request dispatch ──────────────────────────────────────────────────────────

/// Routes one request and produces one response.
///
/// The error type is [`Infallible`](std::convert::Infallible): an unknown
/// path becomes a 404 here, so hyper never sees an error.
async fn dispatch(
    router: &Router,
    req: hyper::Request<hyper::body::Incoming>,
) -> Result<http::Response<http_body_util::Full<bytes::Bytes>>, std::convert::Infallible> {
    let req = Request::from_hyper(&req);

    let response = match router.lookup(req.path()) {
        Some(handler) => handler.call(req).await,
        None => Response::status(Status::NotFound),
    };

    Ok(response.into_inner())
}
