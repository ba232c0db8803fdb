//! Demo server: `GET /` → `hello world`, timed and method-guarded.
//!
//! Run with:
//!   RUST_LOG=info cargo run
//!
//! Try:
//!   curl http://localhost:8080/
//!   curl -X POST http://localhost:8080/

use std::process::ExitCode;

use hello_chain::{DEFAULT_ADDR, Server, hello};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Server::bind(DEFAULT_ADDR).serve(hello::app()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("server error: {e}");
            ExitCode::FAILURE
        }
    }
}
