//! Request timing log.
//!
//! Emits one `info` event per request, after the wrapped handler is done:
//!
//! ```text
//! / 1.204ms
//! ```
//!
//! The event is produced by a drop guard, so it fires however the wrapped
//! handler ends — with a response, by panicking, or by its future being
//! dropped when the client goes away. The wrapper never looks at the
//! response.

use std::time::Instant;

use tracing::info;

use crate::handler::{BoxFuture, BoxedHandler, ErasedHandler};
use crate::request::Request;

/// Wraps `next` so every request through it is timed and logged.
pub fn logging(next: BoxedHandler) -> BoxedHandler {
    BoxedHandler::new(Logging { next })
}

struct Logging {
    next: BoxedHandler,
}

impl ErasedHandler for Logging {
    fn call(&self, req: Request) -> BoxFuture {
        let timer = Timer::start(req.path().to_owned());
        let fut = self.next.call(req);
        Box::pin(async move {
            let _timer = timer;
            fut.await
        })
    }
}

/// Logs path and elapsed time when dropped.
struct Timer {
    path: String,
    start: Instant,
}

impl Timer {
    fn start(path: String) -> Self {
        Self { path, start: Instant::now() }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        info!("{} {:?}", self.path, elapsed);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::logging;
    use crate::handler::Handler;
    use crate::testing::capture_logs;
    use crate::{Request, Response, Status};

    #[tokio::test]
    async fn logs_path_and_duration_once() {
        let logs = capture_logs();
        let handler = logging((|_req: Request| async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Response::text("slow")
        }).into_boxed_handler());

        let res = handler.call(Request::test("GET", "/slow")).await;
        assert_eq!(res.body(), b"slow");

        let lines = logs.lines();
        assert_eq!(lines.len(), 1, "{lines:?}");
        let (path, elapsed) = lines[0].split_once(' ').unwrap();
        assert_eq!(path, "/slow");
        assert!(elapsed.ends_with('s'), "not a duration: {elapsed}");
    }

    #[tokio::test]
    async fn logs_error_responses_too() {
        let logs = capture_logs();
        let handler = logging((|_req: Request| async { Status::InternalServerError }).into_boxed_handler());

        let res = handler.call(Request::test("POST", "/fail")).await;
        assert_eq!(res.status_code(), 500);
        assert_eq!(logs.lines().len(), 1);
    }

    #[tokio::test]
    async fn logs_when_the_handler_panics() {
        let logs = capture_logs();
        let handler = logging((|_req: Request| async {
            if true {
                panic!("handler blew up");
            }
            Response::text("unreachable")
        }).into_boxed_handler());

        let joined = tokio::spawn(handler.call(Request::test("GET", "/boom"))).await;
        assert!(joined.unwrap_err().is_panic());

        let lines = logs.lines();
        assert_eq!(lines.len(), 1, "{lines:?}");
        assert!(lines[0].starts_with("/boom "));
    }

    #[tokio::test]
    async fn logs_when_the_request_is_abandoned() {
        let logs = capture_logs();
        let handler = logging((|_req: Request| async {
            std::future::pending::<()>().await;
            Response::text("never")
        }).into_boxed_handler());

        let fut = handler.call(Request::test("GET", "/gone"));
        let _ = tokio::time::timeout(Duration::from_millis(1), fut).await;

        assert_eq!(logs.lines().len(), 1);
    }

    #[tokio::test]
    async fn logs_nothing_until_called() {
        let logs = capture_logs();
        let _handler = logging((|_req: Request| async { "idle" }).into_boxed_handler());
        assert!(logs.lines().is_empty());
    }
}
