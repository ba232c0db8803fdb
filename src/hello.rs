//! The demo application: one `hello` handler behind the method guard and
//! the timing log.
//!
//! | Request | Response | Log line |
//! |---|---|---|
//! | `GET /` | `200 hello world\n` | `/ <elapsed>` |
//! | any other method on `/` | `400 Bad Request` | none |
//! | any other path | `404` | none |
//!
//! The guard sits outside the logger, so rejected requests never reach the
//! timer.

use crate::handler::BoxedHandler;
use crate::method::Method;
use crate::middleware::{Middleware, chain, logging::logging, method_guard::method};
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// Always `200 OK` with `hello world\n`. Reads nothing from the request.
pub async fn hello(_req: Request) -> Response {
    Response::text("hello world\n")
}

/// Builds the demo router: `hello` on `/`, GET only, timed.
pub fn app() -> Router {
    let guarded: Box<dyn Middleware> = Box::new(|next: BoxedHandler| method(Method::Get, logging(next)));
    Router::new().route("/", chain(hello, vec![guarded]))
}

#[cfg(test)]
mod tests {
    use super::{app, hello};
    use crate::Request;
    use crate::testing::capture_logs;

    #[tokio::test]
    async fn hello_ignores_the_request() {
        let res = hello(Request::test("DELETE", "/whatever")).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.body(), b"hello world\n");
        assert_eq!(res.header("content-type"), Some("text/plain; charset=utf-8"));
    }

    #[tokio::test]
    async fn get_root_says_hello_and_logs_once() {
        let logs = capture_logs();
        let root = app().lookup("/").expect("root is registered");

        let res = root.call(Request::test("GET", "/")).await;

        assert_eq!(res.status_code(), 200);
        assert_eq!(res.body(), b"hello world\n");
        let lines = logs.lines();
        assert_eq!(lines.len(), 1, "{lines:?}");
        assert!(lines[0].starts_with("/ "), "{}", lines[0]);
    }

    #[tokio::test]
    async fn rejected_methods_are_not_logged() {
        let logs = capture_logs();
        let root = app().lookup("/").expect("root is registered");

        for m in ["POST", "DELETE", "PATCH"] {
            let res = root.call(Request::test(m, "/")).await;
            assert_eq!(res.status_code(), 400);
            assert_eq!(res.body(), b"Bad Request");
        }
        assert!(logs.lines().is_empty());
    }

    #[test]
    fn only_root_is_routed() {
        assert!(app().lookup("/hello").is_none());
    }
}
