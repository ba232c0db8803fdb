//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Build a [`Response`] in your handler and return it. The server converts
//! it to a hyper response at the edge; nothing else touches it.

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http_body_util::Full;

use crate::status::Status;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response.
///
/// ```rust
/// use hello_chain::{Response, Status};
///
/// Response::text("hello world\n");      // 200, text/plain
/// Response::status(Status::NotFound);   // 404, no body
/// Response::error(Status::BadRequest);  // 400, body "Bad Request"
/// ```
#[derive(Debug)]
pub struct Response {
    pub(crate) body: Vec<u8>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) status: u16,
}

impl Response {
    /// `200 OK` — `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            body: body.into().into_bytes(),
            headers: vec![("content-type".to_owned(), TEXT_PLAIN.to_owned())],
            status: Status::Ok.into(),
        }
    }

    /// Response with no body.
    pub fn status(code: Status) -> Self {
        Self { body: Vec::new(), headers: Vec::new(), status: code.into() }
    }

    /// Plain-text error whose body is the status reason phrase.
    ///
    /// Also sets `x-content-type-options: nosniff` so browsers do not try to
    /// interpret the body as anything but text.
    pub fn error(code: Status) -> Self {
        Self {
            body: code.reason().as_bytes().to_vec(),
            headers: vec![
                ("content-type".to_owned(), TEXT_PLAIN.to_owned()),
                ("x-content-type-options".to_owned(), "nosniff".to_owned()),
            ],
            status: code.into(),
        }
    }

    pub fn status_code(&self) -> u16 { self.status }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Converts into the hyper response the connection writes out.
    ///
    /// Headers that are not valid HTTP tokens/values are dropped rather than
    /// failing the whole response.
    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(Bytes::from(self.body)));
        *res.status_mut() = http::StatusCode::from_u16(self.status)
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);

        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                res.headers_mut().append(name, value);
            }
        }
        res
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
///
/// Implement on your own types to return them directly from handlers.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response { Response::text(self) }
}

/// Return a [`Status`] directly from a handler: `return Status::NotFound`
impl IntoResponse for Status {
    fn into_response(self) -> Response { Response::status(self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_is_reason_phrase() {
        let res = Response::error(Status::BadRequest);
        assert_eq!(res.status_code(), 400);
        assert_eq!(res.body(), b"Bad Request");
        assert_eq!(res.header("Content-Type"), Some(TEXT_PLAIN));
        assert_eq!(res.header("x-content-type-options"), Some("nosniff"));
    }

    #[test]
    fn debug_shows_status() {
        let shown = format!("{:?}", Response::error(Status::BadRequest));
        assert!(shown.contains("status: 400"), "{shown}");
    }

    #[test]
    fn into_inner_carries_status_and_headers() {
        let res = Response::text("hi").into_inner();
        assert_eq!(res.status(), http::StatusCode::OK);
        assert_eq!(res.headers()["content-type"], TEXT_PLAIN);
    }

    #[test]
    fn into_inner_drops_invalid_headers() {
        let mut res = Response::status(Status::NotFound);
        res.headers.push(("bad header".to_owned(), "x".to_owned()));
        let res = res.into_inner();
        assert_eq!(res.status(), http::StatusCode::NOT_FOUND);
        assert!(res.headers().is_empty());
    }
}
