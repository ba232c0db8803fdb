//! HTTP status codes as a typed enum.
//!
//! Use [`Status`] anywhere a status code is accepted — `Response::status()`,
//! `Response::error()`, or as a bare handler return value.
//!
//! ```rust
//! use hello_chain::{Response, Status};
//!
//! // status-only, no body
//! Response::status(Status::NotFound);
//!
//! // reason phrase as a plain-text body: "Bad Request"
//! Response::error(Status::BadRequest);
//! ```

/// The status codes this server produces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Ok,                  // 200
    BadRequest,          // 400
    NotFound,            // 404
    InternalServerError, // 500
}

impl Status {
    /// The standard reason phrase, e.g. `"Bad Request"`.
    pub fn reason(self) -> &'static str {
        match self {
            Self::Ok                  => "OK",
            Self::BadRequest          => "Bad Request",
            Self::NotFound            => "Not Found",
            Self::InternalServerError => "Internal Server Error",
        }
    }
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok                  => 200,
            Status::BadRequest          => 400,
            Status::NotFound            => 404,
            Status::InternalServerError => 500,
        }
    }
}
