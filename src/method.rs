//! HTTP method as a typed enum.
//!
//! Only the RFC 9110 methods are named. Requests are never parsed into this
//! type: a [`Request`](crate::Request) keeps the method string exactly as it
//! arrived, and [`Method`] is what middleware compares it against.

use std::fmt;

/// A standard HTTP method.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    Connect,
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
    Trace,
}

impl Method {
    /// Returns the uppercase wire representation (e.g. `"GET"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connect => "CONNECT",
            Self::Delete  => "DELETE",
            Self::Get     => "GET",
            Self::Head    => "HEAD",
            Self::Options => "OPTIONS",
            Self::Patch   => "PATCH",
            Self::Post    => "POST",
            Self::Put     => "PUT",
            Self::Trace   => "TRACE",
        }
    }

    /// Exact, case-sensitive comparison against a method as received on the
    /// wire (RFC 9110 §9.1). `"get"` does not match [`Method::Get`].
    pub fn matches(self, raw: &str) -> bool {
        self.as_str() == raw
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
