//! Incoming HTTP request type.

/// An incoming HTTP request as seen by handlers and middleware.
///
/// The method is kept verbatim as received; nothing is normalised.
pub struct Request {
    pub(crate) method: String,
    pub(crate) path: String,
}

impl Request {
    pub(crate) fn new(method: String, path: String) -> Self {
        Self { method, path }
    }

    /// Builds the handler view of a hyper request.
    pub(crate) fn from_hyper<B>(req: &http::Request<B>) -> Self {
        Self::new(req.method().as_str().to_owned(), req.uri().path().to_owned())
    }

    pub fn method(&self) -> &str { &self.method }
    pub fn path(&self) -> &str { &self.path }
}

#[cfg(test)]
impl Request {
    pub(crate) fn test(method: &str, path: &str) -> Self {
        Self::new(method.to_owned(), path.to_owned())
    }
}
