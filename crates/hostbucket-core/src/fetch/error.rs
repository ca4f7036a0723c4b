//! Retrieval error for a single source.

/// Error returned when one source cannot be retrieved. The caller logs it and
/// moves on to the next source.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, DNS, connection, TLS, bad URL).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// The server answered with a non-2xx status.
    #[error("{url} returned HTTP {code}")]
    Http { url: String, code: u32 },
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Curl(e) if e.is_operation_timedout())
    }
}
