//! Route API error types.

/// Errors that can occur when fetching the route listing.
#[derive(Debug, thiserror::Error)]
pub enum RoutesError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Client could not be constructed or used
    #[error("client error: {0}")]
    Client(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RoutesError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = RoutesError::Json {
            message: "expected array".into(),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected array");
    }
}
