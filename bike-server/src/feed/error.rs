//! Feed client error types.

use std::fmt;

/// Errors from the station feed HTTP client.
#[derive(Debug)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// The configured network does not exist upstream
    NetworkNotFound(String),

    /// Response parsed but carried no station list
    MissingStations,
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Http(e) => write!(f, "HTTP error: {e}"),
            FeedError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            FeedError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            FeedError::NetworkNotFound(network) => {
                write!(f, "unknown bike network: {network}")
            }
            FeedError::MissingStations => {
                write!(f, "response has no station list")
            }
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FeedError::NetworkNotFound("citi-bike-miami".into());
        assert_eq!(err.to_string(), "unknown bike network: citi-bike-miami");

        let err = FeedError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = FeedError::Json {
            message: "expected array".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected array"));

        let err = FeedError::MissingStations;
        assert_eq!(err.to_string(), "response has no station list");
    }
}
