//! Error taxonomy for fetching the hero collection.
//!
//! # Design
//! The set of variants is closed: every failure of a fetch lands in exactly
//! one of them. Underlying causes are kept as their rendered description so
//! the error is `Clone + PartialEq` and can be stored inside `LoadState`.
//!
//! `Display` is the developer-facing form (includes the cause);
//! `user_message` is the fixed text shown next to a "Try Again" control.

use thiserror::Error;

/// Errors returned by `HeroClient::fetch_all` and recorded by `HeroStore`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeroError {
    /// The endpoint URL could not be constructed.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// DNS failure, refused connection, timeout, or a broken body stream.
    #[error("transport failed: {0}")]
    TransportError(String),

    /// Something answered, but not with a usable HTTP response.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The server answered with a status outside `200..300`.
    #[error("HTTP {0}")]
    HttpStatus(u16),

    /// The body did not decode into a collection of heroes.
    #[error("decoding failed: {0}")]
    DecodingError(String),

    #[error("unknown error: {0}")]
    UnknownError(String),
}

impl HeroError {
    pub fn user_message(&self) -> String {
        match self {
            HeroError::InvalidEndpoint(_) => "Invalid URL. Please try again later.".to_string(),
            HeroError::TransportError(cause) => {
                format!("Network error: {cause}. Please try again later.")
            }
            HeroError::InvalidResponse(_) => {
                "Invalid response from server. Please try again later.".to_string()
            }
            HeroError::HttpStatus(code) => format!("HTTP Error: {code}. Please try again later."),
            HeroError::DecodingError(_) => {
                "Failed to process superhero data. Please try again later.".to_string()
            }
            HeroError::UnknownError(_) => "Unknown error occurred. Please try again later.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_carries_code() {
        let err = HeroError::HttpStatus(503);
        assert_eq!(err.user_message(), "HTTP Error: 503. Please try again later.");
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[test]
    fn transport_message_carries_cause() {
        let err = HeroError::TransportError("connection refused".to_string());
        assert_eq!(
            err.user_message(),
            "Network error: connection refused. Please try again later."
        );
    }

    #[test]
    fn decoding_message_hides_cause_from_user() {
        let err = HeroError::DecodingError("missing field `gender`".to_string());
        assert_eq!(
            err.user_message(),
            "Failed to process superhero data. Please try again later."
        );
        assert!(err.to_string().contains("missing field `gender`"));
    }
}
