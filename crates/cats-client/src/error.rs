//! Error types for cats API operations.

use thiserror::Error;

/// Result type alias for cats API operations.
pub type CatsResult<T> = Result<T, CatsError>;

/// Errors surfaced while fetching the cat list.
///
/// The same value handed to `error` listeners is returned from the
/// fetch, so both observers see one consistent failure.
#[derive(Debug, Error)]
pub enum CatsError {
    /// API request failed with an HTTP error status.
    #[error("Cats API request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The cat list endpoint does not exist at the configured base URL.
    #[error("No cats found at {url}")]
    NotFound {
        /// The URL that was requested
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from cats API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonDecode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_error_message() {
        let error = CatsError::RequestFailed {
            status: 503,
            url: "http://localhost:3000/cats".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("localhost:3000"));
    }

    #[test]
    fn test_not_found_error_message() {
        let error = CatsError::NotFound {
            url: "http://localhost:3000/cats".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("No cats found"));
        assert!(msg.contains("/cats"));
    }

    #[test]
    fn test_invalid_response_error_message() {
        let error = CatsError::InvalidResponse {
            message: "expected a JSON array of names".to_string(),
        };
        assert!(error.to_string().contains("expected a JSON array"));
    }

    #[test]
    fn test_json_decode_error_message() {
        let decode_error = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let error = CatsError::from(decode_error);
        assert!(error.to_string().contains("JSON parsing error"));
    }

    #[test]
    fn test_cats_result_ok() {
        let result: CatsResult<i32> = Ok(42);
        assert!(result.is_ok());
        assert!(matches!(result, Ok(42)));
    }
}
