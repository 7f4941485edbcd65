//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request to shorten a single URL.
///
/// A missing `long_url` field deserializes to an empty string so that it is
/// reported by validation rather than as a body rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_long_url"))]
    pub long_url: String,
}

/// Response for a successfully shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub long_url: String,
}

/// Rejects blank targets and targets that cannot be sent back in a
/// `Location` header.
fn validate_long_url(url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() {
        return Err(ValidationError::new("missing_url").with_message("Missing URL".into()));
    }

    if url.chars().any(char::is_control) {
        return Err(ValidationError::new("control_chars")
            .with_message("URL must not contain control characters".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_defaults_to_empty() {
        let req: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.long_url, "");
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_valid_request() {
        let req: ShortenRequest =
            serde_json::from_str(r#"{"long_url":"https://example.com"}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_blank_rejected() {
        let req = ShortenRequest {
            long_url: "   ".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_control_chars_rejected() {
        let req = ShortenRequest {
            long_url: "https://example.com/\r\nSet-Cookie: x".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
