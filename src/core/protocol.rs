//! HTTP contract between the page and its server
//!
//! Shared by the axum handlers and the browser client so both sides agree on
//! paths, bodies and error codes.

use serde::{Deserialize, Serialize};

use super::contact::SubmitError;

/// `GET` → ordered `[Testimonial]`
pub const TESTIMONIALS_ROUTE: &str = "/api/testimonials";

/// `POST` `ContactForm` → `202 ContactAccepted`
pub const CONTACT_ROUTE: &str = "/api/contact";

/// Body of a `202` from the contact relay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAccepted {
    pub accepted: bool,
}

/// API error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: ApiErrorCode,
}

/// API error codes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    TestimonialsUnavailable,
    TestimonialsMalformed,
    ValidationFailed,
    ContactNotConfigured,
    TransportFailed,
    BadRequest,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: ApiErrorCode) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }

    /// Map a relay error back onto the submission taxonomy
    pub fn into_submit_error(self) -> SubmitError {
        match self.code {
            ApiErrorCode::ContactNotConfigured => SubmitError::NotConfigured,
            ApiErrorCode::TransportFailed => SubmitError::Transport(self.error),
            _ => SubmitError::Rejected(self.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_wire_format() {
        let body = ApiError::new("nope", ApiErrorCode::ContactNotConfigured);
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(
            json,
            r#"{"error":"nope","code":"contact_not_configured"}"#
        );
    }

    #[test]
    fn test_into_submit_error() {
        assert_eq!(
            ApiError::new("x", ApiErrorCode::ContactNotConfigured).into_submit_error(),
            SubmitError::NotConfigured
        );
        assert_eq!(
            ApiError::new("down", ApiErrorCode::TransportFailed).into_submit_error(),
            SubmitError::Transport("down".to_string())
        );
        assert_eq!(
            ApiError::new("Please enter your message", ApiErrorCode::ValidationFailed)
                .into_submit_error(),
            SubmitError::Rejected("Please enter your message".to_string())
        );
    }
}
