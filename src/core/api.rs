//! Site API endpoints
//!
//! - GET /api/testimonials - Ordered testimonial list for the carousel
//! - POST /api/contact - Validate a contact form and relay it to the sink

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::path::PathBuf;

use super::config::Config;
use super::contact::{ContactForm, ContactSink, SubmitError, ValidationError};
use super::contact_sink::HttpContactSink;
use super::protocol::{
    ApiError, ApiErrorCode, CONTACT_ROUTE, ContactAccepted, TESTIMONIALS_ROUTE,
};
use super::testimonials::{Testimonial, TestimonialError, load_testimonials_file};

/// Site API state
#[derive(Debug, Clone)]
pub struct SiteApiState {
    pub testimonials_path: PathBuf,
    pub contact_sink: HttpContactSink,
}

impl SiteApiState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            testimonials_path: config.testimonials_path.clone(),
            contact_sink: HttpContactSink::new(config.contact_endpoint().map(str::to_string)),
        }
    }
}

/// Site API error types
#[derive(Debug, thiserror::Error)]
pub enum SiteApiError {
    #[error(transparent)]
    Testimonials(#[from] TestimonialError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl IntoResponse for SiteApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            SiteApiError::Testimonials(TestimonialError::Unavailable(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorCode::TestimonialsUnavailable,
            ),
            SiteApiError::Testimonials(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiErrorCode::TestimonialsMalformed,
            ),
            SiteApiError::Validation(_) => (StatusCode::BAD_REQUEST, ApiErrorCode::ValidationFailed),
            SiteApiError::Submit(SubmitError::NotConfigured) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiErrorCode::ContactNotConfigured,
            ),
            SiteApiError::Submit(SubmitError::Transport(_)) => {
                (StatusCode::BAD_GATEWAY, ApiErrorCode::TransportFailed)
            }
            SiteApiError::Submit(SubmitError::Rejected(_)) => {
                (StatusCode::BAD_REQUEST, ApiErrorCode::BadRequest)
            }
        };

        let body = ApiError::new(self.to_string(), code);

        (status, Json(body)).into_response()
    }
}

/// Create the site API router
pub fn site_api_router(state: SiteApiState) -> Router {
    Router::new()
        .route(TESTIMONIALS_ROUTE, get(list_testimonials))
        .route(CONTACT_ROUTE, post(submit_contact))
        .with_state(state)
}

// ============================================================================
// API Handlers
// ============================================================================

/// Serve the testimonial document
///
/// GET /api/testimonials
///
/// Response: [Testimonial] (200 OK) or ApiError
async fn list_testimonials(
    State(state): State<SiteApiState>,
) -> Result<Json<Vec<Testimonial>>, SiteApiError> {
    let items = load_testimonials_file(&state.testimonials_path)
        .await
        .inspect_err(|e| tracing::warn!("Cannot serve testimonials: {}", e))?;
    Ok(Json(items))
}

/// Relay a contact form to the remote sink
///
/// POST /api/contact
///
/// Request body: ContactForm
/// Response: ContactAccepted (202 Accepted) or ApiError
async fn submit_contact(
    State(state): State<SiteApiState>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<ContactAccepted>), SiteApiError> {
    form.validate()
        .inspect_err(|e| tracing::warn!("Rejected contact form: {}", e))?;

    state
        .contact_sink
        .submit(&form)
        .await
        .inspect_err(|e| match e {
            SubmitError::NotConfigured => {
                tracing::warn!("Contact form submitted but CONTACT_ENDPOINT is not configured")
            }
            other => tracing::error!("Contact relay failed: {}", other),
        })?;

    tracing::info!("Contact form relayed");
    Ok((StatusCode::ACCEPTED, Json(ContactAccepted { accepted: true })))
}

// ============================================================================
// Tests
// ============================================================================
