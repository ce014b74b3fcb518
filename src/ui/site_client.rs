//! Browser calls to the site API

use gloo_net::http::Request;

use crate::core::protocol::{ApiError, CONTACT_ROUTE, TESTIMONIALS_ROUTE};
use crate::core::{Ack, ContactForm, ContactSink, SubmitError, Testimonial, TestimonialError};

/// One-time fetch of the carousel items
pub async fn fetch_testimonials() -> Result<Vec<Testimonial>, TestimonialError> {
    let response = Request::get(TESTIMONIALS_ROUTE)
        .send()
        .await
        .map_err(|e| TestimonialError::Unavailable(e.to_string()))?;

    if !response.ok() {
        return Err(TestimonialError::Unavailable(format!(
            "HTTP {}",
            response.status()
        )));
    }

    let items: Vec<Testimonial> = response
        .json()
        .await
        .map_err(|e| TestimonialError::Malformed(e.to_string()))?;

    if items.is_empty() {
        return Err(TestimonialError::Empty);
    }
    Ok(items)
}

/// Sends the form to the server relay, which forwards it to the sink
#[derive(Debug, Clone, Copy, Default)]
pub struct RelayContactSink;

impl ContactSink for RelayContactSink {
    async fn submit(&self, form: &ContactForm) -> Result<Ack, SubmitError> {
        let response = Request::post(CONTACT_ROUTE)
            .json(form)
            .map_err(|e| SubmitError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        if response.ok() {
            return Ok(Ack);
        }

        match response.json::<ApiError>().await {
            Ok(body) => Err(body.into_submit_error()),
            Err(_) => Err(SubmitError::Transport(format!(
                "HTTP {}",
                response.status()
            ))),
        }
    }
}
