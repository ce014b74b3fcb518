//! HTTP delivery of contact submissions to the remote sink
//!
//! The sink answers with an opaque response, so the status and body are
//! never inspected: a request that leaves without a transport error is
//! reported as [`Ack`].

use std::time::Duration;

use chrono::{SecondsFormat, Utc};

use super::contact::{Ack, ContactForm, ContactSink, ContactSubmission, SubmitError};

/// Longest wait for the sink before the submission counts as failed
pub const SINK_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts submissions as JSON to the configured endpoint
#[derive(Debug, Clone)]
pub struct HttpContactSink {
    client: reqwest::Client,
    endpoint: Option<String>,
    timeout: Duration,
}

impl HttpContactSink {
    /// `endpoint` should already have placeholders filtered out
    pub fn new(endpoint: Option<String>) -> Self {
        Self::with_timeout(endpoint, SINK_TIMEOUT)
    }

    /// Sink whose requests give up after `timeout`
    pub fn with_timeout(endpoint: Option<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::default()
            });
        Self {
            client,
            endpoint,
            timeout,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }
}

impl ContactSink for HttpContactSink {
    async fn submit(&self, form: &ContactForm) -> Result<Ack, SubmitError> {
        let endpoint = self.endpoint.as_deref().ok_or(SubmitError::NotConfigured)?;

        let submission = ContactSubmission::new(
            form,
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        );

        self.client
            .post(endpoint)
            .json(&submission)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SubmitError::Transport(format!("sink did not answer within {:?}", self.timeout))
                } else {
                    SubmitError::Transport(e.to_string())
                }
            })?;

        tracing::debug!("Contact submission handed to sink");
        Ok(Ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, routing::post};
    use tokio::sync::mpsc;

    fn form() -> ContactForm {
        ContactForm {
            name: "Fox".to_string(),
            phone: String::new(),
            email: "fox@example.com".to_string(),
            message: "Call me".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_sink_fails_before_network() {
        let sink = HttpContactSink::new(None);
        assert!(!sink.is_configured());
        assert_eq!(sink.submit(&form()).await, Err(SubmitError::NotConfigured));
    }

    #[tokio::test]
    async fn test_unreachable_sink_is_transport_error() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let sink = HttpContactSink::new(Some(format!("http://{}/hook", addr)));
        let result = sink.submit(&form()).await;
        assert!(matches!(result, Err(SubmitError::Transport(_))));
    }

    #[tokio::test]
    async fn test_silent_sink_times_out_as_transport_error() {
        let app = Router::new().route(
            "/hook",
            post(|| async {
                std::future::pending::<()>().await;
                axum::http::StatusCode::OK
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let sink = HttpContactSink::with_timeout(
            Some(format!("http://{}/hook", addr)),
            Duration::from_millis(200),
        );
        let result = tokio::time::timeout(Duration::from_secs(5), sink.submit(&form()))
            .await
            .expect("submit must resolve once the sink timeout elapses");

        match result {
            Err(SubmitError::Transport(reason)) => assert!(reason.contains("did not answer")),
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submission_reaches_sink() {
        let (tx, mut rx) = mpsc::channel::<ContactSubmission>(1);
        let app = Router::new().route(
            "/hook",
            post(move |Json(body): Json<ContactSubmission>| {
                let tx = tx.clone();
                async move {
                    let _ = tx.send(body).await;
                    // Opaque sinks may answer with anything; it must not matter
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let sink = HttpContactSink::new(Some(format!("http://{}/hook", addr)));
        assert_eq!(sink.submit(&form()).await, Ok(Ack));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.name, "Fox");
        assert_eq!(received.email, "fox@example.com");
        assert!(chrono::DateTime::parse_from_rfc3339(&received.timestamp).is_ok());
    }
}
