//! Outbound contact form relay.
//!
//! [`ContactRelay`] forwards a validated contact submission to a
//! third-party form endpoint (Formspree or compatible) as an urlencoded
//! POST. Any 2xx response counts as delivered. There is no retry; a
//! failed submission surfaces to the sender, who can simply submit
//! again.

use std::time::Duration;

use reqwest::header;

use folio_core::contact::ContactMessage;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for contact relay failures.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The outbound HTTP request failed (network, DNS, timeout, etc.).
    #[error("Relay request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The relay endpoint returned a non-2xx status code.
    #[error("Relay returned HTTP {0}")]
    Status(u16),
}

// ---------------------------------------------------------------------------
// ContactRelay
// ---------------------------------------------------------------------------

/// Delivers contact submissions to an external form endpoint.
pub struct ContactRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl ContactRelay {
    /// Create a relay with a pre-configured HTTP client.
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, endpoint }
    }

    /// Relay one submission. `subject` is omitted from the form when
    /// absent.
    pub async fn submit(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let mut form: Vec<(&str, &str)> = vec![("name", &message.name), ("email", &message.email)];
        if let Some(subject) = &message.subject {
            form.push(("subject", subject));
        }
        form.push(("message", &message.message));

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .form(&form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RelayError::Status(response.status().as_u16()));
        }

        tracing::info!("Contact message relayed");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use axum::extract::Form;
    use axum::http::StatusCode;
    use axum::routing::post;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    type ReceivedForm = Arc<Mutex<Option<HashMap<String, String>>>>;

    /// Local endpoint that records the submitted form and answers with
    /// the given status.
    async fn relay_endpoint(status: StatusCode) -> (String, ReceivedForm) {
        let received: ReceivedForm = Arc::new(Mutex::new(None));
        let captured = Arc::clone(&received);

        let app = axum::Router::new().route(
            "/relay",
            post(move |Form(form): Form<HashMap<String, String>>| {
                let captured = Arc::clone(&captured);
                async move {
                    *captured.lock().await = Some(form);
                    status
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });

        (format!("http://{addr}/relay"), received)
    }

    fn sample_message() -> ContactMessage {
        ContactMessage {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: Some("Collaboration".to_string()),
            message: "I would like to discuss a project with you.".to_string(),
        }
    }

    #[tokio::test]
    async fn success_delivers_all_fields() {
        let (endpoint, received) = relay_endpoint(StatusCode::OK).await;
        let relay = ContactRelay::new(endpoint, Duration::from_secs(5));

        relay.submit(&sample_message()).await.expect("submit");

        let form = received.lock().await.clone().expect("form received");
        assert_eq!(form["name"], "Ada Lovelace");
        assert_eq!(form["email"], "ada@example.com");
        assert_eq!(form["subject"], "Collaboration");
        assert_eq!(
            form["message"],
            "I would like to discuss a project with you."
        );
    }

    #[tokio::test]
    async fn absent_subject_is_omitted_from_the_form() {
        let (endpoint, received) = relay_endpoint(StatusCode::OK).await;
        let relay = ContactRelay::new(endpoint, Duration::from_secs(5));

        let message = ContactMessage {
            subject: None,
            ..sample_message()
        };
        relay.submit(&message).await.expect("submit");

        let form = received.lock().await.clone().expect("form received");
        assert!(!form.contains_key("subject"));
        assert_eq!(form["name"], "Ada Lovelace");
    }

    #[tokio::test]
    async fn accepted_status_counts_as_success() {
        let (endpoint, _received) = relay_endpoint(StatusCode::ACCEPTED).await;
        let relay = ContactRelay::new(endpoint, Duration::from_secs(5));

        assert!(relay.submit(&sample_message()).await.is_ok());
    }

    #[tokio::test]
    async fn server_error_is_status_failure() {
        let (endpoint, _received) = relay_endpoint(StatusCode::INTERNAL_SERVER_ERROR).await;
        let relay = ContactRelay::new(endpoint, Duration::from_secs(5));

        assert_matches!(
            relay.submit(&sample_message()).await,
            Err(RelayError::Status(500))
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_request_failure() {
        // Nothing listens on this port.
        let relay = ContactRelay::new(
            "http://127.0.0.1:1/relay".to_string(),
            Duration::from_secs(1),
        );

        assert_matches!(
            relay.submit(&sample_message()).await,
            Err(RelayError::Request(_))
        );
    }
}
