use crate::core::contact::{validate_contact, ContactFormError, SubmissionOutcome};
use crate::models::ContactMessage;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// The single contact-form submission path used by every page
///
/// Posts to the relay endpoint and turns the reply into a [`SubmissionOutcome`].
pub struct ContactFormClient {
    relay_url: String,
    client: Client,
}

impl ContactFormClient {
    pub fn new(relay_url: impl Into<String>, timeout_secs: u64) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            relay_url: relay_url.into(),
            client,
        })
    }

    /// Validate, submit once, and interpret. Never retried.
    pub async fn submit(&self, contact: &ContactMessage) -> Result<SubmissionOutcome, ContactFormError> {
        validate_contact(contact)?;

        let response = match self.client.post(&self.relay_url).json(contact).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Contact submission failed: {}", e);
                return Ok(SubmissionOutcome::NetworkError);
            }
        };

        let status = response.status().as_u16();
        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Unreadable relay reply ({}): {}", status, e);
                return Ok(SubmissionOutcome::NetworkError);
            }
        };

        Ok(SubmissionOutcome::from_reply(status, &body))
    }
}
