use crate::models::{ContactMessage, UpstreamSubmission};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while relaying a submission
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Access key is not configured")]
    MissingAccessKey,

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
}

/// Where the relay gets the form-delivery access key from
pub trait AccessKeySource: Send + Sync {
    /// Current key, `None` when unset or blank
    fn access_key(&self) -> Option<String>;
}

/// Reads the key from a process environment variable on every call
#[derive(Debug, Clone)]
pub struct EnvAccessKey {
    var: String,
}

impl EnvAccessKey {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl AccessKeySource for EnvAccessKey {
    fn access_key(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|key| !key.is_empty())
    }
}

/// Fixed key, used by tests and embedders that resolve the key themselves
#[derive(Debug, Clone, Default)]
pub struct StaticAccessKey(pub Option<String>);

impl AccessKeySource for StaticAccessKey {
    fn access_key(&self) -> Option<String> {
        self.0.clone().filter(|key| !key.is_empty())
    }
}

/// Upstream reply, passed back to the caller untouched
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Client for the third-party form-delivery API
///
/// Each call issues exactly one POST; there is no retry.
pub struct FormRelayClient {
    endpoint: String,
    access_key: Box<dyn AccessKeySource>,
    client: Client,
}

impl FormRelayClient {
    /// Create a new relay client
    pub fn new(
        endpoint: String,
        access_key: Box<dyn AccessKeySource>,
        timeout_secs: u64,
    ) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            endpoint,
            access_key,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Forward a contact message with the configured access key attached
    pub async fn submit(&self, contact: &ContactMessage) -> Result<UpstreamReply, RelayError> {
        let access_key = self.access_key.access_key().ok_or(RelayError::MissingAccessKey)?;
        let payload = build_submission(&access_key, contact);

        tracing::debug!("Relaying contact submission to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        if !(200..300).contains(&status) {
            tracing::warn!("Form-delivery API answered {}", status);
        }

        Ok(UpstreamReply {
            status,
            content_type,
            body,
        })
    }
}

/// Upstream payload: the key, the three form fields, and a derived subject
pub fn build_submission<'a>(access_key: &'a str, contact: &'a ContactMessage) -> UpstreamSubmission<'a> {
    let name = contact.name.as_deref();

    UpstreamSubmission {
        access_key,
        from_name: name,
        name,
        email: contact.email.as_deref(),
        message: contact.message.as_deref(),
        subject: format!("New message from {}", name.unwrap_or_default()),
    }
}
