use crate::models::ContactMessage;
use serde_json::Value;
use thiserror::Error;
use validator::ValidateEmail;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const FALLBACK_FAILURE_MESSAGE: &str = "Failed to send message";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Problems caught before the contact form is submitted
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("Please fill in all fields")]
    MissingField(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Client-side checks run before posting to the relay
pub fn validate_contact(message: &ContactMessage) -> Result<(), ContactFormError> {
    let fields = [
        ("name", &message.name),
        ("email", &message.email),
        ("message", &message.message),
    ];

    for (field, value) in fields {
        if value.as_deref().map_or(true, |v| v.trim().is_empty()) {
            return Err(ContactFormError::MissingField(field));
        }
    }

    let email_ok = message
        .email
        .as_deref()
        .map_or(false, |email| email.trim().validate_email());

    if !email_ok {
        return Err(ContactFormError::InvalidEmail);
    }

    Ok(())
}

/// What the guest is told after a contact submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent,
    Rejected(String),
    NetworkError,
}

impl SubmissionOutcome {
    /// Interpret the relay reply.
    ///
    /// Success requires both a 2xx status and `"success": true` in the body.
    pub fn from_reply(status: u16, body: &Value) -> Self {
        let flagged = body.get("success").and_then(Value::as_bool).unwrap_or(false);

        if (200..300).contains(&status) && flagged {
            return SubmissionOutcome::Sent;
        }

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_FAILURE_MESSAGE);

        SubmissionOutcome::Rejected(message.to_string())
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, SubmissionOutcome::Sent)
    }

    /// Text for the alert shown to the guest
    pub fn notice(&self) -> String {
        match self {
            SubmissionOutcome::Sent => SUCCESS_MESSAGE.to_string(),
            SubmissionOutcome::Rejected(message) => format!("Error: {}", message),
            SubmissionOutcome::NetworkError => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}
