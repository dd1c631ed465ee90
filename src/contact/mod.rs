//! Contact form relay through the EmailJS HTTP API
//!
//! The relay is the only asynchronous operation in the crate: one awaited
//! POST, no retry, no timeout, no cancellation. Every failure is converted
//! into a user-facing message instead of propagating.

use serde::Serialize;
use thiserror::Error;

use crate::config::EmailConfig;

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;
const MESSAGE_MIN: usize = 10;
const MESSAGE_MAX: usize = 1000;

/// Contact submission outcomes
#[derive(Debug, Error)]
pub enum ContactError {
    /// Relay identifiers were absent from the environment
    #[error("The contact form is not configured")]
    NotConfigured,

    /// Form input failed validation
    #[error("{0}")]
    Invalid(String),

    /// The relay call itself failed
    #[error("An error occurred while sending your message. Please try again.")]
    Relay(#[source] anyhow::Error),
}

/// A contact form submission
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Validate form input before sending
    pub fn validate(&self) -> Result<(), ContactError> {
        let name_len = self.name.trim().chars().count();
        if name_len < NAME_MIN {
            return Err(ContactError::Invalid(
                "Name must be at least 2 characters".to_string(),
            ));
        }
        if name_len > NAME_MAX {
            return Err(ContactError::Invalid(
                "Name must be at most 50 characters".to_string(),
            ));
        }

        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::Invalid(
                "Please enter a valid email address".to_string(),
            ));
        }

        let message_len = self.message.trim().chars().count();
        if message_len < MESSAGE_MIN {
            return Err(ContactError::Invalid(
                "Message must be at least 10 characters".to_string(),
            ));
        }
        if message_len > MESSAGE_MAX {
            return Err(ContactError::Invalid(
                "Message must be at most 1000 characters".to_string(),
            ));
        }

        Ok(())
    }
}

/// Structural check only, no RFC parsing
fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !s.contains(char::is_whitespace)
}

/// Request body for the EmailJS send endpoint
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Template variables referenced by the EmailJS template
#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
}

/// Sends contact messages through EmailJS
pub struct EmailRelay {
    config: EmailConfig,
    client: reqwest::Client,
    endpoint: String,
}

impl EmailRelay {
    /// Create a relay with the given identifiers
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            endpoint: EMAILJS_SEND_URL.to_string(),
        }
    }

    /// Override the send endpoint, used by tests
    #[cfg(test)]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Validate and send a contact message. Awaited once; a rejection comes
    /// back as a `ContactError` carrying a user-facing message.
    pub async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        message.validate()?;

        let payload = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.user_id,
            template_params: TemplateParams {
                from_name: &message.name,
                from_email: &message.email,
                message: &message.message,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ContactError::Relay(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Email relay rejected the message: {} {}", status, body);
            return Err(ContactError::Relay(anyhow::anyhow!(
                "relay returned {}",
                status
            )));
        }

        tracing::info!("Contact message relayed for {}", message.email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_message() -> ContactMessage {
        ContactMessage {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "I would like to discuss a project with you.".to_string(),
        }
    }

    #[test]
    fn test_valid_message_passes() {
        assert!(valid_message().validate().is_ok());
    }

    #[test]
    fn test_short_name_rejected() {
        let mut msg = valid_message();
        msg.name = "J".to_string();
        let err = msg.validate().unwrap_err();
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_long_message_rejected() {
        let mut msg = valid_message();
        msg.message = "x".repeat(1001);
        assert!(msg.validate().is_err());
    }

    #[test]
    fn test_short_message_rejected() {
        let mut msg = valid_message();
        msg.message = "too short".to_string();
        assert!(msg.validate().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        for email in ["", "plain", "@nodomain.com", "user@", "user@nodot", "a b@c.com"] {
            let mut msg = valid_message();
            msg.email = email.to_string();
            assert!(msg.validate().is_err(), "accepted {:?}", email);
        }
    }

    #[test]
    fn test_payload_shape() {
        let payload = SendRequest {
            service_id: "service_abc",
            template_id: "template_xyz",
            user_id: "user_123",
            template_params: TemplateParams {
                from_name: "Jane",
                from_email: "jane@example.com",
                message: "Hello there, nice site.",
            },
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["service_id"], "service_abc");
        assert_eq!(value["template_params"]["from_name"], "Jane");
        assert_eq!(value["template_params"]["from_email"], "jane@example.com");
    }

    #[tokio::test]
    async fn test_send_rejects_invalid_before_network() {
        let relay = EmailRelay::new(EmailConfig {
            service_id: "s".to_string(),
            template_id: "t".to_string(),
            user_id: "u".to_string(),
        })
        .with_endpoint("http://127.0.0.1:1/unreachable");

        let mut msg = valid_message();
        msg.email = "not-an-email".to_string();
        let err = relay.send(&msg).await.unwrap_err();
        assert!(matches!(err, ContactError::Invalid(_)));
    }
}
