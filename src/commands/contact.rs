//! Send a contact message through the email relay

use anyhow::Result;

use crate::config::EmailConfig;
use crate::contact::{ContactError, ContactMessage, EmailRelay};

/// Validate and relay a contact message. Missing relay configuration or a
/// rejected call surfaces as a printed message, never a panic.
pub async fn run(name: &str, email: &str, message: &str) -> Result<()> {
    let message = ContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    };

    let Some(config) = EmailConfig::from_env() else {
        anyhow::bail!("{}", ContactError::NotConfigured);
    };

    let relay = EmailRelay::new(config);
    match relay.send(&message).await {
        Ok(()) => {
            println!("Message sent. Thank you for reaching out!");
            Ok(())
        }
        Err(e) => anyhow::bail!("{}", e),
    }
}
