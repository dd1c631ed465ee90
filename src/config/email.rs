//! EmailJS relay identifiers from the process environment

use serde::Serialize;

const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
const USER_ID_VAR: &str = "EMAILJS_USER_ID";

/// Identifiers for the EmailJS account, injected into the relay client
/// instead of being read from ambient globals at send time.
#[derive(Debug, Clone, Serialize)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
}

impl EmailConfig {
    /// Build from the process environment. Returns `None` when any of the
    /// three identifiers is missing or empty; the contact form then degrades
    /// to non-functional rather than failing startup.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary lookup function
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Some(Self {
            service_id: get(SERVICE_ID_VAR)?,
            template_id: get(TEMPLATE_ID_VAR)?,
            user_id: get(USER_ID_VAR)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup_complete() {
        let vars: HashMap<&str, &str> = [
            (SERVICE_ID_VAR, "service_abc"),
            (TEMPLATE_ID_VAR, "template_xyz"),
            (USER_ID_VAR, "user_123"),
        ]
        .into_iter()
        .collect();

        let config = EmailConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.service_id, "service_abc");
        assert_eq!(config.template_id, "template_xyz");
        assert_eq!(config.user_id, "user_123");
    }

    #[test]
    fn test_from_lookup_missing_var() {
        let vars: HashMap<&str, &str> =
            [(SERVICE_ID_VAR, "service_abc")].into_iter().collect();

        let config = EmailConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert!(config.is_none());
    }

    #[test]
    fn test_from_lookup_empty_value() {
        let vars: HashMap<&str, &str> = [
            (SERVICE_ID_VAR, "service_abc"),
            (TEMPLATE_ID_VAR, ""),
            (USER_ID_VAR, "user_123"),
        ]
        .into_iter()
        .collect();

        let config = EmailConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert!(config.is_none());
    }
}
