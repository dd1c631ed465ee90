//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub url: String,

    // Social
    #[serde(default)]
    pub links: SocialLinks,
    #[serde(default)]
    pub contact: ContactInfo,

    // Directory
    pub content_dir: String,
    pub blog_dir: String,
    pub projects_dir: String,

    // Home page
    pub featured_count: usize,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            url: "http://example.com".to_string(),

            links: SocialLinks::default(),
            contact: ContactInfo::default(),

            content_dir: "content".to_string(),
            blog_dir: "blog".to_string(),
            projects_dir: "projects".to_string(),

            featured_count: 3,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Social profile links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
}

/// Contact details shown alongside the form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Portfolio");
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.featured_count, 3);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Hadi Vahidi
author: Hadi Vahidi
url: https://hadivahidi.com
featured_count: 4
links:
  github: https://github.com/hadivahidi
contact:
  email: hi@hadivahidi.com
  location: London, United Kingdom
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Hadi Vahidi");
        assert_eq!(config.featured_count, 4);
        assert_eq!(
            config.links.github.as_deref(),
            Some("https://github.com/hadivahidi")
        );
        assert_eq!(config.contact.email.as_deref(), Some("hi@hadivahidi.com"));
        // Unset fields keep their defaults
        assert_eq!(config.blog_dir, "blog");
    }
}
