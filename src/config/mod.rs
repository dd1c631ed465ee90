//! Configuration - site settings and email relay identifiers

mod email;
mod site;

pub use email::EmailConfig;
pub use site::{ContactInfo, SiteConfig, SocialLinks};
