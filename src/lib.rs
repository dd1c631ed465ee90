//! folio-rs: a personal portfolio and blog content engine
//!
//! This crate loads blog posts and projects from front-matter content files,
//! filters them for display, and relays contact-form messages through EmailJS.

pub mod commands;
pub mod config;
pub mod contact;
pub mod content;
pub mod filter;
pub mod helpers;

use anyhow::Result;
use std::path::Path;

/// The main Folio application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory
    pub content_dir: std::path::PathBuf,
    /// Blog posts directory
    pub blog_dir: std::path::PathBuf,
    /// Projects directory
    pub projects_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let blog_dir = content_dir.join(&config.blog_dir);
        let projects_dir = content_dir.join(&config.projects_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            blog_dir,
            projects_dir,
        })
    }

    /// Load all blog post metadata, newest first
    pub fn posts(&self) -> Result<Vec<content::BlogPostMeta>> {
        content::loader::ContentLoader::new(self).load_posts()
    }

    /// Load all project metadata, featured first
    pub fn projects(&self) -> Result<Vec<content::ProjectMeta>> {
        content::loader::ContentLoader::new(self).load_projects()
    }
}
