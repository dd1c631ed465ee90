//! Blog post and project models

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::filter::Searchable;

/// Blog post metadata (body excluded), as shown on listing pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostMeta {
    /// URL-safe identifier, the source filename minus its extension
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Short summary shown on cards
    pub excerpt: String,

    /// Cover image path or URL
    pub cover_image: String,

    /// Estimated reading time, e.g. "5 min read"
    pub reading_time: String,

    /// Post tags
    pub tags: Vec<String>,
}

/// A full blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub meta: BlogPostMeta,

    /// Raw markup body, rendering happens downstream
    pub body: String,
}

/// Project metadata (body excluded)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMeta {
    /// URL-safe identifier, the source filename minus its extension
    pub slug: String,

    /// Project title
    pub title: String,

    /// Short summary shown on cards
    pub description: String,

    /// Cover image path or URL
    pub cover_image: String,

    /// Project tags
    pub tags: Vec<String>,

    /// Author's role on the project
    pub role: String,

    /// Technologies used
    pub tech_stack: Vec<String>,

    /// Source repository link
    pub github_link: Option<String>,

    /// Live demo link
    pub demo_link: Option<String>,

    /// Promoted on the home page
    pub featured: bool,
}

/// A full project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMeta,

    /// Raw markup body, rendering happens downstream
    pub body: String,
}

impl Searchable for BlogPostMeta {
    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.excerpt
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Searchable for ProjectMeta {
    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}
