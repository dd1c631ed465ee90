//! Content module - blog posts and projects loaded from front-matter files

mod frontmatter;
mod item;
pub mod loader;

pub use frontmatter::FrontMatter;
pub use item::{BlogPost, BlogPostMeta, Project, ProjectMeta};
