//! Scaffold a new content file

use anyhow::Result;
use std::fs;

use crate::Folio;

/// Create a new blog post or project file with front-matter
pub fn run(folio: &Folio, content_type: &str, title: &str) -> Result<()> {
    let now = chrono::Local::now();
    let file_slug = slug::slugify(title);

    let (target_dir, content) = match content_type {
        "post" | "posts" => (
            folio.blog_dir.clone(),
            format!(
                "---\ntitle: {}\ndate: {}\nexcerpt: \ncoverImage: \ntags: []\n---\n",
                title,
                now.format("%Y-%m-%d")
            ),
        ),
        "project" | "projects" => (
            folio.projects_dir.clone(),
            format!(
                "---\ntitle: {}\ndescription: \ncoverImage: \ntags: []\nrole: \ntechStack: []\nfeatured: false\n---\n",
                title
            ),
        ),
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, project", content_type);
        }
    };

    fs::create_dir_all(&target_dir)?;
    let file_path = target_dir.join(format!("{}.mdx", file_slug));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}
