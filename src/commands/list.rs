//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::filter::{distinct_tags, Criteria};
use crate::Folio;

/// List site content by type, optionally narrowed by tag and search query
pub fn run(folio: &Folio, content_type: &str, tag: Option<&str>, query: Option<&str>) -> Result<()> {
    let loader = ContentLoader::new(folio);
    let criteria = Criteria {
        tag: tag.map(|t| t.to_string()),
        query: query.unwrap_or_default().to_string(),
    };

    match content_type {
        "post" | "posts" => {
            let posts = criteria.apply(&loader.load_posts()?);
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} ({}) [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.reading_time,
                    post.tags.join(", ")
                );
            }
        }
        "project" | "projects" => {
            let projects = criteria.apply(&loader.load_projects()?);
            println!("Projects ({}):", projects.len());
            for project in projects {
                let marker = if project.featured { "*" } else { " " };
                println!(
                    " {} {} - {} [{}]",
                    marker,
                    project.title,
                    project.description,
                    project.tags.join(", ")
                );
            }
        }
        "tag" | "tags" => {
            let posts = loader.load_posts()?;
            let projects = loader.load_projects()?;
            println!("Post tags: {}", distinct_tags(&posts).join(", "));
            println!("Project tags: {}", distinct_tags(&projects).join(", "));
        }
        "featured" => {
            let featured = loader.featured_projects(folio.config.featured_count)?;
            println!("Featured projects ({}):", featured.len());
            for project in featured {
                println!("  {} - {}", project.title, project.description);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: posts, projects, tags, featured",
                content_type
            );
        }
    }

    Ok(())
}
