//! Show a single content item by slug

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::helpers::date::full_date;
use crate::Folio;

/// Print a single post or project. An unknown slug maps to a not-found
/// message, the CLI equivalent of a 404 page.
pub fn run(folio: &Folio, content_type: &str, slug: &str) -> Result<()> {
    let loader = ContentLoader::new(folio);

    match content_type {
        "post" | "posts" => match loader.post_by_slug(slug)? {
            Some(post) => {
                println!("{}", post.meta.title);
                println!(
                    "{} | {} | tags: {}",
                    full_date(&post.meta.date),
                    post.meta.reading_time,
                    post.meta.tags.join(", ")
                );
                if !post.meta.excerpt.is_empty() {
                    println!("\n{}", post.meta.excerpt);
                }
                println!("\n{}", post.body);
            }
            None => anyhow::bail!("Post not found: {}", slug),
        },
        "project" | "projects" => match loader.project_by_slug(slug)? {
            Some(project) => {
                println!("{}", project.meta.title);
                if !project.meta.role.is_empty() {
                    println!("Role: {}", project.meta.role);
                }
                if !project.meta.tech_stack.is_empty() {
                    println!("Stack: {}", project.meta.tech_stack.join(", "));
                }
                if let Some(link) = &project.meta.github_link {
                    println!("Source: {}", link);
                }
                if let Some(link) = &project.meta.demo_link {
                    println!("Demo: {}", link);
                }
                println!("\n{}", project.meta.description);
                println!("\n{}", project.body);
            }
            None => anyhow::bail!("Project not found: {}", slug),
        },
        _ => {
            anyhow::bail!("Unknown type: {}. Available: posts, projects", content_type);
        }
    }

    Ok(())
}
