//! Content loader - loads blog posts and projects from the content directory

use anyhow::Result;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{BlogPost, BlogPostMeta, FrontMatter, Project, ProjectMeta};
use crate::helpers::date::reading_time;
use crate::Folio;

/// Recognized content file extensions
const EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// Loads content from the blog and projects directories.
///
/// Records are constructed fresh on every call; nothing is cached across
/// reads and source files are never written.
pub struct ContentLoader<'a> {
    folio: &'a Folio,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Load metadata for all blog posts, sorted by date descending
    pub fn load_posts(&self) -> Result<Vec<BlogPostMeta>> {
        let mut posts = Vec::new();

        for path in content_files(&self.folio.blog_dir) {
            match self.load_post_meta(&path) {
                Ok(meta) => posts.push(meta),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        // Newest first
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(posts)
    }

    /// Load a single blog post by slug. Returns `None` when no source file
    /// matches; callers map this to a not-found page.
    pub fn post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>> {
        let Some(path) = resolve_slug(&self.folio.blog_dir, slug) else {
            return Ok(None);
        };

        let content = fs::read_to_string(&path)?;
        let (fm, body) = FrontMatter::parse(&content)?;
        let meta = self.post_meta_from(&path, &fm, body)?;

        Ok(Some(BlogPost {
            meta,
            body: body.to_string(),
        }))
    }

    /// Load metadata for all projects, featured first, filename order otherwise
    pub fn load_projects(&self) -> Result<Vec<ProjectMeta>> {
        let mut projects = Vec::new();

        for path in content_files(&self.folio.projects_dir) {
            match self.load_project_meta(&path) {
                Ok(meta) => projects.push(meta),
                Err(e) => {
                    tracing::warn!("Failed to load project {:?}: {}", path, e);
                }
            }
        }

        // Stable sort keeps filename order within each group
        projects.sort_by_key(|p| !p.featured);

        Ok(projects)
    }

    /// Load a single project by slug
    pub fn project_by_slug(&self, slug: &str) -> Result<Option<Project>> {
        let Some(path) = resolve_slug(&self.folio.projects_dir, slug) else {
            return Ok(None);
        };

        let content = fs::read_to_string(&path)?;
        let (fm, body) = FrontMatter::parse(&content)?;
        let meta = self.project_meta_from(&path, &fm);

        Ok(Some(Project {
            meta,
            body: body.to_string(),
        }))
    }

    /// Featured projects only, truncated to `count`, order preserved
    pub fn featured_projects(&self, count: usize) -> Result<Vec<ProjectMeta>> {
        let mut projects = self.load_projects()?;
        projects.retain(|p| p.featured);
        projects.truncate(count);
        Ok(projects)
    }

    fn load_post_meta(&self, path: &Path) -> Result<BlogPostMeta> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;
        self.post_meta_from(path, &fm, body)
    }

    fn post_meta_from(&self, path: &Path, fm: &FrontMatter, body: &str) -> Result<BlogPostMeta> {
        // Date falls back to the file's modification time
        let date = match fm.parse_date() {
            Some(d) => d,
            None => file_modified(path)?.unwrap_or_else(Local::now),
        };

        Ok(BlogPostMeta {
            slug: slug_of(path),
            title: fm.title.clone().unwrap_or_else(|| slug_of(path)),
            date,
            excerpt: fm.excerpt.clone().unwrap_or_default(),
            cover_image: fm.cover_image.clone().unwrap_or_default(),
            reading_time: fm
                .reading_time
                .clone()
                .unwrap_or_else(|| reading_time(body)),
            tags: fm.tags.clone(),
        })
    }

    fn load_project_meta(&self, path: &Path) -> Result<ProjectMeta> {
        let content = fs::read_to_string(path)?;
        let (fm, _) = FrontMatter::parse(&content)?;
        Ok(self.project_meta_from(path, &fm))
    }

    fn project_meta_from(&self, path: &Path, fm: &FrontMatter) -> ProjectMeta {
        ProjectMeta {
            slug: slug_of(path),
            title: fm.title.clone().unwrap_or_else(|| slug_of(path)),
            description: fm.description.clone().unwrap_or_default(),
            cover_image: fm.cover_image.clone().unwrap_or_default(),
            tags: fm.tags.clone(),
            role: fm.role.clone().unwrap_or_default(),
            tech_stack: fm.tech_stack.clone(),
            github_link: fm.github_link.clone(),
            demo_link: fm.demo_link.clone(),
            featured: fm.featured,
        }
    }
}

/// Enumerate content files in a collection directory, filename order.
/// A missing directory yields nothing; entries with other extensions are
/// silently excluded.
fn content_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file() && is_content_file(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect()
}

/// Resolve `slug + extension` to an existing file
fn resolve_slug(dir: &Path, slug: &str) -> Option<PathBuf> {
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", slug, ext)))
        .find(|p| p.is_file())
}

/// Check if a file has a recognized content extension
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

/// Slug is the filename minus its extension
fn slug_of(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string()
}

fn file_modified(path: &Path) -> Result<Option<DateTime<Local>>> {
    let metadata = fs::metadata(path)?;
    Ok(metadata.modified().ok().map(DateTime::<Local>::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Folio;
    use std::fs;
    use tempfile::TempDir;

    fn site_with_content(files: &[(&str, &str, &str)]) -> (TempDir, Folio) {
        let dir = TempDir::new().unwrap();
        for (collection, name, content) in files {
            let target = dir.path().join("content").join(collection);
            fs::create_dir_all(&target).unwrap();
            fs::write(target.join(name), content).unwrap();
        }
        let folio = Folio::new(dir.path()).unwrap();
        (dir, folio)
    }

    #[test]
    fn test_posts_sorted_by_date_descending() {
        let (_dir, folio) = site_with_content(&[
            (
                "blog",
                "a.mdx",
                "---\ntitle: Intro\ndate: 2024-01-01\ntags: [react]\n---\n\nHello.\n",
            ),
            (
                "blog",
                "b.mdx",
                "---\ntitle: Deep Dive\ndate: 2024-06-01\ntags: [react, ts]\n---\n\nMore.\n",
            ),
        ]);

        let posts = ContentLoader::new(&folio).load_posts().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "b");
        assert_eq!(posts[1].slug, "a");
        assert!(posts[0].date >= posts[1].date);
    }

    #[test]
    fn test_non_content_extensions_excluded() {
        let (_dir, folio) = site_with_content(&[
            ("blog", "post.mdx", "---\ntitle: Post\ndate: 2024-01-01\n---\n\nHi.\n"),
            ("blog", "notes.txt", "not content"),
            ("blog", ".DS_Store", "junk"),
        ]);

        let posts = ContentLoader::new(&folio).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "post");
    }

    #[test]
    fn test_missing_directory_is_empty_not_error() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let loader = ContentLoader::new(&folio);
        assert!(loader.load_posts().unwrap().is_empty());
        assert!(loader.load_projects().unwrap().is_empty());
    }

    #[test]
    fn test_post_by_slug_round_trip() {
        let (_dir, folio) = site_with_content(&[(
            "blog",
            "design-system.mdx",
            "---\ntitle: Building a Design System\ndate: 2024-03-10\nexcerpt: Component libraries\ncoverImage: /img/ds.png\nreadingTime: 8 min read\ntags:\n  - react\n  - design\n---\n\nThe body text.\n",
        )]);

        let post = ContentLoader::new(&folio)
            .post_by_slug("design-system")
            .unwrap()
            .unwrap();

        assert_eq!(post.meta.slug, "design-system");
        assert_eq!(post.meta.title, "Building a Design System");
        assert_eq!(post.meta.excerpt, "Component libraries");
        assert_eq!(post.meta.cover_image, "/img/ds.png");
        assert_eq!(post.meta.reading_time, "8 min read");
        assert_eq!(post.meta.tags, vec!["react", "design"]);
        assert_eq!(post.meta.date.format("%Y-%m-%d").to_string(), "2024-03-10");
        assert!(post.body.contains("The body text."));
    }

    #[test]
    fn test_post_by_slug_missing_returns_none() {
        let (_dir, folio) = site_with_content(&[(
            "blog",
            "a.mdx",
            "---\ntitle: A\ndate: 2024-01-01\n---\n\nHi.\n",
        )]);

        let post = ContentLoader::new(&folio).post_by_slug("missing").unwrap();
        assert!(post.is_none());
    }

    #[test]
    fn test_projects_featured_first_stable() {
        let (_dir, folio) = site_with_content(&[
            ("projects", "alpha.mdx", "---\ntitle: Alpha\n---\n\nA.\n"),
            (
                "projects",
                "beta.mdx",
                "---\ntitle: Beta\nfeatured: true\n---\n\nB.\n",
            ),
            ("projects", "gamma.mdx", "---\ntitle: Gamma\n---\n\nC.\n"),
            (
                "projects",
                "delta.mdx",
                "---\ntitle: Delta\nfeatured: true\n---\n\nD.\n",
            ),
        ]);

        let projects = ContentLoader::new(&folio).load_projects().unwrap();
        let slugs: Vec<_> = projects.iter().map(|p| p.slug.as_str()).collect();
        // Featured first, filename order within each group
        assert_eq!(slugs, vec!["beta", "delta", "alpha", "gamma"]);
    }

    #[test]
    fn test_featured_projects_truncates() {
        let (_dir, folio) = site_with_content(&[
            (
                "projects",
                "a.mdx",
                "---\ntitle: A\nfeatured: true\n---\n\nA.\n",
            ),
            (
                "projects",
                "b.mdx",
                "---\ntitle: B\nfeatured: true\n---\n\nB.\n",
            ),
            (
                "projects",
                "c.mdx",
                "---\ntitle: C\nfeatured: true\n---\n\nC.\n",
            ),
            ("projects", "d.mdx", "---\ntitle: D\n---\n\nD.\n"),
        ]);

        let featured = ContentLoader::new(&folio).featured_projects(2).unwrap();
        assert_eq!(featured.len(), 2);
        assert!(featured.iter().all(|p| p.featured));
        assert_eq!(featured[0].slug, "a");
        assert_eq!(featured[1].slug, "b");
    }

    #[test]
    fn test_project_fields_default_when_absent() {
        let (_dir, folio) = site_with_content(&[(
            "projects",
            "bare.mdx",
            "---\ntitle: Bare\n---\n\nBody.\n",
        )]);

        let project = ContentLoader::new(&folio)
            .project_by_slug("bare")
            .unwrap()
            .unwrap();
        assert!(project.meta.tags.is_empty());
        assert!(project.meta.tech_stack.is_empty());
        assert!(!project.meta.featured);
        assert!(project.meta.github_link.is_none());
    }

    #[test]
    fn test_reading_time_computed_when_absent() {
        let body = "word ".repeat(450);
        let content = format!("---\ntitle: Long\ndate: 2024-01-01\n---\n\n{}\n", body);
        let (_dir, folio) = site_with_content(&[("blog", "long.mdx", content.as_str())]);

        let posts = ContentLoader::new(&folio).load_posts().unwrap();
        assert_eq!(posts[0].reading_time, "3 min read");
    }
}
