//! Post files: the content provider behind the `render` and `build` commands.
//!
//! A post is a TOML file with share metadata and a markdown body:
//!
//! ```toml
//! permalink = "https://example.com/2024/first-light"
//! title = "First Light"
//! excerpt = "Optional summary."          # derived from the body when absent
//! image = "https://example.com/dawn.jpg" # optional
//! body = """
//! Morning over the **ridge**.
//! """
//! ```
//!
//! Every post renders independently of the others, so a directory of posts is
//! rendered in parallel with [rayon](https://docs.rs/rayon). The config is
//! shared read-only between workers.

use crate::compose;
use crate::config::ShareConfig;
use crate::order;
use crate::render;
use crate::text;
use crate::types::ContentMetadata;
use pulldown_cmark::{Parser, html as md_html};
use rayon::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum PostError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error in {}: {}", .path.display(), .source)]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

#[derive(Debug, Deserialize)]
struct PostFile {
    permalink: String,
    title: String,
    excerpt: Option<String>,
    image: Option<String>,
    #[serde(default)]
    body: String,
}

/// A loaded post with its body already rendered to HTML.
#[derive(Debug, Clone)]
pub struct Post {
    /// File stem, used as the output file name.
    pub slug: String,
    pub meta: ContentMetadata,
    pub body_html: String,
}

/// A post body with the share bar placed.
#[derive(Debug, Clone)]
pub struct RenderedPost {
    pub slug: String,
    pub html: String,
    /// Number of share buttons in one copy of the bar.
    pub button_count: usize,
}

pub fn markdown_to_html(markdown: &str) -> String {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(markdown));
    out
}

/// Load one post file. The slug is its file stem.
pub fn load_post(path: &Path) -> Result<Post, PostError> {
    let slug = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    read_post(path, slug)
}

fn read_post(path: &Path, slug: String) -> Result<Post, PostError> {
    let content = fs::read_to_string(path)?;
    let file: PostFile = toml::from_str(&content).map_err(|source| PostError::Toml {
        path: path.to_path_buf(),
        source,
    })?;

    let body_html = markdown_to_html(&file.body);
    let excerpt = text::derive_excerpt(file.excerpt.as_deref(), &body_html);

    Ok(Post {
        slug,
        meta: ContentMetadata {
            permalink: file.permalink,
            title: file.title,
            excerpt,
            image_url: file.image.unwrap_or_default(),
        },
        body_html,
    })
}

/// `2024/harbour.toml` under `root` is `2024/harbour`.
fn relative_slug(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path).with_extension("");
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Load every `*.toml` file under `dir`, sorted by path.
///
/// Slugs are paths relative to `dir` without the extension, so posts with
/// the same file name in different directories stay distinct.
pub fn load_posts(dir: &Path) -> Result<Vec<Post>, PostError> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
        {
            paths.push(path.to_path_buf());
        }
    }
    paths.sort();
    paths
        .iter()
        .map(|p| read_post(p, relative_slug(dir, p)))
        .collect()
}

pub fn render_post(post: &Post, config: &ShareConfig) -> RenderedPost {
    let channels = order::resolve(config);
    let targets = compose::compose_all(&channels, config, &post.meta);
    let button_count = targets.len();
    let bar = render::render(&channels, &targets, config.icon_size).into_string();
    if button_count == 0 {
        tracing::debug!(slug = %post.slug, "no share buttons rendered");
    }
    RenderedPost {
        slug: post.slug.clone(),
        html: render::place(&post.body_html, &bar, config.placement),
        button_count,
    }
}

/// Render all posts in parallel, preserving input order.
pub fn render_posts(posts: &[Post], config: &ShareConfig) -> Vec<RenderedPost> {
    posts.par_iter().map(|post| render_post(post, config)).collect()
}

/// Write each rendered post to `output_dir/<slug>.html`, creating the
/// subdirectories a nested slug names.
pub fn write_rendered(output_dir: &Path, rendered: &[RenderedPost]) -> Result<(), PostError> {
    fs::create_dir_all(output_dir)?;
    for post in rendered {
        let path = output_dir.join(format!("{}.html", post.slug));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &post.html)?;
        tracing::info!("Wrote {}", path.display());
    }
    Ok(())
}
