//! Blog posts: Markdown files with a `---` front matter block.
//!
//! ```text
//! ---
//! title: 'Hello, World'
//! publishedAt: '2024-04-09'
//! summary: 'First post.'
//! ---
//! Markdown body...
//! ```

use crate::{
    debug, log,
    utils::date::{display_date, parse_date},
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use jwalk::WalkDir;
use pulldown_cmark::{Options, Parser, html};
use regex::Regex;
use std::{
    collections::HashSet,
    fs,
    path::Path,
    sync::LazyLock,
};

/// Leading `---` block, up to the next `---` line.
static FRONT_MATTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|$)").unwrap());

/// Front matter fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostMeta {
    pub title: String,
    /// Raw `publishedAt` value as written.
    pub published_at: String,
    pub summary: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Post {
    pub slug: String,
    pub meta: PostMeta,
    /// Rendered body.
    pub content: String,
}

impl Post {
    /// Parse a post from its source text.
    ///
    /// Returns `None` when the front matter is missing or has no title.
    pub fn parse(slug: &str, source: &str) -> Option<Self> {
        let (meta, body) = split_front_matter(source)?;
        if meta.title.is_empty() {
            return None;
        }

        Some(Self {
            slug: slug.to_owned(),
            meta,
            content: render_markdown(body),
        })
    }

    /// Site-relative URL, e.g. `/blog/hello-world/`.
    pub fn permalink(&self) -> String {
        format!("/blog/{}/", self.slug)
    }

    pub fn published(&self) -> Option<NaiveDate> {
        parse_date(&self.meta.published_at)
    }

    /// `April 9, 2024`, or the raw value when it is not a date.
    pub fn display_date(&self) -> String {
        self.published()
            .map(display_date)
            .unwrap_or_else(|| self.meta.published_at.clone())
    }
}

/// Split source into front matter and body.
fn split_front_matter(source: &str) -> Option<(PostMeta, &str)> {
    let source = source.trim_start_matches('\u{feff}');
    let captures = FRONT_MATTER.captures(source)?;
    let block = captures.get(1)?.as_str();
    let body = &source[captures.get(0)?.end()..];

    let mut meta = PostMeta::default();
    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = strip_quotes(value.trim()).to_owned();
        match key.trim() {
            "title" => meta.title = value,
            "publishedAt" => meta.published_at = value,
            "summary" => meta.summary = Some(value).filter(|s| !s.is_empty()),
            _ => {}
        }
    }

    Some((meta, body))
}

/// Remove one pair of matching surrounding quotes.
fn strip_quotes(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Render a Markdown body to HTML.
pub fn render_markdown(body: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(body, options);
    let mut out = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Load every `*.md`/`*.mdx` post directly under `dir`, newest first.
///
/// Unreadable or title-less files are skipped with a warning, as are files
/// whose slug is already taken (`hello.mdx` after `hello.md`). A missing
/// directory yields no posts.
pub fn load_posts(dir: &Path) -> Result<Vec<Post>> {
    if !dir.is_dir() {
        debug!("posts"; "no posts directory at {}", dir.display());
        return Ok(Vec::new());
    }

    let mut posts = Vec::new();
    let mut slugs = HashSet::new();
    for entry in WalkDir::new(dir).max_depth(1).sort(true) {
        let entry = entry.with_context(|| format!("failed to scan {}", dir.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_post_file(&path) {
            continue;
        }

        let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if slugs.contains(slug) {
            log!("warning"; "{}: slug `{}` already used, skipped", path.display(), slug);
            continue;
        }

        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(err) => {
                log!("warning"; "failed to read {}: {}", path.display(), err);
                continue;
            }
        };

        match Post::parse(slug, &source) {
            Some(post) => {
                slugs.insert(post.slug.clone());
                posts.push(post);
            }
            None => log!("warning"; "{}: missing front matter title, skipped", path.display()),
        }
    }

    sort_newest_first(&mut posts);
    Ok(posts)
}

fn is_post_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("md" | "mdx")
    )
}

/// Newest first; undated posts last, ties by slug.
fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.published()
            .cmp(&a.published())
            .then_with(|| a.slug.cmp(&b.slug))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &str = "---\ntitle: 'Hello, World'\npublishedAt: \"2024-04-09\"\nsummary: First post: intro\n---\n\n# Hi\n\nSome *text*.\n";

    #[test]
    fn test_parse_front_matter() {
        let post = Post::parse("hello", HELLO).unwrap();
        assert_eq!(post.meta.title, "Hello, World");
        assert_eq!(post.meta.published_at, "2024-04-09");
        assert_eq!(post.meta.summary.as_deref(), Some("First post: intro"));
        assert_eq!(post.permalink(), "/blog/hello/");
        assert_eq!(post.display_date(), "April 9, 2024");
    }

    #[test]
    fn test_body_rendered() {
        let post = Post::parse("hello", HELLO).unwrap();
        assert!(post.content.contains("<h1>Hi</h1>"));
        assert!(post.content.contains("<em>text</em>"));
        assert!(!post.content.contains("publishedAt"));
    }

    #[test]
    fn test_missing_front_matter_or_title() {
        assert!(Post::parse("a", "# no front matter").is_none());
        assert!(Post::parse("b", "---\npublishedAt: 2024-01-01\n---\nbody").is_none());
    }

    #[test]
    fn test_crlf_front_matter() {
        let post = Post::parse("win", "---\r\ntitle: Windows\r\n---\r\nbody\r\n").unwrap();
        assert_eq!(post.meta.title, "Windows");
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("'a'"), "a");
        assert_eq!(strip_quotes("\"a\""), "a");
        assert_eq!(strip_quotes("'a\""), "'a\"");
        assert_eq!(strip_quotes("it's"), "it's");
    }

    #[test]
    fn test_load_posts_sorted_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let write = |name: &str, title: &str, date: &str| {
            fs::write(
                dir.path().join(name),
                format!("---\ntitle: {title}\npublishedAt: {date}\n---\nbody"),
            )
            .unwrap();
        };
        write("old.md", "Old", "2023-01-05");
        write("new.mdx", "New", "2024-06-01");
        write("mid.md", "Mid", "2024-02-10");
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::write(dir.path().join("broken.md"), "no front matter").unwrap();

        let posts = load_posts(dir.path()).unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["new", "mid", "old"]);
    }

    #[test]
    fn test_load_posts_skips_duplicate_slug() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hello.md"), "---\ntitle: Markdown\n---\nbody").unwrap();
        fs::write(dir.path().join("hello.mdx"), "---\ntitle: Mdx\n---\nbody").unwrap();

        let posts = load_posts(dir.path()).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].meta.title, "Markdown");
    }

    #[test]
    fn test_load_posts_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let posts = load_posts(&dir.path().join("posts")).unwrap();
        assert!(posts.is_empty());
    }
}
