//! Landing page and blog listing.

use super::post::Post;
use crate::config::{BaseUrl, section::SiteInfoConfig};
use maud::{Markup, Render, html};

/// List of posts linking to their pages, newest first.
pub struct BlogPosts<'a> {
    pub posts: &'a [Post],
    pub base_url: &'a BaseUrl,
}

impl Render for BlogPosts<'_> {
    fn render(&self) -> Markup {
        html! {
            ul class="posts" {
                @for post in self.posts {
                    li {
                        a href=(self.base_url.href(&post.permalink())) {
                            time datetime=(post.meta.published_at) { (post.display_date()) }
                            span class="post-title" { (post.meta.title) }
                        }
                    }
                }
            }
        }
    }
}

/// `/` content: greeting, introduction, post list.
pub fn landing(info: &SiteInfoConfig, posts: &[Post], base_url: &BaseUrl) -> Markup {
    html! {
        section {
            h1 class="title" { "Welcome to " (info.title) " !" }
            p {
                @if !info.author.is_empty() {
                    "Hello, My name is " (info.author) ". "
                }
                "I hope that you will gain useful information or knowledge from this."
                br;
                br;
                "Enjoy " (info.title) "."
            }
            div class="listing" {
                (BlogPosts { posts, base_url })
            }
        }
    }
}

/// `/blog/` content.
pub fn blog_index(posts: &[Post], base_url: &BaseUrl) -> Markup {
    html! {
        section {
            h1 class="title" { "My Blog" }
            (BlogPosts { posts, base_url })
        }
    }
}

/// `/blog/<slug>/` content.
pub fn post_page(post: &Post) -> Markup {
    html! {
        section {
            h1 class="title" { (post.meta.title) }
            p class="post-date" {
                time datetime=(post.meta.published_at) { (post.display_date()) }
            }
            article class="prose" {
                (maud::PreEscaped(&post.content))
            }
        }
    }
}

/// `404.html` content.
pub fn not_found() -> Markup {
    html! {
        section {
            h1 class="title" { "404 - Page Not Found" }
            p { "The page you are looking for does not exist." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn posts() -> Vec<Post> {
        vec![
            Post::parse("b", "---\ntitle: Second\npublishedAt: 2024-02-01\n---\nbody").unwrap(),
            Post::parse("a", "---\ntitle: First\npublishedAt: 2024-01-01\n---\nbody").unwrap(),
        ]
    }

    fn base(raw: &str) -> BaseUrl {
        BaseUrl::parse(raw).unwrap()
    }

    #[test]
    fn test_landing_greeting() {
        let config = test_parse_config("");
        let html = landing(&config.site.info, &posts(), &base("https://example.com")).into_string();

        assert!(html.contains("Welcome to Test !"));
        assert!(html.contains("Enjoy Test."));
        assert!(!html.contains("My name is"));
    }

    #[test]
    fn test_listing_keeps_order() {
        let base_url = base("https://example.com");
        let html = BlogPosts {
            posts: &posts(),
            base_url: &base_url,
        }
        .render()
        .into_string();
        let second = html.find("/blog/b/").unwrap();
        let first = html.find("/blog/a/").unwrap();
        assert!(second < first);
        assert!(html.contains("February 1, 2024"));
    }

    #[test]
    fn test_listing_under_sub_path() {
        let html = blog_index(&posts(), &base("https://user.github.io/site")).into_string();
        assert!(html.contains(r#"<a href="/site/blog/b/">"#));
        assert!(!html.contains(r#"href="/blog/"#));
    }

    #[test]
    fn test_post_page_body_unescaped() {
        let post = Post::parse("p", "---\ntitle: A & B\n---\n**bold**").unwrap();
        let html = post_page(&post).into_string();
        assert!(html.contains("A &amp; B"));
        assert!(html.contains("<strong>bold</strong>"));
    }
}
