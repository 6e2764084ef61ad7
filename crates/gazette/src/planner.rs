//! The route planner: turns one content inventory into the full set of
//! routes the site must emit.
use std::time::Instant;

use colored::Colorize;
use log::info;

use crate::config::SiteOptions;
use crate::content::ContentSet;
use crate::errors::PlanError;
use crate::logging::{FormatElapsedTimeOptions, format_elapsed_time, print_title};
use crate::registry::RouteRegistry;
use crate::route::{RouteContext, Template, paginate};

/// Registers every route for the given content: tag listings, author
/// listings, standalone pages, posts, then the paginated global index.
///
/// Registration order follows source collection order. Paths are unique, so
/// order does not affect correctness, but it is preserved for deterministic
/// build logs and output.
pub fn plan_routes(
    content: &ContentSet,
    options: &SiteOptions,
    registry: &mut RouteRegistry,
) -> Result<(), PlanError> {
    let start = Instant::now();
    print_title("planning routes");

    for tag in &content.tags {
        taxonomy_routes(
            registry,
            "tag",
            &tag.slug,
            tag.post_count,
            Template::Tag,
            options.posts_per_page,
        )?;
    }

    for author in &content.authors {
        taxonomy_routes(
            registry,
            "author",
            &author.slug,
            author.post_count,
            Template::Author,
            options.posts_per_page,
        )?;
    }

    for page in &content.pages {
        singular_route(registry, &page.slug, Template::Page)?;
    }

    for post in &content.posts {
        singular_route(registry, &post.slug, Template::Post)?;
    }

    // The global index spans every post, with its first page at the site root.
    paginate(
        registry,
        &content.posts,
        options.posts_per_page,
        Template::Index,
        |page| {
            if page == 0 {
                "/".to_string()
            } else {
                "/page".to_string()
            }
        },
        &RouteContext::default(),
    )?;

    info!(target: "plan", "{}", format!(
        "planned {} routes in {}",
        registry.len(),
        format_elapsed_time(start.elapsed(), &FormatElapsedTimeOptions::default())
    ).bold());

    Ok(())
}

/// Listing pages for one taxonomy node (a tag or an author).
///
/// Only the post count drives the page arithmetic; the rendering pipeline
/// slices the actual posts out of the context's limit/skip values. A missing
/// count counts as zero, which still yields the node's canonical page.
fn taxonomy_routes(
    registry: &mut RouteRegistry,
    segment: &str,
    slug: &str,
    post_count: Option<u64>,
    template: Template,
    per_page: usize,
) -> Result<(), PlanError> {
    let total_posts = post_count.unwrap_or(0) as usize;
    let base_url = format!("/{}/{}", segment, slug);

    let items = vec![(); total_posts];

    let mut context = RouteContext::default();
    context.insert("slug".to_string(), slug.to_string());

    paginate(
        registry,
        &items,
        per_page,
        template,
        |page| {
            if page == 0 {
                base_url.clone()
            } else {
                format!("{}/page", base_url)
            }
        },
        &context,
    )
}

/// One route per post or standalone page, at `/{slug}/`.
fn singular_route(
    registry: &mut RouteRegistry,
    slug: &str,
    template: Template,
) -> Result<(), PlanError> {
    let mut context = RouteContext::default();
    context.insert("slug".to_string(), slug.to_string());

    registry.register(format!("/{}/", slug), template, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Author, PageDoc, Post, Tag};

    fn post(slug: &str) -> Post {
        Post {
            slug: slug.to_string(),
        }
    }

    fn page(slug: &str) -> PageDoc {
        PageDoc {
            slug: slug.to_string(),
            url: None,
        }
    }

    fn tag(slug: &str, post_count: Option<u64>) -> Tag {
        Tag {
            slug: slug.to_string(),
            url: None,
            post_count,
        }
    }

    fn author(slug: &str, post_count: Option<u64>) -> Author {
        Author {
            slug: slug.to_string(),
            url: None,
            post_count,
        }
    }

    fn options(posts_per_page: usize) -> SiteOptions {
        SiteOptions {
            posts_per_page,
            ..Default::default()
        }
    }

    fn planned_paths(content: &ContentSet, posts_per_page: usize) -> Vec<String> {
        let mut registry = RouteRegistry::new();
        plan_routes(content, &options(posts_per_page), &mut registry).unwrap();
        registry
            .routes()
            .iter()
            .map(|route| route.path.clone())
            .collect()
    }

    #[test]
    fn test_plan_end_to_end() {
        let content = ContentSet {
            posts: vec![post("one"), post("two"), post("three")],
            tags: vec![tag("news", Some(25))],
            authors: vec![],
            pages: vec![],
        };

        let paths = planned_paths(&content, 10);
        assert_eq!(
            paths,
            [
                "/tag/news",
                "/tag/news/page/2",
                "/tag/news/page/3",
                "/one/",
                "/two/",
                "/three/",
                "/",
            ]
        );
    }

    #[test]
    fn test_registration_order() {
        let content = ContentSet {
            posts: vec![post("hello-world")],
            tags: vec![tag("news", Some(1))],
            authors: vec![author("ada", Some(1))],
            pages: vec![page("about")],
        };

        let paths = planned_paths(&content, 10);
        assert_eq!(
            paths,
            ["/tag/news", "/author/ada", "/about/", "/hello-world/", "/"]
        );
    }

    #[test]
    fn test_missing_post_count_matches_zero() {
        let with_none = ContentSet {
            tags: vec![tag("news", None)],
            ..Default::default()
        };
        let with_zero = ContentSet {
            tags: vec![tag("news", Some(0))],
            ..Default::default()
        };

        assert_eq!(planned_paths(&with_none, 10), planned_paths(&with_zero, 10));
    }

    #[test]
    fn test_empty_taxonomy_keeps_canonical_page() {
        let content = ContentSet {
            tags: vec![tag("drafts", Some(0))],
            ..Default::default()
        };

        let paths = planned_paths(&content, 10);
        // One page for the tag itself, one for the empty global index.
        assert_eq!(paths, ["/tag/drafts", "/"]);
        assert!(!paths[0].contains("/page/"));
    }

    #[test]
    fn test_taxonomy_route_counts() {
        for (count, expected_pages) in [(0, 1), (1, 1), (10, 1), (11, 2), (25, 3)] {
            let mut registry = RouteRegistry::new();
            taxonomy_routes(
                &mut registry,
                "tag",
                "news",
                Some(count),
                Template::Tag,
                10,
            )
            .unwrap();

            assert_eq!(registry.len(), expected_pages, "post count {}", count);
        }
    }

    #[test]
    fn test_singular_routes_carry_slug_context() {
        let content = ContentSet {
            posts: vec![post("hello-world")],
            pages: vec![page("about")],
            ..Default::default()
        };

        let mut registry = RouteRegistry::new();
        plan_routes(&content, &options(10), &mut registry).unwrap();

        let about = registry
            .routes()
            .iter()
            .find(|route| route.path == "/about/")
            .unwrap();
        assert_eq!(about.template, Template::Page);
        assert_eq!(about.context["slug"], "about");

        let hello = registry
            .routes()
            .iter()
            .find(|route| route.path == "/hello-world/")
            .unwrap();
        assert_eq!(hello.template, Template::Post);
        assert_eq!(hello.context["slug"], "hello-world");
    }

    #[test]
    fn test_taxonomy_pages_carry_slug_context() {
        let content = ContentSet {
            tags: vec![tag("news", Some(25))],
            ..Default::default()
        };

        let mut registry = RouteRegistry::new();
        plan_routes(&content, &options(10), &mut registry).unwrap();

        for route in registry
            .routes()
            .iter()
            .filter(|route| route.template == Template::Tag)
        {
            assert_eq!(route.context["slug"], "news");
        }
    }

    #[test]
    fn test_index_is_paginated_from_the_root() {
        let content = ContentSet {
            posts: (0..25).map(|n| post(&format!("post-{}", n))).collect(),
            ..Default::default()
        };

        let paths = planned_paths(&content, 10);
        let index_paths = &paths[paths.len() - 3..];
        assert_eq!(index_paths, ["/", "/page/2", "/page/3"]);
    }

    #[test]
    fn test_conflicting_slugs_fail_the_plan() {
        // A post and a page sharing a slug would emit the same path.
        let content = ContentSet {
            posts: vec![post("about")],
            pages: vec![page("about")],
            ..Default::default()
        };

        let mut registry = RouteRegistry::new();
        let err = plan_routes(&content, &options(10), &mut registry).unwrap_err();

        match err {
            PlanError::DuplicateRoute { path } => assert_eq!(path, "/about/"),
        }
    }
}
