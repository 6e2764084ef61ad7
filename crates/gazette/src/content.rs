//! The content data model: nodes returned by the content query.
//!
//! All of this is read-only input, decoded straight off the wire. Ordering is
//! owned by the query itself (posts and pages ascending by publication time,
//! tags and authors ascending by name), so the planner relies on collection
//! order as-is and never re-sorts.
use serde::Deserialize;

/// A blog post. Each post gets exactly one route.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub slug: String,
}

/// A standalone page (about, contact, ...). Each page gets exactly one route.
#[derive(Debug, Clone, Deserialize)]
pub struct PageDoc {
    pub slug: String,
    /// Canonical URL as known by the CMS. Informational; routes derive their
    /// own path from the slug.
    #[serde(default)]
    pub url: Option<String>,
}

/// A tag under which posts are grouped and listed.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub slug: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Number of posts carrying this tag. The content source may omit it, in
    /// which case it counts as zero.
    #[serde(default, rename = "postCount")]
    pub post_count: Option<u64>,
}

/// An author whose posts are grouped and listed, same shape as [`Tag`].
#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub slug: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "postCount")]
    pub post_count: Option<u64>,
}

/// One content query's worth of inventory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentSet {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub pages: Vec<PageDoc>,
}
