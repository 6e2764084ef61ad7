use std::time::Duration;

/// Options for a planning run. Should be passed to [`plan()`](crate::plan()).
///
/// ## Examples
/// Default values:
/// ```rust
/// use gazette::{SiteOptions, plan};
///
/// # fn demo() {
/// let output = plan(SiteOptions::default());
/// # }
/// ```
/// Custom values:
/// ```rust
/// use gazette::SiteOptions;
///
/// let options = SiteOptions {
///     content_endpoint: "https://cms.example.com/graphql".into(),
///     content_api_key: Some("0123456789abcdef".into()),
///     posts_per_page: 25,
///     ..Default::default()
/// };
/// ```
pub struct SiteOptions {
    /// URL of the GraphQL endpoint exposing the site's content.
    pub content_endpoint: String,

    /// API key sent as a bearer token with the content query, for endpoints
    /// that require one.
    pub content_api_key: Option<String>,

    /// How many posts each listing page holds. Drives the page count of the
    /// global index and of every tag and author listing. Must be at least 1.
    pub posts_per_page: usize,

    /// Timeout applied to the content query request.
    pub request_timeout: Duration,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            content_endpoint: "http://localhost:4000/graphql".into(),
            content_api_key: None,
            posts_per_page: 10,
            request_timeout: Duration::from_secs(60),
        }
    }
}
