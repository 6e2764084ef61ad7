//! Async client for the content endpoint.
use serde::Deserialize;

use crate::config::SiteOptions;
use crate::content::ContentSet;
use crate::errors::ContentError;

/// The one query the planner issues per build. Sort orders are part of the
/// contract: the planner registers routes in collection order.
pub(crate) const CONTENT_QUERY: &str = "\
{
  posts(sort: PUBLISHED_AT_ASC) { slug }
  tags(sort: NAME_ASC) { slug url postCount }
  authors(sort: NAME_ASC) { slug url postCount }
  pages(sort: PUBLISHED_AT_ASC) { slug url }
}";

#[derive(Deserialize)]
struct QueryEnvelope {
    #[serde(default)]
    data: Option<ContentSet>,
    #[serde(default)]
    errors: Vec<QueryError>,
}

/// One error entry of a query response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryError {
    pub message: String,
}

/// Fetches the content inventory from the CMS GraphQL endpoint.
pub struct ContentClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ContentClient {
    pub fn new(options: &SiteOptions) -> Result<Self, ContentError> {
        let http_client = reqwest::Client::builder()
            .timeout(options.request_timeout)
            .build()
            .map_err(|source| ContentError::Request {
                endpoint: options.content_endpoint.clone(),
                source,
            })?;

        Ok(Self {
            http_client,
            endpoint: options.content_endpoint.clone(),
            api_key: options.content_api_key.clone(),
        })
    }

    /// Executes the content query and validates the result.
    ///
    /// A result carrying errors is a hard stop: no partial content, no retry.
    pub async fn fetch_content(&self) -> Result<ContentSet, ContentError> {
        let mut request = self
            .http_client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "query": CONTENT_QUERY }));

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|source| ContentError::Request {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(ContentError::Status {
                endpoint: self.endpoint.clone(),
                status: response.status(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ContentError::Request {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        decode_response(&body)
    }
}

pub(crate) fn decode_response(body: &str) -> Result<ContentSet, ContentError> {
    let envelope: QueryEnvelope =
        serde_json::from_str(body).map_err(|source| ContentError::Decode { source })?;

    // Errors win over data: a query that reports any error yields no routes,
    // even when a partial data object came along with it.
    if !envelope.errors.is_empty() {
        return Err(ContentError::QueryFailure {
            messages: envelope.errors.into_iter().map(|e| e.message).collect(),
        });
    }

    envelope.data.ok_or(ContentError::MissingData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_response() {
        let body = r#"{
            "data": {
                "posts": [{ "slug": "first" }, { "slug": "second" }],
                "tags": [
                    { "slug": "news", "url": "/tag/news/", "postCount": 25 },
                    { "slug": "drafts", "url": null, "postCount": null }
                ],
                "authors": [{ "slug": "ada", "url": null, "postCount": 2 }],
                "pages": [{ "slug": "about", "url": "/about/" }]
            }
        }"#;

        let content = decode_response(body).unwrap();

        let post_slugs: Vec<_> = content.posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(post_slugs, ["first", "second"]);
        assert_eq!(content.tags[0].post_count, Some(25));
        assert_eq!(content.tags[1].post_count, None);
        assert_eq!(content.authors.len(), 1);
        assert_eq!(content.pages[0].slug, "about");
    }

    #[test]
    fn test_decode_errors_are_fatal() {
        // Partial data next to errors still fails the whole query.
        let body = r#"{
            "data": { "posts": [{ "slug": "first" }] },
            "errors": [{ "message": "boom" }, { "message": "bad field" }]
        }"#;

        match decode_response(body) {
            Err(ContentError::QueryFailure { messages }) => {
                assert_eq!(messages, ["boom", "bad field"]);
            }
            other => panic!("expected a query failure, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_missing_data() {
        match decode_response("{}") {
            Err(ContentError::MissingData) => {}
            other => panic!("expected missing data, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_malformed_body() {
        match decode_response("not json") {
            Err(ContentError::Decode { .. }) => {}
            other => panic!("expected a decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_query_shape() {
        // The taxonomy collections must carry their post counts, and every
        // collection declares its sort order explicitly.
        assert_eq!(CONTENT_QUERY.matches("postCount").count(), 2);
        assert_eq!(CONTENT_QUERY.matches("PUBLISHED_AT_ASC").count(), 2);
        assert_eq!(CONTENT_QUERY.matches("NAME_ASC").count(), 2);
    }
}
