//! Error types for gazette.
use std::fmt::{self, Debug, Formatter};
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are rendered with Debug, while thiserror
                    // formats through Display. Redirect Debug to Display.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

/// Failures of the content query. Every variant is fatal: a build never
/// retries a content fetch, it is re-run wholesale.
#[derive(Error)]
pub enum ContentError {
    /// The endpoint answered, but the query result carries errors. No routes
    /// are planned from a partial or malformed content source.
    #[error("content query failed: {}", .messages.join("; "))]
    QueryFailure { messages: Vec<String> },

    #[error("failed to reach content endpoint {endpoint}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("content endpoint {endpoint} returned {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode content query response")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("content query response carries no data")]
    MissingData,
}

#[derive(Error)]
pub enum PlanError {
    #[error("route `{path}` is registered more than once, every route must have a unique path")]
    DuplicateRoute { path: String },
}

#[derive(Error, Debug)]
pub enum GazetteError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl_debug_for_error!(ContentError, PlanError);
