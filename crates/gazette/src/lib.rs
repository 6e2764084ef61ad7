//! Route planning for a CMS-backed static blog.
//!
//! Gazette queries the site's content inventory from a headless CMS exposed
//! through a GraphQL endpoint and produces the complete, ordered list of
//! routes the rendering pipeline must emit: one route per post and standalone
//! page, a paginated listing per tag and author, and the paginated global
//! index. It decides *which* pages exist and with what context; rendering,
//! bundling, and the CMS itself are external collaborators.
//!
//! A standalone piece, [`bundle::patch_css_minifier`], adjusts the CSS
//! minification entry of a bundler configuration for production builds. It
//! has no data dependency on the planner.
//!
//! ## Example
//! ```rs
//! use gazette::{GazetteError, PlanOutput, SiteOptions, plan};
//!
//! fn main() -> Result<PlanOutput, GazetteError> {
//!     plan(SiteOptions {
//!         content_endpoint: "https://cms.example.com/graphql".into(),
//!         ..Default::default()
//!     })
//! }
//! ```

// Modules the end-user will interact directly or indirectly with
pub mod bundle;
pub mod client;
pub mod config;
pub mod content;
pub mod errors;
pub mod registry;
pub mod route;

// Exports for end-users
pub use config::SiteOptions;
pub use errors::GazetteError;
pub use output::PlanOutput;
pub use planner::plan_routes;

// Internal modules
mod logging;
mod output;
mod planner;

use std::time::Instant;

use colored::Colorize;
use log::info;

use client::ContentClient;
use logging::{FormatElapsedTimeOptions, format_elapsed_time, init_logging, print_title};
use registry::RouteRegistry;

/// The version of Gazette being used.
///
/// Can be used to create a generator tag in the output HTML.
pub const GENERATOR: &str = concat!("Gazette v", env!("CARGO_PKG_VERSION"));

/// Gazette entrypoint. Fetches the content inventory and plans every route of
/// the site.
///
/// The content query is the only asynchronous step; planning itself runs
/// synchronously, once per build, to completion. A query failure aborts with
/// no routes planned.
///
/// ## Example
/// ```rs
/// use gazette::{GazetteError, PlanOutput, SiteOptions, plan};
///
/// fn main() -> Result<PlanOutput, GazetteError> {
///     plan(SiteOptions::default())
/// }
/// ```
pub fn plan(options: SiteOptions) -> Result<PlanOutput, GazetteError> {
    init_logging();

    let start_time = Instant::now();

    let async_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    print_title("querying content");
    let query_start = Instant::now();

    let client = ContentClient::new(&options)?;
    let content = async_runtime.block_on(client.fetch_content())?;

    info!(target: "content", "{}", format!(
        "{} posts, {} tags, {} authors, {} pages in {}",
        content.posts.len(),
        content.tags.len(),
        content.authors.len(),
        content.pages.len(),
        format_elapsed_time(query_start.elapsed(), &FormatElapsedTimeOptions::default())
    ).bold());

    let mut registry = RouteRegistry::new();
    plan_routes(&content, &options, &mut registry)?;

    Ok(PlanOutput {
        start_time,
        routes: registry.into_routes(),
    })
}
