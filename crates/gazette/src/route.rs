//! Core structs to describe the pages of the site.
//!
//! The planner produces [`RouteDescriptor`]s and hands them to the
//! [`RouteRegistry`](crate::registry::RouteRegistry); the rendering pipeline
//! downstream consumes them. Listing pages are generated through
//! [`paginate()`].
use rustc_hash::FxHashMap;

use crate::errors::PlanError;
use crate::registry::RouteRegistry;

/// Identifies which template a route is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Index,
    Tag,
    Author,
    Page,
    Post,
}

impl Template {
    /// Stable name, used in logs and in the planning output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Index => "index",
            Template::Tag => "tag",
            Template::Author => "author",
            Template::Page => "page",
            Template::Post => "post",
        }
    }
}

/// Values passed to the template when the route is rendered.
pub type RouteContext = FxHashMap<String, String>;

/// One page the site must emit.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDescriptor {
    pub path: String,
    pub template: Template,
    pub context: RouteContext,
}

/// Pagination state of one listing page out of a sequence.
///
/// A sequence over zero items still holds one page, so every listing keeps a
/// canonical URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationPage {
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
    pub start_index: usize,
    pub end_index: usize,
}

impl PaginationPage {
    pub fn new(page: usize, per_page: usize, total_items: usize) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            total_items.div_ceil(per_page)
        };
        let start_index = (page * per_page).min(total_items);
        let end_index = ((page + 1) * per_page).min(total_items);

        Self {
            page,
            per_page,
            total_items,
            total_pages,
            has_next: page + 1 < total_pages,
            has_prev: page > 0,
            start_index,
            end_index,
        }
    }
}

/// Registers one route per listing page over `items`.
///
/// Page numbering is 0-based internally and 1-based in URLs: the first page's
/// path is `path_prefix(0)` unchanged, page `k` lives at
/// `{path_prefix(k)}/{k + 1}`. Each page's context is the given base context
/// plus the page's pagination metadata. `per_page` must be at least 1.
///
/// ## Example
/// ```rust
/// use gazette::registry::RouteRegistry;
/// use gazette::route::{RouteContext, Template, paginate};
///
/// let mut registry = RouteRegistry::new();
/// let posts = vec!["first", "second", "third"];
/// paginate(
///     &mut registry,
///     &posts,
///     2,
///     Template::Index,
///     |page| if page == 0 { "/".to_string() } else { "/page".to_string() },
///     &RouteContext::default(),
/// )
/// .unwrap();
///
/// let paths: Vec<_> = registry.routes().iter().map(|r| r.path.as_str()).collect();
/// assert_eq!(paths, ["/", "/page/2"]);
/// ```
pub fn paginate<T>(
    registry: &mut RouteRegistry,
    items: &[T],
    per_page: usize,
    template: Template,
    path_prefix: impl Fn(usize) -> String,
    context: &RouteContext,
) -> Result<(), PlanError> {
    debug_assert!(per_page > 0, "per_page must be at least 1");

    let total_items = items.len();
    let total_pages = if total_items == 0 {
        1
    } else {
        total_items.div_ceil(per_page)
    };

    for page in 0..total_pages {
        let state = PaginationPage::new(page, per_page, total_items);
        let path = page_path(&path_prefix(page), page);

        let mut page_context = context.clone();
        merge_pagination_context(&mut page_context, &state, &path_prefix);

        registry.register(path, template, page_context)?;
    }

    Ok(())
}

fn page_path(prefix: &str, page: usize) -> String {
    if page == 0 {
        prefix.to_string()
    } else {
        format!("{}/{}", prefix, page + 1)
    }
}

fn merge_pagination_context(
    context: &mut RouteContext,
    state: &PaginationPage,
    path_prefix: &impl Fn(usize) -> String,
) {
    context.insert("page_number".to_string(), state.page.to_string());
    context.insert(
        "human_page_number".to_string(),
        (state.page + 1).to_string(),
    );
    context.insert("total_pages".to_string(), state.total_pages.to_string());
    context.insert("limit".to_string(), state.per_page.to_string());
    context.insert("skip".to_string(), state.start_index.to_string());

    // Neighbor paths at the edges of the sequence are empty strings, not
    // absent keys.
    let previous = if state.has_prev {
        page_path(&path_prefix(state.page - 1), state.page - 1)
    } else {
        String::new()
    };
    let next = if state.has_next {
        page_path(&path_prefix(state.page + 1), state.page + 1)
    } else {
        String::new()
    };
    context.insert("previous_page_path".to_string(), previous);
    context.insert("next_page_path".to_string(), next);
}
