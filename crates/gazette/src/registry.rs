use colored::Colorize;
use log::info;
use rustc_hash::FxHashSet;

use crate::errors::PlanError;
use crate::route::{RouteContext, RouteDescriptor, Template};

/// Append-only table of every route the build must emit.
///
/// Paths are unique: registering the same path twice fails the whole build.
/// Registration order is preserved.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    routes: Vec<RouteDescriptor>,
    paths: FxHashSet<String>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        path: String,
        template: Template,
        context: RouteContext,
    ) -> Result<(), PlanError> {
        if !self.paths.insert(path.clone()) {
            return Err(PlanError::DuplicateRoute { path });
        }

        info!(target: "routes", "{} {}", path, format!("({})", template.as_str()).dimmed());

        self.routes.push(RouteDescriptor {
            path,
            template,
            context,
        });

        Ok(())
    }

    /// Registered routes, in registration order.
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub(crate) fn into_routes(self) -> Vec<RouteDescriptor> {
        self.routes
    }
}
