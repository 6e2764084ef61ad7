use std::{process::Termination, time::Instant};

use crate::route::RouteDescriptor;

/// Metadata returned by [`plan()`](crate::plan) after a successful run.
#[derive(Debug)]
pub struct PlanOutput {
    pub start_time: Instant,
    /// Every planned route, in registration order.
    pub routes: Vec<RouteDescriptor>,
}

impl PlanOutput {
    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            routes: Vec::new(),
        }
    }
}

impl Default for PlanOutput {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl Termination for PlanOutput {
    fn report(self) -> std::process::ExitCode {
        0.into()
    }
}
