//! Live progress along an active route.

use serde::{Deserialize, Serialize};

use super::{Route, RouteStep};

/// A snapshot of how far the traveler has advanced along a route.
///
/// Snapshots reference the full route so consumers can frame the remainder of
/// the path without a separate route lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteProgress {
    /// The route being followed.
    pub route: Route,
    /// Distance remaining on the active step, in meters.
    pub step_distance_remaining: f64,
    /// Index of the active leg.
    pub leg_index: usize,
    /// Index of the active step within the active leg.
    pub step_index: usize,
}

impl RouteProgress {
    /// Create a progress snapshot positioned at the start of the route.
    pub fn new(route: Route, step_distance_remaining: f64) -> Self {
        Self {
            route,
            step_distance_remaining,
            leg_index: 0,
            step_index: 0,
        }
    }

    /// The active step, if the indices point at one.
    pub fn current_step(&self) -> Option<&RouteStep> {
        self.route.legs.get(self.leg_index)?.steps.get(self.step_index)
    }
}
