//! Planned routes and live progress along them.
//!
//! A route's geometry is an ordered point sequence already decoded from the
//! provider's polyline encoding; decoding itself happens upstream and is out
//! of scope here.

mod progress;

pub use progress::RouteProgress;

use serde::{Deserialize, Serialize};

use crate::geo::Point;

/// A planned route between an origin and a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Total route distance in meters.
    pub distance: f64,
    /// Estimated travel time in seconds.
    pub duration: f64,
    /// Decoded route geometry, ordered origin to destination.
    ///
    /// Absent when the provider returned no overview geometry.
    pub geometry: Option<Vec<Point>>,
    /// Legs between consecutive waypoints.
    pub legs: Vec<RouteLeg>,
}

impl Route {
    /// The decoded geometry, or an empty slice when absent.
    pub fn geometry_points(&self) -> &[Point] {
        self.geometry.as_deref().unwrap_or(&[])
    }
}

/// One leg of a route, between two consecutive waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Leg distance in meters.
    pub distance: f64,
    /// Estimated leg travel time in seconds.
    pub duration: f64,
    /// Maneuver-to-maneuver steps within the leg.
    pub steps: Vec<RouteStep>,
}

/// One maneuver-to-maneuver step within a leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Step distance in meters.
    pub distance: f64,
    /// Estimated step travel time in seconds.
    pub duration: f64,
    /// Decoded step geometry, when the provider includes per-step shapes.
    pub geometry: Option<Vec<Point>>,
}
