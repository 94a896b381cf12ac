//! Value types exchanged between the host map surface and the camera engines.

use crate::geo::Point;
use crate::location::LocationUpdate;
use crate::route::{Route, RouteProgress};

/// Everything a camera engine may consider for one framing decision.
///
/// Built per query and discarded afterwards; the engines never retain a
/// snapshot between calls. Any subset of the fields may be absent
/// simultaneously.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteInformation<'a> {
    /// The planned route, when one is active.
    pub route: Option<&'a Route>,
    /// The most recent position fix.
    pub location: Option<&'a LocationUpdate>,
    /// Live progress along the active route.
    pub progress: Option<&'a RouteProgress>,
}

impl<'a> RouteInformation<'a> {
    /// Assemble a snapshot from whatever inputs the host currently has.
    pub fn new(
        route: Option<&'a Route>,
        location: Option<&'a LocationUpdate>,
        progress: Option<&'a RouteProgress>,
    ) -> Self {
        Self {
            route,
            location,
            progress,
        }
    }
}

/// A best-fit framing reported by the host map surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPosition {
    /// Framing center, when the surface reports one.
    pub target: Option<Point>,
    /// Zoom level.
    pub zoom: f64,
    /// Tilt angle in degrees from nadir.
    pub tilt: f64,
}

/// Pixel insets left free at the viewport edges when fitting bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeInsets {
    /// Pixels left free at the left edge.
    pub left: u32,
    /// Pixels left free at the top edge.
    pub top: u32,
    /// Pixels left free at the right edge.
    pub right: u32,
    /// Pixels left free at the bottom edge.
    pub bottom: u32,
}

impl EdgeInsets {
    /// Create insets with the same value on all four edges.
    pub fn uniform(inset: u32) -> Self {
        Self {
            left: inset,
            top: inset,
            right: inset,
            bottom: inset,
        }
    }
}
