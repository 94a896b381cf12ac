//! Fixed-policy camera engine.

use crate::camera::engine::{overview_points, CameraEngine, DEFAULT_TILT, DEFAULT_ZOOM};
use crate::camera::types::RouteInformation;
use crate::geo::Point;

/// A camera engine with fixed zoom and tilt.
///
/// Suitable for hosts without a bounds-fitting surface, and the baseline the
/// dynamic engine degrades to. Stateless - creating one per display session
/// costs nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleCamera;

impl SimpleCamera {
    /// Create a new fixed-policy engine.
    pub fn new() -> Self {
        Self
    }
}

impl CameraEngine for SimpleCamera {
    fn zoom(&self, _info: &RouteInformation<'_>) -> f64 {
        DEFAULT_ZOOM
    }

    fn tilt(&self, _info: &RouteInformation<'_>) -> f64 {
        DEFAULT_TILT
    }

    fn overview(&self, info: &RouteInformation<'_>) -> Vec<Point> {
        overview_points(info)
    }
}
