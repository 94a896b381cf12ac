//! Position fixes reported by the host's location provider.

use serde::{Deserialize, Serialize};

use crate::geo::Point;

/// A single position fix from the host platform's location provider.
///
/// Only longitude and latitude are consumed by the camera engines; the
/// remaining fields travel with the fix so hosts can pass the whole update
/// through without reshaping it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationUpdate {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Ground speed in meters per second.
    pub speed: f32,
    /// Bearing in degrees (0 = north, 90 = east).
    pub bearing: f32,
    /// Horizontal accuracy radius in meters.
    pub accuracy: f32,
    /// Fix timestamp in milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
}

impl LocationUpdate {
    /// Create a fix carrying only a position.
    ///
    /// Speed, bearing, accuracy and timestamp are zeroed; set them directly
    /// when the provider reports them.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            speed: 0.0,
            bearing: 0.0,
            accuracy: 0.0,
            timestamp_ms: 0,
        }
    }

    /// The fix position as a geographic point.
    pub fn point(&self) -> Point {
        Point::new(self.longitude, self.latitude)
    }
}
