//! Core geographic types: points, bounding boxes, coordinate validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Southernmost valid latitude in degrees.
pub const MIN_LAT: f64 = -90.0;
/// Northernmost valid latitude in degrees.
pub const MAX_LAT: f64 = 90.0;
/// Westernmost valid longitude in degrees.
pub const MIN_LON: f64 = -180.0;
/// Easternmost valid longitude in degrees.
pub const MAX_LON: f64 = 180.0;

/// Errors that can occur when building geographic values from raw degrees.
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    /// Latitude outside [-90, 90].
    #[error("Invalid latitude: {0} (must be within [-90, 90])")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180].
    #[error("Invalid longitude: {0} (must be within [-180, 180])")]
    InvalidLongitude(f64),
}

/// A geographic point in WGS84 degrees.
///
/// Stored longitude-first to match the decoded route geometry the engines
/// consume (GeoJSON ordering).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
}

impl Point {
    /// Create a point from already-validated coordinates.
    ///
    /// Decoded route geometry is trusted as-is. Use [`Point::from_degrees`]
    /// for coordinates from unvalidated input.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Create a point from raw degrees, validating coordinate ranges.
    ///
    /// # Returns
    ///
    /// A `Result` containing the point or an error naming the offending
    /// coordinate.
    pub fn from_degrees(longitude: f64, latitude: f64) -> Result<Self, GeoError> {
        if !(MIN_LAT..=MAX_LAT).contains(&latitude) {
            return Err(GeoError::InvalidLatitude(latitude));
        }
        if !(MIN_LON..=MAX_LON).contains(&longitude) {
            return Err(GeoError::InvalidLongitude(longitude));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.longitude, self.latitude)
    }
}

/// Geographic bounding box over a set of points.
///
/// Represents the minimum bounding rectangle containing everything a camera
/// framing must keep visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    /// Minimum (southernmost) latitude.
    pub min_lat: f64,
    /// Maximum (northernmost) latitude.
    pub max_lat: f64,
    /// Minimum (westernmost) longitude.
    pub min_lon: f64,
    /// Maximum (easternmost) longitude.
    pub max_lon: f64,
}

impl GeoBounds {
    /// Create a new bounding box.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Create a bounding box from a single point.
    pub fn from_point(point: Point) -> Self {
        Self {
            min_lat: point.latitude,
            max_lat: point.latitude,
            min_lon: point.longitude,
            max_lon: point.longitude,
        }
    }

    /// Compute the smallest bounding box enclosing all given points.
    ///
    /// Returns `None` for an empty slice - there is nothing to frame.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::from_point(*first);
        for point in rest {
            bounds.expand(*point);
        }
        Some(bounds)
    }

    /// Expand this bounding box to include a point.
    pub fn expand(&mut self, point: Point) {
        self.min_lat = self.min_lat.min(point.latitude);
        self.max_lat = self.max_lat.max(point.latitude);
        self.min_lon = self.min_lon.min(point.longitude);
        self.max_lon = self.max_lon.max(point.longitude);
    }

    /// Whether the point lies within the bounds (edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.latitude)
            && (self.min_lon..=self.max_lon).contains(&point.longitude)
    }

    /// Get the center point of the bounds.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// Get the width of the bounds in degrees.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Get the height of the bounds in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}
