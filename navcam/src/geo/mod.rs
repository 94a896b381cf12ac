//! Geographic value types shared by the camera engines.
//!
//! Coordinates are WGS84 degrees: longitude in [-180, 180], latitude in
//! [-90, 90]. Route geometry arrives already decoded from whatever polyline
//! encoding the route provider used; this module only carries points around
//! and derives bounding boxes from them.

mod types;

pub use types::{GeoBounds, GeoError, Point, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
