//! Camera framing engines and their supporting types.
//!
//! Two engines implement the [`CameraEngine`] policy:
//!
//! - [`SimpleCamera`] - fixed zoom and tilt, overview straight from the route
//!   geometry. No host surface required.
//! - [`DynamicCamera`] - fits a bounding box over the framing geometry through
//!   the host's [`MapProjection`] and clamps the fitted zoom.
//!
//! Hosts build a [`RouteInformation`] snapshot per query; every combination of
//! present and absent fields is legal and answered with a documented default,
//! never an error.
//!
//! # Example
//!
//! ```
//! use navcam::camera::{CameraEngine, RouteInformation, SimpleCamera, DEFAULT_ZOOM};
//!
//! let engine = SimpleCamera::new();
//! let info = RouteInformation::default();
//!
//! assert_eq!(engine.zoom(&info), DEFAULT_ZOOM);
//! assert!(engine.overview(&info).is_empty());
//! ```

mod dynamic;
mod engine;
mod projection;
mod simple;
mod types;

pub use dynamic::{DynamicCamera, MAX_CAMERA_ZOOM, MIN_CAMERA_ZOOM};
pub use engine::{CameraEngine, DEFAULT_TILT, DEFAULT_ZOOM};
pub use projection::MapProjection;
pub use simple::SimpleCamera;
pub use types::{CameraPosition, EdgeInsets, RouteInformation};
