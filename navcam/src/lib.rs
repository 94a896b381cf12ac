//! NavCam - camera framing for turn-by-turn navigation map displays
//!
//! Given a snapshot of the active route, the latest position fix, and live
//! route progress, the engines in this crate decide how a navigation map
//! camera should frame the scene: zoom level, tilt angle, and the point set
//! an overview must keep visible. Bounds fitting stays on the host map
//! surface behind the [`camera::MapProjection`] trait, so the decision logic
//! runs and tests without any rendering stack.
//!
//! # Example
//!
//! ```
//! use navcam::camera::{CameraEngine, RouteInformation, SimpleCamera, DEFAULT_ZOOM};
//!
//! let engine = SimpleCamera::new();
//! let info = RouteInformation::default();
//! assert_eq!(engine.zoom(&info), DEFAULT_ZOOM);
//! ```

pub mod camera;
pub mod geo;
pub mod location;
pub mod route;
