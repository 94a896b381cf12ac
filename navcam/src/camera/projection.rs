//! Seam between the camera engines and the host map surface.

use crate::camera::types::{CameraPosition, EdgeInsets};
use crate::geo::GeoBounds;

/// Bounds-fitting capability of the host map surface.
///
/// The engines never do projection math themselves: they hand a bounding box
/// to the surface and sanitize whatever comes back. Keeping the surface
/// behind this trait lets the numeric framing logic run and test without any
/// rendering stack.
///
/// # Readiness
///
/// Implementations return `None` while the surface cannot compute a fit yet,
/// for example before its first layout pass. Callers treat an absent fit as a
/// normal fallback, not an error.
pub trait MapProjection {
    /// Compute the camera position that best fits `bounds` into the viewport,
    /// leaving `insets` pixels free at each edge.
    fn fit_bounds(&self, bounds: GeoBounds, insets: EdgeInsets) -> Option<CameraPosition>;
}
