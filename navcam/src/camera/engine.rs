//! The framing policy interface shared by all camera engines.

use crate::camera::types::RouteInformation;
use crate::geo::Point;
use crate::route::Route;

/// Baseline zoom used whenever no better framing can be derived.
pub const DEFAULT_ZOOM: f64 = 15.0;

/// Tilt angle in degrees applied in every currently exercised scenario.
pub const DEFAULT_TILT: f64 = 50.0;

/// A camera framing policy.
///
/// Implementations answer three independent questions about one
/// [`RouteInformation`] snapshot: how far to zoom, how much to tilt, and
/// which points an overview must keep visible.
///
/// # Totality
///
/// All three operations are total. Every combination of present and absent
/// snapshot fields, including all-absent, yields a value - missing inputs
/// degrade to [`DEFAULT_ZOOM`], [`DEFAULT_TILT`], or an empty point list.
pub trait CameraEngine {
    /// Zoom level for the follow view.
    fn zoom(&self, info: &RouteInformation<'_>) -> f64;

    /// Tilt angle in degrees.
    fn tilt(&self, info: &RouteInformation<'_>) -> f64;

    /// Points an overview framing must keep visible, in route order.
    fn overview(&self, info: &RouteInformation<'_>) -> Vec<Point>;
}

/// The route whose geometry frames this snapshot, if any.
///
/// A present route always wins over the route referenced by progress, even
/// when its geometry turns out to be absent.
pub(crate) fn framing_route<'a>(info: &RouteInformation<'a>) -> Option<&'a Route> {
    info.route.or_else(|| info.progress.map(|p| &p.route))
}

/// The overview point list for a snapshot, shared by all engines.
///
/// Resolves the framing route per [`framing_route`] and returns its decoded
/// geometry in original order. Empty when no route is available or the
/// framing route carries no geometry. Recomputed on every call; nothing is
/// cached between snapshots.
pub(crate) fn overview_points(info: &RouteInformation<'_>) -> Vec<Point> {
    framing_route(info)
        .map(|route| route.geometry_points().to_vec())
        .unwrap_or_default()
}
