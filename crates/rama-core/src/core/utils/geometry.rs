use nalgebra::{Point3, Unit, Vector3};
use thiserror::Error;

/// Cross-product magnitude below which three points are treated as collinear.
pub const DEGENERATE_EPSILON: f64 = 1e-10;

/// Default slack allowed for a cosine computed from two unit normals before it is
/// considered a numeric anomaly rather than rounding drift.
pub const DEFAULT_COSINE_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Degenerate geometry: points are collinear or coincident (|v x w| = {magnitude:e})")]
    Degenerate { magnitude: f64 },
    #[error("Non-finite coordinate in plane definition")]
    NonFinite,
    #[error("Cosine {value} lies outside [-1, 1] beyond tolerance {tolerance:e}")]
    NumericRange { value: f64, tolerance: f64 },
}

/// Computes the unit normal of the plane through `p0`, `p1` and `p2`.
///
/// The normal is `(p1 - p0) x (p2 - p1)` scaled to unit length, so its direction
/// follows the right-hand rule and flips when the point order is reversed.
///
/// # Errors
///
/// Returns [`GeometryError::NonFinite`] if any coordinate is NaN or infinite, and
/// [`GeometryError::Degenerate`] if the points are collinear or two of them coincide.
pub fn plane_normal(
    p0: &Point3<f64>,
    p1: &Point3<f64>,
    p2: &Point3<f64>,
) -> Result<Unit<Vector3<f64>>, GeometryError> {
    if [p0, p1, p2]
        .iter()
        .any(|p| p.coords.iter().any(|c| !c.is_finite()))
    {
        return Err(GeometryError::NonFinite);
    }

    let v = p1 - p0;
    let w = p2 - p1;
    let cross = v.cross(&w);
    let magnitude = cross.norm();

    Unit::try_new(cross, DEGENERATE_EPSILON).ok_or(GeometryError::Degenerate { magnitude })
}

/// Sign of `normal . direction`, with an exactly perpendicular direction counted as positive.
#[inline]
pub fn direction_sign(normal: &Unit<Vector3<f64>>, direction: &Vector3<f64>) -> f64 {
    if normal.dot(direction) < 0.0 { -1.0 } else { 1.0 }
}

/// Returns `acos(cosine)` in degrees after clamping rounding drift into [-1, 1].
///
/// # Errors
///
/// Returns [`GeometryError::NumericRange`] if `cosine` is not finite or lies outside
/// [-1, 1] by more than `tolerance`.
pub fn clamped_acos_degrees(cosine: f64, tolerance: f64) -> Result<f64, GeometryError> {
    if !cosine.is_finite() || cosine.abs() > 1.0 + tolerance {
        return Err(GeometryError::NumericRange {
            value: cosine,
            tolerance,
        });
    }
    Ok(cosine.clamp(-1.0, 1.0).acos().to_degrees())
}

/// Signed angle between two adjacent planes, in degrees within (-180, 180].
///
/// `first` and `second` are the unit normals of the two planes; `direction` is the
/// bond leaving the shared edge, whose side of the first plane gives the sign.
pub fn signed_plane_angle(
    first: &Unit<Vector3<f64>>,
    second: &Unit<Vector3<f64>>,
    direction: &Vector3<f64>,
    tolerance: f64,
) -> Result<f64, GeometryError> {
    let magnitude = clamped_acos_degrees(first.dot(second), tolerance)?;
    let angle = direction_sign(first, direction) * magnitude;
    Ok(if angle <= -180.0 { 180.0 } else { angle })
}

/// Dihedral angle defined by four consecutive points, in degrees within (-180, 180].
pub fn dihedral_angle(
    p0: &Point3<f64>,
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
    tolerance: f64,
) -> Result<f64, GeometryError> {
    let first = plane_normal(p0, p1, p2)?;
    let second = plane_normal(p1, p2, p3)?;
    signed_plane_angle(&first, &second, &(p3 - p2), tolerance)
}
