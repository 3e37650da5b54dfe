//! # Profile Curve Generators
//!
//! Point rings and paths for every profile family, in the canonical
//! orientation: long axis on X, thickness on Y, height on Z, centered at
//! the origin.
//!
//! Generators assume their counts were clamped upstream and never
//! re-validate them. The only fallible operation is the path sweep, which
//! reports tangents it cannot build a frame from.

use config::constants::EPSILON;
use glam::{DMat3, DVec3};
use std::f64::consts::TAU;

use crate::error::{MeshError, MeshResult};
use crate::params::WaveShape;

// =============================================================================
// RING
// =============================================================================

/// An ordered run of points, either closed (implicit edge from the last
/// point back to the first) or open (a path).
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<DVec3>,
    closed: bool,
}

impl Ring {
    /// Creates a closed ring.
    pub fn closed(points: Vec<DVec3>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// Creates an open path.
    pub fn open(points: Vec<DVec3>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Returns the points in order.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the ring has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true for a closed ring, false for an open path.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns a copy moved by `delta`.
    pub fn translated(&self, delta: DVec3) -> Self {
        Self {
            points: self.points.iter().map(|p| *p + delta).collect(),
            closed: self.closed,
        }
    }

    /// Consumes the ring and returns its points.
    pub fn into_points(self) -> Vec<DVec3> {
        self.points
    }
}

// =============================================================================
// RECTANGLE
// =============================================================================

/// Returns the 8 corners of a box with the given half-extents.
///
/// Bottom face (`-y`) first, then the top face (`+y`) in the same order, so
/// corner `i` sits directly below corner `i + 4`.
pub fn rectangle_ring(half: DVec3) -> [DVec3; 8] {
    let DVec3 { x, y, z } = half;
    [
        DVec3::new(x, -y, -z),
        DVec3::new(x, -y, z),
        DVec3::new(-x, -y, z),
        DVec3::new(-x, -y, -z),
        DVec3::new(x, y, -z),
        DVec3::new(x, y, z),
        DVec3::new(-x, y, z),
        DVec3::new(-x, y, -z),
    ]
}

/// Returns the 16 points of a rectangular picture frame.
///
/// `inner` is the half-extents of the opening; the outer edge sits
/// `frame_half_width` further out in X and Z. The points come in four corner
/// groups, `(+x,-z)`, `(+x,+z)`, `(-x,+z)`, `(-x,-z)`, each one a square
/// cross-section: outer bottom, outer top, inner top, inner bottom.
pub fn rectangle_frame_ring(inner: DVec3, frame_half_width: f64) -> [DVec3; 16] {
    let (ax, az) = (inner.x, inner.z);
    let (bx, bz) = (inner.x + frame_half_width, inner.z + frame_half_width);
    let y = inner.y;

    let mut points = [DVec3::ZERO; 16];
    for (group, (sx, sz)) in [(1.0, -1.0), (1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0)]
        .into_iter()
        .enumerate()
    {
        let base = group * 4;
        points[base] = DVec3::new(sx * bx, -y, sz * bz);
        points[base + 1] = DVec3::new(sx * bx, y, sz * bz);
        points[base + 2] = DVec3::new(sx * ax, y, sz * az);
        points[base + 3] = DVec3::new(sx * ax, -y, sz * az);
    }
    points
}

// =============================================================================
// ELLIPSE
// =============================================================================

/// Returns `segments` points of an ellipse in the X-Z plane.
///
/// Point `i` is `(r.x cos θ, 0, r.z sin θ)` with `θ = i·2π/segments`.
///
/// # Example
///
/// ```rust
/// use cutter_mesh::profile::ellipse_ring;
/// use glam::DVec3;
///
/// let ring = ellipse_ring(DVec3::new(1.0, 0.0, 1.0), 4);
/// assert_eq!(ring.len(), 4);
/// assert!(ring.points()[1].abs_diff_eq(DVec3::Z, 1e-12));
/// ```
pub fn ellipse_ring(radii: DVec3, segments: u32) -> Ring {
    let step = TAU / segments as f64;
    Ring::closed(
        (0..segments)
            .map(|i| {
                let (sin, cos) = (i as f64 * step).sin_cos();
                DVec3::new(radii.x * cos, 0.0, radii.z * sin)
            })
            .collect(),
    )
}

/// Returns `segments` points of an ellipse in the Y-Z plane.
///
/// Used as the round cross-section threaded along a frame path.
pub fn ellipse_frame_ring(radii: DVec3, segments: u32) -> Ring {
    let step = TAU / segments as f64;
    Ring::closed(
        (0..segments)
            .map(|i| {
                let (sin, cos) = (i as f64 * step).sin_cos();
                DVec3::new(0.0, radii.y * cos, radii.z * sin)
            })
            .collect(),
    )
}

/// Returns the square cross-section of a straight frame in the Y-Z plane.
pub fn square_frame_section(half_thickness: f64, frame_half_width: f64) -> Ring {
    let (y, f) = (half_thickness, frame_half_width);
    Ring::closed(vec![
        DVec3::new(0.0, y, -f),
        DVec3::new(0.0, y, f),
        DVec3::new(0.0, -y, f),
        DVec3::new(0.0, -y, -f),
    ])
}

// =============================================================================
// WAVE
// =============================================================================

/// Returns the open wave path of `segments + 1` points.
///
/// X runs from `-half.x` to `+half.x` in equal steps; Z is
/// `half.z + amplitude·sin(i·ω + phase)` with `ω = frequency·2π/segments`.
pub fn wave_path(half: DVec3, segments: u32, wave: &WaveShape) -> Ring {
    let n = segments as f64;
    let omega = wave.frequency * TAU / n;
    Ring::open(
        (0..=segments)
            .map(|i| {
                let t = i as f64;
                DVec3::new(
                    -half.x + t * 2.0 * half.x / n,
                    0.0,
                    half.z + wave.amplitude * (t * omega + wave.phase).sin(),
                )
            })
            .collect(),
    )
}

/// Closes a wave path into the outline of a flat wall.
///
/// The path is followed by its point mirror through the X axis
/// (`(x, -y, -z)`), traversed backwards.
pub fn wave_outline(path: &Ring) -> Ring {
    let points = path.points();
    let mirrored = points.iter().rev().map(|p| DVec3::new(p.x, -p.y, -p.z));
    Ring::closed(points.iter().copied().chain(mirrored).collect())
}

// =============================================================================
// SWEEP
// =============================================================================

/// Threads a cross-section ring along a path.
///
/// Returns `path.len() * section.len()` points, path-major: the copy of
/// the section at path point `i` occupies `[i·R, (i+1)·R)`.
///
/// At every path point the tangent is estimated from the neighbouring
/// points (clamped at the ends of an open path, wrapped for a closed one).
/// The section's X axis is mapped onto the tangent; the remaining two axes
/// are resolved against world Y, the normal of every path this crate builds.
///
/// # Errors
///
/// Returns [`MeshError::DegenerateGeometry`] when a tangent has zero length
/// or runs parallel to Y.
pub fn sweep_ring_along_path(path: &Ring, section: &Ring) -> MeshResult<Vec<DVec3>> {
    let points = path.points();
    let count = points.len();
    let mut out = Vec::with_capacity(count * section.len());

    for (i, origin) in points.iter().enumerate() {
        let (prev, next) = if path.is_closed() {
            (points[(i + count - 1) % count], points[(i + 1) % count])
        } else {
            (points[i.saturating_sub(1)], points[(i + 1).min(count - 1)])
        };

        let frame = sweep_frame(next - prev).ok_or_else(|| {
            MeshError::degenerate(format!(
                "cannot orient sweep at path point {} ({:?})",
                i, origin
            ))
        })?;

        out.extend(section.points().iter().map(|q| *origin + frame * *q));
    }

    Ok(out)
}

/// Builds the orthonormal frame whose X axis follows `direction`.
fn sweep_frame(direction: DVec3) -> Option<DMat3> {
    if direction.length() < EPSILON {
        return None;
    }
    let tangent = direction.normalize();
    let side = tangent.cross(DVec3::Y);
    if side.length() < EPSILON {
        return None;
    }
    let side = side.normalize();
    Some(DMat3::from_cols(tangent, side.cross(tangent), side))
}
