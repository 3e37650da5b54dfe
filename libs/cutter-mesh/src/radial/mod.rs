//! # Radial Duplicator
//!
//! Rigid placements of the copies in a radial array.

use glam::{DQuat, DVec3};

use crate::params::{RadialArray, RadialAxis};

/// Rotation followed by translation, applied to every vertex of one copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Rotation about the array axis
    pub rotation: DQuat,
    /// Position of the copy
    pub translation: DVec3,
}

impl Placement {
    /// Maps a local point into the copy: `rotation · p + translation`.
    #[inline]
    pub fn apply(&self, point: DVec3) -> DVec3 {
        self.rotation * point + self.translation
    }
}

/// Returns the rotation axis used for a radial array.
///
/// The Y array turns about `-Y` so that its copies advance in the same
/// visual direction as X and Z arrays. Existing scenes depend on this.
pub fn rotation_axis(axis: RadialAxis) -> DVec3 {
    match axis {
        RadialAxis::Y => -axis.unit(),
        RadialAxis::X | RadialAxis::Z => axis.unit(),
    }
}

/// Computes one placement per radial step.
///
/// Copy `i` is rotated by `i·angle` about the axis and moved onto a circle
/// of `radius` around it, at angle `i·angle`. Along the axis it moves by
/// `offset·i`, or by `+offset`/`-offset` for even/odd copies when the
/// offset is mirrored.
///
/// # Example
///
/// ```rust
/// use cutter_mesh::{radial::radial_placements, RadialArray, RadialAxis};
/// use glam::DVec3;
/// use std::f64::consts::FRAC_PI_2;
///
/// let array = RadialArray::default()
///     .with_axis(RadialAxis::Z)
///     .with_steps(4)
///     .with_angle(FRAC_PI_2)
///     .with_radius(1.0);
/// let placements = radial_placements(&array);
/// assert_eq!(placements.len(), 4);
/// assert!(placements[1].translation.abs_diff_eq(DVec3::Y, 1e-12));
/// ```
pub fn radial_placements(array: &RadialArray) -> Vec<Placement> {
    let axis = rotation_axis(array.axis());
    let radius = array.radius();

    (0..array.steps())
        .map(|i| {
            let theta = i as f64 * array.angle();
            let along = if array.offset_mirror() {
                if i % 2 == 0 {
                    array.offset()
                } else {
                    -array.offset()
                }
            } else {
                array.offset() * i as f64
            };

            let (sin, cos) = theta.sin_cos();
            let translation = match array.axis() {
                RadialAxis::X => DVec3::new(along, radius * cos, radius * sin),
                RadialAxis::Y => DVec3::new(radius * cos, along, radius * sin),
                RadialAxis::Z => DVec3::new(radius * cos, radius * sin, along),
            };

            Placement {
                rotation: DQuat::from_axis_angle(axis, theta),
                translation,
            }
        })
        .collect()
}
