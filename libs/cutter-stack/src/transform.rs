//! # Cutter Placement
//!
//! World transform of a cutter from its placement and its target's world
//! matrix.

use glam::DMat4;

use crate::settings::CutterPlacement;

/// Computes a cutter's world matrix.
///
/// The target matrix is decomposed into scale, rotation and translation.
/// A relative rotation is composed after the target's rotation; a relative
/// position is rotated into the target's frame and offset by its
/// translation. The target's scale is never inherited.
///
/// # Example
///
/// ```rust
/// use cutter_stack::{cutter_world_transform, CutterPlacement};
/// use glam::{DMat4, DVec3};
///
/// let target = DMat4::from_translation(DVec3::new(0.0, 0.0, 5.0));
/// let placement = CutterPlacement {
///     position: DVec3::X,
///     ..CutterPlacement::default()
/// };
/// let world = cutter_world_transform(&placement, &target);
/// assert!(world.w_axis.truncate().abs_diff_eq(DVec3::new(1.0, 0.0, 5.0), 1e-12));
/// ```
pub fn cutter_world_transform(placement: &CutterPlacement, target_world: &DMat4) -> DMat4 {
    let (_scale, target_rotation, target_translation) =
        target_world.to_scale_rotation_translation();
    let rotation = placement.rotation_quat();

    let rotation = if placement.rotation_relative {
        target_rotation * rotation
    } else {
        rotation
    };

    let translation = if placement.position_relative {
        target_rotation * placement.position + target_translation
    } else {
        placement.position
    };

    DMat4::from_rotation_translation(rotation, translation)
}
