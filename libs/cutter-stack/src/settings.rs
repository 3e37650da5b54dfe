//! # Cutter Settings
//!
//! Everything a host stores per cutter besides the mesh parameters: how it
//! combines with the target, its bevel, its placement and its linear arrays.

use config::constants::{
    array_modifier_name, ARRAY_MODIFIER_COUNT, DEFAULT_ARRAY_OFFSET, DEFAULT_BEVEL_PROFILE,
    DEFAULT_BEVEL_SEGMENTS, MIN_ARRAY_COUNT, MIN_BEVEL_SEGMENTS,
};
use cutter_mesh::CutterParameters;
use glam::{DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

// =============================================================================
// BOOLEAN OPERATION
// =============================================================================

/// How a cutter combines with the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BooleanOperation {
    /// Subtract the cutter from the target
    #[default]
    Difference,
    /// Join the cutter to the target
    Union,
    /// Keep only the overlap
    Intersect,
}

// =============================================================================
// BEVEL
// =============================================================================

/// Bevel applied to a cutter or to the target.
///
/// `width` is never negative, `segments` is at least one and `profile` lies
/// in `[0, 1]`; the setters and deserialization clamp into those ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "BevelFields")]
pub struct BevelSettings {
    width: f64,
    clamp_overlap: bool,
    segments: u32,
    profile: f64,
}

impl BevelSettings {
    /// Default bevel of a cutter: zero width, overlap not clamped.
    pub fn cutter() -> Self {
        Self {
            width: 0.0,
            clamp_overlap: false,
            segments: DEFAULT_BEVEL_SEGMENTS,
            profile: DEFAULT_BEVEL_PROFILE,
        }
    }

    /// Default bevel of a target: zero width, overlap clamped.
    pub fn target() -> Self {
        Self {
            clamp_overlap: true,
            ..Self::cutter()
        }
    }

    /// Sets the bevel width (negative values become zero).
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width.max(0.0);
        self
    }

    /// Sets overlap clamping.
    pub fn with_clamp_overlap(mut self, clamp_overlap: bool) -> Self {
        self.clamp_overlap = clamp_overlap;
        self
    }

    /// Sets the segment count (at least one).
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments.max(MIN_BEVEL_SEGMENTS);
        self
    }

    /// Sets the profile shape, clamped to `[0, 1]`.
    pub fn with_profile(mut self, profile: f64) -> Self {
        self.profile = profile.clamp(0.0, 1.0);
        self
    }

    /// Bevel width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Whether overlapping bevels are clamped.
    pub fn clamp_overlap(&self) -> bool {
        self.clamp_overlap
    }

    /// Segment count.
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Profile shape.
    pub fn profile(&self) -> f64 {
        self.profile
    }
}

impl Default for BevelSettings {
    fn default() -> Self {
        Self::cutter()
    }
}

#[derive(Deserialize)]
struct BevelFields {
    #[serde(default)]
    width: f64,
    #[serde(default)]
    clamp_overlap: bool,
    #[serde(default = "default_bevel_segments")]
    segments: u32,
    #[serde(default = "default_bevel_profile")]
    profile: f64,
}

fn default_bevel_segments() -> u32 {
    DEFAULT_BEVEL_SEGMENTS
}

fn default_bevel_profile() -> f64 {
    DEFAULT_BEVEL_PROFILE
}

impl From<BevelFields> for BevelSettings {
    fn from(fields: BevelFields) -> Self {
        BevelSettings::cutter()
            .with_width(fields.width)
            .with_clamp_overlap(fields.clamp_overlap)
            .with_segments(fields.segments)
            .with_profile(fields.profile)
    }
}

// =============================================================================
// PLACEMENT
// =============================================================================

/// Where a cutter sits, either in world space or relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutterPlacement {
    /// Euler angles in radians, applied X first, then Y, then Z
    pub rotation: DVec3,
    /// Position
    pub position: DVec3,
    /// Compose the rotation with the target's rotation
    pub rotation_relative: bool,
    /// Express the position in the target's frame
    pub position_relative: bool,
}

impl Default for CutterPlacement {
    fn default() -> Self {
        Self {
            rotation: DVec3::ZERO,
            position: DVec3::ZERO,
            rotation_relative: true,
            position_relative: true,
        }
    }
}

impl CutterPlacement {
    /// Rotation as a quaternion.
    pub fn rotation_quat(&self) -> DQuat {
        // extrinsic X, Y, Z equals intrinsic Z, Y, X
        DQuat::from_euler(EulerRot::ZYX, self.rotation.z, self.rotation.y, self.rotation.x)
    }
}

// =============================================================================
// LINEAR ARRAY
// =============================================================================

/// A linear array handed to the modifier pipeline: `count` copies, each
/// shifted by a constant `offset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ArrayFields")]
pub struct ArrayModifierSpec {
    name: String,
    count: u32,
    offset: DVec3,
}

impl ArrayModifierSpec {
    /// Creates an array spec; `count` is clamped to at least one.
    pub fn new(name: impl Into<String>, count: u32, offset: DVec3) -> Self {
        Self {
            name: name.into(),
            count: count.max(MIN_ARRAY_COUNT),
            offset,
        }
    }

    /// The arrays every new cutter carries: `Array_1` and `Array_2`, both
    /// inactive (count one) with the default offset.
    pub fn defaults() -> Vec<Self> {
        (0..ARRAY_MODIFIER_COUNT)
            .map(|i| Self::new(array_modifier_name(i), 1, DVec3::from_array(DEFAULT_ARRAY_OFFSET)))
            .collect()
    }

    /// Sets the count (at least one).
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count.max(MIN_ARRAY_COUNT);
        self
    }

    /// Sets the constant offset.
    pub fn with_offset(mut self, offset: DVec3) -> Self {
        self.offset = offset;
        self
    }

    /// Modifier name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of copies.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Constant offset between copies.
    pub fn offset(&self) -> DVec3 {
        self.offset
    }
}

#[derive(Deserialize)]
struct ArrayFields {
    name: String,
    count: u32,
    offset: DVec3,
}

impl From<ArrayFields> for ArrayModifierSpec {
    fn from(fields: ArrayFields) -> Self {
        ArrayModifierSpec::new(fields.name, fields.count, fields.offset)
    }
}

// =============================================================================
// CUTTER SETTINGS
// =============================================================================

/// Complete host-side record of one cutter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutterSettings {
    /// Unique name within the stack; also names the target's boolean entry
    pub name: String,
    /// Mesh parameters
    pub parameters: CutterParameters,
    /// Boolean operation against the target
    pub operation: BooleanOperation,
    /// Cutter bevel
    pub bevel: BevelSettings,
    /// Placement relative to the target
    pub placement: CutterPlacement,
    /// Linear arrays, in stack order
    pub arrays: Vec<ArrayModifierSpec>,
    /// Whether the target's boolean is shown
    pub show_effect: bool,
}

impl CutterSettings {
    /// Creates a cutter with default parameters and the two default arrays.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cutter_stack::{BooleanOperation, CutterSettings};
    ///
    /// let cutter = CutterSettings::new("Cutter_1");
    /// assert_eq!(cutter.operation, BooleanOperation::Difference);
    /// assert_eq!(cutter.arrays.len(), 2);
    /// assert!(cutter.show_effect);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: CutterParameters::default(),
            operation: BooleanOperation::default(),
            bevel: BevelSettings::cutter(),
            placement: CutterPlacement::default(),
            arrays: ArrayModifierSpec::defaults(),
            show_effect: true,
        }
    }

    /// Replaces the mesh parameters.
    pub fn with_parameters(mut self, parameters: CutterParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Replaces the boolean operation.
    pub fn with_operation(mut self, operation: BooleanOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Replaces the cutter bevel.
    pub fn with_bevel(mut self, bevel: BevelSettings) -> Self {
        self.bevel = bevel;
        self
    }

    /// Replaces the placement.
    pub fn with_placement(mut self, placement: CutterPlacement) -> Self {
        self.placement = placement;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_bevel_defaults() {
        let cutter = BevelSettings::cutter();
        let target = BevelSettings::target();
        assert!(!cutter.clamp_overlap());
        assert!(target.clamp_overlap());
        assert_eq!(cutter.segments(), 2);
        assert_eq!(cutter.profile(), 0.5);
        assert_eq!(cutter.width(), 0.0);
    }

    #[test]
    fn test_bevel_clamping() {
        let bevel = BevelSettings::cutter()
            .with_width(-1.0)
            .with_segments(0)
            .with_profile(3.0);
        assert_eq!(bevel.width(), 0.0);
        assert_eq!(bevel.segments(), 1);
        assert_eq!(bevel.profile(), 1.0);
    }

    #[test]
    fn test_bevel_deserialize_clamps() {
        let bevel: BevelSettings =
            serde_json::from_str(r#"{ "width": 0.2, "segments": 0, "profile": -1.0 }"#).unwrap();
        assert_eq!(bevel.width(), 0.2);
        assert_eq!(bevel.segments(), 1);
        assert_eq!(bevel.profile(), 0.0);
    }

    #[test]
    fn test_default_arrays() {
        let arrays = ArrayModifierSpec::defaults();
        assert_eq!(arrays.len(), 2);
        assert_eq!(arrays[0].name(), "Array_1");
        assert_eq!(arrays[1].name(), "Array_2");
        assert!(arrays.iter().all(|a| a.count() == 1));
        assert_eq!(arrays[0].offset(), DVec3::new(0.0, 0.3, 0.0));
    }

    #[test]
    fn test_array_count_clamped() {
        let spec = ArrayModifierSpec::new("Array_1", 0, DVec3::X);
        assert_eq!(spec.count(), 1);
        assert_eq!(spec.with_count(4).count(), 4);
    }

    #[test]
    fn test_placement_single_axis_rotations() {
        let mut placement = CutterPlacement::default();
        placement.rotation = DVec3::new(0.0, 0.0, FRAC_PI_2);
        assert!((placement.rotation_quat() * DVec3::X).abs_diff_eq(DVec3::Y, 1e-12));

        placement.rotation = DVec3::new(FRAC_PI_2, 0.0, 0.0);
        assert!((placement.rotation_quat() * DVec3::Y).abs_diff_eq(DVec3::Z, 1e-12));
    }

    #[test]
    fn test_placement_applies_x_before_z() {
        let placement = CutterPlacement {
            rotation: DVec3::new(FRAC_PI_2, 0.0, FRAC_PI_2),
            ..CutterPlacement::default()
        };
        // X turns +Y to +Z, then Z leaves +Z alone
        assert!((placement.rotation_quat() * DVec3::Y).abs_diff_eq(DVec3::Z, 1e-12));
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = CutterSettings::new("Cutter_3")
            .with_operation(BooleanOperation::Intersect)
            .with_bevel(BevelSettings::cutter().with_width(0.05));
        let json = serde_json::to_string(&settings).unwrap();
        let back: CutterSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
