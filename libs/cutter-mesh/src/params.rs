//! # Cutter Parameters
//!
//! The immutable value a generation call consumes. Integer counts are
//! clamped as they are set; floating-point fields are checked by
//! [`CutterParameters::validate`] before any geometry is produced.

use config::constants::{
    DEFAULT_CUTTER_SIZE, DEFAULT_FRAME_RESOLUTION, DEFAULT_FRAME_SIZE, DEFAULT_RADIAL_ANGLE,
    DEFAULT_RADIAL_OFFSET, DEFAULT_RADIAL_RADIUS, DEFAULT_RADIAL_STEPS, DEFAULT_RESOLUTION,
    DEFAULT_WAVE_AMPLITUDE, DEFAULT_WAVE_FREQUENCY, DEFAULT_WAVE_PHASE, MIN_DIMENSION,
    MIN_RADIAL_STEPS, MIN_RESOLUTION,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

// =============================================================================
// ENUMS
// =============================================================================

/// Base shape family of a cutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Profile {
    /// Rectangular box, or a rectangular picture frame
    Rectangle,
    /// Elliptic cylinder, or an elliptic ring
    #[default]
    Ellipse,
    /// Sinusoidal wall, or a pair of sinusoidal rails
    Wave,
}

impl Profile {
    /// All profiles, in declaration order.
    pub const ALL: [Profile; 3] = [Profile::Rectangle, Profile::Ellipse, Profile::Wave];
}

/// Axis a radial array turns around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RadialAxis {
    /// World X axis
    X,
    /// World Y axis
    #[default]
    Y,
    /// World Z axis
    Z,
}

impl RadialAxis {
    /// All axes, in declaration order.
    pub const ALL: [RadialAxis; 3] = [RadialAxis::X, RadialAxis::Y, RadialAxis::Z];

    /// Returns the unit vector of the axis.
    pub fn unit(self) -> DVec3 {
        match self {
            RadialAxis::X => DVec3::X,
            RadialAxis::Y => DVec3::Y,
            RadialAxis::Z => DVec3::Z,
        }
    }
}

// =============================================================================
// WAVE SHAPE
// =============================================================================

/// Shape of the sinusoid used by the wave profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveShape {
    /// Number of full periods across the cutter width
    pub frequency: f64,
    /// Peak displacement along Z; must not be negative
    pub amplitude: f64,
    /// Phase shift in radians
    pub phase: f64,
    /// Rotate the finished wave a quarter turn about Y
    pub flip: bool,
}

impl Default for WaveShape {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_WAVE_FREQUENCY,
            amplitude: DEFAULT_WAVE_AMPLITUDE,
            phase: DEFAULT_WAVE_PHASE,
            flip: false,
        }
    }
}

// =============================================================================
// RADIAL ARRAY
// =============================================================================

/// Settings of the radial duplicator.
///
/// # Example
///
/// ```rust
/// use cutter_mesh::{RadialArray, RadialAxis};
///
/// let radial = RadialArray::default()
///     .with_steps(0)
///     .with_axis(RadialAxis::Z);
/// assert_eq!(radial.steps(), 1); // clamped
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialArray {
    steps: u32,
    axis: RadialAxis,
    angle: f64,
    radius: f64,
    offset: f64,
    offset_mirror: bool,
}

impl Default for RadialArray {
    fn default() -> Self {
        Self {
            steps: DEFAULT_RADIAL_STEPS,
            axis: RadialAxis::default(),
            angle: DEFAULT_RADIAL_ANGLE,
            radius: DEFAULT_RADIAL_RADIUS,
            offset: DEFAULT_RADIAL_OFFSET,
            offset_mirror: false,
        }
    }
}

impl RadialArray {
    /// Sets the number of copies (at least one).
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps.max(MIN_RADIAL_STEPS);
        self
    }

    /// Sets the rotation axis.
    pub fn with_axis(mut self, axis: RadialAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the angle between consecutive copies (radians).
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the distance of each copy from the axis.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the displacement along the axis.
    ///
    /// With `mirror` off copy `i` moves by `offset * i`; with it on, even
    /// copies move by `+offset` and odd copies by `-offset`.
    pub fn with_offset(mut self, offset: f64, mirror: bool) -> Self {
        self.offset = offset;
        self.offset_mirror = mirror;
        self
    }

    /// Number of copies.
    #[inline]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Rotation axis.
    #[inline]
    pub fn axis(&self) -> RadialAxis {
        self.axis
    }

    /// Angle between consecutive copies (radians).
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Distance of each copy from the axis.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Displacement along the axis.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether the displacement alternates sign by parity.
    #[inline]
    pub fn offset_mirror(&self) -> bool {
        self.offset_mirror
    }

    fn clamped(self) -> Self {
        self.with_steps(self.steps)
    }
}

// =============================================================================
// CUTTER PARAMETERS
// =============================================================================

/// Complete parameter set of one cutter.
///
/// Built by chaining `with_*` setters on the default value. A rectangle
/// never carries a curved frame: selecting the rectangle profile clears
/// `frame_curved`, and enabling it on a rectangle is ignored.
///
/// # Example
///
/// ```rust
/// use cutter_mesh::{CutterParameters, Profile};
///
/// let params = CutterParameters::default()
///     .with_frame_curved(true)
///     .with_profile(Profile::Rectangle);
/// assert!(!params.frame_curved());
///
/// let params = CutterParameters::default().with_resolution(1);
/// assert_eq!(params.resolution(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ParameterFields")]
pub struct CutterParameters {
    profile: Profile,
    size: DVec3,
    resolution: u32,
    frame: bool,
    frame_size: f64,
    frame_curved: bool,
    frame_resolution: u32,
    radial: bool,
    radial_array: RadialArray,
    wave: WaveShape,
}

impl Default for CutterParameters {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            size: DVec3::from_array(DEFAULT_CUTTER_SIZE),
            resolution: DEFAULT_RESOLUTION,
            frame: false,
            frame_size: DEFAULT_FRAME_SIZE,
            frame_curved: false,
            frame_resolution: DEFAULT_FRAME_RESOLUTION,
            radial: false,
            radial_array: RadialArray::default(),
            wave: WaveShape::default(),
        }
    }
}

impl CutterParameters {
    /// Creates default parameters for the given profile.
    pub fn new(profile: Profile) -> Self {
        Self::default().with_profile(profile)
    }

    /// Sets the profile. Choosing [`Profile::Rectangle`] clears `frame_curved`.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        if profile == Profile::Rectangle {
            self.frame_curved = false;
        }
        self
    }

    /// Sets the full cutter size `(width, thickness, height)`.
    pub fn with_size(mut self, size: DVec3) -> Self {
        self.size = size;
        self
    }

    /// Sets the profile segment count (at least three).
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution.max(MIN_RESOLUTION);
        self
    }

    /// Enables or disables the frame variant.
    pub fn with_frame(mut self, frame: bool) -> Self {
        self.frame = frame;
        self
    }

    /// Sets the frame size.
    pub fn with_frame_size(mut self, frame_size: f64) -> Self {
        self.frame_size = frame_size;
        self
    }

    /// Selects a curved frame cross-section. Ignored for rectangles.
    pub fn with_frame_curved(mut self, frame_curved: bool) -> Self {
        self.frame_curved = frame_curved && self.profile != Profile::Rectangle;
        self
    }

    /// Sets the curved frame cross-section segment count (at least three).
    pub fn with_frame_resolution(mut self, frame_resolution: u32) -> Self {
        self.frame_resolution = frame_resolution.max(MIN_RESOLUTION);
        self
    }

    /// Enables or disables radial duplication.
    pub fn with_radial(mut self, radial: bool) -> Self {
        self.radial = radial;
        self
    }

    /// Sets the radial duplicator settings.
    pub fn with_radial_array(mut self, radial_array: RadialArray) -> Self {
        self.radial_array = radial_array.clamped();
        self
    }

    /// Sets the wave shape (wave profile only).
    pub fn with_wave(mut self, wave: WaveShape) -> Self {
        self.wave = wave;
        self
    }

    /// Profile family.
    #[inline]
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Full cutter size.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.size
    }

    /// Profile segment count. Unused by rectangles.
    #[inline]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Whether the frame variant is selected.
    #[inline]
    pub fn frame(&self) -> bool {
        self.frame
    }

    /// Frame size.
    #[inline]
    pub fn frame_size(&self) -> f64 {
        self.frame_size
    }

    /// Whether the frame cross-section is curved.
    #[inline]
    pub fn frame_curved(&self) -> bool {
        self.frame_curved
    }

    /// Curved frame cross-section segment count.
    #[inline]
    pub fn frame_resolution(&self) -> u32 {
        self.frame_resolution
    }

    /// Whether radial duplication is enabled.
    #[inline]
    pub fn radial(&self) -> bool {
        self.radial
    }

    /// Radial duplicator settings.
    #[inline]
    pub fn radial_array(&self) -> &RadialArray {
        &self.radial_array
    }

    /// Wave shape.
    #[inline]
    pub fn wave(&self) -> &WaveShape {
        &self.wave
    }

    /// Half of the cutter size along each axis.
    #[inline]
    pub fn half_extents(&self) -> DVec3 {
        self.size * 0.5
    }

    /// Half-width of the frame.
    ///
    /// Rectangles use half the frame size; ellipses and waves use a quarter,
    /// since their frame cross-section is measured as a radius.
    pub fn frame_half_width(&self) -> f64 {
        match self.profile {
            Profile::Rectangle => self.frame_size / 2.0,
            Profile::Ellipse | Profile::Wave => self.frame_size / 4.0,
        }
    }

    /// Checks every floating-point field against its domain.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> MeshResult<()> {
        if !self.size.is_finite() || self.size.min_element() < MIN_DIMENSION {
            return Err(MeshError::invalid_parameter(
                "size",
                format!("all components must be at least {}, got {:?}", MIN_DIMENSION, self.size),
            ));
        }

        if !self.frame_size.is_finite() || self.frame_size < MIN_DIMENSION {
            return Err(MeshError::invalid_parameter(
                "frame_size",
                format!("must be at least {}, got {}", MIN_DIMENSION, self.frame_size),
            ));
        }

        let radial = &self.radial_array;
        for (field, value) in [
            ("radial_angle", radial.angle),
            ("radial_radius", radial.radius),
            ("radial_offset", radial.offset),
            ("wave_frequency", self.wave.frequency),
            ("wave_phase", self.wave.phase),
        ] {
            if !value.is_finite() {
                return Err(MeshError::invalid_parameter(
                    field,
                    format!("must be finite, got {}", value),
                ));
            }
        }

        if !self.wave.amplitude.is_finite() || self.wave.amplitude < 0.0 {
            return Err(MeshError::invalid_parameter(
                "wave_amplitude",
                format!("must be non-negative and finite, got {}", self.wave.amplitude),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// DESERIALIZATION
// =============================================================================

/// Wire shape of [`CutterParameters`]; routed through the setters so that
/// persisted values obey the same clamping and rectangle rule.
#[derive(Deserialize)]
#[serde(default)]
struct ParameterFields {
    profile: Profile,
    size: DVec3,
    resolution: u32,
    frame: bool,
    frame_size: f64,
    frame_curved: bool,
    frame_resolution: u32,
    radial: bool,
    radial_array: RadialArray,
    wave: WaveShape,
}

impl Default for ParameterFields {
    fn default() -> Self {
        let p = CutterParameters::default();
        Self {
            profile: p.profile,
            size: p.size,
            resolution: p.resolution,
            frame: p.frame,
            frame_size: p.frame_size,
            frame_curved: p.frame_curved,
            frame_resolution: p.frame_resolution,
            radial: p.radial,
            radial_array: p.radial_array,
            wave: p.wave,
        }
    }
}

impl From<ParameterFields> for CutterParameters {
    fn from(fields: ParameterFields) -> Self {
        CutterParameters::new(fields.profile)
            .with_size(fields.size)
            .with_resolution(fields.resolution)
            .with_frame(fields.frame)
            .with_frame_size(fields.frame_size)
            .with_frame_curved(fields.frame_curved)
            .with_frame_resolution(fields.frame_resolution)
            .with_radial(fields.radial)
            .with_radial_array(fields.radial_array)
            .with_wave(fields.wave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config() {
        let params = CutterParameters::default();
        assert_eq!(params.profile(), Profile::Ellipse);
        assert_eq!(params.size(), DVec3::new(2.5, 0.1, 2.5));
        assert_eq!(params.resolution(), 4);
        assert_eq!(params.frame_resolution(), 12);
        assert_eq!(params.radial_array().steps(), 2);
        assert_eq!(params.radial_array().axis(), RadialAxis::Y);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_rectangle_clears_frame_curved() {
        let params = CutterParameters::new(Profile::Ellipse)
            .with_frame_curved(true)
            .with_profile(Profile::Rectangle);
        assert!(!params.frame_curved());
    }

    #[test]
    fn test_rectangle_ignores_frame_curved() {
        let params = CutterParameters::new(Profile::Rectangle).with_frame_curved(true);
        assert!(!params.frame_curved());
    }

    #[test]
    fn test_counts_are_clamped() {
        let params = CutterParameters::default()
            .with_resolution(0)
            .with_frame_resolution(2)
            .with_radial_array(RadialArray::default().with_steps(0));
        assert_eq!(params.resolution(), 3);
        assert_eq!(params.frame_resolution(), 3);
        assert_eq!(params.radial_array().steps(), 1);
    }

    #[test]
    fn test_frame_half_width_convention() {
        let rect = CutterParameters::new(Profile::Rectangle).with_frame_size(0.4);
        let elli = CutterParameters::new(Profile::Ellipse).with_frame_size(0.4);
        let wave = CutterParameters::new(Profile::Wave).with_frame_size(0.4);
        assert_eq!(rect.frame_half_width(), 0.2);
        assert_eq!(elli.frame_half_width(), 0.1);
        assert_eq!(wave.frame_half_width(), 0.1);
    }

    #[test]
    fn test_validate_rejects_non_positive_size() {
        let params = CutterParameters::default().with_size(DVec3::new(1.0, -0.1, 1.0));
        let err = params.validate().unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter { field: "size", .. }));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let params = CutterParameters::default()
            .with_radial_array(RadialArray::default().with_angle(f64::NAN));
        let err = params.validate().unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter { field: "radial_angle", .. }));
    }

    #[test]
    fn test_validate_rejects_negative_amplitude() {
        let params = CutterParameters::new(Profile::Wave).with_wave(WaveShape {
            amplitude: -1.0,
            ..WaveShape::default()
        });
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_frame_size() {
        let params = CutterParameters::default().with_frame_size(0.0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_deserialize_applies_clamping_and_rectangle_rule() {
        let json = r#"{
            "profile": "Rectangle",
            "frame_curved": true,
            "resolution": 1,
            "radial_array": { "steps": 0 }
        }"#;
        let params: CutterParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.profile(), Profile::Rectangle);
        assert!(!params.frame_curved());
        assert_eq!(params.resolution(), 3);
        assert_eq!(params.radial_array().steps(), 1);
        assert_eq!(params.size(), DVec3::new(2.5, 0.1, 2.5));
    }

    #[test]
    fn test_serde_round_trip() {
        let params = CutterParameters::new(Profile::Wave)
            .with_frame(true)
            .with_frame_curved(true)
            .with_radial(true)
            .with_radial_array(RadialArray::default().with_axis(RadialAxis::X).with_steps(5));
        let json = serde_json::to_string(&params).unwrap();
        let back: CutterParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
