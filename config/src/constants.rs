//! # Configuration Constants
//!
//! Centralized constants for the cutter pipeline. Parameter defaults,
//! clamping floors, modifier defaults and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Cutter Defaults**: Initial values of a freshly created cutter
//! - **Limits**: Floors applied when parameters are set
//! - **Modifiers**: Defaults for the array, bevel and boolean stack entries

use std::f64::consts::{FRAC_PI_2, PI};

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used by the path sweep to detect zero-length tangents and by tests
/// comparing generated coordinates.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-9;

/// Smallest accepted cutter dimension (size components and frame size).
///
/// Matches the lower bound the interactive tool enforces on its size fields.
pub const MIN_DIMENSION: f64 = 1e-4;

// =============================================================================
// CUTTER DEFAULTS
// =============================================================================

/// Default cutter size `(width, thickness, height)`.
///
/// The generator convention puts the long axis on X, the thickness on Y
/// and the height on Z.
pub const DEFAULT_CUTTER_SIZE: [f64; 3] = [2.5, 0.1, 2.5];

/// Default profile segment count for ellipse and wave profiles.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_RESOLUTION;
///
/// let user_resolution: Option<u32> = None;
/// assert_eq!(user_resolution.unwrap_or(DEFAULT_RESOLUTION), 4);
/// ```
pub const DEFAULT_RESOLUTION: u32 = 4;

/// Default frame size (frame diameter).
pub const DEFAULT_FRAME_SIZE: f64 = 0.1;

/// Default segment count of a curved frame cross-section.
pub const DEFAULT_FRAME_RESOLUTION: u32 = 12;

/// Default number of radial copies.
pub const DEFAULT_RADIAL_STEPS: u32 = 2;

/// Default angle between consecutive radial copies (radians).
pub const DEFAULT_RADIAL_ANGLE: f64 = FRAC_PI_2;

/// Default distance of radial copies from the radial axis.
pub const DEFAULT_RADIAL_RADIUS: f64 = 0.5;

/// Default displacement of radial copies along the radial axis.
pub const DEFAULT_RADIAL_OFFSET: f64 = 0.0;

/// Default wave frequency (full periods across the cutter width).
pub const DEFAULT_WAVE_FREQUENCY: f64 = 0.5;

/// Default wave amplitude.
pub const DEFAULT_WAVE_AMPLITUDE: f64 = 0.2;

/// Default wave phase (radians).
pub const DEFAULT_WAVE_PHASE: f64 = 0.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum profile and frame segment count.
///
/// Anything below three cannot enclose an area.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_RESOLUTION;
///
/// let requested: u32 = 2;
/// assert_eq!(requested.max(MIN_RESOLUTION), 3);
/// ```
pub const MIN_RESOLUTION: u32 = 3;

/// Minimum number of radial copies.
pub const MIN_RADIAL_STEPS: u32 = 1;

/// Minimum linear array count. A count of one disables the array.
pub const MIN_ARRAY_COUNT: u32 = 1;

/// Minimum bevel segment count.
pub const MIN_BEVEL_SEGMENTS: u32 = 1;

// =============================================================================
// MODIFIER CONSTANTS
// =============================================================================

/// Number of linear array modifiers every cutter carries.
pub const ARRAY_MODIFIER_COUNT: usize = 2;

/// Name prefix of the linear array modifiers (`Array_1`, `Array_2`, ...).
pub const ARRAY_MODIFIER_PREFIX: &str = "Array";

/// Default constant offset of a linear array modifier.
pub const DEFAULT_ARRAY_OFFSET: [f64; 3] = [0.0, 0.3, 0.0];

/// Name of the bevel modifier on both the cutter and the target.
pub const BEVEL_MODIFIER_NAME: &str = "Bevel";

/// Default bevel segment count.
pub const DEFAULT_BEVEL_SEGMENTS: u32 = 2;

/// Default bevel profile shape in `[0, 1]`.
pub const DEFAULT_BEVEL_PROFILE: f64 = 0.5;

/// Edge angle above which the bevel modifier acts (radians).
pub const BEVEL_ANGLE_LIMIT: f64 = PI / 6.0;

/// Base name for generated cutters (`Cutter_1`, `Cutter_2`, ...).
pub const CUTTER_BASE_NAME: &str = "Cutter";

// =============================================================================
// SHADING CONSTANTS
// =============================================================================

/// Smooth shading flag applied to every face after regeneration.
pub const DEFAULT_SMOOTH_FACES: bool = true;

/// Auto-smooth normals flag applied after regeneration.
pub const DEFAULT_AUTO_SMOOTH: bool = true;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns the name of the `index`-th (zero based) linear array modifier.
///
/// # Example
///
/// ```rust
/// use config::constants::array_modifier_name;
///
/// assert_eq!(array_modifier_name(0), "Array_1");
/// assert_eq!(array_modifier_name(1), "Array_2");
/// ```
pub fn array_modifier_name(index: usize) -> String {
    format!("{}_{}", ARRAY_MODIFIER_PREFIX, index + 1)
}

/// Returns the name of the cutter with the given identifier.
///
/// # Example
///
/// ```rust
/// use config::constants::cutter_name;
///
/// assert_eq!(cutter_name(3), "Cutter_3");
/// ```
pub fn cutter_name(id: u32) -> String {
    format!("{}_{}", CUTTER_BASE_NAME, id)
}
