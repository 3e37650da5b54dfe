//! # Tests for Config Constants
//!
//! Unit tests verifying the consistency of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_below_min_dimension() {
    assert!(
        EPSILON < MIN_DIMENSION,
        "EPSILON must not swallow the smallest accepted dimension"
    );
}

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_size_is_positive() {
    assert!(DEFAULT_CUTTER_SIZE.iter().all(|&s| s >= MIN_DIMENSION));
}

#[test]
fn test_default_resolutions_respect_floor() {
    assert!(DEFAULT_RESOLUTION >= MIN_RESOLUTION);
    assert!(DEFAULT_FRAME_RESOLUTION >= MIN_RESOLUTION);
}

#[test]
fn test_default_radial_steps_respect_floor() {
    assert!(DEFAULT_RADIAL_STEPS >= MIN_RADIAL_STEPS);
}

#[test]
fn test_default_radial_angle_is_quarter_turn() {
    assert!((DEFAULT_RADIAL_ANGLE - std::f64::consts::FRAC_PI_2).abs() < EPSILON);
}

#[test]
fn test_default_wave_amplitude_non_negative() {
    assert!(DEFAULT_WAVE_AMPLITUDE >= 0.0);
}

#[test]
fn test_bevel_profile_in_unit_range() {
    assert!((0.0..=1.0).contains(&DEFAULT_BEVEL_PROFILE));
    assert!(DEFAULT_BEVEL_SEGMENTS >= MIN_BEVEL_SEGMENTS);
}

#[test]
fn test_bevel_angle_limit_is_thirty_degrees() {
    assert!((BEVEL_ANGLE_LIMIT.to_degrees() - 30.0).abs() < EPSILON);
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_array_modifier_names_are_one_based() {
    let names: Vec<String> = (0..ARRAY_MODIFIER_COUNT).map(array_modifier_name).collect();
    assert_eq!(names, vec!["Array_1".to_string(), "Array_2".to_string()]);
}

#[test]
fn test_cutter_name_uses_base_name() {
    assert_eq!(cutter_name(1), format!("{}_1", CUTTER_BASE_NAME));
}
