//! # Config Crate
//!
//! Centralized configuration constants for the cutter mesh pipeline.
//! Every default value, clamping floor and numeric tolerance used by the
//! generator and the modifier-stack planner is defined here so the two
//! library crates never disagree about a literal.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_RESOLUTION, MIN_RESOLUTION};
//!
//! // Profile segment counts are clamped at the parameter level
//! let requested: u32 = 1;
//! let resolution = requested.max(MIN_RESOLUTION);
//! assert_eq!(resolution, 3);
//! assert!(DEFAULT_RESOLUTION >= MIN_RESOLUTION);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Add-on Compatible**: Defaults match the interactive cutter tool
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
