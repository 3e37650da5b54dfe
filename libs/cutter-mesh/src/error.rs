//! # Mesh Errors
//!
//! Error types for cutter mesh generation.
//!
//! ## Error Policy
//!
//! - Parameters are checked once, before any geometry is produced
//! - Geometry that would turn into NaNs is reported, never emitted
//! - A failed generation returns no partial mesh

use thiserror::Error;

/// Result type alias for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur during cutter mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A parameter lies outside its documented domain
    #[error("Invalid parameter `{field}`: {message}")]
    InvalidParameter {
        /// Name of the offending parameter
        field: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// Degenerate geometry, e.g. a zero-length sweep tangent
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// Description of the degeneracy
        message: String,
    },

    /// A stitcher referenced a vertex the shell does not contain
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// Description of the broken reference
        message: String,
    },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}
