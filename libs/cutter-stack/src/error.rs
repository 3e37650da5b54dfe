//! # Stack Errors
//!
//! Errors raised while editing or regenerating a cutter stack.

use cutter_mesh::MeshError;
use thiserror::Error;

/// Result type alias for stack operations.
pub type StackResult<T> = Result<T, StackError>;

/// Errors that can occur while managing a cutter stack.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StackError {
    /// Mesh generation failed
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// A cutter with this name is already in the stack
    #[error("Cutter `{name}` already exists")]
    DuplicateCutter {
        /// Name of the existing cutter
        name: String,
    },

    /// No cutter with this name is in the stack
    #[error("No cutter named `{name}`")]
    UnknownCutter {
        /// Requested name
        name: String,
    },

    /// One cutter of a batch failed to generate
    #[error("Cutter `{name}` failed to generate: {source}")]
    Generation {
        /// Name of the failing cutter
        name: String,
        /// Underlying mesh error
        #[source]
        source: MeshError,
    },
}

impl StackError {
    /// Creates a duplicate cutter error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateCutter { name: name.into() }
    }

    /// Creates an unknown cutter error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownCutter { name: name.into() }
    }
}
