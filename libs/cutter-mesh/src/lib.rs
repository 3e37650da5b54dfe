//! # Cutter Mesh
//!
//! Deterministic procedural mesh generation for parametric cutter solids:
//! boxes, elliptic cylinders and wave walls, their frame (tube) variants,
//! and radial arrays of any of them.
//!
//! ## Architecture
//!
//! ```text
//! CutterParameters → variant table → generator + stitcher → Shell
//!                                                            ↓
//!                                  radial placements → Mesh (polygons)
//! ```
//!
//! ## Modules
//!
//! - **params**: Parameter set with clamping setters and validation
//! - **profile**: Point rings, wave paths and the path sweep
//! - **radial**: Rigid placements of radial copies
//! - **stitch**: Face lists by index arithmetic
//! - **variant**: The flag-tuple decision table
//! - **shading**: Uniform smooth/flat metadata pass
//! - **validate**: Closedness, winding and volume report
//!
//! ## Usage
//!
//! ```rust
//! use cutter_mesh::{apply_shading_options, generate_cutter_mesh, CutterParameters, Profile};
//!
//! let params = CutterParameters::new(Profile::Ellipse)
//!     .with_resolution(32)
//!     .with_frame(true)
//!     .with_frame_curved(true);
//! let mut mesh = generate_cutter_mesh(&params)?;
//! apply_shading_options(&mut mesh, true, true);
//! assert_eq!(mesh.vertex_count(), 32 * 12);
//! # Ok::<(), cutter_mesh::MeshError>(())
//! ```

pub mod assembly;
pub mod error;
pub mod mesh;
pub mod params;
pub mod profile;
pub mod radial;
pub mod shading;
pub mod shell;
pub mod stitch;
pub mod validate;
pub mod variant;

pub use assembly::generate_cutter_mesh;
pub use error::{MeshError, MeshResult};
pub use mesh::{Face, Mesh};
pub use params::{CutterParameters, Profile, RadialArray, RadialAxis, WaveShape};
pub use radial::{radial_placements, Placement};
pub use shading::{apply_shading_options, ShadingTarget};
pub use validate::{validate_mesh, MeshReport};
pub use variant::{select_variant, ShellKind, Variant, VARIANTS};
