//! # Cutter Stack
//!
//! Host-facing bookkeeping around [`cutter_mesh`]: per-cutter settings,
//! the modifier entries the external boolean/bevel pipeline must hold,
//! cutter placement relative to a target, and parallel regeneration.
//!
//! Nothing here executes booleans or bevels; the plans are data for a
//! pipeline that does.
//!
//! ## Usage
//!
//! ```rust
//! use cutter_mesh::{CutterParameters, Profile};
//! use cutter_stack::{CutterSettings, CutterStack};
//! use glam::DMat4;
//!
//! let mut stack = CutterStack::new();
//! let name = stack.next_name();
//! stack.add(CutterSettings::new(name).with_parameters(CutterParameters::new(Profile::Wave)))?;
//!
//! let result = stack.regenerate(&DMat4::IDENTITY)?;
//! assert_eq!(result.cutters[0].name, "Cutter_1");
//! assert_eq!(result.target_modifiers.len(), 2); // boolean + bevel
//! # Ok::<(), cutter_stack::StackError>(())
//! ```

pub mod error;
pub mod modifiers;
pub mod regenerate;
pub mod settings;
pub mod transform;

pub use error::{StackError, StackResult};
pub use modifiers::{plan_cutter_stack, plan_target_stack, Modifier, ModifierKind, ModifierStack};
pub use regenerate::{CutterOutput, CutterStack, Regeneration};
pub use settings::{
    ArrayModifierSpec, BevelSettings, BooleanOperation, CutterPlacement, CutterSettings,
};
pub use transform::cutter_world_transform;
