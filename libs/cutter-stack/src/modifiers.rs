//! # Modifier-Stack Plans
//!
//! Pure data describing the modifier entries the external pipeline must
//! hold on a cutter and on its target. Entries are addressed by name and
//! created when missing, matching how hosts look modifiers up.

use config::constants::{BEVEL_ANGLE_LIMIT, BEVEL_MODIFIER_NAME};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::settings::{ArrayModifierSpec, BevelSettings, BooleanOperation, CutterSettings};

/// Kind of a modifier entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKind {
    /// Linear array
    Array,
    /// Edge bevel
    Bevel,
    /// Boolean against a cutter
    Boolean,
}

/// One entry of a modifier stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Modifier {
    /// Fixed-count linear array with a constant offset only
    Array {
        /// Entry name
        name: String,
        /// Number of copies
        count: u32,
        /// Constant offset between copies
        offset: DVec3,
    },
    /// Angle-limited bevel with loop slide on
    Bevel {
        /// Entry name
        name: String,
        /// Bevel width
        width: f64,
        /// Clamp overlapping bevels
        clamp_overlap: bool,
        /// Segment count
        segments: u32,
        /// Profile shape in `[0, 1]`
        profile: f64,
        /// Harden normals after beveling
        harden_normals: bool,
        /// Edge angle above which edges are beveled (radians)
        angle_limit: f64,
    },
    /// Boolean of the owning mesh with a cutter
    Boolean {
        /// Entry name
        name: String,
        /// Operation
        operation: BooleanOperation,
        /// Name of the cutter object
        cutter: String,
        /// Whether the result is shown
        show_viewport: bool,
    },
}

impl Modifier {
    /// Array entry for a linear array spec.
    pub fn array(spec: &ArrayModifierSpec) -> Self {
        Modifier::Array {
            name: spec.name().to_string(),
            count: spec.count(),
            offset: spec.offset(),
        }
    }

    /// Bevel entry named [`BEVEL_MODIFIER_NAME`].
    pub fn bevel(settings: &BevelSettings, harden_normals: bool) -> Self {
        Modifier::Bevel {
            name: BEVEL_MODIFIER_NAME.to_string(),
            width: settings.width(),
            clamp_overlap: settings.clamp_overlap(),
            segments: settings.segments(),
            profile: settings.profile(),
            harden_normals,
            angle_limit: BEVEL_ANGLE_LIMIT,
        }
    }

    /// Boolean entry named after the cutter.
    pub fn boolean(cutter: &CutterSettings) -> Self {
        Modifier::Boolean {
            name: cutter.name.clone(),
            operation: cutter.operation,
            cutter: cutter.name.clone(),
            show_viewport: cutter.show_effect,
        }
    }

    /// Entry name.
    pub fn name(&self) -> &str {
        match self {
            Modifier::Array { name, .. }
            | Modifier::Bevel { name, .. }
            | Modifier::Boolean { name, .. } => name,
        }
    }

    /// Entry kind.
    pub fn kind(&self) -> ModifierKind {
        match self {
            Modifier::Array { .. } => ModifierKind::Array,
            Modifier::Bevel { .. } => ModifierKind::Bevel,
            Modifier::Boolean { .. } => ModifierKind::Boolean,
        }
    }
}

/// Ordered modifier entries; index 0 is evaluated first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifierStack {
    modifiers: Vec<Modifier>,
}

impl ModifierStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in evaluation order.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    /// Returns true if the stack has no entries.
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// First entry with the given name.
    pub fn get(&self, name: &str) -> Option<&Modifier> {
        self.modifiers.iter().find(|m| m.name() == name)
    }

    /// Position of the entry with the given name and kind.
    pub fn position_of(&self, name: &str, kind: ModifierKind) -> Option<usize> {
        self.modifiers
            .iter()
            .position(|m| m.kind() == kind && m.name() == name)
    }

    /// Updates the entry with the same name and kind in place, or appends
    /// the modifier when there is none. Returns the entry's index.
    pub fn upsert(&mut self, modifier: Modifier) -> usize {
        match self.position_of(modifier.name(), modifier.kind()) {
            Some(index) => {
                self.modifiers[index] = modifier;
                index
            }
            None => {
                debug!("Adding {:?} modifier `{}`", modifier.kind(), modifier.name());
                self.modifiers.push(modifier);
                self.modifiers.len() - 1
            }
        }
    }

    /// Moves the entry with the given name and kind to the front. Returns
    /// false if it is missing.
    pub fn move_to_top(&mut self, name: &str, kind: ModifierKind) -> bool {
        match self.position_of(name, kind) {
            Some(index) => {
                self.modifiers[..=index].rotate_right(1);
                true
            }
            None => false,
        }
    }

    /// Moves the entry with the given name and kind to the back. Returns
    /// false if it is missing.
    pub fn move_to_bottom(&mut self, name: &str, kind: ModifierKind) -> bool {
        match self.position_of(name, kind) {
            Some(index) => {
                self.modifiers[index..].rotate_left(1);
                true
            }
            None => false,
        }
    }

    /// Removes the boolean entry with the given name. Returns false if there
    /// is none.
    pub fn remove_boolean(&mut self, name: &str) -> bool {
        match self.position_of(name, ModifierKind::Boolean) {
            Some(index) => {
                self.modifiers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Shows or hides every boolean entry at once.
    pub fn set_booleans_visible(&mut self, visible: bool) {
        for modifier in &mut self.modifiers {
            if let Modifier::Boolean { show_viewport, .. } = modifier {
                *show_viewport = visible;
            }
        }
    }
}

/// Brings a cutter's own stack in line with its settings.
///
/// Upserts every linear array, upserts the cutter bevel (normals not
/// hardened) and moves the bevel to the top.
pub fn plan_cutter_stack(stack: &mut ModifierStack, cutter: &CutterSettings) {
    for spec in &cutter.arrays {
        stack.upsert(Modifier::array(spec));
    }
    stack.upsert(Modifier::bevel(&cutter.bevel, false));
    stack.move_to_top(BEVEL_MODIFIER_NAME, ModifierKind::Bevel);
}

/// Brings the target's stack in line with one cutter.
///
/// Upserts the cutter's boolean, upserts the target bevel (normals
/// hardened) and moves the bevel to the bottom so it runs after every
/// boolean.
pub fn plan_target_stack(
    stack: &mut ModifierStack,
    cutter: &CutterSettings,
    target_bevel: &BevelSettings,
) {
    stack.upsert(Modifier::boolean(cutter));
    stack.upsert(Modifier::bevel(target_bevel, true));
    stack.move_to_bottom(BEVEL_MODIFIER_NAME, ModifierKind::Bevel);
}
