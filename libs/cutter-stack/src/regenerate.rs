//! # Cutter Stack
//!
//! The cutters attached to one target, and their batch regeneration.

use config::constants::{cutter_name, DEFAULT_AUTO_SMOOTH, DEFAULT_SMOOTH_FACES};
use cutter_mesh::{apply_shading_options, generate_cutter_mesh, Mesh};
use glam::DMat4;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{StackError, StackResult};
use crate::modifiers::{plan_cutter_stack, plan_target_stack, ModifierStack};
use crate::settings::{BevelSettings, CutterSettings};
use crate::transform::cutter_world_transform;

/// Everything the host needs to refresh one cutter.
#[derive(Debug, Clone, PartialEq)]
pub struct CutterOutput {
    /// Cutter name
    pub name: String,
    /// Freshly generated, shaded mesh in cutter-local space
    pub mesh: Mesh,
    /// Modifier entries the cutter must carry
    pub modifiers: ModifierStack,
    /// World matrix of the cutter
    pub world_transform: DMat4,
}

/// Result of regenerating a whole stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Regeneration {
    /// One output per cutter, in stack order
    pub cutters: Vec<CutterOutput>,
    /// Modifier entries the target must carry
    pub target_modifiers: ModifierStack,
}

impl Regeneration {
    /// Total vertex count over all cutters.
    pub fn vertex_count(&self) -> usize {
        self.cutters.iter().map(|c| c.mesh.vertex_count()).sum()
    }

    /// Total face count over all cutters.
    pub fn face_count(&self) -> usize {
        self.cutters.iter().map(|c| c.mesh.face_count()).sum()
    }
}

/// The cutters of one target, with unique names, plus the target's bevel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutterStack {
    target_bevel: BevelSettings,
    cutters: Vec<CutterSettings>,
}

impl Default for CutterStack {
    fn default() -> Self {
        Self {
            target_bevel: BevelSettings::target(),
            cutters: Vec::new(),
        }
    }
}

impl CutterStack {
    /// Creates an empty stack with the default target bevel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the target bevel.
    pub fn with_target_bevel(mut self, target_bevel: BevelSettings) -> Self {
        self.target_bevel = target_bevel;
        self
    }

    /// Target bevel.
    pub fn target_bevel(&self) -> &BevelSettings {
        &self.target_bevel
    }

    /// Cutters in stack order.
    pub fn cutters(&self) -> &[CutterSettings] {
        &self.cutters
    }

    /// Number of cutters.
    pub fn len(&self) -> usize {
        self.cutters.len()
    }

    /// Returns true if the stack has no cutters.
    pub fn is_empty(&self) -> bool {
        self.cutters.is_empty()
    }

    /// First free name of the form `Cutter_<n>`, counting from one.
    pub fn next_name(&self) -> String {
        (1..)
            .map(cutter_name)
            .find(|name| self.get(name).is_none())
            .unwrap_or_default()
    }

    /// Appends a cutter.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::DuplicateCutter`] if the name is taken.
    pub fn add(&mut self, cutter: CutterSettings) -> StackResult<()> {
        if self.get(&cutter.name).is_some() {
            return Err(StackError::duplicate(cutter.name));
        }
        debug!("Adding cutter `{}`", cutter.name);
        self.cutters.push(cutter);
        Ok(())
    }

    /// Removes a cutter and returns its settings.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::UnknownCutter`] if no cutter has that name.
    pub fn remove(&mut self, name: &str) -> StackResult<CutterSettings> {
        let index = self
            .cutters
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| StackError::unknown(name))?;
        debug!("Removing cutter `{}`", name);
        Ok(self.cutters.remove(index))
    }

    /// Removes a cutter together with its boolean entry on the target.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::UnknownCutter`] if no cutter has that name; the
    /// target stack is left untouched in that case.
    pub fn detach(
        &mut self,
        name: &str,
        target_modifiers: &mut ModifierStack,
    ) -> StackResult<CutterSettings> {
        let cutter = self.remove(name)?;
        target_modifiers.remove_boolean(name);
        Ok(cutter)
    }

    /// Looks up a cutter by name.
    pub fn get(&self, name: &str) -> Option<&CutterSettings> {
        self.cutters.iter().find(|c| c.name == name)
    }

    /// Looks up a cutter by name for editing.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut CutterSettings> {
        self.cutters.iter_mut().find(|c| c.name == name)
    }

    /// Generates the shaded mesh of a single cutter.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::UnknownCutter`] for a missing name and
    /// [`StackError::Mesh`] when generation fails.
    pub fn generate(&self, name: &str) -> StackResult<Mesh> {
        let cutter = self.get(name).ok_or_else(|| StackError::unknown(name))?;
        let mut mesh = generate_cutter_mesh(&cutter.parameters)?;
        apply_shading_options(&mut mesh, DEFAULT_SMOOTH_FACES, DEFAULT_AUTO_SMOOTH);
        Ok(mesh)
    }

    /// Regenerates every cutter in parallel and plans both modifier stacks.
    ///
    /// Each mesh gets the default shading pass. Outputs keep stack order.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Generation`] naming the first cutter (in stack
    /// order) whose mesh could not be generated; no partial result is kept.
    pub fn regenerate(&self, target_world: &DMat4) -> StackResult<Regeneration> {
        let results: Vec<StackResult<CutterOutput>> = self
            .cutters
            .par_iter()
            .map(|cutter| regenerate_cutter(cutter, target_world))
            .collect();
        let cutters = results.into_iter().collect::<StackResult<Vec<_>>>()?;

        let mut target_modifiers = ModifierStack::new();
        for cutter in &self.cutters {
            plan_target_stack(&mut target_modifiers, cutter, &self.target_bevel);
        }

        let regeneration = Regeneration {
            cutters,
            target_modifiers,
        };

        info!(
            "Regenerated {} cutters: {} verts, {} faces",
            regeneration.cutters.len(),
            regeneration.vertex_count(),
            regeneration.face_count()
        );

        Ok(regeneration)
    }
}

fn regenerate_cutter(cutter: &CutterSettings, target_world: &DMat4) -> StackResult<CutterOutput> {
    let mut mesh =
        generate_cutter_mesh(&cutter.parameters).map_err(|source| StackError::Generation {
            name: cutter.name.clone(),
            source,
        })?;
    apply_shading_options(&mut mesh, DEFAULT_SMOOTH_FACES, DEFAULT_AUTO_SMOOTH);

    let mut modifiers = ModifierStack::new();
    plan_cutter_stack(&mut modifiers, cutter);

    Ok(CutterOutput {
        name: cutter.name.clone(),
        mesh,
        modifiers,
        world_transform: cutter_world_transform(&cutter.placement, target_world),
    })
}
