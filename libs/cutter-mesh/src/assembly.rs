//! # Mesh Assembly
//!
//! Drives validation, variant selection, shell construction and radial
//! duplication for one generation call.

use tracing::debug;

use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::params::CutterParameters;
use crate::radial::radial_placements;
use crate::shell::ShellContext;
use crate::variant::select_variant;

/// Generates the cutter mesh for a parameter set.
///
/// The shell picked from the variant table is appended once, or once per
/// radial step with that step's placement applied. Radial copies never share
/// vertices. Identical parameters always produce identical meshes.
///
/// # Errors
///
/// - [`MeshError::InvalidParameter`](crate::MeshError::InvalidParameter)
///   when [`CutterParameters::validate`] fails
/// - [`MeshError::DegenerateGeometry`](crate::MeshError::DegenerateGeometry)
///   when a frame path cannot be swept
///
/// No partial mesh is returned on failure.
///
/// # Example
///
/// ```rust
/// use cutter_mesh::{generate_cutter_mesh, CutterParameters, Profile};
///
/// let mesh = generate_cutter_mesh(&CutterParameters::new(Profile::Rectangle)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 6);
/// ```
pub fn generate_cutter_mesh(params: &CutterParameters) -> MeshResult<Mesh> {
    params.validate()?;

    let variant = select_variant(params)?;
    let ctx = ShellContext::new(params);
    let shell = variant.kind.build(&ctx)?;

    debug!(
        "Cutter variant {:?} (profile {:?}, radial {}, frame {}, curved {}): {} verts, {} faces per shell",
        variant.kind,
        variant.profile,
        variant.radial,
        variant.frame,
        variant.frame_curved,
        shell.vertices.len(),
        shell.faces.len()
    );

    let mesh = if variant.radial {
        let placements = radial_placements(params.radial_array());
        let mut mesh = Mesh::with_capacity(
            shell.vertices.len() * placements.len(),
            shell.faces.len() * placements.len(),
        );
        for placement in &placements {
            shell.append_to(&mut mesh, Some(placement));
        }
        mesh
    } else {
        let mut mesh = Mesh::with_capacity(shell.vertices.len(), shell.faces.len());
        shell.append_to(&mut mesh, None);
        mesh
    };

    debug!(
        "Generated cutter mesh: {} verts, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use crate::params::{Profile, RadialArray};
    use glam::DVec3;

    #[test]
    fn test_invalid_parameters_rejected_before_generation() {
        let params = CutterParameters::default().with_size(DVec3::new(0.0, 1.0, 1.0));
        assert!(matches!(
            generate_cutter_mesh(&params),
            Err(MeshError::InvalidParameter { field: "size", .. })
        ));
    }

    #[test]
    fn test_rectangle_ignores_resolution() {
        let params = CutterParameters::new(Profile::Rectangle).with_resolution(64);
        let mesh = generate_cutter_mesh(&params).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
    }

    #[test]
    fn test_radial_single_step_matches_plain_shell_counts() {
        let plain = CutterParameters::new(Profile::Ellipse).with_resolution(9);
        let radial = plain
            .with_radial(true)
            .with_radial_array(RadialArray::default().with_steps(1).with_radius(0.0));
        let a = generate_cutter_mesh(&plain).unwrap();
        let b = generate_cutter_mesh(&radial).unwrap();
        assert_eq!(a.vertex_count(), b.vertex_count());
        assert_eq!(a.faces(), b.faces());
    }

    #[test]
    fn test_mesh_starts_flat_shaded() {
        let mesh = generate_cutter_mesh(&CutterParameters::default()).unwrap();
        assert!(mesh.faces().iter().all(|f| !f.is_smooth()));
        assert!(!mesh.auto_smooth());
    }
}
