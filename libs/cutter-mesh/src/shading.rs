//! # Shading Pass
//!
//! Uniform shading metadata for generated cutters and for the mesh they cut.

use crate::mesh::Mesh;

/// Anything that carries per-face smooth flags and a mesh-level
/// auto-smooth normals flag.
///
/// Implemented by [`Mesh`]; a host implements it for its own target mesh
/// type so both receive the same pass.
pub trait ShadingTarget {
    /// Sets the smooth flag of every face.
    fn set_all_faces_smooth(&mut self, smooth: bool);

    /// Sets the auto-smooth normals flag.
    fn set_auto_smooth(&mut self, auto_smooth: bool);
}

impl ShadingTarget for Mesh {
    fn set_all_faces_smooth(&mut self, smooth: bool) {
        for face in self.faces_mut() {
            face.set_smooth(smooth);
        }
    }

    fn set_auto_smooth(&mut self, auto_smooth: bool) {
        Mesh::set_auto_smooth(self, auto_smooth);
    }
}

/// Sets every face to `smooth_faces` and records `auto_smooth_normals`.
///
/// Metadata only; geometry is untouched.
///
/// # Example
///
/// ```rust
/// use cutter_mesh::{apply_shading_options, generate_cutter_mesh, CutterParameters};
///
/// let mut mesh = generate_cutter_mesh(&CutterParameters::default()).unwrap();
/// apply_shading_options(&mut mesh, true, true);
/// assert!(mesh.faces().iter().all(|f| f.is_smooth()));
/// assert!(mesh.auto_smooth());
/// ```
pub fn apply_shading_options<T: ShadingTarget + ?Sized>(
    target: &mut T,
    smooth_faces: bool,
    auto_smooth_normals: bool,
) {
    target.set_all_faces_smooth(smooth_faces);
    target.set_auto_smooth(auto_smooth_normals);
}
