//! # Shells
//!
//! One complete instance of a cutter solid before radial duplication, and
//! the per-kind generators and stitchers that build it.

use glam::DVec3;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::params::CutterParameters;
use crate::profile::{
    ellipse_frame_ring, ellipse_ring, rectangle_frame_ring, rectangle_ring,
    square_frame_section, sweep_ring_along_path, wave_outline, wave_path, Ring,
};
use crate::radial::Placement;
use crate::stitch::{self, Faces};

/// Inputs derived once per generation call and shared by every generator.
#[derive(Debug, Clone, Copy)]
pub struct ShellContext<'a> {
    /// Parameters of the call
    pub params: &'a CutterParameters,
    /// Half of the cutter size
    pub half: DVec3,
    /// Frame half-width for the profile family
    pub frame_half_width: f64,
}

impl<'a> ShellContext<'a> {
    /// Derives the working half-extents and frame half-width.
    pub fn new(params: &'a CutterParameters) -> Self {
        Self {
            params,
            half: params.half_extents(),
            frame_half_width: params.frame_half_width(),
        }
    }

    fn resolution(&self) -> u32 {
        self.params.resolution()
    }

    fn frame_resolution(&self) -> u32 {
        self.params.frame_resolution()
    }

    fn flip(&self) -> bool {
        self.params.wave().flip
    }
}

/// Produces the vertices of a shell, in the order its stitcher expects.
pub type Generator = fn(&ShellContext<'_>) -> MeshResult<Vec<DVec3>>;

/// Produces the faces of a shell as local indices.
pub type Stitcher = fn(&ShellContext<'_>) -> Faces;

/// Vertices plus faces of a single shell.
#[derive(Debug, Clone, PartialEq)]
pub struct Shell {
    /// Shell-local vertex positions
    pub vertices: Vec<DVec3>,
    /// Faces indexing into `vertices`
    pub faces: Faces,
}

impl Shell {
    /// Runs a generator and a stitcher and checks that they agree.
    ///
    /// # Errors
    ///
    /// Propagates generator errors and returns [`MeshError::InvalidTopology`]
    /// when a face has fewer than three corners or indexes past the
    /// generated vertices.
    pub fn build(
        ctx: &ShellContext<'_>,
        generator: Generator,
        stitcher: Stitcher,
    ) -> MeshResult<Self> {
        let vertices = generator(ctx)?;
        let faces = stitcher(ctx);
        let count = vertices.len() as u32;

        for (index, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(MeshError::invalid_topology(format!(
                    "face {} has {} corners",
                    index,
                    face.len()
                )));
            }
            if let Some(&bad) = face.iter().find(|&&i| i >= count) {
                return Err(MeshError::invalid_topology(format!(
                    "face {} references vertex {} of {}",
                    index, bad, count
                )));
            }
        }

        Ok(Self { vertices, faces })
    }

    /// Appends the shell to `mesh`, optionally moved by a placement.
    ///
    /// Faces are offset past the vertices already in the mesh.
    pub fn append_to(&self, mesh: &mut Mesh, placement: Option<&Placement>) {
        let base = match placement {
            Some(p) => mesh.extend_vertices(self.vertices.iter().map(|v| p.apply(*v))),
            None => mesh.extend_vertices(self.vertices.iter().copied()),
        };
        for face in &self.faces {
            mesh.add_face(face.iter().map(|i| i + base).collect());
        }
    }
}

// =============================================================================
// WAVE ORIENTATION
// =============================================================================

/// Quarter turn about +Y applied to flipped waves.
#[inline]
fn flip_quarter_turn(p: DVec3) -> DVec3 {
    DVec3::new(p.z, p.y, -p.x)
}

/// Half turn producing the second rail: about X, or about Z once flipped.
#[inline]
fn rail_half_turn(p: DVec3, flipped: bool) -> DVec3 {
    if flipped {
        DVec3::new(-p.x, -p.y, p.z)
    } else {
        DVec3::new(p.x, -p.y, -p.z)
    }
}

/// Stacks a closed ring at `-y` and `+y`.
fn extrude_y(ring: &Ring, half_thickness: f64) -> Vec<DVec3> {
    let dy = DVec3::new(0.0, half_thickness, 0.0);
    let mut out = ring.translated(-dy).into_points();
    out.extend(ring.translated(dy).into_points());
    out
}

// =============================================================================
// GENERATORS
// =============================================================================

pub(crate) fn box_vertices(ctx: &ShellContext<'_>) -> MeshResult<Vec<DVec3>> {
    Ok(rectangle_ring(ctx.half).to_vec())
}

pub(crate) fn box_frame_vertices(ctx: &ShellContext<'_>) -> MeshResult<Vec<DVec3>> {
    Ok(rectangle_frame_ring(ctx.half, ctx.frame_half_width).to_vec())
}

pub(crate) fn cylinder_vertices(ctx: &ShellContext<'_>) -> MeshResult<Vec<DVec3>> {
    let radii = DVec3::new(ctx.half.x, 0.0, ctx.half.z);
    let ring = ellipse_ring(radii, ctx.resolution());
    Ok(extrude_y(&ring, ctx.half.y))
}

/// Closed elliptic path running through the middle of the frame.
fn frame_path(ctx: &ShellContext<'_>) -> Ring {
    let f = ctx.frame_half_width;
    ellipse_ring(
        DVec3::new(ctx.half.x + f, 0.0, ctx.half.z + f),
        ctx.resolution(),
    )
}

fn round_section(ctx: &ShellContext<'_>) -> Ring {
    ellipse_frame_ring(
        DVec3::new(0.0, ctx.half.y, ctx.frame_half_width),
        ctx.frame_resolution(),
    )
}

pub(crate) fn cylinder_frame_vertices(ctx: &ShellContext<'_>) -> MeshResult<Vec<DVec3>> {
    let section = square_frame_section(ctx.half.y, ctx.frame_half_width);
    sweep_ring_along_path(&frame_path(ctx), &section)
}

pub(crate) fn torus_vertices(ctx: &ShellContext<'_>) -> MeshResult<Vec<DVec3>> {
    sweep_ring_along_path(&frame_path(ctx), &round_section(ctx))
}

pub(crate) fn wave_wall_vertices(ctx: &ShellContext<'_>) -> MeshResult<Vec<DVec3>> {
    let path = wave_path(ctx.half, ctx.resolution(), ctx.params.wave());
    let mut vertices = extrude_y(&wave_outline(&path), ctx.half.y);
    if ctx.flip() {
        vertices.iter_mut().for_each(|v| *v = flip_quarter_turn(*v));
    }
    Ok(vertices)
}

/// Sweeps `section` along the raised wave path and mirrors the result
/// into a second rail.
fn wave_rail_vertices(ctx: &ShellContext<'_>, section: &Ring) -> MeshResult<Vec<DVec3>> {
    let raised = DVec3::new(ctx.half.x, ctx.half.y, ctx.half.z + ctx.frame_half_width);
    let path = wave_path(raised, ctx.resolution(), ctx.params.wave());

    let flipped = ctx.flip();
    let mut upper = sweep_ring_along_path(&path, section)?;
    if flipped {
        upper.iter_mut().for_each(|v| *v = flip_quarter_turn(*v));
    }

    let lower: Vec<DVec3> = upper.iter().map(|v| rail_half_turn(*v, flipped)).collect();
    upper.extend(lower);
    Ok(upper)
}

pub(crate) fn wave_rails_vertices(ctx: &ShellContext<'_>) -> MeshResult<Vec<DVec3>> {
    let section = square_frame_section(ctx.half.y, ctx.frame_half_width);
    wave_rail_vertices(ctx, &section)
}

pub(crate) fn wave_tubes_vertices(ctx: &ShellContext<'_>) -> MeshResult<Vec<DVec3>> {
    wave_rail_vertices(ctx, &round_section(ctx))
}

// =============================================================================
// STITCHERS
// =============================================================================

pub(crate) fn box_stitch(_: &ShellContext<'_>) -> Faces {
    stitch::box_faces()
}

pub(crate) fn box_frame_stitch(_: &ShellContext<'_>) -> Faces {
    stitch::box_frame_faces()
}

pub(crate) fn cylinder_stitch(ctx: &ShellContext<'_>) -> Faces {
    stitch::cylinder_faces(ctx.resolution())
}

pub(crate) fn cylinder_frame_stitch(ctx: &ShellContext<'_>) -> Faces {
    stitch::cylinder_frame_faces(ctx.resolution())
}

pub(crate) fn torus_stitch(ctx: &ShellContext<'_>) -> Faces {
    stitch::torus_faces(ctx.resolution(), ctx.frame_resolution())
}

pub(crate) fn wave_wall_stitch(ctx: &ShellContext<'_>) -> Faces {
    stitch::wave_wall_faces(2 * (ctx.resolution() + 1))
}

/// Two copies of the rail stitch, the second offset past the first rail.
fn twin_rails(section_len: u32, path_len: u32) -> Faces {
    let rail = stitch::wave_tube_faces(section_len, path_len);
    let offset = section_len * path_len;
    let mirrored: Faces = rail
        .iter()
        .map(|face| face.iter().map(|i| i + offset).collect())
        .collect();
    let mut faces = rail;
    faces.extend(mirrored);
    faces
}

pub(crate) fn wave_rails_stitch(ctx: &ShellContext<'_>) -> Faces {
    twin_rails(4, ctx.resolution() + 1)
}

pub(crate) fn wave_tubes_stitch(ctx: &ShellContext<'_>) -> Faces {
    twin_rails(ctx.frame_resolution(), ctx.resolution() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Profile, WaveShape};

    #[test]
    fn test_build_rejects_out_of_range_index() {
        let params = CutterParameters::new(Profile::Rectangle);
        let ctx = ShellContext::new(&params);
        let err = Shell::build(&ctx, box_vertices, |_| vec![vec![0, 1, 8]]).unwrap_err();
        assert!(matches!(err, MeshError::InvalidTopology { .. }));
    }

    #[test]
    fn test_build_rejects_degenerate_face() {
        let params = CutterParameters::new(Profile::Rectangle);
        let ctx = ShellContext::new(&params);
        assert!(Shell::build(&ctx, box_vertices, |_| vec![vec![0, 1]]).is_err());
    }

    #[test]
    fn test_append_offsets_indices() {
        let params = CutterParameters::new(Profile::Rectangle);
        let ctx = ShellContext::new(&params);
        let shell = Shell::build(&ctx, box_vertices, box_stitch).unwrap();

        let mut mesh = Mesh::new();
        shell.append_to(&mut mesh, None);
        shell.append_to(&mut mesh, None);
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.face(6).indices(), &[8, 12, 13, 9]);
    }

    #[test]
    fn test_flip_is_quarter_turn_about_y() {
        assert_eq!(flip_quarter_turn(DVec3::X), DVec3::new(0.0, 0.0, -1.0));
        assert_eq!(flip_quarter_turn(DVec3::Z), DVec3::X);
        assert_eq!(flip_quarter_turn(DVec3::Y), DVec3::Y);
    }

    #[test]
    fn test_wave_rails_are_mirror_images() {
        let params = CutterParameters::new(Profile::Wave)
            .with_frame(true)
            .with_resolution(6);
        let ctx = ShellContext::new(&params);
        let vertices = wave_rails_vertices(&ctx).unwrap();
        let half = vertices.len() / 2;
        assert_eq!(half, 4 * 7);
        for (a, b) in vertices[..half].iter().zip(&vertices[half..]) {
            assert_eq!(*b, DVec3::new(a.x, -a.y, -a.z));
        }
    }

    #[test]
    fn test_flipped_wave_rails_mirror_about_z() {
        let params = CutterParameters::new(Profile::Wave)
            .with_frame(true)
            .with_wave(WaveShape {
                flip: true,
                ..WaveShape::default()
            });
        let ctx = ShellContext::new(&params);
        let vertices = wave_rails_vertices(&ctx).unwrap();
        let half = vertices.len() / 2;
        for (a, b) in vertices[..half].iter().zip(&vertices[half..]) {
            assert_eq!(*b, DVec3::new(-a.x, -a.y, a.z));
        }
    }

    #[test]
    fn test_frame_section_follows_ellipse_tangent() {
        let params = CutterParameters::new(Profile::Ellipse)
            .with_size(DVec3::new(4.0, 0.2, 2.0))
            .with_frame(true)
            .with_resolution(8);
        let ctx = ShellContext::new(&params);
        let f = ctx.frame_half_width;
        let (a, b) = (ctx.half.x + f, ctx.half.z + f);
        let origin = frame_path(&ctx).points()[1];
        let vertices = cylinder_frame_vertices(&ctx).unwrap();

        // neighbours at 0 and 90 degrees give the chord direction (-a, 0, b)
        let tangent = DVec3::new(-a, 0.0, b).normalize();
        let side = DVec3::new(-tangent.z, 0.0, tangent.x);
        for v in &vertices[4..8] {
            assert!((*v - origin).dot(tangent).abs() < 1e-12);
        }
        let expected = origin + DVec3::new(0.0, ctx.half.y, 0.0) + side * f;
        assert!(vertices[5].abs_diff_eq(expected, 1e-12));

        // not the parametric radius direction at 45 degrees
        let radial = DVec3::new(1.0, 0.0, 1.0).normalize();
        assert!(side.cross(radial).length() > 0.1);
    }

    #[test]
    fn test_frame_path_uses_frame_half_width() {
        let params = CutterParameters::new(Profile::Ellipse)
            .with_size(DVec3::new(2.0, 0.2, 4.0))
            .with_frame_size(0.4);
        let ctx = ShellContext::new(&params);
        let path = frame_path(&ctx);
        assert!(path.points()[0].abs_diff_eq(DVec3::new(1.1, 0.0, 0.0), 1e-12));
        assert!(path.points()[1].abs_diff_eq(DVec3::new(0.0, 0.0, 2.1), 1e-12));
    }
}
