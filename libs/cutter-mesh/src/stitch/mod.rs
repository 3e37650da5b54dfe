//! # Topology Stitchers
//!
//! Face lists by pure index arithmetic over a documented vertex order.
//! Indices are local to one shell; assembly offsets them.
//!
//! ## Vertex Orders
//!
//! - **Prism**: a closed ring of `n` points at `-y`, then the same ring at `+y`
//! - **Loop tube**: `rings` copies of an `L`-point cross-section, path-major,
//!   along a closed path
//! - **Open tube**: the same along an open path
//! - **Wall**: a closed `L`-point outline at `-y`, then the same at `+y`

/// Face list of one shell: polygons as local vertex indices.
pub type Faces = Vec<Vec<u32>>;

// =============================================================================
// BUILDING BLOCKS
// =============================================================================

/// Stitches a prism: `n` side quads plus both caps.
///
/// Side `i` is `(i, i+n, (i+1)%n + n, (i+1)%n)`; the bottom cap walks the
/// first ring forwards and the top cap walks the second ring backwards.
pub fn prism_faces(n: u32) -> Faces {
    let mut faces = Vec::with_capacity(n as usize + 2);
    for i in 0..n {
        let j = (i + 1) % n;
        faces.push(vec![i, i + n, j + n, j]);
    }
    faces.push((0..n).collect());
    faces.push((n..2 * n).rev().collect());
    faces
}

/// Stitches cross-sections threaded along a closed path into a torus-like
/// tube with no caps.
pub fn loop_tube_faces(section_len: u32, rings: u32) -> Faces {
    let mut faces = Vec::with_capacity((section_len * rings) as usize);
    for k in 0..rings {
        bridge_rings(&mut faces, section_len, k, (k + 1) % rings);
    }
    faces
}

/// Stitches cross-sections threaded along an open path into a tube capped
/// at both ends.
pub fn open_tube_faces(section_len: u32, rings: u32) -> Faces {
    let l = section_len;
    let mut faces = Vec::with_capacity((l * rings.saturating_sub(1)) as usize + 2);
    for k in 0..rings.saturating_sub(1) {
        bridge_rings(&mut faces, l, k, k + 1);
    }
    faces.push((0..l).rev().collect());
    let last = rings.saturating_sub(1) * l;
    faces.push((last..last + l).collect());
    faces
}

/// Stitches a flat wall between two copies of a closed outline.
///
/// The outline's seam quad (last point back to first) is emitted after the
/// others, followed by the `-y` cap and the `+y` cap.
pub fn wall_faces(outline_len: u32) -> Faces {
    let l = outline_len;
    let mut faces = Vec::with_capacity(l as usize + 2);
    for i in 0..l - 1 {
        faces.push(vec![i + 1, i + l + 1, i + l, i]);
    }
    faces.push(vec![2 * l - 1, l - 1, 0, l]);
    faces.push((0..l).rev().collect());
    faces.push((l..2 * l).collect());
    faces
}

/// Emits one quad per section edge between rings `k` and `next`.
fn bridge_rings(faces: &mut Faces, section_len: u32, k: u32, next: u32) {
    let l = section_len;
    for j in 0..l {
        let jn = (j + 1) % l;
        faces.push(vec![k * l + j, k * l + jn, next * l + jn, next * l + j]);
    }
}

// =============================================================================
// SHELL STITCHERS
// =============================================================================

/// Six quads closing the 8 corners of a box.
pub fn box_faces() -> Faces {
    prism_faces(4)
}

/// Sixteen quads forming a rectangular picture frame from four corner
/// cross-sections.
pub fn box_frame_faces() -> Faces {
    loop_tube_faces(4, 4)
}

/// Side quads and two caps closing an extruded ellipse of `res` points.
pub fn cylinder_faces(res: u32) -> Faces {
    prism_faces(res)
}

/// Quads of a square-section ring swept around an ellipse of `res` points.
pub fn cylinder_frame_faces(res: u32) -> Faces {
    loop_tube_faces(4, res)
}

/// Quads of a round-section ring of `frame_res` points swept around an
/// ellipse of `res` points.
pub fn torus_faces(res: u32, frame_res: u32) -> Faces {
    loop_tube_faces(frame_res, res)
}

/// Faces of a plain wave wall whose outline has `outline_len` points.
pub fn wave_wall_faces(outline_len: u32) -> Faces {
    wall_faces(outline_len)
}

/// Faces of one wave rail: a `section_len` cross-section swept along a
/// `path_len` point path, capped at both ends.
pub fn wave_tube_faces(section_len: u32, path_len: u32) -> Faces {
    open_tube_faces(section_len, path_len)
}
