//! Mesh validation and reporting.

use std::collections::HashMap;

use glam::DVec3;
use tracing::{debug, warn};

use crate::mesh::Mesh;

/// Validation report for a generated mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshReport {
    /// Total vertex count.
    pub vertex_count: usize,

    /// Total face count.
    pub face_count: usize,

    /// Number of boundary edges (edges used by one face).
    pub boundary_edge_count: usize,

    /// Number of non-manifold edges (edges used by more than two faces).
    pub non_manifold_edge_count: usize,

    /// Number of edges whose two faces traverse them in the same direction.
    pub inconsistent_edge_count: usize,

    /// Number of vertices no face references.
    pub unreferenced_vertex_count: usize,

    /// Bounding box as (min_corner, max_corner).
    pub bounds: Option<(DVec3, DVec3)>,

    /// Enclosed volume; positive when the faces wind outward.
    pub signed_volume: f64,
}

impl MeshReport {
    /// Whether every edge is shared by exactly two faces.
    pub fn is_closed(&self) -> bool {
        self.boundary_edge_count == 0 && self.non_manifold_edge_count == 0
    }

    /// Whether neighbouring faces agree on orientation.
    pub fn is_consistently_wound(&self) -> bool {
        self.inconsistent_edge_count == 0
    }

    /// Whether the mesh is a closed, outward-wound solid without stray
    /// vertices, the form the boolean stage expects.
    pub fn is_solid(&self) -> bool {
        self.is_closed()
            && self.is_consistently_wound()
            && self.unreferenced_vertex_count == 0
            && self.signed_volume > 0.0
    }
}

impl std::fmt::Display for MeshReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Mesh Report:")?;
        writeln!(f, "  Vertices: {}", self.vertex_count)?;
        writeln!(f, "  Faces: {}", self.face_count)?;

        if let Some((min, max)) = &self.bounds {
            writeln!(
                f,
                "  Bounds: [{:.3}, {:.3}, {:.3}] to [{:.3}, {:.3}, {:.3}]",
                min.x, min.y, min.z, max.x, max.y, max.z
            )?;
        }

        writeln!(
            f,
            "  Closed: {} (boundary edges: {}, non-manifold edges: {})",
            if self.is_closed() { "yes" } else { "NO" },
            self.boundary_edge_count,
            self.non_manifold_edge_count
        )?;
        writeln!(
            f,
            "  Winding: {} (inconsistent edges: {})",
            if self.is_consistently_wound() { "consistent" } else { "MIXED" },
            self.inconsistent_edge_count
        )?;
        writeln!(f, "  Unreferenced vertices: {}", self.unreferenced_vertex_count)?;
        writeln!(f, "  Signed volume: {:.6}", self.signed_volume)?;

        Ok(())
    }
}

/// Use counts of one undirected edge, split by traversal direction.
#[derive(Default)]
struct EdgeUse {
    forward: usize,
    backward: usize,
}

/// Validate a mesh and return a report.
///
/// Faces with out-of-range indices should be caught by
/// [`Mesh::validate`] first; they are skipped here.
pub fn validate_mesh(mesh: &Mesh) -> MeshReport {
    let vertex_count = mesh.vertex_count();
    let mut edges: HashMap<(u32, u32), EdgeUse> = HashMap::new();
    let mut referenced = vec![false; vertex_count];

    for face in mesh.faces() {
        if face.indices().iter().any(|&i| i as usize >= vertex_count) {
            continue;
        }
        for &i in face.indices() {
            referenced[i as usize] = true;
        }
        for (a, b) in face.edges() {
            let entry = edges.entry((a.min(b), a.max(b))).or_default();
            if a < b {
                entry.forward += 1;
            } else {
                entry.backward += 1;
            }
        }
    }

    let mut boundary_edge_count = 0;
    let mut non_manifold_edge_count = 0;
    let mut inconsistent_edge_count = 0;
    for used in edges.values() {
        match used.forward + used.backward {
            1 => boundary_edge_count += 1,
            2 if used.forward != 1 => inconsistent_edge_count += 1,
            2 => {}
            _ => non_manifold_edge_count += 1,
        }
    }

    let report = MeshReport {
        vertex_count,
        face_count: mesh.face_count(),
        boundary_edge_count,
        non_manifold_edge_count,
        inconsistent_edge_count,
        unreferenced_vertex_count: referenced.iter().filter(|r| !**r).count(),
        bounds: (!mesh.is_empty()).then(|| mesh.bounding_box()),
        signed_volume: signed_volume(mesh),
    };

    if !report.is_closed() {
        warn!(
            "Mesh is not closed: {} boundary edges, {} non-manifold edges",
            boundary_edge_count, non_manifold_edge_count
        );
    }

    if !report.is_consistently_wound() {
        warn!(
            "Mesh winding is inconsistent: {} edges",
            inconsistent_edge_count
        );
    }

    debug!("{}", report);

    report
}

/// Computes the signed volume enclosed by the faces.
///
/// Sums the signed tetrahedra from the origin to each triangle of a fan
/// triangulation; faces referencing missing vertices are ignored.
pub fn signed_volume(mesh: &Mesh) -> f64 {
    let vertices = mesh.vertices();
    mesh.triangulate()
        .iter()
        .filter_map(|&[a, b, c]| {
            Some((
                *vertices.get(a as usize)?,
                *vertices.get(b as usize)?,
                *vertices.get(c as usize)?,
            ))
        })
        .map(|(a, b, c)| a.dot(b.cross(c)) / 6.0)
        .sum()
}
