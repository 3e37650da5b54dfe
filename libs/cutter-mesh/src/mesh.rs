//! # Mesh Data Structure
//!
//! Polygon mesh with vertices, faces and shading flags.

use glam::{DMat4, DVec3};

/// A single polygon: vertex indices in winding order plus its shading flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    indices: Vec<u32>,
    smooth: bool,
}

impl Face {
    /// Creates a flat-shaded face from vertex indices.
    pub fn new(indices: Vec<u32>) -> Self {
        Self {
            indices,
            smooth: false,
        }
    }

    /// Returns the vertex indices in winding order.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the number of corners.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the face has no corners.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the smooth shading flag.
    #[inline]
    pub fn is_smooth(&self) -> bool {
        self.smooth
    }

    /// Sets the smooth shading flag.
    #[inline]
    pub fn set_smooth(&mut self, smooth: bool) {
        self.smooth = smooth;
    }

    /// Iterates the directed edges `(from, to)` of the face, closing back to the first corner.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let n = self.indices.len();
        (0..n).map(move |i| (self.indices[i], self.indices[(i + 1) % n]))
    }
}

/// A polygon mesh with vertices and faces.
///
/// Vertices are addressed by insertion order. Faces are polygons of three or
/// more corners; the winding gives the outward normal by the right-hand rule.
///
/// # Example
///
/// ```rust
/// use cutter_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(vec![0, 1, 2, 3]);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Polygon faces
    faces: Vec<Face>,
    /// Mesh-level auto-smooth normals flag
    auto_smooth: bool,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            auto_smooth: false,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Appends a run of vertices and returns the index of the first one.
    pub fn extend_vertices(&mut self, positions: impl IntoIterator<Item = DVec3>) -> u32 {
        let base = self.vertices.len() as u32;
        self.vertices.extend(positions);
        base
    }

    /// Adds a flat-shaded face by vertex indices.
    pub fn add_face(&mut self, indices: Vec<u32>) {
        self.faces.push(Face::new(indices));
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns a mutable reference to the faces.
    #[inline]
    pub fn faces_mut(&mut self) -> &mut [Face] {
        &mut self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> &Face {
        &self.faces[index]
    }

    /// Returns the auto-smooth normals flag.
    #[inline]
    pub fn auto_smooth(&self) -> bool {
        self.auto_smooth
    }

    /// Sets the auto-smooth normals flag.
    #[inline]
    pub fn set_auto_smooth(&mut self, auto_smooth: bool) {
        self.auto_smooth = auto_smooth;
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Transforms all vertices by a 4x4 matrix.
    ///
    /// Face windings are left untouched, so a matrix with a negative
    /// determinant turns the mesh inside out.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Validates index bounds and face arity.
    ///
    /// Returns true when every face has at least three corners and
    /// references only existing vertices.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.faces
            .iter()
            .all(|face| face.len() >= 3 && face.indices.iter().all(|&i| i < vertex_count))
    }

    /// Splits every polygon into a triangle fan, preserving winding.
    ///
    /// This is the form the boolean and bevel pipeline consumes.
    pub fn triangulate(&self) -> Vec<[u32; 3]> {
        let triangle_count = self.faces.iter().map(|f| f.len().saturating_sub(2)).sum();
        let mut triangles = Vec::with_capacity(triangle_count);

        for face in &self.faces {
            let idx = &face.indices;
            for k in 1..idx.len().saturating_sub(1) {
                triangles.push([idx[0], idx[k], idx[k + 1]]);
            }
        }

        triangles
    }

    /// Exports vertices as f32 array for the modifier pipeline.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }
}
