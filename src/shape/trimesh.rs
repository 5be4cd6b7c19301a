use crate::math::{Isometry, Point, Real};
use std::collections::HashMap;

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle mesh must contain at least one triangle.
    #[error("A triangle mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {index} but the mesh only has {num_vertices} vertices.")]
    IndexOutOfBounds {
        /// The faulty triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
}

/// A triangle mesh: a vertex buffer and an index buffer.
///
/// Every index of the index buffer is guaranteed to be a valid vertex index.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        if indices.is_empty() {
            return Err(TriMeshBuilderError::EmptyIndices);
        }

        for (tid, tri) in indices.iter().enumerate() {
            if let Some(index) = tri.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(TriMeshBuilderError::IndexOutOfBounds {
                    triangle: tid as u32,
                    index: *index,
                    num_vertices: vertices.len(),
                });
            }
        }

        Ok(Self { vertices, indices })
    }

    /// Creates a triangle mesh without validating the index buffer.
    pub(crate) fn from_parts_unchecked(vertices: Vec<Point<Real>>, indices: Vec<[u32; 3]>) -> Self {
        Self { vertices, indices }
    }

    /// The vertex buffer of this mesh.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// Transforms in-place the vertices of this mesh.
    pub fn transform_vertices(&mut self, transform: &Isometry<Real>) {
        self.vertices
            .iter_mut()
            .for_each(|pt| *pt = transform * *pt);
    }

    /// Returns a copy of this mesh with all its vertices transformed by `transform`.
    pub fn transformed(mut self, transform: &Isometry<Real>) -> Self {
        self.transform_vertices(transform);
        self
    }

    /// Finds an edge that is not shared by exactly two triangles.
    ///
    /// Returns the edge (with its smallest vertex index first) and the number of triangles
    /// sharing it, or `None` if the mesh is closed. If several edges are open, the one with the
    /// smallest vertex indices is returned so the result is deterministic.
    pub fn find_open_edge(&self) -> Option<((u32, u32), usize)> {
        let mut valences: HashMap<(u32, u32), usize> = HashMap::new();

        for tri in &self.indices {
            for k in 0..3 {
                let (a, b) = (tri[k], tri[(k + 1) % 3]);
                let key = if a < b { (a, b) } else { (b, a) };
                *valences.entry(key).or_insert(0) += 1;
            }
        }

        valences
            .into_iter()
            .filter(|(_, count)| *count != 2)
            .min_by_key(|(edge, _)| *edge)
    }
}
