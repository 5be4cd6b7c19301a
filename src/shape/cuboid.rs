//! Box shape, mostly used to generate closed reference meshes.

use crate::math::{Point, Real, Vector};
use crate::shape::TriMesh;

/// Shape of a box centered at the origin.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// The volume of this cuboid.
    pub fn volume(&self) -> Real {
        let he = self.half_extents;
        he.x * he.y * he.z * 8.0
    }

    /// Discretize the boundary of this cuboid as raw vertex and index buffers.
    ///
    /// The triangles are oriented counter-clockwise when seen from the outside.
    pub fn to_trimesh_buffers(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let (vtx, idx) = unit_cuboid();
        let scale = self.half_extents * 2.0;
        let vtx = vtx
            .into_iter()
            .map(|pt| Point::from(pt.coords.component_mul(&scale)))
            .collect();
        (vtx, idx)
    }

    /// Discretize the boundary of this cuboid as a closed triangle-mesh.
    pub fn to_trimesh(&self) -> TriMesh {
        let (vtx, idx) = self.to_trimesh_buffers();
        TriMesh::from_parts_unchecked(vtx, idx)
    }
}

/// Generates a closed cuboid mesh with 8 shared vertices.
///
/// The cuboid is centered at the origin, and has its half extents set to 0.5.
fn unit_cuboid() -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let coords = vec![
        Point::new(-0.5, -0.5, 0.5),
        Point::new(-0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, 0.5),
        Point::new(-0.5, 0.5, 0.5),
        Point::new(-0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, 0.5),
    ];

    let faces = vec![
        [4, 5, 0],
        [5, 1, 0],
        [5, 6, 1],
        [6, 2, 1],
        [6, 7, 3],
        [2, 6, 3],
        [7, 4, 0],
        [3, 7, 0],
        [0, 1, 2],
        [3, 0, 2],
        [7, 6, 5],
        [4, 7, 5],
    ];

    (coords, faces)
}

#[cfg(test)]
mod test {
    use super::Cuboid;
    use crate::math::Vector;

    #[test]
    fn cuboid_mesh_is_closed() {
        let mesh = Cuboid::new(Vector::new(1.0, 2.0, 3.0)).to_trimesh();
        assert_eq!(mesh.vertices().len(), 8);
        assert_eq!(mesh.indices().len(), 12);
        assert_eq!(mesh.find_open_edge(), None);
    }
}
