//! Shapes supported by inertial3d.

pub use self::cuboid::Cuboid;
pub use self::tetrahedron::Tetrahedron;
pub use self::trimesh::{TriMesh, TriMeshBuilderError};

mod cuboid;
mod tetrahedron;
mod trimesh;
