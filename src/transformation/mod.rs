//! Loading of meshes, and the pre-transforms applied to them at load time.

pub use self::loader_transform::LoaderTransform;
#[cfg(feature = "wavefront")]
pub use self::wavefront::{LoadError, LoadedMesh, MeshLoader, ObjLoader};

mod loader_transform;
#[cfg(feature = "wavefront")]
mod wavefront;
