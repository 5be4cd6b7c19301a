use crate::math::{Point, Real};
use crate::shape::{TriMesh, TriMeshBuilderError};
use crate::transformation::LoaderTransform;
use crate::utils::parse_vertex_line;
use obj::{ObjData, ObjError, SimplePolygon};
use std::path::PathBuf;

/// Error raised while loading a mesh.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// The mesh file could not be opened.
    #[error("cannot open {path}: {source}")]
    Io {
        /// The path of the mesh file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The mesh file is not a valid Wavefront file.
    #[error("cannot parse {path}: {source}")]
    Obj {
        /// The path of the mesh file.
        path: PathBuf,
        /// The underlying parse error.
        source: ObjError,
    },
    /// The mesh file does not describe a valid triangle mesh.
    #[error("invalid mesh in {path}: {source}")]
    Mesh {
        /// The path of the mesh file.
        path: PathBuf,
        /// The mesh validation error.
        source: TriMeshBuilderError,
    },
}

/// A mesh read from a file, together with the pre-transform applied to its vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedMesh {
    /// The mesh, with the pre-transform already applied to its vertices.
    pub mesh: TriMesh,
    /// The pre-transform applied at load time.
    pub transform: LoaderTransform,
    /// The file the mesh was read from.
    pub path: PathBuf,
}

/// Something that can read a triangle mesh.
pub trait MeshLoader {
    /// Reads the mesh.
    fn load(&self) -> Result<LoadedMesh, LoadError>;
}

/// Loads a Wavefront (`.obj`) file.
///
/// Only the vertex positions and the faces are read. Faces with more than three vertices are
/// triangulated as fans. Vertex positions are read in double precision. This loader is enabled
/// by the `wavefront` feature flag.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjLoader {
    /// The path of the file to read.
    pub path: PathBuf,
    /// The pre-transform applied to every vertex.
    pub transform: LoaderTransform,
}

impl ObjLoader {
    /// A loader reading `path` without any pre-transform.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            transform: LoaderTransform::identity(),
        }
    }

    /// Sets the pre-transform applied to every vertex.
    pub fn with_transform(mut self, transform: LoaderTransform) -> Self {
        self.transform = transform;
        self
    }
}

impl MeshLoader for ObjLoader {
    fn load(&self) -> Result<LoadedMesh, LoadError> {
        let bytes = std::fs::read(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        let data = ObjData::load_buf(&bytes[..]).map_err(|source| LoadError::Obj {
            path: self.path.clone(),
            source,
        })?;

        // The `obj` parser stores positions as `f32`, so they are read again from the `v` lines.
        let mut positions: Vec<[Real; 3]> = bytes
            .split(|c| *c == b'\n')
            .filter_map(parse_vertex_line)
            .collect();
        if positions.len() != data.position.len() {
            log::warn!(
                "{}: {} vertex lines parsed for {} positions, using single precision",
                self.path.display(),
                positions.len(),
                data.position.len()
            );
            positions = data.position.iter().map(|p| p.map(Real::from)).collect();
        }

        let mesh = trimesh_from_obj(&data, &positions, &self.transform).map_err(|source| {
            LoadError::Mesh {
                path: self.path.clone(),
                source,
            }
        })?;
        log::debug!(
            "loaded {}: {} vertices, {} triangles",
            self.path.display(),
            mesh.vertices().len(),
            mesh.indices().len()
        );

        Ok(LoadedMesh {
            mesh,
            transform: self.transform,
            path: self.path.clone(),
        })
    }
}

fn trimesh_from_obj(
    data: &ObjData,
    positions: &[[Real; 3]],
    transform: &LoaderTransform,
) -> Result<TriMesh, TriMeshBuilderError> {
    let vertices = positions
        .iter()
        .map(|p| transform.transform_point(&Point::from(*p)))
        .collect();

    let mut indices = vec![];

    for poly in data
        .objects
        .iter()
        .flat_map(|object| object.groups.iter())
        .flat_map(|group| group.polys.iter())
    {
        let SimplePolygon(tuples) = poly;

        for k in 1..tuples.len().saturating_sub(1) {
            indices.push([
                tuples[0].0 as u32,
                tuples[k].0 as u32,
                tuples[k + 1].0 as u32,
            ]);
        }
    }

    TriMesh::new(vertices, indices)
}
