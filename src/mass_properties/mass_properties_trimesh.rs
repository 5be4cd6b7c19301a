use crate::mass_properties::MassProperties;
use crate::math::{Matrix, Point, Real, Vector, DEFAULT_EPSILON, DIM};
use crate::shape::{Tetrahedron, TriMesh};
use num::Zero;

/// Error raised when the mass properties of a mesh cannot be computed.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum DegenerateMeshError {
    /// The mesh does not contain any triangle.
    #[error("the mesh does not contain any triangle.")]
    NoTriangles,
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
    /// The volume enclosed by the mesh is zero (flat, empty, or self-cancelling surface).
    #[error("the mesh encloses a zero volume ({volume}).")]
    ZeroVolume {
        /// The computed signed volume.
        volume: Real,
    },
    /// The mesh is not a closed surface.
    #[error("the mesh is not closed: the edge {edge:?} is shared by {count} triangle(s) instead of 2.")]
    NotClosed {
        /// The first open edge found.
        edge: (u32, u32),
        /// The number of triangles sharing this edge.
        count: usize,
    },
}

impl MassProperties {
    /// Computes the mass properties of a closed triangle mesh with uniform `density`.
    ///
    /// The result does not depend on the orientation of the triangles, as long as it is
    /// consistent across the mesh. The closedness of the mesh is not checked here, see
    /// [`MassProperties::from_closed_trimesh`].
    pub fn from_trimesh(
        density: Real,
        vertices: &[Point<Real>],
        indices: &[[u32; DIM]],
    ) -> Result<MassProperties, DegenerateMeshError> {
        if indices.is_empty() {
            return Err(DegenerateMeshError::NoTriangles);
        }

        for (tid, tri) in indices.iter().enumerate() {
            if let Some(index) = tri.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(DegenerateMeshError::IndexOutOfBounds {
                    triangle: tid as u32,
                    index: *index,
                    num_vertices: vertices.len(),
                });
            }
        }

        let (volume, com) = trimesh_signed_volume_and_center_of_mass(vertices, indices);

        if volume.is_zero() || volume.abs() <= DEFAULT_EPSILON * bounding_extent(vertices).powi(3)
        {
            return Err(DegenerateMeshError::ZeroVolume { volume });
        }

        let mut itot = Matrix::zeros();

        for t in indices {
            let p2 = &vertices[t[0] as usize];
            let p3 = &vertices[t[1] as usize];
            let p4 = &vertices[t[2] as usize];

            let vol = Tetrahedron::new(com, *p2, *p3, *p4).signed_volume();
            let ipart = tetrahedron_unit_inertia_tensor_wrt_point(&com, &com, p2, p3, p4);

            itot += ipart * vol;
        }

        let sign = volume.signum();
        Ok(Self::new(
            com,
            volume * density * sign,
            itot * density * sign,
        ))
    }

    /// Computes the mass properties of a triangle mesh, after checking that it is closed.
    pub fn from_closed_trimesh(
        density: Real,
        mesh: &TriMesh,
    ) -> Result<MassProperties, DegenerateMeshError> {
        if let Some((edge, count)) = mesh.find_open_edge() {
            return Err(DegenerateMeshError::NotClosed { edge, count });
        }

        Self::from_trimesh(density, mesh.vertices(), mesh.indices())
    }
}

/// Computes the unit inertia tensor of a tetrahedron, with regard to the given `point`.
///
/// Multiplying the result by the signed volume of the tetrahedron gives its contribution to
/// the inertia tensor of a mesh of unit density.
pub fn tetrahedron_unit_inertia_tensor_wrt_point(
    point: &Point<Real>,
    p1: &Point<Real>,
    p2: &Point<Real>,
    p3: &Point<Real>,
    p4: &Point<Real>,
) -> Matrix<Real> {
    let pts = [p1 - point, p2 - point, p3 - point, p4 - point];
    let sum: Vector<Real> = pts.iter().sum();

    // Second moments of the tetrahedron, divided by its volume.
    let mut moments = sum * sum.transpose();
    for p in &pts {
        moments += p * p.transpose();
    }
    moments *= 0.05;

    Matrix::from_diagonal_element(moments.trace()) - moments
}

/// Computes the volume and center-of-mass of a mesh.
///
/// Returns a zero volume and the geometric center of the vertices if the mesh does not enclose
/// any volume.
pub fn trimesh_signed_volume_and_center_of_mass(
    vertices: &[Point<Real>],
    indices: &[[u32; DIM]],
) -> (Real, Point<Real>) {
    let geometric_center = if vertices.is_empty() {
        Point::origin()
    } else {
        crate::utils::center(vertices)
    };

    let mut res = Point::origin();
    let mut vol = 0.0;

    for t in indices {
        let p2 = vertices[t[0] as usize];
        let p3 = vertices[t[1] as usize];
        let p4 = vertices[t[2] as usize];

        let tetra = Tetrahedron::new(geometric_center, p2, p3, p4);
        let volume = tetra.signed_volume();

        res += tetra.center().coords * volume;
        vol += volume;
    }

    if vol.is_zero() {
        (vol, geometric_center)
    } else {
        (vol, res / vol)
    }
}

fn bounding_extent(vertices: &[Point<Real>]) -> Real {
    let mut mins = Vector::repeat(Real::MAX);
    let mut maxs = Vector::repeat(-Real::MAX);

    for pt in vertices {
        mins = mins.inf(&pt.coords);
        maxs = maxs.sup(&pt.coords);
    }

    (maxs - mins).max().max(0.0)
}
