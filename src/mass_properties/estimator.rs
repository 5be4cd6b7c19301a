use crate::mass_properties::{DegenerateMeshError, MassProperties};
use crate::math::Real;
use crate::shape::TriMesh;

/// Something that can derive the mass properties of a triangle mesh.
pub trait RigidMassEstimator {
    /// Computes the mass, center of mass, and inertia tensor of `mesh`.
    fn estimate(&self, mesh: &TriMesh) -> Result<MassProperties, DegenerateMeshError>;
}

/// Estimates mass properties assuming the mesh is filled with a material of uniform density.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct UniformDensity {
    /// The density of the material.
    pub density: Real,
    /// If `true`, meshes that are not closed are rejected with [`DegenerateMeshError::NotClosed`].
    pub require_closed: bool,
}

impl UniformDensity {
    /// An estimator with the given density that rejects open meshes.
    pub fn new(density: Real) -> Self {
        Self {
            density,
            require_closed: true,
        }
    }
}

impl Default for UniformDensity {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl RigidMassEstimator for UniformDensity {
    fn estimate(&self, mesh: &TriMesh) -> Result<MassProperties, DegenerateMeshError> {
        if self.require_closed {
            MassProperties::from_closed_trimesh(self.density, mesh)
        } else {
            MassProperties::from_trimesh(self.density, mesh.vertices(), mesh.indices())
        }
    }
}
