//! Mass properties (mass, inertia, center-of-mass) of closed triangle meshes.

pub use self::estimator::{RigidMassEstimator, UniformDensity};
pub use self::mass_properties::MassProperties;
pub use self::mass_properties_trimesh::DegenerateMeshError;

mod estimator;
mod mass_properties;
mod mass_properties_trimesh;

/// Free functions for some special-cases of mass-properties computation.
pub mod details {
    pub use super::mass_properties_trimesh::{
        tetrahedron_unit_inertia_tensor_wrt_point, trimesh_signed_volume_and_center_of_mass,
    };
}
