use crate::alignment::{
    compute_transform_with, refine_with_points, verify, AlignmentAmbiguity, AlignmentConfig,
    LengthMismatchError, RigidTransform,
};
use crate::mass_properties::{
    DegenerateMeshError, MassProperties, RigidMassEstimator, UniformDensity,
};
use crate::math::{Point, Real};
use crate::shape::TriMesh;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Error raised by [`InertiaAligner::align_meshes`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum AlignmentError {
    /// The mass properties of the source mesh could not be computed.
    #[error("invalid source mesh: {0}")]
    SourceMass(DegenerateMeshError),
    /// The mass properties of the target mesh could not be computed.
    #[error("invalid target mesh: {0}")]
    TargetMass(DegenerateMeshError),
}

/// The outcome of aligning a source mesh onto a target mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct AlignmentResult {
    /// The transform mapping the source mesh onto the target mesh.
    pub transform: RigidTransform,
    /// The source vertices, transformed, in their original order.
    pub points: Vec<Point<Real>>,
    /// Set if the rotation is not uniquely determined.
    pub ambiguity: Option<AlignmentAmbiguity>,
    /// The mass properties of the source mesh.
    pub source_mass: MassProperties,
    /// The mass properties of the target mesh.
    pub target_mass: MassProperties,
}

impl AlignmentResult {
    /// Checks the transformed points against `expected`, coordinate by coordinate.
    ///
    /// See [`verify`](crate::alignment::verify()).
    pub fn verify(
        &self,
        expected: &[Point<Real>],
        epsilon: Real,
    ) -> Result<bool, LengthMismatchError> {
        verify(&self.points, expected, epsilon)
    }
}

/// Aligns meshes by estimating their mass properties, then matching their centers of mass and
/// principal axes of inertia.
#[derive(Copy, Clone, Debug, Default)]
pub struct InertiaAligner<E = UniformDensity> {
    /// The estimator computing the mass properties of each mesh.
    pub estimator: E,
    /// The alignment parameters.
    pub config: AlignmentConfig,
}

impl<E: RigidMassEstimator> InertiaAligner<E> {
    /// Creates a new aligner.
    pub fn new(estimator: E, config: AlignmentConfig) -> Self {
        Self { estimator, config }
    }

    /// Computes the transform mapping `source` onto `target` and applies it to the source
    /// vertices.
    ///
    /// If `config.refine_with_points` is set, the target vertices are used to pick the best
    /// rotation among those compatible with the inertia tensors.
    pub fn align_meshes(
        &self,
        source: &TriMesh,
        target: &TriMesh,
    ) -> Result<AlignmentResult, AlignmentError> {
        let source_mass = self
            .estimator
            .estimate(source)
            .map_err(AlignmentError::SourceMass)?;
        let target_mass = self
            .estimator
            .estimate(target)
            .map_err(AlignmentError::TargetMass)?;

        let mut alignment = compute_transform_with(
            &self.config,
            &source_mass.local_com,
            &target_mass.local_com,
            &source_mass.inertia,
            &target_mass.inertia,
        );

        if self.config.refine_with_points {
            alignment = refine_with_points(
                &self.config,
                &alignment,
                source.vertices(),
                target.vertices(),
            );
        }

        Ok(AlignmentResult {
            transform: alignment.transform,
            points: alignment.transform.transform_points(source.vertices()),
            ambiguity: alignment.ambiguity,
            source_mass,
            target_mass,
        })
    }

    /// Aligns each `(source, target)` pair independently.
    ///
    /// The pairs are processed in parallel if the `parallel` feature is enabled.
    #[cfg(not(feature = "parallel"))]
    pub fn align_many(
        &self,
        pairs: &[(TriMesh, TriMesh)],
    ) -> Vec<Result<AlignmentResult, AlignmentError>> {
        pairs
            .iter()
            .map(|(source, target)| self.align_meshes(source, target))
            .collect()
    }

    /// Aligns each `(source, target)` pair independently.
    ///
    /// The pairs are processed in parallel if the `parallel` feature is enabled.
    #[cfg(feature = "parallel")]
    pub fn align_many(
        &self,
        pairs: &[(TriMesh, TriMesh)],
    ) -> Vec<Result<AlignmentResult, AlignmentError>>
    where
        E: Sync,
    {
        pairs
            .par_iter()
            .map(|(source, target)| self.align_meshes(source, target))
            .collect()
    }
}
