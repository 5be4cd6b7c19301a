use crate::alignment::{Degeneracy, PrincipalFrame, RigidTransform};
use crate::math::{Matrix, Point, PrincipalAngularInertia, Real};

/// Parameters of the inertia alignment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct AlignmentConfig {
    /// Two principal moments are considered equal if they differ by less than this fraction of
    /// the largest principal moment.
    pub eigenvalue_tolerance: Real,
    /// If `true`, [`InertiaAligner`](crate::alignment::InertiaAligner) uses the target vertices
    /// to pick the best rotation among those compatible with the inertia tensors.
    pub refine_with_points: bool,
    /// Mean nearest-point distance below which a point-refined rotation is considered
    /// unambiguous.
    pub refinement_tolerance: Real,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            eigenvalue_tolerance: 1.0e-6,
            refine_with_points: true,
            refinement_tolerance: 1.0e-6,
        }
    }
}

/// Warning emitted when the inertia tensors do not determine a unique rotation.
///
/// This is not a failure: the alignment still completes with a best-effort rotation, and the
/// centers of mass are still aligned exactly.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum AlignmentAmbiguity {
    /// Two principal moments are equal: the rotation around the symmetry axis is undetermined.
    #[error("two principal moments are equal ({moments:?}): the rotation around the symmetry axis is undetermined.")]
    Axisymmetric {
        /// The principal moments of the source body, in ascending order.
        moments: PrincipalAngularInertia<Real>,
        /// The index of the symmetry axis in the ascending order of the moments.
        axis: usize,
    },
    /// All principal moments are equal: the rotation is undetermined.
    #[error("all principal moments are equal ({moments:?}): the rotation is undetermined.")]
    Isotropic {
        /// The principal moments of the source body, in ascending order.
        moments: PrincipalAngularInertia<Real>,
    },
}

/// The result of an inertia alignment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InertiaAlignment {
    /// The transform mapping the source body onto the target body.
    pub transform: RigidTransform,
    /// The principal frame of the source inertia tensor.
    pub source_frame: PrincipalFrame,
    /// The principal frame of the target inertia tensor.
    pub target_frame: PrincipalFrame,
    /// Set if the rotation is not uniquely determined.
    pub ambiguity: Option<AlignmentAmbiguity>,
    /// The mean nearest-point distance between the transformed source points and the target
    /// points, if the alignment was refined with points.
    pub residual: Option<Real>,
}

impl InertiaAlignment {
    /// Is the rotation of this alignment uniquely determined?
    pub fn is_ambiguous(&self) -> bool {
        self.ambiguity.is_some()
    }
}

/// Computes the rigid transform aligning a source body onto a target body from their centers of
/// mass and inertia tensors, with the default [`AlignmentConfig`].
///
/// See [`compute_transform_with`].
pub fn compute_transform(
    source_center: &Point<Real>,
    target_center: &Point<Real>,
    source_inertia: &Matrix<Real>,
    target_inertia: &Matrix<Real>,
) -> InertiaAlignment {
    compute_transform_with(
        &AlignmentConfig::default(),
        source_center,
        target_center,
        source_inertia,
        target_inertia,
    )
}

/// Computes the rigid transform aligning a source body onto a target body from their centers of
/// mass and inertia tensors.
///
/// The translation is `target_center - source_center` and the rotation, applied around
/// `source_center`, maps the principal axes of `source_inertia` onto those of `target_inertia`.
/// Among the rotations compatible with both tensors (principal axes are only defined up to their
/// signs), the proper rotation with the smallest angle is selected.
///
/// If some principal moments are equal, the corresponding axes are not determined. The
/// alignment then completes the rotation with the smallest possible angle, logs a warning, and
/// reports an [`AlignmentAmbiguity`]. Rotations larger than a half-turn around a principal axis
/// cannot be told apart from their smaller counterparts without looking at the points (see
/// [`refine_with_points`](crate::alignment::refine_with_points)).
pub fn compute_transform_with(
    config: &AlignmentConfig,
    source_center: &Point<Real>,
    target_center: &Point<Real>,
    source_inertia: &Matrix<Real>,
    target_inertia: &Matrix<Real>,
) -> InertiaAlignment {
    let source_frame =
        PrincipalFrame::from_inertia_matrix(source_inertia, config.eigenvalue_tolerance);
    let target_frame =
        PrincipalFrame::from_inertia_matrix(target_inertia, config.eigenvalue_tolerance);

    let rotation = source_frame.rotation_to(&target_frame);
    let translation = target_center - source_center;
    let transform = RigidTransform::new(rotation, translation, *source_center);

    let ambiguity = match source_frame.joint_degeneracy(&target_frame) {
        Degeneracy::Distinct => None,
        Degeneracy::Axisymmetric { axis } => Some(AlignmentAmbiguity::Axisymmetric {
            moments: source_frame.moments,
            axis,
        }),
        Degeneracy::Isotropic => Some(AlignmentAmbiguity::Isotropic {
            moments: source_frame.moments,
        }),
    };

    if let Some(ambiguity) = &ambiguity {
        log::warn!("ambiguous inertia alignment: {ambiguity}");
    }

    InertiaAlignment {
        transform,
        source_frame,
        target_frame,
        ambiguity,
        residual: None,
    }
}
