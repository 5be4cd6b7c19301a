//! Rigid alignment of bodies by matching their centers of mass and principal axes of inertia.

pub use self::aligner::{AlignmentError, AlignmentResult, InertiaAligner};
pub use self::inertia_align::{
    compute_transform, compute_transform_with, AlignmentAmbiguity, AlignmentConfig,
    InertiaAlignment,
};
pub use self::principal_frame::{Degeneracy, PrincipalFrame};
pub use self::refine::refine_with_points;
pub use self::rigid_transform::{apply_transform, RigidTransform};
pub use self::verify::{
    check, first_violation, verify, LengthMismatchError, VerificationError, Violation,
};

mod aligner;
mod inertia_align;
mod principal_frame;
mod refine;
mod rigid_transform;
mod verify;
