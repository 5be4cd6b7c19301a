use crate::alignment::PrincipalFrame;
use crate::math::{AngularInertia, Isometry, Matrix, Point, Real, Vector};
use crate::utils;
use approx::{AbsDiffEq, RelativeEq};

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// The mass properties of a rigid-body: mass, center-of-mass, and angular inertia tensor.
pub struct MassProperties {
    /// The center of mass of a rigid-body expressed in its local-space.
    pub local_com: Point<Real>,
    /// The mass of the rigid-body.
    pub mass: Real,
    /// The angular inertia tensor of the rigid-body, expressed with regard to its center of mass.
    ///
    /// This matrix is symmetric.
    pub inertia: AngularInertia<Real>,
}

impl MassProperties {
    /// Initializes the mass properties with the given center-of-mass, mass, and angular inertia
    /// tensor (expressed with regard to the center-of-mass).
    pub fn new(local_com: Point<Real>, mass: Real, inertia: AngularInertia<Real>) -> Self {
        Self {
            local_com,
            mass,
            inertia,
        }
    }

    /// Initializes the mass properties from principal angular inertia values along the
    /// coordinate axes.
    pub fn with_principal_inertia(
        local_com: Point<Real>,
        mass: Real,
        principal_inertia: Vector<Real>,
    ) -> Self {
        Self::new(local_com, mass, Matrix::from_diagonal(&principal_inertia))
    }

    /// The mass of the rigid-body.
    pub fn mass(&self) -> Real {
        self.mass
    }

    /// The inverse mass of the rigid-body, or zero if its mass is zero.
    pub fn inv_mass(&self) -> Real {
        utils::inv(self.mass)
    }

    /// The principal moments and axes of this body's angular inertia tensor.
    ///
    /// Moments closer than `eigenvalue_tolerance` (relative to the largest moment) are reported
    /// as degenerate by the returned frame.
    pub fn principal_frame(&self, eigenvalue_tolerance: Real) -> PrincipalFrame {
        PrincipalFrame::from_inertia_matrix(&self.inertia, eigenvalue_tolerance)
    }

    /// The angular inertia tensor of the rigid-body with regard to an arbitrary `point`.
    ///
    /// This applies the parallel axis theorem.
    pub fn inertia_wrt_point(&self, point: &Point<Real>) -> Matrix<Real> {
        let shift = self.local_com - point;
        let diag = Matrix::from_diagonal_element(shift.norm_squared());
        self.inertia + (diag - shift * shift.transpose()) * self.mass
    }

    /// Transform each element of the mass properties.
    ///
    /// The center of mass is moved by `m` and the inertia tensor is rotated by `m.rotation`.
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        let rot = m.rotation.to_rotation_matrix().into_inner();
        Self {
            local_com: m * self.local_com,
            mass: self.mass,
            inertia: rot * self.inertia * rot.transpose(),
        }
    }

    /// Changes the mass on these mass-properties.
    ///
    /// The angular inertia is scaled by `new_mass / prev_mass` if the previous mass is not zero.
    pub fn set_mass(&mut self, new_mass: Real) {
        self.inertia *= new_mass * utils::inv(self.mass);
        self.mass = new_mass;
    }
}

impl AbsDiffEq for MassProperties {
    type Epsilon = Real;
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.inertia.abs_diff_eq(&other.inertia, epsilon)
            && self.local_com.abs_diff_eq(&other.local_com, epsilon)
            && self.mass.abs_diff_eq(&other.mass, epsilon)
    }
}

impl RelativeEq for MassProperties {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.inertia
            .relative_eq(&other.inertia, epsilon, max_relative)
            && self
                .local_com
                .relative_eq(&other.local_com, epsilon, max_relative)
            && self.mass.relative_eq(&other.mass, epsilon, max_relative)
    }
}
