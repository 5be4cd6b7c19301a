use crate::math::{Isometry, Point, Real, Rotation, Translation, Vector};
use approx::{AbsDiffEq, RelativeEq};
use std::ops::Mul;

/// A rigid transformation: a rotation around a pivot point, followed by a translation.
///
/// A point `p` is mapped to `pivot + rotation * (p - pivot) + translation`. When produced by
/// the inertia alignment, the pivot is the center of mass of the source body and the translation
/// is the displacement between both centers of mass, so the source center of mass is mapped
/// exactly onto the target center of mass whatever the rotation.
///
/// # Example
///
/// ```
/// use inertial3d::alignment::RigidTransform;
/// use inertial3d::math::{Point, Rotation, Vector};
///
/// let pivot = Point::new(1.0, 0.0, 0.0);
/// let rotation = Rotation::from_axis_angle(&Vector::z_axis(), std::f64::consts::FRAC_PI_2);
/// let transform = RigidTransform::new(rotation, Vector::new(0.0, 0.0, 1.0), pivot);
///
/// // The pivot only moves by the translation.
/// assert!((transform.transform_point(&pivot) - Point::new(1.0, 0.0, 1.0)).norm() < 1.0e-12);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RigidTransform {
    /// The rotation, applied around `pivot`.
    pub rotation: Rotation<Real>,
    /// The translation, applied after the rotation.
    pub translation: Vector<Real>,
    /// The point left invariant by the rotation.
    pub pivot: Point<Real>,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigidTransform {
    /// Creates a rigid transform rotating around `pivot`, then translating.
    pub fn new(rotation: Rotation<Real>, translation: Vector<Real>, pivot: Point<Real>) -> Self {
        Self {
            rotation,
            translation,
            pivot,
        }
    }

    /// The transform that leaves every point unchanged.
    pub fn identity() -> Self {
        Self::new(Rotation::identity(), Vector::zeros(), Point::origin())
    }

    /// A pure translation.
    pub fn from_translation(translation: Vector<Real>) -> Self {
        Self::new(Rotation::identity(), translation, Point::origin())
    }

    /// Converts an isometry (a rotation around the origin followed by a translation).
    pub fn from_isometry(iso: &Isometry<Real>) -> Self {
        Self::new(iso.rotation, iso.translation.vector, Point::origin())
    }

    /// The equivalent isometry, i.e., the same transform expressed as a rotation around the
    /// origin followed by a translation.
    pub fn to_isometry(&self) -> Isometry<Real> {
        let shift = self.pivot.coords + self.translation - self.rotation * self.pivot.coords;
        Isometry::from_parts(Translation::from(shift), self.rotation)
    }

    /// The rotation angle of this transform, in `[0, pi]`.
    pub fn rotation_angle(&self) -> Real {
        self.rotation.angle()
    }

    /// Applies this transform to a point.
    #[inline]
    pub fn transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.pivot + self.rotation * (pt - self.pivot) + self.translation
    }

    /// Applies this transform to every point of `pts`, preserving their order.
    pub fn transform_points(&self, pts: &[Point<Real>]) -> Vec<Point<Real>> {
        pts.iter().map(|pt| self.transform_point(pt)).collect()
    }

    /// The inverse of this transform.
    ///
    /// The inverse rotates around the image of the pivot, so it is exact and does not need any
    /// matrix inversion.
    pub fn inverse(&self) -> Self {
        Self::new(
            self.rotation.inverse(),
            -self.translation,
            self.pivot + self.translation,
        )
    }
}

/// Composition: `(a * b).transform_point(p) == a.transform_point(&b.transform_point(p))`.
impl Mul<RigidTransform> for RigidTransform {
    type Output = RigidTransform;

    fn mul(self, rhs: RigidTransform) -> RigidTransform {
        let rotation = self.rotation * rhs.rotation;
        let moved_pivot = rhs.pivot + rhs.translation - self.pivot;
        let translation =
            self.rotation * moved_pivot + self.pivot.coords + self.translation - rhs.pivot.coords;
        RigidTransform::new(rotation, translation, rhs.pivot)
    }
}

impl AbsDiffEq for RigidTransform {
    type Epsilon = Real;
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    /// Compares the transforms as maps of the space, independently of their pivots.
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let rot = self.rotation.to_rotation_matrix();
        rot.abs_diff_eq(&other.rotation.to_rotation_matrix(), epsilon)
            && self
                .to_isometry()
                .translation
                .vector
                .abs_diff_eq(&other.to_isometry().translation.vector, epsilon)
    }
}

impl RelativeEq for RigidTransform {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        let rot = self.rotation.to_rotation_matrix();
        rot.relative_eq(&other.rotation.to_rotation_matrix(), epsilon, max_relative)
            && self.to_isometry().translation.vector.relative_eq(
                &other.to_isometry().translation.vector,
                epsilon,
                max_relative,
            )
    }
}

/// Applies `transform` to every point of `pts`: rotation then translation, preserving the
/// length and the order of the sequence.
pub fn apply_transform(transform: &RigidTransform, pts: &[Point<Real>]) -> Vec<Point<Real>> {
    transform.transform_points(pts)
}
