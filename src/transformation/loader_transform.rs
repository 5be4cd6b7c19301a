use crate::math::{HomogeneousMatrix, Point, Real, Rotation, Vector};
use crate::utils;

/// The pre-transform applied to every vertex of a mesh when it is loaded.
///
/// Vertices are scaled first, then rotated, then translated.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct LoaderTransform {
    /// The scaling factor along each axis.
    pub scale: Vector<Real>,
    /// The rotation, as Euler angles around x, y, then z, in degrees.
    pub rotation_deg: Vector<Real>,
    /// The translation.
    pub translation: Vector<Real>,
}

impl Default for LoaderTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl LoaderTransform {
    /// Creates a new pre-transform.
    pub fn new(scale: Vector<Real>, rotation_deg: Vector<Real>, translation: Vector<Real>) -> Self {
        Self {
            scale,
            rotation_deg,
            translation,
        }
    }

    /// The pre-transform that leaves every vertex unchanged.
    pub fn identity() -> Self {
        Self::new(Vector::repeat(1.0), Vector::zeros(), Vector::zeros())
    }

    /// Is this the identity pre-transform?
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// The rotational part of this pre-transform.
    pub fn rotation(&self) -> Rotation<Real> {
        let angles = self.rotation_deg.map(Real::to_radians);
        Rotation::from_euler_angles(angles.x, angles.y, angles.z)
    }

    /// The homogeneous matrix of this pre-transform: `translation * rotation * scale`.
    pub fn matrix(&self) -> HomogeneousMatrix<Real> {
        HomogeneousMatrix::new_translation(&self.translation)
            * self.rotation().to_homogeneous()
            * HomogeneousMatrix::new_nonuniform_scaling(&self.scale)
    }

    /// The homogeneous matrix undoing this pre-transform: `scale⁻¹ * rotation⁻¹ * translation⁻¹`.
    ///
    /// A zero scaling factor is inverted to zero.
    pub fn inverse_matrix(&self) -> HomogeneousMatrix<Real> {
        HomogeneousMatrix::new_nonuniform_scaling(&self.scale.map(utils::inv))
            * self.rotation().inverse().to_homogeneous()
            * HomogeneousMatrix::new_translation(&-self.translation)
    }

    /// Applies this pre-transform to a point.
    pub fn transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        let scaled = Point::from(pt.coords.component_mul(&self.scale));
        self.rotation() * scaled + self.translation
    }

    /// Undoes this pre-transform on a point.
    pub fn inverse_transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.inverse_matrix().transform_point(pt)
    }
}
