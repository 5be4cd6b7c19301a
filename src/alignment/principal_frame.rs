use crate::math::{Matrix, PrincipalAngularInertia, Real, Rotation, Vector};
use na::Rotation3;

/// How many principal axes of an inertia tensor are uniquely determined.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Degeneracy {
    /// The three principal moments are distinct: every axis is determined up to its sign.
    Distinct,
    /// Two principal moments are equal. Only the axis with the index `axis` (in the
    /// ascending order of the moments) is determined; the two others can spin freely around it.
    Axisymmetric {
        /// Index of the only well-defined principal axis.
        axis: usize,
    },
    /// The three principal moments are equal: any orthonormal frame is a principal frame.
    Isotropic,
}

impl Degeneracy {
    /// Classifies a degeneracy from the equality of the consecutive (sorted) principal moments.
    pub fn from_gaps(first_pair_equal: bool, second_pair_equal: bool) -> Self {
        match (first_pair_equal, second_pair_equal) {
            (false, false) => Degeneracy::Distinct,
            (true, false) => Degeneracy::Axisymmetric { axis: 2 },
            (false, true) => Degeneracy::Axisymmetric { axis: 0 },
            (true, true) => Degeneracy::Isotropic,
        }
    }

    /// Is any principal axis undetermined?
    pub fn is_degenerate(&self) -> bool {
        *self != Degeneracy::Distinct
    }
}

/// The principal moments and axes of an inertia tensor.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PrincipalFrame {
    /// The principal moments, sorted in ascending order.
    pub moments: PrincipalAngularInertia<Real>,
    /// The principal axes, stored as the columns of this matrix in the same order as `moments`.
    ///
    /// This matrix is always a proper rotation (its determinant is `+1`).
    pub axes: Matrix<Real>,
    gaps: [bool; 2],
}

impl PrincipalFrame {
    /// Diagonalizes the symmetric `inertia` tensor.
    ///
    /// Two consecutive moments are considered equal if they differ by less than
    /// `eigenvalue_tolerance` times the largest moment magnitude.
    pub fn from_inertia_matrix(inertia: &Matrix<Real>, eigenvalue_tolerance: Real) -> Self {
        let eigen = inertia.symmetric_eigen();

        let mut order = [0, 1, 2];
        order.sort_by(|a, b| eigen.eigenvalues[*a].total_cmp(&eigen.eigenvalues[*b]));

        let moments = Vector::from_fn(|i, _| eigen.eigenvalues[order[i]]);
        let mut axes = Matrix::from_fn(|r, c| eigen.eigenvectors[(r, order[c])]);

        if axes.determinant() < 0.0 {
            axes = -axes;
        }

        let scale = moments.abs().max();
        let threshold = eigenvalue_tolerance * scale;
        let gaps = if scale == 0.0 {
            [true, true]
        } else {
            [
                moments[1] - moments[0] <= threshold,
                moments[2] - moments[1] <= threshold,
            ]
        };

        Self {
            moments,
            axes,
            gaps,
        }
    }

    /// The degeneracy of this frame.
    pub fn degeneracy(&self) -> Degeneracy {
        Degeneracy::from_gaps(self.gaps[0], self.gaps[1])
    }

    /// The degeneracy shared by the pair `(self, other)`: a pair of axes is undetermined if it is
    /// undetermined in either frame.
    pub fn joint_degeneracy(&self, other: &Self) -> Degeneracy {
        Degeneracy::from_gaps(
            self.gaps[0] || other.gaps[0],
            self.gaps[1] || other.gaps[1],
        )
    }

    /// The principal axes as a rotation mapping the canonical basis onto this frame.
    pub fn orientation(&self) -> Rotation<Real> {
        Rotation::from_rotation_matrix(&Rotation3::from_matrix_unchecked(self.axes))
    }

    /// All the proper rotations mapping the axes of `self` onto the axes of `target`, for every
    /// choice of axis signs.
    ///
    /// Only the sign combinations with an even number of flips keep the result a proper
    /// rotation, hence the four candidates.
    pub fn sign_candidates(&self, target: &Self) -> [Matrix<Real>; 4] {
        [
            Vector::new(1.0, 1.0, 1.0),
            Vector::new(1.0, -1.0, -1.0),
            Vector::new(-1.0, 1.0, -1.0),
            Vector::new(-1.0, -1.0, 1.0),
        ]
        .map(|signs| target.axes * Matrix::from_diagonal(&signs) * self.axes.transpose())
    }

    /// The rotation mapping the principal axes of `self` onto those of `target`, with the
    /// smallest rotation angle.
    ///
    /// Undetermined axes (see [`Self::joint_degeneracy`]) are completed so as to keep the
    /// rotation angle minimal: the shortest arc between the symmetry axes for axisymmetric
    /// tensors, and the identity for isotropic tensors.
    pub fn rotation_to(&self, target: &Self) -> Rotation<Real> {
        match self.joint_degeneracy(target) {
            Degeneracy::Distinct => {
                let best = self
                    .sign_candidates(target)
                    .into_iter()
                    .max_by(|a, b| a.trace().total_cmp(&b.trace()))
                    .unwrap_or_else(Matrix::identity);
                Rotation::from_rotation_matrix(&Rotation3::from_matrix_unchecked(best))
            }
            Degeneracy::Axisymmetric { axis } => {
                let from: Vector<Real> = self.axes.column(axis).into_owned();
                let mut to: Vector<Real> = target.axes.column(axis).into_owned();

                if from.dot(&to) < 0.0 {
                    to = -to;
                }

                Rotation::rotation_between(&from, &to).unwrap_or_else(Rotation::identity)
            }
            Degeneracy::Isotropic => Rotation::identity(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Degeneracy, PrincipalFrame};
    use crate::math::{Matrix, Rotation, Vector};

    fn tensor(moments: Vector<f64>, rot: &Rotation<f64>) -> Matrix<f64> {
        let r = rot.to_rotation_matrix().into_inner();
        r * Matrix::from_diagonal(&moments) * r.transpose()
    }

    fn frame(moments: Vector<f64>, rot: &Rotation<f64>) -> PrincipalFrame {
        PrincipalFrame::from_inertia_matrix(&tensor(moments, rot), 1.0e-6)
    }

    #[test]
    fn frame_is_sorted_and_proper() {
        let rot = Rotation::from_scaled_axis(Vector::new(0.1, -0.7, 0.4));
        let frame = frame(Vector::new(3.0, 1.0, 2.0), &rot);

        assert_relative_eq!(frame.moments, Vector::new(1.0, 2.0, 3.0), epsilon = 1.0e-10);
        assert_relative_eq!(frame.axes.determinant(), 1.0, epsilon = 1.0e-10);
        assert_eq!(frame.degeneracy(), Degeneracy::Distinct);
    }

    #[test]
    fn degeneracy_classification() {
        let id = Rotation::identity();
        let axisym = frame(Vector::new(2.0, 2.0, 5.0), &id);
        assert_eq!(axisym.degeneracy(), Degeneracy::Axisymmetric { axis: 2 });

        let prolate = frame(Vector::new(1.0, 4.0, 4.0), &id);
        assert_eq!(prolate.degeneracy(), Degeneracy::Axisymmetric { axis: 0 });

        let iso = PrincipalFrame::from_inertia_matrix(&Matrix::identity(), 1.0e-6);
        assert_eq!(iso.degeneracy(), Degeneracy::Isotropic);

        let zero = PrincipalFrame::from_inertia_matrix(&Matrix::zeros(), 1.0e-6);
        assert_eq!(zero.degeneracy(), Degeneracy::Isotropic);

        let distinct = frame(Vector::new(1.0, 2.0, 3.0), &id);
        assert_eq!(distinct.joint_degeneracy(&axisym), Degeneracy::Axisymmetric { axis: 2 });
    }

    #[test]
    fn rotation_between_distinct_frames() {
        let moments = Vector::new(1.0, 2.0, 3.0);
        let rot = Rotation::from_axis_angle(&Vector::z_axis(), 0.5);
        let src = frame(moments, &Rotation::identity());
        let tgt = frame(moments, &rot);

        assert_relative_eq!(
            src.rotation_to(&tgt).to_rotation_matrix(),
            rot.to_rotation_matrix(),
            epsilon = 1.0e-9
        );
        assert_relative_eq!(
            src.rotation_to(&src).to_rotation_matrix(),
            Rotation::identity().to_rotation_matrix(),
            epsilon = 1.0e-9
        );

        for candidate in src.sign_candidates(&tgt) {
            assert_relative_eq!(candidate.determinant(), 1.0, epsilon = 1.0e-9);
        }
    }

    #[test]
    fn rotation_between_axisymmetric_frames() {
        let moments = Vector::new(2.0, 2.0, 5.0);
        let rot = Rotation::from_axis_angle(&Vector::x_axis(), 0.3);
        let src = frame(moments, &Rotation::identity());
        let tgt = frame(moments, &rot);

        // Only the symmetry axis is recovered, with a minimal rotation.
        let found = src.rotation_to(&tgt);
        assert_relative_eq!(found * Vector::z(), rot * Vector::z(), epsilon = 1.0e-9);
        assert_relative_eq!(found.angle(), 0.3, epsilon = 1.0e-9);
    }
}
