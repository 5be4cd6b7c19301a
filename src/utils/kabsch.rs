use crate::math::{Matrix, Point, Real, Rotation};
use na::Rotation3;

/// Computes the rotation that best maps `source` onto `target` around their respective centers.
///
/// Both point sets are paired by index. The returned rotation minimizes the root-mean-square
/// deviation between `R (source[i] - source_center)` and `target[i] - target_center`, and is
/// always a proper rotation (reflections are corrected by flipping the least significant axis).
///
/// Returns `None` if the point sets are empty, have different lengths, or if the SVD fails.
pub fn kabsch_rotation(
    source: &[Point<Real>],
    source_center: &Point<Real>,
    target: &[Point<Real>],
    target_center: &Point<Real>,
) -> Option<Rotation<Real>> {
    if source.is_empty() || source.len() != target.len() {
        return None;
    }

    let mut h = Matrix::zeros();
    for (s, t) in source.iter().zip(target.iter()) {
        h += (s - source_center) * (t - target_center).transpose();
    }

    let svd = h.svd(true, true);
    let u = svd.u?;
    let v = svd.v_t?.transpose();
    let mut rot = v * u.transpose();

    if rot.determinant() < 0.0 {
        // Singular values are sorted in decreasing order so the last column is the least
        // significant one.
        let mut v = v;
        v.column_mut(2).neg_mut();
        rot = v * u.transpose();
    }

    Some(Rotation::from_rotation_matrix(
        &Rotation3::from_matrix_unchecked(rot),
    ))
}
