use crate::alignment::{AlignmentConfig, Degeneracy, InertiaAlignment, RigidTransform};
use crate::math::{Point, Real, Rotation, Vector};
use crate::utils;
use na::Rotation3;
use rstar::RTree;

/// Picks, among the rotations compatible with the inertia tensors, the one that best maps
/// `source_points` onto `target_points`.
///
/// The candidates are the current rotation of `alignment`, every proper sign flip of the
/// principal axes (or, for axisymmetric tensors, both orientations of the symmetry axis), and,
/// when the inertia is degenerate and both point sets have the same length, the least-squares
/// rotation of the index-paired points. Each candidate is scored by the mean distance from the
/// transformed source points to their nearest target point. When both point sets have the same
/// length, candidates scoring within `config.refinement_tolerance` of each other are ranked by
/// the mean distance between index-paired points. The centers of mass stay aligned whatever the
/// chosen candidate.
///
/// The ambiguity of the returned alignment is cleared if the best score is below
/// `config.refinement_tolerance`. If either point set is empty, `alignment` is returned
/// unchanged.
pub fn refine_with_points(
    config: &AlignmentConfig,
    alignment: &InertiaAlignment,
    source_points: &[Point<Real>],
    target_points: &[Point<Real>],
) -> InertiaAlignment {
    if source_points.is_empty() || target_points.is_empty() {
        return *alignment;
    }

    let tree = RTree::bulk_load(target_points.iter().map(|pt| [pt.x, pt.y, pt.z]).collect());
    let base = alignment.transform;
    let candidates = candidate_rotations(alignment, source_points, target_points);

    let paired = source_points.len() == target_points.len();
    let tol = config.refinement_tolerance;
    let mut best: Option<(Rotation<Real>, Real, Real)> = None;

    for rotation in candidates {
        let candidate = RigidTransform::new(rotation, base.translation, base.pivot);
        let score = mean_nearest_distance(&tree, &candidate, source_points);
        // Shapes with symmetries score equally for several rotations: the distance between
        // index-paired points breaks the tie, if the points are paired.
        let paired_score = if paired {
            mean_paired_distance(&candidate, source_points, target_points)
        } else {
            0.0
        };
        log::debug!(
            "rotation candidate (angle {:.6}): nearest distance {:e}, paired distance {:e}",
            rotation.angle(),
            score,
            paired_score
        );

        let is_better = match best {
            None => true,
            Some((_, best_score, best_paired)) => {
                score < best_score - tol
                    || (score <= best_score + tol && paired_score < best_paired - tol)
            }
        };

        if is_better {
            best = Some((rotation, score, paired_score));
        }
    }

    let (rotation, residual, _) = best.unwrap_or((base.rotation, Real::MAX, Real::MAX));
    let ambiguity = if residual <= config.refinement_tolerance {
        None
    } else {
        alignment.ambiguity
    };

    InertiaAlignment {
        transform: RigidTransform::new(rotation, base.translation, base.pivot),
        ambiguity,
        residual: Some(residual),
        ..*alignment
    }
}

fn candidate_rotations(
    alignment: &InertiaAlignment,
    source_points: &[Point<Real>],
    target_points: &[Point<Real>],
) -> Vec<Rotation<Real>> {
    let src = &alignment.source_frame;
    let tgt = &alignment.target_frame;
    let mut candidates = vec![alignment.transform.rotation];

    let degeneracy = src.joint_degeneracy(tgt);

    match degeneracy {
        Degeneracy::Distinct => candidates.extend(src.sign_candidates(tgt).into_iter().map(
            |mat| Rotation::from_rotation_matrix(&Rotation3::from_matrix_unchecked(mat)),
        )),
        Degeneracy::Axisymmetric { axis } => {
            let from: Vector<Real> = src.axes.column(axis).into_owned();
            let to: Vector<Real> = tgt.axes.column(axis).into_owned();
            candidates.extend(
                [to, -to]
                    .iter()
                    .filter_map(|to| Rotation::rotation_between(&from, to)),
            );
        }
        Degeneracy::Isotropic => {}
    }

    if degeneracy.is_degenerate() && source_points.len() == target_points.len() {
        let source_center = alignment.transform.pivot;
        let target_center = source_center + alignment.transform.translation;

        if let Some(rot) =
            utils::kabsch_rotation(source_points, &source_center, target_points, &target_center)
        {
            candidates.push(rot);
        }
    }

    candidates
}

fn mean_paired_distance(
    transform: &RigidTransform,
    source_points: &[Point<Real>],
    target_points: &[Point<Real>],
) -> Real {
    let total: Real = source_points
        .iter()
        .zip(target_points.iter())
        .map(|(src, tgt)| (transform.transform_point(src) - tgt).norm())
        .sum();

    total / source_points.len() as Real
}

fn mean_nearest_distance(
    tree: &RTree<[Real; 3]>,
    transform: &RigidTransform,
    points: &[Point<Real>],
) -> Real {
    let total: Real = points
        .iter()
        .map(|pt| {
            let moved = transform.transform_point(pt);
            tree.nearest_neighbor(&[moved.x, moved.y, moved.z])
                .map(|nearest| (moved - Point::from(*nearest)).norm())
                .unwrap_or(Real::MAX)
        })
        .sum();

    total / points.len() as Real
}
