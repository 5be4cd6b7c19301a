use approx::assert_relative_eq;
use inertial3d::alignment::{compute_transform, AlignmentAmbiguity};
use inertial3d::mass_properties::{RigidMassEstimator, UniformDensity};
use inertial3d::math::{Isometry, Point, Vector};
use inertial3d::shape::Cuboid;

#[test]
fn cube_alignment_warns_and_still_matches_centers() {
    let cube = Cuboid::new(Vector::repeat(0.5)).to_trimesh();
    let target = cube.clone().transformed(&Isometry::new(
        Vector::new(5.0, -3.0, 2.0),
        Vector::new(0.0, 0.0, 30.0f64.to_radians()),
    ));

    let estimator = UniformDensity::default();
    let src = estimator.estimate(&cube).unwrap();
    let tgt = estimator.estimate(&target).unwrap();
    let alignment = compute_transform(&src.local_com, &tgt.local_com, &src.inertia, &tgt.inertia);

    assert!(matches!(
        alignment.ambiguity,
        Some(AlignmentAmbiguity::Isotropic { .. })
    ));
    assert_relative_eq!(
        alignment.transform.transform_point(&src.local_com),
        tgt.local_com,
        epsilon = 1.0e-12
    );
    assert_relative_eq!(tgt.local_com, Point::new(5.0, -3.0, 2.0), epsilon = 1.0e-9);

    let rot = alignment.transform.rotation.to_rotation_matrix();
    assert_relative_eq!(rot.matrix().determinant(), 1.0, epsilon = 1.0e-12);
}

#[test]
fn square_rod_alignment_is_axisymmetric() {
    let rod = Cuboid::new(Vector::new(0.5, 0.5, 2.0)).to_trimesh();
    let estimator = UniformDensity::default();
    let mprops = estimator.estimate(&rod).unwrap();
    let alignment = compute_transform(
        &mprops.local_com,
        &mprops.local_com,
        &mprops.inertia,
        &mprops.inertia,
    );

    assert!(matches!(
        alignment.ambiguity,
        Some(AlignmentAmbiguity::Axisymmetric { .. })
    ));
    assert!(alignment.transform.rotation_angle() < 1.0e-6);
}
