use approx::assert_relative_eq;
use inertial3d::alignment::{
    apply_transform, compute_transform, verify, InertiaAligner, RigidTransform,
};
use inertial3d::mass_properties::{RigidMassEstimator, UniformDensity};
use inertial3d::math::{Point, Rotation, Vector};
use inertial3d::shape::{Cuboid, TriMesh};

fn scenario() -> RigidTransform {
    RigidTransform::new(
        Rotation::from_axis_angle(&Vector::z_axis(), 30.0f64.to_radians()),
        Vector::new(5.0, -3.0, 2.0),
        Point::origin(),
    )
}

fn moved(mesh: &TriMesh, transform: &RigidTransform) -> TriMesh {
    TriMesh::new(
        transform.transform_points(mesh.vertices()),
        mesh.indices().to_vec(),
    )
    .unwrap()
}

#[test]
fn box_rotation_and_translation_are_recovered_from_inertia() {
    let source = Cuboid::new(Vector::new(1.0, 2.0, 3.0)).to_trimesh();
    let expected = scenario();
    let target = moved(&source, &expected);

    let estimator = UniformDensity::default();
    let src = estimator.estimate(&source).unwrap();
    let tgt = estimator.estimate(&target).unwrap();
    let alignment = compute_transform(&src.local_com, &tgt.local_com, &src.inertia, &tgt.inertia);

    assert!(!alignment.is_ambiguous());
    assert_relative_eq!(
        alignment.transform.rotation_angle(),
        30.0f64.to_radians(),
        epsilon = 1.0e-9
    );
    assert_relative_eq!(alignment.transform, expected, epsilon = 1.0e-9);

    let points = apply_transform(&alignment.transform, source.vertices());
    assert_eq!(verify(&points, target.vertices(), 1.0e-5), Ok(true));
}

#[test]
fn unit_cube_is_recovered_with_points() {
    let source = Cuboid::new(Vector::repeat(0.5)).to_trimesh();
    let expected = scenario();
    let target = moved(&source, &expected);

    let result = InertiaAligner::<UniformDensity>::default()
        .align_meshes(&source, &target)
        .unwrap();

    assert!(result.ambiguity.is_none());
    assert_relative_eq!(result.transform, expected, epsilon = 1.0e-9);
    assert_eq!(result.verify(target.vertices(), 1.0e-5), Ok(true));
}
