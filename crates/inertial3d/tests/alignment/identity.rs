use inertial3d::alignment::{apply_transform, compute_transform, verify, InertiaAligner};
use inertial3d::mass_properties::{RigidMassEstimator, UniformDensity};
use inertial3d::math::Vector;
use inertial3d::shape::Cuboid;

#[test]
fn aligning_a_body_onto_itself_is_the_identity() {
    let mesh = Cuboid::new(Vector::new(0.5, 1.5, 2.0)).to_trimesh();
    let mprops = UniformDensity::default().estimate(&mesh).unwrap();

    let alignment = compute_transform(
        &mprops.local_com,
        &mprops.local_com,
        &mprops.inertia,
        &mprops.inertia,
    );
    assert!(!alignment.is_ambiguous());
    assert!(alignment.transform.rotation_angle() < 1.0e-6);
    assert_eq!(alignment.transform.translation, Vector::zeros());

    let moved = apply_transform(&alignment.transform, mesh.vertices());
    assert_eq!(verify(&moved, mesh.vertices(), 1.0e-12), Ok(true));

    let result = InertiaAligner::<UniformDensity>::default()
        .align_meshes(&mesh, &mesh)
        .unwrap();
    assert_eq!(result.verify(mesh.vertices(), 1.0e-12), Ok(true));
}
