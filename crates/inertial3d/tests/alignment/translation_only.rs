use approx::assert_relative_eq;
use inertial3d::alignment::InertiaAligner;
use inertial3d::mass_properties::UniformDensity;
use inertial3d::math::{Isometry, Vector};
use inertial3d::shape::Cuboid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn pure_translation_is_recovered() {
    let mut rng = StdRng::seed_from_u64(7);
    let source = Cuboid::new(Vector::new(1.0, 2.0, 3.0)).to_trimesh();
    let aligner = InertiaAligner::<UniformDensity>::default();

    for _ in 0..20 {
        let d = Vector::new(
            rng.gen_range(-50.0..50.0),
            rng.gen_range(-50.0..50.0),
            rng.gen_range(-50.0..50.0),
        );
        let target = source.clone().transformed(&Isometry::translation(d.x, d.y, d.z));
        let result = aligner.align_meshes(&source, &target).unwrap();

        assert!(result.ambiguity.is_none());
        assert!(result.transform.rotation_angle() < 1.0e-6);
        assert_relative_eq!(result.transform.translation, d, epsilon = 1.0e-9);
        assert_eq!(result.verify(target.vertices(), 1.0e-8), Ok(true));
    }
}
