use inertial3d::alignment::{apply_transform, verify, RigidTransform};
use inertial3d::math::{Point, Rotation, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vector(rng: &mut StdRng, range: f64) -> Vector<f64> {
    Vector::new(
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
    )
}

#[test]
fn inverse_transform_restores_points() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let transform = RigidTransform::new(
            Rotation::from_scaled_axis(random_vector(&mut rng, 2.0)),
            random_vector(&mut rng, 20.0),
            Point::from(random_vector(&mut rng, 5.0)),
        );
        let points: Vec<_> = (0..50)
            .map(|_| Point::from(random_vector(&mut rng, 10.0)))
            .collect();

        let moved = apply_transform(&transform, &points);
        let restored = apply_transform(&transform.inverse(), &moved);
        assert_eq!(verify(&restored, &points, 1.0e-10), Ok(true));

        let composed = apply_transform(&(transform.inverse() * transform), &points);
        assert_eq!(verify(&composed, &points, 1.0e-10), Ok(true));
    }
}
