use inertial3d::alignment::{check, verify, LengthMismatchError, VerificationError};
use inertial3d::math::Point;

#[test]
fn verify_rejects_sequences_of_different_lengths() {
    let actual: Vec<_> = (0..10).map(|i| Point::new(i as f64, 0.0, 0.0)).collect();
    let expected = &actual[..9];

    assert_eq!(
        verify(&actual, expected, 1.0),
        Err(LengthMismatchError {
            actual: 10,
            expected: 9
        })
    );
    assert_eq!(
        check(&actual, expected, 1.0),
        Err(VerificationError::LengthMismatch(LengthMismatchError {
            actual: 10,
            expected: 9
        }))
    );
}
