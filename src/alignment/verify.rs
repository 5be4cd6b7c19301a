use crate::math::{Point, Real, DIM};
use core::fmt;

/// Error raised when two point sequences of different lengths are compared.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("cannot compare {actual} points against {expected} expected points.")]
pub struct LengthMismatchError {
    /// The number of points being checked.
    pub actual: usize,
    /// The number of reference points.
    pub expected: usize,
}

/// The first coordinate found outside of the tolerance by [`first_violation`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Violation {
    /// Index of the offending point.
    pub index: usize,
    /// Offending coordinate axis (0 for x, 1 for y, 2 for z).
    pub axis: usize,
    /// The checked coordinate value.
    pub actual: Real,
    /// The reference coordinate value.
    pub expected: Real,
    /// `|actual - expected|`.
    pub deviation: Real,
    /// The tolerance that was exceeded.
    pub epsilon: Real,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = ["x", "y", "z"].get(self.axis).copied().unwrap_or("?");
        write!(
            f,
            "point {} deviates along {}: {} instead of {} (deviation {:e} > {:e})",
            self.index, axis, self.actual, self.expected, self.deviation, self.epsilon
        )
    }
}

/// Error returned by [`check`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum VerificationError {
    /// The point sequences have different lengths.
    #[error(transparent)]
    LengthMismatch(#[from] LengthMismatchError),
    /// A coordinate is outside of the tolerance.
    #[error("{0}")]
    Deviation(Violation),
}

/// Finds the first coordinate of `actual` that deviates from `expected` by more than `epsilon`.
///
/// Points are scanned in order, and the coordinates of each point along x, y, then z. A NaN
/// coordinate is always a violation.
pub fn first_violation(
    actual: &[Point<Real>],
    expected: &[Point<Real>],
    epsilon: Real,
) -> Result<Option<Violation>, LengthMismatchError> {
    if actual.len() != expected.len() {
        return Err(LengthMismatchError {
            actual: actual.len(),
            expected: expected.len(),
        });
    }

    for (index, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        for axis in 0..DIM {
            let deviation = (a[axis] - e[axis]).abs();

            if !(deviation <= epsilon) {
                return Ok(Some(Violation {
                    index,
                    axis,
                    actual: a[axis],
                    expected: e[axis],
                    deviation,
                    epsilon,
                }));
            }
        }
    }

    Ok(None)
}

/// Checks that every coordinate of `actual` is within `epsilon` of the same coordinate of
/// `expected`.
///
/// This is a per-coordinate bound, not a bound on the euclidean distance between points. The
/// first violation, if any, is logged at the `debug` level; use [`first_violation`] or [`check`]
/// to retrieve it.
///
/// # Example
///
/// ```
/// use inertial3d::alignment::verify;
/// use inertial3d::math::Point;
///
/// let a = [Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0)];
/// let b = [Point::new(0.0, 0.0, 1.0e-6), Point::new(1.0, 1.0, 1.0)];
/// assert_eq!(verify(&a, &b, 1.0e-5), Ok(true));
/// assert_eq!(verify(&a, &b, 1.0e-7), Ok(false));
/// assert!(verify(&a, &b[..1], 1.0e-5).is_err());
/// ```
pub fn verify(
    actual: &[Point<Real>],
    expected: &[Point<Real>],
    epsilon: Real,
) -> Result<bool, LengthMismatchError> {
    match first_violation(actual, expected, epsilon)? {
        Some(violation) => {
            log::debug!("verification failed: {violation}");
            Ok(false)
        }
        None => Ok(true),
    }
}

/// Like [`verify`], but reports the first violation as an error.
pub fn check(
    actual: &[Point<Real>],
    expected: &[Point<Real>],
    epsilon: Real,
) -> Result<(), VerificationError> {
    match first_violation(actual, expected, epsilon)? {
        Some(violation) => Err(VerificationError::Deviation(violation)),
        None => Ok(()),
    }
}
