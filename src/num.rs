use crate::polar::Polar;
use crate::rectangular::Rectangular;
use std::f64::consts::FRAC_PI_2;

/// Default tolerance for approximate comparisons
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Two floats are approximately equal when their absolute difference is
/// strictly below `tol`.
pub fn approx_eq_f64(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

pub fn approx_zero_f64(a: f64, tol: f64) -> bool {
    approx_eq_f64(a, 0.0, tol)
}

/// Capability set shared by the two complex representations.
///
/// Exactly two implementors exist, [`Rectangular`] and [`Polar`]. The trait
/// is the seam that lets a value in either representation be compared
/// against a value in the other: both are projected to rectangular form
/// first, so `Rectangular` vs `Polar` comparisons work transparently.
pub trait ComplexValue {
    /// Euclidean distance from the origin
    fn magnitude(&self) -> f64;

    fn to_rectangular(&self) -> Rectangular;

    fn to_polar(&self) -> Polar;

    /// True when the imaginary part is within `tol` of zero
    fn is_real_tol(&self, tol: f64) -> bool;

    /// True when the real part is within `tol` of zero
    fn is_imaginary_tol(&self, tol: f64) -> bool;

    fn is_real(&self) -> bool {
        self.is_real_tol(DEFAULT_TOLERANCE)
    }

    fn is_imaginary(&self) -> bool {
        self.is_imaginary_tol(DEFAULT_TOLERANCE)
    }

    /// Componentwise approximate equality on the rectangular projections
    fn approx_eq_tol<T: ComplexValue>(&self, other: &T, tol: f64) -> bool {
        let a = self.to_rectangular();
        let b = other.to_rectangular();
        approx_eq_f64(a.re(), b.re(), tol) && approx_eq_f64(a.im(), b.im(), tol)
    }

    fn approx_eq<T: ComplexValue>(&self, other: &T) -> bool {
        self.approx_eq_tol(other, DEFAULT_TOLERANCE)
    }
}

/// Imaginary-suffix constructors on the numeric primitives, so `5.0.i()`
/// reads like the mathematical notation `5i`.
///
/// The polar variant always emits a non-negative magnitude: `m.i_polar()`
/// is `|m|∠π/2` for `m >= 0` and `|m|∠3π/2` for `m < 0`.
pub trait ImagExt {
    fn i(self) -> Rectangular;

    fn i_polar(self) -> Polar;
}

impl ImagExt for f64 {
    fn i(self) -> Rectangular {
        Rectangular::new(0.0, self)
    }

    fn i_polar(self) -> Polar {
        if self >= 0.0 {
            Polar::new(self, FRAC_PI_2)
        } else {
            Polar::new(-self, 3.0 * FRAC_PI_2)
        }
    }
}

impl ImagExt for i32 {
    fn i(self) -> Rectangular {
        (self as f64).i()
    }

    fn i_polar(self) -> Polar {
        (self as f64).i_polar()
    }
}
