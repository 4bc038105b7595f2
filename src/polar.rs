use crate::error::ComplexError;
use crate::num::{approx_zero_f64, ComplexValue};
use crate::rectangular::Rectangular;
use regex::Regex;
use simple_error::{bail, SimpleError};
use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;
use std::ops::{Div, DivAssign, Mul, MulAssign, Neg};
use std::str::FromStr;

// Repeated +/- 2pi rather than floating modulo, so behavior at the
// boundaries stays exact. NaN falls through unchanged.
fn wrap_angle(mut ang: f64) -> f64 {
    while ang >= TAU {
        ang -= TAU;
    }
    while ang < 0.0 {
        ang += TAU;
        // adding a full turn to a tiny negative angle can round up to
        // exactly TAU, which sits outside [0, 2pi)
        if ang >= TAU {
            ang -= TAU;
        }
    }
    ang
}

/// A complex number in polar form, `mag∠ang`.
///
/// The canonical multiplicative representation: multiplication multiplies
/// magnitudes and adds angles. The magnitude is signed (`-r∠θ` is the same
/// point as `r∠θ+π`), and the angle is normalized into `[0, 2π)` by the
/// constructor. Every operation rebuilds through [`Polar::new`], so the
/// angle invariant always holds.
///
/// A value with `mag == 0` is zero regardless of its angle; zero has no
/// unique polar representation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Polar {
    mag: f64,
    ang: f64,
}

impl Polar {
    /// Zero carries angle 0 by convention
    pub const ZERO: Polar = Polar { mag: 0.0, ang: 0.0 };
    pub const ONE: Polar = Polar { mag: 1.0, ang: 0.0 };
    /// The imaginary unit, `1∠π/2`
    pub const I: Polar = Polar {
        mag: 1.0,
        ang: FRAC_PI_2,
    };

    /// Create a new complex number from a magnitude and angle in radians,
    /// normalizing the angle into `[0, 2π)`
    pub fn new(mag: f64, ang: f64) -> Self {
        Polar {
            mag,
            ang: wrap_angle(ang),
        }
    }

    /// Get the magnitude (signed)
    pub fn mag(&self) -> f64 {
        self.mag
    }

    /// Get the angle in radians, in `[0, 2π)`
    pub fn ang(&self) -> f64 {
        self.ang
    }

    /// Get the complex conjugate, reflecting across the real axis
    pub fn conj(&self) -> Self {
        Polar::new(self.mag, -self.ang)
    }

    /// Divide by another polar value: magnitudes divide, angles subtract.
    ///
    /// Errors with [`ComplexError::DivideByZero`] when the divisor's
    /// magnitude is exactly zero.
    pub fn try_div(&self, divisor: &Polar) -> Result<Polar, ComplexError> {
        if divisor.mag == 0.0 {
            return Err(ComplexError::DivideByZero);
        }
        Ok(Polar::new(self.mag / divisor.mag, self.ang - divisor.ang))
    }

    /// Divide the magnitude by a real scalar. Same zero-divisor error as
    /// [`Polar::try_div`].
    pub fn try_div_scalar(&self, divisor: f64) -> Result<Polar, ComplexError> {
        if divisor == 0.0 {
            return Err(ComplexError::DivideByZero);
        }
        Ok(Polar::new(self.mag / divisor, self.ang))
    }

    /// Raise to an arbitrary real power: the magnitude is raised to `n`
    /// and the angle is multiplied by `n` (de Moivre). Unlike
    /// [`Rectangular::ipow`], non-integer exponents are fine here.
    pub fn powf(&self, n: f64) -> Polar {
        Polar::new(self.mag.powf(n), self.ang * n)
    }
}

impl ComplexValue for Polar {
    /// The stored magnitude component directly (signed)
    fn magnitude(&self) -> f64 {
        self.mag
    }

    fn to_rectangular(&self) -> Rectangular {
        Rectangular::new(self.mag * self.ang.cos(), self.mag * self.ang.sin())
    }

    fn to_polar(&self) -> Polar {
        *self
    }

    fn is_real_tol(&self, tol: f64) -> bool {
        approx_zero_f64(self.mag * self.ang.sin(), tol)
    }

    fn is_imaginary_tol(&self, tol: f64) -> bool {
        approx_zero_f64(self.mag * self.ang.cos(), tol)
    }
}

impl From<(f64, f64)> for Polar {
    fn from(num: (f64, f64)) -> Self {
        Polar::new(num.0, num.1)
    }
}

impl From<Rectangular> for Polar {
    fn from(num: Rectangular) -> Self {
        num.to_polar()
    }
}

impl Neg for Polar {
    type Output = Self;

    // sign flip on the magnitude; the angle is untouched
    fn neg(self) -> Self {
        Polar::new(-self.mag, self.ang)
    }
}

impl Neg for &Polar {
    type Output = Polar;

    fn neg(self) -> Polar {
        -*self
    }
}

impl Mul for Polar {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Polar::new(self.mag * other.mag, self.ang + other.ang)
    }
}

impl Mul<&Polar> for Polar {
    type Output = Self;

    fn mul(self, other: &Self) -> Self {
        self * *other
    }
}

impl Mul<Polar> for &Polar {
    type Output = Polar;

    fn mul(self, other: Polar) -> Polar {
        *self * other
    }
}

impl Mul<&Polar> for &Polar {
    type Output = Polar;

    fn mul(self, other: &Polar) -> Polar {
        *self * *other
    }
}

impl Mul<f64> for Polar {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        Polar::new(self.mag * other, self.ang)
    }
}

impl Mul<Polar> for f64 {
    type Output = Polar;

    fn mul(self, other: Polar) -> Polar {
        other * self
    }
}

impl Div<Polar> for f64 {
    type Output = Polar;

    /// # Panics
    ///
    /// Panics with the [`ComplexError::DivideByZero`] message when the
    /// divisor's magnitude is exactly zero.
    fn div(self, other: Polar) -> Polar {
        Polar::new(self, 0.0) / other
    }
}

impl Div for Polar {
    type Output = Self;

    /// # Panics
    ///
    /// Panics with the [`ComplexError::DivideByZero`] message when the
    /// divisor's magnitude is exactly zero. Use [`Polar::try_div`] for the
    /// fallible form.
    fn div(self, other: Self) -> Self {
        match self.try_div(&other) {
            Ok(quot) => quot,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Div<&Polar> for Polar {
    type Output = Self;

    fn div(self, other: &Self) -> Self {
        self / *other
    }
}

impl Div<Polar> for &Polar {
    type Output = Polar;

    fn div(self, other: Polar) -> Polar {
        *self / other
    }
}

impl Div<&Polar> for &Polar {
    type Output = Polar;

    fn div(self, other: &Polar) -> Polar {
        *self / *other
    }
}

impl Div<f64> for Polar {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on a zero scalar divisor. Use [`Polar::try_div_scalar`] for
    /// the fallible form.
    fn div(self, other: f64) -> Self {
        match self.try_div_scalar(other) {
            Ok(quot) => quot,
            Err(err) => panic!("{}", err),
        }
    }
}

impl MulAssign for Polar {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl MulAssign<f64> for Polar {
    fn mul_assign(&mut self, other: f64) {
        *self = *self * other;
    }
}

impl DivAssign for Polar {
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

impl DivAssign<f64> for Polar {
    fn div_assign(&mut self, other: f64) {
        *self = *self / other;
    }
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}∠{}", self.mag, self.ang)
    }
}

impl FromStr for Polar {
    type Err = SimpleError;

    /// Parse `"r∠θ"` or `"r<θ"` with the angle in radians
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re_polar = Regex::new(
            r"^\s*(?<mag>[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*[∠<]\s*(?<ang>[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*$",
        )
        .expect("Invalid regex!");

        match re_polar.captures(s) {
            Some(caps) => {
                let mag = caps["mag"]
                    .parse::<f64>()
                    .map_err(|err| SimpleError::new(err.to_string()))?;
                let ang = caps["ang"]
                    .parse::<f64>()
                    .map_err(|err| SimpleError::new(err.to_string()))?;
                Ok(Polar::new(mag, ang))
            }
            None => bail!("string not recognized as a polar complex number"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::{comp_f64, comp_polar, comp_rect};
    use float_cmp::F64Margin;
    use std::f64::consts::{FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI};

    const MARGIN: F64Margin = F64Margin {
        epsilon: 1e-12,
        ulps: 4,
    };

    #[test]
    fn polar_angle_normalization() {
        assert_eq!(Polar::new(1.0, 0.0).ang(), 0.0);
        assert_eq!(Polar::new(1.0, TAU).ang(), 0.0);
        comp_f64(
            &(3.0 * FRAC_PI_2),
            &Polar::new(1.0, -FRAC_PI_2).ang(),
            MARGIN,
            "wrap_neg",
            "ang",
        );
        comp_f64(
            &PI,
            &Polar::new(1.0, 7.0 * PI).ang(),
            MARGIN,
            "wrap_multiple_turns",
            "ang",
        );
        comp_f64(
            &FRAC_PI_4,
            &Polar::new(1.0, FRAC_PI_4 - 2.0 * TAU).ang(),
            MARGIN,
            "wrap_down",
            "ang",
        );

        // every value lands in [0, 2pi)
        for k in -8..8 {
            let p = Polar::new(2.0, 0.3 + (k as f64) * TAU);
            assert!((0.0..TAU).contains(&p.ang()));
        }
    }

    #[test]
    fn polar_angle_normalization_upper_boundary() {
        // adding 2pi to a tiny negative angle rounds to exactly TAU; the
        // stored angle must still land back inside [0, 2pi)
        for ang in [-1e-17, -1e-20, -f64::MIN_POSITIVE] {
            let p = Polar::new(1.0, ang);
            assert!(
                (0.0..TAU).contains(&p.ang()),
                "angle {} stored out of range as {}",
                ang,
                p.ang()
            );
            assert_eq!(p.ang(), 0.0);
        }
        assert_eq!(Polar::new(1.0, -1e-17), Polar::new(1.0, 0.0));

        // conjugating a near-zero angle goes through the same wrap
        let c = Polar::new(2.0, 1e-17).conj();
        assert!((0.0..TAU).contains(&c.ang()));
        assert_eq!(c.ang(), 0.0);
    }

    #[test]
    fn polar_constants() {
        assert_eq!(Polar::ZERO, Polar::new(0.0, 0.0));
        assert_eq!(Polar::ONE, Polar::new(1.0, 0.0));
        assert_eq!(Polar::I, Polar::new(1.0, FRAC_PI_2));
        assert!(Polar::I.approx_eq(&Rectangular::I));
        assert!(Polar::ONE.approx_eq(&Rectangular::ONE));
        assert!(Polar::ZERO.approx_eq(&Rectangular::ZERO));
    }

    #[test]
    fn polar_zero_is_zero_at_any_angle() {
        let z = Polar::new(0.0, 1.25);
        assert!(z.approx_eq(&Polar::ZERO));
        assert!(z.approx_eq(&Rectangular::ZERO));
        assert!(z.is_real() && z.is_imaginary());
    }

    #[test]
    fn polar_neg() {
        let p = Polar::new(2.0, FRAC_PI_4);
        let n = -p;
        assert_eq!(n.mag(), -2.0);
        assert_eq!(n.ang(), p.ang());
        assert!(n.approx_eq(&-p.to_rectangular()));
        assert_eq!(-&p, n);
    }

    #[test]
    fn polar_mul() {
        let p1 = Polar::new(1.5, FRAC_PI_4);
        let p2 = Polar::new(2.0, FRAC_PI_2);

        let prod = p1 * p2;
        assert_eq!(prod.mag(), 3.0);
        comp_f64(&(3.0 * FRAC_PI_4), &prod.ang(), MARGIN, "mul", "ang");
        assert_eq!(&p1 * &p2, prod);

        // angles re-normalize past a full turn
        let wrap = Polar::new(1.0, 5.0) * Polar::new(1.0, 2.0);
        comp_f64(&(7.0 - TAU), &wrap.ang(), MARGIN, "mul_wrap", "ang");

        assert_eq!(p1 * 2.0, Polar::new(3.0, FRAC_PI_4));
        assert_eq!(2.0 * p1, Polar::new(3.0, FRAC_PI_4));

        let mut acc = p1;
        acc *= p2;
        assert_eq!(acc, prod);
        acc *= 2.0;
        assert_eq!(acc.mag(), 6.0);
    }

    #[test]
    fn polar_div() {
        let p1 = Polar::new(3.0, PI);
        let p2 = Polar::new(1.5, FRAC_PI_2);

        let quot = p1 / p2;
        assert_eq!(quot.mag(), 2.0);
        comp_f64(&FRAC_PI_2, &quot.ang(), MARGIN, "div", "ang");

        // angle subtraction wraps back into range
        let wrap = Polar::new(1.0, FRAC_PI_4) / Polar::new(1.0, FRAC_PI_2);
        comp_f64(&(TAU - FRAC_PI_4), &wrap.ang(), MARGIN, "div_wrap", "ang");

        assert_eq!(p1 / 1.5, Polar::new(2.0, PI));

        // scalar on the left inverts magnitude and negates the angle
        let recip = 6.0 / Polar::new(2.0, FRAC_PI_3);
        assert_eq!(recip.mag(), 3.0);
        comp_f64(&(TAU - FRAC_PI_3), &recip.ang(), MARGIN, "scalar_div", "ang");
        assert!(recip.approx_eq(&(6.0 / Polar::new(2.0, FRAC_PI_3).to_rectangular())));

        let mut acc = p1;
        acc /= p2;
        assert_eq!(acc, quot);
        acc /= 2.0;
        assert_eq!(acc.mag(), 1.0);
    }

    #[test]
    fn polar_div_by_zero() {
        let p = Polar::ONE;
        assert_eq!(p.try_div(&Polar::ZERO), Err(ComplexError::DivideByZero));
        assert_eq!(
            p.try_div(&Polar::new(0.0, 1.0)),
            Err(ComplexError::DivideByZero)
        );
        assert_eq!(p.try_div_scalar(0.0), Err(ComplexError::DivideByZero));
    }

    #[test]
    #[should_panic(expected = "zero magnitude")]
    fn polar_div_by_zero_panics() {
        let _ = Polar::ONE / Polar::ZERO;
    }

    #[test]
    fn polar_powf() {
        // de Moivre: the angle multiplies, it is never exponentiated
        let p = Polar::new(2.0, FRAC_PI_6);
        let cube = p.powf(3.0);
        comp_f64(&8.0, &cube.mag(), MARGIN, "powf", "mag");
        comp_f64(&FRAC_PI_2, &cube.ang(), MARGIN, "powf", "ang");

        let sq = Polar::new(1.0, FRAC_PI_3).powf(2.0);
        comp_f64(&(2.0 * FRAC_PI_3), &sq.ang(), MARGIN, "powf_angle", "ang");

        // non-integer exponents are allowed, unlike rectangular ipow
        let root = Polar::new(4.0, 0.0).powf(0.5);
        comp_f64(&2.0, &root.mag(), MARGIN, "powf_root", "mag");
        comp_f64(&0.0, &root.ang(), MARGIN, "powf_root", "ang");

        assert_eq!(p.powf(0.0), Polar::ONE);
    }

    #[test]
    fn polar_conj() {
        let p = Polar::new(2.0, FRAC_PI_3);
        let c = p.conj();
        assert_eq!(c.mag(), 2.0);
        comp_f64(&(TAU - FRAC_PI_3), &c.ang(), MARGIN, "conj", "ang");
        comp_polar(&p, &c.conj(), MARGIN, "conj_involution");
        assert!(c.approx_eq(&p.to_rectangular().conj()));
    }

    #[test]
    fn polar_to_rectangular() {
        let r = Polar::new(1.0, FRAC_PI_2).to_rectangular();
        comp_rect(&Rectangular::new(0.0, 1.0), &r, MARGIN, "to_rect_i");

        let r2 = Polar::new(2.0, PI).to_rectangular();
        comp_rect(&Rectangular::new(-2.0, 0.0), &r2, MARGIN, "to_rect_pi");

        // round trip
        let p = Polar::new(3.5, 1.2);
        comp_polar(&p, &p.to_rectangular().to_polar(), MARGIN, "round_trip");
    }

    #[test]
    fn polar_predicates() {
        assert!(Polar::new(3.0, 0.0).is_real());
        assert!(Polar::new(3.0, PI).is_real());
        assert!(!Polar::new(3.0, FRAC_PI_2).is_real());
        assert!(Polar::new(3.0, FRAC_PI_2).is_imaginary());
        assert!(Polar::new(3.0, 3.0 * FRAC_PI_2).is_imaginary());
        assert!(!Polar::new(3.0, 0.0).is_imaginary());
        assert!(Polar::ZERO.is_real() && Polar::ZERO.is_imaginary());

        assert!(Polar::new(1.0, 0.01).is_real_tol(0.1));
        assert!(!Polar::new(1.0, 0.01).is_real_tol(1e-4));
    }

    #[test]
    fn polar_display() {
        assert_eq!(format!("{}", Polar::new(1.0, 0.0)), "1∠0");
        assert_eq!(format!("{}", Polar::new(2.5, 1.5)), "2.5∠1.5");
    }

    #[test]
    fn polar_from_str() {
        assert_eq!("1∠0".parse::<Polar>().unwrap(), Polar::new(1.0, 0.0));
        assert_eq!("2.5∠1.5".parse::<Polar>().unwrap(), Polar::new(2.5, 1.5));
        assert_eq!("2.5 < 1.5".parse::<Polar>().unwrap(), Polar::new(2.5, 1.5));
        assert_eq!("-2<0.5".parse::<Polar>().unwrap(), Polar::new(-2.0, 0.5));
        // the stored angle is normalized on the way in
        comp_f64(
            &(TAU - 1.0),
            &"1∠-1".parse::<Polar>().unwrap().ang(),
            MARGIN,
            "parse_wrap",
            "ang",
        );

        assert!("".parse::<Polar>().is_err());
        assert!("1".parse::<Polar>().is_err());
        assert!("1∠".parse::<Polar>().is_err());
    }
}
