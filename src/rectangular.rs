use crate::error::ComplexError;
use crate::num::{approx_zero_f64, ComplexValue};
use crate::polar::Polar;
use num_traits::{One, Zero};
use regex::Regex;
use simple_error::{bail, SimpleError};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A complex number in rectangular form, `re + im*i`.
///
/// The canonical additive representation: addition and subtraction act
/// componentwise. Values are immutable; every operation returns a fresh
/// value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangular {
    re: f64,
    im: f64,
}

impl Rectangular {
    pub const ZERO: Rectangular = Rectangular { re: 0.0, im: 0.0 };
    pub const ONE: Rectangular = Rectangular { re: 1.0, im: 0.0 };
    /// The imaginary unit
    pub const I: Rectangular = Rectangular { re: 0.0, im: 1.0 };

    /// Create a new complex number from real and imaginary parts
    pub fn new(re: f64, im: f64) -> Self {
        Rectangular { re, im }
    }

    /// Create a new complex number from a real number (imaginary part = 0)
    pub fn from_real(re: f64) -> Self {
        Rectangular::new(re, 0.0)
    }

    /// Create a new complex number from an imaginary number (real part = 0)
    pub fn from_imag(im: f64) -> Self {
        Rectangular::new(0.0, im)
    }

    /// Get the real part
    pub fn re(&self) -> f64 {
        self.re
    }

    /// Get the imaginary part
    pub fn im(&self) -> f64 {
        self.im
    }

    /// Get the complex conjugate
    pub fn conj(&self) -> Self {
        Rectangular::new(self.re, -self.im)
    }

    /// Calculate the square of the magnitude
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Divide by another rectangular value.
    ///
    /// Errors with [`ComplexError::DivideByZero`] when the divisor's squared
    /// magnitude is exactly zero, rather than silently producing a
    /// non-finite result.
    pub fn try_div(&self, divisor: &Rectangular) -> Result<Rectangular, ComplexError> {
        let den = divisor.norm_sqr();
        if den == 0.0 {
            return Err(ComplexError::DivideByZero);
        }
        Ok(Rectangular::new(
            (self.re * divisor.re + self.im * divisor.im) / den,
            (self.im * divisor.re - self.re * divisor.im) / den,
        ))
    }

    /// Divide by a real scalar, componentwise. Same zero-divisor error as
    /// [`Rectangular::try_div`].
    pub fn try_div_scalar(&self, divisor: f64) -> Result<Rectangular, ComplexError> {
        if divisor == 0.0 {
            return Err(ComplexError::DivideByZero);
        }
        Ok(Rectangular::new(self.re / divisor, self.im / divisor))
    }

    /// Raise to a non-negative integer power by repeated multiplication.
    ///
    /// `z.ipow(0)` is [`Rectangular::ONE`] for every `z`, including zero.
    /// A negative exponent errors with [`ComplexError::NegativeExponent`];
    /// use [`Rectangular::powf`] for those.
    pub fn ipow(&self, n: i32) -> Result<Rectangular, ComplexError> {
        if n < 0 {
            return Err(ComplexError::NegativeExponent(n));
        }
        let mut out = Rectangular::ONE;
        for _ in 0..n {
            out = out * *self;
        }
        Ok(out)
    }

    /// Raise to an arbitrary real power, round-tripping through polar form
    pub fn powf(&self, n: f64) -> Rectangular {
        self.to_polar().powf(n).to_rectangular()
    }
}

impl ComplexValue for Rectangular {
    fn magnitude(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    fn to_rectangular(&self) -> Rectangular {
        *self
    }

    fn to_polar(&self) -> Polar {
        // atan2 yields the correctly signed angle in (-pi, pi]; the polar
        // constructor wraps it into [0, 2pi)
        Polar::new(self.magnitude(), self.im.atan2(self.re))
    }

    fn is_real_tol(&self, tol: f64) -> bool {
        approx_zero_f64(self.im, tol)
    }

    fn is_imaginary_tol(&self, tol: f64) -> bool {
        approx_zero_f64(self.re, tol)
    }
}

impl From<f64> for Rectangular {
    fn from(re: f64) -> Self {
        Rectangular::from_real(re)
    }
}

impl From<i32> for Rectangular {
    fn from(re: i32) -> Self {
        Rectangular::from_real(re as f64)
    }
}

impl From<(f64, f64)> for Rectangular {
    fn from(num: (f64, f64)) -> Self {
        Rectangular::new(num.0, num.1)
    }
}

impl From<Polar> for Rectangular {
    fn from(num: Polar) -> Self {
        num.to_rectangular()
    }
}

impl Neg for Rectangular {
    type Output = Self;

    fn neg(self) -> Self {
        Rectangular::new(-self.re, -self.im)
    }
}

impl Neg for &Rectangular {
    type Output = Rectangular;

    fn neg(self) -> Rectangular {
        -*self
    }
}

impl Add for Rectangular {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Rectangular::new(self.re + other.re, self.im + other.im)
    }
}

impl Add<&Rectangular> for Rectangular {
    type Output = Self;

    fn add(self, other: &Self) -> Self {
        self + *other
    }
}

impl Add<Rectangular> for &Rectangular {
    type Output = Rectangular;

    fn add(self, other: Rectangular) -> Rectangular {
        *self + other
    }
}

impl Add<&Rectangular> for &Rectangular {
    type Output = Rectangular;

    fn add(self, other: &Rectangular) -> Rectangular {
        *self + *other
    }
}

impl Add<f64> for Rectangular {
    type Output = Self;

    // a scalar addend only touches the real component
    fn add(self, other: f64) -> Self {
        Rectangular::new(self.re + other, self.im)
    }
}

impl Add<Rectangular> for f64 {
    type Output = Rectangular;

    fn add(self, other: Rectangular) -> Rectangular {
        other + self
    }
}

impl Sub for Rectangular {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Rectangular::new(self.re - other.re, self.im - other.im)
    }
}

impl Sub<&Rectangular> for Rectangular {
    type Output = Self;

    fn sub(self, other: &Self) -> Self {
        self - *other
    }
}

impl Sub<Rectangular> for &Rectangular {
    type Output = Rectangular;

    fn sub(self, other: Rectangular) -> Rectangular {
        *self - other
    }
}

impl Sub<&Rectangular> for &Rectangular {
    type Output = Rectangular;

    fn sub(self, other: &Rectangular) -> Rectangular {
        *self - *other
    }
}

impl Sub<f64> for Rectangular {
    type Output = Self;

    fn sub(self, other: f64) -> Self {
        Rectangular::new(self.re - other, self.im)
    }
}

impl Sub<Rectangular> for f64 {
    type Output = Rectangular;

    fn sub(self, other: Rectangular) -> Rectangular {
        Rectangular::new(self - other.re, -other.im)
    }
}

impl Mul for Rectangular {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Rectangular::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

impl Mul<&Rectangular> for Rectangular {
    type Output = Self;

    fn mul(self, other: &Self) -> Self {
        self * *other
    }
}

impl Mul<Rectangular> for &Rectangular {
    type Output = Rectangular;

    fn mul(self, other: Rectangular) -> Rectangular {
        *self * other
    }
}

impl Mul<&Rectangular> for &Rectangular {
    type Output = Rectangular;

    fn mul(self, other: &Rectangular) -> Rectangular {
        *self * *other
    }
}

impl Mul<f64> for Rectangular {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        Rectangular::new(self.re * other, self.im * other)
    }
}

impl Mul<Rectangular> for f64 {
    type Output = Rectangular;

    fn mul(self, other: Rectangular) -> Rectangular {
        other * self
    }
}

impl Div for Rectangular {
    type Output = Self;

    /// # Panics
    ///
    /// Panics with the [`ComplexError::DivideByZero`] message when the
    /// divisor's squared magnitude is exactly zero. Use
    /// [`Rectangular::try_div`] for the fallible form.
    fn div(self, other: Self) -> Self {
        match self.try_div(&other) {
            Ok(quot) => quot,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Div<&Rectangular> for Rectangular {
    type Output = Self;

    fn div(self, other: &Self) -> Self {
        self / *other
    }
}

impl Div<Rectangular> for &Rectangular {
    type Output = Rectangular;

    fn div(self, other: Rectangular) -> Rectangular {
        *self / other
    }
}

impl Div<&Rectangular> for &Rectangular {
    type Output = Rectangular;

    fn div(self, other: &Rectangular) -> Rectangular {
        *self / *other
    }
}

impl Div<f64> for Rectangular {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on a zero scalar divisor. Use
    /// [`Rectangular::try_div_scalar`] for the fallible form.
    fn div(self, other: f64) -> Self {
        match self.try_div_scalar(other) {
            Ok(quot) => quot,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Div<Rectangular> for f64 {
    type Output = Rectangular;

    fn div(self, other: Rectangular) -> Rectangular {
        Rectangular::from_real(self) / other
    }
}

impl AddAssign for Rectangular {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl AddAssign<f64> for Rectangular {
    fn add_assign(&mut self, other: f64) {
        *self = *self + other;
    }
}

impl SubAssign for Rectangular {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl SubAssign<f64> for Rectangular {
    fn sub_assign(&mut self, other: f64) {
        *self = *self - other;
    }
}

impl MulAssign for Rectangular {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl MulAssign<f64> for Rectangular {
    fn mul_assign(&mut self, other: f64) {
        *self = *self * other;
    }
}

impl DivAssign for Rectangular {
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

impl DivAssign<f64> for Rectangular {
    fn div_assign(&mut self, other: f64) {
        *self = *self / other;
    }
}

impl Zero for Rectangular {
    fn zero() -> Self {
        Rectangular::ZERO
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Rectangular {
    fn one() -> Self {
        Rectangular::ONE
    }
}

impl fmt::Display for Rectangular {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im == 0.0 {
            write!(f, "{}", self.re)
        } else if self.re == 0.0 {
            if self.im == 1.0 {
                write!(f, "i")
            } else if self.im == -1.0 {
                write!(f, "-i")
            } else {
                write!(f, "{}i", self.im)
            }
        } else if self.im == 1.0 {
            write!(f, "{} + i", self.re)
        } else if self.im == -1.0 {
            write!(f, "{} - i", self.re)
        } else if self.im > 0.0 {
            write!(f, "{} + {}i", self.re, self.im)
        } else {
            write!(f, "{} - {}i", self.re, -self.im)
        }
    }
}

fn parse_f64(val: &str) -> Result<f64, SimpleError> {
    val.parse::<f64>()
        .map_err(|err| SimpleError::new(err.to_string()))
}

impl FromStr for Rectangular {
    type Err = SimpleError;

    /// Parse `"a+bi"`, `"a-bi"`, `"a"`, `"bi"`, `"i"`, or `"-i"`; the
    /// imaginary marker may be `i` or `j`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re_full = Regex::new(
            r"^\s*(?<re>[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*(?<sign>[+-])\s*(?<im>(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)?[ij]\s*$",
        )
        .expect("Invalid regex!");
        let re_imag = Regex::new(
            r"^\s*(?<sign>[+-])?\s*(?<im>(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)?[ij]\s*$",
        )
        .expect("Invalid regex!");
        let re_real =
            Regex::new(r"^\s*(?<re>[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*$")
                .expect("Invalid regex!");

        if let Some(caps) = re_full.captures(s) {
            let re = parse_f64(&caps["re"])?;
            let im = match caps.name("im") {
                Some(val) => parse_f64(val.as_str())?,
                None => 1.0,
            };
            let im = if &caps["sign"] == "-" { -im } else { im };
            Ok(Rectangular::new(re, im))
        } else if let Some(caps) = re_imag.captures(s) {
            let im = match caps.name("im") {
                Some(val) => parse_f64(val.as_str())?,
                None => 1.0,
            };
            let im = match caps.name("sign") {
                Some(sign) if sign.as_str() == "-" => -im,
                _ => im,
            };
            Ok(Rectangular::from_imag(im))
        } else if let Some(caps) = re_real.captures(s) {
            Ok(Rectangular::from_real(parse_f64(&caps["re"])?))
        } else {
            bail!("string not recognized as a rectangular complex number")
        }
    }
}
