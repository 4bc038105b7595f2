#![allow(dead_code)]
pub mod error;
pub mod num;
pub mod polar;
pub mod prelude;
pub mod rectangular;
pub mod util;

/// Create a **[`Rectangular`]** complex number from its real and imaginary
/// parts.
///
/// ```
/// use cxkit::rect;
/// let z = rect![3.0, 4.0];
///
/// assert_eq!(z.re(), 3.0);
/// assert_eq!(z.im(), 4.0);
/// ```
///
#[macro_export]
macro_rules! rect {
    ($re:expr, $im:expr $(,)?) => {{
        $crate::rectangular::Rectangular::new($re, $im)
    }};
}

/// Create a **[`Polar`]** complex number from a magnitude and an angle in
/// radians. The angle is normalized into `[0, 2π)`.
///
/// ```
/// use cxkit::polar;
/// let p = polar![2.0, std::f64::consts::PI];
///
/// assert_eq!(p.mag(), 2.0);
/// ```
///
#[macro_export]
macro_rules! polar {
    ($mag:expr, $ang:expr $(,)?) => {{
        $crate::polar::Polar::new($mag, $ang)
    }};
}
