//! cxkit prelude.
//!
//! This module contains the most used types, traits, functions, and
//! constants that you can import easily as a group.
//!
//! ```
//! use cxkit::prelude::*;
//!
//! ```

#[doc(no_inline)]
pub use crate::error::ComplexError;

#[doc(no_inline)]
pub use crate::num::{approx_eq_f64, ComplexValue, ImagExt, DEFAULT_TOLERANCE};

#[doc(no_inline)]
pub use crate::polar::Polar;

#[doc(no_inline)]
pub use crate::rectangular::Rectangular;
