use std::fmt;

/// Domain errors for complex arithmetic
#[derive(Debug, PartialEq)]
pub enum ComplexError {
    NegativeExponent(i32),
    DivideByZero,
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexError::NegativeExponent(n) => write!(
                f,
                "integer power does not accept a negative exponent ({}), use powf instead",
                n
            ),
            ComplexError::DivideByZero => {
                write!(f, "division by a complex value with zero magnitude")
            }
        }
    }
}

impl std::error::Error for ComplexError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            format!("{}", ComplexError::NegativeExponent(-2)),
            "integer power does not accept a negative exponent (-2), use powf instead"
        );
        assert_eq!(
            format!("{}", ComplexError::DivideByZero),
            "division by a complex value with zero magnitude"
        );
    }
}
