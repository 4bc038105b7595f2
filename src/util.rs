use crate::num::ComplexValue;
use crate::polar::Polar;
use crate::rectangular::Rectangular;
use float_cmp::{approx_eq, F64Margin};

pub fn comp_f64(exemplar: &f64, calc: &f64, precision: F64Margin, test: &str, idx: &str) {
    debug_assert!(
        approx_eq!(f64, *calc, *exemplar, precision),
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}

pub fn comp_rect(exemplar: &Rectangular, calc: &Rectangular, precision: F64Margin, test: &str) {
    comp_f64(&exemplar.re(), &calc.re(), precision, test, "re");
    comp_f64(&exemplar.im(), &calc.im(), precision, test, "im");
}

/// Compare two polar values through their rectangular projections, so
/// equivalent points with different stored (mag, ang) pairs still match.
pub fn comp_polar(exemplar: &Polar, calc: &Polar, precision: F64Margin, test: &str) {
    comp_rect(
        &exemplar.to_rectangular(),
        &calc.to_rectangular(),
        precision,
        test,
    );
}

pub fn comp_vec_rect(
    exemplar: &[Rectangular],
    calc: &[Rectangular],
    precision: F64Margin,
    test: &str,
) {
    for k in 0..calc.len() {
        comp_rect(&exemplar[k], &calc[k], precision, &format!("{} ({})", test, k));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn comp_helpers_accept_equal_values() {
        let margin = F64Margin::default();
        comp_f64(&1.0, &1.0, margin, "comp_f64", "0");
        comp_rect(
            &Rectangular::new(1.0, -2.0),
            &Rectangular::new(1.0, -2.0),
            margin,
            "comp_rect",
        );
        comp_polar(
            &Polar::new(1.0, 0.5),
            &Polar::new(1.0, 0.5),
            margin,
            "comp_polar",
        );
        comp_vec_rect(
            &[Rectangular::ONE, Rectangular::I],
            &[Rectangular::ONE, Rectangular::I],
            margin,
            "comp_vec_rect",
        );
    }

    #[test]
    fn comp_polar_matches_negative_magnitude_alias() {
        // -r at angle theta is the same point as r at theta + pi
        let margin = F64Margin {
            epsilon: 1e-12,
            ulps: 4,
        };
        let a = Polar::new(-2.0, 0.5);
        let b = Polar::new(2.0, 0.5 + std::f64::consts::PI);
        comp_polar(&a, &b, margin, "negative_magnitude_alias");
    }
}
