pub mod quadrature;

pub use quadrature::{
    gauss_legendre, gegenbauer, integrate_gauss_legendre, GaussLegendreRule, QuadratureError,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct NumericTolerance {
    #[serde(rename = "absTol")]
    pub abs_tol: f64,
    #[serde(rename = "relTol")]
    pub rel_tol: f64,
    #[serde(rename = "relativeFloor")]
    pub relative_floor: f64,
}

impl NumericTolerance {
    /// Bitwise-equal values only (signed zeros compare equal).
    pub const EXACT: Self = Self {
        abs_tol: 0.0,
        rel_tol: 0.0,
        relative_floor: 0.0,
    };

    pub const fn new(abs_tol: f64, rel_tol: f64) -> Self {
        Self {
            abs_tol,
            rel_tol,
            relative_floor: 1.0e-300,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.abs_tol == 0.0 && self.rel_tol == 0.0
    }
}

impl Default for NumericTolerance {
    fn default() -> Self {
        Self::EXACT
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceComparison {
    pub abs_diff: f64,
    pub rel_diff: f64,
    pub passes: bool,
}

pub fn compare_with_tolerance(
    baseline: f64,
    actual: f64,
    tolerance: NumericTolerance,
) -> ToleranceComparison {
    let abs_diff = (actual - baseline).abs();
    let rel_denominator = baseline.abs().max(tolerance.relative_floor);
    let rel_diff = if rel_denominator > 0.0 {
        abs_diff / rel_denominator
    } else if abs_diff == 0.0 {
        0.0
    } else {
        f64::INFINITY
    };
    let passes = abs_diff <= tolerance.abs_tol || abs_diff <= tolerance.rel_tol * rel_denominator;

    ToleranceComparison {
        abs_diff,
        rel_diff,
        passes,
    }
}

pub fn format_numeric(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    if value == f64::INFINITY {
        return "inf".to_string();
    }

    if value == f64::NEG_INFINITY {
        return "-inf".to_string();
    }

    format!("{value:.15E}")
}

fn kahan_add(sum: &mut f64, correction: &mut f64, value: f64) {
    let corrected = value - *correction;
    let next = *sum + corrected;
    *correction = (next - *sum) - corrected;
    *sum = next;
}

pub fn stable_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut correction = 0.0;

    for value in values {
        kahan_add(&mut sum, &mut correction, value);
    }

    sum
}

#[cfg(test)]
mod tests {
    use super::{compare_with_tolerance, format_numeric, stable_sum, NumericTolerance};

    #[test]
    fn stable_sum_reduces_order_loss_for_large_and_small_values() {
        let values = [1.0e16, 1.0, -1.0e16];
        assert_eq!(stable_sum(values), 1.0);
    }

    #[test]
    fn exact_tolerance_accepts_only_equal_values() {
        let exact = NumericTolerance::default();
        assert!(exact.is_exact());
        assert!(compare_with_tolerance(0.849, 0.849, exact).passes);
        assert!(!compare_with_tolerance(0.849, 0.849_000_000_1, exact).passes);
        assert!(compare_with_tolerance(0.0, 0.0, exact).passes);
        assert_eq!(compare_with_tolerance(0.0, 0.0, exact).rel_diff, 0.0);
        assert!(!compare_with_tolerance(1.0, f64::NAN, exact).passes);
    }

    #[test]
    fn compare_with_tolerance_uses_baseline_relative_scale() {
        let tolerance = NumericTolerance {
            abs_tol: 1.0e-9,
            rel_tol: 0.1,
            relative_floor: 1.0e-12,
        };
        let comparison = compare_with_tolerance(2.0, 2.19, tolerance);
        assert!((comparison.abs_diff - 0.19).abs() < 1.0e-12);
        assert!((comparison.rel_diff - 0.095).abs() < 1.0e-12);
        assert!(comparison.passes);

        let loose = NumericTolerance::new(0.0, 1.0e-2);
        assert!(compare_with_tolerance(6.46e-3, 6.5e-3, loose).passes);
        assert!(!compare_with_tolerance(6.46e-3, 6.6e-3, loose).passes);
    }

    #[test]
    fn tolerance_serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&NumericTolerance::new(1.0e-8, 1.0e-6))
            .expect("tolerance should serialize");
        assert!(json.contains("\"absTol\""));
        assert!(json.contains("\"relTol\""));
        assert!(json.contains("\"relativeFloor\""));
    }

    #[test]
    fn format_numeric_handles_special_values() {
        assert_eq!(format_numeric(f64::NAN), "NaN");
        assert_eq!(format_numeric(f64::INFINITY), "inf");
        assert_eq!(format_numeric(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_numeric(12.5), "1.250000000000000E1");
    }
}
