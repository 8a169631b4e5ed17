//! Gauss-Legendre quadrature and Gegenbauer polynomials.

use crate::common::constants::PI;

const NEWTON_MAX_ITERATIONS: usize = 100;
const NEWTON_TOLERANCE: f64 = 1.0e-15;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuadratureError {
    #[error("gauss-legendre rule requires at least 1 node, got {actual}")]
    EmptyRule { actual: usize },
    #[error("gauss-legendre node {index} did not converge after {iterations} iterations")]
    NodeDidNotConverge { index: usize, iterations: usize },
    #[error("quadrature interval [{lower}, {upper}] must be finite")]
    NonFiniteInterval { lower: f64, upper: f64 },
    #[error("quadrature produced a non-finite result")]
    NonFiniteResult,
}

/// Nodes and weights on `[-1, 1]`, nodes ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussLegendreRule {
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl GaussLegendreRule {
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Exact for polynomials of degree `2 * len() - 1`.
    pub fn exact_degree(&self) -> usize {
        (2 * self.len()).saturating_sub(1)
    }
}

/// Builds an `order`-point rule by Newton iteration on `P_order`.
pub fn gauss_legendre(order: usize) -> Result<GaussLegendreRule, QuadratureError> {
    if order == 0 {
        return Err(QuadratureError::EmptyRule { actual: order });
    }

    let n = order as f64;
    let mut nodes = vec![0.0; order];
    let mut weights = vec![0.0; order];
    let half = order.div_ceil(2);

    for index in 0..half {
        let mut z = (PI * (index as f64 + 0.75) / (n + 0.5)).cos();
        let mut derivative = 0.0;
        let mut converged = false;

        for _ in 0..NEWTON_MAX_ITERATIONS {
            let (value, slope) = legendre_with_derivative(order, z);
            derivative = slope;
            let step = value / slope;
            z -= step;
            if step.abs() <= NEWTON_TOLERANCE {
                converged = true;
                break;
            }
        }
        if !converged {
            return Err(QuadratureError::NodeDidNotConverge {
                index,
                iterations: NEWTON_MAX_ITERATIONS,
            });
        }

        let weight = 2.0 / ((1.0 - z * z) * derivative * derivative);
        nodes[index] = -z;
        nodes[order - 1 - index] = z;
        weights[index] = weight;
        weights[order - 1 - index] = weight;
    }

    if order % 2 == 1 {
        nodes[order / 2] = 0.0;
    }

    Ok(GaussLegendreRule { nodes, weights })
}

fn legendre_with_derivative(order: usize, x: f64) -> (f64, f64) {
    let mut current = 1.0;
    let mut previous = 0.0;
    for degree in 1..=order {
        let k = degree as f64;
        let next = ((2.0 * k - 1.0) * x * current - (k - 1.0) * previous) / k;
        previous = current;
        current = next;
    }
    let n = order as f64;
    let derivative = n * (x * current - previous) / (x * x - 1.0);
    (current, derivative)
}

/// Integrates `integrand` over `[lower, upper]` with the given rule.
pub fn integrate_gauss_legendre(
    rule: &GaussLegendreRule,
    lower: f64,
    upper: f64,
    integrand: impl Fn(f64) -> f64,
) -> Result<f64, QuadratureError> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(QuadratureError::NonFiniteInterval { lower, upper });
    }

    let midpoint = 0.5 * (upper + lower);
    let half_width = 0.5 * (upper - lower);
    let sum: f64 = rule
        .nodes
        .iter()
        .zip(&rule.weights)
        .map(|(node, weight)| weight * integrand(midpoint + half_width * node))
        .sum();

    let integral = half_width * sum;
    if !integral.is_finite() {
        return Err(QuadratureError::NonFiniteResult);
    }
    Ok(integral)
}

/// Gegenbauer polynomial `C^(alpha)_degree(x)` by three-term recurrence.
pub fn gegenbauer(degree: usize, alpha: f64, x: f64) -> f64 {
    if degree == 0 {
        return 1.0;
    }

    let mut previous = 1.0;
    let mut current = 2.0 * alpha * x;
    for k in 2..=degree {
        let k = k as f64;
        let next = (2.0 * x * (k + alpha - 1.0) * current - (k + 2.0 * alpha - 2.0) * previous) / k;
        previous = current;
        current = next;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::{gauss_legendre, gegenbauer, integrate_gauss_legendre, QuadratureError};

    fn assert_scalar_close(label: &str, expected: f64, actual: f64, abs_tol: f64, rel_tol: f64) {
        let diff = (expected - actual).abs();
        let scale = expected.abs().max(actual.abs()).max(1.0e-300);
        assert!(
            diff <= abs_tol || diff / scale <= rel_tol,
            "{label}: expected={expected:.15e} actual={actual:.15e} diff={diff:.3e}"
        );
    }

    #[test]
    fn sixteen_point_rule_weights_sum_to_interval_length() {
        let rule = gauss_legendre(16).expect("rule should build");
        assert_eq!(rule.len(), 16);
        assert_eq!(rule.exact_degree(), 31);
        assert_scalar_close("weight sum", 2.0, rule.weights().iter().sum(), 1.0e-14, 0.0);
        assert!(rule.nodes().windows(2).all(|pair| pair[0] < pair[1]));
        assert_scalar_close(
            "symmetry",
            -rule.nodes()[0],
            rule.nodes()[15],
            1.0e-15,
            0.0,
        );
    }

    #[test]
    fn rule_integrates_polynomials_exactly_up_to_its_degree() {
        let rule = gauss_legendre(16).expect("rule should build");
        for power in 0..=31 {
            let actual = integrate_gauss_legendre(&rule, 0.0, 1.0, |x| x.powi(power))
                .expect("polynomial integral should succeed");
            assert_scalar_close(
                &format!("x^{power}"),
                1.0 / f64::from(power + 1),
                actual,
                1.0e-14,
                1.0e-13,
            );
        }
    }

    #[test]
    fn odd_order_rule_has_zero_center_node() {
        let rule = gauss_legendre(5).expect("rule should build");
        assert_eq!(rule.nodes()[2], 0.0);
        assert_scalar_close("w0", 128.0 / 225.0, rule.weights()[2], 1.0e-14, 0.0);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert_eq!(
            gauss_legendre(0).expect_err("empty rule"),
            QuadratureError::EmptyRule { actual: 0 }
        );
        let rule = gauss_legendre(4).expect("rule should build");
        assert!(matches!(
            integrate_gauss_legendre(&rule, 0.0, f64::INFINITY, |x| x),
            Err(QuadratureError::NonFiniteInterval { .. })
        ));
    }

    #[test]
    fn gegenbauer_matches_closed_forms() {
        let x = 0.3;
        let alpha = 2.0;
        assert_eq!(gegenbauer(0, alpha, x), 1.0);
        assert_scalar_close("C1", 2.0 * alpha * x, gegenbauer(1, alpha, x), 1.0e-15, 0.0);
        let c2 = 2.0 * alpha * (alpha + 1.0) * x * x - alpha;
        assert_scalar_close("C2", c2, gegenbauer(2, alpha, x), 1.0e-14, 0.0);
        // C^(1)_n is the Chebyshev polynomial of the second kind.
        let u3 = 8.0 * x * x * x - 4.0 * x;
        assert_scalar_close("U3", u3, gegenbauer(3, 1.0, x), 1.0e-14, 0.0);
    }
}
