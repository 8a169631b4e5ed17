//! Occupation numbers `n(p) = int_{p_min}^{p} J(p') dp'` of a full profile.

use super::grid::is_strictly_ascending;
use super::helpers::{log_lin_interpolate, log_lin_segment_integral};
use crate::domain::{ComptonError, ComputeResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupationNumberRow {
    pub momentum: f64,
    pub compton_profile: f64,
    pub occupation_number: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OccupationNumberEvaluator {
    momentum_grid: Vec<f64>,
    profile: Vec<f64>,
    cumulative: Vec<f64>,
}

impl OccupationNumberEvaluator {
    pub fn new(momentum_grid: Vec<f64>, profile: Vec<f64>) -> ComputeResult<Self> {
        if momentum_grid.len() < 2 || momentum_grid.len() != profile.len() {
            return Err(ComptonError::input_validation(
                "INPUT.OCCUPATION_SHAPE",
                format!(
                    "occupation evaluator needs matching grids of at least 2 points, got grid={} profile={}",
                    momentum_grid.len(),
                    profile.len()
                ),
            ));
        }
        let finite = momentum_grid.iter().all(|value| value.is_finite());
        if !finite || !is_strictly_ascending(&momentum_grid) {
            return Err(ComptonError::input_validation(
                "INPUT.OCCUPATION_GRID",
                "occupation momentum grid must be finite and strictly ascending",
            ));
        }
        if profile.iter().any(|value| !value.is_finite() || *value < 0.0) {
            return Err(ComptonError::input_validation(
                "INPUT.OCCUPATION_PROFILE",
                "occupation profile values must be finite and >= 0",
            ));
        }

        let mut cumulative = Vec::with_capacity(momentum_grid.len());
        let mut running = 0.0;
        cumulative.push(running);
        for (x, y) in momentum_grid.windows(2).zip(profile.windows(2)) {
            running += log_lin_segment_integral(x[0], x[1], y[0], y[1]);
            cumulative.push(running);
        }

        Ok(Self {
            momentum_grid,
            profile,
            cumulative,
        })
    }

    pub fn momentum_grid(&self) -> &[f64] {
        &self.momentum_grid
    }

    /// Index `i` with `grid[i] <= momentum < grid[i + 1]`, or `None` outside the grid.
    fn segment(&self, momentum: f64) -> Option<usize> {
        let last = self.momentum_grid.len() - 1;
        if momentum < self.momentum_grid[0] || momentum > self.momentum_grid[last] {
            return None;
        }
        let upper = self
            .momentum_grid
            .partition_point(|value| *value <= momentum)
            .min(last);
        Some(upper.saturating_sub(1))
    }

    /// Interpolated `J(p)`; zero outside the grid.
    pub fn evaluate_compton_profile(&self, momentum: f64) -> f64 {
        let Some(index) = self.segment(momentum) else {
            return 0.0;
        };
        let (a, b) = (self.momentum_grid[index], self.momentum_grid[index + 1]);
        let (ja, jb) = (self.profile[index], self.profile[index + 1]);
        if momentum == b {
            return jb;
        }
        log_lin_interpolate(a, b, ja, jb, momentum)
    }

    /// Integral of the interpolated profile up to `momentum`, clamped to `[0, 1]`.
    pub fn evaluate_occupation_number(&self, momentum: f64) -> f64 {
        let last = self.momentum_grid.len() - 1;
        let raw = if momentum < self.momentum_grid[0] {
            0.0
        } else if momentum >= self.momentum_grid[last] {
            self.cumulative[last]
        } else {
            let index = self.segment(momentum).unwrap_or_default();
            self.cumulative[index] + self.partial_segment_integral(index, momentum)
        };

        if raw >= 1.0 {
            1.0
        } else {
            raw.max(0.0)
        }
    }

    /// Integral from `grid[index]` to `momentum` under the segment's own interpolant.
    fn partial_segment_integral(&self, index: usize, momentum: f64) -> f64 {
        let a = self.momentum_grid[index];
        let (ja, jb) = (self.profile[index], self.profile[index + 1]);
        let jp = self.evaluate_compton_profile(momentum);
        if ja <= 0.0 || jb <= 0.0 {
            0.5 * (momentum - a) * (ja + jp)
        } else {
            log_lin_segment_integral(a, momentum, ja, jp)
        }
    }

    pub fn occupation_number_table(&self, momenta: &[f64]) -> Vec<OccupationNumberRow> {
        momenta
            .iter()
            .map(|&momentum| OccupationNumberRow {
                momentum,
                compton_profile: self.evaluate_compton_profile(momentum),
                occupation_number: self.evaluate_occupation_number(momentum),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::OccupationNumberEvaluator;

    fn assert_scalar_close(label: &str, expected: f64, actual: f64, abs_tol: f64, rel_tol: f64) {
        let diff = (expected - actual).abs();
        let scale = expected.abs().max(actual.abs()).max(1.0e-300);
        assert!(
            diff <= abs_tol || diff / scale <= rel_tol,
            "{label}: expected={expected:.15e} actual={actual:.15e} diff={diff:.3e}"
        );
    }

    fn triangle() -> OccupationNumberEvaluator {
        // Linear (zero endpoints) triangle of unit area.
        OccupationNumberEvaluator::new(vec![-1.0, 0.0, 1.0], vec![0.0, 1.0, 0.0])
            .expect("evaluator should build")
    }

    #[test]
    fn profile_interpolation_is_linear_next_to_zero_values() {
        let evaluator = triangle();
        assert_eq!(evaluator.evaluate_compton_profile(-0.5), 0.5);
        assert_eq!(evaluator.evaluate_compton_profile(0.0), 1.0);
        assert_eq!(evaluator.evaluate_compton_profile(1.0), 0.0);
        assert_eq!(evaluator.evaluate_compton_profile(1.5), 0.0);
        assert_eq!(evaluator.evaluate_compton_profile(-2.0), 0.0);
    }

    #[test]
    fn occupation_number_accumulates_area() {
        let evaluator = triangle();
        assert_eq!(evaluator.evaluate_occupation_number(-3.0), 0.0);
        assert_scalar_close("n(-0.5)", 0.125, evaluator.evaluate_occupation_number(-0.5), 1.0e-15, 0.0);
        assert_scalar_close("n(0)", 0.5, evaluator.evaluate_occupation_number(0.0), 1.0e-15, 0.0);
        assert_scalar_close("n(0.5)", 0.875, evaluator.evaluate_occupation_number(0.5), 1.0e-15, 0.0);
        assert_eq!(evaluator.evaluate_occupation_number(1.0), 1.0);
        assert_eq!(evaluator.evaluate_occupation_number(5.0), 1.0);
    }

    #[test]
    fn occupation_number_is_clamped_at_one() {
        let evaluator = OccupationNumberEvaluator::new(vec![-1.0, 0.0, 1.0], vec![2.0, 2.0, 2.0])
            .expect("evaluator should build");
        assert_scalar_close("n(-0.75)", 0.5, evaluator.evaluate_occupation_number(-0.75), 1.0e-15, 0.0);
        assert_eq!(evaluator.evaluate_occupation_number(-0.5), 1.0);
        assert_eq!(evaluator.evaluate_occupation_number(0.75), 1.0);
    }

    #[test]
    fn log_lin_interpolation_between_positive_values() {
        let evaluator = OccupationNumberEvaluator::new(vec![0.0, 2.0], vec![1.0, 0.25])
            .expect("evaluator should build");
        assert_scalar_close("J(1)", 0.5, evaluator.evaluate_compton_profile(1.0), 0.0, 1.0e-14);
        // integral_0^1 2^-x dx = (1 - 1/2) / ln 2
        assert_scalar_close(
            "n(1)",
            0.5 / 2.0_f64.ln(),
            evaluator.evaluate_occupation_number(1.0),
            0.0,
            1.0e-14,
        );
    }

    #[test]
    fn table_is_monotonic_and_bounded() {
        let evaluator = triangle();
        let momenta: Vec<f64> = (0..=20).map(|step| -1.0 + 0.1 * f64::from(step)).collect();
        let table = evaluator.occupation_number_table(&momenta);
        assert_eq!(table.len(), momenta.len());
        for pair in table.windows(2) {
            assert!(pair[1].occupation_number >= pair[0].occupation_number);
        }
        assert!(table
            .iter()
            .all(|row| (0.0..=1.0).contains(&row.occupation_number)));
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let error = OccupationNumberEvaluator::new(vec![0.0], vec![1.0]).expect_err("too short");
        assert_eq!(error.placeholder(), "INPUT.OCCUPATION_SHAPE");
        let error = OccupationNumberEvaluator::new(vec![1.0, 0.0], vec![1.0, 1.0])
            .expect_err("descending grid");
        assert_eq!(error.placeholder(), "INPUT.OCCUPATION_GRID");
        let error = OccupationNumberEvaluator::new(vec![0.0, 1.0], vec![1.0, f64::NAN])
            .expect_err("NaN profile");
        assert_eq!(error.placeholder(), "INPUT.OCCUPATION_PROFILE");
    }
}
