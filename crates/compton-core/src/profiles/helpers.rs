//! Full (two-sided) profiles built from half profiles, log-linear integration
//! and unit conversion.

use super::grid::is_strictly_ascending;
use crate::common::constants::ALPINV;
use crate::domain::{ComptonError, ComputeResult};
use crate::numerics::stable_sum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullProfileOptions {
    /// Append points at `+-ALPINV` extrapolated from the last half-profile segment.
    pub extend_to_rest_mass: bool,
    /// Scale the profile so its log-linear integral is 1.
    pub renormalize: bool,
}

impl Default for FullProfileOptions {
    fn default() -> Self {
        Self {
            extend_to_rest_mass: true,
            renormalize: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MomentumUnits {
    Atomic,
    MeC,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullProfile {
    pub units: MomentumUnits,
    pub momentum_grid: Vec<f64>,
    pub values: Vec<f64>,
}

impl FullProfile {
    pub fn integral(&self) -> f64 {
        log_lin_integral(&self.momentum_grid, &self.values)
    }
}

/// `J` between `(a, ja)` and `(b, jb)` at `x`, log-linear unless an endpoint is zero.
pub fn log_lin_interpolate(a: f64, b: f64, ja: f64, jb: f64, x: f64) -> f64 {
    let fraction = (x - a) / (b - a);
    if ja <= 0.0 || jb <= 0.0 {
        ja + (jb - ja) * fraction
    } else {
        ja * ((jb / ja).ln() * fraction).exp()
    }
}

/// Exact integral of the log-linear interpolant over one segment.
pub fn log_lin_segment_integral(a: f64, b: f64, ja: f64, jb: f64) -> f64 {
    let width = b - a;
    if ja <= 0.0 || jb <= 0.0 {
        return 0.5 * width * (ja + jb);
    }
    let ratio = (jb / ja).ln();
    if ratio.abs() < 1.0e-12 {
        return 0.5 * width * (ja + jb);
    }
    width * (jb - ja) / ratio
}

pub fn log_lin_integral(grid: &[f64], values: &[f64]) -> f64 {
    stable_sum(
        grid.windows(2)
            .zip(values.windows(2))
            .map(|(x, y)| log_lin_segment_integral(x[0], x[1], y[0], y[1])),
    )
}

fn validate_half_profile(grid: &[f64], values: &[f64]) -> ComputeResult<()> {
    if grid.len() < 2 || grid.len() != values.len() {
        return Err(ComptonError::input_validation(
            "INPUT.HALF_PROFILE_SHAPE",
            format!(
                "half profile needs matching grids of at least 2 points, got grid={} values={}",
                grid.len(),
                values.len()
            ),
        ));
    }
    if grid[0] != 0.0 || !is_strictly_ascending(grid) {
        return Err(ComptonError::input_validation(
            "INPUT.HALF_PROFILE_GRID",
            "half profile grid must start at 0 and be strictly ascending",
        ));
    }
    if values.iter().any(|value| !value.is_finite() || *value < 0.0) {
        return Err(ComptonError::input_validation(
            "INPUT.HALF_PROFILE_VALUES",
            "half profile values must be finite and >= 0",
        ));
    }
    Ok(())
}

/// Mirrors a half profile about zero momentum (q = 0 appears once).
pub fn full_profile_from_half(
    half_grid: &[f64],
    half_values: &[f64],
    options: FullProfileOptions,
) -> ComputeResult<FullProfile> {
    validate_half_profile(half_grid, half_values)?;

    let mut positive_grid = half_grid.to_vec();
    let mut positive_values = half_values.to_vec();

    let last = positive_grid.len() - 1;
    if options.extend_to_rest_mass && positive_grid[last] < ALPINV {
        let extrapolated = log_lin_extrapolate(
            positive_grid[last - 1],
            positive_grid[last],
            positive_values[last - 1],
            positive_values[last],
            ALPINV,
        );
        positive_grid.push(ALPINV);
        positive_values.push(extrapolated);
    }

    let mut momentum_grid = Vec::with_capacity(2 * positive_grid.len() - 1);
    let mut values = Vec::with_capacity(momentum_grid.capacity());
    for index in (1..positive_grid.len()).rev() {
        momentum_grid.push(-positive_grid[index]);
        values.push(positive_values[index]);
    }
    momentum_grid.extend_from_slice(&positive_grid);
    values.extend_from_slice(&positive_values);

    if options.renormalize {
        let norm = log_lin_integral(&momentum_grid, &values);
        if !norm.is_finite() || norm <= 0.0 {
            return Err(ComptonError::computation(
                "RUN.PROFILE_NORMALIZATION",
                format!("cannot renormalize a profile with integral {norm}"),
            ));
        }
        values.iter_mut().for_each(|value| *value /= norm);
    }

    Ok(FullProfile {
        units: MomentumUnits::Atomic,
        momentum_grid,
        values,
    })
}

fn log_lin_extrapolate(a: f64, b: f64, ja: f64, jb: f64, x: f64) -> f64 {
    if ja <= 0.0 || jb <= 0.0 {
        return 0.0;
    }
    let slope = (jb / ja).ln() / (b - a);
    jb * (slope * (x - b)).exp()
}

/// Momentum in `m_e c`, profile in inverse `m_e c`. Integrals are preserved.
pub fn convert_to_mec_units(profile: &FullProfile) -> FullProfile {
    match profile.units {
        MomentumUnits::MeC => profile.clone(),
        MomentumUnits::Atomic => FullProfile {
            units: MomentumUnits::MeC,
            momentum_grid: profile
                .momentum_grid
                .iter()
                .map(|momentum| momentum / ALPINV)
                .collect(),
            values: profile.values.iter().map(|value| value * ALPINV).collect(),
        },
    }
}
