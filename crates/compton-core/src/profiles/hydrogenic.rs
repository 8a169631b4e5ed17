//! Screened hydrogenic Compton profiles.
//!
//! Each shell is modeled as a hydrogenic orbital `nl` in the field of an
//! effective charge `Z_eff = Z - S`, with `S` from Slater's screening rules
//! over the ground-state configuration. For such an orbital
//!
//! ```text
//! J(q) = (1 / 2Z) N^2 n^2 2^(4l+4) (l!)^2 / 2 * I(s),   s = 1 / (1 + (nq/Z)^2)
//! I(s) = int_0^s (1 - t)^l t^(l+2) [C^(l+1)_(n-l-1)(1 - 2t)]^2 dt
//! ```
//!
//! with `N^2 = (2/pi) (n-l-1)! / (n+l)!`. The integrand is a polynomial of
//! degree `2n`, so a 16-point Gauss-Legendre rule evaluates it exactly for
//! every orbital up to n = 16. Profiles satisfy `2 int_0^inf J dq = 1`.

use super::generator::ComptonProfileGenerator;
use super::grid::UNION_MOMENTUM_GRID;
use super::layout::layout_for;
use super::model::{HalfProfile, HalfProfileSet, ProfileSource};
use crate::common::config::{configuration_for_atomic_number, ElectronicConfiguration, Orbital};
use crate::common::constants::PI;
use crate::domain::{AtomicNumber, ComptonError, ComputeResult};
use crate::numerics::{gauss_legendre, gegenbauer, integrate_gauss_legendre, GaussLegendreRule};
use tracing::debug;

pub const QUADRATURE_ORDER: usize = 16;
pub const MIN_EFFECTIVE_CHARGE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydrogenicOrbital {
    orbital: Orbital,
    effective_charge: f64,
    prefactor: f64,
}

impl HydrogenicOrbital {
    pub fn new(orbital: Orbital, effective_charge: f64) -> ComputeResult<Self> {
        let n = orbital.principal;
        let l = orbital.angular_momentum;
        if n == 0 || l >= n {
            return Err(ComptonError::input_validation(
                "INPUT.HYDROGENIC_ORBITAL",
                format!("orbital n={n} l={l} is not a bound hydrogenic state"),
            ));
        }
        if !effective_charge.is_finite() || effective_charge <= 0.0 {
            return Err(ComptonError::input_validation(
                "INPUT.HYDROGENIC_CHARGE",
                format!("effective charge must be finite and > 0, got {effective_charge}"),
            ));
        }

        let n_f = f64::from(n);
        let l_factorial = factorial(u32::from(l));
        let normalization =
            (2.0 / PI) * factorial(u32::from(n - l - 1)) / factorial(u32::from(n + l));
        let prefactor = normalization
            * n_f
            * n_f
            * 2_f64.powi(4 * i32::from(l) + 4)
            * l_factorial
            * l_factorial
            * 0.5
            / (2.0 * effective_charge);

        Ok(Self {
            orbital,
            effective_charge,
            prefactor,
        })
    }

    pub fn orbital(&self) -> Orbital {
        self.orbital
    }

    pub fn effective_charge(&self) -> f64 {
        self.effective_charge
    }

    /// `J(q)` in atomic units; symmetric in `q`.
    pub fn compton_profile(&self, momentum: f64, rule: &GaussLegendreRule) -> ComputeResult<f64> {
        let n = self.orbital.principal;
        let l = i32::from(self.orbital.angular_momentum);
        let scaled = f64::from(n) * momentum / self.effective_charge;
        let upper = 1.0 / (1.0 + scaled * scaled);
        let degree = usize::from(n - self.orbital.angular_momentum - 1);
        let alpha = f64::from(l + 1);

        let integral = integrate_gauss_legendre(rule, 0.0, upper, |t| {
            let polynomial = gegenbauer(degree, alpha, 1.0 - 2.0 * t);
            (1.0 - t).powi(l) * t.powi(l + 2) * polynomial * polynomial
        })
        .map_err(|source| {
            ComptonError::computation(
                "RUN.HYDROGENIC_QUADRATURE",
                format!(
                    "profile integral for {} at q={momentum} failed: {source}",
                    self.orbital
                ),
            )
        })?;

        Ok(self.prefactor * integral)
    }
}

fn factorial(value: u32) -> f64 {
    (1..=value).map(f64::from).product()
}

fn slater_group(orbital: Orbital) -> (u8, u8) {
    let group = match orbital.angular_momentum {
        0 | 1 => 0,
        2 => 1,
        _ => 2,
    };
    (orbital.principal, group)
}

/// Slater screening constant seen by one electron of `target`.
pub fn slater_screening(configuration: &ElectronicConfiguration, target: Orbital) -> f64 {
    let target_group = slater_group(target);
    let mut same_group_electrons = 0_u32;
    let mut screening = 0.0;

    for (orbital, occupation) in configuration.occupied_orbitals() {
        let group = slater_group(orbital);
        let electrons = f64::from(occupation);
        if group == target_group {
            same_group_electrons += u32::from(occupation);
        } else if group > target_group {
            continue;
        } else if target.angular_momentum >= 2 || group.0 + 1 < target.principal {
            screening += electrons;
        } else {
            screening += 0.85 * electrons;
        }
    }

    let others = if configuration.occupation(target) > 0 {
        same_group_electrons.saturating_sub(1)
    } else {
        same_group_electrons
    };
    let same_group_factor = if target.principal == 1 { 0.30 } else { 0.35 };
    screening + same_group_factor * f64::from(others)
}

pub fn slater_effective_charge(configuration: &ElectronicConfiguration, target: Orbital) -> f64 {
    let charge = f64::from(configuration.atomic_number().get());
    (charge - slater_screening(configuration, target)).max(MIN_EFFECTIVE_CHARGE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydrogenicGenerator {
    atomic_number: AtomicNumber,
}

impl HydrogenicGenerator {
    pub fn new(atomic_number: AtomicNumber) -> Self {
        Self { atomic_number }
    }
}

impl ComptonProfileGenerator for HydrogenicGenerator {
    fn atomic_number(&self) -> AtomicNumber {
        self.atomic_number
    }

    fn source(&self) -> ProfileSource {
        ProfileSource::Hydrogenic
    }

    fn generate_half_profiles(&self) -> ComputeResult<HalfProfileSet> {
        let rule = gauss_legendre(QUADRATURE_ORDER).map_err(|source| {
            ComptonError::internal(
                "SYS.QUADRATURE_RULE",
                format!("failed to build {QUADRATURE_ORDER}-point rule: {source}"),
            )
        })?;
        let configuration = configuration_for_atomic_number(self.atomic_number);

        let profiles = layout_for(self.atomic_number)
            .iter()
            .map(|shell| {
                let charge = slater_effective_charge(&configuration, shell.orbital);
                let orbital = HydrogenicOrbital::new(shell.orbital, charge)?;
                let values = UNION_MOMENTUM_GRID
                    .iter()
                    .map(|&momentum| orbital.compton_profile(momentum, &rule))
                    .collect::<ComputeResult<Vec<f64>>>()?;
                Ok(HalfProfile::new(*shell, values))
            })
            .collect::<ComputeResult<Vec<HalfProfile>>>()?;

        debug!(
            z = self.atomic_number.get(),
            shells = profiles.len(),
            "generated hydrogenic half profiles"
        );

        Ok(HalfProfileSet {
            atomic_number: self.atomic_number,
            source: ProfileSource::Hydrogenic,
            momentum_grid: UNION_MOMENTUM_GRID.to_vec(),
            profiles,
        })
    }
}
