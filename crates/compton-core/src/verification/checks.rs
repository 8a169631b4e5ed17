//! Per-element half-profile invariants.

use super::reference::ElementReference;
use crate::domain::AtomicNumber;
use crate::numerics::{compare_with_tolerance, format_numeric, NumericTolerance};
use crate::profiles::grid::{is_descending, is_strictly_ascending, UNION_GRID_SIZE};
use crate::profiles::layout::shell_count;
use crate::profiles::{ComptonProfileGenerator, HalfProfileSet, ProfileSource};
use serde::Serialize;
use std::fmt::{Display, Formatter};

pub const GRID_FIRST_POINT: f64 = 0.0;
pub const GRID_LAST_POINT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvariantCheck {
    Generation,
    GridSize,
    GridAscending,
    GridEndpoints,
    ShellCount,
    ProfileSize,
    ProfileOrdering,
    FrontValue,
    BackValue,
    Idempotence,
}

impl InvariantCheck {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generation => "generation",
            Self::GridSize => "grid-size",
            Self::GridAscending => "grid-ascending",
            Self::GridEndpoints => "grid-endpoints",
            Self::ShellCount => "shell-count",
            Self::ProfileSize => "profile-size",
            Self::ProfileOrdering => "profile-ordering",
            Self::FrontValue => "front-value",
            Self::BackValue => "back-value",
            Self::Idempotence => "idempotence",
        }
    }
}

impl Display for InvariantCheck {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvariantViolation {
    pub check: InvariantCheck,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell_index: Option<usize>,
    pub message: String,
}

impl InvariantViolation {
    fn element(check: InvariantCheck, message: impl Into<String>) -> Self {
        Self {
            check,
            shell_index: None,
            message: message.into(),
        }
    }

    fn shell(check: InvariantCheck, shell_index: usize, message: impl Into<String>) -> Self {
        Self {
            check,
            shell_index: Some(shell_index),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementVerification {
    pub atomic_number: AtomicNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ProfileSource>,
    pub shell_count: usize,
    pub checks_run: usize,
    pub endpoints_compared: usize,
    pub passed: bool,
    pub violations: Vec<InvariantViolation>,
}

impl ElementVerification {
    /// Result for an element whose generator could not be built.
    pub fn generation_failed(atomic_number: AtomicNumber, message: impl Into<String>) -> Self {
        Self {
            atomic_number,
            source: None,
            shell_count: 0,
            checks_run: 1,
            endpoints_compared: 0,
            passed: false,
            violations: vec![InvariantViolation::element(
                InvariantCheck::Generation,
                message,
            )],
        }
    }

    pub fn first_violation(&self) -> Option<&InvariantViolation> {
        self.violations.first()
    }
}

#[derive(Debug, Default)]
struct CheckLog {
    checks_run: usize,
    endpoints_compared: usize,
    violations: Vec<InvariantViolation>,
}

impl CheckLog {
    fn check(&mut self, holds: bool, violation: impl FnOnce() -> InvariantViolation) {
        self.checks_run += 1;
        if !holds {
            self.violations.push(violation());
        }
    }
}

/// Runs every invariant against one generator. Front/back values are compared
/// for every reference shell, whatever the profile source.
pub fn verify_element(
    generator: &dyn ComptonProfileGenerator,
    reference: Option<&ElementReference>,
    tolerance: NumericTolerance,
) -> ElementVerification {
    let atomic_number = generator.atomic_number();
    let first = match generator.generate_half_profiles() {
        Ok(set) => set,
        Err(error) => {
            return ElementVerification::generation_failed(atomic_number, error.to_string());
        }
    };

    let mut log = CheckLog::default();
    check_grid(&first, &mut log);
    check_shells(&first, reference, &mut log);
    if let Some(reference) = reference {
        check_endpoints(&first, reference, tolerance, &mut log);
    }

    match generator.generate_half_profiles() {
        Ok(second) => log.check(second == first, || {
            InvariantViolation::element(
                InvariantCheck::Idempotence,
                "second generation differs from the first",
            )
        }),
        Err(error) => log.check(false, || {
            InvariantViolation::element(
                InvariantCheck::Idempotence,
                format!("second generation failed: {error}"),
            )
        }),
    }

    ElementVerification {
        atomic_number,
        source: Some(first.source),
        shell_count: first.shell_count(),
        checks_run: log.checks_run,
        endpoints_compared: log.endpoints_compared,
        passed: log.violations.is_empty(),
        violations: log.violations,
    }
}

fn check_grid(set: &HalfProfileSet, log: &mut CheckLog) {
    let grid = &set.momentum_grid;
    log.check(grid.len() == UNION_GRID_SIZE, || {
        InvariantViolation::element(
            InvariantCheck::GridSize,
            format!("grid has {} points, expected {UNION_GRID_SIZE}", grid.len()),
        )
    });
    log.check(is_strictly_ascending(grid), || {
        InvariantViolation::element(
            InvariantCheck::GridAscending,
            "grid is not strictly ascending",
        )
    });
    let endpoints = (grid.first().copied(), grid.last().copied());
    log.check(
        endpoints == (Some(GRID_FIRST_POINT), Some(GRID_LAST_POINT)),
        || {
            InvariantViolation::element(
                InvariantCheck::GridEndpoints,
                format!(
                    "grid spans {:?}..{:?}, expected {GRID_FIRST_POINT}..{GRID_LAST_POINT}",
                    endpoints.0, endpoints.1
                ),
            )
        },
    );
}

fn check_shells(set: &HalfProfileSet, reference: Option<&ElementReference>, log: &mut CheckLog) {
    let expected = shell_count(set.atomic_number);
    log.check(set.shell_count() == expected, || {
        InvariantViolation::element(
            InvariantCheck::ShellCount,
            format!("{} profiles, layout has {expected}", set.shell_count()),
        )
    });
    if let Some(reference) = reference {
        log.check(set.shell_count() == reference.shell_count, || {
            InvariantViolation::element(
                InvariantCheck::ShellCount,
                format!(
                    "{} profiles, reference has {}",
                    set.shell_count(),
                    reference.shell_count
                ),
            )
        });
    }

    for (index, profile) in set.profiles.iter().enumerate() {
        log.check(profile.len() == UNION_GRID_SIZE, || {
            InvariantViolation::shell(
                InvariantCheck::ProfileSize,
                index,
                format!("profile has {} values, expected {UNION_GRID_SIZE}", profile.len()),
            )
        });
        log.check(is_descending(&profile.values), || {
            InvariantViolation::shell(
                InvariantCheck::ProfileOrdering,
                index,
                format!("profile {} does not descend with momentum", profile.shell),
            )
        });
    }
}

fn check_endpoints(
    set: &HalfProfileSet,
    reference: &ElementReference,
    tolerance: NumericTolerance,
    log: &mut CheckLog,
) {
    for shell in &reference.shells {
        let Some(profile) = set.profile(shell.index) else {
            log.check(false, || {
                InvariantViolation::shell(
                    InvariantCheck::FrontValue,
                    shell.index,
                    "reference shell has no generated profile",
                )
            });
            continue;
        };

        let endpoints = [
            (InvariantCheck::FrontValue, shell.front, profile.front()),
            (InvariantCheck::BackValue, shell.back, profile.back()),
        ];
        for (check, expected, actual) in endpoints {
            log.endpoints_compared += 1;
            let holds = actual
                .is_some_and(|actual| compare_with_tolerance(expected, actual, tolerance).passes);
            log.check(holds, || {
                InvariantViolation::shell(
                    check,
                    shell.index,
                    format!(
                        "expected {}, got {}",
                        format_numeric(expected),
                        actual.map_or_else(|| "nothing".to_string(), format_numeric)
                    ),
                )
            });
        }
    }
}
