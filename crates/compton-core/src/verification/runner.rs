use super::checks::{verify_element, ElementVerification};
use super::reference::{bundled_reference, load_reference, HalfProfileReference};
use crate::common::elements::element_symbol;
use crate::domain::{
    AtomicNumber, ComptonError, ComputeResult, ExecutionMode, VerificationResult,
};
use crate::numerics::NumericTolerance;
use crate::profiles::ComptonProfileGenerator;
use crate::serialization::write_text_artifact;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationConfig {
    pub first: AtomicNumber,
    pub last: AtomicNumber,
    pub mode: ExecutionMode,
    /// Reference file; the bundled reference when `None`.
    pub reference_path: Option<PathBuf>,
    /// Overrides the reference's own tolerance.
    pub tolerance: Option<NumericTolerance>,
    pub report_path: Option<PathBuf>,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            first: AtomicNumber::MIN,
            last: AtomicNumber::MAX,
            mode: ExecutionMode::Serial,
            reference_path: None,
            tolerance: None,
            report_path: None,
        }
    }
}

impl VerificationConfig {
    pub fn atomic_numbers(&self) -> VerificationResult<Vec<AtomicNumber>> {
        AtomicNumber::range(u32::from(self.first.get())..=u32::from(self.last.get()))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub generated_at_unix_seconds: u64,
    pub passed: bool,
    pub mode: ExecutionMode,
    pub reference: String,
    pub tolerance: NumericTolerance,
    pub element_count: usize,
    pub passed_element_count: usize,
    pub failed_element_count: usize,
    pub check_count: usize,
    pub endpoint_comparison_count: usize,
    pub elements: Vec<ElementVerification>,
}

/// Verifies every element in `config`'s range with generators from `factory`.
///
/// A factory error fails that element only; the run continues.
pub fn run_verification<F>(
    config: &VerificationConfig,
    factory: F,
) -> VerificationResult<VerificationReport>
where
    F: Fn(AtomicNumber) -> ComputeResult<Box<dyn ComptonProfileGenerator>> + Sync,
{
    let atomic_numbers = config.atomic_numbers()?;
    let (reference, reference_label) = match config.reference_path.as_deref() {
        Some(path) => (load_reference(path)?, normalize_path(path)),
        None => (bundled_reference()?, "bundled".to_string()),
    };
    let tolerance = config
        .tolerance
        .or(reference.tolerance)
        .unwrap_or_default();

    info!(
        first = config.first.get(),
        last = config.last.get(),
        mode = %config.mode,
        reference = %reference_label,
        "starting half-profile verification"
    );

    let verify = |atomic_number: AtomicNumber| {
        verify_one(atomic_number, &reference, tolerance, &factory)
    };
    let elements: Vec<ElementVerification> = match config.mode {
        ExecutionMode::Serial => atomic_numbers.iter().copied().map(verify).collect(),
        ExecutionMode::Parallel => atomic_numbers.par_iter().copied().map(verify).collect(),
    };

    let element_count = elements.len();
    let passed_element_count = elements.iter().filter(|element| element.passed).count();
    let failed_element_count = element_count.saturating_sub(passed_element_count);
    let report = VerificationReport {
        generated_at_unix_seconds: current_unix_timestamp_seconds(),
        passed: failed_element_count == 0,
        mode: config.mode,
        reference: reference_label,
        tolerance,
        element_count,
        passed_element_count,
        failed_element_count,
        check_count: elements.iter().map(|element| element.checks_run).sum(),
        endpoint_comparison_count: elements
            .iter()
            .map(|element| element.endpoints_compared)
            .sum(),
        elements,
    };

    info!(
        passed = report.passed,
        elements = report.element_count,
        failed = report.failed_element_count,
        "finished half-profile verification"
    );

    if let Some(report_path) = config.report_path.as_deref() {
        write_report(report_path, &report)?;
    }
    Ok(report)
}

fn verify_one<F>(
    atomic_number: AtomicNumber,
    reference: &HalfProfileReference,
    tolerance: NumericTolerance,
    factory: &F,
) -> ElementVerification
where
    F: Fn(AtomicNumber) -> ComputeResult<Box<dyn ComptonProfileGenerator>> + Sync,
{
    let result = match factory(atomic_number) {
        Ok(generator) => verify_element(
            generator.as_ref(),
            reference.element(atomic_number),
            tolerance,
        ),
        Err(error) => ElementVerification::generation_failed(atomic_number, error.to_string()),
    };
    if let Some(violation) = result.first_violation() {
        warn!(
            z = atomic_number.get(),
            check = %violation.check,
            violations = result.violations.len(),
            "element failed verification: {}",
            violation.message
        );
    }
    result
}

pub fn write_report(report_path: &Path, report: &VerificationReport) -> VerificationResult<()> {
    if let Some(parent_dir) = report_path.parent() {
        std::fs::create_dir_all(parent_dir).map_err(|source| {
            ComptonError::io_system(
                "IO.VERIFICATION_REPORT",
                format!(
                    "failed to create report directory '{}': {}",
                    parent_dir.display(),
                    source
                ),
            )
        })?;
    }

    let report_json = serde_json::to_string_pretty(report).map_err(|source| {
        ComptonError::internal(
            "SYS.VERIFICATION_REPORT",
            format!(
                "failed to serialize report '{}': {}",
                report_path.display(),
                source
            ),
        )
    })?;
    write_text_artifact(report_path, &report_json).map_err(|source| {
        ComptonError::io_system(
            "IO.VERIFICATION_REPORT",
            format!(
                "failed to write report '{}': {}",
                report_path.display(),
                source
            ),
        )
    })
}

pub fn render_human_summary(report: &VerificationReport) -> String {
    let mut lines = Vec::new();
    let status = if report.passed { "PASS" } else { "FAIL" };
    lines.push(format!("Verification status: {}", status));
    lines.push(format!(
        "Elements: {} total ({} passed, {} failed)",
        report.element_count, report.passed_element_count, report.failed_element_count
    ));
    lines.push(format!(
        "Checks: {} run, {} endpoint comparisons (reference: {}, mode: {})",
        report.check_count, report.endpoint_comparison_count, report.reference, report.mode
    ));

    for element in report.elements.iter().filter(|element| !element.passed) {
        lines.push(format!(
            "Z={} ({}): FAIL ({} violations)",
            element.atomic_number,
            element_symbol(element.atomic_number),
            element.violations.len()
        ));
        if let Some(violation) = element.first_violation() {
            let shell = violation
                .shell_index
                .map(|index| format!(" shell {}", index))
                .unwrap_or_default();
            lines.push(format!(
                "  first violation: {}{}: {}",
                violation.check, shell, violation.message
            ));
        }
    }

    lines.join("\n")
}

fn current_unix_timestamp_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_secs())
}

fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::{render_human_summary, run_verification, VerificationConfig};
    use crate::domain::{AtomicNumber, ComptonError, ExecutionMode};
    use crate::profiles::default_generator;
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;

    fn z(value: u32) -> AtomicNumber {
        AtomicNumber::new(value).expect("valid atomic number")
    }

    #[test]
    fn default_config_covers_every_element_serially() {
        let config = VerificationConfig::default();
        assert_eq!(config.first.get(), 1);
        assert_eq!(config.last.get(), 100);
        assert_eq!(config.mode, ExecutionMode::Serial);
        assert_eq!(config.atomic_numbers().expect("range").len(), 100);
    }

    #[test]
    fn serial_and_parallel_runs_agree() {
        let mut config = VerificationConfig {
            first: z(1),
            last: z(12),
            ..VerificationConfig::default()
        };
        let serial = run_verification(&config, |z| Ok(default_generator(z)))
            .expect("serial run should succeed");
        config.mode = ExecutionMode::Parallel;
        let parallel = run_verification(&config, |z| Ok(default_generator(z)))
            .expect("parallel run should succeed");

        assert!(serial.passed);
        assert!(parallel.passed);
        assert_eq!(serial.element_count, 12);
        assert_eq!(serial.elements, parallel.elements);
        // Only hydrogen carries reference endpoints in 1..=12.
        assert_eq!(serial.endpoint_comparison_count, 2);
    }

    #[test]
    fn failing_factory_fails_only_that_element_and_writes_report() {
        let temp = TempDir::new().expect("tempdir should be created");
        let report_path = temp.path().join("nested").join("report.json");
        let config = VerificationConfig {
            first: z(1),
            last: z(3),
            report_path: Some(report_path.clone()),
            ..VerificationConfig::default()
        };

        let report = run_verification(&config, |atomic_number| {
            if atomic_number.get() == 2 {
                Err(ComptonError::input_validation("INPUT.TEST", "helium table missing"))
            } else {
                Ok(default_generator(atomic_number))
            }
        })
        .expect("run should complete");

        assert!(!report.passed);
        assert_eq!(report.passed_element_count, 2);
        assert_eq!(report.failed_element_count, 1);

        let summary = render_human_summary(&report);
        assert!(summary.starts_with("Verification status: FAIL"));
        assert!(summary.contains("Z=2 (He): FAIL (1 violations)"));
        assert!(summary.contains("first violation: generation"));

        let json: Value = serde_json::from_str(
            &fs::read_to_string(&report_path).expect("report should be written"),
        )
        .expect("report should be JSON");
        assert_eq!(json["passed"], false);
        assert_eq!(json["mode"], "serial");
        assert_eq!(json["reference"], "bundled");
        assert_eq!(json["elements"][1]["atomicNumber"], 2);
        assert_eq!(json["elements"][1]["violations"][0]["check"], "generation");
    }

    #[test]
    fn reversed_range_is_an_input_error() {
        let config = VerificationConfig {
            first: z(10),
            last: z(5),
            ..VerificationConfig::default()
        };
        let error = run_verification(&config, |z| Ok(default_generator(z)))
            .expect_err("empty range should fail");
        assert_eq!(error.placeholder(), "INPUT.ATOMIC_NUMBER_RANGE");
    }
}
