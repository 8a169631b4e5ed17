use super::CliError;
use anyhow::Context;
use compton_core::common::elements::atomic_number_for_symbol;
use compton_core::domain::{AtomicNumber, ComptonError};
use compton_core::numerics::NumericTolerance;
use compton_core::profiles::GeneratorConfig;
use compton_core::serialization::write_text_artifact;
use std::fs;
use std::path::{Path, PathBuf};

/// Accepts `"29"` or `"Cu"`; numbers outside 1..=100 keep the range diagnostic.
pub(super) fn resolve_atomic_number(spec: &str) -> Result<AtomicNumber, CliError> {
    let trimmed = spec.trim();
    if let Ok(value) = trimmed.parse::<u32>() {
        return Ok(AtomicNumber::new(value)?);
    }
    atomic_number_for_symbol(trimmed).ok_or_else(|| {
        CliError::Compute(ComptonError::input_validation(
            "INPUT.ELEMENT",
            format!("'{}' is neither an atomic number nor an element symbol", spec),
        ))
    })
}

pub(super) fn generator_config(table_dir: Option<PathBuf>) -> GeneratorConfig {
    match table_dir {
        Some(table_dir) => GeneratorConfig::with_table_dir(table_dir),
        None => GeneratorConfig::default(),
    }
}

pub(super) fn resolve_tolerance(
    abs_tol: Option<f64>,
    rel_tol: Option<f64>,
) -> Result<Option<NumericTolerance>, CliError> {
    if abs_tol.is_none() && rel_tol.is_none() {
        return Ok(None);
    }
    let abs_tol = abs_tol.unwrap_or(0.0);
    let rel_tol = rel_tol.unwrap_or(0.0);
    if !(abs_tol.is_finite() && abs_tol >= 0.0 && rel_tol.is_finite() && rel_tol >= 0.0) {
        return Err(CliError::Compute(ComptonError::input_validation(
            "INPUT.CLI_TOLERANCE",
            format!(
                "tolerances must be finite and >= 0, got abs={} rel={}",
                abs_tol, rel_tol
            ),
        )));
    }
    Ok(Some(NumericTolerance::new(abs_tol, rel_tol)))
}

/// Writes `content` to `output` (creating parent directories) or prints it.
pub(super) fn emit_output(output: Option<&Path>, content: &str) -> Result<(), CliError> {
    let Some(path) = output else {
        println!("{}", content);
        return Ok(());
    };

    if let Some(parent_dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent_dir).with_context(|| {
            format!("failed to create output directory '{}'", parent_dir.display())
        })?;
    }
    write_text_artifact(path, content)
        .with_context(|| format!("failed to write output '{}'", path.display()))?;
    Ok(())
}

pub(super) fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(|source| {
        CliError::Compute(ComptonError::internal(
            "SYS.CLI_JSON",
            format!("failed to serialize output: {}", source),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::{emit_output, resolve_atomic_number, resolve_tolerance};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn atomic_numbers_resolve_from_numbers_and_symbols() {
        assert_eq!(resolve_atomic_number("29").expect("number").get(), 29);
        assert_eq!(resolve_atomic_number(" fe ").expect("symbol").get(), 26);

        let error = resolve_atomic_number("101")
            .expect_err("out of range")
            .as_compton_error();
        assert_eq!(error.placeholder(), "INPUT.ATOMIC_NUMBER");

        let error = resolve_atomic_number("Xx")
            .expect_err("unknown symbol")
            .as_compton_error();
        assert_eq!(error.placeholder(), "INPUT.ELEMENT");
    }

    #[test]
    fn tolerance_is_absent_without_flags() {
        assert!(resolve_tolerance(None, None).expect("no flags").is_none());
        let tolerance = resolve_tolerance(None, Some(1.0e-3))
            .expect("relative only")
            .expect("tolerance");
        assert_eq!(tolerance.abs_tol, 0.0);
        assert_eq!(tolerance.rel_tol, 1.0e-3);
        assert!(resolve_tolerance(Some(-1.0), None).is_err());
    }

    #[test]
    fn output_file_gets_parent_directories() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("out").join("profiles.json");
        emit_output(Some(&path), "{}").expect("output should be written");
        assert_eq!(fs::read_to_string(&path).expect("readable"), "{}\n");
    }
}
