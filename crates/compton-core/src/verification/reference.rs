//! Golden reference rows for half-profile verification.

use crate::domain::{AtomicNumber, ComptonError, VerificationResult};
use crate::numerics::NumericTolerance;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_REFERENCE_PATH: &str = "data/reference/half-profile-reference.json";

const BUNDLED_REFERENCE: &str =
    include_str!("../../../../data/reference/half-profile-reference.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HalfProfileReference {
    /// Comparison tolerance for front/back values; exact when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<NumericTolerance>,
    pub elements: Vec<ElementReference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementReference {
    pub atomic_number: AtomicNumber,
    pub shell_count: usize,
    #[serde(default)]
    pub shells: Vec<ShellReference>,
}

/// Tabulated values at zero momentum (`front`) and at the last grid point (`back`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellReference {
    pub index: usize,
    pub front: f64,
    pub back: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("failed to read reference '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse reference '{origin}': {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },
    #[error("reference lists Z={atomic_number} more than once")]
    DuplicateElement { atomic_number: AtomicNumber },
    #[error("reference Z={atomic_number} shell {index} is outside its {shell_count} shells")]
    ShellOutOfRange {
        atomic_number: AtomicNumber,
        index: usize,
        shell_count: usize,
    },
}

impl From<ReferenceError> for ComptonError {
    fn from(error: ReferenceError) -> Self {
        let message = error.to_string();
        match error {
            ReferenceError::Read { .. } => ComptonError::io_system("IO.REFERENCE_READ", message),
            ReferenceError::Parse { .. } => {
                ComptonError::input_validation("INPUT.REFERENCE_PARSE", message)
            }
            ReferenceError::DuplicateElement { .. } | ReferenceError::ShellOutOfRange { .. } => {
                ComptonError::input_validation("INPUT.REFERENCE_CONTENT", message)
            }
        }
    }
}

impl HalfProfileReference {
    pub fn from_json_str(source: &str, origin: &str) -> Result<Self, ReferenceError> {
        let reference: Self =
            serde_json::from_str(source).map_err(|source| ReferenceError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        reference.validate()?;
        Ok(reference)
    }

    fn validate(&self) -> Result<(), ReferenceError> {
        let mut seen = BTreeSet::new();
        for element in &self.elements {
            if !seen.insert(element.atomic_number) {
                return Err(ReferenceError::DuplicateElement {
                    atomic_number: element.atomic_number,
                });
            }
            if let Some(shell) = element
                .shells
                .iter()
                .find(|shell| shell.index >= element.shell_count)
            {
                return Err(ReferenceError::ShellOutOfRange {
                    atomic_number: element.atomic_number,
                    index: shell.index,
                    shell_count: element.shell_count,
                });
            }
        }
        Ok(())
    }

    pub fn element(&self, atomic_number: AtomicNumber) -> Option<&ElementReference> {
        self.elements
            .iter()
            .find(|element| element.atomic_number == atomic_number)
    }
}

pub fn load_reference(path: &Path) -> VerificationResult<HalfProfileReference> {
    let source = fs::read_to_string(path).map_err(|source| ReferenceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(HalfProfileReference::from_json_str(
        &source,
        &path.to_string_lossy().replace('\\', "/"),
    )?)
}

/// Reference rows shipped with the crate.
pub fn bundled_reference() -> VerificationResult<HalfProfileReference> {
    Ok(HalfProfileReference::from_json_str(
        BUNDLED_REFERENCE,
        DEFAULT_REFERENCE_PATH,
    )?)
}

#[cfg(test)]
mod tests {
    use super::{bundled_reference, load_reference, HalfProfileReference, ReferenceError};
    use crate::domain::{AtomicNumber, ComptonError, ComptonErrorCategory};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn bundled_reference_lists_known_rows() {
        let reference = bundled_reference().expect("bundled reference should parse");
        let hydrogen = reference
            .element(AtomicNumber::new(1).expect("hydrogen"))
            .expect("hydrogen row");
        assert_eq!(hydrogen.shell_count, 1);
        assert_eq!(hydrogen.shells[0].front, 0.849);
        assert_eq!(hydrogen.shells[0].back, 2.6e-11);

        let fermium = reference
            .element(AtomicNumber::new(100).expect("fermium"))
            .expect("fermium row");
        assert_eq!(fermium.shell_count, 27);
        assert_eq!(fermium.shells[0].front, 6.46e-3);
        assert_eq!(fermium.shells[0].back, 1.5e-3);
        assert!(reference.tolerance.is_none());
    }

    #[test]
    fn duplicate_and_out_of_range_rows_are_rejected() {
        let duplicate = r#"{"elements":[{"atomicNumber":1,"shellCount":1},{"atomicNumber":1,"shellCount":1}]}"#;
        assert!(matches!(
            HalfProfileReference::from_json_str(duplicate, "inline"),
            Err(ReferenceError::DuplicateElement { .. })
        ));

        let out_of_range = r#"{"elements":[{"atomicNumber":3,"shellCount":2,"shells":[{"index":2,"front":1.0,"back":0.0}]}]}"#;
        let error = HalfProfileReference::from_json_str(out_of_range, "inline")
            .expect_err("shell index beyond count");
        assert_eq!(
            ComptonError::from(error).placeholder(),
            "INPUT.REFERENCE_CONTENT"
        );

        let bad_z = r#"{"elements":[{"atomicNumber":101,"shellCount":1}]}"#;
        assert!(matches!(
            HalfProfileReference::from_json_str(bad_z, "inline"),
            Err(ReferenceError::Parse { .. })
        ));
    }

    #[test]
    fn load_reference_maps_missing_file_to_io_error() {
        let temp = TempDir::new().expect("tempdir should be created");
        let error = load_reference(&temp.path().join("missing.json")).expect_err("missing file");
        assert_eq!(error.category(), ComptonErrorCategory::IoSystemError);
        assert_eq!(error.placeholder(), "IO.REFERENCE_READ");

        let path = temp.path().join("reference.json");
        fs::write(
            &path,
            r#"{"tolerance":{"absTol":0.0,"relTol":0.01,"relativeFloor":1e-300},"elements":[]}"#,
        )
        .expect("fixture should be written");
        let reference = load_reference(&path).expect("reference should load");
        assert_eq!(reference.tolerance.map(|t| t.rel_tol), Some(0.01));
    }
}
