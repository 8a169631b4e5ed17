//! Half profiles read from per-element JSON tables (`zNNN.json`).
//!
//! Tables for elements with golden endpoint rows ship inside the crate and
//! are used by [`default_generator`](super::generator::default_generator);
//! any other table is read from a directory at runtime.

use super::generator::ComptonProfileGenerator;
use super::grid::{is_descending, UNION_GRID_SIZE, UNION_MOMENTUM_GRID};
use super::layout::layout_for;
use super::model::{HalfProfile, HalfProfileSet, ProfileSource};
use crate::domain::{AtomicNumber, ComptonError, ComputeResult};
use globset::Glob;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const TABLE_FILE_GLOB: &str = "z[0-9][0-9][0-9].json";

const BUNDLED_TABLES: [(u8, &str); 2] = [
    (1, include_str!("../../../../data/tables/z001.json")),
    (100, include_str!("../../../../data/tables/z100.json")),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileTable {
    pub atomic_number: u32,
    pub momentum_grid: Vec<f64>,
    pub profiles: Vec<ProfileTableEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileTableEntry {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileTableError {
    #[error("table is for Z={actual}, expected Z={expected}")]
    AtomicNumberMismatch { expected: u8, actual: u32 },
    #[error("momentum grid has {actual} points, the union grid has {expected}")]
    GridSize { expected: usize, actual: usize },
    #[error("momentum grid point {index} is {actual}, the union grid has {expected}")]
    GridPoint {
        index: usize,
        expected: f64,
        actual: f64,
    },
    #[error("table has {actual} profiles, layout for Z={atomic_number} has {expected}")]
    ProfileCount {
        atomic_number: u8,
        expected: usize,
        actual: usize,
    },
    #[error("profile {index} is labeled '{actual}', expected '{expected}'")]
    ProfileLabel {
        index: usize,
        expected: String,
        actual: String,
    },
    #[error("profile {index} has {actual} values, grid has {expected}")]
    ProfileLength {
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("profile {index} value {position} must be finite and >= 0, got {value}")]
    ProfileValue {
        index: usize,
        position: usize,
        value: f64,
    },
    #[error("profile {index} does not descend with momentum")]
    ProfileNotDescending { index: usize },
}

impl ProfileTableError {
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::AtomicNumberMismatch { .. } => "INPUT.TABLE_ATOMIC_NUMBER",
            Self::GridSize { .. } | Self::GridPoint { .. } => "INPUT.TABLE_GRID",
            Self::ProfileCount { .. } => "INPUT.TABLE_PROFILE_COUNT",
            Self::ProfileLabel { .. } => "INPUT.TABLE_PROFILE_LABEL",
            Self::ProfileLength { .. } => "INPUT.TABLE_PROFILE_LENGTH",
            Self::ProfileValue { .. } | Self::ProfileNotDescending { .. } => {
                "INPUT.TABLE_PROFILE_VALUES"
            }
        }
    }
}

impl ProfileTable {
    /// Checks the table against the element's layout and returns its profiles.
    pub fn into_profile_set(self, atomic_number: AtomicNumber) -> Result<HalfProfileSet, ProfileTableError> {
        if self.atomic_number != u32::from(atomic_number.get()) {
            return Err(ProfileTableError::AtomicNumberMismatch {
                expected: atomic_number.get(),
                actual: self.atomic_number,
            });
        }
        validate_grid(&self.momentum_grid)?;

        let layout = layout_for(atomic_number);
        if self.profiles.len() != layout.len() {
            return Err(ProfileTableError::ProfileCount {
                atomic_number: atomic_number.get(),
                expected: layout.len(),
                actual: self.profiles.len(),
            });
        }

        let mut profiles = Vec::with_capacity(layout.len());
        for (index, (entry, shell)) in self.profiles.into_iter().zip(layout).enumerate() {
            let expected = shell.label();
            if entry.label.trim() != expected {
                return Err(ProfileTableError::ProfileLabel {
                    index,
                    expected,
                    actual: entry.label,
                });
            }
            if entry.values.len() != self.momentum_grid.len() {
                return Err(ProfileTableError::ProfileLength {
                    index,
                    expected: self.momentum_grid.len(),
                    actual: entry.values.len(),
                });
            }
            if let Some((position, value)) = entry
                .values
                .iter()
                .copied()
                .enumerate()
                .find(|(_, value)| !value.is_finite() || *value < 0.0)
            {
                return Err(ProfileTableError::ProfileValue {
                    index,
                    position,
                    value,
                });
            }
            if !is_descending(&entry.values) {
                return Err(ProfileTableError::ProfileNotDescending { index });
            }
            profiles.push(HalfProfile::new(*shell, entry.values));
        }

        Ok(HalfProfileSet {
            atomic_number,
            source: ProfileSource::Tabulated,
            momentum_grid: self.momentum_grid,
            profiles,
        })
    }
}

/// Tables must be sampled on the union grid, point for point.
fn validate_grid(grid: &[f64]) -> Result<(), ProfileTableError> {
    if grid.len() != UNION_GRID_SIZE {
        return Err(ProfileTableError::GridSize {
            expected: UNION_GRID_SIZE,
            actual: grid.len(),
        });
    }
    if let Some((index, (&actual, &expected))) = grid
        .iter()
        .zip(UNION_MOMENTUM_GRID.iter())
        .enumerate()
        .find(|(_, (actual, expected))| actual != expected)
    {
        return Err(ProfileTableError::GridPoint {
            index,
            expected,
            actual,
        });
    }
    Ok(())
}

pub fn table_file_name(atomic_number: AtomicNumber) -> String {
    format!("z{:03}.json", atomic_number.get())
}

pub fn table_path(table_dir: &Path, atomic_number: AtomicNumber) -> PathBuf {
    table_dir.join(table_file_name(atomic_number))
}

/// JSON text of the table compiled into the crate for `atomic_number`, if any.
pub fn bundled_table(atomic_number: AtomicNumber) -> Option<&'static str> {
    BUNDLED_TABLES
        .iter()
        .find(|(z, _)| *z == atomic_number.get())
        .map(|(_, source)| *source)
}

pub fn parse_profile_table(source: &str, origin: &str) -> ComputeResult<ProfileTable> {
    serde_json::from_str(source).map_err(|source| {
        ComptonError::input_validation(
            "INPUT.TABLE_PARSE",
            format!("failed to parse profile table '{}': {}", origin, source),
        )
    })
}

pub fn load_profile_table(path: &Path) -> ComputeResult<ProfileTable> {
    let source = fs::read_to_string(path).map_err(|source| {
        ComptonError::io_system(
            "IO.TABLE_READ",
            format!("failed to read profile table '{}': {}", path.display(), source),
        )
    })?;
    parse_profile_table(&source, &path.display().to_string())
}

/// Tables in `table_dir` whose names match [`TABLE_FILE_GLOB`], sorted by Z.
pub fn list_table_files(table_dir: &Path) -> ComputeResult<Vec<(AtomicNumber, PathBuf)>> {
    let matcher = Glob::new(TABLE_FILE_GLOB)
        .map_err(|source| {
            ComptonError::internal(
                "SYS.TABLE_GLOB",
                format!("invalid glob pattern '{TABLE_FILE_GLOB}': {source}"),
            )
        })?
        .compile_matcher();

    let entries = fs::read_dir(table_dir).map_err(|source| {
        ComptonError::io_system(
            "IO.TABLE_DIRECTORY",
            format!(
                "failed to list profile tables in '{}': {}",
                table_dir.display(),
                source
            ),
        )
    })?;

    let mut tables = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| {
            ComptonError::io_system(
                "IO.TABLE_DIRECTORY",
                format!(
                    "failed to read entry in '{}': {}",
                    table_dir.display(),
                    source
                ),
            )
        })?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !matcher.is_match(name) {
            continue;
        }
        let Some(atomic_number) = name
            .get(1..4)
            .and_then(|digits| digits.parse::<u32>().ok())
            .and_then(|value| AtomicNumber::new(value).ok())
        else {
            continue;
        };
        tables.push((atomic_number, entry.path()));
    }

    tables.sort_by_key(|(atomic_number, _)| *atomic_number);
    Ok(tables)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedGenerator {
    profile_set: HalfProfileSet,
}

impl TabulatedGenerator {
    pub fn load(path: &Path, atomic_number: AtomicNumber) -> ComputeResult<Self> {
        let table = load_profile_table(path)?;
        Self::validated(table, &path.display().to_string(), atomic_number)
    }

    /// Generator over the compiled-in table for `atomic_number`, if one exists.
    pub fn bundled(atomic_number: AtomicNumber) -> Option<ComputeResult<Self>> {
        let source = bundled_table(atomic_number)?;
        let origin = format!("bundled {}", table_file_name(atomic_number));
        Some(
            parse_profile_table(source, &origin)
                .and_then(|table| Self::validated(table, &origin, atomic_number)),
        )
    }

    fn validated(
        table: ProfileTable,
        origin: &str,
        atomic_number: AtomicNumber,
    ) -> ComputeResult<Self> {
        Self::from_table(table, atomic_number).map_err(|error| {
            ComptonError::input_validation(
                error.placeholder(),
                format!("profile table '{}': {}", origin, error),
            )
        })
    }

    pub fn from_table(
        table: ProfileTable,
        atomic_number: AtomicNumber,
    ) -> Result<Self, ProfileTableError> {
        Ok(Self {
            profile_set: table.into_profile_set(atomic_number)?,
        })
    }
}

impl ComptonProfileGenerator for TabulatedGenerator {
    fn atomic_number(&self) -> AtomicNumber {
        self.profile_set.atomic_number
    }

    fn source(&self) -> ProfileSource {
        ProfileSource::Tabulated
    }

    fn generate_half_profiles(&self) -> ComputeResult<HalfProfileSet> {
        Ok(self.profile_set.clone())
    }
}
