pub mod errors;

pub use errors::{
    ComptonError, ComptonErrorCategory, ComptonResult, ComputeResult, ExitStatus,
    VerificationResult,
};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

pub const MIN_ATOMIC_NUMBER: u8 = 1;
pub const MAX_ATOMIC_NUMBER: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AtomicNumber(u8);

impl AtomicNumber {
    pub const MIN: Self = Self(MIN_ATOMIC_NUMBER);
    pub const MAX: Self = Self(MAX_ATOMIC_NUMBER);

    pub fn new(value: u32) -> ComputeResult<Self> {
        u8::try_from(value)
            .ok()
            .filter(|z| (MIN_ATOMIC_NUMBER..=MAX_ATOMIC_NUMBER).contains(z))
            .map(Self)
            .ok_or_else(|| {
                ComptonError::input_validation(
                    "INPUT.ATOMIC_NUMBER",
                    format!(
                        "atomic number {} is outside {}..={}",
                        value, MIN_ATOMIC_NUMBER, MAX_ATOMIC_NUMBER
                    ),
                )
            })
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based row into per-element tables.
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (MIN_ATOMIC_NUMBER..=MAX_ATOMIC_NUMBER).map(Self)
    }

    pub fn range(range: RangeInclusive<u32>) -> ComputeResult<Vec<Self>> {
        if range.is_empty() {
            return Err(ComptonError::input_validation(
                "INPUT.ATOMIC_NUMBER_RANGE",
                format!(
                    "atomic number range {}..={} is empty",
                    range.start(),
                    range.end()
                ),
            ));
        }
        range.map(Self::new).collect()
    }
}

impl TryFrom<u8> for AtomicNumber {
    type Error = ComptonError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(u32::from(value))
    }
}

impl From<AtomicNumber> for u8 {
    fn from(value: AtomicNumber) -> Self {
        value.0
    }
}

impl Display for AtomicNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Serial,
    Parallel,
}

impl ExecutionMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Parallel => "parallel",
        }
    }
}

impl Display for ExecutionMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{AtomicNumber, ComptonErrorCategory, ExecutionMode};

    #[test]
    fn atomic_number_accepts_supported_range_only() {
        assert_eq!(AtomicNumber::new(1).expect("hydrogen").get(), 1);
        assert_eq!(AtomicNumber::new(100).expect("fermium").index(), 99);

        for invalid in [0, 101, 255, 1_000] {
            let error = AtomicNumber::new(invalid).expect_err("out of range should fail");
            assert_eq!(error.category(), ComptonErrorCategory::InputValidationError);
            assert_eq!(error.placeholder(), "INPUT.ATOMIC_NUMBER");
        }
    }

    #[test]
    fn all_atomic_numbers_cover_the_table() {
        let all: Vec<u8> = AtomicNumber::all().map(AtomicNumber::get).collect();
        assert_eq!(all.len(), 100);
        assert_eq!(all.first(), Some(&1));
        assert_eq!(all.last(), Some(&100));
    }

    #[test]
    fn range_rejects_empty_and_out_of_table_bounds() {
        assert_eq!(AtomicNumber::range(10..=12).expect("range").len(), 3);
        assert_eq!(
            AtomicNumber::range(12..=10)
                .expect_err("empty range")
                .placeholder(),
            "INPUT.ATOMIC_NUMBER_RANGE"
        );
        assert_eq!(
            AtomicNumber::range(99..=101)
                .expect_err("101 is unsupported")
                .placeholder(),
            "INPUT.ATOMIC_NUMBER"
        );
    }

    #[test]
    fn atomic_number_serializes_as_plain_integer() {
        let z = AtomicNumber::new(29).expect("copper");
        assert_eq!(serde_json::to_string(&z).expect("serialize"), "29");
        let parsed: AtomicNumber = serde_json::from_str("29").expect("deserialize");
        assert_eq!(parsed, z);
        assert!(serde_json::from_str::<AtomicNumber>("0").is_err());
    }

    #[test]
    fn execution_mode_defaults_to_serial() {
        assert_eq!(ExecutionMode::default(), ExecutionMode::Serial);
        assert_eq!(ExecutionMode::Parallel.to_string(), "parallel");
    }
}
