use super::layout::ComptonShell;
use crate::domain::AtomicNumber;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Where a profile set's values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSource {
    /// Screened hydrogenic model.
    Hydrogenic,
    /// Values read from a tabulated data file.
    Tabulated,
}

impl ProfileSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hydrogenic => "hydrogenic",
            Self::Tabulated => "tabulated",
        }
    }
}

impl Display for ProfileSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Per-electron Compton profile `J(q)` for `q >= 0` on the set's grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HalfProfile {
    #[serde(rename = "label")]
    pub shell: ComptonShell,
    pub values: Vec<f64>,
}

impl HalfProfile {
    pub fn new(shell: ComptonShell, values: Vec<f64>) -> Self {
        Self { shell, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at zero momentum.
    pub fn front(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// Value at the largest tabulated momentum.
    pub fn back(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HalfProfileSet {
    pub atomic_number: AtomicNumber,
    pub source: ProfileSource,
    pub momentum_grid: Vec<f64>,
    pub profiles: Vec<HalfProfile>,
}

impl HalfProfileSet {
    pub fn shell_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn profile(&self, index: usize) -> Option<&HalfProfile> {
        self.profiles.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::{HalfProfile, HalfProfileSet, ProfileSource};
    use crate::domain::AtomicNumber;
    use crate::profiles::layout::layout_for;

    #[test]
    fn front_and_back_read_profile_endpoints() {
        let hydrogen = AtomicNumber::new(1).expect("hydrogen");
        let profile = HalfProfile::new(layout_for(hydrogen)[0], vec![0.849, 0.5, 2.6e-11]);
        assert_eq!(profile.front(), Some(0.849));
        assert_eq!(profile.back(), Some(2.6e-11));
        assert_eq!(profile.len(), 3);

        let empty = HalfProfile::new(layout_for(hydrogen)[0], Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.front(), None);
        assert_eq!(empty.back(), None);
    }

    #[test]
    fn profile_set_serializes_shell_labels() {
        let hydrogen = AtomicNumber::new(1).expect("hydrogen");
        let set = HalfProfileSet {
            atomic_number: hydrogen,
            source: ProfileSource::Tabulated,
            momentum_grid: vec![0.0, 1.0],
            profiles: vec![HalfProfile::new(layout_for(hydrogen)[0], vec![0.5, 0.25])],
        };
        let json = serde_json::to_value(&set).expect("profile set should serialize");
        assert_eq!(json["atomicNumber"], 1);
        assert_eq!(json["source"], "tabulated");
        assert_eq!(json["profiles"][0]["label"], "1s");
        assert_eq!(json["profiles"][0]["values"][1], 0.25);
        assert_eq!(set.shell_count(), 1);
        assert!(set.profile(1).is_none());
    }
}
