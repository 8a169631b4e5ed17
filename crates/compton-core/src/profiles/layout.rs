//! Compton-profile shell enumeration and the subshell-to-index converter.
//!
//! Elements up to Z=35 carry one profile per nonrelativistic orbital, so a
//! single `2p` profile serves both L2 and L3. Heavier elements resolve the
//! two j components of every l > 0 orbital into separate profiles.

use super::layout_data::COMPTON_LAYOUTS;
use crate::common::config::Orbital;
use crate::common::subshell::SubshellType;
use crate::domain::{AtomicNumber, ComptonError, ComputeResult};
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Which total angular momentum a profile resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Coupling {
    /// Both j components share one profile.
    Combined,
    /// `j = l - 1/2`
    Lower,
    /// `j = l + 1/2`
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComptonShell {
    pub orbital: Orbital,
    pub coupling: Coupling,
    /// ENDF subshells that draw their profile from this shell. Empty when the
    /// orbital has no ENDF subshell of its own.
    pub subshells: &'static [SubshellType],
}

pub(super) const fn shell(
    principal: u8,
    angular_momentum: u8,
    coupling: Coupling,
    subshells: &'static [SubshellType],
) -> ComptonShell {
    ComptonShell {
        orbital: Orbital::new(principal, angular_momentum),
        coupling,
        subshells,
    }
}

impl ComptonShell {
    /// Twice the total angular momentum, or `None` for combined profiles.
    pub fn twice_total_angular_momentum(&self) -> Option<u8> {
        let l = self.orbital.angular_momentum;
        match self.coupling {
            Coupling::Combined if l == 0 => Some(1),
            Coupling::Combined => None,
            Coupling::Lower => Some(2 * l - 1),
            Coupling::Upper => Some(2 * l + 1),
        }
    }

    pub fn label(&self) -> String {
        match self.coupling {
            Coupling::Combined => self.orbital.to_string(),
            Coupling::Lower | Coupling::Upper => format!(
                "{}{}/2",
                self.orbital,
                self.twice_total_angular_momentum().unwrap_or_default()
            ),
        }
    }

    pub fn covers(&self, subshell: SubshellType) -> bool {
        self.subshells.contains(&subshell)
    }
}

impl Display for ComptonShell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for ComptonShell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

pub fn layout_for(atomic_number: AtomicNumber) -> &'static [ComptonShell] {
    COMPTON_LAYOUTS[atomic_number.index()]
}

pub fn shell_count(atomic_number: AtomicNumber) -> usize {
    layout_for(atomic_number).len()
}

/// Maps ENDF subshells of one element to Compton-profile indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComptonProfileSubshellConverter {
    atomic_number: AtomicNumber,
    shells: &'static [ComptonShell],
}

impl ComptonProfileSubshellConverter {
    pub fn for_atomic_number(atomic_number: AtomicNumber) -> Self {
        Self {
            atomic_number,
            shells: layout_for(atomic_number),
        }
    }

    pub fn atomic_number(&self) -> AtomicNumber {
        self.atomic_number
    }

    pub fn shells(&self) -> &'static [ComptonShell] {
        self.shells
    }

    pub fn shell(&self, index: usize) -> Option<&'static ComptonShell> {
        self.shells.get(index)
    }

    pub fn convert_subshell_to_index(&self, subshell: SubshellType) -> ComputeResult<usize> {
        self.shells
            .iter()
            .position(|shell| shell.covers(subshell))
            .ok_or_else(|| {
                ComptonError::input_validation(
                    "INPUT.COMPTON_SUBSHELL",
                    format!(
                        "subshell {} is not valid for Z={}",
                        subshell, self.atomic_number
                    ),
                )
            })
    }

    /// Every ENDF subshell the element carries, in profile order.
    pub fn subshells(&self) -> impl Iterator<Item = SubshellType> + '_ {
        self.shells
            .iter()
            .flat_map(|shell| shell.subshells.iter().copied())
    }
}
