//! Nonrelativistic ground-state electronic configurations.
//!
//! Occupations follow the Madelung filling order, corrected by the measured
//! ground-state exceptions. Each exception moves electrons between two
//! orbitals of the Madelung configuration.

use crate::domain::AtomicNumber;
use serde::Serialize;
use std::fmt::{Display, Formatter};

pub const ORBITAL_COUNT: usize = 19;

const ORBITAL_LETTERS: [char; 4] = ['s', 'p', 'd', 'f'];

/// Nonrelativistic orbital `nl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Orbital {
    pub principal: u8,
    pub angular_momentum: u8,
}

impl Orbital {
    pub const fn new(principal: u8, angular_momentum: u8) -> Self {
        Self {
            principal,
            angular_momentum,
        }
    }

    /// Electrons the orbital holds when full, `2(2l + 1)`.
    pub const fn capacity(self) -> u8 {
        2 * (2 * self.angular_momentum + 1)
    }

    pub fn letter(self) -> char {
        ORBITAL_LETTERS
            .get(usize::from(self.angular_momentum))
            .copied()
            .unwrap_or('?')
    }
}

impl Display for Orbital {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.principal, self.letter())
    }
}

const fn orbital(principal: u8, angular_momentum: u8) -> Orbital {
    Orbital::new(principal, angular_momentum)
}

const MADELUNG_ORDER: [Orbital; ORBITAL_COUNT] = [
    orbital(1, 0),
    orbital(2, 0),
    orbital(2, 1),
    orbital(3, 0),
    orbital(3, 1),
    orbital(4, 0),
    orbital(3, 2),
    orbital(4, 1),
    orbital(5, 0),
    orbital(4, 2),
    orbital(5, 1),
    orbital(6, 0),
    orbital(4, 3),
    orbital(5, 2),
    orbital(6, 1),
    orbital(7, 0),
    orbital(5, 3),
    orbital(6, 2),
    orbital(7, 1),
];

#[derive(Debug, Clone, Copy)]
struct MadelungException {
    atomic_number: u8,
    from: Orbital,
    to: Orbital,
    electrons: u8,
}

const fn exception(atomic_number: u8, from: Orbital, to: Orbital, electrons: u8) -> MadelungException {
    MadelungException {
        atomic_number,
        from,
        to,
        electrons,
    }
}

const MADELUNG_EXCEPTIONS: [MadelungException; 19] = [
    exception(24, orbital(4, 0), orbital(3, 2), 1),
    exception(29, orbital(4, 0), orbital(3, 2), 1),
    exception(41, orbital(5, 0), orbital(4, 2), 1),
    exception(42, orbital(5, 0), orbital(4, 2), 1),
    exception(44, orbital(5, 0), orbital(4, 2), 1),
    exception(45, orbital(5, 0), orbital(4, 2), 1),
    exception(46, orbital(5, 0), orbital(4, 2), 2),
    exception(47, orbital(5, 0), orbital(4, 2), 1),
    exception(57, orbital(4, 3), orbital(5, 2), 1),
    exception(58, orbital(4, 3), orbital(5, 2), 1),
    exception(64, orbital(4, 3), orbital(5, 2), 1),
    exception(78, orbital(6, 0), orbital(5, 2), 1),
    exception(79, orbital(6, 0), orbital(5, 2), 1),
    exception(89, orbital(5, 3), orbital(6, 2), 1),
    exception(90, orbital(5, 3), orbital(6, 2), 2),
    exception(91, orbital(5, 3), orbital(6, 2), 1),
    exception(92, orbital(5, 3), orbital(6, 2), 1),
    exception(93, orbital(5, 3), orbital(6, 2), 1),
    exception(96, orbital(5, 3), orbital(6, 2), 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElectronicConfiguration {
    atomic_number: AtomicNumber,
    occupations: [u8; ORBITAL_COUNT],
}

impl ElectronicConfiguration {
    pub fn atomic_number(&self) -> AtomicNumber {
        self.atomic_number
    }

    /// Occupations indexed like [`madelung_order`].
    pub fn occupations(&self) -> &[u8; ORBITAL_COUNT] {
        &self.occupations
    }

    pub fn occupation(&self, orbital: Orbital) -> u8 {
        MADELUNG_ORDER
            .iter()
            .position(|candidate| *candidate == orbital)
            .map_or(0, |index| self.occupations[index])
    }

    pub fn total_occupation(&self) -> u32 {
        self.occupations.iter().map(|&count| u32::from(count)).sum()
    }

    pub fn occupied_orbital_count(&self) -> usize {
        self.occupations
            .iter()
            .filter(|occupation| **occupation > 0)
            .count()
    }

    /// Occupied orbitals in Madelung order.
    pub fn occupied_orbitals(&self) -> impl Iterator<Item = (Orbital, u8)> + '_ {
        MADELUNG_ORDER
            .iter()
            .copied()
            .zip(self.occupations.iter().copied())
            .filter(|(_, occupation)| *occupation > 0)
    }
}

impl Display for ElectronicConfiguration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut orbitals: Vec<(Orbital, u8)> = self.occupied_orbitals().collect();
        orbitals.sort_by_key(|(orbital, _)| *orbital);
        let rendered: Vec<String> = orbitals
            .iter()
            .map(|(orbital, occupation)| format!("{orbital}{occupation}"))
            .collect();
        f.write_str(&rendered.join(" "))
    }
}

pub fn madelung_order() -> &'static [Orbital; ORBITAL_COUNT] {
    &MADELUNG_ORDER
}

pub fn configuration_for_atomic_number(atomic_number: AtomicNumber) -> ElectronicConfiguration {
    let mut occupations = [0_u8; ORBITAL_COUNT];
    let mut remaining = atomic_number.get();
    for (slot, orbital) in occupations.iter_mut().zip(MADELUNG_ORDER.iter()) {
        if remaining == 0 {
            break;
        }
        let filled = remaining.min(orbital.capacity());
        *slot = filled;
        remaining -= filled;
    }

    if let Some(rule) = MADELUNG_EXCEPTIONS
        .iter()
        .find(|rule| rule.atomic_number == atomic_number.get())
    {
        let from = madelung_index(rule.from);
        let to = madelung_index(rule.to);
        occupations[from] -= rule.electrons;
        occupations[to] += rule.electrons;
    }

    ElectronicConfiguration {
        atomic_number,
        occupations,
    }
}

fn madelung_index(orbital: Orbital) -> usize {
    MADELUNG_ORDER
        .iter()
        .position(|candidate| *candidate == orbital)
        .unwrap_or_default()
}
