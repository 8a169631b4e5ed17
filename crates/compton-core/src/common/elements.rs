//! Element symbols keyed by atomic number.

use crate::domain::{AtomicNumber, MAX_ATOMIC_NUMBER};

const ELEMENT_SYMBOLS: [&str; MAX_ATOMIC_NUMBER as usize] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm",
];

pub fn element_symbol(atomic_number: AtomicNumber) -> &'static str {
    ELEMENT_SYMBOLS[atomic_number.index()]
}

pub fn atomic_number_for_symbol(symbol: &str) -> Option<AtomicNumber> {
    let normalized = symbol.trim();
    if normalized.is_empty() {
        return None;
    }

    ELEMENT_SYMBOLS
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(normalized))
        .and_then(|index| AtomicNumber::new(index as u32 + 1).ok())
}

/// Parses either a bare atomic number (`"29"`) or an element symbol (`"Cu"`).
pub fn parse_element(spec: &str) -> Option<AtomicNumber> {
    let normalized = spec.trim();
    match normalized.parse::<u32>() {
        Ok(value) => AtomicNumber::new(value).ok(),
        Err(_) => atomic_number_for_symbol(normalized),
    }
}
