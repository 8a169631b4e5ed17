//! Atomic subshell designators (K, L1, ..., Q3).
//!
//! The ENDF designator is the sequential index used by the data containers
//! (K = 1 through Q3 = 39). EADL numbers the same subshells sparsely
//! (K = 1, L1 = 3, L2 = 5, ...), leaving gaps for the parent shells.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SubshellType {
    K,
    L1,
    L2,
    L3,
    M1,
    M2,
    M3,
    M4,
    M5,
    N1,
    N2,
    N3,
    N4,
    N5,
    N6,
    N7,
    O1,
    O2,
    O3,
    O4,
    O5,
    O6,
    O7,
    O8,
    O9,
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
    P7,
    P8,
    P9,
    P10,
    P11,
    Q1,
    Q2,
    Q3,
}

const ALL_SUBSHELLS: [SubshellType; 39] = {
    use SubshellType::*;
    [
        K, L1, L2, L3, M1, M2, M3, M4, M5, N1, N2, N3, N4, N5, N6, N7, O1, O2, O3, O4, O5, O6,
        O7, O8, O9, P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11, Q1, Q2, Q3,
    ]
};

const SUBSHELL_LABELS: [&str; 39] = [
    "K", "L1", "L2", "L3", "M1", "M2", "M3", "M4", "M5", "N1", "N2", "N3", "N4", "N5", "N6", "N7",
    "O1", "O2", "O3", "O4", "O5", "O6", "O7", "O8", "O9", "P1", "P2", "P3", "P4", "P5", "P6", "P7",
    "P8", "P9", "P10", "P11", "Q1", "Q2", "Q3",
];

// Subshells per principal shell: K=1, L=3, M=5, N=7, O=9, P=11, Q=3.
const SHELL_WIDTHS: [(u8, u8); 7] = [(1, 1), (2, 3), (3, 5), (4, 7), (5, 9), (6, 11), (7, 3)];

impl SubshellType {
    pub fn all() -> &'static [SubshellType; 39] {
        &ALL_SUBSHELLS
    }

    pub const fn endf_designator(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_endf_designator(designator: u32) -> Option<Self> {
        let index = usize::try_from(designator).ok()?.checked_sub(1)?;
        ALL_SUBSHELLS.get(index).copied()
    }

    /// EADL designator. Each shell past K reserves one code for the whole
    /// shell (2, 7, 15, ...) and each j pair reserves one code for the
    /// unresolved pair (L23 = 4, M45 = 12, ...).
    pub fn eadl_designator(self) -> u32 {
        let mut designator = 0_u32;
        for (principal, width) in SHELL_WIDTHS {
            for position in 0..width {
                designator += if position == 0 || position % 2 == 1 {
                    // combined shell code, or the combined code of an l pair
                    if principal == 1 { 1 } else { 2 }
                } else {
                    1
                };
                if self.principal() == principal && self.position_in_shell() == position {
                    return designator;
                }
            }
        }
        designator
    }

    pub fn from_eadl_designator(designator: u32) -> Option<Self> {
        ALL_SUBSHELLS
            .iter()
            .copied()
            .find(|subshell| subshell.eadl_designator() == designator)
    }

    pub fn label(self) -> &'static str {
        SUBSHELL_LABELS[self as usize]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_uppercase();
        SUBSHELL_LABELS
            .iter()
            .position(|candidate| *candidate == normalized)
            .map(|index| ALL_SUBSHELLS[index])
    }

    /// Principal quantum number n.
    pub fn principal(self) -> u8 {
        let mut offset = self as u8;
        for (principal, width) in SHELL_WIDTHS {
            if offset < width {
                return principal;
            }
            offset -= width;
        }
        unreachable!("subshell table covers every variant")
    }

    fn position_in_shell(self) -> u8 {
        let mut offset = self as u8;
        for (_, width) in SHELL_WIDTHS {
            if offset < width {
                return offset;
            }
            offset -= width;
        }
        unreachable!("subshell table covers every variant")
    }

    /// Orbital angular momentum l (s = 0 for position 0, then p, d, f, ...
    /// pairs of j = l - 1/2, l + 1/2).
    pub fn angular_momentum(self) -> u8 {
        self.position_in_shell().div_ceil(2)
    }

    /// Twice the total angular momentum, 2j.
    pub fn twice_total_angular_momentum(self) -> u8 {
        let position = self.position_in_shell();
        let l = self.angular_momentum();
        if position == 0 || position % 2 == 0 {
            2 * l + 1
        } else {
            2 * l - 1
        }
    }

    /// Maximum number of electrons the subshell can hold, 2j + 1.
    pub fn capacity(self) -> u8 {
        self.twice_total_angular_momentum() + 1
    }
}

impl Display for SubshellType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::SubshellType;

    #[test]
    fn endf_designators_are_sequential() {
        assert_eq!(SubshellType::K.endf_designator(), 1);
        assert_eq!(SubshellType::L3.endf_designator(), 4);
        assert_eq!(SubshellType::P1.endf_designator(), 26);
        assert_eq!(SubshellType::Q3.endf_designator(), 39);
        assert_eq!(SubshellType::from_endf_designator(0), None);
        assert_eq!(SubshellType::from_endf_designator(17), Some(SubshellType::O1));
        assert_eq!(SubshellType::from_endf_designator(40), None);
    }

    #[test]
    fn eadl_designators_skip_combined_shell_codes() {
        let expected = [
            (SubshellType::K, 1),
            (SubshellType::L1, 3),
            (SubshellType::L2, 5),
            (SubshellType::L3, 6),
            (SubshellType::M1, 8),
            (SubshellType::M2, 10),
            (SubshellType::M3, 11),
            (SubshellType::M4, 13),
            (SubshellType::M5, 14),
            (SubshellType::N1, 16),
            (SubshellType::N7, 25),
            (SubshellType::O1, 27),
            (SubshellType::O5, 33),
            (SubshellType::O9, 39),
            (SubshellType::P1, 41),
            (SubshellType::P2, 43),
            (SubshellType::P5, 47),
            (SubshellType::P11, 56),
            (SubshellType::Q1, 58),
            (SubshellType::Q2, 60),
            (SubshellType::Q3, 61),
        ];
        for (subshell, designator) in expected {
            assert_eq!(subshell.eadl_designator(), designator, "{subshell}");
            assert_eq!(SubshellType::from_eadl_designator(designator), Some(subshell));
        }
        for unused in [0, 2, 4, 7, 9, 12, 15, 26, 40, 42, 57, 59, 62] {
            assert_eq!(SubshellType::from_eadl_designator(unused), None, "{unused}");
        }
    }

    #[test]
    fn quantum_numbers_follow_shell_structure() {
        assert_eq!(SubshellType::K.principal(), 1);
        assert_eq!(SubshellType::K.angular_momentum(), 0);
        assert_eq!(SubshellType::K.capacity(), 2);

        assert_eq!(SubshellType::L2.angular_momentum(), 1);
        assert_eq!(SubshellType::L2.twice_total_angular_momentum(), 1);
        assert_eq!(SubshellType::L3.twice_total_angular_momentum(), 3);

        assert_eq!(SubshellType::N6.principal(), 4);
        assert_eq!(SubshellType::N6.angular_momentum(), 3);
        assert_eq!(SubshellType::N6.capacity(), 6);
        assert_eq!(SubshellType::N7.capacity(), 8);

        assert_eq!(SubshellType::Q1.principal(), 7);
        assert_eq!(SubshellType::Q1.angular_momentum(), 0);
    }

    #[test]
    fn labels_roundtrip() {
        for subshell in SubshellType::all() {
            assert_eq!(SubshellType::from_label(subshell.label()), Some(*subshell));
        }
        assert_eq!(SubshellType::from_label("p10"), Some(SubshellType::P10));
        assert_eq!(SubshellType::from_label("X1"), None);
    }
}
