// Compton-profile shell enumeration per element.
//
// Each entry lists the profile orbital and the ENDF subshells that draw their
// profile from it, in table order.

use super::layout::{ComptonShell, Coupling::*, shell};
use crate::common::subshell::SubshellType::*;

const LAYOUT_Z001: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
];

const LAYOUT_Z003: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
];

const LAYOUT_Z005: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Combined, &[L2, L3]),
];

const LAYOUT_Z011: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Combined, &[L2, L3]),
    shell(3, 0, Combined, &[M1]),
];

const LAYOUT_Z013: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Combined, &[L2, L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Combined, &[M2, M3]),
];

const LAYOUT_Z019: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Combined, &[L2, L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Combined, &[M2, M3]),
    shell(4, 0, Combined, &[N1]),
];

const LAYOUT_Z021: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Combined, &[L2, L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Combined, &[M2, M3]),
    shell(3, 2, Combined, &[M4, M5]),
    shell(4, 0, Combined, &[N1]),
];

const LAYOUT_Z031: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Combined, &[L2, L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Combined, &[M2, M3]),
    shell(3, 2, Combined, &[M4, M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Combined, &[N2, N3]),
];

const LAYOUT_Z036: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
];

const LAYOUT_Z037: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(5, 0, Combined, &[O1]),
];

const LAYOUT_Z039: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Combined, &[N4, N5]),
    shell(5, 0, Combined, &[O1]),
];

const LAYOUT_Z042: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(5, 0, Combined, &[O1]),
];

const LAYOUT_Z046: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
];

const LAYOUT_Z049: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Combined, &[O2, O3]),
];

const LAYOUT_Z051: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
];

const LAYOUT_Z055: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
    shell(6, 0, Combined, &[P1]),
];

const LAYOUT_Z057: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
    shell(5, 2, Combined, &[O4, O5]),
    shell(6, 0, Combined, &[P1]),
];

const LAYOUT_Z058: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(4, 3, Combined, &[N6, N7]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
    shell(5, 2, Lower, &[]),
    shell(6, 0, Combined, &[P1]),
];

const LAYOUT_Z059: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(4, 3, Combined, &[N6, N7]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
    shell(6, 0, Combined, &[P1]),
];

const LAYOUT_Z063: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(4, 3, Lower, &[N6]),
    shell(4, 3, Upper, &[N7]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
    shell(6, 0, Combined, &[P1]),
];

const LAYOUT_Z064: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(4, 3, Lower, &[N6]),
    shell(4, 3, Upper, &[N7]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
    shell(5, 2, Combined, &[O4, O5]),
    shell(6, 0, Combined, &[P1]),
];

const LAYOUT_Z075: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(4, 3, Lower, &[N6]),
    shell(4, 3, Upper, &[N7]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
    shell(5, 2, Lower, &[O4]),
    shell(5, 2, Upper, &[O5]),
    shell(6, 0, Combined, &[P1]),
];

const LAYOUT_Z077: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(4, 3, Lower, &[N6]),
    shell(4, 3, Upper, &[N7]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
    shell(5, 2, Lower, &[O4]),
    shell(5, 2, Upper, &[O5]),
];

const LAYOUT_Z081: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(4, 3, Lower, &[N6]),
    shell(4, 3, Upper, &[N7]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
    shell(5, 2, Lower, &[O4]),
    shell(5, 2, Upper, &[O5]),
    shell(6, 0, Combined, &[P1]),
    shell(6, 1, Combined, &[P2, P3]),
];

const LAYOUT_Z083: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(4, 3, Lower, &[N6]),
    shell(4, 3, Upper, &[N7]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
    shell(5, 2, Lower, &[O4]),
    shell(5, 2, Upper, &[O5]),
    shell(6, 0, Combined, &[P1]),
    shell(6, 1, Lower, &[P2]),
    shell(6, 1, Upper, &[P3]),
];

const LAYOUT_Z087: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(4, 3, Lower, &[N6]),
    shell(4, 3, Upper, &[N7]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
    shell(5, 2, Lower, &[O4]),
    shell(5, 2, Upper, &[O5]),
    shell(6, 0, Combined, &[P1]),
    shell(6, 1, Lower, &[P2]),
    shell(6, 1, Upper, &[P3]),
    shell(7, 0, Combined, &[Q1]),
];

const LAYOUT_Z089: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(4, 3, Lower, &[N6]),
    shell(4, 3, Upper, &[N7]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
    shell(5, 2, Lower, &[O4]),
    shell(5, 2, Upper, &[O5]),
    shell(6, 0, Combined, &[P1]),
    shell(6, 1, Lower, &[P2]),
    shell(6, 1, Upper, &[P3]),
    shell(6, 2, Combined, &[P4, P5]),
    shell(7, 0, Combined, &[Q1]),
];

const LAYOUT_Z091: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(4, 3, Lower, &[N6]),
    shell(4, 3, Upper, &[N7]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
    shell(5, 2, Lower, &[O4]),
    shell(5, 2, Upper, &[O5]),
    shell(5, 3, Combined, &[O6, O7]),
    shell(6, 0, Combined, &[P1]),
    shell(6, 1, Lower, &[P2]),
    shell(6, 1, Upper, &[P3]),
    shell(6, 2, Combined, &[P4, P5]),
    shell(7, 0, Combined, &[Q1]),
];

const LAYOUT_Z094: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(4, 3, Lower, &[N6]),
    shell(4, 3, Upper, &[N7]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
    shell(5, 2, Lower, &[O4]),
    shell(5, 2, Upper, &[O5]),
    shell(5, 3, Combined, &[O6, O7]),
    shell(6, 0, Combined, &[P1]),
    shell(6, 1, Lower, &[P2]),
    shell(6, 1, Upper, &[P3]),
    shell(7, 0, Combined, &[Q1]),
];

const LAYOUT_Z095: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(4, 3, Lower, &[N6]),
    shell(4, 3, Upper, &[N7]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
    shell(5, 2, Lower, &[O4]),
    shell(5, 2, Upper, &[O5]),
    shell(5, 3, Lower, &[O6]),
    shell(5, 3, Upper, &[O7]),
    shell(6, 0, Combined, &[P1]),
    shell(6, 1, Lower, &[P2]),
    shell(6, 1, Upper, &[P3]),
    shell(7, 0, Combined, &[Q1]),
];

const LAYOUT_Z096: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(4, 3, Lower, &[N6]),
    shell(4, 3, Upper, &[N7]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
    shell(5, 2, Lower, &[O4]),
    shell(5, 2, Upper, &[O5]),
    shell(5, 3, Lower, &[O6]),
    shell(5, 3, Upper, &[O7]),
    shell(6, 0, Combined, &[P1]),
    shell(6, 1, Lower, &[P2]),
    shell(6, 1, Upper, &[P3]),
    shell(6, 2, Combined, &[P4, P5]),
    shell(7, 0, Combined, &[Q1]),
];

const LAYOUT_Z097: &[ComptonShell] = &[
    shell(1, 0, Combined, &[K]),
    shell(2, 0, Combined, &[L1]),
    shell(2, 1, Lower, &[L2]),
    shell(2, 1, Upper, &[L3]),
    shell(3, 0, Combined, &[M1]),
    shell(3, 1, Lower, &[M2]),
    shell(3, 1, Upper, &[M3]),
    shell(3, 2, Lower, &[M4]),
    shell(3, 2, Upper, &[M5]),
    shell(4, 0, Combined, &[N1]),
    shell(4, 1, Lower, &[N2]),
    shell(4, 1, Upper, &[N3]),
    shell(4, 2, Lower, &[N4]),
    shell(4, 2, Upper, &[N5]),
    shell(4, 3, Lower, &[N6]),
    shell(4, 3, Upper, &[N7]),
    shell(5, 0, Combined, &[O1]),
    shell(5, 1, Lower, &[O2]),
    shell(5, 1, Upper, &[O3]),
    shell(5, 2, Lower, &[O4]),
    shell(5, 2, Upper, &[O5]),
    shell(5, 3, Lower, &[O6, P4]),
    shell(5, 3, Upper, &[O7, P5]),
    shell(6, 0, Combined, &[P1]),
    shell(6, 1, Lower, &[P2]),
    shell(6, 1, Upper, &[P3]),
    shell(7, 0, Combined, &[Q1]),
];

pub(super) const COMPTON_LAYOUTS: [&[ComptonShell]; 100] = [
    LAYOUT_Z001, LAYOUT_Z001, LAYOUT_Z003, LAYOUT_Z003, LAYOUT_Z005,
    LAYOUT_Z005, LAYOUT_Z005, LAYOUT_Z005, LAYOUT_Z005, LAYOUT_Z005,
    LAYOUT_Z011, LAYOUT_Z011, LAYOUT_Z013, LAYOUT_Z013, LAYOUT_Z013,
    LAYOUT_Z013, LAYOUT_Z013, LAYOUT_Z013, LAYOUT_Z019, LAYOUT_Z019,
    LAYOUT_Z021, LAYOUT_Z021, LAYOUT_Z021, LAYOUT_Z021, LAYOUT_Z021,
    LAYOUT_Z021, LAYOUT_Z021, LAYOUT_Z021, LAYOUT_Z021, LAYOUT_Z021,
    LAYOUT_Z031, LAYOUT_Z031, LAYOUT_Z031, LAYOUT_Z031, LAYOUT_Z031,
    LAYOUT_Z036, LAYOUT_Z037, LAYOUT_Z037, LAYOUT_Z039, LAYOUT_Z039,
    LAYOUT_Z039, LAYOUT_Z042, LAYOUT_Z042, LAYOUT_Z042, LAYOUT_Z042,
    LAYOUT_Z046, LAYOUT_Z042, LAYOUT_Z042, LAYOUT_Z049, LAYOUT_Z049,
    LAYOUT_Z051, LAYOUT_Z051, LAYOUT_Z051, LAYOUT_Z051, LAYOUT_Z055,
    LAYOUT_Z055, LAYOUT_Z057, LAYOUT_Z058, LAYOUT_Z059, LAYOUT_Z059,
    LAYOUT_Z059, LAYOUT_Z059, LAYOUT_Z063, LAYOUT_Z064, LAYOUT_Z063,
    LAYOUT_Z063, LAYOUT_Z063, LAYOUT_Z063, LAYOUT_Z063, LAYOUT_Z063,
    LAYOUT_Z064, LAYOUT_Z064, LAYOUT_Z064, LAYOUT_Z064, LAYOUT_Z075,
    LAYOUT_Z075, LAYOUT_Z077, LAYOUT_Z075, LAYOUT_Z075, LAYOUT_Z075,
    LAYOUT_Z081, LAYOUT_Z081, LAYOUT_Z083, LAYOUT_Z083, LAYOUT_Z083,
    LAYOUT_Z083, LAYOUT_Z087, LAYOUT_Z087, LAYOUT_Z089, LAYOUT_Z089,
    LAYOUT_Z091, LAYOUT_Z091, LAYOUT_Z091, LAYOUT_Z094, LAYOUT_Z095,
    LAYOUT_Z096, LAYOUT_Z097, LAYOUT_Z095, LAYOUT_Z095, LAYOUT_Z095,
];
