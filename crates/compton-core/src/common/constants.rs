//! Physical constants shared by the profile generators and unit conversions.
//!
//! Momentum and Compton-profile values are carried in atomic units unless a
//! function says otherwise.

pub const PI: f64 = std::f64::consts::PI;
pub const BOHR: f64 = 0.529_177_210_903_f64;
pub const HART: f64 = 27.211_386_245_988_f64;
/// Inverse fine-structure constant: the electron rest-mass momentum `m_e c`
/// expressed in atomic momentum units.
pub const ALPINV: f64 = 137.035_999_084_f64;
pub const ALPHFS: f64 = 1.0 / ALPINV;
