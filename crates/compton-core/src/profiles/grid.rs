//! Union momentum grid shared by every element's half profiles.

/// Number of momentum points in a half profile.
pub const UNION_GRID_SIZE: usize = 31;

/// Momentum points in atomic units, ascending from 0 to 100.
pub const UNION_MOMENTUM_GRID: [f64; UNION_GRID_SIZE] = [
    0.0, 0.05, 0.1, 0.15, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 1.0, 1.2, 1.4, 1.6, 1.8, 2.0, 2.4,
    3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0, 15.0, 20.0, 30.0, 40.0, 60.0, 100.0,
];

pub fn union_momentum_grid() -> Vec<f64> {
    UNION_MOMENTUM_GRID.to_vec()
}

pub fn is_strictly_ascending(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

/// True when no value exceeds its predecessor (repeated values allowed).
pub fn is_non_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[1] <= pair[0])
}

/// Profile ordering: `reverse(values)` is sorted ascending and the last value
/// lies strictly below the first. Neighbours may tie where the profile is flatter
/// than f64 resolves.
pub fn is_descending(values: &[f64]) -> bool {
    let ends_lower = match (values.first(), values.last()) {
        (Some(first), Some(last)) => last < first,
        _ => false,
    };
    ends_lower && is_non_increasing(values)
}

#[cfg(test)]
mod tests {
    use super::{
        is_descending, is_non_increasing, is_strictly_ascending, UNION_GRID_SIZE,
        UNION_MOMENTUM_GRID,
    };

    #[test]
    fn union_grid_spans_zero_to_one_hundred() {
        assert_eq!(UNION_MOMENTUM_GRID.len(), UNION_GRID_SIZE);
        assert_eq!(UNION_MOMENTUM_GRID[0], 0.0);
        assert_eq!(UNION_MOMENTUM_GRID[UNION_GRID_SIZE - 1], 100.0);
        assert!(is_strictly_ascending(&UNION_MOMENTUM_GRID));
    }

    #[test]
    fn ordering_helpers_distinguish_plateaus() {
        assert!(is_non_increasing(&[3.0, 3.0, 2.0, 1.0]));
        assert!(!is_strictly_ascending(&[1.0, 1.0, 2.0]));
        assert!(!is_non_increasing(&[1.0, 2.0]));
        assert!(is_non_increasing(&[]));
    }

    #[test]
    fn descending_profiles_may_tie_but_must_fall_overall() {
        assert!(is_descending(&[0.058, 0.058, 0.05, 0.0]));
        assert!(!is_descending(&[0.5, 0.5, 0.5]));
        assert!(!is_descending(&[0.5]));
        assert!(!is_descending(&[]));
        assert!(!is_descending(&[1.0, 0.5, 0.7, 0.1]));
    }
}
