use compton_core::common::constants::ALPINV;
use compton_core::domain::AtomicNumber;
use compton_core::profiles::{
    FullProfileOptions, MomentumUnits, OccupationNumberEvaluator, convert_to_mec_units,
    default_generator, full_profile_from_half,
};

fn assert_scalar_close(label: &str, expected: f64, actual: f64, abs_tol: f64, rel_tol: f64) {
    let diff = (expected - actual).abs();
    let scale = expected.abs().max(actual.abs()).max(1.0e-300);
    assert!(
        diff <= abs_tol || diff / scale <= rel_tol,
        "{label}: expected={expected:.15e} actual={actual:.15e} diff={diff:.3e}"
    );
}

#[test]
fn hydrogen_full_profile_is_symmetric_and_nearly_normalized() {
    let set = default_generator(AtomicNumber::new(1).expect("hydrogen"))
        .generate_half_profiles()
        .expect("hydrogen profiles");
    let full = full_profile_from_half(
        &set.momentum_grid,
        &set.profiles[0].values,
        FullProfileOptions::default(),
    )
    .expect("full profile");

    let count = full.momentum_grid.len();
    assert_eq!(count, 2 * (set.momentum_grid.len() + 1) - 1);
    assert_eq!(full.momentum_grid[0], -ALPINV);
    assert_eq!(full.momentum_grid[count - 1], ALPINV);
    for index in 0..count {
        assert_eq!(full.momentum_grid[index], -full.momentum_grid[count - 1 - index]);
        assert_eq!(full.values[index], full.values[count - 1 - index]);
    }
    // The coarse union grid only approximates the unit area.
    assert_scalar_close("hydrogen integral", 1.0, full.integral(), 0.0, 0.01);
}

#[test]
fn occupation_numbers_rise_monotonically_to_one() {
    let set = default_generator(AtomicNumber::new(10).expect("neon"))
        .generate_half_profiles()
        .expect("neon profiles");
    for profile in &set.profiles {
        let options = FullProfileOptions {
            renormalize: true,
            ..FullProfileOptions::default()
        };
        let full = full_profile_from_half(&set.momentum_grid, &profile.values, options)
            .expect("full profile");
        assert_scalar_close("renormalized", 1.0, full.integral(), 1.0e-12, 0.0);

        let evaluator = OccupationNumberEvaluator::new(full.momentum_grid.clone(), full.values.clone())
            .expect("evaluator");
        let rows = evaluator.occupation_number_table(&full.momentum_grid);
        assert_eq!(rows[0].occupation_number, 0.0);
        assert!(rows
            .windows(2)
            .all(|pair| pair[1].occupation_number >= pair[0].occupation_number));
        let last = rows[rows.len() - 1].occupation_number;
        assert_scalar_close("n(p_max)", 1.0, last, 1.0e-12, 0.0);
        assert_scalar_close(
            "n(0)",
            0.5,
            evaluator.evaluate_occupation_number(0.0),
            1.0e-12,
            0.0,
        );
    }
}

#[test]
fn mec_units_preserve_the_integral() {
    let set = default_generator(AtomicNumber::new(6).expect("carbon"))
        .generate_half_profiles()
        .expect("carbon profiles");
    let atomic = full_profile_from_half(
        &set.momentum_grid,
        &set.profiles[1].values,
        FullProfileOptions::default(),
    )
    .expect("full profile");
    let mec = convert_to_mec_units(&atomic);

    assert_eq!(mec.units, MomentumUnits::MeC);
    assert_scalar_close("p_max", 1.0, mec.momentum_grid[mec.momentum_grid.len() - 1], 1.0e-15, 0.0);
    assert_scalar_close("integral", atomic.integral(), mec.integral(), 0.0, 1.0e-12);
}
