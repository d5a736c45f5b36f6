use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use viewrank::satisfaction::{GaussianSat, LinearSplineSat, SatFunction};

#[test]
fn desired_value_peaks_at_one() {
    let f = LinearSplineSat::desired(0.0, 10.0, 5.0, 0.1, false);
    assert_relative_eq!(f.compute_satisfaction(5.0), 1.0, epsilon = 1e-9);
    assert_relative_eq!(f.compute_satisfaction(0.0), 0.0, epsilon = 1e-9);
    assert_relative_eq!(f.compute_satisfaction(10.0), 0.0, epsilon = 1e-9);
    assert_eq!(f.domain(), (0.0, 10.0));
}

#[test]
fn desired_value_decays_symmetrically() {
    let f = LinearSplineSat::desired(0.0, 10.0, 5.0, 0.1, false);
    assert_relative_eq!(
        f.compute_satisfaction(4.5),
        f.compute_satisfaction(5.5),
        epsilon = 1e-9
    );
    assert_relative_eq!(f.compute_satisfaction(4.5), 0.9, epsilon = 1e-9);
}

#[test]
fn increasing_variant_keeps_plateau_to_the_end() {
    let f = LinearSplineSat::desired(0.0, 10.0, 5.0, 0.1, true);
    assert_relative_eq!(f.compute_satisfaction(7.0), 1.0, epsilon = 1e-9);
    assert_relative_eq!(f.compute_satisfaction(10.0), 1.0, epsilon = 1e-9);
}

#[test]
fn monotonic_on_the_rising_ramp() {
    let f = LinearSplineSat::desired(0.0, 10.0, 5.0, 0.1, true);
    let mut prev = -1.0;
    for i in 0..=100 {
        let x = i as f64 * 0.1;
        let s = f.compute_satisfaction(x);
        assert!(s >= prev - 1e-12, "satisfaction dropped at x = {x}");
        assert!((0.0..=1.0).contains(&s));
        prev = s;
    }
}

#[test]
fn degenerate_desired_values_still_build() {
    // desired value at the low extreme: plateau starts immediately
    let low = LinearSplineSat::desired(0.0, 10.0, 0.0, 0.1, false);
    assert_relative_eq!(low.compute_satisfaction(0.0), 1.0, epsilon = 1e-9);
    assert_relative_eq!(low.compute_satisfaction(10.0), 0.0, epsilon = 1e-9);

    // desired value at the high extreme: the decay side collapses
    let high = LinearSplineSat::desired(0.0, 10.0, 10.0, 0.1, false);
    assert_relative_eq!(high.compute_satisfaction(10.0), 1.0, epsilon = 1e-9);
    assert_relative_eq!(high.compute_satisfaction(0.0), 0.0, epsilon = 1e-9);
}

#[test]
fn identical_control_points_agree_pointwise() {
    let a = LinearSplineSat::desired(0.0, 10.0, 5.0, 0.1, false);
    let b = LinearSplineSat::from_points(&a.sat_x, &a.sat_y);
    for i in 0..=200 {
        let x = -1.0 + i as f64 * 0.06;
        assert_eq!(a.compute_satisfaction(x), b.compute_satisfaction(x));
    }
}

#[test]
fn cdf_accumulates_trapezoid_areas() {
    let f = LinearSplineSat::from_points(&[0.0, 1.0], &[1.0, 1.0]);
    assert_eq!(f.cumulative_y, vec![0.0, 1.0]);
    assert_relative_eq!(f.total_mass(), 1.0, epsilon = 1e-12);

    let ramp = LinearSplineSat::from_points(&[0.0, 2.0], &[0.0, 1.0]);
    assert_relative_eq!(ramp.total_mass(), 1.0, epsilon = 1e-12);
}

#[test]
fn rebuild_cdf_is_idempotent() {
    let mut f = LinearSplineSat::desired(0.0, 10.0, 5.0, 0.1, false);
    let before = f.cumulative_y.clone();
    f.rebuild_cdf();
    f.rebuild_cdf();
    assert_eq!(f.cumulative_y, before);
}

#[test]
fn sampling_stays_in_the_domain() {
    let f = LinearSplineSat::desired(0.0, 10.0, 5.0, 0.1, false);
    let mut rng = Pcg32::seed_from_u64(1);
    for _ in 0..1000 {
        let x = f.generate_random_x(&mut rng);
        assert!((0.0..=10.0).contains(&x), "sample {x} escaped the domain");
    }
}

#[test]
fn sampling_is_deterministic_under_a_fixed_seed() {
    let f = LinearSplineSat::desired(0.0, 10.0, 5.0, 0.1, false);
    let mut a = Pcg32::seed_from_u64(42);
    let mut b = Pcg32::seed_from_u64(42);
    for _ in 0..10 {
        assert_eq!(f.generate_random_x(&mut a), f.generate_random_x(&mut b));
    }
}

#[test]
fn sampling_prefers_high_satisfaction_regions() {
    // flat 0.05 over [0,1], then a plateau of 1.0 over [1.001, 2]
    let f = LinearSplineSat::from_points(&[0.0, 1.0, 1.001, 2.0], &[0.05, 0.05, 1.0, 1.0]);
    let mut rng = Pcg32::seed_from_u64(7);
    let trials = 2000;
    let mut high = 0;
    for _ in 0..trials {
        if f.generate_random_x(&mut rng) > 1.0 {
            high += 1;
        }
    }
    // ~95% of the mass sits above 1.0; allow a wide statistical margin
    assert!(
        high > trials * 8 / 10,
        "only {high}/{trials} samples landed in the high-satisfaction region"
    );
}

#[test]
fn gaussian_peaks_exactly_at_the_mean() {
    let g = GaussianSat::new(5.5, 1.0, (0.0, 10.0));
    assert_relative_eq!(g.compute_satisfaction(5.5), 1.0, epsilon = 1e-12);
    // 10 even samples plus the inserted peak
    assert_eq!(g.spline().sat_x.len(), 11);
}

#[test]
fn gaussian_decays_away_from_the_mean() {
    let g = GaussianSat::new(5.5, 1.0, (0.0, 10.0));
    let near = g.compute_satisfaction(5.0);
    let far = g.compute_satisfaction(2.0);
    let farther = g.compute_satisfaction(0.5);
    assert!(near > far);
    assert!(far > farther);
    for i in 0..=100 {
        let s = g.compute_satisfaction(i as f64 * 0.1);
        assert!((0.0..=1.0).contains(&s));
    }
}

#[test]
fn gaussian_exact_evaluator_clamps_to_domain() {
    let g = GaussianSat::new(5.5, 1.0, (0.0, 10.0));
    assert_relative_eq!(g.gaussian(5.5), 1.0, epsilon = 1e-12);
    assert_eq!(g.gaussian(20.0), g.gaussian(10.0));
    assert_eq!(g.gaussian(-3.0), g.gaussian(0.0));
}

#[test]
fn gaussian_samples_concentrate_near_the_mean() {
    let g = GaussianSat::new(5.0, 1.0, (0.0, 10.0));
    let mut rng = Pcg32::seed_from_u64(11);
    let trials = 2000;
    let mut near = 0;
    for _ in 0..trials {
        let x = g.generate_random_x(&mut rng);
        if (3.0..=7.0).contains(&x) {
            near += 1;
        }
    }
    // two standard deviations hold ~95% of a true Gaussian; the spline
    // approximation is coarser, so just require a strong majority
    assert!(near > trials * 7 / 10);
}

#[test]
fn trait_objects_expose_the_shared_contract() {
    let funcs: Vec<Box<dyn SatFunction>> = vec![
        Box::new(LinearSplineSat::desired(0.0, 1.0, 0.5, 0.1, false)),
        Box::new(GaussianSat::new(0.5, 0.2, (0.0, 1.0))),
    ];
    let mut rng = Pcg32::seed_from_u64(3);
    for f in &funcs {
        let (lo, hi) = f.domain();
        let x = f.generate_random_x(&mut rng);
        assert!(x >= lo && x <= hi);
        let s = f.compute_satisfaction(x);
        assert!((0.0..=1.0).contains(&s));
    }
}
