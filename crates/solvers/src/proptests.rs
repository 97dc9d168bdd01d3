//! Property-based tests for scanning and bisection.

use proptest::prelude::*;

use rootscan_core::{Interval, Polynomial};

use crate::{
    bisection::{self, Config},
    scan,
    sign::{bracket_sides, strictly_opposite},
};

// Non-zero slopes, bounded away from zero so the residual test stays tight.
fn slope() -> impl Strategy<Value = f64> {
    prop_oneof![-5.0..-0.5, 0.5..5.0]
}

// Small integer coefficients for polynomials of degree 0-3.
fn small_poly() -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec(-6i32..=6, 1..=4).prop_map(|coefficients| {
        let descending: Vec<f64> = coefficients.into_iter().map(f64::from).collect();
        Polynomial::from_descending(&descending).expect("non-empty coefficients")
    })
}

/// A linear function with its root and a bracket of width 3 around it.
fn linear_case(root: f64, slope: f64) -> (Polynomial, Interval) {
    let p = Polynomial::new([(1, slope), (0, -slope * root)]).expect("valid polynomial");
    let base = root.floor();
    let bracket = Interval::new(base - 1.0, base + 2.0).expect("finite bracket");
    (p, bracket)
}

proptest! {
    #[test]
    fn bisection_finds_linear_root(root in -50.0..50.0f64, slope in slope()) {
        let (p, bracket) = linear_case(root, slope);
        let config = Config::new(1e-9);

        let solution = bisection::solve_unobserved(&p, bracket, &config)
            .expect("bracket changes sign");

        prop_assert!(solution.iters <= bisection::MAX_ITERS);
        prop_assert!((solution.root - root).abs() <= 3e-9);
    }

    #[test]
    fn bisection_halves_and_keeps_sign_change(root in -50.0..50.0f64, slope in slope()) {
        let (p, bracket) = linear_case(root, slope);

        let solution = bisection::solve_unobserved(&p, bracket, &Config::new(1e-9))
            .expect("bracket changes sign");

        for pair in solution.trace.windows(2) {
            let ratio = pair[1].width() / pair[0].width();
            prop_assert!((ratio - 0.5).abs() <= 1e-6);
        }
        for row in &solution.trace {
            prop_assert!(bracket_sides(p.evaluate(row.left), p.evaluate(row.right)).is_some());
            prop_assert!(row.left <= row.midpoint && row.midpoint <= row.right);
        }
    }

    #[test]
    fn bisection_is_repeatable(root in -50.0..50.0f64, slope in slope()) {
        let (p, bracket) = linear_case(root, slope);
        let config = Config::default();

        let first = bisection::solve_unobserved(&p, bracket, &config);
        let second = bisection::solve_unobserved(&p, bracket, &config);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn scan_candidates_are_well_formed(p in small_poly(), low in -10i32..0, span in 1i32..20) {
        let low = f64::from(low);
        let high = low + f64::from(span);

        let candidates = scan::scan(&p, low, high).expect("valid range");

        for candidate in &candidates {
            let [left, right] = candidate.as_array();
            prop_assert!(left >= low && left < high);
            if candidate.is_degenerate() {
                prop_assert_eq!(p.evaluate(left), 0.0);
            } else {
                prop_assert_eq!(right - left, scan::STEP);
                prop_assert!(strictly_opposite(p.evaluate(left), p.evaluate(right)));
            }
        }
        for pair in candidates.windows(2) {
            prop_assert!(pair[0].left() <= pair[1].left());
        }
    }

    #[test]
    fn scan_brackets_are_solvable(p in small_poly(), low in -10i32..0, span in 1i32..20) {
        let low = f64::from(low);
        let high = low + f64::from(span);

        for candidate in scan::scan(&p, low, high).expect("valid range") {
            let solution = bisection::solve_unobserved(&p, candidate, &Config::new(1e-9));
            prop_assert!(solution.is_ok());
        }
    }
}
