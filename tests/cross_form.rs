//! The list and array generators on the same domains.

use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sample_gen::*;

/// Random domains `a < b` with `n ≥ 2` points.
fn domains(seed: u64) -> Vec<(f64, f64, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0 .. 200).map(|_| {
        let a = rng.gen_range(-50. .. 50.);
        let b = a + rng.gen_range(1e-3 .. 100.);
        (a, b, rng.gen_range(2 .. 2000))
    }).collect()
}

fn assert_close(u: &[f64], v: &[f64]) {
    assert_eq!(u.len(), v.len());
    for (&u, &v) in u.iter().zip(v) {
        assert_relative_eq!(u, v, epsilon = 1e-12, max_relative = 1e-9);
    }
}

#[test]
fn gaussian_forms_agree() {
    for (a, b, n) in domains(1) {
        let (xl, gl) = gen_gaussian_list(a, b, n);
        let (xa, ga) = gen_gaussian_array(a, b, n);
        assert_eq!(xl.len(), n);
        assert_close(&xl, &xa.to_vec());
        assert_close(&gl, &ga.to_vec());
    }
}

#[test]
fn sinc_forms_agree() {
    for (a, b, n) in domains(2) {
        let (xl, sl) = gen_sinc_list(a, b, n);
        let (xa, sa) = gen_sinc_array(a, b, n);
        assert_eq!(xl.len(), n);
        assert_close(&xl, &xa.to_vec());
        assert_close(&sl, &sa.to_vec());
    }
}

#[test]
fn sinc_forms_agree_at_zero() {
    // Odd numbers of points on symmetric intervals put a sample on 0.
    for n in [3, 5, 101, 1001] {
        let (xl, sl) = gen_sinc_list(-4., 4., n);
        let (xa, sa) = gen_sinc_array(-4., 4., n);
        let mid = n / 2;
        assert_eq!(xl[mid], 0.);
        assert_eq!(xa[mid], 0.);
        assert_eq!(sl[mid], 1.);
        assert_eq!(sa[mid], 1.);
        assert!(sl.iter().chain(sa.iter()).all(|v| v.is_finite()));
    }
}

#[test]
fn endpoints() {
    for (a, b, n) in domains(3) {
        let (xl, _) = gen_gaussian_list(a, b, n);
        let (xa, _) = gen_sinc_array(a, b, n);
        assert_eq!(xl[0], a);
        assert_eq!(xa[0], a);
        assert_relative_eq!(xl[n - 1], b, epsilon = 1e-9, max_relative = 1e-12);
        assert_relative_eq!(xa[n - 1], b, epsilon = 1e-9, max_relative = 1e-12);
    }
}

// The two sinf generators are different operations: the list form
// drops the first point, the array form keeps it and guards zeros.
#[test]
fn sinf_forms_differ_in_length() {
    for (a, b, n) in domains(4) {
        let (xl, sl) = gen_sinf_list(a, b, n);
        let (xa, sa) = gen_sinf_array(a, b, n);
        assert_eq!(xl.len(), n - 1);
        assert_eq!(sl.len(), n - 1);
        assert_eq!(xa.len(), n);
        assert_eq!(sa.len(), n);
        assert_eq!(xa[0], a);
        // Past the first point the positions are the same.
        assert_close(&xl, &xa.to_vec()[1 ..]);
    }
}

#[test]
fn sinf_zero_handling_differs() {
    let (xl, sl) = gen_sinf_list(-2., 2., 9);
    let (xa, sa) = gen_sinf_array(-2., 2., 9);
    assert_eq!(xl[3], 0.);
    assert!(sl[3].is_nan());
    assert_eq!(xa[4], 0.);
    assert_eq!(sa[4], 1.);
}

#[test]
fn gaussian_peak() {
    let (x, g) = gen_gaussian_array(-1e3, 1e3, 20_001);
    let i = g.iter().enumerate()
        .max_by(|(_, u), (_, v)| u.total_cmp(v))
        .map(|(i, _)| i)
        .unwrap();
    assert_relative_eq!(x[i], 0., epsilon = 1e-9);
    assert_relative_eq!(g[i], 0.3989422804, epsilon = 1e-10);
}

#[test]
fn repeated_calls_are_identical() {
    for f in [Function::Gaussian, Function::Sinc, Function::Sinf] {
        for style in [Style::List, Style::Array] {
            assert_eq!(f.sample(style, -3.5, 2., 77),
                       f.sample(style, -3.5, 2., 77));
        }
    }
}
