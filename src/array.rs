//! Samples computed on whole arrays at once.
//!
//! The positions are given by [`Array1::linspace`] (`n` points from
//! `a` to `b`, both included) and the values by arithmetic on the
//! entire array rather than by an explicit loop.

use ndarray::{Array1, Zip};
use crate::FRAC_1_SQRT_2PI;

/// Return an array equal to `values` except at the positions where
/// `x` is zero, which are set to `1`.
fn ones_where_zero(x: &Array1<f64>, values: Array1<f64>) -> Array1<f64> {
    let mut out = Array1::ones(x.raw_dim());
    Zip::from(&mut out).and(x).and(&values).for_each(|o, &x, &v| {
        if x != 0. { *o = v }
    });
    out
}

/// Return `(x, g)` where `x` holds `n` equally spaced points from
/// `a` to `b` (included) and `g` the values of the standard normal
/// density at these points.
pub fn gen_gaussian_array(a: f64, b: f64, n: usize)
                          -> (Array1<f64>, Array1<f64>) {
    let x = Array1::linspace(a, b, n);
    let g = (-&x * &x / 2.).mapv_into(f64::exp) * FRAC_1_SQRT_2PI;
    (x, g)
}

/// Return `(x, s)` where `x` holds `n` equally spaced points from
/// `a` to `b` (included) and `s` the values of sin(x)/x, set to `1`
/// where `x` is `0`.
///
/// # Example
///
/// ```
/// let (x, s) = sample_gen::gen_sinc_array(-1., 1., 3);
/// assert_eq!(x.to_vec(), [-1., 0., 1.]);
/// assert_eq!(s[1], 1.);
/// ```
pub fn gen_sinc_array(a: f64, b: f64, n: usize)
                      -> (Array1<f64>, Array1<f64>) {
    let x = Array1::linspace(a, b, n);
    let s = ones_where_zero(&x, x.mapv(f64::sin) / &x);
    (x, s)
}

/// Return `(x, s2)` where `x` holds `n` equally spaced points from
/// `a` to `b` (included) and `s2` the values of sin(1/x), set to `1`
/// wherever `x` is `0`.
///
/// This does *not* match [`crate::gen_sinf_list`]: the first position
/// `a` is kept (so `x` has `n` points) and every zero of `x` is
/// guarded, not only a zero at `a`.
pub fn gen_sinf_array(a: f64, b: f64, n: usize)
                      -> (Array1<f64>, Array1<f64>) {
    let x = Array1::linspace(a, b, n);
    let s2 = ones_where_zero(&x, (1. / &x).mapv_into(f64::sin));
    (x, s2)
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gaussian_domain() {
        let (x, g) = gen_gaussian_array(-3., 5., 101);
        assert_eq!(x.len(), 101);
        assert_eq!(g.len(), 101);
        assert_eq!(x[0], -3.);
        assert_relative_eq!(x[100], 5., epsilon = 1e-12);
        assert_relative_eq!(g[0], crate::gauss(-3.), epsilon = 1e-16);
    }

    #[test]
    fn sinc_three_points() {
        let (x, s) = gen_sinc_array(-1., 1., 3);
        assert_eq!(x.to_vec(), [-1., 0., 1.]);
        assert_relative_eq!(s[0], 0.8414709848, epsilon = 1e-10);
        assert_eq!(s[1], 1.);
        assert_relative_eq!(s[2], 0.8414709848, epsilon = 1e-10);
    }

    #[test]
    fn sinf_keeps_first_point() {
        let (x, s2) = gen_sinf_array(0., 1., 5);
        assert_eq!(x.to_vec(), [0., 0.25, 0.5, 0.75, 1.]);
        assert_eq!(s2[0], 1.);
        assert_relative_eq!(s2[1], 4f64.sin(), epsilon = 1e-15);
    }

    #[test]
    fn sinf_interior_zero_guarded() {
        let (x, s2) = gen_sinf_array(-1., 1., 5);
        assert_eq!(x.to_vec(), [-1., -0.5, 0., 0.5, 1.]);
        assert_eq!(s2[2], 1.);
        assert!(s2.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn fewer_than_two_points() {
        let (x, g) = gen_gaussian_array(0., 1., 1);
        assert_eq!(x.to_vec(), [0.]);
        assert_eq!(g.to_vec(), [crate::FRAC_1_SQRT_2PI]);
        let (x, s) = gen_sinc_array(0., 1., 1);
        assert_eq!((x.to_vec(), s.to_vec()), (vec![0.], vec![1.]));
        let (x, s2) = gen_sinf_array(0., 1., 1);
        assert_eq!((x.to_vec(), s2.to_vec()), (vec![0.], vec![1.]));
        for f in [gen_gaussian_array, gen_sinc_array, gen_sinf_array] {
            let (x, y) = f(0., 1., 0);
            assert!(x.is_empty() && y.is_empty());
        }
    }

    #[test]
    fn zeros_only_are_replaced() {
        let x = Array1::from(vec![0., 2., -0., 3.]);
        let v = Array1::from(vec![f64::NAN, 5., f64::NAN, -7.]);
        assert_eq!(ones_where_zero(&x, v).to_vec(), [1., 5., 1., -7.]);
    }
}
