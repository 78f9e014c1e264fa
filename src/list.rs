//! Samples built element by element into plain vectors.
//!
//! The domain is \[`a`, `b`\] discretized with the step
//! `dx = (b - a)/(n - 1)`, the k-th position being `a + k dx`.  No
//! check is performed on `n`: for `n < 2` the step is not finite and
//! the positions are NaN or infinite.

use crate::{gauss, sinc, sinf};

/// Sample `$f` at the positions `a + k dx` for `k` in `$k0 .. n`,
/// one element at a time.
macro_rules! sample_list {
    ($a: expr, $b: expr, $n: expr, $k0: expr, $f: expr) => {{
        let (a, b, n) = ($a, $b, $n);
        let dx = (b - a) / (n as f64 - 1.);
        // No reservation from `n`, it may be arbitrarily large.
        let mut x = Vec::new();
        for k in $k0 .. n {
            x.push(a + k as f64 * dx);
        }
        let mut y = Vec::with_capacity(x.len());
        for &xk in &x {
            y.push($f(xk));
        }
        (x, y)
    }}
}

/// Return `(x, g)` where `x` holds `n` equally spaced points from
/// `a` to `b` (included) and `g` the values of the standard normal
/// density at these points.
///
/// # Example
///
/// ```
/// let (x, g) = sample_gen::gen_gaussian_list(-1., 1., 3);
/// assert_eq!(x, [-1., 0., 1.]);
/// assert_eq!(g[1], sample_gen::FRAC_1_SQRT_2PI);
/// ```
pub fn gen_gaussian_list(a: f64, b: f64, n: usize) -> (Vec<f64>, Vec<f64>) {
    sample_list!(a, b, n, 0, gauss)
}

/// Return `(x, s)` where `x` holds `n` equally spaced points from
/// `a` to `b` (included) and `s` the values of sin(x)/x, set to `1`
/// where `x` is `0`.
pub fn gen_sinc_list(a: f64, b: f64, n: usize) -> (Vec<f64>, Vec<f64>) {
    sample_list!(a, b, n, 0, sinc)
}

/// Return `(x, s2)` where `s2` holds the values of sin(1/x).
///
/// Unlike the other generators, the first position `a` is skipped so
/// `x` has `n - 1` points: `a + dx`, ..., `b`.  Only a singularity at
/// `a` is avoided this way; a position landing on `0` inside the
/// interval gives NaN.  Contrast with [`crate::gen_sinf_array`].
pub fn gen_sinf_list(a: f64, b: f64, n: usize) -> (Vec<f64>, Vec<f64>) {
    sample_list!(a, b, n, 1, sinf)
}
