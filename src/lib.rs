//! Discretized samples of the Gaussian, the sinc function
//! sin(x)/x and the "sinf" function sin(1/x) on an interval
//! \[`a`, `b`\].
//!
//! Every function comes in two flavours: a *list* form ([`list`])
//! building plain vectors element by element, and an *array* form
//! ([`array`]) computing whole [`ndarray::Array1`] sequences at once.
//! Both are kept on purpose so that they can be compared.

use std::{fmt::{self, Display, Formatter},
          io::{self, Write}};
use ndarray::Array1;
use rgb::*;
use tracing::warn;

pub mod list;
pub mod array;

pub use list::{gen_gaussian_list, gen_sinc_list, gen_sinf_list};
pub use array::{gen_gaussian_array, gen_sinc_array, gen_sinf_array};

/// Default number of points of the domain.
pub const DEFAULT_N: usize = 1000;

/// 1/√(2π), the maximum of the standard normal density.
pub const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Errors of this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("x has {x} points but y has {y}")]
    LengthMismatch { x: usize, y: usize },
    #[error("invalid color {0:?} (expected RRGGBB in hexadecimal)")]
    InvalidColor(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;


////////////////////////////////////////////////////////////////////////
//
// Functions

/// Standard normal density (1/√(2π)) e^(-x²/2).
#[inline]
pub fn gauss(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-x * x / 2.).exp()
}

/// sin(x)/x, extended by continuity with the value 1 at 0.
#[inline]
pub fn sinc(x: f64) -> f64 {
    if x == 0. { 1. } else { x.sin() / x }
}

/// sin(1/x).  Not defined at 0 (returns NaN there).
#[inline]
pub fn sinf(x: f64) -> f64 {
    (1. / x).sin()
}

/// The functions that can be sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Function {
    #[default]
    Gaussian,
    Sinc,
    Sinf,
}

/// How the samples are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Element by element into vectors (see [`list`]).
    #[default]
    List,
    /// Bulk operations on arrays (see [`array`]).
    Array,
}

impl Function {
    pub fn name(self) -> &'static str {
        match self {
            Function::Gaussian => "gaussian",
            Function::Sinc => "sinc",
            Function::Sinf => "sinf",
        }
    }

    /// Sample `self` on \[`a`, `b`\] with `n` points using the
    /// generator of the given `style`.  Note that the list form of
    /// [`Function::Sinf`] only returns `n - 1` points.
    pub fn sample(self, style: Style, a: f64, b: f64, n: usize) -> Samples {
        if n < 2 {
            warn!(n, function = self.name(), "fewer than 2 points, \
                  the step (b - a)/(n - 1) is not finite");
        }
        use {Function::*, Style::*};
        match (self, style) {
            (Gaussian, List) => Samples::from_vecs(gen_gaussian_list(a, b, n)),
            (Sinc, List) => Samples::from_vecs(gen_sinc_list(a, b, n)),
            (Sinf, List) => Samples::from_vecs(gen_sinf_list(a, b, n)),
            (Gaussian, Array) => Samples::from_arrays(gen_gaussian_array(a, b, n)),
            (Sinc, Array) => Samples::from_arrays(gen_sinc_array(a, b, n)),
            (Sinf, Array) => Samples::from_arrays(gen_sinf_array(a, b, n)),
        }
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


////////////////////////////////////////////////////////////////////////
//
// Samples

/// Positions `x` and values `y = f(x)` of a sampled function.  Both
/// vectors have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Samples {
    /// Pair `x` with `y`.  Fails if they do not have the same length.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::LengthMismatch { x: x.len(), y: y.len() })
        }
        Ok(Samples { x, y })
    }

    // The generators always return sequences of equal lengths.
    #[inline]
    fn from_vecs((x, y): (Vec<f64>, Vec<f64>)) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Samples { x, y }
    }

    #[inline]
    fn from_arrays((x, y): (Array1<f64>, Array1<f64>)) -> Self {
        Self::from_vecs((x.to_vec(), y.to_vec()))
    }

    pub fn x(&self) -> &[f64] { &self.x }

    pub fn y(&self) -> &[f64] { &self.y }

    pub fn len(&self) -> usize { self.x.len() }

    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Iterate on the couples `(x, y)` in increasing order of index.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Iterate on the points of the path drawn by the samples.
    /// Continuous runs of finite points are given as `Some(p)` and
    /// separated by a single `None`.  Leading non-finite points are
    /// skipped and two `None` never follow each other.
    fn path(&self) -> Path<'_> {
        Path { samples: self, i: 0, prev_is_cut: true }
    }
}

impl TryFrom<(Vec<f64>, Vec<f64>)> for Samples {
    type Error = Error;

    fn try_from((x, y): (Vec<f64>, Vec<f64>)) -> Result<Self> {
        Samples::new(x, y)
    }
}

impl TryFrom<(Array1<f64>, Array1<f64>)> for Samples {
    type Error = Error;

    fn try_from((x, y): (Array1<f64>, Array1<f64>)) -> Result<Self> {
        Samples::new(x.to_vec(), y.to_vec())
    }
}

struct Path<'a> {
    samples: &'a Samples,
    i: usize,
    prev_is_cut: bool,
}

impl<'a> Iterator for Path<'a> {
    type Item = Option<[f64; 2]>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.i < self.samples.len() {
            let x = self.samples.x[self.i];
            let y = self.samples.y[self.i];
            self.i += 1;
            if x.is_finite() && y.is_finite() {
                self.prev_is_cut = false;
                return Some(Some([x, y]))
            } else if !self.prev_is_cut {
                self.prev_is_cut = true;
                return Some(None)
            }
        }
        None
    }
}


////////////////////////////////////////////////////////////////////////
//
// Output

/// Parse a color written `RRGGBB` (optionally prefixed by `#`) in
/// hexadecimal.
pub fn parse_hex_color(s: &str) -> Result<RGB8> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    let invalid = || Error::InvalidColor(s.to_string());
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid())
    }
    let c = |i: usize| u8::from_str_radix(&hex[i .. i + 2], 16)
        .map_err(|_| invalid());
    Ok(RGB8 { r: c(0)?, g: c(2)?, b: c(4)? })
}

/// LaTeX output.
///
/// # Example
///
/// ```
/// use std::fs::File;
/// use sample_gen::{Function, Style};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let s = Function::Sinc.sample(Style::Array, -10., 10., 200);
/// s.latex().write(&mut File::create("target/sinc.tex")?)?;
/// # Ok(()) }
/// ```
pub struct LaTeX<'a> {
    samples: &'a Samples,
    max_points: usize,
    color: Option<RGB8>,
}

impl<'a> LaTeX<'a> {
    #[inline]
    fn new(s: &'a Samples) -> Self {
        Self { samples: s,  max_points: 20_000,  color: None }
    }

    /// Set the maximum number of points of a PGF path to `n`.  Longer
    /// runs are drawn as several PGF paths.  Default: 20_000.
    pub fn max_points(&mut self, n: usize) -> &mut Self {
        self.max_points = n.max(2);
        self
    }

    /// Set the color of the curve to `color`.  If not specified the
    /// active LaTeX color will be used.
    pub fn color(&mut self, color: RGB8) -> &mut Self {
        self.color = Some(color);
        self
    }

    fn write_with_lines(&self, f: &mut impl Write) -> io::Result<()> {
        let mut n = 0;
        let mut new_path = true;
        for p in self.samples.path() { match p {
            Some([x, y]) => {
                n += 1;
                if new_path {
                    write!(f, "\\pgfpathmoveto{{\\pgfpointxy\
                               {{{:.16}}}{{{:.16}}}}}\n", x, y)?
                } else if n >= self.max_points {
                    write!(f, "\\pgfpathlineto{{\\pgfpointxy\
                               {{{:.16}}}{{{:.16}}}}}\n\
                               \\pgfusepath{{stroke}}\n\
                               \\pgfpathmoveto{{\\pgfpointxy\
                               {{{:.16}}}{{{:.16}}}}}\n", x, y, x, y)?;
                    n = 1;
                } else {
                    write!(f, "\\pgfpathlineto{{\\pgfpointxy\
                               {{{:.16}}}{{{:.16}}}}}\n", x, y)?
                }
                new_path = false;
            }
            None => {
                write!(f, "\\pgfusepath{{stroke}}\n")?;
                n = 0;
                new_path = true;
            }
        }}
        Ok(())
    }

    /// Write the samples as PGF/TikZ commands.
    pub fn write(&self, f: &mut impl Write) -> io::Result<()> {
        write!(f, "% Written by the Rust sample-gen crate.\n")?;
        write!(f, "\\begin{{pgfscope}}\n")?;
        if let Some(RGB8 { r, g, b }) = self.color {
            write!(f, "\\definecolor{{RustSampleGenColor}}{{RGB}}\
                       {{{},{},{}}}\n\
                       \\pgfsetstrokecolor{{RustSampleGenColor}}\n",
                   r, g, b)?;
        }
        self.write_with_lines(f)?;
        write!(f, "\\pgfusepath{{stroke}}\n\\end{{pgfscope}}\n")
    }
}

/// # Output
impl Samples {
    /// Write the samples using PGF/TikZ commands.
    pub fn latex(&self) -> LaTeX<'_> { LaTeX::new(self) }

    /// Write the samples to `f`, one couple "(x, y)" per line, in
    /// increasing order of index.
    pub fn write(&self, f: &mut impl Write) -> io::Result<()> {
        for (x, y) in self.iter() {
            write!(f, "({:?}, {:?})\n", x, y)?;
        }
        Ok(())
    }

    /// Write the samples to `f` in a tabular form: each point is
    /// written as "x y" on a single line (in scientific notation).
    /// Non-finite points interrupt the path and are written as a
    /// blank line.  This format is compatible with Gnuplot.
    pub fn write_gnuplot(&self, f: &mut impl Write) -> io::Result<()> {
        for p in self.path() {
            match p {
                Some([x, y]) => write!(f, "{:e} {:e}\n", x, y)?,
                None => write!(f, "\n")?,
            }
        }
        Ok(())
    }
}

impl Display for Samples {
    /// One couple "(x, y)" per line, as [`Samples::write`].
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (x, y) in self.iter() {
            write!(f, "({:?}, {:?})\n", x, y)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////
//
// Tests
