use std::ffi::OsString;
use clap::{CommandFactory, Parser, ValueEnum};
use rgb::RGB8;
use sample_gen::{Function, Style, DEFAULT_N};

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum FunctionArg {
    #[default]
    Gaussian,
    Sinc,
    Sinf,
}

impl From<FunctionArg> for Function {
    fn from(f: FunctionArg) -> Self {
        match f {
            FunctionArg::Gaussian => Function::Gaussian,
            FunctionArg::Sinc => Function::Sinc,
            FunctionArg::Sinf => Function::Sinf,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum StyleArg {
    /// Build the samples element by element
    #[default]
    List,
    /// Compute the samples on whole arrays
    Array,
}

impl From<StyleArg> for Style {
    fn from(s: StyleArg) -> Self {
        match s {
            StyleArg::List => Style::List,
            StyleArg::Array => Style::Array,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One "(x, y)" per line
    #[default]
    Tuple,
    /// "x y" per line, blank line at undefined points
    Gnuplot,
    /// PGF/TikZ path commands
    Latex,
}

#[derive(Debug, Parser)]
#[command(
    name = "sample-gen",
    about = "Print samples (x, f(x)) of the Gaussian, sinc or sin(1/x) on [a, b]",
    version
)]
pub struct Cli {
    /// float, lower bound of domain
    pub a: f64,

    /// float, upper bound of domain
    pub b: f64,

    /// integer, number of points in domain
    #[arg(default_value_t = DEFAULT_N)]
    pub n: usize,

    /// Function to sample
    #[arg(long, value_enum, default_value_t = FunctionArg::Gaussian)]
    pub function: FunctionArg,

    /// Sequential (list) or bulk (array) computation
    #[arg(long, value_enum, default_value_t = StyleArg::List)]
    pub style: StyleArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Tuple)]
    pub format: Format,

    /// Stroke color RRGGBB of the LaTeX output
    #[arg(long, value_name = "HEX", value_parser = sample_gen::parse_hex_color)]
    pub color: Option<RGB8>,
}

/// Separate the options from the positional values of `argv` (the
/// program name included).  Return the command line rebuilt as
/// `prog options -- values` together with the number of values.
///
/// Every token that is not a long option (or `-h`, `-V`) is a value,
/// so "-.5", "-inf" or "-5" never look like flags to the parser.
pub fn split_args<I>(argv: I) -> (Vec<OsString>, usize)
where I: IntoIterator<Item = OsString> {
    let cmd = Cli::command();
    let mut argv = argv.into_iter();
    let mut opts: Vec<OsString> = argv.next().into_iter().collect();
    let mut values = vec![];
    while let Some(arg) = argv.next() {
        match arg.to_str() {
            Some("--") => values.extend(argv.by_ref()),
            Some(s) if s.starts_with("--") || s == "-h" || s == "-V" => {
                let takes_value = !s.contains('=')
                    && cmd.get_arguments().any(|a| {
                        a.get_long() == s.get(2 ..)
                            && a.get_action().takes_values() });
                opts.push(arg);
                if takes_value {
                    opts.extend(argv.next());
                }
            }
            _ => values.push(arg),
        }
    }
    let n = values.len();
    opts.push("--".into());
    opts.extend(values);
    (opts, n)
}

pub fn usage(prog: &str) -> String {
    format!("Usage: {prog} a b [n]\n  \
             a : float, lower bound of domain\n  \
             b : float, upper bound of domain\n  \
             n : integer, number of points in domain\n")
}
