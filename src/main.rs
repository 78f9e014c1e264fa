//! Print samples `(x, f(x))` of a function on \[`a`, `b`\].
//!
//! `sample-gen a b [n]` prints the `n` (default 1000) samples of the
//! Gaussian computed element by element, one "(x, g)" per line.

mod cli;

use std::{io::{self, BufWriter, Write},
          path::Path,
          process};
use clap::{error::ErrorKind, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use sample_gen::{Function, Style};

use crate::cli::{Cli, Format};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn prog_name() -> String {
    std::env::args_os().next()
        .as_deref()
        .and_then(|p| Path::new(p).file_name())
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sample-gen".to_string())
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let (argv, values) = cli::split_args(std::env::args_os());
    let parsed = Cli::try_parse_from(argv);
    if let Err(e) = &parsed {
        if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            e.exit()
        }
    }
    if !(2 ..= 3).contains(&values) {
        debug!(values, "wrong number of arguments");
        let mut out = io::stdout().lock();
        out.write_all(cli::usage(&prog_name()).as_bytes())?;
        out.flush()?;
        process::exit(1)
    }
    // Values that do not parse.
    let args = parsed.unwrap_or_else(|e| e.exit());

    let function = Function::from(args.function);
    let style = Style::from(args.style);
    debug!(a = args.a, b = args.b, n = args.n, %function, ?style,
           format = ?args.format, "sampling");
    let samples = function.sample(style, args.a, args.b, args.n);

    let mut out = BufWriter::new(io::stdout().lock());
    match args.format {
        Format::Tuple => samples.write(&mut out)?,
        Format::Gnuplot => samples.write_gnuplot(&mut out)?,
        Format::Latex => {
            let mut tex = samples.latex();
            if let Some(color) = args.color {
                tex.color(color);
            }
            tex.write(&mut out)?
        }
    }
    out.flush()?;
    Ok(())
}
