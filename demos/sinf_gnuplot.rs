use std::{error::Error,
          fs::File,
          io::{BufWriter, Write},
          path::PathBuf};
use sample_gen::{Function, Samples, Style};

type R = Result<(), Box<dyn Error>>;

// Writes a Gnuplot script comparing the two sin(1/x) generators on an
// interval containing 0.
fn main() -> R {
    let dir = std::env::temp_dir();
    let script = dir.join("sinf.gp");
    let mut fh = File::create(&script)?;
    write!(fh, "set terminal pngcairo\n\
                set grid\n")?;
    let mut d = 0;
    let mut save = |s: &Samples, title: &str| -> R {
        d += 1;
        let fname: PathBuf = dir.join(format!("sinf{}.dat", d));
        s.write_gnuplot(&mut BufWriter::new(File::create(&fname)?))?;
        write!(fh, "set output \"sinf{}.png\"\n\
                    plot '{}' with l lt 1 lw 2 title \"{} ({} pts)\"\n",
               d, fname.display(), title, s.len())?;
        Ok(())
    };

    let s = Function::Sinf.sample(Style::List, -0.4, 0.4, 391);
    save(&s, "sin(1/x), list")?;
    let s = Function::Sinf.sample(Style::Array, -0.4, 0.4, 391);
    save(&s, "sin(1/x), array")?;

    println!("Run \"gnuplot {}\" to plot.", script.display());
    Ok(())
}
