use std::{error::Error,
          fs::File,
          io::Write};
use rgb::RGB8;
use sample_gen::{Function, Style};

fn main() -> Result<(), Box<dyn Error>> {
    let dir = std::env::temp_dir();
    let colors = [RGB8 { r: 31, g: 119, b: 180 },
                  RGB8 { r: 255, g: 127, b: 14 },
                  RGB8 { r: 44, g: 160, b: 44 }];
    let funs = [Function::Gaussian, Function::Sinc, Function::Sinf];
    for (f, &color) in funs.iter().zip(&colors) {
        let s = f.sample(Style::Array, -6., 6., 601);
        let mut fh = File::create(dir.join(format!("{}.tex", f)))?;
        s.latex().color(color).write(&mut fh)?;
    }

    let path = dir.join("curves.tex");
    File::create(&path)?.write_all(
        r"\documentclass{article}
\usepackage{tikz}
\begin{document}
\begin{tikzpicture}[x=0.8cm, y=3cm]
  \draw[->] (-6.2, 0) -- (6.2, 0);
  \draw[->] (0, -1.1) -- (0, 1.2);
  \input{gaussian.tex}
  \input{sinc.tex}
  \input{sinf.tex}
\end{tikzpicture}
\end{document}".as_bytes())?;
    println!("Run \"pdflatex {}\" in {}.", path.display(), dir.display());
    Ok(())
}
