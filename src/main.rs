use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use spgid::model::assign_types;
use spgid::symmetry::{self, MoyoEngine};
use spgid::{io, report, Error};

/// Identify the space group of a crystal structure.
#[derive(Parser, Debug)]
#[command(name = "spgid", version, about)]
struct Args {
    /// Path to a POSCAR-format structure file.
    file: PathBuf,

    /// Symmetry detection tolerance.
    #[arg(short, long, default_value_t = 1e-5)]
    symprec: f64,

    /// Print only "<symbol> (<number>)" without a trailing newline.
    #[arg(short, long)]
    nonewline: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let rendered = match run(&args) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("spgid: {e}");
            return ExitCode::FAILURE;
        }
    };

    // empty means "no space group found at this tolerance", which is a
    // normal run with nothing to report
    if !rendered.is_empty() {
        // the compact form carries no newline, so flush explicitly; a
        // failed write is a failed run
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout
            .write_all(rendered.as_bytes())
            .and_then(|_| stdout.flush())
        {
            eprintln!("spgid: cannot write report: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<String, Error> {
    let structure = io::poscar::parse(&args.file)?;
    debug!(
        "parsed {} atoms from {} ({})",
        structure.atoms.len(),
        args.file.display(),
        structure.comment.trim()
    );

    let map = assign_types(&structure.atoms);
    let result = symmetry::analyze(&MoyoEngine, structure.lattice, &map, args.symprec)?;
    debug!(
        "engine verdict: number {} at symprec {}",
        result.number, args.symprec
    );

    Ok(report::render(&result, &structure.lattice, args.nonewline))
}
