// src/io/poscar.rs

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::model::{Atom, Structure};
use crate::utils::linalg::cart_to_frac;

/// Everything that can go wrong while reading a POSCAR file.
///
/// Line numbers are 1-based positions in the input, counting every line
/// including the title.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot read structure file: {0}")]
    Io(#[from] io::Error),
    #[error("unexpected end of file while reading {0}")]
    UnexpectedEof(&'static str),
    #[error("line 2: invalid scaling factor {0:?}")]
    InvalidScale(String),
    #[error("line {0}: lattice vector needs three numeric components")]
    InvalidLatticeVector(usize),
    #[error("line 6: expected species symbols before the atom counts")]
    MissingSpeciesSymbols,
    #[error("line {0}: atom counts must be non-negative integers")]
    InvalidCounts(usize),
    #[error("species line lists {symbols} symbols but the counts line has {counts} entries")]
    CountMismatch { symbols: usize, counts: usize },
    #[error("unknown coordinate mode {0:?}")]
    UnknownCoordinateMode(String),
    #[error("line {0}: invalid coordinate triple")]
    InvalidCoordinate(usize),
    #[error("lattice vectors are linearly dependent; cannot convert Cartesian coordinates")]
    SingularLattice,
}

/// Read a structure from a POSCAR file on disk.
pub fn parse(path: &Path) -> Result<Structure, ParseError> {
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}

/// Read a structure from any buffered reader holding POSCAR text.
///
/// Expected shape, line by line: title, universal scaling factor, three
/// lattice vectors, species symbols, per-species atom counts, an optional
/// `Selective dynamics` line, the coordinate mode (`Direct` or
/// `Cartesian`), then one coordinate triple per atom grouped by species.
/// Direct coordinates are stored exactly as written, without wrapping
/// into [0, 1); Cartesian coordinates are scaled and converted to
/// fractional. The scaling factor multiplies the lattice vectors and
/// Cartesian coordinates alike.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Structure, ParseError> {
    let mut lines = reader.lines().enumerate();

    let (_, comment) = next_line(&mut lines, "the title line")?;

    let (_, scale_line) = next_line(&mut lines, "the scaling factor")?;
    let scale: f64 = scale_line
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidScale(scale_line.trim().to_string()))?;

    let mut lattice = [[0.0; 3]; 3];
    for row in &mut lattice {
        let (no, line) = next_line(&mut lines, "a lattice vector")?;
        let v = parse_vec3(&line).ok_or(ParseError::InvalidLatticeVector(no))?;
        *row = [v[0] * scale, v[1] * scale, v[2] * scale];
    }

    // VASP 4 files put the counts here and carry no symbols at all; those
    // cannot be typed by label and are rejected.
    let (_, species_line) = next_line(&mut lines, "the species symbols")?;
    match species_line.trim().chars().next() {
        Some(c) if c.is_alphabetic() => {}
        _ => return Err(ParseError::MissingSpeciesSymbols),
    }
    let species: Vec<String> = species_line
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let (no, counts_line) = next_line(&mut lines, "the atom counts")?;
    let counts: Vec<usize> = counts_line
        .split_whitespace()
        .map(|tok| tok.parse::<usize>())
        .collect::<Result<_, _>>()
        .map_err(|_| ParseError::InvalidCounts(no))?;
    if counts.len() != species.len() {
        return Err(ParseError::CountMismatch {
            symbols: species.len(),
            counts: counts.len(),
        });
    }

    let (_, mode_line) = next_line(&mut lines, "the coordinate mode")?;
    let mode_line = if mode_line.trim_start().starts_with(['s', 'S']) {
        // "Selective dynamics" marker; the real mode is on the next line
        next_line(&mut lines, "the coordinate mode")?.1
    } else {
        mode_line
    };
    let direct = match mode_line.trim().chars().next() {
        Some('d') | Some('D') => true,
        Some('c') | Some('C') | Some('k') | Some('K') => false,
        _ => {
            return Err(ParseError::UnknownCoordinateMode(
                mode_line.trim().to_string(),
            ))
        }
    };

    // the declared counts are untrusted; never size an allocation from them
    let mut atoms = Vec::new();
    for (label, &count) in species.iter().zip(&counts) {
        for _ in 0..count {
            let (no, line) = next_line(&mut lines, "an atom position")?;
            // extra tokens after the triple (selective-dynamics flags) are
            // dropped by parse_vec3
            let mut pos = parse_vec3(&line).ok_or(ParseError::InvalidCoordinate(no))?;
            if !direct {
                pos = [pos[0] * scale, pos[1] * scale, pos[2] * scale];
                pos = cart_to_frac(pos, lattice).ok_or(ParseError::SingularLattice)?;
            }
            atoms.push(Atom {
                species: label.clone(),
                position: pos,
            });
        }
    }

    Ok(Structure {
        comment,
        lattice,
        atoms,
    })
}

fn next_line<I>(lines: &mut I, what: &'static str) -> Result<(usize, String), ParseError>
where
    I: Iterator<Item = (usize, io::Result<String>)>,
{
    match lines.next() {
        Some((idx, line)) => Ok((idx + 1, line?)),
        None => Err(ParseError::UnexpectedEof(what)),
    }
}

fn parse_vec3(line: &str) -> Option<[f64; 3]> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    let z = parts.next()?.parse().ok()?;
    Some([x, y, z])
}
