//! Space-group identification for crystal structure files.
//!
//! The pipeline is a single pass: a POSCAR file is parsed into a
//! [`model::Structure`], the species labels are collapsed into dense
//! 1-based type indices ([`model::assign_types`]), the cell is handed to a
//! [`symmetry::SymmetryEngine`] for the actual space-group search, and the
//! outcome is rendered by [`report::render`]. A structure whose symmetry
//! cannot be determined at the requested tolerance is a valid, silent
//! result, not an error.

pub mod io;
pub mod model;
pub mod report;
pub mod symmetry;
pub mod utils;

use thiserror::Error;

/// Any failure the pipeline can abort with.
///
/// Every stage either produces a well-formed value for the next stage or
/// fails the whole invocation; nothing is retried or recovered locally.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Parse(#[from] io::ParseError),
    #[error("{0}")]
    Config(#[from] symmetry::ConfigError),
    #[error("{0}")]
    Engine(#[from] symmetry::EngineError),
}
