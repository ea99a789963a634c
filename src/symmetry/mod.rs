//! The space-group search boundary.
//!
//! [`SymmetryEngine`] is the fixed call contract every backend has to
//! satisfy; [`MoyoEngine`] is the production implementation. [`analyze`]
//! is the only entry point the pipeline uses: it validates the inputs,
//! then delegates and hands the engine's verdict back uninterpreted.

pub mod moyo;

use crate::model::TypeMap;
use crate::utils::linalg::cell_volume;
use crate::Error;

pub use self::moyo::MoyoEngine;

// Below this cell volume the lattice vectors are treated as linearly
// dependent.
const MIN_CELL_VOLUME: f64 = 1e-8;

/// What a symmetry engine reports for one cell.
///
/// `number <= 0` is the not-found sentinel: the engine ran fine but could
/// not determine a group at the given tolerance. `symbol` and
/// `std_lattice` carry no meaning in that case.
#[derive(Clone, Debug, PartialEq)]
pub struct SymmetryResult {
    /// Short Hermann-Mauguin symbol, e.g. `Pm-3m`.
    pub symbol: String,
    /// Space-group number in 1..=230 when found.
    pub number: i32,
    /// Standardized lattice vectors as rows.
    pub std_lattice: [[f64; 3]; 3],
}

impl SymmetryResult {
    pub fn found(&self) -> bool {
        self.number > 0
    }

    /// The sentinel for "no space group determined at this tolerance".
    pub fn not_found() -> Self {
        SymmetryResult {
            symbol: String::new(),
            number: 0,
            std_lattice: [[0.0; 3]; 3],
        }
    }
}

/// Rejected before the engine is ever invoked.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("symmetry tolerance must be positive, got {0}")]
    NonPositiveTolerance(f64),
    #[error("structure contains no atoms")]
    EmptyStructure,
    #[error("positions and types disagree in length ({positions} vs {types})")]
    CardinalityMismatch { positions: usize, types: usize },
    #[error("lattice vectors are linearly dependent")]
    SingularLattice,
}

/// The engine itself misbehaved. Distinct from the not-found outcome,
/// which is a valid [`SymmetryResult`].
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("symmetry engine reported space-group number {0}, expected 1..=230")]
    GroupNumberOutOfRange(i32),
    #[error("symmetry engine failed: {0}")]
    Failed(String),
}

/// The call contract for a space-group search backend.
///
/// `positions` are fractional coordinates relative to the rows of
/// `lattice`, `types` are the aligned 1-based species indices, and
/// `symprec` is the distance tolerance for treating two sites as
/// symmetry-equivalent. Implementations must be stateless: the result is
/// a pure function of the arguments, with nothing surviving between
/// calls.
pub trait SymmetryEngine {
    fn find_symmetry(
        &self,
        lattice: [[f64; 3]; 3],
        positions: &[[f64; 3]],
        types: &[i32],
        symprec: f64,
    ) -> Result<SymmetryResult, EngineError>;
}

/// Validate the inputs and run the engine on one cell.
///
/// All rejections happen here, before the engine sees anything: a
/// non-positive (or NaN) tolerance, an empty atom list, a positions/types
/// length mismatch, and a degenerate lattice. The engine's verdict is
/// passed through untouched, found or not.
pub fn analyze<E: SymmetryEngine + ?Sized>(
    engine: &E,
    lattice: [[f64; 3]; 3],
    map: &TypeMap,
    symprec: f64,
) -> Result<SymmetryResult, Error> {
    if !(symprec > 0.0) {
        return Err(ConfigError::NonPositiveTolerance(symprec).into());
    }
    if map.positions.is_empty() {
        return Err(ConfigError::EmptyStructure.into());
    }
    if map.positions.len() != map.types.len() {
        return Err(ConfigError::CardinalityMismatch {
            positions: map.positions.len(),
            types: map.types.len(),
        }
        .into());
    }
    if cell_volume(lattice).abs() < MIN_CELL_VOLUME {
        return Err(ConfigError::SingularLattice.into());
    }

    Ok(engine.find_symmetry(lattice, &map.positions, &map.types, symprec)?)
}
