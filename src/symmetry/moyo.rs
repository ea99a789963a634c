use log::debug;
use moyo::base::{AngleTolerance, Cell, Lattice};
use moyo::data::Setting;
use moyo::MoyoDataset;
use nalgebra::{Matrix3, Vector3};

use super::{EngineError, SymmetryEngine, SymmetryResult};

/// Space-group search backed by the moyo crate.
///
/// Stateless: every call builds a fresh cell and dataset, so the result
/// is a pure function of the arguments. The `Spglib` setting keeps the
/// standardized cell on the conventions the rest of the ecosystem
/// expects.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoyoEngine;

impl SymmetryEngine for MoyoEngine {
    fn find_symmetry(
        &self,
        lattice: [[f64; 3]; 3],
        positions: &[[f64; 3]],
        types: &[i32],
        symprec: f64,
    ) -> Result<SymmetryResult, EngineError> {
        let lattice_mat = Matrix3::new(
            lattice[0][0], lattice[0][1], lattice[0][2],
            lattice[1][0], lattice[1][1], lattice[1][2],
            lattice[2][0], lattice[2][1], lattice[2][2],
        );
        let frac: Vec<Vector3<f64>> = positions
            .iter()
            .map(|p| Vector3::new(p[0], p[1], p[2]))
            .collect();
        let cell = Cell::new(Lattice::new(lattice_mat), frac, types.to_vec());

        let dataset = match MoyoDataset::new(
            &cell,
            symprec,
            AngleTolerance::Default,
            Setting::Spglib,
            true,
        ) {
            Ok(d) => d,
            Err(e) => {
                // moyo signals "no group at this tolerance" through its
                // error type; that is the not-found outcome, not a fault
                debug!("moyo found no space group at symprec {symprec}: {e:?}");
                return Ok(SymmetryResult::not_found());
            }
        };

        if !(1..=230).contains(&dataset.number) {
            return Err(EngineError::GroupNumberOutOfRange(dataset.number));
        }

        let m = dataset.std_cell.lattice.basis;
        let std_lattice = [
            [m.m11, m.m12, m.m13],
            [m.m21, m.m22, m.m23],
            [m.m31, m.m32, m.m33],
        ];

        Ok(SymmetryResult {
            symbol: SG_SYMBOLS[dataset.number as usize].to_string(),
            number: dataset.number,
            std_lattice,
        })
    }
}

// =========================================================================
// DATA: Space Group Symbols
// =========================================================================
/// Short Hermann-Mauguin symbol per space-group number; index 0 is unused.
const SG_SYMBOLS: [&str; 231] = ["", "P1", "P-1", "P121", "P12_11", "C121", "P1m1", "P1c1", "C1m1", "C1c1",
    "P12/m1", "P12_1/m1", "C12/m1", "P12/c1", "P12_1/c1", "C12/c1", "P222",
    "P222_1", "P2_12_12", "P2_12_12_1", "C222_1", "C222", "F222", "I222",
    "I2_12_12_1", "Pmm2", "Pmc2_1", "Pcc2", "Pma2", "Pca2_1", "Pnc2", "Pmn2_1",
    "Pba2", "Pna2_1", "Pnn2", "Cmm2", "Cmc2_1", "Ccc2", "Amm2", "Aem2", "Ama2",
    "Aea2", "Fmm2", "Fdd2", "Imm2", "Iba2", "Ima2", "Pmmm", "Pnnn", "Pccm",
    "Pban", "Pmma", "Pnna", "Pmna", "Pcca", "Pbam", "Pccn", "Pbcm", "Pnnm",
    "Pmmn", "Pbcn", "Pbca", "Pnma", "Cmcm", "Cmce", "Cmmm", "Cccm", "Cmme",
    "Ccce", "Fmmm", "Fddd", "Immm", "Ibam", "Ibca", "Imma", "P4", "P4_1",
    "P4_2", "P4_3", "I4", "I4_1", "P-4", "I-4", "P4/m", "P4_2/m", "P4/n",
    "P4_2/n", "I4/m", "I4_1/a", "P422", "P42_12", "P4_122", "P4_12_12",
    "P4_222", "P4_22_12", "P4_322", "P4_32_12", "I422", "I4_122", "P4mm",
    "P4bm", "P4_2cm", "P4_2nm", "P4cc", "P4nc", "P4_2mc", "P4_2bc", "I4mm",
    "I4cm", "I4_1md", "I4_1cd", "P-42m", "P-42c", "P-42_1m", "P-42_1c", "P-4m2",
    "P-4c2", "P-4b2", "P-4n2", "I-4m2", "I-4c2", "I-42m", "I-42d", "P4/mmm",
    "P4/mcc", "P4/nbm", "P4/nnc", "P4/mbm", "P4/mnc", "P4/nmm", "P4/ncc",
    "P4_2/mmc", "P4_2/mcm", "P4_2/nbc", "P4_2/nnm", "P4_2/mbc", "P4_2/mnm",
    "P4_2/nmc", "P4_2/ncm", "I4/mmm", "I4/mcm", "I4_1/amd", "I4_1/acd", "P3",
    "P3_1", "P3_2", "R3", "P-3", "R-3", "P312", "P321", "P3_112", "P3_121",
    "P3_212", "P3_221", "R32", "P3m1", "P31m", "P3c1", "P31c", "R3m", "R3c",
    "P-31m", "P-31c", "P-3m1", "P-3c1", "R-3m", "R-3c", "P6", "P6_1", "P6_5",
    "P6_2", "P6_4", "P6_3", "P-6", "P6/m", "P6_3/m", "P622", "P6_122", "P6_522",
    "P6_222", "P6_422", "P6_322", "P6mm", "P6cc", "P6_3cm", "P6_3mc", "P-6m2",
    "P-6c2", "P-62m", "P-62c", "P6/mmm", "P6/mcc", "P6_3/mcm", "P6_3/mmc",
    "P23", "F23", "I23", "P2_13", "I2_13", "Pm-3", "Pn-3", "Fm-3", "Fd-3",
    "Im-3", "Pa-3", "Ia-3", "P432", "P4_232", "F432", "F4_132", "I432",
    "P4_332", "P4_132", "I4_132", "P-43m", "F-43m", "I-43m", "P-43n", "F-43c",
    "I-43d", "Pm-3m", "Pn-3n", "Pm-3n", "Pn-3m", "Fm-3m", "Fm-3c", "Fd-3m",
    "Fd-3c", "Im-3m", "Ia-3d"];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbol_table_covers_exactly_230_groups() {
        assert_eq!(SG_SYMBOLS.len(), 231);
        assert!(SG_SYMBOLS[0].is_empty());
        assert!(SG_SYMBOLS[1..].iter().all(|s| !s.is_empty()));

        let unique: HashSet<&str> = SG_SYMBOLS[1..].iter().copied().collect();
        assert_eq!(unique.len(), 230);
    }

    #[test]
    fn test_symbol_table_spot_checks() {
        assert_eq!(SG_SYMBOLS[1], "P1");
        assert_eq!(SG_SYMBOLS[136], "P4_2/mnm");
        assert_eq!(SG_SYMBOLS[221], "Pm-3m");
        assert_eq!(SG_SYMBOLS[230], "Ia-3d");
    }

    #[test]
    fn test_cubic_hydrogen_is_pm3m() {
        let lattice = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let result = MoyoEngine
            .find_symmetry(lattice, &[[0.0, 0.0, 0.0]], &[1], 1e-5)
            .unwrap();

        assert_eq!(result.number, 221);
        assert_eq!(result.symbol, "Pm-3m");
        assert!(result.found());
        for i in 0..3 {
            for j in 0..3 {
                let want = if i == j { 1.0 } else { 0.0 };
                assert!((result.std_lattice[i][j] - want).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_rutile_is_p42mnm() {
        let lattice = [[4.603, 0.0, 0.0], [0.0, 4.603, 0.0], [0.0, 0.0, 2.969]];
        let x = 0.3046;
        let positions = [
            [0.0, 0.0, 0.0],
            [0.5, 0.5, 0.5],
            [x, x, 0.0],
            [-x, -x, 0.0],
            [-x + 0.5, x + 0.5, 0.5],
            [x + 0.5, -x + 0.5, 0.5],
        ];
        let types = [1, 1, 2, 2, 2, 2];

        let result = MoyoEngine
            .find_symmetry(lattice, &positions, &types, 1e-4)
            .unwrap();

        assert_eq!(result.number, 136);
        assert_eq!(result.symbol, "P4_2/mnm");
    }
}
