//! Renders a symmetry determination as text.

use crate::symmetry::SymmetryResult;

/// Render the report for one determination.
///
/// A not-found result renders as the empty string; the tool only ever
/// reports positive findings. With `compact` set the output is exactly
/// `<symbol> (<number>)` with no trailing newline. Otherwise the symbol
/// line is followed by the original lattice, a separator, and the
/// standardized lattice, each component printed as a fixed-point field of
/// width 10 with 5 decimals. Rendering is a pure function of its inputs.
pub fn render(result: &SymmetryResult, lattice: &[[f64; 3]; 3], compact: bool) -> String {
    if !result.found() {
        return String::new();
    }

    if compact {
        return format!("{} ({})", result.symbol, result.number);
    }

    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", result.symbol, result.number));
    out.push_str("----------- original -----------\n");
    for vec in lattice {
        out.push_str(&format_row(vec));
    }
    out.push_str("------------ final -------------\n");
    for vec in &result.std_lattice {
        out.push_str(&format_row(vec));
    }
    out
}

fn format_row(v: &[f64; 3]) -> String {
    format!("{:10.5} {:10.5} {:10.5}\n", v[0], v[1], v[2])
}
