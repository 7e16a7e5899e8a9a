//! Overlap matrix as a fixed-width table with 1-based headers.

use std::fmt::Write;

use rapport_relations::OverlapMatrix;

/// One header row, then one row per node. Cells are 3 wide; zero cells are
/// blank unless `show_zero`.
pub fn render_matrix(matrix: &OverlapMatrix, show_zero: bool) -> String {
    let n = matrix.size();
    let mut out = String::from("   ");
    for j in 0..n {
        let _ = write!(out, "{:>3}", j + 1);
    }
    out.push('\n');

    for i in 0..n {
        let _ = write!(out, "{:>2}:", i + 1);
        for &cell in matrix.row(i) {
            if cell != 0 || show_zero {
                let _ = write!(out, "{cell:>3}");
            } else {
                out.push_str("   ");
            }
        }
        out.push('\n');
    }
    out
}
