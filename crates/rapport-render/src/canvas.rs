//! Pseudo-graphical connection chart.
//!
//! Each node owns a 4-column slot. Every edge, in ascending pair order,
//! prints one line joining its two slots with `+---+`; slots touched by
//! earlier edges stay marked with `|` on later lines. A footer lists node
//! numbers under their slots.

use rapport_relations::OverlapMatrix;

const SLOT: usize = 4;

pub fn render_canvas(matrix: &OverlapMatrix) -> String {
    let n = matrix.size();
    let mut canvas = vec![' '; n * SLOT];
    let mut out = String::new();

    for (i, j, _) in matrix.positive_pairs() {
        let (x, y) = (i * SLOT, j * SLOT);
        canvas[x] = '+';
        canvas[y] = '+';
        canvas[x + 1..y].fill('-');

        out.push_str(canvas.iter().collect::<String>().trim_end());
        out.push('\n');

        canvas[x + 1..y].fill(' ');
        for cell in canvas.iter_mut().filter(|c| **c == '+') {
            *cell = '|';
        }
    }

    let footer: String = (1..=n).map(|k| format!("{k:<width$}", width = SLOT)).collect();
    out.push_str(footer.trim_end());
    out.push('\n');
    out
}
