//! Population listing: each node's statements under a header.

use std::fmt::Write;

use rapport_core::Population;
use rapport_relations::graph::node_label;

pub fn render_population(population: &Population, prefix: &str) -> String {
    let mut out = String::new();
    for node in population {
        let _ = writeln!(out, "{} statements:", node_label(prefix, node.id()));
        for statement in node.statements() {
            let _ = writeln!(out, "{statement}");
        }
        out.push('\n');
    }
    out
}
