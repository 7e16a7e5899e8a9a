//! Graph listings and search reports.

use std::fmt::Write;

use rapport_relations::{CycleReport, GraphModel, SimplePath};

/// `A <-> B`, one edge per line.
pub fn standard(graph: &GraphModel) -> String {
    let mut out = String::new();
    for (a, b) in graph.edges() {
        let _ = writeln!(out, "{} <-> {}", graph.label(a), graph.label(b));
    }
    out
}

/// `A <grade> B` for weighted graphs; falls back to `<->` when the graph
/// carries no weights.
pub fn with_grades(graph: &GraphModel) -> String {
    let mut out = String::new();
    for (a, b) in graph.edges() {
        match graph.grade(a, b) {
            Some(grade) => {
                let _ = writeln!(out, "{} <{}> {}", graph.label(a), grade, graph.label(b));
            }
            None => {
                let _ = writeln!(out, "{} <-> {}", graph.label(a), graph.label(b));
            }
        }
    }
    out
}

/// `Nodes{A,B,..},` then `Edges{(A,B),..}`.
pub fn as_sets(graph: &GraphModel) -> String {
    let edges: Vec<String> = graph
        .edges()
        .map(|(a, b)| format!("({},{})", graph.label(a), graph.label(b)))
        .collect();
    format!(
        "Nodes{{{}}},\nEdges{{{}}}\n",
        graph.labels().join(","),
        edges.join(",")
    )
}

pub fn cycles(graph: &GraphModel, report: &CycleReport) -> String {
    let mut out = format!(
        "The number of cycles: {}\nThe list of cycles:\n",
        report.count()
    );
    for cycle in &report.cycles {
        let labels: Vec<&str> = cycle.nodes.iter().map(|&v| graph.label(v)).collect();
        let _ = writeln!(out, "({})", labels.join("<>"));
    }
    out
}

pub fn longest_path(graph: &GraphModel, path: &SimplePath) -> String {
    let labels: Vec<&str> = path.nodes.iter().map(|&v| graph.label(v)).collect();
    format!("Longest path (in connectivity order):\n{}\n", labels.join(" "))
}
