//! Property tests for the relation engine: matrix, ranking, graph, searches.

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;

use rapport_core::Population;
use rapport_relations::search::{find_cycles, find_longest_path};
use rapport_relations::{GraphModel, OverlapMatrix, Relations};

// Statements drawn from a small alphabet so overlaps are common.
fn population_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::vec((0_u8..6).prop_map(|k| format!("s{k}")), 0..5),
        0..8,
    )
}

fn graph_strategy() -> impl Strategy<Value = GraphModel> {
    (1_usize..9).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..n * 2).prop_map(move |edges| {
            GraphModel::new((1..=n).map(|k| format!("Node {k}")).collect(), edges)
        })
    })
}

fn distinct(set: &[String]) -> BTreeSet<&str> {
    set.iter().map(String::as_str).collect()
}

/// Length of the longest simple path, by bitmask DP.
fn brute_force_longest(graph: &GraphModel) -> usize {
    let n = graph.node_count();
    if n == 0 {
        return 0;
    }
    let mut reachable = vec![vec![false; n]; 1 << n];
    let mut best = 1;
    for v in 0..n {
        reachable[1 << v][v] = true;
    }
    for mask in 1_usize..(1 << n) {
        for v in 0..n {
            if !reachable[mask][v] {
                continue;
            }
            best = best.max(mask.count_ones() as usize);
            for &w in graph.neighbors(v) {
                if mask & (1 << w) == 0 {
                    reachable[mask | (1 << w)][w] = true;
                }
            }
        }
    }
    best
}

proptest! {
    #[test]
    fn matrix_is_symmetric_distinct_overlap(sets in population_strategy()) {
        let population = Population::new(sets.clone());
        let matrix = OverlapMatrix::build(population.nodes());
        for i in 0..sets.len() {
            prop_assert_eq!(matrix.get(i, i), 0);
            for j in 0..sets.len() {
                prop_assert_eq!(matrix.get(i, j), matrix.get(j, i));
                if i != j {
                    let expected = distinct(&sets[i]).intersection(&distinct(&sets[j])).count();
                    prop_assert_eq!(matrix.get(i, j), expected);
                }
            }
        }
    }

    #[test]
    fn friendships_consistent_and_ordered(sets in population_strategy()) {
        let relations = Relations::new(Population::new(sets.clone()));
        let matrix = relations.matrix();
        let friendships = relations.friendships();

        let positive = matrix.positive_pairs().count();
        prop_assert_eq!(friendships.len(), positive);

        for f in friendships {
            prop_assert!(f.node_a < f.node_b);
            prop_assert!(f.grade > 0);
            prop_assert_eq!(f.grade, matrix.get(f.node_a, f.node_b));

            let shared: BTreeSet<&str> = f.shared_statements.iter().map(String::as_str).collect();
            prop_assert_eq!(shared.len(), f.shared_statements.len(), "duplicate shared statement");
            let expected: BTreeSet<&str> = distinct(&sets[f.node_a])
                .intersection(&distinct(&sets[f.node_b]))
                .copied()
                .collect();
            prop_assert_eq!(shared, expected);
        }

        for pair in friendships.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.grade > b.grade || (a.grade == b.grade && (a.node_a, a.node_b) < (b.node_a, b.node_b))
            );
        }
    }

    #[test]
    fn edges_match_positive_cells(sets in population_strategy()) {
        let relations = Relations::new(Population::new(sets.clone()));
        let graph = relations.graph("Node");
        for i in 0..sets.len() {
            for j in 0..sets.len() {
                if i != j {
                    prop_assert_eq!(graph.has_edge(i, j), relations.matrix().get(i, j) > 0);
                }
            }
        }
    }

    #[test]
    fn cycles_are_valid_and_capped(graph in graph_strategy()) {
        let report = find_cycles(&graph);
        let components = graph.components();

        let mut seen_components = BTreeSet::new();
        for cycle in &report.cycles {
            prop_assert!(cycle.distinct_len() >= 3);
            prop_assert_eq!(cycle.nodes.first(), cycle.nodes.last());

            let body = &cycle.nodes[..cycle.nodes.len() - 1];
            let unique: BTreeSet<_> = body.iter().collect();
            prop_assert_eq!(unique.len(), body.len());

            for (a, b) in cycle.pairs() {
                prop_assert!(graph.has_edge(a, b), "({}, {}) is not an edge", a, b);
            }
            prop_assert!(seen_components.insert(components[cycle.nodes[0]]), "component reported twice");
        }

        // A component holds a cycle iff it has at least as many edges as nodes.
        let mut sizes: HashMap<usize, (usize, usize)> = HashMap::new();
        for node in 0..graph.node_count() {
            sizes.entry(components[node]).or_default().0 += 1;
        }
        for (a, _) in graph.edges() {
            sizes.entry(components[a]).or_default().1 += 1;
        }
        let cyclic = sizes.values().filter(|(nodes, edges)| edges >= nodes).count();
        prop_assert_eq!(report.count(), cyclic);
    }

    #[test]
    fn longest_path_is_simple_and_maximal(graph in graph_strategy()) {
        let path = find_longest_path(&graph);

        let unique: BTreeSet<_> = path.nodes.iter().collect();
        prop_assert_eq!(unique.len(), path.len());
        for pair in path.nodes.windows(2) {
            prop_assert!(graph.has_edge(pair[0], pair[1]));
        }
        prop_assert_eq!(path.len(), brute_force_longest(&graph));
    }
}
