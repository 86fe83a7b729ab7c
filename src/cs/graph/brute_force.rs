//! Exhaustive TSP solver.
//!
//! Vertex 0 is fixed as the start, and every ordering of the remaining
//! `n - 1` vertices is examined. This is `Θ((n-1)!)` on purpose: the result is
//! ground truth for judging heuristics, so nothing is pruned.

use crate::cs::combinatorial::JohnsonTrotter;
use crate::cs::graph::complete_graph::Graph;

/// Brute-force TSP solver.
/// Returns (minimum_cycle_weight, cycle_including_start_end).
///
/// A single vertex yields `(0.0, [0, 0])`; two vertices yield the round trip.
///
/// # Example
/// ```
/// use tsp_ratio::cs::graph::{brute_force_tsp, Graph, Point};
///
/// let square = Graph::from_points(vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ])
/// .unwrap();
/// let (weight, cycle) = brute_force_tsp(&square);
/// assert!((weight - 4.0).abs() < 1e-12);
/// assert_eq!(cycle.len(), 5);
/// ```
pub fn brute_force_tsp(graph: &Graph) -> (f64, Vec<usize>) {
    let n = graph.len();
    if n == 0 {
        return (0.0, vec![]);
    }

    let rest: Vec<usize> = (1..n).collect();
    let mut best_weight = f64::INFINITY;
    let mut best_order = rest.clone();

    for perm in JohnsonTrotter::new(&rest) {
        let weight = closed_walk_weight(graph, &perm);
        if weight < best_weight {
            best_weight = weight;
            best_order = perm;
        }
    }

    let mut cycle = Vec::with_capacity(n + 1);
    cycle.push(0);
    cycle.extend(best_order);
    cycle.push(0);
    (best_weight, cycle)
}

/// Weight of the closed walk `0 -> order... -> 0`.
fn closed_walk_weight(graph: &Graph, order: &[usize]) -> f64 {
    let mut weight = 0.0;
    let mut prev = 0;
    for &v in order {
        weight += graph.weight(prev, v);
        prev = v;
    }
    weight + graph.weight(prev, 0)
}
