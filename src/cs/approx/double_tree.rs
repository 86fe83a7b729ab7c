use log::debug;

use crate::cs::error::{Error, Result};
use crate::cs::graph::complete_graph::Graph;
use crate::cs::graph::kruskal::kruskal;

/// Implements the double-tree heuristic for the metric TSP problem.
///
/// This algorithm provides a 2-approximation for metric TSP. It works by:
/// 1. Computing a minimum spanning tree (MST) with Kruskal's algorithm
/// 2. Walking the tree depth-first from vertex 0, recording first visits
/// 3. Closing the resulting order into a Hamiltonian cycle
///
/// # Arguments
///
/// * `graph` - A complete graph over points in the plane
///
/// # Returns
///
/// * A tuple containing:
///   - Vector of vertex indices representing the tour (first == last)
///   - Total tour length
///
/// # Example
/// ```
/// use tsp_ratio::cs::approx::double_tree_tour;
/// use tsp_ratio::cs::graph::{Graph, Point};
///
/// let graph = Graph::from_points(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]).unwrap();
/// let (tour, length) = double_tree_tour(&graph);
/// assert_eq!(tour, vec![0, 1, 0]);
/// assert!((length - 2.0).abs() < 1e-10);
/// ```
pub fn double_tree_tour(graph: &Graph) -> (Vec<usize>, f64) {
    let mst = kruskal(graph);
    let tour = shortcut(&preorder(&mst, 0));
    let length = tour_weight(&tour, graph);
    debug!("double-tree tour over {} vertices: length {}", graph.len(), length);
    (tour, length)
}

/// Vertices of `tree` in depth-first preorder from `start`.
///
/// Lower-numbered neighbours are explored first. Vertices unreachable from
/// `start` do not appear.
pub fn preorder(tree: &Graph, start: usize) -> Vec<usize> {
    let adj = sorted_adjacency(tree);
    let mut visited = vec![false; tree.len()];
    let mut order = Vec::with_capacity(tree.len());
    let mut stack = vec![start];

    while let Some(v) = stack.pop() {
        if visited[v] {
            continue;
        }
        visited[v] = true;
        order.push(v);
        stack.extend(adj[v].iter().rev().filter(|&&u| !visited[u]));
    }

    order
}

/// The full depth-first walk of `tree` from `start`, every tree edge taken
/// once down and once back up. Revisited vertices are recorded again, so the
/// walk of a spanning tree has `2n - 1` entries.
pub fn tree_walk(tree: &Graph, start: usize) -> Vec<usize> {
    let adj = sorted_adjacency(tree);
    let mut visited = vec![false; tree.len()];
    let mut walk = vec![start];
    // (vertex, index of the next neighbour to try)
    let mut stack = vec![(start, 0usize)];
    visited[start] = true;

    while let Some((v, next)) = stack.last_mut() {
        let v = *v;
        match adj[v][*next..].iter().position(|&u| !visited[u]) {
            Some(offset) => {
                let u = adj[v][*next + offset];
                *next += offset + 1;
                visited[u] = true;
                walk.push(u);
                stack.push((u, 0));
            }
            None => {
                stack.pop();
                if let Some(&(parent, _)) = stack.last() {
                    walk.push(parent);
                }
            }
        }
    }

    walk
}

/// Keeps the first occurrence of each vertex and returns to the start.
pub fn shortcut(walk: &[usize]) -> Vec<usize> {
    let size = walk.iter().max().map_or(0, |&m| m + 1);
    let mut seen = vec![false; size];
    let mut shortened = Vec::with_capacity(size + 1);

    for &v in walk {
        if !seen[v] {
            seen[v] = true;
            shortened.push(v);
        }
    }

    // Add starting vertex to complete the cycle
    if let Some(&first) = shortened.first() {
        shortened.push(first);
    }

    shortened
}

/// Sum of the weights between consecutive entries of `tour`.
pub fn tour_weight(tour: &[usize], graph: &Graph) -> f64 {
    tour.windows(2).map(|w| graph.weight(w[0], w[1])).sum()
}

/// Checks that `tour` is a closed walk visiting each of the `n` vertices
/// exactly once before returning to its first vertex.
pub fn validate_tour(tour: &[usize], n: usize) -> Result<()> {
    if tour.len() != n + 1 {
        return Err(Error::invalid_input(format!(
            "tour over {n} vertices must have {} entries, got {}",
            n + 1,
            tour.len()
        )));
    }
    if tour.first() != tour.last() {
        return Err(Error::invalid_input("tour does not return to its start"));
    }

    let mut seen = vec![false; n];
    for &v in &tour[..n] {
        if v >= n {
            return Err(Error::invalid_input(format!(
                "tour visits vertex {v}, outside 0..{n}"
            )));
        }
        if std::mem::replace(&mut seen[v], true) {
            return Err(Error::invalid_input(format!("tour visits vertex {v} twice")));
        }
    }
    Ok(())
}

fn sorted_adjacency(tree: &Graph) -> Vec<Vec<usize>> {
    let mut adj = tree.adjacency();
    for neighbours in &mut adj {
        neighbours.sort_unstable();
    }
    adj
}
