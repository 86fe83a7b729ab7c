use log::{debug, trace};

use crate::cs::graph::complete_graph::{Edge, Graph};
use crate::cs::graph::union_find::UnionFind;

/// Kruskal's algorithm over the active edges of `graph`.
///
/// Returns a view of the same points whose edges form a minimum spanning tree
/// (`n - 1` edges for a connected input). Self-pairs are never tree edges and
/// are skipped before they reach the union-find. Among equal-weight edges the
/// choice follows the sort, so only the total weight is guaranteed.
///
/// # Example
/// ```
/// use tsp_ratio::cs::graph::{kruskal, Graph, Point};
///
/// let graph = Graph::from_points(vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(3.0, 4.0),
/// ])
/// .unwrap();
/// let mst = kruskal(&graph);
/// assert_eq!(mst.edges().len(), 2);
/// assert!((mst.total_weight() - 7.0).abs() < 1e-12);
/// ```
pub fn kruskal(graph: &Graph) -> Graph {
    let n = graph.len();
    let target = n.saturating_sub(1);

    let mut candidates = graph.weighted_edges();
    candidates.retain(|e| e.src != e.dst);
    candidates.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut uf = UnionFind::new(n);
    let mut tree = Vec::with_capacity(target);

    for edge in &candidates {
        if tree.len() == target {
            break;
        }
        if uf.union(edge.src, edge.dst) {
            trace!("mst: take ({}, {}) = {}", edge.src, edge.dst, edge.weight);
            tree.push(Edge::new(edge.src, edge.dst));
        } else {
            trace!("mst: skip ({}, {}) = {}", edge.src, edge.dst, edge.weight);
        }
    }

    let mst = graph.view(tree);
    debug!(
        "mst over {} vertices: {} edges, weight {}",
        n,
        mst.edges().len(),
        mst.total_weight()
    );
    mst
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::graph::complete_graph::Point;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn is_spanning_tree(n: usize, edges: &[Edge]) -> bool {
        if edges.len() != n.saturating_sub(1) {
            return false;
        }
        let mut uf = UnionFind::new(n);
        edges.iter().all(|e| uf.union(e.src, e.dst)) && uf.set_count() == 1
    }

    fn subsets_of_size(
        items: &[Edge],
        k: usize,
        start: usize,
        current: &mut Vec<Edge>,
        out: &mut Vec<Vec<Edge>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..items.len() {
            current.push(items[i]);
            subsets_of_size(items, k, i + 1, current, out);
            current.pop();
        }
    }

    /// Minimum spanning tree weight by trying every (n-1)-subset of the
    /// undirected edges.
    fn brute_force_mst_weight(graph: &Graph) -> f64 {
        let n = graph.len();
        let undirected: Vec<Edge> = (0..n)
            .flat_map(|u| (u + 1..n).map(move |v| Edge::new(u, v)))
            .collect();
        let mut subsets = Vec::new();
        subsets_of_size(&undirected, n - 1, 0, &mut Vec::new(), &mut subsets);
        subsets
            .into_iter()
            .filter(|subset| is_spanning_tree(n, subset))
            .map(|subset| {
                subset
                    .iter()
                    .map(|e| graph.weight(e.src, e.dst))
                    .sum::<f64>()
            })
            .fold(f64::INFINITY, f64::min)
    }

    #[test]
    fn test_single_vertex() {
        let graph = Graph::from_points(vec![Point::new(1.0, 1.0)]).unwrap();
        let mst = kruskal(&graph);
        assert!(mst.edges().is_empty());
        assert_eq!(mst.total_weight(), 0.0);
    }

    #[test]
    fn test_two_vertices() {
        let graph =
            Graph::from_points(vec![Point::new(0.0, 0.0), Point::new(0.0, 2.0)]).unwrap();
        let mst = kruskal(&graph);
        assert_eq!(mst.edges().len(), 1);
        assert!(!mst.edges()[0].is_self_pair());
        assert_relative_eq!(mst.total_weight(), 2.0);
    }

    #[test]
    fn test_unit_square() {
        let graph = Graph::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap();
        let mst = kruskal(&graph);
        assert!(is_spanning_tree(4, mst.edges()));
        assert_relative_eq!(mst.total_weight(), 3.0);
    }

    #[test]
    fn test_coincident_points_stay_connected() {
        let graph = Graph::from_points(vec![
            Point::new(5.0, 5.0),
            Point::new(5.0, 5.0),
            Point::new(-5.0, 5.0),
        ])
        .unwrap();
        let mst = kruskal(&graph);
        assert!(is_spanning_tree(3, mst.edges()));
        assert_relative_eq!(mst.total_weight(), 10.0);
    }

    #[test]
    fn test_never_selects_self_pairs() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        for n in 1..=20 {
            let graph = Graph::random_complete(n, 100.0, &mut rng).unwrap();
            let mst = kruskal(&graph);
            assert!(mst.edges().iter().all(|e| !e.is_self_pair()));
            assert!(is_spanning_tree(n, mst.edges()));
        }
    }

    #[test]
    fn test_weight_matches_brute_force() {
        let mut rng = ChaCha20Rng::seed_from_u64(2024);
        for n in 2..=6 {
            for _ in 0..5 {
                let graph = Graph::random_complete(n, 100.0, &mut rng).unwrap();
                let mst = kruskal(&graph);
                assert!(is_spanning_tree(n, mst.edges()));
                assert_relative_eq!(
                    mst.total_weight(),
                    brute_force_mst_weight(&graph),
                    max_relative = 1e-12
                );
            }
        }
    }
}
