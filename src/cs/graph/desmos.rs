//! Plain-text export for the Desmos graphing calculator.
//!
//! Each point becomes a `(x,y)` line. Each active edge becomes the line through
//! its endpoints, restricted to the edge's x-range:
//!
//! ```text
//! y-{y0}={m}(x-{x0}) \left\{{xmin}<=x<={xmax}\right\}
//! ```
//!
//! Vertical edges have no slope and are left out, which also drops self-pairs.

use crate::cs::graph::complete_graph::Graph;

pub fn to_desmos(graph: &Graph) -> String {
    let mut out = String::new();
    let points = graph.points();

    for p in points {
        out.push_str(&format!("({},{})\n", p.x, p.y));
    }

    for edge in graph.edges() {
        let (p0, p1) = (points[edge.src], points[edge.dst]);
        if p0.x == p1.x {
            continue;
        }

        let m = (p1.y - p0.y) / (p1.x - p0.x);
        let xmin = p0.x.min(p1.x);
        let xmax = p0.x.max(p1.x);
        out.push_str(&format!(
            "y-{}={}(x-{}) \\left\\{{{}<=x<={}\\right\\}}\n",
            p0.y, m, p0.x, xmin, xmax
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::graph::complete_graph::{Edge, Point};
    use crate::cs::graph::kruskal::kruskal;

    #[test]
    fn test_points_then_edges() {
        let graph = Graph::from_points(vec![Point::new(0.0, 0.0), Point::new(2.0, 1.0)]).unwrap();
        let tree = graph.with_edges(vec![Edge::new(0, 1)]).unwrap();
        assert_eq!(
            to_desmos(&tree),
            "(0,0)\n(2,1)\ny-0=0.5(x-0) \\left\\{0<=x<=2\\right\\}\n"
        );
    }

    #[test]
    fn test_vertical_edges_skipped() {
        let graph = Graph::from_points(vec![Point::new(1.0, 0.0), Point::new(1.0, 5.0)]).unwrap();
        let tree = graph.with_edges(vec![Edge::new(0, 1)]).unwrap();
        assert_eq!(to_desmos(&tree), "(1,0)\n(1,5)\n");
    }

    #[test]
    fn test_complete_graph_drops_self_pairs() {
        let graph = Graph::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(3.0, -1.0),
        ])
        .unwrap();
        let text = to_desmos(&graph);
        // 3 points, 6 non-self ordered pairs.
        assert_eq!(text.lines().count(), 3 + 6);

        let mst_text = to_desmos(&kruskal(&graph));
        assert_eq!(mst_text.lines().count(), 3 + 2);
    }
}
