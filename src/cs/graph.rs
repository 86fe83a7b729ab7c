pub mod brute_force;
pub mod complete_graph;
pub mod desmos;
pub mod kruskal;
pub mod union_find;

pub use brute_force::brute_force_tsp;
pub use complete_graph::{check_coordinate_bound, Edge, Graph, Point, WeightedEdge};
pub use desmos::to_desmos;
pub use kruskal::kruskal;
pub use union_find::UnionFind;
