//! Approximation algorithms.
//!
//! - Double-tree (MST preorder + shortcut) heuristic for metric TSP

pub mod double_tree;

pub use double_tree::{double_tree_tour, preorder, shortcut, tour_weight, tree_walk, validate_tour};
