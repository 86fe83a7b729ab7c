//! Weighted complete graphs over points in the plane.
//!
//! A [`Graph`] pairs a point set and its Euclidean weight matrix with an
//! "active" edge list. The random complete graph activates every ordered pair
//! `(i, j)`, self-pairs included; the MST view of the same points activates
//! only the `n - 1` tree edges. Points and weights are shared between views,
//! so deriving a tree from a complete graph never copies the matrix.

use std::sync::Arc;

use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::cs::error::{Error, Result};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }
}

/// An active edge of a graph view, given by its endpoint indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub src: usize,
    pub dst: usize,
}

impl Edge {
    pub fn new(src: usize, dst: usize) -> Self {
        Self { src, dst }
    }

    pub fn is_self_pair(&self) -> bool {
        self.src == self.dst
    }
}

/// An edge together with its weight, as sorted by Kruskal's algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge {
    pub src: usize,
    pub dst: usize,
    pub weight: f64,
}

#[derive(Debug, Clone)]
pub struct Graph {
    points: Arc<[Point]>,
    weights: Arc<Array2<f64>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Generates `n` points uniformly in `[-max_from_origin, max_from_origin]²`
    /// and returns the complete graph over them.
    ///
    /// # Example
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha20Rng;
    /// use tsp_ratio::cs::graph::Graph;
    ///
    /// let mut rng = ChaCha20Rng::seed_from_u64(7);
    /// let graph = Graph::random_complete(5, 100.0, &mut rng).unwrap();
    /// assert_eq!(graph.len(), 5);
    /// assert_eq!(graph.edges().len(), 25);
    /// ```
    pub fn random_complete<R: Rng + ?Sized>(
        n: usize,
        max_from_origin: f64,
        rng: &mut R,
    ) -> Result<Self> {
        if n == 0 {
            return Err(Error::invalid_input("vertex count must be at least 1"));
        }
        check_coordinate_bound(max_from_origin, n)?;

        let coord = Uniform::new_inclusive(-max_from_origin, max_from_origin);
        let mut points = Vec::with_capacity(n);
        for _ in 0..n {
            let x = coord.sample(rng);
            let y = coord.sample(rng);
            points.push(Point::new(x, y));
        }

        Ok(Self::complete(points))
    }

    /// Builds the complete graph over explicit coordinates.
    pub fn from_points(points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::invalid_input("vertex count must be at least 1"));
        }
        if let Some(p) = points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(Error::invalid_input(format!(
                "point ({}, {}) has a non-finite coordinate",
                p.x, p.y
            )));
        }
        let extent = points
            .iter()
            .map(|p| p.x.abs().max(p.y.abs()))
            .fold(0.0, f64::max);
        check_tour_weights_finite(extent, points.len())?;
        Ok(Self::complete(points))
    }

    fn complete(points: Vec<Point>) -> Self {
        let n = points.len();
        let weights = Array2::from_shape_fn((n, n), |(i, j)| {
            if i == j {
                0.0
            } else {
                points[i].distance(&points[j])
            }
        });
        let edges = (0..n)
            .flat_map(|src| (0..n).map(move |dst| Edge::new(src, dst)))
            .collect();

        Self {
            points: points.into(),
            weights: Arc::new(weights),
            edges,
        }
    }

    /// A view over the same points and weights with a different active edge set.
    pub fn with_edges(&self, edges: Vec<Edge>) -> Result<Self> {
        let n = self.len();
        if let Some(e) = edges.iter().find(|e| e.src >= n || e.dst >= n) {
            return Err(Error::invalid_input(format!(
                "edge ({}, {}) has an endpoint outside 0..{n}",
                e.src, e.dst
            )));
        }
        Ok(self.view(edges))
    }

    /// Like [`Graph::with_edges`] for edges already known to be in range.
    pub(crate) fn view(&self, edges: Vec<Edge>) -> Self {
        debug_assert!(edges.iter().all(|e| e.src < self.len() && e.dst < self.len()));
        Self {
            points: Arc::clone(&self.points),
            weights: Arc::clone(&self.weights),
            edges,
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    pub fn weight(&self, u: usize, v: usize) -> f64 {
        self.weights[[u, v]]
    }

    /// The active edges paired with their weights.
    pub fn weighted_edges(&self) -> Vec<WeightedEdge> {
        self.edges
            .iter()
            .map(|e| WeightedEdge {
                src: e.src,
                dst: e.dst,
                weight: self.weight(e.src, e.dst),
            })
            .collect()
    }

    /// Sum of the weights of the active edges.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| self.weight(e.src, e.dst)).sum()
    }

    /// Adjacency lists of the active edges, treated as undirected.
    /// Self-pairs are left out.
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.len()];
        for e in self.edges.iter().filter(|e| !e.is_self_pair()) {
            adj[e.src].push(e.dst);
            adj[e.dst].push(e.src);
        }
        adj
    }
}

/// Checks a coordinate bound `M` for `n` random points in `[-M, M]²`.
///
/// Besides being positive and finite, `M` must leave room for the sampling
/// range `2M` and for a tour of `n` edges each as long as the square's diagonal.
pub fn check_coordinate_bound(max_from_origin: f64, n: usize) -> Result<()> {
    if !max_from_origin.is_finite() || max_from_origin <= 0.0 {
        return Err(Error::invalid_input(format!(
            "max distance from origin must be positive and finite, got {max_from_origin}"
        )));
    }
    if !(2.0 * max_from_origin).is_finite() {
        return Err(Error::invalid_input(format!(
            "max distance from origin {max_from_origin} overflows the sampling range"
        )));
    }
    check_tour_weights_finite(max_from_origin, n)
}

fn check_tour_weights_finite(extent: f64, n: usize) -> Result<()> {
    let diagonal = (2.0 * extent).hypot(2.0 * extent);
    if !(diagonal * (n as f64 + 1.0)).is_finite() {
        return Err(Error::invalid_input(format!(
            "coordinates up to {extent} make tour weights over {n} vertices overflow"
        )));
    }
    Ok(())
}
