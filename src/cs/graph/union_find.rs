/// Disjoint-set forest with path compression and union by rank.
///
/// # Example
/// ```
/// use tsp_ratio::cs::graph::union_find::UnionFind;
///
/// let mut uf = UnionFind::new(4);
/// uf.union(0, 1);
/// uf.union(2, 3);
/// assert!(uf.connected(0, 1));
/// assert!(!uf.connected(1, 2));
/// assert_eq!(uf.set_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
    sets: usize,
}

impl UnionFind {
    /// Initializes a union-find for `n` singleton sets (0..n-1).
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Finds the representative (root) of the set containing `x`.
    ///
    /// Every node on the walk to the root is repointed directly at the root.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Unites the sets containing `x` and `y`. The lower-rank root is attached
    /// under the higher-rank one; on a tie `x`'s root wins and its rank grows.
    ///
    /// Returns `false` and changes nothing if they were already in one set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets remaining.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(5);
        for i in 0..5 {
            assert_eq!(uf.find(i), i);
        }
        assert_eq!(uf.set_count(), 5);
    }

    #[test]
    fn test_equal_rank_union_keeps_first_root() {
        let mut uf = UnionFind::new(2);
        assert!(uf.union(0, 1));
        assert_eq!(uf.find(1), 0);
        assert_eq!(uf.rank[0], 1);
    }

    #[test]
    fn test_lower_rank_goes_under_higher() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1); // root 0, rank 1
        uf.union(2, 0); // rank(2) = 0 < rank(0) = 1
        assert_eq!(uf.find(2), 0);
        assert_eq!(uf.rank[0], 1);
    }

    #[test]
    fn test_union_of_same_set_is_noop() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1);
        assert!(!uf.union(1, 0));
        assert_eq!(uf.set_count(), 2);
    }

    #[test]
    fn test_path_compression() {
        let mut uf = UnionFind::new(4);
        // Build a chain by hand: 3 -> 2 -> 1 -> 0.
        uf.parent = vec![0, 0, 1, 2];
        assert_eq!(uf.find(3), 0);
        assert_eq!(uf.parent, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let n = 1_000_000;
        let mut uf = UnionFind::new(n);
        uf.parent = (0..n).map(|i| i.saturating_sub(1)).collect();
        assert_eq!(uf.find(n - 1), 0);
    }

    #[test]
    fn test_random_unions_match_naive_components() {
        let mut rng = StdRng::seed_from_u64(99);
        let n = 40;
        let mut uf = UnionFind::new(n);
        // Naive labelling: relabel a whole component on every merge.
        let mut label: Vec<usize> = (0..n).collect();
        let mut unions = 0;

        for _ in 0..60 {
            let x = rng.gen_range(0..n);
            let y = rng.gen_range(0..n);
            if uf.union(x, y) {
                unions += 1;
            }
            let (from, to) = (label[y], label[x]);
            for l in label.iter_mut() {
                if *l == from {
                    *l = to;
                }
            }

            assert_eq!(uf.set_count(), n - unions);
        }

        for x in 0..n {
            let root = uf.find(x);
            assert_eq!(uf.find(root), root);
            for y in 0..n {
                assert_eq!(uf.connected(x, y), label[x] == label[y]);
            }
        }
    }
}
