/// Lazy Johnson-Trotter permutation generator.
/// Yields every permutation of distinct items in "adjacent swap" order, one at
/// a time. The iterator is finite (`n!` items) and cannot be restarted; build
/// a new one to enumerate again.
///
/// # Example
/// ```
/// use tsp_ratio::cs::combinatorial::JohnsonTrotter;
///
/// let perms: Vec<Vec<i32>> = JohnsonTrotter::new(&[1, 2, 3]).collect();
/// assert_eq!(perms, vec![
///     vec![1, 2, 3],
///     vec![1, 3, 2],
///     vec![3, 1, 2],
///     vec![3, 2, 1],
///     vec![2, 3, 1],
///     vec![2, 1, 3],
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct JohnsonTrotter<T> {
    elements: Vec<T>,
    // -1 points left, +1 points right.
    dirs: Vec<isize>,
    started: bool,
    exhausted: bool,
}

impl<T: Copy + Ord> JohnsonTrotter<T> {
    pub fn new(items: &[T]) -> Self {
        Self {
            elements: items.to_vec(),
            dirs: vec![-1; items.len()],
            started: false,
            exhausted: false,
        }
    }

    /// The largest element whose neighbour in its direction is smaller.
    fn largest_mobile(&self) -> Option<usize> {
        let mut mobile: Option<usize> = None;
        for i in 0..self.elements.len() {
            let adj = i as isize + self.dirs[i];
            if adj < 0 || adj as usize >= self.elements.len() {
                continue;
            }
            if self.elements[i] > self.elements[adj as usize]
                && mobile.map_or(true, |m| self.elements[i] > self.elements[m])
            {
                mobile = Some(i);
            }
        }
        mobile
    }

    fn advance(&mut self) -> bool {
        let Some(i) = self.largest_mobile() else {
            return false;
        };

        let j = (i as isize + self.dirs[i]) as usize;
        let moved = self.elements[i];
        self.elements.swap(i, j);
        self.dirs.swap(i, j);

        for (value, dir) in self.elements.iter().zip(self.dirs.iter_mut()) {
            if *value > moved {
                *dir = -*dir;
            }
        }
        true
    }
}

impl<T: Copy + Ord> Iterator for JohnsonTrotter<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.elements.clone());
        }
        if self.advance() {
            Some(self.elements.clone())
        } else {
            self.exhausted = true;
            None
        }
    }
}

impl<T: Copy + Ord> std::iter::FusedIterator for JohnsonTrotter<T> {}

/// Collects every permutation of `items` in Johnson-Trotter order.
pub fn johnson_trotter<T: Copy + Ord>(items: &[T]) -> Vec<Vec<T>> {
    JohnsonTrotter::new(items).collect()
}
