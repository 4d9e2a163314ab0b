//! Unordered triples over an indexed sequence.

/// Number of 3-element combinations of `n` items, `C(n, 3)`.
pub fn triple_count(n: usize) -> u128 {
    let n = n as u128;
    if n < 3 {
        0
    } else {
        n * (n - 1) * (n - 2) / 6
    }
}

/// Lazy iterator over index triples `[i, j, k]` with `i < j < k < n`, in
/// lexicographic order.
///
/// Elements are identified by position, so two equal values at different
/// positions are distinct members of a triple.
///
/// # Examples
///
/// ```
/// use volley_lineup::matchup::IndexTriples;
///
/// let all: Vec<[usize; 3]> = IndexTriples::new(4).collect();
/// assert_eq!(all, vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]);
/// ```
#[derive(Debug, Clone)]
pub struct IndexTriples {
    n: usize,
    next: Option<[usize; 3]>,
    remaining: u128,
}

impl IndexTriples {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            next: (n >= 3).then_some([0, 1, 2]),
            remaining: triple_count(n),
        }
    }

    /// Triples not yet yielded.
    pub fn remaining(&self) -> u128 {
        self.remaining
    }

    fn successor(&self, [i, j, k]: [usize; 3]) -> Option<[usize; 3]> {
        let n = self.n;
        if k + 1 < n {
            Some([i, j, k + 1])
        } else if j + 2 < n {
            Some([i, j + 1, j + 2])
        } else if i + 3 < n {
            Some([i + 1, i + 2, i + 3])
        } else {
            None
        }
    }
}

impl Iterator for IndexTriples {
    type Item = [usize; 3];

    fn next(&mut self) -> Option<[usize; 3]> {
        let current = self.next?;
        self.next = self.successor(current);
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Every unordered triple of elements of `items`, lazily.
pub fn triples<T>(items: &[T]) -> impl Iterator<Item = [&T; 3]> + '_ {
    IndexTriples::new(items.len()).map(move |[i, j, k]| [&items[i], &items[j], &items[k]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(triple_count(0), 0);
        assert_eq!(triple_count(2), 0);
        assert_eq!(triple_count(3), 1);
        assert_eq!(triple_count(10), 120);
        for n in 0..12 {
            assert_eq!(IndexTriples::new(n).count() as u128, triple_count(n));
        }
    }

    #[test]
    fn test_strictly_increasing_and_unique() {
        let all: Vec<[usize; 3]> = IndexTriples::new(7).collect();
        assert!(all.iter().all(|[i, j, k]| i < j && j < k && *k < 7));
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_too_few_items() {
        assert_eq!(IndexTriples::new(2).next(), None);
        assert_eq!(triples(&["a", "b"][..]).count(), 0);
    }

    #[test]
    fn test_equal_values_are_distinct_members() {
        let items = ["x", "x", "x"];
        let all: Vec<[&&str; 3]> = triples(&items[..]).collect();
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_remaining_and_size_hint() {
        let mut it = IndexTriples::new(5);
        assert_eq!(it.remaining(), 10);
        assert_eq!(it.size_hint(), (10, Some(10)));
        it.next();
        it.next();
        assert_eq!(it.remaining(), 8);
        assert_eq!(it.by_ref().count(), 8);
        assert_eq!(it.remaining(), 0);
    }
}
