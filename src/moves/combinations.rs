/// Lazily generates every `K`-element index combination of `0..n` in
/// lexicographic order, without materializing the whole set.
///
/// Used for the C(n, 5) five-card sweep and for k-of-a-kind subsets of a rank group.
#[derive(Debug, Clone)]
pub struct Combinations<const K: usize> {
    n: usize,
    indices: [usize; K],
    remaining: usize,
}

impl<const K: usize> Combinations<K> {
    pub fn new(n: usize) -> Self {
        let mut indices = [0; K];
        for (i, slot) in indices.iter_mut().enumerate() {
            *slot = i;
        }
        let remaining = if K == 0 { 0 } else { binomial(n, K) };
        Self { n, indices, remaining }
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let result = self.indices;
        if self.remaining == 0 {
            return Some(result);
        }

        // Find the rightmost index that can still move right
        let mut i = K - 1;
        while self.indices[i] == self.n - (K - i) {
            i -= 1;
        }
        self.indices[i] += 1;
        for j in (i + 1)..K {
            self.indices[j] = self.indices[j - 1] + 1;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const K: usize> ExactSizeIterator for Combinations<K> {}

/// C(n, k); zero when k > n, `usize::MAX` when the result does not fit.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) is always divisible by i + 1
        match acc.checked_mul((n - i) as u128) {
            Some(v) => acc = v / (i as u128 + 1),
            None => return usize::MAX,
        }
    }
    usize::try_from(acc).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(4, 2), 6);
        assert_eq!(binomial(7, 5), 21);
        assert_eq!(binomial(20, 5), 15504);
        assert_eq!(binomial(52, 5), 2_598_960);
        assert_eq!(binomial(3, 5), 0);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn binomial_large_inputs_do_not_overflow() {
        assert_eq!(binomial(66, 33), 7_219_428_434_016_265_740);
        assert_eq!(binomial(70, 35), usize::MAX);
        assert_eq!(binomial(1_000, 999), 1_000);
    }

    #[test]
    fn four_choose_two_in_order() {
        let combos: Vec<[usize; 2]> = Combinations::<2>::new(4).collect();
        assert_eq!(combos, vec![[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]]);
    }

    #[test]
    fn seven_choose_five_is_complete_and_unique() {
        let combos: Vec<[usize; 5]> = Combinations::<5>::new(7).collect();
        assert_eq!(combos.len(), 21);
        assert_eq!(combos.first(), Some(&[0, 1, 2, 3, 4]));
        assert_eq!(combos.last(), Some(&[2, 3, 4, 5, 6]));
        let seen: HashSet<[usize; 5]> = combos.iter().copied().collect();
        assert_eq!(seen.len(), 21);
        for w in combos.windows(2) {
            assert!(w[0] < w[1], "not lexicographic: {:?} then {:?}", w[0], w[1]);
        }
    }

    #[test]
    fn exact_n_yields_single_combination() {
        let mut it = Combinations::<3>::new(3);
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some([0, 1, 2]));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn too_few_elements_yields_nothing() {
        assert_eq!(Combinations::<5>::new(4).count(), 0);
        assert_eq!(Combinations::<1>::new(0).count(), 0);
    }

    #[test]
    fn size_hint_tracks_progress() {
        let mut it = Combinations::<2>::new(5);
        assert_eq!(it.size_hint(), (10, Some(10)));
        it.next();
        assert_eq!(it.len(), 9);
    }
}
