//! # Row sets
//!
//! A growable bit set over row indices. Zero sets of rays, incidence rows and the internal
//! linearity bookkeeping all use it; the public interface converts to `BTreeSet<usize>`.
use std::collections::BTreeSet;

const WORD_BITS: usize = usize::BITS as usize;

/// Set of row indices stored as bits.
///
/// Trailing zero words are trimmed after every mutation, so the derived equality is set equality.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct RowSet {
    words: Vec<usize>,
}

impl RowSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The set `{0, 1, ..., len - 1}`.
    pub fn full(len: usize) -> Self {
        let mut set = Self { words: vec![usize::MAX; len / WORD_BITS] };
        let rest = len % WORD_BITS;
        if rest > 0 {
            set.words.push((1usize << rest) - 1);
        }
        set
    }

    fn trim(&mut self) {
        while self.words.last().is_some_and(|word| *word == 0) {
            self.words.pop();
        }
    }

    /// Whether no index is in the set.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[allow(missing_docs)]
    pub fn contains(&self, index: usize) -> bool {
        self.words
            .get(index / WORD_BITS)
            .is_some_and(|word| word & (1usize << (index % WORD_BITS)) != 0)
    }

    #[allow(missing_docs)]
    pub fn insert(&mut self, index: usize) {
        let word = index / WORD_BITS;
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1usize << (index % WORD_BITS);
    }

    #[allow(missing_docs)]
    pub fn remove(&mut self, index: usize) {
        if let Some(word) = self.words.get_mut(index / WORD_BITS) {
            *word &= !(1usize << (index % WORD_BITS));
            self.trim();
        }
    }

    /// Number of indices in the set.
    pub fn cardinality(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Size of the intersection, without allocating it.
    pub fn count_intersection(&self, other: &Self) -> usize {
        self.words.iter()
            .zip(&other.words)
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    /// A new set holding the indices in both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = Self {
            words: self.words.iter().zip(&other.words).map(|(a, b)| a & b).collect(),
        };
        result.trim();
        result
    }

    /// Add all indices of `other`.
    pub fn union_with(&mut self, other: &Self) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (word, other) in self.words.iter_mut().zip(&other.words) {
            *word |= other;
        }
    }

    /// Remove all indices of `other`.
    pub fn difference_with(&mut self, other: &Self) {
        for (word, other) in self.words.iter_mut().zip(&other.words) {
            *word &= !other;
        }
        self.trim();
    }

    /// Whether every index of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.words.iter().enumerate().all(|(i, word)| {
            let other = other.words.get(i).copied().unwrap_or(0);
            word & !other == 0
        })
    }

    /// The indices in increasing order.
    pub fn iter(&self) -> impl Iterator<Item=usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            (0..WORD_BITS)
                .filter(move |bit| word & (1usize << bit) != 0)
                .map(move |bit| i * WORD_BITS + bit)
        })
    }

    /// Convert into the ordered set used at the public interface.
    pub fn to_btree(&self) -> BTreeSet<usize> {
        self.iter().collect()
    }
}

impl FromIterator<usize> for RowSet {
    fn from_iter<I: IntoIterator<Item=usize>>(iter: I) -> Self {
        let mut set = Self::new();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

impl<'a> FromIterator<&'a usize> for RowSet {
    fn from_iter<I: IntoIterator<Item=&'a usize>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::row_set::RowSet;

    #[test]
    fn insert_remove() {
        let mut set = RowSet::new();
        assert!(set.is_empty());
        set.insert(3);
        set.insert(130);
        assert!(set.contains(3) && set.contains(130) && !set.contains(4));
        assert_eq!(set.cardinality(), 2);
        set.remove(130);
        assert_eq!(set, [3].iter().collect::<RowSet>());
        set.remove(3);
        assert_eq!(set, RowSet::new());
    }

    #[test]
    fn full() {
        assert_eq!(RowSet::full(0), RowSet::new());
        assert_eq!(RowSet::full(70).cardinality(), 70);
        assert_eq!(RowSet::full(64), (0..64).collect::<RowSet>());
        assert!(!RowSet::full(64).contains(64));
    }

    #[test]
    fn operations() {
        let a: RowSet = [0, 2, 4, 100].iter().collect();
        let b: RowSet = [2, 3, 4].iter().collect();
        assert_eq!(a.intersection(&b), [2, 4].iter().collect::<RowSet>());
        assert_eq!(a.count_intersection(&b), 2);
        assert!(a.intersection(&b).is_subset(&a));
        assert!(!a.is_subset(&b));
        assert!(RowSet::new().is_subset(&b));

        let mut c = b.clone();
        c.union_with(&a);
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![0, 2, 3, 4, 100]);
        c.difference_with(&a);
        assert_eq!(c.to_btree().into_iter().collect::<Vec<_>>(), vec![3]);
    }
}
