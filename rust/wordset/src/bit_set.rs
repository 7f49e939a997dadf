//! The [`BitSet`] container.

use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{
        BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, RangeInclusive, Sub,
        SubAssign,
    },
};

use wordset_common::{Result, result};

use crate::{
    addressing::{NO_OFFSET, overlap, split, to_value, value_of},
    iter::Iter,
    matched_map::Combiner,
    word_buffer::WordBuffer,
};

/// A sorted set of `i64` values stored as a bit vector with a movable base.
///
/// # Storage Format
///
/// Membership is kept in a contiguous buffer of `u64` words. Word `i` of the buffer
/// holds the values `[(offset + i) * 64, (offset + i) * 64 + 63]`, bit `b` of the word
/// standing for the value `(offset + i) * 64 + b`. The `offset` is measured in words
/// and moves down when values below the current window are inserted, so the buffer
/// only spans the range between the smallest and the largest member.
///
/// A set without storage words is in its canonical empty form; its offset is a
/// reserved value that is never interpreted as a word index.
///
/// Insertions keep the buffer minimal (no all-zero word at either end). Removals do
/// not shrink it; every query tolerates zero words at the edges, and
/// [`BitSet::compact`] trims them on request.
///
/// # Performance
///
/// - `insert`, `remove`, `contains`: O(1), amortized when the buffer grows. Inserting
///   a value far outside the current window costs O(distance / 64) once.
/// - Set algebra, equality, subset tests, `len`: O(words touched).
/// - Iteration: O(1) amortized per member, plus skipping zero words.
///
/// Memory use is proportional to `(max - min) / 64` words, which makes the set a poor
/// choice for a few values scattered across the whole `i64` range.
#[derive(Clone)]
pub struct BitSet {
    pub(crate) words: WordBuffer,
    pub(crate) offset: i64,
}

impl BitSet {
    /// Creates an empty set without allocating.
    pub fn new() -> BitSet {
        BitSet {
            words: WordBuffer::new(),
            offset: NO_OFFSET,
        }
    }

    /// Creates an empty set with room for `words` storage words (`64 * words` values)
    /// before reallocating.
    pub fn with_capacity(words: usize) -> BitSet {
        BitSet {
            words: WordBuffer::with_capacity(words),
            offset: NO_OFFSET,
        }
    }

    /// Creates a set holding every value of `range`.
    pub fn from_range(range: RangeInclusive<i64>) -> BitSet {
        let mut set = BitSet::new();
        set.insert_range(range);
        set
    }

    /// Reserves room for `additional` more storage words at the upper end.
    pub fn reserve(&mut self, additional: usize) {
        self.words.reserve(additional);
    }

    /// Returns the number of heap bytes used by the backing buffer, including spare
    /// capacity.
    pub fn heap_size_bytes(&self) -> usize {
        self.words.heap_size_bytes()
    }

    /// Returns the raw storage words, starting with the word at [`BitSet::word_offset`].
    ///
    /// The slice may contain zero words at either end after removals.
    #[inline]
    pub fn words(&self) -> &[u64] {
        self.words.as_slice()
    }

    /// Absolute word index of the first storage word, or `None` for a set without
    /// storage.
    #[inline]
    pub fn word_offset(&self) -> Option<i64> {
        (!self.words.is_empty()).then_some(self.offset)
    }

    /// Adds `value` to the set.
    ///
    /// Returns `true` if the value was not present before.
    #[inline]
    pub fn insert(&mut self, value: i64) -> bool {
        !self.set_bit(value, true)
    }

    /// Adds a value of any integer type to the set.
    ///
    /// Fails with an out-of-range error if `value` does not fit into `i64`; otherwise
    /// returns `true` if the value was not present before.
    pub fn try_insert<K>(&mut self, value: K) -> Result<bool>
    where
        K: TryInto<i64> + Copy + fmt::Display,
    {
        match to_value(value) {
            Some(value) => Ok(self.insert(value)),
            None => result::out_of_range(value),
        }
    }

    /// Removes `value` from the set.
    ///
    /// Returns `true` if the value was present. A value that does not fit into `i64`
    /// is never a member, so removing it is a no-op.
    #[inline]
    pub fn remove<K: TryInto<i64>>(&mut self, value: K) -> bool {
        match to_value(value) {
            Some(value) => self.set_bit(value, false),
            None => false,
        }
    }

    /// Removes `value` from the set and returns it, failing with a key-not-found error
    /// if it was absent.
    pub fn take(&mut self, value: i64) -> Result<i64> {
        if self.remove(value) {
            Ok(value)
        } else {
            result::key_not_found(value)
        }
    }

    /// Removes `value` from the set and returns it, or returns `default` if it was
    /// absent.
    pub fn take_or(&mut self, value: i64, default: i64) -> i64 {
        if self.remove(value) { value } else { default }
    }

    /// Flips the membership of `value` (symmetric difference with `{value}`).
    ///
    /// Returns `true` if the value is a member afterwards.
    pub fn toggle(&mut self, value: i64) -> bool {
        let present = !self.contains(value);
        self.set_bit(value, present);
        present
    }

    /// Checks whether `value` is a member.
    ///
    /// Values that do not fit into `i64` are never members.
    #[inline]
    pub fn contains<K: TryInto<i64>>(&self, value: K) -> bool {
        let Some(value) = to_value(value) else {
            return false;
        };
        let (word_index, bit) = split(value);
        // The empty-set offset puts every word index far past the end.
        let position = word_index - self.offset;
        let words = self.words.as_slice();
        position >= 0
            && (position as u64) < words.len() as u64
            && (words[position as usize] >> bit) & 1 != 0
    }

    /// Adds every value of `range` to the set.
    ///
    /// The buffer is extended once to cover the whole range; boundary words are
    /// combined with partial masks, interior words are filled. An empty range is a
    /// no-op.
    pub fn insert_range(&mut self, range: RangeInclusive<i64>) {
        if range.is_empty() {
            return;
        }
        let (lo, hi) = range.into_inner();
        let (lo_word, lo_bit) = split(lo);
        let (hi_word, hi_bit) = split(hi);
        self.cover_words(lo_word, hi_word);

        let first = (lo_word - self.offset) as usize;
        let last = (hi_word - self.offset) as usize;
        let lo_mask = u64::MAX << lo_bit;
        let hi_mask = u64::MAX >> (63 - hi_bit);
        let words = self.words.as_mut_slice();
        if first == last {
            words[first] |= lo_mask & hi_mask;
        } else {
            words[first] |= lo_mask;
            words[first + 1..last].fill(u64::MAX);
            words[last] |= hi_mask;
        }
    }

    /// Adds every value in `[lo, hi]` to the set, accepting bounds of any integer type.
    ///
    /// Fails with an out-of-range error if either bound does not fit into `i64`.
    pub fn try_insert_range<K>(&mut self, lo: K, hi: K) -> Result<()>
    where
        K: TryInto<i64> + Copy + fmt::Display,
    {
        let Some(lo_value) = to_value(lo) else {
            return result::out_of_range(lo);
        };
        let Some(hi_value) = to_value(hi) else {
            return result::out_of_range(hi);
        };
        self.insert_range(lo_value..=hi_value);
        Ok(())
    }

    /// Removes all values, returning the set to its canonical empty form.
    ///
    /// The allocation of the backing buffer is kept.
    pub fn clear(&mut self) {
        self.words.clear();
        self.offset = NO_OFFSET;
    }

    /// Keeps only the values for which `predicate` returns `true`.
    pub fn retain(&mut self, mut predicate: impl FnMut(i64) -> bool) {
        let offset = self.offset;
        for (i, word) in self.words.as_mut_slice().iter_mut().enumerate() {
            let mut bits = *word;
            while bits != 0 {
                let bit = bits.trailing_zeros();
                bits &= bits - 1;
                if !predicate(value_of(offset + i as i64, bit)) {
                    *word &= !(1u64 << bit);
                }
            }
        }
    }

    /// Removes and returns the smallest member.
    pub fn pop_first(&mut self) -> Result<i64> {
        let Some(value) = self.first() else {
            return result::empty_collection("pop_first");
        };
        self.set_bit(value, false);
        Ok(value)
    }

    /// Removes and returns the largest member.
    pub fn pop_last(&mut self) -> Result<i64> {
        let Some(value) = self.last() else {
            return result::empty_collection("pop_last");
        };
        self.set_bit(value, false);
        Ok(value)
    }

    /// Drops all-zero words from both ends of the buffer.
    ///
    /// A set without members returns to its canonical empty form.
    pub fn compact(&mut self) {
        let words = self.words.as_slice();
        let Some(first) = words.iter().position(|&w| w != 0) else {
            if !words.is_empty() {
                log::trace!("compact: dropping {} zero words", words.len());
            }
            self.clear();
            return;
        };
        // A non-zero word exists, so `rposition` finds one.
        let last = words.iter().rposition(|&w| w != 0).unwrap_or(first);
        let trailing = words.len() - last - 1;
        if first == 0 && trailing == 0 {
            return;
        }
        log::trace!("compact: dropping {first} leading and {trailing} trailing zero words");
        self.words.truncate_back(trailing);
        self.words.truncate_front(first);
        self.offset += first as i64;
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.words.as_slice().iter().all(|&w| w == 0)
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.words
            .as_slice()
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum()
    }

    /// Always `true`: iteration yields members in ascending order.
    pub fn is_sorted(&self) -> bool {
        true
    }

    /// Returns the smallest member, or `None` for an empty set.
    pub fn first(&self) -> Option<i64> {
        let words = self.words.as_slice();
        let i = words.iter().position(|&w| w != 0)?;
        Some(value_of(self.offset + i as i64, words[i].trailing_zeros()))
    }

    /// Returns the largest member, or `None` for an empty set.
    pub fn last(&self) -> Option<i64> {
        let words = self.words.as_slice();
        let i = words.iter().rposition(|&w| w != 0)?;
        Some(value_of(self.offset + i as i64, 63 - words[i].leading_zeros()))
    }

    /// Returns the smallest member, failing on an empty set.
    pub fn min(&self) -> Result<i64> {
        match self.first() {
            Some(value) => Ok(value),
            None => result::empty_collection("min"),
        }
    }

    /// Returns the largest member, failing on an empty set.
    pub fn max(&self) -> Result<i64> {
        match self.last() {
            Some(value) => Ok(value),
            None => result::empty_collection("max"),
        }
    }

    /// Returns `(min, max)`, failing on an empty set.
    pub fn extrema(&self) -> Result<(i64, i64)> {
        match (self.first(), self.last()) {
            (Some(min), Some(max)) => Ok((min, max)),
            _ => result::empty_collection("extrema"),
        }
    }

    /// Returns an iterator over the members in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.words.as_slice(), self.offset)
    }

    /// Adds every member of `other` to `self`.
    pub fn union_with(&mut self, other: &BitSet) {
        self.merge_with(other, Combiner::Or);
    }

    /// Keeps only the members of `self` that are also in `other`.
    pub fn intersect_with(&mut self, other: &BitSet) {
        self.merge_with(other, Combiner::And);
    }

    /// Removes every member of `other` from `self`.
    pub fn difference_with(&mut self, other: &BitSet) {
        self.merge_with(other, Combiner::AndNot);
    }

    /// Keeps the values that are members of exactly one of `self` and `other`.
    pub fn symmetric_difference_with(&mut self, other: &BitSet) {
        self.merge_with(other, Combiner::Xor);
    }

    /// Returns a new set with the members of both sets.
    pub fn union(&self, other: &BitSet) -> BitSet {
        // Start from the wider operand so the merge mostly combines in place.
        let (mut result, rest) = if self.words.len() >= other.words.len() {
            (self.clone(), other)
        } else {
            (other.clone(), self)
        };
        result.union_with(rest);
        result
    }

    /// Returns a new set with the members common to both sets.
    pub fn intersection(&self, other: &BitSet) -> BitSet {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Returns a new set with the members of `self` that are not in `other`.
    pub fn difference(&self, other: &BitSet) -> BitSet {
        let mut result = self.clone();
        result.difference_with(other);
        result
    }

    /// Returns a new set with the values that are members of exactly one set.
    pub fn symmetric_difference(&self, other: &BitSet) -> BitSet {
        let mut result = self.clone();
        result.symmetric_difference_with(other);
        result
    }

    /// Returns `true` if every member of `self` is also a member of `other`.
    pub fn is_subset(&self, other: &BitSet) -> bool {
        let a = self.words.as_slice();
        let b = other.words.as_slice();
        if other.words.is_empty() {
            return a.iter().all(|&w| w == 0);
        }
        if self.words.is_empty() {
            return true;
        }
        let (in_a, in_b) = overlap(self.offset, a.len(), other.offset, b.len());
        // Members of `self` outside `other`'s words.
        if a[..in_a.start].iter().any(|&w| w != 0) || a[in_a.end..].iter().any(|&w| w != 0) {
            return false;
        }
        a[in_a]
            .iter()
            .zip(&b[in_b])
            .all(|(&x, &y)| x & !y == 0)
    }

    /// Returns `true` if `self` is a subset of `other` and the sets differ.
    pub fn is_strict_subset(&self, other: &BitSet) -> bool {
        self.is_subset(other) && self != other
    }

    /// Returns `true` if every member of `other` is also a member of `self`.
    pub fn is_superset(&self, other: &BitSet) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if the sets have no member in common.
    pub fn is_disjoint(&self, other: &BitSet) -> bool {
        if self.words.is_empty() || other.words.is_empty() {
            return true;
        }
        let a = self.words.as_slice();
        let b = other.words.as_slice();
        let (in_a, in_b) = overlap(self.offset, a.len(), other.offset, b.len());
        a[in_a].iter().zip(&b[in_b]).all(|(&x, &y)| x & y == 0)
    }

    /// Sets or clears the bit of `value`, growing the buffer only when a bit outside
    /// the current window has to be set. Returns the previous membership.
    fn set_bit(&mut self, value: i64, present: bool) -> bool {
        let (word_index, bit) = split(value);
        let len = self.words.len() as i64;
        let mut position = word_index - self.offset;
        if position >= len {
            if !present {
                return false;
            }
            if self.words.is_empty() {
                self.offset = word_index;
                position = 0;
                self.words.grow_back(1);
            } else {
                self.words.grow_back((position - len + 1) as usize);
            }
        } else if position < 0 {
            if !present {
                return false;
            }
            self.words.grow_front((-position) as usize);
            self.offset += position;
            position = 0;
        }

        let mask = 1u64 << bit;
        let word = &mut self.words.as_mut_slice()[position as usize];
        let previous = *word & mask != 0;
        if present {
            *word |= mask;
        } else {
            *word &= !mask;
        }
        previous
    }

    /// Extends the buffer so that it covers the absolute words `[lo_word, hi_word]`.
    fn cover_words(&mut self, lo_word: i64, hi_word: i64) {
        debug_assert!(lo_word <= hi_word);
        if self.words.is_empty() {
            self.offset = lo_word;
            self.words.grow_back((hi_word - lo_word + 1) as usize);
            return;
        }
        if lo_word < self.offset {
            self.words.grow_front((self.offset - lo_word) as usize);
            self.offset = lo_word;
        }
        let end = self.offset + self.words.len() as i64;
        if hi_word >= end {
            self.words.grow_back((hi_word - end + 1) as usize);
        }
    }

    /// Absolute word index and words with zero words stripped from both ends.
    fn trimmed(&self) -> (i64, &[u64]) {
        let words = self.words.as_slice();
        let Some(first) = words.iter().position(|&w| w != 0) else {
            return (NO_OFFSET, &[]);
        };
        let last = words.iter().rposition(|&w| w != 0).unwrap_or(first);
        (self.offset + first as i64, &words[first..=last])
    }
}

impl Default for BitSet {
    fn default() -> Self {
        BitSet::new()
    }
}

impl PartialEq for BitSet {
    /// Compares membership; zero words at the edges of either buffer are ignored.
    fn eq(&self, other: &BitSet) -> bool {
        let a = self.words.as_slice();
        let b = other.words.as_slice();
        if self.words.is_empty() || other.words.is_empty() {
            return a.iter().chain(b).all(|&w| w == 0);
        }
        let (in_a, in_b) = overlap(self.offset, a.len(), other.offset, b.len());
        a[..in_a.start].iter().all(|&w| w == 0)
            && a[in_a.end..].iter().all(|&w| w == 0)
            && b[..in_b.start].iter().all(|&w| w == 0)
            && b[in_b.end..].iter().all(|&w| w == 0)
            && a[in_a] == b[in_b]
    }
}

impl Eq for BitSet {}

impl Hash for BitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (offset, words) = self.trimmed();
        offset.hash(state);
        words.hash(state);
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BitSet(")?;
        f.debug_list().entries(self.iter()).finish()?;
        f.write_str(")")
    }
}

impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromIterator<i64> for BitSet {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        let mut set = BitSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> FromIterator<&'a i64> for BitSet {
    fn from_iter<T: IntoIterator<Item = &'a i64>>(iter: T) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl Extend<i64> for BitSet {
    fn extend<T: IntoIterator<Item = i64>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a> Extend<&'a i64> for BitSet {
    fn extend<T: IntoIterator<Item = &'a i64>>(&mut self, iter: T) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BitOr<&BitSet> for &BitSet {
    type Output = BitSet;

    fn bitor(self, rhs: &BitSet) -> BitSet {
        self.union(rhs)
    }
}

impl BitAnd<&BitSet> for &BitSet {
    type Output = BitSet;

    fn bitand(self, rhs: &BitSet) -> BitSet {
        self.intersection(rhs)
    }
}

impl Sub<&BitSet> for &BitSet {
    type Output = BitSet;

    fn sub(self, rhs: &BitSet) -> BitSet {
        self.difference(rhs)
    }
}

impl BitXor<&BitSet> for &BitSet {
    type Output = BitSet;

    fn bitxor(self, rhs: &BitSet) -> BitSet {
        self.symmetric_difference(rhs)
    }
}

impl BitOrAssign<&BitSet> for BitSet {
    fn bitor_assign(&mut self, rhs: &BitSet) {
        self.union_with(rhs);
    }
}

impl BitAndAssign<&BitSet> for BitSet {
    fn bitand_assign(&mut self, rhs: &BitSet) {
        self.intersect_with(rhs);
    }
}

impl SubAssign<&BitSet> for BitSet {
    fn sub_assign(&mut self, rhs: &BitSet) {
        self.difference_with(rhs);
    }
}

impl BitXorAssign<&BitSet> for BitSet {
    fn bitxor_assign(&mut self, rhs: &BitSet) {
        self.symmetric_difference_with(rhs);
    }
}
