//! Iteration over the members of a [`BitSet`](crate::BitSet).

use std::iter::FusedIterator;

use crate::addressing::value_of;

/// An iterator over the members of a `BitSet`, in ascending order.
///
/// The iterator keeps private copies of the words at both of its ends and consumes
/// them bit by bit: `next` clears the lowest set bit of the front word, `next_back`
/// the highest set bit of the back word. Zero words are skipped.
#[derive(Clone)]
pub struct Iter<'a> {
    /// Words not yet loaded into `front_word` or `back_word`.
    words: std::slice::Iter<'a, u64>,
    /// Unconsumed bits of the current front word.
    front_word: u64,
    /// Absolute word index of `front_word`.
    front_index: i64,
    /// Unconsumed bits of the current back word.
    back_word: u64,
    /// Absolute word index of `back_word`.
    back_index: i64,
    /// Absolute word index of the next word taken from the front of `words`.
    next_front: i64,
    /// One past the absolute word index of the next word taken from the back of `words`.
    next_back: i64,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(words: &'a [u64], offset: i64) -> Iter<'a> {
        let end = offset + words.len() as i64;
        Iter {
            words: words.iter(),
            front_word: 0,
            front_index: offset,
            back_word: 0,
            back_index: end,
            next_front: offset,
            next_back: end,
        }
    }

    #[inline]
    fn take_lowest(word: &mut u64, index: i64) -> i64 {
        let bit = word.trailing_zeros();
        *word &= *word - 1;
        value_of(index, bit)
    }

    #[inline]
    fn take_highest(word: &mut u64, index: i64) -> i64 {
        let bit = 63 - word.leading_zeros();
        *word &= !(1u64 << bit);
        value_of(index, bit)
    }
}

impl Iterator for Iter<'_> {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        loop {
            if self.front_word != 0 {
                return Some(Self::take_lowest(&mut self.front_word, self.front_index));
            }
            match self.words.next() {
                Some(&word) => {
                    self.front_word = word;
                    self.front_index = self.next_front;
                    self.next_front += 1;
                }
                None => {
                    // Only the back word can still hold members.
                    return (self.back_word != 0)
                        .then(|| Self::take_lowest(&mut self.back_word, self.back_index));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let loaded = (self.front_word.count_ones() + self.back_word.count_ones()) as usize;
        let rest = self.words.len().saturating_mul(64);
        (loaded, loaded.checked_add(rest))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<i64> {
        loop {
            if self.back_word != 0 {
                return Some(Self::take_highest(&mut self.back_word, self.back_index));
            }
            match self.words.next_back() {
                Some(&word) => {
                    self.next_back -= 1;
                    self.back_word = word;
                    self.back_index = self.next_back;
                }
                None => {
                    return (self.front_word != 0)
                        .then(|| Self::take_highest(&mut self.front_word, self.front_index));
                }
            }
        }
    }
}

impl FusedIterator for Iter<'_> {}
