//! Alignment-aware merge of two offset-shifted word arrays.
//!
//! A merge computes `left := f(left, right)` bit by bit over the union of both value
//! domains, where any bit outside an operand's stored window reads as `false`. The
//! two word arrays generally start at different offsets and have different lengths,
//! so the merge combines the overlapping words in place and then decides, for each
//! end of `left`, whether it has to be extended with words copied from `right`,
//! truncated, or left alone. That decision depends only on two algebraic properties
//! of `f`, exposed by [`Combiner::left_false_dominant`] and
//! [`Combiner::right_false_dominant`].

use crate::{addressing::NO_OFFSET, bit_set::BitSet, word_buffer::WordBuffer};

/// Bitwise combining rule of a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combiner {
    /// `a | b` (union).
    Or,
    /// `a & b` (intersection).
    And,
    /// `a & !b` (difference).
    AndNot,
    /// `a ^ b` (symmetric difference).
    Xor,
}

impl Combiner {
    /// Applies the rule to a pair of words.
    #[inline]
    pub const fn apply(self, a: u64, b: u64) -> u64 {
        match self {
            Combiner::Or => a | b,
            Combiner::And => a & b,
            Combiner::AndNot => a & !b,
            Combiner::Xor => a ^ b,
        }
    }

    /// `f(false, x) == false` for every `x`.
    ///
    /// Otherwise the rule satisfies `f(false, x) == x`.
    #[inline]
    pub const fn left_false_dominant(self) -> bool {
        matches!(self, Combiner::And | Combiner::AndNot)
    }

    /// `f(x, false) == false` for every `x`.
    ///
    /// Otherwise the rule satisfies `f(x, false) == x`.
    #[inline]
    pub const fn right_false_dominant(self) -> bool {
        matches!(self, Combiner::And)
    }

    /// Whether combining can clear bits that were set in the left operand, leaving
    /// zero words at the edges of the result.
    #[inline]
    const fn may_clear(self) -> bool {
        !matches!(self, Combiner::Or)
    }
}

impl BitSet {
    /// Merges `other` into `self` under `combiner`, treating values outside either
    /// operand's stored window as absent.
    ///
    /// This is the routine behind [`BitSet::union_with`], [`BitSet::intersect_with`],
    /// [`BitSet::difference_with`] and [`BitSet::symmetric_difference_with`].
    pub fn merge_with(&mut self, other: &BitSet, combiner: Combiner) {
        if self.words.is_empty() {
            // f(false, x): either all false, or a copy of `other`.
            if !combiner.left_false_dominant() {
                self.words.assign(other.words.as_slice());
                self.offset = other.offset;
            }
            return;
        }
        if other.words.is_empty() {
            // f(x, false): either all false, or `self` unchanged.
            if combiner.right_false_dominant() {
                self.clear();
            }
            return;
        }

        self.offset = matched_map(
            combiner,
            &mut self.words,
            self.offset,
            other.words.as_slice(),
            other.offset,
        );

        if self.words.is_empty() {
            self.offset = NO_OFFSET;
        } else if combiner.may_clear() {
            self.compact();
        }
    }
}

/// Combines `a2` (based at word `b2`) into `a1` (based at word `b1`) and returns the new
/// base of `a1`.
///
/// Both arrays must be non-empty; the caller handles empty operands. `a1` may become
/// empty, in which case the returned base is meaningless.
pub(crate) fn matched_map(
    combiner: Combiner,
    a1: &mut WordBuffer,
    b1: i64,
    a2: &[u64],
    b2: i64,
) -> i64 {
    debug_assert!(!a1.is_empty() && !a2.is_empty());
    match combiner {
        Combiner::Or => matched_map_with(a1, b1, a2, b2, |a, b| a | b, false, false),
        Combiner::And => matched_map_with(a1, b1, a2, b2, |a, b| a & b, true, true),
        Combiner::AndNot => matched_map_with(a1, b1, a2, b2, |a, b| a & !b, true, false),
        Combiner::Xor => matched_map_with(a1, b1, a2, b2, |a, b| a ^ b, false, false),
    }
}

#[inline(always)]
fn matched_map_with(
    a1: &mut WordBuffer,
    mut b1: i64,
    a2: &[u64],
    b2: i64,
    f: impl Fn(u64, u64) -> u64,
    left_false_dominant: bool,
    right_false_dominant: bool,
) -> i64 {
    let l1 = a1.len() as i64;
    let l2 = a2.len() as i64;
    // How many words `a2` starts after `a1`, and how many it extends past `a1`'s end.
    let bdiff = b2 - b1;
    let ediff = (b2 + l2) - (b1 + l1);

    // Words present in both arrays.
    let overlap = bdiff.max(0)..l1.min(l2 + bdiff);
    if overlap.start < overlap.end {
        let dst = &mut a1.as_mut_slice()[overlap.start as usize..overlap.end as usize];
        let src_start = (overlap.start - bdiff) as usize;
        let src = &a2[src_start..src_start + dst.len()];
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = f(*d, s);
        }
    }

    if ediff > 0 {
        // With f(false, x) == false the implicit zeros past the end are already right.
        if !left_false_dominant {
            // f(false, x) == x: extend with zeros up to the end of `a2` and copy its
            // tail; any gap between the two arrays stays zero.
            a1.grow_back(ediff as usize);
            let count = ediff.min(l2) as usize;
            let words = a1.as_mut_slice();
            let dst_start = words.len() - count;
            words[dst_start..].copy_from_slice(&a2[a2.len() - count..]);
        }
    } else if ediff < 0 && right_false_dominant {
        // f(x, false) == false: words past the end of `a2` become zero.
        a1.truncate_back((-ediff) as usize);
    }

    if bdiff < 0 {
        if !left_false_dominant {
            let count = (-bdiff) as usize;
            a1.grow_front(count);
            let copied = count.min(a2.len());
            a1.as_mut_slice()[..copied].copy_from_slice(&a2[..copied]);
            b1 += bdiff;
        }
    } else if bdiff > 0 && right_false_dominant {
        // Words before the start of `a2` become zero.
        let count = (bdiff as usize).min(a1.len());
        a1.truncate_front(count);
        b1 += bdiff;
    }

    b1
}
