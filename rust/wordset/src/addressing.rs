//! Mapping between member values and `(word index, bit index)` pairs.
//!
//! Word indices are absolute: word `w` covers the values `[w * 64, w * 64 + 63]`. The
//! split uses floor division, so negative values land in negative words with a
//! bit index in `[0, 64)`.

use std::ops::Range;

/// Number of bits stored in a single storage word.
pub const WORD_BITS: u32 = u64::BITS;

/// Offset of a set with no storage words.
///
/// Absolute word indices lie within `[-(1 << 57), 1 << 57)`, so subtracting this value
/// from any of them yields a positive distance far beyond any buffer length, and never
/// overflows.
pub(crate) const NO_OFFSET: i64 = -(1 << 60);

/// Returns the absolute index of the word holding `value`.
#[inline]
pub(crate) fn word_index(value: i64) -> i64 {
    value >> 6
}

/// Returns the position of `value` within its word.
#[inline]
pub(crate) fn bit_index(value: i64) -> u32 {
    (value & 63) as u32
}

/// Splits `value` into its absolute word index and bit position.
#[inline]
pub(crate) fn split(value: i64) -> (i64, u32) {
    (word_index(value), bit_index(value))
}

/// Inverse of [`split`].
#[inline]
pub(crate) fn value_of(word_index: i64, bit: u32) -> i64 {
    debug_assert!(bit < WORD_BITS);
    (word_index << 6) | bit as i64
}

/// Converts an arbitrary integer into a member value, or `None` when it does not fit
/// into `i64` and therefore cannot be a member.
#[inline]
pub(crate) fn to_value<K: TryInto<i64>>(key: K) -> Option<i64> {
    key.try_into().ok()
}

/// Aligns two word buffers by their offsets and returns the index ranges of their common
/// words, first in `a`'s index space and then in `b`'s.
///
/// Both ranges have the same length. When the buffers share no word index, both are
/// `0..0`, so `a[range.end..]` then covers all of `a`.
#[inline]
pub(crate) fn overlap(
    a_offset: i64,
    a_len: usize,
    b_offset: i64,
    b_len: usize,
) -> (Range<usize>, Range<usize>) {
    let start = a_offset.max(b_offset);
    let end = (a_offset + a_len as i64).min(b_offset + b_len as i64);
    if start >= end {
        return (0..0, 0..0);
    }
    (
        (start - a_offset) as usize..(end - a_offset) as usize,
        (start - b_offset) as usize..(end - b_offset) as usize,
    )
}
