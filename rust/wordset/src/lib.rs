//! A sorted set of `i64` values backed by an offset-shifted array of 64-bit words.
//!
//! [`BitSet`] stores membership as bits in a contiguous buffer of `u64` words whose
//! first word corresponds to a movable base ("offset"), so that densely clustered
//! values far away from zero (including negative ones) are stored as compactly as
//! values near zero. Set algebra works word-at-a-time over the aligned overlap of the
//! two operands.
//!
//! The container is a poor fit for a handful of values scattered across the whole
//! `i64` range: memory use is proportional to `(max - min) / 64` words. Prefer a
//! hashed set there.

pub mod addressing;
pub mod bit_set;
pub mod iter;
pub mod matched_map;
#[cfg(feature = "serde")]
mod serde_impl;
#[cfg(test)]
mod tests;
mod word_buffer;

pub use addressing::WORD_BITS;
pub use bit_set::BitSet;
pub use iter::Iter;
pub use matched_map::Combiner;
pub use wordset_common::{Result, error::Error, error::ErrorKind};
