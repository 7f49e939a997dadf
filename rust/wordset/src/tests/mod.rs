mod matched_map_tests;
#[cfg(feature = "serde")]
mod serde_tests;
