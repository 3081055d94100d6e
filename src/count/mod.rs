//! Word tokenization and frequency counting
//!
//! This is the single-threaded core shared by every execution strategy:
//! [`tokenize`] turns bytes into lowercase words, [`count_tokens`] folds them
//! into a [`CountMap`], and [`merge_all`] combines per-worker maps.

pub mod counter;
pub mod tokenizer;

pub use counter::{CountMap, count_tokens, merge_all};
pub use tokenizer::{Tokens, tokenize};

/// Single-threaded count of a whole buffer
pub fn count_buffer(bytes: &[u8]) -> CountMap {
    count_tokens(tokenize(bytes))
}
