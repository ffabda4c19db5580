//! Log bloom construction.
//!
//! Each log contributes its address and every 32-byte topic to the filter;
//! log data is not bloomed.

use alloy_primitives::{Bloom, Log};

/// Folds the bloomable fields of `logs` into a single filter.
pub fn logs_bloom<'a>(logs: impl IntoIterator<Item = &'a Log>) -> Bloom {
    let mut bloom = Bloom::ZERO;
    for log in logs {
        bloom.accrue_log(log);
    }
    bloom
}
