//! Hexadecimal step notation.
//!
//! Each hex digit spells four steps, most significant bit first, so `"8"` is
//! `x---` and `"a"` is `x-x-`. Whitespace is ignored and any character that
//! is not a hex digit reads as `0`.

use super::core::Pattern;
use crate::types::time::{time, Time};

impl Pattern {
    /// Build a pattern from hex digits, e.g. `"8892"` → `x---x---x--x--x-`
    pub fn from_hex(digits: &str) -> Self {
        digits
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(|c| {
                let nibble = c.to_digit(16).unwrap_or(0);
                (0..4).rev().map(move |bit| nibble & (1 << bit) != 0)
            })
            .collect()
    }
}

/// Onset times of a hex pattern, one time unit per digit scaled by `scale`.
///
/// `"8892"` with a scale of 1 gives `0, 1, 2, 11/4, 7/2`.
pub fn hex_onsets(digits: &str, scale: Time) -> Vec<Time> {
    Pattern::from_hex(digits)
        .onsets()
        .into_iter()
        .map(|i| time(i as i64, 4) * scale)
        .collect()
}
