//! Pattern type: an immutable, cyclic sequence of onsets and rests
//!
//! Patterns are produced by the Euclidean generator or by evaluating a
//! pattern expression such as `"3-8-r1 + 1-8"`, and are read by hosts as
//! `pattern[step % len]` on every tick.

mod core;
mod euclidean;
mod hex;
mod onsets;

#[cfg(test)]
mod tests;

// Re-export public types
pub use core::Pattern;
pub use euclidean::euclidean;
pub use hex::hex_onsets;
