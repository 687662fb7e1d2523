//! # euc-core
//!
//! WASM-compatible engine for Euclidean pattern expressions. Turns compact
//! notation such as `"3-8-r1 + 1-8-<(4)"` into a cyclic boolean [`Pattern`]
//! that a host scheduler can read step by step.
//!
//! ## Notation
//!
//! - Segment: `PULSES-STEPS`, e.g. `3-8` → `x--x--x-`
//! - Modifiers, chained with `-` and applied left to right:
//!   `>(i,j)` / `<(i,j)` force positions off / on, `tN` take, `dN` drop,
//!   `nN` repeat, `rN` rotate left, `sN` stretch, `m` mirror, `R` reverse,
//!   `!` negate
//! - Composition between segments: juxtaposition concatenates; `+` or,
//!   `-` and-not, `^` xor, `&` and (index-wise, never changing the length)
//!
//! ## Features
//!
//! - **serde**: Enable JSON serialization for web interop
//! - **wasm**: Enable WASM bindings via wasm-bindgen
//! - **colored**: Enable colored terminal output (disabled in WASM)
//!
//! ## Example
//!
//! ```
//! use euc_core::evaluate;
//!
//! let pattern = evaluate("1-4 + 1-4-r2").unwrap();
//! assert_eq!(pattern.dash(), "x-x-");
//! assert!(pattern[6]);
//! ```

pub mod parser;
pub mod types;
pub mod wasm;

// Re-export commonly used types
pub use parser::{evaluate, EucError, Evaluator};
pub use types::{EvalConfig, Pattern};

// Re-export WASM functions when wasm feature is enabled
pub use wasm::{tokenize_for_highlighting, HighlightSpan};
