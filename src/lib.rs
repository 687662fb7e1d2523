//! # euc
//!
//! Interactive preview shell for Euclidean pattern expressions. The pattern
//! engine itself lives in `euc-core`; this crate hosts it behind a line
//! editor so expressions can be tried out and rendered in dash notation.
//!
//! ## Modules
//!
//! - `commands`: The command registry (`help`, `:limit`, `:watch`, ...) and
//!   the handlers behind each command.
//! - `repl`: The Read-Eval-Print Loop, including the file watcher that
//!   re-evaluates a pattern file whenever it changes.

pub mod commands;
pub mod repl;

// Re-export the engine for convenience
pub use euc_core::{evaluate, EucError, EvalConfig, Evaluator, Pattern};
