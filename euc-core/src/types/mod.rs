// euc-core/src/types/mod.rs

pub mod eval_config;
pub mod pattern;
pub mod time;

pub use eval_config::EvalConfig;
pub use pattern::{euclidean, hex_onsets, Pattern};
pub use time::{intervals, quantize, stack, time, to_f64, whole, Arc, Time};
