//! Onset timing views of a pattern, for hosts that schedule by time rather
//! than by step index.

use super::core::Pattern;
use crate::types::time::{intervals, time, whole, Arc, Time};

impl Pattern {
    /// Onset positions normalised to one cycle, i.e. `i / len` for each onset
    pub fn norm(&self) -> Vec<Time> {
        let len = self.len() as i64;
        self.onsets()
            .into_iter()
            .map(|i| time(i as i64, len))
            .collect()
    }

    /// One arc per onset, lasting until the next onset or the end of the cycle
    pub fn onset_arcs(&self) -> Vec<Arc> {
        let starts = self.norm();
        starts
            .iter()
            .enumerate()
            .map(|(i, &start)| Arc::new(start, starts.get(i + 1).copied().unwrap_or(whole(1))))
            .collect()
    }

    /// Fraction of the cycle each onset holds before the next one
    pub fn onset_intervals(&self) -> Vec<Time> {
        intervals(&self.norm(), whole(1))
    }
}
