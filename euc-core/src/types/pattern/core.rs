//! Core Pattern struct and implementation.

use super::euclidean::euclidean;
use crate::parser::error::EucError;
#[cfg(feature = "colored")]
use colored::*;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Index, Not, Sub};
use std::str::FromStr;

/// A cyclic onset pattern
///
/// `true` marks an onset (hit), `false` a rest. Indexing wraps around, so a
/// host walking a timeline can ask for `pattern[tick]` without reducing the
/// tick itself. Every transformation consumes the pattern and hands back a
/// new one; there is no way to edit steps in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    steps: Vec<bool>,
}

impl Pattern {
    /// Create an empty pattern
    pub fn new() -> Self {
        Pattern { steps: Vec::new() }
    }

    /// Create a pattern with given steps
    pub fn with_steps(steps: Vec<bool>) -> Self {
        Pattern { steps }
    }

    /// Maximally even distribution of `pulses` onsets over `steps` slots
    pub fn euclidean(pulses: usize, steps: usize) -> Self {
        Pattern::with_steps(euclidean(pulses, steps))
    }

    /// Evaluate a pattern expression, e.g. `"3-8 + 1-8-r4"`
    pub fn parse(notation: &str) -> Result<Pattern, EucError> {
        crate::parser::evaluate(notation)
    }

    /// Number of steps in one cycle
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if this pattern has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps of one cycle, in order
    pub fn steps(&self) -> &[bool] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<bool> {
        self.steps
    }

    /// Step at `index`, wrapping around the cycle. `None` only when empty.
    pub fn get(&self, index: usize) -> Option<bool> {
        if self.steps.is_empty() {
            return None;
        }
        Some(self.steps[index % self.steps.len()])
    }

    /// Like [`get`](Self::get) but accepts negative positions (counted from the end)
    pub fn at(&self, index: i64) -> Option<bool> {
        if self.steps.is_empty() {
            return None;
        }
        let len = self.steps.len() as i64;
        Some(self.steps[index.rem_euclid(len) as usize])
    }

    /// Zero-based positions of every onset
    pub fn onsets(&self) -> Vec<usize> {
        self.steps
            .iter()
            .enumerate()
            .filter_map(|(i, &hit)| hit.then_some(i))
            .collect()
    }

    pub fn onset_count(&self) -> usize {
        self.steps.iter().filter(|&&hit| hit).count()
    }

    /// Keep the first `n` steps
    pub fn take(mut self, n: usize) -> Self {
        self.steps.truncate(n);
        self
    }

    /// Drop the first `n` steps
    pub fn drop_steps(mut self, n: usize) -> Self {
        if n >= self.steps.len() {
            self.steps.clear();
        } else {
            self.steps = self.steps.split_off(n);
        }
        self
    }

    /// `n` back-to-back copies of the pattern (zero copies is empty)
    pub fn repeat(self, n: usize) -> Self {
        Pattern::with_steps(self.steps.repeat(n))
    }

    /// Rotate steps left by n positions
    /// Negative n rotates right. An empty pattern is returned unchanged.
    pub fn rotate(mut self, n: i64) -> Self {
        if self.steps.is_empty() {
            return self;
        }
        let shift = n.rem_euclid(self.steps.len() as i64) as usize;
        self.steps.rotate_left(shift);
        self
    }

    /// The pattern followed by its reverse
    pub fn mirror(mut self) -> Self {
        let reversed: Vec<bool> = self.steps.iter().rev().copied().collect();
        self.steps.extend(reversed);
        self
    }

    /// Repeat each step n times
    pub fn stretch(self, n: usize) -> Self {
        let mut stretched = Vec::with_capacity(self.steps.len().saturating_mul(n));
        for step in self.steps {
            stretched.extend(std::iter::repeat_n(step, n));
        }
        Pattern::with_steps(stretched)
    }

    pub fn reverse(mut self) -> Self {
        self.steps.reverse();
        self
    }

    /// Swap onsets and rests
    pub fn negate(self) -> Self {
        self.steps.into_iter().map(|hit| !hit).collect()
    }

    /// Force the listed positions to `value`
    /// Positions past the end of the pattern are ignored.
    pub fn mask<I>(mut self, positions: I, value: bool) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        for position in positions {
            if let Some(step) = self.steps.get_mut(position) {
                *step = value;
            }
        }
        self
    }

    /// Concatenate another pattern onto this one
    pub fn concat(mut self, other: &Pattern) -> Self {
        self.steps.extend_from_slice(&other.steps);
        self
    }

    /// Combine `other` into this pattern step by step with `f(self, other)`.
    ///
    /// Only positions present in both are touched: steps of `other` beyond
    /// this pattern's end are discarded and the length never changes.
    pub fn merge<F>(mut self, other: &Pattern, f: F) -> Self
    where
        F: Fn(bool, bool) -> bool,
    {
        for (step, &incoming) in self.steps.iter_mut().zip(other.steps.iter()) {
            *step = f(*step, incoming);
        }
        self
    }

    /// Dash notation: `x` for an onset, `-` for a rest
    pub fn dash(&self) -> String {
        self.steps
            .iter()
            .map(|&hit| if hit { 'x' } else { '-' })
            .collect()
    }
}

impl Not for Pattern {
    type Output = Pattern;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl BitOr<&Pattern> for Pattern {
    type Output = Pattern;

    fn bitor(self, rhs: &Pattern) -> Self::Output {
        self.merge(rhs, |a, b| a || b)
    }
}

impl BitAnd<&Pattern> for Pattern {
    type Output = Pattern;

    fn bitand(self, rhs: &Pattern) -> Self::Output {
        self.merge(rhs, |a, b| a && b)
    }
}

impl BitXor<&Pattern> for Pattern {
    type Output = Pattern;

    fn bitxor(self, rhs: &Pattern) -> Self::Output {
        self.merge(rhs, |a, b| a ^ b)
    }
}

// Removes the onsets of rhs (a AND NOT b)
impl Sub<&Pattern> for Pattern {
    type Output = Pattern;

    fn sub(self, rhs: &Pattern) -> Self::Output {
        self.merge(rhs, |a, b| a && !b)
    }
}

// Cyclic index access to steps
impl Index<usize> for Pattern {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(!self.steps.is_empty(), "cannot index into an empty pattern");
        &self.steps[index % self.steps.len()]
    }
}

impl From<Vec<bool>> for Pattern {
    fn from(steps: Vec<bool>) -> Self {
        Pattern::with_steps(steps)
    }
}

impl FromIterator<bool> for Pattern {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Pattern::with_steps(iter.into_iter().collect())
    }
}

impl FromStr for Pattern {
    type Err = EucError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::parse(s)
    }
}

#[cfg(feature = "colored")]
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", "[]".bright_black());
        }
        for &hit in &self.steps {
            if hit {
                write!(f, "{}", "x".bright_green().bold())?;
            } else {
                write!(f, "{}", "-".bright_black())?;
            }
        }
        Ok(())
    }
}

// Plain Display impl for non-colored builds (WASM)
#[cfg(not(feature = "colored"))]
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }
        write!(f, "{}", self.dash())
    }
}
