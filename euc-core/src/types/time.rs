//! Rational timing types for exact onset positions
//!
//! Onset times are kept as rationals so that positions like `1/3` or `5/12`
//! survive normalisation, quantisation and interval arithmetic without drift.

use num_rational::Ratio;
use num_traits::{ToPrimitive, Zero};

/// Exact time point using rationals (cycles or beats from origin)
pub type Time = Ratio<i64>;

/// A time arc [start, end) representing a span of time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc {
    pub start: Time,
    pub end: Time,
}

impl Arc {
    /// Create a new arc from start to end
    pub fn new(start: Time, end: Time) -> Self {
        Self { start, end }
    }

    /// Duration of this arc
    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

/// Helper to create Time from a ratio n/d
#[inline]
pub fn time(n: i64, d: i64) -> Time {
    Ratio::new(n, d)
}

/// Create Time from an integer
#[inline]
pub fn whole(n: i64) -> Time {
    Ratio::from_integer(n)
}

/// Convert rational to f64 for host consumption
#[inline]
pub fn to_f64(t: Time) -> f64 {
    t.to_f64().unwrap_or(0.0)
}

/// Truncate each time to a whole multiple of `step`.
///
/// A zero step leaves the times untouched.
pub fn quantize(times: &[Time], step: Time) -> Vec<Time> {
    if step.is_zero() {
        return times.to_vec();
    }
    times.iter().map(|t| (*t / step).trunc() * step).collect()
}

/// Running sum of `intervals` starting at zero, cycling through them until
/// `length` times are produced.
///
/// `length` defaults to one more than the number of intervals. An empty
/// interval list yields only the origin.
pub fn stack(intervals: &[Time], length: Option<usize>) -> Vec<Time> {
    let length = length.unwrap_or(intervals.len() + 1).max(1);
    let mut at = Time::zero();
    let mut times = vec![at];
    for gap in intervals.iter().cycle().take(length - 1) {
        at += *gap;
        times.push(at);
    }
    times
}

/// Gap from each time to the next one, after sorting.
///
/// The last gap closes at `length`, so the result always has as many entries
/// as `times`.
pub fn intervals(times: &[Time], length: Time) -> Vec<Time> {
    let mut sorted = times.to_vec();
    sorted.sort();
    sorted
        .iter()
        .enumerate()
        .map(|(i, t)| sorted.get(i + 1).copied().unwrap_or(length) - *t)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_creation() {
        let t = time(1, 3);
        assert_eq!(*t.numer(), 1);
        assert_eq!(*t.denom(), 3);
    }

    #[test]
    fn test_arc_duration() {
        let arc = Arc::new(time(1, 4), time(3, 4));
        assert_eq!(arc.duration(), time(1, 2));
    }

    #[test]
    fn test_conversion() {
        assert!((to_f64(time(1, 3)) - 0.333333333).abs() < 0.0001);
        assert_eq!(to_f64(time(3, 4)), 0.75);
    }

    #[test]
    fn test_stack() {
        assert_eq!(
            stack(&[time(3, 4)], Some(4)),
            vec![whole(0), time(3, 4), time(3, 2), time(9, 4)]
        );
        // Intervals cycle once exhausted
        assert_eq!(
            stack(&[whole(4), whole(3)], Some(4)),
            vec![whole(0), whole(4), whole(7), whole(11)]
        );
        assert_eq!(
            stack(&[time(1, 4), time(1, 2)], None),
            vec![whole(0), time(1, 4), time(3, 4)]
        );
        assert_eq!(stack(&[], Some(3)), vec![whole(0)]);
        assert_eq!(stack(&[time(1, 2)], Some(0)), vec![whole(0)]);
    }

    #[test]
    fn test_stack_then_intervals() {
        let gaps = vec![time(1, 4), time(1, 8), time(3, 8)];
        let times = stack(&gaps, None);
        // The last stacked time closes the final gap
        assert_eq!(intervals(&times[..3], times[3]), gaps);
    }

    #[test]
    fn test_quantize() {
        let times = vec![time(1, 3), time(5, 8), whole(2)];
        assert_eq!(
            quantize(&times, time(1, 4)),
            vec![time(1, 4), time(1, 2), whole(2)]
        );
        assert_eq!(quantize(&times, whole(0)), times);
    }

    #[test]
    fn test_intervals() {
        // Unsorted input is sorted first, last gap runs to the length
        let times = vec![time(3, 4), whole(0), time(1, 4)];
        assert_eq!(
            intervals(&times, whole(1)),
            vec![time(1, 4), time(1, 2), time(1, 4)]
        );
        assert!(intervals(&[], whole(1)).is_empty());
    }
}
