//! Euclidean rhythm generation.

/// Distribute `pulses` onsets as evenly as possible across `steps` slots.
///
/// Slot `i` is an onset when `floor(i * pulses / steps)` steps up from the
/// previous slot, and slot 0 is an onset whenever `pulses > 0`. This puts the
/// first onset on the downbeat, e.g. `(3, 8)` gives `x--x--x-`.
pub fn euclidean(pulses: usize, steps: usize) -> Vec<bool> {
    if steps == 0 {
        return vec![];
    }
    if pulses >= steps {
        return vec![true; steps];
    }
    if pulses == 0 {
        return vec![false; steps];
    }

    // u128 keeps i * pulses from overflowing for any usize input
    let bucket = |i: usize| (i as u128 * pulses as u128) / steps as u128;
    (0..steps)
        .map(|i| i == 0 || bucket(i) != bucket(i - 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dash(steps: &[bool]) -> String {
        steps.iter().map(|&s| if s { 'x' } else { '-' }).collect()
    }

    #[test]
    fn test_known_rhythms() {
        assert_eq!(dash(&euclidean(3, 8)), "x--x--x-");
        assert_eq!(dash(&euclidean(1, 8)), "x-------");
        assert_eq!(dash(&euclidean(5, 8)), "x-x-xx-x");
        assert_eq!(dash(&euclidean(2, 5)), "x--x-");
        assert_eq!(dash(&euclidean(4, 16)), "x---x---x---x---");
    }

    #[test]
    fn test_edges() {
        assert!(euclidean(0, 0).is_empty());
        assert!(euclidean(5, 0).is_empty());
        assert_eq!(euclidean(0, 6), vec![false; 6]);
        assert_eq!(euclidean(6, 6), vec![true; 6]);
        assert_eq!(euclidean(9, 6), vec![true; 6]);
    }

    #[test]
    fn test_onset_count() {
        for steps in 0..24 {
            for pulses in 0..30 {
                let rhythm = euclidean(pulses, steps);
                assert_eq!(rhythm.len(), steps);
                let onsets = rhythm.iter().filter(|&&s| s).count();
                assert_eq!(onsets, pulses.min(steps), "({pulses}, {steps})");
            }
        }
    }
}
