//! Tests for pattern module.

use super::core::Pattern;
use super::hex_onsets;
use crate::types::time::{time, whole, Arc};

fn pattern(dash: &str) -> Pattern {
    dash.chars().map(|c| c == 'x').collect()
}

#[test]
fn test_euclidean_constructor() {
    let p = Pattern::euclidean(3, 8);
    assert_eq!(p.len(), 8);
    assert_eq!(p.dash(), "x--x--x-");
    assert!(Pattern::euclidean(3, 0).is_empty());
}

#[test]
fn test_all_rests_and_all_onsets() {
    for n in 0..12 {
        let rests = Pattern::euclidean(0, n);
        assert_eq!(rests.len(), n);
        assert_eq!(rests.onset_count(), 0);

        let hits = Pattern::euclidean(n, n);
        assert_eq!(hits.len(), n);
        assert_eq!(hits.onset_count(), n);
    }
}

#[test]
fn test_cyclic_index() {
    let p = pattern("x--x");
    assert!(p[0]);
    assert!(p[3]);
    assert!(p[4]);
    assert!(!p[5]);
    assert_eq!(p.get(7), Some(true));
    assert_eq!(p.at(-1), Some(true));
    assert_eq!(p.at(-2), Some(false));
    assert_eq!(Pattern::new().get(0), None);
    assert_eq!(Pattern::new().at(-3), None);
}

#[test]
#[should_panic(expected = "empty pattern")]
fn test_index_empty_panics() {
    let _ = Pattern::new()[0];
}

#[test]
fn test_rotate_inverse() {
    let original = pattern("x--x--x-x-");
    let len = original.len() as i64;
    for k in 0..25 {
        let restored = original
            .clone()
            .rotate(k)
            .rotate(len - k.rem_euclid(len));
        assert_eq!(restored, original, "k = {k}");
    }
}

#[test]
fn test_rotate_negative_is_right() {
    assert_eq!(pattern("x---").rotate(-1).dash(), "-x--");
    assert_eq!(Pattern::new().rotate(5), Pattern::new());
}

#[test]
fn test_reverse_twice_is_identity() {
    let p = pattern("xx-x---x");
    assert_eq!(p.clone().reverse().reverse(), p);
}

#[test]
fn test_mirror_and_stretch_lengths() {
    for dash in ["", "x", "x-", "x--x--x-"] {
        let p = pattern(dash);
        assert_eq!(p.clone().mirror().len(), 2 * p.len());
        for k in 0..4 {
            assert_eq!(p.clone().stretch(k).len(), k * p.len());
        }
    }
    assert_eq!(pattern("x-").stretch(3).dash(), "xxx---");
    assert_eq!(pattern("xx-").mirror().dash(), "xx--xx");
}

#[test]
fn test_take_and_drop_lengths() {
    let p = pattern("x--x--x-");
    for n in 0..12 {
        assert_eq!(p.clone().take(n).len(), n.min(8));
        assert_eq!(p.clone().drop_steps(n).len(), 8usize.saturating_sub(n));
    }
}

#[test]
fn test_mask_ignores_out_of_range() {
    let p = pattern("----").mask([1, 3, 10], true);
    assert_eq!(p.dash(), "-x-x");
    let p = p.mask([3, 99], false);
    assert_eq!(p.dash(), "-x--");
}

#[test]
fn test_boolean_operators() {
    let a = pattern("xx--");
    let b = pattern("x-x-x-");
    assert_eq!((a.clone() | &b).dash(), "xxx-");
    assert_eq!((a.clone() & &b).dash(), "x---");
    assert_eq!((a.clone() ^ &b).dash(), "-xx-");
    assert_eq!((a.clone() - &b).dash(), "-x--");
    assert_eq!((!a).dash(), "--xx");
}

#[test]
fn test_concat_and_repeat() {
    assert_eq!(pattern("x-").concat(&pattern("--x")).dash(), "x---x");
    assert_eq!(pattern("x-").repeat(3).dash(), "x-x-x-");
    assert!(pattern("x-").repeat(0).is_empty());
}

#[test]
fn test_onsets() {
    let p = pattern("x--x--x-");
    assert_eq!(p.onsets(), vec![0, 3, 6]);
    assert_eq!(p.onset_count(), 3);
}

#[test]
fn test_norm() {
    let p = pattern("x--x--x-");
    assert_eq!(p.norm(), vec![whole(0), time(3, 8), time(3, 4)]);
    assert!(pattern("----").norm().is_empty());
    assert!(Pattern::new().norm().is_empty());
}

#[test]
fn test_onset_arcs() {
    let arcs = pattern("x-x-").onset_arcs();
    assert_eq!(
        arcs,
        vec![
            Arc::new(whole(0), time(1, 2)),
            Arc::new(time(1, 2), whole(1)),
        ]
    );
}

#[test]
fn test_onset_intervals() {
    let gaps = pattern("x--x--x-").onset_intervals();
    assert_eq!(gaps, vec![time(3, 8), time(3, 8), time(1, 4)]);
}

#[test]
fn test_from_hex() {
    assert_eq!(Pattern::from_hex("8892").dash(), "x---x---x--x--x-");
    assert_eq!(Pattern::from_hex("f 0").dash(), "xxxx----");
    // Non-hex characters read as 0
    assert_eq!(Pattern::from_hex("zA").dash(), "----x-x-");
    assert!(Pattern::from_hex("").is_empty());
}

#[test]
fn test_hex_onsets() {
    assert_eq!(
        hex_onsets("8892", whole(1)),
        vec![whole(0), whole(1), whole(2), time(11, 4), time(7, 2)]
    );
    assert_eq!(hex_onsets("8", time(1, 2)), vec![whole(0)]);
    assert_eq!(hex_onsets("1", whole(2)), vec![time(3, 2)]);
}

#[test]
fn test_parse_and_from_str() {
    let p: Pattern = "3-8".parse().unwrap();
    assert_eq!(p, Pattern::parse("3-8").unwrap());
    assert!("8".parse::<Pattern>().is_err());
}

#[test]
fn test_into_steps() {
    let steps = vec![true, false, true];
    let p = Pattern::from(steps.clone());
    assert_eq!(p.steps(), steps.as_slice());
    assert_eq!(p.onset_count(), 2);
    assert_eq!(p.into_steps(), steps);
}
