use crate::{BitSet, Combiner};

fn set(values: &[i64]) -> BitSet {
    values.iter().collect()
}

fn members(set: &BitSet) -> Vec<i64> {
    set.iter().collect()
}

#[test]
fn test_combiner_dominance_flags() {
    for combiner in [Combiner::Or, Combiner::And, Combiner::AndNot, Combiner::Xor] {
        let f = |a: bool, b: bool| combiner.apply(a as u64, b as u64) != 0;
        assert_eq!(
            combiner.left_false_dominant(),
            !f(false, true),
            "{combiner:?} left"
        );
        assert_eq!(
            combiner.right_false_dominant(),
            !f(true, false),
            "{combiner:?} right"
        );
        // Non-dominant sides pass the other operand through.
        if !combiner.left_false_dominant() {
            assert!(!f(false, false) && f(false, true));
        }
        if !combiner.right_false_dominant() {
            assert!(!f(false, false) && f(true, false));
        }
    }
}

#[test]
fn test_scenario_small_sets() {
    let a = set(&[1, 2, 3]);
    let b = set(&[3, 4, 5]);
    assert_eq!(members(&a.union(&b)), vec![1, 2, 3, 4, 5]);
    assert_eq!(members(&a.intersection(&b)), vec![3]);
    assert_eq!(members(&a.difference(&b)), vec![1, 2]);
    assert_eq!(members(&a.symmetric_difference(&b)), vec![1, 2, 4, 5]);
}

#[test]
fn test_empty_operands() {
    let a = set(&[1, 200]);
    let empty = BitSet::new();
    for combiner in [Combiner::Or, Combiner::And, Combiner::AndNot, Combiner::Xor] {
        let mut left = empty.clone();
        left.merge_with(&a, combiner);
        let expected = match combiner {
            Combiner::Or | Combiner::Xor => a.clone(),
            Combiner::And | Combiner::AndNot => BitSet::new(),
        };
        assert_eq!(left, expected, "empty {combiner:?} a");

        let mut left = a.clone();
        left.merge_with(&empty, combiner);
        let expected = match combiner {
            Combiner::And => BitSet::new(),
            _ => a.clone(),
        };
        assert_eq!(left, expected, "a {combiner:?} empty");
    }

    let mut left = BitSet::new();
    left.intersect_with(&a);
    assert_eq!(left.word_offset(), None);
    let mut left = a.clone();
    left.intersect_with(&BitSet::new());
    assert_eq!(left.word_offset(), None);
}

#[test]
fn test_union_extends_both_ends() {
    let mut a = BitSet::from_range(1000..=1100);
    let b = set(&[-5000, 1050, 9000]);
    a.union_with(&b);
    assert_eq!(a.len(), 103);
    assert_eq!(a.extrema().unwrap(), (-5000, 9000));
    assert_eq!(a.word_offset(), Some((-5000_i64).div_euclid(64)));
    assert_eq!(a.words().len() as i64, 9000 / 64 - (-5000_i64).div_euclid(64) + 1);
}

#[test]
fn test_union_disjoint_windows_fills_gap_with_zeros() {
    // Stale bits left in the buffer slack must not leak into the gap.
    let mut a = BitSet::from_range(0..=6399);
    a.retain(|v| v >= 6336);
    a.compact();
    assert_eq!(a.word_offset(), Some(99));
    let b = set(&[64 * 50]);
    a.union_with(&b);
    assert_eq!(a.len(), 65);
    assert_eq!(a.word_offset(), Some(50));
    assert_eq!(&members(&a)[..2], &[3200, 6336]);
    assert!(a.words()[1..49].iter().all(|&w| w == 0));

    let mut c = set(&[0]);
    c.union_with(&set(&[64 * 50]));
    assert_eq!(members(&c), vec![0, 3200]);
    assert_eq!(c.words().len(), 51);
}

#[test]
fn test_intersection_truncates_both_ends() {
    let mut a = BitSet::from_range(-1000..=1000);
    let b = set(&[-10_000, -3, 7, 10_000]);
    a.intersect_with(&b);
    assert_eq!(members(&a), vec![-3, 7]);
    assert_eq!(a.word_offset(), Some(-1));
    assert_eq!(a.words().len(), 2);
}

#[test]
fn test_intersection_disjoint_is_canonical_empty() {
    let mut a = BitSet::from_range(0..=5);
    a.intersect_with(&BitSet::from_range(10_000..=10_005));
    assert!(a.is_empty());
    assert_eq!(a.word_offset(), None);

    let mut b = BitSet::from_range(10_000..=10_005);
    b.intersect_with(&BitSet::from_range(0..=5));
    assert_eq!(b.word_offset(), None);

    // Overlapping windows without common members.
    let mut c = set(&[1, 100]);
    c.intersect_with(&set(&[2, 101]));
    assert_eq!(c.word_offset(), None);
}

#[test]
fn test_difference_never_extends() {
    let mut a = BitSet::from_range(100..=199);
    let b = set(&[-7000, 150, 7000]);
    a.difference_with(&b);
    assert_eq!(a.len(), 99);
    assert!(!a.contains(150));
    assert_eq!(a.extrema().unwrap(), (100, 199));
    assert_eq!(a.words().len(), 3);

    let mut whole = BitSet::from_range(64..=127);
    whole.difference_with(&BitSet::from_range(0..=1000));
    assert_eq!(whole.word_offset(), None);
}

#[test]
fn test_symmetric_difference_extends_and_cancels() {
    let mut a = set(&[1, 2, 3]);
    a.symmetric_difference_with(&set(&[-500, 3, 500]));
    assert_eq!(members(&a), vec![-500, 1, 2, 500]);

    let mut b = set(&[-500, 500]);
    b.symmetric_difference_with(&set(&[-500, 500]));
    assert!(b.is_empty());
    assert_eq!(b.word_offset(), None);

    let mut c = set(&[-500, 0, 500]);
    c.symmetric_difference_with(&set(&[-500, 500]));
    assert_eq!(c.words(), &[1]);
    assert_eq!(c.word_offset(), Some(0));
}

#[test]
fn test_merge_with_zero_padded_operands() {
    let mut a = set(&[-1000, 5, 1000]);
    a.remove(-1000);
    a.remove(1000);
    let mut b = set(&[-2000, 6, 2000]);
    b.remove(-2000);
    b.remove(2000);

    assert_eq!(members(&a.union(&b)), vec![5, 6]);
    assert!(a.intersection(&b).is_empty());
    assert_eq!(members(&a.difference(&b)), vec![5]);
    assert_eq!(members(&a.symmetric_difference(&b)), vec![5, 6]);
}

#[test]
fn test_operators() {
    let a = set(&[1, 2, 3]);
    let b = set(&[3, 4, 5]);
    assert_eq!(&a | &b, set(&[1, 2, 3, 4, 5]));
    assert_eq!(&a & &b, set(&[3]));
    assert_eq!(&a - &b, set(&[1, 2]));
    assert_eq!(&a ^ &b, set(&[1, 2, 4, 5]));

    let mut c = a.clone();
    c |= &b;
    assert_eq!(c, set(&[1, 2, 3, 4, 5]));
    c &= &a;
    assert_eq!(c, a);
    c -= &set(&[1]);
    assert_eq!(c, set(&[2, 3]));
    c ^= &set(&[3, 4]);
    assert_eq!(c, set(&[2, 4]));
}

#[test]
fn test_self_merge() {
    let a = BitSet::from_range(-300..=300);
    let mut b = a.clone();
    b.union_with(&a);
    assert_eq!(b, a);
    b.intersect_with(&a);
    assert_eq!(b, a);
    b.difference_with(&a);
    assert_eq!(b.word_offset(), None);
    let mut c = a.clone();
    c.symmetric_difference_with(&a);
    assert_eq!(c.word_offset(), None);
}
