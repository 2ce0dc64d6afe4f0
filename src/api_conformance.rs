//! Verifies that the whole public API of [`IntSet`] agrees with
//! `std::collections::BTreeSet<i64>`.

use crate::{symmetric_difference, union, IntSet};

#[test]
fn api_conformance() {
    let mut set = IntSet::new();
    let mut std = std::collections::BTreeSet::new();
    let n = 10_i64;

    // Insert elements.
    for i in 0..n {
        assert_eq!(set.insert(i), std.insert(i));
    }

    // Contains.
    for i in 0..n {
        assert_eq!(set.contains(i), std.contains(&i));
    }

    // is_empty and len.
    // Note: set.len() returns u64, std.len() returns usize.
    assert_eq!(set.is_empty(), std.is_empty());
    assert_eq!(set.len(), std.len() as u64);

    // First and last.
    // Note: set.first()/last() returns Option<i64>, std returns Option<&i64>.
    assert_eq!(set.first(), std.first().copied());
    assert_eq!(set.last(), std.last().copied());

    // Iteration.
    // Note: set.iter() yields i64, std.iter() yields &i64.
    let items: Vec<_> = set.iter().collect();
    let std_items: Vec<_> = std.iter().copied().collect();
    assert_eq!(items, std_items);

    // IntoIterator by reference.
    let items: Vec<_> = (&set).into_iter().collect();
    assert_eq!(items, std_items);

    // Range.
    let range_start = 3;
    let range_end = 7;
    let range: Vec<_> = set.range(range_start..range_end).collect();
    let std_range: Vec<_> = std.range(range_start..range_end).copied().collect();
    assert_eq!(range, std_range);

    // Debug.
    assert_eq!(format!("{set:?}"), format!("{std:?}"));

    // pop_first / pop_last.
    let mut set_temp = set.clone();
    let mut std_temp = std.clone();
    assert_eq!(set_temp.pop_first(), std_temp.pop_first());
    assert_eq!(set_temp.pop_last(), std_temp.pop_last());

    // Remove elements.
    for i in 0..n {
        assert_eq!(set.remove(i), std.remove(&i));
    }
    assert!(set.is_empty());
    assert!(std.is_empty());

    // Clear.
    for i in 0..n {
        set.insert(i);
        std.insert(i);
    }
    set.clear();
    std.clear();
    assert!(set.is_empty());
    assert!(std.is_empty());

    // FromIterator and Extend.
    let mut set: IntSet = (0..n).filter(|i| i % 2 == 0).collect();
    let mut std: std::collections::BTreeSet<i64> = (0..n).filter(|i| i % 2 == 0).collect();
    set.extend(0..3);
    std.extend(0..3);
    assert_eq!(set.iter().collect::<Vec<_>>(), std.iter().copied().collect::<Vec<_>>());

    let mut set2 = IntSet::new();
    let mut std2 = std::collections::BTreeSet::new();

    for i in 0..n {
        if i % 3 == 0 {
            set2.insert(i);
            std2.insert(i);
        }
    }

    // is_disjoint, is_subset, is_superset.
    assert_eq!(set.is_disjoint(&set2), std.is_disjoint(&std2));
    assert_eq!(set.is_subset(&set2), std.is_subset(&std2));
    assert_eq!(set.is_superset(&set2), std.is_superset(&std2));

    // union
    let set_union: Vec<_> = set.union(&set2).collect();
    let std_union: Vec<_> = std.union(&std2).copied().collect();
    assert_eq!(set_union, std_union);
    assert_eq!(union(&set, &set2).iter().collect::<Vec<_>>(), std_union);

    // intersection
    let set_inter: Vec<_> = set.intersection(&set2).collect();
    let std_inter: Vec<_> = std.intersection(&std2).copied().collect();
    assert_eq!(set_inter, std_inter);

    // symmetric_difference
    let set_diff: Vec<_> = set.symmetric_difference(&set2).collect();
    let std_diff: Vec<_> = std.symmetric_difference(&std2).copied().collect();
    assert_eq!(set_diff, std_diff);
    assert_eq!(
        symmetric_difference(&set, &set2).iter().collect::<Vec<_>>(),
        std_diff
    );
}
