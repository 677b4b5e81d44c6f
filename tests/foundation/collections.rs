//! Integration tests for persistent collections
//!
//! Tests LtVec, LtSet, LtMap with structural sharing, immutability, and
//! canonical ordering.

use tenet_foundation::collections::{LtMap, LtSet, LtVec};

// =============================================================================
// LtVec
// =============================================================================

#[test]
fn vector_empty() {
    let v: LtVec<i64> = LtVec::new();
    assert!(v.is_empty());
    assert_eq!(v.len(), 0);
    assert_eq!(v.first(), None);
}

#[test]
fn vector_push_back_keeps_order() {
    let v = LtVec::new().push_back(3).push_back(1).push_back(2);
    assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    assert_eq!(v.first(), Some(&3));
    assert_eq!(v.last(), Some(&2));
}

#[test]
fn vector_immutability() {
    let v1 = LtVec::new().push_back(1);
    let v2 = v1.push_back(2);

    assert_eq!(v1.len(), 1);
    assert_eq!(v2.len(), 2);
}

#[test]
fn vector_update() {
    let v: LtVec<i64> = (0..5).collect();
    let updated = v.update(2, 20).unwrap();
    assert_eq!(updated.get(2), Some(&20));
    assert_eq!(v.get(2), Some(&2));
    assert!(v.update(10, 0).is_none());
}

#[test]
fn vector_structural_sharing() {
    let mut v = LtVec::new();
    for i in 0..1000 {
        v = v.push_back(i);
    }

    let v2 = v.clone();
    let v3 = v2.push_back(1000);
    assert_eq!(v.len(), 1000);
    assert_eq!(v3.len(), 1001);
}

// =============================================================================
// LtSet
// =============================================================================

#[test]
fn set_is_sorted_and_deduplicated() {
    let s: LtSet<i64> = [5, 1, 3, 1, 5].into_iter().collect();
    assert_eq!(s.len(), 3);
    assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
}

#[test]
fn set_insert_and_remove() {
    let s = LtSet::new().insert("b").insert("a").insert("b");
    assert_eq!(s.len(), 2);
    assert!(s.contains(&"a"));

    let removed = s.remove(&"a");
    assert!(!removed.contains(&"a"));
    assert!(s.contains(&"a"));
    assert_eq!(removed.remove(&"zzz").len(), 1);
}

#[test]
fn set_algebra() {
    let a: LtSet<i64> = [1, 2, 3].into_iter().collect();
    let b: LtSet<i64> = [2, 3, 4].into_iter().collect();

    assert_eq!(a.union(&b).iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(a.intersection(&b).iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(a.difference(&b).iter().copied().collect::<Vec<_>>(), vec![1]);
    let mut diff: Vec<i64> = a.symmetric_difference(&b).copied().collect();
    diff.sort_unstable();
    assert_eq!(diff, vec![1, 4]);
}

#[test]
fn set_equality_is_order_independent() {
    let a: LtSet<i64> = [3, 2, 1].into_iter().collect();
    let b = LtSet::new().insert(1).insert(2).insert(3);
    assert_eq!(a, b);
    assert!(a.symmetric_difference(&b).next().is_none());
    assert_ne!(a, b.remove(&2));
}

// =============================================================================
// LtMap
// =============================================================================

#[test]
fn map_iterates_in_key_order() {
    let m: LtMap<&str, i64> = [("c", 3), ("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(m.keys().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(m.values().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn map_last_duplicate_wins() {
    let m: LtMap<&str, i64> = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
    assert_eq!(m.len(), 2);
    assert_eq!(m.get(&"a"), Some(&3));
}

#[test]
fn map_insert_replaces() {
    let m = LtMap::new().insert("k", 1);
    let m2 = m.insert("k", 2);
    assert_eq!(m.get(&"k"), Some(&1));
    assert_eq!(m2.get(&"k"), Some(&2));
    assert_eq!(m2.len(), 1);
}

#[test]
fn map_remove_and_union() {
    let a: LtMap<i64, &str> = [(1, "a"), (2, "b")].into_iter().collect();
    let b: LtMap<i64, &str> = [(2, "B"), (3, "C")].into_iter().collect();

    let merged = a.union(&b);
    assert_eq!(merged.len(), 3);
    assert_eq!(merged.get(&2), Some(&"B"));

    let trimmed = merged.remove(&1);
    assert!(!trimmed.contains_key(&1));
    assert!(merged.contains_key(&1));
}

#[test]
fn map_union_prefers_other_regardless_of_size() {
    let small: LtMap<i64, &str> = [(1, "mine")].into_iter().collect();
    let large: LtMap<i64, &str> = [(1, "theirs"), (2, "b"), (3, "c")].into_iter().collect();

    assert_eq!(small.union(&large).get(&1), Some(&"theirs"));
    assert_eq!(large.union(&small).get(&1), Some(&"mine"));
}

#[test]
fn maps_with_same_pairs_are_equal() {
    let a: LtMap<i64, i64> = [(1, 10), (2, 20)].into_iter().collect();
    let b = LtMap::new().insert(2, 20).insert(1, 10);
    assert_eq!(a, b);
    assert_ne!(a, b.insert(2, 21));
}
