use std::cell::RefCell;
use std::collections::BTreeMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::ops::Bound;
use std::rc::Rc;

use beni_tree::rb_tree;
use beni_tree::{KeyNotFound, RbTree};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// Keys from a range smaller than `TEST_SIZE`, so collisions are common.
fn key_strategy() -> impl Strategy<Value = i64> {
    -1_000i64..1_000i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

fn bound_strategy() -> impl Strategy<Value = Bound<i64>> {
    prop_oneof![
        key_strategy().prop_map(Bound::Included),
        key_strategy().prop_map(Bound::Excluded),
        Just(Bound::Unbounded),
    ]
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum TreeOp {
    Insert(i64, i64),
    Remove(i64),
    Get(i64),
    At(i64),
    ContainsKey(i64),
    GetKeyValue(i64),
    FirstKeyValue,
    LastKeyValue,
    PopFirst,
    PopLast,
}

fn tree_op_strategy() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        5 => (key_strategy(), value_strategy()).prop_map(|(k, v)| TreeOp::Insert(k, v)),
        3 => key_strategy().prop_map(TreeOp::Remove),
        2 => key_strategy().prop_map(TreeOp::Get),
        1 => key_strategy().prop_map(TreeOp::At),
        1 => key_strategy().prop_map(TreeOp::ContainsKey),
        1 => key_strategy().prop_map(TreeOp::GetKeyValue),
        1 => Just(TreeOp::FirstKeyValue),
        1 => Just(TreeOp::LastKeyValue),
        1 => Just(TreeOp::PopFirst),
        1 => Just(TreeOp::PopLast),
    ]
}

#[derive(Debug, Clone)]
enum MultiOp {
    InsertMulti(i64, u32),
    Remove(i64),
    Count(i64),
    EqualRange(i64),
}

fn multi_op_strategy() -> impl Strategy<Value = MultiOp> {
    // A narrow key range so keys repeat often.
    let key = -50i64..50i64;
    prop_oneof![
        5 => (key.clone(), any::<u32>()).prop_map(|(k, v)| MultiOp::InsertMulti(k, v)),
        3 => key.clone().prop_map(MultiOp::Remove),
        1 => key.clone().prop_map(MultiOp::Count),
        1 => key.prop_map(MultiOp::EqualRange),
    ]
}

fn tree_of<I: IntoIterator<Item = i64>>(keys: I) -> RbTree<i64, i64> {
    keys.into_iter().map(|k| (k, k * 10)).collect()
}

// ─── Unique-key operations against BTreeMap ──────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both RbTree and BTreeMap and asserts
    /// identical results at every step. A repeated `insert` keeps the stored value.
    #[test]
    fn tree_ops_match_btreemap(ops in proptest::collection::vec(tree_op_strategy(), TEST_SIZE)) {
        let mut tree: RbTree<i64, i64> = RbTree::new();
        let mut model: BTreeMap<i64, i64> = BTreeMap::new();

        for op in &ops {
            match op {
                TreeOp::Insert(k, v) => {
                    let (cursor, inserted) = tree.insert(*k, *v);
                    let stored = *cursor.value().expect("insert yields a live cursor");
                    prop_assert_eq!(inserted, !model.contains_key(k), "insert({}, {})", k, v);
                    prop_assert_eq!(stored, *model.entry(*k).or_insert(*v), "insert({}, {})", k, v);
                }
                TreeOp::Remove(k) => {
                    prop_assert_eq!(tree.remove(k), model.remove(k), "remove({})", k);
                }
                TreeOp::Get(k) => {
                    prop_assert_eq!(tree.get(k), model.get(k), "get({})", k);
                }
                TreeOp::At(k) => {
                    prop_assert_eq!(tree.at(k), model.get(k).ok_or(KeyNotFound), "at({})", k);
                }
                TreeOp::ContainsKey(k) => {
                    prop_assert_eq!(tree.contains_key(k), model.contains_key(k), "contains_key({})", k);
                }
                TreeOp::GetKeyValue(k) => {
                    prop_assert_eq!(tree.get_key_value(k), model.get_key_value(k), "get_key_value({})", k);
                }
                TreeOp::FirstKeyValue => {
                    prop_assert_eq!(tree.first_key_value(), model.first_key_value(), "first_key_value");
                }
                TreeOp::LastKeyValue => {
                    prop_assert_eq!(tree.last_key_value(), model.last_key_value(), "last_key_value");
                }
                TreeOp::PopFirst => {
                    prop_assert_eq!(tree.pop_first(), model.pop_first(), "pop_first");
                }
                TreeOp::PopLast => {
                    prop_assert_eq!(tree.pop_last(), model.pop_last(), "pop_last");
                }
            }
            prop_assert_eq!(tree.len(), model.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(tree.is_empty(), model.is_empty(), "is_empty mismatch after {:?}", op);
        }

        let items: Vec<_> = tree.iter().map(|(&k, &v)| (k, v)).collect();
        let expected: Vec<_> = model.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(items, expected);
    }

    /// Tests that every iterator flavor matches BTreeMap after random insertions.
    #[test]
    fn iter_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let tree: RbTree<i64, i64> = entries.iter().copied().collect();
        let mut model: BTreeMap<i64, i64> = BTreeMap::new();
        for &(k, v) in &entries {
            model.entry(k).or_insert(v);
        }

        let items: Vec<_> = tree.iter().map(|(&k, &v)| (k, v)).collect();
        let expected: Vec<_> = model.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&items, &expected, "iter() mismatch");

        let rev: Vec<_> = tree.iter().rev().map(|(&k, &v)| (k, v)).collect();
        let expected_rev: Vec<_> = model.iter().rev().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rev, &expected_rev, "iter().rev() mismatch");

        prop_assert!(tree.keys().copied().eq(model.keys().copied()), "keys() mismatch");
        prop_assert!(tree.values().copied().eq(model.values().copied()), "values() mismatch");
        prop_assert!(tree.clone().into_iter().eq(model.clone()), "into_iter() mismatch");
        prop_assert!(tree.clone().into_iter().rev().eq(model.into_iter().rev()), "into_iter().rev() mismatch");
    }

    /// Alternating front and back reads meet in the middle without skipping or repeating.
    #[test]
    fn iter_size_and_double_ended(entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE)) {
        let tree: RbTree<i64, i64> = entries.iter().copied().collect();

        let mut iter = tree.iter();
        prop_assert_eq!(iter.len(), tree.len(), "ExactSizeIterator len mismatch");

        let mut from_front = Vec::new();
        let mut from_back = Vec::new();
        let mut toggle = true;
        loop {
            let item = if toggle { iter.next() } else { iter.next_back() };
            let Some((&k, _)) = item else { break };
            if toggle { from_front.push(k) } else { from_back.push(k) }
            prop_assert_eq!(iter.len(), tree.len() - from_front.len() - from_back.len());
            toggle = !toggle;
        }
        prop_assert_eq!(iter.next(), None);

        from_back.reverse();
        from_front.extend(from_back);
        prop_assert!(from_front.iter().eq(tree.keys()));
    }

    /// Tests range queries over every bound kind match BTreeMap.
    #[test]
    fn range_matches_btreemap(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE),
        a in bound_strategy(),
        b in bound_strategy(),
    ) {
        let tree: RbTree<i64, i64> = entries.iter().copied().collect();
        let model: BTreeMap<i64, i64> = tree.iter().map(|(&k, &v)| (k, v)).collect();

        let value_of = |bound: &Bound<i64>| match bound {
            Bound::Included(x) | Bound::Excluded(x) => Some(*x),
            Bound::Unbounded => None,
        };
        // Order the bounds so the range is never inverted.
        let (lo, hi) = match (value_of(&a), value_of(&b)) {
            (Some(x), Some(y)) if x > y => (b, a),
            _ => (a, b),
        };
        let both_excluded_equal = matches!((lo, hi), (Bound::Excluded(x), Bound::Excluded(y)) if x == y);
        prop_assume!(!both_excluded_equal);

        let got: Vec<_> = tree.range((lo, hi)).map(|(&k, &v)| (k, v)).collect();
        let expected: Vec<_> = model.range((lo, hi)).map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&got, &expected, "range({:?}, {:?})", lo, hi);

        let got_rev: Vec<_> = tree.range((lo, hi)).rev().map(|(&k, _)| k).collect();
        let expected_rev: Vec<_> = model.range((lo, hi)).rev().map(|(&k, _)| k).collect();
        prop_assert_eq!(&got_rev, &expected_rev, "range({:?}, {:?}).rev()", lo, hi);
    }

    /// Mutable iteration and mutable ranges touch exactly the intended values.
    #[test]
    fn mutable_iteration_matches_btreemap(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE),
        lo in key_strategy(),
        span in 0i64..500,
    ) {
        let mut tree: RbTree<i64, i64> = entries.iter().copied().collect();
        let mut model: BTreeMap<i64, i64> = tree.iter().map(|(&k, &v)| (k, v)).collect();

        for ((_, a), (_, b)) in tree.iter_mut().zip(model.iter_mut()) {
            *a = a.wrapping_add(1);
            *b = b.wrapping_add(1);
        }
        for (_, v) in tree.range_mut(lo..lo + span).rev() {
            *v = -*v;
        }
        for (_, v) in model.range_mut(lo..lo + span) {
            *v = -*v;
        }
        for v in tree.values_mut().step_by(3) {
            *v ^= 0x5a;
        }
        for v in model.values_mut().step_by(3) {
            *v ^= 0x5a;
        }

        let got: Vec<_> = tree.iter().map(|(&k, &v)| (k, v)).collect();
        let expected: Vec<_> = model.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn retain_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut tree: RbTree<i64, i64> = entries.iter().copied().collect();
        let mut model: BTreeMap<i64, i64> = tree.iter().map(|(&k, &v)| (k, v)).collect();

        tree.retain(|k, v| {
            *v = v.wrapping_mul(3);
            k % 3 != 0
        });
        model.retain(|k, v| {
            *v = v.wrapping_mul(3);
            k % 3 != 0
        });

        prop_assert!(tree.into_iter().eq(model));
    }

    #[test]
    fn clone_produces_equal_tree(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let tree: RbTree<i64, i64> = entries.iter().copied().collect();
        let copy = tree.clone();
        prop_assert_eq!(&copy, &tree);
        prop_assert_eq!(copy.pretty().to_string(), tree.pretty().to_string(), "clone changed the shape");
    }

    /// Repeated keys against a sorted Vec model that keeps equal keys in insertion order.
    #[test]
    fn multi_ops_match_sorted_vec(ops in proptest::collection::vec(multi_op_strategy(), TEST_SIZE)) {
        let mut tree: RbTree<i64, u32> = RbTree::new();
        let mut model: Vec<(i64, u32)> = Vec::new();

        for op in &ops {
            match op {
                MultiOp::InsertMulti(k, v) => {
                    let cursor = tree.insert_multi(*k, *v);
                    prop_assert_eq!(cursor.key_value(), Some((k, v)));
                    let at = model.partition_point(|&(key, _)| key <= *k);
                    model.insert(at, (*k, *v));
                }
                MultiOp::Remove(k) => {
                    let expected = model.iter().position(|(key, _)| key == k).map(|at| model.remove(at).1);
                    prop_assert_eq!(tree.remove(k), expected, "remove({})", k);
                }
                MultiOp::Count(k) => {
                    let expected = model.iter().filter(|(key, _)| key == k).count();
                    prop_assert_eq!(tree.count(k), expected, "count({})", k);
                    prop_assert_eq!(tree.contains_key(k), expected > 0, "contains_key({})", k);
                }
                MultiOp::EqualRange(k) => {
                    let got: Vec<_> = tree.equal_range(k).map(|(_, &v)| v).collect();
                    let expected: Vec<_> = model.iter().filter(|(key, _)| key == k).map(|&(_, v)| v).collect();
                    prop_assert_eq!(got, expected, "equal_range({})", k);
                }
            }
            prop_assert_eq!(tree.len(), model.len(), "len mismatch after {:?}", op);
        }

        let items: Vec<_> = tree.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(items, model);
    }

    /// Removing every entry, in any order, leaves an empty tree that drops each value once.
    #[test]
    fn remove_everything_releases_each_value_once(
        keys in proptest::collection::vec(key_strategy(), 0..TEST_SIZE).prop_shuffle(),
        order in proptest::collection::vec(any::<proptest::sample::Index>(), TEST_SIZE),
    ) {
        let drops = DropLog::default();
        let mut tree = RbTree::new();
        for (id, &key) in keys.iter().enumerate() {
            tree.insert_multi(key, drops.track(id));
        }

        let mut remaining = keys.clone();
        let mut picks = order.iter();
        while !remaining.is_empty() {
            let at = picks.next().map_or(0, |pick| pick.index(remaining.len()));
            let key = remaining.swap_remove(at);
            prop_assert!(tree.remove(&key).is_some(), "remove({}) found nothing", key);
        }

        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree.first_key_value().map(|(k, _)| *k), None);
        prop_assert_eq!(drops.sorted(), (0..keys.len()).collect::<Vec<_>>());
    }
}

// ─── Drop accounting ─────────────────────────────────────────────────────────

#[derive(Clone, Default)]
struct DropLog(Rc<RefCell<Vec<usize>>>);

impl DropLog {
    fn track(&self, id: usize) -> Tracked {
        Tracked {
            id,
            log: self.clone(),
        }
    }

    fn sorted(&self) -> Vec<usize> {
        let mut ids = self.0.borrow().clone();
        ids.sort_unstable();
        ids
    }
}

struct Tracked {
    id: usize,
    log: DropLog,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.0.borrow_mut().push(self.id);
    }
}

#[test]
fn every_release_path_drops_each_value_once() {
    let drops = DropLog::default();
    {
        let mut tree = RbTree::new();
        for id in 0..60 {
            tree.insert_multi(id % 20, drops.track(id));
        }

        drop(tree.remove(&3));
        drop(tree.pop_first());
        drop(tree.pop_last());
        tree.retain(|k, _| k % 5 != 0);

        let mut cursor = tree.find_mut(&7);
        cursor.move_next();
        drop(cursor.remove_current());

        let mut copy = RbTree::new();
        for id in 100..110 {
            copy.insert(id, drops.track(id));
        }
        copy.clear();

        let mut drained = RbTree::new();
        for id in 200..210 {
            drained.insert(id, drops.track(id));
        }
        let mut iter = drained.into_iter();
        drop(iter.next());
        // The rest is released when the iterator is dropped.
    }

    let expected: Vec<usize> = (0..60).chain(100..110).chain(200..210).collect();
    assert_eq!(drops.sorted(), expected);
}

#[test]
fn rejected_insert_drops_the_new_value_only() {
    let drops = DropLog::default();
    let mut tree = RbTree::new();
    tree.insert("k", drops.track(1));

    let (cursor, inserted) = tree.insert("k", drops.track(2));
    assert!(!inserted);
    assert_eq!(cursor.value().map(|t| t.id), Some(1));
    assert_eq!(drops.sorted(), [2]);

    drop(tree);
    assert_eq!(drops.sorted(), [1, 2]);
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn scenario_balanced_insert_sequence() {
    let tree = tree_of([10, 5, 15, 3, 7, 12, 20]);
    assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [3, 5, 7, 10, 12, 15, 20]);
    assert_eq!(tree.len(), 7);
    assert_eq!(
        tree.pretty().to_string(),
        concat!(
            "10 (B)\n",
            "├── 5 (B)\n",
            "│   ├── 3 (R)\n",
            "│   └── 7 (R)\n",
            "└── 15 (B)\n",
            "    ├── 12 (R)\n",
            "    └── 20 (R)\n",
        ),
    );
}

#[test]
fn scenario_unique_insert_three_times() {
    let mut tree = RbTree::new();
    let results: Vec<bool> = (0..3).map(|round| tree.insert(15, round).1).collect();
    assert_eq!(results, [true, false, false]);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[&15], 0);
}

#[test]
fn scenario_equal_range_over_repeated_keys() {
    let mut tree = RbTree::new();
    for key in [5, 10, 10, 15, 15, 15, 20] {
        tree.insert_multi(key, ());
    }
    assert_eq!(tree.equal_range(&15).map(|(k, _)| *k).collect::<Vec<_>>(), [15, 15, 15]);
    assert_eq!(tree.count(&10), 2);
    assert_eq!(tree.count(&11), 0);
    assert_eq!(tree.equal_range(&11).next(), None);
}

#[test]
fn scenario_bounds_on_sparse_keys() {
    let tree = tree_of([1, 2, 4, 5, 7]);
    assert_eq!(tree.lower_bound(&3).key(), Some(&4));
    assert_eq!(tree.upper_bound(&4).key(), Some(&5));
    assert!(tree.upper_bound(&7).is_end());
    assert_eq!(tree.upper_bound(&7), tree.cursor_end());
}

#[test]
fn scenario_remove_root() {
    let mut tree = tree_of([10, 5, 15, 3, 7, 12, 20]);
    assert_eq!(tree.remove_entry(&10), Some((10, 100)));
    assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [3, 5, 7, 12, 15, 20]);
    assert!(!tree.contains_key(&10));
    assert_eq!(tree.remove(&10), None);
}

#[test]
fn scenario_clone_is_independent() {
    let source = tree_of([10, 5, 15]);
    let mut copy = source.clone();
    copy.insert(1, 1);
    copy.remove(&10);
    *copy.get_mut(&5).expect("present") = -5;

    assert_eq!(source.iter().map(|(&k, &v)| (k, v)).collect::<Vec<_>>(), [(5, 50), (10, 100), (15, 150)]);
    assert_eq!(copy.iter().map(|(&k, &v)| (k, v)).collect::<Vec<_>>(), [(1, 1), (5, -5), (15, 150)]);
}

// ─── Cursors ─────────────────────────────────────────────────────────────────

#[test]
fn cursor_walks_both_directions() {
    let tree = tree_of([1, 2, 3]);

    let mut cursor = tree.cursor_front();
    let mut forward = Vec::new();
    while let Some(&k) = cursor.key() {
        forward.push(k);
        cursor.move_next();
    }
    assert_eq!(forward, [1, 2, 3]);

    // Forward from the end stays at the end.
    cursor.move_next();
    assert!(cursor.is_end());
    assert_eq!(cursor.value(), None);

    // Backward from the end lands on the maximum.
    cursor.move_prev();
    assert_eq!(cursor.key(), Some(&3));
    assert_eq!(cursor, tree.cursor_back());
    assert_eq!(cursor.peek_next(), None);
    assert_eq!(cursor.peek_prev(), Some((&2, &20)));

    cursor.move_prev();
    cursor.move_prev();
    assert_eq!(cursor.key(), Some(&1));
    cursor.move_prev();
    assert!(cursor.is_end());
}

#[test]
fn cursors_on_an_empty_tree_are_at_the_end() {
    let mut tree: RbTree<i64, i64> = RbTree::new();
    assert!(tree.cursor_front().is_end());
    assert!(tree.cursor_back().is_end());
    assert!(tree.find(&1).is_end());
    assert!(tree.lower_bound(&1).is_end());

    let mut cursor = tree.cursor_front_mut();
    assert_eq!(cursor.remove_current(), None);
    assert_eq!(cursor.value_mut(), None);
    cursor.move_prev();
    assert!(cursor.is_end());
}

#[test]
fn cursor_removes_a_specific_occurrence() {
    let mut tree = RbTree::new();
    for (tag, key) in ["a", "b", "c", "d"].into_iter().zip([1, 2, 2, 2]) {
        tree.insert_multi(key, tag);
    }

    let mut cursor = tree.lower_bound_mut(&2);
    cursor.move_next();
    assert_eq!(cursor.remove_current(), Some((2, "c")));
    assert_eq!(cursor.key_value(), Some((&2, &"d")));
    assert_eq!(cursor.remove_current(), Some((2, "d")));
    assert!(cursor.is_end());

    cursor.move_prev();
    if let Some((_, tag)) = cursor.key_value_mut() {
        *tag = "B";
    }
    assert_eq!(cursor.as_cursor().key_value(), Some((&2, &"B")));

    assert_eq!(tree.iter().map(|(&k, &v)| (k, v)).collect::<Vec<_>>(), [(1, "a"), (2, "B")]);
}

#[test]
fn insert_cursor_gives_access_to_the_stored_value() {
    let mut tree = RbTree::new();
    tree.insert("x", 1);
    let (cursor, inserted) = tree.insert("x", 99);
    assert!(!inserted);
    *cursor.into_value_mut().expect("existing entry") += 1;
    assert_eq!(tree["x"], 2);
}

// ─── Lookup helpers and errors ───────────────────────────────────────────────

#[test]
fn at_reports_missing_keys() {
    let mut tree = tree_of([1, 2]);
    assert_eq!(tree.at(&1), Ok(&10));
    assert_eq!(tree.at(&3), Err(KeyNotFound));
    assert_eq!(tree.at_mut(&3), Err(KeyNotFound));
    assert_eq!(tree.at(&3).unwrap_err().to_string(), "key not found");
    assert_eq!(tree.len(), 2);

    *tree.at_mut(&2).expect("present") = 0;
    assert_eq!(tree[&2], 0);
}

#[test]
fn get_or_insert_inserts_once() {
    let mut tree: RbTree<&str, Vec<u8>> = RbTree::new();
    tree.get_or_insert_default("a").push(1);
    tree.get_or_insert_default("a").push(2);

    let mut calls = 0;
    for _ in 0..3 {
        tree.get_or_insert_with("b", || {
            calls += 1;
            vec![9]
        });
    }

    assert_eq!(calls, 1);
    assert_eq!(tree["a"], [1, 2]);
    assert_eq!(tree["b"], [9]);
    assert_eq!(tree.len(), 2);
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn index_missing_key_panics() {
    let tree = tree_of([1]);
    let _ = tree[&2];
}

#[test]
#[should_panic(expected = "range start is greater than range end in RbTree")]
fn inverted_range_panics() {
    let tree = tree_of([1, 2, 3]);
    let _ = tree.range(3..1);
}

#[test]
#[should_panic(expected = "range start is greater than range end in RbTree")]
fn empty_excluded_range_panics() {
    let tree = tree_of([1, 2, 3]);
    let _ = tree.range((Bound::Excluded(2), Bound::Excluded(2)));
}

// ─── Whole-tree behavior ─────────────────────────────────────────────────────

#[test]
fn take_leaves_an_empty_tree() {
    let mut source = tree_of([3, 1, 2]);
    let moved = std::mem::take(&mut source);
    assert!(source.is_empty());
    assert_eq!(source.iter().next(), None);
    assert_eq!(moved.len(), 3);

    source.insert(9, 90);
    assert_eq!(source.len(), 1);
    assert_eq!(moved.keys().copied().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn large_trees_drop_without_recursion() {
    let mut tree = RbTree::with_capacity(200_000);
    assert!(tree.capacity() >= 200_000);
    for key in 0..200_000u32 {
        tree.insert(key, key);
    }
    let copy = tree.clone();
    assert_eq!(copy.len(), 200_000);
    drop(copy);
    tree.clear();
    assert!(tree.is_empty());
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn trait_impls() {
    let mut tree: RbTree<i32, &str> = RbTree::from([(2, "b"), (1, "a")]);
    assert_eq!(format!("{tree:?}"), r#"{1: "a", 2: "b"}"#);

    tree.extend([(3, "c"), (1, "ignored")]);
    tree.extend([(&4, &"d")]);
    assert_eq!(tree.values().copied().collect::<Vec<_>>(), ["a", "b", "c", "d"]);

    let same: RbTree<i32, &str> = tree.iter().map(|(&k, &v)| (k, v)).collect();
    assert_eq!(tree, same);
    let reordered: RbTree<i32, &str> = [(4, "d"), (2, "b"), (3, "c"), (1, "a")].into_iter().collect();
    assert_eq!(hash_of(&tree), hash_of(&reordered));
    assert_ne!(hash_of(&tree), hash_of(&RbTree::from([(1, "a")])));
    assert!(RbTree::from([(1, "a")]) < RbTree::from([(1, "b")]));
    assert_eq!(RbTree::<u8, u8>::default(), RbTree::new());

    let iter: rb_tree::IntoIter<u8, u8> = Default::default();
    assert_eq!(iter.len(), 0);
    assert_eq!(format!("{:?}", tree.range(2..=3)), r#"[(2, "b"), (3, "c")]"#);
    assert_eq!(format!("{:?}", tree.keys()), "[1, 2, 3, 4]");
}

static_assertions::assert_impl_all!(RbTree<i32, String>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(rb_tree::IterMut<'static, i32, String>: Send);
static_assertions::assert_not_impl_any!(RbTree<Rc<i32>, i32>: Send, Sync);
