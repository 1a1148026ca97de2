use std::collections::{BTreeMap, BTreeSet, HashMap};

use proptest::prelude::*;

use crate::{BinarySearchTree, HashTable};

#[derive(Clone, Debug)]
enum Op {
    Insert(u16, i32),
    Remove(u16),
    Get(u16),
    Clear,
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    // Narrow key range so upserts and hits on removal are common.
    let key = 0_u16..256;
    let op = prop_oneof![
        50 => (key.clone(), any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        25 => key.clone().prop_map(Op::Remove),
        24 => key.prop_map(Op::Get),
        1 => Just(Op::Clear),
    ];
    prop::collection::vec(op, 0..=1000)
}

/// In-order must be non-decreasing and cover every stored value.
fn assert_sorted(tree: &BinarySearchTree<i16>) -> Result<(), TestCaseError> {
    let values: Vec<i16> = tree.in_order().copied().collect();
    prop_assert_eq!(values.len(), tree.len());
    prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn table_matches_hashmap(ops in ops_strategy(), capacity in 1_usize..64) {
        let mut table = HashTable::with_capacity(capacity).unwrap();
        let mut model: HashMap<u16, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    prop_assert_eq!(table.insert(k, v), model.insert(k, v));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(table.remove(&k), model.remove(&k).is_some());
                }
                Op::Get(k) => {
                    prop_assert_eq!(table.get(&k), model.get(&k));
                }
                Op::Clear => {
                    table.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(table.len(), model.len());
        }

        let got: BTreeMap<u16, i32> = table.iter().map(|(k, v)| (*k, *v)).collect();
        let expected: BTreeMap<u16, i32> = model.into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn last_insert_wins(pairs in prop::collection::vec((any::<u8>(), any::<i64>()), 0..300)) {
        let mut table = HashTable::new();
        let mut last = BTreeMap::new();
        for (k, v) in pairs {
            table.insert(k, v);
            last.insert(k, v);
        }
        prop_assert_eq!(table.len(), last.len());
        for (k, v) in &last {
            prop_assert_eq!(table.get(k), Some(v));
        }
    }

    #[test]
    fn growth_preserves_mapping(keys in prop::collection::btree_set(any::<u32>(), 1..400)) {
        let n = keys.len();
        let mut small = HashTable::with_capacity(1).unwrap();
        let mut presized = HashTable::with_capacity(n).unwrap();
        for &k in &keys {
            small.insert(k, u64::from(k) * 2);
            presized.insert(k, u64::from(k) * 2);
        }
        let a: BTreeMap<u32, u64> = small.iter().map(|(k, v)| (*k, *v)).collect();
        let b: BTreeMap<u32, u64> = presized.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(a.len(), n);
        prop_assert_eq!(small.iter().count(), n);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn in_order_is_non_decreasing(values in prop::collection::vec(any::<i16>(), 0..300)) {
        let tree: BinarySearchTree<i16> = values.iter().copied().collect();
        assert_sorted(&tree)?;
        let mut expected = values;
        expected.sort_unstable();
        prop_assert!(tree.in_order().copied().eq(expected));
    }

    #[test]
    fn remove_drops_exactly_one(
        values in prop::collection::vec(-50_i16..50, 1..200),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut tree: BinarySearchTree<i16> = values.iter().copied().collect();
        let target = values[pick.index(values.len())];

        prop_assert!(tree.remove(&target));
        assert_sorted(&tree)?;

        let mut expected = values;
        expected.sort_unstable();
        let at = expected.binary_search(&target).unwrap();
        expected.remove(at);
        prop_assert!(tree.in_order().copied().eq(expected));
    }

    #[test]
    fn insert_then_remove_all_empties_both(keys in prop::collection::btree_set(any::<i16>(), 0..200)) {
        let mut table = HashTable::new();
        let mut tree = BinarySearchTree::new();
        for &k in &keys {
            table.insert(k, ());
            tree.insert(k);
        }
        for k in &keys {
            prop_assert!(table.remove(k));
            prop_assert!(tree.remove(k));
        }
        prop_assert_eq!(table.len(), 0);
        prop_assert_eq!(tree.len(), 0);
        prop_assert_eq!(table.iter().count(), 0);
        prop_assert_eq!(tree.in_order().count(), 0);
        prop_assert_eq!(tree.pre_order().count(), 0);
        prop_assert_eq!(tree.post_order().count(), 0);
    }

    #[test]
    fn absent_remove_is_idempotent(keys in prop::collection::btree_set(0_i32..1000, 0..100), probe in 1000_i32..2000) {
        let mut table: HashTable<i32, i32> = keys.iter().map(|&k| (k, k)).collect();
        let mut tree: BinarySearchTree<i32> = keys.iter().copied().collect();
        for _ in 0..2 {
            prop_assert!(!table.remove(&probe));
            prop_assert!(!tree.remove(&probe));
        }
        prop_assert_eq!(table.len(), keys.len());
        prop_assert_eq!(tree.len(), keys.len());
        let remaining: BTreeSet<i32> = tree.in_order().copied().collect();
        prop_assert_eq!(&remaining, &keys);
    }

    #[test]
    fn traversals_visit_every_value_once(values in prop::collection::vec(any::<i16>(), 0..200)) {
        let tree: BinarySearchTree<i16> = values.iter().copied().collect();
        let mut expected = values;
        expected.sort_unstable();
        for mut walk in [
            tree.pre_order().copied().collect::<Vec<_>>(),
            tree.post_order().copied().collect::<Vec<_>>(),
        ] {
            walk.sort_unstable();
            prop_assert_eq!(&walk, &expected);
        }
    }
}
