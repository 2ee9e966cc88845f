//! Property tests: the array is checked against a `Vec<(K, V)>` model that
//! appends new keys, overwrites existing ones and shift-removes.

use assoc_array::{AssociativeArray, DEFAULT_CAPACITY};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Set(u8, i32),
    Remove(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..24, any::<i32>()).prop_map(|(k, v)| Op::Set(k, v)),
        1 => (0u8..24).prop_map(Op::Remove),
    ]
}

fn apply(model: &mut Vec<(u8, i32)>, op: &Op) {
    match *op {
        Op::Set(k, v) => match model.iter_mut().find(|(key, _)| *key == k) {
            Some(pair) => pair.1 = v,
            None => model.push((k, v)),
        },
        Op::Remove(k) => model.retain(|(key, _)| *key != k),
    }
}

fn run(ops: &[Op]) -> (AssociativeArray<u8, i32>, Vec<(u8, i32)>) {
    let mut arr: AssociativeArray<u8, i32> = AssociativeArray::new();
    let mut model = Vec::new();
    for op in ops {
        match *op {
            Op::Set(k, v) => arr.set(k, v).unwrap(),
            Op::Remove(k) => arr.remove(&k),
        }
        apply(&mut model, op);
    }
    (arr, model)
}

proptest! {
    #[test]
    fn matches_model(ops in proptest::collection::vec(op(), 0..200)) {
        let (arr, model) = run(&ops);
        prop_assert_eq!(arr.size(), model.len());
        prop_assert!(arr.capacity() >= arr.size());
        let pairs: Vec<_> = arr.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(pairs, model);
    }

    #[test]
    fn set_then_get(ops in proptest::collection::vec(op(), 0..64), k in 0u8..24, v in any::<i32>()) {
        let (mut arr, _) = run(&ops);
        arr.set(k, v).unwrap();
        prop_assert_eq!(arr.get(&k), Ok(&v));
        prop_assert!(arr.has_key(&k));
    }

    #[test]
    fn overwrite_keeps_size(ops in proptest::collection::vec(op(), 0..64), k in 0u8..24, v1 in any::<i32>(), v2 in any::<i32>()) {
        let (mut arr, _) = run(&ops);
        arr.set(k, v1).unwrap();
        let size = arr.size();
        arr.set(k, v2).unwrap();
        prop_assert_eq!(arr.size(), size);
        prop_assert_eq!(arr.get(&k), Ok(&v2));
    }

    #[test]
    fn remove_present_shrinks_by_one(ops in proptest::collection::vec(op(), 1..64), k in 0u8..24) {
        let (mut arr, _) = run(&ops);
        let before = arr.size();
        let present = arr.has_key(&k);
        let snapshot = arr.clone();
        arr.remove(&k);
        if present {
            prop_assert_eq!(arr.size(), before - 1);
            prop_assert!(!arr.has_key(&k));
        } else {
            prop_assert_eq!(arr, snapshot);
        }
    }

    #[test]
    fn clone_is_independent(ops in proptest::collection::vec(op(), 0..64), more in proptest::collection::vec(op(), 1..32)) {
        let (arr, _) = run(&ops);
        let original = arr.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>();

        let mut copy = arr.clone();
        prop_assert_eq!(&copy, &arr);
        for op in &more {
            match *op {
                Op::Set(k, v) => copy.set(k, v).unwrap(),
                Op::Remove(k) => copy.remove(&k),
            }
        }
        let after = arr.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>();
        prop_assert_eq!(after, original);
    }

    #[test]
    fn growth_keeps_every_key(n in DEFAULT_CAPACITY..DEFAULT_CAPACITY * 5) {
        let mut arr: AssociativeArray<usize, usize> = AssociativeArray::new();
        for i in 0..n {
            arr.set(i, i * 2).unwrap();
        }
        prop_assert_eq!(arr.size(), n);
        prop_assert!(arr.capacity() >= n);
        prop_assert!(arr.capacity().is_power_of_two());
        for i in 0..n {
            prop_assert_eq!(arr.get(&i), Ok(&(i * 2)));
        }
    }
}
