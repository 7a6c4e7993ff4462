use super::*;

use proptest::prelude::*;
use std::{collections::BTreeMap, vec::Vec};

#[derive(Debug, Clone)]
enum Op {
  Put(Vec<u8>, Vec<u8>),
  Get(Vec<u8>),
}

fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
  // a narrow alphabet keeps collisions frequent
  prop::collection::vec(prop::sample::select(&b"abc\x00\xff"[..]), 0..6)
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
  prop::collection::vec(
    prop_oneof![
      3 => (key_strategy(), prop::collection::vec(any::<u8>(), 0..8))
        .prop_map(|(k, v)| Op::Put(k, v)),
      1 => key_strategy().prop_map(Op::Get),
    ],
    0..400,
  )
}

proptest! {
  #![proptest_config(ProptestConfig {
    cases: 256,
    .. ProptestConfig::default()
  })]

  #[test]
  fn prop_equivalence_btreemap(ops in ops_strategy()) {
    let mut l = SkipList::new();
    let mut m: BTreeMap<Vec<u8>, Vec<u8>> = BTreeMap::new();

    for op in ops {
      match op {
        Op::Put(key, value) => {
          let before = l.len();
          let res = l.insert(&key, &value);
          if key.is_empty() {
            prop_assert_eq!(res, Err(Error::EmptyKey));
            prop_assert_eq!(l.len(), before);
            continue;
          }

          let old = m.insert(key, value);
          prop_assert_eq!(l.len(), before + usize::from(old.is_none()));
          prop_assert_eq!(res, Ok(old));
        }
        Op::Get(key) => {
          prop_assert_eq!(l.get(&key), m.get(&key).map(Vec::as_slice));
          prop_assert_eq!(l.contains_key(&key), m.contains_key(&key));
        }
      }
    }

    prop_assert_eq!(l.len(), m.len());
    let got: Vec<(&[u8], &[u8])> = l.iter().map(|ent| (ent.key(), ent.value())).collect();
    let want: Vec<(&[u8], &[u8])> = m.iter().map(|(k, v)| (k.as_slice(), v.as_slice())).collect();
    prop_assert_eq!(got, want);
  }

  #[test]
  fn prop_descend_sorted(keys in prop::collection::vec(key_strategy(), 0..200)) {
    let mut l = SkipList::with_comparator(Descend);
    for key in keys.iter().filter(|k| !k.is_empty()) {
      l.put(key, key).unwrap();
    }

    let got: Vec<&[u8]> = l.iter().map(|ent| ent.key()).collect();
    for w in got.windows(2) {
      prop_assert!(w[0] > w[1]);
    }
  }

  #[test]
  fn prop_same_seed_same_shape(
    keys in prop::collection::vec(key_strategy(), 0..200),
    seed in any::<u64>(),
  ) {
    let opts = Options::new().with_seed(seed);
    let mut a = SkipList::with_options(opts).unwrap();
    let mut b = SkipList::with_options(opts).unwrap();
    for key in keys.iter().filter(|k| !k.is_empty()) {
      a.put(key, b"a").unwrap();
      b.put(key, b"b").unwrap();
    }

    let shape = |l: &SkipList| {
      l.iter()
        .map(|ent| (ent.id(), ent.height()))
        .collect::<Vec<_>>()
    };
    prop_assert_eq!(shape(&a), shape(&b));
  }
}
