use std::{convert::TryInto, num::NonZeroUsize};

use proptest::prelude::*;

use crate::FixedHashTable;

const MAX_CAPACITY: usize = 64;
const MAX_KEY_LEN: usize = 8;

pub fn arb_key() -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<char>(), 0..=MAX_KEY_LEN)
        .prop_map(|chars| chars.into_iter().collect())
}

pub fn arb_fixed_capacity_table<V: Arbitrary>(
    capacity: NonZeroUsize,
) -> impl Strategy<Value = FixedHashTable<V>> {
    proptest::collection::vec((arb_key(), V::arbitrary()), 0..=(2 * capacity.get())).prop_map(
        move |entries| {
            let mut table = FixedHashTable::with_capacity(capacity);
            for (key, v) in entries {
                table.set(&key, v);
            }
            table
        },
    )
}

pub fn arb_table<V: Arbitrary>() -> impl Strategy<Value = FixedHashTable<V>> {
    (1..MAX_CAPACITY)
        .prop_flat_map(|capacity| arb_fixed_capacity_table(capacity.try_into().unwrap()))
}
