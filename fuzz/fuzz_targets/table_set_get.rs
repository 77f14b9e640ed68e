#![no_main]
use libfuzzer_sys::fuzz_target;

use fixtable::{slot_index, FixedHashTable};

fuzz_target!(|input: (FixedHashTable<u32>, Vec<(String, u32)>)| {
    let (mut table, entries) = input;
    let capacity = table.capacity();
    // model: last value written to each slot
    let mut model = std::collections::BTreeMap::new();
    for (key, v) in &entries {
        table.set(key, *v);
        model.insert(slot_index(key, capacity), *v);
    }
    assert!(table.invariants());
    for (key, _) in &entries {
        assert_eq!(table.get(key), model.get(&slot_index(key, capacity)));
    }
});
