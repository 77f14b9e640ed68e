use std::num::NonZeroUsize;

use arbitrary::{Arbitrary, Unstructured};

use crate::FixedHashTable;

const MAX_CAPACITY: usize = 256;

pub fn arb_fixed_capacity_table<'a, V: Arbitrary<'a>>(
    u: &mut Unstructured<'a>,
    capacity: NonZeroUsize,
) -> arbitrary::Result<FixedHashTable<V>> {
    let mut table = FixedHashTable::with_capacity(capacity);
    for _ in 0..u.int_in_range(0..=2 * capacity.get())? {
        let key: &str = u.arbitrary()?;
        table.set(key, u.arbitrary()?);
    }
    Ok(table)
}

impl<'a, V: Arbitrary<'a>> Arbitrary<'a> for FixedHashTable<V> {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let capacity = u.int_in_range(1..=MAX_CAPACITY)?;
        // the range starts at 1
        let capacity = NonZeroUsize::new(capacity).ok_or(arbitrary::Error::IncorrectFormat)?;
        arb_fixed_capacity_table(u, capacity)
    }
}
