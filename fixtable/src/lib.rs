#![deny(clippy::disallowed_methods)]

//! A hash table with a fixed number of slots, keyed by strings.
//!
//! Keys are hashed by summing their UTF-16 code units modulo the slot count.
//! There is no collision handling: two keys that land in the same slot share
//! it, and the most recent `set` wins. `get` returns whatever the slot holds,
//! which may have been written under a different key.

#[cfg(feature = "debug")]
use std::collections::BTreeMap;
use std::{iter::repeat_with, num::NonZeroUsize};

use thiserror::Error;
use tracing::trace;

#[cfg(feature = "arbitrary")]
pub mod arbitrary;
#[cfg(any(test, feature = "proptest-arbitrary"))]
pub mod proptest;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum TableError {
    #[error("capacity must be a positive number of slots")]
    InvalidArgument,
}

/// Index of the slot `key` maps to in a table of `capacity` slots.
///
/// Always in `0..capacity`.
pub fn slot_index(key: &str, capacity: NonZeroUsize) -> usize {
    let capacity = capacity.get();
    key.encode_utf16().fold(0, |hash, unit| {
        // hash + unit (mod capacity) without leaving 0..capacity
        let unit = usize::from(unit) % capacity;
        if hash >= capacity - unit {
            hash - (capacity - unit)
        } else {
            hash + unit
        }
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedHashTable<V> {
    slots: Box<[Option<V>]>,
    capacity: NonZeroUsize,
    occupied: usize,
    #[cfg(feature = "debug")]
    pub overwrites: BTreeMap<usize, usize>,
}

impl<V> FixedHashTable<V> {
    /// Fails with [`TableError::InvalidArgument`] unless `capacity` is a
    /// positive number of slots that can be allocated.
    pub fn new<C: TryInto<usize>>(capacity: C) -> Result<Self, TableError> {
        let capacity = capacity
            .try_into()
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(TableError::InvalidArgument)?;
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity.get())
            .map_err(|_| TableError::InvalidArgument)?;
        slots.resize_with(capacity.get(), || None);
        Ok(Self::from_slots(slots.into_boxed_slice(), capacity))
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self::from_slots(repeat_with(|| None).take(capacity.get()).collect(), capacity)
    }

    fn from_slots(slots: Box<[Option<V>]>, capacity: NonZeroUsize) -> Self {
        debug_assert_eq!(slots.len(), capacity.get());
        trace!(capacity = capacity.get(), "new fixed hash table");
        Self {
            slots,
            capacity,
            occupied: 0,
            #[cfg(feature = "debug")]
            overwrites: BTreeMap::new(),
        }
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    // number of occupied slots, which is at most the number of distinct keys set
    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    pub fn invariants(&self) -> bool {
        self.slots.len() == self.capacity.get()
            && self.slots.iter().filter(|slot| slot.is_some()).count() == self.occupied
    }

    /// Stores `value` in the slot `key` hashes to and returns what the slot
    /// held before, whether or not it was written under the same key.
    pub fn set(&mut self, key: &str, value: V) -> Option<V> {
        let index = slot_index(key, self.capacity);
        let old = self.slots[index].replace(value);
        if old.is_some() {
            trace!(key, index, "overwrote occupied slot");
            #[cfg(feature = "debug")]
            {
                *self.overwrites.entry(index).or_insert(0) += 1;
            }
        } else {
            self.occupied += 1;
        }
        old
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.slots[slot_index(key, self.capacity)].as_ref()
    }
}
