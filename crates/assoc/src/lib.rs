//! An unsorted associative array with unique keys and insertion-order
//! iteration. Lookup is a linear scan, which is the right trade for the
//! small maps this crate is used for.

use std::borrow::Borrow;
use std::fmt;


/// Starting slot count for a fresh array.
pub const DEFAULT_CAPACITY: usize = 16;

/// A write was attempted without a key.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("key is absent")]
pub struct NullKey;

/// A lookup did not match any stored key.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("key not found")]
pub struct KeyNotFound;

struct Entry<K, V> {
    key: K,
    value: V,
}

/// Growable key/value storage. The first `len` slots are always occupied,
/// the rest are empty; capacity doubles when an append would overflow and
/// never shrinks.
pub struct AssocArray<K, V> {
    slots: Box<[Option<Entry<K, V>>]>,
    len: usize,
}

impl<K, V> AssocArray<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity, || None);
        AssocArray {
            slots: slots.into_boxed_slice(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated slot count, distinct from `len`.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Keys of the live entries, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Live entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.slots[..self.len]
            .iter()
            .filter_map(|slot| slot.as_ref())
            .map(|entry| (&entry.key, &entry.value))
    }

    fn grow(&mut self) {
        let capacity = self.slots.len() * 2;
        let mut slots: Vec<Option<Entry<K, V>>> = Vec::with_capacity(capacity);
        for slot in self.slots.iter_mut() {
            slots.push(slot.take());
        }
        slots.resize_with(capacity, || None);
        self.slots = slots.into_boxed_slice();
    }
}

impl<K: PartialEq, V> AssocArray<K, V> {
    /// Associate `value` with `key`. An existing key keeps its position and
    /// gets its value overwritten; a new key is appended, doubling the
    /// storage first if it is full. Fails only when no key was given.
    pub fn set(&mut self, key: Option<K>, value: V) -> Result<(), NullKey> {
        let Some(key) = key else {
            return Err(NullKey);
        };
        if let Some(idx) = self.find(&key) {
            if let Some(entry) = self.slots[idx].as_mut() {
                entry.value = value;
            }
            return Ok(());
        }
        if self.len == self.slots.len() {
            self.grow();
        }
        self.slots[self.len] = Some(Entry { key, value });
        self.len += 1;
        Ok(())
    }

    pub fn get<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let idx = self.find(key).ok_or(KeyNotFound)?;
        match self.slots[idx].as_ref() {
            Some(entry) => Ok(&entry.value),
            None => Err(KeyNotFound),
        }
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let idx = self.find(key).ok_or(KeyNotFound)?;
        match self.slots[idx].as_mut() {
            Some(entry) => Ok(&mut entry.value),
            None => Err(KeyNotFound),
        }
    }

    pub fn has_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Drop the entry for `key`, shifting later entries left to close the
    /// gap. Absent keys are a no-op.
    pub fn remove<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let Some(idx) = self.find(key) else {
            return;
        };
        for i in idx..self.len - 1 {
            self.slots[i] = self.slots[i + 1].take();
        }
        self.len -= 1;
        self.slots[self.len] = None;
    }

    fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.slots[..self.len]
            .iter()
            .position(|slot| matches!(slot, Some(entry) if entry.key.borrow() == key))
    }
}

impl<K, V> Default for AssocArray<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for AssocArray<K, V> {
    fn clone(&self) -> Self {
        let mut slots: Vec<Option<Entry<K, V>>> = Vec::with_capacity(self.slots.len());
        for slot in self.slots.iter() {
            slots.push(slot.as_ref().map(|entry| Entry {
                key: entry.key.clone(),
                value: entry.value.clone(),
            }));
        }
        AssocArray {
            slots: slots.into_boxed_slice(),
            len: self.len,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AssocArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
