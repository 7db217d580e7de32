//! Fixed-size hash table with chained buckets
//!
//! The number of slots is chosen at creation and never changes: there is no
//! rehashing, so a heavily loaded map degrades to a linear scan per bucket.

use crate::error::{Error, Result};

/// Hashes a key into one of `slots` buckets
pub fn slot_of(key: &str, slots: usize) -> usize {
    (xxhash_rust::xxh3::xxh3_64(key.as_bytes()) % slots as u64) as usize
}

/// Maps string keys to owned items
///
/// Each bucket is an association list in insertion order; a key maps to at
/// most one item.
pub struct KeyedMap<T> {
    buckets: Vec<Vec<(String, T)>>,
    length: usize,
}

impl<T> KeyedMap<T> {
    /// Creates a new map with a fixed number of slots (which must be positive)
    pub fn new(slots: usize) -> Result<Self> {
        if slots == 0 {
            return Err(Error::invalid_arg("slots", "the map needs at least one slot"));
        }
        let mut buckets = Vec::with_capacity(slots);
        buckets.resize_with(slots, Vec::new);
        Ok(Self { buckets, length: 0 })
    }

    /// Number of slots chosen at creation
    pub fn slots(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    fn bucket(&self, key: &str) -> &Vec<(String, T)> {
        &self.buckets[slot_of(key, self.buckets.len())]
    }

    fn bucket_mut(&mut self, key: &str) -> &mut Vec<(String, T)> {
        let slot = slot_of(key, self.buckets.len());
        &mut self.buckets[slot]
    }

    /// Inserts a new item, taking ownership of it
    ///
    /// Fails if the key is empty or already present; in the latter case the
    /// existing item is left untouched.
    pub fn insert(&mut self, key: &str, item: T) -> Result<()> {
        if key.is_empty() {
            return Err(Error::invalid_arg("key", "keys cannot be empty"));
        }
        let bucket = self.bucket_mut(key);
        if bucket.iter().any(|(k, _)| k == key) {
            return Err(Error::DuplicateKey(key.to_string()));
        }
        bucket.push((key.to_string(), item));
        self.length += 1;
        Ok(())
    }

    pub fn find(&self, key: &str) -> Option<&T> {
        self.bucket(key)
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, item)| item)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut T> {
        self.bucket_mut(key)
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, item)| item)
    }

    /// Returns the item for `key`, inserting `make()` first if it is absent
    pub fn find_or_insert_with<F>(&mut self, key: &str, make: F) -> Result<&mut T>
    where
        F: FnOnce() -> T,
    {
        if key.is_empty() {
            return Err(Error::invalid_arg("key", "keys cannot be empty"));
        }
        let slot = slot_of(key, self.buckets.len());
        let bucket = &mut self.buckets[slot];
        let position = match bucket.iter().position(|(k, _)| k == key) {
            Some(position) => position,
            None => {
                bucket.push((key.to_string(), make()));
                self.length += 1;
                bucket.len() - 1
            }
        };
        Ok(&mut bucket[position].1)
    }

    /// Removes an entry and gives its item back to the caller
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let bucket = self.bucket_mut(key);
        let position = bucket.iter().position(|(k, _)| k == key)?;
        let (_, item) = bucket.remove(position);
        self.length -= 1;
        Some(item)
    }

    /// Iterates over all the entries, in bucket order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, item)| (k.as_str(), item)))
    }
}

impl<T> IntoIterator for KeyedMap<T> {
    type Item = (String, T);
    type IntoIter = std::iter::Flatten<std::vec::IntoIter<Vec<(String, T)>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter().flatten()
    }
}
