//! ChainedHashMap: separate-chaining table with selector indirection and
//! explicit resize.
//!
//! Buckets are [`Chain`]s; a pluggable [`HashStrategy`] maps the display
//! form of a *selector* (the key by default, any caller-supplied value via
//! the `*_via` methods) to a bucket index. The table never resizes itself:
//! growth is an explicit, stop-the-world [`resize`](ChainedHashMap::resize)
//! that always re-buckets by key.

use crate::chain::{self, Chain};
use crate::hash_strategy::{HashStrategy, WeightedCharSum};
use core::fmt::{self, Display};

/// Rejected table geometry: a chaining table needs at least one bucket.
#[derive(Debug, PartialEq, Eq)]
pub enum CapacityError {
    ZeroCapacity,
}

/// A separate-chaining hash map over `Display`-able keys.
///
/// Entries normally live in the bucket their key hashes to, but every lookup
/// and mutation has a `*_via` variant that hashes an alternate selector
/// instead. That indirection lets a caller index one logical key space by an
/// auxiliary value (see [`FrequencyRanker`](crate::FrequencyRanker), which
/// buckets words by their occurrence count). The table does not remember
/// which selector placed an entry: moving a key between selectors is the
/// caller's remove-then-put responsibility, and a key re-`put` under a new
/// selector without removal leaves a stale duplicate reachable only by
/// [`contains_key`](Self::contains_key)'s full scan.
pub struct ChainedHashMap<K, V, H = WeightedCharSum> {
    buckets: Vec<Chain<K, V>>,
    capacity: usize,
    size: usize,
    strategy: H,
}

impl<K, V, H> ChainedHashMap<K, V, H>
where
    K: Eq + Display,
    H: HashStrategy + Default,
{
    /// Table with `capacity` buckets and the default strategy.
    pub fn with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        Self::with_capacity_and_strategy(capacity, H::default())
    }
}

impl<K, V, H> ChainedHashMap<K, V, H>
where
    K: Eq + Display,
    H: HashStrategy,
{
    /// Table with `capacity` buckets and an injected hash strategy.
    /// Zero capacity is a caller error, rejected up front.
    pub fn with_capacity_and_strategy(capacity: usize, strategy: H) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError::ZeroCapacity);
        }
        Ok(Self {
            buckets: (0..capacity).map(|_| Chain::new()).collect(),
            capacity,
            size: 0,
            strategy,
        })
    }

    fn index_with<S>(strategy: &H, selector: &S, capacity: usize) -> usize
    where
        S: Display + ?Sized,
    {
        // capacity > 0 is a construction invariant, so the modulo is total.
        (strategy.hash_str(&selector.to_string()) % capacity as u64) as usize
    }

    /// Bucket index the given selector hashes to under the current capacity.
    /// Pure: depends only on the strategy, the selector's display form, and
    /// the capacity.
    pub fn bucket_index<S>(&self, selector: &S) -> usize
    where
        S: Display + ?Sized,
    {
        Self::index_with(&self.strategy, selector, self.capacity)
    }

    /// Shared view of one bucket's chain, or `None` if the index is out of
    /// range. Read-only so table bookkeeping cannot be bypassed.
    pub fn bucket(&self, index: usize) -> Option<&Chain<K, V>> {
        self.buckets.get(index)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Look up `key` in the bucket `key` itself hashes to.
    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.bucket_index(key);
        self.buckets[idx].find(key)
    }

    /// Look up `key` in the bucket `selector` hashes to. Only that one chain
    /// is searched; there is no fallback to the key's own bucket.
    pub fn get_via<S>(&self, key: &K, selector: &S) -> Option<&V>
    where
        S: Display + ?Sized,
    {
        let idx = self.bucket_index(selector);
        self.buckets[idx].find(key)
    }

    /// Insert or overwrite `key` in the bucket `key` hashes to. Returns the
    /// previous value on overwrite (size unchanged), `None` on fresh insert
    /// (size grows by one).
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.bucket_index(&key);
        self.put_in_bucket(idx, key, value)
    }

    /// Insert or overwrite `key` in the bucket `selector` hashes to.
    pub fn put_via<S>(&mut self, key: K, value: V, selector: &S) -> Option<V>
    where
        S: Display + ?Sized,
    {
        let idx = self.bucket_index(selector);
        self.put_in_bucket(idx, key, value)
    }

    fn put_in_bucket(&mut self, idx: usize, key: K, value: V) -> Option<V> {
        let chain = &mut self.buckets[idx];
        if let Some(slot) = chain.find_mut(&key) {
            return Some(core::mem::replace(slot, value));
        }
        chain.push_front(key, value);
        self.size += 1;
        None
    }

    /// Remove `key` from the bucket `key` hashes to, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.bucket_index(key);
        self.remove_in_bucket(idx, key)
    }

    /// Remove `key` from the bucket `selector` hashes to. The selector must
    /// match the one used at insertion time or the entry will not be found.
    pub fn remove_via<S>(&mut self, key: &K, selector: &S) -> Option<V>
    where
        S: Display + ?Sized,
    {
        let idx = self.bucket_index(selector);
        self.remove_in_bucket(idx, key)
    }

    fn remove_in_bucket(&mut self, idx: usize, key: &K) -> Option<V> {
        let removed = self.buckets[idx].remove(key);
        if removed.is_some() {
            self.size -= 1;
        }
        removed
    }

    /// Whether `key` exists anywhere in the table. Scans every bucket:
    /// entries placed via an alternate selector are not reachable through
    /// the key's own hash, so this is the only total existence query.
    /// O(capacity + size).
    pub fn contains_key(&self, key: &K) -> bool {
        self.buckets.iter().any(|chain| chain.find(key).is_some())
    }

    /// Rehash every entry into `new_capacity` buckets. Re-bucketing is
    /// always by key: any alternate-selector placement is discarded and
    /// key-based addressing restored. The sweep is bucket-major,
    /// head-to-tail within each old chain; the new bucket array replaces
    /// the old one only after the sweep completes. Never triggered
    /// automatically. O(capacity + size).
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), CapacityError> {
        if new_capacity == 0 {
            return Err(CapacityError::ZeroCapacity);
        }
        let mut new_buckets: Vec<Chain<K, V>> = (0..new_capacity).map(|_| Chain::new()).collect();
        for chain in &mut self.buckets {
            while let Some((key, value)) = chain.pop_front() {
                let idx = Self::index_with(&self.strategy, &key, new_capacity);
                new_buckets[idx].push_front(key, value);
            }
        }
        self.buckets = new_buckets;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Number of buckets with no entries. O(capacity).
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    /// `size / capacity`, exact as a float.
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity as f64
    }

    /// Drop every entry; capacity is unchanged.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.size = 0;
    }

    /// Iterate every entry, bucket-major, head-to-tail within each chain.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            outer: self.buckets.iter(),
            inner: None,
        }
    }
}

/// Entry iterator over the whole table.
pub struct Iter<'a, K, V> {
    outer: core::slice::Iter<'a, Chain<K, V>>,
    inner: Option<chain::Iter<'a, K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.inner.as_mut().and_then(|it| it.next()) {
                return Some(entry);
            }
            self.inner = Some(self.outer.next()?.iter());
        }
    }
}

impl<K, V, H> fmt::Debug for ChainedHashMap<K, V, H>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.buckets.iter().enumerate() {
            write!(f, "{i}: [")?;
            for (j, (k, v)) in chain.iter().enumerate() {
                if j > 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "({k:?}, {v:?})")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
