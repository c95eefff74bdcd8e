//! # assoc-cache
//!
//! `assoc-cache` provides [`Cache`], an insertion-ordered associative container
//! decorated with a batch of convenience operations layered on top of the
//! usual map primitives.
//!
//! The container is backed by a `Vec` of key-value pairs. Keys are unique and
//! only need to implement `Eq`; like `HashMap`, inserting a duplicate key
//! overwrites the existing value, but here the pair keeps its original
//! position. Iteration always follows insertion order unless the pairs are
//! explicitly reordered through [`Cache::sort`] or [`Cache::sort_by`].
//!
//! On top of the primitives the container offers:
//! - **Traversal**: [`map`](Cache::map), [`map_val`](Cache::map_val), [`each`](Cache::each), [`tap`](Cache::tap).
//! - **Queries**: [`first`](Cache::first), [`last`](Cache::last), [`at`](Cache::at), [`find`](Cache::find),
//!   [`some`](Cache::some), [`every`](Cache::every), [`random`](Cache::random), [`has_all`](Cache::has_all), ...
//! - **Filtering**: [`filter`](Cache::filter) and [`filter_key`](Cache::filter_key) build new containers.
//! - **Mutation**: [`remove`](Cache::remove), [`remove_by_value`](Cache::remove_by_value), [`sort`](Cache::sort), [`clear`](Cache::clear).
//! - **Comparison**: [`equals`](Cache::equals) and [`difference`](Cache::difference).
//!
//! Absence is always reported through `Option` or `bool`; no operation fails on
//! a missing key or an empty container.
//!
//! ### Example in Rust:
//! ```rust
//! use assoc_cache::Cache;
//!
//! let mut cache = Cache::new();
//! cache.set("one", 1).set("two", 2).set("three", 3);
//!
//! assert_eq!(cache.map(|v, _, _| v * 2), vec![2, 4, 6]);
//! assert_eq!(cache.first(), Some(&1));
//! assert_eq!(cache.last_key(), Some(&"three"));
//! assert_eq!(cache.filter(|v, _, _| *v > 1).array(), vec![&2, &3]);
//! assert!(cache.has_all(["one", "two"]));
//!
//! cache.sort_by(|a, b| b.cmp(a));
//! assert_eq!(cache.array(), vec![&3, &2, &1]);
//! ```
//!
//! ### Features
//! - `tracing`: emit `trace!` events from bulk mutations through the `tracing` crate.
//!   The events are covered by `cargo test --features tracing`.

mod compare;
mod iter;
mod macros;
mod mutate;
mod query;
mod traverse;

pub use compare::{default_compare, Difference};
pub use iter::{IntoIter, IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut};

use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash, Hasher};

use std::collections::hash_map::{DefaultHasher, RandomState};
use std::sync::OnceLock;

/// An insertion-ordered associative container, backed by a `Vec` of key-value pairs.
///
/// Keys are unique under `Eq`. Lookups are linear scans, which keeps the key
/// requirements down to `Eq` alone and performs well on the small to medium
/// datasets this container is meant for.
///
/// ### Example
/// ```rust
/// use assoc_cache::Cache;
///
/// let mut cache = Cache::new();
/// cache.insert("key1", "value1");
/// cache.insert("key2", "value2");
///
/// assert_eq!(cache.get("key1"), Some(&"value1"));
/// assert_eq!(cache.key_array(), vec![&"key1", &"key2"]);
/// ```
pub struct Cache<K, V> {
    pairs: Vec<(K, V)>,
}

impl<K: Eq, V> FromIterator<(K, V)> for Cache<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<K: Eq, V, const N: usize> From<[(K, V); N]> for Cache<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        Self::from_iter(pairs)
    }
}

impl<K, V> Default for Cache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Cache<K, V> {
    /// Creates a new, empty `Cache`.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache: Cache<&str, i32> = Cache::new();
    /// assert!(cache.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Creates a new `Cache` with room for at least `capacity` pairs.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache: Cache<&str, i32> = Cache::with_capacity(10);
    /// assert!(cache.is_empty());
    /// assert!(cache.capacity() >= 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    /// Inserts a key-value pair into the `Cache`.
    ///
    /// If the key already exists its value is replaced in place, keeping the
    /// pair's position in the iteration order, and the old value is returned.
    /// Otherwise the pair is appended.
    ///
    /// ### Returns
    /// - `Some(V)` containing the previous value if the key was present.
    /// - `None` if the key was not present.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let mut cache = Cache::new();
    /// assert!(cache.insert("a", 1).is_none());
    /// cache.insert("b", 2);
    /// assert_eq!(cache.insert("a", 10), Some(1));
    /// assert_eq!(cache.key_array(), vec![&"a", &"b"]);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Eq,
    {
        match self.lookup_mut(&key) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.pairs.push((key, value));
                None
            }
        }
    }

    /// Chaining form of [`insert`](Cache::insert): sets `key` to `value` and
    /// returns the container.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let mut cache = Cache::new();
    /// cache.set("one", 1).set("two", 2).set("one", 11);
    /// assert_eq!(cache.array(), vec![&11, &2]);
    /// ```
    pub fn set(&mut self, key: K, value: V) -> &mut Self
    where
        K: Eq,
    {
        self.insert(key, value);
        self
    }

    /// Returns a reference to the value associated with `key`, if any.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache = Cache::from([("one", 1)]);
    /// assert_eq!(cache.get("one"), Some(&1));
    /// assert_eq!(cache.get("four"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.lookup(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with `key`, if any.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.lookup_mut(key).map(|(_, v)| v)
    }

    /// Returns the stored key and its value for `key`, if any.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.lookup(key)
    }

    /// Returns `true` if the `Cache` contains a pair for `key`.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache = Cache::from([("one", 1)]);
    /// assert!(cache.has("one"));
    /// assert!(!cache.has("four"));
    /// ```
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.pairs.iter().any(|(k, _)| k.borrow() == key)
    }

    /// Removes the pair for `key` and returns its value.
    ///
    /// The remaining pairs keep their relative order.
    /// Use [`remove`](Cache::remove) when only the presence matters.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let mut cache = Cache::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(cache.take("a"), Some(1));
    /// assert_eq!(cache.take("a"), None);
    /// assert_eq!(cache.key_array(), vec![&"b", &"c"]);
    /// ```
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes the pair for `key` and returns both the stored key and the value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key)
            .map(|position| self.pairs.remove(position))
    }

    /// Retains only the pairs for which `f` returns `true`.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let mut cache = Cache::from([("a", 1), ("b", 2), ("c", 3)]);
    /// cache.retain(|_, v| {
    ///     *v *= 2;
    ///     *v > 2
    /// });
    /// assert_eq!(cache.array(), vec![&4, &6]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        #[cfg(feature = "tracing")]
        let before = self.pairs.len();

        self.pairs.retain_mut(|(k, v)| f(k, v));

        #[cfg(feature = "tracing")]
        tracing::trace!(
            len = self.pairs.len(),
            removed = before - self.pairs.len(),
            "cache retain"
        );
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.pairs.iter().position(|(k, _)| k.borrow() == key)
    }

    fn lookup<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.pairs
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(k, v)| (k, v))
    }

    fn lookup_mut<Q>(&mut self, key: &Q) -> Option<(&K, &mut V)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.pairs
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(k, v)| (&*k, v))
    }
}

impl<K: Eq, V> Extend<(K, V)> for Cache<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        let pairs = iter.into_iter();

        let (lower, upper) = pairs.size_hint();
        self.reserve(usize::min(upper.unwrap_or(lower), 8));

        for (key, value) in pairs {
            self.insert(key, value);
        }
    }
}

impl<'a, K: Eq + Clone, V: Clone> Extend<(&'a K, &'a V)> for Cache<K, V> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, pairs: T) {
        self.extend(pairs.into_iter().map(|(k, v)| (k.clone(), v.clone())))
    }
}

impl<K, V> Cache<K, V> {
    /// Shrinks the capacity of the underlying storage as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.pairs.shrink_to_fit();
    }

    /// Shrinks the capacity with a lower bound of `min_capacity`.
    pub fn shrink_to(&mut self, min_capacity: usize) {
        self.pairs.shrink_to(min_capacity);
    }

    /// Reserves capacity for at least `additional` more pairs.
    pub fn reserve(&mut self, additional: usize) {
        self.pairs.reserve(additional);
    }

    /// Returns the number of pairs the `Cache` can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.pairs.capacity()
    }

    /// Returns the number of pairs in the `Cache`.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache = Cache::from([("one", 1), ("two", 2)]);
    /// assert_eq!(cache.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the `Cache` contains no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Removes all pairs. The allocated capacity is kept.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let mut cache = Cache::from([("one", 1), ("two", 2)]);
    /// cache.clear();
    /// assert_eq!(cache.len(), 0);
    /// ```
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(removed = self.pairs.len(), "cache clear");

        self.pairs.clear();
    }

    /// Returns an iterator over the keys, in iteration order.
    pub fn keys(&self) -> Keys<K, V> {
        Keys::from_delegate(self.pairs.iter())
    }

    /// Consumes the `Cache` and returns an iterator over its keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys::from_delegate(self.pairs.into_iter())
    }

    /// Returns an iterator over the values, in iteration order.
    pub fn values(&self) -> Values<K, V> {
        Values::from_delegate(self.pairs.iter())
    }

    /// Returns an iterator over mutable references to the values.
    pub fn values_mut(&mut self) -> ValuesMut<K, V> {
        ValuesMut::from_delegate(self.pairs.iter_mut())
    }

    /// Consumes the `Cache` and returns an iterator over its values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues::from_delegate(self.pairs.into_iter())
    }

    /// Returns an iterator over the pairs, in iteration order.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache = Cache::from([("key1", 1), ("key2", 2)]);
    /// let pairs: Vec<_> = cache.iter().collect();
    /// assert_eq!(&pairs[..], &[(&"key1", &1), (&"key2", &2)]);
    /// ```
    pub fn iter(&self) -> Iter<K, V> {
        Iter::from_delegate(self.pairs.iter())
    }

    /// Returns an iterator over the pairs with mutable access to the values.
    pub fn iter_mut(&mut self) -> IterMut<K, V> {
        IterMut::from_delegate(self.pairs.iter_mut())
    }
}

impl<K, V> IntoIterator for Cache<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_delegate(self.pairs.into_iter())
    }
}

impl<'a, K, V> IntoIterator for &'a Cache<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut Cache<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K: Clone, V: Clone> Clone for Cache<K, V> {
    fn clone(&self) -> Self {
        Self {
            pairs: self.pairs.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.pairs.clone_from(&source.pairs)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Cache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.pairs.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K: Eq, V: PartialEq> PartialEq for Cache<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<K: Eq, V: Eq> Eq for Cache<K, V> {}

// Pairs are hashed independently and folded with xor so that the result does
// not depend on iteration order, matching `PartialEq`.
impl<K: Hash, V: Hash> Hash for Cache<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let hasher_builder = global_hasher_builder();
        let hash = self
            .pairs
            .iter()
            .map(|pair| hasher_builder.hash_one(pair))
            .fold(0, |l, r| l ^ r);

        state.write_usize(self.len());
        state.write_u64(hash);
    }
}

fn global_hasher_builder() -> &'static impl BuildHasher<Hasher = DefaultHasher> {
    static INSTANCE: OnceLock<RandomState> = OnceLock::new();
    INSTANCE.get_or_init(RandomState::new)
}
