use core::borrow::Borrow;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::Cache;

impl<K, V> Cache<K, V> {
    /// Returns the value of the first pair, or `None` if the container is empty.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache = Cache::from([("one", 1), ("two", 2)]);
    /// assert_eq!(cache.first(), Some(&1));
    /// assert_eq!(Cache::<&str, i32>::new().first(), None);
    /// ```
    pub fn first(&self) -> Option<&V> {
        self.pairs.first().map(|(_, v)| v)
    }

    /// Returns the key of the first pair.
    pub fn first_key(&self) -> Option<&K> {
        self.pairs.first().map(|(k, _)| k)
    }

    /// Returns the value of the last pair.
    pub fn last(&self) -> Option<&V> {
        self.pairs.last().map(|(_, v)| v)
    }

    /// Returns the key of the last pair.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache = Cache::from([("one", 1), ("three", 3)]);
    /// assert_eq!(cache.last_key(), Some(&"three"));
    /// ```
    pub fn last_key(&self) -> Option<&K> {
        self.pairs.last().map(|(k, _)| k)
    }

    /// Returns the value at the 0-based `index` in iteration order, or `None`
    /// when the index is out of bounds.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache = Cache::from([("one", 1), ("two", 2), ("three", 3)]);
    /// assert_eq!(cache.at(0), Some(&1));
    /// assert_eq!(cache.at(2), Some(&3));
    /// assert_eq!(cache.at(3), None);
    /// ```
    pub fn at(&self, index: usize) -> Option<&V> {
        self.pairs.get(index).map(|(_, v)| v)
    }

    /// Returns the first value whose pair satisfies `f`.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache = Cache::from([("one", 1), ("two", 2), ("three", 3)]);
    /// assert_eq!(cache.find(|v, _, _| *v > 1), Some(&2));
    /// assert_eq!(cache.find(|v, _, _| *v > 5), None);
    /// ```
    pub fn find<F>(&self, mut f: F) -> Option<&V>
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        self.pairs
            .iter()
            .find(|(k, v)| f(v, k, self))
            .map(|(_, v)| v)
    }

    /// Returns the first key whose pair satisfies `f`.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache = Cache::from([("one", 1), ("two", 2), ("three", 3)]);
    /// assert_eq!(cache.find_key(|v, _, _| *v > 2), Some(&"three"));
    /// ```
    pub fn find_key<F>(&self, mut f: F) -> Option<&K>
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        self.pairs
            .iter()
            .find(|(k, v)| f(v, k, self))
            .map(|(k, _)| k)
    }

    /// Returns `true` if at least one pair satisfies `f`.
    pub fn some<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        self.pairs.iter().any(|(k, v)| f(v, k, self))
    }

    /// Returns `true` if every pair satisfies `f`. An empty container
    /// satisfies any predicate.
    pub fn every<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        self.pairs.iter().all(|(k, v)| f(v, k, self))
    }

    /// Returns a uniformly chosen value, drawn from the thread-local RNG.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache = Cache::from([("one", 1), ("two", 2), ("three", 3)]);
    /// let value = cache.random().unwrap();
    /// assert!([1, 2, 3].contains(value));
    /// ```
    pub fn random(&self) -> Option<&V> {
        self.random_with(&mut rand::thread_rng())
    }

    /// Returns a uniformly chosen key, drawn from the thread-local RNG.
    pub fn random_key(&self) -> Option<&K> {
        self.random_key_with(&mut rand::thread_rng())
    }

    /// Returns a uniformly chosen value, drawn from `rng`.
    pub fn random_with<R>(&self, rng: &mut R) -> Option<&V>
    where
        R: Rng + ?Sized,
    {
        self.pairs.choose(rng).map(|(_, v)| v)
    }

    /// Returns a uniformly chosen key, drawn from `rng`.
    pub fn random_key_with<R>(&self, rng: &mut R) -> Option<&K>
    where
        R: Rng + ?Sized,
    {
        self.pairs.choose(rng).map(|(k, _)| k)
    }

    /// Collects references to all values, in iteration order.
    pub fn array(&self) -> Vec<&V> {
        self.values().collect()
    }

    /// Collects references to all keys, in iteration order.
    pub fn key_array(&self) -> Vec<&K> {
        self.keys().collect()
    }

    /// Returns `true` if every key in `keys` is present.
    ///
    /// `keys` may be an array, a slice, a `Vec` or any other iterable of
    /// borrowed keys. Asking for no keys at all yields `true`.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache = Cache::from([("one", 1), ("two", 2), ("three", 3)]);
    /// assert!(cache.has_all(["one", "two"]));
    /// assert!(!cache.has_all(["one", "four"]));
    ///
    /// let wanted = vec!["three"];
    /// assert!(cache.has_all(wanted.iter().copied()));
    /// ```
    pub fn has_all<'q, Q, I>(&self, keys: I) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        keys.into_iter().all(|key| self.has(key))
    }

    /// Returns `true` if at least one key in `keys` is present. Asking for no
    /// keys at all yields `false`.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache = Cache::from([("one", 1), ("two", 2), ("three", 3)]);
    /// assert!(cache.has_any(["one", "four"]));
    /// assert!(!cache.has_any(["four", "five"]));
    /// ```
    pub fn has_any<'q, Q, I>(&self, keys: I) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        keys.into_iter().any(|key| self.has(key))
    }
}
