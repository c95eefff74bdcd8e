use core::borrow::Borrow;
use core::cmp::Ordering;

use crate::{default_compare, Cache};

impl<K, V> Cache<K, V> {
    /// Removes the pair for `key`, returning whether it existed.
    ///
    /// Removing an absent key leaves the container untouched.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let mut cache = Cache::from([("one", 1), ("two", 2)]);
    /// assert!(cache.remove("one"));
    /// assert!(!cache.remove("one"));
    /// assert!(!cache.has("one"));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.remove_entry(key).is_some()
    }

    /// Removes every pair for which `f` returns `true`.
    ///
    /// The predicate runs over a snapshot of the container: each pair is
    /// visited exactly once, in iteration order, and every call observes the
    /// container as it was before any removal took place.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let mut cache = Cache::from([("one", 1), ("two", 2), ("three", 3)]);
    /// cache.remove_by_value(|v, _, _| *v < 2);
    /// assert_eq!(cache.array(), vec![&2, &3]);
    /// ```
    pub fn remove_by_value<F>(&mut self, mut f: F)
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        let verdicts: Vec<bool> = self.pairs.iter().map(|(k, v)| f(v, k, self)).collect();

        #[cfg(feature = "tracing")]
        let before = self.pairs.len();

        let mut verdicts = verdicts.into_iter();
        self.pairs.retain(|_| !verdicts.next().unwrap_or(false));

        #[cfg(feature = "tracing")]
        tracing::trace!(
            len = self.pairs.len(),
            removed = before - self.pairs.len(),
            "cache remove_by_value"
        );
    }

    /// Reorders the pairs in place by ascending value, using [`default_compare`].
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let mut cache = Cache::from([("b", 2), ("c", 3), ("a", 1)]);
    /// assert_eq!(cache.sort().key_array(), vec![&"a", &"b", &"c"]);
    /// ```
    pub fn sort(&mut self) -> &mut Self
    where
        V: PartialOrd,
    {
        self.sort_by(default_compare::<V>)
    }

    /// Reorders the pairs in place so that values ascend under `compare`.
    ///
    /// Keys travel with their values. The sort is stable: pairs comparing
    /// `Equal` keep their relative order.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let mut cache = Cache::from([("one", 1), ("two", 2), ("three", 3)]);
    /// cache.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(cache.array(), vec![&3, &2, &1]);
    /// assert_eq!(cache.first_key(), Some(&"three"));
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F) -> &mut Self
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        self.pairs.sort_by(|(_, a), (_, b)| compare(a, b));

        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.pairs.len(), "cache sort");

        self
    }
}
