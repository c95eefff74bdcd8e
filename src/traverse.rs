use crate::Cache;

/// Traversal and transformation.
///
/// Callbacks receive `(value, key, cache)` and run in iteration order.
impl<K, V> Cache<K, V> {
    /// Applies `f` to every pair and collects the results in iteration order.
    ///
    /// The returned vector always has [`len`](Cache::len) elements.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache = Cache::from([("one", 1), ("two", 2), ("three", 3)]);
    /// assert_eq!(cache.map(|v, _, _| v * 2), vec![2, 4, 6]);
    /// assert_eq!(cache.map(|_, k, _| k.len()), vec![3, 3, 5]);
    /// ```
    pub fn map<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(&V, &K, &Self) -> U,
    {
        self.pairs.iter().map(|(k, v)| f(v, k, self)).collect()
    }

    /// Like [`map`](Cache::map), but results for which `f` returns `None` are
    /// dropped. The remaining results keep their relative order.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache = Cache::from([("one", 1), ("two", 2), ("three", 3)]);
    /// let even = cache.map_val(|v, _, _| (v % 2 == 0).then_some(*v));
    /// assert_eq!(even, vec![2]);
    /// ```
    pub fn map_val<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(&V, &K, &Self) -> Option<U>,
    {
        self.pairs
            .iter()
            .filter_map(|(k, v)| f(v, k, self))
            .collect()
    }

    /// Calls `f` on every pair for its side effects and returns the container.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache = Cache::from([("one", 1), ("two", 2), ("three", 3)]);
    /// let mut sum = 0;
    /// let len = cache.each(|v, _, _| sum += v).len();
    /// assert_eq!((sum, len), (6, 3));
    /// ```
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&V, &K, &Self),
    {
        self.pairs.iter().for_each(|(k, v)| f(v, k, self));
        self
    }

    /// Calls `f` once with the whole container and returns it.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let mut cache = Cache::from([("one", 1)]);
    /// let tapped = cache.tap(|c| {
    ///     c.insert("four", 4);
    /// });
    /// assert_eq!(tapped.get("four"), Some(&4));
    /// ```
    pub fn tap<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        f(self);
        self
    }

    /// Returns a new container holding the pairs for which `f` returns `true`,
    /// in their original relative order.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let cache = Cache::from([("one", 1), ("two", 2), ("three", 3)]);
    /// assert_eq!(cache.filter(|v, _, _| *v > 1).array(), vec![&2, &3]);
    /// ```
    pub fn filter<F>(&self, mut f: F) -> Self
    where
        K: Clone,
        V: Clone,
        F: FnMut(&V, &K, &Self) -> bool,
    {
        Self {
            pairs: self
                .pairs
                .iter()
                .filter(|(k, v)| f(v, k, self))
                .cloned()
                .collect(),
        }
    }

    /// Returns a new container holding the pairs whose key satisfies `f`.
    pub fn filter_key<F>(&self, mut f: F) -> Self
    where
        K: Clone,
        V: Clone,
        F: FnMut(&K) -> bool,
    {
        Self {
            pairs: self.pairs.iter().filter(|(k, _)| f(k)).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Cache;

    fn sut() -> Cache<&'static str, i32> {
        let mut sut = Cache::new();
        sut.set("one", 1).set("two", 2).set("three", 3);
        sut
    }

    #[test]
    fn map_transforms_every_value_in_order() {
        let sut = sut();
        assert_eq!(sut.map(|v, _, _| v * 2), [2, 4, 6]);
    }

    #[test]
    fn map_passes_key_and_container() {
        let sut = sut();
        let seen = sut.map(|v, k, c| (*k, *v, c.len()));
        assert_eq!(seen, [("one", 1, 3), ("two", 2, 3), ("three", 3, 3)]);
    }

    #[test]
    fn map_on_empty_cache_is_empty() {
        let sut: Cache<&str, i32> = Cache::new();
        assert!(sut.map(|v, _, _| *v).is_empty());
    }

    #[test]
    fn map_val_drops_missing_results() {
        let sut = sut();
        let even = sut.map_val(|v, _, _| if v % 2 == 0 { Some(*v) } else { None });
        assert_eq!(even, [2]);
    }

    #[test]
    fn map_val_receives_the_real_key() {
        let sut = sut();
        let keys = sut.map_val(|v, k, _| (*v > 1).then(|| k.to_string()));
        assert_eq!(
            keys,
            ["two", "three"],
            "Expected the second callback argument to be the pair's key"
        );
    }

    #[test]
    fn each_visits_every_pair_and_chains() {
        let sut = sut();
        let mut sum = 0;
        let mut keys = Vec::new();

        sut.each(|v, _, _| sum += v).each(|_, k, _| keys.push(*k));

        assert_eq!(sum, 6);
        assert_eq!(keys, ["one", "two", "three"]);
    }

    #[test]
    fn tap_runs_once_and_returns_the_container() {
        let mut sut = sut();
        let mut calls = 0;

        let tapped = sut.tap(|c| {
            calls += 1;
            c.insert("four", 4);
        });

        assert_eq!(tapped.get("four"), Some(&4));
        assert_eq!(calls, 1);
        assert_eq!(sut.len(), 4);
    }

    #[test]
    fn filter_keeps_matching_pairs_in_order() {
        let sut = sut();
        let filtered = sut.filter(|v, _, _| *v > 1);

        assert_eq!(filtered.array(), [&2, &3]);
        assert_eq!(filtered.key_array(), [&"two", &"three"]);
        assert_eq!(sut.len(), 3, "Expected the source cache to be untouched");
    }

    #[test]
    fn filter_with_no_matches_is_empty() {
        let sut = sut();
        assert!(sut.filter(|_, _, _| false).is_empty());
    }

    #[test]
    fn filter_key_uses_the_key_only() {
        let sut = sut();
        let filtered = sut.filter_key(|k| *k == "one");
        assert_eq!(filtered.array(), [&1]);
    }
}
