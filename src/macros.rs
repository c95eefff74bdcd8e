/// Builds a [`Cache`](crate::Cache) from `key => value` pairs.
///
/// Later duplicates overwrite earlier values without moving the pair.
///
/// ```rust
/// use assoc_cache::cache;
///
/// let cache = cache! { "one" => 1, "two" => 2 };
/// assert_eq!(cache.key_array(), vec![&"one", &"two"]);
/// ```
#[macro_export]
macro_rules! cache {
    () => {
        $crate::Cache::new()
    };
    ($($k:expr => $v:expr),+ $(,)?) => {
        <$crate::Cache<_, _> as ::core::iter::FromIterator<_>>::from_iter([$(($k, $v)),+])
    };
}
