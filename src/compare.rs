use core::cmp::Ordering;
use core::fmt;

use crate::Cache;

/// Outcome of [`Cache::difference`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Difference<K> {
    /// The two containers hold a different number of pairs; `delta` is the
    /// absolute difference between their lengths.
    SizeMismatch { delta: usize },
    /// The containers have the same length; these are the keys of the other
    /// container missing from this one, in the other container's order.
    Keys(Vec<K>),
}

impl<K> Difference<K> {
    /// Returns the missing keys, or `None` on a size mismatch.
    pub fn keys(&self) -> Option<&[K]> {
        match self {
            Self::Keys(keys) => Some(keys),
            Self::SizeMismatch { .. } => None,
        }
    }

    /// Consumes the outcome, returning the missing keys if the sizes matched.
    pub fn into_keys(self) -> Option<Vec<K>> {
        match self {
            Self::Keys(keys) => Some(keys),
            Self::SizeMismatch { .. } => None,
        }
    }
}

impl<K: fmt::Display> fmt::Display for Difference<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { delta } => write!(f, "size difference by: {delta}"),
            Self::Keys(keys) => {
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}")?;
                }
                Ok(())
            }
        }
    }
}

/// Orders `a` against `b` with a plain "greater-than" probe.
///
/// Equal values give `Equal`, `a > b` gives `Greater` and everything else,
/// incomparable values such as `NaN` included, gives `Less`.
///
/// ### Example
/// ```rust
/// use assoc_cache::default_compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(default_compare(&1, &2), Ordering::Less);
/// assert_eq!(default_compare(&2, &2), Ordering::Equal);
/// assert_eq!(default_compare(&3, &2), Ordering::Greater);
/// ```
pub fn default_compare<T>(a: &T, b: &T) -> Ordering
where
    T: PartialOrd + ?Sized,
{
    if a == b {
        Ordering::Equal
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

impl<K, V> Cache<K, V> {
    /// Returns `true` if `other` has the same length and maps every key of
    /// this container to an equal value. Iteration order is not compared.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::Cache;
    ///
    /// let a = Cache::from([("one", 1), ("two", 2)]);
    /// let mut b = Cache::from([("two", 2), ("one", 1)]);
    /// assert!(a.equals(&b));
    ///
    /// b.insert("three", 3);
    /// assert!(!a.equals(&b));
    /// ```
    pub fn equals(&self, other: &Self) -> bool
    where
        K: Eq,
        V: PartialEq,
    {
        if self.len() != other.len() {
            return false;
        }

        if core::ptr::eq(self, other) {
            return true;
        }

        self.pairs
            .iter()
            .all(|(k, v)| other.get(k).is_some_and(|w| v == w))
    }

    /// Compares the key sets of two containers.
    ///
    /// When the lengths differ the outcome is [`Difference::SizeMismatch`];
    /// otherwise it lists the keys of `other` that this container lacks.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_cache::{Cache, Difference};
    ///
    /// let a = Cache::from([("one", 1), ("two", 2), ("three", 3)]);
    /// let b = Cache::from([("two", 2), ("three", 3), ("four", 4)]);
    /// assert_eq!(a.difference(&b), Difference::Keys(vec![&"four"]));
    ///
    /// let c = Cache::from([("one", 1)]);
    /// let outcome = a.difference(&c);
    /// assert_eq!(outcome, Difference::SizeMismatch { delta: 2 });
    /// assert_eq!(outcome.to_string(), "size difference by: 2");
    /// ```
    pub fn difference<'a>(&self, other: &'a Self) -> Difference<&'a K>
    where
        K: Eq,
    {
        if self.len() != other.len() {
            return Difference::SizeMismatch {
                delta: self.len().abs_diff(other.len()),
            };
        }

        Difference::Keys(other.keys().filter(|k| !self.has(*k)).collect())
    }
}
