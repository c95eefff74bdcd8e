//! Iterator adaptors over the pairs of a [`Cache`](crate::Cache).
//!
//! Every adaptor wraps the matching `Vec`/slice iterator and projects the
//! stored `(K, V)` tuple, so all of them are exact-size, fused and
//! double-ended, and all of them yield in iteration order.

use core::fmt;
use core::iter::FusedIterator;

macro_rules! delegate_iterator {
    (
        $(#[$meta:meta])*
        $name:ident<$($lt:lifetime)?> over $delegate:ty => $item:ty, |$pair:pat_param| $project:expr
    ) => {
        $(#[$meta])*
        pub struct $name<$($lt,)? K, V> {
            delegate: $delegate,
        }

        impl<$($lt,)? K, V> $name<$($lt,)? K, V> {
            pub(crate) fn from_delegate(delegate: $delegate) -> Self {
                Self { delegate }
            }
        }

        impl<$($lt,)? K, V> Iterator for $name<$($lt,)? K, V> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.delegate.next().map(|$pair| $project)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.delegate.size_hint()
            }

            fn count(self) -> usize {
                self.delegate.count()
            }

            fn last(self) -> Option<Self::Item> {
                self.delegate.last().map(|$pair| $project)
            }

            fn nth(&mut self, n: usize) -> Option<Self::Item> {
                self.delegate.nth(n).map(|$pair| $project)
            }
        }

        impl<$($lt,)? K, V> DoubleEndedIterator for $name<$($lt,)? K, V> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.delegate.next_back().map(|$pair| $project)
            }

            fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
                self.delegate.nth_back(n).map(|$pair| $project)
            }
        }

        impl<$($lt,)? K, V> ExactSizeIterator for $name<$($lt,)? K, V> {
            fn len(&self) -> usize {
                self.delegate.len()
            }
        }

        impl<$($lt,)? K, V> FusedIterator for $name<$($lt,)? K, V> {}

        impl<$($lt,)? K: fmt::Debug, V: fmt::Debug> fmt::Debug for $name<$($lt,)? K, V> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&self.delegate.as_slice())
                    .finish()
            }
        }
    };
}

delegate_iterator! {
    /// Borrowing iterator over the pairs, created by [`Cache::iter`](crate::Cache::iter).
    Iter<'a> over std::slice::Iter<'a, (K, V)> => (&'a K, &'a V), |(k, v)| (k, v)
}

delegate_iterator! {
    /// Iterator over the pairs with mutable values, created by [`Cache::iter_mut`](crate::Cache::iter_mut).
    IterMut<'a> over std::slice::IterMut<'a, (K, V)> => (&'a K, &'a mut V), |(k, v)| (&*k, v)
}

delegate_iterator! {
    /// Borrowing iterator over the keys, created by [`Cache::keys`](crate::Cache::keys).
    Keys<'a> over std::slice::Iter<'a, (K, V)> => &'a K, |(k, _)| k
}

delegate_iterator! {
    /// Borrowing iterator over the values, created by [`Cache::values`](crate::Cache::values).
    Values<'a> over std::slice::Iter<'a, (K, V)> => &'a V, |(_, v)| v
}

delegate_iterator! {
    /// Mutable iterator over the values, created by [`Cache::values_mut`](crate::Cache::values_mut).
    ValuesMut<'a> over std::slice::IterMut<'a, (K, V)> => &'a mut V, |(_, v)| v
}

delegate_iterator! {
    /// Owning iterator over the pairs, created by `Cache::into_iter`.
    IntoIter<> over std::vec::IntoIter<(K, V)> => (K, V), |pair| pair
}

delegate_iterator! {
    /// Owning iterator over the keys, created by [`Cache::into_keys`](crate::Cache::into_keys).
    IntoKeys<> over std::vec::IntoIter<(K, V)> => K, |(k, _)| k
}

delegate_iterator! {
    /// Owning iterator over the values, created by [`Cache::into_values`](crate::Cache::into_values).
    IntoValues<> over std::vec::IntoIter<(K, V)> => V, |(_, v)| v
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_delegate(self.delegate.clone())
    }
}

impl<'a, K, V> Clone for Keys<'a, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_delegate(self.delegate.clone())
    }
}

impl<'a, K, V> Clone for Values<'a, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_delegate(self.delegate.clone())
    }
}

impl<K: Clone, V: Clone> Clone for IntoIter<K, V> {
    fn clone(&self) -> Self {
        Self::from_delegate(self.delegate.clone())
    }
}

impl<K: Clone, V: Clone> Clone for IntoKeys<K, V> {
    fn clone(&self) -> Self {
        Self::from_delegate(self.delegate.clone())
    }
}

impl<K: Clone, V: Clone> Clone for IntoValues<K, V> {
    fn clone(&self) -> Self {
        Self::from_delegate(self.delegate.clone())
    }
}
