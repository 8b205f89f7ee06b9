//! Ordered sequence value
//!
//! An [`OrderedSequence`] marks a collection as already sorted. It remembers
//! nothing about the key that produced it, so every re-sort is a full stable
//! sort over the current elements; the existing order only breaks ties.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Immutable, already-sorted sequence
///
/// Clones share storage.
pub struct OrderedSequence<E> {
    items: Arc<Vec<E>>,
}

impl<E> OrderedSequence<E> {
    /// Empty sequence
    pub fn empty() -> Self {
        Self::assume_ordered(Vec::new())
    }

    /// Wrap elements that are already in the desired order
    pub fn assume_ordered(items: Vec<E>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    /// Iterate in order; repeatable
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    /// Elements as a slice
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First element
    pub fn first(&self) -> Option<&E> {
        self.items.first()
    }

    /// Last element
    pub fn last(&self) -> Option<&E> {
        self.items.last()
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> Option<&E> {
        self.items.get(index)
    }
}

impl<E: Clone> OrderedSequence<E> {
    /// Copy the elements out
    pub fn to_vec(&self) -> Vec<E> {
        self.items.to_vec()
    }

    /// Take the elements, cloning only if the storage is shared
    pub fn into_vec(self) -> Vec<E> {
        Arc::unwrap_or_clone(self.items)
    }

    /// Stable ascending re-sort by `key`
    #[must_use]
    pub fn order_by<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&E) -> K,
    {
        self.sort_keyed(key, false)
    }

    /// Stable descending re-sort by `key`
    ///
    /// Equal keys keep their current relative order.
    #[must_use]
    pub fn order_by_descending<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&E) -> K,
    {
        self.sort_keyed(key, true)
    }

    /// Chain a key onto the sequence
    ///
    /// The sequence has no memory of the key that produced it, so this is the
    /// same stable re-sort as [`OrderedSequence::order_by`].
    #[must_use]
    pub fn then_by<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&E) -> K,
    {
        self.order_by(key)
    }

    /// Descending counterpart of [`OrderedSequence::then_by`]
    #[must_use]
    pub fn then_by_descending<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&E) -> K,
    {
        self.order_by_descending(key)
    }

    /// Stable re-sort with a comparator
    #[must_use]
    pub fn sorted_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        let mut items = self.to_vec();
        items.sort_by(compare);
        Self::assume_ordered(items)
    }

    fn sort_keyed<K, F>(&self, mut key: F, descending: bool) -> Self
    where
        K: Ord,
        F: FnMut(&E) -> K,
    {
        let mut keyed: Vec<(K, E)> = self
            .items
            .iter()
            .map(|item| (key(item), item.clone()))
            .collect();
        if descending {
            keyed.sort_by(|a, b| b.0.cmp(&a.0));
        } else {
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
        }
        Self::assume_ordered(keyed.into_iter().map(|(_, item)| item).collect())
    }
}

impl<E> Clone for OrderedSequence<E> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<E> Default for OrderedSequence<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> Deref for OrderedSequence<E> {
    type Target = [E];

    fn deref(&self) -> &[E] {
        &self.items
    }
}

impl<E: PartialEq> PartialEq for OrderedSequence<E> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<E: Eq> Eq for OrderedSequence<E> {}

impl<E: fmt::Debug> fmt::Debug for OrderedSequence<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<'a, E> IntoIterator for &'a OrderedSequence<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<E: Clone> IntoIterator for OrderedSequence<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// Present an already-ordered collection as an [`OrderedSequence`]
pub trait AsOrdered: IntoIterator + Sized {
    /// Wrap the items without sorting them
    fn as_ordered(self) -> OrderedSequence<Self::Item> {
        OrderedSequence::assume_ordered(self.into_iter().collect())
    }
}

impl<I: IntoIterator> AsOrdered for I {}
