use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::{Bound, Index, RangeBounds};

use crate::KeyNotFound;
use crate::raw::{Arena, Handle, RawRbTree, Shape, Span};

mod capacity;
mod cursor;
mod pretty;

pub use cursor::{Cursor, CursorMut};
pub use pretty::Pretty;

/// Validates that the start bound does not exceed the end bound.
///
/// # Panics
///
/// Panics if `start > end` or if `start == end` and both bounds are `Excluded`.
fn validate_range_bounds<T, R>(range: &R)
where
    T: ?Sized + Ord,
    R: RangeBounds<T>,
{
    if let (Bound::Included(start) | Bound::Excluded(start), Bound::Included(end) | Bound::Excluded(end)) =
        (range.start_bound(), range.end_bound())
    {
        let valid =
            if matches!(range.start_bound(), Bound::Excluded(_)) && matches!(range.end_bound(), Bound::Excluded(_)) {
                start < end
            } else {
                start <= end
            };
        assert!(valid, "range start is greater than range end in RbTree");
    }
}

/// An ordered map based on a [red-black tree].
///
/// Given a key type with a [total order], the tree stores its entries in key order. Keys must
/// implement [`Ord`] so that two keys can always be compared to determine their [`Ordering`].
///
/// Every node lives in an arena owned by the tree and is addressed by a compact handle, so the
/// tree needs no per-node allocation, no reference counting and no recursion to drop.
///
/// The tree holds either unique keys ([`insert`]) or repeated keys ([`insert_multi`]); the two
/// may be mixed freely. Equal keys are kept next to each other, in insertion order.
///
/// Iterators obtained from functions such as [`RbTree::iter`], [`RbTree::into_iter`],
/// [`RbTree::values`], or [`RbTree::keys`] produce their items in key order, and take
/// worst-case logarithmic and amortized constant time per item returned.
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative to
/// any other key, as determined by the [`Ord`] trait, changes while it is in the tree. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
/// The behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `RbTree` that observed the logic error and not result in undefined behavior. This could
/// include panics, incorrect results, aborts, memory leaks, and non-termination.
///
/// # Examples
///
/// ```
/// use beni_tree::RbTree;
///
/// let mut planets = RbTree::new();
///
/// planets.insert("Mercury", 0.4);
/// planets.insert("Venus", 0.7);
/// planets.insert("Earth", 1.0);
/// planets.insert("Mars", 1.5);
///
/// // A repeated key is rejected by `insert` and leaves the stored value alone.
/// let (_, inserted) = planets.insert("Earth", 9.9);
/// assert!(!inserted);
/// assert_eq!(planets["Earth"], 1.0);
///
/// // Look up by key, or fail with a typed error.
/// assert_eq!(planets.get("Mars"), Some(&1.5));
/// assert!(planets.at("Pluto").is_err());
///
/// // Iterate in key order.
/// let names: Vec<_> = planets.keys().copied().collect();
/// assert_eq!(names, ["Earth", "Mars", "Mercury", "Venus"]);
/// ```
///
/// Repeated keys:
///
/// ```
/// use beni_tree::RbTree;
///
/// let mut log = RbTree::new();
/// log.insert_multi(2, "second");
/// log.insert_multi(1, "first");
/// log.insert_multi(2, "third");
///
/// assert_eq!(log.count(&2), 2);
/// let twos: Vec<_> = log.equal_range(&2).map(|(_, v)| *v).collect();
/// assert_eq!(twos, ["second", "third"]);
/// ```
///
/// [red-black tree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
/// [`insert`]: RbTree::insert
/// [`insert_multi`]: RbTree::insert_multi
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
pub struct RbTree<K, V> {
    raw: RawRbTree<K, V>,
}

/// An iterator over a sub-range of entries in a `RbTree`.
///
/// This `struct` is created by the [`range`] and [`equal_range`] methods on [`RbTree`]. See
/// their documentation for more.
///
/// [`range`]: RbTree::range
/// [`equal_range`]: RbTree::equal_range
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range<'a, K, V> {
    tree: &'a RawRbTree<K, V>,
    span: Span,
}

/// A mutable iterator over a sub-range of entries in a `RbTree`.
///
/// This `struct` is created by the [`range_mut`] method on [`RbTree`]. See its
/// documentation for more.
///
/// [`range_mut`]: RbTree::range_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RangeMut<'a, K, V> {
    shape: Shape<'a, K>,
    values: *mut Arena<V>,
    span: Span,
    _marker: PhantomData<&'a mut V>,
}

// SAFETY: RangeMut behaves as (&K, &mut V) over disjoint entries. Keys are only ever read, so
// sending it needs K: Sync; values are handed out mutably, so it needs V: Send.
unsafe impl<K: Sync, V: Send> Send for RangeMut<'_, K, V> {}
// SAFETY: Sharing a RangeMut only allows reading its position, never the entries behind it.
unsafe impl<K: Sync, V: Sync> Sync for RangeMut<'_, K, V> {}

/// An iterator over the entries of a `RbTree`.
///
/// This `struct` is created by the [`iter`] method on [`RbTree`]. See its
/// documentation for more.
///
/// # Examples
///
/// ```
/// use beni_tree::RbTree;
///
/// let tree = RbTree::from([(1, "a"), (2, "b")]);
/// let mut iter = tree.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: RbTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    range: Range<'a, K, V>,
    remaining: usize,
}

/// A mutable iterator over the entries of a `RbTree`.
///
/// This `struct` is created by the [`iter_mut`] method on [`RbTree`]. See its
/// documentation for more.
///
/// # Examples
///
/// ```
/// use beni_tree::RbTree;
///
/// let mut tree = RbTree::from([(1, 10), (2, 20)]);
/// for (_, value) in tree.iter_mut() {
///     *value += 1;
/// }
/// let values: Vec<_> = tree.values().copied().collect();
/// assert_eq!(values, [11, 21]);
/// ```
///
/// [`iter_mut`]: RbTree::iter_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterMut<'a, K, V> {
    range: RangeMut<'a, K, V>,
    remaining: usize,
}

/// An owning iterator over the entries of a `RbTree`, sorted by key.
///
/// This `struct` is created by the [`into_iter`] method on [`RbTree`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of a `RbTree`.
///
/// This `struct` is created by the [`keys`] method on [`RbTree`]. See its
/// documentation for more.
///
/// [`keys`]: RbTree::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a `RbTree`.
///
/// This `struct` is created by the [`values`] method on [`RbTree`]. See its
/// documentation for more.
///
/// [`values`]: RbTree::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// A mutable iterator over the values of a `RbTree`.
///
/// This `struct` is created by the [`values_mut`] method on [`RbTree`]. See its
/// documentation for more.
///
/// [`values_mut`]: RbTree::values_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<K, V> RbTree<K, V> {
    /// Makes a new, empty `RbTree`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    ///
    /// // entries can now be inserted into the empty tree
    /// tree.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> RbTree<K, V> {
        RbTree { raw: RawRbTree::new() }
    }

    /// Returns the number of entries in the tree, counting repeated keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert_multi(1, "a");
    /// tree.insert_multi(1, "b");
    /// assert_eq!(tree.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// assert!(tree.is_empty());
    /// tree.insert(1, "a");
    /// assert!(!tree.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the tree, removing all entries.
    ///
    /// Every key and value is dropped exactly once, without recursion.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut a = RbTree::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the first key-value pair in the tree.
    /// The key in this pair is the minimum key in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// assert_eq!(tree.first_key_value(), None);
    /// tree.insert(1, "b");
    /// tree.insert(2, "a");
    /// assert_eq!(tree.first_key_value(), Some((&1, &"b")));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first().map(|handle| self.raw.key_value(handle))
    }

    /// Returns the last key-value pair in the tree.
    /// The key in this pair is the maximum key in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.insert(1, "b");
    /// tree.insert(2, "a");
    /// assert_eq!(tree.last_key_value(), Some((&2, &"a")));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last().map(|handle| self.raw.key_value(handle))
    }

    /// Removes and returns the first entry in the tree.
    /// The key of this entry is the minimum key that was in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.insert(1, "a");
    /// tree.insert(2, "b");
    /// while let Some((key, _val)) = tree.pop_first() {
    ///     assert!(tree.iter().all(|(k, _v)| *k > key));
    /// }
    /// assert!(tree.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let handle = self.raw.first()?;
        Some(self.raw.remove_node(handle))
    }

    /// Removes and returns the last entry in the tree.
    /// The key of this entry is the maximum key that was in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.insert(1, "a");
    /// tree.insert(2, "b");
    /// assert_eq!(tree.pop_last(), Some((2, "b")));
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let handle = self.raw.last()?;
        Some(self.raw.remove_node(handle))
    }

    /// Retains only the entries specified by the predicate.
    ///
    /// In other words, remove all pairs `(k, v)` for which `f(&k, &mut v)` returns `false`.
    /// The entries are visited in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree: RbTree<i32, i32> = (0..8).map(|x| (x, x * 10)).collect();
    /// // Keep only the entries with even-numbered keys.
    /// tree.retain(|&k, _| k % 2 == 0);
    /// assert!(tree.into_iter().eq(vec![(0, 0), (2, 20), (4, 40), (6, 60)]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n log n) in the worst case (when many entries are removed).
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut current = self.raw.first();
        while let Some(handle) = current {
            // Removal relinks nodes instead of moving entries, so `next` stays valid.
            current = self.raw.next(handle);
            let (key, value) = self.raw.key_value_mut(handle);
            if !f(key, value) {
                self.raw.remove_node(handle);
            }
        }
    }

    /// Returns a cursor at the first entry, or the end cursor if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let tree = RbTree::from([(3, 'c'), (1, 'a')]);
    /// let mut cursor = tree.cursor_front();
    /// assert_eq!(cursor.key(), Some(&1));
    /// cursor.move_next();
    /// assert_eq!(cursor.key(), Some(&3));
    /// cursor.move_next();
    /// assert!(cursor.is_end());
    /// ```
    #[must_use]
    pub fn cursor_front(&self) -> Cursor<'_, K, V> {
        Cursor::new(&self.raw, self.raw.first())
    }

    /// Returns a cursor at the last entry, or the end cursor if the tree is empty.
    #[must_use]
    pub fn cursor_back(&self) -> Cursor<'_, K, V> {
        Cursor::new(&self.raw, self.raw.last())
    }

    /// Returns the end cursor, one past the last entry.
    ///
    /// Moving it backwards lands on the last entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let tree = RbTree::from([(1, 'a'), (2, 'b')]);
    /// let mut cursor = tree.cursor_end();
    /// assert_eq!(cursor.key(), None);
    /// cursor.move_prev();
    /// assert_eq!(cursor.key(), Some(&2));
    /// ```
    #[must_use]
    pub fn cursor_end(&self) -> Cursor<'_, K, V> {
        Cursor::new(&self.raw, None)
    }

    /// Returns a mutable cursor at the first entry, or the end cursor if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::from([(1, 10), (2, 20), (3, 30)]);
    /// let mut cursor = tree.cursor_front_mut();
    /// while let Some((key, _)) = cursor.key_value() {
    ///     if key % 2 == 1 {
    ///         cursor.remove_current();
    ///     } else {
    ///         cursor.move_next();
    ///     }
    /// }
    /// assert_eq!(tree.into_iter().collect::<Vec<_>>(), [(2, 20)]);
    /// ```
    #[must_use]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, K, V> {
        let first = self.raw.first();
        CursorMut::new(&mut self.raw, first)
    }

    /// Gets an iterator over the entries of the tree, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.insert(3, "c");
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    ///
    /// let (first_key, first_value) = tree.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; each iteration step is O(1) amortized.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            range: Range {
                tree: &self.raw,
                span: Span::full(self.raw.shape()),
            },
            remaining: self.raw.len(),
        }
    }

    /// Gets a mutable iterator over the entries of the tree, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::from([("a", 1), ("b", 2), ("c", 3)]);
    ///
    /// // add 10 to the value if the key isn't "a"
    /// for (key, value) in tree.iter_mut() {
    ///     if key != &"a" {
    ///         *value += 10;
    ///     }
    /// }
    /// assert_eq!(tree["c"], 13);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; each iteration step is O(1) amortized.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let remaining = self.raw.len();
        let (shape, values) = self.raw.split_mut();
        IterMut {
            range: RangeMut {
                shape,
                values: core::ptr::from_mut(values),
                span: Span::full(shape),
                _marker: PhantomData,
            },
            remaining,
        }
    }

    /// Gets an iterator over the keys of the tree, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut a = RbTree::new();
    /// a.insert(2, "b");
    /// a.insert(1, "a");
    ///
    /// let keys: Vec<_> = a.keys().cloned().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the tree, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut a = RbTree::new();
    /// a.insert(1, "hello");
    /// a.insert(2, "goodbye");
    ///
    /// let values: Vec<&str> = a.values().cloned().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Gets a mutable iterator over the values of the tree, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut a = RbTree::new();
    /// a.insert(1, String::from("hello"));
    /// a.insert(2, String::from("goodbye"));
    ///
    /// for value in a.values_mut() {
    ///     value.push_str("!");
    /// }
    ///
    /// let values: Vec<String> = a.values().cloned().collect();
    /// assert_eq!(values, [String::from("hello!"), String::from("goodbye!")]);
    /// ```
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut { inner: self.iter_mut() }
    }

    /// Returns a [`Display`](fmt::Display) rendering of the tree's shape, one node per line with
    /// its color, for debugging.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let tree = RbTree::from([(2, ()), (1, ()), (3, ())]);
    /// assert_eq!(
    ///     tree.pretty().to_string(),
    ///     "2 (B)\n├── 1 (R)\n└── 3 (R)\n",
    /// );
    /// ```
    pub fn pretty(&self) -> Pretty<'_, K, V> {
        Pretty::new(&self.raw)
    }
}

impl<K: Ord, V> RbTree<K, V> {
    /// Inserts a key-value pair unless the key is already present.
    ///
    /// Returns a cursor at the entry holding the key, and whether the entry was newly created.
    /// When the key is already present nothing is allocated, the stored key and value are left
    /// untouched and the passed `key` and `value` are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// assert!(tree.insert(37, "a").1);
    ///
    /// let (cursor, inserted) = tree.insert(37, "b");
    /// assert!(!inserted);
    /// assert_eq!(cursor.value(), Some(&"a"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, key: K, value: V) -> (CursorMut<'_, K, V>, bool) {
        let (handle, inserted) = self.raw.insert_unique(key, value);
        (CursorMut::new(&mut self.raw, Some(handle)), inserted)
    }

    /// Inserts a key-value pair even if the key is already present.
    ///
    /// The new entry is placed after every existing entry with an equal key. Returns a cursor at
    /// the new entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.insert_multi(5, "first");
    /// tree.insert_multi(5, "second");
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.get(&5), Some(&"first"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert_multi(&mut self, key: K, value: V) -> CursorMut<'_, K, V> {
        let handle = self.raw.insert_multi(key, value);
        CursorMut::new(&mut self.raw, Some(handle))
    }

    /// Removes a key from the tree, returning the value at the key if the key
    /// was previously in the tree.
    ///
    /// When the key is repeated, the first entry in key order is removed.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.insert(1, "a");
    /// assert_eq!(tree.remove(&1), Some("a"));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the tree, returning the stored key and value if the key
    /// was previously in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.insert(1, "a");
    /// assert_eq!(tree.remove_entry(&1), Some((1, "a")));
    /// assert_eq!(tree.remove_entry(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key)
    }

    /// Returns `true` if the tree contains an entry for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.insert(1, "a");
    /// assert!(tree.contains_key(&1));
    /// assert!(!tree.contains_key(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.find(key).is_some()
    }

    /// Returns the number of entries whose key equals `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let tree: RbTree<_, _> = [(1, 'a'), (3, 'c')].into_iter().collect();
    /// assert_eq!(tree.count(&1), 1);
    /// assert_eq!(tree.count(&2), 0);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n + k), where k is the returned count.
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.equal_range(key).count()
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// When the key is repeated, the value of the first entry in key order is returned.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.insert(1, "a");
    /// assert_eq!(tree.get(&1), Some(&"a"));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.find_first(key).map(|handle| self.raw.value(handle))
    }

    /// Returns the stored key and value corresponding to the supplied key.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.insert(String::from("one"), 1);
    /// assert_eq!(tree.get_key_value("one"), Some((&String::from("one"), &1)));
    /// assert_eq!(tree.get_key_value("two"), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.find_first(key).map(|handle| self.raw.key_value(handle))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.insert(1, "a");
    /// if let Some(x) = tree.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(tree[&1], "b");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.find_first(key)?;
        Some(self.raw.value_mut(handle))
    }

    /// Returns a reference to the value corresponding to the key, or [`KeyNotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] if no entry has the key. The tree is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::{KeyNotFound, RbTree};
    ///
    /// let tree = RbTree::from([(1, "a")]);
    /// assert_eq!(tree.at(&1), Ok(&"a"));
    /// assert_eq!(tree.at(&2), Err(KeyNotFound));
    /// ```
    pub fn at<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.get(key).ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value corresponding to the key, or [`KeyNotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] if no entry has the key. The tree is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::from([(1, 10)]);
    /// *tree.at_mut(&1)? += 5;
    /// assert_eq!(tree[&1], 15);
    /// assert!(tree.at_mut(&2).is_err());
    /// # Ok::<(), beni_tree::KeyNotFound>(())
    /// ```
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.get_mut(key).ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value for `key`, inserting the value returned by `f`
    /// first if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree: RbTree<&str, Vec<u32>> = RbTree::new();
    /// tree.get_or_insert_with("evens", Vec::new).push(2);
    /// tree.get_or_insert_with("evens", Vec::new).push(4);
    /// assert_eq!(tree["evens"], [2, 4]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get_or_insert_with<F>(&mut self, key: K, f: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let handle = match self.raw.find_first(&key) {
            Some(handle) => handle,
            None => self.raw.insert_unique(key, f()).0,
        };
        self.raw.value_mut(handle)
    }

    /// Returns a mutable reference to the value for `key`, inserting `V::default()` first if
    /// the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut counts: RbTree<&str, u32> = RbTree::new();
    /// for word in ["a", "b", "a"] {
    ///     *counts.get_or_insert_default(word) += 1;
    /// }
    /// assert_eq!(counts["a"], 2);
    /// assert_eq!(counts["b"], 1);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Returns a cursor at the first entry whose key equals `key`, or the end cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let tree = RbTree::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    /// let mut cursor = tree.find(&2);
    /// cursor.move_next();
    /// assert_eq!(cursor.key_value(), Some((&3, &'c')));
    /// assert!(tree.find(&7).is_end());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn find<Q>(&self, key: &Q) -> Cursor<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        Cursor::new(&self.raw, self.raw.find_first(key))
    }

    /// Returns a mutable cursor at the first entry whose key equals `key`, or the end cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.insert_multi(1, "x");
    /// tree.insert_multi(1, "y");
    ///
    /// // Remove the second occurrence only.
    /// let mut cursor = tree.find_mut(&1);
    /// cursor.move_next();
    /// assert_eq!(cursor.remove_current(), Some((1, "y")));
    /// assert_eq!(tree.get(&1), Some(&"x"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn find_mut<Q>(&mut self, key: &Q) -> CursorMut<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.find_first(key);
        CursorMut::new(&mut self.raw, handle)
    }

    /// Returns a cursor at the first entry whose key is not less than `key`, or the end cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let tree = RbTree::from([(1, ()), (2, ()), (4, ()), (5, ()), (7, ())]);
    /// assert_eq!(tree.lower_bound(&3).key(), Some(&4));
    /// assert_eq!(tree.lower_bound(&4).key(), Some(&4));
    /// assert!(tree.lower_bound(&8).is_end());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn lower_bound<Q>(&self, key: &Q) -> Cursor<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        Cursor::new(&self.raw, self.raw.lower_bound(key))
    }

    /// Returns a mutable cursor at the first entry whose key is not less than `key`, or the end
    /// cursor.
    pub fn lower_bound_mut<Q>(&mut self, key: &Q) -> CursorMut<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.lower_bound(key);
        CursorMut::new(&mut self.raw, handle)
    }

    /// Returns a cursor at the first entry whose key is greater than `key`, or the end cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let tree = RbTree::from([(1, ()), (2, ()), (4, ()), (5, ()), (7, ())]);
    /// assert_eq!(tree.upper_bound(&4).key(), Some(&5));
    /// assert!(tree.upper_bound(&7).is_end());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn upper_bound<Q>(&self, key: &Q) -> Cursor<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        Cursor::new(&self.raw, self.raw.upper_bound(key))
    }

    /// Returns an iterator over exactly the entries whose key equals `key`, in insertion order.
    ///
    /// The iterator covers the entries from [`lower_bound`](Self::lower_bound) up to, but not
    /// including, [`upper_bound`](Self::upper_bound).
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// for (key, value) in [(5, 'a'), (15, 'b'), (10, 'c'), (15, 'd'), (15, 'e')] {
    ///     tree.insert_multi(key, value);
    /// }
    ///
    /// let fifteens: Vec<_> = tree.equal_range(&15).map(|(_, v)| *v).collect();
    /// assert_eq!(fifteens, ['b', 'd', 'e']);
    /// assert_eq!(tree.equal_range(&7).next(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; each iteration step is O(1) amortized.
    pub fn equal_range<Q>(&self, key: &Q) -> Range<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let first = self.raw.lower_bound(key);
        let end = self.raw.upper_bound(key);
        Range {
            tree: &self.raw,
            span: Span::between(self.raw.shape(), first, end),
        }
    }

    /// Constructs a double-ended iterator over a sub-range of entries in the tree.
    /// The simplest way is to use the range syntax `min..max`, thus `range(min..max)` will
    /// yield entries from min (inclusive) to max (exclusive).
    /// The range may also be entered as `(Bound<T>, Bound<T>)`, so for example
    /// `range((Excluded(4), Included(10)))` will yield a left-exclusive, right-inclusive
    /// range from 4 to 10.
    ///
    /// # Panics
    ///
    /// Panics if range `start > end`.
    /// Panics if range `start == end` and both bounds are `Excluded`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::ops::Bound::Included;
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.insert(3, "a");
    /// tree.insert(5, "b");
    /// tree.insert(8, "c");
    /// for (&key, &value) in tree.range((Included(&4), Included(&8))) {
    ///     println!("{key}: {value}");
    /// }
    /// assert_eq!(Some((&5, &"b")), tree.range(4..).next());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; each iteration step is O(1) amortized.
    pub fn range<T, R>(&self, range: R) -> Range<'_, K, V>
    where
        T: ?Sized + Ord,
        K: Borrow<T>,
        R: RangeBounds<T>,
    {
        validate_range_bounds(&range);
        let (first, end) = self.span_limits(&range);
        Range {
            tree: &self.raw,
            span: Span::between(self.raw.shape(), first, end),
        }
    }

    /// Constructs a mutable double-ended iterator over a sub-range of entries in the tree.
    ///
    /// # Panics
    ///
    /// Panics if range `start > end`.
    /// Panics if range `start == end` and both bounds are `Excluded`.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree: RbTree<&str, i32> =
    ///     [("Alice", 0), ("Bob", 0), ("Carol", 0), ("Cheryl", 0)].into();
    /// for (_, balance) in tree.range_mut("B".."Cheryl") {
    ///     *balance += 100;
    /// }
    /// let balances: Vec<_> = tree.values().copied().collect();
    /// assert_eq!(balances, [0, 100, 100, 0]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; each iteration step is O(1) amortized.
    pub fn range_mut<T, R>(&mut self, range: R) -> RangeMut<'_, K, V>
    where
        T: ?Sized + Ord,
        K: Borrow<T>,
        R: RangeBounds<T>,
    {
        validate_range_bounds(&range);
        let (first, end) = self.span_limits(&range);
        let (shape, values) = self.raw.split_mut();
        RangeMut {
            shape,
            values: core::ptr::from_mut(values),
            span: Span::between(shape, first, end),
            _marker: PhantomData,
        }
    }

    // First node inside `range`, and the first node past it.
    fn span_limits<T, R>(&self, range: &R) -> (Option<Handle>, Option<Handle>)
    where
        T: ?Sized + Ord,
        K: Borrow<T>,
        R: RangeBounds<T>,
    {
        let first = match range.start_bound() {
            Bound::Included(start) => self.raw.lower_bound(start),
            Bound::Excluded(start) => self.raw.upper_bound(start),
            Bound::Unbounded => self.raw.first(),
        };
        let end = match range.end_bound() {
            Bound::Included(end) => self.raw.upper_bound(end),
            Bound::Excluded(end) => self.raw.lower_bound(end),
            Bound::Unbounded => None,
        };
        (first, end)
    }
}

impl<K: Clone, V: Clone> Clone for RbTree<K, V> {
    fn clone(&self) -> Self {
        RbTree { raw: self.raw.clone() }
    }
}

impl<K: Hash, V: Hash> Hash for RbTree<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for RbTree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for RbTree<K, V> {}

impl<K: PartialOrd, V: PartialOrd> PartialOrd for RbTree<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord, V: Ord> Ord for RbTree<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RbTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for RbTree<K, V> {
    fn default() -> Self {
        RbTree::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RbTree<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tree = RbTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for RbTree<K, V> {
    /// Inserts every pair with [`insert`](RbTree::insert): a key already present keeps its value.
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.raw.insert_unique(k, v);
        }
    }
}

impl<'a, K: Ord + Copy, V: Copy> Extend<(&'a K, &'a V)> for RbTree<K, V> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.raw.insert_unique(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a RbTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut RbTree<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

impl<K, V> IntoIterator for RbTree<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the tree, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let tree = RbTree::from([(2, "b"), (1, "a")]);
    /// let mut iter = tree.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<K, Q, V> Index<&Q> for RbTree<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the tree.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for RbTree<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let handle = self.span.pop_front(tree.shape())?;
        Some(tree.key_value(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.span.is_empty() { (0, Some(0)) } else { (1, Some(self.tree.len())) }
    }
}

impl<K, V> DoubleEndedIterator for Range<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let handle = self.span.pop_back(tree.shape())?;
        Some(tree.key_value(handle))
    }
}

impl<K, V> FusedIterator for Range<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Range<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Clone for Range<'_, K, V> {
    fn clone(&self) -> Self {
        Range {
            tree: self.tree,
            span: self.span,
        }
    }
}

impl<'a, K, V> Iterator for RangeMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.shape.node(self.span.pop_front(self.shape)?);
        // SAFETY: `values` comes from the exclusive borrow held for 'a, and the span yields every
        // node at most once, so no two returned references alias.
        let value = unsafe { &mut *Arena::get_raw(self.values, node.value()) };
        Some((node.key(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.span.is_empty() { (0, Some(0)) } else { (1, None) }
    }
}

impl<K, V> DoubleEndedIterator for RangeMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let node = self.shape.node(self.span.pop_back(self.shape)?);
        // SAFETY: See `next`; both ends draw from the same span.
        let value = unsafe { &mut *Arena::get_raw(self.values, node.value()) };
        Some((node.key(), value))
    }
}

impl<K, V> FusedIterator for RangeMut<'_, K, V> {}

impl<K: fmt::Debug, V> fmt::Debug for RangeMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = f.debug_list();
        let mut span = self.span;
        while let Some(handle) = span.pop_front(self.shape) {
            keys.entry(self.shape.key(handle));
        }
        keys.finish()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.range.next()?;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let entry = self.range.next_back()?;
        self.remaining -= 1;
        Some(entry)
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            range: self.range.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.range.next()?;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let entry = self.range.next_back()?;
        self.remaining -= 1;
        Some(entry)
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<K, V> fmt::Debug for IterMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("remaining", &self.remaining).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<K, V> Default for IntoIter<K, V> {
    /// Creates an empty `rb_tree::IntoIter`.
    ///
    /// ```
    /// # use beni_tree::rb_tree;
    /// let iter: rb_tree::IntoIter<u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: alloc::vec::Vec::new().into_iter(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<&'a mut V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ValuesMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

impl<K, V> fmt::Debug for ValuesMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuesMut").field("remaining", &self.inner.len()).finish()
    }
}
