use core::fmt;

use crate::raw::{Handle, RawRbTree};

/// A read-only position in a `RbTree`: either an entry or the end position past the last entry.
///
/// Cursors are created by [`RbTree::find`], [`RbTree::lower_bound`], [`RbTree::cursor_front`]
/// and friends. Reading the end position returns `None`.
///
/// Moving forward from the end stays at the end. Moving backward from the end lands on the last
/// entry, and moving backward from the first entry lands on the end.
///
/// # Examples
///
/// ```
/// use beni_tree::RbTree;
///
/// let tree = RbTree::from([(10, 'a'), (20, 'b'), (30, 'c')]);
/// let mut cursor = tree.lower_bound(&15);
/// assert_eq!(cursor.key_value(), Some((&20, &'b')));
/// assert_eq!(cursor.peek_prev(), Some((&10, &'a')));
///
/// cursor.move_next();
/// cursor.move_next();
/// assert!(cursor.is_end());
/// assert_eq!(cursor, tree.cursor_end());
/// ```
///
/// [`RbTree::find`]: crate::RbTree::find
/// [`RbTree::lower_bound`]: crate::RbTree::lower_bound
/// [`RbTree::cursor_front`]: crate::RbTree::cursor_front
pub struct Cursor<'a, K, V> {
    tree: &'a RawRbTree<K, V>,
    current: Option<Handle>,
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) fn new(tree: &'a RawRbTree<K, V>, current: Option<Handle>) -> Self {
        Cursor { tree, current }
    }

    /// Returns `true` if the cursor is at the end position.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the key at the cursor, or `None` at the end position.
    #[must_use]
    pub fn key(&self) -> Option<&'a K> {
        let tree = self.tree;
        self.current.map(|handle| tree.key(handle))
    }

    /// Returns the value at the cursor, or `None` at the end position.
    #[must_use]
    pub fn value(&self) -> Option<&'a V> {
        let tree = self.tree;
        self.current.map(|handle| tree.value(handle))
    }

    /// Returns the entry at the cursor, or `None` at the end position.
    #[must_use]
    pub fn key_value(&self) -> Option<(&'a K, &'a V)> {
        let tree = self.tree;
        self.current.map(|handle| tree.key_value(handle))
    }

    /// Moves to the next entry in key order, or to the end position after the last entry.
    ///
    /// # Complexity
    ///
    /// O(log n) worst case, O(1) amortized over a full walk.
    pub fn move_next(&mut self) {
        if let Some(handle) = self.current {
            self.current = self.tree.next(handle);
        }
    }

    /// Moves to the previous entry in key order. From the end position this is the last entry.
    ///
    /// # Complexity
    ///
    /// O(log n) worst case, O(1) amortized over a full walk.
    pub fn move_prev(&mut self) {
        self.current = match self.current {
            Some(handle) => self.tree.prev(handle),
            None => self.tree.last(),
        };
    }

    /// Returns the entry `move_next` would land on, without moving.
    #[must_use]
    pub fn peek_next(&self) -> Option<(&'a K, &'a V)> {
        let tree = self.tree;
        let next = tree.next(self.current?)?;
        Some(tree.key_value(next))
    }

    /// Returns the entry `move_prev` would land on, without moving.
    #[must_use]
    pub fn peek_prev(&self) -> Option<(&'a K, &'a V)> {
        let tree = self.tree;
        let prev = match self.current {
            Some(handle) => tree.prev(handle),
            None => tree.last(),
        }?;
        Some(tree.key_value(prev))
    }
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Cursor<'_, K, V> {}

impl<K, V> PartialEq for Cursor<'_, K, V> {
    /// Two cursors are equal when they point into the same tree at the same position.
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.tree, other.tree) && self.current == other.current
    }
}

impl<K, V> Eq for Cursor<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Cursor<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.key_value()).finish()
    }
}

/// A position in a `RbTree` that can also modify the value under it or remove its entry.
///
/// Cursors are created by [`RbTree::insert`], [`RbTree::find_mut`],
/// [`RbTree::lower_bound_mut`] and [`RbTree::cursor_front_mut`]. Movement follows the same rules
/// as [`Cursor`].
///
/// [`RbTree::insert`]: crate::RbTree::insert
/// [`RbTree::find_mut`]: crate::RbTree::find_mut
/// [`RbTree::lower_bound_mut`]: crate::RbTree::lower_bound_mut
/// [`RbTree::cursor_front_mut`]: crate::RbTree::cursor_front_mut
pub struct CursorMut<'a, K, V> {
    tree: &'a mut RawRbTree<K, V>,
    current: Option<Handle>,
}

impl<'a, K, V> CursorMut<'a, K, V> {
    pub(crate) fn new(tree: &'a mut RawRbTree<K, V>, current: Option<Handle>) -> Self {
        CursorMut { tree, current }
    }

    /// Returns `true` if the cursor is at the end position.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the key at the cursor, or `None` at the end position.
    #[must_use]
    pub fn key(&self) -> Option<&K> {
        self.current.map(|handle| self.tree.key(handle))
    }

    /// Returns the value at the cursor, or `None` at the end position.
    #[must_use]
    pub fn value(&self) -> Option<&V> {
        self.current.map(|handle| self.tree.value(handle))
    }

    /// Returns the entry at the cursor, or `None` at the end position.
    #[must_use]
    pub fn key_value(&self) -> Option<(&K, &V)> {
        self.current.map(|handle| self.tree.key_value(handle))
    }

    /// Returns a mutable reference to the value at the cursor, or `None` at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::from([(1, 10), (2, 20)]);
    /// let mut cursor = tree.lower_bound_mut(&2);
    /// if let Some(value) = cursor.value_mut() {
    ///     *value += 1;
    /// }
    /// assert_eq!(tree[&2], 21);
    /// ```
    pub fn value_mut(&mut self) -> Option<&mut V> {
        let handle = self.current?;
        Some(self.tree.value_mut(handle))
    }

    /// Returns the key and a mutable reference to the value at the cursor.
    pub fn key_value_mut(&mut self) -> Option<(&K, &mut V)> {
        let handle = self.current?;
        Some(self.tree.key_value_mut(handle))
    }

    /// Converts the cursor into a mutable reference to its value, tied to the tree borrow.
    #[must_use]
    pub fn into_value_mut(self) -> Option<&'a mut V> {
        let CursorMut { tree, current } = self;
        Some(tree.value_mut(current?))
    }

    /// Moves to the next entry in key order, or to the end position after the last entry.
    pub fn move_next(&mut self) {
        if let Some(handle) = self.current {
            self.current = self.tree.next(handle);
        }
    }

    /// Moves to the previous entry in key order. From the end position this is the last entry.
    pub fn move_prev(&mut self) {
        self.current = match self.current {
            Some(handle) => self.tree.prev(handle),
            None => self.tree.last(),
        };
    }

    /// Removes the entry at the cursor and moves to the entry after it.
    ///
    /// Returns `None`, and removes nothing, at the end position. Unlike
    /// [`RbTree::remove`](crate::RbTree::remove), this removes one specific occurrence of a
    /// repeated key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove_current(&mut self) -> Option<(K, V)> {
        let handle = self.current?;
        // Removal relinks nodes rather than moving entries, so the successor handle survives.
        self.current = self.tree.next(handle);
        Some(self.tree.remove_node(handle))
    }

    /// Returns a read-only cursor at the same position.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, K, V> {
        Cursor::new(self.tree, self.current)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CursorMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.key_value()).finish()
    }
}
