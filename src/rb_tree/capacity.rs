use super::RbTree;
use crate::raw::RawRbTree;

impl<K, V> RbTree<K, V> {
    /// Creates an empty tree with room for at least `capacity` entries before reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let tree: RbTree<i32, i32> = RbTree::with_capacity(32);
    /// assert!(tree.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        RbTree {
            raw: RawRbTree::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the tree can hold without reallocating.
    ///
    /// Slots released by removals are reused before the tree grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RbTree;
    ///
    /// let mut tree = RbTree::with_capacity(32);
    /// assert!(tree.capacity() >= 32);
    ///
    /// for i in 0..32 {
    ///     tree.insert(i, i);
    /// }
    /// tree.remove(&7);
    /// tree.insert(100, 100);
    /// assert!(tree.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
