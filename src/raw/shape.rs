use core::borrow::Borrow;
use core::cmp::Ordering;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};

/// A read-only view of a tree's links: enough to walk and search it, nothing to reach values.
///
/// Splitting this out of [`RawRbTree`](super::RawRbTree) lets mutable iterators walk the node
/// arena through a shared borrow while they hand out `&mut V` from the value arena.
pub(crate) struct Shape<'a, K> {
    nodes: &'a Arena<Node<K>>,
    root: Option<Handle>,
}

impl<K> Clone for Shape<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Shape<'_, K> {}

impl<'a, K> Shape<'a, K> {
    pub(crate) const fn new(nodes: &'a Arena<Node<K>>, root: Option<Handle>) -> Self {
        Self { nodes, root }
    }

    #[inline]
    pub(crate) fn root(self) -> Option<Handle> {
        self.root
    }

    #[inline]
    pub(crate) fn node(self, handle: Handle) -> &'a Node<K> {
        self.nodes.get(handle)
    }

    #[inline]
    pub(crate) fn key(self, handle: Handle) -> &'a K {
        self.nodes.get(handle).key()
    }

    /// Smallest node, or `None` for an empty tree.
    pub(crate) fn first(self) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, Side::Left))
    }

    /// Largest node, or `None` for an empty tree.
    pub(crate) fn last(self) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, Side::Right))
    }

    /// In-order successor; `None` past the largest node.
    #[inline]
    pub(crate) fn next(self, handle: Handle) -> Option<Handle> {
        self.step(handle, Side::Right)
    }

    /// In-order predecessor; `None` before the smallest node.
    #[inline]
    pub(crate) fn prev(self, handle: Handle) -> Option<Handle> {
        self.step(handle, Side::Left)
    }

    /// Follows `side` links from `handle` to the bottom of the subtree.
    pub(crate) fn extreme(self, mut handle: Handle, side: Side) -> Handle {
        while let Some(child) = self.node(handle).child(side) {
            handle = child;
        }
        handle
    }

    // Successor for `Side::Right`, predecessor for `Side::Left`.
    fn step(self, handle: Handle, side: Side) -> Option<Handle> {
        if let Some(child) = self.node(handle).child(side) {
            return Some(self.extreme(child, side.opposite()));
        }

        let mut current = handle;
        while let Some(parent) = self.node(current).parent() {
            if self.node(parent).child(side) != Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// Plain descent; among equal keys returns whichever the descent meets first.
    pub(crate) fn find<Q>(self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            current = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Leftmost node whose key is `>= key`.
    pub(crate) fn lower_bound<Q>(self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.bound(|node_key| key <= node_key)
    }

    /// Leftmost node whose key is `> key`.
    pub(crate) fn upper_bound<Q>(self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.bound(|node_key| key < node_key)
    }

    // `goes_left` must be monotone over the in-order sequence (false...false, true...true);
    // returns the first node for which it holds.
    fn bound<Q>(self, goes_left: impl Fn(&Q) -> bool) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized,
    {
        let mut best = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            if goes_left(node.key().borrow()) {
                best = Some(handle);
                current = node.left();
            } else {
                current = node.right();
            }
        }
        best
    }
}
