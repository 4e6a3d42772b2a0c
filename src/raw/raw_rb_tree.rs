use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::vec::Vec;
use log::{debug, trace};
use smallvec::{SmallVec, smallvec};

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Node, Side};
use super::shape::Shape;

/// The red-black tree engine backing `RbTree`.
pub(crate) struct RawRbTree<K, V> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K>>,
    /// Arena storing all values, one per node.
    values: Arena<V>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

impl<K, V> RawRbTree<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            values: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` entries before reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            values: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of entries in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity().min(self.values.capacity())
    }

    /// Releases every entry. Keys and values are dropped slot by slot, without recursion.
    pub(crate) fn clear(&mut self) {
        if !self.is_empty() {
            debug!("clearing red-black tree of {} entries", self.len());
        }
        self.nodes.clear();
        self.values.clear();
        self.root = None;
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn shape(&self) -> Shape<'_, K> {
        Shape::new(&self.nodes, self.root)
    }

    /// Borrows the links and the values independently, so values can be handed out mutably
    /// while the links are walked.
    pub(crate) fn split_mut(&mut self) -> (Shape<'_, K>, &mut Arena<V>) {
        (Shape::new(&self.nodes, self.root), &mut self.values)
    }

    #[cfg(test)]
    pub(crate) fn node(&self, handle: Handle) -> &Node<K> {
        self.nodes.get(handle)
    }

    pub(crate) fn key(&self, handle: Handle) -> &K {
        self.nodes.get(handle).key()
    }

    pub(crate) fn value(&self, handle: Handle) -> &V {
        self.values.get(self.nodes.get(handle).value())
    }

    pub(crate) fn value_mut(&mut self, handle: Handle) -> &mut V {
        self.values.get_mut(self.nodes.get(handle).value())
    }

    pub(crate) fn key_value(&self, handle: Handle) -> (&K, &V) {
        let node = self.nodes.get(handle);
        (node.key(), self.values.get(node.value()))
    }

    pub(crate) fn key_value_mut(&mut self, handle: Handle) -> (&K, &mut V) {
        let node = self.nodes.get(handle);
        (node.key(), self.values.get_mut(node.value()))
    }

    pub(crate) fn first(&self) -> Option<Handle> {
        self.shape().first()
    }

    pub(crate) fn last(&self) -> Option<Handle> {
        self.shape().last()
    }

    pub(crate) fn next(&self, handle: Handle) -> Option<Handle> {
        self.shape().next(handle)
    }

    pub(crate) fn prev(&self, handle: Handle) -> Option<Handle> {
        self.shape().prev(handle)
    }

    /// Moves every entry out in key order, leaving the tree empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let shape = self.shape();
        let mut order = Vec::with_capacity(self.len());
        let mut current = shape.first();
        while let Some(handle) = current {
            order.push(handle);
            current = shape.next(handle);
        }

        debug!("draining red-black tree of {} entries", order.len());
        let entries = order
            .into_iter()
            .map(|handle| {
                let node = self.nodes.take(handle);
                let value = self.values.take(node.value());
                (node.into_key(), value)
            })
            .collect();
        self.clear();
        entries
    }

    #[inline]
    fn is_red(&self, link: Option<Handle>) -> bool {
        link.is_some_and(|handle| self.nodes.get(handle).is_red())
    }

    #[inline]
    fn paint(&mut self, handle: Handle, color: Color) {
        self.nodes.get_mut(handle).set_color(color);
    }

    /// Points `parent`'s link to `old` (or the root, when `parent` is `None`) at `new`.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = self.nodes.get_mut(parent);
                let side = node
                    .side_of(old)
                    .expect("`RawRbTree::replace_child()` - `old` is not a child of `parent`!");
                node.set_child(side, new);
            }
        }
    }

    /// Hangs `replacement` where `target` hangs. `target`'s own links are left untouched.
    fn transplant(&mut self, target: Handle, replacement: Option<Handle>) {
        let parent = self.nodes.get(target).parent();
        self.replace_child(parent, target, replacement);
        if let Some(replacement) = replacement {
            self.nodes.get_mut(replacement).set_parent(parent);
        }
    }

    /// Rotates `pivot` down toward `side`; its child on the opposite side takes its place.
    fn rotate(&mut self, pivot: Handle, side: Side) {
        let up = side.opposite();
        let riser = self
            .nodes
            .get(pivot)
            .child(up)
            .expect("`RawRbTree::rotate()` - `pivot` has no child to rotate up!");

        let inner = self.nodes.get(riser).child(side);
        self.nodes.get_mut(pivot).set_child(up, inner);
        if let Some(inner) = inner {
            self.nodes.get_mut(inner).set_parent(Some(pivot));
        }

        self.transplant(pivot, Some(riser));

        self.nodes.get_mut(riser).set_child(side, Some(pivot));
        self.nodes.get_mut(pivot).set_parent(Some(riser));
    }

    /// Restores the red-black properties after `node` was attached as a red leaf.
    fn insert_fixup(&mut self, mut node: Handle) {
        while let Some(parent) = self.nodes.get(node).parent() {
            if !self.nodes.get(parent).is_red() {
                break;
            }
            // A red parent is never the root, so the grandparent exists.
            let grandparent = self
                .nodes
                .get(parent)
                .parent()
                .expect("`RawRbTree::insert_fixup()` - red node at the root!");
            let side = self
                .nodes
                .get(grandparent)
                .side_of(parent)
                .expect("`RawRbTree::insert_fixup()` - broken parent link!");
            let uncle = self.nodes.get(grandparent).child(side.opposite());

            if let Some(uncle) = uncle.filter(|&uncle| self.nodes.get(uncle).is_red()) {
                trace!("insert fixup: red uncle, recoloring and moving up");
                self.paint(parent, Color::Black);
                self.paint(uncle, Color::Black);
                self.paint(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.nodes.get(parent).side_of(node) == Some(side.opposite()) {
                trace!("insert fixup: inner child, rotating parent outward");
                self.rotate(parent, side);
                parent = node;
            }

            trace!("insert fixup: outer child, rotating grandparent");
            self.paint(parent, Color::Black);
            self.paint(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
            break;
        }

        if let Some(root) = self.root {
            self.paint(root, Color::Black);
        }
    }

    /// Restores the red-black properties after a black node left the slot now held by `node`.
    ///
    /// The slot may be empty, so its parent is tracked alongside it.
    fn remove_fixup(&mut self, mut node: Option<Handle>, mut parent: Option<Handle>) {
        while node != self.root && !self.is_red(node) {
            let Some(above) = parent else {
                break;
            };
            let side = if self.nodes.get(above).left() == node {
                Side::Left
            } else {
                Side::Right
            };
            let far = side.opposite();
            let sibling_of = |tree: &Self| {
                tree.nodes
                    .get(above)
                    .child(far)
                    .expect("`RawRbTree::remove_fixup()` - doubly black node without a sibling!")
            };

            let mut sibling = sibling_of(self);
            if self.nodes.get(sibling).is_red() {
                trace!("remove fixup: red sibling, rotating it above the parent");
                self.paint(sibling, Color::Black);
                self.paint(above, Color::Red);
                self.rotate(above, side);
                sibling = sibling_of(self);
            }

            let near_nephew = self.nodes.get(sibling).child(side);
            let far_nephew = self.nodes.get(sibling).child(far);
            if !self.is_red(near_nephew) && !self.is_red(far_nephew) {
                trace!("remove fixup: black nephews, pushing blackness up");
                self.paint(sibling, Color::Red);
                node = Some(above);
                parent = self.nodes.get(above).parent();
                continue;
            }

            if !self.is_red(far_nephew) {
                trace!("remove fixup: red near nephew, rotating sibling");
                if let Some(near_nephew) = near_nephew {
                    self.paint(near_nephew, Color::Black);
                }
                self.paint(sibling, Color::Red);
                self.rotate(sibling, far);
                sibling = sibling_of(self);
            }

            trace!("remove fixup: red far nephew, rotating parent");
            let parent_color = self.nodes.get(above).color();
            self.paint(sibling, parent_color);
            self.paint(above, Color::Black);
            if let Some(far_nephew) = self.nodes.get(sibling).child(far) {
                self.paint(far_nephew, Color::Black);
            }
            self.rotate(above, side);
            node = self.root;
            break;
        }

        if let Some(node) = node {
            self.paint(node, Color::Black);
        }
    }

    /// Unlinks `target` from the tree, rebalances, and returns its entry.
    pub(crate) fn remove_node(&mut self, target: Handle) -> (K, V) {
        let (left, right) = {
            let node = self.nodes.get(target);
            (node.left(), node.right())
        };
        let mut removed_color = self.nodes.get(target).color();

        let (hole, hole_parent) = match (left, right) {
            (None, only) | (only, None) => {
                let parent = self.nodes.get(target).parent();
                self.transplant(target, only);
                (only, parent)
            }
            (Some(left), Some(right)) => {
                let successor = self.shape().extreme(right, Side::Left);
                removed_color = self.nodes.get(successor).color();
                let hole = self.nodes.get(successor).right();

                let hole_parent = if successor == right {
                    successor
                } else {
                    let parent = self.nodes.get(successor).parent();
                    self.transplant(successor, hole);
                    self.nodes.get_mut(successor).set_child(Side::Right, Some(right));
                    self.nodes.get_mut(right).set_parent(Some(successor));
                    parent.expect("`RawRbTree::remove_node()` - successor has no parent!")
                };

                self.transplant(target, Some(successor));
                self.nodes.get_mut(successor).set_child(Side::Left, Some(left));
                self.nodes.get_mut(left).set_parent(Some(successor));
                let target_color = self.nodes.get(target).color();
                self.paint(successor, target_color);

                (hole, Some(hole_parent))
            }
        };

        if removed_color == Color::Black {
            self.remove_fixup(hole, hole_parent);
        }

        let node = self.nodes.take(target);
        let value = self.values.take(node.value());
        (node.into_key(), value)
    }
}

impl<K: Ord, V> RawRbTree<K, V> {
    /// Finds the attachment point for `key`: the parent to hang it from and on which side.
    ///
    /// With `unique` set, an equal key stops the descent and its node is returned as the error.
    fn locate_slot(&self, key: &K, unique: bool) -> Result<(Option<Handle>, Side), Handle> {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            side = match key.cmp(node.key()) {
                Ordering::Less => Side::Left,
                Ordering::Equal if unique => return Err(handle),
                Ordering::Equal | Ordering::Greater => Side::Right,
            };
            parent = Some(handle);
            current = node.child(side);
        }

        Ok((parent, side))
    }

    fn attach(&mut self, parent: Option<Handle>, side: Side, key: K, value: V) -> Handle {
        let value = self.values.alloc(value);
        let handle = self.nodes.alloc(Node::new_red(key, value, parent));
        match parent {
            None => self.root = Some(handle),
            Some(parent) => self.nodes.get_mut(parent).set_child(side, Some(handle)),
        }
        self.insert_fixup(handle);
        handle
    }

    /// Inserts unless an equal key is present.
    ///
    /// Returns the node holding the key and whether it was newly created. When the key already
    /// exists, the stored entry is untouched and `key` and `value` are dropped.
    pub(crate) fn insert_unique(&mut self, key: K, value: V) -> (Handle, bool) {
        match self.locate_slot(&key, true) {
            Err(existing) => (existing, false),
            Ok((parent, side)) => (self.attach(parent, side, key, value), true),
        }
    }

    /// Inserts unconditionally; an equal key is placed after every existing equal key.
    pub(crate) fn insert_multi(&mut self, key: K, value: V) -> Handle {
        let Ok((parent, side)) = self.locate_slot(&key, false) else {
            unreachable!("`RawRbTree::insert_multi()` - descent stopped on an equal key!");
        };
        self.attach(parent, side, key, value)
    }

    pub(crate) fn find<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.shape().find(key)
    }

    /// The first node in key order whose key equals `key`.
    pub(crate) fn find_first<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.shape()
            .lower_bound(key)
            .filter(|&handle| Borrow::<Q>::borrow(self.key(handle)) == key)
    }

    pub(crate) fn lower_bound<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.shape().lower_bound(key)
    }

    pub(crate) fn upper_bound<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.shape().upper_bound(key)
    }

    /// Removes the first entry in key order whose key equals `key`.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.find_first(key)?;
        Some(self.remove_node(handle))
    }
}

impl<K: Clone, V: Clone> Clone for RawRbTree<K, V> {
    /// Copies keys, values, colors and shape. Runs pre-order off an explicit stack; the copy's
    /// arenas come out densely packed.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len());
        let Some(root) = self.root else {
            return copy;
        };
        debug!("cloning red-black tree of {} entries", self.len());

        let mut pending: SmallVec<[(Handle, Option<Handle>, Side); 32]> = smallvec![(root, None, Side::Left)];
        while let Some((source, parent, side)) = pending.pop() {
            let node = self.nodes.get(source);
            let value = copy.values.alloc(self.values.get(node.value()).clone());
            let mut duplicate = Node::new_red(node.key().clone(), value, parent);
            duplicate.set_color(node.color());
            let handle = copy.nodes.alloc(duplicate);

            match parent {
                None => copy.root = Some(handle),
                Some(parent) => copy.nodes.get_mut(parent).set_child(side, Some(handle)),
            }

            // Right first, so the left subtree is copied first.
            if let Some(right) = node.right() {
                pending.push((right, Some(handle), Side::Right));
            }
            if let Some(left) = node.left() {
                pending.push((left, Some(handle), Side::Left));
            }
        }

        copy
    }
}
