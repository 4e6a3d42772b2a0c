use super::handle::Handle;
use super::shape::Shape;

/// The unvisited part of an in-order walk, as inclusive front and back nodes.
///
/// Both ends close in on each other with successor/predecessor steps; once they meet the span
/// is exhausted from either direction.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Span {
    front: Option<Handle>,
    back: Option<Handle>,
}

impl Span {
    pub(crate) const EMPTY: Self = Self {
        front: None,
        back: None,
    };

    /// The whole tree.
    pub(crate) fn full<K>(shape: Shape<'_, K>) -> Self {
        Self {
            front: shape.first(),
            back: shape.last(),
        }
    }

    /// Nodes from `first` (inclusive) up to `end` (exclusive, `None` meaning past the last node).
    ///
    /// `first` must not come after `end` in key order.
    pub(crate) fn between<K>(shape: Shape<'_, K>, first: Option<Handle>, end: Option<Handle>) -> Self {
        if first.is_none() || first == end {
            return Self::EMPTY;
        }
        let back = match end {
            Some(end) => shape.prev(end),
            None => shape.last(),
        };
        Self { front: first, back }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    pub(crate) fn pop_front<K>(&mut self, shape: Shape<'_, K>) -> Option<Handle> {
        let front = self.front?;
        if self.back == Some(front) {
            *self = Self::EMPTY;
        } else {
            self.front = shape.next(front);
        }
        Some(front)
    }

    pub(crate) fn pop_back<K>(&mut self, shape: Shape<'_, K>) -> Option<Handle> {
        let back = self.back?;
        if self.front == Some(back) {
            *self = Self::EMPTY;
        } else {
            self.back = shape.prev(back);
        }
        Some(back)
    }
}
