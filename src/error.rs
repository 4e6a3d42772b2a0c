/// Error returned by [`RbTree::at`](crate::RbTree::at) and
/// [`RbTree::at_mut`](crate::RbTree::at_mut) when no entry matches the requested key.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, thiserror::Error)]
#[error("key not found")]
pub struct KeyNotFound;
