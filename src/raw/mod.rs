mod arena;
mod handle;
mod node;
mod raw_rb_tree;
mod shape;
mod span;

pub(crate) use arena::Arena;
pub(crate) use handle::Handle;
pub(crate) use node::Color;
pub(crate) use raw_rb_tree::RawRbTree;
pub(crate) use shape::Shape;
pub(crate) use span::Span;
