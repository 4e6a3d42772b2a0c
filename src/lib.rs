//! An arena-backed red-black tree for Rust.
//!
//! This crate provides [`RbTree`], an ordered map that can hold either unique keys or repeated
//! keys, built on a classic red-black tree:
//!
//! - [`insert`](RbTree::insert) / [`insert_multi`](RbTree::insert_multi) - unique or repeated keys
//! - [`lower_bound`](RbTree::lower_bound), [`upper_bound`](RbTree::upper_bound) and
//!   [`equal_range`](RbTree::equal_range) - ordered searches returning cursors and ranges
//! - [`Cursor`](rb_tree::Cursor) / [`CursorMut`](rb_tree::CursorMut) - bidirectional positions
//!   that can remove one specific occurrence of a repeated key
//! - [`pretty`](RbTree::pretty) - a color-annotated rendering of the tree's shape
//!
//! # Example
//!
//! ```
//! use beni_tree::RbTree;
//!
//! let mut tree = RbTree::new();
//! for key in [10, 5, 15, 3, 7, 12, 20] {
//!     tree.insert(key, key * 100);
//! }
//!
//! // Sorted iteration
//! let keys: Vec<_> = tree.keys().copied().collect();
//! assert_eq!(keys, [3, 5, 7, 10, 12, 15, 20]);
//!
//! // Ordered searches
//! assert_eq!(tree.lower_bound(&6).key(), Some(&7));
//! assert!(tree.upper_bound(&20).is_end());
//!
//! // Checked access
//! assert_eq!(tree.at(&12), Ok(&1200));
//! assert!(tree.at(&13).is_err());
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Stable handles** - Nodes live in an arena; removal relinks nodes instead of moving entries
//! - **No recursion** - Clone, clear and drop run in bounded stack space regardless of size
//! - **Logging** - Whole-tree operations and rebalancing steps are reported through [`log`]
//!
//! # Implementation
//!
//! Nodes are stored in a slot arena and addressed by compact non-zero handles, so a missing
//! child is a `None` that costs no extra space. Values live in a second arena, which lets
//! mutable iteration walk the node links while handing out values.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
// NOTE: We have to allow unsafe code so mutable iterators can hand out disjoint values.
// #![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;

pub mod rb_tree;

pub use error::KeyNotFound;
pub use rb_tree::RbTree;
