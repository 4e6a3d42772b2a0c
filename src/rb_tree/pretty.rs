use alloc::string::String;
use alloc::vec::Vec;
use alloc::{format, vec};
use core::fmt;

use crate::raw::{Color, Handle, RawRbTree};

/// A [`Display`](fmt::Display) rendering of a `RbTree`'s shape.
///
/// Each node is printed as its key followed by its color, `(R)` or `(B)`, with the left child
/// listed before the right. A missing child is printed as `nil` when its sibling exists. An empty
/// tree renders as `(empty)`.
///
/// This `struct` is created by the [`pretty`](crate::RbTree::pretty) method on
/// [`RbTree`](crate::RbTree).
///
/// ```text
/// 3 (B)
/// ├── 2 (B)
/// │   ├── 1 (R)
/// │   └── nil
/// └── 4 (B)
/// ```
pub struct Pretty<'a, K, V> {
    tree: &'a RawRbTree<K, V>,
}

impl<'a, K, V> Pretty<'a, K, V> {
    pub(crate) fn new(tree: &'a RawRbTree<K, V>) -> Self {
        Pretty { tree }
    }
}

impl<K: fmt::Debug, V> fmt::Display for Pretty<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = self.tree.shape();
        let Some(root) = shape.root() else {
            return writeln!(f, "(empty)");
        };

        // (node or nil, branch drawn before it, indent inherited by its children)
        let mut pending: Vec<(Option<Handle>, String, String)> = vec![(Some(root), String::new(), String::new())];
        while let Some((link, branch, indent)) = pending.pop() {
            let Some(handle) = link else {
                writeln!(f, "{branch}nil")?;
                continue;
            };

            let node = shape.node(handle);
            let color = match node.color() {
                Color::Red => 'R',
                Color::Black => 'B',
            };
            writeln!(f, "{branch}{:?} ({color})", node.key())?;

            if node.left().is_none() && node.right().is_none() {
                continue;
            }
            pending.push((node.right(), format!("{indent}└── "), format!("{indent}    ")));
            pending.push((node.left(), format!("{indent}├── "), format!("{indent}│   ")));
        }
        Ok(())
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Pretty<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn render(keys: &[i32]) -> String {
        let mut tree = RawRbTree::new();
        for &key in keys {
            tree.insert_unique(key, ());
        }
        Pretty::new(&tree).to_string()
    }

    #[test]
    fn empty_tree() {
        assert_eq!(render(&[]), "(empty)\n");
    }

    #[test]
    fn single_node_has_no_branches() {
        assert_eq!(render(&[7]), "7 (B)\n");
    }

    #[test]
    fn missing_right_child_is_nil() {
        assert_eq!(
            render(&[4, 3, 2, 1]),
            "3 (B)\n├── 2 (B)\n│   ├── 1 (R)\n│   └── nil\n└── 4 (B)\n"
        );
    }

    #[test]
    fn missing_left_child_is_nil() {
        assert_eq!(
            render(&[1, 2, 3, 4]),
            "2 (B)\n├── 1 (B)\n└── 3 (B)\n    ├── nil\n    └── 4 (R)\n"
        );
    }
}
