use std::fmt;

use crate::{Color, NodeId, RbTree};

/// Draws the tree sideways, one node per line, left child first.
///
/// ```
/// use rb_tree::{debug::visualize, RbTree};
///
/// let mut tree = RbTree::new();
/// for x in [2, 1, 3, 4] {
///     tree.insert(x).unwrap();
/// }
/// let expected = "\
/// 2 (B)
/// ├── 1 (B)
/// └── 3 (B)
///     ├── ·
///     └── 4 (R)
/// ";
/// assert_eq!(visualize(&tree).to_string(), expected);
/// ```
pub fn visualize<T: fmt::Display>(tree: &RbTree<T>) -> Visualize<'_, T> {
    Visualize(tree)
}

pub struct Visualize<'a, T>(&'a RbTree<T>);

impl<T: fmt::Display> Visualize<'_, T> {
    fn line(
        &self,
        fmt: &mut fmt::Formatter<'_>,
        id: Option<NodeId>,
    ) -> fmt::Result {
        let node = if let Some(id) = id {
            &self.0.nodes[id]
        } else {
            return writeln!(fmt, "·");
        };
        let color = match node.color {
            Color::Red => 'R',
            Color::Black => 'B',
        };
        writeln!(fmt, "{} ({color})", node.val)
    }

    fn children(
        &self,
        fmt: &mut fmt::Formatter<'_>,
        id: NodeId,
        prefix: &mut String,
    ) -> fmt::Result {
        let node = &self.0.nodes[id];
        if node.left.is_none() && node.right.is_none() {
            return Ok(());
        }
        for (child, last) in [(node.left, false), (node.right, true)] {
            write!(fmt, "{prefix}{}", if last { "└── " } else { "├── " })?;
            self.line(fmt, child)?;
            if let Some(child) = child {
                let len = prefix.len();
                prefix.push_str(if last { "    " } else { "│   " });
                self.children(fmt, child, prefix)?;
                prefix.truncate(len);
            }
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Visualize<'_, T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = if let Some(root) = self.0.root {
            root
        } else {
            return Ok(());
        };
        self.line(fmt, Some(root))?;
        self.children(fmt, root, &mut String::new())
    }
}

#[test]
fn small_trees() {
    let mut tree = RbTree::new();
    assert_eq!(visualize(&tree).to_string(), "");

    tree.insert("b").unwrap();
    assert_eq!(visualize(&tree).to_string(), "b (B)\n");

    tree.insert("a").unwrap();
    assert_eq!(visualize(&tree).to_string(), "b (B)\n├── a (R)\n└── ·\n");

    tree.insert("c").unwrap();
    assert_eq!(
        visualize(&tree).to_string(),
        "b (B)\n├── a (R)\n└── c (R)\n"
    );
}

#[test]
fn nested_prefix() {
    let mut tree = RbTree::new();
    for x in [4, 2, 6, 1, 3] {
        tree.insert(x).unwrap();
    }
    // 4B(2B(1R, 3R), 6B)
    let expected = "\
4 (B)
├── 2 (B)
│   ├── 1 (R)
│   └── 3 (R)
└── 6 (B)
";
    assert_eq!(visualize(&tree).to_string(), expected);
}
