//! Red-black tree.
//!
//! Nodes live in an arena and refer to each other by index, so the parent
//! link is a plain back reference that owns nothing.
//!
//! ```
//! use rb_tree::{Error, RbTree};
//!
//! let mut tree = RbTree::new();
//! for x in [5, 3, 8, 1] {
//!     tree.insert(x).unwrap();
//! }
//! assert_eq!(tree.insert(3), Err(Error::DuplicateValue));
//! assert!(tree.iter().copied().eq([1, 3, 5, 8]));
//! assert_eq!(tree.to_string(), "[ 1, 3, 5, 8 ]");
//! ```

use std::{cmp::Ordering, collections::VecDeque, fmt, iter::FusedIterator};

use thiserror::Error;

pub mod debug;

type NodeId = usize;

#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum Error {
    #[error("cannot store an absent value")]
    NullValue,

    #[error("an equal value is already stored")]
    DuplicateValue,

    /// Raised by the rotation primitive only; seeing it means the
    /// rebalancing logic is broken.
    #[error("cannot rotate a node around one that is not its parent")]
    InvalidRotation,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn flip(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

struct Node<T> {
    val: T,
    color: Color,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// Requirements:
/// 1. The root is black.
/// 2. A red node does not have a red child.
/// 3. Every path from a node to its leaves has the same number of black
///    nodes.
pub struct RbTree<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
}

impl<T> RbTree<T> {
    pub fn new() -> Self { Self { nodes: vec![], root: None } }

    pub fn len(&self) -> usize { self.nodes.len() }
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut res = 0;
        let mut stack: Vec<_> = self.root.into_iter().map(|id| (id, 1)).collect();
        while let Some((id, depth)) = stack.pop() {
            res = res.max(depth);
            let node = &self.nodes[id];
            stack.extend(
                [node.left, node.right].into_iter().flatten().map(|c| (c, depth + 1)),
            );
        }
        res
    }

    /// In-order traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter =
            Iter { nodes: &self.nodes, stack: vec![], remaining: self.len() };
        iter.push_all_left(self.root);
        iter
    }

    /// Breadth-first traversal, starting from the root.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder { nodes: &self.nodes, queue: self.root.into_iter().collect() }
    }

    fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.nodes[id].left,
            Side::Right => self.nodes[id].right,
        }
    }
    fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.nodes[id].left = child,
            Side::Right => self.nodes[id].right = child,
        }
    }
    // `id` must not be the root.
    fn side_of(&self, id: NodeId, parent: NodeId) -> Side {
        if self.nodes[parent].left == Some(id) { Side::Left } else { Side::Right }
    }

    /// Moves `child` into the position of `parent`, which becomes its child.
    /// The in-order sequence is preserved.
    fn rotate(&mut self, child: NodeId, parent: NodeId) -> Result<(), Error> {
        let side = if self.nodes[parent].left == Some(child) {
            Side::Left
        } else if self.nodes[parent].right == Some(child) {
            Side::Right
        } else {
            log::error!("rotate: node {child} is not a child of node {parent}");
            return Err(Error::InvalidRotation);
        };
        log::trace!("rotate {child} over {parent} ({side:?} child)");

        // the subtree between `child` and `parent` changes hands
        let inner = self.child(child, side.flip());
        self.set_child(parent, side, inner);
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(parent);
        }

        let grand = self.nodes[parent].parent;
        self.nodes[child].parent = grand;
        match grand {
            Some(grand) => {
                let side = self.side_of(parent, grand);
                self.set_child(grand, side, Some(child));
            }
            None => self.root = Some(child),
        }

        self.set_child(child, side.flip(), Some(parent));
        self.nodes[parent].parent = Some(child);
        Ok(())
    }

    /// Restores the color invariants after `id` has been attached as a red
    /// leaf.
    fn fixup(&mut self, mut id: NodeId) -> Result<(), Error> {
        while let Some(parent) = self.nodes[id].parent {
            if self.nodes[parent].color == Color::Black {
                break;
            }
            // a red parent is never the root
            let Some(grand) = self.nodes[parent].parent else { break };
            let parent_side = self.side_of(parent, grand);
            let uncle = self.child(grand, parent_side.flip());

            let red_uncle =
                uncle.filter(|&uncle| self.nodes[uncle].color == Color::Red);
            if let Some(uncle) = red_uncle {
                self.nodes[uncle].color = Color::Black;
                self.nodes[parent].color = Color::Black;
                self.nodes[grand].color = Color::Red;
                id = grand;
                continue;
            }

            let top = if self.side_of(id, parent) == parent_side {
                self.rotate(parent, grand)?;
                parent
            } else {
                self.rotate(id, parent)?;
                self.rotate(id, grand)?;
                id
            };
            self.nodes[top].color = Color::Black;
            self.nodes[grand].color = Color::Red;
            break;
        }

        if let Some(root) = self.root {
            self.nodes[root].color = Color::Black;
        }
        Ok(())
    }
}

impl<T: Ord> RbTree<T> {
    /// Inserts `val`. The tree is left untouched if an equal value is
    /// already stored.
    pub fn insert(&mut self, val: T) -> Result<(), Error> {
        let mut attach = None;
        let mut cur = self.root;
        while let Some(id) = cur {
            let side = match val.cmp(&self.nodes[id].val) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    log::debug!("rejected a duplicate value");
                    return Err(Error::DuplicateValue);
                }
            };
            attach = Some((id, side));
            cur = self.child(id, side);
        }

        let id = self.nodes.len();
        self.nodes.push(Node {
            val,
            color: Color::Red,
            parent: attach.map(|(parent, _)| parent),
            left: None,
            right: None,
        });
        match attach {
            Some((parent, side)) => self.set_child(parent, side, Some(id)),
            None => self.root = Some(id),
        }
        self.fixup(id)
    }

    pub fn insert_nullable(&mut self, val: Option<T>) -> Result<(), Error> {
        self.insert(val.ok_or(Error::NullValue)?)
    }

    pub fn contains(&self, val: &T) -> bool {
        let mut cur = self.root;
        while let Some(id) = cur {
            cur = match val.cmp(&self.nodes[id].val) {
                Ordering::Less => self.nodes[id].left,
                Ordering::Greater => self.nodes[id].right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn contains_nullable(&self, val: Option<&T>) -> Result<bool, Error> {
        Ok(self.contains(val.ok_or(Error::NullValue)?))
    }
}

impl<T> Default for RbTree<T> {
    fn default() -> Self { Self::new() }
}

pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_all_left(&mut self, mut cur: Option<NodeId>) {
        while let Some(id) = cur {
            self.stack.push(id);
            cur = self.nodes[id].left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let id = self.stack.pop()?;
        let nodes = self.nodes;
        self.push_all_left(nodes[id].right);
        self.remaining -= 1;
        Some(&nodes[id].val)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RbTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

pub struct LevelOrder<'a, T> {
    nodes: &'a [Node<T>],
    queue: VecDeque<NodeId>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let node = &self.nodes[self.queue.pop_front()?];
        self.queue.extend([node.left, node.right].into_iter().flatten());
        Some(&node.val)
    }
}

impl<T: fmt::Debug> fmt::Debug for RbTree<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for RbTree<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "[ ")?;
        for (i, val) in self.iter().enumerate() {
            if i > 0 {
                write!(fmt, ", ")?;
            }
            write!(fmt, "{val}")?;
        }
        write!(fmt, " ]")
    }
}
