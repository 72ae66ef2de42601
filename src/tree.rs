//! The ordered binary tree container.
//!
//! # Examples
//!
//! ```
//! use ordtree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.height(), 0);
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! // In-order traversal yields the values sorted.
//! let mut sorted = Vec::new();
//! tree.inorder(|v: &i32| sorted.push(*v));
//! assert_eq!(sorted, vec![1, 2, 3]);
//!
//! // `clear` releases every node and leaves the tree reusable.
//! tree.clear();
//! assert!(tree.is_empty());
//! tree.insert(4);
//! assert_eq!(tree.nodes(), 1);
//! ```

use std::fmt;

use crate::order::{Natural, TotalOrder};

/// A `Node` holds one stored value and exclusively owns its children.
/// Nodes are never exposed to callers; the tree is the only public
/// abstraction.
#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

/// A binary search tree ordered by a [`TotalOrder`] policy fixed at
/// construction. Supports insertion, structural queries, and visitor
/// based depth-first traversal. There is no deletion and no rebalancing;
/// the tree's shape is purely a function of insertion order.
///
/// Moving a `Tree` transfers ownership of its whole node structure in
/// constant time. To move out of a place while leaving an empty,
/// reusable tree behind, use [`std::mem::take`]; assigning over a tree
/// releases the nodes it previously owned.
pub struct Tree<T, C = Natural> {
    root: Option<Box<Node<T>>>,
    compare: C,
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` using the natural ordering of `T`.
    pub fn new() -> Self {
        Self {
            root: None,
            compare: Natural,
        }
    }
}

impl<T, C> Default for Tree<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self {
            root: None,
            compare: C::default(),
        }
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        // Explicit stack instead of the derived recursive drop: this
        // tree never rebalances, so a skewed chain can be as deep as it
        // has nodes and would otherwise overflow the call stack.
        self.clear();
    }
}

impl<T, C> Clone for Tree<T, C>
where
    T: Clone,
    C: Clone,
{
    // TODO stack based clone to match the stack based drop
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            compare: self.compare.clone(),
        }
    }

    /// Deep-copies `source` into `self`. The nodes `self` currently owns
    /// are released *before* the copy is made.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = source.root.clone();
        self.compare.clone_from(&source.compare);
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` ordered by the given policy. The
    /// policy is applied to every insertion for the tree's whole
    /// lifetime.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// // Largest-first ordering.
    /// let mut tree = Tree::with_order(|a: &i32, b: &i32| b < a);
    /// for v in vec![1, 3, 2] {
    ///     tree.insert(v);
    /// }
    ///
    /// let mut seen = Vec::new();
    /// tree.inorder(|v: &i32| seen.push(*v));
    /// assert_eq!(seen, vec![3, 2, 1]);
    /// ```
    pub fn with_order(compare: C) -> Self {
        Self {
            root: None,
            compare,
        }
    }

    /// Inserts the given value into the tree. Descends from the root,
    /// going left when the value sorts strictly before the current
    /// node's value and right otherwise, and attaches a new node at the
    /// first absent child reached. Duplicates are therefore always
    /// placed in the right subtree of the first equal-or-greater node on
    /// the descent path.
    ///
    /// Because there is no rebalancing, the descent is `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// // Duplicates are kept.
    /// assert_eq!(tree.nodes(), 2);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        C: TotalOrder<T>,
    {
        let Tree { root, compare } = self;
        let mut link = root;
        while let Some(node) = link {
            link = if compare.is_less(&value, &node.value) {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node {
            value,
            left: None,
            right: None,
        }));
    }

    /// Returns whether the tree owns zero nodes. `O(1)`.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the total number of stored values, counted by full
    /// traversal. `O(n)`.
    pub fn nodes(&self) -> usize {
        self.root.as_deref().map_or(0, Node::count)
    }

    /// Returns the number of levels in the tree: an empty tree has
    /// height 0 and a single node has height 1. `O(n)`.
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// Returns the number of absent-child slots reachable by full
    /// descent, *not* the number of childless nodes. An empty tree
    /// reports 1, a single node reports 2, and in general a tree with
    /// `n` nodes reports `n + 1`.
    ///
    /// This is a quirk kept for compatibility: every null slot counts as
    /// a leaf, so a node with two absent children contributes 2 to its
    /// parent's sum rather than 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.leaves(), 1);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.leaves(), 2);
    /// ```
    pub fn leaves(&self) -> usize {
        self.root.as_deref().map_or(1, Node::leaves)
    }

    /// Applies the visitor to every stored value in in-order sequence
    /// (left subtree, value, right subtree), which yields the values
    /// sorted under the tree's ordering policy. The visitor is handed
    /// back so accumulated state can be inspected or the visitor reused
    /// across traversals. `O(n)`, no allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for v in vec![2, 1, 3] {
    ///     tree.insert(v);
    /// }
    ///
    /// let mut sum = 0;
    /// let visitor = tree.inorder(move |v: &i32| sum += *v);
    ///
    /// // The same visitor can run again on another traversal.
    /// tree.preorder(visitor);
    /// ```
    pub fn inorder<F>(&self, mut f: F) -> F
    where
        F: FnMut(&T),
    {
        if let Some(root) = &self.root {
            root.inorder(&mut f);
        }
        f
    }

    /// Applies the visitor to every stored value in pre-order sequence
    /// (value, left subtree, right subtree). The visitor is handed back
    /// after the traversal. `O(n)`, no allocation.
    pub fn preorder<F>(&self, mut f: F) -> F
    where
        F: FnMut(&T),
    {
        if let Some(root) = &self.root {
            root.preorder(&mut f);
        }
        f
    }

    /// Applies the visitor to every stored value in post-order sequence
    /// (left subtree, right subtree, value). The visitor is handed back
    /// after the traversal. `O(n)`, no allocation.
    pub fn postorder<F>(&self, mut f: F) -> F
    where
        F: FnMut(&T),
    {
        if let Some(root) = &self.root {
            root.postorder(&mut f);
        }
        f
    }

    /// Releases every node the tree owns and leaves it empty and
    /// reusable, as if freshly constructed with the same ordering
    /// policy.
    ///
    /// Each node is detached from its children before it is dropped, so
    /// clearing never recurses no matter how skewed the tree is.
    pub fn clear(&mut self) {
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Node<T> {
    fn count(&self) -> usize {
        let left = self.left.as_deref().map_or(0, Self::count);
        let right = self.right.as_deref().map_or(0, Self::count);
        1 + left + right
    }

    fn height(&self) -> usize {
        let left = self.left.as_deref().map_or(0, Self::height);
        let right = self.right.as_deref().map_or(0, Self::height);
        left.max(right) + 1
    }

    /// Absent children count as 1 each; see [`Tree::leaves`].
    fn leaves(&self) -> usize {
        let left = self.left.as_deref().map_or(1, Self::leaves);
        let right = self.right.as_deref().map_or(1, Self::leaves);
        left + right
    }

    fn inorder<F>(&self, f: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(left) = &self.left {
            left.inorder(f);
        }
        f(&self.value);
        if let Some(right) = &self.right {
            right.inorder(f);
        }
    }

    fn preorder<F>(&self, f: &mut F)
    where
        F: FnMut(&T),
    {
        f(&self.value);
        if let Some(left) = &self.left {
            left.preorder(f);
        }
        if let Some(right) = &self.right {
            right.preorder(f);
        }
    }

    fn postorder<F>(&self, f: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(left) = &self.left {
            left.postorder(f);
        }
        if let Some(right) = &self.right {
            right.postorder(f);
        }
        f(&self.value);
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_inorder<T: Copy, C>(tree: &Tree<T, C>) -> Vec<T> {
        let mut out = Vec::new();
        tree.inorder(|v: &T| out.push(*v));
        out
    }

    fn collect_preorder<T: Copy, C>(tree: &Tree<T, C>) -> Vec<T> {
        let mut out = Vec::new();
        tree.preorder(|v: &T| out.push(*v));
        out
    }

    fn collect_postorder<T: Copy, C>(tree: &Tree<T, C>) -> Vec<T> {
        let mut out = Vec::new();
        tree.postorder(|v: &T| out.push(*v));
        out
    }

    #[test]
    fn empty_tree_queries() {
        let tree: Tree<i32> = Tree::new();

        assert!(tree.is_empty());
        assert_eq!(tree.nodes(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.leaves(), 1);
        assert!(collect_inorder(&tree).is_empty());
        assert!(collect_preorder(&tree).is_empty());
        assert!(collect_postorder(&tree).is_empty());
    }

    #[test]
    fn traversals_and_queries() {
        let mut tree = Tree::new();
        for v in vec![0, -2, 2, -1, -3, 1, 3] {
            tree.insert(v);
        }

        assert_eq!(collect_inorder(&tree), vec![-3, -2, -1, 0, 1, 2, 3]);
        assert_eq!(collect_preorder(&tree), vec![0, -2, -3, -1, 2, 1, 3]);
        assert_eq!(collect_postorder(&tree), vec![-3, -1, -2, 1, 3, 2, 0]);

        assert!(!tree.is_empty());
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.nodes(), 7);
        assert_eq!(tree.leaves(), 8);
    }

    #[test]
    fn single_node() {
        let mut tree = Tree::new();
        tree.insert(42);

        assert_eq!(tree.height(), 1);
        assert_eq!(tree.nodes(), 1);
        // Both absent children of the one node count as leaves.
        assert_eq!(tree.leaves(), 2);
    }

    #[test]
    fn sorted_insertion_degenerates() {
        let mut tree = Tree::new();
        for v in 1..=10 {
            tree.insert(v);
        }

        // Every node hangs off the right, so height equals node count.
        assert_eq!(tree.height(), 10);
        assert_eq!(tree.nodes(), 10);
        assert_eq!(collect_inorder(&tree), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn duplicates_route_right() {
        let mut tree = Tree::new();
        tree.insert(1);
        tree.insert(1);
        tree.insert(1);

        assert_eq!(tree.nodes(), 3);
        // Each duplicate chains off the right of the previous one.
        assert_eq!(tree.height(), 3);
        assert_eq!(collect_inorder(&tree), vec![1, 1, 1]);
    }

    #[test]
    fn custom_order_reverses_placement() {
        let mut tree = Tree::with_order(|a: &i32, b: &i32| b < a);
        for v in vec![2, 1, 3] {
            tree.insert(v);
        }

        assert_eq!(collect_inorder(&tree), vec![3, 2, 1]);
    }

    #[test]
    fn visitor_is_returned() {
        let mut tree = Tree::new();
        for v in vec![2, 1, 3] {
            tree.insert(v);
        }

        let mut visits = 0;
        let visitor = tree.inorder(|_: &i32| visits += 1);

        // The same visitor keeps accumulating on a second traversal.
        tree.postorder(visitor);
        assert_eq!(visits, 6);
    }

    #[test]
    fn clone_is_deep() {
        let mut a = Tree::new();
        for v in vec![2, 1, 3] {
            a.insert(v);
        }

        let mut b = a.clone();
        b.insert(4);
        a.insert(0);

        assert_eq!(collect_inorder(&a), vec![0, 1, 2, 3]);
        assert_eq!(collect_inorder(&b), vec![1, 2, 3, 4]);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let mut a = Tree::new();
        for v in vec![5, 6] {
            a.insert(v);
        }
        let mut b = Tree::new();
        for v in vec![2, 1, 3] {
            b.insert(v);
        }

        b.clone_from(&a);

        assert_eq!(collect_inorder(&b), vec![5, 6]);
        // The copy is independent of the source.
        b.insert(7);
        assert_eq!(collect_inorder(&a), vec![5, 6]);
    }

    #[test]
    fn move_leaves_source_empty() {
        let mut a = Tree::new();
        for v in vec![2, 1, 3] {
            a.insert(v);
        }

        let b = std::mem::take(&mut a);

        assert!(a.is_empty());
        assert_eq!(a.height(), 0);
        assert_eq!(collect_inorder(&b), vec![1, 2, 3]);

        // The source is still usable after the move.
        a.insert(9);
        assert_eq!(collect_inorder(&a), vec![9]);
    }

    #[test]
    fn clear_resets_and_allows_reuse() {
        let mut tree = Tree::new();
        for v in vec![2, 1, 3] {
            tree.insert(v);
        }

        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.nodes(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.leaves(), 1);

        tree.insert(5);
        assert_eq!(collect_inorder(&tree), vec![5]);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn clear_on_empty_is_a_noop() {
        let mut tree: Tree<i32> = Tree::new();
        tree.clear();
        assert!(tree.is_empty());
    }

    #[test]
    fn drop_does_not_recurse() {
        // Build a fully right-skewed chain directly so the test doesn't
        // pay the quadratic insertion cost. Dropping it must not blow
        // the stack.
        let mut root = None;
        for v in (0..100_000).rev() {
            root = Some(Box::new(Node {
                value: v,
                left: None,
                right: root,
            }));
        }
        let tree = Tree {
            root,
            compare: Natural,
        };
        drop(tree);
    }

    #[test]
    fn strings_work_too() {
        let mut tree = Tree::new();
        for v in vec!["pear", "apple", "quince"] {
            tree.insert(v.to_string());
        }

        let mut seen = Vec::new();
        tree.inorder(|v: &String| seen.push(v.clone()));
        assert_eq!(seen, vec!["apple", "pear", "quince"]);
    }
}
