//! An ordered binary tree container supporting insertion, structural
//! queries, and the three classical depth-first traversals with a
//! caller-supplied visitor.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure storing values so that they
//! can be retrieved in sorted order. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value
//! and sometimes has child `Node`s. The most important invariants of
//! this tree are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree
//!    have a value strictly less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree
//!    have a value that is *not* strictly less than its own value. In
//!    particular, duplicates always live in right subtrees.
//!
//! "Strictly less" is decided by a [`TotalOrder`][order::TotalOrder]
//! policy fixed when the tree is constructed; the default is the natural
//! `Ord` ordering of the value type.
//!
//! This tree never rebalances, so its shape (and therefore its height) is
//! purely a function of insertion order. Inserting already-sorted values
//! degenerates it into a linked list. There is also no deletion - the
//! only way to shrink the tree is to [`clear`][tree::Tree::clear] it.
//!
//! # Examples
//!
//! ```
//! use ordtree::tree::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(tree.is_empty());
//!
//! for v in vec![0, -2, 2, -1, -3, 1, 3] {
//!     tree.insert(v);
//! }
//!
//! let mut inorder = Vec::new();
//! tree.inorder(|v: &i32| inorder.push(*v));
//! assert_eq!(inorder, vec![-3, -2, -1, 0, 1, 2, 3]);
//!
//! let mut preorder = Vec::new();
//! tree.preorder(|v: &i32| preorder.push(*v));
//! assert_eq!(preorder, vec![0, -2, -3, -1, 2, 1, 3]);
//!
//! let mut postorder = Vec::new();
//! tree.postorder(|v: &i32| postorder.push(*v));
//! assert_eq!(postorder, vec![-3, -1, -2, 1, 3, 2, 0]);
//!
//! assert!(!tree.is_empty());
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.nodes(), 7);
//! assert_eq!(tree.leaves(), 8);
//!
//! tree.clear();
//! assert!(tree.is_empty());
//! assert_eq!(tree.height(), 0);
//! assert_eq!(tree.nodes(), 0);
//! assert_eq!(tree.leaves(), 1);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod order;
pub mod tree;
