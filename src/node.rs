//! The recursive building block of the trie.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;
use crate::decompose::Decompose;


pub(crate) type Children<T> = HashMap<T, Arc<Node<T>>>;

/// A single, immutable node of the tree.
///
/// Nodes are never modified once built. Both the children map and every child
/// are behind an `Arc`, so different versions of a trie can share them.
#[derive(Debug)]
pub(crate) struct Node<T> {
    terminal: bool,
    children: Arc<Children<T>>,
}

impl<T> Node<T> {
    pub(crate) fn empty() -> Self {
        Node {
            terminal: false,
            children: Arc::default(),
        }
    }

    fn leaf() -> Self {
        Node {
            terminal: true,
            children: Arc::default(),
        }
    }

    pub(crate) const fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub(crate) fn children(&self) -> &Children<T> {
        &self.children
    }
}

impl<T: Eq + Hash> Node<T> {
    pub(crate) fn contains(&self, key: &[T]) -> bool {
        let Some((head, tail)) = key.decompose() else {
            return self.terminal;
        };

        self.children
            .get(head)
            .is_some_and(|child| child.contains(tail))
    }

    /// Follows `prefix` down from this node, returning the node at which the
    /// prefix is used up, or `None` if some edge along the way is missing.
    pub(crate) fn subtree<'a>(self: &'a Arc<Self>, prefix: &[T]) -> Option<&'a Arc<Self>> {
        let Some((head, tail)) = prefix.decompose() else {
            return Some(self);
        };

        self.children.get(head)?.subtree(tail)
    }
}

impl<T: Clone + Eq + Hash> Node<T> {
    /// Builds a chain holding exactly one key.
    pub(crate) fn single(key: &[T]) -> Self {
        let Some((head, tail)) = key.decompose() else {
            return Node::leaf();
        };

        let children = HashMap::from([(head.clone(), Arc::new(Node::single(tail)))]);

        Node {
            terminal: false,
            children: Arc::new(children),
        }
    }

    /// Returns a new node storing `key` in addition to everything stored here.
    ///
    /// Only the nodes along the path of `key` are rebuilt. All other children
    /// are the same `Arc`s as in `self`.
    pub(crate) fn insert(&self, key: &[T]) -> Self {
        let Some((head, tail)) = key.decompose() else {
            return Node {
                terminal: true,
                children: Arc::clone(&self.children),
            };
        };

        let child = match self.children.get(head) {
            Some(child) => child.insert(tail),
            None => Node::single(tail),
        };

        // shallow: clones the handles, not the subtrees behind them
        let mut children = (*self.children).clone();
        children.insert(head.clone(), Arc::new(child));

        Node {
            terminal: self.terminal,
            children: Arc::new(children),
        }
    }

    pub(crate) fn elements(&self) -> HashSet<Vec<T>> {
        let mut elements = HashSet::new();
        self.collect_elements(&mut Vec::new(), &mut elements);
        elements
    }

    /// `path` holds the labels from the node `elements()` was called on down
    /// to `self`; it is restored before returning.
    fn collect_elements(&self, path: &mut Vec<T>, elements: &mut HashSet<Vec<T>>) {
        if self.terminal {
            elements.insert(path.clone());
        }

        for (label, child) in self.children.iter() {
            path.push(label.clone());
            child.collect_elements(path, elements);
            path.pop();
        }
    }
}

impl<T: Eq + Hash> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.terminal == other.terminal
            && (Arc::ptr_eq(&self.children, &other.children) || self.children == other.children)
    }
}

impl<T: Eq + Hash> Eq for Node<T> {}
