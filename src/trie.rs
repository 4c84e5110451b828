//! A persistent set of sequences, based on a prefix tree.

use core::iter::FusedIterator;
use core::mem;
use std::collections::{hash_map, HashSet};
use std::hash::Hash;
use std::sync::Arc;
use crate::node::Node;


/// An immutable prefix tree over sequences of `T`.
///
/// Inserting never modifies a trie in place; it returns a new trie that shares
/// every subtree not on the path of the inserted key with the old one. Cloning
/// is therefore cheap (it only bumps a reference count), and a `Trie` can be
/// read from any number of threads at once.
///
/// Keys are passed as anything that can be viewed as a slice of `T`, such as
/// arrays, vectors or slices themselves.
#[derive(Debug)]
pub struct Trie<T> {
    root: Arc<Node<T>>,
}

impl<T> Clone for Trie<T> {
    fn clone(&self) -> Self {
        Trie { root: Arc::clone(&self.root) }
    }
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Trie::new()
    }
}

impl<T> Trie<T> {
    /// Creates an empty trie. The same as `Default`.
    pub fn new() -> Self {
        Trie { root: Arc::new(Node::empty()) }
    }

    /// Returns `true` if the empty sequence is stored in this trie.
    ///
    /// On a trie obtained from [`Trie::with_prefix`], this tells whether the
    /// prefix itself is a stored key.
    pub fn is_terminal(&self) -> bool {
        self.root.is_terminal()
    }

    /// Returns `true` if both tries are handles to the very same root node.
    ///
    /// This is a cheap identity check, not a comparison of contents.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.root, &other.root)
    }
}

impl<T: Eq + Hash> Trie<T> {
    /// Returns `true` if and only if exactly this key was inserted.
    pub fn contains<K>(&self, key: &K) -> bool
    where
        K: ?Sized + AsRef<[T]>,
    {
        self.root.contains(key.as_ref())
    }

    /// Narrows the trie down to the keys starting with `prefix`.
    ///
    /// The returned trie stores the remainders of those keys after the
    /// prefix, and shares its nodes with `self`. `None` means that no path
    /// spells out `prefix`, while `Some` of a non-terminal trie means that the
    /// prefix leads somewhere but is not a key itself. The empty prefix always
    /// yields `self`, even if nothing is stored.
    pub fn with_prefix<K>(&self, prefix: &K) -> Option<Trie<T>>
    where
        K: ?Sized + AsRef<[T]>,
    {
        self.root
            .subtree(prefix.as_ref())
            .map(|root| Trie { root: Arc::clone(root) })
    }
}

impl<T: Clone + Eq + Hash> Trie<T> {
    /// Creates a trie holding exactly one key.
    pub fn single<K>(key: &K) -> Self
    where
        K: ?Sized + AsRef<[T]>,
    {
        Trie { root: Arc::new(Node::single(key.as_ref())) }
    }

    /// Returns a new trie which contains `key` in addition to the keys of `self`.
    ///
    /// `self` is left untouched. The root and one node per element of `key`
    /// are rebuilt, along with a new children map at every step that consumes
    /// an element.
    #[must_use]
    pub fn insert<K>(&self, key: &K) -> Self
    where
        K: ?Sized + AsRef<[T]>,
    {
        Trie { root: Arc::new(self.root.insert(key.as_ref())) }
    }

    /// Collects every stored key.
    ///
    /// The set is built eagerly. Use [`Trie::iter`] to walk the keys lazily.
    pub fn elements(&self) -> HashSet<Vec<T>> {
        self.root.elements()
    }

    /// Returns the remainders of all stored keys that start with `prefix`.
    ///
    /// For the keys `car` and `cart`, the prefix `car` yields the empty
    /// sequence and `t`. A prefix that no key starts with yields an empty set.
    pub fn autocomplete<K>(&self, prefix: &K) -> HashSet<Vec<T>>
    where
        K: ?Sized + AsRef<[T]>,
    {
        self.root
            .subtree(prefix.as_ref())
            .map(|node| node.elements())
            .unwrap_or_default()
    }

    /// A lazy iterator over the stored keys.
    ///
    /// The order of iteration is unspecified.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }
}

/// Two tries are equal if they store the same keys.
impl<T: Eq + Hash> PartialEq for Trie<T> {
    fn eq(&self, other: &Self) -> bool {
        Trie::ptr_eq(self, other) || self.root == other.root
    }
}

impl<T: Eq + Hash> Eq for Trie<T> {}

impl<T, K, const N: usize> From<[K; N]> for Trie<T>
where
    T: Clone + Eq + Hash,
    K: AsRef<[T]>,
{
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<T, K> FromIterator<K> for Trie<T>
where
    T: Clone + Eq + Hash,
    K: AsRef<[T]>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

/// Replaces `self` with a trie that also holds the new keys.
///
/// Other handles to the previous version are not affected.
impl<T, K> Extend<K> for Trie<T>
where
    T: Clone + Eq + Hash,
    K: AsRef<[T]>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = K>,
    {
        for key in iter {
            *self = self.insert(&key);
        }
    }
}

impl<'a, T: Clone> IntoIterator for &'a Trie<T> {
    type IntoIter = Iter<'a, T>;
    type Item = Vec<T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(&self.root)
    }
}

/// Depth-first iterator over the keys of a trie.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    /// whether the empty key is still to be yielded
    root_terminal: bool,
    /// labels of the edges leading to the node on top of `stack`
    path: Vec<T>,
    stack: Vec<hash_map::Iter<'a, T, Arc<Node<T>>>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: &'a Node<T>) -> Self {
        Iter {
            root_terminal: root.is_terminal(),
            path: Vec::new(),
            stack: vec![root.children().iter()],
        }
    }
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if mem::take(&mut self.root_terminal) {
            return Some(Vec::new());
        }

        loop {
            let children = self.stack.last_mut()?;

            if let Some((label, child)) = children.next() {
                // descend first, so the child's own children come next
                self.path.push(label.clone());
                self.stack.push(child.children().iter());

                if child.is_terminal() {
                    return Some(self.path.clone());
                }
            } else {
                // the root frame has no label, so popping `path` is a no-op there
                self.stack.pop();
                self.path.pop();
            }
        }
    }
}

impl<T: Clone> FusedIterator for Iter<'_, T> {}
