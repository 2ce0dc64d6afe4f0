//! This module implements an ordered integer set based on an unbalanced
//! binary search tree.

use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeBounds;

mod iter;
mod node;

pub use iter::Iter;
use node::{Node, NodeArena, NodeId};

/// An ordered set of `i64` keys backed by an unbalanced binary search tree.
///
/// # Overview
///
/// Nodes live in a slot arena owned by the set and link to each other by
/// index, so the set shares nothing with any other instance: cloning it
/// deep-copies the arena, and dropping it frees one `Vec`. Every descent
/// is a loop, not a recursion, so a degenerate tree costs time, never
/// stack.
///
/// Nothing rebalances the tree. Operations are O(depth): O(log n)
/// expected for random insertion orders, O(n) in the worst case (for
/// example after inserting keys in ascending order).
///
/// # Examples
///
/// ```rust
/// use bst_set::IntSet;
///
/// let mut set = IntSet::new();
/// set.insert(42);
/// assert!(set.contains(42));
/// assert_eq!(set.pop_first(), Some(42));
/// assert!(set.is_empty());
/// ```
///
/// ## Range Queries
///
/// ```rust
/// use bst_set::IntSet;
///
/// let set: IntSet = [1, 2, 3].into_iter().collect();
///
/// let range: Vec<_> = set.range(2..).collect();
/// assert_eq!(range, vec![2, 3]);
/// ```
#[derive(Clone, Default)]
pub struct IntSet {
    root: Option<NodeId>,
    arena: NodeArena,
}

// Note: Search Invariant
// ~~~~~~~~~~~~~~~~~~~~~~
//
// SearchInvariant(set) :=
//   ∀ node n: keys(n.left) < n.key < keys(n.right)
//
// which holds iff the in-order traversal of the tree is strictly
// ascending. `check_invariant` verifies exactly that, plus that the
// arena holds no slots the root cannot reach.

impl IntSet {
    /// Creates a new, empty `IntSet`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bst_set::IntSet;
    ///
    /// let set = IntSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        IntSet {
            root: None,
            arena: NodeArena::default(),
        }
    }

    /// Inserts a key into the set. Returns `true` if the key
    /// did not exist in the set before.
    ///
    /// # Complexity
    /// O(depth), where depth is the height of the tree.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bst_set::IntSet;
    ///
    /// let mut set = IntSet::new();
    /// assert!(set.insert(42));
    /// assert!(!set.insert(42)); // Key already exists
    /// ```
    pub fn insert(&mut self, key: i64) -> bool {
        let Some(root) = self.root else {
            self.root = Some(self.arena.alloc(Node::leaf(key)));
            debug_assert_eq!(Ok(()), self.check_invariant());
            return true;
        };

        // Descend to the vacant child slot where `key` belongs, bailing
        // out if a node already holds it.
        let mut current = root;
        loop {
            let node = self.arena.get(current);
            let child = match key.cmp(&node.key) {
                Ordering::Equal => return false,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            match child {
                Some(next) => current = next,
                None => {
                    let leaf = self.arena.alloc(Node::leaf(key));
                    let node = self.arena.get_mut(current);
                    if key < node.key {
                        node.left = Some(leaf);
                    } else {
                        node.right = Some(leaf);
                    }
                    debug_assert_eq!(Ok(()), self.check_invariant());
                    return true;
                }
            }
        }
    }

    /// Returns `true` if the key exists in the set, `false` otherwise.
    ///
    /// # Complexity
    /// O(depth), where depth is the height of the tree.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bst_set::IntSet;
    ///
    /// let mut set = IntSet::new();
    /// set.insert(42);
    /// assert!(set.contains(42));
    /// assert!(!set.contains(7));
    /// ```
    pub fn contains(&self, key: i64) -> bool {
        let mut walk = self.root;
        while let Some(id) = walk {
            let node = self.arena.get(id);
            walk = match key.cmp(&node.key) {
                Ordering::Equal => return true,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        false
    }

    /// Removes a key from the set, returning `true` if it exists.
    ///
    /// # Complexity
    /// O(depth), where depth is the height of the tree.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bst_set::IntSet;
    ///
    /// let mut set = IntSet::new();
    /// set.insert(42);
    /// assert!(set.remove(42));
    /// assert!(!set.contains(42));
    /// ```
    pub fn remove(&mut self, key: i64) -> bool {
        // Locate the node holding `key`, remembering its parent so the
        // edge into it can be redirected.
        let mut parent = None;
        let mut walk = self.root;
        let found = loop {
            let Some(id) = walk else { return false };
            let node = self.arena.get(id);
            match key.cmp(&node.key) {
                Ordering::Equal => break id,
                Ordering::Less => {
                    parent = Some(id);
                    walk = node.left;
                }
                Ordering::Greater => {
                    parent = Some(id);
                    walk = node.right;
                }
            }
        };

        let node = self.arena.get(found);
        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                // Case 1: The node has two children.
                //
                //        found                 successor
                //        /   \                  /   \
                //    [...]   [...]    =>    [...]   [...]
                //            /                      /
                //     [successor]               [s right]
                //            \
                //         [s right]
                //
                // The in-order successor is the leftmost node of the
                // right subtree. It has no left child, so it can be
                // spliced out by linking its parent to its right child;
                // its key then replaces the removed one. This never
                // re-enters the two-child case.
                let mut successor_parent = found;
                let mut successor = right;
                while let Some(left) = self.arena.get(successor).left {
                    successor_parent = successor;
                    successor = left;
                }

                let spliced = self.arena.take(successor);
                if successor_parent == found {
                    // The right child itself is the successor.
                    self.arena.get_mut(successor_parent).right = spliced.right;
                } else {
                    self.arena.get_mut(successor_parent).left = spliced.right;
                }
                self.arena.get_mut(found).key = spliced.key;
            }
            (left, right) => {
                // Case 2: The node has at most one child, which takes
                // its place (or nothing does).
                self.arena.take(found);
                self.relink(parent, found, left.or(right));
            }
        }

        debug_assert_eq!(Ok(()), self.check_invariant());
        true
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    /// O(1)
    pub fn len(&self) -> u64 {
        self.arena.len() as u64
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Complexity
    /// O(1)
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes all elements from the set, releasing every node at once.
    ///
    /// # Complexity
    /// O(1), not counting the deallocation itself.
    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
    }

    /// Returns the first key in the set. This key
    /// is the minimum key in the set.
    ///
    /// # Complexity
    /// O(depth), where depth is the height of the tree.
    pub fn first(&self) -> Option<i64> {
        let mut id = self.root?;
        loop {
            let node = self.arena.get(id);
            match node.left {
                Some(left) => id = left,
                None => return Some(node.key),
            }
        }
    }

    /// Returns the last key in the set. This key
    /// is the maximum key in the set.
    ///
    /// # Complexity
    /// O(depth), where depth is the height of the tree.
    pub fn last(&self) -> Option<i64> {
        let mut id = self.root?;
        loop {
            let node = self.arena.get(id);
            match node.right {
                Some(right) => id = right,
                None => return Some(node.key),
            }
        }
    }

    /// Removes and returns the minimum key in the set.
    ///
    /// # Complexity
    /// O(depth), where depth is the height of the tree.
    pub fn pop_first(&mut self) -> Option<i64> {
        let key = self.first()?;
        self.remove(key);
        Some(key)
    }

    /// Removes and returns the maximum key in the set.
    ///
    /// # Complexity
    /// O(depth), where depth is the height of the tree.
    pub fn pop_last(&mut self) -> Option<i64> {
        let key = self.last()?;
        self.remove(key);
        Some(key)
    }

    /// Returns an iterator over the keys of the set in ascending order.
    ///
    /// Iteration is read-only and restartable.
    ///
    /// # Complexity
    /// Creating the iterator is O(depth), and iterating over k elements is O(k).
    ///
    /// # Example
    ///
    /// ```rust
    /// use bst_set::IntSet;
    ///
    /// let set: IntSet = [3, 1, 2].into_iter().collect();
    /// assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Returns an iterator over the keys of the set that
    /// belong to the specified range, in ascending order.
    ///
    /// # Complexity
    /// O(depth) for creating the iterator. Iterating over the range is O(k),
    /// where k is the number of elements in the range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bst_set::IntSet;
    ///
    /// let set: IntSet = (0..10).collect();
    /// let range: Vec<_> = set.range(4..8).collect();
    /// assert_eq!(range, vec![4, 5, 6, 7]);
    /// ```
    pub fn range(&self, key_range: impl RangeBounds<i64>) -> Iter<'_> {
        Iter::new_in_range(
            self,
            (
                key_range.start_bound().cloned(),
                key_range.end_bound().cloned(),
            ),
        )
    }

    /// Returns an iterator over the union of this set and another.
    ///
    /// The union of two sets is a set containing all elements that are in either set.
    ///
    /// # Complexity
    /// O(n + m), where n and m are the sizes of the two sets.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bst_set::IntSet;
    ///
    /// let a: IntSet = [1, 2].into_iter().collect();
    /// let b: IntSet = [2, 3].into_iter().collect();
    ///
    /// let union: Vec<_> = a.union(&b).collect();
    /// assert_eq!(union, vec![1, 2, 3]);
    /// ```
    pub fn union<'a>(&'a self, other: &'a IntSet) -> impl Iterator<Item = i64> + 'a {
        let mut iter_self = self.iter();
        let mut iter_other = other.iter();
        let mut next_self = iter_self.next();
        let mut next_other = iter_other.next();

        // Merge the two ascending traversals, yielding keys present in
        // both sets exactly once.
        std::iter::from_fn(move || match (next_self, next_other) {
            (Some(a), Some(b)) => match a.cmp(&b) {
                Ordering::Less => {
                    next_self = iter_self.next();
                    Some(a)
                }
                Ordering::Greater => {
                    next_other = iter_other.next();
                    Some(b)
                }
                Ordering::Equal => {
                    next_self = iter_self.next();
                    next_other = iter_other.next();
                    Some(a)
                }
            },
            (Some(a), None) => {
                next_self = iter_self.next();
                Some(a)
            }
            (None, Some(b)) => {
                next_other = iter_other.next();
                Some(b)
            }
            (None, None) => None,
        })
    }

    /// Returns an iterator over the intersection of this set and another.
    ///
    /// The intersection of two sets is a set containing only the elements that are in both sets.
    ///
    /// # Complexity
    /// O(n + m), where n and m are the sizes of the two sets.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bst_set::IntSet;
    ///
    /// let a: IntSet = [1, 2, 3].into_iter().collect();
    /// let b: IntSet = [2, 3, 4].into_iter().collect();
    ///
    /// let intersection: Vec<_> = a.intersection(&b).collect();
    /// assert_eq!(intersection, vec![2, 3]);
    /// ```
    pub fn intersection<'a>(&'a self, other: &'a IntSet) -> impl Iterator<Item = i64> + 'a {
        let mut iter_self = self.iter();
        let mut iter_other = other.iter();
        let mut next_self = iter_self.next();
        let mut next_other = iter_other.next();

        std::iter::from_fn(move || {
            // Advance whichever traversal is behind until the keys meet.
            while let (Some(a), Some(b)) = (next_self, next_other) {
                match a.cmp(&b) {
                    Ordering::Less => next_self = iter_self.next(),
                    Ordering::Greater => next_other = iter_other.next(),
                    Ordering::Equal => {
                        next_self = iter_self.next();
                        next_other = iter_other.next();
                        return Some(a);
                    }
                }
            }
            None
        })
    }

    /// Returns an iterator over the symmetric difference of this set and another.
    ///
    /// The symmetric difference of two sets is the set of elements that are in either of the sets,
    /// but not in their intersection.
    ///
    /// # Complexity
    /// O(n + m), where n and m are the sizes of the two sets.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bst_set::IntSet;
    ///
    /// let a: IntSet = [1, 2].into_iter().collect();
    /// let b: IntSet = [2, 3].into_iter().collect();
    ///
    /// let symmetric_diff: Vec<_> = a.symmetric_difference(&b).collect();
    /// assert_eq!(symmetric_diff, vec![1, 3]);
    /// ```
    pub fn symmetric_difference<'a>(&'a self, other: &'a IntSet) -> impl Iterator<Item = i64> + 'a {
        let mut iter_self = self.iter();
        let mut iter_other = other.iter();
        let mut next_self = iter_self.next();
        let mut next_other = iter_other.next();

        std::iter::from_fn(move || loop {
            return match (next_self, next_other) {
                (Some(a), Some(b)) => match a.cmp(&b) {
                    Ordering::Less => {
                        next_self = iter_self.next();
                        Some(a)
                    }
                    Ordering::Greater => {
                        next_other = iter_other.next();
                        Some(b)
                    }
                    Ordering::Equal => {
                        // Keys present in both sets are skipped.
                        next_self = iter_self.next();
                        next_other = iter_other.next();
                        continue;
                    }
                },
                (Some(a), None) => {
                    next_self = iter_self.next();
                    Some(a)
                }
                (None, Some(b)) => {
                    next_other = iter_other.next();
                    Some(b)
                }
                (None, None) => None,
            };
        })
    }

    /// Returns `true` if this set has no elements in common with another set.
    ///
    /// # Complexity
    /// O(n + m), where n and m are the sizes of the two sets.
    pub fn is_disjoint(&self, other: &IntSet) -> bool {
        let mut iter_self = self.iter();
        let mut iter_other = other.iter();
        let mut next_self = iter_self.next();
        let mut next_other = iter_other.next();

        while let (Some(a), Some(b)) = (next_self, next_other) {
            match a.cmp(&b) {
                Ordering::Less => next_self = iter_self.next(),
                Ordering::Greater => next_other = iter_other.next(),
                Ordering::Equal => return false, // Common element found
            }
        }

        true
    }

    /// Returns `true` if this set is a subset of another set.
    ///
    /// A set `A` is a subset of a set `B` if all elements of `A` are also elements of `B`.
    ///
    /// # Complexity
    /// O(n + m), where n and m are the sizes of the two sets.
    pub fn is_subset(&self, other: &IntSet) -> bool {
        let mut iter_self = self.iter();
        let mut iter_other = other.iter();
        let mut next_self = iter_self.next();
        let mut next_other = iter_other.next();

        while let Some(a) = next_self {
            match next_other {
                Some(b) => match a.cmp(&b) {
                    Ordering::Equal => {
                        next_self = iter_self.next();
                        next_other = iter_other.next();
                    }
                    Ordering::Greater => {
                        next_other = iter_other.next();
                    }
                    Ordering::Less => {
                        // `a` is smaller than the smallest remaining key
                        // of `other`, so `other` cannot contain it.
                        return false;
                    }
                },
                None => return false,
            }
        }

        true
    }

    /// Returns `true` if this set is a superset of another set.
    ///
    /// A set `A` is a superset of a set `B` if all elements of `B` are also elements of `A`.
    ///
    /// # Complexity
    /// O(n + m), where n and m are the sizes of the two sets.
    pub fn is_superset(&self, other: &IntSet) -> bool {
        other.is_subset(self)
    }

    /// Redirects the edge that pointed at `from` (the root edge when
    /// `parent` is `None`) to point at `to`.
    fn relink(&mut self, parent: Option<NodeId>, from: NodeId, to: Option<NodeId>) {
        match parent {
            None => self.root = to,
            Some(parent) => {
                let node = self.arena.get_mut(parent);
                if node.left == Some(from) {
                    node.left = to;
                } else {
                    debug_assert_eq!(node.right, Some(from));
                    node.right = to;
                }
            }
        }
    }

    /// Verifies the search invariant and that the arena holds exactly
    /// the nodes reachable from the root.
    fn check_invariant(&self) -> Result<(), String> {
        let mut reachable = 0;
        let mut previous = None;
        for key in self.iter() {
            if let Some(previous) = previous {
                if previous >= key {
                    return Err(format!("{previous} precedes {key} in the traversal"));
                }
            }
            previous = Some(key);
            reachable += 1;
        }

        if reachable != self.arena.len() {
            return Err(format!(
                "{} nodes reachable from the root, but the arena holds {}",
                reachable,
                self.arena.len()
            ));
        }

        Ok(())
    }
}

impl fmt::Debug for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<i64> for IntSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut set = IntSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<i64> for IntSet {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a> IntoIterator for &'a IntSet {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Builds a new set containing every key present in either input.
///
/// The result is an independent set sharing nothing with `a` or `b`; it is
/// built through the public interface by deep-copying `a` and inserting
/// every key of `b`.
///
/// # Example
///
/// ```rust
/// use bst_set::{union, IntSet};
///
/// let a: IntSet = [1, 2, 3].into_iter().collect();
/// let b: IntSet = [3, 4, 5].into_iter().collect();
///
/// let result = union(&a, &b);
/// assert_eq!(result.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
/// ```
pub fn union(a: &IntSet, b: &IntSet) -> IntSet {
    let mut result = a.clone();
    result.extend(b.iter());
    result
}

/// Builds a new set containing every key present in exactly one input.
///
/// The result is an independent set sharing nothing with `a` or `b`.
///
/// # Example
///
/// ```rust
/// use bst_set::{symmetric_difference, IntSet};
///
/// let a: IntSet = [1, 2, 3].into_iter().collect();
/// let b: IntSet = [3, 4, 5].into_iter().collect();
///
/// let result = symmetric_difference(&a, &b);
/// assert_eq!(result.iter().collect::<Vec<_>>(), vec![1, 2, 4, 5]);
/// ```
pub fn symmetric_difference(a: &IntSet, b: &IntSet) -> IntSet {
    a.symmetric_difference(b).collect()
}
