//! # Singly Linked List
//!
//! The collision chain used by the hash map: a singly linked list of
//! key/value nodes with O(1) front insertion, linear find/remove by key, and
//! a tracked length. Keys are owned `String`s; values are opaque.
//!
//! Each node exclusively owns its entry and the link to the next node
//! (`Option<Box<Node>>`), so the whole chain is a straight ownership line
//! from the head. `Drop` is iterative — tearing down a long chain never
//! recurses node by node.
//!
//! The list itself does not deduplicate keys; the hash map checks for an
//! existing key before inserting, which keeps the one-entry-per-key
//! invariant at the map level.

use std::fmt;

#[derive(Debug, Clone)]
struct Node<V> {
    key: String,
    value: V,
    next: Option<Box<Node<V>>>,
}

/// A singly linked list of key/value pairs with front insertion.
///
/// # Examples
/// ```
/// use chainmap::LinkedList;
///
/// let mut chain = LinkedList::new();
/// chain.insert("a", 1);
/// chain.insert("b", 2);
/// assert_eq!(chain.find("a"), Some(&1));
/// assert!(chain.remove("a"));
/// assert_eq!(chain.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct LinkedList<V> {
    head: Option<Box<Node<V>>>,
    size: usize,
}

impl<V> LinkedList<V> {
    /// Creates an empty list.
    pub fn new() -> Self {
        LinkedList {
            head: None,
            size: 0,
        }
    }

    /// Inserts a new node at the front of the list. O(1).
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let node = Box::new(Node {
            key: key.into(),
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.size += 1;
    }

    /// Removes the first node with a matching key.
    ///
    /// Returns `true` iff a node was found and removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let mut current = &mut self.head;
        loop {
            match current {
                None => return false,
                Some(node) if node.key == key => {
                    *current = node.next.take();
                    self.size -= 1;
                    return true;
                }
                Some(node) => current = &mut node.next,
            }
        }
    }

    /// Returns a reference to the value stored under `key`, if present.
    pub fn find(&self, key: &str) -> Option<&V> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value stored under `key`, if
    /// present.
    pub fn find_mut(&mut self, key: &str) -> Option<&mut V> {
        let mut current = self.head.as_deref_mut();
        while let Some(node) = current {
            if node.key == key {
                return Some(&mut node.value);
            }
            current = node.next.as_deref_mut();
        }
        None
    }

    /// Number of nodes in the list.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the list holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Iterates over `(key, value)` pairs from the head. Each call starts a
    /// fresh traversal.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<V> Default for LinkedList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for LinkedList<V> {
    fn drop(&mut self) {
        // Unlink nodes one at a time so dropping a long chain cannot
        // overflow the stack through nested Box drops.
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

/// Borrowing iterator over a list's `(key, value)` pairs.
pub struct Iter<'a, V> {
    next: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some((node.key.as_str(), &node.value))
    }
}

impl<'a, V> IntoIterator for &'a LinkedList<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that consumes the list, yielding `(key, value)` pairs.
pub struct IntoIter<V> {
    next: Option<Box<Node<V>>>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next;
            (node.key, node.value)
        })
    }
}

impl<V> IntoIterator for LinkedList<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter {
            next: self.head.take(),
        }
    }
}

impl<V: fmt::Display> fmt::Display for LinkedList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({key}: {value})")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_front() {
        let mut chain = LinkedList::new();
        chain.insert("a", 1);
        chain.insert("b", 2);
        chain.insert("c", 3);

        // Most recently inserted key is found first.
        let keys: Vec<&str> = chain.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["c", "b", "a"]);
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_find_and_find_mut() {
        let mut chain = LinkedList::new();
        chain.insert("x", 10);
        chain.insert("y", 20);

        assert_eq!(chain.find("x"), Some(&10));
        assert_eq!(chain.find("missing"), None);

        if let Some(value) = chain.find_mut("x") {
            *value = 11;
        }
        assert_eq!(chain.find("x"), Some(&11));
    }

    #[test]
    fn test_remove_head_middle_tail() {
        let mut chain = LinkedList::new();
        for (key, value) in [("a", 1), ("b", 2), ("c", 3)] {
            chain.insert(key, value);
        }
        // Chain order is c -> b -> a.

        assert!(chain.remove("b")); // middle
        assert!(chain.remove("c")); // head
        assert!(chain.remove("a")); // tail (now sole node)
        assert!(!chain.remove("a")); // already gone

        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut chain = LinkedList::new();
        chain.insert("k", 5);

        assert!(!chain.remove("other"));
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.find("k"), Some(&5));
    }

    #[test]
    fn test_iter_is_restartable() {
        let mut chain = LinkedList::new();
        chain.insert("a", 1);
        chain.insert("b", 2);

        let first: Vec<&str> = chain.iter().map(|(k, _)| k).collect();
        let second: Vec<&str> = chain.iter().map(|(k, _)| k).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_into_iter_yields_owned_pairs() {
        let mut chain = LinkedList::new();
        chain.insert("a", 1);
        chain.insert("b", 2);

        let pairs: Vec<(String, i32)> = chain.into_iter().collect();
        assert_eq!(pairs, vec![("b".to_string(), 2), ("a".to_string(), 1)]);
    }

    #[test]
    fn test_display_rendering() {
        let mut chain = LinkedList::new();
        assert_eq!(chain.to_string(), "[]");

        chain.insert("a", 1);
        chain.insert("b", 2);
        assert_eq!(chain.to_string(), "[(b: 2) -> (a: 1)]");
    }

    #[test]
    fn test_long_chain_drops_without_recursion() {
        let mut chain = LinkedList::new();
        for i in 0..100_000 {
            chain.insert(format!("key{i}"), i);
        }
        drop(chain);
    }
}
