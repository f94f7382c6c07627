//! Chain: a singly linked key/value list backed by a slotmap arena.
//!
//! Each chain is one bucket of [`ChainedHashMap`](crate::ChainedHashMap).
//! Nodes live in a per-chain `SlotMap` and link to each other through
//! `DefaultKey` handles; the chain holds the head key. This keeps node
//! ownership single and local (unlinking rewires keys, never aliases
//! node references) while staying entirely in safe Rust.

use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    next: Option<DefaultKey>,
}

/// A bucket chain. Entries are kept in most-recently-inserted-first order;
/// `push_front` is O(1), everything else walks from the head.
#[derive(Debug)]
pub struct Chain<K, V> {
    nodes: SlotMap<DefaultKey, Node<K, V>>,
    head: Option<DefaultKey>,
}

impl<K, V> Chain<K, V> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
        }
    }

    /// Number of entries in the chain. Every arena node is reachable from
    /// the head, so the arena population is the chain length.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Insert a new entry at the head. Does not check for duplicate keys;
    /// the table layer guarantees at most one entry per key per chain.
    pub fn push_front(&mut self, key: K, value: V) {
        let id = self.nodes.insert(Node {
            key,
            value,
            next: self.head,
        });
        self.head = Some(id);
    }

    /// Detach and return the head entry. Used by the table's resize sweep
    /// to drain a chain in head-to-tail order.
    pub fn pop_front(&mut self) -> Option<(K, V)> {
        let id = self.head?;
        let node = self.nodes.remove(id)?;
        self.head = node.next;
        Some((node.key, node.value))
    }

    /// Drop every entry at once. O(len).
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            cur: self.head,
        }
    }
}

impl<K: Eq, V> Chain<K, V> {
    /// Reference to the value of the first entry whose key matches.
    pub fn find(&self, key: &K) -> Option<&V> {
        let mut cur = self.head;
        while let Some(id) = cur {
            let node = self.nodes.get(id)?;
            if node.key == *key {
                return Some(&node.value);
            }
            cur = node.next;
        }
        None
    }

    /// Mutable variant of [`find`](Self::find); lets the table overwrite a
    /// value in place without unlink/relink churn.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut cur = self.head;
        while let Some(id) = cur {
            if self.nodes.get(id)?.key == *key {
                return self.nodes.get_mut(id).map(|n| &mut n.value);
            }
            cur = self.nodes.get(id)?.next;
        }
        None
    }

    /// Unlink the entry with the given key, returning its value, or `None`
    /// if no entry matched. The predecessor (or the head) takes over the
    /// removed node's `next` link.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.head;
        while let Some(id) = cur {
            let (matches, next) = {
                let node = self.nodes.get(id)?;
                (node.key == *key, node.next)
            };
            if matches {
                match prev {
                    Some(p) => {
                        if let Some(pred) = self.nodes.get_mut(p) {
                            pred.next = next;
                        }
                    }
                    None => self.head = next,
                }
                return self.nodes.remove(id).map(|n| n.value);
            }
            prev = Some(id);
            cur = next;
        }
        None
    }
}

impl<K, V> Default for Chain<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Head-to-tail iterator over a chain. Restartable: each `iter()` call
/// yields a fresh cursor.
pub struct Iter<'a, K, V> {
    nodes: &'a SlotMap<DefaultKey, Node<K, V>>,
    cur: Option<DefaultKey>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cur?;
        let node = self.nodes.get(id)?;
        self.cur = node.next;
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> IntoIterator for &'a Chain<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
