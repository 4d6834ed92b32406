//! Small containers used by the traversal algorithms.
//!
//! [`OrderedSet`] is a hash set that remembers insertion order, and [`Queue`]
//! is a plain FIFO queue.  Both exist mainly so that traversals and adjacency
//! lists enumerate in a deterministic order.

use std::{
    collections::{HashSet, VecDeque},
    hash::Hash,
};

use derivative::Derivative;

/// A set that iterates in first-insertion order.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone"),
    Debug(bound = "T: std::fmt::Debug"),
    Default(bound = "")
)]
pub struct OrderedSet<T> {
    items: Vec<T>,
    index: HashSet<T>,
}

impl<T> OrderedSet<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item, returning `true` if it was not already present.  Adding
    /// an item twice leaves the set unchanged.
    pub fn add(&mut self, item: T) -> bool {
        if self.index.contains(&item) {
            return false;
        }
        self.index.insert(item.clone());
        self.items.push(item);
        true
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items in the order they were first added.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for OrderedSet<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.add(item);
        }
        set
    }
}

/// A first-in, first-out queue.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone"),
    Debug(bound = "T: std::fmt::Debug"),
    Default(bound = "")
)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the earliest enqueued item.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
