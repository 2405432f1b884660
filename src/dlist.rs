//! DList: doubly linked list with generational positions.
//!
//! Nodes live in a `SlotMap` and point at their neighbours by key, so the
//! list needs no unsafe pointer juggling and a removed node's position
//! can never alias a node inserted later.

use core::fmt;
use slotmap::{DefaultKey, SlotMap};

/// Cursor into a [`DList`]: either an element or the end sentinel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Position(Option<DefaultKey>);

impl Position {
    /// The end sentinel, one past the last element.
    pub const END: Position = Position(None);

    fn at(k: DefaultKey) -> Self {
        Position(Some(k))
    }
}

#[derive(Debug)]
pub enum PositionError {
    /// The position refers to an element that has been removed.
    Stale,
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<DefaultKey>,
    next: Option<DefaultKey>,
}

pub struct DList<T> {
    nodes: SlotMap<DefaultKey, Node<T>>,
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
}

impl<T> Default for DList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DList<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Position of the first element, or `END` for an empty list.
    pub fn first(&self) -> Position {
        Position(self.head)
    }

    /// Position of the last element, or `END` for an empty list.
    pub fn last(&self) -> Position {
        Position(self.tail)
    }

    pub fn is_end(&self, pos: Position) -> bool {
        pos == Position::END
    }

    /// Advance to the following element. `END` and stale positions
    /// advance to `END`.
    pub fn next(&self, pos: Position) -> Position {
        match pos.0 {
            Some(k) => Position(self.nodes.get(k).and_then(|n| n.next)),
            None => Position::END,
        }
    }

    /// Step back to the preceding element. Stepping back from `END` lands
    /// on the last element; stepping back from the first lands on `END`.
    pub fn prev(&self, pos: Position) -> Position {
        match pos.0 {
            Some(k) => Position(self.nodes.get(k).and_then(|n| n.prev)),
            None => Position(self.tail),
        }
    }

    pub fn inspect(&self, pos: Position) -> Option<&T> {
        self.nodes.get(pos.0?).map(|n| &n.value)
    }

    pub fn inspect_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.nodes.get_mut(pos.0?).map(|n| &mut n.value)
    }

    /// Insert `value` immediately before `pos` and return its position.
    /// Inserting before `END` appends.
    pub fn insert(&mut self, value: T, pos: Position) -> Result<Position, PositionError> {
        if let Some(k) = pos.0 {
            if !self.nodes.contains_key(k) {
                return Err(PositionError::Stale);
            }
        }
        Ok(self.link_before(value, pos.0))
    }

    /// Insert `value` before the current first element.
    pub fn push_front(&mut self, value: T) -> Position {
        self.link_before(value, self.head)
    }

    // `next` must be None or a live key.
    fn link_before(&mut self, value: T, next: Option<DefaultKey>) -> Position {
        let prev = match next {
            Some(n) => self.nodes[n].prev,
            None => self.tail,
        };
        let k = self.nodes.insert(Node { value, prev, next });
        match prev {
            Some(p) => self.nodes[p].next = Some(k),
            None => self.head = Some(k),
        }
        match next {
            Some(n) => self.nodes[n].prev = Some(k),
            None => self.tail = Some(k),
        }
        Position::at(k)
    }

    /// Unlink the element at `pos`, returning it together with the position
    /// of the element that followed it. The list is consistent again before
    /// the value is handed back, so dropping it may safely call back in.
    pub fn remove(&mut self, pos: Position) -> Option<(T, Position)> {
        let node = self.nodes.remove(pos.0?)?;
        match node.prev {
            Some(p) => self.nodes[p].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.nodes[n].prev = node.prev,
            None => self.tail = node.prev,
        }
        Some((node.value, Position(node.next)))
    }

    /// Tear the list down front to back, handing every element to
    /// `disposer`.
    pub fn kill_with<F>(mut self, mut disposer: F)
    where
        F: FnMut(T),
    {
        let mut cur = self.head.take();
        self.tail = None;
        while let Some(k) = cur {
            let node = {
                        self.nodes.remove(k)
            };
            let Some(node) = node else { break };
            cur = node.next;
            disposer(node.value);
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cur: self.head,
            remaining: self.nodes.len(),
        }
    }
}

/// Front-to-back iterator over a [`DList`].
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<DefaultKey, Node<T>>,
    cur: Option<DefaultKey>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cur?)?;
        self.cur = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for DList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
