//! Table: associative key/value store over a `DList`.
//!
//! Entries are pushed at the front of the list and looked up by a linear
//! scan, so the newest entry for a key shadows older duplicates. Removal
//! by key drops every duplicate.

use crate::compare::{release, Compare, Disposer, Natural};
use core::borrow::Borrow;
use crate::dlist::{self, DList, Position};
use core::fmt;
use tracing::{debug, trace};

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Key/value table with caller-defined key equality and optional
/// ownership of keys and values.
///
/// A table with a key (or value) disposer hands every released key (or
/// value) to it on `remove`, `destroy` or drop. Without one, released items
/// are simply dropped.
pub struct Table<K, V, C = Natural> {
    entries: DList<Entry<K, V>>,
    cmp: C,
    key_disposer: Option<Disposer<K>>,
    value_disposer: Option<Disposer<V>>,
}

impl<K: Ord, V> Table<K, V> {
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K: Ord, V> Default for Table<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Table<K, V, C>
where
    C: Compare<K>,
{
    pub fn with_comparator(cmp: C) -> Self {
        Self::create(cmp, None, None)
    }

    /// Build a table from all three behaviours at once.
    pub fn create(
        cmp: C,
        key_disposer: Option<Disposer<K>>,
        value_disposer: Option<Disposer<V>>,
    ) -> Self {
        Self {
            entries: DList::new(),
            cmp,
            key_disposer,
            value_disposer,
        }
    }

    /// Let the table own its keys: `f` runs on every key it releases.
    pub fn with_key_disposer<F>(mut self, f: F) -> Self
    where
        F: FnMut(K) + 'static,
    {
        self.key_disposer = Some(Box::new(f));
        self
    }

    /// Let the table own its values: `f` runs on every value it releases.
    pub fn with_value_disposer<F>(mut self, f: F) -> Self
    where
        F: FnMut(V) + 'static,
    {
        self.value_disposer = Some(Box::new(f));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store `key -> value` in front of any existing entries. Duplicates are
    /// not checked; the new entry shadows older ones with an equal key.
    pub fn insert(&mut self, key: K, value: V) {
        self.entries.push_front(Entry { key, value });
    }

    fn position_of<Q>(&self, key: &Q) -> Option<Position>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let mut pos = self.entries.first();
        while !self.entries.is_end(pos) {
            let entry = self.entries.inspect(pos)?;
            if Compare::<Q>::matches(&self.cmp, entry.key.borrow(), key) {
                return Some(pos);
            }
            pos = self.entries.next(pos);
        }
        None
    }

    /// Value of the most recently inserted entry whose key matches `key`.
    /// `key` may be any borrowed form of `K` the comparator understands.
    pub fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let pos = self.position_of(key)?;
        self.entries.inspect(pos).map(|e| &e.value)
    }

    pub fn lookup_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let pos = self.position_of(key)?;
        self.entries.inspect_mut(pos).map(|e| &mut e.value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        self.position_of(key).is_some()
    }

    /// Remove every entry matching `key`, disposing of each key and value.
    /// Returns the number of entries removed.
    pub fn remove<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let mut removed = 0;
        let mut pos = self.entries.first();
        while !self.entries.is_end(pos) {
            let Some(entry) = self.entries.inspect(pos) else {
                break;
            };
            if !Compare::<Q>::matches(&self.cmp, entry.key.borrow(), key) {
                pos = self.entries.next(pos);
                continue;
            }
            // Unlink first so the list is whole while disposers run.
            let Some((entry, next)) = self.entries.remove(pos) else {
                break;
            };
            pos = next;
            removed += 1;
            release(&mut self.key_disposer, entry.key);
            release(&mut self.value_disposer, entry.value);
        }
        trace!(removed, remaining = self.entries.len(), "table remove");
        removed
    }

    /// Visit every entry front to back, newest first.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&K, &V),
    {
        for entry in self.entries.iter() {
            visitor(&entry.key, &entry.value);
        }
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            it: self.entries.iter(),
        }
    }

    /// Dispose of every entry and release the table.
    pub fn destroy(self) {
        drop(self);
    }
}

impl<K, V, C> Drop for Table<K, V, C> {
    fn drop(&mut self) {
        let entries = core::mem::take(&mut self.entries);
        let count = entries.len();
        let key_disposer = &mut self.key_disposer;
        let value_disposer = &mut self.value_disposer;
        entries.kill_with(|Entry { key, value }| {
            release(key_disposer, key);
            release(value_disposer, value);
        });
        debug!(entries = count, "table destroyed");
    }
}

/// Iterator over `(key, value)` pairs, newest entry first.
pub struct Iter<'a, K, V> {
    it: dlist::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|e| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for Table<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|e| (&e.key, &e.value)))
            .finish()
    }
}
