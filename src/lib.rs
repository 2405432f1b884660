//! list-table: a generic key/value table built on a doubly linked list,
//! with caller-supplied key comparison and optional key/value disposal.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the associative layer thin by expressing every table
//!   operation through a handful of sequence primitives.
//! - Layers:
//!   - DList<T>: doubly linked list stored in a `SlotMap`; exposes
//!     cursor-style `Position`s (first, next, end sentinel), insert-before,
//!     inspect, remove-returning-next and a consuming `kill_with`.
//!   - Table<K, V, C>: owns a `DList` of key/value entries plus a
//!     comparator `C: Compare<K>` and optional key/value disposers.
//!
//! Constraints
//! - Single-threaded: disposers are `Box<dyn FnMut>` without `Send`.
//! - Lookup is a linear scan; there is no hashing and no ordering of keys.
//! - Duplicate keys are allowed. Inserts go to the front, so lookups see the
//!   newest entry for a key first; `remove` drops every duplicate.
//!
//! Ownership
//! - `insert` moves the key and value into the table.
//! - A configured disposer receives each key (or value) by value when the
//!   table releases it through `remove`, `destroy` or drop. Without a
//!   disposer the item is dropped, which leaves shared data (`Rc`, borrowed
//!   references) with its other owners.
//! - `destroy` consumes the table, so a destroyed handle cannot be reused.
//!
//! Unlink before dispose
//! - `DList` never runs user code itself. `remove` and `kill_with` take a
//!   node out of the chain before its value reaches a disposer or `Drop`,
//!   so that code may own (and tear down) further tables freely.
//!
//! Notes and non-goals
//! - No persistence, no concurrency, no sorted iteration.
//! - Enumeration (`for_each`, `iter`, `Debug`) follows the current
//!   front-to-back order and makes no promise beyond that.

pub mod compare;
pub mod dlist;
mod dlist_proptest;
pub mod table;

// Public surface
pub use compare::{Compare, Disposer, Natural};
pub use dlist::{DList, Position, PositionError};
pub use table::Table;
