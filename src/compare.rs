//! Key comparison and disposal contracts supplied by table owners.

use core::cmp::Ordering;

/// Decides whether two keys name the same entry.
///
/// Keys match iff `compare` returns `Ordering::Equal`; the table never
/// looks at the other variants.
pub trait Compare<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;

    #[inline]
    fn matches(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<K: ?Sized, F> Compare<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Comparator that defers to the key's own `Ord`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Natural;

impl<K: ?Sized + Ord> Compare<K> for Natural {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Cleanup run when the table releases a key or value it owns.
pub type Disposer<T> = Box<dyn FnMut(T)>;

/// Hand `item` to `disposer` if one is set; otherwise just drop it.
pub(crate) fn release<T>(disposer: &mut Option<Disposer<T>>, item: T) {
    if let Some(d) = disposer.as_mut() {
        d(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn natural_matches_equal_keys_only() {
        assert!(Natural.matches(&3, &3));
        assert!(!Natural.matches(&3, &4));
        assert!(Compare::<str>::matches(&Natural, "a", "a"));
    }

    #[test]
    fn closure_comparator_defines_equality() {
        let ci = |a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase());
        assert!(ci.matches(&"Key".to_string(), &"kEY".to_string()));
        assert!(!ci.matches(&"key".to_string(), &"other".to_string()));
    }

    #[test]
    fn release_without_disposer_drops() {
        let item = Rc::new(());
        let mut none: Option<Disposer<Rc<()>>> = None;
        release(&mut none, item.clone());
        assert_eq!(Rc::strong_count(&item), 1);
    }

    #[test]
    fn release_with_disposer_hands_over_ownership() {
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        let mut d: Option<Disposer<i32>> = Some(Box::new(move |v| {
            assert_eq!(v, 7);
            c.set(c.get() + 1);
        }));
        release(&mut d, 7);
        assert_eq!(calls.get(), 1);
    }
}
