//! Viewer cache: a viewer-keyed store with hard and weak entries.
//!
//! Each entry holds its value either *hard* (an owning `Rc`, used while
//! the viewer is actively being shown something) or *weak* (a `Weak`,
//! used once the viewer closed the UI). A weak entry stays addressable
//! while any outside strong reference keeps the value alive, and becomes
//! reclaimable the moment the last one is dropped. No explicit
//! "viewer disconnected" callback is required for memory to be freed.
//!
//! Dead weak entries are swept opportunistically: only after enough
//! mutations have accumulated since the last sweep, never once per
//! operation.

use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::ui::ViewerId;

/// Mutations between opportunistic sweeps of dead weak entries.
const SWEEP_INTERVAL: usize = 64;

enum Entry<T> {
    Hard(Rc<T>),
    Weak(Weak<T>),
}

impl<T> Entry<T> {
    fn alive(&self) -> Option<Rc<T>> {
        match self {
            Self::Hard(value) => Some(Rc::clone(value)),
            Self::Weak(value) => value.upgrade(),
        }
    }
}

/// A viewer-keyed store whose entries can be pinned (hard) or released
/// (weak) at runtime.
///
/// An entry is *alive* iff it is hard, or weak with the value still
/// reachable. All lookups reflect aliveness, not mere key presence.
pub struct ViewerCache<T> {
    entries: HashMap<ViewerId, Entry<T>>,
    mutations: usize,
}

impl<T> Default for ViewerCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewerCache<T> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self { entries: HashMap::new(), mutations: 0 }
    }

    /// Store a value for `viewer`, pinned hard.
    pub fn insert(&mut self, viewer: ViewerId, value: Rc<T>) {
        self.entries.insert(viewer, Entry::Hard(value));
        self.note_mutation();
    }

    /// Look up a live value without changing the entry's strength.
    pub fn get(&self, viewer: ViewerId) -> Option<Rc<T>> {
        self.entries.get(&viewer).and_then(Entry::alive)
    }

    /// Look up while activating: a live entry is upgraded to hard, so the
    /// value cannot be reclaimed while the viewer is being shown it.
    pub fn pin(&mut self, viewer: ViewerId) -> Option<Rc<T>> {
        let value = self.entries.get(&viewer).and_then(Entry::alive)?;
        self.entries.insert(viewer, Entry::Hard(Rc::clone(&value)));
        self.note_mutation();
        Some(value)
    }

    /// Downgrade a viewer's entry so the value may be reclaimed once no
    /// outside strong reference remains. The entry stays valid until then.
    pub fn release(&mut self, viewer: ViewerId) {
        if let Some(entry) = self.entries.get_mut(&viewer) {
            if let Entry::Hard(value) = entry {
                *entry = Entry::Weak(Rc::downgrade(value));
            }
        }
        self.note_mutation();
    }

    /// Remove a viewer's entry outright, returning the value if it was
    /// still alive.
    pub fn remove(&mut self, viewer: ViewerId) -> Option<Rc<T>> {
        self.entries.remove(&viewer).and_then(|entry| entry.alive())
    }

    /// Whether a live entry exists for `viewer`.
    pub fn contains(&self, viewer: ViewerId) -> bool {
        self.get(viewer).is_some()
    }

    /// Viewers with live entries.
    pub fn viewers(&self) -> Vec<ViewerId> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.alive().is_some())
            .map(|(viewer, _)| *viewer)
            .collect()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.values().filter(|entry| entry.alive().is_some()).count()
    }

    /// Whether no live entries exist.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop entries whose value has been reclaimed.
    pub fn sweep(&mut self) {
        self.entries.retain(|_, entry| match entry {
            Entry::Hard(_) => true,
            Entry::Weak(value) => value.strong_count() > 0,
        });
        self.mutations = 0;
    }

    fn note_mutation(&mut self) {
        self.mutations += 1;
        if self.mutations >= SWEEP_INTERVAL {
            self.sweep();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_entries_never_die() {
        let mut cache: ViewerCache<u32> = ViewerCache::new();
        let value = Rc::new(5);
        cache.insert(ViewerId(1), Rc::clone(&value));
        drop(value);

        // The cache itself keeps a hard entry alive.
        assert!(cache.contains(ViewerId(1)));
        assert_eq!(cache.get(ViewerId(1)).as_deref(), Some(&5));
    }

    #[test]
    fn test_released_entries_die_with_last_reference() {
        let mut cache: ViewerCache<u32> = ViewerCache::new();
        let value = Rc::new(5);
        cache.insert(ViewerId(1), Rc::clone(&value));
        cache.release(ViewerId(1));

        // Still alive: the outside reference holds it.
        assert!(cache.contains(ViewerId(1)));

        drop(value);
        assert!(!cache.contains(ViewerId(1)));
        assert!(cache.get(ViewerId(1)).is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_pin_upgrades_weak_entries() {
        let mut cache: ViewerCache<u32> = ViewerCache::new();
        let value = Rc::new(7);
        cache.insert(ViewerId(1), Rc::clone(&value));
        cache.release(ViewerId(1));

        let pinned = cache.pin(ViewerId(1)).unwrap();
        drop(value);
        drop(pinned);

        // Pinning made the entry hard again, so it survives.
        assert!(cache.contains(ViewerId(1)));
    }

    #[test]
    fn test_viewers_lists_only_live_entries() {
        let mut cache: ViewerCache<u32> = ViewerCache::new();
        let kept = Rc::new(1);
        let dropped = Rc::new(2);
        cache.insert(ViewerId(1), Rc::clone(&kept));
        cache.insert(ViewerId(2), Rc::clone(&dropped));
        cache.release(ViewerId(2));
        drop(dropped);

        assert_eq!(cache.viewers(), vec![ViewerId(1)]);
    }

    #[test]
    fn test_sweep_drops_dead_entries() {
        let mut cache: ViewerCache<u32> = ViewerCache::new();
        let value = Rc::new(9);
        cache.insert(ViewerId(1), Rc::clone(&value));
        cache.release(ViewerId(1));
        drop(value);

        assert_eq!(cache.entries.len(), 1);
        cache.sweep();
        assert_eq!(cache.entries.len(), 0);
    }

    #[test]
    fn test_sweep_is_throttled_by_mutations() {
        let mut cache: ViewerCache<u32> = ViewerCache::new();
        let value = Rc::new(9);
        cache.insert(ViewerId(0), Rc::clone(&value));
        cache.release(ViewerId(0));
        drop(value);

        // A couple of mutations do not trigger the sweep.
        let live = Rc::new(1);
        cache.insert(ViewerId(1), Rc::clone(&live));
        assert_eq!(cache.entries.len(), 2);

        // Enough mutations eventually do.
        for _ in 0..SWEEP_INTERVAL {
            cache.pin(ViewerId(1));
        }
        assert_eq!(cache.entries.len(), 1);
    }
}
