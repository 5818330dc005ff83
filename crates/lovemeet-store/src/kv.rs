use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

use crate::error::{Result, StoreError};

/// Logical partitions of the local store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Share links created on this device, keyed by plan id.
    Plans,
    /// Proposal archive, in creation order.
    Proposals,
    /// One RSVP record per plan id.
    Rsvp,
    /// Countdown event name and target date.
    EventCountdown,
    Settings,
}

impl Namespace {
    pub const ALL: [Namespace; 5] = [
        Self::Plans,
        Self::Proposals,
        Self::Rsvp,
        Self::EventCountdown,
        Self::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plans => "plans",
            Self::Proposals => "proposals",
            Self::Rsvp => "rsvp",
            Self::EventCountdown => "event-countdown",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host persistence contract: string values under `(namespace, key)`.
///
/// `put` overwrites without merging and keeps an existing key's position;
/// `list` yields entries in insertion order.
pub trait KeyValueStore: Send + Sync {
    fn put(&self, ns: Namespace, key: &str, value: &str) -> Result<()>;
    /// Store `value` only when `key` is absent. Returns whether it was stored.
    fn insert(&self, ns: Namespace, key: &str, value: &str) -> Result<bool>;
    fn get(&self, ns: Namespace, key: &str) -> Result<Option<String>>;
    fn list(&self, ns: Namespace) -> Result<Vec<(String, String)>>;
    fn remove(&self, ns: Namespace, key: &str) -> Result<bool>;
}

/// Process-local store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<Namespace, Vec<(String, String)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut HashMap<Namespace, Vec<(String, String)>>) -> T,
    {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        Ok(f(&mut entries))
    }
}

impl KeyValueStore for MemoryStore {
    fn put(&self, ns: Namespace, key: &str, value: &str) -> Result<()> {
        self.with_entries(|entries| {
            let bucket = entries.entry(ns).or_default();
            match bucket.iter_mut().find(|(k, _)| k == key) {
                Some((_, existing)) => *existing = value.to_string(),
                None => bucket.push((key.to_string(), value.to_string())),
            }
        })
    }

    fn insert(&self, ns: Namespace, key: &str, value: &str) -> Result<bool> {
        self.with_entries(|entries| {
            let bucket = entries.entry(ns).or_default();
            if bucket.iter().any(|(k, _)| k == key) {
                return false;
            }
            bucket.push((key.to_string(), value.to_string()));
            true
        })
    }

    fn get(&self, ns: Namespace, key: &str) -> Result<Option<String>> {
        self.with_entries(|entries| {
            entries
                .get(&ns)
                .and_then(|bucket| bucket.iter().find(|(k, _)| k == key))
                .map(|(_, v)| v.clone())
        })
    }

    fn list(&self, ns: Namespace) -> Result<Vec<(String, String)>> {
        self.with_entries(|entries| entries.get(&ns).cloned().unwrap_or_default())
    }

    fn remove(&self, ns: Namespace, key: &str) -> Result<bool> {
        self.with_entries(|entries| {
            let Some(bucket) = entries.get_mut(&ns) else {
                return false;
            };
            let before = bucket.len();
            bucket.retain(|(k, _)| k != key);
            bucket.len() != before
        })
    }
}

/// Shared behavioural checks run against every backend.
#[cfg(test)]
pub(crate) mod contract {
    use super::*;

    pub fn overwrite_keeps_position(store: &dyn KeyValueStore) {
        store.put(Namespace::Plans, "a", "1").unwrap();
        store.put(Namespace::Plans, "b", "2").unwrap();
        store.put(Namespace::Plans, "a", "3").unwrap();

        assert_eq!(store.get(Namespace::Plans, "a").unwrap().as_deref(), Some("3"));
        assert_eq!(
            store.list(Namespace::Plans).unwrap(),
            vec![("a".to_string(), "3".to_string()), ("b".to_string(), "2".to_string())]
        );
    }

    pub fn namespaces_are_isolated(store: &dyn KeyValueStore) {
        store.put(Namespace::Rsvp, "share_1", "yes").unwrap();
        assert_eq!(store.get(Namespace::Plans, "share_1").unwrap(), None);
        assert!(store.list(Namespace::Settings).unwrap().is_empty());
    }

    pub fn list_preserves_insertion_order(store: &dyn KeyValueStore) {
        for key in ["c", "a", "b"] {
            store.put(Namespace::Proposals, key, key).unwrap();
        }
        let keys: Vec<String> = store
            .list(Namespace::Proposals)
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    pub fn remove_reports_whether_anything_went(store: &dyn KeyValueStore) {
        store.put(Namespace::Plans, "gone", "{}").unwrap();
        assert!(store.remove(Namespace::Plans, "gone").unwrap());
        assert!(!store.remove(Namespace::Plans, "gone").unwrap());
        assert!(!store.remove(Namespace::Settings, "never").unwrap());
        assert_eq!(store.get(Namespace::Plans, "gone").unwrap(), None);
    }

    pub fn insert_never_overwrites(store: &dyn KeyValueStore) {
        assert!(store.insert(Namespace::Proposals, "p1", "first").unwrap());
        store.put(Namespace::Proposals, "p2", "second").unwrap();
        assert!(!store.insert(Namespace::Proposals, "p1", "clobber").unwrap());

        assert_eq!(
            store.list(Namespace::Proposals).unwrap(),
            vec![
                ("p1".to_string(), "first".to_string()),
                ("p2".to_string(), "second".to_string())
            ]
        );
        assert!(store.insert(Namespace::Plans, "p1", "other namespace").unwrap());
    }

    pub fn run_all(make: impl Fn() -> Box<dyn KeyValueStore>) {
        overwrite_keeps_position(make().as_ref());
        insert_never_overwrites(make().as_ref());
        namespaces_are_isolated(make().as_ref());
        list_preserves_insertion_order(make().as_ref());
        remove_reports_whether_anything_went(make().as_ref());
    }
}
