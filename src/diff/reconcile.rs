//! Generic three-way reconciliation of keyed snapshots.
//!
//! Every diff in the crate reduces to [`reconcile`]: iterate the *after*
//! side, emitting `added` for unknown keys and `changed` for known keys
//! whose values differ under the caller's equality, then iterate the
//! *before* side emitting `removed` for keys the *after* side lacks.
//! Keys present on both sides with equal values appear nowhere.
//!
//! Output order follows the iteration order of the inputs. Callers that
//! need deterministic output sort with [`ChangeSet::sort_by`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

/// A key whose value differs between the two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change<K, V> {
    pub key: K,
    pub before: V,
    pub after: V,
}

/// Result of reconciling two keyed snapshots.
///
/// A key lands in at most one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet<K, V> {
    pub added: Vec<V>,
    pub removed: Vec<V>,
    pub changed: Vec<Change<K, V>>,
}

impl<K, V> ChangeSet<K, V> {
    pub fn new() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
            changed: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }

    /// Sort every bucket ascending by the ordering key `f` derives from a value.
    ///
    /// Changes are ordered by their *after* value.
    pub fn sort_by<O: Ord>(&mut self, f: impl Fn(&V) -> O) {
        self.added.sort_by_key(|v| f(v));
        self.removed.sort_by_key(|v| f(v));
        self.changed.sort_by_key(|c| f(&c.after));
    }

    /// Swap the roles of *before* and *after*.
    #[must_use]
    pub fn inverted(self) -> Self {
        Self {
            added: self.removed,
            removed: self.added,
            changed: self
                .changed
                .into_iter()
                .map(|c| Change {
                    key: c.key,
                    before: c.after,
                    after: c.before,
                })
                .collect(),
        }
    }
}

impl<K, V> Default for ChangeSet<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// A keyed snapshot the engine can reconcile.
pub trait Keyed<K, V> {
    fn lookup(&self, key: &K) -> Option<&V>;

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a;
}

impl<K: Eq + Hash, V, S: BuildHasher> Keyed<K, V> for HashMap<K, V, S> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

impl<K: Ord, V> Keyed<K, V> for BTreeMap<K, V> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Keyed<K, V> for IndexMap<K, V, S> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

/// Three-way diff of `before` against `after` under `eq`.
///
/// Runs in O(|before| + |after|) for maps with constant-time lookup.
pub fn reconcile<K, V, M, F>(before: &M, after: &M, eq: F) -> ChangeSet<K, V>
where
    K: Clone,
    V: Clone,
    M: Keyed<K, V>,
    F: Fn(&V, &V) -> bool,
{
    let mut result = ChangeSet::new();

    for (key, after_value) in after.entries() {
        match before.lookup(key) {
            None => result.added.push(after_value.clone()),
            Some(before_value) if !eq(before_value, after_value) => {
                result.changed.push(Change {
                    key: key.clone(),
                    before: before_value.clone(),
                    after: after_value.clone(),
                });
            }
            Some(_) => {}
        }
    }

    for (key, before_value) in before.entries() {
        if after.lookup(key).is_none() {
            result.removed.push(before_value.clone());
        }
    }

    result
}

/// Items of `after` whose identity key no item of `before` shares.
///
/// The set-subtraction form of reconciliation: only additions matter and
/// equality is identity-key equality.
pub fn subtract<T, Q, F>(before: &[T], after: Vec<T>, key: F) -> Vec<T>
where
    Q: Eq + Hash,
    F: Fn(&T) -> Q,
{
    let seen: HashSet<Q> = before.iter().map(&key).collect();
    after.into_iter().filter(|item| !seen.contains(&key(item))).collect()
}
