//! Single-edit typosquat detection.
//!
//! A candidate name is suspicious when it equals, ignoring case, some
//! single-edit mutation of a popular name. Four mutation families are
//! generated for every popular name:
//!
//! 1. substitution of one character by a look-alike (`o` to `0`, `l` to `1`)
//! 2. deletion of one character
//! 3. duplication of one character
//! 4. transposition of two adjacent characters
//!
//! Variants are generated once per detector and indexed by their lowercase
//! form, so a check costs one hash lookup instead of a corpus scan.

use super::corpus::POPULAR_GEMS;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Look-alike replacements for the substitution family.
const CONFUSABLES: &[(char, &[char])] = &[
    ('i', &['1', 'l']),
    ('l', &['1', 'i']),
    ('o', &['0']),
    ('p', &['q']),
    ('q', &['p']),
    ('a', &['@', '4']),
    ('s', &['5', '$']),
    ('e', &['3']),
    ('t', &['7']),
    ('b', &['8']),
    ('g', &['9']),
    ('z', &['2']),
    ('-', &['_']),
    ('_', &['-']),
];

static BUILTIN: LazyLock<TyposquatDetector> =
    LazyLock::new(|| TyposquatDetector::new(POPULAR_GEMS.iter().copied()));

/// A candidate name and the popular names it imitates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TyposquatMatch {
    pub candidate: String,
    /// Sorted ascending
    pub resembles: Vec<String>,
}

/// Detector over a fixed corpus of popular names.
#[derive(Debug, Clone)]
pub struct TyposquatDetector {
    popular: Vec<String>,
    /// Lowercased variant to indices into `popular`
    index: HashMap<String, Vec<usize>>,
    /// Lowercased names never reported as candidates
    allowed: HashSet<String>,
}

impl TyposquatDetector {
    /// Build a detector over `popular`. Duplicate names are collapsed.
    pub fn new<I, S>(popular: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        let mut seen = HashSet::new();
        for name in popular {
            let name = name.into();
            if seen.insert(name.to_lowercase()) {
                names.push(name);
            }
        }

        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, name) in names.iter().enumerate() {
            for variant in variants(name) {
                index.entry(variant.to_lowercase()).or_default().push(i);
            }
        }
        for slots in index.values_mut() {
            slots.sort_unstable();
            slots.dedup();
        }

        tracing::debug!(
            popular = names.len(),
            variants = index.len(),
            "built typosquat index"
        );

        Self {
            popular: names,
            index,
            allowed: HashSet::new(),
        }
    }

    /// Shared detector over the built-in corpus.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Detector over the built-in corpus plus `extra` names.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            POPULAR_GEMS
                .iter()
                .map(|s| (*s).to_string())
                .chain(extra.into_iter().map(Into::into)),
        )
    }

    /// Never report these candidate names.
    #[must_use]
    pub fn allowing<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed
            .extend(names.into_iter().map(|n| n.as_ref().to_lowercase()));
        self
    }

    #[must_use]
    pub fn corpus_len(&self) -> usize {
        self.popular.len()
    }

    /// Popular names `candidate` resembles, sorted ascending.
    ///
    /// A popular name equal to the candidate ignoring case is never a match.
    #[must_use]
    pub fn detect(&self, candidate: &str) -> Vec<String> {
        let lowered = candidate.to_lowercase();
        if self.allowed.contains(&lowered) {
            return Vec::new();
        }
        let Some(slots) = self.index.get(&lowered) else {
            return Vec::new();
        };

        let mut matches: Vec<String> = slots
            .iter()
            .map(|&i| &self.popular[i])
            .filter(|popular| popular.to_lowercase() != lowered)
            .cloned()
            .collect();
        matches.sort();
        matches
    }

    /// [`detect`](Self::detect) wrapped as a match record, `None` when clean.
    #[must_use]
    pub fn check(&self, candidate: &str) -> Option<TyposquatMatch> {
        let resembles = self.detect(candidate);
        (!resembles.is_empty()).then(|| TyposquatMatch {
            candidate: candidate.to_string(),
            resembles,
        })
    }
}

impl Default for TyposquatDetector {
    fn default() -> Self {
        Self::new(POPULAR_GEMS.iter().copied())
    }
}

/// Every single-edit variant of `name` under the four mutation families.
///
/// Case is preserved; substitutions apply only to the lowercase look-alike
/// table.
#[must_use]
pub fn variants(name: &str) -> HashSet<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut out = HashSet::new();

    for (i, c) in chars.iter().enumerate() {
        if let Some((_, subs)) = CONFUSABLES.iter().find(|(from, _)| from == c) {
            for sub in *subs {
                let mut v = chars.clone();
                v[i] = *sub;
                out.insert(v.into_iter().collect());
            }
        }
    }

    for i in 0..chars.len() {
        let mut deleted = chars.clone();
        deleted.remove(i);
        out.insert(deleted.into_iter().collect());

        let mut doubled = chars.clone();
        doubled.insert(i, chars[i]);
        out.insert(doubled.into_iter().collect());
    }

    for i in 0..chars.len().saturating_sub(1) {
        let mut swapped = chars.clone();
        swapped.swap(i, i + 1);
        out.insert(swapped.into_iter().collect());
    }

    out
}
