use std::collections::HashSet;

use tracing::debug;

use crate::classifier::classify;
use crate::domain::CategoryKey;

/// Display entries grouped by release-note section.
///
/// Sections iterate in the order they were declared; every key is present
/// even when it holds no entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseGrouping {
    sections: Vec<(CategoryKey, Vec<String>)>,
}

impl ReleaseGrouping {
    /// Create an empty grouping iterating in `order`.
    ///
    /// Duplicate keys are ignored; keys missing from `order` are appended in
    /// canonical order.
    pub fn new(order: impl IntoIterator<Item = CategoryKey>) -> Self {
        let mut sections: Vec<(CategoryKey, Vec<String>)> = Vec::with_capacity(9);
        for key in order.into_iter().chain(CategoryKey::ALL) {
            if !sections.iter().any(|(k, _)| *k == key) {
                sections.push((key, Vec::new()));
            }
        }
        ReleaseGrouping { sections }
    }

    /// Append an entry to the section for `key`.
    pub fn push(&mut self, key: CategoryKey, entry: String) {
        if let Some((_, entries)) = self.sections.iter_mut().find(|(k, _)| *k == key) {
            entries.push(entry);
        }
    }

    /// Entries filed under `key`.
    pub fn entries(&self, key: CategoryKey) -> &[String] {
        self.sections
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CategoryKey, &[String])> {
        self.sections
            .iter()
            .map(|(key, entries)| (*key, entries.as_slice()))
    }

    /// Section keys in iteration order.
    pub fn keys(&self) -> Vec<CategoryKey> {
        self.sections.iter().map(|(key, _)| *key).collect()
    }

    /// Total number of entries across all sections.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|(_, entries)| entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sort_entries(&mut self) {
        for (_, entries) in &mut self.sections {
            entries.sort();
        }
    }
}

/// Classify every commit message and group the results by section.
///
/// Entries are sorted within each section so the result does not depend on
/// the order the commits arrived in.
pub fn aggregate<I, S>(commits: I, order: &[CategoryKey]) -> ReleaseGrouping
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let known_types: HashSet<CategoryKey> = order.iter().copied().collect();
    let mut grouping = ReleaseGrouping::new(order.iter().copied());

    for commit in commits {
        let classification = classify(commit.as_ref(), &known_types);
        grouping.push(classification.category, classification.display);
    }

    grouping.sort_entries();
    debug!(entries = grouping.len(), "commits grouped");
    grouping
}
