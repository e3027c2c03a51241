//! Insertion-ordered item → count table.

use std::collections::HashMap;

use super::CountedItem;

/// Mapping from item to occurrence count.
///
/// Iteration follows first-seen order. That order is the tie-break for every
/// ranking derived from the table, so equal counts keep the order in which
/// their items were first counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceTable {
    entries: Vec<CountedItem>,
    /// Map from item → position in `entries` for O(1) lookup.
    index: HashMap<String, usize>,
}

impl OccurrenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `item`.
    pub fn add(&mut self, item: &str) {
        self.add_count(item, 1);
    }

    /// Add `count` occurrences of `item`. A zero count is ignored so every
    /// stored count stays positive.
    pub fn add_count(&mut self, item: &str, count: u64) {
        if count == 0 {
            return;
        }
        if let Some(&pos) = self.index.get(item) {
            self.entries[pos].count += count;
            return;
        }
        self.index.insert(item.to_string(), self.entries.len());
        self.entries.push(CountedItem::new(item, count));
    }

    /// Count for `item`, if present.
    pub fn get(&self, item: &str) -> Option<u64> {
        self.index.get(item).map(|&pos| self.entries[pos].count)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.index.contains_key(item)
    }

    /// Remove `item`, returning its count. Remaining entries keep their order.
    pub fn remove(&mut self, item: &str) -> Option<u64> {
        let pos = self.index.remove(item)?;
        let removed = self.entries.remove(pos);
        for entry in &self.entries[pos..] {
            if let Some(slot) = self.index.get_mut(&entry.item) {
                *slot -= 1;
            }
        }
        Some(removed.count)
    }

    /// Number of unique items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &CountedItem> {
        self.entries.iter()
    }

    /// All entries sorted descending by count, ties in first-seen order.
    pub fn ranked(&self) -> Vec<CountedItem> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// The `n` most frequent entries.
    pub fn most_common(&self, n: usize) -> Vec<CountedItem> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// The `n` least frequent entries, least frequent first.
    pub fn least_common(&self, n: usize) -> Vec<CountedItem> {
        self.ranked().into_iter().rev().take(n).collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for OccurrenceTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for item in iter {
            table.add(item.as_ref());
        }
        table
    }
}

impl<'a> IntoIterator for &'a OccurrenceTable {
    type Item = &'a CountedItem;
    type IntoIter = std::slice::Iter<'a, CountedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_in_first_seen_order() {
        let table: OccurrenceTable = ["b", "a", "b", "c"].into_iter().collect();
        let items: Vec<&str> = table.iter().map(|e| e.item.as_str()).collect();
        assert_eq!(items, vec!["b", "a", "c"]);
        assert_eq!(table.get("b"), Some(2));
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn ranking_is_stable_on_ties() {
        let table: OccurrenceTable = ["x", "y", "z", "z"].into_iter().collect();
        let ranked: Vec<String> = table.ranked().into_iter().map(|e| e.item).collect();
        assert_eq!(ranked, vec!["z", "x", "y"]);
    }

    #[test]
    fn remove_keeps_lookup_consistent() {
        let mut table: OccurrenceTable = ["a", "b", "c", "c"].into_iter().collect();
        assert_eq!(table.remove("a"), Some(1));
        assert_eq!(table.get("c"), Some(2));
        table.add("c");
        assert_eq!(table.get("c"), Some(3));
        assert_eq!(table.len(), 2);
        assert_eq!(table.remove("missing"), None);
    }

    #[test]
    fn zero_count_is_ignored() {
        let mut table = OccurrenceTable::new();
        table.add_count("a", 0);
        assert!(table.is_empty());
    }

    #[test]
    fn least_common_reverses_ranking() {
        let table: OccurrenceTable = ["a", "a", "b", "c", "c", "c"].into_iter().collect();
        let least: Vec<String> = table.least_common(2).into_iter().map(|e| e.item).collect();
        assert_eq!(least, vec!["b".to_string(), "a".to_string()]);
    }
}
