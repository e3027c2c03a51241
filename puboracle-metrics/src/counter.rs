//! Frequency counter: delimited records → flattened items → occurrence table.

use std::collections::HashSet;

use puboracle_core::OccurrenceTable;
use puboracle_observability::{count_span, events};

/// Output of [`count_occurrences`].
#[derive(Debug, Clone, Default)]
pub struct FrequencyCount {
    /// Every kept sub-item, record 0's items first, in input order.
    pub all_items: Vec<String>,
    /// The distinct sub-items.
    pub unique_items: HashSet<String>,
    /// Occurrences of each distinct sub-item, in first-seen order.
    pub occurrences: OccurrenceTable,
}

/// Split every record on `delimiter`, flatten, drop sub-items listed in
/// `exclude` (exact match), and count what is left.
pub fn count_occurrences<S: AsRef<str>>(
    records: &[S],
    delimiter: char,
    exclude: &[String],
) -> FrequencyCount {
    let _span = count_span!(records.len()).entered();

    let all_items: Vec<String> = split_records(records, delimiter, exclude)
        .into_iter()
        .flatten()
        .collect();
    let occurrences: OccurrenceTable = all_items.iter().collect();
    let unique_items: HashSet<String> = occurrences.iter().map(|e| e.item.clone()).collect();

    events::occurrences_counted(records.len(), all_items.len(), unique_items.len());

    FrequencyCount {
        all_items,
        unique_items,
        occurrences,
    }
}

/// Per-record split with the same filtering as [`count_occurrences`].
/// Feeds the co-occurrence graph builder, which needs record boundaries.
pub fn split_records<S: AsRef<str>>(
    records: &[S],
    delimiter: char,
    exclude: &[String],
) -> Vec<Vec<String>> {
    let excluded: HashSet<&str> = exclude.iter().map(String::as_str).collect();
    records
        .iter()
        .map(|record| {
            record
                .as_ref()
                .split(delimiter)
                .filter(|item| !excluded.contains(item))
                .map(str::to_string)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_exclude() -> Vec<String> {
        vec![String::new(), " ".to_string()]
    }

    #[test]
    fn flattens_in_record_order() {
        let records = ["Uni A;Uni B", "Uni C;Uni A"];
        let count = count_occurrences(&records, ';', &[]);
        assert_eq!(count.all_items, vec!["Uni A", "Uni B", "Uni C", "Uni A"]);
        assert_eq!(count.occurrences.get("Uni A"), Some(2));
        assert_eq!(count.unique_items.len(), 3);
    }

    #[test]
    fn excluded_items_are_dropped() {
        let records = ["Uni A; ;", ";Uni A"];
        let count = count_occurrences(&records, ';', &default_exclude());
        assert_eq!(count.all_items, vec!["Uni A", "Uni A"]);
        assert!(!count.unique_items.contains(" "));
        assert_eq!(count.occurrences.total(), 2);
    }

    #[test]
    fn exclusion_is_exact_match() {
        let records = [" Uni A;Uni A"];
        let count = count_occurrences(&records, ';', &["Uni A".to_string()]);
        assert_eq!(count.all_items, vec![" Uni A"]);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let records: [&str; 0] = [];
        let count = count_occurrences(&records, ';', &[]);
        assert!(count.all_items.is_empty());
        assert!(count.unique_items.is_empty());
        assert!(count.occurrences.is_empty());
    }

    #[test]
    fn split_keeps_record_boundaries() {
        let records = vec!["A;B".to_string(), "C".to_string(), "".to_string()];
        let split = split_records(&records, ';', &default_exclude());
        assert_eq!(split, vec![vec!["A", "B"], vec!["C"], Vec::<&str>::new()]);
    }
}
