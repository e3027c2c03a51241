//! Integration tests for counting and the text helpers that sit beside it.

use puboracle_core::config::CounterConfig;
use puboracle_metrics::counter::{count_occurrences, split_records};
use puboracle_metrics::selection::{mark_top_bottom_n, Extremity};
use puboracle_metrics::text_stats::{chars_and_words, trim_txt};

fn affiliations() -> Vec<&'static str> {
    vec![
        "University of Oslo;;Karolinska Institutet",
        "University of Oslo; ",
        "MIT;University of Oslo;MIT",
        "",
    ]
}

#[test]
fn default_exclusions_drop_blank_items() {
    let config = CounterConfig::default();
    let count = count_occurrences(&affiliations(), config.delimiter, &config.exclude);
    assert_eq!(count.occurrences.get("University of Oslo"), Some(3));
    assert_eq!(count.occurrences.get("MIT"), Some(2));
    assert!(!count.occurrences.contains(""));
    assert!(!count.occurrences.contains(" "));
    assert_eq!(count.occurrences.total(), count.all_items.len() as u64);
}

#[test]
fn counting_is_idempotent() {
    let exclude = CounterConfig::default().exclude;
    let first = count_occurrences(&affiliations(), ';', &exclude);
    let second = count_occurrences(&affiliations(), ';', &exclude);
    assert_eq!(first.all_items, second.all_items);
    assert_eq!(first.occurrences, second.occurrences);
    assert_eq!(first.unique_items, second.unique_items);
}

#[test]
fn split_keeps_record_boundaries() {
    let exclude = CounterConfig::default().exclude;
    let split = split_records(&affiliations(), ';', &exclude);
    assert_eq!(split.len(), 4);
    assert_eq!(split[0], vec!["University of Oslo", "Karolinska Institutet"]);
    assert_eq!(split[2], vec!["MIT", "University of Oslo", "MIT"]);
    assert!(split[3].is_empty());
}

#[test]
fn top_selection_marks_records() {
    let records = affiliations();
    let count = count_occurrences(&records, ';', &CounterConfig::default().exclude);
    let selection = mark_top_bottom_n(&count.occurrences, 1, Extremity::Top, &records, ';', &[]);
    assert_eq!(selection.selected.len(), 1);
    assert_eq!(selection.selected[0].item, "University of Oslo");
    assert_eq!(selection.in_selection, vec![true, true, true, false]);
}

#[test]
fn text_helpers_on_affiliations() {
    let texts = ["Dept. of Physics, University of Oslo, Norway"];
    let (_, words) = chars_and_words(&texts, &[]);
    assert_eq!(words, vec![7]);
    assert_eq!(trim_txt(texts[0], &[',']), "Dept. of Physics");
}
