//! Top/bottom-N selection and record marking.

use std::collections::HashSet;

use puboracle_core::{CountedItem, OccurrenceTable};

/// Which end of the frequency ranking to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremity {
    /// Most frequent first.
    Top,
    /// Least frequent first.
    Bottom,
}

/// Output of [`mark_top_bottom_n`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopBottomSelection {
    /// One flag per record: does any of its items belong to the selection.
    pub in_selection: Vec<bool>,
    /// The selected items in ranked order.
    pub selected: Vec<CountedItem>,
}

/// Select the `n` most (or least) frequent items of `table`, ignoring the
/// items in `remove`, and flag every delimited record containing one of them.
pub fn mark_top_bottom_n<S: AsRef<str>>(
    table: &OccurrenceTable,
    n: usize,
    extremity: Extremity,
    records: &[S],
    delimiter: char,
    remove: &[String],
) -> TopBottomSelection {
    let mut table = table.clone();
    for item in remove {
        table.remove(item);
    }

    let selected = match extremity {
        Extremity::Top => table.most_common(n),
        Extremity::Bottom => table.least_common(n),
    };
    let names: HashSet<&str> = selected.iter().map(|e| e.item.as_str()).collect();

    let in_selection = records
        .iter()
        .map(|r| r.as_ref().split(delimiter).any(|item| names.contains(item)))
        .collect();

    TopBottomSelection {
        in_selection,
        selected,
    }
}
