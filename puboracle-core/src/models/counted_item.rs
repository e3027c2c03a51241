use serde::{Deserialize, Serialize};

/// An item paired with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountedItem {
    pub item: String,
    pub count: u64,
}

impl CountedItem {
    pub fn new(item: impl Into<String>, count: u64) -> Self {
        Self {
            item: item.into(),
            count,
        }
    }
}

impl<S: Into<String>> From<(S, u64)> for CountedItem {
    fn from((item, count): (S, u64)) -> Self {
        Self::new(item, count)
    }
}
