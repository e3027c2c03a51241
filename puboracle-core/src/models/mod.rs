mod combine_weights;
mod counted_item;
mod occurrence_table;
mod similarity_kind;

pub use combine_weights::CombineWeights;
pub use counted_item::CountedItem;
pub use occurrence_table::OccurrenceTable;
pub use similarity_kind::SimilarityKind;
