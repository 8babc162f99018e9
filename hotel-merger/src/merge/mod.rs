// Merge Module - per-hotel merge and deduplication
//
// Flow: raw records → Aggregator → RecordMerger ⇄ (fuzzy / exact dedup ⇄ normalize)
// Everything here is synchronous and free of I/O.

pub mod aggregate;
pub mod dedup;
pub mod fuzzy;
pub mod merger;
pub mod normalize;

pub use aggregate::{aggregate_records, Aggregator, MergedHotels};
pub use fuzzy::{positional_similarity, FuzzyDeduplicator};
pub use merger::{merge_records, RecordMerger};
