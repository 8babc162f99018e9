//! hotel-merger - merge hotel metadata from several suppliers
//!
//! Each supplier describes the same hotels with its own field names, its
//! own level of detail and its own spelling. This crate fetches every
//! supplier, translates each payload into raw `HotelRecord`s, and folds the
//! records into one deduplicated record per hotel id.
//!
//! - `merge`: the pure merge core (normalization, fuzzy and exact dedup,
//!   field-wise merge, aggregation)
//! - `suppliers`: per-supplier fetch and translation
//! - `output`: id filtering and JSON rendering

pub mod merge;
pub mod output;
pub mod suppliers;

pub use merge::{aggregate_records, merge_records, Aggregator, MergedHotels, RecordMerger};
pub use output::{filter_hotels, render_json, write_output, IdFilter};
pub use suppliers::{build_client, default_suppliers, fetch_all, Supplier, SupplierError};
