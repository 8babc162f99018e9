//! Aggregation driver - left fold of raw records into one record per id

use super::merger::RecordMerger;
use hotel_common::HotelRecord;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Merged records keyed by hotel id
pub type MergedHotels = BTreeMap<String, HotelRecord>;

/// Folds a sequence of raw records into merged per-id records
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    merger: RecordMerger,
}

impl Aggregator {
    pub fn new(merger: RecordMerger) -> Self {
        Self { merger }
    }

    /// Fold records in arrival order
    ///
    /// Records without an id are skipped. The first record for an id becomes
    /// the accumulator as-is; each later one is merged into it pairwise.
    pub fn aggregate<I>(&self, records: I) -> MergedHotels
    where
        I: IntoIterator<Item = HotelRecord>,
    {
        let mut skipped = 0usize;
        let mut merges = 0usize;

        let merged = records.into_iter().fold(MergedHotels::new(), |mut acc, record| {
            if !record.has_id() {
                skipped += 1;
                return acc;
            }

            let id = record.id.clone();
            let next = match acc.get(&id) {
                Some(existing) => {
                    merges += 1;
                    debug!(hotel_id = %id, "Merging record into accumulator");
                    self.merger.merge(existing, &record)
                }
                None => record,
            };
            acc.insert(id, next);
            acc
        });

        info!(
            hotels = merged.len(),
            merges, skipped, "Aggregation complete"
        );
        merged
    }
}

/// Aggregate with the default merge policy
pub fn aggregate_records<I>(records: I) -> MergedHotels
where
    I: IntoIterator<Item = HotelRecord>,
{
    Aggregator::default().aggregate(records)
}
