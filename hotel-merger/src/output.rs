//! Result filtering and rendering
//!
//! Filters are applied after aggregation; the merged mapping is never
//! modified, only read.

use crate::merge::MergedHotels;
use hotel_common::HotelRecord;
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::path::Path;
use std::str::FromStr;

/// Id filter parsed from a command-line argument
///
/// `none` (any case) disables the filter; anything else is a comma-separated
/// set of ids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IdFilter {
    #[default]
    Any,
    OneOf(BTreeSet<String>),
}

impl IdFilter {
    pub fn parse(arg: &str) -> Self {
        if arg.trim().eq_ignore_ascii_case("none") {
            return IdFilter::Any;
        }
        let ids = arg
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();
        IdFilter::OneOf(ids)
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            IdFilter::Any => true,
            IdFilter::OneOf(ids) => ids.contains(value),
        }
    }
}

impl FromStr for IdFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(IdFilter::parse(s))
    }
}

/// Hotels passing both filters, in id order
pub fn filter_hotels<'a>(
    hotels: &'a MergedHotels,
    hotel_ids: &IdFilter,
    destination_ids: &IdFilter,
) -> Vec<&'a HotelRecord> {
    hotels
        .values()
        .filter(|hotel| hotel_ids.matches(&hotel.id))
        .filter(|hotel| match (destination_ids, &hotel.destination_id) {
            (IdFilter::Any, _) => true,
            (filter, Some(dest)) => filter.matches(&dest.to_string()),
            (_, None) => false,
        })
        .collect()
}

/// Pretty-printed JSON array
pub fn render_json(hotels: &[&HotelRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(hotels)
}

pub fn write_output(path: &Path, json: &str) -> std::io::Result<()> {
    std::fs::write(path, json)
}
