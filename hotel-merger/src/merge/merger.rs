//! Record Merger - field-wise merge of two records sharing an id
//!
//! Resolution rules per field:
//! - Scalars (`destination_id`, `name`, location fields): existing value if
//!   it is non-blank, otherwise the incoming one
//! - `description`: the longer non-empty text (ties keep existing)
//! - Amenity lists and booking conditions: concatenate existing then
//!   incoming, then fuzzy-deduplicate
//! - Image lists: concatenate, then exact structural deduplication
//!
//! Neither input is modified; a new record is returned.

use super::dedup::dedup_images;
use super::fuzzy::FuzzyDeduplicator;
use super::normalize::{capitalize_sentences, standardize_country};
use hotel_common::{Amenities, DestinationId, HotelRecord, ImageEntry, Images, Location};
use tracing::debug;

/// Record Merger
///
/// Holds the fuzzy deduplicator used for amenities and booking conditions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordMerger {
    dedup: FuzzyDeduplicator,
}

impl RecordMerger {
    /// Create a merger with the default similarity cutoff (0.8)
    pub fn new() -> Self {
        Self {
            dedup: FuzzyDeduplicator::new(),
        }
    }

    /// Create a merger with a custom similarity cutoff
    pub fn with_cutoff(cutoff: f64) -> Self {
        Self {
            dedup: FuzzyDeduplicator::with_cutoff(cutoff),
        }
    }

    pub fn cutoff(&self) -> f64 {
        self.dedup.cutoff()
    }

    /// Merge an incoming record into the accumulated one
    pub fn merge(&self, existing: &HotelRecord, incoming: &HotelRecord) -> HotelRecord {
        let id = existing.id.as_str();

        HotelRecord {
            id: existing.id.clone(),
            destination_id: coalesce_destination(
                existing.destination_id.as_ref(),
                incoming.destination_id.as_ref(),
            ),
            name: coalesce_text(id, "name", &existing.name, &incoming.name),
            location: self.merge_location(id, &existing.location, &incoming.location),
            description: capitalize_sentences(&pick_description(
                &existing.description,
                &incoming.description,
            )),
            amenities: Amenities {
                general: self.merge_strings(&existing.amenities.general, &incoming.amenities.general),
                room: self.merge_strings(&existing.amenities.room, &incoming.amenities.room),
            },
            images: Images {
                rooms: merge_images(&existing.images.rooms, &incoming.images.rooms),
                site: merge_images(&existing.images.site, &incoming.images.site),
                amenities: merge_images(&existing.images.amenities, &incoming.images.amenities),
            },
            booking_conditions: self
                .merge_strings(&existing.booking_conditions, &incoming.booking_conditions),
        }
    }

    fn merge_location(&self, id: &str, existing: &Location, incoming: &Location) -> Location {
        let country = coalesce_text(id, "country", &existing.country, &incoming.country);

        Location {
            lat: coalesce_coordinate(existing.lat, incoming.lat),
            lng: coalesce_coordinate(existing.lng, incoming.lng),
            address: coalesce_text(id, "address", &existing.address, &incoming.address),
            city: coalesce_text(id, "city", &existing.city, &incoming.city),
            country: standardize_country(&country),
        }
    }

    fn merge_strings(&self, existing: &[String], incoming: &[String]) -> Vec<String> {
        self.dedup.dedup(existing.iter().chain(incoming))
    }
}

/// Merge two records with the default policy
pub fn merge_records(existing: &HotelRecord, incoming: &HotelRecord) -> HotelRecord {
    RecordMerger::new().merge(existing, incoming)
}

fn coalesce_text(id: &str, field: &str, existing: &str, incoming: &str) -> String {
    if existing.is_empty() {
        return incoming.to_string();
    }
    if !incoming.is_empty() && existing != incoming {
        debug!(
            hotel_id = id,
            field,
            kept = existing,
            discarded = incoming,
            "Conflicting values; keeping existing"
        );
    }
    existing.to_string()
}

fn coalesce_destination(
    existing: Option<&DestinationId>,
    incoming: Option<&DestinationId>,
) -> Option<DestinationId> {
    match existing {
        Some(dest) if !dest.is_blank() => Some(dest.clone()),
        _ => incoming.cloned(),
    }
}

/// Zero counts as "no coordinate", same as a missing one
fn coalesce_coordinate(existing: Option<f64>, incoming: Option<f64>) -> Option<f64> {
    match existing {
        Some(v) if v != 0.0 && !v.is_nan() => Some(v),
        _ => incoming,
    }
}

fn pick_description(existing: &str, incoming: &str) -> String {
    match (existing.is_empty(), incoming.is_empty()) {
        (false, false) if incoming.chars().count() > existing.chars().count() => incoming.to_string(),
        (false, _) => existing.to_string(),
        (true, _) => incoming.to_string(),
    }
}

fn merge_images(existing: &[ImageEntry], incoming: &[ImageEntry]) -> Vec<ImageEntry> {
    let combined: Vec<ImageEntry> = existing.iter().chain(incoming).cloned().collect();
    dedup_images(&combined)
}
