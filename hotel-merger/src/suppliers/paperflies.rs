// Paperflies supplier
//
// Nested objects: `location` holds address and country, `amenities` is
// already split into general/room, images use `link`/`caption`. No
// coordinates and no city.

use super::fields::{amenity_list, booking_conditions, nested, prose, text};
use super::{expect_object, Supplier, SupplierError};
use crate::merge::dedup::standardize_images;
use crate::merge::normalize::standardize_country;
use async_trait::async_trait;
use hotel_common::{Amenities, DestinationId, HotelRecord, Location};
use serde_json::Value;

pub struct PaperfliesSupplier {
    endpoint: String,
}

impl PaperfliesSupplier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Supplier for PaperfliesSupplier {
    fn name(&self) -> &'static str {
        "paperflies"
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn parse(&self, item: &Value) -> Result<HotelRecord, SupplierError> {
        let obj = expect_object(self.name(), item)?;

        let location = nested(obj, "location")
            .map(|loc| Location {
                address: text(loc, "address"),
                country: standardize_country(&text(loc, "country")),
                ..Location::default()
            })
            .unwrap_or_default();

        let amenities = nested(obj, "amenities")
            .map(|am| Amenities {
                general: amenity_list(am.get("general")),
                room: amenity_list(am.get("room")),
            })
            .unwrap_or_default();

        Ok(HotelRecord {
            id: text(obj, "hotel_id"),
            destination_id: obj.get("destination_id").and_then(DestinationId::from_json),
            name: text(obj, "hotel_name"),
            location,
            description: prose(obj, "details"),
            amenities,
            images: standardize_images(obj.get("images")),
            booking_conditions: booking_conditions(obj.get("booking_conditions")),
        })
    }
}
