// Patagonia supplier
//
// Flat lowercase objects. `info` is the description; `amenities` is a flat
// list; images use `url`/`description`.

use super::fields::{amenity_list, booking_conditions, coordinate, prose, text};
use super::{expect_object, Supplier, SupplierError};
use crate::merge::dedup::standardize_images;
use crate::merge::normalize::standardize_country;
use async_trait::async_trait;
use hotel_common::{Amenities, DestinationId, HotelRecord, Location};
use serde_json::Value;

pub struct PatagoniaSupplier {
    endpoint: String,
}

impl PatagoniaSupplier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Supplier for PatagoniaSupplier {
    fn name(&self) -> &'static str {
        "patagonia"
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn parse(&self, item: &Value) -> Result<HotelRecord, SupplierError> {
        let obj = expect_object(self.name(), item)?;

        Ok(HotelRecord {
            id: text(obj, "id"),
            destination_id: obj.get("destination").and_then(DestinationId::from_json),
            name: text(obj, "name"),
            location: Location {
                lat: coordinate(obj, "lat"),
                lng: coordinate(obj, "lng"),
                address: text(obj, "address"),
                city: text(obj, "city"),
                country: standardize_country(&text(obj, "country")),
            },
            description: prose(obj, "info"),
            amenities: Amenities {
                general: amenity_list(obj.get("amenities")),
                room: Vec::new(),
            },
            images: standardize_images(obj.get("images")),
            booking_conditions: booking_conditions(obj.get("booking_conditions")),
        })
    }
}
