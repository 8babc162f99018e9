// Acme supplier
//
// Flat PascalCase objects. Street address and postal code arrive separately;
// facilities are a flat list with no general/room split. The description is
// only trimmed; casing is settled when records merge.

use super::fields::{amenity_list, coordinate, text};
use super::{expect_object, Supplier, SupplierError};
use async_trait::async_trait;
use crate::merge::normalize::{combine_address, standardize_country};
use hotel_common::{Amenities, DestinationId, HotelRecord, Location};
use serde_json::Value;

pub struct AcmeSupplier {
    endpoint: String,
}

impl AcmeSupplier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Supplier for AcmeSupplier {
    fn name(&self) -> &'static str {
        "acme"
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn parse(&self, item: &Value) -> Result<HotelRecord, SupplierError> {
        let obj = expect_object(self.name(), item)?;

        Ok(HotelRecord {
            id: text(obj, "Id"),
            destination_id: obj.get("DestinationId").and_then(DestinationId::from_json),
            name: text(obj, "Name"),
            location: Location {
                lat: coordinate(obj, "Latitude"),
                lng: coordinate(obj, "Longitude"),
                address: combine_address(&text(obj, "Address"), &text(obj, "PostalCode")),
                city: text(obj, "City"),
                country: standardize_country(&text(obj, "Country")),
            },
            description: text(obj, "Description"),
            amenities: Amenities {
                general: amenity_list(obj.get("Facilities")),
                room: Vec::new(),
            },
            ..HotelRecord::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn supplier() -> AcmeSupplier {
        AcmeSupplier::new("http://localhost/acme")
    }

    #[test]
    fn test_parse_full_item() {
        let item = json!({
            "Id": "iJhz",
            "DestinationId": 5432,
            "Name": "Beach Villas Singapore",
            "Latitude": 1.264751,
            "Longitude": 103.824006,
            "Address": " 8 Sentosa Gateway, Beach Villas ",
            "City": "Singapore",
            "Country": "SG",
            "PostalCode": "098269",
            "Description": "  This 5 star hotel is located on the coastline of Singapore.",
            "Facilities": ["Pool", "BusinessCenter", "WiFi ", "DryCleaning", "Breakfast", "pool"]
        });

        let record = supplier().parse(&item).unwrap();
        assert_eq!(record.id, "iJhz");
        assert_eq!(record.destination_id, Some(DestinationId::Number(5432)));
        assert_eq!(record.name, "Beach Villas Singapore");
        assert_eq!(record.location.lat, Some(1.264751));
        assert_eq!(record.location.lng, Some(103.824006));
        assert_eq!(record.location.address, "8 Sentosa Gateway, Beach Villas, 098269");
        assert_eq!(record.location.city, "Singapore");
        assert_eq!(record.location.country, "Singapore");
        assert_eq!(
            record.description,
            "This 5 star hotel is located on the coastline of Singapore."
        );
        assert_eq!(
            record.amenities.general,
            vec!["Pool", "BusinessCenter", "WiFi", "DryCleaning", "Breakfast"]
        );
        assert!(record.amenities.room.is_empty());
        assert!(record.booking_conditions.is_empty());
    }

    #[test]
    fn test_description_is_only_trimmed() {
        let item = json!({ "Id": "iJhz", "Description": "  Near   Resorts World Sentosa.  " });
        let record = supplier().parse(&item).unwrap();
        assert_eq!(record.description, "Near   Resorts World Sentosa.");
    }

    #[test]
    fn test_parse_non_numeric_coordinates() {
        let item = json!({ "Id": "f8c9", "Latitude": "", "Longitude": null, "PostalCode": null });
        let record = supplier().parse(&item).unwrap();
        assert_eq!(record.location.lat, None);
        assert_eq!(record.location.lng, None);
        assert_eq!(record.location.address, "");
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(supplier().parse(&json!(["iJhz"])).is_err());
    }
}
