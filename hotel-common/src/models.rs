//! Hotel record model
//!
//! One `HotelRecord` shape serves both as the per-supplier raw record and as
//! the merged, per-identifier result. Every field defaults to its empty value
//! so partial payloads deserialize without errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Destination identifier as supplied upstream (suppliers disagree on type)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DestinationId {
    Number(i64),
    Text(String),
}

impl DestinationId {
    /// Lenient conversion from an arbitrary JSON scalar
    ///
    /// Integral numbers become `Number`, other numbers and strings become
    /// `Text`. Null, booleans, arrays and objects yield `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Some(DestinationId::Number(i)),
                None => Some(DestinationId::Text(n.to_string())),
            },
            serde_json::Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(DestinationId::Text(trimmed.to_string()))
                }
            }
            _ => None,
        }
    }

    /// Zero and the empty string count as "no value"
    pub fn is_blank(&self) -> bool {
        match self {
            DestinationId::Number(n) => *n == 0,
            DestinationId::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DestinationId::Number(n) => write!(f, "{}", n),
            DestinationId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Geographical location of a hotel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    /// Latitude (`None` when the supplier gave nothing usable)
    pub lat: Option<f64>,
    /// Longitude (`None` when the supplier gave nothing usable)
    pub lng: Option<f64>,
    /// Street address, already combined with the postal code
    pub address: String,
    pub city: String,
    pub country: String,
}

/// Amenities available at a hotel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Amenities {
    pub general: Vec<String>,
    pub room: Vec<String>,
}

/// A single image reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageEntry {
    pub link: String,
    pub description: String,
}

impl ImageEntry {
    pub fn new(link: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            description: description.into(),
        }
    }
}

/// Images grouped by category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Images {
    pub rooms: Vec<ImageEntry>,
    pub site: Vec<ImageEntry>,
    pub amenities: Vec<ImageEntry>,
}

/// Hotel record
///
/// Field order matches the rendered JSON output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelRecord {
    /// Shared identifier across suppliers; records with an empty id are dropped
    pub id: String,
    pub destination_id: Option<DestinationId>,
    pub name: String,
    pub location: Location,
    pub description: String,
    pub amenities: Amenities,
    pub images: Images,
    pub booking_conditions: Vec<String>,
}

impl HotelRecord {
    /// Create an otherwise empty record with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Whether the record carries an identifier (any non-empty string)
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}
