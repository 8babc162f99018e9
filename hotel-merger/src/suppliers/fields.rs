//! Lenient field readers for supplier payloads
//!
//! Supplier JSON is loosely typed: numbers arrive as strings, lists arrive as
//! null, keys go missing. Every reader here substitutes the empty value
//! instead of failing.

use crate::merge::dedup::dedup_exact;
use crate::merge::normalize::{capitalize_sentences, collapse_whitespace};
use serde_json::{Map, Value};

pub type Object = Map<String, Value>;

/// Trimmed string field; numbers are rendered, anything else is empty
pub fn text(obj: &Object, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Free text with whitespace collapsed, then capitalized
pub fn prose(obj: &Object, key: &str) -> String {
    collapse_whitespace(&text(obj, key))
}

/// Numeric coordinate; strings and other types are treated as missing
pub fn coordinate(obj: &Object, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64).filter(|v| v.is_finite())
}

/// Nested object, if present
pub fn nested<'a>(obj: &'a Object, key: &str) -> Option<&'a Object> {
    obj.get(key).and_then(Value::as_object)
}

/// Trimmed, non-blank strings from a JSON array; non-strings are skipped
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Amenity list with exact duplicates removed
pub fn amenity_list(value: Option<&Value>) -> Vec<String> {
    dedup_exact(&string_list(value))
}

/// Booking conditions, whitespace-collapsed and sentence-capitalized
pub fn booking_conditions(value: Option<&Value>) -> Vec<String> {
    string_list(value)
        .iter()
        .map(|cond| capitalize_sentences(&collapse_whitespace(cond)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Object {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_text() {
        let o = obj(json!({ "a": "  Beach Villas ", "b": 12345, "c": null, "d": [1] }));
        assert_eq!(text(&o, "a"), "Beach Villas");
        assert_eq!(text(&o, "b"), "12345");
        assert_eq!(text(&o, "c"), "");
        assert_eq!(text(&o, "d"), "");
        assert_eq!(text(&o, "missing"), "");
    }

    #[test]
    fn test_prose() {
        let o = obj(json!({ "info": "  located at   the heart\n of Singapore " }));
        assert_eq!(prose(&o, "info"), "Located at the heart of singapore");
    }

    #[test]
    fn test_coordinate() {
        let o = obj(json!({ "lat": 1.264751, "lng": "", "x": null, "y": 3 }));
        assert_eq!(coordinate(&o, "lat"), Some(1.264751));
        assert_eq!(coordinate(&o, "lng"), None);
        assert_eq!(coordinate(&o, "x"), None);
        assert_eq!(coordinate(&o, "y"), Some(3.0));
    }

    #[test]
    fn test_string_list() {
        let value = json!([" Pool ", "", 42, "WiFi", null]);
        assert_eq!(string_list(Some(&value)), vec!["Pool", "WiFi"]);
        assert!(string_list(Some(&json!("Pool"))).is_empty());
        assert!(string_list(None).is_empty());
    }

    #[test]
    fn test_amenity_list_exact_dedup() {
        let value = json!(["Pool", "pool ", "Wi-Fi", "WiFi", "Gym"]);
        assert_eq!(amenity_list(Some(&value)), vec!["Pool", "Wi-Fi", "Gym"]);
    }

    #[test]
    fn test_booking_conditions() {
        let value = json!(["all children are welcome.  one child under 12 stays free.", "  "]);
        assert_eq!(
            booking_conditions(Some(&value)),
            vec!["All children are welcome. One child under 12 stays free."]
        );
    }
}
