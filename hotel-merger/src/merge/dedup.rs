//! Exact-match list deduplication and image standardization
//!
//! Two modes, neither of them fuzzy:
//! - Structured items compare by their canonical JSON form (object keys
//!   sorted), so field order never matters. First occurrence wins.
//! - Plain strings compare by `normalize_key`. First occurrence wins.

use super::normalize::{capitalize_sentences, normalize_key};
use hotel_common::{ImageEntry, Images};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use tracing::warn;

/// Image categories, in output order
pub const IMAGE_CATEGORIES: [&str; 3] = ["rooms", "site", "amenities"];

/// Drop structured items whose canonical form was already seen
///
/// Items serializing to an empty object, `null` or an empty string are
/// discarded outright.
pub fn dedup_structured<T>(items: &[T]) -> Vec<T>
where
    T: Serialize + Clone,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(items.len());

    for item in items {
        let key = match canonical_key(item) {
            Some(key) => key,
            None => continue,
        };
        if seen.insert(key) {
            unique.push(item.clone());
        }
    }

    unique
}

/// Deduplicate image entries
///
/// Links are trimmed before comparison, so entries that differ only by
/// whitespace around the link collapse. Entries with different links never
/// collapse.
pub fn dedup_images(images: &[ImageEntry]) -> Vec<ImageEntry> {
    let canonical: Vec<ImageEntry> = images
        .iter()
        .map(|img| ImageEntry::new(img.link.trim(), img.description.trim()))
        .collect();
    dedup_structured(&canonical)
}

/// Drop strings whose normalized key was already seen
pub fn dedup_exact<S>(items: &[S]) -> Vec<String>
where
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    items
        .iter()
        .map(|item| item.as_ref())
        .filter(|item| seen.insert(normalize_key(item)))
        .map(str::to_string)
        .collect()
}

/// Standardize a supplier's raw `images` object
///
/// Each category accepts objects with a non-empty `link` (or `url`);
/// description comes from `description` (or `caption`) and is
/// capitalized. Anything else is discarded.
pub fn standardize_images(raw: Option<&Value>) -> Images {
    let mut images = Images::default();
    let Some(Value::Object(map)) = raw else {
        return images;
    };

    for category in IMAGE_CATEGORIES {
        let entries = match map.get(category) {
            Some(Value::Array(entries)) => entries,
            Some(Value::Null) | None => continue,
            Some(other) => {
                warn!(category, kind = json_kind(other), "Ignoring non-list image category");
                continue;
            }
        };

        let standardized: Vec<ImageEntry> = entries.iter().filter_map(standardize_image).collect();
        match category {
            "rooms" => images.rooms = standardized,
            "site" => images.site = standardized,
            _ => images.amenities = standardized,
        }
    }

    images
}

fn standardize_image(raw: &Value) -> Option<ImageEntry> {
    let obj = raw.as_object()?;
    let link = first_non_empty_str(obj, &["link", "url"])?;
    let description = first_non_empty_str(obj, &["description", "caption"]).unwrap_or("");
    Some(ImageEntry::new(link, capitalize_sentences(description.trim())))
}

fn first_non_empty_str<'a>(
    obj: &'a serde_json::Map<String, Value>,
    keys: &[&str],
) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| obj.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
}

fn canonical_key<T: Serialize>(item: &T) -> Option<String> {
    // serde_json::Map is ordered by key, so to_string is already canonical
    let value = serde_json::to_value(item).ok()?;
    let is_empty = match &value {
        Value::Null => true,
        Value::Object(map) => map.is_empty() || map.values().all(is_blank_leaf),
        Value::String(s) => s.is_empty(),
        _ => false,
    };
    if is_empty {
        None
    } else {
        Some(value.to_string())
    }
}

fn is_blank_leaf(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
