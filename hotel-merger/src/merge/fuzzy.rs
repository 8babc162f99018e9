//! Fuzzy string deduplication
//!
//! Collapses near-duplicate short strings (amenities, booking conditions).
//!
//! # Similarity
//! Positional match ratio over normalized keys: count the positions where
//! both keys carry the same character (over the shorter length), divide by
//! the longer length. Two empty keys score 0.0, so blank entries never
//! collapse into each other.
//!
//! # Grouping
//! Single greedy pass. Each entry joins the first accepted representative it
//! scores `>= cutoff` against; a strictly longer spelling replaces that
//! representative's text. Results depend on input order.

use super::normalize::normalize_key;
use tracing::trace;

/// Default similarity cutoff
pub const DEFAULT_CUTOFF: f64 = 0.8;

/// Positional match ratio between two (already normalized) keys
///
/// Returns 0.0-1.0 (1.0 = identical, non-empty).
pub fn positional_similarity(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let longest = len_a.max(len_b);
    if longest == 0 {
        return 0.0;
    }

    let matches = a.chars().zip(b.chars()).filter(|(x, y)| x == y).count();
    matches as f64 / longest as f64
}

/// Accepted representative of a duplicate group
struct Representative {
    text: String,
    key: String,
    len: usize,
}

/// Fuzzy deduplicator with a configurable cutoff
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyDeduplicator {
    cutoff: f64,
}

impl FuzzyDeduplicator {
    /// Create a deduplicator with the default cutoff (0.8)
    pub fn new() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
        }
    }

    /// Create a deduplicator with a custom cutoff (clamped to 0.0-1.0)
    pub fn with_cutoff(cutoff: f64) -> Self {
        let cutoff = if cutoff.is_nan() {
            DEFAULT_CUTOFF
        } else {
            cutoff.clamp(0.0, 1.0)
        };
        Self { cutoff }
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Collapse near-duplicates, keeping first-seen order of survivors
    pub fn dedup<I, S>(&self, items: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut representatives: Vec<Representative> = Vec::new();

        for item in items {
            let text = item.as_ref().trim();
            let key = normalize_key(text);
            let len = text.chars().count();

            let matched = representatives
                .iter_mut()
                .find(|rep| positional_similarity(&key, &rep.key) >= self.cutoff);

            match matched {
                Some(rep) => {
                    if len > rep.len {
                        trace!(kept = text, replaced = %rep.text, "Preferring longer spelling");
                        rep.text = text.to_string();
                        rep.key = key;
                        rep.len = len;
                    } else {
                        trace!(dropped = text, kept = %rep.text, "Dropping near-duplicate");
                    }
                }
                None => representatives.push(Representative {
                    text: text.to_string(),
                    key,
                    len,
                }),
            }
        }

        representatives.into_iter().map(|rep| rep.text).collect()
    }
}

impl Default for FuzzyDeduplicator {
    fn default() -> Self {
        Self::new()
    }
}
