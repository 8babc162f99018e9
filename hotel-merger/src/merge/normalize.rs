//! Text normalization primitives
//!
//! Pure string transforms shared by the supplier parsers and the merge rules.
//! Prose (descriptions, conditions, captions) is capitalized: first character
//! uppercased, the rest lowercased. Country names only get their first
//! character uppercased.

/// Reduce a string to a comparison key: lowercase ASCII letters and digits only
///
/// Never used for display.
pub fn normalize_key(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Collapse whitespace runs to single spaces, then capitalize the result
pub fn collapse_whitespace(s: &str) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    capitalize(&collapsed)
}

/// Capitalize every sentence of a multi-sentence text
///
/// Sentences end at `.`, `!` or `?` followed by whitespace. Each fragment is
/// trimmed and capitalized; fragments are rejoined with single spaces.
pub fn capitalize_sentences(text: &str) -> String {
    split_sentences(text)
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Map a country name or code to its canonical display name
///
/// Unknown names are returned trimmed with the first letter capitalized.
pub fn standardize_country(country: &str) -> String {
    let trimmed = country.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let canonical = match trimmed.to_uppercase().as_str() {
        "US" | "USA" | "UNITED STATES OF AMERICA" => Some("United States"),
        "UK" | "GB" | "GREAT BRITAIN" => Some("United Kingdom"),
        "CA" | "CAN" | "CANADA" => Some("Canada"),
        "AU" | "AUS" | "AUSTRALIA" => Some("Australia"),
        "SG" | "SIN" | "SINGAPORE" => Some("Singapore"),
        "JP" | "JPN" | "JAPAN" => Some("Japan"),
        _ => None,
    };

    match canonical {
        Some(name) => name.to_string(),
        None => sentence_case(trimmed),
    }
}

/// Join a street address and postal code as `"{address}, {postal_code}"`
///
/// The postal code part is omitted when blank.
pub fn combine_address(address: &str, postal_code: &str) -> String {
    let address = address.trim();
    let postal_code = postal_code.trim();
    if postal_code.is_empty() {
        address.to_string()
    } else {
        format!("{}, {}", address, postal_code)
    }
}

/// Uppercase the first character, lowercase the rest
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character, leave the rest untouched
fn sentence_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split after `.`, `!` or `?` when the next character is whitespace
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        if let Some(&(next_idx, next)) = chars.peek() {
            if next.is_whitespace() {
                sentences.push(&text[start..next_idx]);
                start = next_idx;
            }
        }
    }

    sentences.push(&text[start..]);
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Wi-Fi"), "wifi");
        assert_eq!(normalize_key("  Business Centre "), "businesscentre");
        assert_eq!(normalize_key("24/7 Gym!"), "247gym");
        assert_eq!(normalize_key("Café"), "caf");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  pets   are\tnot allowed. "), "Pets are not allowed.");
        assert_eq!(collapse_whitespace("WiFi in LOBBY"), "Wifi in lobby");
        assert_eq!(collapse_whitespace("   "), "");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_capitalize_sentences() {
        assert_eq!(
            capitalize_sentences("great views. close to the beach!  really? yes"),
            "Great views. Close to the beach! Really? Yes"
        );
        assert_eq!(capitalize_sentences("Ocean views."), "Ocean views.");
        assert_eq!(capitalize_sentences(""), "");
    }

    #[test]
    fn test_capitalize_sentences_lowercases_rest() {
        assert_eq!(
            capitalize_sentences("elegant Colonial-style. NEAR MRT"),
            "Elegant colonial-style. Near mrt"
        );
        assert_eq!(
            capitalize_sentences("Part of Resorts World Sentosa."),
            "Part of resorts world sentosa."
        );
    }

    #[test]
    fn test_capitalize_sentences_keeps_inner_punctuation() {
        // No whitespace after the dot, so no sentence boundary
        assert_eq!(capitalize_sentences("visit example.com today"), "Visit example.com today");
        assert_eq!(capitalize_sentences("check-in at 3 p.m. sharp"), "Check-in at 3 p.m. Sharp");
    }

    #[test]
    fn test_standardize_country_aliases() {
        assert_eq!(standardize_country("US"), "United States");
        assert_eq!(standardize_country(" usa "), "United States");
        assert_eq!(standardize_country("United States of America"), "United States");
        assert_eq!(standardize_country("gb"), "United Kingdom");
        assert_eq!(standardize_country("Great Britain"), "United Kingdom");
        assert_eq!(standardize_country("CAN"), "Canada");
        assert_eq!(standardize_country("au"), "Australia");
        assert_eq!(standardize_country("SG"), "Singapore");
        assert_eq!(standardize_country("JPN"), "Japan");
    }

    #[test]
    fn test_standardize_country_fallback() {
        assert_eq!(standardize_country("france"), "France");
        assert_eq!(standardize_country(" new Zealand "), "New Zealand");
        assert_eq!(standardize_country("United States"), "United States");
        assert_eq!(standardize_country(""), "");
        assert_eq!(standardize_country("   "), "");
    }

    #[test]
    fn test_combine_address() {
        assert_eq!(combine_address(" 8 Sentosa Gateway ", " 098269 "), "8 Sentosa Gateway, 098269");
        assert_eq!(combine_address("8 Sentosa Gateway", ""), "8 Sentosa Gateway");
        assert_eq!(combine_address("", ""), "");
    }

    #[test]
    fn test_case_helpers_non_ascii() {
        assert_eq!(sentence_case("élan VITAL"), "Élan VITAL");
        assert_eq!(capitalize("élan VITAL"), "Élan vital");
        assert_eq!(capitalize("ß"), "SS");
    }
}
