use serde_json::Value;

use crate::global_constants::{
    FALLBACK_CATEGORY, FALLBACK_DESCRIPTION, FALLBACK_TITLE, MISSING_LINK_SENTINEL,
};

const TITLE_FIELDS: &[&str] = &["title", "name"];
const DESCRIPTION_FIELDS: &[&str] = &["description", "desc"];
const CATEGORY_FIELDS: &[&str] = &["category", "genre"];
const IMAGE_FIELDS: &[&str] = &["image", "thumbnail", "img"];
const LINK_FIELDS: &[&str] = &["url", "link"];
const RATING_FIELDS: &[&str] = &["rating"];

/// A single result card's worth of data. Field values may come straight from
/// the search API and are untrusted text.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub title: String,
    pub description: String,
    pub category: String,
    pub rating: Option<String>,
    pub image_url: Option<String>,
    pub target_url: Option<String>,
}

/// Results of one search, in the order received.
pub type ResultSet = Vec<GameRecord>;

impl GameRecord {
    /// Normalizes one entry of the API payload. The API does not fix a schema,
    /// so each field is read from the first present key of its alias group.
    /// Non-object entries yield a record made only of defaults.
    pub fn from_loose_entry(entry: &Value) -> Self {
        Self {
            title: first_present_field(entry, TITLE_FIELDS)
                .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            description: first_present_field(entry, DESCRIPTION_FIELDS)
                .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
            category: first_present_field(entry, CATEGORY_FIELDS)
                .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
            rating: first_present_field(entry, RATING_FIELDS),
            image_url: first_present_field(entry, IMAGE_FIELDS),
            target_url: first_present_field(entry, LINK_FIELDS),
        }
    }

    /// The link a click should open, or `None` when the record has no usable
    /// target.
    pub fn available_link(&self) -> Option<&str> {
        self.target_url
            .as_deref()
            .filter(|url| !url.is_empty() && *url != MISSING_LINK_SENTINEL)
    }
}

fn first_present_field(entry: &Value, field_names: &[&str]) -> Option<String> {
    let object = entry.as_object()?;
    field_names
        .iter()
        .filter_map(|name| object.get(*name))
        .find_map(present_text)
}

// null, false, 0 and "" count as missing.
fn present_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_loose_entry_reads_primary_fields() {
        let entry = json!({
            "title": "Celeste",
            "description": "Climb the mountain.",
            "category": "Platformer",
            "rating": "4.9",
            "image": "https://img.example.com/celeste.png",
            "url": "https://celestegame.com"
        });

        let record = GameRecord::from_loose_entry(&entry);

        assert_eq!(record.title, "Celeste");
        assert_eq!(record.description, "Climb the mountain.");
        assert_eq!(record.category, "Platformer");
        assert_eq!(record.rating.as_deref(), Some("4.9"));
        assert_eq!(
            record.image_url.as_deref(),
            Some("https://img.example.com/celeste.png")
        );
        assert_eq!(record.available_link(), Some("https://celestegame.com"));
    }

    #[test]
    fn test_from_loose_entry_falls_through_alias_fields() {
        let entry = json!({
            "name": "Hades",
            "desc": "Escape the underworld.",
            "genre": "Roguelike",
            "thumbnail": "https://img.example.com/hades-thumb.png",
            "link": "https://supergiantgames.com/hades"
        });

        let record = GameRecord::from_loose_entry(&entry);

        assert_eq!(record.title, "Hades");
        assert_eq!(record.description, "Escape the underworld.");
        assert_eq!(record.category, "Roguelike");
        assert_eq!(
            record.image_url.as_deref(),
            Some("https://img.example.com/hades-thumb.png")
        );
        assert_eq!(
            record.target_url.as_deref(),
            Some("https://supergiantgames.com/hades")
        );
    }

    #[test]
    fn test_from_loose_entry_skips_falsy_primary_field() {
        let entry = json!({ "title": "", "name": "Fallback Name", "img": "https://x/y.png", "image": null });

        let record = GameRecord::from_loose_entry(&entry);

        assert_eq!(record.title, "Fallback Name");
        assert_eq!(record.image_url.as_deref(), Some("https://x/y.png"));
    }

    #[test]
    fn test_from_loose_entry_uses_defaults_for_empty_object() {
        let record = GameRecord::from_loose_entry(&json!({}));

        assert_eq!(record.title, FALLBACK_TITLE);
        assert_eq!(record.description, FALLBACK_DESCRIPTION);
        assert_eq!(record.category, FALLBACK_CATEGORY);
        assert_eq!(record.rating, None);
        assert_eq!(record.image_url, None);
        assert_eq!(record.available_link(), None);
    }

    #[test]
    fn test_from_loose_entry_tolerates_non_object_entries() {
        let record = GameRecord::from_loose_entry(&json!("just a string"));

        assert_eq!(record.title, FALLBACK_TITLE);
    }

    #[test]
    fn test_numeric_rating_is_kept_as_text_and_zero_is_missing() {
        let rated = GameRecord::from_loose_entry(&json!({ "rating": 4.5 }));
        let unrated = GameRecord::from_loose_entry(&json!({ "rating": 0 }));

        assert_eq!(rated.rating.as_deref(), Some("4.5"));
        assert_eq!(unrated.rating, None);
    }

    #[test]
    fn test_available_link_treats_sentinel_as_missing() {
        let record = GameRecord::from_loose_entry(&json!({ "url": "#" }));

        assert_eq!(record.target_url.as_deref(), Some("#"));
        assert_eq!(record.available_link(), None);
    }
}
