use crate::core::models::{GameRecord, ResultSet, SearchQuery};

const QUERY_PLACEHOLDER: &str = "{}";

struct FallbackTemplate {
    title_suffix: &'static str,
    description_template: &'static str,
    category: &'static str,
    rating: &'static str,
}

const FALLBACK_TEMPLATES: [FallbackTemplate; 4] = [
    FallbackTemplate {
        title_suffix: "Adventure Game",
        description_template: "An exciting {} adventure game with amazing graphics and gameplay.",
        category: "Adventure",
        rating: "4.5",
    },
    FallbackTemplate {
        title_suffix: "Strategy Edition",
        description_template: "Strategic {} gameplay with challenging puzzles and missions.",
        category: "Strategy",
        rating: "4.2",
    },
    FallbackTemplate {
        title_suffix: "Multiplayer",
        description_template: "Play {} with friends online in this multiplayer version.",
        category: "Multiplayer",
        rating: "4.7",
    },
    FallbackTemplate {
        title_suffix: "Classic",
        description_template: "The classic {} game with updated graphics and features.",
        category: "Classic",
        rating: "4.3",
    },
];

/// Placeholder results shown when the search API cannot answer. Depends only
/// on the query text.
pub fn build_fallback_games(query: &SearchQuery) -> ResultSet {
    let query_text = query.as_str();

    FALLBACK_TEMPLATES
        .iter()
        .map(|template| GameRecord {
            title: format!("{} - {}", query_text, template.title_suffix),
            description: template
                .description_template
                .replace(QUERY_PLACEHOLDER, query_text),
            category: template.category.to_string(),
            rating: Some(template.rating.to_string()),
            image_url: None,
            target_url: None,
        })
        .collect()
}
