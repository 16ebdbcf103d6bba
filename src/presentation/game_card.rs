use std::time::Duration;

use super::html_escape::{escape_html, safe_external_url};
use crate::core::models::GameRecord;
use crate::global_constants::{CARD_ENTRANCE_STEP_MS, FALLBACK_RATING};

const PLACEHOLDER_ICON: &str = r#"<span class="game-icon">🎮</span>"#;
const HIDDEN_PLACEHOLDER_ICON: &str = r#"<span class="game-icon" style="display: none;">🎮</span>"#;
const IMAGE_ERROR_HANDLER: &str =
    "this.style.display='none'; this.nextElementSibling.style.display='flex';";

/// One rendered result card.
#[derive(Debug, Clone, PartialEq)]
pub struct GameCard {
    pub title: String,
    pub markup: String,
}

impl GameCard {
    pub fn build(record: &GameRecord, position: usize) -> Self {
        let entrance_delay = Self::entrance_delay_for(position);
        let title = escape_html(&record.title);
        let description = escape_html(&record.description);
        let category = escape_html(&record.category);
        let rating = escape_html(record.rating.as_deref().unwrap_or(FALLBACK_RATING));

        let info = format!(
            r#"<div class="game-info">
      <h3 class="game-title">{title}</h3>
      <p class="game-description">{description}</p>
      <div class="game-meta">
        <span class="game-category">{category}</span>
        <span class="game-rating">⭐ {rating}</span>
      </div>
    </div>"#
        );
        let body = format!(
            "<div class=\"game-image\">{}</div>\n    {}",
            Self::render_image(record, &title),
            info
        );
        let body = match record.available_link().and_then(safe_external_url) {
            Some(link) => format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                escape_html(&link),
                body
            ),
            None => body,
        };

        let markup = format!(
            r#"<div class="game-card" data-position="{}" style="animation-delay: {}ms;">
  {}
</div>"#,
            position,
            entrance_delay.as_millis(),
            body
        );

        Self {
            title: record.title.clone(),
            markup,
        }
    }

    pub fn entrance_delay_for(position: usize) -> Duration {
        Duration::from_millis(CARD_ENTRANCE_STEP_MS * position as u64)
    }

    // A broken image hides itself and reveals the placeholder icon.
    fn render_image(record: &GameRecord, escaped_title: &str) -> String {
        match record.image_url.as_deref().and_then(safe_external_url) {
            Some(image_url) => format!(
                r#"<img src="{}" alt="{}" onerror="{}">{}"#,
                escape_html(&image_url),
                escaped_title,
                IMAGE_ERROR_HANDLER,
                HIDDEN_PLACEHOLDER_ICON
            ),
            None => PLACEHOLDER_ICON.to_string(),
        }
    }
}
