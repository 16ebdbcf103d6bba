use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

use super::app_theme::results_page_stylesheet;
use super::game_card::GameCard;
use crate::core::interfaces::ports::ResultsContainer;
use crate::core::models::{GameRecord, ThemeMode};
use crate::global_constants::APPLICATION_NAME;

/// Results container backed by a standalone HTML page on disk.
pub struct HtmlResultsGrid {
    page_path: PathBuf,
    theme_mode: ThemeMode,
    cards: Mutex<Vec<GameCard>>,
}

impl HtmlResultsGrid {
    #[cfg(test)]
    pub fn new(page_path: PathBuf) -> Self {
        Self::with_theme(page_path, ThemeMode::default())
    }

    pub fn with_theme(page_path: PathBuf, theme_mode: ThemeMode) -> Self {
        log::debug!(
            "[RESULTS] Results page at {:?} ({} theme)",
            page_path,
            theme_mode
        );
        Self {
            page_path,
            theme_mode,
            cards: Mutex::new(Vec::new()),
        }
    }

    pub fn page_path(&self) -> &Path {
        &self.page_path
    }

    pub fn card_titles(&self) -> Vec<String> {
        self.cards
            .lock()
            .iter()
            .map(|card| card.title.clone())
            .collect()
    }

    pub fn render_page(&self) -> String {
        let cards_markup = self
            .cards
            .lock()
            .iter()
            .map(|card| card.markup.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{stylesheet}
</style>
</head>
<body>
<section class="games-section">
<div class="games-grid" id="gamesGrid">
{cards}
</div>
</section>
</body>
</html>
"#,
            title = APPLICATION_NAME,
            stylesheet = results_page_stylesheet(&self.theme_mode),
            cards = cards_markup,
        )
    }
}

impl ResultsContainer for HtmlResultsGrid {
    fn clear(&self) -> Result<()> {
        self.cards.lock().clear();
        Ok(())
    }

    fn append_card(&self, record: &GameRecord, position: usize) -> Result<()> {
        self.cards.lock().push(GameCard::build(record, position));
        Ok(())
    }

    fn child_count(&self) -> usize {
        self.cards.lock().len()
    }

    fn present(&self) -> Result<()> {
        let page = self.render_page();
        std::fs::write(&self.page_path, page)
            .with_context(|| format!("Unable to write results page {:?}", self.page_path))?;

        log::debug!(
            "[RESULTS] Wrote {} cards to {:?}",
            self.child_count(),
            self.page_path
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> GameRecord {
        GameRecord {
            title: title.to_string(),
            description: "desc".to_string(),
            category: "Game".to_string(),
            rating: None,
            image_url: None,
            target_url: None,
        }
    }

    #[test]
    fn test_clear_removes_previous_cards() {
        let temp_dir = tempfile::tempdir().unwrap();
        let grid = HtmlResultsGrid::new(temp_dir.path().join("page.html"));

        grid.append_card(&record("One"), 0).unwrap();
        grid.append_card(&record("Two"), 1).unwrap();
        grid.clear().unwrap();
        grid.append_card(&record("Three"), 0).unwrap();

        assert_eq!(grid.child_count(), 1);
        assert_eq!(grid.card_titles(), vec!["Three"]);
    }

    #[test]
    fn test_present_writes_cards_in_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let grid = HtmlResultsGrid::with_theme(temp_dir.path().join("page.html"), ThemeMode::Light);

        grid.append_card(&record("First"), 0).unwrap();
        grid.append_card(&record("Second"), 1).unwrap();
        grid.present().unwrap();

        let page = std::fs::read_to_string(grid.page_path()).unwrap();
        let first = page.find("First").unwrap();
        let second = page.find("Second").unwrap();
        assert!(first < second);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("background: #f2f2f7"));
    }

    #[test]
    fn test_present_never_emits_raw_script_from_titles() {
        let temp_dir = tempfile::tempdir().unwrap();
        let grid = HtmlResultsGrid::new(temp_dir.path().join("page.html"));

        grid.append_card(&record("<script>steal()</script>"), 0)
            .unwrap();
        grid.present().unwrap();

        let page = std::fs::read_to_string(grid.page_path()).unwrap();
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;steal()&lt;/script&gt;"));
    }

    #[test]
    fn test_present_fails_when_page_cannot_be_written() {
        let temp_dir = tempfile::tempdir().unwrap();
        let grid = HtmlResultsGrid::new(temp_dir.path().join("missing").join("page.html"));

        assert!(grid.present().is_err());
    }
}
