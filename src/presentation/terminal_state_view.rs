use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use url::Url;

use super::html_results_grid::HtmlResultsGrid;
use crate::core::interfaces::adapters::LinkOpener;
use crate::core::interfaces::ports::UiStateSink;
use crate::core::models::UiState;

/// Prints the active UI state to a terminal stream. With a page opener set,
/// the results page is opened in the browser the first time cards appear.
pub struct TerminalStateView {
    results_grid: Arc<HtmlResultsGrid>,
    output: Mutex<Box<dyn Write + Send>>,
    page_opener: Option<Arc<dyn LinkOpener>>,
    page_opened: AtomicBool,
}

impl TerminalStateView {
    pub fn new(results_grid: Arc<HtmlResultsGrid>) -> Self {
        Self::with_output(results_grid, Box::new(std::io::stdout()))
    }

    pub fn with_output(results_grid: Arc<HtmlResultsGrid>, output: Box<dyn Write + Send>) -> Self {
        Self {
            results_grid,
            output: Mutex::new(output),
            page_opener: None,
            page_opened: AtomicBool::new(false),
        }
    }

    pub fn with_page_opener(mut self, page_opener: Arc<dyn LinkOpener>) -> Self {
        self.page_opener = Some(page_opener);
        self
    }

    fn open_results_page_once(&self) {
        let Some(page_opener) = &self.page_opener else {
            return;
        };
        if self.page_opened.swap(true, Ordering::SeqCst) {
            return;
        }

        let page_path = self.results_grid.page_path();
        let Ok(page_url) = Url::from_file_path(page_path) else {
            log::warn!("[UI_STATE] Results page path {:?} is not absolute", page_path);
            return;
        };

        if let Err(error) = page_opener.open_in_new_context(page_url.as_str()) {
            log::warn!("[UI_STATE] Failed to open results page: {}", error);
        }
    }

    pub fn describe_state(&self, state: &UiState) -> String {
        match state {
            UiState::Idle => String::new(),
            UiState::Loading => "Searching for games...".to_string(),
            UiState::Empty => "No games found. Try a different search.".to_string(),
            UiState::Error { message } => format!("[ERROR] {}", message),
            UiState::Populated { card_count } => {
                let mut lines = vec![format!(
                    "Found {} games (page: {})",
                    card_count,
                    self.results_grid.page_path().display()
                )];
                lines.extend(
                    self.results_grid
                        .card_titles()
                        .iter()
                        .enumerate()
                        .map(|(index, title)| format!("  {}. {}", index + 1, title)),
                );
                lines.join("\n")
            }
        }
    }
}

impl UiStateSink for TerminalStateView {
    fn show_state(&self, state: &UiState) {
        let description = self.describe_state(state);
        if description.is_empty() {
            return;
        }

        {
            let mut output = self.output.lock();
            if let Err(error) = writeln!(output, "{}", description).and_then(|_| output.flush()) {
                log::warn!("[UI_STATE] Failed to print state {}: {}", state, error);
            }
        }

        if matches!(state, UiState::Populated { .. }) {
            self.open_results_page_once();
        }
    }
}
