use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;

use crate::core::interfaces::adapters::{GameSearchProvider, LinkOpener};
use crate::core::interfaces::ports::{ResultsContainer, UiStateSink};
use crate::core::models::{GameRecord, ResultSet, SearchQuery, UiEvent, UiState};
use crate::global_constants::LOG_TAG_SEARCH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTrigger {
    SubmitButton,
    EnterKey,
    Suggestion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Opened(String),
    LinkUnavailable,
    NoSuchCard,
    OpenFailed(String),
}

pub struct SearchOrchestrator {
    search_provider: Arc<dyn GameSearchProvider>,
    link_opener: Arc<dyn LinkOpener>,
    results_container: Arc<dyn ResultsContainer>,
    state_sink: Arc<dyn UiStateSink>,
    ui_state: Mutex<UiState>,
    rendered_results: Mutex<ResultSet>,
    latest_generation: AtomicU64,
    discard_stale_responses: bool,
}

impl SearchOrchestrator {
    pub fn build(
        search_provider: Arc<dyn GameSearchProvider>,
        link_opener: Arc<dyn LinkOpener>,
        results_container: Arc<dyn ResultsContainer>,
        state_sink: Arc<dyn UiStateSink>,
        discard_stale_responses: bool,
    ) -> Self {
        Self {
            search_provider,
            link_opener,
            results_container,
            state_sink,
            ui_state: Mutex::new(UiState::default()),
            rendered_results: Mutex::new(Vec::new()),
            latest_generation: AtomicU64::new(0),
            discard_stale_responses,
        }
    }

    pub fn ui_state(&self) -> UiState {
        self.ui_state.lock().clone()
    }

    /// Runs one search from raw input to rendered cards. Overlapping calls
    /// race; the last to finish wins unless stale responses are discarded.
    pub async fn handle_submission(&self, trigger: SearchTrigger, raw_input: &str) {
        let Some(query) = SearchQuery::from_input(raw_input) else {
            log::warn!("{} Rejected empty query from {:?}", LOG_TAG_SEARCH, trigger);
            self.apply_event(UiEvent::QueryRejected);
            return;
        };

        let generation = self.latest_generation.fetch_add(1, Ordering::SeqCst) + 1;
        log::info!(
            "{} Searching for '{}' (trigger={:?}, generation={})",
            LOG_TAG_SEARCH,
            query,
            trigger,
            generation
        );
        self.apply_event(UiEvent::SearchStarted);

        let games = self.search_provider.lookup(&query).await;

        if self.discard_stale_responses && !self.is_latest_generation(generation) {
            log::info!(
                "{} Discarding stale results for '{}' (generation={})",
                LOG_TAG_SEARCH,
                query,
                generation
            );
            return;
        }

        if let Err(error) = self.render_results(games) {
            log::error!("{} Search flow failed: {:#}", LOG_TAG_SEARCH, error);
            self.apply_event(UiEvent::SearchFailed);
        }
    }

    /// Replaces whatever the container showed with `games`.
    /// Click targets always follow the cards in the container, even when
    /// presenting the page fails afterwards.
    pub fn render_results(&self, games: ResultSet) -> Result<usize> {
        self.rendered_results.lock().clear();
        self.results_container.clear()?;

        for (position, record) in games.iter().enumerate() {
            self.results_container.append_card(record, position)?;
        }
        *self.rendered_results.lock() = games;

        self.results_container.present()?;

        let card_count = self.results_container.child_count();
        log::info!("{} Rendered {} cards", LOG_TAG_SEARCH, card_count);

        self.apply_event(UiEvent::ResultsRendered { card_count });

        Ok(card_count)
    }

    /// `position` is zero-based.
    pub fn handle_card_click(&self, position: usize) -> ClickOutcome {
        let record = self.rendered_results.lock().get(position).cloned();

        let Some(record) = record else {
            log::warn!("{} No card at position {}", LOG_TAG_SEARCH, position);
            return ClickOutcome::NoSuchCard;
        };

        self.open_record_link(&record)
    }

    fn open_record_link(&self, record: &GameRecord) -> ClickOutcome {
        let Some(link) = record.available_link() else {
            log::info!("{} No link for '{}'", LOG_TAG_SEARCH, record.title);
            self.apply_event(UiEvent::LinkUnavailable);
            return ClickOutcome::LinkUnavailable;
        };

        match self.link_opener.open_in_new_context(link) {
            Ok(()) => ClickOutcome::Opened(link.to_string()),
            Err(error) => {
                log::error!("{} Failed to open {}: {}", LOG_TAG_SEARCH, link, error);
                ClickOutcome::OpenFailed(error.to_string())
            }
        }
    }

    fn is_latest_generation(&self, generation: u64) -> bool {
        self.latest_generation.load(Ordering::SeqCst) == generation
    }

    fn apply_event(&self, event: UiEvent) {
        let next_state = {
            let mut current_state = self.ui_state.lock();
            let next_state = current_state.transition(event);
            *current_state = next_state.clone();
            next_state
        };

        self.state_sink.show_state(&next_state);
    }
}
