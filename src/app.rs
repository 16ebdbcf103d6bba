use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;

use crate::adapters::{S16GameSearchProvider, SystemLinkOpener};
use crate::core::interfaces::adapters::LinkOpener;
use crate::core::models::UserSettings;
use crate::core::orchestrators::{ClickOutcome, SearchOrchestrator, SearchTrigger};
use crate::global_constants::{HELP_TEXT, LOG_TAG_APP, STARTUP_BANNER, SUGGESTION_PREFIX};
use crate::ports::{TerminalInputEvent, TerminalInputListener};
use crate::presentation::{HtmlResultsGrid, TerminalStateView};

pub struct GameSearchApp {
    orchestrator: Arc<SearchOrchestrator>,
    settings: UserSettings,
}

impl GameSearchApp {
    pub fn build(settings: UserSettings) -> anyhow::Result<Self> {
        log::info!("{} Initializing application", LOG_TAG_APP);

        let search_provider = Arc::new(S16GameSearchProvider::new(
            settings.api_base_url.clone(),
            settings.request_timeout_secs.map(Duration::from_secs),
        )?);
        let link_opener: Arc<dyn LinkOpener> = Arc::new(SystemLinkOpener::new());
        let results_grid = Arc::new(HtmlResultsGrid::with_theme(
            settings.resolved_results_page_path(),
            settings.theme_mode,
        ));
        let mut state_view = TerminalStateView::new(results_grid.clone());
        if settings.open_results_page {
            state_view = state_view.with_page_opener(link_opener.clone());
        }

        let orchestrator = Arc::new(SearchOrchestrator::build(
            search_provider,
            link_opener.clone(),
            results_grid.clone(),
            Arc::new(state_view),
            settings.discard_stale_responses,
        ));

        Ok(Self {
            orchestrator,
            settings,
        })
    }

    pub async fn run(self) -> anyhow::Result<()> {
        println!("{}", STARTUP_BANNER);
        self.print_suggestions();

        let mut input_events = Box::pin(TerminalInputListener::create_event_stream());

        while let Some(event) = input_events.next().await {
            match event {
                TerminalInputEvent::Submit { trigger, text } => self.spawn_search(trigger, text),
                TerminalInputEvent::SelectSuggestion(index) => self.select_suggestion(index),
                TerminalInputEvent::ListSuggestions => self.print_suggestions(),
                TerminalInputEvent::OpenCard(position) => self.open_card(position),
                TerminalInputEvent::Help => println!("{}", HELP_TEXT),
                TerminalInputEvent::Invalid(message) => {
                    println!("{}", message);
                    println!("{}", HELP_TEXT);
                }
                TerminalInputEvent::Quit => break,
            }
        }

        log::info!("{} Exiting application", LOG_TAG_APP);
        Ok(())
    }

    fn spawn_search(&self, trigger: SearchTrigger, text: String) {
        let orchestrator = Arc::clone(&self.orchestrator);
        tokio::spawn(async move {
            orchestrator.handle_submission(trigger, &text).await;
        });
    }

    fn select_suggestion(&self, index: usize) {
        match self.settings.suggestions.get(index) {
            Some(suggestion) => {
                let game_name = suggestion_game_name(suggestion).to_string();
                log::info!("{} Suggestion selected: {}", LOG_TAG_APP, game_name);
                self.spawn_search(SearchTrigger::Suggestion, game_name);
            }
            None => println!("No suggestion number {}", index + 1),
        }
    }

    fn print_suggestions(&self) {
        for (index, suggestion) in self.settings.suggestions.iter().enumerate() {
            println!("  :try {}  {}", index + 1, suggestion);
        }
    }

    fn open_card(&self, position: usize) {
        match self.orchestrator.handle_card_click(position) {
            ClickOutcome::Opened(url) => println!("Opened {}", url),
            ClickOutcome::LinkUnavailable => {}
            ClickOutcome::NoSuchCard => println!("No card number {}", position + 1),
            ClickOutcome::OpenFailed(reason) => println!("Could not open link: {}", reason),
        }
    }
}

// Suggestion chips may be labelled "Try: <game>".
fn suggestion_game_name(suggestion: &str) -> &str {
    suggestion
        .strip_prefix(SUGGESTION_PREFIX)
        .unwrap_or(suggestion)
}
