use std::fmt;

use crate::global_constants::{
    USER_MESSAGE_EMPTY_QUERY, USER_MESSAGE_LINK_UNAVAILABLE, USER_MESSAGE_SEARCH_FAILED,
};

/// What the widget is showing. Exactly one variant is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Empty,
    Error { message: String },
    Populated { card_count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    QueryRejected,
    SearchStarted,
    ResultsRendered { card_count: usize },
    LinkUnavailable,
    SearchFailed,
}

impl UiState {
    /// The next state after `event`. Every event fully determines the
    /// visible state, so the current one is only consulted for logging.
    pub fn transition(&self, event: UiEvent) -> UiState {
        let next_state = match event {
            UiEvent::QueryRejected => UiState::error(USER_MESSAGE_EMPTY_QUERY),
            UiEvent::SearchStarted => UiState::Loading,
            UiEvent::ResultsRendered { card_count: 0 } => UiState::Empty,
            UiEvent::ResultsRendered { card_count } => UiState::Populated { card_count },
            UiEvent::LinkUnavailable => UiState::error(USER_MESSAGE_LINK_UNAVAILABLE),
            UiEvent::SearchFailed => UiState::error(USER_MESSAGE_SEARCH_FAILED),
        };

        log::debug!(
            "[UI_STATE] {} --{:?}--> {}",
            self,
            event,
            next_state
        );

        next_state
    }

    fn error(message: &str) -> Self {
        UiState::Error {
            message: message.to_string(),
        }
    }
}

impl fmt::Display for UiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiState::Idle => write!(f, "Idle"),
            UiState::Loading => write!(f, "Loading"),
            UiState::Empty => write!(f, "Empty"),
            UiState::Error { message } => write!(f, "Error({})", message),
            UiState::Populated { card_count } => write!(f, "Populated({})", card_count),
        }
    }
}
