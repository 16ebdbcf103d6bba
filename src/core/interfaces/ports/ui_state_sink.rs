use crate::core::models::UiState;

pub trait UiStateSink: Send + Sync {
    fn show_state(&self, state: &UiState);
}
