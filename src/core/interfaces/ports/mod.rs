mod results_container;
mod ui_state_sink;

pub use results_container::ResultsContainer;
pub use ui_state_sink::UiStateSink;
