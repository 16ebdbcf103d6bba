mod app_theme;
mod game_card;
mod html_escape;
mod html_results_grid;
mod terminal_state_view;

pub use html_results_grid::HtmlResultsGrid;
pub use terminal_state_view::TerminalStateView;
