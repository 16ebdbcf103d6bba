mod game_record;
mod search_query;
mod ui_state;
mod user_settings;

pub use game_record::{GameRecord, ResultSet};
pub use search_query::SearchQuery;
pub use ui_state::{UiEvent, UiState};
pub use user_settings::{ThemeMode, UserSettings};
