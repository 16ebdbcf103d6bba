mod fallback_games;
mod s16_game_search_provider;
mod system_link_opener;

pub use fallback_games::build_fallback_games;
pub use s16_game_search_provider::S16GameSearchProvider;
pub use system_link_opener::SystemLinkOpener;
