mod game_search_provider;
mod link_opener;

pub use game_search_provider::GameSearchProvider;
pub use link_opener::LinkOpener;
