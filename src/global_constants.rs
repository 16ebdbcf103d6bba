pub const APPLICATION_NAME: &str = "Game Search";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_SEARCH: &str = "[SEARCH]";
pub const LOG_TAG_INPUT: &str = "[INPUT]";

pub const DEFAULT_API_BASE_URL: &str = "https://api.s16.lol/v0/api/games";
pub const DEFAULT_SUGGESTIONS: [&str; 4] = ["Minecraft", "Super Mario", "Zelda", "Tetris"];
pub const SUGGESTION_PREFIX: &str = "Try: ";

pub const SETTINGS_DIRECTORY_NAME: &str = "game-search";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const RESULTS_PAGE_FILE_NAME: &str = "game-search-results.html";

pub const USER_MESSAGE_EMPTY_QUERY: &str = "Please enter a game name to search";
pub const USER_MESSAGE_LINK_UNAVAILABLE: &str = "Game link not available";
pub const USER_MESSAGE_SEARCH_FAILED: &str = "Failed to search for games. Please try again.";

pub const FALLBACK_TITLE: &str = "Unknown Game";
pub const FALLBACK_DESCRIPTION: &str = "No description available";
pub const FALLBACK_CATEGORY: &str = "Game";
pub const FALLBACK_RATING: &str = "N/A";
pub const MISSING_LINK_SENTINEL: &str = "#";

pub const CARD_ENTRANCE_STEP_MS: u64 = 100;

pub const COMMAND_SEARCH: &str = ":search";
pub const COMMAND_TRY: &str = ":try";
pub const COMMAND_SUGGESTIONS: &str = ":suggestions";
pub const COMMAND_OPEN: &str = ":open";
pub const COMMAND_HELP: &str = ":help";
pub const COMMAND_QUIT: &str = ":quit";

pub const STARTUP_BANNER: &str = r#"
╔════════════════════════════════════════════════════════╗
║  Game Search                                           ║
║                                                        ║
║  Type a game name and press Enter to search            ║
║  :try <n>     search for suggestion n                  ║
║  :open <n>    open the n-th result in your browser     ║
║  :help        show all commands                        ║
║  :quit        exit                                     ║
║                                                        ║
╚════════════════════════════════════════════════════════╝
"#;

pub const HELP_TEXT: &str = r#"Commands:
  <text>            search for <text>
  :search <text>    search for <text>
  :try <n>          search for suggestion n
  :suggestions      list suggestions
  :open <n>         open the n-th result in your browser
  :help             show this help
  :quit             exit
Lines starting with ':' are commands; use :search <text> to look them up."#;
