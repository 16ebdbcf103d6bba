use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::global_constants;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub results_page_path: Option<PathBuf>,
    #[serde(default)]
    pub open_results_page: bool,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub discard_stale_responses: bool,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

fn default_api_base_url() -> String {
    global_constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_suggestions() -> Vec<String> {
    global_constants::DEFAULT_SUGGESTIONS
        .iter()
        .map(|suggestion| suggestion.to_string())
        .collect()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            suggestions: default_suggestions(),
            results_page_path: None,
            open_results_page: false,
            request_timeout_secs: None,
            discard_stale_responses: false,
            theme_mode: ThemeMode::default(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] API base URL: {}", settings.api_base_url);
        log::debug!(
            "[SETTINGS] Discard stale responses: {}",
            settings.discard_stale_responses
        );

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    pub fn resolved_results_page_path(&self) -> PathBuf {
        self.results_page_path.clone().unwrap_or_else(|| {
            std::env::temp_dir().join(global_constants::RESULTS_PAGE_FILE_NAME)
        })
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
