use serde::{Deserialize, Serialize};
use std::time::Duration;

const CONFIG_DIR: &str = "usermanage";
const CONFIG_FILE: &str = "config.json";

/// Development backend the original deployment points at.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Timeout applied to every request routed through the shared client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load from the platform config dir, falling back to defaults on any
    /// missing or unreadable file. `USERMANAGE_API_URL` overrides the file.
    pub fn load() -> Self {
        let mut config = Self::load_file().unwrap_or_default();
        if let Ok(url) = std::env::var("USERMANAGE_API_URL") {
            let url = url.trim();
            if !url.is_empty() {
                config.base_url = url.trim_end_matches('/').to_string();
            }
        }
        config
    }

    fn load_file() -> Option<Self> {
        let config_dir = dirs::config_dir()?;
        let config_path = config_dir.join(CONFIG_DIR).join(CONFIG_FILE);
        if !config_path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(&config_path).ok()?;
        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                log::warn!("Ignoring malformed config at {}: {}", config_path.display(), err);
                None
            }
        }
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join(CONFIG_DIR);
            std::fs::create_dir_all(&app_dir)?;
            let config_path = app_dir.join(CONFIG_FILE);
            let content = serde_json::to_string_pretty(self)?;
            std::fs::write(config_path, content)?;
        }
        Ok(())
    }
}
