//! Application configuration
//!
//! Defaults are embedded as TOML; the API location and key can be replaced
//! at build time through `HOLIDAZE_API_BASE` and `HOLIDAZE_API_KEY`
//! (e.g. `HOLIDAZE_API_KEY=... trunk build --release`).

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Noroff API key; when absent one is created after login
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_key_name")]
    pub api_key_name: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    /// Venue cards per page on the venues list
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// `limit` used while walking the venues endpoint
    #[serde(default = "default_fetch_page_limit")]
    pub fetch_page_limit: u32,
    /// Upper bound on pages fetched when loading the whole catalogue
    #[serde(default = "default_max_fetch_pages")]
    pub max_fetch_pages: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            fetch_page_limit: default_fetch_page_limit(),
            max_fetch_pages: default_max_fetch_pages(),
        }
    }
}

fn default_api_key_name() -> String {
    "holidaze-web".to_string()
}

fn default_page_size() -> usize {
    12
}

fn default_fetch_page_limit() -> u32 {
    100
}

fn default_max_fetch_pages() -> u32 {
    20
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://v2.api.noroff.dev"
api_key_name = "holidaze-web"

[ui]
page_size = 12
fetch_page_limit = 100
max_fetch_pages = 20
"#;

fn hard_defaults() -> AppConfig {
    AppConfig {
        api: ApiConfig {
            base_url: "https://v2.api.noroff.dev".to_string(),
            api_key: None,
            api_key_name: default_api_key_name(),
        },
        ui: UiConfig::default(),
    }
}

/// Parse a TOML document and apply overrides
pub fn load_config(
    source: &str,
    base_override: Option<&str>,
    key_override: Option<&str>,
) -> AppConfig {
    let mut config = match toml::from_str::<AppConfig>(source) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid embedded configuration, using defaults: {}", e);
            hard_defaults()
        }
    };

    if let Some(base) = base_override.map(str::trim).filter(|s| !s.is_empty()) {
        config.api.base_url = base.to_string();
    }
    if let Some(key) = key_override.map(str::trim).filter(|s| !s.is_empty()) {
        config.api.api_key = Some(key.to_string());
    }

    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    config.ui.page_size = config.ui.page_size.max(1);
    config.ui.fetch_page_limit = config.ui.fetch_page_limit.clamp(1, 100);
    config
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    load_config(
        DEFAULT_CONFIG,
        option_env!("HOLIDAZE_API_BASE"),
        option_env!("HOLIDAZE_API_KEY"),
    )
});

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(DEFAULT_CONFIG, None, None);
        assert_eq!(config.api.base_url, "https://v2.api.noroff.dev");
        assert_eq!(config.api.api_key, None);
        assert_eq!(config.ui.page_size, 12);
        assert_eq!(config.ui.fetch_page_limit, 100);
    }

    #[test]
    fn test_overrides_win() {
        let config = load_config(DEFAULT_CONFIG, Some("http://localhost:8080/"), Some(" abc "));
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.api_key.as_deref(), Some("abc"));
    }

    #[test]
    fn test_blank_overrides_ignored() {
        let config = load_config(DEFAULT_CONFIG, Some(""), Some("   "));
        assert_eq!(config.api.base_url, "https://v2.api.noroff.dev");
        assert!(config.api.api_key.is_none());
    }

    #[test]
    fn test_broken_toml_falls_back() {
        let config = load_config("[api", None, None);
        assert_eq!(config, hard_defaults());
    }

    #[test]
    fn test_missing_ui_section_and_clamping() {
        let config = load_config(
            "[api]\nbase_url = \"https://x.dev\"\n[ui]\npage_size = 0\nfetch_page_limit = 500\n",
            None,
            None,
        );
        assert_eq!(config.ui.page_size, 1);
        assert_eq!(config.ui.fetch_page_limit, 100);
        assert_eq!(config.ui.max_fetch_pages, 20);

        let minimal = load_config("[api]\nbase_url = \"https://x.dev\"\n", None, None);
        assert_eq!(minimal.ui, UiConfig::default());
        assert_eq!(minimal.api.api_key_name, "holidaze-web");
    }
}
