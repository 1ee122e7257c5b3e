use serde::Deserialize;

/// Runtime settings of the console
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the packing API. Empty means "`/api` on the current origin".
    pub api_base: String,
    pub history_page_size: u32,
    pub search_min_chars: usize,
    pub search_debounce_ms: u32,
    pub token_storage_key: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
{
    "api_base": "",
    "history_page_size": 15,
    "search_min_chars": 3,
    "search_debounce_ms": 500,
    "token_storage_key": "authToken"
}
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            history_page_size: 15,
            search_min_chars: 3,
            search_debounce_ms: 500,
            token_storage_key: "authToken".to_string(),
        }
    }
}

/// Load the embedded configuration and apply the build-time
/// `PACKING_API_BASE` override.
pub fn load_config() -> AppConfig {
    let mut config = match serde_json::from_str::<AppConfig>(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid embedded config, using defaults: {}", e);
            AppConfig::default()
        }
    };
    apply_api_base_override(&mut config, option_env!("PACKING_API_BASE"));
    config
}

fn apply_api_base_override(config: &mut AppConfig, value: Option<&str>) {
    if let Some(base) = value.map(str::trim).filter(|b| !b.is_empty()) {
        config.api_base = base.trim_end_matches('/').to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let parsed: AppConfig = serde_json::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_api_base_override() {
        let mut config = AppConfig::default();
        apply_api_base_override(&mut config, Some("http://10.0.0.5:3000/api/"));
        assert_eq!(config.api_base, "http://10.0.0.5:3000/api");

        apply_api_base_override(&mut config, Some("   "));
        assert_eq!(config.api_base, "http://10.0.0.5:3000/api");

        apply_api_base_override(&mut config, None);
        assert_eq!(config.api_base, "http://10.0.0.5:3000/api");
    }
}
