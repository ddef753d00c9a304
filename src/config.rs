//! App Configuration
//!
//! Defaults plus the `?log=<level>` override read from the page URL.

use std::str::FromStr;

use log::LevelFilter;

/// Local storage key holding the todo list
pub const STORAGE_KEY: &str = "todos-vanilla-mvc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_key: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build from a `location.search` string such as `?log=debug`.
    /// Unknown parameters and invalid levels are ignored.
    pub fn from_query(search: &str) -> Self {
        let mut config = Self::default();
        let query = search.trim_start_matches('?');

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            if name == "log" {
                if let Ok(level) = LevelFilter::from_str(value) {
                    config.log_level = level;
                }
            }
        }
        config
    }

    /// Read the override from the current page
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}
