//! Runtime configuration of the dashboard.
//!
//! The bundle carries its defaults; a page may override them with a
//! `<script type="application/toml" id="app-config">` block.

use contracts::shared::config::{load_config, AppConfig};
use leptos::prelude::*;
use web_sys::window;

const CONFIG_ELEMENT_ID: &str = "app-config";

fn config_override() -> Option<String> {
    window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
}

/// Never fails: a broken override is reported and the defaults are used.
pub fn load_app_config() -> AppConfig {
    let source = config_override();
    match load_config(source.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            // logging is not initialised yet
            web_sys::console::error_1(&format!("Invalid app config, using defaults: {}", e).into());
            AppConfig::default()
        }
    }
}

/// Unknown names fall back to `Debug`.
pub fn log_level(name: &str) -> log::Level {
    name.parse::<log::Level>().unwrap_or(log::Level::Debug)
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_levels() {
        assert_eq!(log_level("warn"), log::Level::Warn);
        assert_eq!(log_level("INFO"), log::Level::Info);
        assert_eq!(log_level("verbose"), log::Level::Debug);
    }
}
