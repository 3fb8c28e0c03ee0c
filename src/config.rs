//! Runtime Configuration
//!
//! Reads the optional `<script id="app-config" type="application/json">`
//! block from the host page.

use blog_todo_core::AppConfig;

const CONFIG_ELEMENT_ID: &str = "app-config";

/// Page-provided config, or defaults when absent or invalid
pub fn load_app_config() -> AppConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => match AppConfig::from_json(&raw) {
            Ok(config) => {
                log::debug!("Using page config: {:?}", config);
                config
            }
            Err(e) => {
                log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                AppConfig::default()
            }
        },
        _ => AppConfig::default(),
    }
}
