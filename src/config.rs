use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the optional `<script type="application/json">` block in index.html.
pub const CONFIG_ELEMENT_ID: &str = "board-config";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    /// Prefix for every API URL; empty means same origin.
    pub api_base: String,
    pub supports_removal: bool,
    pub bypass_cache: bool,
    pub message_timeout_ms: u32,
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            supports_removal: true,
            bypass_cache: true,
            message_timeout_ms: 5000,
            log_level: "info".into(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Falls back to `Info` on anything `log` can't parse.
    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Reads the config block embedded in the page. A missing block is not an
    /// error; a malformed one is.
    pub fn from_document() -> Result<Self, ConfigError> {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(t) if !t.trim().is_empty() => Self::from_json(&t),
            _ => Ok(Self::default()),
        }
    }
}
