//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application works out of the box against
//! a locally running backend; only `session_cookie` needs filling in, copied
//! from a browser session with the platform.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the platform backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value of the server's `session` cookie. Without it every request
    /// comes back 401 and the client stays on the signed-out screen.
    #[serde(default)]
    pub session_cookie: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            session_cookie: None,
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_max_chat_scrollback")]
    pub max_chat_scrollback: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            max_chat_scrollback: default_max_chat_scrollback(),
        }
    }
}

fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}

fn default_max_chat_scrollback() -> usize {
    500
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_true")]
    pub log_assistant: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            log_assistant: true,
        }
    }
}

fn default_log_dir() -> String {
    "~/.local/share/studyhall/logs".to_string()
}

fn default_true() -> bool {
    true
}
