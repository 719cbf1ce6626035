//! Assistant chat transcript logging to disk.
//!
//! When enabled, writes each chat exchange to a daily log file named
//! `assistant_<date>.log` in the configured log directory (default:
//! `~/.local/share/studyhall/logs/`).

use crate::app::state::{ChatMessage, ChatSender};
use crate::config::LoggingConfig;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Writes chat transcripts to daily log files.
///
/// File handles are cached for the lifetime of the logger to avoid repeated
/// opens. Falls back to `/dev/null` if a log file cannot be created.
pub struct ChatLogger {
    enabled: bool,
    log_dir: String,
    log_assistant: bool,
    file_handles: HashMap<String, fs::File>,
}

impl ChatLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: config.log_dir.clone(),
            log_assistant: config.log_assistant,
            file_handles: HashMap::new(),
        }
    }

    /// Write a chat line to today's transcript. No-op if logging is disabled.
    pub fn log_message(&mut self, msg: &ChatMessage) {
        if !self.enabled || !self.log_assistant {
            return;
        }

        let sender = match msg.sender {
            ChatSender::Student => "student",
            ChatSender::Assistant => "assistant",
        };
        let line = format!("[{}] <{}> {}", msg.timestamp, sender, msg.text);

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("assistant_{}.log", date);

        // Expand ~ in log_dir
        let log_dir = if self.log_dir.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                home.join(&self.log_dir[2..])
            } else {
                PathBuf::from(&self.log_dir)
            }
        } else {
            PathBuf::from(&self.log_dir)
        };

        let filepath = log_dir.join(&filename);

        let handle = self.file_handles.entry(filename).or_insert_with(|| {
            let _ = fs::create_dir_all(&log_dir);
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&filepath)
                .unwrap_or_else(|_| {
                    // Fallback: a handle that goes nowhere
                    OpenOptions::new()
                        .write(true)
                        .open(if cfg!(unix) { "/dev/null" } else { "NUL" })
                        .unwrap()
                })
        });

        let _ = writeln!(handle, "{}", line);
    }
}
