//! Runtime settings.
//!
//! The app keeps no state of its own on disk; settings are defaults with
//! optional environment overrides read once at startup.

use std::path::PathBuf;

use log::warn;

use crate::controls::TerminalStyle;
use crate::model::constants::*;

/// Startup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Panel language: `LANG_EN` or `LANG_ES`.
    pub lang: i32,
    /// Editor settings file patched on appearance changes.
    pub editor_settings_path: PathBuf,
    /// Font applied to Terminal tabs on appearance changes.
    pub terminal: TerminalStyle,
    /// flexi_logger specification, e.g. `info` or `desktop_control=debug`.
    pub log_spec: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lang: LANG_EN,
            editor_settings_path: default_editor_settings_path(),
            terminal: TerminalStyle {
                font_name: DEFAULT_TERMINAL_FONT.to_string(),
                font_size: DEFAULT_TERMINAL_FONT_SIZE,
            },
            log_spec: "info".to_string(),
        }
    }
}

impl Settings {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`; unparsable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(lang) = lookup(ENV_LANG) {
            match parse_lang(&lang) {
                Some(code) => settings.lang = code,
                None => warn!("Ignoring {}={:?}: expected en or es", ENV_LANG, lang),
            }
        }

        if let Some(path) = lookup(ENV_EDITOR_SETTINGS).filter(|p| !p.trim().is_empty()) {
            settings.editor_settings_path = PathBuf::from(path);
        }

        if let Some(font) = lookup(ENV_TERMINAL_FONT).filter(|f| !f.trim().is_empty()) {
            settings.terminal.font_name = font;
        }

        if let Some(size) = lookup(ENV_TERMINAL_FONT_SIZE) {
            match size.trim().parse::<u32>() {
                Ok(size) if size > 0 => settings.terminal.font_size = size,
                _ => warn!("Ignoring {}={:?}", ENV_TERMINAL_FONT_SIZE, size),
            }
        }

        if let Some(spec) = lookup(ENV_LOG).filter(|s| !s.trim().is_empty()) {
            settings.log_spec = spec;
        }

        settings
    }
}

fn parse_lang(value: &str) -> Option<i32> {
    match value.trim().to_ascii_lowercase().as_str() {
        "en" | "english" => Some(LANG_EN),
        "es" | "spanish" | "español" => Some(LANG_ES),
        _ => None,
    }
}

/// `~/Library/Application Support/Code/User/settings.json`.
pub fn default_editor_settings_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(EDITOR_SETTINGS_RELATIVE)
}
