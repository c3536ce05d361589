//! Configuration constants and default values.
//!
//! This module contains the panel defaults, the external-tool identifiers and
//! the hotkey definition.

// === Panel Defaults ===

/// Brightness shown before the first successful read.
pub const DEFAULT_BRIGHTNESS: f32 = 0.5;

/// Volume shown before the first successful read.
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Panel width in points.
pub const PANEL_WIDTH: f64 = 320.0;

/// Panel height in points.
pub const PANEL_HEIGHT: f64 = 440.0;

/// Interval of the main-thread timer that drains the event bus, in seconds.
pub const DISPATCH_INTERVAL_SECS: f64 = 0.05;

// === Appearance Sync ===

/// Interpreter used for every appearance script.
pub const OSASCRIPT_PATH: &str = "/usr/bin/osascript";

/// Settings key patched in the editor's settings file.
pub const EDITOR_THEME_KEY: &str = "workbench.colorTheme";

/// Editor theme applied in dark mode.
pub const EDITOR_DARK_THEME: &str = "Default Dark Modern";

/// Editor theme applied in light mode.
pub const EDITOR_LIGHT_THEME: &str = "Default Light Modern";

/// Editor settings file, relative to the home directory.
pub const EDITOR_SETTINGS_RELATIVE: &str = "Library/Application Support/Code/User/settings.json";

/// Font applied to every Terminal tab.
pub const DEFAULT_TERMINAL_FONT: &str = "SF Mono Regular";

/// Font size applied to every Terminal tab.
pub const DEFAULT_TERMINAL_FONT_SIZE: u32 = 13;

// === Hotkey ===

/// Human-readable hotkey that toggles the panel.
pub const TOGGLE_HOTKEY_LABEL: &str = "Option + Space";

/// Shortcut reminders shown in the panel: (keys, description key for `tr_key`).
pub const SHORTCUTS: &[(&str, &str)] = &[
    (TOGGLE_HOTKEY_LABEL, "Open/close this panel"),
    ("Ctrl + 1-4", "Switch to desktop 1-4"),
    ("Ctrl + Left/Right", "Previous/next desktop"),
    ("F11", "Show desktop"),
    ("Ctrl + Up", "Mission Control"),
];

// === Environment ===

/// Panel language override (`en` or `es`).
pub const ENV_LANG: &str = "DESKTOP_CONTROL_LANG";

/// Editor settings path override.
pub const ENV_EDITOR_SETTINGS: &str = "DESKTOP_CONTROL_EDITOR_SETTINGS";

/// Terminal font name override.
pub const ENV_TERMINAL_FONT: &str = "DESKTOP_CONTROL_TERMINAL_FONT";

/// Terminal font size override.
pub const ENV_TERMINAL_FONT_SIZE: &str = "DESKTOP_CONTROL_TERMINAL_FONT_SIZE";

/// Log specification override (flexi_logger syntax).
pub const ENV_LOG: &str = "DESKTOP_CONTROL_LOG";

// === Languages ===

/// Language code for English.
pub const LANG_EN: i32 = 0;

/// Language code for Spanish.
pub const LANG_ES: i32 = 1;
