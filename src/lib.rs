#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Core of the desktop control panel.
//!
//! Everything outside `platform` is free of macOS FFI so tests can run as
//! normal integration tests on any host.

pub mod config;
pub mod controls;
pub mod error;
pub mod events;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod platform;

use std::borrow::Cow;

// Re-export model types for convenience
pub use model::{AppearanceMode, BrightnessLevel, PanelState, VolumeLevel};

// Re-export event types for convenience
pub use events::{AppEvent, EventBus, EventPublisher};

pub use error::ControlError;

/// Clamp a value to [lo, hi]. NaN collapses to `lo`.
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    if v.is_nan() || v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Render a fractional level as a whole percentage, truncating (`0.999` → `99%`).
pub fn format_percent(level: f32) -> String {
    let pct = (clamp(level, 0.0, 1.0) * 100.0) as u32;
    format!("{}%", pct)
}

/// Very small localisation helper used by the panel.
pub fn tr_key(key: &str, es: bool) -> Cow<'static, str> {
    match (key, es) {
        ("Desktop Control", _) => Cow::Borrowed("Desktop Control"),

        ("Light", true) => Cow::Borrowed("Claro"),
        ("Light", false) => Cow::Borrowed("Light"),

        ("Dark", true) => Cow::Borrowed("Oscuro"),
        ("Dark", false) => Cow::Borrowed("Dark"),

        ("Brightness", true) => Cow::Borrowed("Brillo"),
        ("Brightness", false) => Cow::Borrowed("Brightness"),

        ("Volume", true) => Cow::Borrowed("Volumen"),
        ("Volume", false) => Cow::Borrowed("Volume"),

        ("Mute", true) => Cow::Borrowed("Silenciar"),
        ("Mute", false) => Cow::Borrowed("Mute"),

        ("Unmute", true) => Cow::Borrowed("Activar sonido"),
        ("Unmute", false) => Cow::Borrowed("Unmute"),

        ("Shortcuts", true) => Cow::Borrowed("Atajos"),
        ("Shortcuts", false) => Cow::Borrowed("Shortcuts"),

        ("Quit", true) => Cow::Borrowed("Salir"),
        ("Quit", false) => Cow::Borrowed("Quit"),

        // Shortcut reminders
        ("Open/close this panel", true) => Cow::Borrowed("Abrir/cerrar este panel"),
        ("Open/close this panel", false) => Cow::Borrowed("Open/close this panel"),

        ("Switch to desktop 1-4", true) => Cow::Borrowed("Cambiar a escritorio 1-4"),
        ("Switch to desktop 1-4", false) => Cow::Borrowed("Switch to desktop 1-4"),

        ("Previous/next desktop", true) => Cow::Borrowed("Escritorio anterior/siguiente"),
        ("Previous/next desktop", false) => Cow::Borrowed("Previous/next desktop"),

        ("Show desktop", true) => Cow::Borrowed("Mostrar escritorio"),
        ("Show desktop", false) => Cow::Borrowed("Show desktop"),

        _ => Cow::Owned(key.to_string()),
    }
}
