//! Application events for inter-module communication.
//!
//! These events represent panel actions and worker results. Producers are
//! the hotkey, the status item, the panel controls and background workers;
//! the dispatcher consumes them on the main thread.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

use crate::model::{AppearanceMode, BrightnessLevel, VolumeLevel};

/// Application-level events for decoupled communication between modules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    // === Input Events ===
    /// Show or hide the panel (Option+Space or status item click)
    TogglePanel,

    /// Re-read brightness, volume and mute from the OS
    RefreshLevels,

    /// Brightness slider moved
    SetBrightness(BrightnessLevel),

    /// Volume slider moved
    SetVolume(VolumeLevel),

    /// Speaker icon clicked
    ToggleMute,

    /// Light or Dark button clicked
    SetAppearance(AppearanceMode),

    /// Quit button clicked
    Quit,

    // === Worker Results ===
    /// A background worker finished applying or detecting the appearance
    AppearanceChanged(AppearanceMode),
}

impl AppEvent {
    /// Returns a human-readable description of the event for logging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::TogglePanel => "Toggle panel",
            AppEvent::RefreshLevels => "Refresh levels",
            AppEvent::SetBrightness(_) => "Set brightness",
            AppEvent::SetVolume(_) => "Set volume",
            AppEvent::ToggleMute => "Toggle mute",
            AppEvent::SetAppearance(_) => "Set appearance",
            AppEvent::Quit => "Quit",
            AppEvent::AppearanceChanged(_) => "Appearance changed",
        }
    }
}
