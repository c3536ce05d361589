//! Panel state (pure Rust, no FFI).
//!
//! What the panel displays. The OS owns the real values; this only keeps the
//! last one read or set.

use super::constants::*;
use super::levels::{AppearanceMode, BrightnessLevel, VolumeLevel};

/// Values rendered by the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    /// Main display brightness.
    pub brightness: BrightnessLevel,
    /// Default output device volume.
    pub volume: VolumeLevel,
    /// Default output device mute flag.
    pub muted: bool,
    /// System appearance.
    pub appearance: AppearanceMode,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            brightness: BrightnessLevel::new(DEFAULT_BRIGHTNESS),
            volume: VolumeLevel::new(DEFAULT_VOLUME),
            muted: false,
            appearance: AppearanceMode::Light,
        }
    }
}

impl PanelState {
    /// Merge freshly read values, keeping the previous ones for anything that
    /// could not be read.
    pub fn merge_readings(
        &mut self,
        brightness: Option<BrightnessLevel>,
        volume: Option<VolumeLevel>,
        muted: Option<bool>,
    ) {
        if let Some(b) = brightness {
            self.brightness = b;
        }
        if let Some(v) = volume {
            self.volume = v;
        }
        if let Some(m) = muted {
            self.muted = m;
        }
    }

    /// Percent label for the brightness slider.
    pub fn brightness_label(&self) -> String {
        crate::format_percent(self.brightness.value())
    }

    /// Percent label for the volume slider.
    pub fn volume_label(&self) -> String {
        crate::format_percent(self.volume.value())
    }
}
