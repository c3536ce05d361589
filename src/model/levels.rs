//! Controlled values (pure Rust, no FFI).
//!
//! Levels clamp on construction, so anything holding a level can send it to
//! hardware as is.

use crate::clamp;

/// Display brightness in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BrightnessLevel(f32);

impl BrightnessLevel {
    pub fn new(value: f32) -> Self {
        Self(clamp(value, 0.0, 1.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for BrightnessLevel {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

/// Output volume in [0.0, 1.0]. Mute is tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct VolumeLevel(f32);

impl VolumeLevel {
    pub fn new(value: f32) -> Self {
        Self(clamp(value, 0.0, 1.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// True for any audible level.
    pub fn is_audible(self) -> bool {
        self.0 > 0.0
    }
}

impl From<f32> for VolumeLevel {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

/// System appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppearanceMode {
    #[default]
    Light,
    Dark,
}

impl AppearanceMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// AppleScript boolean literal for this mode.
    pub fn as_script_bool(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }
}
