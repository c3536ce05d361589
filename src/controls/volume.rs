//! Output volume and mute facade.
//!
//! A single hardware property interface on the default output device. There
//! is no fallback and no retry.

use log::debug;

use crate::error::ControlError;
use crate::model::VolumeLevel;

/// The default output device.
pub trait OutputDevice {
    fn volume(&self) -> Result<f32, ControlError>;

    fn set_volume(&self, value: f32) -> Result<(), ControlError>;

    fn is_muted(&self) -> Result<bool, ControlError>;

    fn set_muted(&self, muted: bool) -> Result<(), ControlError>;
}

/// Volume/mute control over the default output device.
///
/// When no device could be resolved at startup every operation is a no-op.
pub struct VolumeController {
    device: Option<Box<dyn OutputDevice>>,
    muted: bool,
}

impl VolumeController {
    pub fn new(device: Option<Box<dyn OutputDevice>>) -> Self {
        Self {
            device,
            muted: false,
        }
    }

    /// Last known mute state.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn read_volume(&self) -> Option<VolumeLevel> {
        let device = self.device.as_ref()?;
        match device.volume() {
            Ok(value) => Some(VolumeLevel::new(value)),
            Err(err) => {
                debug!("Volume read failed: {}", err);
                None
            }
        }
    }

    /// Read the mute flag and remember it.
    pub fn read_mute(&mut self) -> Option<bool> {
        let device = self.device.as_ref()?;
        match device.is_muted() {
            Ok(muted) => {
                self.muted = muted;
                Some(muted)
            }
            Err(err) => {
                debug!("Mute read failed: {}", err);
                None
            }
        }
    }

    /// Set the volume. An audible level clears mute.
    pub fn set_volume(&mut self, level: VolumeLevel) {
        let Some(device) = self.device.as_ref() else {
            return;
        };
        if let Err(err) = device.set_volume(level.value()) {
            debug!("Volume write failed: {}", err);
        }
        if level.is_audible() && self.muted {
            self.set_mute(false);
        }
    }

    /// Set the mute flag; the remembered state changes only on success.
    pub fn set_mute(&mut self, muted: bool) {
        let Some(device) = self.device.as_ref() else {
            return;
        };
        match device.set_muted(muted) {
            Ok(()) => self.muted = muted,
            Err(err) => debug!("Mute write failed: {}", err),
        }
    }

    pub fn toggle_mute(&mut self) {
        self.set_mute(!self.muted);
    }
}
