//! OS backends behind the control facades.
//!
//! - brightness.rs: IOKit display parameters and DisplayServices
//! - audio.rs: CoreAudio default output device

pub mod audio;
pub mod brightness;

pub use audio::CoreAudioOutput;
pub use brightness::{DisplayServicesBrightness, IoKitBrightness};

use crate::controls::{BrightnessController, OutputDevice, VolumeController};

/// Brightness facade wired to both display interfaces.
pub fn brightness_controller() -> BrightnessController {
    BrightnessController::new(
        Box::new(IoKitBrightness),
        Box::new(DisplayServicesBrightness::load()),
    )
}

/// Volume facade wired to the default output device, if any.
pub fn volume_controller() -> VolumeController {
    let device = CoreAudioOutput::default_output();
    if device.is_none() {
        log::warn!("No default output device; volume controls are inactive");
    }
    VolumeController::new(device.map(|d| Box::new(d) as Box<dyn OutputDevice>))
}
