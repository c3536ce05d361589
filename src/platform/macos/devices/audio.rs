//! CoreAudio default output device.

use crate::controls::OutputDevice;
use crate::error::ControlError;
use crate::platform::macos::ffi::coreaudio::{
    get_property, set_property, AudioObjectId, AudioObjectPropertyAddress,
    K_AUDIO_DEVICE_PROPERTY_MUTE, K_AUDIO_DEVICE_PROPERTY_SCOPE_OUTPUT,
    K_AUDIO_DEVICE_PROPERTY_VIRTUAL_MAIN_VOLUME, K_AUDIO_HARDWARE_PROPERTY_DEFAULT_OUTPUT_DEVICE,
    K_AUDIO_OBJECT_PROPERTY_ELEMENT_MAIN, K_AUDIO_OBJECT_PROPERTY_SCOPE_GLOBAL,
    K_AUDIO_OBJECT_SYSTEM_OBJECT, K_AUDIO_OBJECT_UNKNOWN,
};

const INTERFACE: &str = "CoreAudio";

const VOLUME: AudioObjectPropertyAddress = AudioObjectPropertyAddress {
    selector: K_AUDIO_DEVICE_PROPERTY_VIRTUAL_MAIN_VOLUME,
    scope: K_AUDIO_DEVICE_PROPERTY_SCOPE_OUTPUT,
    element: K_AUDIO_OBJECT_PROPERTY_ELEMENT_MAIN,
};

const MUTE: AudioObjectPropertyAddress = AudioObjectPropertyAddress {
    selector: K_AUDIO_DEVICE_PROPERTY_MUTE,
    scope: K_AUDIO_DEVICE_PROPERTY_SCOPE_OUTPUT,
    element: K_AUDIO_OBJECT_PROPERTY_ELEMENT_MAIN,
};

/// The output device that was the system default at startup.
pub struct CoreAudioOutput {
    device: AudioObjectId,
}

impl CoreAudioOutput {
    /// Resolve the default output device, or `None` when there is none.
    pub fn default_output() -> Option<Self> {
        let address = AudioObjectPropertyAddress {
            selector: K_AUDIO_HARDWARE_PROPERTY_DEFAULT_OUTPUT_DEVICE,
            scope: K_AUDIO_OBJECT_PROPERTY_SCOPE_GLOBAL,
            element: K_AUDIO_OBJECT_PROPERTY_ELEMENT_MAIN,
        };
        let device: AudioObjectId =
            unsafe { get_property(K_AUDIO_OBJECT_SYSTEM_OBJECT, &address) }.ok()?;
        (device != K_AUDIO_OBJECT_UNKNOWN).then_some(Self { device })
    }
}

fn status(code: i32) -> ControlError {
    ControlError::Status {
        interface: INTERFACE,
        code,
    }
}

impl OutputDevice for CoreAudioOutput {
    fn volume(&self) -> Result<f32, ControlError> {
        unsafe { get_property::<f32>(self.device, &VOLUME) }.map_err(status)
    }

    fn set_volume(&self, value: f32) -> Result<(), ControlError> {
        unsafe { set_property(self.device, &VOLUME, value) }.map_err(status)
    }

    fn is_muted(&self) -> Result<bool, ControlError> {
        unsafe { get_property::<u32>(self.device, &MUTE) }
            .map(|flag| flag != 0)
            .map_err(status)
    }

    fn set_muted(&self, muted: bool) -> Result<(), ControlError> {
        unsafe { set_property(self.device, &MUTE, u32::from(muted)) }.map_err(status)
    }
}
