//! FFI bindings for CoreAudio hardware properties.

use std::ffi::c_void;

// === Types ===

pub type AudioObjectId = u32;
pub type OsStatus = i32;

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct AudioObjectPropertyAddress {
    pub selector: u32,
    pub scope: u32,
    pub element: u32,
}

// === Constants ===

pub const NO_ERR: OsStatus = 0;
pub const K_AUDIO_OBJECT_UNKNOWN: AudioObjectId = 0;
pub const K_AUDIO_OBJECT_SYSTEM_OBJECT: AudioObjectId = 1;

pub const K_AUDIO_HARDWARE_PROPERTY_DEFAULT_OUTPUT_DEVICE: u32 = 0x644F_7574; // 'dOut'
pub const K_AUDIO_DEVICE_PROPERTY_MUTE: u32 = 0x6D75_7465; // 'mute'
/// `kAudioHardwareServiceDeviceProperty_VirtualMainVolume`, an AudioToolbox
/// selector CoreAudio answers on the output scope.
pub const K_AUDIO_DEVICE_PROPERTY_VIRTUAL_MAIN_VOLUME: u32 = 0x766D_7663; // 'vmvc'

pub const K_AUDIO_OBJECT_PROPERTY_SCOPE_GLOBAL: u32 = 0x676C_6F62; // 'glob'
pub const K_AUDIO_DEVICE_PROPERTY_SCOPE_OUTPUT: u32 = 0x6F75_7470; // 'outp'
pub const K_AUDIO_OBJECT_PROPERTY_ELEMENT_MAIN: u32 = 0;

// === FFI Declarations ===

#[link(name = "CoreAudio", kind = "framework")]
extern "C" {
    pub fn AudioObjectGetPropertyData(
        inObjectID: AudioObjectId,
        inAddress: *const AudioObjectPropertyAddress,
        inQualifierDataSize: u32,
        inQualifierData: *const c_void,
        ioDataSize: *mut u32,
        outData: *mut c_void,
    ) -> OsStatus;

    pub fn AudioObjectSetPropertyData(
        inObjectID: AudioObjectId,
        inAddress: *const AudioObjectPropertyAddress,
        inQualifierDataSize: u32,
        inQualifierData: *const c_void,
        inDataSize: u32,
        inData: *const c_void,
    ) -> OsStatus;
}

/// Read a fixed-size property.
///
/// # Safety
/// `T` must match the property's data layout.
pub unsafe fn get_property<T: Copy + Default>(
    object: AudioObjectId,
    address: &AudioObjectPropertyAddress,
) -> Result<T, OsStatus> {
    let mut value = T::default();
    let mut size = std::mem::size_of::<T>() as u32;
    let status = AudioObjectGetPropertyData(
        object,
        address,
        0,
        std::ptr::null(),
        &mut size,
        &mut value as *mut T as *mut c_void,
    );
    if status == NO_ERR {
        Ok(value)
    } else {
        Err(status)
    }
}

/// Write a fixed-size property.
///
/// # Safety
/// `T` must match the property's data layout.
pub unsafe fn set_property<T: Copy>(
    object: AudioObjectId,
    address: &AudioObjectPropertyAddress,
    value: T,
) -> Result<(), OsStatus> {
    let status = AudioObjectSetPropertyData(
        object,
        address,
        0,
        std::ptr::null(),
        std::mem::size_of::<T>() as u32,
        &value as *const T as *const c_void,
    );
    if status == NO_ERR {
        Ok(())
    } else {
        Err(status)
    }
}
