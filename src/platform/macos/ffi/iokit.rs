//! FFI bindings for IOKit display parameters.
//!
//! Enough of IOKit to enumerate `IODisplayConnect` services and get/set their
//! `brightness` float parameter.

use std::ffi::{c_char, c_void};

use objc2_core_foundation::CFString;

// === Types ===

pub type IoObject = u32;
pub type IoIterator = u32;
pub type KernReturn = i32;

// === Constants ===

pub const K_IO_RETURN_SUCCESS: KernReturn = 0;

/// `kIOMainPortDefault` is `MACH_PORT_NULL`.
pub const K_IO_MAIN_PORT_DEFAULT: u32 = 0;

/// `kIODisplayBrightnessKey`.
pub const K_IO_DISPLAY_BRIGHTNESS_KEY: &str = "brightness";

/// Service class of display connections.
pub const IO_DISPLAY_CONNECT: &std::ffi::CStr = c"IODisplayConnect";

// === FFI Declarations ===

#[link(name = "IOKit", kind = "framework")]
extern "C" {
    /// Returns a +1 CFMutableDictionary consumed by `IOServiceGetMatchingServices`.
    pub fn IOServiceMatching(name: *const c_char) -> *mut c_void;

    pub fn IOServiceGetMatchingServices(
        mainPort: u32,
        matching: *mut c_void,
        existing: *mut IoIterator,
    ) -> KernReturn;

    pub fn IOIteratorNext(iterator: IoIterator) -> IoObject;

    pub fn IOObjectRelease(object: IoObject) -> KernReturn;

    pub fn IODisplayGetFloatParameter(
        service: IoObject,
        options: u32,
        parameterName: *const CFString,
        value: *mut f32,
    ) -> KernReturn;

    pub fn IODisplaySetFloatParameter(
        service: IoObject,
        options: u32,
        parameterName: *const CFString,
        value: f32,
    ) -> KernReturn;
}

/// Owned IOKit object reference, released on drop.
pub struct IoHandle(IoObject);

impl IoHandle {
    /// Wrap a reference; zero means "none".
    pub fn new(object: IoObject) -> Option<Self> {
        (object != 0).then_some(Self(object))
    }

    pub fn raw(&self) -> IoObject {
        self.0
    }
}

impl Drop for IoHandle {
    fn drop(&mut self) {
        unsafe {
            IOObjectRelease(self.0);
        }
    }
}

/// Every matching service of `class`, in registry order.
///
/// # Safety
/// Calls into IOKit; `class` must be a valid service class name.
pub unsafe fn matching_services(class: &std::ffi::CStr) -> Result<Vec<IoHandle>, KernReturn> {
    let matching = IOServiceMatching(class.as_ptr());
    let mut iterator: IoIterator = 0;
    let status = IOServiceGetMatchingServices(K_IO_MAIN_PORT_DEFAULT, matching, &mut iterator);
    if status != K_IO_RETURN_SUCCESS {
        return Err(status);
    }
    let Some(iterator) = IoHandle::new(iterator) else {
        return Ok(Vec::new());
    };

    let mut services = Vec::new();
    while let Some(service) = IoHandle::new(IOIteratorNext(iterator.raw())) {
        services.push(service);
    }
    Ok(services)
}
