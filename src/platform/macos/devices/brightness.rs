//! Brightness backends for the main display.

use core_graphics::display::CGDisplay;
use libloading::{Library, Symbol};
use log::debug;
use objc2_core_foundation::CFString;

use crate::controls::BrightnessInterface;
use crate::error::ControlError;
use crate::platform::macos::ffi::iokit::{
    matching_services, IODisplayGetFloatParameter, IODisplaySetFloatParameter, IO_DISPLAY_CONNECT,
    K_IO_DISPLAY_BRIGHTNESS_KEY, K_IO_RETURN_SUCCESS,
};

const DISPLAY_SERVICES_PATH: &str =
    "/System/Library/PrivateFrameworks/DisplayServices.framework/DisplayServices";

type GetBrightnessFn = unsafe extern "C" fn(display: u32, brightness: *mut f32) -> i32;
type SetBrightnessFn = unsafe extern "C" fn(display: u32, brightness: f32) -> i32;

// ============================================================================
// IOKit
// ============================================================================

/// `IODisplayConnect` services' `brightness` parameter.
pub struct IoKitBrightness;

impl BrightnessInterface for IoKitBrightness {
    fn name(&self) -> &'static str {
        "IOKit"
    }

    /// The last service reporting a positive value wins.
    fn read(&self) -> Result<f32, ControlError> {
        let key = CFString::from_str(K_IO_DISPLAY_BRIGHTNESS_KEY);
        let services = unsafe { matching_services(IO_DISPLAY_CONNECT) }
            .map_err(|code| ControlError::Status { interface: "IOKit", code })?;

        let mut found = None;
        for service in &services {
            let mut value: f32 = 0.0;
            let status = unsafe {
                IODisplayGetFloatParameter(service.raw(), 0, &*key, &mut value)
            };
            if status == K_IO_RETURN_SUCCESS && value > 0.0 {
                found = Some(value);
            }
        }
        found.ok_or(ControlError::Unavailable { interface: "IOKit" })
    }

    /// Succeeds when at least one service accepts the value.
    fn write(&self, value: f32) -> Result<(), ControlError> {
        let key = CFString::from_str(K_IO_DISPLAY_BRIGHTNESS_KEY);
        let services = unsafe { matching_services(IO_DISPLAY_CONNECT) }
            .map_err(|code| ControlError::Status { interface: "IOKit", code })?;

        let mut accepted = false;
        for service in &services {
            let status = unsafe { IODisplaySetFloatParameter(service.raw(), 0, &*key, value) };
            if status == K_IO_RETURN_SUCCESS {
                accepted = true;
            } else {
                debug!("IOKit service {} rejected brightness: {}", service.raw(), status);
            }
        }
        if accepted {
            Ok(())
        } else {
            Err(ControlError::Unavailable { interface: "IOKit" })
        }
    }
}

// ============================================================================
// DisplayServices
// ============================================================================

struct DisplayServicesApi {
    get: GetBrightnessFn,
    set: SetBrightnessFn,
    // Keeps the function pointers valid.
    _library: Library,
}

impl DisplayServicesApi {
    fn open(path: &str) -> Result<Self, libloading::Error> {
        // SAFETY: the framework has no initialisers with preconditions.
        let library = unsafe { Library::new(path) }?;
        let (get, set) = {
            // SAFETY: signatures match the framework's exported functions.
            let get: Symbol<GetBrightnessFn> =
                unsafe { library.get(b"DisplayServicesGetBrightness\0") }?;
            let set: Symbol<SetBrightnessFn> =
                unsafe { library.get(b"DisplayServicesSetBrightness\0") }?;
            (*get, *set)
        };
        Ok(Self {
            get,
            set,
            _library: library,
        })
    }
}

/// The private DisplayServices framework, loaded at runtime.
pub struct DisplayServicesBrightness {
    api: Option<DisplayServicesApi>,
}

impl DisplayServicesBrightness {
    /// Load the system framework.
    pub fn load() -> Self {
        Self::from_path(DISPLAY_SERVICES_PATH)
    }

    /// Load the framework at `path`; a missing library or symbol leaves the
    /// interface permanently unavailable.
    pub fn from_path(path: &str) -> Self {
        let api = match DisplayServicesApi::open(path) {
            Ok(api) => Some(api),
            Err(err) => {
                debug!("DisplayServices not available: {}", err);
                None
            }
        };
        Self { api }
    }

    pub fn is_loaded(&self) -> bool {
        self.api.is_some()
    }

    fn api(&self) -> Result<&DisplayServicesApi, ControlError> {
        self.api.as_ref().ok_or(ControlError::Unavailable {
            interface: "DisplayServices",
        })
    }
}

impl BrightnessInterface for DisplayServicesBrightness {
    fn name(&self) -> &'static str {
        "DisplayServices"
    }

    fn read(&self) -> Result<f32, ControlError> {
        let api = self.api()?;
        let mut value: f32 = 0.0;
        let code = unsafe { (api.get)(CGDisplay::main().id, &mut value) };
        ControlError::check("DisplayServices", code)?;
        Ok(value)
    }

    fn write(&self, value: f32) -> Result<(), ControlError> {
        let api = self.api()?;
        let code = unsafe { (api.set)(CGDisplay::main().id, value) };
        ControlError::check("DisplayServices", code)
    }
}
