//! macOS-specific implementation using Cocoa/AppKit via objc2.
//!
//! This module contains all macOS-specific code:
//! - FFI bindings to Carbon, IOKit, CoreAudio and the objc2 runtime
//! - Device backends behind the control facades
//! - UI components (status item, floating panel)
//! - Input handling (Carbon hotkey, termination observer)

pub mod devices;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod ui;

// Re-export commonly used items
pub use ffi::bridge;
pub use handlers::*;
pub use ui::*;
