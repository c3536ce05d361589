//! FFI bindings for macOS frameworks.
//!
//! - bridge.rs: objc2 runtime helpers (`id`, `msg_send!`, ivars)
//! - carbon.rs: Carbon Event Manager (global hotkey)
//! - iokit.rs: IOKit display parameters (brightness)
//! - coreaudio.rs: CoreAudio hardware properties (volume, mute)

pub mod bridge;
pub mod carbon;
pub mod coreaudio;
pub mod iokit;

pub use carbon::*;
