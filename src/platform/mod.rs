//! Platform-specific implementations.
//!
//! Only macOS is supported; everything above this module is portable and
//! tested without AppKit.

#[cfg(target_os = "macos")]
pub mod macos;
