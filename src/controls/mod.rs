//! Facades over the OS facilities the panel controls.
//!
//! Each facade is a thin, sequential wrapper that swallows failures and logs
//! them. The OS-specific backends implement the traits defined here and live
//! in `platform::macos::devices`.
//!
//! - brightness.rs: two interfaces with a fixed fallback order
//! - volume.rs: default output device volume and mute
//! - appearance.rs: light/dark propagated to OS, Terminal and editor
//! - script.rs: AppleScript snippets and the `osascript` runner
//! - editor.rs: editor settings file patching

pub mod appearance;
pub mod brightness;
pub mod editor;
pub mod script;
pub mod volume;

pub use appearance::{AppearanceController, SyncReport};
pub use brightness::{BrightnessController, BrightnessInterface};
pub use editor::EditorSettings;
pub use script::{OsaScript, ScriptRunner, TerminalStyle};
pub use volume::{OutputDevice, VolumeController};
