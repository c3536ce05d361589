//! Application domain model.
//!
//! This module contains the controlled values, the panel state and the
//! configuration constants. No FFI dependencies.
//!
//! Hardware access lives in `controls` (facades) and `platform::macos`
//! (backends).

pub mod constants;
pub mod levels;
pub mod panel_state;

pub use constants::*;
pub use levels::{AppearanceMode, BrightnessLevel, VolumeLevel};
pub use panel_state::PanelState;
