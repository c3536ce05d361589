//! Input handling module.
//!
//! - hotkeys.rs: Carbon registration of the Option+Space panel hotkey
//! - observers.rs: termination observer releasing the hotkey, and the
//!   panel key-window observer requesting a level refresh

pub mod hotkeys;
pub mod observers;

pub use hotkeys::{install_hotkey, uninstall_hotkey};
pub use observers::{install_panel_key_observer, install_termination_observer};
