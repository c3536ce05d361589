//! AppKit user interface.
//!
//! - status_bar.rs: menu bar item
//! - panel/: the floating control panel

pub mod panel;
pub mod status_bar;

pub use panel::{build_panel, create_target, MacPanel};
pub use status_bar::install_status_item;
