//! The floating control panel.
//!
//! - target.rs: `DesktopControlTarget` class (ivars, control actions, timer tick)
//! - window.rs: window and widget construction
//! - surface.rs: `MacPanel`, the dispatcher's view of the window

pub mod surface;
pub mod target;
pub mod window;

pub use surface::MacPanel;
pub use target::{create_target, lang_is_es};
pub use window::build_panel;
