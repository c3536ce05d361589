//! Event handlers and dispatching.
//!
//! This module contains the event dispatcher that applies events from the
//! event bus to the control facades and the panel.

pub mod dispatcher;

pub use dispatcher::{Dispatcher, PanelSurface};
