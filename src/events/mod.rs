//! Event system for decoupled inter-module communication.
//!
//! A simple publish/subscribe mechanism over `std::sync::mpsc`. It carries
//! UI actions from AppKit callbacks and results from background workers to
//! the main thread.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │   Hotkey    │     │ Panel/Status│     │ Appearance worker│
//! │  (Carbon)   │     │   (AppKit)  │     │    (thread)      │
//! └──────┬──────┘     └──────┬──────┘     └────────┬─────────┘
//!        │ publish()         │ publish()           │ publish()
//!        ▼                   ▼                     ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! │                   (mpsc channel)                    │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ drain()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    Dispatcher                       │
//! │             (main thread, NSTimer tick)             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types
//! - [`global`]: Static access functions

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher};
pub use types::AppEvent;
