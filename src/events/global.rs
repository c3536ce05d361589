//! Global access to the application event bus.
//!
//! The bus must be initialized once at application startup via
//! `init_event_bus()`. Objective-C callbacks and the Carbon hotkey handler
//! have no Rust context to carry a publisher, so they publish through here.
//!
//! - `Sender` is stored in `OnceLock`, it is `Send + Sync`
//! - `Receiver` is stored in `Mutex`, only the main thread drains it

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use log::warn;

use super::bus::EventPublisher;
use super::types::AppEvent;

static SENDER: OnceLock<Sender<AppEvent>> = OnceLock::new();

static RECEIVER: OnceLock<Mutex<Receiver<AppEvent>>> = OnceLock::new();

/// Initialize the global event bus.
///
/// Must be called exactly once at application startup, before any events
/// are published.
///
/// # Panics
///
/// Panics if the event bus has already been initialized.
pub fn init_event_bus() {
    let (sender, receiver) = mpsc::channel();

    SENDER
        .set(sender)
        .expect("Event bus already initialized (sender)");

    RECEIVER
        .set(Mutex::new(receiver))
        .expect("Event bus already initialized (receiver)");
}

/// Get a publisher handle for the global event bus.
///
/// Returns `None` before `init_event_bus()`.
pub fn publisher() -> Option<EventPublisher> {
    SENDER
        .get()
        .map(|sender| EventPublisher::from_sender(sender.clone()))
}

/// Publish an event to the global event bus.
///
/// Events published before initialization are dropped with a warning; this
/// is called from FFI callbacks that must not panic.
pub fn publish(event: AppEvent) {
    match SENDER.get() {
        Some(sender) => {
            let _ = sender.send(event);
        }
        None => warn!("Event bus not initialized, dropping {:?}", event),
    }
}

/// Drain all pending events from the global event bus.
///
/// Returns an empty list before initialization or if the receiver mutex is
/// poisoned.
pub fn drain_events() -> Vec<AppEvent> {
    let Some(receiver) = RECEIVER.get() else {
        return Vec::new();
    };
    let Ok(receiver) = receiver.lock() else {
        return Vec::new();
    };

    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}
