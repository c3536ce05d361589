//! Main-thread event dispatch.
//!
//! The dispatch timer calls [`dispatch_events`] every tick; it drains the
//! global event bus into the [`Dispatcher`] with the panel window as its
//! surface.
//!
//! ```text
//! NSTimer → dispatch_events() → drain_events() → Dispatcher → MacPanel
//! ```

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};

use log::warn;

use crate::events::drain_events;
use crate::handlers::Dispatcher;
use crate::platform::macos::ffi::bridge::id;
use crate::platform::macos::ui::MacPanel;

/// Guard against re-entrant dispatch.
///
/// `NSApp terminate:` and window ordering can spin the run loop, which may
/// fire the timer again while a batch is still being processed.
static DISPATCH_GUARD: AtomicBool = AtomicBool::new(false);

thread_local! {
    static DISPATCHER: RefCell<Option<Dispatcher>> = const { RefCell::new(None) };
}

/// Hand the dispatcher to the main thread and run its start-up reads.
pub fn install_dispatcher(mut dispatcher: Dispatcher) {
    dispatcher.start();
    DISPATCHER.with(|slot| *slot.borrow_mut() = Some(dispatcher));
}

/// Dispatch all pending events from the global event bus.
///
/// # Safety
///
/// Must be called from the main thread. `target` must be the panel target.
pub unsafe fn dispatch_events(target: id) {
    if DISPATCH_GUARD
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        // Another dispatch is already running - skip this tick
        return;
    }

    let events = drain_events();
    if !events.is_empty() {
        let mut panel = MacPanel::new(target);
        DISPATCHER.with(|slot| match slot.try_borrow_mut() {
            Ok(mut slot) => match slot.as_mut() {
                Some(dispatcher) => dispatcher.dispatch_all(events, &mut panel),
                None => warn!("Dropping {} events: dispatcher not installed", events.len()),
            },
            Err(_) => warn!("Dispatcher busy; dropping {} events", events.len()),
        });
    }

    DISPATCH_GUARD.store(false, Ordering::SeqCst);
}
