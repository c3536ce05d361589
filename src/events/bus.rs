//! Thread-safe event bus using mpsc channels.
//!
//! The bus provides a simple publish/subscribe mechanism where:
//! - Any thread can publish events via `EventPublisher::publish()`
//! - The main thread polls for events via `EventBus::drain()`

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use super::types::AppEvent;

/// Thread-safe event bus for application-wide event distribution.
///
/// Uses a multi-producer, single-consumer (mpsc) channel internally.
/// Background workers publish their results here and the main thread
/// receives them.
///
/// # Example
///
/// ```
/// use desktop_control::events::{EventBus, AppEvent};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::TogglePanel);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            // The bus owns a sender, so this only happens during teardown
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Block until an event arrives or `timeout` elapses.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<AppEvent> {
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Create a publisher from an existing sender.
    ///
    /// Used by the global access module to create publishers from the static sender.
    pub fn from_sender(sender: Sender<AppEvent>) -> Self {
        Self { sender }
    }

    /// Publish an event to the bus.
    ///
    /// Non-blocking. If the receiver has been dropped (app shutting down),
    /// the event is discarded.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AppearanceMode, VolumeLevel};

    #[test]
    fn test_create_bus() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_and_receive_multiple_events() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::TogglePanel);
        publisher.publish(AppEvent::SetVolume(VolumeLevel::new(0.2)));
        publisher.publish(AppEvent::Quit);

        let events = bus.drain();
        assert_eq!(
            events,
            vec![
                AppEvent::TogglePanel,
                AppEvent::SetVolume(VolumeLevel::new(0.2)),
                AppEvent::Quit
            ]
        );
    }

    #[test]
    fn test_drain_empties_queue() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::TogglePanel);
        publisher.publish(AppEvent::ToggleMute);

        assert_eq!(bus.drain().len(), 2);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_from_worker_thread() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        let handle = std::thread::spawn(move || {
            publisher.publish(AppEvent::AppearanceChanged(AppearanceMode::Dark));
        });
        handle.join().unwrap();

        assert_eq!(
            bus.recv_timeout(Duration::from_secs(1)),
            Some(AppEvent::AppearanceChanged(AppearanceMode::Dark))
        );
    }

    #[test]
    fn test_recv_timeout_returns_none_when_empty() {
        let bus = EventBus::new();
        assert!(bus.recv_timeout(Duration::from_millis(10)).is_none());
    }

    #[test]
    fn test_try_recv_returns_events_in_order() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::TogglePanel);
        publisher.publish(AppEvent::RefreshLevels);

        assert_eq!(bus.try_recv(), Some(AppEvent::TogglePanel));
        assert_eq!(bus.try_recv(), Some(AppEvent::RefreshLevels));
        assert_eq!(bus.try_recv(), None);
    }
}
