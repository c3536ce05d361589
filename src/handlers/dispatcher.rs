//! Event dispatcher for handling application events.
//!
//! The dispatcher receives events from the event bus and executes the
//! corresponding actions on the facades. It runs on the main thread, called
//! from the dispatch timer, and processes all pending events in batch.
//!
//! # Architecture
//!
//! ```text
//! EventBus::drain() → Dispatcher::dispatch_all() → facades + PanelSurface
//!                              │
//!                              └─ appearance worker ─► EventBus (AppearanceChanged)
//! ```
//!
//! The panel itself is behind [`PanelSurface`], so this module has no FFI.

use std::thread;

use log::{debug, error, info};

use crate::controls::{AppearanceController, BrightnessController, VolumeController};
use crate::events::{AppEvent, EventPublisher};
use crate::model::{AppearanceMode, PanelState};

/// The on-screen panel as seen by the dispatcher.
pub trait PanelSurface {
    fn is_visible(&self) -> bool;

    /// Make the panel visible, rendering `state`.
    fn show(&mut self, state: &PanelState);

    fn hide(&mut self);

    /// Re-render `state` without changing visibility.
    fn render(&mut self, state: &PanelState);

    /// Leave the application.
    fn terminate(&mut self);
}

/// Owns the facades and the panel state.
pub struct Dispatcher {
    brightness: BrightnessController,
    volume: VolumeController,
    appearance: AppearanceController,
    publisher: EventPublisher,
    state: PanelState,
}

impl Dispatcher {
    pub fn new(
        brightness: BrightnessController,
        volume: VolumeController,
        appearance: AppearanceController,
        publisher: EventPublisher,
    ) -> Self {
        Self {
            brightness,
            volume,
            appearance,
            publisher,
            state: PanelState::default(),
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Read the initial levels and start detecting the appearance.
    pub fn start(&mut self) {
        self.refresh_levels();
        self.spawn_appearance_detection();
    }

    /// Dispatch a batch of events in order.
    pub fn dispatch_all<I>(&mut self, events: I, surface: &mut dyn PanelSurface)
    where
        I: IntoIterator<Item = AppEvent>,
    {
        for event in events {
            self.dispatch(event, surface);
        }
    }

    /// Dispatch a single event.
    pub fn dispatch(&mut self, event: AppEvent, surface: &mut dyn PanelSurface) {
        debug!("Dispatching: {}", event.description());

        match event {
            AppEvent::TogglePanel => {
                if surface.is_visible() {
                    surface.hide();
                } else {
                    self.refresh_levels();
                    surface.show(&self.state);
                }
            }

            AppEvent::RefreshLevels => {
                self.refresh_levels();
                surface.render(&self.state);
            }

            AppEvent::SetBrightness(level) => {
                match self.brightness.write(level) {
                    Some(interface) => debug!("Brightness set via {}", interface),
                    None => debug!("No brightness interface accepted {:?}", level),
                }
                self.state.brightness = level;
                surface.render(&self.state);
            }

            AppEvent::SetVolume(level) => {
                self.volume.set_volume(level);
                self.state.volume = level;
                self.state.muted = self.volume.is_muted();
                surface.render(&self.state);
            }

            AppEvent::ToggleMute => {
                self.volume.toggle_mute();
                self.state.muted = self.volume.is_muted();
                surface.render(&self.state);
            }

            AppEvent::SetAppearance(mode) => self.spawn_appearance_sync(mode),

            AppEvent::AppearanceChanged(mode) => {
                self.state.appearance = mode;
                surface.render(&self.state);
            }

            AppEvent::Quit => {
                info!("Quit requested");
                surface.terminate();
            }
        }
    }

    fn refresh_levels(&mut self) {
        let brightness = self.brightness.read();
        let volume = self.volume.read_volume();
        let muted = self.volume.read_mute();
        self.state.merge_readings(brightness, volume, muted);
    }

    fn spawn_appearance_sync(&self, mode: AppearanceMode) {
        let appearance = self.appearance.clone();
        let publisher = self.publisher.clone();
        let spawned = thread::Builder::new()
            .name("appearance-sync".into())
            .spawn(move || {
                let report = appearance.set_mode(mode);
                if report.is_complete() {
                    info!("Appearance switched to {:?}", mode);
                }
                publisher.publish(AppEvent::AppearanceChanged(mode));
            });
        if let Err(err) = spawned {
            error!("Failed to start appearance worker: {}", err);
        }
    }

    fn spawn_appearance_detection(&self) {
        let appearance = self.appearance.clone();
        let publisher = self.publisher.clone();
        let spawned = thread::Builder::new()
            .name("appearance-detect".into())
            .spawn(move || {
                if let Some(mode) = appearance.current_mode() {
                    publisher.publish(AppEvent::AppearanceChanged(mode));
                }
            });
        if let Err(err) = spawned {
            error!("Failed to start appearance detection: {}", err);
        }
    }
}
