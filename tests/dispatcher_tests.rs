//! Tests for the dispatcher, with fakes standing in for the OS and panel.

mod common;

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use desktop_control::controls::{
    AppearanceController, BrightnessController, EditorSettings, TerminalStyle, VolumeController,
};
use desktop_control::handlers::Dispatcher;
use desktop_control::{
    AppEvent, AppearanceMode, BrightnessLevel, ControlError, EventBus, PanelState, VolumeLevel,
};
use tempfile::TempDir;

use common::{call_log, CallLog, FakeDisplay, FakeOutput, FakePanel, FakeScripts};

const WORKER_TIMEOUT: Duration = Duration::from_secs(5);

struct Harness {
    dispatcher: Dispatcher,
    bus: EventBus,
    panel: FakePanel,
    scripts: Arc<FakeScripts>,
    volume: Rc<Cell<Option<f32>>>,
    muted: Rc<Cell<Option<bool>>>,
    log: CallLog,
    _dir: TempDir,
}

fn harness(brightness: Option<f32>, scripts: Arc<FakeScripts>) -> Harness {
    let log = call_log();
    let dir = tempfile::tempdir().unwrap();
    let bus = EventBus::new();

    let brightness_ctl = BrightnessController::new(
        Box::new(FakeDisplay::new("IOKit", brightness, false, &log)),
        Box::new(FakeDisplay::new("DisplayServices", None, false, &log)),
    );
    let output = FakeOutput::new(Some(0.8), Some(false), &log);
    let volume = output.volume.clone();
    let muted = output.muted.clone();
    let appearance = AppearanceController::new(
        scripts.clone(),
        EditorSettings::new(dir.path().join("settings.json")),
        TerminalStyle {
            font_name: "Menlo".to_string(),
            font_size: 12,
        },
    );

    Harness {
        dispatcher: Dispatcher::new(
            brightness_ctl,
            VolumeController::new(Some(Box::new(output))),
            appearance,
            bus.publisher(),
        ),
        bus,
        panel: FakePanel::default(),
        scripts,
        volume,
        muted,
        log,
        _dir: dir,
    }
}

impl Harness {
    fn dispatch(&mut self, event: AppEvent) {
        self.dispatcher.dispatch(event, &mut self.panel);
    }

    fn rendered(&self) -> &PanelState {
        self.panel.last_rendered.as_ref().expect("panel was rendered")
    }
}

#[test]
fn toggle_shows_then_hides() {
    let mut h = harness(Some(0.25), FakeScripts::silent());

    h.dispatch(AppEvent::TogglePanel);
    assert!(h.panel.visible);
    assert_eq!(h.panel.shown, 1);
    assert_eq!(h.rendered().brightness, BrightnessLevel::new(0.25));
    assert_eq!(h.rendered().volume, VolumeLevel::new(0.8));

    h.dispatch(AppEvent::TogglePanel);
    assert!(!h.panel.visible);
    assert_eq!(h.panel.hidden, 1);
}

#[test]
fn showing_the_panel_rereads_levels() {
    let mut h = harness(None, FakeScripts::silent());
    h.volume.set(Some(0.1));

    h.dispatch(AppEvent::TogglePanel);

    assert_eq!(h.rendered().volume, VolumeLevel::new(0.1));
}

#[test]
fn refresh_picks_up_changes_made_while_panel_is_open() {
    let mut h = harness(None, FakeScripts::silent());
    h.dispatch(AppEvent::TogglePanel);

    h.volume.set(Some(0.3));
    h.muted.set(Some(true));
    h.dispatch(AppEvent::RefreshLevels);

    assert_eq!(h.rendered().volume, VolumeLevel::new(0.3));
    assert!(h.rendered().muted);
    assert!(h.panel.visible);
    assert_eq!(h.panel.shown, 1);
}

#[test]
fn refresh_keeps_previous_values_on_read_failure() {
    let mut h = harness(None, FakeScripts::silent());

    h.dispatch(AppEvent::RefreshLevels);
    assert_eq!(h.rendered().brightness, PanelState::default().brightness);
    assert_eq!(h.rendered().volume, VolumeLevel::new(0.8));

    h.volume.set(None);
    h.muted.set(None);
    h.dispatch(AppEvent::RefreshLevels);
    assert_eq!(h.rendered().volume, VolumeLevel::new(0.8));
    assert!(!h.rendered().muted);
}

#[test]
fn set_brightness_records_requested_level_even_when_unwritable() {
    let mut h = harness(None, FakeScripts::silent());

    h.dispatch(AppEvent::SetBrightness(BrightnessLevel::new(0.75)));

    assert_eq!(h.dispatcher.state().brightness, BrightnessLevel::new(0.75));
    assert_eq!(h.rendered().brightness_label(), "75%");
    assert_eq!(
        h.log.borrow().as_slice(),
        ["DisplayServices.write(0.75)", "IOKit.write(0.75)"]
    );
}

#[test]
fn audible_volume_clears_mute_in_panel() {
    let mut h = harness(None, FakeScripts::silent());
    h.muted.set(Some(true));
    h.dispatch(AppEvent::RefreshLevels);
    assert!(h.rendered().muted);

    h.dispatch(AppEvent::SetVolume(VolumeLevel::new(0.4)));

    assert!(!h.rendered().muted);
    assert_eq!(h.rendered().volume, VolumeLevel::new(0.4));
    assert_eq!(h.muted.get(), Some(false));
}

#[test]
fn toggle_mute_records_resulting_state() {
    let mut h = harness(None, FakeScripts::silent());

    h.dispatch(AppEvent::ToggleMute);
    assert!(h.rendered().muted);
    h.dispatch(AppEvent::ToggleMute);
    assert!(!h.rendered().muted);
}

#[test]
fn appearance_result_arrives_through_the_bus() {
    let mut h = harness(None, FakeScripts::silent());

    h.dispatch(AppEvent::SetAppearance(AppearanceMode::Dark));
    assert_eq!(h.dispatcher.state().appearance, AppearanceMode::Light);

    let result = h.bus.recv_timeout(WORKER_TIMEOUT);
    assert_eq!(result, Some(AppEvent::AppearanceChanged(AppearanceMode::Dark)));
    assert_eq!(h.scripts.scripts().len(), 2);

    h.dispatcher.dispatch_all(result, &mut h.panel);
    assert_eq!(h.rendered().appearance, AppearanceMode::Dark);
}

#[test]
fn appearance_result_is_published_even_when_steps_fail() {
    let scripts = FakeScripts::answering([
        Err(ControlError::script("denied")),
        Err(ControlError::script("denied")),
    ]);
    let mut h = harness(None, scripts);

    h.dispatch(AppEvent::SetAppearance(AppearanceMode::Light));

    assert_eq!(
        h.bus.recv_timeout(WORKER_TIMEOUT),
        Some(AppEvent::AppearanceChanged(AppearanceMode::Light))
    );
}

#[test]
fn start_reads_levels_and_detects_appearance() {
    let scripts = FakeScripts::answering([Ok("true".to_string())]);
    let mut h = harness(Some(0.9), scripts);

    h.dispatcher.start();

    assert_eq!(h.dispatcher.state().brightness, BrightnessLevel::new(0.9));
    assert_eq!(
        h.bus.recv_timeout(WORKER_TIMEOUT),
        Some(AppEvent::AppearanceChanged(AppearanceMode::Dark))
    );
}

#[test]
fn start_publishes_nothing_when_detection_fails() {
    let scripts = FakeScripts::answering([Ok("maybe".to_string())]);
    let mut h = harness(None, scripts);

    h.dispatcher.start();

    assert_eq!(h.bus.recv_timeout(Duration::from_millis(200)), None);
}

#[test]
fn quit_terminates_the_panel() {
    let mut h = harness(None, FakeScripts::silent());

    h.dispatch(AppEvent::Quit);

    assert!(h.panel.terminated);
}
