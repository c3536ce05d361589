//! Tests for the model layer (levels and PanelState).

use desktop_control::model::constants::*;
use desktop_control::model::{AppearanceMode, BrightnessLevel, PanelState, VolumeLevel};

// === Levels ===

#[test]
fn levels_clamp_on_construction() {
    assert_eq!(BrightnessLevel::new(1.2).value(), 1.0);
    assert_eq!(BrightnessLevel::new(-0.1).value(), 0.0);
    assert_eq!(VolumeLevel::new(3.0).value(), 1.0);
    assert_eq!(VolumeLevel::from(-5.0).value(), 0.0);
}

#[test]
fn levels_keep_in_range_values() {
    assert_eq!(BrightnessLevel::from(0.3).value(), 0.3);
    assert_eq!(VolumeLevel::new(0.7).value(), 0.7);
}

#[test]
fn only_positive_volume_is_audible() {
    assert!(!VolumeLevel::new(0.0).is_audible());
    assert!(!VolumeLevel::new(-1.0).is_audible());
    assert!(VolumeLevel::new(0.01).is_audible());
}

#[test]
fn appearance_from_dark_flag() {
    assert_eq!(AppearanceMode::from_dark(true), AppearanceMode::Dark);
    assert_eq!(AppearanceMode::from_dark(false), AppearanceMode::Light);
    assert!(AppearanceMode::Dark.is_dark());
    assert_eq!(AppearanceMode::default(), AppearanceMode::Light);
}

// === PanelState ===

#[test]
fn panel_state_defaults() {
    let state = PanelState::default();
    assert_eq!(state.brightness.value(), DEFAULT_BRIGHTNESS);
    assert_eq!(state.volume.value(), DEFAULT_VOLUME);
    assert!(!state.muted);
    assert_eq!(state.appearance, AppearanceMode::Light);
}

#[test]
fn merge_replaces_read_values() {
    let mut state = PanelState::default();
    state.merge_readings(
        Some(BrightnessLevel::new(0.2)),
        Some(VolumeLevel::new(0.9)),
        Some(true),
    );
    assert_eq!(state.brightness, BrightnessLevel::new(0.2));
    assert_eq!(state.volume, VolumeLevel::new(0.9));
    assert!(state.muted);
}

#[test]
fn merge_keeps_previous_values_for_failed_reads() {
    let mut state = PanelState::default();
    state.merge_readings(
        Some(BrightnessLevel::new(0.2)),
        Some(VolumeLevel::new(0.9)),
        Some(true),
    );

    state.merge_readings(None, None, None);

    assert_eq!(state.brightness, BrightnessLevel::new(0.2));
    assert_eq!(state.volume, VolumeLevel::new(0.9));
    assert!(state.muted);
}

#[test]
fn merge_never_touches_appearance() {
    let mut state = PanelState {
        appearance: AppearanceMode::Dark,
        ..PanelState::default()
    };
    state.merge_readings(Some(BrightnessLevel::new(1.0)), None, None);
    assert_eq!(state.appearance, AppearanceMode::Dark);
}

#[test]
fn labels_are_percentages() {
    let state = PanelState {
        brightness: BrightnessLevel::new(0.25),
        volume: VolumeLevel::new(1.0),
        ..PanelState::default()
    };
    assert_eq!(state.brightness_label(), "25%");
    assert_eq!(state.volume_label(), "100%");
}

// === Constants ===

#[test]
fn panel_geometry() {
    assert_eq!(PANEL_WIDTH, 320.0);
    assert_eq!(PANEL_HEIGHT, 440.0);
}

#[test]
fn shortcut_list_starts_with_panel_hotkey() {
    assert_eq!(SHORTCUTS[0].0, TOGGLE_HOTKEY_LABEL);
    assert_eq!(SHORTCUTS.len(), 5);
}
