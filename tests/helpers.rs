use desktop_control::{clamp, format_percent, tr_key};

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(0.4, 0.0, 1.0), 0.4);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

#[test]
fn clamp_maps_nan_to_low_bound() {
    assert_eq!(clamp(f32::NAN, 0.0, 1.0), 0.0);
}

#[test]
fn percent_of_bounds() {
    assert_eq!(format_percent(0.0), "0%");
    assert_eq!(format_percent(1.0), "100%");
}

#[test]
fn percent_truncates() {
    assert_eq!(format_percent(0.5), "50%");
    assert_eq!(format_percent(0.259), "25%");
}

#[test]
fn percent_clamps_out_of_range() {
    assert_eq!(format_percent(1.5), "100%");
    assert_eq!(format_percent(-0.2), "0%");
}

#[test]
fn tr_key_basic_es() {
    assert_eq!(tr_key("Brightness", true), "Brillo");
    assert_eq!(tr_key("Volume", true), "Volumen");
    assert_eq!(tr_key("Shortcuts", true), "Atajos");
    assert_eq!(tr_key("Quit", true), "Salir");
}

#[test]
fn tr_key_basic_en() {
    assert_eq!(tr_key("Brightness", false), "Brightness");
    assert_eq!(tr_key("Dark", false), "Dark");
}

#[test]
fn tr_key_mute_toggle_labels() {
    assert_eq!(tr_key("Mute", true), "Silenciar");
    assert_eq!(tr_key("Unmute", false), "Unmute");
}

#[test]
fn tr_key_unknown_falls_back_to_key() {
    assert_eq!(tr_key("Mission Control", true), "Mission Control");
    assert_eq!(tr_key("Unknown", false), "Unknown");
}
