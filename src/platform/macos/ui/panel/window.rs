//! Panel window construction.
//!
//! Layout, top to bottom: title, Light/Dark buttons, brightness row, volume
//! row with the mute toggle, shortcut reminders, Quit.

use objc2::sel;

use crate::model::{PANEL_HEIGHT, PANEL_WIDTH, SHORTCUTS};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring, rect, ObjectExt, Sel, NO, YES,
};
use crate::platform::macos::ui::panel::target::lang_is_es;
use crate::tr_key;

const MARGIN: f64 = 20.0;
const ROW_WIDTH: f64 = PANEL_WIDTH - 2.0 * MARGIN;

// NSWindowStyleMaskTitled (1) | NSWindowStyleMaskFullSizeContentView (1 << 15)
const STYLE_MASK: u64 = 1 | (1 << 15);
// NSFloatingWindowLevel
const FLOATING_LEVEL: i64 = 3;
// CanJoinAllSpaces (1) + FullScreenAuxiliary (256)
const COLLECTION_BEHAVIOR: u64 = 1 | 256;
// NSButtonTypePushOnPushOff
const BUTTON_TYPE_TOGGLE: u64 = 1;
// NSTextAlignmentRight
const ALIGN_RIGHT: i64 = 2;

/// Non-interactive text label.
unsafe fn mk_label(x: f64, y: f64, w: f64, text: &str) -> id {
    let lbl: id = msg_send![get_class("NSTextField"), alloc];
    let lbl: id = msg_send![lbl, initWithFrame: rect(x, y, w, 20.0)];
    let _: () = msg_send![lbl, setBezeled: NO];
    let _: () = msg_send![lbl, setDrawsBackground: NO];
    let _: () = msg_send![lbl, setEditable: NO];
    let _: () = msg_send![lbl, setSelectable: NO];
    let _: () = msg_send![lbl, setStringValue: &*nsstring(text)];
    lbl
}

unsafe fn mk_button(x: f64, y: f64, w: f64, title: &str, target: id, action: Sel) -> id {
    let btn: id = msg_send![get_class("NSButton"), alloc];
    let btn: id = msg_send![btn, initWithFrame: rect(x, y, w, 32.0)];
    // NSBezelStyleRounded
    let _: () = msg_send![btn, setBezelStyle: 1u64];
    let _: () = msg_send![btn, setTitle: &*nsstring(title)];
    let _: () = msg_send![btn, setTarget: target];
    let _: () = msg_send![btn, setAction: action];
    btn
}

unsafe fn mk_slider(x: f64, y: f64, w: f64, target: id, action: Sel) -> id {
    let slider: id = msg_send![get_class("NSSlider"), alloc];
    let slider: id = msg_send![slider, initWithFrame: rect(x, y, w, 24.0)];
    let _: () = msg_send![slider, setMinValue: 0.0f64];
    let _: () = msg_send![slider, setMaxValue: 1.0f64];
    let _: () = msg_send![slider, setDoubleValue: 0.5f64];
    let _: () = msg_send![slider, setTarget: target];
    let _: () = msg_send![slider, setAction: action];
    let _: () = msg_send![slider, setContinuous: YES];
    slider
}

/// Build the (hidden) panel window and store its widgets on `target`.
///
/// # Safety
/// Must be called from the main thread. `target` must be a
/// `DesktopControlTarget`.
pub unsafe fn build_panel(target: id) {
    let es = lang_is_es(target);
    let w = PANEL_WIDTH;
    let h = PANEL_HEIGHT;

    let window: id = msg_send![get_class("NSWindow"), alloc];
    let window: id = msg_send![
        window,
        initWithContentRect: rect(0.0, 0.0, w, h),
        styleMask: STYLE_MASK,
        backing: 2u64,  // NSBackingStoreBuffered
        defer: NO
    ];
    let _: () = msg_send![window, setReleasedWhenClosed: NO];
    let _: () = msg_send![window, setTitlebarAppearsTransparent: YES];
    // NSWindowTitleHidden
    let _: () = msg_send![window, setTitleVisibility: 1i64];
    for button_kind in 0u64..3 {
        let button: id = msg_send![window, standardWindowButton: button_kind];
        if button != nil {
            let _: () = msg_send![button, setHidden: YES];
        }
    }
    let _: () = msg_send![window, setMovableByWindowBackground: YES];
    let _: () = msg_send![window, setLevel: FLOATING_LEVEL];
    let _: () = msg_send![window, setCollectionBehavior: COLLECTION_BEHAVIOR];
    let _: () = msg_send![window, center];

    let content: id = msg_send![window, contentView];
    let add = |view: id| {
        let _: () = msg_send![content, addSubview: view];
    };

    // Title
    let title = mk_label(
        MARGIN,
        h - 44.0,
        ROW_WIDTH,
        tr_key("Desktop Control", es).as_ref(),
    );
    let bold: id = msg_send![get_class("NSFont"), boldSystemFontOfSize: 15.0f64];
    let _: () = msg_send![title, setFont: bold];
    add(title);

    // Appearance
    let half = (ROW_WIDTH - 10.0) / 2.0;
    let btn_light = mk_button(
        MARGIN,
        h - 92.0,
        half,
        tr_key("Light", es).as_ref(),
        target,
        sel!(selectLight:),
    );
    let btn_dark = mk_button(
        MARGIN + half + 10.0,
        h - 92.0,
        half,
        tr_key("Dark", es).as_ref(),
        target,
        sel!(selectDark:),
    );
    let _: () = msg_send![btn_light, setButtonType: BUTTON_TYPE_TOGGLE];
    let _: () = msg_send![btn_dark, setButtonType: BUTTON_TYPE_TOGGLE];
    add(btn_light);
    add(btn_dark);

    // Brightness
    add(mk_label(MARGIN, h - 125.0, 180.0, tr_key("Brightness", es).as_ref()));
    let label_brightness = mk_label(w - MARGIN - 60.0, h - 125.0, 60.0, "50%");
    let _: () = msg_send![label_brightness, setAlignment: ALIGN_RIGHT];
    let slider_brightness =
        mk_slider(MARGIN, h - 152.0, ROW_WIDTH, target, sel!(brightnessChanged:));
    add(label_brightness);
    add(slider_brightness);

    // Volume + mute
    add(mk_label(MARGIN, h - 185.0, 180.0, tr_key("Volume", es).as_ref()));
    let label_volume = mk_label(w - MARGIN - 60.0, h - 185.0, 60.0, "50%");
    let _: () = msg_send![label_volume, setAlignment: ALIGN_RIGHT];
    let slider_volume = mk_slider(
        MARGIN,
        h - 212.0,
        ROW_WIDTH - 110.0,
        target,
        sel!(volumeChanged:),
    );
    let btn_mute = mk_button(
        w - MARGIN - 100.0,
        h - 218.0,
        100.0,
        tr_key("Mute", es).as_ref(),
        target,
        sel!(toggleMute:),
    );
    add(label_volume);
    add(slider_volume);
    add(btn_mute);

    // Shortcut reminders
    add(mk_label(MARGIN, h - 252.0, ROW_WIDTH, tr_key("Shortcuts", es).as_ref()));
    let small: id = msg_send![get_class("NSFont"), systemFontOfSize: 11.0f64];
    for (i, (keys, description)) in SHORTCUTS.iter().enumerate() {
        let y = h - 276.0 - 20.0 * i as f64;
        let keys_label = mk_label(MARGIN, y, 120.0, keys);
        let desc_label = mk_label(
            MARGIN + 125.0,
            y,
            ROW_WIDTH - 125.0,
            tr_key(description, es).as_ref(),
        );
        let _: () = msg_send![keys_label, setFont: small];
        let _: () = msg_send![desc_label, setFont: small];
        add(keys_label);
        add(desc_label);
    }

    // Quit
    add(mk_button(
        MARGIN,
        MARGIN,
        ROW_WIDTH,
        tr_key("Quit", es).as_ref(),
        target,
        sel!(quitApp:),
    ));

    (*target).store_ivar::<id>("_window", window);
    (*target).store_ivar::<id>("_btnLight", btn_light);
    (*target).store_ivar::<id>("_btnDark", btn_dark);
    (*target).store_ivar::<id>("_labelBrightness", label_brightness);
    (*target).store_ivar::<id>("_sliderBrightness", slider_brightness);
    (*target).store_ivar::<id>("_labelVolume", label_volume);
    (*target).store_ivar::<id>("_sliderVolume", slider_volume);
    (*target).store_ivar::<id>("_btnMute", btn_mute);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_is_titled_with_full_size_content() {
        assert_ne!(STYLE_MASK & 1, 0);
        assert_ne!(STYLE_MASK & (1 << 15), 0);
        assert_eq!(FLOATING_LEVEL, 3);
    }
}
