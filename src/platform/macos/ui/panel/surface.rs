//! [`PanelSurface`] over the AppKit panel window.

use crate::handlers::PanelSurface;
use crate::model::PanelState;
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, nsstring, NSApp, ObjectExt, YES};
use crate::platform::macos::ui::panel::target::lang_is_es;
use crate::tr_key;

/// The panel window held by a `DesktopControlTarget`.
pub struct MacPanel {
    target: id,
}

impl MacPanel {
    /// # Safety
    /// `target` must be a `DesktopControlTarget` whose panel was built.
    pub unsafe fn new(target: id) -> Self {
        Self { target }
    }

    fn widget(&self, name: &str) -> id {
        unsafe { *(*self.target).load_ivar::<id>(name) }
    }

    fn set_text(&self, name: &str, text: &str) {
        let widget = self.widget(name);
        if widget != nil {
            unsafe {
                let _: () = msg_send![widget, setStringValue: &*nsstring(text)];
            }
        }
    }

    fn set_slider(&self, name: &str, value: f32) {
        let slider = self.widget(name);
        if slider != nil {
            unsafe {
                let _: () = msg_send![slider, setDoubleValue: value as f64];
            }
        }
    }

    fn set_on(&self, name: &str, on: bool) {
        let button = self.widget(name);
        if button != nil {
            unsafe {
                let _: () = msg_send![button, setState: i64::from(on)];
            }
        }
    }
}

impl PanelSurface for MacPanel {
    fn is_visible(&self) -> bool {
        let window = self.widget("_window");
        window != nil && unsafe { msg_send![window, isVisible] }
    }

    fn show(&mut self, state: &PanelState) {
        self.render(state);
        let window = self.widget("_window");
        if window == nil {
            return;
        }
        unsafe {
            let _: () = msg_send![window, center];
            let _: () = msg_send![NSApp(), activateIgnoringOtherApps: YES];
            let _: () = msg_send![window, makeKeyAndOrderFront: nil];
        }
    }

    fn hide(&mut self) {
        let window = self.widget("_window");
        if window != nil {
            unsafe {
                let _: () = msg_send![window, orderOut: nil];
            }
        }
    }

    fn render(&mut self, state: &PanelState) {
        let es = unsafe { lang_is_es(self.target) };

        self.set_slider("_sliderBrightness", state.brightness.value());
        self.set_text("_labelBrightness", &state.brightness_label());
        self.set_slider("_sliderVolume", state.volume.value());
        self.set_text("_labelVolume", &state.volume_label());

        let mute_title = tr_key(if state.muted { "Unmute" } else { "Mute" }, es);
        let btn_mute = self.widget("_btnMute");
        if btn_mute != nil {
            unsafe {
                let _: () = msg_send![btn_mute, setTitle: &*nsstring(&mute_title)];
            }
        }

        self.set_on("_btnLight", !state.appearance.is_dark());
        self.set_on("_btnDark", state.appearance.is_dark());
    }

    fn terminate(&mut self) {
        unsafe {
            let _: () = msg_send![NSApp(), terminate: nil];
        }
    }
}
