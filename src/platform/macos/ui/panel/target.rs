//! The panel's Objective-C target object.
//!
//! One `DesktopControlTarget` instance owns every widget reference, the
//! Carbon hotkey refs and the dispatch timer. Controls send their actions to
//! it; each action publishes an [`AppEvent`] and the dispatch timer does the
//! rest on the next tick.

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};
use objc2::sel;

use crate::events::{publish, AppEvent};
use crate::model::{AppearanceMode, BrightnessLevel, VolumeLevel};
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, ObjectExt};
use crate::platform::macos::handlers::dispatch_events;

/// Widget and resource ivars, all `id` and initialised to nil.
const OBJECT_IVARS: &[&std::ffi::CStr] = &[
    c"_window",
    c"_statusItem",
    c"_dispatchTimer",
    c"_btnLight",
    c"_btnDark",
    c"_sliderBrightness",
    c"_labelBrightness",
    c"_sliderVolume",
    c"_labelVolume",
    c"_btnMute",
];

/// Create the target, registering its class on first use.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn create_target(lang: i32) -> id {
    let class_name = c"DesktopControlTarget";
    let target_class = if let Some(cls) = AnyClass::get(class_name) {
        cls
    } else {
        let superclass = AnyClass::get(c"NSObject").expect("NSObject is always registered");
        let mut builder =
            ClassBuilder::new(class_name, superclass).expect("class name is unregistered");

        // ====== Instance Variables ======
        register_ivars(&mut builder);

        // ====== Methods ======
        register_methods(&mut builder);

        builder.register()
    };

    let target: id = msg_send![target_class, new];
    initialize_ivars(target, lang);
    target
}

unsafe fn register_ivars(builder: &mut ClassBuilder) {
    for name in OBJECT_IVARS {
        builder.add_ivar::<id>(name);
    }
    builder.add_ivar::<i32>(c"_lang"); // 0=en, 1=es

    // Carbon refs
    builder.add_ivar::<*mut std::ffi::c_void>(c"_hkHandler");
    builder.add_ivar::<*mut std::ffi::c_void>(c"_hkToggle");
}

unsafe fn register_methods(builder: &mut ClassBuilder) {
    builder.add_method(
        sel!(togglePanel:),
        toggle_panel as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(selectLight:),
        select_light as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(selectDark:),
        select_dark as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(brightnessChanged:),
        brightness_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(volumeChanged:),
        volume_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(toggleMute:),
        toggle_mute as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(quitApp:),
        quit_app as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(dispatchTick:),
        dispatch_tick as unsafe extern "C-unwind" fn(_, _, _),
    );
}

unsafe fn initialize_ivars(target: id, lang: i32) {
    for name in OBJECT_IVARS {
        let name = name.to_str().unwrap_or_default();
        (*target).store_ivar::<id>(name, nil);
    }
    (*target).store_ivar::<i32>("_lang", lang);
    (*target).store_ivar::<*mut std::ffi::c_void>("_hkHandler", std::ptr::null_mut());
    (*target).store_ivar::<*mut std::ffi::c_void>("_hkToggle", std::ptr::null_mut());
}

/// Whether the panel language is Spanish.
///
/// # Safety
/// `target` must be a `DesktopControlTarget`.
pub unsafe fn lang_is_es(target: id) -> bool {
    *(*target).load_ivar::<i32>("_lang") == crate::model::LANG_ES
}

// ============================================================================
// Actions
// ============================================================================

unsafe extern "C-unwind" fn toggle_panel(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::TogglePanel);
}

unsafe extern "C-unwind" fn select_light(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::SetAppearance(AppearanceMode::Light));
}

unsafe extern "C-unwind" fn select_dark(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::SetAppearance(AppearanceMode::Dark));
}

unsafe extern "C-unwind" fn brightness_changed(_this: &mut AnyObject, _cmd: Sel, sender: id) {
    let value: f64 = msg_send![sender, doubleValue];
    publish(AppEvent::SetBrightness(BrightnessLevel::new(value as f32)));
}

unsafe extern "C-unwind" fn volume_changed(_this: &mut AnyObject, _cmd: Sel, sender: id) {
    let value: f64 = msg_send![sender, doubleValue];
    publish(AppEvent::SetVolume(VolumeLevel::new(value as f32)));
}

unsafe extern "C-unwind" fn toggle_mute(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::ToggleMute);
}

unsafe extern "C-unwind" fn quit_app(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::Quit);
}

unsafe extern "C-unwind" fn dispatch_tick(this: &mut AnyObject, _cmd: Sel, _timer: id) {
    dispatch_events(this as *mut AnyObject);
}
