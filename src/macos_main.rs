//! macOS-specific entry point and application loop.

use std::sync::Arc;

use log::{error, info};
use objc2::sel;

use desktop_control::config::Settings;
use desktop_control::controls::{AppearanceController, EditorSettings, OsaScript};
use desktop_control::events;
use desktop_control::handlers::Dispatcher;
use desktop_control::model::DISPATCH_INTERVAL_SECS;
use desktop_control::platform::macos::devices::{brightness_controller, volume_controller};
use desktop_control::platform::macos::ffi::bridge::{
    autoreleasepool, get_class, id, msg_send, nil, nsstring, NSApp, ObjectExt, YES,
};
use desktop_control::platform::macos::handlers::install_dispatcher;
use desktop_control::platform::macos::input::{
    install_hotkey, install_panel_key_observer, install_termination_observer,
};
use desktop_control::platform::macos::ui::{build_panel, create_target, install_status_item};

/// Main entry point for macOS.
pub fn run(settings: Settings) {
    // Event bus is already initialized by main()
    let Some(publisher) = events::publisher() else {
        error!("Event bus not initialized");
        return;
    };

    autoreleasepool(|| unsafe {
        let app = NSApp();
        // NSApplicationActivationPolicyAccessory = 1
        let _: bool = msg_send![app, setActivationPolicy: 1i64];

        let target = create_target(settings.lang);
        build_panel(target);
        install_panel_key_observer(*(*target).load_ivar::<id>("_window"));
        install_status_item(target);

        install_hotkey(target);
        install_termination_observer(target);

        let appearance = AppearanceController::new(
            Arc::new(OsaScript::default()),
            EditorSettings::new(settings.editor_settings_path.clone()),
            settings.terminal.clone(),
        );
        install_dispatcher(Dispatcher::new(
            brightness_controller(),
            volume_controller(),
            appearance,
            publisher,
        ));

        start_dispatch_timer(target);
        info!("Panel ready");

        let _: () = msg_send![app, run];
    });
}

/// Schedule the timer that drains the event bus, in common modes so it keeps
/// firing while menus are tracking.
///
/// # Safety
/// `target` must be the panel target.
unsafe fn start_dispatch_timer(target: id) {
    let timer: id = msg_send![
        get_class("NSTimer"),
        timerWithTimeInterval: DISPATCH_INTERVAL_SECS,
        target: target,
        selector: sel!(dispatchTick:),
        userInfo: nil,
        repeats: YES
    ];
    let run_loop: id = msg_send![get_class("NSRunLoop"), currentRunLoop];
    let common_modes = nsstring("kCFRunLoopCommonModes");
    let _: () = msg_send![run_loop, addTimer: timer, forMode: &*common_modes];

    (*target).store_ivar::<id>("_dispatchTimer", timer);
}
