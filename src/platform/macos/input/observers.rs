//! Application and panel window observers.

use block2::RcBlock;

use crate::events::{publish, AppEvent};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil};
use crate::platform::macos::input::hotkeys::uninstall_hotkey;

/// Release the Carbon hotkey when the application terminates.
///
/// # Safety
/// - `target` must be a valid, non-null pointer to the panel target.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn install_termination_observer(target: id) {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];

    let block = RcBlock::new(move |_note: id| unsafe {
        uninstall_hotkey(target);
    });

    let name: id = msg_send![
        get_class("NSString"),
        stringWithUTF8String: c"NSApplicationWillTerminateNotification".as_ptr()
    ];
    let _: id =
        msg_send![center, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
}

/// Re-read brightness and volume whenever the panel window becomes key, so
/// changes made elsewhere while it sat open show up when the user returns.
///
/// # Safety
/// - `window` must be a valid, non-null pointer to the panel window.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn install_panel_key_observer(window: id) {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];

    let block = RcBlock::new(move |_note: id| {
        publish(AppEvent::RefreshLevels);
    });

    let name: id = msg_send![
        get_class("NSString"),
        stringWithUTF8String: c"NSWindowDidBecomeKeyNotification".as_ptr()
    ];
    let _: id = msg_send![
        center,
        addObserverForName: name,
        object: window,
        queue: nil,
        usingBlock: &*block
    ];
}
