//! Status bar (menu bar) item.
//!
//! A square item showing the `square.grid.2x2` symbol; clicking it toggles
//! the panel.

use objc2::sel;

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring, ObjectExt, YES};

const SYMBOL_NAME: &str = "square.grid.2x2";
const FALLBACK_TITLE: &str = "DC";

/// Install the status bar item and keep it alive on `target`.
///
/// # Safety
/// Must be called from main thread, after the app is initialized. `target`
/// must be a `DesktopControlTarget`.
pub unsafe fn install_status_item(target: id) {
    let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];

    // NSSquareStatusItemLength = -2.0
    let status_item: id = msg_send![status_bar, statusItemWithLength: -2.0f64];

    // Keep a strong reference so it doesn't get deallocated
    let _: id = msg_send![status_item, retain];
    (*target).store_ivar::<id>("_statusItem", status_item);

    let button: id = msg_send![status_item, button];
    if button == nil {
        return;
    }

    let name = nsstring(SYMBOL_NAME);
    let icon: id = msg_send![
        get_class("NSImage"),
        imageWithSystemSymbolName: &*name,
        accessibilityDescription: &*name
    ];
    if icon != nil {
        // Template so it adapts to light/dark menu bars
        let _: () = msg_send![icon, setTemplate: YES];
        let _: () = msg_send![button, setImage: icon];
    } else {
        let _: () = msg_send![button, setTitle: &*nsstring(FALLBACK_TITLE)];
    }

    let _: () = msg_send![button, setTarget: target];
    let _: () = msg_send![button, setAction: sel!(togglePanel:)];
}
