//! Carbon hotkey management.
//!
//! Option+Space toggles the panel from anywhere. The hotkey and handler
//! references live in the panel target's ivars so they can be released on
//! termination.

use log::{debug, warn};

use crate::events::{publish, AppEvent};
use crate::platform::macos::ffi::bridge::{id, ObjectExt};
use crate::platform::macos::ffi::{
    EventHandlerCallRef, EventHandlerRef, EventHotKeyID, EventHotKeyRef, EventRef, EventTypeSpec,
    GetApplicationEventTarget, GetEventClass, GetEventKind, GetEventParameter, InstallEventHandler,
    RegisterEventHotKey, RemoveEventHandler, UnregisterEventHotKey, HKID_TOGGLE_PANEL, KC_SPACE,
    K_EVENT_CLASS_KEYBOARD, K_EVENT_HOTKEY_PRESSED, K_EVENT_PARAM_DIRECT_OBJECT, NO_ERR,
    OPTION_KEY, SIG_DTCP, TYPE_EVENT_HOTKEY_ID,
};

/// Ivar holding the registered hotkey reference.
pub const IVAR_HOTKEY: &str = "_hkToggle";

/// Ivar holding the installed Carbon handler reference.
pub const IVAR_HANDLER: &str = "_hkHandler";

/// Install the Carbon handler and register Option+Space.
///
/// A failed registration is logged; the status item still toggles the panel.
///
/// # Safety
/// Must be called from main thread. `target` must carry the hotkey ivars.
pub unsafe fn install_hotkey(target: id) {
    let types = [EventTypeSpec {
        event_class: K_EVENT_CLASS_KEYBOARD,
        event_kind: K_EVENT_HOTKEY_PRESSED,
    }];
    let mut handler_ref: EventHandlerRef = std::ptr::null_mut();
    let status = InstallEventHandler(
        GetApplicationEventTarget(),
        hotkey_event_handler,
        types.len() as u32,
        types.as_ptr(),
        target as *mut std::ffi::c_void,
        &mut handler_ref,
    );
    if status != NO_ERR {
        warn!("InstallEventHandler failed: {}", status);
        return;
    }
    (*target).store_ivar::<*mut std::ffi::c_void>(IVAR_HANDLER, handler_ref);

    let hk_id = EventHotKeyID {
        signature: SIG_DTCP,
        id: HKID_TOGGLE_PANEL,
    };
    let mut hotkey_ref: EventHotKeyRef = std::ptr::null_mut();
    let status = RegisterEventHotKey(
        KC_SPACE,
        OPTION_KEY,
        hk_id,
        GetApplicationEventTarget(),
        0,
        &mut hotkey_ref,
    );
    if status != NO_ERR || hotkey_ref.is_null() {
        warn!("RegisterEventHotKey failed for Option+Space: {}", status);
        return;
    }
    (*target).store_ivar::<*mut std::ffi::c_void>(IVAR_HOTKEY, hotkey_ref);
    debug!("Registered Option+Space hotkey");
}

/// Unregister the hotkey and remove the handler. Safe to call twice.
///
/// # Safety
/// Must be called from main thread. `target` must carry the hotkey ivars.
pub unsafe fn uninstall_hotkey(target: id) {
    let hotkey: *mut std::ffi::c_void = *(*target).load_ivar(IVAR_HOTKEY);
    let handler: *mut std::ffi::c_void = *(*target).load_ivar(IVAR_HANDLER);

    if !hotkey.is_null() {
        let _ = UnregisterEventHotKey(hotkey);
        (*target).store_ivar::<*mut std::ffi::c_void>(IVAR_HOTKEY, std::ptr::null_mut());
    }
    if !handler.is_null() {
        let _ = RemoveEventHandler(handler);
        (*target).store_ivar::<*mut std::ffi::c_void>(IVAR_HANDLER, std::ptr::null_mut());
    }
}

/// Carbon event handler for hotkey events.
///
/// Publishes `TogglePanel`; the dispatch timer picks it up on the next tick.
///
/// # Safety
/// Called by Carbon runtime. Must not panic.
pub extern "C" fn hotkey_event_handler(
    _call_ref: EventHandlerCallRef,
    event: EventRef,
    _user_data: *mut std::ffi::c_void,
) -> i32 {
    unsafe {
        if GetEventClass(event) == K_EVENT_CLASS_KEYBOARD
            && GetEventKind(event) == K_EVENT_HOTKEY_PRESSED
        {
            let mut hot_id = EventHotKeyID {
                signature: 0,
                id: 0,
            };
            let status = GetEventParameter(
                event,
                K_EVENT_PARAM_DIRECT_OBJECT,
                TYPE_EVENT_HOTKEY_ID,
                std::ptr::null_mut(),
                std::mem::size_of::<EventHotKeyID>() as u32,
                std::ptr::null_mut(),
                &mut hot_id as *mut _ as *mut std::ffi::c_void,
            );
            if status == NO_ERR && hot_id.signature == SIG_DTCP && hot_id.id == HKID_TOGGLE_PANEL
            {
                publish(AppEvent::TogglePanel);
            }
        }
        NO_ERR
    }
}
