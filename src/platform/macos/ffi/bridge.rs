//! Thin helpers over the objc2 runtime.
//!
//! The panel is built with untyped `msg_send!` calls on `id` pointers, the
//! same way throughout the macOS layer. This module gathers the aliases and
//! helpers those calls share.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

// ============================================================================
// Core objc2 re-exports
// ============================================================================

pub use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
pub use objc2::{msg_send, sel, ClassType};

/// Objective-C object pointer.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C `YES`.
pub const YES: Bool = Bool::YES;

/// Objective-C `NO`.
pub const NO: Bool = Bool::NO;

// ============================================================================
// Foundation / AppKit
// ============================================================================

pub use objc2_app_kit::NSApplication;
pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

pub use objc2::rc::Retained;

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString from a Rust string slice.
///
/// Pass `&*s` to `msg_send!`; the string is released when dropped.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Get an AppKit/Foundation class by name, panicking if not found.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = std::ffi::CString::new(name).expect("Invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

/// Build an `NSRect` from origin and size.
#[inline]
pub fn rect(x: f64, y: f64, w: f64, h: f64) -> NSRect {
    NSRect::new(NSPoint::new(x, y), NSSize::new(w, h))
}

// ============================================================================
// Object trait extensions for ivar access
// ============================================================================

use objc2::encode::Encode;

/// Instance variable access on objects of classes declared with
/// `ClassBuilder`.
pub trait ObjectExt {
    /// Load a reference to an instance variable.
    ///
    /// # Safety
    /// - The ivar must exist and be of type T
    /// - Must be called from the main thread for UI objects
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// Store a value in an instance variable.
    ///
    /// # Safety
    /// - The ivar must exist and be of type T
    /// - Must be called from the main thread for UI objects
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let cls = self.class();
        let c_name = std::ffi::CString::new(name).expect("Invalid ivar name");
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let cls = self.class();
        let c_name = std::ffi::CString::new(name).expect("Invalid ivar name");
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}

// ============================================================================
// NSAutoreleasePool replacement
// ============================================================================

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
