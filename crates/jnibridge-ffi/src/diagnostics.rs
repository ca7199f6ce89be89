//! Status codes, the per-thread last error, and logging setup.

#![allow(non_snake_case)]

use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;

use jni_sys::jint;
use jnibridge_runtime::BridgeError;
use tracing_subscriber::{EnvFilter, fmt};

// ── Status codes ──────────────────────────────────────────────────────────────
//
// Failures the runtime reports keep the runtime's own (negative) JNI status.
// Failures of this layer use codes below the JNI range.

pub const OK: jint = 0;
pub const LOAD_FAILED: jint = -100;
pub const SYMBOL_MISSING: jint = -101;
pub const INVALID_ARGUMENT: jint = -102;
pub const CONFIG_FAILED: jint = -103;
pub const DESTROYED: jint = -104;
pub const MISSING_FUNCTION: jint = -105;

pub const LOG_ENV_VAR: &str = "JNIBRIDGE_LOG";

pub fn status_code(err: &BridgeError) -> jint {
    if let Some(status) = err.runtime_status() {
        return status;
    }
    match err {
        BridgeError::Load { .. } => LOAD_FAILED,
        BridgeError::Symbol { .. } => SYMBOL_MISSING,
        BridgeError::Config { .. } => CONFIG_FAILED,
        BridgeError::Destroyed => DESTROYED,
        BridgeError::MissingFunction(_) => MISSING_FUNCTION,
        _ => INVALID_ARGUMENT,
    }
}

thread_local! {
    static LAST_ERROR: RefCell<CString> = RefCell::new(CString::default());
}

/// Log `err`, make it the calling thread's last error, and return its code.
pub fn fail(err: &BridgeError) -> jint {
    tracing::error!("Error: {err}");
    record(err);
    status_code(err)
}

pub fn record(err: &BridgeError) {
    let message = CString::new(err.to_string().replace('\0', " ")).unwrap_or_default();
    let _ = LAST_ERROR.try_with(|slot| *slot.borrow_mut() = message);
}

/// The calling thread's last error message; empty if none was recorded.
pub fn last_error() -> String {
    LAST_ERROR.with(|slot| slot.borrow().to_string_lossy().into_owned())
}

pub fn clear() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = CString::default());
}

/// Last error message recorded on the calling thread, null-terminated.
///
/// The pointer stays valid until the next failing call on the same thread.
#[unsafe(no_mangle)]
pub extern "C" fn GetError() -> *const c_char {
    LAST_ERROR.with(|slot| slot.borrow().as_ptr())
}

#[unsafe(no_mangle)]
pub extern "C" fn ClearError() {
    clear();
}

/// Install a stderr log subscriber filtered by `JNIBRIDGE_LOG`.
///
/// Does nothing if the host process already installed one.
#[unsafe(no_mangle)]
pub extern "C" fn InitLogging() {
    let installed = fmt()
        .with_env_filter(EnvFilter::from_env(LOG_ENV_VAR))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!("jnibridge logging initialized");
    }
}
