//! VM lifecycle and thread attachment entry points.

#![allow(non_snake_case)]

use std::ffi::CStr;
use std::os::raw::c_char;
use std::path::{Path, PathBuf};
use std::ptr;

use jni_sys::{JNIEnv, JavaVM, JavaVMOption, jint};
use jnibridge_runtime::{BridgeError, InitArgs, JniVersion, Runtime, RuntimeConfig};

use crate::diagnostics::{self, OK};
use crate::slot;

/// Start the process's VM from `library` (the platform default name when
/// `None`), or return the one already running.
pub fn start(library: Option<&Path>, args: &InitArgs) -> Result<&'static Runtime, BridgeError> {
    slot::get_or_create(|| match library {
        Some(path) => Runtime::create(path, args),
        None => Runtime::create_default(args),
    })
}

/// Start the process's VM as described by a config file.
pub fn start_from_config(path: &Path) -> Result<&'static Runtime, BridgeError> {
    let config = RuntimeConfig::from_file(path)?;
    let args = config.to_vm_options().to_init_args()?;
    start(config.library.as_deref(), &args)
}

/// The status of a create call when a VM is already installed. Arguments
/// are not looked at in that case.
fn already_created() -> Option<jint> {
    let runtime = slot::runtime()?;
    if runtime.is_destroyed() {
        return Some(diagnostics::fail(&BridgeError::Destroyed));
    }
    tracing::debug!("Java VM already running; create is a no-op");
    Some(OK)
}

fn status(result: Result<&'static Runtime, BridgeError>) -> jint {
    match result {
        Ok(_) => OK,
        Err(e) => diagnostics::fail(&e),
    }
}

/// # Safety
/// `s` must be null or a null-terminated string.
unsafe fn path_arg(s: *const c_char, what: &str) -> Result<PathBuf, BridgeError> {
    if s.is_null() {
        return Err(BridgeError::InvalidOption {
            option: what.to_string(),
            reason: "null pointer".into(),
        });
    }
    let s = unsafe { CStr::from_ptr(s) };
    s.to_str().map(PathBuf::from).map_err(|_| BridgeError::InvalidOption {
        option: s.to_string_lossy().into_owned(),
        reason: format!("{what} is not valid UTF-8"),
    })
}

/// # Safety
/// See [`InitArgs::from_raw`].
unsafe fn raw_args(options: *const JavaVMOption, n_options: jint) -> Result<InitArgs, BridgeError> {
    unsafe { InitArgs::from_raw(JniVersion::V1_2, options, n_options) }
}

/// Load `dll_name`, resolve `JNI_CreateJavaVM` and start the VM with the
/// given options, requesting JNI 1.2.
///
/// Returns 0 on success, and also when a VM is already running, in which
/// case nothing is loaded and neither argument is read.
///
/// # Safety
/// `dll_name` must be a null-terminated string. `options` must point to
/// `n_options` valid `JavaVMOption`s.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn CreateJavaVMDLL(
    dll_name: *const c_char,
    options: *const JavaVMOption,
    n_options: jint,
) -> jint {
    if let Some(code) = already_created() {
        return code;
    }
    let result = unsafe { path_arg(dll_name, "library name") }.and_then(|path| {
        let args = unsafe { raw_args(options, n_options) }?;
        start(Some(&path), &args)
    });
    status(result)
}

/// [`CreateJavaVMDLL`] with the platform's default VM library name.
///
/// # Safety
/// `options` must point to `n_options` valid `JavaVMOption`s.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn CreateJavaVMAnon(options: *const JavaVMOption, n_options: jint) -> jint {
    if let Some(code) = already_created() {
        return code;
    }
    let result = unsafe { raw_args(options, n_options) }.and_then(|args| start(None, &args));
    status(result)
}

/// Start the VM from a TOML config file; null selects the default location.
///
/// # Safety
/// `config_path` must be null or a null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn CreateJavaVMFromConfig(config_path: *const c_char) -> jint {
    if let Some(code) = already_created() {
        return code;
    }
    let path = if config_path.is_null() {
        Ok(RuntimeConfig::default_path())
    } else {
        unsafe { path_arg(config_path, "config path") }
    };
    let result = path.and_then(|path| {
        tracing::info!(config = %path.display(), "Loading VM config");
        start_from_config(&path)
    });
    status(result)
}

/// Use a VM that is already running, such as the one passed to `JNI_OnLoad`.
///
/// # Safety
/// `vm` must be a live `JavaVM` pointer for the rest of the process.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn AdoptJavaVM(vm: *mut JavaVM, version: jint) -> jint {
    let result = slot::get_or_create(|| unsafe { Runtime::adopt(vm, JniVersion::from_raw(version)) });
    status(result)
}

/// Shut the VM down and return `DestroyJavaVM`'s status.
///
/// The VM cannot be started again afterwards: later create calls, and a
/// second destroy, return the destroyed status code.
#[unsafe(no_mangle)]
pub extern "C" fn DestroyJavaVM() -> jint {
    match slot::require().destroy() {
        Ok(()) => OK,
        Err(e) => diagnostics::fail(&e),
    }
}

fn env_or_null(result: Result<*mut JNIEnv, BridgeError>) -> *mut JNIEnv {
    result.unwrap_or_else(|e| {
        diagnostics::fail(&e);
        ptr::null_mut()
    })
}

/// The calling thread's environment, attaching the thread if needed.
///
/// Null on failure. The pointer must not be kept past the current call.
#[unsafe(no_mangle)]
pub extern "C" fn GetEnv() -> *mut JNIEnv {
    env_or_null(slot::require().current_env().map(|env| env.as_raw()))
}

#[unsafe(no_mangle)]
pub extern "C" fn AttachCurrentThread() -> *mut JNIEnv {
    env_or_null(slot::require().attach_current_thread().map(|env| env.as_raw()))
}

#[unsafe(no_mangle)]
pub extern "C" fn AttachCurrentThreadAsDaemon() -> *mut JNIEnv {
    env_or_null(slot::require().attach_current_thread_as_daemon().map(|env| env.as_raw()))
}

#[unsafe(no_mangle)]
pub extern "C" fn DetachCurrentThread() -> jint {
    match slot::require().detach_current_thread() {
        Ok(()) => OK,
        Err(e) => diagnostics::fail(&e),
    }
}
