#![allow(non_snake_case)]

use std::os::raw::c_char;

use jni_sys::{jboolean, jclass, jint, jthrowable};

use super::with_env;

forward! {
    fn Throw(obj: jthrowable) -> jint => Throw;
    fn ThrowNew(clazz: jclass, msg: *const c_char) -> jint => ThrowNew;
    fn ExceptionOccurred() -> jthrowable => ExceptionOccurred;
    fn ExceptionDescribe() => ExceptionDescribe;
    fn ExceptionClear() => ExceptionClear;
    fn ExceptionCheck() -> jboolean => ExceptionCheck;
}

/// Report a fatal error to the VM. Does not return once the VM has it.
///
/// # Safety
/// `msg` must be a null-terminated string.
#[unsafe(no_mangle)]
#[allow(unreachable_code)]
pub unsafe extern "C" fn FatalError(msg: *const c_char) {
    with_env("FatalError", |env, table| {
        let fatal = table.FatalError?;
        // SAFETY: slot from the calling thread's own table.
        unsafe { fatal(env, msg) };
        Some(())
    })
}
