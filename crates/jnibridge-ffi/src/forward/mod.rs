//! The flat JNI entry points.
//!
//! Every function here resolves the calling thread's environment (attaching
//! the thread when needed), then calls the identically-named slot of that
//! environment's function table with its arguments unchanged. Method calls
//! take their arguments as a `jvalue` array and go through the `…A` slots.
//!
//! If the environment cannot be resolved, or the runtime's table lacks the
//! slot, nothing is called: the failure becomes the thread's last error (see
//! `GetError`) and the function returns the zero value of its result type.

use jni_sys::{
    JNIEnv, JNINativeInterface_, jboolean, jbyte, jchar, jdouble, jfloat, jint, jlong,
    jobjectRefType, jshort,
};
use jnibridge_runtime::BridgeError;

use crate::{diagnostics, slot};

/// The value a forwarded call returns when it could not reach the runtime.
pub trait Fallback {
    fn fallback() -> Self;
}

macro_rules! zero_fallback {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Fallback for $ty {
                fn fallback() -> Self {
                    $zero
                }
            }
        )*
    };
}

zero_fallback! {
    () => (),
    jboolean => 0,
    jbyte => 0,
    jchar => 0,
    jshort => 0,
    jint => 0,
    jlong => 0,
    jfloat => 0.0,
    jdouble => 0.0,
    jobjectRefType => jobjectRefType::JNIInvalidRefType,
}

impl<T> Fallback for *mut T {
    fn fallback() -> Self {
        std::ptr::null_mut()
    }
}

impl<T> Fallback for *const T {
    fn fallback() -> Self {
        std::ptr::null()
    }
}

/// Run `call` against the calling thread's environment and function table.
///
/// `call` returns `None` when the table has no `function` slot.
pub(crate) fn with_env<R: Fallback>(
    function: &'static str,
    call: impl FnOnce(*mut JNIEnv, &JNINativeInterface_) -> Option<R>,
) -> R {
    let env = match slot::require().current_env() {
        Ok(env) => env,
        Err(e) => {
            diagnostics::fail(&e);
            return R::fallback();
        }
    };
    match call(env.as_raw(), env.functions()) {
        Some(result) => result,
        None => {
            diagnostics::fail(&BridgeError::MissingFunction(function));
            R::fallback()
        }
    }
}

/// Declares exported functions that forward to a function-table slot.
///
/// `fn Name(args) -> Ret => Slot;` exports `Name`, which calls
/// `(*env)->Slot(env, args)`.
macro_rules! forward {
    ($(
        $(#[$meta:meta])*
        fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)? => $slot:ident;
    )*) => {
        $(
            $(#[$meta])*
            #[unsafe(no_mangle)]
            pub unsafe extern "C" fn $name($($arg: $ty),*) $(-> $ret)? {
                $crate::forward::with_env(stringify!($slot), |env, table| {
                    let function = table.$slot?;
                    // SAFETY: the slot comes from the calling thread's own
                    // table; argument validity is the caller's contract.
                    Some(unsafe { function(env, $($arg),*) })
                })
            }
        )*
    };
}

pub mod arrays;
pub mod classes;
pub mod exceptions;
pub mod fields;
pub mod methods;
pub mod objects;
pub mod references;
pub mod strings;
