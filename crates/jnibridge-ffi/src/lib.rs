//! Flat C entry points over the JNI invocation and native interfaces.
//!
//! Built as a shared library (`libjnibridge.so`, `jnibridge.dll`,
//! `libjnibridge.dylib`) for callers that bind functions by name, such as
//! P/Invoke or `ctypes`, and cannot walk a JNI function table themselves.
//!
//! The host starts the VM once with one of the `CreateJavaVM*` functions.
//! After that, every exported JNI function can be called from any thread: it
//! resolves the calling thread's environment (attaching the thread on first
//! use) and forwards to the VM. A thread attached this way is detached when
//! it exits.
//!
//! Status-returning functions return 0 on success and a negative code on
//! failure (see [`diagnostics`]); functions returning a reference or value
//! return null or zero. In both cases `GetError` describes what went wrong
//! on the calling thread.

#![allow(clippy::missing_safety_doc)]

pub mod diagnostics;
pub mod forward;
pub mod lifecycle;
pub mod slot;

pub use diagnostics::{ClearError, GetError, InitLogging};
pub use forward::{
    arrays::*, classes::*, exceptions::*, fields::*, methods::*, objects::*, references::*,
    strings::*,
};
pub use lifecycle::{
    AdoptJavaVM, AttachCurrentThread, AttachCurrentThreadAsDaemon, CreateJavaVMAnon,
    CreateJavaVMDLL, CreateJavaVMFromConfig, DestroyJavaVM, DetachCurrentThread, GetEnv,
};
