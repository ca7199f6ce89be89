//! Embedded Java VM lifecycle and per-thread JNI environment access.
//!
//! Provides [`Runtime`], an explicitly constructed handle to the process's
//! single Java VM, and [`Env`], the calling thread's JNI environment.
//!
//! A JNI environment belongs to one thread and may not be reused across
//! calls that could run on another thread (finalizer and GC threads
//! included), so every call into the VM should resolve a fresh one through
//! [`Runtime::current_env`], which attaches the thread if needed.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use jnibridge_runtime::{Runtime, VmOptions};
//!
//! # fn run() -> Result<(), jnibridge_runtime::BridgeError> {
//! let args = VmOptions::new()
//!     .class_path("lib/app.jar")
//!     .option("-Xmx256m")
//!     .to_init_args()?;
//! let runtime = Runtime::create("/usr/lib/jvm/java-17/lib/server/libjvm.so", &args)?;
//!
//! std::thread::spawn({
//!     let runtime = runtime.clone();
//!     move || {
//!         // Attached for this block only.
//!         let env = runtime.attach_scoped()?;
//!         println!("JNI {}", env.version()?);
//!         Ok::<_, jnibridge_runtime::BridgeError>(())
//!     }
//! });
//!
//! runtime.destroy()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod env;
pub mod error;
#[cfg(any(test, feature = "fake-vm"))]
pub mod fake;
pub mod library;
pub mod lifecycle;
pub mod options;
pub mod version;

pub use config::RuntimeConfig;
pub use env::{AttachGuard, Env};
pub use error::BridgeError;
pub use library::{RuntimeLibrary, default_library_name};
pub use lifecycle::Runtime;
pub use options::{CreateJavaVmFn, InitArgs, VmOptions};
pub use version::JniVersion;

pub use jni_sys as sys;
