//! The process's one runtime, as seen by the flat entry points.
//!
//! The cell is written at most once. Creation is serialized through
//! `get_or_try_init`, so two threads racing on the first create call start
//! one VM between them.

use jnibridge_runtime::{BridgeError, Runtime};
use once_cell::sync::OnceCell;

static RUNTIME: OnceCell<Runtime> = OnceCell::new();

pub fn runtime() -> Option<&'static Runtime> {
    RUNTIME.get()
}

/// Install the runtime built by `create`, unless one is already installed.
///
/// An installed runtime is returned as is and `create` is not called. A
/// destroyed one cannot be replaced: the VM does not support a second start
/// in the same process.
pub fn get_or_create(
    create: impl FnOnce() -> Result<Runtime, BridgeError>,
) -> Result<&'static Runtime, BridgeError> {
    if let Some(runtime) = RUNTIME.get() {
        if runtime.is_destroyed() {
            return Err(BridgeError::Destroyed);
        }
        tracing::debug!("Java VM already running; create is a no-op");
        return Ok(runtime);
    }
    RUNTIME.get_or_try_init(create)
}

/// The installed runtime. Calling into the VM before creating it is a
/// programming error in the host, so this aborts instead of returning.
pub(crate) fn require() -> &'static Runtime {
    match RUNTIME.get() {
        Some(runtime) => runtime,
        None => {
            tracing::error!("JNI call made before the Java VM was created");
            eprintln!("jnibridge: JNI call made before the Java VM was created");
            std::process::abort()
        }
    }
}
