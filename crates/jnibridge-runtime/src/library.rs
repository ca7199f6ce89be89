use std::path::Path;

use libloading::Library;

use crate::error::BridgeError;
use crate::options::CreateJavaVmFn;

pub const CREATE_ENTRY_POINT: &str = "JNI_CreateJavaVM";

/// File name of the VM library the platform loader is asked for when no
/// explicit path is configured.
pub fn default_library_name() -> &'static str {
    if cfg!(windows) {
        "jvm.dll"
    } else if cfg!(target_os = "macos") {
        "libjvm.dylib"
    } else {
        "libjvm.so"
    }
}

/// A dynamically loaded VM library (`libjvm.so`, `jvm.dll`, ...).
///
/// Stays mapped for as long as this value lives; the runtime keeps it until
/// process exit.
pub struct RuntimeLibrary {
    path: String,
    library: Library,
}

impl std::fmt::Debug for RuntimeLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeLibrary").field("path", &self.path).finish()
    }
}

impl RuntimeLibrary {
    pub fn open(path: &Path) -> Result<Self, BridgeError> {
        let shown = path.display().to_string();
        tracing::info!(library = %shown, "Using embedded Java VM library");

        // SAFETY: loading a VM library runs its initializers; that is the
        // whole point of this call and there is no way to vet them here.
        let library = unsafe { Library::new(path) }.map_err(|e| BridgeError::Load {
            path: shown.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { path: shown, library })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Resolve `JNI_CreateJavaVM`.
    pub fn create_entry(&self) -> Result<CreateJavaVmFn, BridgeError> {
        // SAFETY: the symbol type matches the invocation API declaration of
        // JNI_CreateJavaVM in jni.h.
        let symbol = unsafe {
            self.library
                .get::<CreateJavaVmFn>(b"JNI_CreateJavaVM\0")
        }
        .map_err(|e| {
            tracing::debug!(library = %self.path, "symbol lookup failed: {e}");
            BridgeError::Symbol {
                symbol: CREATE_ENTRY_POINT,
                path: self.path.clone(),
            }
        })?;
        Ok(*symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_library_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("libnot-a-jvm.so");
        let err = RuntimeLibrary::open(&path).unwrap_err();
        match err {
            BridgeError::Load { path: reported, .. } => {
                assert!(reported.contains("libnot-a-jvm.so"))
            }
            other => panic!("expected Load, got {other:?}"),
        }
    }

    #[test]
    fn default_name_matches_platform() {
        let name = default_library_name();
        assert!(name.contains("jvm"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn library_without_entry_point_is_a_symbol_error() {
        let library = RuntimeLibrary::open(Path::new("libc.so.6")).unwrap();
        let err = library.create_entry().unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Symbol { symbol: CREATE_ENTRY_POINT, .. }
        ));
    }
}
