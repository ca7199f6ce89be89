use std::ffi::c_void;
use std::path::Path;
use std::ptr::{self, NonNull};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use jni_sys::{JNIInvokeInterface_, JNI_ERR, JavaVM};

use crate::env;
use crate::error::BridgeError;
use crate::library::{RuntimeLibrary, default_library_name};
use crate::options::{CreateJavaVmFn, InitArgs};
use crate::version::JniVersion;

pub(crate) struct Shared {
    vm: NonNull<JavaVM>,
    version: JniVersion,
    destroyed: AtomicBool,
    library: Option<RuntimeLibrary>,
}

// SAFETY: a JavaVM pointer is valid from any thread; the invocation interface
// is documented as callable concurrently.
unsafe impl Send for Shared {}
unsafe impl Sync for Shared {}

impl Shared {
    pub(crate) fn vm(&self) -> *mut JavaVM {
        self.vm.as_ptr()
    }

    pub(crate) fn version(&self) -> JniVersion {
        self.version
    }

    pub(crate) fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::Acquire)
    }

    /// Pick a function out of the invocation interface table.
    pub(crate) fn slot<F>(
        &self,
        name: &'static str,
        pick: impl FnOnce(&JNIInvokeInterface_) -> Option<F>,
    ) -> Result<F, BridgeError> {
        // SAFETY: `vm` came from the runtime and points at its interface
        // table for the lifetime of the process.
        let table = unsafe { &**self.vm.as_ptr() };
        pick(table).ok_or(BridgeError::MissingFunction(name))
    }
}

/// The process's embedded Java VM.
///
/// A `Runtime` is an explicitly constructed handle: create it once with
/// [`Runtime::create`] (or one of its variants) and pass it, or clones of
/// it, to whoever needs a JNI environment. Clones share the same VM.
///
/// Dropping the last clone does not shut the VM down; call
/// [`Runtime::destroy`] for that. The loaded library is never unmapped while
/// any clone, or any thread attached through one, is alive.
#[derive(Clone)]
pub struct Runtime {
    pub(crate) shared: Arc<Shared>,
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("vm", &self.shared.vm)
            .field("version", &self.shared.version)
            .field("destroyed", &self.is_destroyed())
            .field("library", &self.library_path())
            .finish()
    }
}

impl Runtime {
    /// Load `library`, resolve `JNI_CreateJavaVM` and start a VM with `args`.
    pub fn create(library: impl AsRef<Path>, args: &InitArgs) -> Result<Self, BridgeError> {
        let library = RuntimeLibrary::open(library.as_ref())?;
        let entry = library.create_entry()?;
        Self::launch(entry, args, Some(library))
    }

    /// [`Runtime::create`] with the platform's default VM library name,
    /// resolved through the system loader's search path.
    pub fn create_default(args: &InitArgs) -> Result<Self, BridgeError> {
        Self::create(default_library_name(), args)
    }

    /// Start a VM through an already-resolved creation entry point.
    ///
    /// # Safety
    /// `entry` must follow the `JNI_CreateJavaVM` contract and must stay
    /// callable for the rest of the process.
    pub unsafe fn from_entry_point(
        entry: CreateJavaVmFn,
        args: &InitArgs,
    ) -> Result<Self, BridgeError> {
        Self::launch(entry, args, None)
    }

    /// Wrap a VM that is already running, such as the one handed to a native
    /// library's `JNI_OnLoad`.
    ///
    /// # Safety
    /// `vm` must be a live `JavaVM` pointer that outlives the returned value.
    pub unsafe fn adopt(vm: *mut JavaVM, version: JniVersion) -> Result<Self, BridgeError> {
        let vm = NonNull::new(vm).ok_or_else(|| BridgeError::InvalidOption {
            option: "vm".into(),
            reason: "null JavaVM pointer".into(),
        })?;
        tracing::debug!(%version, "Adopted running Java VM");
        Ok(Self::from_parts(vm, version, None))
    }

    fn launch(
        entry: CreateJavaVmFn,
        args: &InitArgs,
        library: Option<RuntimeLibrary>,
    ) -> Result<Self, BridgeError> {
        for (i, option) in args.options().enumerate() {
            tracing::debug!(index = i, %option, "JavaVM option");
        }

        let mut vm: *mut JavaVM = ptr::null_mut();
        let mut env: *mut c_void = ptr::null_mut();
        // SAFETY: upheld by the callers of `launch`: `entry` is a creation
        // entry point and `args` owns every pointer it passes.
        let status = unsafe { args.invoke(entry, &mut vm, &mut env) };
        if status < 0 {
            tracing::error!(status, "JNI_CreateJavaVM failed");
            return Err(BridgeError::Create { status });
        }
        let vm = NonNull::new(vm).ok_or(BridgeError::Create { status: JNI_ERR })?;

        tracing::info!(
            version = %args.version(),
            options = args.len(),
            library = library.as_ref().map(|l| l.path()).unwrap_or("<entry point>"),
            "Java VM started"
        );
        Ok(Self::from_parts(vm, args.version(), library))
    }

    fn from_parts(vm: NonNull<JavaVM>, version: JniVersion, library: Option<RuntimeLibrary>) -> Self {
        Self {
            shared: Arc::new(Shared {
                vm,
                version,
                destroyed: AtomicBool::new(false),
                library,
            }),
        }
    }

    /// Shut the VM down with `DestroyJavaVM`.
    ///
    /// Blocks until the VM's non-daemon threads have finished. A VM cannot be
    /// restarted in the same process, so every later call on this runtime,
    /// including a second `destroy`, fails with [`BridgeError::Destroyed`].
    pub fn destroy(&self) -> Result<(), BridgeError> {
        let destroy = self.shared.slot("DestroyJavaVM", |t| t.DestroyJavaVM)?;
        if self.shared.destroyed.swap(true, Ordering::AcqRel) {
            return Err(BridgeError::Destroyed);
        }
        env::disarm_thread_detach();

        tracing::info!("Destroying JavaVM");
        // SAFETY: the slot belongs to this VM's invocation interface.
        let status = unsafe { destroy(self.shared.vm()) };
        tracing::info!(status, "Destroyed JavaVM");

        if status < 0 {
            return Err(BridgeError::Destroy { status });
        }
        Ok(())
    }

    pub fn is_destroyed(&self) -> bool {
        self.shared.is_destroyed()
    }

    /// The version requested at creation and on every environment lookup.
    pub fn version(&self) -> JniVersion {
        self.shared.version()
    }

    pub fn as_raw(&self) -> *mut JavaVM {
        self.shared.vm()
    }

    pub fn library_path(&self) -> Option<&str> {
        self.shared.library.as_ref().map(|l| l.path())
    }

    pub(crate) fn ensure_live(&self) -> Result<(), BridgeError> {
        if self.is_destroyed() {
            return Err(BridgeError::Destroyed);
        }
        Ok(())
    }
}
