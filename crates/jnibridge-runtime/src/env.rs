use std::cell::RefCell;
use std::ffi::c_void;
use std::marker::PhantomData;
use std::ops::Deref;
use std::ptr::{self, NonNull};
use std::sync::Arc;

use jni_sys::{JNI_EDETACHED, JNI_ERR, JNI_EVERSION, JNI_OK, JNIEnv, JNINativeInterface_};

use crate::error::BridgeError;
use crate::lifecycle::{Runtime, Shared};
use crate::version::JniVersion;

/// The calling thread's JNI environment.
///
/// Borrowed from the runtime for as long as the thread stays attached. An
/// `Env` is neither `Send` nor `Sync`: the runtime hands out one environment
/// per thread and it must not be used from any other.
#[derive(Debug)]
pub struct Env<'vm> {
    raw: NonNull<JNIEnv>,
    _runtime: PhantomData<&'vm Runtime>,
    _not_send: PhantomData<*mut ()>,
}

impl<'vm> Env<'vm> {
    fn new(raw: NonNull<JNIEnv>) -> Self {
        Self {
            raw,
            _runtime: PhantomData,
            _not_send: PhantomData,
        }
    }

    pub fn as_raw(&self) -> *mut JNIEnv {
        self.raw.as_ptr()
    }

    /// The native interface function table behind this environment.
    pub fn functions(&self) -> &JNINativeInterface_ {
        // SAFETY: a non-null JNIEnv points at the runtime's function table
        // for as long as the thread is attached, which `'vm` covers.
        unsafe { &**self.raw.as_ptr() }
    }

    /// Ask the runtime which JNI version this environment implements.
    pub fn version(&self) -> Result<JniVersion, BridgeError> {
        let get_version = self
            .functions()
            .GetVersion
            .ok_or(BridgeError::MissingFunction("GetVersion"))?;
        // SAFETY: slot from this environment's own table.
        Ok(JniVersion::from_raw(unsafe { get_version(self.as_raw()) }))
    }
}

/// An attachment scoped to a Rust block.
///
/// Detaches the thread when dropped, but only if this guard performed the
/// attach. A thread that was already attached stays attached.
#[derive(Debug)]
pub struct AttachGuard<'vm> {
    runtime: &'vm Runtime,
    env: Env<'vm>,
    owns_attachment: bool,
}

impl<'vm> AttachGuard<'vm> {
    pub fn owns_attachment(&self) -> bool {
        self.owns_attachment
    }
}

impl<'vm> Deref for AttachGuard<'vm> {
    type Target = Env<'vm>;

    fn deref(&self) -> &Self::Target {
        &self.env
    }
}

impl Drop for AttachGuard<'_> {
    fn drop(&mut self) {
        if !self.owns_attachment || self.runtime.is_destroyed() {
            return;
        }
        if let Err(e) = self.runtime.detach_current_thread() {
            tracing::warn!("Scoped detach failed: {e}");
        }
    }
}

/// Detaches the owning OS thread when its thread-locals are torn down.
struct ThreadDetach {
    shared: Arc<Shared>,
    armed: bool,
}

impl Drop for ThreadDetach {
    fn drop(&mut self) {
        if !self.armed || self.shared.is_destroyed() {
            return;
        }
        let Ok(detach) = self.shared.slot("DetachCurrentThread", |t| t.DetachCurrentThread) else {
            return;
        };
        // SAFETY: the slot belongs to the VM this thread was attached to and
        // `shared` keeps its library mapped.
        let status = unsafe { detach(self.shared.vm()) };
        tracing::debug!(status, "Detached exiting thread");
    }
}

thread_local! {
    static THREAD_DETACH: RefCell<Option<ThreadDetach>> = const { RefCell::new(None) };
}

fn arm_thread_detach(shared: &Arc<Shared>) {
    let _ = THREAD_DETACH.try_with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.as_ref().is_none_or(|d| !d.armed) {
            *slot = Some(ThreadDetach {
                shared: Arc::clone(shared),
                armed: true,
            });
        }
    });
}

pub(crate) fn disarm_thread_detach() {
    let _ = THREAD_DETACH.try_with(|slot| {
        if let Some(detach) = slot.borrow_mut().as_mut() {
            detach.armed = false;
        }
    });
}

#[derive(Clone, Copy)]
enum AttachMode {
    Normal,
    Daemon,
}

impl Runtime {
    /// Look up the calling thread's environment without attaching.
    ///
    /// Returns `Ok(None)` if the thread is not attached.
    pub fn get_env(&self) -> Result<Option<Env<'_>>, BridgeError> {
        self.ensure_live()?;
        let get_env = self.shared.slot("GetEnv", |t| t.GetEnv)?;

        let mut env: *mut c_void = ptr::null_mut();
        // SAFETY: slot from this VM's invocation interface; `env` is a valid
        // out-pointer.
        let status = unsafe { get_env(self.shared.vm(), &mut env, self.version().raw()) };
        match status {
            JNI_OK => Ok(NonNull::new(env.cast::<JNIEnv>()).map(Env::new)),
            JNI_EDETACHED => Ok(None),
            JNI_EVERSION => {
                tracing::error!(version = %self.version(), "JNI version not supported");
                Err(BridgeError::UnsupportedVersion { requested: self.version() })
            }
            status => Err(BridgeError::Attach { status }),
        }
    }

    /// Resolve the calling thread's environment, attaching the thread if it
    /// is detached.
    ///
    /// An attachment made here lasts until the thread exits (or until an
    /// explicit [`Runtime::detach_current_thread`]); the handle itself must
    /// not be kept past the current call.
    pub fn current_env(&self) -> Result<Env<'_>, BridgeError> {
        if let Some(env) = self.get_env()? {
            return Ok(env);
        }
        let env = self.attach(AttachMode::Normal)?;
        arm_thread_detach(&self.shared);
        Ok(env)
    }

    /// Attach the calling thread and leave it attached until an explicit
    /// [`Runtime::detach_current_thread`].
    ///
    /// Attaching an already attached thread returns its existing environment.
    pub fn attach_current_thread(&self) -> Result<Env<'_>, BridgeError> {
        self.ensure_live()?;
        self.attach(AttachMode::Normal)
    }

    /// Like [`Runtime::attach_current_thread`], but the VM will not wait for
    /// this thread on shutdown.
    pub fn attach_current_thread_as_daemon(&self) -> Result<Env<'_>, BridgeError> {
        self.ensure_live()?;
        self.attach(AttachMode::Daemon)
    }

    /// Attach for the lifetime of the returned guard.
    pub fn attach_scoped(&self) -> Result<AttachGuard<'_>, BridgeError> {
        if let Some(env) = self.get_env()? {
            return Ok(AttachGuard {
                runtime: self,
                env,
                owns_attachment: false,
            });
        }
        let env = self.attach(AttachMode::Normal)?;
        Ok(AttachGuard {
            runtime: self,
            env,
            owns_attachment: true,
        })
    }

    pub fn detach_current_thread(&self) -> Result<(), BridgeError> {
        self.ensure_live()?;
        let detach = self.shared.slot("DetachCurrentThread", |t| t.DetachCurrentThread)?;
        // SAFETY: slot from this VM's invocation interface.
        let status = unsafe { detach(self.shared.vm()) };
        if status < 0 {
            tracing::warn!(status, "Can't detach current thread");
            return Err(BridgeError::Detach { status });
        }
        disarm_thread_detach();
        tracing::debug!("Detached current thread");
        Ok(())
    }

    fn attach(&self, mode: AttachMode) -> Result<Env<'_>, BridgeError> {
        let attach = match mode {
            AttachMode::Normal => self.shared.slot("AttachCurrentThread", |t| t.AttachCurrentThread)?,
            AttachMode::Daemon => self
                .shared
                .slot("AttachCurrentThreadAsDaemon", |t| t.AttachCurrentThreadAsDaemon)?,
        };

        let mut env: *mut c_void = ptr::null_mut();
        // SAFETY: slot from this VM's invocation interface; a null args
        // pointer requests the default attach options.
        let status = unsafe { attach(self.shared.vm(), &mut env, ptr::null_mut()) };
        if status < 0 {
            tracing::error!(status, "Can't attach current thread");
            return Err(BridgeError::Attach { status });
        }
        let env = NonNull::new(env.cast::<JNIEnv>()).ok_or(BridgeError::Attach { status: JNI_ERR })?;
        tracing::debug!(daemon = matches!(mode, AttachMode::Daemon), "Attached current thread");
        Ok(Env::new(env))
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::fake;
    use crate::options::VmOptions;

    fn adopt(version: JniVersion) -> Runtime {
        unsafe { Runtime::adopt(fake::java_vm(), version) }.unwrap()
    }

    #[test]
    fn detached_thread_is_attached_on_demand() {
        let runtime = adopt(JniVersion::V1_2);
        thread::spawn(move || {
            assert!(runtime.get_env().unwrap().is_none());
            let env = runtime.current_env().unwrap();
            assert_eq!(env.as_raw(), fake::thread_env());
            assert!(fake::is_attached());
            assert_eq!(fake::attach_count(), 1);
        })
        .join()
        .unwrap();
    }

    #[test]
    fn attached_thread_reuses_its_environment() {
        let runtime = adopt(JniVersion::V1_2);
        thread::spawn(move || {
            let first = runtime.current_env().unwrap().as_raw();
            let second = runtime.current_env().unwrap().as_raw();
            assert_eq!(first, second);
            assert_eq!(fake::attach_count(), 1);
        })
        .join()
        .unwrap();
    }

    #[test]
    fn version_mismatch_is_reported() {
        let runtime = adopt(JniVersion::V21);
        thread::spawn(move || {
            let err = runtime.current_env().unwrap_err();
            assert!(matches!(
                err,
                BridgeError::UnsupportedVersion { requested: JniVersion::V21 }
            ));
        })
        .join()
        .unwrap();
    }

    #[test]
    fn attach_then_detach_round_trip() {
        let runtime = adopt(JniVersion::V1_2);
        thread::spawn(move || {
            runtime.attach_current_thread().unwrap();
            assert!(fake::is_attached());
            runtime.detach_current_thread().unwrap();
            assert!(!fake::is_attached());
        })
        .join()
        .unwrap();
    }

    #[test]
    fn detach_without_attach_fails() {
        let runtime = adopt(JniVersion::V1_2);
        thread::spawn(move || {
            let err = runtime.detach_current_thread().unwrap_err();
            assert!(matches!(err, BridgeError::Detach { status } if status < 0));
        })
        .join()
        .unwrap();
    }

    #[test]
    fn daemon_attach_uses_daemon_slot() {
        let runtime = adopt(JniVersion::V1_2);
        thread::spawn(move || {
            runtime.attach_current_thread_as_daemon().unwrap();
            assert!(fake::is_daemon());
        })
        .join()
        .unwrap();
    }

    #[test]
    fn scoped_attach_detaches_on_drop() {
        let runtime = adopt(JniVersion::V1_2);
        thread::spawn(move || {
            {
                let guard = runtime.attach_scoped().unwrap();
                assert!(guard.owns_attachment());
                assert_eq!(guard.as_raw(), fake::thread_env());
                assert!(fake::is_attached());
            }
            assert!(!fake::is_attached());
        })
        .join()
        .unwrap();
    }

    #[test]
    fn scoped_attach_leaves_existing_attachment_alone() {
        let runtime = adopt(JniVersion::V1_2);
        thread::spawn(move || {
            runtime.attach_current_thread().unwrap();
            {
                let guard = runtime.attach_scoped().unwrap();
                assert!(!guard.owns_attachment());
            }
            assert!(fake::is_attached());
        })
        .join()
        .unwrap();
    }

    #[test]
    fn implicit_attachment_is_released_at_thread_exit() {
        let runtime = adopt(JniVersion::V1_2);
        let before = fake::detach_calls();
        let worker = runtime.clone();
        thread::spawn(move || {
            worker.current_env().unwrap();
        })
        .join()
        .unwrap();
        assert!(fake::detach_calls() > before);
    }

    #[test]
    fn threads_see_only_their_own_environment() {
        let runtime = adopt(JniVersion::V1_2);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let runtime = runtime.clone();
                thread::spawn(move || {
                    let env = runtime.current_env().unwrap().as_raw();
                    assert_eq!(env, fake::thread_env());
                    env as usize
                })
            })
            .collect();
        let mut envs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        envs.sort_unstable();
        envs.dedup();
        assert_eq!(envs.len(), 4);
    }

    #[test]
    fn env_reports_runtime_version() {
        let args = VmOptions::new().to_init_args().unwrap();
        let runtime = unsafe { Runtime::from_entry_point(fake::create_java_vm, &args) }.unwrap();
        let env = runtime.current_env().unwrap();
        assert_eq!(env.version().unwrap(), fake::FAKE_VERSION);
    }
}
