//! An in-process stand-in for a JNI runtime.
//!
//! Implements the whole invocation interface and the slice of the native
//! interface the workspace's tests drive (`GetVersion`, class lookup, string
//! creation, static method calls, exception state). Attachment state is kept
//! per OS thread, so tests running in parallel do not observe each other.
//!
//! Every thread gets its own `JNIEnv` pointer; native functions that return
//! references hand back that pointer, which lets a test tell which thread's
//! environment a call went through.

use std::cell::{Cell, RefCell};
use std::ffi::{CStr, c_void};
use std::os::raw::c_char;
use std::ptr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use jni_sys::{
    JNI_EDETACHED, JNI_EINVAL, JNI_ENOMEM, JNI_EVERSION, JNI_FALSE, JNI_OK, JNI_TRUE, JNIEnv,
    JNIInvokeInterface_, JNINativeInterface_, JavaVM, JavaVMInitArgs, jboolean, jclass, jint,
    jmethodID, jobject, jobjectArray, jsize, jstring, jvalue,
};

use crate::version::JniVersion;

/// Highest version `GetEnv` and `JNI_CreateJavaVM` accept.
pub const FAKE_VERSION: JniVersion = JniVersion::V1_8;

/// Class names starting with this prefix are "not found".
pub const MISSING_CLASS_PREFIX: &str = "missing/";

/// What the last `create_java_vm` call on this thread was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRecord {
    pub version: JniVersion,
    pub options: Vec<String>,
    pub ignore_unrecognized: bool,
}

struct ThreadState {
    attached: Cell<bool>,
    daemon: Cell<bool>,
    attaches: Cell<usize>,
    env: Cell<*mut JNIEnv>,
    pending_exception: Cell<bool>,
    calls: RefCell<Vec<String>>,
    last_create: RefCell<Option<CreateRecord>>,
}

thread_local! {
    static THREAD: ThreadState = const {
        ThreadState {
            attached: Cell::new(false),
            daemon: Cell::new(false),
            attaches: Cell::new(0),
            env: Cell::new(ptr::null_mut()),
            pending_exception: Cell::new(false),
            calls: RefCell::new(Vec::new()),
            last_create: RefCell::new(None),
        }
    };
}

static CREATE_CALLS: AtomicUsize = AtomicUsize::new(0);
static DESTROY_CALLS: AtomicUsize = AtomicUsize::new(0);
static DETACH_CALLS: AtomicUsize = AtomicUsize::new(0);

struct Tables {
    invoke: JNIInvokeInterface_,
    native: JNINativeInterface_,
}

struct VmCell(JavaVM);

// SAFETY: both hold only function pointers and pointers into `TABLES`,
// which is immutable once initialized.
unsafe impl Send for Tables {}
unsafe impl Sync for Tables {}
unsafe impl Send for VmCell {}
unsafe impl Sync for VmCell {}

static TABLES: OnceLock<Tables> = OnceLock::new();
static VM: OnceLock<VmCell> = OnceLock::new();

fn tables() -> &'static Tables {
    TABLES.get_or_init(|| {
        // SAFETY: both tables consist of raw pointers and `Option`al function
        // pointers, for which all-zero is a valid (empty) value.
        let mut invoke: JNIInvokeInterface_ = unsafe { std::mem::zeroed() };
        invoke.DestroyJavaVM = Some(destroy_java_vm);
        invoke.AttachCurrentThread = Some(attach_current_thread);
        invoke.DetachCurrentThread = Some(detach_current_thread);
        invoke.GetEnv = Some(get_env);
        invoke.AttachCurrentThreadAsDaemon = Some(attach_current_thread_as_daemon);

        let mut native: JNINativeInterface_ = unsafe { std::mem::zeroed() };
        native.GetVersion = Some(get_version);
        native.FindClass = Some(find_class);
        native.ExceptionCheck = Some(exception_check);
        native.ExceptionDescribe = Some(exception_describe);
        native.ExceptionClear = Some(exception_clear);
        native.DeleteLocalRef = Some(delete_local_ref);
        native.NewStringUTF = Some(new_string_utf);
        native.GetStaticMethodID = Some(get_static_method_id);
        native.NewObjectArray = Some(new_object_array);
        native.SetObjectArrayElement = Some(set_object_array_element);
        native.CallStaticVoidMethodA = Some(call_static_void_method_a);

        Tables { invoke, native }
    })
}

/// The fake's `JavaVM*`, shared by every runtime created from it.
pub fn java_vm() -> *mut JavaVM {
    let cell = VM.get_or_init(|| VmCell(&tables().invoke as *const JNIInvokeInterface_));
    &cell.0 as *const JavaVM as *mut JavaVM
}

/// The environment pointer handed out to the calling thread.
pub fn thread_env() -> *mut JNIEnv {
    THREAD.with(|t| {
        if t.env.get().is_null() {
            let env: JNIEnv = &tables().native as *const JNINativeInterface_;
            t.env.set(Box::into_raw(Box::new(env)));
        }
        t.env.get()
    })
}

pub fn is_attached() -> bool {
    THREAD.with(|t| t.attached.get())
}

pub fn is_daemon() -> bool {
    THREAD.with(|t| t.attached.get() && t.daemon.get())
}

/// Number of detached-to-attached transitions on the calling thread.
pub fn attach_count() -> usize {
    THREAD.with(|t| t.attaches.get())
}

/// Native calls made from the calling thread, oldest first.
pub fn calls() -> Vec<String> {
    THREAD.with(|t| t.calls.borrow().clone())
}

/// Make `ExceptionCheck` report a pending exception on the calling thread.
pub fn raise_exception() {
    THREAD.with(|t| t.pending_exception.set(true));
}

pub fn last_create() -> Option<CreateRecord> {
    THREAD.with(|t| t.last_create.borrow().clone())
}

pub fn create_calls() -> usize {
    CREATE_CALLS.load(Ordering::SeqCst)
}

pub fn destroy_calls() -> usize {
    DESTROY_CALLS.load(Ordering::SeqCst)
}

pub fn detach_calls() -> usize {
    DETACH_CALLS.load(Ordering::SeqCst)
}

fn record(call: String) {
    let _ = THREAD.try_with(|t| t.calls.borrow_mut().push(call));
}

fn c_string(s: *const c_char) -> String {
    if s.is_null() {
        return "<null>".into();
    }
    // SAFETY: callers pass null-terminated strings per the JNI contract.
    unsafe { CStr::from_ptr(s) }.to_string_lossy().into_owned()
}

fn attach(penv: *mut *mut c_void, daemon: bool) -> jint {
    if penv.is_null() {
        return JNI_EINVAL;
    }
    let env = thread_env();
    THREAD.with(|t| {
        if !t.attached.get() {
            t.attached.set(true);
            t.daemon.set(daemon);
            t.attaches.set(t.attaches.get() + 1);
        }
    });
    // SAFETY: checked non-null above.
    unsafe { *penv = env.cast() };
    JNI_OK
}

/// Creation entry point with the `JNI_CreateJavaVM` signature.
///
/// # Safety
/// `args` must point to a valid `JavaVMInitArgs`.
pub unsafe extern "system" fn create_java_vm(
    pvm: *mut *mut JavaVM,
    penv: *mut *mut c_void,
    args: *mut c_void,
) -> jint {
    CREATE_CALLS.fetch_add(1, Ordering::SeqCst);
    if pvm.is_null() || args.is_null() {
        return JNI_EINVAL;
    }
    let init = unsafe { &*(args as *const JavaVMInitArgs) };
    let options = (0..init.nOptions.max(0) as usize)
        .map(|i| c_string(unsafe { (*init.options.add(i)).optionString }))
        .collect();
    let record = CreateRecord {
        version: JniVersion::from_raw(init.version),
        options,
        ignore_unrecognized: init.ignoreUnrecognized == JNI_TRUE,
    };
    THREAD.with(|t| *t.last_create.borrow_mut() = Some(record));

    if init.version > FAKE_VERSION.raw() {
        return JNI_EVERSION;
    }
    unsafe { *pvm = java_vm() };
    attach(penv, false)
}

/// A creation entry point that always reports out-of-memory.
///
/// # Safety
/// Never dereferences its arguments.
pub unsafe extern "system" fn failing_create_java_vm(
    _pvm: *mut *mut JavaVM,
    _penv: *mut *mut c_void,
    _args: *mut c_void,
) -> jint {
    CREATE_CALLS.fetch_add(1, Ordering::SeqCst);
    JNI_ENOMEM
}

unsafe extern "system" fn destroy_java_vm(_vm: *mut JavaVM) -> jint {
    DESTROY_CALLS.fetch_add(1, Ordering::SeqCst);
    JNI_OK
}

unsafe extern "system" fn attach_current_thread(
    _vm: *mut JavaVM,
    penv: *mut *mut c_void,
    _args: *mut c_void,
) -> jint {
    attach(penv, false)
}

unsafe extern "system" fn attach_current_thread_as_daemon(
    _vm: *mut JavaVM,
    penv: *mut *mut c_void,
    _args: *mut c_void,
) -> jint {
    attach(penv, true)
}

unsafe extern "system" fn detach_current_thread(_vm: *mut JavaVM) -> jint {
    DETACH_CALLS.fetch_add(1, Ordering::SeqCst);
    // Runs from thread-local destructors too, when the state may be gone.
    THREAD
        .try_with(|t| {
            if t.attached.replace(false) {
                t.daemon.set(false);
                JNI_OK
            } else {
                JNI_EDETACHED
            }
        })
        .unwrap_or(JNI_OK)
}

unsafe extern "system" fn get_env(_vm: *mut JavaVM, penv: *mut *mut c_void, version: jint) -> jint {
    if penv.is_null() {
        return JNI_EINVAL;
    }
    if version < JniVersion::V1_1.raw() || version > FAKE_VERSION.raw() {
        unsafe { *penv = ptr::null_mut() };
        return JNI_EVERSION;
    }
    if !is_attached() {
        unsafe { *penv = ptr::null_mut() };
        return JNI_EDETACHED;
    }
    unsafe { *penv = thread_env().cast() };
    JNI_OK
}

unsafe extern "system" fn get_version(_env: *mut JNIEnv) -> jint {
    FAKE_VERSION.raw()
}

unsafe extern "system" fn find_class(env: *mut JNIEnv, name: *const c_char) -> jclass {
    let name = c_string(name);
    let missing = name.starts_with(MISSING_CLASS_PREFIX);
    record(format!("FindClass {name}"));
    if missing {
        raise_exception();
        return ptr::null_mut();
    }
    env.cast()
}

unsafe extern "system" fn exception_check(_env: *mut JNIEnv) -> jboolean {
    if THREAD.with(|t| t.pending_exception.get()) { JNI_TRUE } else { JNI_FALSE }
}

unsafe extern "system" fn exception_describe(_env: *mut JNIEnv) {
    record("ExceptionDescribe".into());
}

unsafe extern "system" fn exception_clear(_env: *mut JNIEnv) {
    THREAD.with(|t| t.pending_exception.set(false));
    record("ExceptionClear".into());
}

unsafe extern "system" fn delete_local_ref(_env: *mut JNIEnv, _obj: jobject) {
    record("DeleteLocalRef".into());
}

unsafe extern "system" fn new_string_utf(env: *mut JNIEnv, utf: *const c_char) -> jstring {
    record(format!("NewStringUTF {}", c_string(utf)));
    env.cast()
}

unsafe extern "system" fn get_static_method_id(
    env: *mut JNIEnv,
    _clazz: jclass,
    name: *const c_char,
    sig: *const c_char,
) -> jmethodID {
    record(format!("GetStaticMethodID {}{}", c_string(name), c_string(sig)));
    env.cast()
}

unsafe extern "system" fn new_object_array(
    env: *mut JNIEnv,
    len: jsize,
    _clazz: jclass,
    _init: jobject,
) -> jobjectArray {
    record(format!("NewObjectArray {len}"));
    env.cast()
}

unsafe extern "system" fn set_object_array_element(
    _env: *mut JNIEnv,
    _array: jobjectArray,
    index: jsize,
    _val: jobject,
) {
    record(format!("SetObjectArrayElement {index}"));
}

unsafe extern "system" fn call_static_void_method_a(
    _env: *mut JNIEnv,
    _clazz: jclass,
    _method: jmethodID,
    _args: *const jvalue,
) {
    record("CallStaticVoidMethodA".into());
}
