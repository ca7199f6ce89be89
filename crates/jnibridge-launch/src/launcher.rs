//! What the subcommands do once the VM is up. Everything goes through the
//! flat entry points, the same way a foreign caller would use them.

use std::ffi::{CStr, CString};
use std::fmt;
use std::ptr;

use anyhow::{Result, bail};
use jni_sys::{JNI_TRUE, jobject, jsize, jvalue};
use jnibridge::diagnostics;
use jnibridge_runtime::{JniVersion, Runtime};

const MAIN_NAME: &CStr = c"main";
const MAIN_SIGNATURE: &CStr = c"([Ljava/lang/String;)V";
const STRING_CLASS: &CStr = c"java/lang/String";

#[derive(Debug)]
pub struct ProbeReport {
    pub library: Option<String>,
    pub requested: JniVersion,
    pub reported: JniVersion,
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "library:   {}", self.library.as_deref().unwrap_or("<adopted>"))?;
        writeln!(f, "requested: JNI {}", self.requested)?;
        write!(f, "reported:  JNI {}", self.reported)
    }
}

pub fn probe(runtime: &Runtime) -> Result<ProbeReport> {
    // SAFETY: takes no arguments.
    let raw = unsafe { jnibridge::GetVersion() };
    if raw == 0 {
        bail!("could not query the VM version: {}", diagnostics::last_error());
    }
    Ok(ProbeReport {
        library: runtime.library_path().map(str::to_owned),
        requested: runtime.version(),
        reported: JniVersion::from_raw(raw),
    })
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// `main` threw; the exception was printed and cleared.
    Threw,
}

/// Call `public static void main(String[])` on `main_class`.
///
/// `main_class` may use dots or slashes as package separators.
pub fn run_main(main_class: &str, args: &[String]) -> Result<Outcome> {
    let name = CString::new(main_class.replace('.', "/"))?;
    // SAFETY: null-terminated name.
    let class = unsafe { jnibridge::FindClass(name.as_ptr()) };
    if class.is_null() {
        describe_pending();
        bail!("class {main_class} not found{}", jni_error());
    }

    // SAFETY: `class` is a live local reference; name and signature are
    // null-terminated.
    let method =
        unsafe { jnibridge::GetStaticMethodID(class, MAIN_NAME.as_ptr(), MAIN_SIGNATURE.as_ptr()) };
    if method.is_null() {
        describe_pending();
        bail!("{main_class} has no static void main(String[]){}", jni_error());
    }

    let argv = string_array(args)?;
    tracing::info!(class = main_class, args = args.len(), "Calling main");
    let call_args = [jvalue { l: argv }];
    // SAFETY: `method` is a static method of `class` taking one String[].
    unsafe { jnibridge::CallStaticVoidMethod(class, method, call_args.as_ptr()) };

    // SAFETY: plain exception state queries on this thread's env.
    if unsafe { jnibridge::ExceptionCheck() } == JNI_TRUE {
        describe_pending();
        return Ok(Outcome::Threw);
    }
    Ok(Outcome::Completed)
}

fn string_array(args: &[String]) -> Result<jobject> {
    let len = jsize::try_from(args.len())?;
    // SAFETY: null-terminated class name.
    let string_class = unsafe { jnibridge::FindClass(STRING_CLASS.as_ptr()) };
    if string_class.is_null() {
        describe_pending();
        bail!("java.lang.String not found{}", jni_error());
    }
    // SAFETY: `string_class` is a live local reference.
    let array = unsafe { jnibridge::NewObjectArray(len, string_class, ptr::null_mut()) };
    if array.is_null() {
        describe_pending();
        bail!("could not allocate String[{len}]{}", jni_error());
    }

    for (index, arg) in (0..len).zip(args) {
        let arg = CString::new(arg.as_str())?;
        // SAFETY: null-terminated (modified) UTF-8; `array` has `len` slots.
        unsafe {
            let string = jnibridge::NewStringUTF(arg.as_ptr());
            if string.is_null() {
                describe_pending();
                bail!("could not create argument string{}", jni_error());
            }
            jnibridge::SetObjectArrayElement(array, index, string);
            jnibridge::DeleteLocalRef(string);
        }
    }
    Ok(array)
}

fn describe_pending() {
    // SAFETY: exception state calls on this thread's env.
    unsafe {
        if jnibridge::ExceptionCheck() == JNI_TRUE {
            jnibridge::ExceptionDescribe();
            jnibridge::ExceptionClear();
        }
    }
}

fn jni_error() -> String {
    let message = diagnostics::last_error();
    if message.is_empty() { String::new() } else { format!(": {message}") }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use jnibridge::slot;
    use jnibridge_runtime::{VmOptions, fake};

    use super::*;

    fn install() -> &'static Runtime {
        slot::get_or_create(|| {
            let args = VmOptions::new().to_init_args()?;
            unsafe { Runtime::from_entry_point(fake::create_java_vm, &args) }
        })
        .unwrap()
    }

    fn on_new_thread<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
        install();
        thread::spawn(f).join().unwrap()
    }

    #[test]
    fn probe_reports_both_versions() {
        let runtime = install();
        let report = probe(runtime).unwrap();
        assert_eq!(report.requested, JniVersion::V1_2);
        assert_eq!(report.reported, fake::FAKE_VERSION);
        assert!(report.to_string().contains("JNI 1.8"));
    }

    #[test]
    fn run_builds_argument_array_and_calls_main() {
        let calls = on_new_thread(|| {
            let outcome = run_main("com.example.App", &["a".into(), "b".into()]).unwrap();
            assert_eq!(outcome, Outcome::Completed);
            fake::calls()
        });
        assert_eq!(
            calls,
            vec![
                "FindClass com/example/App",
                "GetStaticMethodID main([Ljava/lang/String;)V",
                "FindClass java/lang/String",
                "NewObjectArray 2",
                "NewStringUTF a",
                "SetObjectArrayElement 0",
                "DeleteLocalRef",
                "NewStringUTF b",
                "SetObjectArrayElement 1",
                "DeleteLocalRef",
                "CallStaticVoidMethodA",
            ]
        );
    }

    #[test]
    fn missing_class_is_an_error_and_exception_is_cleared() {
        on_new_thread(|| {
            let err = run_main("missing.Main", &[]).unwrap_err();
            assert!(err.to_string().contains("missing.Main"));
            assert!(fake::calls().contains(&"ExceptionDescribe".to_string()));
            assert_eq!(unsafe { jnibridge::ExceptionCheck() }, jni_sys::JNI_FALSE);
        });
    }

    #[test]
    fn exception_left_by_main_is_reported() {
        on_new_thread(|| {
            // Pending before the call, so the post-call check sees it.
            fake::raise_exception();
            let outcome = run_main("app.Main", &[]).unwrap();
            assert_eq!(outcome, Outcome::Threw);
            assert!(fake::calls().ends_with(&[
                "CallStaticVoidMethodA".to_string(),
                "ExceptionDescribe".to_string(),
                "ExceptionClear".to_string(),
            ]));
        });
    }

    #[test]
    fn arguments_with_nul_are_rejected() {
        on_new_thread(|| {
            assert!(run_main("app.Main", &["bad\0arg".into()]).is_err());
        });
    }
}
