use std::borrow::Cow;
use std::ffi::{CStr, CString, c_void};
use std::os::raw::c_char;
use std::ptr;

use jni_sys::{JNI_FALSE, JNI_TRUE, JavaVM, JavaVMInitArgs, JavaVMOption, jint};

use crate::error::BridgeError;
use crate::version::JniVersion;

pub type CreateJavaVmFn =
    unsafe extern "system" fn(*mut *mut JavaVM, *mut *mut c_void, *mut c_void) -> jint;

/// Startup options for the embedded VM.
///
/// `option_strings()` emits the class path first, then the library path,
/// then every extra option in insertion order. An empty class path becomes
/// `-Djava.class.path=.` so the working directory is always searched.
#[derive(Debug, Clone)]
pub struct VmOptions {
    pub class_path: Vec<String>,
    pub library_path: Vec<String>,
    pub options: Vec<String>,
    pub version: JniVersion,
    pub ignore_unrecognized: bool,
}

impl Default for VmOptions {
    fn default() -> Self {
        Self {
            class_path: Vec::new(),
            library_path: Vec::new(),
            options: Vec::new(),
            version: JniVersion::default(),
            ignore_unrecognized: true,
        }
    }
}

impl VmOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_path(mut self, entry: impl Into<String>) -> Self {
        self.class_path.push(entry.into());
        self
    }

    pub fn library_path(mut self, entry: impl Into<String>) -> Self {
        self.library_path.push(entry.into());
        self
    }

    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    pub fn version(mut self, version: JniVersion) -> Self {
        self.version = version;
        self
    }

    pub fn ignore_unrecognized(mut self, ignore: bool) -> Self {
        self.ignore_unrecognized = ignore;
        self
    }

    pub fn option_strings(&self) -> Vec<String> {
        let mut strings = Vec::with_capacity(self.options.len() + 2);

        let class_path = join_search_path(&self.class_path);
        let class_path = if class_path.is_empty() { ".".to_string() } else { class_path };
        strings.push(format!("-Djava.class.path={class_path}"));

        let library_path = join_search_path(&self.library_path);
        if !library_path.is_empty() {
            strings.push(format!("-Djava.library.path={library_path}"));
        }

        strings.extend(
            self.options
                .iter()
                .filter(|o| !o.trim().is_empty())
                .cloned(),
        );
        strings
    }

    pub fn to_init_args(&self) -> Result<InitArgs, BridgeError> {
        let mut args = InitArgs::new(self.version).ignore_unrecognized(self.ignore_unrecognized);
        for option in self.option_strings() {
            args.push(&option)?;
        }
        Ok(args)
    }
}

/// Join search path entries with the platform separator, skipping blanks.
///
/// Entries are taken as written, so one entry may itself hold several
/// separator-joined paths.
fn join_search_path(entries: &[String]) -> String {
    let separator = if cfg!(windows) { ";" } else { ":" };
    entries
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// The argument block handed to `JNI_CreateJavaVM`.
///
/// Owns copies of every option string so that the pointers in the
/// `JavaVMOption` array stay valid for the duration of the call.
#[derive(Debug)]
pub struct InitArgs {
    strings: Vec<CString>,
    extra_info: Vec<*mut c_void>,
    version: JniVersion,
    ignore_unrecognized: bool,
}

impl InitArgs {
    pub fn new(version: JniVersion) -> Self {
        Self {
            strings: Vec::new(),
            extra_info: Vec::new(),
            version,
            ignore_unrecognized: true,
        }
    }

    pub fn ignore_unrecognized(mut self, ignore: bool) -> Self {
        self.ignore_unrecognized = ignore;
        self
    }

    pub fn push(&mut self, option: &str) -> Result<(), BridgeError> {
        let cstring = CString::new(option).map_err(|_| BridgeError::InvalidOption {
            option: option.to_string(),
            reason: "contains an interior NUL byte".into(),
        })?;
        self.strings.push(cstring);
        self.extra_info.push(ptr::null_mut());
        Ok(())
    }

    /// Copy a caller-supplied option array.
    ///
    /// `extraInfo` pointers (used by hook options such as `vfprintf`) are
    /// passed through untouched.
    ///
    /// # Safety
    /// `options` must point to `count` valid `JavaVMOption`s whose
    /// `optionString`s are null-terminated. It may be null when `count` is 0.
    pub unsafe fn from_raw(
        version: JniVersion,
        options: *const JavaVMOption,
        count: jint,
    ) -> Result<Self, BridgeError> {
        let mut args = InitArgs::new(version);
        if count < 0 || (count > 0 && options.is_null()) {
            return Err(BridgeError::InvalidOption {
                option: format!("<{count} options>"),
                reason: "option array is missing or has a negative length".into(),
            });
        }
        for i in 0..count as usize {
            let option = unsafe { &*options.add(i) };
            if option.optionString.is_null() {
                return Err(BridgeError::InvalidOption {
                    option: format!("#{i}"),
                    reason: "null option string".into(),
                });
            }
            let string = unsafe { CStr::from_ptr(option.optionString) }.to_owned();
            args.strings.push(string);
            args.extra_info.push(option.extraInfo);
        }
        Ok(args)
    }

    pub fn version(&self) -> JniVersion {
        self.version
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn options(&self) -> impl Iterator<Item = Cow<'_, str>> {
        self.strings.iter().map(|s| s.to_string_lossy())
    }

    /// Call a creation entry point with this argument block.
    ///
    /// # Safety
    /// `entry` must follow the `JNI_CreateJavaVM` contract.
    pub(crate) unsafe fn invoke(
        &self,
        entry: CreateJavaVmFn,
        vm: &mut *mut JavaVM,
        env: &mut *mut c_void,
    ) -> jint {
        let mut options: Vec<JavaVMOption> = self
            .strings
            .iter()
            .zip(&self.extra_info)
            .map(|(s, extra)| JavaVMOption {
                optionString: s.as_ptr() as *mut c_char,
                extraInfo: *extra,
            })
            .collect();

        let mut init = JavaVMInitArgs {
            version: self.version.raw(),
            nOptions: options.len() as jint,
            options: options.as_mut_ptr(),
            ignoreUnrecognized: if self.ignore_unrecognized { JNI_TRUE } else { JNI_FALSE },
        };

        unsafe { entry(vm, env, (&mut init as *mut JavaVMInitArgs).cast()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sep() -> char {
        if cfg!(windows) { ';' } else { ':' }
    }

    #[test]
    fn empty_class_path_defaults_to_working_directory() {
        let strings = VmOptions::new().option_strings();
        assert_eq!(strings, vec!["-Djava.class.path=."]);
    }

    #[test]
    fn emits_class_path_then_library_path_then_extras() {
        let strings = VmOptions::new()
            .option("-Xmx64m")
            .class_path("app.jar")
            .library_path("native")
            .class_path("lib")
            .option("-verbose:gc")
            .option_strings();

        assert_eq!(
            strings,
            vec![
                format!("-Djava.class.path=app.jar{}lib", sep()),
                "-Djava.library.path=native".to_string(),
                "-Xmx64m".to_string(),
                "-verbose:gc".to_string(),
            ]
        );
    }

    #[test]
    fn blank_entries_are_skipped() {
        let strings = VmOptions::new()
            .class_path("")
            .class_path("  ")
            .library_path("")
            .option(" ")
            .option_strings();
        assert_eq!(strings, vec!["-Djava.class.path=."]);
    }

    #[test]
    fn entries_may_hold_several_paths() {
        let joined = format!("lib/a.jar{}lib/b.jar", sep());
        let strings = VmOptions::new()
            .class_path(joined.clone())
            .class_path("app.jar")
            .option_strings();
        assert_eq!(strings, vec![format!("-Djava.class.path={joined}{}app.jar", sep())]);
    }

    #[test]
    fn interior_nul_is_rejected() {
        let err = VmOptions::new().option("-Dbad=\0").to_init_args().unwrap_err();
        assert!(matches!(err, BridgeError::InvalidOption { .. }));
    }

    #[test]
    fn init_args_carry_version_and_flag() {
        let args = VmOptions::new()
            .version(JniVersion::V1_8)
            .ignore_unrecognized(false)
            .option("-Xint")
            .to_init_args()
            .unwrap();
        assert_eq!(args.version(), JniVersion::V1_8);
        assert!(!args.ignore_unrecognized);
        assert_eq!(args.len(), 2);
        assert_eq!(args.options().last().unwrap(), "-Xint");
    }

    #[test]
    fn from_raw_copies_caller_options() {
        let a = CString::new("-Djava.class.path=x").unwrap();
        let b = CString::new("-Xss1m").unwrap();
        let raw = [
            JavaVMOption { optionString: a.as_ptr() as *mut c_char, extraInfo: ptr::null_mut() },
            JavaVMOption { optionString: b.as_ptr() as *mut c_char, extraInfo: ptr::null_mut() },
        ];
        let args = unsafe { InitArgs::from_raw(JniVersion::V1_2, raw.as_ptr(), 2) }.unwrap();
        drop((a, b));
        let options: Vec<String> = args.options().map(|o| o.into_owned()).collect();
        assert_eq!(options, vec!["-Djava.class.path=x", "-Xss1m"]);
    }

    #[test]
    fn from_raw_rejects_null_array_with_count() {
        let err = unsafe { InitArgs::from_raw(JniVersion::V1_2, ptr::null(), 1) }.unwrap_err();
        assert!(matches!(err, BridgeError::InvalidOption { .. }));
        let empty = unsafe { InitArgs::from_raw(JniVersion::V1_2, ptr::null(), 0) }.unwrap();
        assert!(empty.is_empty());
    }
}
