//! Bootstrap tests that go through the public API only: config file on disk,
//! option rendering, and library loading failures.
//!
//! None of these need a JDK. Tests that start a VM use the in-process fake
//! and live in the unit test modules and in `jnibridge-ffi`.
use std::io::Write;

use jnibridge_runtime::{BridgeError, JniVersion, Runtime, RuntimeConfig, VmOptions};

#[test]
fn config_file_drives_vm_options() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
version = "1.6"
options = ["-Xss2m"]

[paths]
class_path = ["classes"]
"#
    )
    .unwrap();

    let config = RuntimeConfig::from_file(file.path()).unwrap();
    let args = config.to_vm_options().to_init_args().unwrap();

    assert_eq!(args.version(), JniVersion::V1_6);
    let options: Vec<String> = args.options().map(|o| o.into_owned()).collect();
    assert_eq!(options, vec!["-Djava.class.path=classes", "-Xss2m"]);
}

#[test]
fn missing_config_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RuntimeConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, BridgeError::Config { .. }));
}

#[test]
fn unresolvable_library_is_a_load_error_naming_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("libjvm.so");
    let args = VmOptions::new().to_init_args().unwrap();

    let err = Runtime::create(&path, &args).unwrap_err();
    assert!(matches!(err, BridgeError::Load { .. }));
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[cfg(target_os = "linux")]
#[test]
fn library_without_entry_point_is_a_symbol_error() {
    let args = VmOptions::new().to_init_args().unwrap();
    let err = Runtime::create("libc.so.6", &args).unwrap_err();
    assert!(matches!(err, BridgeError::Symbol { .. }));
}
