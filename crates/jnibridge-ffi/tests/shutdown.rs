//! Destroying the process's VM. Kept in its own test binary because it
//! leaves the runtime slot unusable.
use std::ptr;

use jnibridge::diagnostics::{DESTROYED, OK};
use jnibridge::{diagnostics, slot};
use jnibridge_runtime::{Runtime, VmOptions, fake};

#[test]
fn destroy_is_final() {
    slot::get_or_create(|| {
        let args = VmOptions::new().to_init_args()?;
        unsafe { Runtime::from_entry_point(fake::create_java_vm, &args) }
    })
    .unwrap();
    let destroys = fake::destroy_calls();

    assert_eq!(jnibridge::DestroyJavaVM(), OK);
    assert_eq!(fake::destroy_calls(), destroys + 1);

    assert_eq!(jnibridge::DestroyJavaVM(), DESTROYED);
    assert_eq!(fake::destroy_calls(), destroys + 1);

    assert_eq!(unsafe { jnibridge::CreateJavaVMAnon(ptr::null(), 0) }, DESTROYED);
    assert!(jnibridge::GetEnv().is_null());
    assert!(diagnostics::last_error().contains("destroyed"));

    // Forwarded calls do not reach the runtime either.
    assert!(unsafe { jnibridge::FindClass(c"java/lang/Object".as_ptr()) }.is_null());
    assert!(fake::calls().is_empty());
}
