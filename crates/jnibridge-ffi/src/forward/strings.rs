#![allow(non_snake_case)]

use std::os::raw::c_char;

use jni_sys::{jboolean, jchar, jsize, jstring};

forward! {
    fn NewString(unicode: *const jchar, len: jsize) -> jstring => NewString;
    fn GetStringLength(string: jstring) -> jsize => GetStringLength;
    fn GetStringChars(string: jstring, is_copy: *mut jboolean) -> *const jchar => GetStringChars;
    fn ReleaseStringChars(string: jstring, chars: *const jchar) => ReleaseStringChars;

    fn NewStringUTF(utf: *const c_char) -> jstring => NewStringUTF;
    fn GetStringUTFLength(string: jstring) -> jsize => GetStringUTFLength;
    fn GetStringUTFChars(string: jstring, is_copy: *mut jboolean) -> *const c_char
        => GetStringUTFChars;
    fn ReleaseStringUTFChars(string: jstring, chars: *const c_char) => ReleaseStringUTFChars;

    fn GetStringRegion(string: jstring, start: jsize, len: jsize, buf: *mut jchar)
        => GetStringRegion;
    fn GetStringUTFRegion(string: jstring, start: jsize, len: jsize, buf: *mut c_char)
        => GetStringUTFRegion;

    // Critical regions: no other JNI call may be made until released.
    fn GetStringCritical(string: jstring, is_copy: *mut jboolean) -> *const jchar
        => GetStringCritical;
    fn ReleaseStringCritical(string: jstring, chars: *const jchar) => ReleaseStringCritical;
}
