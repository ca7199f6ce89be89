//! Version, class definition and lookup, reflection, native registration.

#![allow(non_snake_case)]

use std::os::raw::c_char;

use jni_sys::{
    JNINativeMethod, JavaVM, jboolean, jbyte, jclass, jfieldID, jint, jmethodID, jobject, jsize,
};

forward! {
    fn GetVersion() -> jint => GetVersion;

    fn DefineClass(name: *const c_char, loader: jobject, buf: *const jbyte, len: jsize) -> jclass
        => DefineClass;

    /// `name` uses slashes: `java/lang/String`.
    fn FindClass(name: *const c_char) -> jclass => FindClass;

    fn FromReflectedMethod(method: jobject) -> jmethodID => FromReflectedMethod;
    fn FromReflectedField(field: jobject) -> jfieldID => FromReflectedField;
    fn ToReflectedMethod(cls: jclass, method_id: jmethodID, is_static: jboolean) -> jobject
        => ToReflectedMethod;
    fn ToReflectedField(cls: jclass, field_id: jfieldID, is_static: jboolean) -> jobject
        => ToReflectedField;

    fn GetSuperclass(sub: jclass) -> jclass => GetSuperclass;
    fn IsAssignableFrom(sub: jclass, sup: jclass) -> jboolean => IsAssignableFrom;

    fn RegisterNatives(clazz: jclass, methods: *const JNINativeMethod, n_methods: jint) -> jint
        => RegisterNatives;
    fn UnregisterNatives(clazz: jclass) -> jint => UnregisterNatives;

    fn GetJavaVM(vm: *mut *mut JavaVM) -> jint => GetJavaVM;
}
