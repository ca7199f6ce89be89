#![allow(non_snake_case)]

use std::ffi::c_void;

use jni_sys::{jboolean, jclass, jint, jlong, jmethodID, jobject, jvalue};

forward! {
    fn AllocObject(clazz: jclass) -> jobject => AllocObject;
    /// Runs constructor `method_id` with `args`.
    fn NewObject(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jobject => NewObjectA;
    fn GetObjectClass(obj: jobject) -> jclass => GetObjectClass;
    fn IsInstanceOf(obj: jobject, clazz: jclass) -> jboolean => IsInstanceOf;

    fn MonitorEnter(obj: jobject) -> jint => MonitorEnter;
    fn MonitorExit(obj: jobject) -> jint => MonitorExit;

    fn NewDirectByteBuffer(address: *mut c_void, capacity: jlong) -> jobject => NewDirectByteBuffer;
    fn GetDirectBufferAddress(buf: jobject) -> *mut c_void => GetDirectBufferAddress;
    fn GetDirectBufferCapacity(buf: jobject) -> jlong => GetDirectBufferCapacity;
}
