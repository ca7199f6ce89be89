//! Local frames and local, global and weak references.

#![allow(non_snake_case)]

use jni_sys::{jboolean, jint, jobject, jobjectRefType, jweak};

forward! {
    fn PushLocalFrame(capacity: jint) -> jint => PushLocalFrame;
    fn PopLocalFrame(result: jobject) -> jobject => PopLocalFrame;
    fn EnsureLocalCapacity(capacity: jint) -> jint => EnsureLocalCapacity;

    fn NewGlobalRef(lobj: jobject) -> jobject => NewGlobalRef;
    fn DeleteGlobalRef(gref: jobject) => DeleteGlobalRef;
    fn NewLocalRef(obj: jobject) -> jobject => NewLocalRef;
    fn DeleteLocalRef(obj: jobject) => DeleteLocalRef;
    fn NewWeakGlobalRef(obj: jobject) -> jweak => NewWeakGlobalRef;
    fn DeleteWeakGlobalRef(obj: jweak) => DeleteWeakGlobalRef;

    fn IsSameObject(obj1: jobject, obj2: jobject) -> jboolean => IsSameObject;
    fn GetObjectRefType(obj: jobject) -> jobjectRefType => GetObjectRefType;
}
