//! Method lookup and calls. Call arguments are passed as a `jvalue` array.

#![allow(non_snake_case)]

use std::os::raw::c_char;

use jni_sys::{
    jboolean, jbyte, jchar, jclass, jdouble, jfloat, jint, jlong, jmethodID, jobject, jshort, jvalue,
};

forward! {
    fn GetMethodID(clazz: jclass, name: *const c_char, sig: *const c_char) -> jmethodID => GetMethodID;

    fn CallObjectMethod(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jobject
        => CallObjectMethodA;
    fn CallBooleanMethod(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jboolean
        => CallBooleanMethodA;
    fn CallByteMethod(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jbyte
        => CallByteMethodA;
    fn CallCharMethod(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jchar
        => CallCharMethodA;
    fn CallShortMethod(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jshort
        => CallShortMethodA;
    fn CallIntMethod(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jint
        => CallIntMethodA;
    fn CallLongMethod(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jlong
        => CallLongMethodA;
    fn CallFloatMethod(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jfloat
        => CallFloatMethodA;
    fn CallDoubleMethod(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jdouble
        => CallDoubleMethodA;
    fn CallVoidMethod(obj: jobject, method_id: jmethodID, args: *const jvalue)
        => CallVoidMethodA;
}

forward! {
    fn CallNonvirtualObjectMethod(
        obj: jobject,
        clazz: jclass,
        method_id: jmethodID,
        args: *const jvalue,
    ) -> jobject => CallNonvirtualObjectMethodA;
    fn CallNonvirtualBooleanMethod(
        obj: jobject,
        clazz: jclass,
        method_id: jmethodID,
        args: *const jvalue,
    ) -> jboolean => CallNonvirtualBooleanMethodA;
    fn CallNonvirtualByteMethod(
        obj: jobject,
        clazz: jclass,
        method_id: jmethodID,
        args: *const jvalue,
    ) -> jbyte => CallNonvirtualByteMethodA;
    fn CallNonvirtualCharMethod(
        obj: jobject,
        clazz: jclass,
        method_id: jmethodID,
        args: *const jvalue,
    ) -> jchar => CallNonvirtualCharMethodA;
    fn CallNonvirtualShortMethod(
        obj: jobject,
        clazz: jclass,
        method_id: jmethodID,
        args: *const jvalue,
    ) -> jshort => CallNonvirtualShortMethodA;
    fn CallNonvirtualIntMethod(
        obj: jobject,
        clazz: jclass,
        method_id: jmethodID,
        args: *const jvalue,
    ) -> jint => CallNonvirtualIntMethodA;
    fn CallNonvirtualLongMethod(
        obj: jobject,
        clazz: jclass,
        method_id: jmethodID,
        args: *const jvalue,
    ) -> jlong => CallNonvirtualLongMethodA;
    fn CallNonvirtualFloatMethod(
        obj: jobject,
        clazz: jclass,
        method_id: jmethodID,
        args: *const jvalue,
    ) -> jfloat => CallNonvirtualFloatMethodA;
    fn CallNonvirtualDoubleMethod(
        obj: jobject,
        clazz: jclass,
        method_id: jmethodID,
        args: *const jvalue,
    ) -> jdouble => CallNonvirtualDoubleMethodA;
    fn CallNonvirtualVoidMethod(
        obj: jobject,
        clazz: jclass,
        method_id: jmethodID,
        args: *const jvalue,
    ) => CallNonvirtualVoidMethodA;
}

forward! {
    fn GetStaticMethodID(clazz: jclass, name: *const c_char, sig: *const c_char) -> jmethodID
        => GetStaticMethodID;

    fn CallStaticObjectMethod(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jobject
        => CallStaticObjectMethodA;
    fn CallStaticBooleanMethod(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jboolean
        => CallStaticBooleanMethodA;
    fn CallStaticByteMethod(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jbyte
        => CallStaticByteMethodA;
    fn CallStaticCharMethod(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jchar
        => CallStaticCharMethodA;
    fn CallStaticShortMethod(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jshort
        => CallStaticShortMethodA;
    fn CallStaticIntMethod(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jint
        => CallStaticIntMethodA;
    fn CallStaticLongMethod(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jlong
        => CallStaticLongMethodA;
    fn CallStaticFloatMethod(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jfloat
        => CallStaticFloatMethodA;
    fn CallStaticDoubleMethod(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jdouble
        => CallStaticDoubleMethodA;
    fn CallStaticVoidMethod(clazz: jclass, method_id: jmethodID, args: *const jvalue)
        => CallStaticVoidMethodA;
}
