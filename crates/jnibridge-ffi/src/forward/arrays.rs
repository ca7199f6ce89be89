//! Object arrays, primitive arrays and critical array access.

#![allow(non_snake_case)]

use std::ffi::c_void;

use jni_sys::{
    jarray, jboolean, jbooleanArray, jbyte, jbyteArray, jchar, jcharArray, jclass, jdouble,
    jdoubleArray, jfloat, jfloatArray, jint, jintArray, jlong, jlongArray, jobject, jobjectArray,
    jshort, jshortArray, jsize,
};

forward! {
    fn GetArrayLength(array: jarray) -> jsize => GetArrayLength;

    fn NewObjectArray(len: jsize, clazz: jclass, init: jobject) -> jobjectArray => NewObjectArray;
    fn GetObjectArrayElement(array: jobjectArray, index: jsize) -> jobject => GetObjectArrayElement;
    fn SetObjectArrayElement(array: jobjectArray, index: jsize, value: jobject)
        => SetObjectArrayElement;

    fn GetPrimitiveArrayCritical(array: jarray, is_copy: *mut jboolean) -> *mut c_void
        => GetPrimitiveArrayCritical;
    fn ReleasePrimitiveArrayCritical(array: jarray, carray: *mut c_void, mode: jint)
        => ReleasePrimitiveArrayCritical;
}

// jboolean[]
forward! {
    fn NewBooleanArray(len: jsize) -> jbooleanArray => NewBooleanArray;
    fn GetBooleanArrayElements(array: jbooleanArray, is_copy: *mut jboolean) -> *mut jboolean
        => GetBooleanArrayElements;
    fn ReleaseBooleanArrayElements(array: jbooleanArray, elems: *mut jboolean, mode: jint)
        => ReleaseBooleanArrayElements;
    fn GetBooleanArrayRegion(array: jbooleanArray, start: jsize, len: jsize, buf: *mut jboolean)
        => GetBooleanArrayRegion;
    fn SetBooleanArrayRegion(array: jbooleanArray, start: jsize, len: jsize, buf: *const jboolean)
        => SetBooleanArrayRegion;
}

// jbyte[]
forward! {
    fn NewByteArray(len: jsize) -> jbyteArray => NewByteArray;
    fn GetByteArrayElements(array: jbyteArray, is_copy: *mut jboolean) -> *mut jbyte
        => GetByteArrayElements;
    fn ReleaseByteArrayElements(array: jbyteArray, elems: *mut jbyte, mode: jint)
        => ReleaseByteArrayElements;
    fn GetByteArrayRegion(array: jbyteArray, start: jsize, len: jsize, buf: *mut jbyte)
        => GetByteArrayRegion;
    fn SetByteArrayRegion(array: jbyteArray, start: jsize, len: jsize, buf: *const jbyte)
        => SetByteArrayRegion;
}

// jchar[]
forward! {
    fn NewCharArray(len: jsize) -> jcharArray => NewCharArray;
    fn GetCharArrayElements(array: jcharArray, is_copy: *mut jboolean) -> *mut jchar
        => GetCharArrayElements;
    fn ReleaseCharArrayElements(array: jcharArray, elems: *mut jchar, mode: jint)
        => ReleaseCharArrayElements;
    fn GetCharArrayRegion(array: jcharArray, start: jsize, len: jsize, buf: *mut jchar)
        => GetCharArrayRegion;
    fn SetCharArrayRegion(array: jcharArray, start: jsize, len: jsize, buf: *const jchar)
        => SetCharArrayRegion;
}

// jshort[]
forward! {
    fn NewShortArray(len: jsize) -> jshortArray => NewShortArray;
    fn GetShortArrayElements(array: jshortArray, is_copy: *mut jboolean) -> *mut jshort
        => GetShortArrayElements;
    fn ReleaseShortArrayElements(array: jshortArray, elems: *mut jshort, mode: jint)
        => ReleaseShortArrayElements;
    fn GetShortArrayRegion(array: jshortArray, start: jsize, len: jsize, buf: *mut jshort)
        => GetShortArrayRegion;
    fn SetShortArrayRegion(array: jshortArray, start: jsize, len: jsize, buf: *const jshort)
        => SetShortArrayRegion;
}

// jint[]
forward! {
    fn NewIntArray(len: jsize) -> jintArray => NewIntArray;
    fn GetIntArrayElements(array: jintArray, is_copy: *mut jboolean) -> *mut jint
        => GetIntArrayElements;
    fn ReleaseIntArrayElements(array: jintArray, elems: *mut jint, mode: jint)
        => ReleaseIntArrayElements;
    fn GetIntArrayRegion(array: jintArray, start: jsize, len: jsize, buf: *mut jint)
        => GetIntArrayRegion;
    fn SetIntArrayRegion(array: jintArray, start: jsize, len: jsize, buf: *const jint)
        => SetIntArrayRegion;
}

// jlong[]
forward! {
    fn NewLongArray(len: jsize) -> jlongArray => NewLongArray;
    fn GetLongArrayElements(array: jlongArray, is_copy: *mut jboolean) -> *mut jlong
        => GetLongArrayElements;
    fn ReleaseLongArrayElements(array: jlongArray, elems: *mut jlong, mode: jint)
        => ReleaseLongArrayElements;
    fn GetLongArrayRegion(array: jlongArray, start: jsize, len: jsize, buf: *mut jlong)
        => GetLongArrayRegion;
    fn SetLongArrayRegion(array: jlongArray, start: jsize, len: jsize, buf: *const jlong)
        => SetLongArrayRegion;
}

// jfloat[]
forward! {
    fn NewFloatArray(len: jsize) -> jfloatArray => NewFloatArray;
    fn GetFloatArrayElements(array: jfloatArray, is_copy: *mut jboolean) -> *mut jfloat
        => GetFloatArrayElements;
    fn ReleaseFloatArrayElements(array: jfloatArray, elems: *mut jfloat, mode: jint)
        => ReleaseFloatArrayElements;
    fn GetFloatArrayRegion(array: jfloatArray, start: jsize, len: jsize, buf: *mut jfloat)
        => GetFloatArrayRegion;
    fn SetFloatArrayRegion(array: jfloatArray, start: jsize, len: jsize, buf: *const jfloat)
        => SetFloatArrayRegion;
}

// jdouble[]
forward! {
    fn NewDoubleArray(len: jsize) -> jdoubleArray => NewDoubleArray;
    fn GetDoubleArrayElements(array: jdoubleArray, is_copy: *mut jboolean) -> *mut jdouble
        => GetDoubleArrayElements;
    fn ReleaseDoubleArrayElements(array: jdoubleArray, elems: *mut jdouble, mode: jint)
        => ReleaseDoubleArrayElements;
    fn GetDoubleArrayRegion(array: jdoubleArray, start: jsize, len: jsize, buf: *mut jdouble)
        => GetDoubleArrayRegion;
    fn SetDoubleArrayRegion(array: jdoubleArray, start: jsize, len: jsize, buf: *const jdouble)
        => SetDoubleArrayRegion;
}
