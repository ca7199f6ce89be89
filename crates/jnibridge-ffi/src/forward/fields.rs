#![allow(non_snake_case)]

use std::os::raw::c_char;

use jni_sys::{
    jboolean, jbyte, jchar, jclass, jdouble, jfieldID, jfloat, jint, jlong, jobject, jshort,
};

forward! {
    fn GetFieldID(clazz: jclass, name: *const c_char, sig: *const c_char) -> jfieldID => GetFieldID;

    fn GetObjectField(obj: jobject, field_id: jfieldID) -> jobject => GetObjectField;
    fn GetBooleanField(obj: jobject, field_id: jfieldID) -> jboolean => GetBooleanField;
    fn GetByteField(obj: jobject, field_id: jfieldID) -> jbyte => GetByteField;
    fn GetCharField(obj: jobject, field_id: jfieldID) -> jchar => GetCharField;
    fn GetShortField(obj: jobject, field_id: jfieldID) -> jshort => GetShortField;
    fn GetIntField(obj: jobject, field_id: jfieldID) -> jint => GetIntField;
    fn GetLongField(obj: jobject, field_id: jfieldID) -> jlong => GetLongField;
    fn GetFloatField(obj: jobject, field_id: jfieldID) -> jfloat => GetFloatField;
    fn GetDoubleField(obj: jobject, field_id: jfieldID) -> jdouble => GetDoubleField;

    fn SetObjectField(obj: jobject, field_id: jfieldID, value: jobject) => SetObjectField;
    fn SetBooleanField(obj: jobject, field_id: jfieldID, value: jboolean) => SetBooleanField;
    fn SetByteField(obj: jobject, field_id: jfieldID, value: jbyte) => SetByteField;
    fn SetCharField(obj: jobject, field_id: jfieldID, value: jchar) => SetCharField;
    fn SetShortField(obj: jobject, field_id: jfieldID, value: jshort) => SetShortField;
    fn SetIntField(obj: jobject, field_id: jfieldID, value: jint) => SetIntField;
    fn SetLongField(obj: jobject, field_id: jfieldID, value: jlong) => SetLongField;
    fn SetFloatField(obj: jobject, field_id: jfieldID, value: jfloat) => SetFloatField;
    fn SetDoubleField(obj: jobject, field_id: jfieldID, value: jdouble) => SetDoubleField;
}

forward! {
    fn GetStaticFieldID(clazz: jclass, name: *const c_char, sig: *const c_char) -> jfieldID
        => GetStaticFieldID;

    fn GetStaticObjectField(clazz: jclass, field_id: jfieldID) -> jobject => GetStaticObjectField;
    fn GetStaticBooleanField(clazz: jclass, field_id: jfieldID) -> jboolean => GetStaticBooleanField;
    fn GetStaticByteField(clazz: jclass, field_id: jfieldID) -> jbyte => GetStaticByteField;
    fn GetStaticCharField(clazz: jclass, field_id: jfieldID) -> jchar => GetStaticCharField;
    fn GetStaticShortField(clazz: jclass, field_id: jfieldID) -> jshort => GetStaticShortField;
    fn GetStaticIntField(clazz: jclass, field_id: jfieldID) -> jint => GetStaticIntField;
    fn GetStaticLongField(clazz: jclass, field_id: jfieldID) -> jlong => GetStaticLongField;
    fn GetStaticFloatField(clazz: jclass, field_id: jfieldID) -> jfloat => GetStaticFloatField;
    fn GetStaticDoubleField(clazz: jclass, field_id: jfieldID) -> jdouble => GetStaticDoubleField;

    fn SetStaticObjectField(clazz: jclass, field_id: jfieldID, value: jobject)
        => SetStaticObjectField;
    fn SetStaticBooleanField(clazz: jclass, field_id: jfieldID, value: jboolean)
        => SetStaticBooleanField;
    fn SetStaticByteField(clazz: jclass, field_id: jfieldID, value: jbyte)
        => SetStaticByteField;
    fn SetStaticCharField(clazz: jclass, field_id: jfieldID, value: jchar)
        => SetStaticCharField;
    fn SetStaticShortField(clazz: jclass, field_id: jfieldID, value: jshort)
        => SetStaticShortField;
    fn SetStaticIntField(clazz: jclass, field_id: jfieldID, value: jint)
        => SetStaticIntField;
    fn SetStaticLongField(clazz: jclass, field_id: jfieldID, value: jlong)
        => SetStaticLongField;
    fn SetStaticFloatField(clazz: jclass, field_id: jfieldID, value: jfloat)
        => SetStaticFloatField;
    fn SetStaticDoubleField(clazz: jclass, field_id: jfieldID, value: jdouble)
        => SetStaticDoubleField;
}
