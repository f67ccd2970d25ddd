use jni::objects::{JClass, JObject, JString};
use jni::JNIEnv;

mod error;
mod jvm;
mod params;

// The relay never looks behind the JNI handles it's given, so tests can hand it
// made-up addresses and check that the very same addresses come out the other side.

pub(crate) const FAKE_ENV: usize = 0x1000;
pub(crate) const FAKE_CLASS: usize = 0x2000;

pub(crate) fn fake_env<'local>() -> JNIEnv<'local> {
    // SAFETY: The pointer is non-null and is never dereferenced by the code under test.
    unsafe { JNIEnv::from_raw(FAKE_ENV as *mut jni::sys::JNIEnv) }.expect("pointer is non-null")
}

pub(crate) fn fake_class<'local>() -> JClass<'local> {
    // SAFETY: See `fake_env`.
    unsafe { JClass::from_raw(FAKE_CLASS as jni::sys::jclass) }
}

pub(crate) fn fake_object<'local>(addr: usize) -> JObject<'local> {
    // SAFETY: See `fake_env`.
    unsafe { JObject::from_raw(addr as jni::sys::jobject) }
}

pub(crate) fn fake_string<'local>(addr: usize) -> JString<'local> {
    // SAFETY: See `fake_env`.
    unsafe { JString::from_raw(addr as jni::sys::jstring) }
}
