use jni::errors::Error as JNIError;

use crate::jvm::{CachedClass, PENDING_PURCHASES_PARAMS_CLASS};

#[test]
fn failed_lookups_are_retried() {
    let cached = CachedClass::new("com/example/Missing");
    let mut attempts = 0;

    for _ in 0..3 {
        let result = cached.get_or_load(|| {
            attempts += 1;
            Err(JNIError::JavaException)
        });
        assert!(matches!(result, Err(JNIError::JavaException)));
    }

    assert_eq!(attempts, 3);
    assert!(!cached.is_loaded());
}

#[test]
fn sdk_classes_start_unloaded() {
    assert!(!PENDING_PURCHASES_PARAMS_CLASS.is_loaded());
}
