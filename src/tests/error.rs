use jni::errors::Error as JNIError;
use std::error::Error as StdError;

use super::fake_env;
use crate::Error;

#[test]
fn keeps_the_jni_cause() {
    // Only pending Java exceptions touch the environment, so a fake one is fine here.
    let err = Error::new(&mut fake_env(), JNIError::NullPtr("builder"));

    assert!(matches!(err.cause(), JNIError::NullPtr("builder")));
    assert_eq!(
        err.to_string(),
        format!("JNI call failed: {}", JNIError::NullPtr("builder"))
    );
}

#[test]
fn exposes_the_cause_as_source() {
    let err = Error::new(&mut fake_env(), JNIError::WrongJValueType("boolean", "object"));

    let source = err.source().expect("the JNI error is the source");
    assert_eq!(
        source.to_string(),
        JNIError::WrongJValueType("boolean", "object").to_string()
    );
}
