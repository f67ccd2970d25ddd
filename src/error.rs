use jni::errors::Error as JNIError;
use jni::JNIEnv;
use std::fmt;

/// Wrapper for JNI errors that will log and clear Java exceptions.
#[derive(Debug)]
pub struct Error {
    cause: JNIError,
}

impl Error {
    pub(crate) fn new(env: &mut JNIEnv, cause: JNIError) -> Self {
        if let JNIError::JavaException = cause {
            let _ = env.exception_describe();
            let _ = env.exception_clear();
        }

        Self { cause }
    }

    /// The JNI error which caused this one.
    pub fn cause(&self) -> &JNIError {
        &self.cause
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JNI call failed: {}", self.cause)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}
