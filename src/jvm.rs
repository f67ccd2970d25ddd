//! Lookup of the Billing SDK classes used from native code.
//!
//! `FindClass` resolves names through the class loader of the Java method at the top of the
//! calling thread's stack. On threads that were attached from native code that is the system
//! loader, which can't see the app's dependencies such as the Billing SDK. Classes are therefore
//! resolved once, on a Java-originated thread, and kept as global references.

use jni::errors::Error as JNIError;
use jni::objects::GlobalRef;
use jni::JNIEnv;
use once_cell::sync::OnceCell;

use crate::Error;

pub(crate) static PENDING_PURCHASES_PARAMS_CLASS: CachedClass =
    CachedClass::new("com/android/billingclient/api/PendingPurchasesParams");

/// Loads and caches a class on first use
pub(crate) struct CachedClass {
    name: &'static str,
    class: OnceCell<GlobalRef>,
}

impl CachedClass {
    /// Creates a lazily initialized class reference to the class with `name`.
    pub(crate) const fn new(name: &'static str) -> Self {
        Self {
            name,
            class: OnceCell::new(),
        }
    }

    /// Gets the cached class reference, looking it up through `env` on first use.
    pub(crate) fn get(&self, env: &mut JNIEnv) -> Result<&GlobalRef, JNIError> {
        self.get_or_load(|| {
            let class = env.find_class(self.name)?;
            env.new_global_ref(class)
        })
    }

    /// A failed lookup isn't cached, the next call tries again.
    pub(crate) fn get_or_load<F>(&self, load: F) -> Result<&GlobalRef, JNIError>
    where
        F: FnOnce() -> Result<GlobalRef, JNIError>,
    {
        self.class.get_or_try_init(|| {
            log::debug!("loading class {}", self.name);
            load()
        })
    }

    #[cfg(test)]
    pub(crate) fn is_loaded(&self) -> bool {
        self.class.get().is_some()
    }
}

/// Resolves and caches the Billing SDK classes this crate calls into.
///
/// Call this from `JNI_OnLoad`, or from any thread that entered native code from Java, such as a
/// [BillingHandler](crate::BillingHandler) callback. Once it has succeeded,
/// [PendingPurchasesParams::to_java](crate::PendingPurchasesParams::to_java) also works on
/// threads attached from native code.
///
/// Without it, the classes are resolved on first use, which fails on natively attached threads.
pub fn preload_java_classes(env: &mut JNIEnv) -> Result<(), Error> {
    match PENDING_PURCHASES_PARAMS_CLASS.get(env) {
        Ok(_) => Ok(()),
        Err(cause) => Err(Error::new(env, cause)),
    }
}
