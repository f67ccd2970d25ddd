//! Pending purchase support for billing client construction.

use jni::errors::Error as JNIError;
use jni::objects::{JClass, JObject};
use jni::JNIEnv;

use crate::jvm::PENDING_PURCHASES_PARAMS_CLASS;
use crate::Error;

// The builder, one result per setter, and the built params.
const LOCAL_FRAME_CAPACITY: i32 = 4;

const JAVA_BUILDER_RETURN: &str = "()Lcom/android/billingclient/api/PendingPurchasesParams$Builder;";

const JAVA_BUILD_RETURN: &str = "()Lcom/android/billingclient/api/PendingPurchasesParams;";

/// Controls which kinds of pending purchases the billing client accepts.
///
/// The only way to obtain one is through [PendingPurchasesParams::new_builder], and building only
/// succeeds once one-time products have been enabled:
///
/// ```
/// use google_billing_bridge::PendingPurchasesParams;
///
/// assert!(PendingPurchasesParams::new_builder().build().is_none());
///
/// let params = PendingPurchasesParams::new_builder()
///     .enable_one_time_products()
///     .enable_prepaid_plans()
///     .build()
///     .expect("one-time products were enabled");
/// assert!(params.enable_one_time_products());
/// assert!(params.enable_prepaid_plans());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingPurchasesParams {
    enable_one_time_products: bool,
    enable_prepaid_plans: bool,
}

/// Accumulates the settings of a [PendingPurchasesParams].
#[derive(Debug, Default)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct Builder {
    enable_one_time_products: bool,
    enable_prepaid_plans: bool,
}

impl Builder {
    /// Enables pending purchases for one-time products. Required.
    pub fn enable_one_time_products(mut self) -> Self {
        self.enable_one_time_products = true;
        self
    }

    /// Enables pending purchases for prepaid plans.
    pub fn enable_prepaid_plans(mut self) -> Self {
        self.enable_prepaid_plans = true;
        self
    }

    /// Returns `None` if one-time products were never enabled.
    pub fn build(self) -> Option<PendingPurchasesParams> {
        if !self.enable_one_time_products {
            return None;
        }

        Some(PendingPurchasesParams {
            enable_one_time_products: self.enable_one_time_products,
            enable_prepaid_plans: self.enable_prepaid_plans,
        })
    }
}

impl PendingPurchasesParams {
    /// Creates a builder with every kind of pending purchase disabled.
    pub fn new_builder() -> Builder {
        Builder::default()
    }

    /// Whether pending purchases are enabled for one-time products. Always `true`.
    pub fn enable_one_time_products(&self) -> bool {
        self.enable_one_time_products
    }

    /// Whether pending purchases are enabled for prepaid plans.
    pub fn enable_prepaid_plans(&self) -> bool {
        self.enable_prepaid_plans
    }

    /// Creates the Billing SDK's `PendingPurchasesParams` carrying the same settings.
    ///
    /// The returned object is a local reference in `env`'s frame. If the SDK throws, the
    /// exception is logged and cleared before the error is returned.
    ///
    /// The SDK class is looked up on first use. On a thread attached from native code that lookup
    /// can't see the SDK, so call [preload_java_classes](crate::preload_java_classes) from a
    /// Java-originated thread beforehand.
    pub fn to_java<'local>(&self, env: &mut JNIEnv<'local>) -> Result<JObject<'local>, Error> {
        log::debug!("creating Java PendingPurchasesParams from {:?}", self);

        self.new_java_object(env).map_err(|cause| Error::new(env, cause))
    }

    /// The Java builder setters `to_java` calls between `newBuilder()` and `build()`, in order.
    pub(crate) fn java_setters(&self) -> impl Iterator<Item = &'static str> {
        let prepaid_plans = self.enable_prepaid_plans.then_some("enablePrepaidPlans");
        std::iter::once("enableOneTimeProducts").chain(prepaid_plans)
    }

    fn new_java_object<'local>(
        &self,
        env: &mut JNIEnv<'local>,
    ) -> Result<JObject<'local>, JNIError> {
        let class = PENDING_PURCHASES_PARAMS_CLASS.get(env)?;

        // Every intermediate local reference is released with the frame, early returns included.
        env.with_local_frame_returning_local(LOCAL_FRAME_CAPACITY, |env| {
            let builder = env
                .call_static_method(
                    <&JClass>::from(class.as_obj()),
                    "newBuilder",
                    JAVA_BUILDER_RETURN,
                    &[],
                )?
                .l()?;

            for setter in self.java_setters() {
                env.call_method(&builder, setter, JAVA_BUILDER_RETURN, &[])?;
            }

            env.call_method(&builder, "build", JAVA_BUILD_RETURN, &[])?.l()
        })
    }
}
