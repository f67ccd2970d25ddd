//! The receiving end of the billing relay.
//!
//! Native code doesn't know which handler should receive billing callbacks until the
//! application tells it, so one [BillingHandler] is installed per process, typically from the
//! app's `JNI_OnLoad` or its own FFI initialization layer.

use jni::objects::{JClass, JObject, JString};
use jni::sys::jint;
use jni::JNIEnv;
use once_cell::sync::OnceCell;

static HANDLER: OnceCell<&'static dyn BillingHandler> = OnceCell::new();

/// Receives every billing callback raised by `google.billing.GoogleBillingHelper`.
///
/// Each method matches exactly one `native` method of the Java helper and receives its arguments
/// unchanged. There are no default implementations, so a handler can't silently miss an event.
///
/// Callbacks arrive on whichever thread the Billing SDK delivers them on. Object arguments are JNI
/// local references which are only valid for the duration of the call; promote them with
/// [JNIEnv::new_global_ref] to keep them around.
pub trait BillingHandler: Send + Sync {
    /// `BillingClientStateListener.onBillingSetupFinished`
    fn on_billing_setup_finished<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        class: JClass<'local>,
        tag: jint,
        callback_id: jint,
        billing_result: JObject<'local>,
    );

    /// `BillingClientStateListener.onBillingServiceDisconnected`
    fn on_billing_service_disconnected<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        class: JClass<'local>,
        tag: jint,
        callback_id: jint,
    );

    /// `ProductDetailsResponseListener.onProductDetailsResponse`
    ///
    /// `start_id` is where the Java side started numbering the cached product details.
    #[allow(clippy::too_many_arguments)]
    fn on_product_details_response<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        class: JClass<'local>,
        tag: jint,
        callback_id: jint,
        billing_result: JObject<'local>,
        product_details_list: JObject<'local>,
        start_id: jint,
    );

    /// `PurchasesUpdatedListener.onPurchasesUpdated`
    fn on_purchases_updated<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        class: JClass<'local>,
        tag: jint,
        billing_result: JObject<'local>,
        purchase_list: JObject<'local>,
        start_id: jint,
    );

    /// `ConsumeResponseListener.onConsumeResponse`
    fn on_consume_response<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        class: JClass<'local>,
        tag: jint,
        callback_id: jint,
        billing_result: JObject<'local>,
        purchase_token: JString<'local>,
    );

    /// `PurchasesResponseListener.onQueryPurchasesResponse`
    #[allow(clippy::too_many_arguments)]
    fn on_query_purchases_response<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        class: JClass<'local>,
        tag: jint,
        callback_id: jint,
        billing_result: JObject<'local>,
        purchase_list: JObject<'local>,
        start_id: jint,
    );

    /// `AcknowledgePurchaseResponseListener.onAcknowledgePurchaseResponse`
    fn on_acknowledge_purchase_response<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        class: JClass<'local>,
        tag: jint,
        callback_id: jint,
        billing_result: JObject<'local>,
    );

    /// `BillingConfigResponseListener.onBillingConfigResponse`
    fn on_billing_config_response<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        class: JClass<'local>,
        tag: jint,
        callback_id: jint,
        billing_result: JObject<'local>,
        billing_config: JObject<'local>,
    );

    /// `AlternativeBillingOnlyReportingDetailsListener.onAlternativeBillingOnlyTokenResponse`
    fn on_alternative_billing_only_token_response<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        class: JClass<'local>,
        tag: jint,
        callback_id: jint,
        billing_result: JObject<'local>,
        reporting_details: JObject<'local>,
    );

    /// `ExternalOfferReportingDetailsListener.onExternalOfferReportingDetailsResponse`
    fn on_external_offer_reporting_details_response<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        class: JClass<'local>,
        tag: jint,
        callback_id: jint,
        billing_result: JObject<'local>,
        reporting_details: JObject<'local>,
    );

    /// `AlternativeBillingOnlyAvailabilityListener.onAlternativeBillingOnlyAvailabilityResponse`
    fn on_alternative_billing_only_availability_response<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        class: JClass<'local>,
        tag: jint,
        callback_id: jint,
        billing_result: JObject<'local>,
    );

    /// `ExternalOfferAvailabilityListener.onExternalOfferAvailabilityResponse`
    fn on_external_offer_availability_response<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        class: JClass<'local>,
        tag: jint,
        callback_id: jint,
        billing_result: JObject<'local>,
    );

    /// `AlternativeBillingOnlyInformationDialogListener.onAlternativeBillingOnlyInformationDialogResponse`
    fn on_alternative_billing_only_information_dialog_response<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        class: JClass<'local>,
        tag: jint,
        callback_id: jint,
        billing_result: JObject<'local>,
    );

    /// `ExternalOfferInformationDialogListener.onExternalOfferInformationDialogResponse`
    fn on_external_offer_information_dialog_response<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        class: JClass<'local>,
        tag: jint,
        callback_id: jint,
        billing_result: JObject<'local>,
    );

    /// `InAppMessageResponseListener.onInAppMessageResponse`
    fn on_in_app_message_response<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        class: JClass<'local>,
        tag: jint,
        callback_id: jint,
        in_app_message_result: JObject<'local>,
    );

    /// `UserChoiceBillingListener.userSelectedAlternativeBilling`
    fn user_selected_alternative_billing<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        class: JClass<'local>,
        tag: jint,
        user_choice_details: JObject<'local>,
    );
}

/// Installs the handler which receives every billing callback for the lifetime of the process.
///
/// Only the first installation takes effect, later calls are ignored.
///
/// This function will never panic.
pub fn install_handler(handler: &'static dyn BillingHandler) {
    if HANDLER.set(handler).is_err() {
        log::debug!("a billing handler is already installed, keeping the existing one");
    }
}

/// Returns the installed handler, if any.
pub fn installed_handler() -> Option<&'static dyn BillingHandler> {
    HANDLER.get().copied()
}
