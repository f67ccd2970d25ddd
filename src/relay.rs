//! Native entry points for `google.billing.GoogleBillingHelper`.
//!
//! Every function here is the native half of one `static native` method on the Java helper. It
//! forwards its arguments, untouched and in order, to the installed [BillingHandler]. Nothing is
//! validated: Java exceptions the handler leaves pending surface in Java once the call returns.

use jni::objects::{JClass, JObject, JString};
use jni::sys::jint;
use jni::JNIEnv;

use crate::event::EventKind;
use crate::handler::{installed_handler, BillingHandler};

fn forward<F>(event: EventKind, f: F)
where
    F: FnOnce(&'static dyn BillingHandler),
{
    forward_to(installed_handler(), event, f);
}

/// Returns whether the event reached a handler.
pub(crate) fn forward_to<F>(
    handler: Option<&'static dyn BillingHandler>,
    event: EventKind,
    f: F,
) -> bool
where
    F: FnOnce(&'static dyn BillingHandler),
{
    match handler {
        Some(handler) => {
            log::trace!("forwarding {} to the billing handler", event);
            f(handler);
            true
        }
        None => {
            log::warn!("no billing handler installed, dropping {}", event);
            false
        }
    }
}

#[export_name = "Java_google_billing_GoogleBillingHelper_onBillingSetupFinished"]
pub extern "C" fn on_billing_setup_finished<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
    tag: jint,
    callback_id: jint,
    billing_result: JObject<'local>,
) {
    forward(EventKind::BillingSetupFinished, |handler| {
        handler.on_billing_setup_finished(&mut env, class, tag, callback_id, billing_result)
    })
}

#[export_name = "Java_google_billing_GoogleBillingHelper_onBillingServiceDisconnected"]
pub extern "C" fn on_billing_service_disconnected<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
    tag: jint,
    callback_id: jint,
) {
    forward(EventKind::BillingServiceDisconnected, |handler| {
        handler.on_billing_service_disconnected(&mut env, class, tag, callback_id)
    })
}

#[export_name = "Java_google_billing_GoogleBillingHelper_onProductDetailsResponse"]
pub extern "C" fn on_product_details_response<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
    tag: jint,
    callback_id: jint,
    billing_result: JObject<'local>,
    product_details_list: JObject<'local>,
    start_id: jint,
) {
    forward(EventKind::ProductDetailsResponse, |handler| {
        handler.on_product_details_response(
            &mut env,
            class,
            tag,
            callback_id,
            billing_result,
            product_details_list,
            start_id,
        )
    })
}

#[export_name = "Java_google_billing_GoogleBillingHelper_onPurchasesUpdated"]
pub extern "C" fn on_purchases_updated<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
    tag: jint,
    billing_result: JObject<'local>,
    purchase_list: JObject<'local>,
    start_id: jint,
) {
    forward(EventKind::PurchasesUpdated, |handler| {
        handler.on_purchases_updated(
            &mut env,
            class,
            tag,
            billing_result,
            purchase_list,
            start_id,
        )
    })
}

#[export_name = "Java_google_billing_GoogleBillingHelper_onConsumeResponse"]
pub extern "C" fn on_consume_response<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
    tag: jint,
    callback_id: jint,
    billing_result: JObject<'local>,
    purchase_token: JString<'local>,
) {
    forward(EventKind::ConsumeResponse, |handler| {
        handler.on_consume_response(
            &mut env,
            class,
            tag,
            callback_id,
            billing_result,
            purchase_token,
        )
    })
}

#[export_name = "Java_google_billing_GoogleBillingHelper_onQueryPurchasesResponse"]
pub extern "C" fn on_query_purchases_response<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
    tag: jint,
    callback_id: jint,
    billing_result: JObject<'local>,
    purchase_list: JObject<'local>,
    start_id: jint,
) {
    forward(EventKind::QueryPurchasesResponse, |handler| {
        handler.on_query_purchases_response(
            &mut env,
            class,
            tag,
            callback_id,
            billing_result,
            purchase_list,
            start_id,
        )
    })
}

#[export_name = "Java_google_billing_GoogleBillingHelper_onAcknowledgePurchaseResponse"]
pub extern "C" fn on_acknowledge_purchase_response<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
    tag: jint,
    callback_id: jint,
    billing_result: JObject<'local>,
) {
    forward(EventKind::AcknowledgePurchaseResponse, |handler| {
        handler.on_acknowledge_purchase_response(&mut env, class, tag, callback_id, billing_result)
    })
}

#[export_name = "Java_google_billing_GoogleBillingHelper_onBillingConfigResponse"]
pub extern "C" fn on_billing_config_response<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
    tag: jint,
    callback_id: jint,
    billing_result: JObject<'local>,
    billing_config: JObject<'local>,
) {
    forward(EventKind::BillingConfigResponse, |handler| {
        handler.on_billing_config_response(
            &mut env,
            class,
            tag,
            callback_id,
            billing_result,
            billing_config,
        )
    })
}

#[export_name = "Java_google_billing_GoogleBillingHelper_onAlternativeBillingOnlyTokenResponse"]
pub extern "C" fn on_alternative_billing_only_token_response<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
    tag: jint,
    callback_id: jint,
    billing_result: JObject<'local>,
    reporting_details: JObject<'local>,
) {
    forward(EventKind::AlternativeBillingOnlyTokenResponse, |handler| {
        handler.on_alternative_billing_only_token_response(
            &mut env,
            class,
            tag,
            callback_id,
            billing_result,
            reporting_details,
        )
    })
}

#[export_name = "Java_google_billing_GoogleBillingHelper_onExternalOfferReportingDetailsResponse"]
pub extern "C" fn on_external_offer_reporting_details_response<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
    tag: jint,
    callback_id: jint,
    billing_result: JObject<'local>,
    reporting_details: JObject<'local>,
) {
    forward(EventKind::ExternalOfferReportingDetailsResponse, |handler| {
        handler.on_external_offer_reporting_details_response(
            &mut env,
            class,
            tag,
            callback_id,
            billing_result,
            reporting_details,
        )
    })
}

#[export_name = "Java_google_billing_GoogleBillingHelper_onAlternativeBillingOnlyAvailabilityResponse"]
pub extern "C" fn on_alternative_billing_only_availability_response<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
    tag: jint,
    callback_id: jint,
    billing_result: JObject<'local>,
) {
    forward(EventKind::AlternativeBillingOnlyAvailabilityResponse, |handler| {
        handler.on_alternative_billing_only_availability_response(
            &mut env,
            class,
            tag,
            callback_id,
            billing_result,
        )
    })
}

#[export_name = "Java_google_billing_GoogleBillingHelper_onExternalOfferAvailabilityResponse"]
pub extern "C" fn on_external_offer_availability_response<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
    tag: jint,
    callback_id: jint,
    billing_result: JObject<'local>,
) {
    forward(EventKind::ExternalOfferAvailabilityResponse, |handler| {
        handler.on_external_offer_availability_response(
            &mut env,
            class,
            tag,
            callback_id,
            billing_result,
        )
    })
}

#[export_name = "Java_google_billing_GoogleBillingHelper_onAlternativeBillingOnlyInformationDialogResponse"]
pub extern "C" fn on_alternative_billing_only_information_dialog_response<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
    tag: jint,
    callback_id: jint,
    billing_result: JObject<'local>,
) {
    forward(
        EventKind::AlternativeBillingOnlyInformationDialogResponse,
        |handler| {
            handler.on_alternative_billing_only_information_dialog_response(
                &mut env,
                class,
                tag,
                callback_id,
                billing_result,
            )
        },
    )
}

#[export_name = "Java_google_billing_GoogleBillingHelper_onExternalOfferInformationDialogResponse"]
pub extern "C" fn on_external_offer_information_dialog_response<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
    tag: jint,
    callback_id: jint,
    billing_result: JObject<'local>,
) {
    forward(EventKind::ExternalOfferInformationDialogResponse, |handler| {
        handler.on_external_offer_information_dialog_response(
            &mut env,
            class,
            tag,
            callback_id,
            billing_result,
        )
    })
}

#[export_name = "Java_google_billing_GoogleBillingHelper_onInAppMessageResponse"]
pub extern "C" fn on_in_app_message_response<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
    tag: jint,
    callback_id: jint,
    in_app_message_result: JObject<'local>,
) {
    forward(EventKind::InAppMessageResponse, |handler| {
        handler.on_in_app_message_response(
            &mut env,
            class,
            tag,
            callback_id,
            in_app_message_result,
        )
    })
}

#[export_name = "Java_google_billing_GoogleBillingHelper_userSelectedAlternativeBilling"]
pub extern "C" fn user_selected_alternative_billing<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
    tag: jint,
    user_choice_details: JObject<'local>,
) {
    forward(EventKind::UserSelectedAlternativeBilling, |handler| {
        handler.user_selected_alternative_billing(&mut env, class, tag, user_choice_details)
    })
}
