//! The billing events raised by the Java helper and the JNI names they are bound to.

use std::fmt;

/// Fully qualified name of the Java class which declares the billing `native` methods.
pub const HELPER_CLASS: &str = "google.billing.GoogleBillingHelper";

/// The shape of one argument passed after the `(JNIEnv, jclass)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Param {
    /// `jint` identifying the billing client instance which raised the event.
    Tag,
    /// `jint` identifying the request the event answers.
    CallbackId,
    /// `jint` index of the first element the Java side cached for a list payload.
    StartId,
    /// An opaque `jobject` owned by the platform.
    Object,
    /// A `jstring` owned by the platform.
    String,
}

use Param::{CallbackId, Object, StartId, Tag};

/// Every billing event that the Java helper can deliver to native code.
// Note: Keep these in sync with the `native` declarations in `GoogleBillingHelper.java`.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    BillingSetupFinished,
    BillingServiceDisconnected,
    ProductDetailsResponse,
    PurchasesUpdated,
    ConsumeResponse,
    QueryPurchasesResponse,
    AcknowledgePurchaseResponse,
    BillingConfigResponse,
    AlternativeBillingOnlyTokenResponse,
    ExternalOfferReportingDetailsResponse,
    AlternativeBillingOnlyAvailabilityResponse,
    ExternalOfferAvailabilityResponse,
    AlternativeBillingOnlyInformationDialogResponse,
    ExternalOfferInformationDialogResponse,
    InAppMessageResponse,
    UserSelectedAlternativeBilling,
}

macro_rules! helper_symbol {
    ($method:literal) => {
        concat!("Java_google_billing_GoogleBillingHelper_", $method)
    };
}

impl EventKind {
    /// All event kinds, in declaration order.
    pub const ALL: [EventKind; 16] = [
        EventKind::BillingSetupFinished,
        EventKind::BillingServiceDisconnected,
        EventKind::ProductDetailsResponse,
        EventKind::PurchasesUpdated,
        EventKind::ConsumeResponse,
        EventKind::QueryPurchasesResponse,
        EventKind::AcknowledgePurchaseResponse,
        EventKind::BillingConfigResponse,
        EventKind::AlternativeBillingOnlyTokenResponse,
        EventKind::ExternalOfferReportingDetailsResponse,
        EventKind::AlternativeBillingOnlyAvailabilityResponse,
        EventKind::ExternalOfferAvailabilityResponse,
        EventKind::AlternativeBillingOnlyInformationDialogResponse,
        EventKind::ExternalOfferInformationDialogResponse,
        EventKind::InAppMessageResponse,
        EventKind::UserSelectedAlternativeBilling,
    ];

    /// The name of the `native` method on [HELPER_CLASS].
    pub const fn java_method_name(self) -> &'static str {
        match self {
            Self::BillingSetupFinished => "onBillingSetupFinished",
            Self::BillingServiceDisconnected => "onBillingServiceDisconnected",
            Self::ProductDetailsResponse => "onProductDetailsResponse",
            Self::PurchasesUpdated => "onPurchasesUpdated",
            Self::ConsumeResponse => "onConsumeResponse",
            Self::QueryPurchasesResponse => "onQueryPurchasesResponse",
            Self::AcknowledgePurchaseResponse => "onAcknowledgePurchaseResponse",
            Self::BillingConfigResponse => "onBillingConfigResponse",
            Self::AlternativeBillingOnlyTokenResponse => "onAlternativeBillingOnlyTokenResponse",
            Self::ExternalOfferReportingDetailsResponse => {
                "onExternalOfferReportingDetailsResponse"
            }
            Self::AlternativeBillingOnlyAvailabilityResponse => {
                "onAlternativeBillingOnlyAvailabilityResponse"
            }
            Self::ExternalOfferAvailabilityResponse => "onExternalOfferAvailabilityResponse",
            Self::AlternativeBillingOnlyInformationDialogResponse => {
                "onAlternativeBillingOnlyInformationDialogResponse"
            }
            Self::ExternalOfferInformationDialogResponse => {
                "onExternalOfferInformationDialogResponse"
            }
            Self::InAppMessageResponse => "onInAppMessageResponse",
            Self::UserSelectedAlternativeBilling => "userSelectedAlternativeBilling",
        }
    }

    /// The symbol the relay exports for this event.
    pub const fn export_symbol(self) -> &'static str {
        match self {
            Self::BillingSetupFinished => helper_symbol!("onBillingSetupFinished"),
            Self::BillingServiceDisconnected => helper_symbol!("onBillingServiceDisconnected"),
            Self::ProductDetailsResponse => helper_symbol!("onProductDetailsResponse"),
            Self::PurchasesUpdated => helper_symbol!("onPurchasesUpdated"),
            Self::ConsumeResponse => helper_symbol!("onConsumeResponse"),
            Self::QueryPurchasesResponse => helper_symbol!("onQueryPurchasesResponse"),
            Self::AcknowledgePurchaseResponse => helper_symbol!("onAcknowledgePurchaseResponse"),
            Self::BillingConfigResponse => helper_symbol!("onBillingConfigResponse"),
            Self::AlternativeBillingOnlyTokenResponse => {
                helper_symbol!("onAlternativeBillingOnlyTokenResponse")
            }
            Self::ExternalOfferReportingDetailsResponse => {
                helper_symbol!("onExternalOfferReportingDetailsResponse")
            }
            Self::AlternativeBillingOnlyAvailabilityResponse => {
                helper_symbol!("onAlternativeBillingOnlyAvailabilityResponse")
            }
            Self::ExternalOfferAvailabilityResponse => {
                helper_symbol!("onExternalOfferAvailabilityResponse")
            }
            Self::AlternativeBillingOnlyInformationDialogResponse => {
                helper_symbol!("onAlternativeBillingOnlyInformationDialogResponse")
            }
            Self::ExternalOfferInformationDialogResponse => {
                helper_symbol!("onExternalOfferInformationDialogResponse")
            }
            Self::InAppMessageResponse => helper_symbol!("onInAppMessageResponse"),
            Self::UserSelectedAlternativeBilling => {
                helper_symbol!("userSelectedAlternativeBilling")
            }
        }
    }

    /// The arguments the entry point receives after `(JNIEnv, jclass)`, in order.
    pub const fn params(self) -> &'static [Param] {
        match self {
            Self::BillingServiceDisconnected => &[Tag, CallbackId],
            Self::ProductDetailsResponse | Self::QueryPurchasesResponse => {
                &[Tag, CallbackId, Object, Object, StartId]
            }
            Self::PurchasesUpdated => &[Tag, Object, Object, StartId],
            Self::ConsumeResponse => &[Tag, CallbackId, Object, Param::String],
            Self::BillingConfigResponse
            | Self::AlternativeBillingOnlyTokenResponse
            | Self::ExternalOfferReportingDetailsResponse => &[Tag, CallbackId, Object, Object],
            Self::BillingSetupFinished
            | Self::AcknowledgePurchaseResponse
            | Self::AlternativeBillingOnlyAvailabilityResponse
            | Self::ExternalOfferAvailabilityResponse
            | Self::AlternativeBillingOnlyInformationDialogResponse
            | Self::ExternalOfferInformationDialogResponse
            | Self::InAppMessageResponse => &[Tag, CallbackId, Object],
            Self::UserSelectedAlternativeBilling => &[Tag, Object],
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.java_method_name())
    }
}

/// Builds the JNI short name of a `native` method.
///
/// `class` may use either `.` or `/` as the package separator. Characters are escaped following
/// the [JNI naming rules]:
///
/// - `_` becomes `_1`
/// - `;` becomes `_2`
/// - `[` becomes `_3`
/// - anything else which isn't an ASCII letter or digit becomes `_0xxxx`, one group per UTF-16 unit
///
/// [JNI naming rules]: <https://docs.oracle.com/en/java/javase/17/docs/specs/jni/design.html#resolving-native-method-names>
pub fn mangle_native_method(class: &str, method: &str) -> String {
    let mut symbol = String::from("Java_");
    mangle_into(&mut symbol, class, true);
    symbol.push('_');
    mangle_into(&mut symbol, method, false);
    symbol
}

fn mangle_into(out: &mut String, name: &str, is_class: bool) {
    for c in name.chars() {
        match c {
            '.' | '/' if is_class => out.push('_'),
            '_' => out.push_str("_1"),
            ';' => out.push_str("_2"),
            '[' => out.push_str("_3"),
            c if c.is_ascii_alphanumeric() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("_0{:04x}", unit));
                }
            }
        }
    }
}
