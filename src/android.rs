//! Android-specific setup.
//!
//! Billing callbacks only ever arrive on Android, so this is where the `log` output of the relay
//! ends up being routed to logcat.

/// Tag under which the relay's logs show up in logcat.
pub const LOG_TAG: &str = "GoogleBilling";

/// Installs `android_logger` as the `log` backend, up to `max_level`.
///
/// `jni`'s own logging is filtered out. Calling this more than once is harmless.
#[cfg(all(feature = "android-logging", target_os = "android"))]
#[cfg_attr(docsrs, doc(cfg(feature = "android-logging")))]
pub fn init_logging(max_level: log::LevelFilter) {
    let log_filter = android_logger::FilterBuilder::new()
        .filter_level(max_level)
        .filter_module("jni", log::LevelFilter::Off)
        .build();

    android_logger::init_once(
        android_logger::Config::default()
            .with_tag(LOG_TAG)
            .with_max_level(max_level)
            .with_filter(log_filter),
    );
}
