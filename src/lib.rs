#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod error;
pub use error::Error;

pub mod event;
pub use event::{EventKind, HELPER_CLASS};

mod handler;
pub use handler::{install_handler, installed_handler, BillingHandler};

mod jvm;
pub use jvm::preload_java_classes;

mod params;
pub use params::{Builder as PendingPurchasesParamsBuilder, PendingPurchasesParams};

// The exported JNI entry points. Nothing in Rust needs to name them.
mod relay;

// Build the Android module when generating docs so that
// the Android-specific functions are included regardless of
// the host.
#[cfg(any(all(doc, docsrs), target_os = "android"))]
#[cfg_attr(docsrs, doc(cfg(target_os = "android")))]
pub mod android;

/// Recording handler and test suites for the relay and the params builder.
#[cfg(test)]
mod tests;
