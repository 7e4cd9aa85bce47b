//! External QR rendering integration.
//!
//! The rendering service is reached over HTTP and treated as a black box:
//! style configuration is forwarded unchanged and the returned image bytes
//! are handed back to the caller.

pub mod monkey;
pub mod service;

pub use monkey::MonkeyQrApi;
pub use service::QrApiService;

#[cfg(test)]
pub use service::MockQrApiService;
