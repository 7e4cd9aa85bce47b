//! Destination URL validation.
//!
//! Destination URLs are stored exactly as submitted, so scans land on the
//! address the user typed. Validation only rejects inputs that cannot be
//! dereferenced by a browser.

use url::Url;

/// Errors that can occur during destination URL validation.
#[derive(Debug, thiserror::Error)]
pub enum DestinationUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,
}

/// Validates that a destination URL is an absolute HTTP(S) URL.
///
/// # Security
///
/// Rejects potentially dangerous protocols like `javascript:`, `data:`, `file:`, etc.
///
/// # Errors
///
/// Returns [`DestinationUrlError::InvalidFormat`] for malformed URLs.
/// Returns [`DestinationUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`DestinationUrlError::MissingHost`] for URLs without a host.
pub fn validate_destination_url(input: &str) -> Result<(), DestinationUrlError> {
    let url = Url::parse(input).map_err(|e| DestinationUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(DestinationUrlError::UnsupportedProtocol),
    }

    if url.host_str().is_none() {
        return Err(DestinationUrlError::MissingHost);
    }

    Ok(())
}
