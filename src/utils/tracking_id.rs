//! Tracking identifier generation.
//!
//! Every generated QR code embeds a tracking URL whose last path segment is a
//! fresh random identifier. The identifier doubles as the public lookup key
//! for the redirect endpoint, so it must be unguessable and URL-safe.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const TRACKING_ID_BYTES: usize = 9;

/// Generates a cryptographically secure random tracking identifier.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character identifier.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let id = generate_tracking_id();
/// assert_eq!(id.len(), 12);
/// assert!(id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_tracking_id() -> String {
    let mut buffer = [0u8; TRACKING_ID_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
