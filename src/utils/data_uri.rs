//! Data URI handling for stored QR images.
//!
//! Browser clients submit rendered QR images as data URIs
//! (`data:image/png;base64,...`). Only the base64 payload is persisted.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex matching a base64 image data URI prefix.
static DATA_URI_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^data:image/\w+;base64,").unwrap());

/// Strips a `data:image/...;base64,` prefix from an image payload.
///
/// Inputs without the prefix (already-stripped payloads, raw SVG markup)
/// are returned unchanged.
pub fn strip_data_uri_prefix(payload: &str) -> String {
    DATA_URI_PREFIX.replace(payload, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_png_prefix() {
        let stripped = strip_data_uri_prefix("data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(stripped, "iVBORw0KGgo=");
    }

    #[test]
    fn test_strips_jpeg_prefix() {
        let stripped = strip_data_uri_prefix("data:image/jpeg;base64,/9j/4AAQ");
        assert_eq!(stripped, "/9j/4AAQ");
    }

    #[test]
    fn test_strips_svg_prefix() {
        let stripped = strip_data_uri_prefix("data:image/svg;base64,PHN2Zz4=");
        assert_eq!(stripped, "PHN2Zz4=");
    }

    #[test]
    fn test_leaves_bare_payload_unchanged() {
        let stripped = strip_data_uri_prefix("iVBORw0KGgo=");
        assert_eq!(stripped, "iVBORw0KGgo=");
    }

    #[test]
    fn test_leaves_raw_svg_unchanged() {
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>";
        assert_eq!(strip_data_uri_prefix(svg), svg);
    }

    #[test]
    fn test_only_strips_prefix_at_start() {
        let payload = "abc data:image/png;base64,def";
        assert_eq!(strip_data_uri_prefix(payload), payload);
    }

    #[test]
    fn test_strips_only_first_prefix() {
        let stripped = strip_data_uri_prefix("data:image/png;base64,data:image/png;base64,x");
        assert_eq!(stripped, "data:image/png;base64,x");
    }
}
