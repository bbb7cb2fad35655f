//! Object key helpers
//!
//! S3 notifications carry URL-encoded keys where `+` stands for a space.
//! Thumbnails live next to their source with [`THUMBNAIL_MARKER`] inserted
//! before the extension, and any key carrying the marker is treated as our
//! own output.

use crate::error::{AppError, Result};
use std::borrow::Cow;

/// Marker inserted into every generated thumbnail key
pub const THUMBNAIL_MARKER: &str = "-thumbnail";

/// Decode a notification key: `+` becomes a space, then percent-decoding.
///
/// Fails when the decoded bytes are not valid UTF-8. Malformed escapes
/// such as a trailing `%` are kept verbatim.
pub fn decode_key(raw: &str) -> Result<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .map_err(|e| AppError::KeyDecode(format!("{raw}: {e}")))
}

/// Same as [`decode_key`], replacing invalid UTF-8 with U+FFFD.
pub fn decode_key_lossy(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Whether a decoded key names a generated thumbnail
pub fn is_thumbnail_key(key: &str) -> bool {
    key.contains(THUMBNAIL_MARKER)
}

/// Insert the marker before the last `.`, or append it when there is no
/// extension. A leading dot (`.profile`) does not count as an extension.
pub fn derive_thumbnail_key(key: &str) -> String {
    match key.rfind('.') {
        Some(dot) if dot > 0 => format!("{}{}{}", &key[..dot], THUMBNAIL_MARKER, &key[dot..]),
        _ => format!("{key}{THUMBNAIL_MARKER}"),
    }
}
