//! Extension → `Content-Type` mapping for served files.

use std::ffi::OsStr;
use std::path::Path;

/// Fallback for anything unrecognized.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Types the viewer page itself needs. Checked before `mime_guess` so the
/// model formats get their registered glTF types.
const TABLE: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("js", "application/javascript"),
    ("css", "text/css"),
    ("glb", "model/gltf-binary"),
    ("gltf", "model/gltf+json"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
];

/// Content type for a file path, by extension (case-insensitive).
#[must_use]
pub fn content_type(path: &Path) -> &'static str {
    let Some(ext) = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase)
    else {
        return OCTET_STREAM;
    };

    TABLE
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .or_else(|| mime_guess::from_ext(&ext).first_raw())
        .unwrap_or(OCTET_STREAM)
}
