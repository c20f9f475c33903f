//! MIME type detection based on file suffixes.

/// Suffix table, first match wins.
const TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".gif", "image/gif"),
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".mp4", "video/mp4"),
];

/// Maps a filename to the `Content-type` value it is served with.
/// Unknown suffixes fall back to `text/plain`.
pub fn content_type(path: &str) -> &'static str {
    TYPES
        .iter()
        .find(|(suffix, _)| path.ends_with(suffix))
        .map(|(_, mime)| *mime)
        .unwrap_or("text/plain")
}
