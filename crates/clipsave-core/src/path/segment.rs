//! Filename hints taken from URL paths.

use super::decode::percent_decode;
use super::sanitize::replace_reserved_chars;

/// Last `/`-separated piece of a URL path (empty for `/` or a trailing slash).
pub fn last_path_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}

/// Decoded last path segment of an image source.
///
/// Parses `source` as a URL; when that fails, splits the raw string on `/`
/// and drops anything after `?`.
pub fn image_name_hint(source: &str) -> String {
    match url::Url::parse(source) {
        Ok(parsed) => percent_decode(last_path_segment(parsed.path())),
        Err(_) => {
            let tail = source.rsplit('/').next().unwrap_or("");
            let without_query = tail.split('?').next().unwrap_or("");
            percent_decode(without_query)
        }
    }
}

/// Extension of the URL path's last segment (text after its last `.`), sanitized.
///
/// `None` when the segment has no dot or nothing follows it.
pub fn trailing_extension(path: &str) -> Option<String> {
    let (_, ext) = last_path_segment(path).rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(replace_reserved_chars(ext))
}
