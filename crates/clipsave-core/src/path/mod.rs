//! Destination path resolution.
//!
//! Turns the configured base directory and a raw save payload into a relative
//! destination (`directory/filename`) for the platform download manager.
//! Pure functions; the only failure is an unusable link URL.

mod base_dir;
mod decode;
mod sanitize;
mod segment;
mod stamp;

pub use base_dir::normalize_base_directory;
pub use decode::percent_decode;
pub use sanitize::{cap_name_length, replace_reserved_chars, RESERVED_CHARS};
pub use segment::{image_name_hint, last_path_segment, trailing_extension};
pub use stamp::filename_timestamp;

use chrono::{DateTime, Utc};

use crate::error::SaveError;
use crate::request::{ResolvedDestination, SaveKind, SaveRequest};

/// Every text snippet goes to the same file; the download manager uniquifies.
pub const TEXT_FILENAME: &str = "saved_text.txt";

/// Derives the filename for a save using the current time for fallbacks.
///
/// # Examples
///
/// - `derive_filename(SaveKind::Text, "anything")` → `"saved_text.txt"`
/// - `derive_filename(SaveKind::Image, "https://x.com/a/b/photo.jpg?x=1")` → `"photo.jpg"`
/// - `derive_filename(SaveKind::File, "ftp://x.com/a.zip")` → `Err(InvalidUrl)`
pub fn derive_filename(kind: SaveKind, payload: &str) -> Result<String, SaveError> {
    derive_filename_at(kind, payload, Utc::now())
}

/// [`derive_filename`] with an explicit clock for the timestamp fallbacks.
pub fn derive_filename_at(
    kind: SaveKind,
    payload: &str,
    now: DateTime<Utc>,
) -> Result<String, SaveError> {
    match kind {
        SaveKind::Text => Ok(TEXT_FILENAME.to_string()),
        SaveKind::Image => Ok(image_filename(payload, now)),
        SaveKind::File => {
            let url = validate_link_url(payload)?;
            Ok(file_filename(&url, now))
        }
    }
}

/// Parses a link URL, accepting only `http` and `https`.
pub fn validate_link_url(raw: &str) -> Result<url::Url, SaveError> {
    let parsed =
        url::Url::parse(raw.trim()).map_err(|_| SaveError::InvalidUrl(raw.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(SaveError::InvalidUrl(raw.to_string())),
    }
}

fn image_filename(source: &str, now: DateTime<Utc>) -> String {
    let hint = image_name_hint(source);
    let unusable = hint.trim().is_empty()
        || is_dot_segment(hint.trim())
        || hint.contains('/')
        || hint.contains('\\');
    if unusable {
        format!("image-{}.png", filename_timestamp(now))
    } else {
        cap_name_length(&replace_reserved_chars(&hint))
    }
}

fn is_dot_segment(name: &str) -> bool {
    name == "." || name == ".."
}

fn file_filename(url: &url::Url, now: DateTime<Utc>) -> String {
    let path = url.path();
    let extension = trailing_extension(path);

    let decoded = percent_decode(last_path_segment(path));
    let mut name = replace_reserved_chars(&decoded).trim().to_string();
    if is_dot_segment(&name) {
        name.clear();
    }

    if !name.is_empty() && !name.contains('.') {
        if let Some(ext) = extension.as_deref().filter(|ext| *ext != name) {
            name = format!("{name}.{ext}");
        }
    }

    if name.is_empty() {
        let suffix = extension.map(|ext| format!(".{ext}")).unwrap_or_default();
        name = format!("file-{}{}", filename_timestamp(now), suffix);
    }
    cap_name_length(&name)
}

/// Joins a base directory and filename with a single `/`.
///
/// `base_directory` is normalized first; an empty result yields `filename` alone.
/// Nothing checks that the path stays inside the download root: the download
/// manager applies its own rules.
pub fn resolve_destination(base_directory: &str, filename: &str) -> String {
    let base = normalize_base_directory(base_directory);
    if base.is_empty() {
        filename.to_string()
    } else {
        format!("{base}/{filename}")
    }
}

/// Normalizes the configured directory and derives the filename for `request`.
pub fn resolve(
    base_directory: &str,
    request: &SaveRequest,
) -> Result<ResolvedDestination, SaveError> {
    resolve_at(base_directory, request, Utc::now())
}

/// [`resolve`] with an explicit clock.
pub fn resolve_at(
    base_directory: &str,
    request: &SaveRequest,
    now: DateTime<Utc>,
) -> Result<ResolvedDestination, SaveError> {
    let filename = derive_filename_at(request.kind, &request.payload, now)?;
    Ok(ResolvedDestination {
        directory: normalize_base_directory(base_directory),
        filename,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap() + chrono::Duration::milliseconds(678)
    }

    #[test]
    fn text_is_constant() {
        for payload in ["hello", "", "../../etc/passwd", "https://x.com/a.txt"] {
            assert_eq!(
                derive_filename(SaveKind::Text, payload).unwrap(),
                "saved_text.txt"
            );
        }
    }

    #[test]
    fn image_from_url_path() {
        assert_eq!(
            derive_filename(SaveKind::Image, "https://x.com/a/b/photo.jpg?x=1").unwrap(),
            "photo.jpg"
        );
        assert_eq!(
            derive_filename(SaveKind::Image, "https://x.com/caf%C3%A9.png").unwrap(),
            "café.png"
        );
    }

    #[test]
    fn image_trailing_slash_uses_timestamp() {
        let name = derive_filename(SaveKind::Image, "https://x.com/gallery/").unwrap();
        assert!(name.starts_with("image-") && name.ends_with(".png"), "{name}");
        let stamp = &name["image-".len()..name.len() - ".png".len()];
        assert!(!stamp.contains(':') && !stamp.contains('.'), "{stamp}");

        assert_eq!(
            derive_filename_at(SaveKind::Image, "https://x.com/", fixed_now()).unwrap(),
            "image-2024-01-02T03-04-05-678Z.png"
        );
    }

    #[test]
    fn image_with_encoded_separator_falls_back() {
        assert_eq!(
            derive_filename_at(SaveKind::Image, "https://x.com/a%2Fb.png", fixed_now()).unwrap(),
            "image-2024-01-02T03-04-05-678Z.png"
        );
        assert_eq!(
            derive_filename_at(SaveKind::Image, "https://x.com/%20%20", fixed_now()).unwrap(),
            "image-2024-01-02T03-04-05-678Z.png"
        );
    }

    #[test]
    fn image_reserved_chars_replaced() {
        assert_eq!(
            derive_filename(SaveKind::Image, "https://x.com/what%3F.gif").unwrap(),
            "what_.gif"
        );
    }

    #[test]
    fn image_unparseable_source() {
        assert_eq!(
            derive_filename(SaveKind::Image, "/static/logo.svg?v=2").unwrap(),
            "logo.svg"
        );
    }

    #[test]
    fn file_rejects_non_http_schemes() {
        for url in ["ftp://x.com/a.zip", "file:///etc/hosts", "javascript:void(0)", "not a url"] {
            assert!(
                matches!(derive_filename(SaveKind::File, url), Err(SaveError::InvalidUrl(_))),
                "{url}"
            );
        }
    }

    #[test]
    fn file_from_url_path() {
        assert_eq!(
            derive_filename(SaveKind::File, "https://example.com/dl/report%20Q1.pdf?t=1").unwrap(),
            "report Q1.pdf"
        );
        assert_eq!(
            derive_filename(SaveKind::File, "http://example.com/a/b%3Ac%7Cd.txt").unwrap(),
            "b_c_d.txt"
        );
    }

    #[test]
    fn file_without_extension_kept() {
        assert_eq!(
            derive_filename(SaveKind::File, "https://example.com/download").unwrap(),
            "download"
        );
    }

    #[test]
    fn file_empty_segment_uses_timestamp() {
        assert_eq!(
            derive_filename_at(SaveKind::File, "https://example.com/", fixed_now()).unwrap(),
            "file-2024-01-02T03-04-05-678Z"
        );
        assert_eq!(
            derive_filename_at(SaveKind::File, "https://example.com/%20", fixed_now()).unwrap(),
            "file-2024-01-02T03-04-05-678Z"
        );
    }

    #[test]
    fn image_dot_segments_fall_back() {
        for source in ["..", ".", "a/%2E%2E", "gallery/ .. "] {
            assert_eq!(
                derive_filename_at(SaveKind::Image, source, fixed_now()).unwrap(),
                "image-2024-01-02T03-04-05-678Z.png",
                "{source}"
            );
        }
        let dest = resolve_at("pics", &SaveRequest::image(".."), fixed_now()).unwrap();
        assert_eq!(dest.path(), "pics/image-2024-01-02T03-04-05-678Z.png");
    }

    #[test]
    fn file_dot_segments_fall_back() {
        for url in ["https://x.com/a/%2E%2E", "https://x.com/%2e", "https://x.com/a/%20.."] {
            assert_eq!(
                derive_filename_at(SaveKind::File, url, fixed_now()).unwrap(),
                "file-2024-01-02T03-04-05-678Z",
                "{url}"
            );
        }
    }

    #[test]
    fn long_image_name_keeps_extension() {
        let url = format!("https://x.com/{}.jpg", "a".repeat(300));
        let name = derive_filename(SaveKind::Image, &url).unwrap();
        assert_eq!(name.len(), 255);
        assert!(name.ends_with("a.jpg"), "{name}");
    }

    #[test]
    fn long_link_name_stays_within_cap() {
        let url = format!("https://x.com/docs/{}.pdf", "b".repeat(300));
        let name = derive_filename(SaveKind::File, &url).unwrap();
        assert_eq!(name.len(), 255);
        assert!(name.ends_with("b.pdf"), "{name}");
    }

    #[test]
    fn resolve_destination_joins() {
        assert_eq!(resolve_destination("notes", "a.txt"), "notes/a.txt");
        assert_eq!(resolve_destination("", "a.txt"), "a.txt");
        assert_eq!(resolve_destination("/notes/", "a.txt"), "notes/a.txt");
    }

    #[test]
    fn resolve_windows_config_with_text() {
        let dest = resolve("C:\\Users\\me\\Downloads", &SaveRequest::text("hello")).unwrap();
        assert_eq!(dest.directory, "Users/me/Downloads");
        assert_eq!(dest.filename, "saved_text.txt");
        assert_eq!(dest.path(), "Users/me/Downloads/saved_text.txt");
    }
}
