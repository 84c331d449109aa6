//! Inline content for text saves.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Local;

/// Local wall-clock time stamped into each saved snippet.
pub fn local_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `"[<timestamp>]\n<text>\n---\n"`
pub fn text_content(text: &str, timestamp: &str) -> String {
    format!("[{timestamp}]\n{text}\n---\n")
}

/// Self-contained `data:` URI carrying `content` as base64 UTF-8.
pub fn text_data_uri(content: &str) -> String {
    format!("data:text/plain;base64,{}", BASE64.encode(content.as_bytes()))
}
