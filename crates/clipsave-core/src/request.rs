//! Transient save requests and their resolved destinations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the user asked to save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveKind {
    /// Selected text, saved as inline content.
    Text,
    /// Image source URL, fetched by the download manager.
    Image,
    /// Link URL, fetched by the download manager.
    File,
}

impl SaveKind {
    /// Human label used in notification messages.
    pub fn label(self) -> &'static str {
        match self {
            SaveKind::Text => "Text",
            SaveKind::Image => "Image",
            SaveKind::File => "File",
        }
    }
}

impl fmt::Display for SaveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SaveKind::Text => "text",
            SaveKind::Image => "image",
            SaveKind::File => "file",
        })
    }
}

impl FromStr for SaveKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(SaveKind::Text),
            "image" => Ok(SaveKind::Image),
            "file" | "link" => Ok(SaveKind::File),
            other => Err(format!("unknown save kind: {other}")),
        }
    }
}

/// A single save triggered by one menu click. Consumed immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub kind: SaveKind,
    /// Selected text for `Text`, source URL otherwise.
    pub payload: String,
}

impl SaveRequest {
    pub fn new(kind: SaveKind, payload: impl Into<String>) -> Self {
        Self {
            kind,
            payload: payload.into(),
        }
    }

    pub fn text(payload: impl Into<String>) -> Self {
        Self::new(SaveKind::Text, payload)
    }

    pub fn image(url: impl Into<String>) -> Self {
        Self::new(SaveKind::Image, url)
    }

    pub fn file(url: impl Into<String>) -> Self {
        Self::new(SaveKind::File, url)
    }
}

/// Relative destination handed to the download manager.
///
/// `directory` has no leading or trailing `/`; `filename` holds no
/// filesystem-reserved characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDestination {
    pub directory: String,
    pub filename: String,
}

impl ResolvedDestination {
    /// `directory/filename`, or just `filename` when no directory is set.
    pub fn path(&self) -> String {
        crate::path::resolve_destination(&self.directory, &self.filename)
    }
}

impl fmt::Display for ResolvedDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
