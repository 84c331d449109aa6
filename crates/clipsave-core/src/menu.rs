//! Context-menu entries and click routing.
//!
//! Three fixed entries are registered at install time. A click carries the
//! entry id plus whichever payload the context provides; the router turns it
//! into a [`SaveRequest`] and runs it through the dispatcher.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigStore;
use crate::dispatch::{DownloadService, Notifier, SaveDispatcher, SaveOutcome};
use crate::error::SaveError;
use crate::request::{SaveKind, SaveRequest};

/// Where an entry is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuContext {
    Selection,
    Image,
    Link,
}

/// Fixed menu entry ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MenuItemId {
    #[serde(rename = "saveText")]
    SaveText,
    #[serde(rename = "saveImage")]
    SaveImage,
    #[serde(rename = "saveLink")]
    SaveLink,
}

impl MenuItemId {
    pub fn as_str(self) -> &'static str {
        match self {
            MenuItemId::SaveText => "saveText",
            MenuItemId::SaveImage => "saveImage",
            MenuItemId::SaveLink => "saveLink",
        }
    }

    pub fn kind(self) -> SaveKind {
        match self {
            MenuItemId::SaveText => SaveKind::Text,
            MenuItemId::SaveImage => SaveKind::Image,
            MenuItemId::SaveLink => SaveKind::File,
        }
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MenuItemId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "saveText" => Ok(MenuItemId::SaveText),
            "saveImage" => Ok(MenuItemId::SaveImage),
            "saveLink" => Ok(MenuItemId::SaveLink),
            other => Err(format!("unknown menu item: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub id: MenuItemId,
    pub title: &'static str,
    pub contexts: &'static [MenuContext],
}

pub const MENU_ENTRIES: [MenuEntry; 3] = [
    MenuEntry {
        id: MenuItemId::SaveText,
        title: "Save selected text",
        contexts: &[MenuContext::Selection],
    },
    MenuEntry {
        id: MenuItemId::SaveImage,
        title: "Save image",
        contexts: &[MenuContext::Image],
    },
    MenuEntry {
        id: MenuItemId::SaveLink,
        title: "Save file",
        contexts: &[MenuContext::Link],
    },
];

/// Host menu that accepts entry registrations.
pub trait MenuRegistry {
    fn create(&mut self, entry: &MenuEntry);
}

/// Registers the three fixed entries, in order.
pub fn register_menu_entries(registry: &mut impl MenuRegistry) {
    for entry in &MENU_ENTRIES {
        tracing::debug!(id = %entry.id, "registering menu entry");
        registry.create(entry);
    }
}

/// Opens the options page when a save finds no configured directory.
pub trait OptionsLauncher: Send + Sync {
    fn open_options_page(&self);
}

/// A click on one of the entries, with the payload fields the host provides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuClick {
    pub menu_item_id: String,
    pub selection_text: Option<String>,
    pub src_url: Option<String>,
    pub link_url: Option<String>,
}

impl MenuClick {
    /// The save this click asks for, or `None` for an unknown id or missing payload.
    pub fn to_request(&self) -> Option<SaveRequest> {
        let id: MenuItemId = self.menu_item_id.parse().ok()?;
        let payload = match id {
            MenuItemId::SaveText => self.selection_text.as_ref(),
            MenuItemId::SaveImage => self.src_url.as_ref(),
            MenuItemId::SaveLink => self.link_url.as_ref(),
        }?;
        Some(SaveRequest::new(id.kind(), payload.clone()))
    }
}

/// Routes menu clicks to the dispatcher.
pub struct MenuRouter<C, D, N, L> {
    dispatcher: SaveDispatcher<C, D, N>,
    launcher: L,
}

impl<C, D, N, L> MenuRouter<C, D, N, L>
where
    C: ConfigStore,
    D: DownloadService,
    N: Notifier,
    L: OptionsLauncher,
{
    pub fn new(dispatcher: SaveDispatcher<C, D, N>, launcher: L) -> Self {
        Self {
            dispatcher,
            launcher,
        }
    }

    pub fn dispatcher(&self) -> &SaveDispatcher<C, D, N> {
        &self.dispatcher
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Handles one click. Returns `None` when the click was ignored.
    pub async fn on_clicked(&self, click: &MenuClick) -> Option<SaveOutcome> {
        let Some(request) = click.to_request() else {
            tracing::warn!(id = %click.menu_item_id, "ignoring menu click without usable payload");
            return None;
        };
        let outcome = self.dispatcher.save(&request).await;
        if let Err(SaveError::NotConfigured) = outcome {
            self.launcher.open_options_page();
        }
        Some(outcome)
    }
}
