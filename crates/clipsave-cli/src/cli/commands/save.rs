//! `clipsave text|image|link <payload>` – one save, as if the menu entry was clicked.

use anyhow::{bail, Result};
use clipsave_core::config::TomlConfigStore;
use clipsave_core::dispatch::SaveDispatcher;
use clipsave_core::menu::{MenuClick, MenuItemId, MenuRouter};
use clipsave_core::request::SaveKind;

use crate::cli::handoff::{JsonLinesDownloads, SetDirHint, StderrNotifier};

pub async fn run_save(store: TomlConfigStore, kind: SaveKind, payload: &str) -> Result<()> {
    let dispatcher = SaveDispatcher::new(
        store,
        JsonLinesDownloads::new(std::io::stdout()),
        StderrNotifier,
    );
    let router = MenuRouter::new(dispatcher, SetDirHint);

    let Some(outcome) = router.on_clicked(&click_for(kind, payload)).await else {
        bail!("nothing to save");
    };
    let receipt = outcome?;
    tracing::debug!(id = %receipt.download_id, "handed off {}", receipt.destination);
    Ok(())
}

fn click_for(kind: SaveKind, payload: &str) -> MenuClick {
    let payload = Some(payload.to_string());
    match kind {
        SaveKind::Text => MenuClick {
            menu_item_id: MenuItemId::SaveText.to_string(),
            selection_text: payload,
            ..Default::default()
        },
        SaveKind::Image => MenuClick {
            menu_item_id: MenuItemId::SaveImage.to_string(),
            src_url: payload,
            ..Default::default()
        },
        SaveKind::File => MenuClick {
            menu_item_id: MenuItemId::SaveLink.to_string(),
            link_url: payload,
            ..Default::default()
        },
    }
}
