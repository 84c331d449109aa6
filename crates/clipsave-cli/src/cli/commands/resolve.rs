//! `clipsave resolve <kind> <payload>` – show where a save would land.

use anyhow::{Context, Result};
use clipsave_core::config::{ConfigStore, TomlConfigStore};
use clipsave_core::path;
use clipsave_core::request::{SaveKind, SaveRequest};

pub async fn run_resolve(
    store: &TomlConfigStore,
    kind: SaveKind,
    payload: &str,
    dir: Option<&str>,
) -> Result<()> {
    let base = match dir {
        Some(d) => d.to_string(),
        None => store
            .load()
            .await?
            .configured_directory()
            .unwrap_or_default()
            .to_string(),
    };
    let destination = path::resolve(&base, &SaveRequest::new(kind, payload))
        .with_context(|| format!("resolve {kind} {payload}"))?;
    println!("{destination}");
    Ok(())
}
