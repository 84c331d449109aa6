//! `clipsave set-dir <dir>` – the options page's save button.

use anyhow::Result;
use clipsave_core::config::TomlConfigStore;
use clipsave_core::options::OptionsPage;

pub async fn run_set_dir(store: TomlConfigStore, dir: &str) -> Result<()> {
    let page = OptionsPage::new(store);
    let confirmation = page.submit(dir).await?;
    if confirmation.saved_directory.is_empty() {
        println!("Saved: files go straight into the download folder.");
    } else {
        println!("Saved: {}", confirmation.saved_directory);
    }
    Ok(())
}
