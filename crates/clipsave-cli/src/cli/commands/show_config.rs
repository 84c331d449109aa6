//! `clipsave show-config` – print the stored save directory.

use anyhow::Result;
use clipsave_core::config::TomlConfigStore;
use clipsave_core::options::OptionsPage;

pub async fn run_show_config(store: TomlConfigStore) -> Result<()> {
    let path = store.path().to_path_buf();
    match OptionsPage::new(store).load().await? {
        Some(dir) => println!("save_directory = {dir}"),
        None => println!("save_directory is not set"),
    }
    println!("config file: {}", path.display());
    Ok(())
}
