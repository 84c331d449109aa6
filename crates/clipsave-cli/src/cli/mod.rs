//! CLI for clipsave. Each save subcommand stands in for one context-menu click.

mod commands;
mod handoff;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clipsave_core::config::TomlConfigStore;
use clipsave_core::request::SaveKind;
use std::path::PathBuf;

use commands::{run_menu, run_resolve, run_save, run_set_dir, run_show_config};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "clipsave")]
#[command(about = "Save text, images and links into a download subdirectory", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/clipsave/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Save selected text ("-" reads stdin).
    Text {
        text: String,
    },

    /// Save an image by its source URL.
    Image {
        url: String,
    },

    /// Save a linked file (http/https only).
    Link {
        url: String,
    },

    /// Set the save directory (same normalization as every save).
    SetDir {
        dir: String,
    },

    /// Show the stored save directory.
    ShowConfig,

    /// List the context-menu entries.
    Menu,

    /// Print the destination a save would use, without saving.
    Resolve {
        /// text, image, or file (alias: link).
        kind: SaveKind,
        payload: String,
        /// Base directory to resolve against instead of the stored one.
        #[arg(long)]
        dir: Option<String>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let store = match &cli.config {
            Some(path) => TomlConfigStore::at(path),
            None => TomlConfigStore::open_default()?,
        };
        tracing::debug!("config store at {}", store.path().display());

        match cli.command {
            CliCommand::Text { text } => {
                let text = if text == "-" {
                    std::io::read_to_string(std::io::stdin())?
                } else {
                    text
                };
                run_save(store, SaveKind::Text, &text).await?
            }
            CliCommand::Image { url } => run_save(store, SaveKind::Image, &url).await?,
            CliCommand::Link { url } => run_save(store, SaveKind::File, &url).await?,
            CliCommand::SetDir { dir } => run_set_dir(store, &dir).await?,
            CliCommand::ShowConfig => run_show_config(store).await?,
            CliCommand::Menu => run_menu(),
            CliCommand::Resolve { kind, payload, dir } => {
                run_resolve(&store, kind, &payload, dir.as_deref()).await?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
