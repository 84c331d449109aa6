//! Options page: one directory field and a save button.

use std::time::Duration;
use thiserror::Error;

use crate::config::{ConfigStore, SaveConfig};
use crate::path::normalize_base_directory;

/// How long the "saved" confirmation stays visible.
pub const CONFIRMATION_VISIBLE_FOR: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("please enter a save directory")]
    EmptyDirectory,

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Transient confirmation shown after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// The value that was persisted (already normalized).
    pub saved_directory: String,
    pub visible_for: Duration,
}

pub struct OptionsPage<C> {
    store: C,
}

impl<C: ConfigStore> OptionsPage<C> {
    pub fn new(store: C) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &C {
        &self.store
    }

    /// Value to pre-fill the directory field with.
    pub async fn load(&self) -> anyhow::Result<Option<String>> {
        let cfg = self.store.load().await?;
        Ok(cfg.configured_directory().map(str::to_string))
    }

    /// Normalizes and persists the submitted directory.
    pub async fn submit(&self, input: &str) -> Result<Confirmation, OptionsError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(OptionsError::EmptyDirectory);
        }
        let normalized = normalize_base_directory(trimmed);
        self.store
            .store(&SaveConfig::with_directory(normalized.clone()))
            .await?;
        tracing::info!(directory = %normalized, "save directory updated");
        Ok(Confirmation {
            saved_directory: normalized,
            visible_for: CONFIRMATION_VISIBLE_FOR,
        })
    }
}
