use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Persisted settings, stored at `~/.config/clipsave/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveConfig {
    /// Base directory under the platform download folder. `None` = unconfigured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_directory: Option<String>,
}

impl SaveConfig {
    pub fn with_directory(dir: impl Into<String>) -> Self {
        Self {
            save_directory: Some(dir.into()),
        }
    }

    /// The stored directory, treating an empty string as unset.
    pub fn configured_directory(&self) -> Option<&str> {
        self.save_directory.as_deref().filter(|d| !d.is_empty())
    }
}

/// Key-value store holding [`SaveConfig`].
///
/// Read by every save and by the options page; written only by the options page.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn load(&self) -> Result<SaveConfig>;

    async fn store(&self, config: &SaveConfig) -> Result<()>;
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("clipsave")?;
    Ok(xdg_dirs.get_config_home().join("clipsave").join("config.toml"))
}

/// TOML file store. A missing file reads as an unconfigured [`SaveConfig`].
#[derive(Debug, Clone)]
pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    /// Store at the default XDG location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::at(config_path()?))
    }

    /// Store at a specific path (tests, alternate profiles).
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigStore for TomlConfigStore {
    async fn load(&self) -> Result<SaveConfig> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config at {}", self.path.display());
                return Ok(SaveConfig::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("read {}", self.path.display()));
            }
        };
        let cfg: SaveConfig =
            toml::from_str(&data).with_context(|| format!("parse {}", self.path.display()))?;
        Ok(cfg)
    }

    async fn store(&self, config: &SaveConfig) -> Result<()> {
        let toml = toml::to_string_pretty(config)?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create {}", parent.display()))?;
        }
        tokio::fs::write(&self.path, toml)
            .await
            .with_context(|| format!("write {}", self.path.display()))?;
        tracing::info!("saved config to {}", self.path.display());
        Ok(())
    }
}

/// In-process store for tests and embedders without a settings file.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    config: Mutex<SaveConfig>,
}

impl MemoryConfigStore {
    pub fn new(config: SaveConfig) -> Self {
        Self {
            config: Mutex::new(config),
        }
    }

    /// Current value without going through the async trait.
    pub fn snapshot(&self) -> SaveConfig {
        self.config.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl ConfigStore for MemoryConfigStore {
    async fn load(&self) -> Result<SaveConfig> {
        Ok(self.snapshot())
    }

    async fn store(&self, config: &SaveConfig) -> Result<()> {
        *self.config.lock().unwrap_or_else(|e| e.into_inner()) = config.clone();
        Ok(())
    }
}
