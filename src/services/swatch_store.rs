//! Swatch repositories.
//!
//! A repository hands out immutable snapshots ([`SwatchIndex`] behind an
//! `Arc`) and accepts whole-set replacements. Replacement builds the new
//! index completely before swapping it in, so a search either sees the old
//! set or the new one, never a mix.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lab_match::{Swatch, SwatchIndex};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::StoreError;

/// Current layout version of the JSON store file
pub const STORE_VERSION: u32 = 1;

/// Trait for swatch storage
#[async_trait]
pub trait SwatchRepository: Send + Sync {
    /// Snapshot of every stored swatch, with Lab values precomputed
    async fn all_swatches(&self) -> Result<Arc<SwatchIndex>, StoreError>;

    /// Replace the entire swatch set
    async fn replace_all(&self, swatches: Vec<Swatch>) -> Result<(), StoreError>;
}

/// In-memory swatch storage
pub struct InMemoryStore {
    snapshot: RwLock<Arc<SwatchIndex>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(SwatchIndex::empty())),
        }
    }

    pub fn with_swatches(swatches: Vec<Swatch>) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(SwatchIndex::new(swatches))),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SwatchRepository for InMemoryStore {
    async fn all_swatches(&self) -> Result<Arc<SwatchIndex>, StoreError> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn replace_all(&self, swatches: Vec<Swatch>) -> Result<(), StoreError> {
        let index = Arc::new(SwatchIndex::new(swatches));
        *self.snapshot.write().await = index;
        Ok(())
    }
}

/// On-disk layout of the JSON store
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    refreshed_at: DateTime<Utc>,
    swatches: Vec<StoredSwatch>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredSwatch {
    id: u32,
    hex_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl From<&Swatch> for StoredSwatch {
    fn from(swatch: &Swatch) -> Self {
        Self {
            id: swatch.id,
            hex_color: swatch.hex_color(),
            name: swatch.name.clone(),
            url: swatch.url.clone(),
        }
    }
}

impl TryFrom<StoredSwatch> for Swatch {
    type Error = StoreError;

    fn try_from(stored: StoredSwatch) -> Result<Self, Self::Error> {
        if stored.id == 0 {
            return Err(StoreError::CorruptSwatch {
                id: 0,
                reason: "id must be positive".to_string(),
            });
        }
        let mut swatch =
            Swatch::parse(stored.id, &stored.hex_color).map_err(|e| StoreError::CorruptSwatch {
                id: stored.id,
                reason: e.to_string(),
            })?;
        swatch.name = stored.name;
        swatch.url = stored.url;
        Ok(swatch)
    }
}

/// Snapshot loaded from disk
#[derive(Clone)]
struct Loaded {
    index: Arc<SwatchIndex>,
    refreshed_at: Option<DateTime<Utc>>,
}

/// Swatch storage backed by a single JSON file.
///
/// The file is read lazily on first access and cached in memory. A missing
/// file is an empty repository. Writes go to a sibling temp file that is then
/// renamed over the original.
pub struct JsonFileStore {
    path: PathBuf,
    loaded: RwLock<Option<Loaded>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loaded: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When the stored set was last replaced, if ever
    pub async fn refreshed_at(&self) -> Result<Option<DateTime<Utc>>, StoreError> {
        Ok(self.snapshot().await?.refreshed_at)
    }

    async fn snapshot(&self) -> Result<Loaded, StoreError> {
        if let Some(loaded) = self.loaded.read().await.as_ref() {
            return Ok(loaded.clone());
        }

        let mut slot = self.loaded.write().await;
        // Another task may have loaded it while we waited for the write lock
        if let Some(loaded) = slot.as_ref() {
            return Ok(loaded.clone());
        }

        let loaded = self.read_file().await?;
        *slot = Some(loaded.clone());
        Ok(loaded)
    }

    async fn read_file(&self) -> Result<Loaded, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No swatch store yet");
                return Ok(Loaded {
                    index: Arc::new(SwatchIndex::empty()),
                    refreshed_at: None,
                });
            }
            Err(e) => return Err(e.into()),
        };

        let file: StoreFile = serde_json::from_str(&content)?;
        if file.version != STORE_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: file.version,
                expected: STORE_VERSION,
            });
        }

        let swatches = file
            .swatches
            .into_iter()
            .map(Swatch::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            path = %self.path.display(),
            swatches = swatches.len(),
            "Loaded swatch store"
        );

        Ok(Loaded {
            index: Arc::new(SwatchIndex::new(swatches)),
            refreshed_at: Some(file.refreshed_at),
        })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SwatchRepository for JsonFileStore {
    async fn all_swatches(&self) -> Result<Arc<SwatchIndex>, StoreError> {
        Ok(self.snapshot().await?.index)
    }

    async fn replace_all(&self, swatches: Vec<Swatch>) -> Result<(), StoreError> {
        let refreshed_at = Utc::now();
        let file = StoreFile {
            version: STORE_VERSION,
            refreshed_at,
            swatches: swatches.iter().map(StoredSwatch::from).collect(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        let index = Arc::new(SwatchIndex::new(swatches));

        // Held across the write so concurrent replacements cannot interleave
        let mut slot = self.loaded.write().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let temp = self.temp_path();
        if let Err(e) = write_then_rename(&temp, &self.path, json).await {
            if let Err(cleanup) = tokio::fs::remove_file(&temp).await {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        %cleanup,
                        path = %temp.display(),
                        "Failed to remove temp file"
                    );
                }
            }
            return Err(e.into());
        }

        tracing::info!(
            path = %self.path.display(),
            swatches = index.len(),
            "Replaced swatch store"
        );

        *slot = Some(Loaded {
            index,
            refreshed_at: Some(refreshed_at),
        });
        Ok(())
    }
}

async fn write_then_rename(temp: &Path, path: &Path, contents: String) -> std::io::Result<()> {
    tokio::fs::write(temp, contents).await?;
    tokio::fs::rename(temp, path).await
}
