use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::model::{Catalogue, CatalogueEntry, ContentConfig, Item};

/// A failed read of either repository query
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid item id: {0:?}")]
    InvalidId(String),
    #[error("no such item: {0}")]
    Missing(String),
}

/// Read-only source of the catalogue and of individual items.
///
/// Implementations report failures as [`FetchError`]; callers decide how to
/// absorb them (see [`load_catalogue`] and the navigator).
pub trait ContentRepository: Send + Sync {
    fn catalogue(&self) -> Result<Vec<CatalogueEntry>, FetchError>;
    fn item(&self, uid: &str) -> Result<Item, FetchError>;
}

/// Load the catalogue, treating any failure as an empty list
pub fn load_catalogue(repo: &dyn ContentRepository) -> Catalogue {
    match repo.catalogue() {
        Ok(entries) => Catalogue::new(entries),
        Err(e) => {
            log::warn!("catalogue unavailable, showing empty list: {e}");
            Catalogue::default()
        }
    }
}

/// JSON files on disk: `<folder>/<manifest>` and `<folder>/<uid>.json`
#[derive(Debug, Clone)]
pub struct DirRepository {
    folder: PathBuf,
    manifest: String,
}

impl DirRepository {
    pub fn new(folder: impl Into<PathBuf>, manifest: impl Into<String>) -> Self {
        DirRepository {
            folder: folder.into(),
            manifest: manifest.into(),
        }
    }

    /// Repository rooted at `root` with the folder layout from config
    pub fn from_config(root: &Path, content: &ContentConfig) -> Self {
        DirRepository::new(root.join(&content.folder), content.manifest.clone())
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.folder.join(&self.manifest)
    }

    pub fn item_path(&self, uid: &str) -> PathBuf {
        self.folder.join(format!("{uid}.json"))
    }
}

impl ContentRepository for DirRepository {
    /// Rows are decoded one at a time; a bad row is skipped, not fatal
    fn catalogue(&self) -> Result<Vec<CatalogueEntry>, FetchError> {
        let path = self.manifest_path();
        let rows: Vec<serde_json::Value> = read_json(&path)?;
        let entries = rows
            .into_iter()
            .enumerate()
            .filter_map(|(i, row)| match serde_json::from_value::<CatalogueEntry>(row) {
                Ok(entry) if !entry.uid.is_empty() => Some(entry),
                Ok(_) => {
                    log::warn!("{}: row {i} has an empty uid, skipped", path.display());
                    None
                }
                Err(e) => {
                    log::warn!("{}: row {i} skipped: {e}", path.display());
                    None
                }
            })
            .collect();
        Ok(entries)
    }

    fn item(&self, uid: &str) -> Result<Item, FetchError> {
        if !is_valid_uid(uid) {
            return Err(FetchError::InvalidId(uid.to_string()));
        }
        let mut item: Item = read_json(&self.item_path(uid))?;
        if item.uid.is_empty() {
            item.uid = uid.to_string();
        }
        Ok(item)
    }
}

/// Uids become file names, so they must stay inside the folder
fn is_valid_uid(uid: &str) -> bool {
    !uid.is_empty()
        && uid != "."
        && uid != ".."
        && !uid.contains(['/', '\\'])
        && !uid.contains('\0')
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, FetchError> {
    let text = fs::read_to_string(path).map_err(|e| FetchError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| FetchError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Content held in memory. Counts item fetches so callers can check that
/// a lookup never reached the store.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    entries: Vec<CatalogueEntry>,
    items: HashMap<String, Item>,
    item_fetches: AtomicUsize,
}

impl MemoryRepository {
    pub fn new() -> Self {
        MemoryRepository::default()
    }

    /// Add an item and list it in the catalogue
    pub fn with_item(mut self, item: Item) -> Self {
        self.entries.push(CatalogueEntry {
            uid: item.uid.clone(),
            name_fa: item.name_fa.clone(),
        });
        self.items.insert(item.uid.clone(), item);
        self
    }

    /// List an entry in the catalogue without backing content
    pub fn with_entry(mut self, entry: CatalogueEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn item_fetches(&self) -> usize {
        self.item_fetches.load(Ordering::SeqCst)
    }
}

impl ContentRepository for MemoryRepository {
    fn catalogue(&self) -> Result<Vec<CatalogueEntry>, FetchError> {
        Ok(self.entries.clone())
    }

    fn item(&self, uid: &str) -> Result<Item, FetchError> {
        self.item_fetches.fetch_add(1, Ordering::SeqCst);
        self.items
            .get(uid)
            .cloned()
            .ok_or_else(|| FetchError::Missing(uid.to_string()))
    }
}
