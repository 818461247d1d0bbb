//! Persistent storage for the registry state.

use crate::error::RegistryError;
use crate::registry::Registry;
use crate::types::Identity;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, warn};

/// JSON-file-backed store for the registry.
pub struct FileStore {
    storage_path: PathBuf,
}

impl FileStore {
    /// Create a new file store.
    pub fn new(storage_path: PathBuf) -> Self {
        Self { storage_path }
    }

    /// Save the registry to disk.
    ///
    /// Writes atomically using temp file + rename so a crash mid-write
    /// never leaves a truncated registry file.
    pub async fn save(&self, registry: &Registry) -> Result<(), RegistryError> {
        let data = serde_json::to_vec_pretty(registry)?;

        if let Some(parent) = self.storage_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = self.storage_path.with_extension("tmp");
        fs::write(&temp_path, &data).await?;
        fs::rename(&temp_path, &self.storage_path).await?;

        debug!(
            "Saved registry ({} bytes) to {:?}",
            data.len(),
            self.storage_path
        );
        Ok(())
    }

    /// Load the registry from disk.
    ///
    /// Returns a fresh registry owned by `default_owner` if the file does
    /// not exist yet.
    pub async fn load(&self, default_owner: &Identity) -> Result<Registry, RegistryError> {
        if !self.storage_path.exists() {
            info!(
                "Registry file not found at {:?}, starting with empty registry",
                self.storage_path
            );
            return Ok(Registry::new(default_owner.clone()));
        }

        let data = fs::read(&self.storage_path).await?;
        let registry: Registry = serde_json::from_slice(&data)?;

        info!(
            "Loaded registry with {} registrations from {:?}",
            registry.count(),
            self.storage_path
        );
        Ok(registry)
    }

    /// Check if a registry file exists.
    pub fn exists(&self) -> bool {
        self.storage_path.exists()
    }
}

/// In-memory store for testing or when persistence is disabled.
pub struct MemoryStore;

impl MemoryStore {
    /// "Save" does nothing for memory store.
    pub async fn save(&self, _registry: &Registry) -> Result<(), RegistryError> {
        debug!("Memory store: save is a no-op");
        Ok(())
    }

    /// "Load" returns a fresh registry.
    pub async fn load(&self, default_owner: &Identity) -> Result<Registry, RegistryError> {
        debug!("Memory store: returning empty registry");
        Ok(Registry::new(default_owner.clone()))
    }
}

/// Storage backend selected at startup.
pub enum Store {
    /// JSON file storage
    File(FileStore),
    /// In-memory only (no persistence)
    Memory(MemoryStore),
}

impl Store {
    /// Create a file store when persistence is enabled, otherwise memory.
    pub fn new(persist: bool, storage_path: PathBuf) -> Self {
        if persist {
            Store::File(FileStore::new(storage_path))
        } else {
            warn!("Persistence disabled, registry will be lost on restart");
            Store::Memory(MemoryStore)
        }
    }

    /// Force file store.
    pub fn file(storage_path: PathBuf) -> Self {
        Store::File(FileStore::new(storage_path))
    }

    /// Force memory store.
    pub fn memory() -> Self {
        Store::Memory(MemoryStore)
    }

    /// Save the registry.
    pub async fn save(&self, registry: &Registry) -> Result<(), RegistryError> {
        match self {
            Store::File(s) => s.save(registry).await,
            Store::Memory(s) => s.save(registry).await,
        }
    }

    /// Load the registry, falling back to a fresh one owned by
    /// `default_owner`.
    pub async fn load(&self, default_owner: &Identity) -> Result<Registry, RegistryError> {
        match self {
            Store::File(s) => s.load(default_owner).await,
            Store::Memory(s) => s.load(default_owner).await,
        }
    }
}
