//! Injected boundary over the browser's persistent key-value store.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

/// Storage key holding the display account identifier.
pub const ACCOUNT_KEY: &str = "account";

/// Storage key holding the access credential.
pub const TOKEN_KEY: &str = "access_token";

/// Read-only view of the browser's persistent key-value store.
///
/// Lookups are synchronous and infallible; absence is `None`. The store
/// itself is owned and populated by code outside this workspace.
pub trait SessionStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory store for tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a key, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Key-value view over a captured storage-state file.
///
/// Accepts the storage-state JSON shape browser tooling emits (cookies
/// plus per-origin localStorage entries) and serves the localStorage
/// entries of every origin as one flat namespace. Later origins win on
/// duplicate keys. A missing or unparsable file reads as an empty store,
/// so lookups stay presence checks rather than I/O errors.
#[derive(Debug, Clone, Default)]
pub struct StateFileStore {
    entries: HashMap<String, String>,
}

impl StateFileStore {
    pub fn load(path: &Path) -> Self {
        let entries = std::fs::read_to_string(path)
            .ok()
            .and_then(|data| serde_json::from_str::<StorageState>(&data).ok())
            .map(StorageState::into_entries)
            .unwrap_or_default();

        if entries.is_empty() {
            debug!(target = "console", path = %path.display(), "no localStorage entries in state file");
        }

        Self { entries }
    }
}

impl SessionStore for StateFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

#[derive(Debug, Deserialize)]
struct StorageState {
    #[serde(default)]
    origins: Vec<OriginState>,
}

#[derive(Debug, Deserialize)]
struct OriginState {
    #[serde(default, rename = "localStorage")]
    local_storage: Vec<StorageEntry>,
}

#[derive(Debug, Deserialize)]
struct StorageEntry {
    name: String,
    value: String,
}

impl StorageState {
    fn into_entries(self) -> HashMap<String, String> {
        self.origins
            .into_iter()
            .flat_map(|origin| origin.local_storage)
            .map(|entry| (entry.name, entry.value))
            .collect()
    }
}
