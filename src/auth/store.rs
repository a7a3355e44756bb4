//! Token storage backends.
//!
//! A store holds exactly two named strings under the keys `accessToken`
//! and `refreshToken`. Absence is `None`, never an error; empty strings
//! are normalized to `None` on read.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::auth::tokens::TokenPair;

/// Durable key-value storage for the two auth credential strings.
///
/// Reads and writes are synchronous from the caller's point of view.
/// Implementations must be safe for concurrent access from multiple
/// stores sharing one gateway.
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn set_tokens(&self, pair: &TokenPair);
    fn clear(&self);
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// In-memory store, used in tests and as the share-nothing default.
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: RwLock<StoredTokens>,
}

#[derive(Default)]
struct StoredTokens {
    access: Option<String>,
    refresh: Option<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(pair: &TokenPair) -> Self {
        let store = Self::new();
        store.set_tokens(pair);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        non_empty(self.inner.read().access.as_ref())
    }

    fn refresh_token(&self) -> Option<String> {
        non_empty(self.inner.read().refresh.as_ref())
    }

    fn set_tokens(&self, pair: &TokenPair) {
        let mut guard = self.inner.write();
        guard.access = Some(pair.access_token.clone());
        guard.refresh = Some(pair.refresh_token.clone());
    }

    fn clear(&self) {
        let mut guard = self.inner.write();
        guard.access = None;
        guard.refresh = None;
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenFile {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

/// File-backed store persisting the pair as a small JSON blob.
///
/// State is cached in memory; writes persist best-effort and keep the
/// in-memory value authoritative when the disk write fails.
pub struct FileTokenStore {
    inner: RwLock<StoredTokens>,
    path: PathBuf,
}

impl FileTokenStore {
    /// Open (or initialize) the store at `path`.
    ///
    /// A missing file is an empty store. A malformed file is treated as
    /// empty rather than failing startup; it is overwritten on the next
    /// write.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let loaded = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str::<TokenFile>(&raw).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), %err, "malformed token file, starting empty");
                TokenFile::default()
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => TokenFile::default(),
            Err(err) => return Err(err),
        };
        Ok(Self {
            inner: RwLock::new(StoredTokens {
                access: loaded.access_token,
                refresh: loaded.refresh_token,
            }),
            path,
        })
    }

    /// Open the store at the platform-default location.
    pub fn open_default() -> io::Result<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no data directory"))?;
        Self::open(base.join("linkpouch").join("tokens.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, guard: &StoredTokens) {
        let file = TokenFile {
            access_token: guard.access.clone(),
            refresh_token: guard.refresh.clone(),
        };
        let serialized = match serde_json::to_string_pretty(&file) {
            Ok(s) => s,
            Err(err) => {
                tracing::warn!(%err, "failed to serialize token file");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, serialized) {
            tracing::warn!(path = %self.path.display(), %err, "failed to persist tokens");
        }
    }
}

impl TokenStore for FileTokenStore {
    fn access_token(&self) -> Option<String> {
        non_empty(self.inner.read().access.as_ref())
    }

    fn refresh_token(&self) -> Option<String> {
        non_empty(self.inner.read().refresh.as_ref())
    }

    fn set_tokens(&self, pair: &TokenPair) {
        let mut guard = self.inner.write();
        guard.access = Some(pair.access_token.clone());
        guard.refresh = Some(pair.refresh_token.clone());
        self.persist(&guard);
    }

    fn clear(&self) {
        let mut guard = self.inner.write();
        guard.access = None;
        guard.refresh = None;
        self.persist(&guard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.access_token(), None);

        store.set_tokens(&TokenPair::new("a", "r"));
        assert_eq!(store.access_token().as_deref(), Some("a"));
        assert_eq!(store.refresh_token().as_deref(), Some("r"));

        store.clear();
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
    }

    #[test]
    fn empty_strings_read_as_absent() {
        let store = MemoryTokenStore::new();
        store.set_tokens(&TokenPair::new("", ""));
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
    }
}
