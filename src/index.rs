//! Local caching of the RFC master index, and entry extraction.
//!
//! The index is a single plain-text file on the IETF site and is slow to
//! fetch, so one snapshot is kept on disk and reused until it is more than
//! [`INDEX_MAX_AGE`] old. The snapshot is the whole response body, written
//! in place; its filesystem mtime is the freshness signal.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::{Duration, SystemTime};

use regex::Regex;
use tokio::fs;

use crate::client::RfcClient;
use crate::error::{Result, RfcError};

/// Snapshots older than this are refreshed on the next run.
pub const INDEX_MAX_AGE: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// An entry starts with a 4-digit RFC number and runs to the next blank line.
static ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\d{4}.*?\n\n").expect("entry pattern is valid"));

/// Manages the on-disk snapshot of the RFC index.
pub struct IndexCache {
    path: PathBuf,
    max_age: Duration,
}

impl IndexCache {
    pub fn new(path: PathBuf, max_age: Duration) -> Self {
        Self { path, max_age }
    }

    /// The well-known snapshot location, `~/.local/rfc/rfc_index.txt`.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(RfcError::NoHome)?;
        Ok(home.join(".local").join("rfc").join("rfc_index.txt"))
    }

    /// Return the index text, fetching a fresh copy only when the snapshot
    /// is missing or stale. A failed fetch during a refresh is fatal; the
    /// stale snapshot is never used as a fallback.
    pub async fn get_index(&self, client: &RfcClient) -> Result<String> {
        match fs::metadata(&self.path).await {
            Ok(meta) => {
                tracing::debug!("index snapshot exists, checking age");
                let mtime = meta.modified()?;
                if is_stale(SystemTime::now(), mtime, self.max_age) {
                    tracing::info!("index snapshot is too old, fetching a new one");
                    self.refresh(client).await
                } else {
                    tracing::debug!("reading index from {}", self.path.display());
                    Ok(fs::read_to_string(&self.path).await?)
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("no index snapshot, fetching");
                self.refresh(client).await
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn refresh(&self, client: &RfcClient) -> Result<String> {
        let text = client.fetch_index().await?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, &text).await?;
        Ok(text)
    }
}

/// Freshness policy: a snapshot is stale once its age exceeds `max_age`.
/// An mtime in the future counts as fresh.
pub fn is_stale(now: SystemTime, mtime: SystemTime, max_age: Duration) -> bool {
    now.duration_since(mtime)
        .map(|age| age > max_age)
        .unwrap_or(false)
}

/// Split the raw index text into entries, in document order.
///
/// Each entry is a maximal run starting at 4 ASCII digits and ending at the
/// first blank-line boundary, trimmed. Malformed input is not an error: no
/// match means no entries.
pub fn parse_entries(index: &str) -> Vec<&str> {
    ENTRY.find_iter(index).map(|m| m.as_str().trim()).collect()
}
