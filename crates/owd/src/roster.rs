//! Persisted player roster.
//!
//! The roster is a small YAML file listing the tracked handles together
//! with their resolved career address. Every mutation rewrites the whole
//! file through a temp file and a rename.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ow_common::ErrorKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntry {
    pub battletag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_resolved: Option<DateTime<Utc>>,
}

impl PlayerEntry {
    pub fn new(battletag: impl Into<String>) -> Self {
        Self {
            battletag: battletag.into(),
            resolved_url: None,
            last_resolved: None,
        }
    }

    pub fn resolved(battletag: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            battletag: battletag.into(),
            resolved_url: Some(url.into()),
            last_resolved: Some(Utc::now()),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved_url.as_deref().is_some_and(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayersFile {
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("player {0} is not in the roster")]
    NotFound(String),

    #[error("player {0} is already in the roster")]
    AlreadyExists(String),

    #[error("roster file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("roster file {path} is malformed: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl RosterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::NotFound(_) => ErrorKind::NotFound,
            RosterError::Io { .. } => ErrorKind::Transient,
            RosterError::AlreadyExists(_) | RosterError::Format { .. } => ErrorKind::Invariant,
        }
    }
}

#[async_trait]
pub trait Roster: Send + Sync {
    async fn find_by_handle(&self, handle: &str) -> Option<PlayerEntry>;

    /// Insert, or replace the entry with the same handle.
    async fn upsert(&self, entry: PlayerEntry) -> Result<(), RosterError>;

    /// Replace the entry with the same handle; `NotFound` when it is no
    /// longer tracked.
    async fn update(&self, entry: PlayerEntry) -> Result<(), RosterError>;

    async fn remove(&self, handle: &str) -> Result<PlayerEntry, RosterError>;

    async fn list_all(&self) -> Vec<PlayerEntry>;

    /// Add an unresolved entry; fails when the handle is already tracked.
    async fn add(&self, handle: &str) -> Result<PlayerEntry, RosterError> {
        if self.find_by_handle(handle).await.is_some() {
            return Err(RosterError::AlreadyExists(handle.to_string()));
        }
        let entry = PlayerEntry::new(handle);
        self.upsert(entry.clone()).await?;
        Ok(entry)
    }
}

/// YAML-file backed roster. Changes are applied to a copy, written to the
/// file, and only then become visible in memory.
#[derive(Debug)]
pub struct YamlRoster {
    path: PathBuf,
    players: RwLock<Vec<PlayerEntry>>,
}

impl YamlRoster {
    /// Open the roster at `path`, creating an empty file when absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RosterError> {
        let path = path.into();
        let file = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| RosterError::Io {
                path: path.clone(),
                source,
            })?;
            if content.trim().is_empty() {
                PlayersFile::default()
            } else {
                serde_yaml::from_str(&content).map_err(|source| RosterError::Format {
                    path: path.clone(),
                    source,
                })?
            }
        } else {
            info!("Roster {} not found, creating empty roster", path.display());
            let empty = PlayersFile::default();
            write_atomic(&path, &empty)?;
            empty
        };

        debug!(path = %path.display(), players = file.players.len(), "roster loaded");
        Ok(Self {
            path,
            players: RwLock::new(file.players),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, players: &[PlayerEntry]) -> Result<(), RosterError> {
        let file = PlayersFile {
            players: players.to_vec(),
        };
        write_atomic(&self.path, &file)
    }
}

#[async_trait]
impl Roster for YamlRoster {
    async fn find_by_handle(&self, handle: &str) -> Option<PlayerEntry> {
        self.players
            .read()
            .await
            .iter()
            .find(|p| p.battletag == handle)
            .cloned()
    }

    async fn upsert(&self, entry: PlayerEntry) -> Result<(), RosterError> {
        let mut players = self.players.write().await;
        let mut next = players.clone();
        match next.iter_mut().find(|p| p.battletag == entry.battletag) {
            Some(existing) => *existing = entry,
            None => next.push(entry),
        }
        self.save(&next)?;
        *players = next;
        Ok(())
    }

    async fn update(&self, entry: PlayerEntry) -> Result<(), RosterError> {
        let mut players = self.players.write().await;
        let mut next = players.clone();
        let existing = next
            .iter_mut()
            .find(|p| p.battletag == entry.battletag)
            .ok_or_else(|| RosterError::NotFound(entry.battletag.clone()))?;
        *existing = entry;
        self.save(&next)?;
        *players = next;
        Ok(())
    }

    async fn remove(&self, handle: &str) -> Result<PlayerEntry, RosterError> {
        let mut players = self.players.write().await;
        let idx = players
            .iter()
            .position(|p| p.battletag == handle)
            .ok_or_else(|| RosterError::NotFound(handle.to_string()))?;
        let mut next = players.clone();
        let removed = next.remove(idx);
        self.save(&next)?;
        *players = next;
        Ok(removed)
    }

    async fn list_all(&self) -> Vec<PlayerEntry> {
        self.players.read().await.clone()
    }
}

fn write_atomic(path: &Path, file: &PlayersFile) -> Result<(), RosterError> {
    let io_err = |source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let content = serde_yaml::to_string(file).map_err(|source| RosterError::Format {
        path: path.to_path_buf(),
        source,
    })?;

    let tmp = path.with_extension("yaml.tmp");
    fs::write(&tmp, content).map_err(io_err)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600)).map_err(io_err)?;
    }
    fs::rename(&tmp, path).map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("players.yaml");

        let roster = YamlRoster::open(&path).unwrap();
        assert!(path.exists());
        assert!(roster.list_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_upsert_find_remove_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.yaml");

        let roster = YamlRoster::open(&path).unwrap();
        roster.add("Player-1234").await.unwrap();
        assert!(matches!(
            roster.add("Player-1234").await,
            Err(RosterError::AlreadyExists(_))
        ));

        let url = "https://overwatch.blizzard.com/en-us/career/abc123/";
        roster
            .upsert(PlayerEntry::resolved("Player-1234", url))
            .await
            .unwrap();
        roster.add("Other-1").await.unwrap();

        // reload from disk
        let reopened = YamlRoster::open(&path).unwrap();
        let entry = reopened.find_by_handle("Player-1234").await.unwrap();
        assert_eq!(entry.resolved_url.as_deref(), Some(url));
        assert!(entry.is_resolved());
        assert_eq!(reopened.list_all().await.len(), 2);

        let removed = reopened.remove("Other-1").await.unwrap();
        assert_eq!(removed.battletag, "Other-1");
        assert!(matches!(
            reopened.remove("Other-1").await,
            Err(RosterError::NotFound(_))
        ));
        assert_eq!(YamlRoster::open(&path).unwrap().list_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_update_only_replaces_tracked_entries() {
        let dir = tempfile::tempdir().unwrap();
        let roster = YamlRoster::open(dir.path().join("players.yaml")).unwrap();
        roster.add("Kept#1").await.unwrap();

        let url = "https://example.com/career/kept/";
        roster.update(PlayerEntry::resolved("Kept#1", url)).await.unwrap();
        assert_eq!(
            roster.find_by_handle("Kept#1").await.unwrap().resolved_url.as_deref(),
            Some(url)
        );

        let err = roster
            .update(PlayerEntry::resolved("Gone#2", url))
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::NotFound(_)));
        assert!(roster.find_by_handle("Gone#2").await.is_none());
    }

    #[tokio::test]
    async fn test_failed_save_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("cfg");
        let path = parent.join("players.yaml");
        let roster = YamlRoster::open(&path).unwrap();
        roster.add("Kept#1").await.unwrap();

        // a plain file where the roster directory was makes every save fail
        fs::remove_dir_all(&parent).unwrap();
        fs::write(&parent, "").unwrap();

        let err = roster.upsert(PlayerEntry::new("New#2")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transient);
        assert!(roster.find_by_handle("New#2").await.is_none());

        assert!(roster.remove("Kept#1").await.is_err());
        assert!(roster.find_by_handle("Kept#1").await.is_some());

        let url = "https://example.com/career/kept/";
        assert!(roster.update(PlayerEntry::resolved("Kept#1", url)).await.is_err());
        assert!(!roster.find_by_handle("Kept#1").await.unwrap().is_resolved());

        // once saving works again, the failed changes do not leak into the file
        fs::remove_file(&parent).unwrap();
        roster.add("Other#3").await.unwrap();
        let reopened = YamlRoster::open(&path).unwrap();
        let tags: Vec<String> = reopened
            .list_all()
            .await
            .into_iter()
            .map(|p| p.battletag)
            .collect();
        assert_eq!(tags, vec!["Kept#1".to_string(), "Other#3".to_string()]);
    }

    #[test]
    fn test_reads_camel_case_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.yaml");
        fs::write(
            &path,
            "players:\n  - battletag: Foo#1234\n    resolvedUrl: https://example.com/career/x/\n    lastResolved: 2024-05-01T10:00:00Z\n  - battletag: Bar#1\n",
        )
        .unwrap();

        let roster = YamlRoster::open(&path).unwrap();
        let players = roster.players.blocking_read().clone();
        assert_eq!(players.len(), 2);
        assert!(players[0].is_resolved());
        assert!(!players[1].is_resolved());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.yaml");
        fs::write(&path, "players: [unclosed").unwrap();
        let err = YamlRoster::open(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Invariant);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_is_private() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.yaml");
        YamlRoster::open(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
