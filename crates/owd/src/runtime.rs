//! In-memory snapshot of the latest parse per player.
//!
//! One reader/writer lock guards the whole map. Parsing never happens under
//! the lock: a finished `Profile` is swapped in whole, so readers see either
//! the previous snapshot or the new one.

use chrono::{DateTime, Utc};
use ow_common::Profile;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Per-player projection served by the API without walking the profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerMetrics {
    pub battletag: String,
    pub last_updated: DateTime<Utc>,
    pub platforms: usize,
    pub characters: usize,
    pub stats: usize,
    pub endorsement_level: Option<u32>,
}

impl PlayerMetrics {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            battletag: profile.handle.clone(),
            last_updated: profile.observed_at,
            platforms: profile.platforms.len(),
            characters: profile.character_count(),
            stats: profile.stat_count(),
            endorsement_level: profile.summary.endorsement_level,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuntimeEntry {
    pub profile: Arc<Profile>,
    pub metrics: PlayerMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreStats {
    pub total_players: usize,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
pub struct RuntimeStore {
    players: RwLock<HashMap<String, RuntimeEntry>>,
}

impl RuntimeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, handle: &str) -> Option<RuntimeEntry> {
        self.players.read().await.get(handle).cloned()
    }

    /// Replace the snapshot for the profile's handle.
    pub async fn set(&self, profile: Profile) {
        let metrics = PlayerMetrics::from_profile(&profile);
        let handle = profile.handle.clone();
        let entry = RuntimeEntry {
            profile: Arc::new(profile),
            metrics,
        };
        self.players.write().await.insert(handle.clone(), entry);
        debug!(battletag = %handle, "runtime snapshot updated");
    }

    pub async fn remove(&self, handle: &str) -> Option<RuntimeEntry> {
        self.players.write().await.remove(handle)
    }

    /// Copy of every entry, ordered by handle.
    pub async fn list_all(&self) -> Vec<RuntimeEntry> {
        let mut entries: Vec<RuntimeEntry> = self.players.read().await.values().cloned().collect();
        entries.sort_by(|a, b| a.metrics.battletag.cmp(&b.metrics.battletag));
        entries
    }

    /// Drop every snapshot; returns how many were held.
    pub async fn clear(&self) -> usize {
        let mut players = self.players.write().await;
        let n = players.len();
        players.clear();
        n
    }

    pub async fn stats(&self) -> StoreStats {
        let players = self.players.read().await;
        StoreStats {
            total_players: players.len(),
            last_updated: players.values().map(|e| e.metrics.last_updated).max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let store = RuntimeStore::new();
        let profile = Profile::empty("Foo-1");
        store.set(profile.clone()).await;

        let entry = store.get("Foo-1").await.unwrap();
        assert_eq!(*entry.profile, profile);
        assert_eq!(entry.metrics.battletag, "Foo-1");
        assert!(store.get("Bar-2").await.is_none());
    }

    #[tokio::test]
    async fn test_set_replaces() {
        let store = RuntimeStore::new();
        store.set(Profile::empty("Foo-1")).await;
        let mut newer = Profile::empty("Foo-1");
        newer.title = Some("Newer".into());
        store.set(newer).await;

        assert_eq!(store.list_all().await.len(), 1);
        assert_eq!(
            store.get("Foo-1").await.unwrap().profile.title.as_deref(),
            Some("Newer")
        );
    }

    #[tokio::test]
    async fn test_clear_and_stats() {
        let store = RuntimeStore::new();
        assert_eq!(
            store.stats().await,
            StoreStats {
                total_players: 0,
                last_updated: None
            }
        );

        store.set(Profile::empty("A-1")).await;
        store.set(Profile::empty("B-2")).await;
        let stats = store.stats().await;
        assert_eq!(stats.total_players, 2);
        assert!(stats.last_updated.is_some());

        assert_eq!(store.clear().await, 2);
        assert!(store.list_all().await.is_empty());
        assert_eq!(store.stats().await.total_players, 0);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = RuntimeStore::new();
        store.set(Profile::empty("A-1")).await;
        assert!(store.remove("A-1").await.is_some());
        assert!(store.remove("A-1").await.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_sets_keep_every_player() {
        let store = Arc::new(RuntimeStore::new());
        let mut handles = Vec::new();
        for i in 0..64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.set(Profile::empty(format!("Player-{}", i))).await;
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        let all = store.list_all().await;
        assert_eq!(all.len(), 64);
        assert_eq!(all[0].metrics.battletag, "Player-0");
    }
}
