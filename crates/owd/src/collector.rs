//! Resolve, fetch, parse, store.
//!
//! A sweep walks the roster sequentially with a pacing delay between
//! players and only ever touches players the roster still tracks. At most
//! one sweep runs at a time. On-demand requests run on a detached task and
//! are observable only through the runtime store. A failed parse leaves the
//! player's previous snapshot untouched.

use crate::fetch::{FetchError, Fetcher};
use crate::resolver::{ResolveError, Resolver};
use crate::runtime::RuntimeStore;
use ow_common::{ErrorKind, ParseError, Profile, ProfileParser};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

#[derive(Error, Debug)]
pub enum CollectError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CollectError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CollectError::Resolve(e) => e.kind(),
            CollectError::Fetch(e) => e.kind(),
            CollectError::Parse(e) => e.kind(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct SweepReport {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Players removed from the roster while the sweep was running
    pub skipped: usize,
    /// Set when another sweep was already running and this one did nothing
    pub already_running: bool,
}

pub struct Collector {
    resolver: Arc<Resolver>,
    fetcher: Arc<dyn Fetcher>,
    parser: ProfileParser,
    store: Arc<RuntimeStore>,
    pacing: Duration,
    sweep_lock: Mutex<()>,
}

impl Collector {
    pub fn new(
        resolver: Arc<Resolver>,
        fetcher: Arc<dyn Fetcher>,
        parser: ProfileParser,
        store: Arc<RuntimeStore>,
        pacing: Duration,
    ) -> Self {
        Self {
            resolver,
            fetcher,
            parser,
            store,
            pacing,
            sweep_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Arc<RuntimeStore> {
        &self.store
    }

    /// Resolve, fetch and parse without touching the store.
    pub async fn collect(&self, handle: &str) -> Result<Profile, CollectError> {
        let url = self.resolver.get_or_resolve(handle).await?;
        self.fetch_and_parse(handle, &url).await
    }

    async fn fetch_and_parse(&self, handle: &str, url: &str) -> Result<Profile, CollectError> {
        let html = self.fetcher.fetch(url).await?;
        Ok(self.parser.parse(&html, handle)?)
    }

    /// Collect one player and replace its snapshot on success.
    pub async fn parse_player(&self, handle: &str) -> Result<(), CollectError> {
        info!(battletag = handle, "parsing profile");
        match self.collect(handle).await {
            Ok(profile) => {
                let characters = profile.character_count();
                self.store.set(profile).await;
                info!(battletag = handle, characters, "profile stored");
                Ok(())
            }
            Err(e) => {
                log_failure(handle, &e);
                Err(e)
            }
        }
    }

    /// Sweep step for one player. `Ok(false)` when the player left the
    /// roster before or during collection; nothing is stored for it then.
    async fn sweep_player(&self, handle: &str) -> Result<bool, CollectError> {
        let Some(url) = self.resolver.tracked_address(handle).await? else {
            return Ok(false);
        };
        let profile = self.fetch_and_parse(handle, &url).await?;
        let roster = self.resolver.roster();
        if roster.find_by_handle(handle).await.is_none() {
            return Ok(false);
        }
        let characters = profile.character_count();
        self.store.set(profile).await;

        // a delete landing between the check and the write has already
        // cleared the store; undo the write so the player stays gone
        if roster.find_by_handle(handle).await.is_none() {
            self.store.remove(handle).await;
            return Ok(false);
        }
        info!(battletag = handle, characters, "profile stored");
        Ok(true)
    }

    /// One sequential pass over the roster. Returns immediately when another
    /// sweep is already running.
    pub async fn parse_all(&self) -> SweepReport {
        let Ok(_guard) = self.sweep_lock.try_lock() else {
            info!("Sweep already running, skipping");
            return SweepReport {
                already_running: true,
                ..Default::default()
            };
        };

        let players = self.resolver.roster().list_all().await;
        let mut report = SweepReport {
            total: players.len(),
            ..Default::default()
        };
        if players.is_empty() {
            info!("No players configured for parsing");
            return report;
        }

        info!(players = players.len(), "starting sweep");
        for (i, player) in players.iter().enumerate() {
            if i > 0 && !self.pacing.is_zero() {
                tokio::time::sleep(self.pacing).await;
            }
            let handle = player.battletag.as_str();
            match self.sweep_player(handle).await {
                Ok(true) => report.succeeded += 1,
                Ok(false) => {
                    debug!(battletag = handle, "player left the roster, skipped");
                    report.skipped += 1;
                }
                Err(e) => {
                    log_failure(handle, &e);
                    report.failed += 1;
                }
            }
        }

        info!(
            succeeded = report.succeeded,
            failed = report.failed,
            skipped = report.skipped,
            total = report.total,
            "sweep completed"
        );
        report
    }

    /// Sweep immediately, then every `interval`. Runs until the task is
    /// aborted.
    pub async fn run_periodic(self: Arc<Self>, interval: Duration) {
        info!("Starting periodic profile parsing every {:?}", interval);
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            self.parse_all().await;
        }
    }

    pub fn spawn_parse_all(self: &Arc<Self>) -> JoinHandle<SweepReport> {
        let collector = Arc::clone(self);
        tokio::spawn(async move {
            info!("Manual sweep triggered");
            collector.parse_all().await
        })
    }

    pub fn spawn_parse_player(self: &Arc<Self>, handle: String) -> JoinHandle<bool> {
        let collector = Arc::clone(self);
        tokio::spawn(async move {
            info!(battletag = %handle, "Manual parse triggered");
            collector.parse_player(&handle).await.is_ok()
        })
    }
}

fn log_failure(handle: &str, err: &CollectError) {
    match err.kind() {
        ErrorKind::SchemaViolation => {
            error!(
                battletag = handle,
                error = %err,
                "profile names an unknown character, catalog is out of date"
            )
        }
        ErrorKind::Invariant => error!(battletag = handle, error = %err, "parse failed"),
        ErrorKind::NotFound => warn!(battletag = handle, error = %err, "profile not found"),
        ErrorKind::Transient => {
            warn!(battletag = handle, error = %err, "fetch failed, will retry next sweep")
        }
    }
}
