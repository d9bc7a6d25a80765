//! Prometheus exposition of the runtime store.
//!
//! Gauge families are registered once from the descriptor catalog. Each
//! scrape resets every family and rebuilds it from the current store
//! snapshot, so players that left the store disappear from the output.

use crate::runtime::{RuntimeEntry, RuntimeStore};
use ow_common::{ErrorKind, MetricRegistry, Profile};
use prometheus::{
    register_gauge_vec_with_registry, register_gauge_with_registry,
    register_int_gauge_with_registry, Encoder, Gauge, GaugeVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

const PLAYER_LABELS: &[&str] = &["battletag"];
const AGGREGATE_LABELS: &[&str] = &["battletag", "platform", "gamemode"];
const HERO_LABELS: &[&str] = &["battletag", "hero", "platform", "gamemode"];
const RANK_LABELS: &[&str] = &["battletag", "platform", "gamemode", "role", "rank_tier"];

#[derive(Error, Debug)]
pub enum ExporterError {
    #[error("metrics registry error: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("exposition is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl ExporterError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Invariant
    }
}

pub struct Exporter {
    registry: Registry,
    catalog: Arc<MetricRegistry>,
    endorsement_level: GaugeVec,
    skill_rating: GaugeVec,
    /// Common metric key -> `ow_player_<key>` family
    aggregate: HashMap<&'static str, GaugeVec>,
    /// Series name -> per-character family
    heroes: HashMap<&'static str, GaugeVec>,
    players: IntGauge,
    last_update: Gauge,
    sync_lock: Mutex<()>,
}

impl Exporter {
    pub fn new(catalog: Arc<MetricRegistry>) -> Result<Self, ExporterError> {
        let registry = Registry::new();

        let endorsement_level = register_gauge_vec_with_registry!(
            "ow_player_endorsement_level",
            "Player endorsement level",
            PLAYER_LABELS,
            registry
        )?;

        let skill_rating = register_gauge_vec_with_registry!(
            "ow_player_skill_rating",
            "Competitive rank per role encoded as a skill rating",
            RANK_LABELS,
            registry
        )?;

        let players = register_int_gauge_with_registry!(
            "ow_exporter_players",
            "Players currently held in the runtime store",
            registry
        )?;

        let last_update = register_gauge_with_registry!(
            "ow_exporter_last_update_timestamp_seconds",
            "Unix time of the most recent successful parse",
            registry
        )?;

        #[cfg(target_os = "linux")]
        registry.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        let mut aggregate = HashMap::new();
        for d in catalog.common() {
            let name = format!("ow_player_{}", d.key);
            let help = format!("{} across all heroes", d.display_name);
            let vec = GaugeVec::new(Opts::new(name, help), AGGREGATE_LABELS)?;
            registry.register(Box::new(vec.clone()))?;
            aggregate.insert(d.key, vec);
        }

        let mut heroes = HashMap::new();
        for d in catalog.series() {
            let vec = GaugeVec::new(Opts::new(d.series, d.help), HERO_LABELS)?;
            registry.register(Box::new(vec.clone()))?;
            heroes.insert(d.series, vec);
        }

        debug!(
            aggregate = aggregate.len(),
            heroes = heroes.len(),
            "registered gauge families"
        );

        Ok(Self {
            registry,
            catalog,
            endorsement_level,
            skill_rating,
            aggregate,
            heroes,
            players,
            last_update,
            sync_lock: Mutex::new(()),
        })
    }

    /// Reset every family and repopulate it from the store.
    pub async fn sync(&self, store: &RuntimeStore) {
        let _guard = self.sync_lock.lock().await;
        let entries = store.list_all().await;

        self.reset();
        for entry in &entries {
            self.export_player(entry);
        }

        self.players.set(entries.len() as i64);
        let last = entries
            .iter()
            .map(|e| e.metrics.last_updated.timestamp() as f64)
            .fold(0.0, f64::max);
        self.last_update.set(last);
    }

    pub fn render(&self) -> Result<String, ExporterError> {
        let encoder = TextEncoder::new();
        let families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Convenience for the scrape handler: sync, then render.
    pub async fn scrape(&self, store: &RuntimeStore) -> Result<String, ExporterError> {
        self.sync(store).await;
        self.render()
    }

    fn reset(&self) {
        self.endorsement_level.reset();
        self.skill_rating.reset();
        for vec in self.aggregate.values().chain(self.heroes.values()) {
            vec.reset();
        }
    }

    fn export_player(&self, entry: &RuntimeEntry) {
        let profile: &Profile = &entry.profile;
        let tag = profile.handle.as_str();

        if let Some(level) = profile.summary.endorsement_level {
            self.endorsement_level
                .with_label_values(&[tag])
                .set(level as f64);
        }

        for (platform, roles) in &profile.summary.ranks {
            for (role, rank) in roles {
                self.skill_rating
                    .with_label_values(&[
                        tag,
                        platform.as_str(),
                        "competitive",
                        role.as_str(),
                        rank.tier.as_str(),
                    ])
                    .set(rank.skill_rating() as f64);
            }
        }

        for (platform, p) in &profile.platforms {
            for (mode, m) in &p.modes {
                let (platform, mode) = (platform.as_str(), mode.as_str());

                for (key, value) in &m.aggregate {
                    match self.aggregate.get(key.as_str()) {
                        Some(vec) => vec.with_label_values(&[tag, platform, mode]).set(*value),
                        None => debug!(key = %key, "no aggregate series for key"),
                    }
                }

                for (hero, stats) in &m.characters {
                    for (key, value) in &stats.stats {
                        let vec = self
                            .catalog
                            .find(hero, key)
                            .and_then(|d| self.heroes.get(d.series));
                        match vec {
                            Some(vec) => vec
                                .with_label_values(&[tag, hero.as_str(), platform, mode])
                                .set(*value),
                            None => {
                                debug!(hero = %hero, key = %key, "no descriptor for key, skipping")
                            }
                        }
                    }
                }
            }
        }
    }
}
