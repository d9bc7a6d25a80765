//! Typed statistics tree produced by one parse of a profile page.
//!
//! A `Profile` is built fresh per parse and never mutated afterwards; a newer
//! parse replaces it wholesale.

use crate::registry::Role;
use crate::selector::{GameMode, Platform};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Metric key to value.
pub type StatBag = BTreeMap<String, f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub display_name: String,
    pub stats: StatBag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeProfile {
    pub mode: GameMode,
    pub aggregate: StatBag,
    pub characters: BTreeMap<String, CharacterStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformProfile {
    pub platform: Platform,
    pub modes: BTreeMap<GameMode, ModeProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
    Champion,
}

impl RankTier {
    pub const ALL: [RankTier; 8] = [
        RankTier::Bronze,
        RankTier::Silver,
        RankTier::Gold,
        RankTier::Platinum,
        RankTier::Diamond,
        RankTier::Master,
        RankTier::Grandmaster,
        RankTier::Champion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RankTier::Bronze => "bronze",
            RankTier::Silver => "silver",
            RankTier::Gold => "gold",
            RankTier::Platinum => "platinum",
            RankTier::Diamond => "diamond",
            RankTier::Master => "master",
            RankTier::Grandmaster => "grandmaster",
            RankTier::Champion => "champion",
        }
    }

    fn index(&self) -> u32 {
        *self as u32
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        RankTier::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| format!("unknown rank tier: {}", s))
    }
}

/// Tier plus division; division 1 is the top of a tier, 5 the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitiveRank {
    pub tier: RankTier,
    pub division: u8,
}

impl CompetitiveRank {
    pub const DIVISIONS: u8 = 5;

    /// Monotonic numeric encoding: Bronze 5 is 1000, each division adds 100
    /// and each tier 500, so Champion 1 is 4900.
    pub fn skill_rating(&self) -> u32 {
        let division = self.division.clamp(1, Self::DIVISIONS) as u32;
        1000 + self.tier.index() * 500 + (Self::DIVISIONS as u32 - division) * 100
    }
}

/// Masthead data shown above the statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub endorsement_level: Option<u32>,
    pub ranks: BTreeMap<Platform, BTreeMap<Role, CompetitiveRank>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub handle: String,
    pub display_name: Option<String>,
    pub title: Option<String>,
    pub observed_at: DateTime<Utc>,
    #[serde(default)]
    pub summary: ProfileSummary,
    pub platforms: BTreeMap<Platform, PlatformProfile>,
}

impl Profile {
    pub fn empty(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            display_name: None,
            title: None,
            observed_at: Utc::now(),
            summary: ProfileSummary::default(),
            platforms: BTreeMap::new(),
        }
    }

    pub fn mode(&self, platform: Platform, mode: GameMode) -> Option<&ModeProfile> {
        self.platforms.get(&platform)?.modes.get(&mode)
    }

    pub fn character(
        &self,
        platform: Platform,
        mode: GameMode,
        id: &str,
    ) -> Option<&CharacterStats> {
        self.mode(platform, mode)?.characters.get(id)
    }

    /// Distinct characters seen across every platform and mode.
    pub fn character_count(&self) -> usize {
        let mut ids: Vec<&str> = self
            .platforms
            .values()
            .flat_map(|p| p.modes.values())
            .flat_map(|m| m.characters.keys().map(String::as_str))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    pub fn stat_count(&self) -> usize {
        self.platforms
            .values()
            .flat_map(|p| p.modes.values())
            .map(|m| {
                m.aggregate.len() + m.characters.values().map(|c| c.stats.len()).sum::<usize>()
            })
            .sum()
    }
}
