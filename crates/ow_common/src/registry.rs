//! Metric descriptor registry.
//!
//! Every character exposes the common descriptor set plus its own specific
//! descriptors. The registry is built once from the static catalog table and
//! is read-only afterwards; share it behind an `Arc`.

use crate::catalog;
use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Encoding of the raw text a descriptor points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// `H:MM:SS` or `M:SS`, stored as seconds.
    Duration,
    Count,
    /// Trailing `%`, stored without the sign.
    Percentage,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Duration => "duration",
            ValueKind::Count => "count",
            ValueKind::Percentage => "percentage",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ValueKind::Duration => "seconds",
            ValueKind::Count => "",
            ValueKind::Percentage => "percent",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Tank,
    Damage,
    Support,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Tank, Role::Damage, Role::Support];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tank => "tank",
            Role::Damage => "damage",
            Role::Support => "support",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named statistic and where to find it inside a character or aggregate
/// container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricDescriptor {
    pub key: &'static str,
    pub display_name: &'static str,
    /// Exported gauge family name.
    pub series: &'static str,
    pub help: &'static str,
    pub kind: ValueKind,
    /// Selector fragment, relative to the container it is applied in.
    pub location: &'static str,
}

impl MetricDescriptor {
    pub const fn new(
        key: &'static str,
        display_name: &'static str,
        series: &'static str,
        help: &'static str,
        kind: ValueKind,
        location: &'static str,
    ) -> Self {
        Self {
            key,
            display_name,
            series,
            help,
            kind,
            location,
        }
    }

    pub const fn duration(
        key: &'static str,
        display_name: &'static str,
        series: &'static str,
        help: &'static str,
        location: &'static str,
    ) -> Self {
        Self::new(key, display_name, series, help, ValueKind::Duration, location)
    }

    pub const fn count(
        key: &'static str,
        display_name: &'static str,
        series: &'static str,
        help: &'static str,
        location: &'static str,
    ) -> Self {
        Self::new(key, display_name, series, help, ValueKind::Count, location)
    }

    pub const fn percentage(
        key: &'static str,
        display_name: &'static str,
        series: &'static str,
        help: &'static str,
        location: &'static str,
    ) -> Self {
        Self::new(key, display_name, series, help, ValueKind::Percentage, location)
    }
}

/// Static catalog row for one character.
#[derive(Debug, Clone, Copy)]
pub struct CharacterEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub role: Role,
    pub metrics: &'static [MetricDescriptor],
}

impl CharacterEntry {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        role: Role,
        metrics: &'static [MetricDescriptor],
    ) -> Self {
        Self {
            id,
            name,
            role,
            metrics,
        }
    }
}

/// How `describe` treats a character id missing from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Fail with `RegistryError::UnknownCharacter`.
    Strict,
    /// Fall back to the common descriptors.
    CommonOnly,
}

#[derive(Debug)]
struct Character {
    entry: CharacterEntry,
    descriptors: Vec<MetricDescriptor>,
}

#[derive(Debug)]
pub struct MetricRegistry {
    common: Vec<MetricDescriptor>,
    characters: HashMap<&'static str, Character>,
    order: Vec<&'static str>,
}

impl MetricRegistry {
    /// Registry over the shipped catalog.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::with_catalog(catalog::COMMON, catalog::CHARACTERS)
    }

    pub fn with_catalog(
        common: &'static [MetricDescriptor],
        characters: &'static [CharacterEntry],
    ) -> Result<Self, RegistryError> {
        let mut by_id = HashMap::with_capacity(characters.len());
        let mut order = Vec::with_capacity(characters.len());

        for entry in characters {
            if by_id.contains_key(entry.id) {
                return Err(RegistryError::DuplicateCharacter(entry.id.to_string()));
            }

            let mut seen = HashSet::new();
            let mut descriptors = Vec::with_capacity(common.len() + entry.metrics.len());
            for d in entry.metrics.iter().chain(common.iter()) {
                if !seen.insert(d.key) {
                    return Err(RegistryError::DuplicateKey {
                        character: entry.id.to_string(),
                        key: d.key.to_string(),
                    });
                }
                descriptors.push(*d);
            }

            order.push(entry.id);
            by_id.insert(
                entry.id,
                Character {
                    entry: *entry,
                    descriptors,
                },
            );
        }

        Ok(Self {
            common: common.to_vec(),
            characters: by_id,
            order,
        })
    }

    /// Combined descriptor set for a character: specific first, then common.
    pub fn describe(&self, id: &str, lookup: Lookup) -> Result<&[MetricDescriptor], RegistryError> {
        match self.characters.get(id) {
            Some(c) => Ok(&c.descriptors),
            None => match lookup {
                Lookup::CommonOnly => Ok(&self.common),
                Lookup::Strict => Err(RegistryError::UnknownCharacter(id.to_string())),
            },
        }
    }

    pub fn common(&self) -> &[MetricDescriptor] {
        &self.common
    }

    pub fn contains(&self, id: &str) -> bool {
        self.characters.contains_key(id)
    }

    pub fn character(&self, id: &str) -> Option<&CharacterEntry> {
        self.characters.get(id).map(|c| &c.entry)
    }

    /// Characters in catalog order.
    pub fn characters(&self) -> impl Iterator<Item = &CharacterEntry> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.characters.get(id).map(|c| &c.entry))
    }

    pub fn find(&self, id: &str, key: &str) -> Option<&MetricDescriptor> {
        self.describe(id, Lookup::CommonOnly)
            .ok()
            .and_then(|ds| ds.iter().find(|d| d.key == key))
    }

    /// One descriptor per distinct series name, common first.
    pub fn series(&self) -> Vec<&MetricDescriptor> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        let specific = self
            .order
            .iter()
            .filter_map(|id| self.characters.get(id))
            .flat_map(|c| c.entry.metrics.iter());
        for d in self.common.iter().chain(specific) {
            if seen.insert(d.series) {
                out.push(d);
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_consistent() {
        let registry = MetricRegistry::standard().unwrap();
        assert_eq!(registry.len(), 44);
        assert_eq!(registry.common().len(), 15);
    }

    #[test]
    fn test_common_keys_are_subset_of_every_character() {
        let registry = MetricRegistry::standard().unwrap();
        for entry in registry.characters() {
            let keys: HashSet<_> = registry
                .describe(entry.id, Lookup::Strict)
                .unwrap()
                .iter()
                .map(|d| d.key)
                .collect();
            for common in registry.common() {
                assert!(
                    keys.contains(common.key),
                    "{} is missing common key {}",
                    entry.id,
                    common.key
                );
            }
        }
    }

    #[test]
    fn test_describe_unknown_character() {
        let registry = MetricRegistry::standard().unwrap();
        assert_eq!(
            registry.describe("not-a-hero", Lookup::Strict),
            Err(RegistryError::UnknownCharacter("not-a-hero".to_string()))
        );
        let common = registry.describe("not-a-hero", Lookup::CommonOnly).unwrap();
        assert_eq!(common.len(), registry.common().len());
    }

    #[test]
    fn test_describe_puts_specific_before_common() {
        let registry = MetricRegistry::standard().unwrap();
        let ds = registry.describe("soldier-76", Lookup::Strict).unwrap();
        assert_eq!(ds[0].key, "helix_rocket_kills");
        assert!(ds.iter().any(|d| d.key == "time_played"));
        assert_eq!(registry.character("soldier-76").unwrap().role, Role::Damage);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        static COMMON: &[MetricDescriptor] =
            &[MetricDescriptor::count("kills", "Kills", "k", "k", "[data-stat='k']")];
        static DUPED: &[MetricDescriptor] =
            &[MetricDescriptor::count("kills", "Kills", "k2", "k", "[data-stat='k2']")];
        static CHARS: &[CharacterEntry] = &[CharacterEntry::new("a", "A", Role::Tank, DUPED)];

        let err = MetricRegistry::with_catalog(COMMON, CHARS).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateKey {
                character: "a".to_string(),
                key: "kills".to_string()
            }
        );
    }

    #[test]
    fn test_series_names_are_distinct() {
        let registry = MetricRegistry::standard().unwrap();
        let series = registry.series();
        let names: HashSet<_> = series.iter().map(|d| d.series).collect();
        assert_eq!(names.len(), series.len());
        assert_eq!(series[0].series, "ow_hero_time_played_seconds");
    }

    #[test]
    fn test_find_falls_back_to_common() {
        let registry = MetricRegistry::standard().unwrap();
        assert_eq!(
            registry.find("unknown", "games_won").map(|d| d.kind),
            Some(ValueKind::Count)
        );
        assert!(registry.find("soldier-76", "no_such_key").is_none());
    }
}
