//! Command implementations behind the `owd` CLI.

use crate::config::Config;
use crate::resolver::{HttpRedirectFollower, Resolver};
use crate::roster::{Roster, YamlRoster};
use crate::server::{self, AppState};
use anyhow::{bail, Context, Result};
use ow_common::{Lookup, MetricRegistry, Profile, ProfileParser};
use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Run the HTTP server and the periodic sweep until Ctrl-C.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = config.listen_addr()?;
    let state = AppState::from_config(config)?;

    info!(
        "owd v{} starting, roster {}",
        env!("CARGO_PKG_VERSION"),
        config.roster.path.display()
    );

    let sweeper = tokio::spawn(
        Arc::clone(&state.collector).run_periodic(config.scrape.interval()),
    );
    let result = server::run(state, addr).await;
    sweeper.abort();
    result
}

/// Resolve, fetch and parse one player, printing the profile as JSON.
pub async fn parse(config: &Config, battletag: &str) -> Result<()> {
    let state = AppState::from_config(config)?;
    let profile = state
        .collector
        .collect(battletag)
        .await
        .with_context(|| format!("parsing profile of {}", battletag))?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

/// Parse a saved profile page.
pub fn parse_file(path: &Path, handle: &str, json: bool) -> Result<()> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let parser = ProfileParser::new(Arc::new(MetricRegistry::standard()?));
    let profile = parser
        .parse(&html, handle)
        .with_context(|| format!("parsing {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print!("{}", format_profile(&profile));
    }
    Ok(())
}

pub async fn players_list(config: &Config) -> Result<()> {
    let roster = open_roster(config)?;
    let players = roster.list_all().await;
    if players.is_empty() {
        println!("No players configured.");
        return Ok(());
    }

    println!("{:<24} {:<13} {}", "BATTLETAG", "STATUS", "LAST RESOLVED");
    for p in players {
        let status = if p.is_resolved() { "resolved" } else { "not_resolved" };
        let last = p
            .last_resolved
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!("{:<24} {:<13} {}", p.battletag, status, last);
    }
    Ok(())
}

/// Resolve immediately and add to the roster.
pub async fn players_add(config: &Config, battletag: &str) -> Result<()> {
    let resolver = resolver(config)?;
    if resolver.roster().find_by_handle(battletag).await.is_some() {
        bail!("player {} is already in the roster", battletag);
    }
    let entry = resolver.refresh(battletag).await?;
    println!(
        "Added {} -> {}",
        entry.battletag,
        entry.resolved_url.unwrap_or_default()
    );
    Ok(())
}

pub async fn players_remove(config: &Config, battletag: &str) -> Result<()> {
    let roster = open_roster(config)?;
    roster.remove(battletag).await?;
    println!("Removed {}", battletag);
    Ok(())
}

pub async fn resolve_all(config: &Config, force: bool) -> Result<()> {
    let summary = resolver(config)?.resolve_all(force).await;
    println!(
        "resolved: {}, skipped: {}, failed: {}",
        summary.resolved.len(),
        summary.skipped.len(),
        summary.failed.len()
    );
    for (tag, err) in &summary.failed {
        println!("  {}: {}", tag, err);
    }
    if !summary.failed.is_empty() && summary.resolved.is_empty() && summary.skipped.is_empty() {
        bail!("no player could be resolved");
    }
    Ok(())
}

pub fn catalog(hero: Option<&str>) -> Result<()> {
    let registry = MetricRegistry::standard()?;
    print!("{}", format_catalog(&registry, hero)?);
    Ok(())
}

fn open_roster(config: &Config) -> Result<Arc<dyn Roster>> {
    let roster = YamlRoster::open(&config.roster.path)
        .with_context(|| format!("opening roster {}", config.roster.path.display()))?;
    Ok(Arc::new(roster))
}

fn resolver(config: &Config) -> Result<Resolver> {
    let follower = HttpRedirectFollower::new(
        config.scrape.resolve_timeout(),
        config.scrape.max_redirects,
    )?;
    Ok(Resolver::new(
        Arc::new(follower),
        open_roster(config)?,
        config.scrape.base_url.clone(),
    ))
}

/// Human-readable profile overview.
pub fn format_profile(profile: &Profile) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({})",
        profile.display_name.as_deref().unwrap_or(&profile.handle),
        profile.title.as_deref().unwrap_or("no title")
    );
    if let Some(level) = profile.summary.endorsement_level {
        let _ = writeln!(out, "  endorsement: {}", level);
    }
    for (platform, roles) in &profile.summary.ranks {
        for (role, rank) in roles {
            let _ = writeln!(
                out,
                "  rank {}/{}: {} {} ({})",
                platform,
                role,
                rank.tier,
                rank.division,
                rank.skill_rating()
            );
        }
    }
    if profile.platforms.is_empty() {
        let _ = writeln!(out, "  no statistics (private or empty profile)");
    }
    for (platform, p) in &profile.platforms {
        for (mode, m) in &p.modes {
            let _ = writeln!(
                out,
                "  {}/{}: {} heroes, {} aggregate stats",
                platform,
                mode,
                m.characters.len(),
                m.aggregate.len()
            );
            for (id, c) in &m.characters {
                let played = c.stats.get("time_played").copied().unwrap_or(0.0);
                let _ = writeln!(
                    out,
                    "    {:<16} {:>4} stats  {:>8.1}h played",
                    id,
                    c.stats.len(),
                    played / 3600.0
                );
            }
        }
    }
    out
}

/// Descriptor listing: the character index, or one character's metrics.
pub fn format_catalog(registry: &MetricRegistry, hero: Option<&str>) -> Result<String> {
    let mut out = String::new();
    match hero {
        None => {
            let _ = writeln!(out, "common metrics: {}", registry.common().len());
            for c in registry.characters() {
                let _ = writeln!(
                    out,
                    "{:<16} {:<18} {:<8} {} specific",
                    c.id,
                    c.name,
                    c.role.as_str(),
                    c.metrics.len()
                );
            }
        }
        Some(id) => {
            let Some(entry) = registry.character(id) else {
                bail!("unknown hero '{}'", id);
            };
            let _ = writeln!(out, "{} ({}, {})", entry.name, entry.id, entry.role);
            for d in registry.describe(id, Lookup::Strict)? {
                let _ = writeln!(out, "  {:<32} {:<10} {}", d.key, d.kind.as_str(), d.series);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_catalog_index_and_hero() {
        let registry = MetricRegistry::standard().unwrap();

        let index = format_catalog(&registry, None).unwrap();
        assert!(index.starts_with("common metrics: 15"));
        assert_eq!(index.lines().count(), 45);

        let soldier = format_catalog(&registry, Some("soldier-76")).unwrap();
        assert!(soldier.contains("helix_rocket_kills"));
        assert!(soldier.contains("ow_hero_time_played_seconds"));

        assert!(format_catalog(&registry, Some("nobody")).is_err());
    }

    #[test]
    fn test_format_empty_profile() {
        let profile = Profile::empty("Someone-1");
        let text = format_profile(&profile);
        assert!(text.starts_with("Someone-1 (no title)"));
        assert!(text.contains("no statistics"));
    }
}
