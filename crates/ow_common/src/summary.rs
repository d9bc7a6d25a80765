//! Masthead parsing: name, title, endorsement level and competitive ranks.
//!
//! Every piece is optional. A missing or malformed element is logged at
//! debug level and left out of the result.

use crate::error::ParseError;
use crate::profile::{CompetitiveRank, ProfileSummary, RankTier};
use crate::registry::Role;
use crate::selector::{parse_static, Platform};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::debug;

const NAME: &str = ".Profile-player--name";
const TITLE: &str = ".Profile-player--title";
const ENDORSEMENT: &str = ".Profile-playerSummary--endorsement";
const RANK_WRAPPER: &str = ".Profile-playerSummary--rankWrapper";
const ROLE_WRAPPER: &str = ".Profile-playerSummary--roleWrapper";
const ROLE_ICON: &str = ".Profile-playerSummary--role img";
const RANK_IMAGE: &str = "img.Profile-playerSummary--rank";

static ENDORSEMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"endorsement/(\d+)-").expect("invalid regex"));
static TIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Rank_([A-Za-z]+)Tier").expect("invalid regex"));
static DIVISION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"TierDivision_(\d)").expect("invalid regex"));

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Masthead {
    pub display_name: Option<String>,
    pub title: Option<String>,
    pub summary: ProfileSummary,
}

pub fn parse_masthead(doc: &Html) -> Result<Masthead, ParseError> {
    let mut masthead = Masthead {
        display_name: first_text(doc, NAME)?,
        title: first_text(doc, TITLE)?,
        summary: ProfileSummary::default(),
    };

    let endorsement = parse_static(ENDORSEMENT)?;
    masthead.summary.endorsement_level = doc
        .select(&endorsement)
        .next()
        .and_then(|el| el.value().attr("src"))
        .and_then(|src| ENDORSEMENT_RE.captures(src))
        .and_then(|caps| caps[1].parse().ok());

    let role_wrapper = parse_static(ROLE_WRAPPER)?;
    for platform in Platform::ALL {
        let scope = parse_static(&format!("{} {}", RANK_WRAPPER, platform.view_class()))?;
        let Some(view) = doc.select(&scope).next() else {
            continue;
        };

        let mut ranks = std::collections::BTreeMap::new();
        for wrapper in view.select(&role_wrapper) {
            match parse_role_rank(wrapper)? {
                Some((role, rank)) => {
                    ranks.insert(role, rank);
                }
                None => debug!(platform = %platform, "skipping incomplete rank block"),
            }
        }
        if !ranks.is_empty() {
            masthead.summary.ranks.insert(platform, ranks);
        }
    }

    Ok(masthead)
}

fn parse_role_rank(wrapper: ElementRef<'_>) -> Result<Option<(Role, CompetitiveRank)>, ParseError> {
    let role_icon = parse_static(ROLE_ICON)?;
    let rank_image = parse_static(RANK_IMAGE)?;

    let role = wrapper
        .select(&role_icon)
        .next()
        .and_then(|img| img.value().attr("src"))
        .and_then(role_from_icon);
    let Some(role) = role else {
        return Ok(None);
    };

    let mut tier = None;
    let mut division = None;
    for img in wrapper.select(&rank_image) {
        let Some(src) = img.value().attr("src") else {
            continue;
        };
        if let Some(caps) = TIER_RE.captures(src) {
            tier = caps[1].parse::<RankTier>().ok();
        } else if let Some(caps) = DIVISION_RE.captures(src) {
            division = caps[1].parse::<u8>().ok();
        }
    }

    Ok(match (tier, division) {
        (Some(tier), Some(division)) if (1..=CompetitiveRank::DIVISIONS).contains(&division) => {
            Some((role, CompetitiveRank { tier, division }))
        }
        _ => None,
    })
}

fn role_from_icon(src: &str) -> Option<Role> {
    let src = src.to_ascii_lowercase();
    if src.contains("tank") {
        Some(Role::Tank)
    } else if src.contains("offense") || src.contains("damage") {
        Some(Role::Damage)
    } else if src.contains("support") {
        Some(Role::Support)
    } else {
        None
    }
}

fn first_text(doc: &Html, css: &str) -> Result<Option<String>, ParseError> {
    let selector = parse_static(css)?;
    Ok(doc
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASTHEAD: &str = r#"
        <div class="Profile-masthead">
          <h1 class="Profile-player--name">Tracer</h1>
          <h2 class="Profile-player--title">Cheers Love</h2>
          <img class="Profile-playerSummary--endorsement" src="/icons/endorsement/4-abc.svg">
          <div class="Profile-playerSummary--rankWrapper">
            <div class="mouseKeyboard-view">
              <div class="Profile-playerSummary--roleWrapper">
                <div class="Profile-playerSummary--role"><img src="/role/offense-1.svg"></div>
                <img class="Profile-playerSummary--rank" src="/rank/Rank_DiamondTier-1.png">
                <img class="Profile-playerSummary--rank" src="/rank/TierDivision_2-1.png">
              </div>
              <div class="Profile-playerSummary--roleWrapper">
                <div class="Profile-playerSummary--role"><img src="/role/support-1.svg"></div>
                <img class="Profile-playerSummary--rank" src="/rank/Rank_GoldTier-1.png">
              </div>
            </div>
          </div>
        </div>"#;

    #[test]
    fn test_parse_masthead() {
        let doc = Html::parse_document(MASTHEAD);
        let m = parse_masthead(&doc).unwrap();

        assert_eq!(m.display_name.as_deref(), Some("Tracer"));
        assert_eq!(m.title.as_deref(), Some("Cheers Love"));
        assert_eq!(m.summary.endorsement_level, Some(4));

        let pc = &m.summary.ranks[&Platform::Pc];
        assert_eq!(
            pc.get(&Role::Damage),
            Some(&CompetitiveRank {
                tier: RankTier::Diamond,
                division: 2
            })
        );
        // support block has no division
        assert!(pc.get(&Role::Support).is_none());
        assert!(!m.summary.ranks.contains_key(&Platform::Console));
    }

    #[test]
    fn test_missing_masthead_is_empty() {
        let doc = Html::parse_document("<html><body><p>nothing</p></body></html>");
        assert_eq!(parse_masthead(&doc).unwrap(), Masthead::default());
    }
}
