//! Profile page parser.
//!
//! Walks every platform and game mode the page renders, extracts the
//! aggregate block and each character block, and assembles a `Profile`.
//! The character set is closed: a character id the registry does not know
//! fails the whole mode instead of being skipped, so a catalog that has
//! fallen behind the game is noticed immediately.

use crate::error::ParseError;
use crate::profile::{CharacterStats, ModeProfile, PlatformProfile, Profile, StatBag};
use crate::registry::{Lookup, MetricDescriptor, MetricRegistry};
use crate::selector::{
    character_scope, compose, parse_static, GameMode, Platform, AGGREGATE_SCOPE,
    CHARACTER_CONTAINER,
};
use crate::summary::parse_masthead;
use crate::values::coerce;
use chrono::Utc;
use scraper::{ElementRef, Html};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

const CHARACTER_NAME: &str = ".Profile-heroStats-title";
const CHARACTER_ID_ATTR: &str = "data-hero-id";

/// Parse raw markup. Empty input or input without any markup is rejected;
/// everything else is handed to the HTML parser, which never fails.
pub fn load_document(html: &str) -> Result<Html, ParseError> {
    if html.trim().is_empty() {
        return Err(ParseError::Unparseable("empty document".to_string()));
    }
    if !html.contains('<') {
        return Err(ParseError::Unparseable("no markup in document".to_string()));
    }
    Ok(Html::parse_document(html))
}

#[derive(Debug, Clone)]
pub struct ProfileParser {
    registry: Arc<MetricRegistry>,
}

impl ProfileParser {
    pub fn new(registry: Arc<MetricRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &MetricRegistry {
        &self.registry
    }

    pub fn parse(&self, html: &str, handle: &str) -> Result<Profile, ParseError> {
        let doc = load_document(html)?;
        self.parse_document(&doc, handle)
    }

    pub fn parse_document(&self, doc: &Html, handle: &str) -> Result<Profile, ParseError> {
        let masthead = parse_masthead(doc)?;

        let mut platforms = BTreeMap::new();
        for platform in Platform::ALL {
            if let Some(p) = self.parse_platform(doc, platform)? {
                platforms.insert(platform, p);
            }
        }

        let profile = Profile {
            handle: handle.to_string(),
            display_name: masthead.display_name,
            title: masthead.title,
            observed_at: Utc::now(),
            summary: masthead.summary,
            platforms,
        };

        debug!(
            handle,
            platforms = profile.platforms.len(),
            characters = profile.character_count(),
            stats = profile.stat_count(),
            "parsed profile"
        );
        Ok(profile)
    }

    /// `None` when the platform view is absent or none of its modes holds a
    /// character.
    pub fn parse_platform(
        &self,
        doc: &Html,
        platform: Platform,
    ) -> Result<Option<PlatformProfile>, ParseError> {
        let view = parse_static(platform.view_selector())?;
        if doc.select(&view).next().is_none() {
            debug!(platform = %platform, "platform view absent");
            return Ok(None);
        }

        let mut modes = BTreeMap::new();
        for mode in GameMode::ALL {
            if let Some(m) = self.parse_mode(doc, platform, mode)? {
                modes.insert(mode, m);
            }
        }

        if modes.is_empty() {
            return Ok(None);
        }
        Ok(Some(PlatformProfile { platform, modes }))
    }

    /// Parse one platform/mode scope on its own. `None` when the mode view
    /// is absent or holds no character; an unknown character is an error
    /// for this scope only.
    pub fn parse_mode(
        &self,
        doc: &Html,
        platform: Platform,
        mode: GameMode,
    ) -> Result<Option<ModeProfile>, ParseError> {
        let view = compose("", platform, mode).to_selector()?;
        let Some(mode_view) = doc.select(&view).next() else {
            debug!(platform = %platform, mode = %mode, "mode view absent");
            return Ok(None);
        };

        let aggregate = self.extract(doc, platform, mode, AGGREGATE_SCOPE, self.registry.common())?;

        let container = parse_static(CHARACTER_CONTAINER)?;
        let name_selector = parse_static(CHARACTER_NAME)?;
        let mut characters = BTreeMap::new();

        for block in mode_view.select(&container) {
            let Some(id) = block.value().attr(CHARACTER_ID_ATTR).map(str::trim) else {
                debug!(platform = %platform, mode = %mode, "character block without id");
                continue;
            };
            if id.is_empty() {
                continue;
            }

            let Some(display_name) = element_text(block, &name_selector) else {
                debug!(character = id, "character block without a name");
                continue;
            };

            let descriptors = self.registry.describe(id, Lookup::Strict).map_err(|_| {
                warn!(character = id, platform = %platform, mode = %mode, "unknown character");
                ParseError::UnknownCharacter {
                    character: id.to_string(),
                    platform,
                    mode,
                }
            })?;

            if characters.contains_key(id) {
                debug!(character = id, "duplicate character block ignored");
                continue;
            }

            let stats = self.extract(doc, platform, mode, &character_scope(id), descriptors)?;
            characters.insert(id.to_string(), CharacterStats { display_name, stats });
        }

        if characters.is_empty() {
            debug!(platform = %platform, mode = %mode, "no characters in mode");
            return Ok(None);
        }

        Ok(Some(ModeProfile {
            mode,
            aggregate,
            characters,
        }))
    }

    /// Resolve each descriptor under `scope`; misses and unparseable values
    /// are dropped without touching the rest of the bag.
    fn extract(
        &self,
        doc: &Html,
        platform: Platform,
        mode: GameMode,
        scope: &str,
        descriptors: &[MetricDescriptor],
    ) -> Result<StatBag, ParseError> {
        let mut bag = StatBag::new();
        for d in descriptors {
            let selector = compose(d.location, platform, mode).within(scope).to_selector()?;
            let Some(el) = doc.select(&selector).next() else {
                continue;
            };
            let raw = el.text().collect::<String>();
            match coerce(&raw, d.kind) {
                Ok(v) => {
                    bag.insert(d.key.to_string(), v);
                }
                Err(e) => debug!(key = d.key, error = %e, "discarding value"),
            }
        }
        Ok(bag)
    }
}

fn element_text(scope: ElementRef<'_>, selector: &scraper::Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}
