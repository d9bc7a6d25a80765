//! Selector composition.
//!
//! A profile page renders every platform and game mode at once and marks the
//! visible one with `is-active`. A descriptor's location fragment is scoped
//! under the platform view, then the mode view, then (optionally) the
//! container it belongs to.

use crate::error::ParseError;
use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aggregate ("all heroes") statistics block inside a mode view.
pub const AGGREGATE_SCOPE: &str = ".Profile-allHeroes";

/// Per-character statistics block inside a mode view.
pub const CHARACTER_CONTAINER: &str = ".Profile-heroStats";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Pc,
    Console,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Pc, Platform::Console];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Pc => "pc",
            Platform::Console => "console",
        }
    }

    /// View class without the active marker; the masthead uses it for ranks.
    pub fn view_class(&self) -> &'static str {
        match self {
            Platform::Pc => ".mouseKeyboard-view",
            Platform::Console => ".controller-view",
        }
    }

    pub fn view_selector(&self) -> &'static str {
        match self {
            Platform::Pc => ".mouseKeyboard-view.is-active",
            Platform::Console => ".controller-view.is-active",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pc" => Ok(Platform::Pc),
            "console" => Ok(Platform::Console),
            other => Err(format!("unknown platform: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    QuickPlay,
    Competitive,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::QuickPlay, GameMode::Competitive];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::QuickPlay => "quickplay",
            GameMode::Competitive => "competitive",
        }
    }

    pub fn view_selector(&self) -> &'static str {
        match self {
            GameMode::QuickPlay => ".quickPlay-view.is-active",
            GameMode::Competitive => ".competitive-view.is-active",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quickplay" | "quick_play" | "quick-play" => Ok(GameMode::QuickPlay),
            "competitive" => Ok(GameMode::Competitive),
            other => Err(format!("unknown game mode: {}", other)),
        }
    }
}

/// A fully scoped selector. Renders as descendant combinators joined by a
/// single space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedSelector {
    platform: Platform,
    mode: GameMode,
    scope: Option<String>,
    fragment: String,
}

/// Scope `template` under the platform view, then the mode view.
pub fn compose(template: &str, platform: Platform, mode: GameMode) -> ComposedSelector {
    ComposedSelector {
        platform,
        mode,
        scope: None,
        fragment: template.trim().to_string(),
    }
}

impl ComposedSelector {
    /// Insert a container scope between the mode view and the fragment.
    pub fn within(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn to_selector(&self) -> Result<Selector, ParseError> {
        let css = self.to_string();
        Selector::parse(&css).map_err(|e| ParseError::Selector {
            selector: css.clone(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for ComposedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.platform.view_selector(),
            self.mode.view_selector()
        )?;
        if let Some(scope) = &self.scope {
            write!(f, " {}", scope)?;
        }
        if !self.fragment.is_empty() {
            write!(f, " {}", self.fragment)?;
        }
        Ok(())
    }
}

/// Scope selecting a single character container by id.
pub fn character_scope(id: &str) -> String {
    format!("{}[data-hero-id='{}']", CHARACTER_CONTAINER, id)
}

/// Parse a fixed selector string.
pub fn parse_static(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}
