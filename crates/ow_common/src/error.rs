//! Error types for the statistics core.

use crate::registry::ValueKind;
use crate::selector::{GameMode, Platform};
use serde::Serialize;
use thiserror::Error;

/// Coarse failure class, used by callers to pick a log level and to decide
/// whether the next scheduled sweep should simply try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Network timeout or transport failure; retried on the next sweep.
    Transient,
    /// Handle cannot be resolved or a profile section is absent.
    NotFound,
    /// The document names a character the registry does not know.
    SchemaViolation,
    /// Broken internal state or configuration.
    Invariant,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown character '{0}' - not in registry")]
    UnknownCharacter(String),

    #[error("character '{0}' is declared twice in the catalog")]
    DuplicateCharacter(String),

    #[error("metric key '{key}' is declared twice for character '{character}'")]
    DuplicateKey { character: String, key: String },
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::UnknownCharacter(_) => ErrorKind::SchemaViolation,
            RegistryError::DuplicateCharacter(_) | RegistryError::DuplicateKey { .. } => {
                ErrorKind::Invariant
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("unrecognized {kind} value: {raw:?}")]
    Unrecognized { raw: String, kind: ValueKind },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("document is not parseable markup: {0}")]
    Unparseable(String),

    #[error("unknown character '{character}' in {platform}/{mode} - registry needs updating")]
    UnknownCharacter {
        character: String,
        platform: Platform,
        mode: GameMode,
    },

    #[error("invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Unparseable(_) => ErrorKind::NotFound,
            ParseError::UnknownCharacter { .. } => ErrorKind::SchemaViolation,
            ParseError::Selector { .. } => ErrorKind::Invariant,
        }
    }
}
