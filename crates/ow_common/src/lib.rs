//! Statistics core shared by the `owd` daemon.
//!
//! Turns a rendered career-profile page into a typed statistics tree:
//! descriptor catalog, selector composition, value coercion and the
//! profile parser live here. Nothing in this crate performs I/O.

pub mod catalog;
pub mod error;
pub mod parser;
pub mod profile;
pub mod registry;
pub mod selector;
pub mod summary;
pub mod values;

pub use error::{ErrorKind, ParseError, RegistryError, ValueError};
pub use parser::ProfileParser;
pub use profile::{
    CharacterStats, CompetitiveRank, ModeProfile, PlatformProfile, Profile, ProfileSummary,
    RankTier, StatBag,
};
pub use registry::{CharacterEntry, Lookup, MetricDescriptor, MetricRegistry, Role, ValueKind};
pub use selector::{compose, ComposedSelector, GameMode, Platform};
pub use values::{coerce, parse_any, string_to_key, RawValue};
