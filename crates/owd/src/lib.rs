//! owd - Overwatch profile statistics exporter daemon.
//!
//! Keeps a roster of players, periodically fetches and parses their career
//! pages, holds the latest parse per player in memory and serves it as a
//! Prometheus scrape target.

pub mod collector;
pub mod commands;
pub mod config;
pub mod exporter;
pub mod fetch;
pub mod resolver;
pub mod roster;
pub mod routes;
pub mod runtime;
pub mod server;

pub use collector::{CollectError, Collector};
pub use config::Config;
pub use exporter::{Exporter, ExporterError};
pub use fetch::{FakeFetcher, FetchError, Fetcher, HttpFetcher};
pub use resolver::{FakeRedirectFollower, RedirectFollower, ResolveError, Resolver};
pub use roster::{PlayerEntry, Roster, RosterError, YamlRoster};
pub use runtime::{PlayerMetrics, RuntimeStore, StoreStats};
pub use server::AppState;
