//! Configuration management for owd.
//!
//! Loads settings from `owd.toml` (or `$OWD_CONFIG`) or uses defaults.
//! `$PORT` overrides the listen port.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Config file path used when neither `--config` nor `$OWD_CONFIG` is set
pub const DEFAULT_CONFIG_PATH: &str = "owd.toml";

pub const CONFIG_ENV: &str = "OWD_CONFIG";
pub const PORT_ENV: &str = "PORT";

/// HTTP listener
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:9420".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

/// Fetching and the periodic sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Seconds between two sweeps over the roster
    #[serde(default = "default_interval")]
    pub interval_secs: u64,

    /// Delay between two players inside one sweep
    #[serde(default = "default_pacing")]
    pub pacing_ms: u64,

    /// Whole-request timeout for a profile page
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Timeout for the redirect-following resolve request
    #[serde(default = "default_resolve_timeout")]
    pub resolve_timeout_secs: u64,

    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Career page prefix, with trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_interval() -> u64 {
    30 * 60
}

fn default_pacing() -> u64 {
    2000
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_resolve_timeout() -> u64 {
    10
}

fn default_max_redirects() -> usize {
    10
}

fn default_base_url() -> String {
    "https://overwatch.blizzard.com/en-us/career/".to_string()
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
            pacing_ms: default_pacing(),
            fetch_timeout_secs: default_fetch_timeout(),
            resolve_timeout_secs: default_resolve_timeout(),
            max_redirects: default_max_redirects(),
            base_url: default_base_url(),
        }
    }
}

impl ScrapeConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_secs(self.resolve_timeout_secs)
    }
}

/// Player roster file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default = "default_roster_path")]
    pub path: PathBuf,
}

fn default_roster_path() -> PathBuf {
    PathBuf::from("config/players.yaml")
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            path: default_roster_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Where the active configuration came from. Loading happens before the
/// log subscriber exists, so the binary reports this once logging is up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    #[default]
    Builtin,
    File(PathBuf),
    Missing(PathBuf),
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::Builtin => info!("Using built-in default config"),
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Missing(path) => {
                warn!("Config {} not found, using defaults", path.display())
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub scrape: ScrapeConfig,
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(skip)]
    pub source: ConfigSource,
}

impl Config {
    /// Load from `path`, then `$OWD_CONFIG`, then the default path. A missing
    /// file means defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = if path.exists() {
            Self::load_from_path(&path)?
        } else {
            Config {
                source: ConfigSource::Missing(path),
                ..Config::default()
            }
        };

        if let Ok(port) = std::env::var(PORT_ENV) {
            config.apply_port(&port)?;
        }
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.source = ConfigSource::File(path.to_path_buf());
        Ok(config)
    }

    /// Replace the port of the listen address, keeping the host.
    pub fn apply_port(&mut self, port: &str) -> Result<()> {
        let port: u16 = port
            .trim()
            .parse()
            .with_context(|| format!("invalid {} value {:?}", PORT_ENV, port))?;
        let host = self
            .server
            .listen_addr
            .rsplit_once(':')
            .map(|(host, _)| host)
            .unwrap_or("0.0.0.0");
        self.server.listen_addr = format!("{}:{}", host, port);
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.server
            .listen_addr
            .parse()
            .with_context(|| format!("invalid listen address {:?}", self.server.listen_addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.listen_addr, "0.0.0.0:9420");
        assert_eq!(config.scrape.interval(), Duration::from_secs(1800));
        assert_eq!(config.scrape.pacing(), Duration::from_secs(2));
        assert_eq!(config.scrape.max_redirects, 10);
        assert_eq!(config.roster.path, PathBuf::from("config/players.yaml"));
    }

    #[test]
    fn test_parse_toml_with_missing_fields() {
        let toml_str = r#"
[scrape]
interval_secs = 600
base_url = "http://localhost:8080/career/"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.scrape.interval_secs, 600);
        assert_eq!(config.scrape.base_url, "http://localhost:8080/career/");
        // defaults for the rest
        assert_eq!(config.scrape.fetch_timeout_secs, 30);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_apply_port_keeps_host() {
        let mut config = Config::default();
        config.server.listen_addr = "127.0.0.1:9420".to_string();
        config.apply_port("8080").unwrap();
        assert_eq!(config.listen_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert!(config.apply_port("not-a-port").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("owd.toml");
        fs::write(&path, "[roster]\npath = \"/tmp/p.yaml\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.roster.path, PathBuf::from("/tmp/p.yaml"));
        assert_eq!(config.source, ConfigSource::File(path.clone()));

        fs::write(&path, "[roster\n").unwrap();
        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_reported_as_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.source, ConfigSource::Missing(path));
        assert_eq!(config.logging.level, "info");
        assert_eq!(Config::default().source, ConfigSource::Builtin);
    }
}
