//! BattleTag resolution.
//!
//! The career site redirects `<base>/<Name>-<1234>` to a profile-specific
//! address. The resolver follows that redirect chain and caches the final
//! address in the roster so later sweeps skip the round trip.

use crate::fetch::browser_headers;
use crate::roster::{PlayerEntry, Roster, RosterError};
use async_trait::async_trait;
use ow_common::ErrorKind;
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use url::Url;

/// Path segment every accepted profile address carries.
pub const CAREER_PATH: &str = "/career/";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("profile for {0} not found")]
    NotFound(String),

    #[error("too many redirects resolving {0}")]
    TooManyRedirects(String),

    #[error("resolving {0} timed out")]
    Timeout(String),

    #[error("transport error for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("{0} did not resolve to a profile address")]
    NotResolved(String),

    #[error("could not store resolution for {handle}: {message}")]
    Roster { handle: String, message: String },
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::NotFound(_) | ResolveError::NotResolved(_) => ErrorKind::NotFound,
            ResolveError::TooManyRedirects(_)
            | ResolveError::Timeout(_)
            | ResolveError::Transport { .. }
            | ResolveError::Status { .. }
            | ResolveError::Roster { .. } => ErrorKind::Transient,
        }
    }
}

/// Handle to the unresolved career address: `Name#1234` -> `<base>Name-1234`.
pub fn candidate_url(base_url: &str, handle: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!("{}/{}", base, handle.trim().replacen('#', "-", 1))
}

/// A final address is accepted when it still points into the career pages
/// and differs from the candidate (the candidate itself is a search page).
pub fn accept_resolution(candidate: &str, final_url: &str) -> bool {
    let Ok(parsed) = Url::parse(final_url) else {
        return false;
    };
    matches!(parsed.scheme(), "http" | "https")
        && parsed.path().contains(CAREER_PATH)
        && final_url != candidate
}

#[async_trait]
pub trait RedirectFollower: Send + Sync {
    /// Request `url`, following redirects, and return the final address of a
    /// 200 response.
    async fn follow(&self, url: &str) -> Result<String, ResolveError>;
}

pub struct HttpRedirectFollower {
    http: reqwest::Client,
}

impl HttpRedirectFollower {
    pub fn new(timeout: Duration, max_redirects: usize) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(max_redirects))
            .default_headers(browser_headers())
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl RedirectFollower for HttpRedirectFollower {
    async fn follow(&self, url: &str) -> Result<String, ResolveError> {
        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_redirect() {
                ResolveError::TooManyRedirects(url.to_string())
            } else if e.is_timeout() {
                ResolveError::Timeout(url.to_string())
            } else {
                ResolveError::Transport {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        match response.status() {
            StatusCode::OK => {
                let final_url = response.url().to_string();
                debug!("Redirect chain for {} ended at {}", url, final_url);
                Ok(final_url)
            }
            StatusCode::NOT_FOUND => Err(ResolveError::NotFound(url.to_string())),
            status => Err(ResolveError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }),
        }
    }
}

/// Redirect table for tests: candidate URL to final URL or error. Unknown
/// URLs answer `NotFound`.
#[derive(Default)]
pub struct FakeRedirectFollower {
    routes: Mutex<HashMap<String, Result<String, ResolveError>>>,
}

impl FakeRedirectFollower {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(self, from: &str, to: &str) -> Self {
        if let Ok(mut routes) = self.routes.lock() {
            routes.insert(from.to_string(), Ok(to.to_string()));
        }
        self
    }

    pub fn with_error(self, from: &str, err: ResolveError) -> Self {
        if let Ok(mut routes) = self.routes.lock() {
            routes.insert(from.to_string(), Err(err));
        }
        self
    }
}

#[async_trait]
impl RedirectFollower for FakeRedirectFollower {
    async fn follow(&self, url: &str) -> Result<String, ResolveError> {
        self.routes
            .lock()
            .ok()
            .and_then(|routes| routes.get(url).cloned())
            .unwrap_or_else(|| Err(ResolveError::NotFound(url.to_string())))
    }
}

/// Outcome of a roster-wide resolution pass.
#[derive(Debug, Default, Serialize)]
pub struct ResolveSummary {
    pub resolved: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<(String, String)>,
}

pub struct Resolver {
    follower: Arc<dyn RedirectFollower>,
    roster: Arc<dyn Roster>,
    base_url: String,
}

impl Resolver {
    pub fn new(
        follower: Arc<dyn RedirectFollower>,
        roster: Arc<dyn Roster>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            follower,
            roster,
            base_url: base_url.into(),
        }
    }

    pub fn roster(&self) -> &Arc<dyn Roster> {
        &self.roster
    }

    /// Resolve without consulting or updating the roster.
    pub async fn resolve(&self, handle: &str) -> Result<String, ResolveError> {
        let candidate = candidate_url(&self.base_url, handle);
        debug!(battletag = handle, url = %candidate, "resolving");

        let final_url = self.follower.follow(&candidate).await.map_err(|e| match e {
            ResolveError::NotFound(_) => ResolveError::NotFound(handle.to_string()),
            other => other,
        })?;

        if accept_resolution(&candidate, &final_url) {
            info!(battletag = handle, url = %final_url, "resolved battletag");
            Ok(final_url)
        } else {
            Err(ResolveError::NotResolved(handle.to_string()))
        }
    }

    /// Roster address when known, otherwise resolve and store. A failed
    /// store is logged; the resolution is still returned.
    pub async fn get_or_resolve(&self, handle: &str) -> Result<String, ResolveError> {
        if let Some(url) = self
            .roster
            .find_by_handle(handle)
            .await
            .filter(PlayerEntry::is_resolved)
            .and_then(|p| p.resolved_url)
        {
            debug!(battletag = handle, url = %url, "using cached address");
            return Ok(url);
        }

        let url = self.resolve(handle).await?;
        if let Err(e) = self
            .roster
            .upsert(PlayerEntry::resolved(handle, url.clone()))
            .await
        {
            warn!(battletag = handle, error = %e, "failed to store resolved address");
        }
        Ok(url)
    }

    /// Address of a player the roster still tracks, for sweeps. `None` once
    /// the player has been removed. An unresolved entry is resolved and
    /// written back, but never re-added if it disappeared meanwhile.
    pub async fn tracked_address(&self, handle: &str) -> Result<Option<String>, ResolveError> {
        let Some(entry) = self.roster.find_by_handle(handle).await else {
            return Ok(None);
        };
        if let Some(url) = entry.resolved_url.filter(|u| !u.is_empty()) {
            return Ok(Some(url));
        }

        let url = self.resolve(handle).await?;
        match self.write_back(handle, &url).await {
            Ok(true) => Ok(Some(url)),
            Ok(false) => Ok(None),
            Err(e) => {
                warn!(battletag = handle, error = %e, "failed to store resolved address");
                Ok(Some(url))
            }
        }
    }

    /// Store a resolution for a tracked player. `false` when the player is
    /// no longer in the roster.
    async fn write_back(&self, handle: &str, url: &str) -> Result<bool, RosterError> {
        match self.roster.update(PlayerEntry::resolved(handle, url)).await {
            Ok(()) => Ok(true),
            Err(RosterError::NotFound(_)) => {
                debug!(battletag = handle, "player removed while resolving");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Resolve again and store, regardless of any cached address.
    pub async fn refresh(&self, handle: &str) -> Result<PlayerEntry, ResolveError> {
        let url = self.resolve(handle).await?;
        let entry = PlayerEntry::resolved(handle, url);
        self.roster
            .upsert(entry.clone())
            .await
            .map_err(|e| ResolveError::Roster {
                handle: handle.to_string(),
                message: e.to_string(),
            })?;
        Ok(entry)
    }

    /// Resolve every roster entry lacking an address, or every entry when
    /// `force` is set. Failures are logged and do not stop the pass; entries
    /// removed during the pass are reported as skipped.
    pub async fn resolve_all(&self, force: bool) -> ResolveSummary {
        let players = self.roster.list_all().await;
        let mut summary = ResolveSummary::default();
        if players.is_empty() {
            info!("No players in roster");
            return summary;
        }

        info!(count = players.len(), force, "resolving roster");
        for player in players {
            if !force && player.is_resolved() {
                debug!(battletag = %player.battletag, "already resolved");
                summary.skipped.push(player.battletag);
                continue;
            }

            let stored = match self.resolve(&player.battletag).await {
                Ok(url) => self
                    .write_back(&player.battletag, &url)
                    .await
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            match stored {
                Ok(true) => summary.resolved.push(player.battletag),
                Ok(false) => summary.skipped.push(player.battletag),
                Err(e) => {
                    error!(battletag = %player.battletag, error = %e, "failed to resolve player");
                    summary.failed.push((player.battletag, e));
                }
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::YamlRoster;

    const BASE: &str = "https://overwatch.blizzard.com/en-us/career/";

    #[test]
    fn test_candidate_url() {
        assert_eq!(
            candidate_url(BASE, "LexFrei#21715"),
            "https://overwatch.blizzard.com/en-us/career/LexFrei-21715"
        );
        assert_eq!(
            candidate_url("http://localhost/career", "A#1#2"),
            "http://localhost/career/A-1#2"
        );
    }

    #[test]
    fn test_accept_resolution() {
        let candidate = candidate_url(BASE, "A#1");
        assert!(accept_resolution(
            &candidate,
            "https://overwatch.blizzard.com/en-us/career/de5bb4aca17492e0bba120a1d1%7Ca92a11ef8d304356fccfff8df12e1dc6/"
        ));
        assert!(!accept_resolution(&candidate, &candidate));
        assert!(!accept_resolution(&candidate, "https://overwatch.blizzard.com/en-us/search/"));
        assert!(!accept_resolution(&candidate, ""));
        assert!(!accept_resolution(&candidate, "not a url /career/"));
    }

    /// Removes the handle from the roster while "following", as a concurrent
    /// delete would.
    struct RemovingFollower {
        roster: Arc<dyn Roster>,
        handle: String,
        target: String,
    }

    #[async_trait]
    impl RedirectFollower for RemovingFollower {
        async fn follow(&self, _url: &str) -> Result<String, ResolveError> {
            let _ = self.roster.remove(&self.handle).await;
            Ok(self.target.clone())
        }
    }

    async fn serve_redirects() -> String {
        use axum::{http::StatusCode as Http, response::Redirect, routing::get, Router};

        let app = Router::new()
            .route("/career/Loop-1", get(|| async { Redirect::temporary("/career/Loop-1") }))
            .route("/career/Hop-1", get(|| async { Redirect::temporary("/career/hop/") }))
            .route("/career/hop/", get(|| async { "profile" }))
            .route("/career/Missing-1", get(|| async { Http::NOT_FOUND }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/career/", addr)
    }

    #[tokio::test]
    async fn test_http_follower_distinguishes_redirect_loops_from_missing() {
        let base = serve_redirects().await;
        let follower = HttpRedirectFollower::new(Duration::from_secs(5), 2).unwrap();

        let looped = follower
            .follow(&candidate_url(&base, "Loop#1"))
            .await
            .unwrap_err();
        assert!(matches!(looped, ResolveError::TooManyRedirects(_)));
        assert_eq!(looped.kind(), ErrorKind::Transient);

        let missing = follower
            .follow(&candidate_url(&base, "Missing#1"))
            .await
            .unwrap_err();
        assert!(matches!(missing, ResolveError::NotFound(_)));
        assert_eq!(missing.kind(), ErrorKind::NotFound);

        let found = follower.follow(&candidate_url(&base, "Hop#1")).await.unwrap();
        assert_eq!(found, format!("{}hop/", base));
    }

    fn resolver(follower: FakeRedirectFollower, dir: &tempfile::TempDir) -> Resolver {
        let roster = YamlRoster::open(dir.path().join("players.yaml")).unwrap();
        Resolver::new(Arc::new(follower), Arc::new(roster), BASE)
    }

    #[tokio::test]
    async fn test_error_kinds_are_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let follower = FakeRedirectFollower::new()
            .with_error(
                &candidate_url(BASE, "Loop#1"),
                ResolveError::TooManyRedirects("x".into()),
            )
            .with_route(&candidate_url(BASE, "Search#1"), &candidate_url(BASE, "Search#1"));
        let r = resolver(follower, &dir);

        assert_eq!(
            r.resolve("Missing#1").await,
            Err(ResolveError::NotFound("Missing#1".into()))
        );
        assert!(matches!(
            r.resolve("Loop#1").await,
            Err(ResolveError::TooManyRedirects(_))
        ));
        assert_eq!(
            r.resolve("Search#1").await,
            Err(ResolveError::NotResolved("Search#1".into()))
        );
    }

    #[tokio::test]
    async fn test_get_or_resolve_caches_in_roster() {
        let dir = tempfile::tempdir().unwrap();
        let target = format!("{}abc%7Cdef/", BASE);
        let follower =
            FakeRedirectFollower::new().with_route(&candidate_url(BASE, "Foo#42"), &target);
        let r = resolver(follower, &dir);

        assert_eq!(r.get_or_resolve("Foo#42").await.unwrap(), target);
        let entry = r.roster().find_by_handle("Foo#42").await.unwrap();
        assert_eq!(entry.resolved_url.as_deref(), Some(target.as_str()));
        assert!(entry.last_resolved.is_some());
    }

    #[tokio::test]
    async fn test_tracked_address_never_re_adds_removed_players() {
        let dir = tempfile::tempdir().unwrap();
        let follower = FakeRedirectFollower::new()
            .with_route(&candidate_url(BASE, "New#1"), &format!("{}new/", BASE));
        let r = resolver(follower, &dir);

        // untracked: no resolution, no roster write
        assert_eq!(r.tracked_address("New#1").await.unwrap(), None);
        assert!(r.roster().find_by_handle("New#1").await.is_none());

        r.roster().add("New#1").await.unwrap();
        assert_eq!(
            r.tracked_address("New#1").await.unwrap(),
            Some(format!("{}new/", BASE))
        );
        assert!(r.roster().find_by_handle("New#1").await.unwrap().is_resolved());

        // removed while its resolution was in flight
        let roster: Arc<dyn Roster> =
            Arc::new(YamlRoster::open(dir.path().join("other.yaml")).unwrap());
        roster.add("Leaving#2").await.unwrap();
        let follower = RemovingFollower {
            roster: roster.clone(),
            handle: "Leaving#2".into(),
            target: format!("{}leaving/", BASE),
        };
        let r = Resolver::new(Arc::new(follower), roster.clone(), BASE);
        assert_eq!(r.tracked_address("Leaving#2").await.unwrap(), None);
        assert!(roster.find_by_handle("Leaving#2").await.is_none());

        roster.add("Leaving#2").await.unwrap();
        let summary = r.resolve_all(false).await;
        assert_eq!(summary.skipped, vec!["Leaving#2"]);
        assert!(roster.list_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_all_skips_resolved_unless_forced() {
        let dir = tempfile::tempdir().unwrap();
        let follower = FakeRedirectFollower::new()
            .with_route(&candidate_url(BASE, "A#1"), &format!("{}a/", BASE))
            .with_route(&candidate_url(BASE, "B#2"), &format!("{}b/", BASE));
        let r = resolver(follower, &dir);

        r.roster().add("A#1").await.unwrap();
        r.roster().add("B#2").await.unwrap();
        r.roster().add("Gone#3").await.unwrap();

        let first = r.resolve_all(false).await;
        assert_eq!(first.resolved, vec!["A#1", "B#2"]);
        assert_eq!(first.failed.len(), 1);
        assert_eq!(first.failed[0].0, "Gone#3");

        let second = r.resolve_all(false).await;
        assert_eq!(second.skipped, vec!["A#1", "B#2"]);
        assert!(second.resolved.is_empty());

        let forced = r.resolve_all(true).await;
        assert_eq!(forced.resolved.len(), 2);
        assert!(forced.skipped.is_empty());
    }
}
