//! HTTP server for owd

use crate::collector::Collector;
use crate::config::Config;
use crate::exporter::Exporter;
use crate::fetch::HttpFetcher;
use crate::resolver::{HttpRedirectFollower, Resolver};
use crate::roster::{Roster, YamlRoster};
use crate::routes;
use crate::runtime::RuntimeStore;
use anyhow::{Context, Result};
use axum::Router;
use ow_common::{MetricRegistry, ProfileParser};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Application state shared across handlers
pub struct AppState {
    pub store: Arc<RuntimeStore>,
    pub exporter: Arc<Exporter>,
    pub resolver: Arc<Resolver>,
    pub collector: Arc<Collector>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        store: Arc<RuntimeStore>,
        exporter: Arc<Exporter>,
        resolver: Arc<Resolver>,
        collector: Arc<Collector>,
    ) -> Self {
        Self {
            store,
            exporter,
            resolver,
            collector,
            start_time: Instant::now(),
        }
    }

    /// Wire the production collaborators from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = Arc::new(
            MetricRegistry::standard().context("descriptor catalog is inconsistent")?,
        );

        let roster: Arc<dyn Roster> = Arc::new(
            YamlRoster::open(&config.roster.path)
                .with_context(|| format!("opening roster {}", config.roster.path.display()))?,
        );
        let follower = Arc::new(HttpRedirectFollower::new(
            config.scrape.resolve_timeout(),
            config.scrape.max_redirects,
        )?);
        let resolver = Arc::new(Resolver::new(
            follower,
            roster,
            config.scrape.base_url.clone(),
        ));

        let fetcher = Arc::new(HttpFetcher::new(config.scrape.fetch_timeout())?);
        let store = Arc::new(RuntimeStore::new());
        let exporter = Arc::new(Exporter::new(Arc::clone(&catalog))?);
        let collector = Arc::new(Collector::new(
            Arc::clone(&resolver),
            fetcher,
            ProfileParser::new(catalog),
            Arc::clone(&store),
            config.scrape.pacing(),
        ));

        Ok(Self::new(store, exporter, resolver, collector))
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::user_routes())
        .merge(routes::parse_routes())
        .merge(routes::metrics_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serve until Ctrl-C.
pub async fn run(state: AppState, addr: SocketAddr) -> Result<()> {
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("  Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("  Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down gracefully"),
        Err(e) => {
            warn!("Cannot listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await
        }
    }
}
