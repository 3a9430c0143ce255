//! marquee - voice skill webhook server.
//!
//! Reads configuration from `MARQUEE__*` environment variables (see
//! [`marquee::config::AppConfig`]).

use std::sync::Arc;

use marquee::adapters::http::{skill_routes, SkillAppState};
use marquee::adapters::{PosterArtworkLookup, RadarrProvider, RadarrProviderConfig};
use marquee::application::{IntentRouter, MediaProviders};
use marquee::config::AppConfig;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let radarr = RadarrProvider::new(RadarrProviderConfig::from(&config.radarr))?;
    let providers = MediaProviders::new().with_provider(Arc::new(radarr));
    let router = IntentRouter::new(providers, Arc::new(PosterArtworkLookup::new()))?;

    let state = SkillAppState::new(Arc::new(router), config.skill.clone());
    let app = skill_routes(state, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, radarr = %config.radarr.base_url, "marquee listening");

    axum::serve(listener, app).await?;
    Ok(())
}
