//! FantasyWiki Service Library
//!
//! This library wires the FantasyWiki engines together: the article catalogue,
//! pricing, contracts, lineup, chemistry, leagues, and the trade inbox. It owns
//! the embedded session seeds and exposes one [`ServiceState`] through which
//! every player-facing operation runs.

use anyhow::{Context, Result};

pub mod config;
pub mod error;
pub mod logging;
pub mod seed;
pub mod service;
pub mod session;


pub use config::ServiceConfig;
pub use error::ServiceError;
pub use logging::initialize_logging;
pub use service::{DashboardSummary, ServiceState};
pub use session::{AuthClient, AuthStatus, SessionState};

/// Crate version, surfaced in the startup log line.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load configuration from the environment
pub fn load_configuration() -> Result<ServiceConfig> {
    let config = ServiceConfig::from_env();
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Failed to load service configuration")?;
    Ok(config)
}
