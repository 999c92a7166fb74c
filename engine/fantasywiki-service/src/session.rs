//! Player session and the authentication placeholder

use tracing::info;

use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// Outcome of an authentication check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    /// A signed-in player.
    Authenticated { user: String },
    /// No identity attached to the session.
    Unauthenticated,
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated { .. })
    }
}

/// Placeholder identity client. No identity backend is wired up yet, so
/// every status check reports [`AuthStatus::Unauthenticated`] and guarded
/// operations stay closed.
#[derive(Debug, Clone, Default)]
pub struct AuthClient;

impl AuthClient {
    pub fn new() -> Self {
        Self
    }

    /// Report the current authentication status.
    pub fn status(&self) -> AuthStatus {
        AuthStatus::Unauthenticated
    }
}

/// Per-player session state: identity plus the player's league selection.
#[derive(Debug, Clone)]
pub struct SessionState {
    auth: AuthClient,
    selected_league: String,
}

impl SessionState {
    pub fn new(config: &ServiceConfig) -> Self {
        Self { auth: AuthClient::new(), selected_league: config.default_league.clone() }
    }

    /// Identifier of the league the player is viewing.
    pub fn selected_league(&self) -> &str {
        &self.selected_league
    }

    /// Switch the session to another league. The id is stored as given;
    /// directory reads fall back to the global league when it is unknown.
    pub fn select_league(&mut self, league_id: &str) {
        info!("League selected: {}", league_id);
        self.selected_league = league_id.to_string();
    }

    pub fn auth_status(&self) -> AuthStatus {
        self.auth.status()
    }

    /// Gate for operations that need a signed-in player.
    pub fn require_auth(&self) -> Result<(), ServiceError> {
        match self.auth.status() {
            AuthStatus::Authenticated { .. } => Ok(()),
            AuthStatus::Unauthenticated => Err(ServiceError::NotAuthenticated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_session() -> SessionState {
        SessionState::new(&ServiceConfig::default())
    }

    #[test]
    fn test_session_starts_on_default_league() {
        let session = create_test_session();
        assert_eq!(session.selected_league(), "global");
    }

    #[test]
    fn test_select_league_stores_id() {
        let mut session = create_test_session();
        session.select_league("europe");
        assert_eq!(session.selected_league(), "europe");

        // Unknown ids are kept; the directory resolves them on read.
        session.select_league("atlantis");
        assert_eq!(session.selected_league(), "atlantis");
    }

    #[test]
    fn test_auth_stub_reports_unauthenticated() {
        let session = create_test_session();
        assert!(!session.auth_status().is_authenticated());
        assert_eq!(session.require_auth(), Err(ServiceError::NotAuthenticated));
    }
}
