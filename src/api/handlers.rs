//! API Handlers
//!
//! HTTP request handlers for each resolver endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::auth::Es512Verifier;
use crate::config::Config;
use crate::error::{Result, SessionError};
use crate::models::{HealthResponse, ResolveRequest, ResolveResponse, StatsResponse};
use crate::session::SessionTokenCache;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Token resolver with its shared cache
    pub sessions: SessionTokenCache,
}

impl AppState {
    /// Creates a new AppState around an existing resolver.
    pub fn new(sessions: SessionTokenCache) -> Self {
        Self { sessions }
    }

    /// Creates a new AppState from configuration.
    ///
    /// The public key is formatted and parsed here, once, so a bad key
    /// fails startup instead of every request.
    pub fn from_config(config: &Config) -> Result<Self> {
        let condensed = config
            .public_key
            .as_deref()
            .ok_or_else(|| SessionError::Config("JWT_PUB_KEY is not set".to_string()))?;
        let verifier = Es512Verifier::from_condensed_pem(condensed)?;
        let sessions = SessionTokenCache::from_config(Arc::new(verifier), config);
        Ok(Self::new(sessions))
    }
}

/// Handler for POST /resolve
///
/// Resolves a session token to its user id.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Json(req): Json<ResolveRequest>,
) -> Result<Json<ResolveResponse>> {
    let user_id = state.sessions.get_user_id(&req.session_token).await?;
    Ok(Json(ResolveResponse::new(user_id)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.sessions.stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::test_support::TestKeys;
    use serde_json::json;

    fn state_for(keys: &TestKeys) -> AppState {
        let config = Config {
            public_key: Some(keys.condensed_pem()),
            ..Config::default()
        };
        AppState::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn test_resolve_handler() {
        let keys = TestKeys::generate();
        let state = state_for(&keys);
        let req = ResolveRequest {
            session_token: keys.sign(json!({ "sub": "user_5" })),
        };

        let response = resolve_handler(State(state.clone()), Json(req)).await.unwrap();
        assert_eq!(response.user_id, "user_5");

        let stats = stats_handler(State(state)).await;
        assert_eq!(stats.verifications, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[tokio::test]
    async fn test_resolve_handler_empty_token() {
        let keys = TestKeys::generate();
        let req = ResolveRequest {
            session_token: String::new(),
        };

        let result = resolve_handler(State(state_for(&keys)), Json(req)).await;
        assert!(matches!(result, Err(SessionError::MissingToken)));
    }

    #[test]
    fn test_from_config_requires_key() {
        let result = AppState::from_config(&Config::default());
        assert!(matches!(result, Err(SessionError::Config(_))));
    }

    #[test]
    fn test_from_config_rejects_bad_key() {
        let config = Config {
            public_key: Some("-----BEGIN PUBLIC KEY-----AAAA-----END PUBLIC KEY-----".to_string()),
            ..Config::default()
        };
        let result = AppState::from_config(&config);
        assert!(matches!(result, Err(SessionError::Verification(_))));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
