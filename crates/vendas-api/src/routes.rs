use std::sync::Arc;

use axum::extract::State;
use axum::http::Uri;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use vendas_core::diagnostics::{EnvReport, ENV_KEYS};

use crate::config::ApiConfig;
use crate::error::AppError;

type EnvLookup = dyn Fn(&str) -> Option<String> + Send + Sync;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
    env_lookup: Arc<EnvLookup>,
}

impl AppState {
    /// State that checks the process environment on every request
    pub fn from_config(config: Arc<ApiConfig>) -> Self {
        Self {
            config,
            env_lookup: Arc::new(|name: &str| std::env::var(name).ok()),
        }
    }

    /// State that checks a fixed set of values instead of the process environment
    #[cfg(test)]
    pub fn with_env(
        config: Arc<ApiConfig>,
        values: std::collections::HashMap<String, String>,
    ) -> Self {
        Self {
            config,
            env_lookup: Arc::new(move |name: &str| values.get(name).cloned()),
        }
    }

    fn env_report(&self) -> EnvReport {
        EnvReport::from_lookup(&ENV_KEYS, |name| (self.env_lookup)(name))
    }
}

pub fn app_router(state: AppState) -> Router {
    let v1_routes = Router::new().route("/env-check", get(env_check));

    Router::new()
        .route("/healthz", get(healthz))
        .nest("/v1", v1_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: i64,
}

async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().timestamp(),
    })
}

#[derive(Debug, Serialize)]
struct EnvCheckResponse {
    ok: bool,
    present: Vec<String>,
    missing: Vec<String>,
}

async fn env_check(State(state): State<AppState>) -> Json<EnvCheckResponse> {
    let report = state.env_report();
    tracing::info!(
        endpoint = "env_check",
        present = report.present.len(),
        missing = report.missing.len(),
        "Reported configuration presence"
    );
    Json(EnvCheckResponse {
        ok: report.all_present(),
        present: report.present,
        missing: report.missing,
    })
}

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(uri.path().to_string())
}
