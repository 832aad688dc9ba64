// HTTP surface of the backend: liveness probe and graph validation

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderValue,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};

use crate::{
    app_state::AppState,
    config::CorsConfig,
    error::{AppError, AppResult},
    middleware::request_context_middleware,
    models::{GraphPayload, ValidationResult},
    validator::GraphValidator,
};

pub const HEALTH_STATUS: &str = "System Architect Backend is Online";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: HEALTH_STATUS.to_string(),
    })
}

pub async fn validate_graph(
    State(state): State<AppState>,
    payload: Result<Json<GraphPayload>, JsonRejection>,
) -> AppResult<Json<ValidationResult>> {
    let Json(graph) = payload.map_err(|rejection| {
        debug!("Rejected validation payload: {}", rejection.body_text());
        AppError::from(rejection)
    })?;

    debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "Validating graph"
    );

    let issue = state.validator.find_issue(&graph);
    match issue {
        Some(issue) => info!(issue = %issue, "Graph failed structural validation"),
        None => info!("Graph passed structural validation"),
    }

    let result = GraphValidator::verdict_for(issue);
    Ok(Json(result))
}

/// Builds the CORS policy: only the configured origins, any method and
/// header, credentials allowed.
pub fn cors_layer(config: &CorsConfig) -> AppResult<CorsLayer> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| {
                AppError::Configuration(format!("Invalid allowed origin {:?}: {}", origin, e))
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    // Wildcards are not allowed alongside credentials, so mirror instead
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

pub fn create_router(state: AppState) -> AppResult<Router> {
    let cors = cors_layer(&state.config.cors)?;

    Ok(Router::new()
        .route("/health", get(health_check))
        .route("/validate", post(validate_graph))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_context_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state))
}
