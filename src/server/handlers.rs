use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::backend::{Backend, GenerationParams};
use crate::prompt::{build_prompt, join_ingredients};
use crate::protocol::{ErrorResponse, HealthResponse, KeyResponse, RecipeResponse};

/// Shared application state, built once at startup.
pub struct AppState {
    pub backend: Arc<dyn Backend>,
    pub secret_key: Option<String>,
}

pub const INVALID_INGREDIENTS_ERROR: &str = "Missing or invalid ingredients array";
pub const UPSTREAM_ERROR: &str = "Error fetching recipe from Mistral";

/// Health check handler.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        backend: Some(state.backend.name().to_string()),
    })
}

/// Recipe generation handler — validates the ingredient list, builds the
/// prompt, runs exactly one upstream call, and normalizes the result.
pub async fn generate_recipe(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    // `ingredients` must be present and an array; element content, count,
    // and duplicates are unconstrained.
    let ingredients = match body.get("ingredients").and_then(serde_json::Value::as_array) {
        Some(list) => list,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(INVALID_INGREDIENTS_ERROR)),
            )
                .into_response();
        }
    };

    let prompt = build_prompt(&join_ingredients(ingredients));

    match state
        .backend
        .generate(&prompt, &GenerationParams::default())
        .await
    {
        Ok(payload) => Json(RecipeResponse {
            recipe: payload.into_recipe(),
        })
        .into_response(),
        Err(e) => {
            error!(backend = state.backend.name(), error = %e, "upstream generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(UPSTREAM_ERROR, e.to_string())),
            )
                .into_response()
        }
    }
}

/// Key disclosure handler — returns the configured secret, or a fixed
/// placeholder when none is configured. This route always answers 200.
pub async fn disclose_key(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(KeyResponse {
        message: "Here is your secure key (fetched from backend)".to_string(),
        key: state
            .secret_key
            .clone()
            .unwrap_or_else(|| "not found".to_string()),
    })
}
