use serde::{Deserialize, Serialize};

/// Returned as `recipe` when no known upstream shape matched.
pub const NO_RECIPE_FALLBACK: &str = "No recipe found.";

/// Error response returned by the API.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Successful recipe generation response.
#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub recipe: String,
}

/// Response of the key disclosure route.
#[derive(Debug, Serialize)]
pub struct KeyResponse {
    pub message: String,
    pub key: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
}

/// Upstream generation payload.
///
/// Hosted inference providers answer in more than one shape depending on the
/// task and call style: a plain object carrying `generated_text`, an array of
/// such objects, or something else entirely. The untagged enum makes the
/// known shapes explicit; `Other` absorbs everything that matches neither, so
/// decoding a successful response never fails.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GenerationPayload {
    Text { generated_text: String },
    Sequence(Vec<serde_json::Value>),
    Other(serde_json::Value),
}

impl GenerationPayload {
    /// Reduce the payload to recipe text, in priority order: top-level
    /// `generated_text`, then the first array element's `generated_text`,
    /// then the fixed fallback string.
    pub fn into_recipe(self) -> String {
        match self {
            GenerationPayload::Text { generated_text } => generated_text,
            GenerationPayload::Sequence(items) => items
                .first()
                .and_then(|item| item.get("generated_text"))
                .and_then(|text| text.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| NO_RECIPE_FALLBACK.to_string()),
            GenerationPayload::Other(_) => NO_RECIPE_FALLBACK.to_string(),
        }
    }
}
