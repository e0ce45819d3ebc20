pub mod huggingface;

pub use huggingface::{HuggingFace, HuggingFaceConfig};

use async_trait::async_trait;
use thiserror::Error;

use crate::protocol::GenerationPayload;

/// Generation parameters forwarded to the inference provider.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub temperature: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 600,
            temperature: 0.7,
        }
    }
}

/// Errors from a single upstream generation call.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode upstream response: {0}")]
    Decode(String),

    #[error("upstream request timed out after {0}s")]
    Timeout(u64),
}

/// Backend trait for text-generation inference providers.
///
/// The HTTP layer talks only to this seam, so the provider and its call
/// mechanism can vary without touching the handler.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Human-readable name for this backend.
    fn name(&self) -> &str;

    /// Run one generation call and return the raw upstream payload.
    /// Implementations complete or fail; they never stream partial output.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<GenerationPayload, BackendError>;
}
