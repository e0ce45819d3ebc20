use clap::Parser;

/// Recipe proxy — forwards ingredient lists to a hosted inference API.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Config {
    /// Listen port
    #[arg(long, default_value_t = 5000, env = "PORT")]
    pub port: u16,

    /// Log format: "text" or "json"
    #[arg(long, default_value = "text", env = "LOG_FORMAT")]
    pub log_format: String,

    /// Frontend origin allowed to call this API cross-site (unset allows any origin)
    #[arg(long, env = "CLIENT_URL")]
    pub client_url: Option<String>,

    /// Hugging Face Inference API access token
    #[arg(long, env = "HF_ACCESS_TOKEN")]
    pub hf_access_token: Option<String>,

    /// Hugging Face Inference API base URL
    #[arg(
        long,
        default_value = "https://api-inference.huggingface.co",
        env = "HF_BASE_URL"
    )]
    pub hf_base_url: String,

    /// Model id sent to the inference API
    #[arg(
        long,
        default_value = "mistralai/Mistral-7B-Instruct-v0.2",
        env = "HF_MODEL"
    )]
    pub model: String,

    /// Deadline in seconds for a single upstream generation call
    #[arg(long, default_value_t = 60, env = "UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: u64,

    /// Value disclosed by GET /api/key
    #[arg(long, env = "SECRET_KEY")]
    pub secret_key: Option<String>,
}
