use crate::errors::{Error, Result};
use crate::llm::ChatMessage;
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use std::time::Duration;
use url::Url;

pub mod anthropic;
pub mod deepseek;
pub mod ollama;
pub mod openai;

#[async_trait]
pub trait LlmProvider: Debug + Send + Sync {
    /// Provider name as used in `llmConfig.provider`
    fn name(&self) -> &str;

    /// Model the provider was built for
    fn model(&self) -> &str;

    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String>;
}

/// Builds the HTTP client shared by one provider instance
pub(crate) fn http_client(timeout_secs: u64) -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?)
}

/// Resolves the endpoint of a provider
///
/// The base is taken, in order, from the agent's `base_url`, the `env_var`
/// environment variable, then `default_base`.
///
/// # Arguments
/// * `base_url` - Base override from the LLM configuration
/// * `env_var` - Environment variable holding a base override
/// * `default_base` - Public endpoint base of the provider
/// * `path` - Path of the chat endpoint relative to the base
pub(crate) fn endpoint(
    base_url: Option<&str>,
    env_var: &str,
    default_base: &str,
    path: &str,
) -> Result<Url> {
    let base = match base_url {
        Some(base) => base.to_string(),
        None => std::env::var(env_var).unwrap_or_else(|_| default_base.to_string()),
    };
    let base = if base.ends_with('/') {
        base
    } else {
        format!("{}/", base)
    };
    Ok(Url::parse(&base)?.join(path)?)
}

/// Reads a required API key from the environment
pub(crate) fn api_key(env_var: &str) -> Result<String> {
    std::env::var(env_var)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| Error::Provider(format!("{} environment variable not set", env_var)))
}

/// Turns a non-success HTTP response into a provider API error
pub(crate) async fn check_status(
    provider: &str,
    res: reqwest::Response,
) -> Result<reqwest::Response> {
    if res.status().is_success() {
        return Ok(res);
    }
    let status = res.status();
    let text = res.text().await?;
    Err(Error::ProviderApi {
        provider: provider.to_string(),
        message: format!("{}: {}", status, text),
    })
}
