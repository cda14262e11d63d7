use super::{api_key, check_status, endpoint, http_client, LlmProvider};
use crate::config::LlmConfig;
use crate::errors::{Error, Result};
use crate::llm::ChatMessage;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use url::Url;

/// Provider implementation for OpenAI's API
#[derive(Debug)]
pub struct OpenAiProvider {
    /// OpenAI API key loaded from environment
    api_key: String,
    /// Chat completions endpoint
    url: Url,
    /// HTTP client carrying the request timeout
    client: Client,
    /// Inference settings (model, temperature, seed, token budget)
    config: LlmConfig,
}

impl OpenAiProvider {
    /// Creates a new OpenAI provider instance
    ///
    /// # Arguments
    /// * `config` - Inference settings of the agent
    ///
    /// # Returns
    /// * `Result<Self>` - Provider instance or error if API key not found
    pub fn new(config: &LlmConfig) -> Result<Self> {
        Ok(OpenAiProvider {
            api_key: api_key("OPENAI_API_KEY")?,
            url: endpoint(
                config.base_url.as_deref(),
                "OPENAI_BASE_URL",
                "https://api.openai.com/v1/",
                "chat/completions",
            )?,
            client: http_client(config.request_timeout)?,
            config: config.clone(),
        })
    }
}

/// Builds a chat-completions request body, shared with OpenAI-compatible APIs
pub(crate) fn chat_completions_body(
    config: &LlmConfig,
    messages: &[ChatMessage],
) -> serde_json::Value {
    let mut body = json!({
        "model": config.model,
        "messages": messages,
        "temperature": config.temperature,
        "stream": false
    });
    if let Some(seed) = config.seed {
        body["seed"] = json!(seed);
    }
    if let Some(max_tokens) = config.max_tokens {
        body["max_tokens"] = json!(max_tokens);
    }
    body
}

/// Extracts the first choice of a chat-completions response
pub(crate) fn chat_completions_content(
    provider: &str,
    json_resp: &serde_json::Value,
) -> Result<String> {
    match json_resp["choices"][0]["message"]["content"].as_str() {
        Some(content) => Ok(content.trim().to_string()),
        None => Err(Error::ProviderApi {
            provider: provider.to_string(),
            message: "no content in LLM response".to_string(),
        }),
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    /// Calls OpenAI's chat completions API
    ///
    /// # Arguments
    /// * `messages` - Conversation as seen by the calling agent
    ///
    /// # Returns
    /// * `Result<String>` - Generated response text or error
    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let request_body = chat_completions_body(&self.config, &messages);

        let res = self
            .client
            .post(self.url.clone())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;
        let res = check_status("OpenAI", res).await?;

        let json_resp: serde_json::Value = res.json().await?;
        chat_completions_content("OpenAI", &json_resp)
    }
}
