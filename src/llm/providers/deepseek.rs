use super::openai::{chat_completions_body, chat_completions_content};
use super::{api_key, check_status, endpoint, http_client, LlmProvider};
use crate::config::LlmConfig;
use crate::errors::Result;
use crate::llm::ChatMessage;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Provider implementation for DeepSeek's API
#[derive(Debug)]
pub struct DeepSeekProvider {
    /// API key loaded from environment
    api_key: String,
    /// Chat completions endpoint
    url: Url,
    /// HTTP client carrying the request timeout
    client: Client,
    /// Inference settings
    config: LlmConfig,
}

impl DeepSeekProvider {
    /// Creates a new DeepSeek provider instance
    ///
    /// # Arguments
    /// * `config` - Inference settings of the agent
    ///
    /// # Returns
    /// * `Result<Self>` - Provider instance or error if API key not found
    pub fn new(config: &LlmConfig) -> Result<Self> {
        Ok(DeepSeekProvider {
            api_key: api_key("DEEPSEEK_API_KEY")?,
            url: endpoint(
                config.base_url.as_deref(),
                "DEEPSEEK_BASE_URL",
                "https://api.deepseek.com/",
                "chat/completions",
            )?,
            client: http_client(config.request_timeout)?,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl LlmProvider for DeepSeekProvider {
    fn name(&self) -> &str {
        "deepseek"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    /// Calls DeepSeek's chat completions API
    ///
    /// # Arguments
    /// * `messages` - Vector of chat messages containing the conversation history
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
        let res = check_status("DeepSeek", res).await?;

        let json_resp: serde_json::Value = res.json().await?;
        chat_completions_content("DeepSeek", &json_resp)
    }
}
