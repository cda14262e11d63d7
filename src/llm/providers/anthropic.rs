use super::{api_key, check_status, endpoint, http_client, LlmProvider};
use crate::config::LlmConfig;
use crate::constants::DEFAULT_MAX_TOKENS;
use crate::errors::{Error, Result};
use crate::llm::ChatMessage;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;
use url::Url;

/// Placeholder turn used when a conversation would otherwise open with the model
const CONVERSATION_START: &str = "(conversation start)";

/// Provider implementation for Anthropic's API
#[derive(Debug)]
pub struct AnthropicProvider {
    /// Anthropic API key loaded from environment
    api_key: String,
    /// Messages endpoint
    url: Url,
    /// HTTP client carrying the request timeout
    client: Client,
    /// Inference settings
    config: LlmConfig,
}

impl AnthropicProvider {
    /// Creates a new Anthropic provider instance
    ///
    /// # Arguments
    /// * `config` - Inference settings of the agent
    ///
    /// # Returns
    /// * `Result<Self>` - Provider instance or error if API key not found
    pub fn new(config: &LlmConfig) -> Result<Self> {
        Ok(AnthropicProvider {
            api_key: api_key("ANTHROPIC_API_KEY")?,
            url: endpoint(
                config.base_url.as_deref(),
                "ANTHROPIC_BASE_URL",
                "https://api.anthropic.com/v1/",
                "messages",
            )?,
            client: http_client(config.request_timeout)?,
            config: config.clone(),
        })
    }
}

/// Splits system messages out and folds the rest into alternating turns.
///
/// The messages API takes the system prompt as a separate field, rejects
/// `name`, and wants the first turn to come from the user.
pub(crate) fn split_system_and_turns(messages: Vec<ChatMessage>) -> (String, Vec<ChatMessage>) {
    let (system_messages, turns): (Vec<_>, Vec<_>) =
        messages.into_iter().partition(|msg| msg.role == "system");
    let system_content = system_messages
        .into_iter()
        .map(|m| m.content)
        .collect::<Vec<_>>()
        .join("\n");

    let mut merged: Vec<ChatMessage> = Vec::new();
    for msg in turns {
        match merged.last_mut() {
            Some(last) if last.role == msg.role => {
                last.content.push_str("\n\n");
                last.content.push_str(&msg.content);
            }
            _ => merged.push(msg.unnamed()),
        }
    }
    if merged.first().map_or(true, |m| m.role != "user") {
        merged.insert(0, ChatMessage::new("user", CONVERSATION_START));
    }

    (system_content, merged)
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    /// Calls Anthropic's messages API
    ///
    /// # Arguments
    /// * `messages` - Conversation as seen by the calling agent
    ///
    /// # Returns
    /// * `Result<String>` - Generated response text or error
    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let (system_content, messages) = split_system_and_turns(messages);

        let request_body = json!({
            "model": self.config.model,
            "system": system_content,
            "max_tokens": self.config.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            "temperature": self.config.temperature,
            "messages": messages
        });

        let res = self
            .client
            .post(self.url.clone())
            .header("x-api-key", self.api_key.to_string())
            .header("anthropic-version", "2023-06-01")
            .json(&request_body)
            .send()
            .await?;
        let res = check_status("Anthropic", res).await?;

        let json_resp: serde_json::Value = res.json().await?;
        if let Some(content) = json_resp["content"][0]["text"].as_str() {
            debug!("Anthropic response: {}", content);
            Ok(content.trim().to_string())
        } else {
            Err(Error::ProviderApi {
                provider: "Anthropic".to_string(),
                message: "no content in LLM response".to_string(),
            })
        }
    }
}
