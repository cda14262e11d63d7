use super::{check_status, endpoint, http_client, LlmProvider};
use crate::config::LlmConfig;
use crate::errors::{Error, Result};
use crate::llm::ChatMessage;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use url::Url;

/// Provider implementation for Ollama's local API
#[derive(Debug)]
pub struct OllamaProvider {
    /// Chat endpoint of the local server
    url: Url,
    /// HTTP client carrying the request timeout
    client: Client,
    /// Inference settings
    config: LlmConfig,
}

impl OllamaProvider {
    /// Creates a new Ollama provider instance
    ///
    /// # Arguments
    /// * `config` - Inference settings of the agent
    ///
    /// # Returns
    /// * `Result<Self>` - Provider instance
    pub fn new(config: &LlmConfig) -> Result<Self> {
        Ok(OllamaProvider {
            url: endpoint(
                config.base_url.as_deref(),
                "OLLAMA_HOST",
                "http://localhost:11434/",
                "api/chat",
            )?,
            client: http_client(config.request_timeout)?,
            config: config.clone(),
        })
    }

    fn request_body(&self, messages: &[ChatMessage]) -> serde_json::Value {
        let messages: Vec<ChatMessage> = messages.iter().map(ChatMessage::unnamed).collect();
        let mut options = json!({ "temperature": self.config.temperature });
        if let Some(seed) = self.config.seed {
            options["seed"] = json!(seed);
        }
        if let Some(max_tokens) = self.config.max_tokens {
            options["num_predict"] = json!(max_tokens);
        }
        json!({
            "model": self.config.model,
            "stream": false,
            "messages": messages,
            "options": options
        })
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    /// Calls Ollama's chat API
    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let request_body = self.request_body(&messages);

        let res = self
            .client
            .post(self.url.clone())
            .json(&request_body)
            .send()
            .await?;
        let res = check_status("Ollama", res).await?;

        let json_resp: serde_json::Value = res.json().await?;
        if let Some(content) = json_resp["message"]["content"].as_str() {
            Ok(content.trim().to_string())
        } else {
            Err(Error::ProviderApi {
                provider: "Ollama".to_string(),
                message: "no content in LLM response".to_string(),
            })
        }
    }
}
