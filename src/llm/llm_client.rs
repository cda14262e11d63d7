use crate::config::LlmConfig;
use crate::errors::Result;
use crate::llm::providers::LlmProvider;
use crate::llm::{ChatMessage, ProviderRegistry};
use tracing::debug;

/// Generic LLM client that delegates work to a concrete provider.
#[derive(Debug)]
pub struct LlmClient {
    provider: Box<dyn LlmProvider>,
}

impl LlmClient {
    /// Creates a new LLM client for the given inference settings.
    ///
    /// # Arguments
    /// * `registry` - Provider constructors available to the bridge
    /// * `config` - Inference settings of the agent
    ///
    /// # Returns
    /// * `Result<LlmClient>` - New LLM client instance or error
    pub fn new(registry: &ProviderRegistry, config: &LlmConfig) -> Result<Self> {
        let provider = registry.build(config)?;
        debug!(
            "LLM client ready: provider={} model={}",
            provider.name(),
            provider.model()
        );
        Ok(LlmClient { provider })
    }

    /// Name of the provider behind the client
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Model used by the client
    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Calls the LLM with the given conversation and returns the raw response.
    pub async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String> {
        debug!("messages: {:?}", messages);
        let response = self.provider.call_llm_api(messages).await?;
        debug!("LLM response: {}", response);
        Ok(response)
    }
}
