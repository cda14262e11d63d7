use crate::config::LlmConfig;
use crate::constants::DEFAULT_PROVIDER_ENV;
use crate::errors::{Error, Result};
use crate::llm::providers::{
    anthropic::AnthropicProvider, deepseek::DeepSeekProvider, ollama::OllamaProvider,
    openai::OpenAiProvider, LlmProvider,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Constructor of a provider from an agent's inference settings
pub type ProviderFactory =
    Arc<dyn Fn(&LlmConfig) -> Result<Box<dyn LlmProvider>> + Send + Sync>;

/// Named provider constructors, resolved per agent
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    factories: HashMap<String, ProviderFactory>,
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.factories.keys().collect();
        names.sort();
        f.debug_struct("ProviderRegistry")
            .field("providers", &names)
            .finish()
    }
}

impl ProviderRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the HTTP providers compiled into the bridge
    pub fn with_default_providers() -> Self {
        let mut registry = Self::new();
        registry.register("openai", |config| Ok(Box::new(OpenAiProvider::new(config)?)));
        registry.register("anthropic", |config| {
            Ok(Box::new(AnthropicProvider::new(config)?))
        });
        registry.register("ollama", |config| Ok(Box::new(OllamaProvider::new(config)?)));
        registry.register("deepseek", |config| {
            Ok(Box::new(DeepSeekProvider::new(config)?))
        });
        registry
    }

    /// Registers (or replaces) a provider constructor under `name`
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn(&LlmConfig) -> Result<Box<dyn LlmProvider>> + Send + Sync + 'static,
    {
        self.factories.insert(name.to_string(), Arc::new(factory));
    }

    /// Name of the provider that serves `config`
    ///
    /// An explicit `provider` wins; otherwise the provider is inferred from the
    /// model name, falling back to `AGENT_BRIDGE_DEFAULT_PROVIDER` or "openai".
    pub fn provider_name(&self, config: &LlmConfig) -> String {
        if let Some(provider) = &config.provider {
            return provider.to_lowercase();
        }
        infer_provider(&config.model)
            .map(str::to_string)
            .or_else(|| std::env::var(DEFAULT_PROVIDER_ENV).ok())
            .unwrap_or_else(|| "openai".to_string())
    }

    /// Builds the provider serving `config`
    pub fn build(&self, config: &LlmConfig) -> Result<Box<dyn LlmProvider>> {
        let name = self.provider_name(config);
        match self.factories.get(&name) {
            Some(factory) => factory(config),
            None => Err(Error::Provider(format!("Unknown provider '{}'", name))),
        }
    }
}

/// Guesses the provider from well-known model name prefixes
pub fn infer_provider(model: &str) -> Option<&'static str> {
    let model = model.to_lowercase();
    let starts = |prefixes: &[&str]| prefixes.iter().any(|p| model.starts_with(p));

    if starts(&["gpt-", "gpt4", "o1", "o3", "o4", "chatgpt"]) {
        Some("openai")
    } else if starts(&["claude"]) {
        Some("anthropic")
    } else if starts(&["deepseek"]) {
        Some("deepseek")
    } else if starts(&["llama", "mistral", "mixtral", "qwen", "gemma", "phi"]) {
        Some("ollama")
    } else {
        None
    }
}
