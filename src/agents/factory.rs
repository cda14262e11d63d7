use super::{AssistantAgent, ConversableAgent, HumanInput, UserProxyAgent};
use crate::config::{AgentConfig, SessionConfig};
use crate::errors::{Error, Result};
use crate::llm::{LlmClient, ProviderRegistry};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Builds agents from their configuration records
#[derive(Debug, Clone)]
pub struct AgentFactory {
    /// Provider constructors for assistant agents
    registry: ProviderRegistry,
    /// Where user proxies get human replies from
    human_input: Arc<dyn HumanInput>,
}

impl AgentFactory {
    pub fn new(registry: ProviderRegistry, human_input: Arc<dyn HumanInput>) -> Self {
        AgentFactory {
            registry,
            human_input,
        }
    }

    /// Creates one agent: a user proxy for role "user", an assistant otherwise
    ///
    /// # Arguments
    /// * `config` - Configuration of the agent
    ///
    /// # Returns
    /// * `Result<Box<dyn ConversableAgent>>` - The agent, or an error if its LLM
    ///   provider cannot be built
    pub fn create_agent(&self, config: &AgentConfig) -> Result<Box<dyn ConversableAgent>> {
        if config.is_user() {
            info!("Creating user proxy '{}' ({})", config.name, config.id);
            let agent = UserProxyAgent::new(
                &config.name,
                &config.system_message,
                config.human_input_mode,
                self.human_input.clone(),
            )
            .with_max_consecutive_auto_reply(config.max_consecutive_auto_reply)
            .with_default_auto_reply(&config.default_auto_reply);
            return Ok(Box::new(agent));
        }

        let llm_config = config.effective_llm_config();
        let llm_client = LlmClient::new(&self.registry, &llm_config)?;
        info!(
            "Creating assistant '{}' ({}, role {}) on {}/{}",
            config.name,
            config.id,
            config.role,
            llm_client.provider_name(),
            llm_client.model()
        );
        Ok(Box::new(AssistantAgent::new(
            &config.name,
            &config.system_message,
            llm_client,
        )))
    }

    /// Creates the agents of a session, in configuration order
    ///
    /// Names must be unique: they identify the sender of every message.
    pub fn create_agents(&self, session: &SessionConfig) -> Result<Vec<Box<dyn ConversableAgent>>> {
        if session.agents.is_empty() {
            return Err(Error::EmptySession);
        }
        let mut seen = HashSet::new();
        if let Some(dup) = session.agents.iter().find(|a| !seen.insert(a.name.as_str())) {
            return Err(Error::DuplicateAgentName(dup.name.clone()));
        }
        let agents = session
            .agents
            .iter()
            .map(|config| self.create_agent(config))
            .collect::<Result<Vec<_>>>()?;
        for agent in &agents {
            debug!("{} system message: {:?}", agent.name(), agent.system_message());
        }
        Ok(agents)
    }
}
