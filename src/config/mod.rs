mod parser;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_ROUNDS, DEFAULT_MODEL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SEED,
    DEFAULT_TEMPERATURE, DEFAULT_TERMINATION_KEYWORD, USER_ROLE,
};

pub use parser::parse_session_config;

/// Description of one conversation: its participants and its limits
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Session identifier, echoed back as `sessionId`
    pub id: String,
    /// Participants, in speaking order
    pub agents: Vec<AgentConfig>,
    /// Maximum number of messages in the transcript, opening message included
    #[serde(default = "default_max_rounds")]
    pub max_rounds: usize,
    /// A message whose trimmed content ends with this keyword ends the chat
    #[serde(default = "default_termination_keyword")]
    pub termination_keyword: String,
}

/// Configuration of a single participant
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    /// Agent identifier
    pub id: String,
    /// "user" for the human proxy, anything else is an assistant
    pub role: String,
    /// Display name, used as message sender
    pub name: String,
    /// System prompt
    pub system_message: String,
    /// Inference settings, `LlmConfig::default()` when absent
    #[serde(default)]
    pub llm_config: Option<LlmConfig>,
    /// When the user proxy asks a human for input
    #[serde(default)]
    pub human_input_mode: HumanInputMode,
    /// Number of automatic replies the user proxy sends in a row before
    /// asking a human (or ending the chat)
    #[serde(default)]
    pub max_consecutive_auto_reply: Option<u32>,
    /// Reply the user proxy sends when no human input is used
    #[serde(default)]
    pub default_auto_reply: String,
}

impl AgentConfig {
    /// Whether this agent is the human-in-the-loop proxy
    pub fn is_user(&self) -> bool {
        self.role == USER_ROLE
    }

    /// Effective inference settings of this agent
    pub fn effective_llm_config(&self) -> LlmConfig {
        self.llm_config.clone().unwrap_or_default()
    }
}

/// Human-input policy of the user proxy
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HumanInputMode {
    /// Ask on every turn
    Always,
    /// Ask only once automatic replies are exhausted
    #[default]
    Terminate,
    /// Never ask
    Never,
}

/// Model and inference settings of an assistant agent
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LlmConfig {
    /// Model identifier (e.g. "gpt-4", "claude-3-5-sonnet-latest")
    pub model: String,
    /// Sampling temperature
    pub temperature: f64,
    /// HTTP timeout in seconds
    #[serde(alias = "requestTimeout", alias = "timeout")]
    pub request_timeout: u64,
    /// Sampling seed, for providers that support one
    pub seed: Option<u64>,
    /// Explicit provider name; inferred from the model when absent
    pub provider: Option<String>,
    /// Completion token budget
    #[serde(alias = "maxTokens")]
    pub max_tokens: Option<u32>,
    /// Endpoint base override
    #[serde(alias = "baseUrl")]
    pub base_url: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        LlmConfig {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
            seed: Some(DEFAULT_SEED),
            provider: None,
            max_tokens: None,
            base_url: None,
        }
    }
}

fn default_max_rounds() -> usize {
    DEFAULT_MAX_ROUNDS
}

fn default_termination_keyword() -> String {
    DEFAULT_TERMINATION_KEYWORD.to_string()
}
