mod assistant;
mod factory;
mod human_input;
mod user_proxy;

pub use assistant::*;
pub use factory::*;
pub use human_input::*;
pub use user_proxy::*;

use crate::chat::GroupMessage;
use crate::errors::Result;
use std::fmt::Debug;

/// The two kinds of participant a session can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    /// Human-in-the-loop proxy, never calls an LLM
    UserProxy,
    /// LLM-backed assistant
    Assistant,
}

impl AgentKind {
    /// Role string used in the transcript
    pub fn as_role(&self) -> &'static str {
        match self {
            AgentKind::UserProxy => "user",
            AgentKind::Assistant => "assistant",
        }
    }
}

/// What an agent does when it is selected to speak
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentReply {
    /// A message appended to the shared history
    Message(String),
    /// The agent declines to reply, which ends the conversation
    Terminate,
}

#[async_trait::async_trait]
pub trait ConversableAgent: Debug + Send + Sync {
    /// Display name, used as message sender
    fn name(&self) -> &str;

    fn kind(&self) -> AgentKind;

    fn system_message(&self) -> &str;

    /// Produces this agent's next turn given the shared history
    async fn generate_reply(&mut self, history: &[GroupMessage]) -> Result<AgentReply>;
}
