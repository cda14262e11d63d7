use super::{AgentKind, AgentReply, ConversableAgent, HumanInput};
use crate::chat::GroupMessage;
use crate::config::HumanInputMode;
use crate::constants::HUMAN_EXIT_COMMAND;
use crate::errors::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Human-in-the-loop proxy.
///
/// It never calls an LLM. Depending on its `HumanInputMode` it either relays
/// what a human types or sends its configured automatic reply.
#[derive(Debug)]
pub struct UserProxyAgent {
    pub name: String,
    pub system_message: String,
    pub human_input_mode: HumanInputMode,
    /// Automatic replies allowed in a row before the human is asked
    pub max_consecutive_auto_reply: Option<u32>,
    pub default_auto_reply: String,
    consecutive_auto_replies: u32,
    human_input: Arc<dyn HumanInput>,
}

impl UserProxyAgent {
    pub fn new(
        name: &str,
        system_message: &str,
        human_input_mode: HumanInputMode,
        human_input: Arc<dyn HumanInput>,
    ) -> Self {
        Self {
            name: name.to_string(),
            system_message: system_message.to_string(),
            human_input_mode,
            max_consecutive_auto_reply: None,
            default_auto_reply: String::new(),
            consecutive_auto_replies: 0,
            human_input,
        }
    }

    pub fn with_max_consecutive_auto_reply(mut self, max: Option<u32>) -> Self {
        self.max_consecutive_auto_reply = max;
        self
    }

    pub fn with_default_auto_reply(mut self, reply: &str) -> Self {
        self.default_auto_reply = reply.to_string();
        self
    }

    fn auto_reply_exhausted(&self) -> bool {
        self.max_consecutive_auto_reply
            .map_or(false, |max| self.consecutive_auto_replies >= max)
    }

    fn auto_reply(&mut self) -> AgentReply {
        self.consecutive_auto_replies += 1;
        debug!(
            "{}: auto reply #{}",
            self.name, self.consecutive_auto_replies
        );
        AgentReply::Message(self.default_auto_reply.clone())
    }
}

#[async_trait]
impl ConversableAgent for UserProxyAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AgentKind {
        AgentKind::UserProxy
    }

    fn system_message(&self) -> &str {
        &self.system_message
    }

    async fn generate_reply(&mut self, history: &[GroupMessage]) -> Result<AgentReply> {
        let last = history.last();

        match self.human_input_mode {
            HumanInputMode::Always => match self.human_input.ask(&self.name, last)? {
                Some(text) if text.trim() == HUMAN_EXIT_COMMAND => {
                    info!("{}: human ended the conversation", self.name);
                    Ok(AgentReply::Terminate)
                }
                Some(text) if !text.trim().is_empty() => {
                    self.consecutive_auto_replies = 0;
                    Ok(AgentReply::Message(text))
                }
                _ => Ok(self.auto_reply()),
            },
            HumanInputMode::Terminate if self.auto_reply_exhausted() => {
                match self.human_input.ask(&self.name, last)? {
                    Some(text)
                        if !text.trim().is_empty() && text.trim() != HUMAN_EXIT_COMMAND =>
                    {
                        self.consecutive_auto_replies = 0;
                        Ok(AgentReply::Message(text))
                    }
                    _ => {
                        info!("{}: no human input, ending the conversation", self.name);
                        Ok(AgentReply::Terminate)
                    }
                }
            }
            HumanInputMode::Never if self.auto_reply_exhausted() => {
                info!(
                    "{}: {} automatic replies sent, ending the conversation",
                    self.name, self.consecutive_auto_replies
                );
                Ok(AgentReply::Terminate)
            }
            HumanInputMode::Terminate | HumanInputMode::Never => Ok(self.auto_reply()),
        }
    }
}
