use super::{AgentKind, AgentReply, ConversableAgent};
use crate::chat::GroupMessage;
use crate::errors::Result;
use crate::llm::{ChatMessage, LlmClient};
use async_trait::async_trait;
use tracing::debug;

/// Agent that answers every turn with an LLM completion.
///
/// The shared history is replayed from the agent's own point of view: its
/// earlier messages become `assistant` turns, everybody else's become `user`
/// turns prefixed with the sender's name.
#[derive(Debug)]
pub struct AssistantAgent {
    /// Display name, used as message sender
    pub name: String,
    /// System prompt sent ahead of the history
    pub system_message: String,
    /// Client for interacting with the language model
    pub llm_client: LlmClient,
}

impl AssistantAgent {
    /// Creates a new AssistantAgent instance
    ///
    /// # Arguments
    /// * `name` - Display name of the agent
    /// * `system_message` - System prompt of the agent
    /// * `llm_client` - Client bound to the agent's provider and model
    pub fn new(name: &str, system_message: &str, llm_client: LlmClient) -> Self {
        Self {
            name: name.to_string(),
            system_message: system_message.to_string(),
            llm_client,
        }
    }

    /// Builds the prompt sent to the LLM for the next turn
    pub fn build_prompt(&self, history: &[GroupMessage]) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        if !self.system_message.trim().is_empty() {
            messages.push(ChatMessage::new("system", &self.system_message));
        }
        for msg in history {
            if msg.sender == self.name {
                messages.push(ChatMessage::new("assistant", &msg.content));
            } else {
                messages.push(
                    ChatMessage::new("user", &format!("{}: {}", msg.sender, msg.content))
                        .with_name(&api_name(&msg.sender)),
                );
            }
        }
        messages
    }
}

/// Participant name restricted to the characters chat APIs accept for `name`
pub fn api_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect();
    if cleaned.is_empty() {
        "participant".to_string()
    } else {
        cleaned
    }
}

#[async_trait]
impl ConversableAgent for AssistantAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Assistant
    }

    fn system_message(&self) -> &str {
        &self.system_message
    }

    async fn generate_reply(&mut self, history: &[GroupMessage]) -> Result<AgentReply> {
        debug!(
            "{}: asking {} ({})",
            self.name,
            self.llm_client.provider_name(),
            self.llm_client.model()
        );
        let prompt = self.build_prompt(history);
        let reply = self.llm_client.call_llm_api(prompt).await?;
        Ok(AgentReply::Message(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_name_replaces_unsupported_characters() {
        assert_eq!(api_name("Product Manager"), "Product_Manager");
        assert_eq!(api_name("coder-1"), "coder-1");
        assert_eq!(api_name("研究员"), "___");
        assert_eq!(api_name(""), "participant");
        assert_eq!(api_name(&"x".repeat(80)).len(), 64);
    }
}
