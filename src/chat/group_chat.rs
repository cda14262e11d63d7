use super::GroupMessage;
use crate::agents::ConversableAgent;

/// Participants, shared history and limits of one conversation
#[derive(Debug)]
pub struct GroupChat {
    /// Participants, in round-robin order
    pub agents: Vec<Box<dyn ConversableAgent>>,
    /// Shared history, oldest first
    pub messages: Vec<GroupMessage>,
    /// Maximum number of messages, opening message included
    pub max_round: usize,
    /// A message ending with this keyword ends the chat
    pub termination_keyword: String,
}

impl GroupChat {
    /// Creates a new GroupChat with an empty history
    ///
    /// # Arguments
    ///
    /// * `agents` - Participants, in round-robin order
    /// * `max_round` - Message limit; 0 is treated as 1
    /// * `termination_keyword` - Keyword ending the chat; empty disables it
    pub fn new(
        agents: Vec<Box<dyn ConversableAgent>>,
        max_round: usize,
        termination_keyword: &str,
    ) -> Self {
        GroupChat {
            agents,
            messages: Vec::new(),
            max_round: max_round.max(1),
            termination_keyword: termination_keyword.trim().to_string(),
        }
    }

    pub fn agent_names(&self) -> Vec<&str> {
        self.agents.iter().map(|a| a.name()).collect()
    }

    /// Index of the agent speaking after `last`
    pub fn next_speaker(&self, last: usize) -> usize {
        (last + 1) % self.agents.len()
    }

    /// Whether `content` ends the conversation
    pub fn is_termination_msg(&self, content: &str) -> bool {
        !self.termination_keyword.is_empty()
            && content.trim_end().ends_with(&self.termination_keyword)
    }

    /// Appends a message written by the agent at `speaker`
    pub fn append(&mut self, speaker: usize, content: String) {
        let agent = &self.agents[speaker];
        self.messages.push(GroupMessage {
            sender: agent.name().to_string(),
            kind: agent.kind(),
            content,
        });
    }
}
