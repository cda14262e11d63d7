use super::{GroupChat, GroupMessage};
use crate::agents::AgentReply;
use crate::errors::Result;
use tracing::{debug, info};

/// Drives a group chat from its opening message to its end
#[derive(Debug)]
pub struct GroupChatManager {
    pub groupchat: GroupChat,
}

impl GroupChatManager {
    pub fn new(groupchat: GroupChat) -> Self {
        GroupChatManager { groupchat }
    }

    /// Runs the chat, with the agent at `initiator` sending `message` first.
    ///
    /// Speakers then follow in round-robin order. The loop ends when the
    /// history holds `max_round` messages, when a message ends with the
    /// termination keyword, or when a speaker declines to reply.
    ///
    /// # Errors
    ///
    /// The first agent error aborts the chat and is returned as is.
    pub async fn initiate_chat(&mut self, initiator: usize, message: &str) -> Result<()> {
        let max_round = self.groupchat.max_round;
        let mut speaker = initiator;
        let mut content = message.to_string();

        info!(
            "Starting group chat: initiator={} agents={:?} max_round={}",
            self.groupchat.agents[initiator].name(),
            self.groupchat.agent_names(),
            max_round
        );

        for round in 0..max_round {
            let terminating = self.groupchat.is_termination_msg(&content);
            self.groupchat.append(speaker, content);
            debug!(
                "round {}: {} spoke",
                round + 1,
                self.groupchat.agents[speaker].name()
            );

            if terminating {
                info!("Termination keyword received after {} messages", round + 1);
                break;
            }
            if round + 1 == max_round {
                info!("Round limit of {} reached", max_round);
                break;
            }

            speaker = self.groupchat.next_speaker(speaker);
            let reply = self.groupchat.agents[speaker]
                .generate_reply(&self.groupchat.messages)
                .await?;
            match reply {
                AgentReply::Message(text) => content = text,
                AgentReply::Terminate => {
                    info!(
                        "{} ended the conversation after {} messages",
                        self.groupchat.agents[speaker].name(),
                        round + 1
                    );
                    break;
                }
            }
        }

        Ok(())
    }

    pub fn messages(&self) -> &[GroupMessage] {
        &self.groupchat.messages
    }

    pub fn into_messages(self) -> Vec<GroupMessage> {
        self.groupchat.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{AgentFactory, AgentKind};
    use crate::config::parse_session_config;
    use crate::test_support::{scripted_registry_with_log, PromptLog, ScriptedHumanInput};
    use std::sync::Arc;

    const TWO_AGENTS: &str = r#"{"id": "s", "agents": [
        {"id": "1", "role": "user", "name": "alice", "systemMessage": "relay"},
        {"id": "2", "role": "assistant", "name": "bob", "systemMessage": "You are Bob.", "llmConfig": {"provider": "scripted", "model": "bob"}}
    ]}"#;

    fn manager(json: &str, scripts: &[(&str, &[&str])], max_round: usize) -> (GroupChatManager, PromptLog) {
        let session = parse_session_config(json).unwrap();
        let (registry, log) = scripted_registry_with_log(scripts);
        let factory = AgentFactory::new(registry, Arc::new(ScriptedHumanInput::new(vec![])));
        let agents = factory.create_agents(&session).unwrap();
        let chat = GroupChat::new(agents, max_round, &session.termination_keyword);
        (GroupChatManager::new(chat), log)
    }

    #[tokio::test]
    async fn test_chat_runs_until_round_limit() {
        let (mut manager, _) = manager(TWO_AGENTS, &[], 5);
        manager.initiate_chat(0, "Write a haiku").await.unwrap();

        let senders: Vec<_> = manager.messages().iter().map(|m| m.sender.as_str()).collect();
        assert_eq!(senders, vec!["alice", "bob", "alice", "bob", "alice"]);
        assert_eq!(manager.messages()[0].content, "Write a haiku");
        assert_eq!(manager.messages()[1].content, "bob reply 1");
        assert_eq!(manager.messages()[3].content, "bob reply 2");
        assert_eq!(manager.messages()[2].kind, AgentKind::UserProxy);
    }

    #[tokio::test]
    async fn test_termination_keyword_ends_chat() {
        let (mut manager, _) = manager(TWO_AGENTS, &[("bob", &["Here it is. TERMINATE"])], 10);
        manager.initiate_chat(0, "Write a haiku").await.unwrap();

        let messages = manager.into_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].content, "Here it is. TERMINATE");
    }

    #[tokio::test]
    async fn test_single_round_keeps_only_opening_message() {
        let (mut manager, log) = manager(TWO_AGENTS, &[], 1);
        manager.initiate_chat(0, "hello").await.unwrap();

        assert_eq!(manager.messages().len(), 1);
        assert!(log.lock().unwrap().get("bob").unwrap().lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_declining_speaker_ends_chat() {
        let json = r#"{"id": "s", "agents": [
            {"id": "2", "role": "assistant", "name": "bob", "systemMessage": "", "llmConfig": {"provider": "scripted", "model": "bob"}},
            {"id": "1", "role": "user", "name": "alice", "systemMessage": "", "humanInputMode": "NEVER", "maxConsecutiveAutoReply": 0}
        ]}"#;
        let (mut manager, _) = manager(json, &[], 10);
        manager.initiate_chat(0, "status?").await.unwrap();

        assert_eq!(manager.messages().len(), 1);
        assert_eq!(manager.messages()[0].sender, "bob");
    }

    #[tokio::test]
    async fn test_assistant_sees_history_from_its_own_side() {
        let (mut manager, log) = manager(TWO_AGENTS, &[("bob", &["first", "second"])], 4);
        manager.initiate_chat(0, "go").await.unwrap();

        let log = log.lock().unwrap();
        let prompts = log.get("bob").unwrap().lock().unwrap();
        assert_eq!(prompts.len(), 2);

        let second = &prompts[1];
        assert_eq!(second[0].role, "system");
        assert_eq!(second[0].content, "You are Bob.");
        assert_eq!(second[1].role, "user");
        assert_eq!(second[1].content, "alice: go");
        assert_eq!(second[1].name.as_deref(), Some("alice"));
        assert_eq!(second[2].role, "assistant");
        assert_eq!(second[2].content, "first");
        assert_eq!(second[3].content, "alice: ");
    }

    #[tokio::test]
    async fn test_agent_error_aborts_chat() {
        let json = r#"{"id": "s", "agents": [
            {"id": "1", "role": "user", "name": "alice", "systemMessage": ""},
            {"id": "2", "role": "assistant", "name": "bob", "systemMessage": "", "llmConfig": {"provider": "failing"}}
        ]}"#;
        let (mut manager, _) = manager(json, &[], 10);
        let err = manager.initiate_chat(0, "hi").await.unwrap_err();
        assert!(err.to_string().contains("service unavailable"));
    }
}
