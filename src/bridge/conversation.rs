use super::ConversationResult;
use crate::agents::{AgentFactory, AgentKind, ConversableAgent};
use crate::chat::{GroupChat, GroupChatManager};
use crate::config::parse_session_config;
use crate::errors::Result;
use indicatif::ProgressBar;
use std::time::Duration;
use tracing::{error, info};

/// Runs one group conversation per call and reports it as a result envelope
#[derive(Debug)]
pub struct ConversationRunner {
    factory: AgentFactory,
    /// Spinner shown on stderr while the chat runs
    progress: ProgressBar,
}

impl ConversationRunner {
    pub fn new(factory: AgentFactory, progress: ProgressBar) -> Self {
        ConversationRunner { factory, progress }
    }

    /// Runs the conversation described by `session_config_json`, opening
    /// with `query`.
    ///
    /// Never fails: any error becomes a `success: false` envelope and no
    /// partial transcript is returned.
    pub async fn run_conversation(&self, query: &str, session_config_json: &str) -> ConversationResult {
        self.progress.set_message("Agents are talking...");
        self.progress.enable_steady_tick(Duration::from_millis(120));

        let result = match self.try_run(query, session_config_json).await {
            Ok(result) => result,
            Err(e) => {
                error!("Conversation failed: {}", e);
                ConversationResult::failed(e.to_string())
            }
        };

        self.progress.finish_and_clear();
        result
    }

    async fn try_run(&self, query: &str, session_config_json: &str) -> Result<ConversationResult> {
        let session = parse_session_config(session_config_json)?;
        let agents = self.factory.create_agents(&session)?;
        let initiator = select_initiator(&agents);

        let groupchat = GroupChat::new(agents, session.max_rounds, &session.termination_keyword);
        let mut manager = GroupChatManager::new(groupchat);
        manager.initiate_chat(initiator, query).await?;

        info!(
            "Conversation {} finished with {} messages",
            session.id,
            manager.messages().len()
        );
        let messages = manager.into_messages();
        Ok(ConversationResult::succeeded(&session.id, &messages))
    }
}

/// Index of the first user proxy, or of the first agent when there is none
pub fn select_initiator(agents: &[Box<dyn ConversableAgent>]) -> usize {
    agents
        .iter()
        .position(|agent| agent.kind() == AgentKind::UserProxy)
        .unwrap_or(0)
}
