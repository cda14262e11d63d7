use super::SessionConfig;
use crate::errors::Result;

use tracing::info;

/// Parses a session configuration from its JSON text
///
/// # Arguments
///
/// * `json` - Session configuration as passed on the command line
///
/// # Errors
///
/// Returns an error if:
/// * The text is not valid JSON
/// * A required field (`id`, `agents`, or an agent's `id`, `role`, `name`,
///   `systemMessage`) is missing or has the wrong type
pub fn parse_session_config(json: &str) -> Result<SessionConfig> {
    let session: SessionConfig = serde_json::from_str(json)?;
    info!(
        "Loaded session configuration: {} ({} agents, max {} rounds)",
        session.id,
        session.agents.len(),
        session.max_rounds
    );
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HumanInputMode, LlmConfig};

    #[test]
    fn test_parse_minimal_session_uses_defaults() {
        let session = parse_session_config(
            r#"{
                "id": "s-1",
                "agents": [
                    {"id": "a1", "role": "user", "name": "alice", "systemMessage": "You relay questions."},
                    {"id": "a2", "role": "coder", "name": "bob", "systemMessage": "You write code."}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(session.id, "s-1");
        assert_eq!(session.max_rounds, 10);
        assert_eq!(session.termination_keyword, "TERMINATE");
        assert_eq!(session.agents.len(), 2);
        assert!(session.agents[0].is_user());
        assert!(!session.agents[1].is_user());
        assert_eq!(session.agents[0].human_input_mode, HumanInputMode::Terminate);
        assert_eq!(session.agents[1].effective_llm_config(), LlmConfig::default());
    }

    #[test]
    fn test_default_llm_config_constant() {
        let config = LlmConfig::default();
        assert_eq!(config.model, "gpt-4");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.request_timeout, 600);
        assert_eq!(config.seed, Some(42));
        assert!(config.provider.is_none());
    }

    #[test]
    fn test_partial_llm_config_fills_missing_fields() {
        let session = parse_session_config(
            r#"{
                "id": "s-2",
                "maxRounds": 4,
                "agents": [
                    {"id": "a1", "role": "assistant", "name": "bob", "systemMessage": "hi",
                     "llmConfig": {"model": "claude-3-5-sonnet-latest", "temperature": 0.9, "requestTimeout": 30, "maxTokens": 512}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(session.max_rounds, 4);
        let llm = session.agents[0].effective_llm_config();
        assert_eq!(llm.model, "claude-3-5-sonnet-latest");
        assert_eq!(llm.temperature, 0.9);
        assert_eq!(llm.request_timeout, 30);
        assert_eq!(llm.max_tokens, Some(512));
        assert_eq!(llm.seed, Some(42));
    }

    #[test]
    fn test_user_proxy_options() {
        let session = parse_session_config(
            r#"{
                "id": "s-3",
                "terminationKeyword": "DONE",
                "agents": [
                    {"id": "a1", "role": "user", "name": "alice", "systemMessage": "",
                     "humanInputMode": "NEVER", "maxConsecutiveAutoReply": 2, "defaultAutoReply": "continue"}
                ]
            }"#,
        )
        .unwrap();

        let agent = &session.agents[0];
        assert_eq!(session.termination_keyword, "DONE");
        assert_eq!(agent.human_input_mode, HumanInputMode::Never);
        assert_eq!(agent.max_consecutive_auto_reply, Some(2));
        assert_eq!(agent.default_auto_reply, "continue");
    }

    #[test]
    fn test_missing_system_message_is_an_error() {
        let err = parse_session_config(
            r#"{"id": "s-4", "agents": [{"id": "a1", "role": "user", "name": "alice"}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("systemMessage"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(parse_session_config("{not json").is_err());
    }
}
