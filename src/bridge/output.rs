use crate::chat::GroupMessage;
use serde::Serialize;
use tracing::error;

/// One transcript entry as printed on stdout
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FormattedMessage {
    pub role: String,
    pub content: String,
    pub sender: String,
    /// Always null: messages are not timestamped
    pub timestamp: Option<String>,
}

impl From<&GroupMessage> for FormattedMessage {
    fn from(msg: &GroupMessage) -> Self {
        FormattedMessage {
            role: msg.kind.as_role().to_string(),
            content: msg.content.clone(),
            sender: msg.sender.clone(),
            timestamp: None,
        }
    }
}

/// Result envelope of `run_conversation`
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ConversationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub messages: Vec<FormattedMessage>,
    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl ConversationResult {
    pub fn succeeded(session_id: &str, messages: &[GroupMessage]) -> Self {
        ConversationResult {
            success: true,
            error: None,
            messages: messages.iter().map(FormattedMessage::from).collect(),
            session_id: Some(session_id.to_string()),
        }
    }

    pub fn failed(error: String) -> Self {
        ConversationResult {
            success: false,
            error: Some(error),
            messages: Vec::new(),
            session_id: None,
        }
    }
}

/// Result of `check_installation`
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct InstallationReport {
    pub installed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub status: String,
}

/// Body printed for command-line usage errors
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct UsageErrorBody {
    pub error: String,
}

/// Writes `value` to stdout as a single JSON line
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize output: {}", e);
            println!("{}", serde_json::json!({ "error": e.to_string() }));
        }
    }
}
