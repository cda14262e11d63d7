/// Represents a chat message with a role and content
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    /// Role of the message sender (e.g. "system", "user", "assistant")
    pub role: String,
    /// Content/text of the message
    pub content: String,
    /// Name of the participant who wrote the message, when it is not the model itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChatMessage {
    /// Creates a new chat message
    ///
    /// # Arguments
    /// * `role` - Role of the message sender
    /// * `content` - Content/text of the message
    ///
    /// # Returns
    /// * `ChatMessage` - New chat message instance
    pub fn new(role: &str, content: &str) -> Self {
        ChatMessage {
            role: role.to_string(),
            content: content.to_string(),
            name: None,
        }
    }

    /// Attaches the participant name to the message
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Copy of the message without the participant name, for APIs that reject it
    pub fn unnamed(&self) -> Self {
        ChatMessage {
            role: self.role.clone(),
            content: self.content.clone(),
            name: None,
        }
    }
}
