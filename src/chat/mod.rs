//! Group chat: several agents taking turns on one shared history
//!
//! This module contains:
//! - The shared history and its limits (`GroupChat`)
//! - The turn loop driving a chat to completion (`GroupChatManager`)

mod group_chat;
mod manager;

pub use group_chat::*;
pub use manager::*;

use crate::agents::AgentKind;

/// One entry of the shared history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMessage {
    /// Name of the agent that wrote the message
    pub sender: String,
    /// Kind of the sending agent
    pub kind: AgentKind,
    pub content: String,
}
